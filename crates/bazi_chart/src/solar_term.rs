//! Simplified solar-term (jie) month boundaries.
//!
//! Each Chinese solar month begins at a jie term. Instead of solving for
//! the Sun's true longitude, the boundaries are fixed calendar days that
//! hold to within a day or so for modern Gregorian years. Dates before a
//! month's cutover belong to the previous branch.

use bazi_cycle::Branch;

/// Calendar month of the spring (Lichun) boundary that opens the solar year.
pub const SPRING_CUTOVER_MONTH: u32 = 2;

/// Day of [`SPRING_CUTOVER_MONTH`] on which the solar year begins.
pub const SPRING_CUTOVER_DAY: u32 = 4;

/// One fixed month boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCutover {
    /// Gregorian month, 1..=12.
    pub month: u32,
    /// First day of the month that belongs to `branch`.
    pub day: u32,
    /// Month branch from `day` onward.
    pub branch: Branch,
    /// Pinyin name of the jie term.
    pub jie: &'static str,
    /// Han name of the jie term.
    pub jie_han: &'static str,
}

/// Boundaries indexed by Gregorian month - 1.
pub const MONTH_CUTOVERS: [MonthCutover; 12] = [
    cutover(1, 6, Branch::Chou, "Xiaohan", "小寒"),
    cutover(2, 4, Branch::Yin, "Lichun", "立春"),
    cutover(3, 6, Branch::Mao, "Jingzhe", "惊蛰"),
    cutover(4, 5, Branch::Chen, "Qingming", "清明"),
    cutover(5, 6, Branch::Si, "Lixia", "立夏"),
    cutover(6, 6, Branch::Wu, "Mangzhong", "芒种"),
    cutover(7, 7, Branch::Wei, "Xiaoshu", "小暑"),
    cutover(8, 8, Branch::Shen, "Liqiu", "立秋"),
    cutover(9, 8, Branch::You, "Bailu", "白露"),
    cutover(10, 8, Branch::Xu, "Hanlu", "寒露"),
    cutover(11, 7, Branch::Hai, "Lidong", "立冬"),
    cutover(12, 7, Branch::Zi, "Daxue", "大雪"),
];

const fn cutover(
    month: u32,
    day: u32,
    branch: Branch,
    jie: &'static str,
    jie_han: &'static str,
) -> MonthCutover {
    MonthCutover {
        month,
        day,
        branch,
        jie,
        jie_han,
    }
}

/// Boundary for a Gregorian month. Months outside 1..=12 wrap.
pub const fn month_cutover(month: u32) -> MonthCutover {
    MONTH_CUTOVERS[(month as usize + 11) % 12]
}

/// Whether a month/day falls before the spring boundary, i.e. still in
/// the previous solar year.
pub const fn is_before_spring(month: u32, day: u32) -> bool {
    month < SPRING_CUTOVER_MONTH || (month == SPRING_CUTOVER_MONTH && day < SPRING_CUTOVER_DAY)
}

/// Month branch of a calendar month/day.
pub const fn month_branch(month: u32, day: u32) -> Branch {
    let c = month_cutover(month);
    if day < c.day {
        c.branch.backward(1)
    } else {
        c.branch
    }
}
