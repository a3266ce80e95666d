//! Earthly branches (di zhi), the 12-cycle, with their elements and
//! zodiac animals.

use crate::element::{Element, Polarity};
use crate::util::{forward_distance, wrap};

/// Number of branches in the cycle.
pub const BRANCH_COUNT: u8 = 12;

/// The 12 earthly branches starting from Zi (Rat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Branch {
    Zi = 0,
    Chou = 1,
    Yin = 2,
    Mao = 3,
    Chen = 4,
    Si = 5,
    Wu = 6,
    Wei = 7,
    Shen = 8,
    You = 9,
    Xu = 10,
    Hai = 11,
}

/// All 12 branches in order (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const HAN_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const ANIMAL_HAN_NAMES: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// Branch elements: water at Zi/Hai, wood at Yin/Mao, fire at Si/Wu,
/// metal at Shen/You, earth at the four season-end branches.
const ELEMENTS: [Element; 12] = [
    Element::Water, // Zi
    Element::Earth, // Chou
    Element::Wood,  // Yin
    Element::Wood,  // Mao
    Element::Earth, // Chen
    Element::Fire,  // Si
    Element::Fire,  // Wu
    Element::Earth, // Wei
    Element::Metal, // Shen
    Element::Metal, // You
    Element::Earth, // Xu
    Element::Water, // Hai
];

impl Branch {
    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at any integer position; wraps modulo 12.
    pub const fn from_index(idx: i64) -> Self {
        ALL_BRANCHES[wrap(idx, BRANCH_COUNT) as usize]
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Han character.
    pub const fn han(self) -> &'static str {
        HAN_NAMES[self as usize]
    }

    /// English name of the zodiac animal.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    /// Han character of the zodiac animal.
    pub const fn animal_han(self) -> &'static str {
        ANIMAL_HAN_NAMES[self as usize]
    }

    /// Parse a branch from its pinyin name (case-insensitive), Han character,
    /// or English animal name.
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim();
        ALL_BRANCHES.into_iter().find(|b| {
            b.han() == s || b.name().eq_ignore_ascii_case(s) || b.animal().eq_ignore_ascii_case(s)
        })
    }

    /// Element of the branch.
    pub const fn element(self) -> Element {
        ELEMENTS[self as usize]
    }

    /// Polarity of the branch (even index is Yang).
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self as u8)
    }

    /// The branch `steps` positions later in the cycle. Negative steps go back.
    pub const fn forward(self, steps: i64) -> Self {
        Self::from_index(self as i64 + steps)
    }

    /// The branch `steps` positions earlier in the cycle.
    pub const fn backward(self, steps: i64) -> Self {
        Self::from_index(self as i64 - steps)
    }

    /// Forward distance from `self` to `other` (0..=11).
    pub const fn distance_to(self, other: Branch) -> u8 {
        forward_distance(self as u8, other as u8, BRANCH_COUNT)
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}
