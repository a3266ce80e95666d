//! Heavenly stems (tian gan), the 10-cycle.
//!
//! Stems pair up by element in index order (Jia/Yi Wood, Bing/Ding Fire,
//! Wu/Ji Earth, Geng/Xin Metal, Ren/Gui Water); within each pair the even
//! index is Yang and the odd index is Yin.

use crate::element::{ALL_ELEMENTS, Element, Polarity};
use crate::util::{forward_distance, wrap};

/// Number of stems in the cycle.
pub const STEM_COUNT: u8 = 10;

/// The 10 heavenly stems starting from Jia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Stem {
    Jia = 0,
    Yi = 1,
    Bing = 2,
    Ding = 3,
    Wu = 4,
    Ji = 5,
    Geng = 6,
    Xin = 7,
    Ren = 8,
    Gui = 9,
}

/// All 10 stems in order (0 = Jia, 9 = Gui).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const HAN_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl Stem {
    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at any integer position; wraps modulo 10.
    pub const fn from_index(idx: i64) -> Self {
        ALL_STEMS[wrap(idx, STEM_COUNT) as usize]
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Han character.
    pub const fn han(self) -> &'static str {
        HAN_NAMES[self as usize]
    }

    /// Parse a stem from its pinyin name (case-insensitive) or Han character.
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim();
        ALL_STEMS
            .into_iter()
            .find(|st| st.han() == s || st.name().eq_ignore_ascii_case(s))
    }

    /// Element of the stem.
    pub const fn element(self) -> Element {
        ALL_ELEMENTS[(self as usize) / 2]
    }

    /// Polarity of the stem (even index is Yang).
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self as u8)
    }

    /// The stem `steps` positions later in the cycle. Negative steps go back.
    pub const fn forward(self, steps: i64) -> Self {
        Self::from_index(self as i64 + steps)
    }

    /// The stem `steps` positions earlier in the cycle.
    pub const fn backward(self, steps: i64) -> Self {
        Self::from_index(self as i64 - steps)
    }

    /// Forward distance from `self` to `other` (0..=9).
    pub const fn distance_to(self, other: Stem) -> u8 {
        forward_distance(self as u8, other as u8, STEM_COUNT)
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [Stem; 10] {
        &ALL_STEMS
    }
}
