//! Ten-God (shi shen) classification.
//!
//! Every stem is classified relative to the day stem ("self") by the
//! element relation between the two and whether their polarities match:
//!
//! | relation of self to other | same polarity   | opposite polarity |
//! |---------------------------|-----------------|-------------------|
//! | same element              | Peer            | RobWealth         |
//! | self generates other      | EatingGod       | HurtingOfficer    |
//! | self controls other       | IndirectWealth  | DirectWealth      |
//! | other controls self       | SevenKillings   | DirectOfficer     |
//! | other generates self      | IndirectSeal    | DirectSeal        |

use crate::element::ElementRelation;
use crate::stem::Stem;

/// The ten relational labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TenGod {
    Peer = 0,
    RobWealth = 1,
    EatingGod = 2,
    HurtingOfficer = 3,
    IndirectWealth = 4,
    DirectWealth = 5,
    SevenKillings = 6,
    DirectOfficer = 7,
    IndirectSeal = 8,
    DirectSeal = 9,
}

/// All 10 ten-gods in conventional order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Peer,
    TenGod::RobWealth,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::SevenKillings,
    TenGod::DirectOfficer,
    TenGod::IndirectSeal,
    TenGod::DirectSeal,
];

impl TenGod {
    /// 0-based index in conventional order.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Peer => "Peer",
            Self::RobWealth => "Rob Wealth",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::SevenKillings => "Seven Killings",
            Self::DirectOfficer => "Direct Officer",
            Self::IndirectSeal => "Indirect Seal",
            Self::DirectSeal => "Direct Seal",
        }
    }

    /// Han name.
    pub const fn han(self) -> &'static str {
        match self {
            Self::Peer => "比肩",
            Self::RobWealth => "劫财",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "伤官",
            Self::IndirectWealth => "偏财",
            Self::DirectWealth => "正财",
            Self::SevenKillings => "七杀",
            Self::DirectOfficer => "正官",
            Self::IndirectSeal => "偏印",
            Self::DirectSeal => "正印",
        }
    }

    /// Whether the label implies matching polarity with the day stem.
    pub const fn is_same_polarity(self) -> bool {
        self as u8 % 2 == 0
    }
}

/// Classify `other` relative to `day_stem`.
pub const fn ten_god(day_stem: Stem, other: Stem) -> TenGod {
    let same = day_stem.index() % 2 == other.index() % 2;
    match (day_stem.element().relation_to(other.element()), same) {
        (ElementRelation::Same, true) => TenGod::Peer,
        (ElementRelation::Same, false) => TenGod::RobWealth,
        (ElementRelation::Generates, true) => TenGod::EatingGod,
        (ElementRelation::Generates, false) => TenGod::HurtingOfficer,
        (ElementRelation::Controls, true) => TenGod::IndirectWealth,
        (ElementRelation::Controls, false) => TenGod::DirectWealth,
        (ElementRelation::ControlledBy, true) => TenGod::SevenKillings,
        (ElementRelation::ControlledBy, false) => TenGod::DirectOfficer,
        (ElementRelation::GeneratedBy, true) => TenGod::IndirectSeal,
        (ElementRelation::GeneratedBy, false) => TenGod::DirectSeal,
    }
}
