//! Five elements (wu xing) and yin/yang polarity.
//!
//! The elements form two fixed directed 5-cycles:
//! - generation: Wood → Fire → Earth → Metal → Water → Wood
//! - control:    Wood → Earth → Water → Fire → Metal → Wood
//!
//! Both cycles are stored as length-5 target tables indexed by element
//! ordinal, so every element has exactly one target in each.

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Element {
    Wood = 0,
    Fire = 1,
    Earth = 2,
    Metal = 3,
    Water = 4,
}

/// All 5 elements in generation order (0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

/// Generation targets: `GENERATES[e]` is the element that `e` produces.
const GENERATES: [Element; 5] = [
    Element::Fire,  // Wood feeds Fire
    Element::Earth, // Fire makes ash
    Element::Metal, // Earth bears ore
    Element::Water, // Metal collects dew
    Element::Wood,  // Water nourishes Wood
];

/// Control targets: `CONTROLS[e]` is the element that `e` overcomes.
const CONTROLS: [Element; 5] = [
    Element::Earth, // Wood parts Earth
    Element::Metal, // Fire melts Metal
    Element::Water, // Earth dams Water
    Element::Wood,  // Metal cuts Wood
    Element::Fire,  // Water quenches Fire
];

/// How one element stands toward another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRelation {
    /// Both are the same element.
    Same,
    /// The subject generates the other.
    Generates,
    /// The subject controls the other.
    Controls,
    /// The other controls the subject.
    ControlledBy,
    /// The other generates the subject.
    GeneratedBy,
}

impl Element {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Element at a 0-based index, or `None` if out of range.
    pub const fn from_index(idx: u8) -> Option<Self> {
        if idx < 5 {
            Some(ALL_ELEMENTS[idx as usize])
        } else {
            None
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Han character.
    pub const fn han(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// The element this one generates.
    pub const fn generation_target(self) -> Element {
        GENERATES[self as usize]
    }

    /// The element this one controls.
    pub const fn control_target(self) -> Element {
        CONTROLS[self as usize]
    }

    /// Whether `self` generates `other`.
    pub const fn generates(self, other: Element) -> bool {
        self.generation_target() as u8 == other as u8
    }

    /// Whether `self` controls `other`.
    pub const fn controls(self, other: Element) -> bool {
        self.control_target() as u8 == other as u8
    }

    /// Relation of `self` toward `other`.
    ///
    /// Exactly one variant applies to any ordered pair: with five elements,
    /// the other four sit at cycle distances 1..=4 of the generation cycle,
    /// which are generates, controls, controlled-by and generated-by.
    pub const fn relation_to(self, other: Element) -> ElementRelation {
        match (other as u8 + 5 - self as u8) % 5 {
            0 => ElementRelation::Same,
            1 => ElementRelation::Generates,
            2 => ElementRelation::Controls,
            3 => ElementRelation::ControlledBy,
            _ => ElementRelation::GeneratedBy,
        }
    }
}

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Polarity of a cycle index: even is Yang, odd is Yin.
    pub const fn from_index(idx: u8) -> Self {
        if idx % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }

    /// Han character.
    pub const fn han(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }

    /// The other polarity.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Yang => Self::Yin,
            Self::Yin => Self::Yang,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
            assert_eq!(Element::from_index(i as u8), Some(*e));
        }
        assert_eq!(Element::from_index(5), None);
    }

    #[test]
    fn names_nonempty() {
        for e in ALL_ELEMENTS {
            assert!(!e.name().is_empty());
            assert!(!e.han().is_empty());
        }
    }

    #[test]
    fn generation_cycle() {
        assert!(Element::Wood.generates(Element::Fire));
        assert!(Element::Fire.generates(Element::Earth));
        assert!(Element::Earth.generates(Element::Metal));
        assert!(Element::Metal.generates(Element::Water));
        assert!(Element::Water.generates(Element::Wood));
        assert!(!Element::Fire.generates(Element::Wood));
    }

    #[test]
    fn control_cycle() {
        assert!(Element::Wood.controls(Element::Earth));
        assert!(Element::Earth.controls(Element::Water));
        assert!(Element::Water.controls(Element::Fire));
        assert!(Element::Fire.controls(Element::Metal));
        assert!(Element::Metal.controls(Element::Wood));
        assert!(!Element::Earth.controls(Element::Wood));
    }

    #[test]
    fn each_element_has_one_target_per_cycle() {
        for e in ALL_ELEMENTS {
            let gen_count = ALL_ELEMENTS.iter().filter(|&&o| e.generates(o)).count();
            let ctl_count = ALL_ELEMENTS.iter().filter(|&&o| e.controls(o)).count();
            assert_eq!(gen_count, 1, "{e:?}");
            assert_eq!(ctl_count, 1, "{e:?}");
        }
    }

    #[test]
    fn relation_agrees_with_tables() {
        for a in ALL_ELEMENTS {
            for b in ALL_ELEMENTS {
                let expected = if a == b {
                    ElementRelation::Same
                } else if a.generates(b) {
                    ElementRelation::Generates
                } else if a.controls(b) {
                    ElementRelation::Controls
                } else if b.controls(a) {
                    ElementRelation::ControlledBy
                } else {
                    assert!(b.generates(a), "{a:?} -> {b:?} falls through");
                    ElementRelation::GeneratedBy
                };
                assert_eq!(a.relation_to(b), expected, "{a:?} -> {b:?}");
            }
        }
    }

    #[test]
    fn polarity_parity() {
        assert_eq!(Polarity::from_index(0), Polarity::Yang);
        assert_eq!(Polarity::from_index(7), Polarity::Yin);
        assert_eq!(Polarity::Yang.opposite(), Polarity::Yin);
    }
}
