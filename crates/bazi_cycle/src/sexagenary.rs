//! Sexagenary (jia zi) cycle: stem/branch pillars and the combined 60-cycle.
//!
//! Stems advance mod 10 and branches mod 12 in lockstep, so the combined
//! cycle has lcm(10, 12) = 60 positions. Index `i` decodes to
//! `(Stem(i mod 10), Branch(i mod 12))`. Only the 60 pairs whose stem and
//! branch share parity occur; the other 60 of the 120 possible pairs are
//! representable as [`Pillar`] values but have no index.

use std::fmt::{Display, Formatter};

use crate::branch::Branch;
use crate::error::CycleError;
use crate::hidden_stems::{dominant_hidden_stem, hidden_stems};
use crate::stem::Stem;
use crate::util::wrap;

/// Length of the combined stem/branch cycle.
pub const SEXAGENARY_COUNT: u8 = 60;

/// A stem/branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

/// Position on the 60-cycle, always in `[0, 60)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sexagenary(u8);

impl Sexagenary {
    /// Jia-Zi, the first position.
    pub const JIA_ZI: Self = Self(0);

    /// Position for any integer; wraps modulo 60.
    pub const fn new(index: i64) -> Self {
        Self(wrap(index, SEXAGENARY_COUNT))
    }

    /// 0-based index (0..=59).
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Stem at this position.
    pub const fn stem(self) -> Stem {
        Stem::from_index(self.0 as i64)
    }

    /// Branch at this position.
    pub const fn branch(self) -> Branch {
        Branch::from_index(self.0 as i64)
    }

    /// Decode to a pillar.
    pub const fn pillar(self) -> Pillar {
        Pillar::new(self.stem(), self.branch())
    }

    /// The position `steps` later in the cycle. Negative steps go back.
    pub const fn forward(self, steps: i64) -> Self {
        Self::new(self.0 as i64 + steps)
    }

    /// The position `steps` earlier in the cycle.
    pub const fn backward(self, steps: i64) -> Self {
        Self::new(self.0 as i64 - steps)
    }

    /// First position of the xun (decade of ten pillars) containing `self`.
    pub const fn xun_head(self) -> Self {
        Self(self.0 - self.0 % 10)
    }
}

impl Display for Sexagenary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pillar())
    }
}

/// Decode any integer index (normalized modulo 60) to a pillar.
pub const fn decode(index: i64) -> Pillar {
    Sexagenary::new(index).pillar()
}

/// Find the cycle position of a stem/branch pair.
///
/// Solves `i ≡ stem (mod 10)`, `i ≡ branch (mod 12)` in closed form as
/// `i = 6·stem − 5·branch (mod 60)`. The system has a solution only when
/// stem and branch share parity.
pub fn index_of(stem: Stem, branch: Branch) -> Result<Sexagenary, CycleError> {
    if stem.index() % 2 != branch.index() % 2 {
        return Err(CycleError::InvalidCombination { stem, branch });
    }
    Ok(Sexagenary::new(
        6 * stem.index() as i64 - 5 * branch.index() as i64,
    ))
}

/// The two void (kong wang) branches of a day pillar's xun.
///
/// The xun containing the pillar starts at the branch
/// `(branch - stem) mod 12`; its ten pillars skip the two branches just
/// before that head, which are returned in cycle order.
pub const fn void_branches(stem: Stem, branch: Branch) -> (Branch, Branch) {
    let head = branch.backward(stem.index() as i64);
    (head.backward(2), head.backward(1))
}

impl Pillar {
    /// Create a pillar. Any pair is accepted; see [`Pillar::is_cyclic`].
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Whether the pair occurs on the 60-cycle (matching parity).
    pub const fn is_cyclic(self) -> bool {
        self.stem.index() % 2 == self.branch.index() % 2
    }

    /// Advance stem and branch together by `steps`. A cyclic pillar stays
    /// cyclic and moves `steps` positions along the 60-cycle.
    pub const fn forward(self, steps: i64) -> Self {
        Self::new(self.stem.forward(steps), self.branch.forward(steps))
    }

    /// Step stem and branch back together by `steps`.
    pub const fn backward(self, steps: i64) -> Self {
        Self::new(self.stem.backward(steps), self.branch.backward(steps))
    }

    /// Cycle position of the pillar.
    pub fn sexagenary(self) -> Result<Sexagenary, CycleError> {
        index_of(self.stem, self.branch)
    }

    /// Hidden stems of the pillar's branch, dominant first.
    pub const fn hidden_stems(self) -> &'static [Stem] {
        hidden_stems(self.branch)
    }

    /// Dominant hidden stem of the pillar's branch.
    pub const fn dominant_hidden_stem(self) -> Stem {
        dominant_hidden_stem(self.branch)
    }

    /// Void branches of the xun this pillar belongs to.
    pub const fn void_branches(self) -> (Branch, Branch) {
        void_branches(self.stem, self.branch)
    }

    /// Pinyin name, e.g. `"Geng-Chen"`.
    pub fn name(self) -> String {
        format!("{}-{}", self.stem.name(), self.branch.name())
    }

    /// Han characters, e.g. `"庚辰"`.
    pub fn han(self) -> String {
        format!("{}{}", self.stem.han(), self.branch.han())
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.han(), self.branch.han())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;
    use crate::stem::ALL_STEMS;

    #[test]
    fn decode_first_and_last() {
        assert_eq!(decode(0), Pillar::new(Stem::Jia, Branch::Zi));
        assert_eq!(decode(59), Pillar::new(Stem::Gui, Branch::Hai));
    }

    #[test]
    fn decode_normalizes_negative() {
        assert_eq!(decode(-1), decode(59));
        assert_eq!(decode(-60), decode(0));
        assert_eq!(decode(-61), decode(59));
        assert_eq!(decode(125), decode(5));
    }

    #[test]
    fn decode_components() {
        for i in 0..60i64 {
            let p = decode(i);
            assert_eq!(p.stem.index() as i64, i % 10);
            assert_eq!(p.branch.index() as i64, i % 12);
        }
    }

    #[test]
    fn index_of_round_trip() {
        for i in 0..60i64 {
            let p = decode(i);
            assert_eq!(index_of(p.stem, p.branch).map(|s| s.index() as i64), Ok(i));
        }
    }

    #[test]
    fn index_of_jia_chen_is_40() {
        assert_eq!(index_of(Stem::Jia, Branch::Chen), Ok(Sexagenary::new(40)));
    }

    #[test]
    fn index_of_rejects_mixed_parity() {
        assert_eq!(
            index_of(Stem::Jia, Branch::Chou),
            Err(CycleError::InvalidCombination {
                stem: Stem::Jia,
                branch: Branch::Chou,
            })
        );
        let rejected = ALL_STEMS
            .iter()
            .flat_map(|&s| ALL_BRANCHES.iter().map(move |&b| (s, b)))
            .filter(|&(s, b)| index_of(s, b).is_err())
            .count();
        assert_eq!(rejected, 60);
    }

    #[test]
    fn stepping_wraps() {
        assert_eq!(Sexagenary::new(59).forward(1), Sexagenary::JIA_ZI);
        assert_eq!(Sexagenary::JIA_ZI.backward(1).index(), 59);
        assert_eq!(Sexagenary::new(10).forward(-130).index(), 0);
    }

    #[test]
    fn pillar_stepping_tracks_index() {
        for i in 0..60i64 {
            for k in [-61i64, -1, 1, 7, 60] {
                assert_eq!(decode(i).forward(k), decode(i + k));
                assert_eq!(decode(i).backward(k), decode(i - k));
            }
        }
    }

    #[test]
    fn xun_head_is_jia() {
        for i in 0..60i64 {
            let head = Sexagenary::new(i).xun_head();
            assert_eq!(head.stem(), Stem::Jia);
            assert!(head.index() as i64 <= i && i - (head.index() as i64) < 10);
        }
    }

    #[test]
    fn void_branches_jia_zi_xun() {
        // Jia-Zi xun covers Zi..You, leaving Xu and Hai empty.
        assert_eq!(
            void_branches(Stem::Jia, Branch::Zi),
            (Branch::Xu, Branch::Hai)
        );
        assert_eq!(
            void_branches(Stem::Gui, Branch::You),
            (Branch::Xu, Branch::Hai)
        );
    }

    #[test]
    fn void_branches_jia_chen_xun() {
        // Jia-Chen xun: Chen..Chou, leaving Yin and Mao.
        assert_eq!(
            void_branches(Stem::Geng, Branch::Xu),
            (Branch::Yin, Branch::Mao)
        );
    }

    #[test]
    fn void_branches_not_in_xun() {
        for i in 0..60i64 {
            let s = Sexagenary::new(i);
            let (v1, v2) = s.pillar().void_branches();
            assert_eq!(v1.forward(1), v2);
            let head = s.xun_head();
            for k in 0..10 {
                let b = head.forward(k).branch();
                assert_ne!(b, v1);
                assert_ne!(b, v2);
            }
        }
    }

    #[test]
    fn pillar_names() {
        let p = Pillar::new(Stem::Geng, Branch::Chen);
        assert_eq!(p.name(), "Geng-Chen");
        assert_eq!(p.han(), "庚辰");
        assert_eq!(p.to_string(), "庚辰");
        assert!(p.is_cyclic());
        assert!(!Pillar::new(Stem::Geng, Branch::Mao).is_cyclic());
    }

    #[test]
    fn pillar_hidden_stems() {
        let p = Pillar::new(Stem::Wu, Branch::Yin);
        assert_eq!(p.hidden_stems(), &[Stem::Jia, Stem::Bing, Stem::Wu]);
        assert_eq!(p.dominant_hidden_stem(), Stem::Jia);
    }
}
