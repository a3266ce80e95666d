//! Hidden stems (cang gan) contained in each branch.
//!
//! Each branch holds one to three stems: the main qi first, then the middle
//! and residual qi where present. Relational lookups on a branch use the
//! first (dominant) entry.

use crate::branch::Branch;
use crate::stem::Stem;

/// Hidden stems per branch, indexed by branch ordinal, dominant first.
const HIDDEN_STEMS: [&[Stem]; 12] = [
    &[Stem::Gui],                       // Zi
    &[Stem::Ji, Stem::Gui, Stem::Xin],  // Chou
    &[Stem::Jia, Stem::Bing, Stem::Wu], // Yin
    &[Stem::Yi],                        // Mao
    &[Stem::Wu, Stem::Yi, Stem::Gui],   // Chen
    &[Stem::Bing, Stem::Wu, Stem::Geng], // Si
    &[Stem::Ding, Stem::Ji],            // Wu
    &[Stem::Ji, Stem::Ding, Stem::Yi],  // Wei
    &[Stem::Geng, Stem::Ren, Stem::Wu], // Shen
    &[Stem::Xin],                       // You
    &[Stem::Wu, Stem::Xin, Stem::Ding], // Xu
    &[Stem::Ren, Stem::Jia],            // Hai
];

/// Hidden stems of a branch, dominant first (1..=3 entries).
pub const fn hidden_stems(branch: Branch) -> &'static [Stem] {
    HIDDEN_STEMS[branch as usize]
}

/// The dominant (main-qi) hidden stem of a branch.
pub const fn dominant_hidden_stem(branch: Branch) -> Stem {
    HIDDEN_STEMS[branch as usize][0]
}
