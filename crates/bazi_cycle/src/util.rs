//! Shared cyclic-index helpers.

/// Normalize an integer to `[0, modulus)`.
///
/// Uses Euclidean remainder, so negative inputs wrap from the top
/// (`wrap(-1, 12) == 11`) instead of producing a negative remainder.
pub const fn wrap(value: i64, modulus: u8) -> u8 {
    value.rem_euclid(modulus as i64) as u8
}

/// Forward distance from `from` to `to` on a cycle of length `modulus`.
pub const fn forward_distance(from: u8, to: u8, modulus: u8) -> u8 {
    wrap(to as i64 - from as i64, modulus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_zero() {
        assert_eq!(wrap(0, 10), 0);
    }

    #[test]
    fn wrap_positive() {
        assert_eq!(wrap(7, 10), 7);
        assert_eq!(wrap(13, 12), 1);
    }

    #[test]
    fn wrap_exact_modulus() {
        assert_eq!(wrap(60, 60), 0);
    }

    #[test]
    fn wrap_negative() {
        assert_eq!(wrap(-1, 12), 11);
        assert_eq!(wrap(-10, 10), 0);
    }

    #[test]
    fn wrap_large_negative() {
        assert_eq!(wrap(-121, 60), 59);
    }

    #[test]
    fn distance_forward_and_across_zero() {
        assert_eq!(forward_distance(2, 5, 12), 3);
        assert_eq!(forward_distance(2, 0, 12), 10);
        assert_eq!(forward_distance(4, 4, 10), 0);
    }
}
