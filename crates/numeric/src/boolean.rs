//! Boolean helpers

use rand::Rng;

/// Integer view and toggling for `bool`.
pub trait BoolExt {
    /// `1` for `true`, `0` for `false`.
    fn as_int(&self) -> i32;

    /// The negated value.
    fn toggled(&self) -> bool;
}

impl BoolExt for bool {
    fn as_int(&self) -> i32 {
        i32::from(*self)
    }

    fn toggled(&self) -> bool {
        !*self
    }
}

/// A uniformly random boolean.
pub fn random_bool() -> bool {
    rand::thread_rng().gen_bool(0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_int() {
        assert_eq!(true.as_int(), 1);
        assert_eq!(false.as_int(), 0);
    }

    #[test]
    fn test_toggled() {
        assert!(false.toggled());
        assert!(!true.toggled());
        assert!(true.toggled().toggled());
    }

    #[test]
    fn test_random_bool_produces_both_values() {
        let draws: Vec<bool> = (0..256).map(|_| random_bool()).collect();
        assert!(draws.contains(&true));
        assert!(draws.contains(&false));
    }
}
