//! Integer helpers

/// Conversions and formatting for machine-word integers.
pub trait IntExt {
    /// Big-endian bytes right-aligned in `total` bytes: zero-padded at the
    /// front, or cut to the low-order bytes when `total` is smaller.
    fn bytes(&self, total: usize) -> Vec<u8>;

    /// Treat the value as degrees and convert to radians.
    fn degrees_to_radians(&self) -> f64;

    /// Treat the value as radians and convert to degrees.
    fn radians_to_degrees(&self) -> f64;

    /// Compact count: `"0k"` below a thousand, `"12k"` for thousands and
    /// `"3kk"` for millions, keeping the sign.
    fn k_formatted(&self) -> String;

    /// Decimal digits of the absolute value, most significant first.
    fn digits(&self) -> Vec<u8>;

    /// Number of decimal digits of the absolute value.
    fn digits_count(&self) -> usize;
}

/// Sign, parity and duration helpers for every signed integer type.
pub trait SignedExt {
    /// Strictly greater than zero.
    fn is_positive(&self) -> bool;

    /// Strictly less than zero.
    fn is_negative(&self) -> bool;

    /// Divisible by two.
    fn is_even(&self) -> bool;

    /// Not divisible by two.
    fn is_odd(&self) -> bool;

    /// Treat the value as seconds and render `"0 s"`, `"45 s"`, `"12 m"`,
    /// `"2h"` or `"2h 5m"`.
    fn time_string(&self) -> String;
}

/// Millions are counted in whole millions: `2_500_000` gives `"2kk"`.
fn k_format(value: i128) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let abs = value.unsigned_abs();
    match abs {
        0..=999 => "0k".to_string(),
        1_000..=999_999 => format!("{sign}{}k", abs / 1_000),
        _ => format!("{sign}{}kk", abs / 1_000_000),
    }
}

fn decimal_digits(value: i128) -> Vec<u8> {
    value
        .unsigned_abs()
        .to_string()
        .bytes()
        .map(|b| b - b'0')
        .collect()
}

fn time_string(seconds: i128) -> String {
    if seconds <= 0 {
        return "0 s".to_string();
    }
    if seconds < 60 {
        return format!("{seconds} s");
    }
    if seconds < 3600 {
        return format!("{} m", seconds / 60);
    }
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if minutes == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {minutes}m")
    }
}

macro_rules! impl_int_ext {
    ($($int:ty),*) => {
        $(
            impl IntExt for $int {
                fn bytes(&self, total: usize) -> Vec<u8> {
                    let be = self.to_be_bytes();
                    let kept = be.len().min(total);
                    let mut bytes = vec![0; total];
                    bytes[total - kept..].copy_from_slice(&be[be.len() - kept..]);
                    bytes
                }

                fn degrees_to_radians(&self) -> f64 {
                    std::f64::consts::PI * (*self as f64) / 180.0
                }

                fn radians_to_degrees(&self) -> f64 {
                    (*self as f64) * 180.0 / std::f64::consts::PI
                }

                fn k_formatted(&self) -> String {
                    k_format(i128::from(*self))
                }

                fn digits(&self) -> Vec<u8> {
                    decimal_digits(i128::from(*self))
                }

                fn digits_count(&self) -> usize {
                    self.digits().len()
                }
            }
        )*
    };
}

macro_rules! impl_signed_ext {
    ($($int:ty),*) => {
        $(
            impl SignedExt for $int {
                fn is_positive(&self) -> bool {
                    *self > 0
                }

                fn is_negative(&self) -> bool {
                    *self < 0
                }

                fn is_even(&self) -> bool {
                    *self % 2 == 0
                }

                fn is_odd(&self) -> bool {
                    *self % 2 != 0
                }

                fn time_string(&self) -> String {
                    time_string(*self as i128)
                }
            }
        )*
    };
}

impl_int_ext!(i32, i64);
impl_signed_ext!(i8, i16, i32, i64, i128, isize);

impl IntExt for isize {
    fn bytes(&self, total: usize) -> Vec<u8> {
        (*self as i64).bytes(total)
    }

    fn degrees_to_radians(&self) -> f64 {
        (*self as i64).degrees_to_radians()
    }

    fn radians_to_degrees(&self) -> f64 {
        (*self as i64).radians_to_degrees()
    }

    fn k_formatted(&self) -> String {
        (*self as i64).k_formatted()
    }

    fn digits(&self) -> Vec<u8> {
        (*self as i64).digits()
    }

    fn digits_count(&self) -> usize {
        (*self as i64).digits_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bytes() {
        assert_eq!(1i64.bytes(8), vec![0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(0x0102i64.bytes(4), vec![0, 0, 0x01, 0x02]);
        assert_eq!(0x0102i32.bytes(2), vec![0x01, 0x02]);
        assert_eq!(0x0102i32.bytes(6), vec![0, 0, 0, 0, 0x01, 0x02]);
        assert_eq!(0x0A0B_0C0Di32.bytes(2), vec![0x0C, 0x0D]);
        assert_eq!((-1i32).bytes(6), vec![0, 0, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(5i64.bytes(0), Vec::<u8>::new());
        assert_eq!(0x0102isize.bytes(3), vec![0, 0x01, 0x02]);
    }

    #[test]
    fn test_angles() {
        assert!((180i64.degrees_to_radians() - std::f64::consts::PI).abs() < 1e-12);
        assert!((3i32.radians_to_degrees() - 171.887_338_539_246_9).abs() < 1e-9);
    }

    #[test]
    fn test_k_formatted() {
        assert_eq!(0i64.k_formatted(), "0k");
        assert_eq!(999i64.k_formatted(), "0k");
        assert_eq!(1_000i64.k_formatted(), "1k");
        assert_eq!((-2_500i64).k_formatted(), "-2k");
        assert_eq!(100_000i32.k_formatted(), "100k");
        assert_eq!(1_000_000i64.k_formatted(), "1kk");
        assert_eq!(2_500_000i64.k_formatted(), "2kk");
        assert_eq!((-5_300_000i64).k_formatted(), "-5kk");
        assert_eq!(i64::MIN.k_formatted(), "-9223372036854kk");
    }

    #[test]
    fn test_digits() {
        assert_eq!(0i64.digits(), vec![0]);
        assert_eq!(123i64.digits(), vec![1, 2, 3]);
        assert_eq!((-450i32).digits(), vec![4, 5, 0]);
        assert_eq!(0i64.digits_count(), 1);
        assert_eq!(1_000i64.digits_count(), 4);
        assert_eq!((-99isize).digits_count(), 2);
    }

    #[test]
    fn test_sign_and_parity() {
        assert!(5i8.is_positive());
        assert!(!0i16.is_positive());
        assert!((-3i64).is_negative());
        assert!((-4i32).is_even());
        assert!((-3i32).is_odd());
        assert!(!2i128.is_odd());
    }

    #[test]
    fn test_time_string() {
        assert_eq!(0i64.time_string(), "0 s");
        assert_eq!((-10i64).time_string(), "0 s");
        assert_eq!(45i32.time_string(), "45 s");
        assert_eq!(59i8.time_string(), "59 s");
        assert_eq!(60i64.time_string(), "1 m");
        assert_eq!(3599i64.time_string(), "59 m");
        assert_eq!(3600i64.time_string(), "1h");
        assert_eq!(7_500i64.time_string(), "2h 5m");
    }

    proptest! {
        #[test]
        fn prop_bytes_match_big_endian(n in any::<i64>()) {
            prop_assert_eq!(n.bytes(8), n.to_be_bytes().to_vec());
            let wide = n.bytes(12);
            prop_assert_eq!(&wide[..4], &[0u8; 4]);
            prop_assert_eq!(&wide[4..], &n.to_be_bytes()[..]);
        }

        #[test]
        fn prop_digits_round_trip(n in any::<i64>()) {
            let digits = n.digits();
            prop_assert_eq!(digits.len(), n.digits_count());
            let rebuilt = digits.iter().fold(0u128, |acc, d| acc * 10 + u128::from(*d));
            prop_assert_eq!(rebuilt, u128::from(n.unsigned_abs()));
        }
    }
}
