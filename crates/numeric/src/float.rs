//! Floating-point helpers

/// Integer view of `f32` and `f64`.
pub trait FloatExt {
    /// Truncate toward zero. Out-of-range values saturate and NaN gives `0`.
    fn as_int(&self) -> i64;
}

macro_rules! impl_float_ext {
    ($($float:ty),*) => {
        $(
            impl FloatExt for $float {
                fn as_int(&self) -> i64 {
                    *self as i64
                }
            }
        )*
    };
}

impl_float_ext!(f32, f64);
