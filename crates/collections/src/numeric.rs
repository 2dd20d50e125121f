//! Sums and averages

use std::iter::Sum;

/// Sum of all elements.
///
/// ```
/// assert_eq!(gn_collections::sum(&[1, 2, 3, 4, 5]), 15);
/// ```
pub fn sum<T: Copy + Sum>(items: &[T]) -> T {
    items.iter().copied().sum()
}

/// Average of floating-point slices.
pub trait FloatSliceExt<F> {
    /// Arithmetic mean, `0` for an empty slice.
    fn average(&self) -> F;
}

macro_rules! impl_average {
    ($($float:ty),*) => {
        $(
            impl FloatSliceExt<$float> for [$float] {
                fn average(&self) -> $float {
                    if self.is_empty() {
                        return 0.0;
                    }
                    self.iter().sum::<$float>() / self.len() as $float
                }
            }
        )*
    };
}

impl_average!(f32, f64);
