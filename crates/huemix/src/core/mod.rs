mod contrast;
mod conversion;
mod string;

// contrast
pub(crate) use contrast::{contrast_ratio, relative_luminance};

// conversion
pub(crate) use conversion::{clamp_percent, hsl_to_rgb, rgb_to_hsl, wrap_hue};

// string
pub(crate) use string::{format_hex, parse_hex};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro compares the two quantities up to an epsilon, which defaults
/// to 1e-6. Its panic message places the numbers below each other at the
/// beginning of subsequent lines for easy comparability.
#[macro_export]
macro_rules! assert_close_to {
    ($f1:expr, $f2:expr $(,)?) => {
        $crate::assert_close_to!($f1, $f2, 1e-6);
    };
    ($f1:expr, $f2:expr, $epsilon:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        assert!(
            (f1 - f2).abs() <= $epsilon,
            "quantities differ:\n{:?}\n{:?}",
            f1,
            f2
        );
    };
}
