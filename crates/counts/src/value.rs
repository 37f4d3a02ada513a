//! Conversion of occurrence counts to `f64`.

use std::num::ParseFloatError;

/// A value that can be read as an occurrence count.
///
/// Implemented for every primitive integer type, `f32`, `f64`, `bool`
/// (`true` counts as 1), and for
/// `str`/`String`, which are trimmed and parsed as `f64`. References to any
/// implementor are implementors too, so `HashMap::iter()` and friends work
/// directly.
pub trait CountValue {
    /// Converts this value to an `f64` count.
    ///
    /// # Errors
    ///
    /// Returns the parse error for text that is not a number.
    fn to_count(&self) -> Result<f64, ParseFloatError>;

    /// Text used to report a failed conversion.
    fn describe(&self) -> String;
}

macro_rules! impl_count_value_lossy {
    ($($t:ty),* $(,)?) => {
        $(
            impl CountValue for $t {
                fn to_count(&self) -> Result<f64, ParseFloatError> {
                    Ok(*self as f64)
                }

                fn describe(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_count_value_lossy!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

impl CountValue for bool {
    fn to_count(&self) -> Result<f64, ParseFloatError> {
        Ok(if *self { 1.0 } else { 0.0 })
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl CountValue for str {
    fn to_count(&self) -> Result<f64, ParseFloatError> {
        self.trim().parse::<f64>()
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl CountValue for String {
    fn to_count(&self) -> Result<f64, ParseFloatError> {
        self.as_str().to_count()
    }

    fn describe(&self) -> String {
        self.clone()
    }
}

impl<T: CountValue + ?Sized> CountValue for &T {
    fn to_count(&self) -> Result<f64, ParseFloatError> {
        (**self).to_count()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
