//! Types an environment value can be coerced into.

use crate::classify::BoolClassifier;

/// A type with an environment-string grammar.
///
/// `Default` supplies the zero value returned by [`Env::get`](crate::Env::get).
pub trait EnvValue: Sized + Default {
    /// Article and name used in parse errors, e.g. `"an integer"`.
    const EXPECTED: &'static str;

    /// Parse an already-resolved, non-empty value.
    fn parse_env(value: &str, classifier: &BoolClassifier) -> Option<Self>;
}

impl EnvValue for String {
    const EXPECTED: &'static str = "a string";

    fn parse_env(value: &str, _: &BoolClassifier) -> Option<Self> {
        Some(value.to_string())
    }
}

impl EnvValue for bool {
    const EXPECTED: &'static str = "a boolean";

    fn parse_env(value: &str, classifier: &BoolClassifier) -> Option<Self> {
        classifier.classify(value)
    }
}

macro_rules! from_str_value {
    ($expected:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl EnvValue for $ty {
                const EXPECTED: &'static str = $expected;

                fn parse_env(value: &str, _: &BoolClassifier) -> Option<Self> {
                    value.parse().ok()
                }
            }
        )+
    };
}

from_str_value!("an integer" => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl EnvValue for $ty {
                const EXPECTED: &'static str = "a float";

                fn parse_env(value: &str, _: &BoolClassifier) -> Option<Self> {
                    let parsed: $ty = value.parse().ok()?;
                    if parsed.is_infinite() && !is_infinity_spelling(value) {
                        return None;
                    }
                    Some(parsed)
                }
            }
        )+
    };
}

float_value!(f32, f64);

/// `inf` or `infinity`, any ASCII case, optionally signed. Anything else
/// that parses to infinity overflowed the target type.
fn is_infinity_spelling(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
