use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

/// Target type of a conversion, used to label parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    F32,
    F64,
}

impl ValueKind {
    /// Name of the kind preceded by its indefinite article.
    pub fn with_article(self) -> String {
        match self {
            ValueKind::I8 => format!("an {self}"),
            _ => format!("a {self}"),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Bool => "boolean",
            ValueKind::I8 => "8-bit integer",
            ValueKind::I16 => "16-bit integer",
            ValueKind::I32 => "32-bit integer",
            ValueKind::I64 => "64-bit integer",
            ValueKind::Isize => "native-width integer",
            ValueKind::F32 => "32-bit float",
            ValueKind::F64 => "64-bit float",
        };
        f.write_str(name)
    }
}

/// Why a raw value could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseValueError {
    #[error(transparent)]
    Int(#[from] ParseIntError),
    #[error(transparent)]
    Float(#[from] ParseFloatError),
    #[error("number out of range for target type")]
    FloatOutOfRange,
    #[error("invalid boolean literal {0:?}")]
    Bool(String),
    #[error("value is not valid unicode")]
    NotUnicode,
}

/// Types an environment value can be converted into.
///
/// The set is closed to the kinds listed in [`ValueKind`]. `raw` is never
/// empty: the lookup rejects empty values before parsing.
pub trait FromEnvValue: Sized {
    const KIND: ValueKind;

    fn parse_env(raw: String) -> Result<Self, ParseValueError>;
}

impl FromEnvValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn parse_env(raw: String) -> Result<Self, ParseValueError> {
        Ok(raw)
    }
}

/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`, nothing else.
impl FromEnvValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn parse_env(raw: String) -> Result<Self, ParseValueError> {
        match raw.as_str() {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(ParseValueError::Bool(raw)),
        }
    }
}

// Base 10 with an optional sign; the width-specific parse rejects overflow.
macro_rules! impl_from_env_int {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl FromEnvValue for $ty {
            const KIND: ValueKind = ValueKind::$kind;

            fn parse_env(raw: String) -> Result<Self, ParseValueError> {
                Ok(raw.parse::<$ty>()?)
            }
        }
    )*};
}

impl_from_env_int!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
);

// A finite literal that rounds to infinity at the target width is out of range.
macro_rules! impl_from_env_float {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl FromEnvValue for $ty {
            const KIND: ValueKind = ValueKind::$kind;

            fn parse_env(raw: String) -> Result<Self, ParseValueError> {
                let value = raw.parse::<$ty>()?;
                if value.is_infinite() && !spells_infinity(&raw) {
                    return Err(ParseValueError::FloatOutOfRange);
                }
                Ok(value)
            }
        }
    )*};
}

impl_from_env_float!(f32 => F32, f64 => F64);

fn spells_infinity(raw: &str) -> bool {
    let unsigned = raw
        .strip_prefix('+')
        .or_else(|| raw.strip_prefix('-'))
        .unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

#[cfg(test)]
mod tests {
    use std::num::IntErrorKind;

    use super::*;

    fn parse<T: FromEnvValue>(raw: &str) -> Result<T, ParseValueError> {
        T::parse_env(raw.to_string())
    }

    #[test]
    fn bool_grammar() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse::<bool>(raw), Ok(true), "{raw}");
        }
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse::<bool>(raw), Ok(false), "{raw}");
        }
        for raw in ["notaboolean", "yes", "on", "tRUE", " true", "2"] {
            assert_eq!(
                parse::<bool>(raw),
                Err(ParseValueError::Bool(raw.to_string())),
                "{raw}"
            );
        }
    }

    fn overflow<T: fmt::Debug>(r: Result<T, ParseValueError>) -> IntErrorKind {
        match r {
            Err(ParseValueError::Int(e)) => e.kind().clone(),
            other => panic!("expected int error, got {other:?}"),
        }
    }

    #[test]
    fn int_widths_bound_exactly() {
        assert_eq!(parse::<i8>("127"), Ok(i8::MAX));
        assert_eq!(parse::<i8>("-128"), Ok(i8::MIN));
        assert_eq!(parse::<i16>("32767"), Ok(i16::MAX));
        assert_eq!(parse::<i32>("2147483647"), Ok(i32::MAX));
        assert_eq!(parse::<i64>("9223372036854775807"), Ok(i64::MAX));
        assert_eq!(parse::<i64>("-9223372036854775808"), Ok(i64::MIN));

        assert_eq!(overflow(parse::<i8>("128")), IntErrorKind::PosOverflow);
        assert_eq!(overflow(parse::<i16>("32768")), IntErrorKind::PosOverflow);
        assert_eq!(overflow(parse::<i16>("-32769")), IntErrorKind::NegOverflow);
        assert_eq!(
            overflow(parse::<i32>("2147483648")),
            IntErrorKind::PosOverflow
        );
        assert_eq!(
            overflow(parse::<i64>("9223372036854775808")),
            IntErrorKind::PosOverflow
        );
    }

    #[test]
    fn int_grammar_is_strict_base_ten() {
        assert_eq!(parse::<i32>("+10"), Ok(10));
        assert_eq!(parse::<i32>("-10"), Ok(-10));
        assert_eq!(parse::<i32>("007"), Ok(7));
        for raw in ["notaninteger", " 10", "10 ", "1_000", "1,000", "0x10", "1.0"] {
            assert!(
                matches!(parse::<i32>(raw), Err(ParseValueError::Int(_))),
                "{raw}"
            );
        }
    }

    #[test]
    fn native_int_uses_pointer_width() {
        assert_eq!(parse::<isize>(&isize::MAX.to_string()), Ok(isize::MAX));
        let too_big = (isize::MAX as i128 + 1).to_string();
        assert!(parse::<isize>(&too_big).is_err());
    }

    #[test]
    fn float_grammar() {
        assert_eq!(parse::<f64>("0.1"), Ok(0.1));
        assert_eq!(parse::<f32>("0.1"), Ok(0.1f32));
        assert_eq!(parse::<f64>("-2.5e3"), Ok(-2500.0));
        assert_eq!(parse::<f64>("1E-2"), Ok(0.01));
        assert_eq!(parse::<f64>("inf"), Ok(f64::INFINITY));
        assert_eq!(parse::<f32>("-Infinity"), Ok(f32::NEG_INFINITY));
        assert!(parse::<f64>("NaN").unwrap().is_nan());
        assert!(matches!(
            parse::<f64>("notafloat"),
            Err(ParseValueError::Float(_))
        ));
        assert!(matches!(
            parse::<f32>("1,5"),
            Err(ParseValueError::Float(_))
        ));
    }

    #[test]
    fn float_overflow_is_rejected_per_width() {
        assert_eq!(parse::<f64>("1e39"), Ok(1e39));
        assert_eq!(parse::<f32>("1e39"), Err(ParseValueError::FloatOutOfRange));
        assert_eq!(
            parse::<f64>("-1e400"),
            Err(ParseValueError::FloatOutOfRange)
        );
    }

    #[test]
    fn string_is_passed_through() {
        assert_eq!(parse::<String>(" bar "), Ok(" bar ".to_string()));
    }

    #[test]
    fn kind_names() {
        assert_eq!(ValueKind::I16.to_string(), "16-bit integer");
        assert_eq!(ValueKind::I16.with_article(), "a 16-bit integer");
        assert_eq!(ValueKind::I8.with_article(), "an 8-bit integer");
        assert_eq!(ValueKind::F64.to_string(), "64-bit float");
    }
}
