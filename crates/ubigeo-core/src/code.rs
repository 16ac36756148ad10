// crates/ubigeo-core/src/code.rs

//! # Code Validator
//!
//! Turns raw caller input into a canonical [`GeoCode`] and validates the
//! administrative level names accepted by the query surface.

use crate::error::{Result, UbigeoError};
use crate::model::Level;
use std::borrow::Cow;
use std::fmt;

/// Raw input accepted by code-based (and code-or-name) operations.
///
/// Callers rarely build this directly: every operation takes
/// `impl Into<Query>`, and the `From` impls cover string slices, owned
/// strings, every primitive integer type and `f64`. Floats exist only so
/// they can be rejected with a [`UbigeoError::Type`] error instead of being
/// silently truncated.
#[derive(Debug, Clone, PartialEq)]
pub enum Query<'a> {
    Text(Cow<'a, str>),
    Integer(i128),
    Float(f64),
}

impl Query<'_> {
    /// `true` when the input should be read as a code rather than a name:
    /// integers always, text only when its first character is a digit.
    pub fn looks_like_code(&self) -> bool {
        match self {
            Query::Text(s) => s.chars().next().is_some_and(|c| c.is_ascii_digit()),
            Query::Integer(_) => true,
            Query::Float(_) => false,
        }
    }

    /// Name of the input kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Query::Text(_) => "str",
            Query::Integer(_) => "int",
            Query::Float(_) => "float",
        }
    }
}

impl fmt::Display for Query<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Text(s) => f.write_str(s),
            Query::Integer(n) => write!(f, "{n}"),
            Query::Float(x) => write!(f, "{x}"),
        }
    }
}

impl<'a> From<&'a str> for Query<'a> {
    fn from(s: &'a str) -> Self {
        Query::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Query<'a> {
    fn from(s: &'a String) -> Self {
        Query::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Query<'_> {
    fn from(s: String) -> Self {
        Query::Text(Cow::Owned(s))
    }
}

impl<'a> From<&'a GeoCode> for Query<'a> {
    fn from(code: &'a GeoCode) -> Self {
        Query::Text(Cow::Borrowed(code.as_str()))
    }
}

impl From<f64> for Query<'_> {
    fn from(x: f64) -> Self {
        Query::Float(x)
    }
}

macro_rules! query_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Query<'_> {
                fn from(n: $t) -> Self {
                    Query::Integer(n as i128)
                }
            }
        )*
    };
}

query_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

/// A validated ubigeo: 2 (department), 4 (province) or 6 (district) digits.
///
/// Every code embeds the codes of the coarser levels as prefixes, so a
/// district code also answers [`GeoCode::department`] and
/// [`GeoCode::province`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeoCode(String);

impl GeoCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The finest level this code identifies.
    pub fn level(&self) -> Level {
        match self.0.len() {
            2 => Level::Departamentos,
            4 => Level::Provincias,
            _ => Level::Distritos,
        }
    }

    /// First two digits.
    pub fn department(&self) -> &str {
        &self.0[..2]
    }

    /// First four digits, if the code carries them.
    pub fn province(&self) -> Option<&str> {
        self.0.get(..4)
    }

    /// The full six digits, if the code carries them.
    pub fn district(&self) -> Option<&str> {
        (self.0.len() == 6).then_some(self.0.as_str())
    }
}

impl fmt::Display for GeoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GeoCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for GeoCode {
    type Err = UbigeoError;

    fn from_str(s: &str) -> Result<Self> {
        validate_code(s)
    }
}

/// Validates a raw code and returns its canonical fixed-width form.
///
/// - Text must contain only ASCII digits, otherwise [`UbigeoError::Format`].
/// - Negative integers fail with [`UbigeoError::Format`] (their decimal form
///   carries a `-`); floats fail with [`UbigeoError::Type`].
/// - Lengths 1, 3 and 5 are read as missing a leading zero and padded to 2,
///   4 and 6; lengths 2, 4 and 6 pass through; anything else is a
///   [`UbigeoError::Range`] error.
///
/// ```rust
/// use ubigeo_core::code::validate_code;
///
/// assert_eq!(validate_code("1").unwrap().as_str(), "01");
/// assert_eq!(validate_code(10101).unwrap().as_str(), "010101");
/// assert!(validate_code("15-01").is_err());
/// ```
pub fn validate_code<'a>(input: impl Into<Query<'a>>) -> Result<GeoCode> {
    let input = input.into();
    let digits: Cow<'_, str> = match &input {
        Query::Text(s) => Cow::Borrowed(s.as_ref()),
        Query::Integer(n) => Cow::Owned(n.to_string()),
        Query::Float(x) => {
            return Err(UbigeoError::Type(format!(
                "codes must be str or int, got float {x}"
            )))
        }
    };

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(UbigeoError::Format(format!(
            "code '{digits}' must contain only digits"
        )));
    }

    match digits.len() {
        1 | 3 | 5 => Ok(GeoCode(format!("0{digits}"))),
        2 | 4 | 6 => Ok(GeoCode(digits.into_owned())),
        0 => Err(UbigeoError::Range("code is empty".into())),
        n => Err(UbigeoError::Range(format!(
            "code '{digits}' has {n} digits, at most 6 are accepted"
        ))),
    }
}

/// Validates a level name, accepting the singular form.
///
/// Matching is case-sensitive: a trailing `s` is appended when missing and
/// the result must then be `departamentos`, `provincias` or `distritos`.
///
/// ```rust
/// use ubigeo_core::code::validate_level;
/// use ubigeo_core::Level;
///
/// assert_eq!(validate_level("provincia").unwrap(), Level::Provincias);
/// assert!(validate_level("Distritos").is_err());
/// ```
pub fn validate_level(input: &str) -> Result<Level> {
    let plural: Cow<'_, str> = if input.ends_with('s') {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(format!("{input}s"))
    };

    match plural.as_ref() {
        "departamentos" => Ok(Level::Departamentos),
        "provincias" => Ok(Level::Provincias),
        "distritos" => Ok(Level::Distritos),
        _ => Err(UbigeoError::InvalidLevel(input.to_string())),
    }
}
