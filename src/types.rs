//! Shared types: [`ByteOrder`], [`HeaderKind`], and [`HeaderValue`].

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

/// Byte order of the binary header words and samples in a SAC file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

impl ByteOrder {
    /// Byte order of the running machine.
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }

    pub(crate) fn describe(self) -> &'static str {
        match self {
            Self::Little => "little-endian",
            Self::Big => "big-endian",
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Little => write!(f, "little"),
            Self::Big => write!(f, "big"),
        }
    }
}

/// Semantic type of a header field.
///
/// Float and relative-time fields live in the float array; integer, logical
/// and enumerated fields live in the integer array; text fields live in the
/// string array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    Float,
    /// Float offset in seconds from the reference time.
    RelativeTime,
    Int,
    /// Integer restricted to 0 (false) and 1 (true).
    Bool,
    /// Integer code drawn from the field's accepted symbols.
    Enum,
    Str,
}

impl HeaderKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::RelativeTime => "relative time",
            Self::Int => "integer",
            Self::Bool => "logical",
            Self::Enum => "enumerated",
            Self::Str => "string",
        }
    }
}

impl fmt::Display for HeaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed header value, as returned by [`SacTrace::get`](crate::SacTrace::get)
/// and accepted by [`SacTrace::set`](crate::SacTrace::set).
///
/// Enumerated headers are read and written as their symbolic name through
/// [`HeaderValue::Text`]. [`HeaderValue::Time`] is only accepted by
/// relative-time headers, which store its offset from the reference time.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    Float(f32),
    Int(i32),
    Bool(bool),
    Text(String),
    Time(DateTime<Utc>),
}

impl HeaderValue {
    pub(crate) fn shape(&self) -> &'static str {
        match self {
            Self::Float(_) => "float",
            Self::Int(_) => "integer",
            Self::Bool(_) => "logical",
            Self::Text(_) => "text",
            Self::Time(_) => "absolute time",
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match *self {
            Self::Float(v) => Some(v),
            Self::Int(v) => Some(v as f32),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match *self {
            Self::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
            Self::Time(t) => f.write_str(&t.to_rfc3339_opts(SecondsFormat::Micros, true)),
        }
    }
}

impl From<f32> for HeaderValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for HeaderValue {
    fn from(v: f64) -> Self {
        Self::Float(v as f32)
    }
}

impl From<i32> for HeaderValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for HeaderValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for HeaderValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for HeaderValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<DateTime<Utc>> for HeaderValue {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Time(v)
    }
}
