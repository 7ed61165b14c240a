//! Field kinds: the closed set of value types a field can declare.

use std::fmt;

use chrono::Datelike;
use regex::Regex;

use crate::error::{FormError, Result};

/// Lowest year accepted by [`YearRange::default`].
pub const DEFAULT_MIN_YEAR: i32 = 1900;
/// Highest year accepted by [`YearRange::default`].
pub const DEFAULT_MAX_YEAR: i32 = 2019;

/// Inclusive range of accepted years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    min: i32,
    max: i32,
}

impl YearRange {
    pub fn new(min: i32, max: i32) -> Result<Self> {
        if min > max {
            return Err(FormError::InvalidBounds {
                min: min.into(),
                max: max.into(),
            });
        }
        Ok(Self { min, max })
    }

    /// Range from `min` up to and including the current local year.
    pub fn through_current_year(min: i32) -> Result<Self> {
        Self::new(min, chrono::Local::now().year())
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, year: i64) -> bool {
        (i64::from(self.min)..=i64::from(self.max)).contains(&year)
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_YEAR,
            max: DEFAULT_MAX_YEAR,
        }
    }
}

/// A compiled regular expression that must match the whole value.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{source})$")).map_err(|e| FormError::InvalidPattern {
            pattern: source.to_string(),
            source: e,
        })?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

/// Declared value type of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text with optional length bounds, counted in characters.
    Text {
        min_length: Option<usize>,
        max_length: Option<usize>,
    },
    Email,
    Url,
    /// A year within an inclusive range.
    Year(YearRange),
    /// A whole number with optional inclusive bounds.
    Number { min: Option<i64>, max: Option<i64> },
    Pattern(Pattern),
}

impl FieldKind {
    /// Unbounded text.
    pub fn text() -> Self {
        FieldKind::Text {
            min_length: None,
            max_length: None,
        }
    }

    pub fn text_bounded(min_length: Option<usize>, max_length: Option<usize>) -> Result<Self> {
        if let (Some(min), Some(max)) = (min_length, max_length) {
            if min > max {
                return Err(FormError::InvalidBounds {
                    min: min as i64,
                    max: max as i64,
                });
            }
        }
        Ok(FieldKind::Text {
            min_length,
            max_length,
        })
    }

    pub fn email() -> Self {
        FieldKind::Email
    }

    pub fn url() -> Self {
        FieldKind::Url
    }

    /// Year with the default 1900 to 2019 range.
    pub fn year() -> Self {
        FieldKind::Year(YearRange::default())
    }

    pub fn year_range(min: i32, max: i32) -> Result<Self> {
        YearRange::new(min, max).map(FieldKind::Year)
    }

    pub fn number(min: Option<i64>, max: Option<i64>) -> Result<Self> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(FormError::InvalidBounds { min, max });
            }
        }
        Ok(FieldKind::Number { min, max })
    }

    pub fn pattern(source: &str) -> Result<Self> {
        Pattern::new(source).map(FieldKind::Pattern)
    }

    /// Short tag naming the kind, as used in form definitions.
    pub fn tag(&self) -> &'static str {
        match self {
            FieldKind::Text { .. } => "text",
            FieldKind::Email => "email",
            FieldKind::Url => "url",
            FieldKind::Year(_) => "year",
            FieldKind::Number { .. } => "number",
            FieldKind::Pattern(_) => "pattern",
        }
    }
}

impl Default for FieldKind {
    fn default() -> Self {
        FieldKind::text()
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Year(range) => write!(f, "year({}..={})", range.min, range.max),
            FieldKind::Pattern(p) => write!(f, "pattern({})", p.as_str()),
            other => f.write_str(other.tag()),
        }
    }
}
