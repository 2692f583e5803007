use crate::core::format_number;
use crate::Float;

/// The unit of a Sass number returned by a channel query.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    #[default]
    None,
    Percent,
    Degrees,
}

impl Unit {
    /// Get the unit's suffix.
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::None => "",
            Self::Percent => "%",
            Self::Degrees => "deg",
        }
    }
}

/// A Sass number, i.e., a value with a unit.
///
/// # Examples
///
/// ```
/// # use sass_color::{SassNumber, Unit};
/// let number = SassNumber::new(50.0, Unit::Percent);
/// assert_eq!(number.value(), 50.0);
/// assert_eq!(number.to_string(), "50%");
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SassNumber {
    value: Float,
    unit: Unit,
}

impl SassNumber {
    /// Create a new number.
    pub const fn new(value: Float, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Create a new unitless number.
    pub const fn unitless(value: Float) -> Self {
        Self::new(value, Unit::None)
    }

    /// Access the value.
    pub const fn value(&self) -> Float {
        self.value
    }

    /// Access the unit.
    pub const fn unit(&self) -> Unit {
        self.unit
    }
}

impl std::fmt::Display for SassNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", format_number(self.value, 10), self.unit.as_str())
    }
}
