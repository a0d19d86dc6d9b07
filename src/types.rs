use crate::consts::{DEFAULT_SELECTION_BORDER_WIDTH, MAX_OPACITY, MIN_OPACITY, TRANSPARENT};
use crate::prelude::*;
use crate::ValueError;
use serde::{Deserialize, Serialize};

/// Nominal diameter of a day cell, guaranteed finite and greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct CellSize(f64);

impl CellSize {
    /// Creates a new `CellSize`, validating that it's finite and positive
    ///
    /// # Errors
    /// Returns `ValueError::InvalidSize` if the value is not finite or not greater than 0.
    pub fn new(value: f64) -> Result<Self, ValueError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ValueError::InvalidSize(value));
        }
        Ok(Self(value))
    }

    /// Returns the size as f64
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for CellSize {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CellSize> for f64 {
    fn from(size: CellSize) -> Self {
        size.0
    }
}

/// An opacity in the range `MIN_OPACITY..=MAX_OPACITY` (0.0..=1.0)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Opacity(f64);

impl Opacity {
    /// Fully transparent
    pub const ZERO: Self = Self(MIN_OPACITY);
    /// Fully opaque
    pub const FULL: Self = Self(MAX_OPACITY);

    /// Creates a new `Opacity`
    ///
    /// # Errors
    /// Returns `ValueError::InvalidOpacity` if the value is outside 0.0..=1.0.
    pub fn new(value: f64) -> Result<Self, ValueError> {
        if !(MIN_OPACITY..=MAX_OPACITY).contains(&value) {
            return Err(ValueError::InvalidOpacity(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Opacity {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Opacity> for f64 {
    fn from(opacity: Opacity) -> Self {
        opacity.0
    }
}

/// A border width, finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct BorderWidth(f64);

impl BorderWidth {
    /// Creates a new `BorderWidth`
    ///
    /// # Errors
    /// Returns `ValueError::InvalidBorderWidth` if the value is negative or not finite.
    pub fn new(value: f64) -> Result<Self, ValueError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ValueError::InvalidBorderWidth(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for BorderWidth {
    fn default() -> Self {
        Self(DEFAULT_SELECTION_BORDER_WIDTH)
    }
}

impl TryFrom<f64> for BorderWidth {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BorderWidth> for f64 {
    fn from(width: BorderWidth) -> Self {
        width.0
    }
}

/// A color as understood by the rendering layer (`"#a7a7a7"`, `"blue"`, `"transparent"`).
///
/// The string is opaque to this crate; only blank values are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Creates a new `Color`
    ///
    /// # Errors
    /// Returns `ValueError::EmptyColor` if the value is empty or whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ValueError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValueError::EmptyColor);
        }
        Ok(Self(value))
    }

    /// The fully transparent color
    pub fn transparent() -> Self {
        Self(TRANSPARENT.to_owned())
    }

    /// Built-in color names from this crate's constants, which are never blank
    pub(crate) fn named(name: &'static str) -> Self {
        debug_assert!(!name.trim().is_empty());
        Self(name.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Color {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Color {
    type Error = ValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size_new_valid() {
        assert!(CellSize::new(1.0).is_ok());
        assert!(CellSize::new(0.5).is_ok());
        assert!(CellSize::new(40.0).is_ok());
    }

    #[test]
    fn test_cell_size_new_invalid() {
        for value in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = CellSize::new(value);
            assert!(
                matches!(result, Err(ValueError::InvalidSize(_))),
                "expected {value} to be rejected"
            );
        }
    }

    #[test]
    fn test_cell_size_get_and_into() {
        let size = CellSize::new(40.0).unwrap();
        assert_eq!(size.get(), 40.0);
        let value: f64 = size.into();
        assert_eq!(value, 40.0);
    }

    #[test]
    fn test_cell_size_deserialize_rejects_zero() {
        let result: Result<CellSize, _> = serde_json::from_str("0");
        assert!(result.is_err());

        let size: CellSize = serde_json::from_str("48").unwrap();
        assert_eq!(size.get(), 48.0);
    }

    #[test]
    fn test_opacity_bounds() {
        assert!(Opacity::new(0.0).is_ok());
        assert!(Opacity::new(0.3).is_ok());
        assert!(Opacity::new(1.0).is_ok());
        assert!(matches!(Opacity::new(1.5), Err(ValueError::InvalidOpacity(_))));
        assert!(matches!(Opacity::new(-0.1), Err(ValueError::InvalidOpacity(_))));
        assert!(Opacity::new(f64::NAN).is_err());
    }

    #[test]
    fn test_border_width() {
        assert!(BorderWidth::new(0.0).is_ok());
        assert!(BorderWidth::new(2.5).is_ok());
        assert!(matches!(
            BorderWidth::new(-1.0),
            Err(ValueError::InvalidBorderWidth(_))
        ));
    }

    #[test]
    fn test_color_new() {
        let color = Color::new("#a7a7a7").unwrap();
        assert_eq!(color.as_str(), "#a7a7a7");
        assert_eq!(color.to_string(), "#a7a7a7");
        assert_eq!(color.len(), 7);

        assert!(matches!(Color::new(""), Err(ValueError::EmptyColor)));
        assert!(matches!(Color::new("   "), Err(ValueError::EmptyColor)));
    }

    #[test]
    fn test_color_serde() {
        let color: Color = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(color, Color::new("red").unwrap());
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"red\"");

        let result: Result<Color, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_transparent() {
        assert_eq!(Color::transparent().as_str(), "transparent");
    }
}
