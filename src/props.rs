//! Inputs supplied by the calendar grid for one day cell.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::animation::SelectionAnimation;
use crate::marking::Marking;
use crate::style::Style;
use crate::types::{CellSize, Opacity};
use crate::ValueError;

/// Error type for building day cell props.
#[derive(Debug, thiserror::Error)]
pub enum PropsError {
    /// A value failed validation.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// The JSON props were malformed or missing a required field.
    #[error("Invalid day cell props: {0}")]
    Json(#[from] serde_json::Error),
}

/// Display switches for a cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DayCellOptions {
    /// Show the abbreviated weekday above the number
    pub show_day_name: bool,
    /// Show the day number and its marker dots
    pub show_day_number: bool,
    /// Use the weekend text styles on Saturdays and Sundays.
    /// Only takes effect on an enabled, selected cell.
    pub style_weekend: bool,
    /// Let the platform scale the text with the user's font size setting
    pub allow_text_scaling: bool,
    /// Container opacity of a disabled cell; unset leaves opacity alone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_opacity: Option<Opacity>,
}

impl Default for DayCellOptions {
    fn default() -> Self {
        Self {
            show_day_name:      true,
            show_day_number:    true,
            style_weekend:      true,
            allow_text_scaling: true,
            disabled_opacity:   None,
        }
    }
}

/// Per-cell overrides that are appended after all other styles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_name_style:      Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_number_style:    Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_container_style: Option<Style>,
}

/// Caller style slots. Each is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_name_style:             Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_number_style:           Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekend_date_name_style:     Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekend_date_number_style:   Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_date_name_style:   Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_date_number_style: Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_date_name_style:    Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_date_number_style:  Option<Style>,
    /// Applied to every marker dot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marked_dates_style:          Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_style:                Option<CustomStyle>,
}

/// Everything needed to render one day cell.
///
/// `date`, `selected`, `enabled` and `size` are required when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCellProps {
    pub date:                 NaiveDate,
    pub selected:             bool,
    pub enabled:              bool,
    pub size:                 CellSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marking:              Option<Marking>,
    /// Whether the calendar has any marked dates; gates dot rendering
    #[serde(default)]
    pub marked_dates_present: bool,
    #[serde(default)]
    pub styles:               StyleOverrides,
    #[serde(default)]
    pub options:              DayCellOptions,
    #[serde(default)]
    pub selection_animation:  SelectionAnimation,
}

impl DayCellProps {
    /// Creates props for an enabled, unselected cell with default options.
    ///
    /// # Errors
    /// Returns `PropsError::Value` if `size` is not a valid cell size.
    pub fn new(date: NaiveDate, size: f64) -> Result<Self, PropsError> {
        Ok(Self {
            date,
            selected: false,
            enabled: true,
            size: CellSize::new(size)?,
            marking: None,
            marked_dates_present: false,
            styles: StyleOverrides::default(),
            options: DayCellOptions::default(),
            selection_animation: SelectionAnimation::default(),
        })
    }

    /// Parses props from their JSON form.
    ///
    /// # Errors
    /// Returns `PropsError::Json` if the JSON is malformed, a required field is
    /// missing, or a value fails validation.
    pub fn from_json(json: &str) -> Result<Self, PropsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Style entry holding the day name's base override for the enabled or disabled state
    pub(crate) fn date_name_override(&self) -> Option<&Style> {
        if self.enabled {
            self.styles.date_name_style.as_ref()
        } else {
            self.styles.disabled_date_name_style.as_ref()
        }
    }

    pub(crate) fn date_number_override(&self) -> Option<&Style> {
        if self.enabled {
            self.styles.date_number_style.as_ref()
        } else {
            self.styles.disabled_date_number_style.as_ref()
        }
    }

    pub(crate) fn custom_style(&self) -> Option<&CustomStyle> {
        self.styles.custom_style.as_ref()
    }
}
