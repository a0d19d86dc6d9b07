//! Fixture builders shared by the unit tests.

use chrono::NaiveDate;

use crate::marking::Dot;
use crate::props::DayCellProps;
use crate::style::Style;
use crate::types::{CellSize, Color};

pub fn size(value: f64) -> CellSize {
    CellSize::new(value).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn color(value: &str) -> Color {
    Color::new(value).unwrap()
}

pub fn text_color(value: &str) -> Style {
    Style {
        color: Some(color(value)),
        ..Style::default()
    }
}

pub fn dot(dot_color: Option<&str>, top: bool) -> Dot {
    Dot {
        color: dot_color.map(color),
        top,
        ..Dot::default()
    }
}

/// Props for a 40-unit cell on the given date.
pub fn props((year, month, day): (i32, u32, u32), enabled: bool, selected: bool) -> DayCellProps {
    let mut props = DayCellProps::new(date(year, month, day), 40.0).unwrap();
    props.enabled = enabled;
    props.selected = selected;
    props
}
