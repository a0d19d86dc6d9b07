//! Marker dots shown above and below the day number.

use serde::{Deserialize, Deserializer, Serialize};

use crate::style::{Style, StyleList, Stylesheet};
use crate::types::Color;

/// A single marker dot as supplied by the calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key:                Option<String>,
    /// Dots without a color are not drawn; a blank color counts as none
    #[serde(deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub color:              Option<Color>,
    /// Drawn above the day number instead of below it
    pub top:                bool,
    /// Used instead of `color` while the marking is selected
    #[serde(deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub selected_dot_color: Option<Color>,
}

impl Dot {
    /// Color to draw with, given whether the owning marking is selected.
    /// `None` when the dot has no base color.
    pub fn resolved_color(&self, marking_selected: bool) -> Option<&Color> {
        let base = self.color.as_ref()?;
        match &self.selected_dot_color {
            Some(selected) if marking_selected => Some(selected),
            _ => Some(base),
        }
    }
}

/// Per-day marking data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Marking {
    /// Selected through marking, independent of the cell's selection flag
    pub selected: bool,
    pub dots:     Vec<Dot>,
}

/// Identity of a rendered dot: its own key, or its position within its group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum DotKey {
    Named(String),
    Index(usize),
}

/// A dot ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DotNode {
    pub key:   DotKey,
    /// Color picked from the dot, before the shared marked-dates style is applied
    pub color: Color,
    pub style: StyleList,
}

/// Dots split by position, each group in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DotGroups {
    pub top_container:    StyleList,
    pub top:              Vec<DotNode>,
    pub bottom_container: StyleList,
    pub bottom:           Vec<DotNode>,
}

impl DotGroups {
    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.bottom.is_empty()
    }

    pub fn len(&self) -> usize {
        self.top.len() + self.bottom.len()
    }
}

fn dot_key(dot: &Dot, index: usize) -> DotKey {
    match &dot.key {
        Some(key) if !key.is_empty() => DotKey::Named(key.clone()),
        _ => DotKey::Index(index),
    }
}

/// Reads an optional color, treating a blank string like a missing one.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|s| Color::new(s).ok()))
}

/// Builds the dot groups for a cell.
///
/// Returns `None` when the calendar has no marked dates, in which case no dot
/// containers are drawn at all. Dots without a color are dropped.
pub fn build_dots(
    marked_dates_present: bool,
    marking: Option<&Marking>,
    marked_dates_style: Option<&Style>,
    sheet: &Stylesheet,
) -> Option<DotGroups> {
    if !marked_dates_present {
        return None;
    }

    let selected = marking.is_some_and(|m| m.selected);
    let dots = marking.map_or(&[][..], |m| m.dots.as_slice());
    let dropped = dots.iter().filter(|dot| dot.color.is_none()).count();
    if dropped > 0 {
        tracing::trace!(dropped, "ignoring marker dots without a color");
    }

    let group = |top: bool| -> Vec<DotNode> {
        dots.iter()
            .filter(|dot| dot.top == top)
            .filter_map(|dot| dot.resolved_color(selected).map(|color| (dot, color)))
            .enumerate()
            .map(|(index, (dot, color))| DotNode {
                key:   dot_key(dot, index),
                color: color.clone(),
                style: [
                    sheet.dot.clone(),
                    sheet.visible_dot.clone(),
                    Style::with_background(color.clone()),
                ]
                .into_iter()
                .chain(marked_dates_style.cloned())
                .collect(),
            })
            .collect()
    };

    Some(DotGroups {
        top_container:    [sheet.dots_container.clone(), sheet.top_dots_container.clone()]
            .into_iter()
            .collect(),
        top:              group(true),
        bottom_container: StyleList::layered(&sheet.dots_container, None),
        bottom:           group(false),
    })
}
