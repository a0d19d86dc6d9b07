//! Output of a render pass: a static description of the cell's visual tree.

use chrono::NaiveDate;
use serde::Serialize;

use crate::animation::TransitionRequest;
use crate::marking::DotGroups;
use crate::style::StyleList;

/// A text element and its styles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    pub text:               String,
    pub style:              StyleList,
    pub allow_font_scaling: bool,
}

/// The day number with the marker dots drawn around it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayNumberNode {
    pub label: TextNode,
    /// `None` when the calendar has no marked dates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dots:  Option<DotGroups>,
}

/// Resolved visual tree of one day cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderDescriptor {
    pub date:       NaiveDate,
    pub container:  StyleList,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_name:   Option<TextNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_number: Option<DayNumberNode>,
}

impl RenderDescriptor {
    /// Activates the cell, handing its date to the calendar's selection callback.
    pub fn press<F, R>(&self, on_date_selected: F) -> R
    where
        F: FnOnce(NaiveDate) -> R,
    {
        on_date_selected(self.date)
    }
}

/// One committed render: the transition to configure first, then the tree to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<TransitionRequest>,
    pub descriptor: RenderDescriptor,
}
