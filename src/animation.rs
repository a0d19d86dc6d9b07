//! Selection styling mode and the transition request issued when selection flips.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BORDER_HIGHLIGHT_COLOR, DEFAULT_HIGHLIGHT_COLOR, DEFAULT_TRANSITION_DURATION,
};
use crate::style::Style;
use crate::types::{BorderWidth, Color};

/// How a selected, enabled cell is marked. `None` also disables transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionStyle {
    #[default]
    #[serde(alias = "")]
    None,
    Background,
    Border,
}

/// Timing curve of a layout transition phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationCurve {
    Spring,
    Linear,
    #[default]
    EaseInEaseOut,
    EaseIn,
    EaseOut,
    Keyboard,
}

/// Property animated while views appear or disappear
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimatedProperty {
    #[default]
    Opacity,
    ScaleX,
    ScaleY,
    ScaleXY,
}

/// Selection styling and transition parameters.
///
/// Every field has a default, so a partial JSON object only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectionAnimation {
    #[serde(rename = "type")]
    pub style: SelectionStyle,
    /// Transition length in milliseconds; `0` means the default
    pub duration: u64,
    pub border_width: BorderWidth,
    pub border_highlight_color: Color,
    pub highlight_color: Color,
    pub anim_type: AnimationCurve,
    pub anim_update_type: AnimationCurve,
    pub anim_property: AnimatedProperty,
    /// Only meaningful with `AnimationCurve::Spring`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anim_spring_damping: Option<f64>,
}

impl Default for SelectionAnimation {
    fn default() -> Self {
        Self {
            style: SelectionStyle::None,
            duration: 0,
            border_width: BorderWidth::default(),
            border_highlight_color: Color::named(DEFAULT_BORDER_HIGHLIGHT_COLOR),
            highlight_color: Color::named(DEFAULT_HIGHLIGHT_COLOR),
            anim_type: AnimationCurve::default(),
            anim_update_type: AnimationCurve::default(),
            anim_property: AnimatedProperty::default(),
            anim_spring_damping: None,
        }
    }
}

impl SelectionAnimation {
    pub fn with_style(style: SelectionStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub const fn is_enabled(&self) -> bool {
        !matches!(self.style, SelectionStyle::None)
    }

    pub fn duration(&self) -> Duration {
        if self.duration == 0 {
            DEFAULT_TRANSITION_DURATION
        } else {
            Duration::from_millis(self.duration)
        }
    }

    /// Container style marking a selected cell, if the mode draws anything.
    pub fn container_style(&self) -> Option<Style> {
        match self.style {
            SelectionStyle::None => None,
            SelectionStyle::Background => Some(Style::with_background(self.highlight_color.clone())),
            SelectionStyle::Border => Some(Style {
                border_color: Some(self.border_highlight_color.clone()),
                border_width: Some(self.border_width),
                ..Style::default()
            }),
        }
    }

    /// Transition configuration for the next layout pass.
    pub fn transition(&self) -> TransitionRequest {
        let appear = TransitionPhase {
            curve:          self.anim_type,
            property:       Some(self.anim_property),
            spring_damping: None,
        };
        TransitionRequest {
            duration: self.duration(),
            create:   appear,
            update:   TransitionPhase {
                curve:          self.anim_update_type,
                property:       None,
                spring_damping: self.anim_spring_damping,
            },
            delete:   appear,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionPhase {
    pub curve:          AnimationCurve,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property:       Option<AnimatedProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spring_damping: Option<f64>,
}

/// Request to the render layer to animate the next committed frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitionRequest {
    pub duration: Duration,
    pub create:   TransitionPhase,
    pub update:   TransitionPhase,
    pub delete:   TransitionPhase,
}

/// Remembers the last rendered selection to detect when it flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: bool,
}

impl SelectionTracker {
    pub const fn new(selected: bool) -> Self {
        Self { selected }
    }

    pub const fn selected(&self) -> bool {
        self.selected
    }

    /// Records `selected` and returns a transition request if it differs from the last
    /// value and `animation` is enabled.
    pub fn observe(
        &mut self,
        selected: bool,
        animation: &SelectionAnimation,
    ) -> Option<TransitionRequest> {
        if self.selected == selected {
            return None;
        }
        let from = std::mem::replace(&mut self.selected, selected);
        if !animation.is_enabled() {
            return None;
        }
        tracing::debug!(from, to = selected, style = ?animation.style, "selection transition");
        Some(animation.transition())
    }
}
