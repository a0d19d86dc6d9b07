//! Style resolution for a single selectable day cell in a calendar strip.
//!
//! [`resolve`] is a pure function from [`DayCellProps`] to a [`RenderDescriptor`].
//! [`DayCell`] wraps it with the little state a cell carries between renders: the
//! previous selection, to request a selection transition, and the size metrics,
//! recomputed only when the size changes.

mod animation;
mod consts;
mod marking;
mod metrics;
mod prelude;
mod props;
mod render;
mod resolver;
mod style;
mod types;

#[cfg(test)]
mod test_utils;

pub use animation::{
    AnimatedProperty, AnimationCurve, SelectionAnimation, SelectionStyle, SelectionTracker,
    TransitionPhase, TransitionRequest,
};
pub use consts::*;
pub use marking::{Dot, DotGroups, DotKey, DotNode, Marking, build_dots};
pub use metrics::{SizeCache, SizeMetrics};
pub use props::{CustomStyle, DayCellOptions, DayCellProps, PropsError, StyleOverrides};
pub use render::{DayNumberNode, Frame, RenderDescriptor, TextNode};
pub use resolver::{TextVariant, is_weekend, resolve, selected_text_variant, weekday_label};
pub use style::{Alignment, FlexDirection, FontWeight, Style, StyleList, Stylesheet, TextAlign};
pub use types::{BorderWidth, CellSize, Color, Opacity};

use crate::prelude::*;

/// A value that failed validation.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ValueError {
    #[display(fmt = "Invalid cell size: {_0} (must be finite and greater than 0)")]
    InvalidSize(f64),
    #[display(fmt = "Invalid opacity: {} (must be {}-{})", "_0", MIN_OPACITY, MAX_OPACITY)]
    InvalidOpacity(f64),
    #[display(fmt = "Invalid border width: {_0} (must be finite and not negative)")]
    InvalidBorderWidth(f64),
    #[display(fmt = "Empty color")]
    EmptyColor,
}

impl std::error::Error for ValueError {}

/// A day cell across render passes.
///
/// Each call to [`DayCell::render`] first compares the selection against the
/// previous pass, so any transition request is issued before the new descriptor
/// is committed.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    stylesheet: Stylesheet,
    selection:  SelectionTracker,
    sizes:      SizeCache,
}

impl DayCell {
    /// Creates a cell seeded from its first props, using the default stylesheet.
    pub fn new(props: &DayCellProps) -> Self {
        Self::with_stylesheet(props, Stylesheet::default())
    }

    pub fn with_stylesheet(props: &DayCellProps, stylesheet: Stylesheet) -> Self {
        Self {
            stylesheet,
            selection: SelectionTracker::new(props.selected),
            sizes: SizeCache::new(props.size),
        }
    }

    pub const fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// Selection seen on the last render
    pub const fn selected(&self) -> bool {
        self.selection.selected()
    }

    pub const fn metrics(&self) -> SizeMetrics {
        self.sizes.metrics()
    }

    /// Records the new props and returns a transition request if the selection
    /// flipped and a selection style is configured.
    pub fn update(&mut self, props: &DayCellProps) -> Option<TransitionRequest> {
        self.sizes.get(props.size);
        self.selection.observe(props.selected, &props.selection_animation)
    }

    /// Detects a selection transition, then resolves the descriptor for `props`.
    pub fn render(&mut self, props: &DayCellProps) -> Frame {
        let transition = self.update(props);
        let descriptor = resolve(props, &self.sizes.metrics(), &self.stylesheet);
        Frame {
            transition,
            descriptor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{color, props, size};
    use std::time::Duration;

    const SATURDAY: (i32, u32, u32) = (2024, 6, 15);

    fn animated(selected: bool, style: SelectionStyle) -> DayCellProps {
        let mut p = props(SATURDAY, true, selected);
        p.selection_animation = SelectionAnimation::with_style(style);
        p
    }

    #[test]
    fn test_value_error_display() {
        assert_eq!(
            ValueError::InvalidSize(0.0).to_string(),
            "Invalid cell size: 0 (must be finite and greater than 0)"
        );
        assert_eq!(
            ValueError::InvalidOpacity(1.5).to_string(),
            "Invalid opacity: 1.5 (must be 0-1)"
        );
        assert_eq!(ValueError::EmptyColor.to_string(), "Empty color");
    }

    #[test]
    fn test_props_error_wraps_value_error() {
        let err = PropsError::from(ValueError::EmptyColor);
        assert_eq!(err.to_string(), "Empty color");
    }

    #[test]
    fn test_new_seeds_state() {
        let p = animated(true, SelectionStyle::Background);
        let cell = DayCell::new(&p);
        assert!(cell.selected());
        assert_eq!(cell.metrics(), SizeMetrics::from_size(size(40.0)));
        assert_eq!(cell.stylesheet(), &Stylesheet::default());
    }

    #[test]
    fn test_first_render_has_no_transition() {
        let p = animated(true, SelectionStyle::Background);
        let mut cell = DayCell::new(&p);
        assert!(cell.render(&p).transition.is_none());
    }

    #[test]
    fn test_transition_on_selection_change() {
        let mut cell = DayCell::new(&animated(false, SelectionStyle::Border));

        let frame = cell.render(&animated(true, SelectionStyle::Border));
        let transition = frame.transition.unwrap();
        assert_eq!(transition.duration, Duration::from_millis(300));
        assert_eq!(
            frame.descriptor.container.flatten().border_color,
            Some(color("black"))
        );

        assert!(cell.render(&animated(true, SelectionStyle::Border)).transition.is_none());

        let frame = cell.render(&animated(false, SelectionStyle::Border));
        assert!(frame.transition.is_some());
        assert_eq!(frame.descriptor.container.flatten().border_color, None);
    }

    #[test]
    fn test_no_transition_when_animation_disabled() {
        let mut cell = DayCell::new(&animated(false, SelectionStyle::None));
        let frame = cell.render(&animated(true, SelectionStyle::None));
        assert!(frame.transition.is_none());
        assert!(cell.selected());
    }

    #[test]
    fn test_transition_emitted_for_disabled_cell() {
        let mut off = animated(false, SelectionStyle::Background);
        off.enabled = false;
        let mut on = off.clone();
        on.selected = true;

        let mut cell = DayCell::new(&off);
        let frame = cell.render(&on);
        assert!(frame.transition.is_some());
        assert_eq!(frame.descriptor.container.flatten().background_color, None);
    }

    #[test]
    fn test_size_change_recomputes_metrics() {
        let mut p = props(SATURDAY, true, false);
        let mut cell = DayCell::new(&p);

        p.size = size(60.0);
        let frame = cell.render(&p);
        assert_eq!(cell.metrics().container_size, 60.0);
        assert_eq!(frame.descriptor.container.flatten().width, Some(60.0));
        assert_eq!(
            frame.descriptor.day_name.map(|n| n.style.flatten().font_size),
            Some(Some(12.0))
        );
    }

    #[test]
    fn test_render_matches_pure_resolve() {
        let p = animated(true, SelectionStyle::Background);
        let mut cell = DayCell::new(&p);
        let first = cell.render(&p);
        let second = cell.render(&p);

        assert_eq!(first, second);
        assert_eq!(
            first.descriptor,
            resolve(&p, &SizeMetrics::from_size(p.size), &Stylesheet::default())
        );
    }

    #[test]
    fn test_custom_stylesheet() {
        let sheet = Stylesheet {
            date_name: Style {
                color: Some(color("navy")),
                ..Style::default()
            },
            ..Stylesheet::default()
        };
        let p = props(SATURDAY, true, false);
        let mut cell = DayCell::with_stylesheet(&p, sheet);
        let name = cell.render(&p).descriptor.day_name.unwrap();
        assert_eq!(name.style.flatten().color, Some(color("navy")));
    }

    #[test]
    fn test_frame_json() {
        let p = DayCellProps::from_json(
            r#"{
                "date": "2024-06-15",
                "selected": false,
                "enabled": true,
                "size": 40,
                "markedDatesPresent": true,
                "marking": {"dots": [{"key": "gym", "color": "red", "top": true}]}
            }"#,
        )
        .unwrap();
        let frame = DayCell::new(&p).render(&p);
        let json = serde_json::to_value(&frame).unwrap();

        assert!(json.get("transition").is_none());
        assert_eq!(json["descriptor"]["date"], "2024-06-15");
        assert_eq!(json["descriptor"]["dayName"]["text"], "SAT");
        assert_eq!(json["descriptor"]["dayNumber"]["label"]["text"], "15");
        assert_eq!(json["descriptor"]["dayNumber"]["dots"]["top"][0]["key"], "gym");
        assert_eq!(json["descriptor"]["dayNumber"]["dots"]["top"][0]["color"], "red");
    }
}
