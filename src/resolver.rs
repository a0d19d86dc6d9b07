//! Maps day cell props to the styles of its container, day name and day number.
//!
//! Text style precedence, lowest to highest:
//!
//! 1. base styles with the enabled or disabled override
//! 2. the caller's custom per-cell style
//!
//! On an enabled, selected cell the list is rebuilt from scratch and the last
//! applicable variant wins: highlight over weekend over plain. Highlight always
//! applies in that state, so it shadows the weekend variant.

use chrono::{Datelike, NaiveDate};

use crate::consts::{DAY_NAME_FORMAT, WEEKEND_DAYS};
use crate::marking::build_dots;
use crate::metrics::SizeMetrics;
use crate::props::DayCellProps;
use crate::render::{DayNumberNode, RenderDescriptor, TextNode};
use crate::style::{Style, StyleList, Stylesheet};
use crate::types::Color;

/// Text style variant of a selected, enabled cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVariant {
    Plain,
    Weekend,
    Highlight,
}

pub fn is_weekend(date: NaiveDate) -> bool {
    WEEKEND_DAYS.contains(&date.weekday())
}

/// Abbreviated, upper-cased weekday name (`"SAT"`).
pub fn weekday_label(date: NaiveDate) -> String {
    date.format(DAY_NAME_FORMAT).to_string().to_uppercase()
}

/// Variant applied to the text of an enabled, selected cell.
pub fn selected_text_variant(props: &DayCellProps) -> TextVariant {
    if props.selected {
        TextVariant::Highlight
    } else if props.options.style_weekend && is_weekend(props.date) {
        TextVariant::Weekend
    } else {
        TextVariant::Plain
    }
}

struct TextStyles {
    name:   StyleList,
    number: StyleList,
}

impl TextStyles {
    fn variant(variant: TextVariant, props: &DayCellProps, sheet: &Stylesheet) -> Self {
        let styles = &props.styles;
        let (name_base, name_over, number_base, number_over) = match variant {
            TextVariant::Plain => (
                &sheet.date_name,
                styles.date_name_style.as_ref(),
                &sheet.date_number,
                styles.date_number_style.as_ref(),
            ),
            TextVariant::Weekend => (
                &sheet.weekend_date_name,
                styles.weekend_date_name_style.as_ref(),
                &sheet.weekend_date_number,
                styles.weekend_date_number_style.as_ref(),
            ),
            TextVariant::Highlight => (
                &sheet.date_name,
                styles.highlight_date_name_style.as_ref(),
                &sheet.date_number,
                styles.highlight_date_number_style.as_ref(),
            ),
        };
        Self {
            name:   StyleList::layered(name_base, name_over),
            number: StyleList::layered(number_base, number_over),
        }
    }

    /// Base styles for the cell's enabled state, then the custom per-cell styles.
    fn unselected(props: &DayCellProps, sheet: &Stylesheet) -> Self {
        let custom = props.custom_style();
        let mut name = StyleList::layered(&sheet.date_name, props.date_name_override());
        let mut number = StyleList::layered(&sheet.date_number, props.date_number_override());
        name.extend(custom.and_then(|c| c.date_name_style.clone()));
        number.extend(custom.and_then(|c| c.date_number_style.clone()));
        Self { name, number }
    }
}

/// Container visual state: enabled/disabled look, custom style, then selection marking.
fn container_state(props: &DayCellProps) -> StyleList {
    let mut state = StyleList::new();
    if props.enabled {
        state.push(Style::with_background(Color::transparent()));
    } else {
        state.push(Style {
            opacity: props.options.disabled_opacity,
            ..Style::default()
        });
    }
    state.extend(
        props
            .custom_style()
            .and_then(|c| c.date_container_style.clone()),
    );
    if props.enabled && props.selected {
        state.extend(props.selection_animation.container_style());
    }
    state
}

/// Resolves a render descriptor. Pure: the same inputs always give the same output.
pub fn resolve(
    props: &DayCellProps,
    metrics: &SizeMetrics,
    sheet: &Stylesheet,
) -> RenderDescriptor {
    let text = if props.enabled && props.selected {
        TextStyles::variant(selected_text_variant(props), props, sheet)
    } else {
        TextStyles::unselected(props, sheet)
    };

    let container = [sheet.date_container.clone(), metrics.container_geometry()]
        .into_iter()
        .chain(container_state(props))
        .collect();
    let allow_font_scaling = props.options.allow_text_scaling;

    let day_name = props.options.show_day_name.then(|| {
        let mut style = text.name;
        style.push(Style::with_font_size(metrics.date_name_font_size));
        TextNode {
            text: weekday_label(props.date),
            style,
            allow_font_scaling,
        }
    });

    let day_number = props.options.show_day_number.then(|| DayNumberNode {
        label: TextNode {
            text: props.date.day().to_string(),
            style: std::iter::once(Style::with_font_size(metrics.date_number_font_size))
                .chain(text.number)
                .collect(),
            allow_font_scaling,
        },
        dots:  build_dots(
            props.marked_dates_present,
            props.marking.as_ref(),
            props.styles.marked_dates_style.as_ref(),
            sheet,
        ),
    });

    RenderDescriptor {
        date: props.date,
        container,
        day_name,
        day_number,
    }
}
