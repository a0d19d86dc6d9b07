//! Style properties and ordered style lists.
//!
//! A [`StyleList`] is the unflattened form the render layer receives: entries are
//! applied in order and a later entry wins on every property it sets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{BorderWidth, Color, Opacity};

/// Text weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Main or cross axis alignment of a container's children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    FlexStart,
    Center,
    FlexEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    Row,
    Column,
}

/// A set of optional style properties. Unset properties do not take part in a merge.
///
/// Properties this crate does not interpret (`fontFamily`, `lineHeight`, ...) are kept
/// as-is in `extra` and passed through to the render layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<BorderWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Opacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Alignment>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

macro_rules! merge_fields {
    ($dst:expr, $src:expr; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = &$src.$field {
                $dst.$field = Some(value.clone());
            }
        )+
    };
}

impl Style {
    /// Overwrites every property that `other` sets.
    pub fn merge(&mut self, other: &Self) {
        merge_fields!(self, other;
            color,
            background_color,
            border_color,
            border_width,
            border_radius,
            opacity,
            width,
            height,
            padding,
            margin_top,
            margin_bottom,
            font_size,
            font_weight,
            text_align,
            flex_direction,
            justify_content,
            align_items,
        );
        for (name, value) in &other.extra {
            self.extra.insert(name.clone(), value.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn with_font_size(font_size: f64) -> Self {
        Self {
            font_size: Some(font_size),
            ..Self::default()
        }
    }

    pub(crate) fn with_background(color: Color) -> Self {
        Self {
            background_color: Some(color),
            ..Self::default()
        }
    }
}

/// Ordered style entries, flattened last-writer-wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleList(Vec<Style>);

impl StyleList {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// A base style followed by an optional caller override.
    pub fn layered(base: &Style, over: Option<&Style>) -> Self {
        std::iter::once(base).chain(over).cloned().collect()
    }

    pub fn push(&mut self, style: Style) {
        self.0.push(style);
    }

    pub fn entries(&self) -> &[Style] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any single entry equals `style`.
    pub fn contains(&self, style: &Style) -> bool {
        self.0.contains(style)
    }

    /// Collapses the list into one style; later entries win per property.
    pub fn flatten(&self) -> Style {
        self.0.iter().fold(Style::default(), |mut acc, style| {
            acc.merge(style);
            acc
        })
    }
}

impl FromIterator<Style> for StyleList {
    fn from_iter<I: IntoIterator<Item = Style>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Style> for StyleList {
    fn extend<I: IntoIterator<Item = Style>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for StyleList {
    type Item = Style;
    type IntoIter = std::vec::IntoIter<Style>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StyleList {
    type Item = &'a Style;
    type IntoIter = std::slice::Iter<'a, Style>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Base styles every cell starts from, before caller overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stylesheet {
    pub date_container: Style,
    pub date_name: Style,
    pub date_number: Style,
    pub weekend_date_name: Style,
    pub weekend_date_number: Style,
    pub dot: Style,
    pub visible_dot: Style,
    pub dots_container: Style,
    pub top_dots_container: Style,
}

impl Default for Stylesheet {
    fn default() -> Self {
        let weekend_grey = Color::named("#a7a7a7");
        Self {
            date_container: Style {
                justify_content: Some(Alignment::Center),
                align_items: Some(Alignment::Center),
                ..Style::default()
            },
            date_name: Style {
                text_align: Some(TextAlign::Center),
                ..Style::default()
            },
            date_number: Style {
                font_weight: Some(FontWeight::Bold),
                text_align: Some(TextAlign::Center),
                ..Style::default()
            },
            weekend_date_name: Style {
                color: Some(weekend_grey.clone()),
                text_align: Some(TextAlign::Center),
                ..Style::default()
            },
            weekend_date_number: Style {
                color: Some(weekend_grey),
                font_weight: Some(FontWeight::Bold),
                text_align: Some(TextAlign::Center),
                ..Style::default()
            },
            dot: Style {
                width: Some(6.0),
                height: Some(6.0),
                margin_top: Some(1.0),
                border_radius: Some(5.0),
                opacity: Some(Opacity::ZERO),
                ..Style::default()
            },
            visible_dot: Style {
                opacity: Some(Opacity::FULL),
                background_color: Some(Color::named("blue")),
                ..Style::default()
            },
            dots_container: Style {
                flex_direction: Some(FlexDirection::Row),
                justify_content: Some(Alignment::Center),
                ..Style::default()
            },
            top_dots_container: Style {
                margin_bottom: Some(1.0),
                ..Style::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color {
        Color::new("red").unwrap()
    }

    #[test]
    fn test_merge_last_writer_wins() {
        let mut base = Style {
            color: Some(red()),
            font_size: Some(12.0),
            ..Style::default()
        };
        base.merge(&Style {
            font_size: Some(18.0),
            ..Style::default()
        });
        assert_eq!(base.color, Some(red()));
        assert_eq!(base.font_size, Some(18.0));
    }

    #[test]
    fn test_merge_ignores_unset() {
        let mut base = Style::with_font_size(10.0);
        base.merge(&Style::default());
        assert_eq!(base, Style::with_font_size(10.0));
    }

    #[test]
    fn test_flatten_order() {
        let list: StyleList = [
            Style::with_background(red()),
            Style::with_font_size(8.0),
            Style::with_background(Color::transparent()),
        ]
        .into_iter()
        .collect();

        let flat = list.flatten();
        assert_eq!(flat.background_color, Some(Color::transparent()));
        assert_eq!(flat.font_size, Some(8.0));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_flatten_empty() {
        assert!(StyleList::new().flatten().is_empty());
    }

    #[test]
    fn test_layered_skips_missing_override() {
        let base = Style::with_font_size(10.0);
        assert_eq!(StyleList::layered(&base, None).len(), 1);

        let over = Style::with_background(red());
        let list = StyleList::layered(&base, Some(&over));
        assert_eq!(list.entries(), &[base, over]);
    }

    #[test]
    fn test_style_json_camel_case() {
        let style: Style =
            serde_json::from_str(r##"{"backgroundColor": "#fff", "fontWeight": "bold", "borderWidth": 2}"##)
                .unwrap();
        assert_eq!(style.background_color, Some(Color::new("#fff").unwrap()));
        assert_eq!(style.font_weight, Some(FontWeight::Bold));
        assert_eq!(style.border_width, Some(BorderWidth::new(2.0).unwrap()));

        let json = serde_json::to_value(Style::with_font_size(14.0)).unwrap();
        assert_eq!(json, serde_json::json!({ "fontSize": 14.0 }));
    }

    #[test]
    fn test_style_json_rejects_invalid_values() {
        assert!(serde_json::from_str::<Style>(r#"{"opacity": 2}"#).is_err());
        assert!(serde_json::from_str::<Style>(r#"{"color": ""}"#).is_err());
    }

    #[test]
    fn test_uninterpreted_properties_pass_through() {
        let base: Style =
            serde_json::from_str(r#"{"fontFamily": "Roboto", "lineHeight": 12, "color": "red"}"#)
                .unwrap();
        let over: Style =
            serde_json::from_str(r#"{"lineHeight": 16, "marginHorizontal": 2}"#).unwrap();
        assert_eq!(base.color, Some(red()));
        assert_eq!(base.extra.len(), 2);

        let flat = StyleList::from_iter([base, over]).flatten();
        assert_eq!(flat.color, Some(red()));
        assert_eq!(flat.extra["fontFamily"], serde_json::json!("Roboto"));
        assert_eq!(flat.extra["lineHeight"], serde_json::json!(16));
        assert_eq!(flat.extra["marginHorizontal"], serde_json::json!(2));

        let json = serde_json::to_value(&flat).unwrap();
        assert_eq!(json["fontFamily"], "Roboto");
        assert_eq!(json["color"], "red");
    }

    #[test]
    fn test_default_stylesheet_dots_visible() {
        let sheet = Stylesheet::default();
        let dot = StyleList::from_iter([sheet.dot.clone(), sheet.visible_dot.clone()]).flatten();
        assert_eq!(dot.opacity, Some(Opacity::new(1.0).unwrap()));
        assert_eq!(dot.width, Some(6.0));
    }
}
