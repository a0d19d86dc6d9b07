use std::time::Duration;

use chrono::Weekday;

/// Container padding is the cell size divided by this
pub const CONTAINER_PADDING_DIVISOR: f64 = 5.0;
/// Corner radius is half the cell size, giving a round cell
pub const CONTAINER_BORDER_RADIUS_DIVISOR: f64 = 2.0;
/// Day name font size is the cell size divided by this
pub const DATE_NAME_FONT_DIVISOR: f64 = 5.0;
/// Day number font size is the cell size divided by this
pub const DATE_NUMBER_FONT_DIVISOR: f64 = 2.9;

/// The two days that receive weekend styling
pub const WEEKEND_DAYS: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

/// Fallback duration for a selection transition
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(300);
/// Border width used by the `border` selection style
pub const DEFAULT_SELECTION_BORDER_WIDTH: f64 = 1.0;
/// Border color used by the `border` selection style
pub const DEFAULT_BORDER_HIGHLIGHT_COLOR: &str = "black";
/// Background color used by the `background` selection style
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "yellow";

/// Background of an enabled cell's container
pub const TRANSPARENT: &str = "transparent";

/// Opacity bounds (inclusive)
pub const MIN_OPACITY: f64 = 0.0;
pub const MAX_OPACITY: f64 = 1.0;

/// `strftime` pattern for the abbreviated weekday shown as the day name
pub const DAY_NAME_FORMAT: &str = "%a";
