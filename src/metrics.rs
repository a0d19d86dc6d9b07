//! Geometry derived from the nominal cell size.

use serde::Serialize;

use crate::consts::{
    CONTAINER_BORDER_RADIUS_DIVISOR, CONTAINER_PADDING_DIVISOR, DATE_NAME_FONT_DIVISOR,
    DATE_NUMBER_FONT_DIVISOR,
};
use crate::style::Style;
use crate::types::CellSize;

/// Container geometry and font sizes, each rounded to the nearest whole unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeMetrics {
    pub container_size: f64,
    pub container_padding: f64,
    pub container_border_radius: f64,
    pub date_name_font_size: f64,
    pub date_number_font_size: f64,
}

impl SizeMetrics {
    /// Derives the metrics for `size`. Halves round away from zero.
    pub fn from_size(size: CellSize) -> Self {
        let size = size.get();
        Self {
            container_size: size.round(),
            container_padding: (size / CONTAINER_PADDING_DIVISOR).round(),
            container_border_radius: (size / CONTAINER_BORDER_RADIUS_DIVISOR).round(),
            date_name_font_size: (size / DATE_NAME_FONT_DIVISOR).round(),
            date_number_font_size: (size / DATE_NUMBER_FONT_DIVISOR).round(),
        }
    }

    /// Width, height, corner radius and padding of the cell container.
    pub fn container_geometry(&self) -> Style {
        Style {
            width: Some(self.container_size),
            height: Some(self.container_size),
            border_radius: Some(self.container_border_radius),
            padding: Some(self.container_padding),
            ..Style::default()
        }
    }
}

impl From<CellSize> for SizeMetrics {
    fn from(size: CellSize) -> Self {
        Self::from_size(size)
    }
}

/// One-entry memo of [`SizeMetrics`], keyed on the size it was computed for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeCache {
    size:    CellSize,
    metrics: SizeMetrics,
}

impl SizeCache {
    pub fn new(size: CellSize) -> Self {
        Self {
            size,
            metrics: SizeMetrics::from_size(size),
        }
    }

    /// Returns the metrics for `size`, recomputing only when it differs from the cached key.
    pub fn get(&mut self, size: CellSize) -> SizeMetrics {
        if self.size != size {
            tracing::trace!(from = %self.size, to = %size, "recomputing day cell size metrics");
            *self = Self::new(size);
        }
        self.metrics
    }

    pub const fn size(&self) -> CellSize {
        self.size
    }

    pub const fn metrics(&self) -> SizeMetrics {
        self.metrics
    }
}
