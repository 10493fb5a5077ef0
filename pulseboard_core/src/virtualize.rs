//! Virtualized windowing for large row sets.
//!
//! Only rows inside the computed window are materialized; everything
//! above and below is represented by two spacer extents so the
//! scrollable height stays exact. Recomputation is pure: the same
//! scroll offset and viewport always produce the same window.

use crate::config::TableConfig;
use serde::{Deserialize, Serialize};

/// The contiguous index range of rows to materialize
///
/// Invariant: `0 <= start_index <= end_index <= row_count`, and
/// `leading_offset == start_index * row_height`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct VirtualWindow {
    /// Full scrollable extent of the table body
    pub total_height: f64,
    pub start_index: usize,
    /// Exclusive end of the materialized range
    pub end_index: usize,
    /// Spacer height above the first materialized row
    pub leading_offset: f64,
    /// Spacer height below the last materialized row
    pub trailing_height: f64,
}

/// Window computer with fixed row height and overscan buffers
///
/// Overscan absorbs scroll jitter so rows do not visibly pop in at the
/// viewport edges.
#[derive(Clone, Copy, Debug)]
pub struct Virtualizer {
    row_height: f64,
    overscan_before: usize,
    overscan_total: usize,
    threshold: usize,
}

impl Virtualizer {
    pub fn new(config: &TableConfig) -> Self {
        let row_height = if config.row_height > 0.0 && config.row_height.is_finite() {
            config.row_height
        } else {
            tracing::warn!(
                "Invalid row_height {} in config, using 1.0",
                config.row_height
            );
            1.0
        };

        Self {
            row_height,
            overscan_before: config.overscan_before,
            overscan_total: config.overscan_total,
            threshold: config.virtualization_threshold,
        }
    }

    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Whether windowing applies at all
    ///
    /// Small tables and loading states render every row; spacer math
    /// would only fight the skeleton UI.
    pub fn is_active(&self, row_count: usize, loading: bool) -> bool {
        !loading && row_count > self.threshold
    }

    /// Compute the window for the current scroll position
    ///
    /// Negative scroll offsets (elastic overscroll) clamp to 0; offsets
    /// past the end clamp the window to the tail of the data.
    pub fn window(&self, row_count: usize, scroll_offset: f64, viewport_height: f64) -> VirtualWindow {
        let offset = if scroll_offset.is_finite() {
            scroll_offset.max(0.0)
        } else {
            0.0
        };
        let viewport = if viewport_height.is_finite() {
            viewport_height.max(0.0)
        } else {
            0.0
        };

        let first_visible = (offset / self.row_height).floor() as usize;
        let start_index = first_visible
            .saturating_sub(self.overscan_before)
            .min(row_count);
        let visible_count =
            (viewport / self.row_height).ceil() as usize + self.overscan_total;
        let end_index = start_index.saturating_add(visible_count).min(row_count);

        VirtualWindow {
            total_height: row_count as f64 * self.row_height,
            start_index,
            end_index,
            leading_offset: start_index as f64 * self.row_height,
            trailing_height: (row_count - end_index) as f64 * self.row_height,
        }
    }

    /// Window to render, honoring the activation threshold
    ///
    /// Inactive tables get a full-range window with zero-height spacers
    /// so callers can render unconditionally from the result.
    pub fn plan(
        &self,
        row_count: usize,
        loading: bool,
        scroll_offset: f64,
        viewport_height: f64,
    ) -> VirtualWindow {
        if self.is_active(row_count, loading) {
            self.window(row_count, scroll_offset, viewport_height)
        } else {
            VirtualWindow {
                total_height: row_count as f64 * self.row_height,
                start_index: 0,
                end_index: row_count,
                leading_offset: 0.0,
                trailing_height: 0.0,
            }
        }
    }
}
