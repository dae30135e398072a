// crates/countrypick-core/src/layout.rs

/// Row-height metrics owned by the presentation layer.
///
/// The controller resolves a scroll target to an ordinal position; this
/// helper converts that ordinal into a pixel offset clamped so the list
/// never scrolls past its end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListMetrics {
    pub row_height: f32,
    pub visible_extent: f32,
}

impl ListMetrics {
    pub fn new(row_height: f32, visible_extent: f32) -> Self {
        ListMetrics {
            row_height,
            visible_extent,
        }
    }

    /// Total scrollable extent of a list with `row_count` rows.
    pub fn total_extent(&self, row_count: usize) -> f32 {
        self.row_height * row_count as f32
    }

    /// Pixel offset that brings the row at `ordinal` to the top of the
    /// viewport, clamped to `[0, total - visible]`.
    pub fn offset_for(&self, ordinal: usize, row_count: usize) -> f32 {
        let offset = self.row_height * ordinal as f32;
        let max_offset = (self.total_extent(row_count) - self.visible_extent).max(0.0);
        offset.min(max_offset)
    }
}
