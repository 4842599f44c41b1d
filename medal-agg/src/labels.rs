//! End-of-line label placement for the multi-series line chart.

use serde::Serialize;

/// Minimum vertical gap between adjacent end labels, in pixels.
pub const MIN_LABEL_GAP: f64 = 14.0;

/// A line's end label: the series key and its y position in pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndLabel {
    pub key: String,
    pub y: f64,
}

/// Project a series value to its end-label y coordinate (chart-local, y
/// grows downward).
pub fn end_label_y(value: f64, max_value: f64, inner_height: f64) -> f64 {
    if max_value <= 0.0 {
        return inner_height;
    }
    inner_height - (value / max_value) * inner_height
}

/// De-overlap end labels: sort ascending by y, then one top-to-bottom pass
/// pushes any label closer than `min_gap` to its predecessor down to
/// `predecessor.y + min_gap`. Relative (sorted) order is preserved; this is
/// a single greedy pass, not a global optimizer.
pub fn spread_labels(labels: &mut [EndLabel], min_gap: f64) {
    labels.sort_by(|a, b| a.y.total_cmp(&b.y));
    for i in 1..labels.len() {
        let prev_y = labels[i - 1].y;
        if labels[i].y - prev_y < min_gap {
            labels[i].y = prev_y + min_gap;
        }
    }
}
