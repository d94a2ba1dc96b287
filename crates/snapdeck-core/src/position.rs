//! Read-side helpers for UI that follows the scroll position.

use crate::constants::TO_TOP_REVEAL_FRACTION;

/// Whether a "return to top" affordance should be shown for a container
/// scrolled to `offset`.
#[inline]
pub fn to_top_visible(offset: f64, viewport_height: f64) -> bool {
    offset > viewport_height * TO_TOP_REVEAL_FRACTION
}

/// Slide nearest to a raw offset, e.g. a container restored mid-deck on mount.
#[inline]
pub fn nearest_index(offset: f64, viewport_height: f64, total_slides: usize) -> usize {
    if total_slides == 0
        || !offset.is_finite()
        || !viewport_height.is_finite()
        || viewport_height <= 0.0
    {
        return 0;
    }
    let last = (total_slides - 1) as f64;
    (offset / viewport_height).round().clamp(0.0, last) as usize
}
