//! Preview size selection.

use crate::hardware::PreviewSize;

/// Picks the largest-area candidate that fits within the bounds.
///
/// Candidates are scanned in order and ties keep the first one seen, so
/// the platform's reporting order decides between equal areas. Returns
/// `None` if no candidate fits. Pass `u32::MAX` for both bounds to get
/// the largest available size.
pub fn select_best_preview_size(
    candidates: &[PreviewSize],
    max_width: u32,
    max_height: u32,
) -> Option<PreviewSize> {
    let mut best: Option<PreviewSize> = None;
    for size in candidates {
        if !size.fits_within(max_width, max_height) {
            continue;
        }
        match best {
            Some(current) if size.area() <= current.area() => {}
            _ => best = Some(*size),
        }
    }
    best
}

/// Picks the smallest-area candidate, keeping the first on ties.
pub fn smallest_preview_size(candidates: &[PreviewSize]) -> Option<PreviewSize> {
    let mut smallest: Option<PreviewSize> = None;
    for size in candidates {
        match smallest {
            Some(current) if size.area() >= current.area() => {}
            _ => smallest = Some(*size),
        }
    }
    smallest
}
