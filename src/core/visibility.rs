/// Whether an intersection report counts as "on screen" for `threshold`.
///
/// Observers fire on every threshold crossing in both directions, so a
/// report can arrive with `is_intersecting` still true while the visible
/// share has dropped below the threshold.
#[inline]
pub fn in_view(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}
