//! Maps a vertical drag to a target volume or brightness value.
//!
//! The mapping is relative to the value captured when the gesture started:
//! a full-height upward drag raises volume by `max_volume` steps or
//! brightness by 1.0, so the whole range is always reachable from anywhere
//! on the surface.

/// Minimum brightness the mapper will ever produce. Keeps the screen from
/// going unreadably dark mid-gesture.
pub const BRIGHTNESS_FLOOR: f32 = 0.01;

/// Working baseline when the host reports "automatic" brightness (negative
/// sentinel). The first drag then moves from mid-range instead of slamming
/// to the floor.
const AUTO_BRIGHTNESS_BASELINE: f32 = 0.5;

/// Signed fraction of the surface height covered by the drag.
///
/// Positive when the finger moved upward ("swipe up increases").
pub fn drag_percentage(start_y: f32, end_y: f32, height: f32) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    (start_y - end_y) / height
}

/// Target volume for a drag, clamped to `[0, max_volume]`.
///
/// Rounds half away from zero, so a half-surface drag over 15 steps moves
/// by 8, not 7.
pub fn volume_target(percentage: f32, baseline_volume: i32, max_volume: i32) -> i32 {
    let delta = (percentage * max_volume as f32).round() as i32;
    (delta + baseline_volume).clamp(0, max_volume)
}

/// Target brightness for a drag, clamped to `[floor, 1.0]`.
///
/// A negative baseline means the host was in automatic mode; the mapper
/// adjusts from mid-range in that case.
pub fn brightness_target(percentage: f32, baseline_brightness: f32, floor: f32) -> f32 {
    let baseline = if baseline_brightness < 0.0 {
        AUTO_BRIGHTNESS_BASELINE
    } else {
        baseline_brightness
    };
    (percentage + baseline).clamp(floor, 1.0)
}
