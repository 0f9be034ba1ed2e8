/// Horizontal region of the touch surface a drag gesture started in.
///
/// The left fifth of the surface controls brightness, the right fifth
/// controls volume, and everything in between is left for the host to
/// handle (taps on the video itself, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureZone {
    Brightness,
    Volume,
    Ignored,
}

impl GestureZone {
    /// Returns true if a drag in this zone is consumed by the overlay.
    pub fn is_consumed(self) -> bool {
        !matches!(self, GestureZone::Ignored)
    }
}

/// Classifies a gesture by where it started horizontally.
///
/// Comparisons are strict, so a start exactly on either boundary falls to
/// `Ignored`. `zone_fraction` is the width of each edge zone as a fraction
/// of the surface width (0.2 gives the classic left-1/5 / right-1/5 split).
pub fn classify_zone(start_x: f32, width: f32, zone_fraction: f32) -> GestureZone {
    if width <= 0.0 {
        log::warn!("Zone classification with non-positive width {}, ignoring gesture", width);
        return GestureZone::Ignored;
    }

    if start_x < width * zone_fraction {
        GestureZone::Brightness
    } else if start_x > width * (1.0 - zone_fraction) {
        GestureZone::Volume
    } else {
        GestureZone::Ignored
    }
}
