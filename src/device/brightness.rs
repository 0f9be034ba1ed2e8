/// Normalized screen-brightness access.
///
/// Values are in `[0.0, 1.0]`; a negative value is the "automatic" sentinel
/// reported by hosts that let the system manage brightness until the user
/// overrides it.
pub trait BrightnessSurface {
    fn brightness(&self) -> f32;
    fn set_brightness(&mut self, value: f32);
}

/// Brightness surface rendered as a dim layer over the video.
///
/// A desktop window cannot drive the physical backlight, so the demo
/// darkens the video surface instead: full brightness paints nothing,
/// lower values paint an increasingly opaque black layer.
pub struct DimLayerBrightness {
    value: f32,
}

impl DimLayerBrightness {
    /// Starts in automatic mode, like a freshly opened player window.
    pub fn new() -> Self {
        Self { value: -1.0 }
    }

    /// Alpha of the dim layer the GUI should paint, `0..=255`.
    pub fn dim_alpha(&self) -> u8 {
        if self.value < 0.0 {
            // Automatic: the system owns brightness, nothing to paint.
            return 0;
        }
        let darkness = 1.0 - self.value.clamp(0.0, 1.0);
        // Never fully black, the floor keeps the surface readable.
        (darkness * 230.0) as u8
    }

    pub fn is_automatic(&self) -> bool {
        self.value < 0.0
    }
}

impl Default for DimLayerBrightness {
    fn default() -> Self {
        Self::new()
    }
}

impl BrightnessSurface for DimLayerBrightness {
    fn brightness(&self) -> f32 {
        self.value
    }

    fn set_brightness(&mut self, value: f32) {
        self.value = value.clamp(0.0, 1.0);
        log::debug!("Brightness set to {:.2}", self.value);
    }
}
