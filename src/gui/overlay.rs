use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use eframe::egui;

use crate::core::OverlayConfig;
use crate::gesture::OverlayHost;
use crate::gui::seek_bar::SeekBarWidget;
use crate::playback::{MediaSession, PlaybackHandleRef, TransportControls};

/// The on-screen playback control overlay.
///
/// Renders play/pause, rewind/forward and the seek bar, and hides itself
/// after a timeout unless something calls `show_transient()` — which the
/// gesture controller does on every touch event, so the controls stay up
/// while the user is dragging.
pub struct ControlOverlay {
    transport: TransportControls,
    seek_bar: SeekBarWidget,
    auto_hide: Duration,
    visible_until: Instant,
}

impl ControlOverlay {
    pub fn new(config: &OverlayConfig) -> Self {
        let auto_hide = Duration::from_millis(config.auto_hide_timeout_ms);
        Self {
            transport: TransportControls::new(config.skip_increment_ms),
            seek_bar: SeekBarWidget::new(),
            auto_hide,
            // Visible at startup so the user sees the controls exist.
            visible_until: Instant::now() + auto_hide,
        }
    }

    /// Binds the playback handle the transport controls act on. Must be
    /// called before the overlay is rendered.
    pub fn bind_handle(&mut self, handle: PlaybackHandleRef) {
        self.transport.bind_handle(handle);
    }

    pub fn is_visible(&self) -> bool {
        Instant::now() < self.visible_until
    }

    /// Draws the transport row and seek bar. No-op while hidden.
    pub fn render_controls(&mut self, ui: &mut egui::Ui, session: &Rc<RefCell<MediaSession>>) {
        if !self.is_visible() {
            return;
        }

        ui.horizontal(|ui| {
            if ui.button("⏪ 10s").clicked() {
                self.show_transient();
                if let Err(e) = self.transport.rewind() {
                    log::error!("Rewind failed: {}", e);
                }
            }

            let playing = session.borrow().is_playing();
            let label = if playing { "⏸" } else { "▶" };
            if ui.button(label).clicked() {
                self.show_transient();
                session.borrow_mut().toggle();
            }

            if ui.button("10s ⏩").clicked() {
                self.show_transient();
                if let Err(e) = self.transport.fast_forward() {
                    log::error!("Fast-forward failed: {}", e);
                }
            }

            {
                let mut session = session.borrow_mut();
                let response = self.seek_bar.show(ui, &mut session);
                if response.clicked() || response.dragged() {
                    drop(session);
                    self.show_transient();
                }
            }

            ui.label(
                egui::RichText::new(session.borrow().state().display_text())
                    .color(ui.visuals().weak_text_color()),
            );
        });
    }
}

impl OverlayHost for ControlOverlay {
    fn show_transient(&mut self) {
        self.visible_until = Instant::now() + self.auto_hide;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(auto_hide_timeout_ms: u64) -> OverlayConfig {
        OverlayConfig { auto_hide_timeout_ms, ..OverlayConfig::default() }
    }

    #[test]
    fn test_overlay_visible_at_startup() {
        let overlay = ControlOverlay::new(&test_config(3_000));
        assert!(overlay.is_visible());
    }

    #[test]
    fn test_show_transient_extends_visibility() {
        let mut overlay = ControlOverlay::new(&test_config(0));
        assert!(!overlay.is_visible());
        overlay.auto_hide = Duration::from_secs(60);
        overlay.show_transient();
        assert!(overlay.is_visible());
    }

    #[test]
    fn test_overlay_starts_unbound() {
        let overlay = ControlOverlay::new(&test_config(3_000));
        assert!(!overlay.transport.is_bound());
    }
}
