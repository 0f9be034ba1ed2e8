use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use eframe::egui;

use crate::core::OverlayConfig;
use crate::device::{DimLayerBrightness, SinkVolume};
use crate::gesture::{GestureController, OverlayHost, TouchEvent, TouchSurface};
use crate::gui::overlay::ControlOverlay;
use crate::playback::MediaSession;

/// How long the volume indicator stays on screen after a change.
const VOLUME_INDICATOR_DURATION: Duration = Duration::from_millis(1_000);

/// Demo application: a fake video surface with the gesture overlay wired
/// to a wall-clock playback session, a rodio-backed volume service and a
/// dim-layer brightness surface.
pub struct SwipeControlsApp {
    config: OverlayConfig,
    session: Rc<RefCell<MediaSession>>,
    volume: Rc<RefCell<SinkVolume>>,
    brightness: Rc<RefCell<DimLayerBrightness>>,
    controller: GestureController,
    overlay: ControlOverlay,
    volume_indicator: Option<(i32, Instant)>,
}

impl SwipeControlsApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> anyhow::Result<Self> {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::WHITE);
        cc.egui_ctx.set_visuals(visuals);

        let config = OverlayConfig::load()?;

        let session = Rc::new(RefCell::new(MediaSession::new(config.demo_duration_ms)));
        let volume = Rc::new(RefCell::new(SinkVolume::new(
            config.max_volume_steps,
            config.max_volume_steps / 2,
        )));
        if config.demo_tone_enabled {
            volume.borrow().play_test_tone(440.0);
        }
        let brightness = Rc::new(RefCell::new(DimLayerBrightness::new()));

        let controller = GestureController::new(
            volume.clone(),
            brightness.clone(),
            config.zone_fraction,
            config.brightness_floor,
        );

        let mut overlay = ControlOverlay::new(&config);
        overlay.bind_handle(session.clone());

        Ok(Self {
            config,
            session,
            volume,
            brightness,
            controller,
            overlay,
            volume_indicator: None,
        })
    }

    /// Translates the egui pointer response over the video surface into
    /// the overlay's touch events. egui only delivers the primary
    /// pointer, so every event is primary here; secondary-pointer
    /// filtering is exercised by the gesture tests.
    fn handle_surface_input(&mut self, response: &egui::Response, rect: egui::Rect) {
        let surface = TouchSurface { width: rect.width(), height: rect.height() };

        let event = if response.drag_started() {
            response
                .interact_pointer_pos()
                .map(|pos| TouchEvent::down(pos.x - rect.min.x, pos.y - rect.min.y))
        } else if response.dragged() {
            response
                .interact_pointer_pos()
                .map(|pos| TouchEvent::moved(pos.x - rect.min.x, pos.y - rect.min.y))
        } else if response.drag_stopped() {
            Some(TouchEvent::up(0.0, 0.0))
        } else if response.clicked() {
            // A plain tap just brings the controls back.
            self.controller.reset();
            self.overlay.show_transient();
            None
        } else {
            None
        };

        if let Some(event) = event {
            self.controller.on_touch(event, surface, &mut self.overlay);
        }
    }

    fn draw_video_surface(&self, ui: &egui::Ui, rect: egui::Rect) {
        let painter = ui.painter();

        // Stand-in for the video frame.
        painter.rect_filled(rect, egui::Rounding::ZERO, egui::Color32::from_rgb(18, 26, 48));
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Drag left edge: brightness   •   Drag right edge: volume",
            egui::FontId::proportional(16.0),
            egui::Color32::from_gray(140),
        );

        // Faint markers for the two gesture zones.
        let zone_width = rect.width() * self.config.zone_fraction;
        painter.text(
            egui::Pos2::new(rect.min.x + zone_width / 2.0, rect.center().y - 60.0),
            egui::Align2::CENTER_CENTER,
            "☀",
            egui::FontId::proportional(28.0),
            egui::Color32::from_gray(70),
        );
        painter.text(
            egui::Pos2::new(rect.max.x - zone_width / 2.0, rect.center().y - 60.0),
            egui::Align2::CENTER_CENTER,
            "🔊",
            egui::FontId::proportional(28.0),
            egui::Color32::from_gray(70),
        );

        // Brightness is rendered as a dim layer over the surface.
        let dim_alpha = self.brightness.borrow().dim_alpha();
        if dim_alpha > 0 {
            painter.rect_filled(
                rect,
                egui::Rounding::ZERO,
                egui::Color32::from_black_alpha(dim_alpha),
            );
        }
    }

    fn draw_volume_indicator(&mut self, ui: &egui::Ui, rect: egui::Rect) {
        if let Some(level) = self.volume.borrow_mut().take_indicator_request() {
            self.volume_indicator = Some((level, Instant::now()));
        }

        let Some((level, since)) = self.volume_indicator else {
            return;
        };
        if since.elapsed() > VOLUME_INDICATOR_DURATION {
            self.volume_indicator = None;
            return;
        }

        let painter = ui.painter();
        let indicator_rect = egui::Rect::from_center_size(
            egui::Pos2::new(rect.center().x, rect.min.y + 40.0),
            egui::Vec2::new(160.0, 32.0),
        );
        painter.rect_filled(
            indicator_rect,
            egui::Rounding::same(6.0),
            egui::Color32::from_black_alpha(180),
        );
        painter.text(
            indicator_rect.center(),
            egui::Align2::CENTER_CENTER,
            format!("🔊 {} / {}", level, self.controller.max_volume()),
            egui::FontId::proportional(15.0),
            egui::Color32::WHITE,
        );
    }
}

impl eframe::App for SwipeControlsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.session.borrow_mut().tick();

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let full_rect = ui.available_rect_before_wrap();
                let controls_height = 40.0;
                let video_rect = egui::Rect::from_min_max(
                    full_rect.min,
                    egui::Pos2::new(full_rect.max.x, full_rect.max.y - controls_height),
                );

                self.draw_video_surface(ui, video_rect);

                let response = ui.interact(
                    video_rect,
                    ui.id().with("video_surface"),
                    egui::Sense::click_and_drag(),
                );
                self.handle_surface_input(&response, video_rect);

                self.draw_volume_indicator(ui, video_rect);

                let controls_rect = egui::Rect::from_min_max(
                    egui::Pos2::new(full_rect.min.x, full_rect.max.y - controls_height),
                    full_rect.max,
                );
                let mut controls_ui = ui.child_ui(
                    controls_rect.shrink2(egui::Vec2::new(8.0, 4.0)),
                    egui::Layout::left_to_right(egui::Align::Center),
                    None,
                );
                self.overlay.render_controls(&mut controls_ui, &self.session);
            });

        // Keep the position readout and auto-hide timer moving.
        ctx.request_repaint_after(Duration::from_millis(33));
    }
}
