use eframe::egui;

use crate::playback::{MediaSession, PlaybackHandle};

/// Scrubbing bar over the playback session with a position/duration readout.
pub struct SeekBarWidget {
    pub is_scrubbing: bool,
}

impl SeekBarWidget {
    pub fn new() -> Self {
        Self { is_scrubbing: false }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, session: &mut MediaSession) -> egui::Response {
        let duration_ms = session.duration_ms().max(1);
        let position_ms = session.position_ms();

        let available_width = ui.available_width() - 110.0; // Leave room for the time display
        let bar_height = 24.0;

        let (rect, response) = ui.allocate_exact_size(
            egui::Vec2::new(available_width.max(60.0), bar_height),
            egui::Sense::click_and_drag(),
        );

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            let track_rect = egui::Rect::from_min_size(
                egui::Pos2::new(rect.min.x, rect.center().y - 3.0),
                egui::Vec2::new(rect.width(), 6.0),
            );

            // Track background and played portion
            painter.rect_filled(
                track_rect,
                egui::Rounding::same(3.0),
                ui.visuals().extreme_bg_color,
            );

            let progress = position_ms as f32 / duration_ms as f32;
            let played_rect = egui::Rect::from_min_size(
                track_rect.min,
                egui::Vec2::new(track_rect.width() * progress.clamp(0.0, 1.0), track_rect.height()),
            );
            painter.rect_filled(
                played_rect,
                egui::Rounding::same(3.0),
                ui.visuals().selection.bg_fill,
            );

            // Playhead
            let playhead_x = track_rect.min.x + track_rect.width() * progress.clamp(0.0, 1.0);
            painter.circle_filled(
                egui::Pos2::new(playhead_x, track_rect.center().y),
                6.0,
                ui.visuals().selection.bg_fill,
            );

            if response.clicked() || response.dragged() {
                if let Some(pointer_pos) = response.interact_pointer_pos() {
                    self.is_scrubbing = true;
                    let relative_x =
                        ((pointer_pos.x - track_rect.min.x) / track_rect.width()).clamp(0.0, 1.0);
                    let target_ms = (relative_x as f64 * duration_ms as f64) as i64;
                    session.seek_to(target_ms);
                }
            }
            if response.drag_stopped() {
                self.is_scrubbing = false;
            }
        }

        ui.label(
            egui::RichText::new(format!(
                "{} / {}",
                format_time(position_ms),
                format_time(duration_ms)
            ))
            .monospace(),
        );

        response
    }
}

pub fn format_time(ms: i64) -> String {
    let total_secs = (ms.max(0)) / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::format_time;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(5_000), "0:05");
        assert_eq!(format_time(60_000), "1:00");
        assert_eq!(format_time(150_000), "2:30");
        assert_eq!(format_time(-5_000), "0:00");
    }
}
