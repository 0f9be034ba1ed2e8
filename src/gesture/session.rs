use std::cell::RefCell;
use std::rc::Rc;

use crate::device::{BrightnessSurface, VolumeFlags, VolumeService};
use crate::gesture::mapper;
use crate::gesture::zone::{classify_zone, GestureZone};

/// Capability the gesture controller needs from the overlay that hosts it:
/// keep the controls visible while the user is interacting.
pub trait OverlayHost {
    fn show_transient(&mut self);
}

/// Phase of a pointer event delivered by the view host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
}

/// A single pointer event over the touch surface.
///
/// `primary` is false for secondary pointers of a multi-touch sequence;
/// those never start or end a session.
#[derive(Debug, Clone, Copy)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub x: f32,
    pub y: f32,
    pub primary: bool,
}

impl TouchEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self { phase: TouchPhase::Down, x, y, primary: true }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self { phase: TouchPhase::Move, x, y, primary: true }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self { phase: TouchPhase::Up, x, y, primary: true }
    }
}

/// Dimensions of the surface the gesture is measured against.
#[derive(Debug, Clone, Copy)]
pub struct TouchSurface {
    pub width: f32,
    pub height: f32,
}

/// Touch session state. A session only exists between a primary-pointer
/// down and the next up; baselines are recaptured on every down, so two
/// consecutive downs never share a session.
#[derive(Debug, Clone, Copy)]
enum TouchSession {
    Idle,
    Tracking {
        start_x: f32,
        start_y: f32,
        baseline_volume: i32,
        baseline_brightness: f32,
    },
}

/// Routes drag gestures on the video surface to volume and brightness.
///
/// Left-edge drags adjust brightness, right-edge drags adjust volume,
/// both relative to the value captured at touch-down. Everything runs
/// synchronously on the event thread; values are applied on every move.
pub struct GestureController {
    volume: Rc<RefCell<dyn VolumeService>>,
    brightness: Rc<RefCell<dyn BrightnessSurface>>,
    max_volume: i32,
    zone_fraction: f32,
    brightness_floor: f32,
    session: TouchSession,
}

impl GestureController {
    pub fn new(
        volume: Rc<RefCell<dyn VolumeService>>,
        brightness: Rc<RefCell<dyn BrightnessSurface>>,
        zone_fraction: f32,
        brightness_floor: f32,
    ) -> Self {
        let max_volume = volume.borrow().max_volume();
        log::info!(
            "Gesture controller initialized (max volume {}, zone fraction {:.2})",
            max_volume,
            zone_fraction
        );
        Self {
            volume,
            brightness,
            max_volume,
            zone_fraction,
            brightness_floor,
            session: TouchSession::Idle,
        }
    }

    /// Feeds one pointer event through the session state machine.
    ///
    /// Returns true if the event was consumed by a brightness or volume
    /// adjustment; middle-zone drags fall through unhandled. Every event,
    /// consumed or not, keeps the overlay visible.
    pub fn on_touch(
        &mut self,
        event: TouchEvent,
        surface: TouchSurface,
        host: &mut dyn OverlayHost,
    ) -> bool {
        // Any interaction with the surface resets the overlay auto-hide.
        host.show_transient();

        match event.phase {
            TouchPhase::Down => {
                if !event.primary {
                    // Secondary pointers never start a session.
                    return false;
                }
                let baseline_volume = self.volume.borrow().volume();
                let baseline_brightness = self.brightness.borrow().brightness();
                log::debug!(
                    "Touch down at ({:.0}, {:.0}), baselines: volume {}, brightness {:.2}",
                    event.x,
                    event.y,
                    baseline_volume,
                    baseline_brightness
                );
                self.session = TouchSession::Tracking {
                    start_x: event.x,
                    start_y: event.y,
                    baseline_volume,
                    baseline_brightness,
                };
                false
            }
            TouchPhase::Move => self.on_move(event, surface),
            TouchPhase::Up => {
                if event.primary {
                    self.reset();
                }
                false
            }
        }
    }

    fn on_move(&mut self, event: TouchEvent, surface: TouchSurface) -> bool {
        let TouchSession::Tracking { start_x, start_y, baseline_volume, baseline_brightness } =
            self.session
        else {
            // Move with no preceding down: not our session, leave it alone.
            return false;
        };

        let percentage = mapper::drag_percentage(start_y, event.y, surface.height);
        match classify_zone(start_x, surface.width, self.zone_fraction) {
            GestureZone::Brightness => {
                let target =
                    mapper::brightness_target(percentage, baseline_brightness, self.brightness_floor);
                log::debug!("Brightness drag {:.2} -> {:.2}", percentage, target);
                self.brightness.borrow_mut().set_brightness(target);
                true
            }
            GestureZone::Volume => {
                let target = mapper::volume_target(percentage, baseline_volume, self.max_volume);
                log::debug!("Volume drag {:.2} -> {}", percentage, target);
                self.volume.borrow_mut().set_volume(target, VolumeFlags::SHOW_UI);
                true
            }
            GestureZone::Ignored => false,
        }
    }

    /// Explicitly returns the session to idle. Applied values are kept;
    /// only the baselines are discarded.
    pub fn reset(&mut self) {
        self.session = TouchSession::Idle;
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.session, TouchSession::Tracking { .. })
    }

    pub fn max_volume(&self) -> i32 {
        self.max_volume
    }
}
