use std::cell::RefCell;
use std::rc::Rc;

/// How far a single fast-forward/rewind press skips, in milliseconds.
pub const SKIP_INCREMENT_MS: i64 = 10_000;

/// The playback engine as seen by the overlay: current position and seek,
/// both in milliseconds. Seek targets are issued unclamped; keeping them
/// inside `[0, duration]` is the handle's job, not the overlay's.
pub trait PlaybackHandle {
    fn current_position(&self) -> i64;
    fn seek_to(&mut self, position_ms: i64);
}

/// Shared, non-owning reference to the bound playback handle.
pub type PlaybackHandleRef = Rc<RefCell<dyn PlaybackHandle>>;

#[derive(Debug, thiserror::Error)]
pub enum OverlayError {
    /// Transport controls were wired before a player was bound. This is a
    /// programming error in the host, not a runtime condition to recover
    /// from.
    #[error("transport control invoked before a playback handle was bound")]
    HandleNotBound,
}

/// Fast-forward / rewind actions over the bound playback handle.
pub struct TransportControls {
    handle: Option<PlaybackHandleRef>,
    skip_ms: i64,
}

impl TransportControls {
    pub fn new(skip_ms: i64) -> Self {
        Self { handle: None, skip_ms }
    }

    pub fn bind_handle(&mut self, handle: PlaybackHandleRef) {
        self.handle = Some(handle);
    }

    pub fn is_bound(&self) -> bool {
        self.handle.is_some()
    }

    /// Skips forward by the configured increment. Returns the seek target
    /// that was issued.
    pub fn fast_forward(&self) -> Result<i64, OverlayError> {
        self.skip(self.skip_ms)
    }

    /// Skips backward by the configured increment. The target may be
    /// negative near the start of the media; the handle clamps it.
    pub fn rewind(&self) -> Result<i64, OverlayError> {
        self.skip(-self.skip_ms)
    }

    fn skip(&self, delta_ms: i64) -> Result<i64, OverlayError> {
        let handle = self.handle.as_ref().ok_or_else(|| {
            log::error!("Transport control used with no playback handle bound");
            OverlayError::HandleNotBound
        })?;
        let target = handle.borrow().current_position() + delta_ms;
        log::info!("Transport skip {:+} ms -> seek to {} ms", delta_ms, target);
        handle.borrow_mut().seek_to(target);
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every seek target it receives, unmodified, so tests can
    /// verify the overlay issues unclamped values.
    struct RecordingHandle {
        position: i64,
        seeks: Vec<i64>,
    }

    impl PlaybackHandle for RecordingHandle {
        fn current_position(&self) -> i64 {
            self.position
        }

        fn seek_to(&mut self, position_ms: i64) {
            self.seeks.push(position_ms);
        }
    }

    fn bound_controls(position: i64) -> (TransportControls, Rc<RefCell<RecordingHandle>>) {
        let handle = Rc::new(RefCell::new(RecordingHandle { position, seeks: Vec::new() }));
        let mut controls = TransportControls::new(SKIP_INCREMENT_MS);
        controls.bind_handle(handle.clone());
        (controls, handle)
    }

    #[test]
    fn test_fast_forward_adds_ten_seconds() {
        let (controls, handle) = bound_controls(50_000);
        let target = controls.fast_forward().unwrap();
        assert_eq!(target, 60_000);
        assert_eq!(handle.borrow().seeks, vec![60_000]);
    }

    #[test]
    fn test_rewind_issues_unclamped_negative_target() {
        // Clamping is the handle's contract, not the overlay's.
        let (controls, handle) = bound_controls(5_000);
        let target = controls.rewind().unwrap();
        assert_eq!(target, -5_000);
        assert_eq!(handle.borrow().seeks, vec![-5_000]);
    }

    #[test]
    fn test_transport_without_handle_is_contract_error() {
        let controls = TransportControls::new(SKIP_INCREMENT_MS);
        assert!(matches!(controls.fast_forward(), Err(OverlayError::HandleNotBound)));
        assert!(matches!(controls.rewind(), Err(OverlayError::HandleNotBound)));
    }

    #[test]
    fn test_rebinding_switches_handles() {
        let (mut controls, first) = bound_controls(0);
        let second = Rc::new(RefCell::new(RecordingHandle { position: 20_000, seeks: Vec::new() }));
        controls.bind_handle(second.clone());

        controls.fast_forward().unwrap();
        assert!(first.borrow().seeks.is_empty());
        assert_eq!(second.borrow().seeks, vec![30_000]);
    }
}
