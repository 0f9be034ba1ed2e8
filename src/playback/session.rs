use std::time::Instant;

use crate::playback::control::PlaybackHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Media loaded, not yet started.
    Ready,
    Playing,
    Paused,
}

impl PlaybackState {
    pub fn can_play(&self) -> bool {
        matches!(self, PlaybackState::Ready | PlaybackState::Paused)
    }

    pub fn can_pause(&self) -> bool {
        matches!(self, PlaybackState::Playing)
    }

    pub fn can_seek(&self) -> bool {
        // Every state: the demo session always has media loaded.
        true
    }

    pub fn display_text(&self) -> &str {
        match self {
            PlaybackState::Ready => "Ready",
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
        }
    }
}

/// Wall-clock playback session used as the demo's playback handle.
///
/// Position advances in real time from the point playback started; it is
/// computed on read so the session needs no background thread. This is
/// the side that owns seek clamping: targets outside `[0, duration]` land
/// on the nearest bound.
pub struct MediaSession {
    duration_ms: i64,
    base_position_ms: i64,
    started_at: Option<Instant>,
    state: PlaybackState,
}

impl MediaSession {
    pub fn new(duration_ms: i64) -> Self {
        log::info!("Media session created ({} ms)", duration_ms);
        Self {
            duration_ms,
            base_position_ms: 0,
            started_at: None,
            state: PlaybackState::Ready,
        }
    }

    pub fn play(&mut self) {
        if !self.state.can_play() {
            log::warn!("Cannot play in state {:?}", self.state);
            return;
        }
        log::info!("Playback started at {} ms", self.base_position_ms);
        self.started_at = Some(Instant::now());
        self.state = PlaybackState::Playing;
    }

    pub fn pause(&mut self) {
        if !self.state.can_pause() {
            log::warn!("Cannot pause in state {:?}", self.state);
            return;
        }
        self.base_position_ms = self.position_ms();
        self.started_at = None;
        self.state = PlaybackState::Paused;
        log::info!("Playback paused at {} ms", self.base_position_ms);
    }

    pub fn toggle(&mut self) {
        if self.state.can_pause() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Settles end-of-media: called once per frame by the GUI.
    pub fn tick(&mut self) {
        if self.state == PlaybackState::Playing && self.position_ms() >= self.duration_ms {
            self.base_position_ms = self.duration_ms;
            self.started_at = None;
            self.state = PlaybackState::Paused;
            log::info!("Reached end of media");
        }
    }

    pub fn position_ms(&self) -> i64 {
        let elapsed = self
            .started_at
            .map(|t| t.elapsed().as_millis() as i64)
            .unwrap_or(0);
        (self.base_position_ms + elapsed).min(self.duration_ms)
    }

    pub fn duration_ms(&self) -> i64 {
        self.duration_ms
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }
}

impl PlaybackHandle for MediaSession {
    fn current_position(&self) -> i64 {
        self.position_ms()
    }

    fn seek_to(&mut self, position_ms: i64) {
        if !self.state.can_seek() {
            log::warn!("Cannot seek in state {:?}", self.state);
            return;
        }
        let clamped = position_ms.clamp(0, self.duration_ms);
        if clamped != position_ms {
            log::debug!("Clamped seek target {} ms to {} ms", position_ms, clamped);
        }
        self.base_position_ms = clamped;
        if self.state == PlaybackState::Playing {
            // Keep playing from the new position.
            self.started_at = Some(Instant::now());
        }
        log::info!("Seeked to {} ms", clamped);
    }
}
