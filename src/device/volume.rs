use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};

/// Flags accompanying a volume change, mirroring the host platform's
/// "show the volume indicator" request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeFlags {
    pub show_ui: bool,
}

impl VolumeFlags {
    pub const NONE: VolumeFlags = VolumeFlags { show_ui: false };
    pub const SHOW_UI: VolumeFlags = VolumeFlags { show_ui: true };
}

/// Stream-volume access in integer steps, `0..=max_volume`.
///
/// Levels outside the range are the caller's bug; implementations clamp
/// rather than reject, matching the platform services this models.
pub trait VolumeService {
    fn volume(&self) -> i32;
    fn set_volume(&mut self, level: i32, flags: VolumeFlags);
    fn max_volume(&self) -> i32;
}

/// Volume service backed by a rodio output sink.
///
/// Integer steps map linearly onto the sink gain. If no audio output
/// device is available the service still tracks the level so the rest of
/// the overlay behaves normally; it just has nothing to attenuate.
pub struct SinkVolume {
    // Stream must outlive the sink or playback stops.
    output: Option<(OutputStream, OutputStreamHandle, Sink)>,
    level: i32,
    max_level: i32,
    pending_indicator: Option<i32>,
}

impl SinkVolume {
    pub fn new(max_level: i32, initial_level: i32) -> Self {
        let output = match OutputStream::try_default() {
            Ok((stream, handle)) => match Sink::try_new(&handle) {
                Ok(sink) => Some((stream, handle, sink)),
                Err(e) => {
                    log::warn!("Failed to create audio sink, volume will be tracked only: {}", e);
                    None
                }
            },
            Err(e) => {
                log::warn!("No audio output device, volume will be tracked only: {}", e);
                None
            }
        };

        let mut service = Self {
            output,
            level: 0,
            max_level,
            pending_indicator: None,
        };
        service.apply_level(initial_level.clamp(0, max_level));
        log::info!("Volume service ready (level {}/{})", service.level, max_level);
        service
    }

    /// Starts an endless test tone on the sink so volume drags are
    /// audible in the demo.
    pub fn play_test_tone(&self, frequency: f32) {
        if let Some((_, _, sink)) = &self.output {
            sink.append(SineWave::new(frequency).amplify(0.3));
            sink.play();
            log::info!("Playing {} Hz test tone", frequency);
        }
    }

    /// The level of the last change that asked for the on-screen
    /// indicator, if any. Consumed by the GUI once per frame.
    pub fn take_indicator_request(&mut self) -> Option<i32> {
        self.pending_indicator.take()
    }

    fn apply_level(&mut self, level: i32) {
        self.level = level;
        if let Some((_, _, sink)) = &self.output {
            sink.set_volume(level as f32 / self.max_level as f32);
        }
    }
}

impl VolumeService for SinkVolume {
    fn volume(&self) -> i32 {
        self.level
    }

    fn set_volume(&mut self, level: i32, flags: VolumeFlags) {
        let clamped = level.clamp(0, self.max_level);
        if clamped != level {
            log::warn!("Volume {} outside [0, {}], clamping", level, self.max_level);
        }
        self.apply_level(clamped);
        if flags.show_ui {
            self.pending_indicator = Some(clamped);
        }
        log::debug!("Volume set to {}/{}", clamped, self.max_level);
    }

    fn max_volume(&self) -> i32 {
        self.max_level
    }
}
