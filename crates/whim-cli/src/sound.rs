//! Best-effort spin sound
//!
//! The spin never depends on audio: a missing clip, an unreadable file, or a
//! machine without an audio device logs a warning and the wheel keeps
//! turning. Playback stops when the spin finishes or on reset, which bounds
//! the clip to the spin duration.

pub use imp::SpinSound;

#[cfg(feature = "sound")]
mod imp {
    use kira::manager::{AudioManager, AudioManagerSettings, DefaultBackend};
    use kira::sound::static_sound::{StaticSoundData, StaticSoundHandle};
    use kira::tween::Tween;
    use std::path::PathBuf;

    /// Plays the spin clip through the system audio device
    pub struct SpinSound {
        /// Clip path; cleared after the first failure so we warn once
        file: Option<PathBuf>,
        manager: Option<AudioManager>,
        handle: Option<StaticSoundHandle>,
    }

    impl SpinSound {
        pub fn new(enabled: bool, file: Option<PathBuf>) -> Self {
            Self {
                file: if enabled { file } else { None },
                manager: None,
                handle: None,
            }
        }

        /// Start the clip. Degrades to silence on any failure.
        pub fn play(&mut self) {
            let Some(path) = self.file.clone() else {
                return;
            };

            if self.manager.is_none() {
                match AudioManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
                    Ok(manager) => self.manager = Some(manager),
                    Err(e) => {
                        tracing::warn!(error = %e, "audio device unavailable, spinning silently");
                        self.file = None;
                        return;
                    }
                }
            }

            let data = match StaticSoundData::from_file(&path) {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "spin sound unavailable, spinning silently"
                    );
                    self.file = None;
                    return;
                }
            };

            if let Some(manager) = self.manager.as_mut() {
                match manager.play(data) {
                    Ok(handle) => self.handle = Some(handle),
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to play spin sound");
                    }
                }
            }
        }

        /// Stop the clip if one is playing
        pub fn stop(&mut self) {
            if let Some(mut handle) = self.handle.take() {
                let _ = handle.stop(Tween::default());
            }
        }
    }
}

#[cfg(not(feature = "sound"))]
mod imp {
    use std::path::PathBuf;

    /// No-op stand-in when built without the `sound` feature
    pub struct SpinSound;

    impl SpinSound {
        pub fn new(enabled: bool, file: Option<PathBuf>) -> Self {
            if enabled && file.is_some() {
                tracing::debug!("built without the sound feature, spin sound disabled");
            }
            Self
        }

        pub fn play(&mut self) {}

        pub fn stop(&mut self) {}
    }
}
