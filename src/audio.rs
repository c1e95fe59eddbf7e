//! Audio front-end
//!
//! The game only talks in sound ids; an `AudioSink` backend owns the
//! decoded clips and does the actual mixing.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Bullet fired from the ship
    Laser,
}

/// Music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MusicTrack {
    /// Background score, looped for the whole session
    Theme,
}

/// Audio backend: fire-and-forget playback
pub trait AudioSink {
    fn play_sound(&mut self, sound: SoundEffect, volume: f32);
    fn play_music(&mut self, track: MusicTrack, looping: bool, volume: f32);
}

/// Which one-shot, if any, accompanies a simulation event
pub fn sound_for(event: &GameEvent) -> Option<SoundEffect> {
    match event {
        GameEvent::ShotFired => Some(SoundEffect::Laser),
        _ => None,
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
        }
    }

    pub fn from_settings(sink: S, settings: &Settings) -> Self {
        let mut manager = Self::new(sink);
        manager.set_master_volume(settings.master_volume);
        manager.set_sfx_volume(settings.sfx_volume);
        manager.set_music_volume(settings.music_volume);
        manager.set_muted(settings.muted);
        manager
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective(&self, channel: f32) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * channel
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective(self.sfx_volume);
        if vol <= 0.0 {
            return;
        }
        self.sink.play_sound(effect, vol);
    }

    /// Start a music track
    pub fn play_music(&mut self, track: MusicTrack, looping: bool) {
        let vol = self.effective(self.music_volume);
        if vol <= 0.0 {
            log::debug!("Music {:?} skipped, volume is zero", track);
            return;
        }
        self.sink.play_music(track, looping, vol);
    }

    /// Play whatever sound goes with `event`
    pub fn on_event(&mut self, event: &GameEvent) {
        if let Some(effect) = sound_for(event) {
            self.play(effect);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
