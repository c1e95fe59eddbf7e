//! Window-less backends
//!
//! Used by the native binary and by tests: the renderer and audio sink log
//! and record what they are asked to do, and input comes from a script.

use std::collections::VecDeque;

use crate::assets::Assets;
use crate::audio::{AudioSink, MusicTrack, SoundEffect};
use crate::platform::{InputEvent, InputSource, Key};
use crate::renderer::{Backdrop, Hud, Renderer, SpriteInstance};

/// Renderer that records presented frames instead of drawing them
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    assets: Option<Assets>,
    pending_backdrop: Option<Backdrop>,
    pending_sprites: usize,
    /// Backdrop of every presented frame, in order
    pub presented: Vec<Backdrop>,
    /// Sprite count of the last presented frame
    pub last_sprite_count: usize,
    /// Last HUD drawn
    pub last_hud: Option<Hud>,
    /// Sprites whose image was not in the asset set
    pub unresolved: usize,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve sprite images against a loaded asset set
    pub fn with_assets(assets: Assets) -> Self {
        Self {
            assets: Some(assets),
            ..Self::default()
        }
    }

    pub fn frames(&self) -> usize {
        self.presented.len()
    }

    /// How many presented frames showed `backdrop`
    pub fn count(&self, backdrop: Backdrop) -> usize {
        self.presented.iter().filter(|b| **b == backdrop).count()
    }
}

impl Renderer for HeadlessRenderer {
    fn draw_background(&mut self, backdrop: Backdrop) {
        if let Some(assets) = &self.assets {
            if assets.backdrop(backdrop).is_none() {
                self.unresolved += 1;
            }
        }
        self.pending_backdrop = Some(backdrop);
        self.pending_sprites = 0;
    }

    fn draw(&mut self, sprites: &[SpriteInstance]) {
        if let Some(assets) = &self.assets {
            self.unresolved += sprites
                .iter()
                .filter(|s| !s.kind.is_shape() && assets.sprite(s.kind).is_none())
                .count();
        }
        self.pending_sprites += sprites.len();
    }

    fn draw_hud(&mut self, hud: &Hud) {
        for (text, pos) in hud.lines() {
            log::trace!("HUD {text} at {pos}");
        }
        self.last_hud = Some(hud.clone());
    }

    fn present_frame(&mut self) {
        let backdrop = self.pending_backdrop.take().unwrap_or(Backdrop::Starfield);
        log::trace!(
            "Frame {}: {:?} with {} sprites",
            self.presented.len(),
            backdrop,
            self.pending_sprites
        );
        self.presented.push(backdrop);
        self.last_sprite_count = self.pending_sprites;
    }
}

/// Audio sink that logs and records playback requests
#[derive(Debug, Default)]
pub struct HeadlessAudio {
    pub sounds: Vec<SoundEffect>,
    pub music: Vec<(MusicTrack, bool)>,
}

impl AudioSink for HeadlessAudio {
    fn play_sound(&mut self, sound: SoundEffect, volume: f32) {
        log::trace!("Sound {:?} at {:.2}", sound, volume);
        self.sounds.push(sound);
    }

    fn play_music(&mut self, track: MusicTrack, looping: bool, volume: f32) {
        log::debug!("Music {:?} (loop: {}) at {:.2}", track, looping, volume);
        self.music.push((track, looping));
    }
}

/// Replays a fixed list of per-frame event batches.
///
/// Once the script runs out it reports a window close, so a session driven
/// by it always terminates.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Queue a batch for the next unconsumed frame
    pub fn push(&mut self, events: Vec<InputEvent>) -> &mut Self {
        self.frames.push_back(events);
        self
    }

    /// Queue `count` frames with no input
    pub fn idle(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.frames.push_back(Vec::new());
        }
        self
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    /// A short attract-mode run: start, strafe right while firing, then quit
    pub fn demo() -> Self {
        let mut script = Self::default();
        script
            .idle(2)
            .push(vec![InputEvent::KeyDown(Key::Down)])
            .push(vec![InputEvent::KeyDown(Key::Right)]);
        for _ in 0..20 {
            script.push(vec![InputEvent::KeyDown(Key::Up)]).idle(9);
        }
        script
            .push(vec![InputEvent::KeyUp(Key::Right)])
            .idle(60)
            .push(vec![InputEvent::KeyDown(Key::Space)]);
        script
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_else(|| vec![InputEvent::Quit])
    }
}
