//! Session manager
//!
//! Owns the game state and the collaborators, and runs the cooperative frame
//! loop: poll input, tick the simulation, react to its events, draw, then
//! sleep out the rest of the frame. Everything happens on the calling thread.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::audio::{AudioManager, AudioSink, MusicTrack};
use crate::consts::TICK_RATE;
use crate::platform::{Clock, FrameLimiter, InputSource, tick_input};
use crate::renderer::{Backdrop, Renderer, build_frame, render_banner, render_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, tick};

pub struct Session<R, S, I, C>
where
    R: Renderer,
    S: AudioSink,
    I: InputSource,
    C: Clock,
{
    state: GameState,
    settings: Settings,
    renderer: R,
    audio: AudioManager<S>,
    input: I,
    clock: C,
    limiter: FrameLimiter,
    frames: u64,
    music_started: bool,
}

impl<R, S, I, C> Session<R, S, I, C>
where
    R: Renderer,
    S: AudioSink,
    I: InputSource,
    C: Clock,
{
    pub fn new(settings: Settings, renderer: R, sink: S, input: I, clock: C) -> Self {
        let seed = settings.seed.unwrap_or_else(time_seed);
        log::info!("New session, seed {seed}");
        Self::with_state(GameState::new(seed), settings, renderer, sink, input, clock)
    }

    /// Start from a prepared state (any phase)
    pub fn with_state(
        state: GameState,
        settings: Settings,
        renderer: R,
        sink: S,
        input: I,
        clock: C,
    ) -> Self {
        let audio = AudioManager::from_settings(sink, &settings);
        Self {
            state,
            settings,
            renderer,
            audio,
            input,
            clock,
            limiter: FrameLimiter::new(TICK_RATE),
            frames: 0,
            music_started: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &S {
        self.audio.sink()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_finished(&self) -> bool {
        self.state.phase == GamePhase::Quit
    }

    /// Run until quit; returns the number of frames played
    pub fn run(&mut self) -> u64 {
        while !self.is_finished() {
            self.frame();
        }
        log::info!("Session ended after {} frames", self.frames);
        self.frames
    }

    /// One pass of the loop
    pub fn frame(&mut self) {
        if self.is_finished() {
            return;
        }
        if !self.music_started {
            self.audio.play_music(MusicTrack::Theme, true);
            self.music_started = true;
        }

        let events = self.input.poll_events();
        tick(&mut self.state, &tick_input(&events));

        for event in self.state.drain_events() {
            self.handle_event(event);
        }
        if self.is_finished() {
            return;
        }

        let frame = build_frame(&self.state, self.settings.show_hud);
        render_frame(&mut self.renderer, &frame);

        if self.state.phase == GamePhase::StartMenu {
            self.clock.sleep(self.settings.menu_frame_delay());
        }
        self.limiter.wait(&mut self.clock);
        self.frames += 1;
    }

    fn handle_event(&mut self, event: GameEvent) {
        self.audio.on_event(&event);
        match event {
            GameEvent::RoundWon => self.show_banner(Backdrop::WinScreen),
            GameEvent::RoundLost => self.show_banner(Backdrop::LoseScreen),
            _ => {}
        }
    }

    /// Full-screen round result, held for the configured delay
    fn show_banner(&mut self, backdrop: Backdrop) {
        log::info!("Showing {:?}", backdrop);
        render_banner(&mut self.renderer, backdrop);
        self.clock.sleep(self.settings.end_banner_delay());
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{HeadlessAudio, HeadlessRenderer, ScriptedInput};
    use crate::platform::{InputEvent, Key, ManualClock};
    use std::time::Duration;

    type TestSession = Session<HeadlessRenderer, HeadlessAudio, ScriptedInput, ManualClock>;

    fn session(script: ScriptedInput, settings: Settings) -> TestSession {
        let settings = Settings {
            seed: Some(5),
            ..settings
        };
        Session::new(
            settings,
            HeadlessRenderer::new(),
            HeadlessAudio::default(),
            script,
            ManualClock::default(),
        )
    }

    #[test]
    fn test_menu_frames_are_delayed() {
        let mut script = ScriptedInput::default();
        script.idle(2).push(vec![InputEvent::KeyDown(Key::Space)]);
        let mut s = session(script, Settings::default());

        assert_eq!(s.run(), 2);
        assert_eq!(s.renderer().count(Backdrop::StartScreen), 2);
        let menu_delays = s
            .clock()
            .sleeps
            .iter()
            .filter(|d| **d == Duration::from_millis(800))
            .count();
        assert_eq!(menu_delays, 2);
    }

    #[test]
    fn test_music_starts_once() {
        let mut script = ScriptedInput::default();
        script.push(vec![InputEvent::KeyDown(Key::Down)]).idle(5);
        let mut s = session(script, Settings::instant());
        s.run();
        assert_eq!(s.audio().music, vec![(MusicTrack::Theme, true)]);
    }

    #[test]
    fn test_quit_skips_drawing() {
        let script = ScriptedInput::new([vec![InputEvent::Quit]]);
        let mut s = session(script, Settings::instant());
        assert_eq!(s.run(), 0);
        assert_eq!(s.renderer().frames(), 0);
        assert!(s.is_finished());

        // Further frames are no-ops
        s.frame();
        assert_eq!(s.frames(), 0);
    }
}
