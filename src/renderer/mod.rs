//! Rendering front-end
//!
//! The simulation is turned into a flat `Frame` (backdrop, sprite list, HUD)
//! which a `Renderer` backend draws. Backends own the decoded images.

pub mod sprites;

use glam::IVec2;
use serde::{Deserialize, Serialize};

pub use sprites::{build_frame, hud_for};

/// Full-screen images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Backdrop {
    /// In-game starfield
    Starfield,
    /// Title screen
    StartScreen,
    WinScreen,
    LoseScreen,
}

/// Sprite images and flat shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKind {
    Asteroid,
    Junk,
    /// Ship with engine off
    ShipIdle,
    /// Ship while moving
    ShipThrust,
    /// Red 2x8 bar
    Bullet,
    /// Black backstop line
    Boundary,
}

impl SpriteKind {
    /// Flat-colored sprites have no image file
    pub fn is_shape(&self) -> bool {
        matches!(self, SpriteKind::Bullet | SpriteKind::Boundary)
    }
}

/// One sprite to draw at a top-left position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteInstance {
    pub kind: SpriteKind,
    pub pos: IVec2,
    pub size: IVec2,
}

/// Score box text lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub health: i32,
    /// Top-left corner of the score box
    pub anchor: IVec2,
}

impl Hud {
    /// Width and height of the black score box
    pub const BOX_SIZE: IVec2 = IVec2::new(100, 50);
    pub const LINE_HEIGHT: i32 = 20;

    /// Text and position of each line, health first
    pub fn lines(&self) -> [(String, IVec2); 2] {
        [
            (format!("Health: {}", self.health), self.anchor),
            (
                format!("Score: {}", self.score),
                self.anchor + IVec2::new(0, Self::LINE_HEIGHT),
            ),
        ]
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub backdrop: Backdrop,
    pub sprites: Vec<SpriteInstance>,
    pub hud: Option<Hud>,
}

/// Rendering backend
pub trait Renderer {
    fn draw_background(&mut self, backdrop: Backdrop);
    fn draw(&mut self, sprites: &[SpriteInstance]);
    fn draw_hud(&mut self, hud: &Hud);
    fn present_frame(&mut self);
}

/// Submit a frame to a backend in draw order
pub fn render_frame<R: Renderer + ?Sized>(renderer: &mut R, frame: &Frame) {
    renderer.draw_background(frame.backdrop);
    if !frame.sprites.is_empty() {
        renderer.draw(&frame.sprites);
    }
    if let Some(hud) = &frame.hud {
        renderer.draw_hud(hud);
    }
    renderer.present_frame();
}

/// Show a full-screen image on its own
pub fn render_banner<R: Renderer + ?Sized>(renderer: &mut R, backdrop: Backdrop) {
    renderer.draw_background(backdrop);
    renderer.present_frame();
}
