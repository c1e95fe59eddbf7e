//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in `GameState`; entities never
//! own one another.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::*;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Won,
    Lost,
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start key
    StartMenu,
    /// Active gameplay
    Playing,
    /// Round over, waiting for a pointer press to restart
    Paused(RoundOutcome),
    /// Quit requested; the frame loop stops
    Quit,
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Asteroid,
    Junk,
}

impl ObstacleKind {
    pub fn size(&self) -> IVec2 {
        match self {
            ObstacleKind::Asteroid => IVec2::splat(ASTEROID_SIZE),
            ObstacleKind::Junk => IVec2::splat(JUNK_SIZE),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Asteroid => "asteroid",
            ObstacleKind::Junk => "junk",
        }
    }
}

/// A falling obstacle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub body: Body,
}

impl Obstacle {
    pub fn new(id: u32, kind: ObstacleKind, pos: IVec2) -> Self {
        Self {
            id,
            kind,
            body: Body::new(pos, kind.size()).with_velocity(IVec2::new(0, OBSTACLE_FALL_SPEED)),
        }
    }

    /// y past which the obstacle is considered off-screen
    #[inline]
    pub fn recycle_line(&self, screen: IVec2) -> i32 {
        screen.y + self.body.size.y
    }

    /// Fall one tick, looping back above the screen once past the bottom
    pub fn update<R: Rng + ?Sized>(&mut self, screen: IVec2, rng: &mut R) {
        self.body.advance();
        if self.body.pos.y > self.recycle_line(screen) {
            self.reset_pos(screen, rng);
        }
    }

    /// Reposition at a random spot just above the visible area
    pub fn reset_pos<R: Rng + ?Sized>(&mut self, screen: IVec2, rng: &mut R) {
        debug_assert!(
            self.body.size.x < screen.x,
            "obstacle wider than the screen"
        );
        self.body.pos.y = rng.random_range(RESPAWN_Y_MIN..RESPAWN_Y_MAX);
        self.body.pos.x = rng.random_range(0..screen.x - self.body.size.x);
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub body: Body,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            body: Body::new(
                IVec2::new(0, PLAYER_Y),
                IVec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            ),
        }
    }
}

impl Player {
    pub fn go_left(&mut self) {
        self.body.vel.x = -PLAYER_SPEED;
    }

    pub fn go_right(&mut self) {
        self.body.vel.x = PLAYER_SPEED;
    }

    pub fn stop(&mut self) {
        self.body.vel.x = 0;
    }

    /// Horizontal move only; y stays at the launch line
    pub fn update(&mut self) {
        self.body.pos.x += self.body.vel.x;
    }

    /// Engine lit (used for sprite selection)
    #[inline]
    pub fn is_thrusting(&self) -> bool {
        self.body.vel.x != 0
    }

    /// Put the ship back on screen if it drifted off either edge.
    /// Returns true when a clamp happened.
    pub fn clamp_to_screen(&mut self, screen_width: i32) -> bool {
        let x = self.body.pos.x;
        if x < 0 || x > screen_width {
            self.stop();
            self.body.pos.x = PLAYER_CLAMP_X;
            return true;
        }
        false
    }
}

/// A bullet travelling up the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projectile {
    pub id: u32,
    pub body: Body,
}

impl Projectile {
    pub fn new(id: u32, pos: IVec2) -> Self {
        Self {
            id,
            body: Body::new(pos, IVec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT))
                .with_velocity(IVec2::new(0, -PROJECTILE_SPEED)),
        }
    }

    pub fn update(&mut self) {
        self.body.advance();
    }

    /// Flown past the top of the play area
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.body.pos.y < PROJECTILE_CULL_Y
    }
}

/// One-pixel backstop line that swallows stray bullets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryMarker {
    body: Body,
}

impl BoundaryMarker {
    pub fn new(screen_width: i32) -> Self {
        Self {
            body: Body::new(IVec2::new(0, BOUNDARY_Y), IVec2::new(screen_width, 1)),
        }
    }

    pub fn body(&self) -> &Body {
        &self.body
    }
}

/// Score and health counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub score: u32,
    /// Can go negative; `LOSE_HEALTH` ends the round
    pub health: i32,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            score: 0,
            health: START_HEALTH,
        }
    }
}

impl Scoreboard {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn record_kill(&mut self) {
        self.score += 1;
    }

    pub fn record_hit(&mut self) {
        self.health -= 1;
    }

    pub fn has_won(&self) -> bool {
        self.score >= WIN_SCORE
    }

    pub fn has_lost(&self) -> bool {
        self.health <= LOSE_HEALTH
    }
}

/// Things that happened during a tick, for audio and presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Left the start menu
    RoundStarted,
    /// A bullet was spawned at the ship
    ShotFired,
    /// A bullet destroyed an obstacle
    ObstacleDestroyed(ObstacleKind),
    /// An obstacle crashed into the ship
    PlayerHit(ObstacleKind),
    RoundWon,
    RoundLost,
    /// Fresh wave after a pause
    Restarted,
    QuitRequested,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Playfield extent in pixels
    pub screen: IVec2,
    /// Current phase
    pub phase: GamePhase,
    pub scoreboard: Scoreboard,
    pub player: Player,
    pub boundary: BoundaryMarker,
    /// Live obstacles (sorted by id)
    pub obstacles: Vec<Obstacle>,
    /// Live bullets (sorted by id)
    pub projectiles: Vec<Projectile>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session on the default playfield
    pub fn new(seed: u64) -> Self {
        Self::with_screen(seed, crate::screen_size())
    }

    pub fn with_screen(seed: u64, screen: IVec2) -> Self {
        let mut state = Self::empty(seed, screen);
        state.spawn_wave(INITIAL_ASTEROIDS, INITIAL_JUNK);
        state
    }

    /// A session with no obstacles (useful for setting up scenarios)
    pub fn empty(seed: u64, screen: IVec2) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            screen,
            phase: GamePhase::StartMenu,
            scoreboard: Scoreboard::default(),
            player: Player::default(),
            boundary: BoundaryMarker::new(screen.x),
            obstacles: Vec::new(),
            projectiles: Vec::new(),
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Add an obstacle at an explicit position
    pub fn add_obstacle(&mut self, kind: ObstacleKind, pos: IVec2) -> u32 {
        let id = self.next_entity_id();
        self.obstacles.push(Obstacle::new(id, kind, pos));
        id
    }

    /// Add an obstacle somewhere in the upper part of the screen
    pub fn spawn_obstacle(&mut self, kind: ObstacleKind) -> u32 {
        let size = kind.size();
        let x = self.rng.random_range(0..self.screen.x - size.x);
        let y = self.rng.random_range(0..INITIAL_SPAWN_DEPTH);
        self.add_obstacle(kind, IVec2::new(x, y))
    }

    pub fn spawn_wave(&mut self, asteroids: usize, junk: usize) {
        for _ in 0..asteroids {
            self.spawn_obstacle(ObstacleKind::Asteroid);
        }
        for _ in 0..junk {
            self.spawn_obstacle(ObstacleKind::Junk);
        }
    }

    /// Spawn a bullet at the ship's current position
    pub fn fire_projectile(&mut self) -> u32 {
        let id = self.next_entity_id();
        let pos = self.player.body.pos;
        self.projectiles.push(Projectile::new(id, pos));
        id
    }

    /// Fresh round after a pause: new wave, counters back to their defaults
    pub fn restart_round(&mut self) {
        self.obstacles.clear();
        self.projectiles.clear();
        self.spawn_wave(RESTART_ASTEROIDS, RESTART_JUNK);
        self.scoreboard.reset();
        self.player.stop();
        self.phase = GamePhase::Playing;
    }

    pub fn obstacle_count(&self, kind: ObstacleKind) -> usize {
        self.obstacles.iter().filter(|o| o.kind == kind).count()
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Ensure entities are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.obstacles.sort_by_key(|o| o.id);
        self.projectiles.sort_by_key(|p| p.id);
    }
}
