//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod state;
pub mod tick;

pub use body::Body;
pub use collision::{ProjectileOutcome, first_overlap, resolve_player_hits, resolve_projectiles};
pub use state::{
    BoundaryMarker, GameEvent, GamePhase, GameState, Obstacle, ObstacleKind, Player, Projectile,
    RoundOutcome, Scoreboard,
};
pub use tick::{Command, TickInput, tick};
