//! Fixed timestep simulation tick
//!
//! Core game loop step: commands, movement, collisions, round rules.

use super::collision::{ProjectileOutcome, resolve_player_hits, resolve_projectiles};
use super::state::{GameEvent, GamePhase, GameState, RoundOutcome};

/// A discrete player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the start menu
    Start,
    MoveLeft,
    MoveRight,
    /// Left key released
    ReleaseLeft,
    /// Right key released
    ReleaseRight,
    Fire,
    /// Begin a new round from the pause screen
    Restart,
    Quit,
}

/// Input commands for a single tick, applied in order
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn has(&self, command: Command) -> bool {
        self.commands.contains(&command)
    }
}

impl From<Command> for TickInput {
    fn from(command: Command) -> Self {
        Self::new(vec![command])
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::Quit {
        return;
    }

    // Quit wins over everything else in the same frame
    if input.has(Command::Quit) {
        log::info!("Quit requested during {:?}", state.phase);
        state.phase = GamePhase::Quit;
        state.events.push(GameEvent::QuitRequested);
        return;
    }

    match state.phase {
        GamePhase::StartMenu => {
            if input.has(Command::Start) {
                log::info!("Leaving start menu");
                state.phase = GamePhase::Playing;
                state.events.push(GameEvent::RoundStarted);
            }
        }

        GamePhase::Paused(outcome) => {
            if input.has(Command::Restart) {
                log::info!("Restarting after {:?}", outcome);
                state.restart_round();
                state.events.push(GameEvent::Restarted);
            }
        }

        GamePhase::Playing => step_playing(state, input),

        GamePhase::Quit => {}
    }
}

fn step_playing(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    for command in &input.commands {
        match command {
            Command::MoveLeft => state.player.go_left(),
            Command::MoveRight => state.player.go_right(),
            Command::ReleaseLeft => {
                if state.player.body.vel.x < 0 {
                    state.player.stop();
                }
            }
            Command::ReleaseRight => {
                if state.player.body.vel.x > 0 {
                    state.player.stop();
                }
            }
            Command::Fire => {
                state.fire_projectile();
                state.events.push(GameEvent::ShotFired);
            }
            Command::Start | Command::Restart | Command::Quit => {}
        }
    }

    // Movement
    state.player.update();
    if state.player.clamp_to_screen(state.screen.x) {
        log::debug!("Ship left the screen, clamped back");
    }
    let screen = state.screen;
    let mut obstacles = std::mem::take(&mut state.obstacles);
    for obstacle in &mut obstacles {
        obstacle.update(screen, state.rng());
    }
    state.obstacles = obstacles;
    for projectile in &mut state.projectiles {
        projectile.update();
    }

    // Bullets vs obstacles, cull line and backstop
    let outcomes = resolve_projectiles(
        &mut state.projectiles,
        &mut state.obstacles,
        &state.boundary,
    );
    for outcome in outcomes {
        if let ProjectileOutcome::Hit(kind) = outcome {
            state.scoreboard.record_kill();
            log::debug!("Destroyed {}, score {}", kind.as_str(), state.scoreboard.score);
            state.events.push(GameEvent::ObstacleDestroyed(kind));
        }
    }

    // Ship vs obstacles
    for kind in resolve_player_hits(&state.player.body, &mut state.obstacles) {
        state.scoreboard.record_hit();
        log::debug!("Hit by {}, health {}", kind.as_str(), state.scoreboard.health);
        state.events.push(GameEvent::PlayerHit(kind));
    }

    // Round rules; health is left as-is on a loss
    if state.scoreboard.has_won() {
        log::info!("Round won at tick {}", state.time_ticks);
        state.scoreboard.score = 0;
        state.phase = GamePhase::Paused(RoundOutcome::Won);
        state.events.push(GameEvent::RoundWon);
    } else if state.scoreboard.has_lost() {
        log::info!("Round lost at tick {}", state.time_ticks);
        state.phase = GamePhase::Paused(RoundOutcome::Lost);
        state.events.push(GameEvent::RoundLost);
    }

    // Ensure deterministic ordering
    state.normalize_order();
}
