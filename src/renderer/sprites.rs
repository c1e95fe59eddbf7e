//! Draw-list generation from game state

use glam::IVec2;

use super::{Backdrop, Frame, Hud, SpriteInstance, SpriteKind};
use crate::sim::{Body, GamePhase, GameState, ObstacleKind};

fn instance(kind: SpriteKind, body: &Body) -> SpriteInstance {
    SpriteInstance {
        kind,
        pos: body.pos,
        size: body.size,
    }
}

/// Score box in the top-right corner
pub fn hud_for(state: &GameState) -> Hud {
    Hud {
        score: state.scoreboard.score,
        health: state.scoreboard.health,
        anchor: IVec2::new(state.screen.x - Hud::BOX_SIZE.x, 0),
    }
}

/// Build the frame for the current phase.
///
/// The title screen is drawn alone. Every other phase shows the playfield:
/// obstacles, ship, backstop, bullets, then the HUD if enabled.
pub fn build_frame(state: &GameState, show_hud: bool) -> Frame {
    if state.phase == GamePhase::StartMenu {
        return Frame {
            backdrop: Backdrop::StartScreen,
            sprites: Vec::new(),
            hud: None,
        };
    }

    let mut sprites = Vec::with_capacity(state.obstacles.len() + state.projectiles.len() + 2);

    for obstacle in &state.obstacles {
        let kind = match obstacle.kind {
            ObstacleKind::Asteroid => SpriteKind::Asteroid,
            ObstacleKind::Junk => SpriteKind::Junk,
        };
        sprites.push(instance(kind, &obstacle.body));
    }

    let ship = if state.player.is_thrusting() {
        SpriteKind::ShipThrust
    } else {
        SpriteKind::ShipIdle
    };
    sprites.push(instance(ship, &state.player.body));
    sprites.push(instance(SpriteKind::Boundary, state.boundary.body()));

    for projectile in &state.projectiles {
        sprites.push(instance(SpriteKind::Bullet, &projectile.body));
    }

    Frame {
        backdrop: Backdrop::Starfield,
        sprites,
        hud: show_hud.then(|| hud_for(state)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_menu_frame_is_title_only() {
        let state = GameState::new(1);
        let frame = build_frame(&state, true);
        assert_eq!(frame.backdrop, Backdrop::StartScreen);
        assert!(frame.sprites.is_empty());
        assert!(frame.hud.is_none());
    }

    #[test]
    fn test_playfield_draw_order() {
        let mut state = GameState::empty(1, crate::screen_size());
        state.phase = GamePhase::Playing;
        state.add_obstacle(ObstacleKind::Junk, IVec2::new(10, 10));
        state.add_obstacle(ObstacleKind::Asteroid, IVec2::new(200, 10));
        state.fire_projectile();

        let frame = build_frame(&state, true);
        let kinds: Vec<_> = frame.sprites.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SpriteKind::Junk,
                SpriteKind::Asteroid,
                SpriteKind::ShipIdle,
                SpriteKind::Boundary,
                SpriteKind::Bullet,
            ]
        );
        assert_eq!(frame.backdrop, Backdrop::Starfield);
        assert_eq!(frame.sprites[4].size, IVec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT));
    }

    #[test]
    fn test_thrust_sprite_and_hud() {
        let mut state = GameState::empty(1, crate::screen_size());
        state.phase = GamePhase::Playing;
        state.player.go_left();
        state.scoreboard.score = 4;
        state.scoreboard.health = 2;

        let frame = build_frame(&state, true);
        assert!(frame.sprites.iter().any(|s| s.kind == SpriteKind::ShipThrust));

        let hud = frame.hud.expect("hud enabled");
        assert_eq!(hud.anchor, IVec2::new(SCREEN_WIDTH - 100, 0));
        let [health, score] = hud.lines();
        assert_eq!(health.0, "Health: 2");
        assert_eq!(score, ("Score: 4".to_string(), IVec2::new(SCREEN_WIDTH - 100, 20)));

        assert!(build_frame(&state, false).hud.is_none());
    }
}
