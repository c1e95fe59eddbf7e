//! Collision passes over the live entity sets
//!
//! Plain O(n·m) AABB scans. Each pass removes what it consumes, so a
//! retired bullet or obstacle is never tested again in the same tick.

use super::body::Body;
use super::state::{BoundaryMarker, Obstacle, ObstacleKind, Projectile};

/// Why a bullet left play this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileOutcome {
    /// Destroyed an obstacle of the given kind
    Hit(ObstacleKind),
    /// Flew above the cull line
    Spent,
    /// Swallowed by the boundary marker
    Backstop,
}

/// Index of the first obstacle overlapping `body`, in id order
pub fn first_overlap(body: &Body, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles.iter().position(|o| o.body.overlaps(body))
}

/// Resolve every bullet against obstacles, the cull line and the boundary.
///
/// At most one outcome per bullet, checked in that order. A bullet that
/// overlaps several obstacles only takes out the first one.
pub fn resolve_projectiles(
    projectiles: &mut Vec<Projectile>,
    obstacles: &mut Vec<Obstacle>,
    boundary: &BoundaryMarker,
) -> Vec<ProjectileOutcome> {
    let mut outcomes = Vec::new();

    projectiles.retain(|projectile| {
        let outcome = if let Some(idx) = first_overlap(&projectile.body, obstacles) {
            let obstacle = obstacles.remove(idx);
            ProjectileOutcome::Hit(obstacle.kind)
        } else if projectile.is_spent() {
            ProjectileOutcome::Spent
        } else if projectile.body.overlaps(boundary.body()) {
            ProjectileOutcome::Backstop
        } else {
            return true;
        };
        outcomes.push(outcome);
        false
    });

    outcomes
}

/// Remove every obstacle touching the ship; returns their kinds
pub fn resolve_player_hits(player: &Body, obstacles: &mut Vec<Obstacle>) -> Vec<ObstacleKind> {
    let mut hits = Vec::new();
    obstacles.retain(|obstacle| {
        if obstacle.body.overlaps(player) {
            hits.push(obstacle.kind);
            false
        } else {
            true
        }
    });
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::IVec2;

    fn asteroid(id: u32, x: i32, y: i32) -> Obstacle {
        Obstacle::new(id, ObstacleKind::Asteroid, IVec2::new(x, y))
    }

    fn junk(id: u32, x: i32, y: i32) -> Obstacle {
        Obstacle::new(id, ObstacleKind::Junk, IVec2::new(x, y))
    }

    fn boundary() -> BoundaryMarker {
        BoundaryMarker::new(SCREEN_WIDTH)
    }

    #[test]
    fn test_single_hit_consumes_both() {
        let mut obstacles = vec![asteroid(1, 100, 300), junk(2, 600, 300)];
        let mut projectiles = vec![Projectile::new(10, IVec2::new(120, 350))];

        let outcomes = resolve_projectiles(&mut projectiles, &mut obstacles, &boundary());
        assert_eq!(outcomes, vec![ProjectileOutcome::Hit(ObstacleKind::Asteroid)]);
        assert!(projectiles.is_empty());
        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles[0].id, 2);
    }

    #[test]
    fn test_overlapping_obstacles_first_match_only() {
        // Both obstacles cover the bullet; only the lower id goes
        let mut obstacles = vec![junk(1, 100, 300), asteroid(2, 110, 310)];
        let mut projectiles = vec![Projectile::new(10, IVec2::new(150, 350))];

        let outcomes = resolve_projectiles(&mut projectiles, &mut obstacles, &boundary());
        assert_eq!(outcomes, vec![ProjectileOutcome::Hit(ObstacleKind::Junk)]);
        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles[0].id, 2);
    }

    #[test]
    fn test_two_bullets_one_obstacle() {
        let mut obstacles = vec![asteroid(1, 100, 300)];
        let mut projectiles = vec![
            Projectile::new(10, IVec2::new(120, 350)),
            Projectile::new(11, IVec2::new(130, 350)),
        ];

        let outcomes = resolve_projectiles(&mut projectiles, &mut obstacles, &boundary());
        assert_eq!(outcomes.len(), 1);
        assert!(obstacles.is_empty());
        assert_eq!(projectiles.len(), 1);
        assert_eq!(projectiles[0].id, 11);
    }

    #[test]
    fn test_spent_bullet_removed_once() {
        let mut obstacles = Vec::new();
        let mut projectiles = vec![
            Projectile::new(10, IVec2::new(400, PROJECTILE_CULL_Y - 1)),
            Projectile::new(11, IVec2::new(400, PROJECTILE_CULL_Y)),
        ];

        let outcomes = resolve_projectiles(&mut projectiles, &mut obstacles, &boundary());
        assert_eq!(outcomes, vec![ProjectileOutcome::Spent]);
        assert_eq!(projectiles[0].id, 11);
    }

    #[test]
    fn test_hit_takes_precedence_over_cull() {
        let mut obstacles = vec![asteroid(1, 380, 40)];
        let mut projectiles = vec![Projectile::new(10, IVec2::new(400, 60))];

        let outcomes = resolve_projectiles(&mut projectiles, &mut obstacles, &boundary());
        assert_eq!(outcomes, vec![ProjectileOutcome::Hit(ObstacleKind::Asteroid)]);
    }

    #[test]
    fn test_backstop_catches_bullet() {
        let marker = boundary();
        let mut obstacles = Vec::new();
        let mut projectiles = vec![Projectile::new(10, IVec2::new(400, BOUNDARY_Y - 2))];

        // Spent takes priority over the backstop
        let outcomes = resolve_projectiles(&mut projectiles, &mut obstacles, &marker);
        assert_eq!(outcomes, vec![ProjectileOutcome::Spent]);

        assert!(Projectile::new(11, IVec2::new(400, BOUNDARY_Y - 2))
            .body
            .overlaps(marker.body()));
    }

    #[test]
    fn test_player_hits_every_overlap() {
        let ship = Body::new(IVec2::new(500, PLAYER_Y), IVec2::new(PLAYER_WIDTH, PLAYER_HEIGHT));
        let mut obstacles = vec![
            asteroid(1, 480, 580),
            junk(2, 540, 600),
            asteroid(3, 900, 600),
            junk(4, 560, 700),
        ];

        let hits = resolve_player_hits(&ship, &mut obstacles);
        assert_eq!(
            hits,
            vec![ObstacleKind::Asteroid, ObstacleKind::Junk, ObstacleKind::Junk]
        );
        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles[0].id, 3);
    }
}
