//! Circle collision checks
//!
//! Every collider in the game is a circle: the player, each petal and each
//! monster. Overlap uses strict inequality, so touching circles do not
//! collide.

use glam::Vec2;

use super::state::{Monster, Petals, Player};
use crate::consts::PETAL_RADIUS;

/// Signed distance from `p` to the edge of a circle
#[inline]
pub fn sd_circle(p: Vec2, center: Vec2, radius: f32) -> f32 {
    (p - center).length() - radius
}

/// Whether two circles overlap
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    sd_circle(a, b, a_radius + b_radius) < 0.0
}

/// Index of the first petal that touches the monster, if any
///
/// Petals are checked in index order and the search stops at the first hit.
pub fn petal_hit(monster: &Monster, petals: &Petals, center: Vec2) -> Option<u32> {
    (0..petals.count).find(|&i| {
        circles_overlap(
            monster.pos,
            monster.radius,
            petals.position(center, i),
            PETAL_RADIUS,
        )
    })
}

/// Whether the monster has reached the player
#[inline]
pub fn monster_reaches_player(monster: &Monster, player: &Player) -> bool {
    circles_overlap(monster.pos, monster.radius, player.pos, player.radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monster_at(x: f32, y: f32, radius: f32) -> Monster {
        Monster {
            id: 1,
            pos: Vec2::new(x, y),
            radius,
            speed: 1.0,
        }
    }

    #[test]
    fn test_sd_circle() {
        let d = sd_circle(Vec2::new(10.0, 0.0), Vec2::ZERO, 4.0);
        assert!((d - 6.0).abs() < 1e-6);
        assert!(sd_circle(Vec2::ZERO, Vec2::ZERO, 4.0) < 0.0);
    }

    #[test]
    fn test_touching_circles_do_not_overlap() {
        assert!(!circles_overlap(Vec2::ZERO, 5.0, Vec2::new(10.0, 0.0), 5.0));
        assert!(circles_overlap(Vec2::ZERO, 5.0, Vec2::new(9.9, 0.0), 5.0));
    }

    #[test]
    fn test_petal_hit_on_first_petal() {
        let petals = Petals::default();
        let center = Vec2::new(400.0, 300.0);
        let monster = monster_at(460.0, 300.0, 20.0);
        assert_eq!(petal_hit(&monster, &petals, center), Some(0));
    }

    #[test]
    fn test_petal_hit_uses_monster_radius_plus_petal_radius() {
        let petals = Petals::default();
        let center = Vec2::new(400.0, 300.0);
        // Petal 0 sits at (460, 300); threshold is 20 + 15 = 35
        let just_outside = monster_at(460.0 + 35.0, 300.0, 20.0);
        let just_inside = monster_at(460.0 + 34.5, 300.0, 20.0);
        assert_eq!(petal_hit(&just_outside, &petals, center), None);
        assert_eq!(petal_hit(&just_inside, &petals, center), Some(0));
    }

    #[test]
    fn test_no_petal_hit_at_flower_center() {
        let petals = Petals::default();
        let center = Vec2::new(400.0, 300.0);
        let monster = monster_at(400.0, 300.0, 20.0);
        assert_eq!(petal_hit(&monster, &petals, center), None);
    }

    #[test]
    fn test_no_petals_never_hit() {
        let petals = Petals {
            count: 0,
            rotation: 0.0,
        };
        let monster = monster_at(460.0, 300.0, 40.0);
        assert_eq!(petal_hit(&monster, &petals, Vec2::new(400.0, 300.0)), None);
    }

    #[test]
    fn test_monster_reaches_player() {
        let player = Player {
            pos: Vec2::new(400.0, 300.0),
            radius: 30.0,
        };
        assert!(monster_reaches_player(&monster_at(449.0, 300.0, 20.0), &player));
        assert!(!monster_reaches_player(&monster_at(450.0, 300.0, 20.0), &player));
    }
}
