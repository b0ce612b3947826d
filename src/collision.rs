//! Axis-separated collision against static rectangles.

use macroquad::prelude::*;

/// Strict overlap: rectangles that only share an edge do not collide.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x + a.w > b.x && a.x < b.x + b.w && a.y + a.h > b.y && a.y < b.y + b.h
}

/// Pushes `actor` out of every obstacle it overlaps, along the axis of
/// shallower penetration, and zeroes the matching velocity component.
///
/// Obstacles are visited in order and each correction sees the position left
/// by the previous one. Returns `true` when some vertical correction landed
/// the actor on the side gravity pulls it toward: the top of an obstacle
/// normally, the bottom of one when `flipped`.
pub fn resolve(actor: &mut Rect, velocity: &mut Vec2, obstacles: &[Rect], flipped: bool) -> bool {
    let mut on_ground = false;

    for obstacle in obstacles {
        if !overlaps(actor, obstacle) {
            continue;
        }

        let delta = actor.center() - obstacle.center();
        let intersect_x = delta.x.abs() - (actor.w / 2.0 + obstacle.w / 2.0);
        let intersect_y = delta.y.abs() - (actor.h / 2.0 + obstacle.h / 2.0);

        if intersect_x >= 0.0 || intersect_y >= 0.0 {
            continue;
        }

        // Ties go to the horizontal branch.
        if intersect_y > intersect_x {
            if delta.y > 0.0 {
                actor.y = obstacle.y + obstacle.h;
                on_ground |= flipped;
            } else {
                actor.y = obstacle.y - actor.h;
                on_ground |= !flipped;
            }
            velocity.y = 0.0;
        } else {
            if delta.x > 0.0 {
                actor.x = obstacle.x + obstacle.w;
            } else {
                actor.x = obstacle.x - actor.w;
            }
            velocity.x = 0.0;
        }
    }

    on_ground
}

#[cfg(test)]
mod tests {
    use super::*;

    const TILE: Rect = Rect {
        x: 0.0,
        y: 200.0,
        w: 64.0,
        h: 64.0,
    };

    #[test]
    fn landing_on_top_snaps_y_and_grounds() {
        // 10 px deep vertically, 44 px deep horizontally
        let mut actor = Rect::new(4.0, 70.0, 40.0, 140.0);
        let mut velocity = vec2(50.0, 120.0);

        let on_ground = resolve(&mut actor, &mut velocity, &[TILE], false);

        assert!(on_ground);
        assert_eq!(actor.y, 60.0);
        assert_eq!(actor.x, 4.0);
        assert_eq!(velocity, vec2(50.0, 0.0));
    }

    #[test]
    fn landing_on_top_under_flipped_gravity_is_not_ground() {
        let mut actor = Rect::new(4.0, 70.0, 40.0, 140.0);
        let mut velocity = vec2(0.0, 120.0);

        let on_ground = resolve(&mut actor, &mut velocity, &[TILE], true);

        assert!(!on_ground);
        assert_eq!(actor.y, 60.0);
        assert_eq!(velocity.y, 0.0);
    }

    #[test]
    fn hitting_underside_grounds_only_when_flipped() {
        let below = Rect::new(4.0, 264.0 - 8.0, 40.0, 140.0);

        for (flipped, expected) in [(false, false), (true, true)] {
            let mut actor = below;
            let mut velocity = vec2(0.0, -90.0);
            let on_ground = resolve(&mut actor, &mut velocity, &[TILE], flipped);

            assert_eq!(on_ground, expected);
            assert_eq!(actor.y, 264.0);
            assert_eq!(velocity.y, 0.0);
        }
    }

    #[test]
    fn side_hit_snaps_x_and_zeroes_horizontal_velocity() {
        // overlapping the left edge by 5 px, spanning the tile vertically
        let mut actor = Rect::new(-35.0, 170.0, 40.0, 140.0);
        let mut velocity = vec2(200.0, 30.0);

        let on_ground = resolve(&mut actor, &mut velocity, &[TILE], false);

        assert!(!on_ground);
        assert_eq!(actor.x, -40.0);
        assert_eq!(actor.y, 170.0);
        assert_eq!(velocity, vec2(0.0, 30.0));
    }

    #[test]
    fn equal_penetration_resolves_horizontally() {
        let obstacle = Rect::new(0.0, 0.0, 20.0, 20.0);
        let mut actor = Rect::new(15.0, 15.0, 20.0, 20.0);
        let mut velocity = vec2(10.0, 10.0);

        resolve(&mut actor, &mut velocity, &[obstacle], false);

        assert_eq!(actor.x, 20.0);
        assert_eq!(actor.y, 15.0);
        assert_eq!(velocity, vec2(0.0, 10.0));
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let mut actor = Rect::new(0.0, 60.0, 40.0, 140.0);
        let mut velocity = vec2(5.0, 5.0);

        let on_ground = resolve(&mut actor, &mut velocity, &[TILE], false);

        assert!(!on_ground);
        assert_eq!(actor, Rect::new(0.0, 60.0, 40.0, 140.0));
        assert_eq!(velocity, vec2(5.0, 5.0));
    }

    #[test]
    fn later_obstacles_see_earlier_corrections() {
        let floor = [TILE, Rect::new(64.0, 200.0, 64.0, 64.0)];
        let mut actor = Rect::new(44.0, 65.0, 40.0, 140.0);
        let mut velocity = vec2(0.0, 300.0);

        let on_ground = resolve(&mut actor, &mut velocity, &floor, false);

        assert!(on_ground);
        assert_eq!(actor.y, 60.0);
        assert_eq!(actor.x, 44.0);
    }
}
