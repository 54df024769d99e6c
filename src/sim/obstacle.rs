//! Obstacles: a solid column with a fixed-size gap
//!
//! The top zone runs from the world's top edge down to `gap_top`, the bottom
//! zone from `gap_bottom` to the floor. Only `x` and `passed` change after
//! creation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;

/// A scrolling obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub gap_top: f32,
    pub gap_bottom: f32,
    /// Set once the actor has cleared it
    pub passed: bool,
}

impl Obstacle {
    pub fn new(id: u32, x: f32, width: f32, gap_top: f32, gap_bottom: f32) -> Self {
        debug_assert!(gap_bottom >= gap_top);
        Self {
            id,
            x,
            width,
            gap_top,
            gap_bottom,
            passed: false,
        }
    }

    /// Move left by `distance`
    pub fn advance(&mut self, distance: f32) {
        self.x -= distance;
    }

    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }

    pub fn gap_size(&self) -> f32 {
        self.gap_bottom - self.gap_top
    }

    /// Right edge has moved past the world's left edge
    pub fn off_screen(&self) -> bool {
        self.right_edge() < 0.0
    }

    pub fn top_zone(&self) -> Aabb {
        Aabb::from_pos_size(Vec2::new(self.x, 0.0), Vec2::new(self.width, self.gap_top))
    }

    pub fn bottom_zone(&self, world_height: f32) -> Aabb {
        Aabb::from_pos_size(
            Vec2::new(self.x, self.gap_bottom),
            Vec2::new(self.width, world_height - self.gap_bottom),
        )
    }

    pub fn overlaps(&self, actor_box: &Aabb, world_height: f32) -> bool {
        self.top_zone().intersects(actor_box) || self.bottom_zone(world_height).intersects(actor_box)
    }

    /// Mark as passed once the right edge is left of `actor_x`.
    /// Returns true only on the tick it flips, so each obstacle scores once.
    pub fn mark_passed_if_ready(&mut self, actor_x: f32) -> bool {
        if !self.passed && self.right_edge() < actor_x {
            self.passed = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WIDTH: f32 = 52.0;

    fn obstacle(x: f32) -> Obstacle {
        Obstacle::new(7, x, WIDTH, 200.0, 350.0)
    }

    #[test]
    fn test_off_screen_boundary() {
        assert!(obstacle(-WIDTH - 1.0).off_screen());
        assert!(!obstacle(-WIDTH + 1.0).off_screen());
        assert!(!obstacle(-WIDTH).off_screen(), "right edge exactly at 0 is still visible");
    }

    #[test]
    fn test_advance() {
        let mut o = obstacle(400.0);
        o.advance(3.0);
        o.advance(3.0);
        assert_eq!(o.x, 394.0);
    }

    #[test]
    fn test_zones() {
        let o = obstacle(100.0);
        assert_eq!(o.top_zone(), Aabb::new(Vec2::new(100.0, 0.0), Vec2::new(152.0, 200.0)));
        assert_eq!(
            o.bottom_zone(600.0),
            Aabb::new(Vec2::new(100.0, 350.0), Vec2::new(152.0, 600.0))
        );
    }

    #[test]
    fn test_pass_fires_once() {
        let mut o = obstacle(100.0);
        // Right edge at 152, actor at 100
        assert!(!o.mark_passed_if_ready(100.0));
        o.advance(52.0);
        // Right edge exactly at the actor: not yet
        assert!(!o.mark_passed_if_ready(100.0));
        o.advance(1.0);
        assert!(o.mark_passed_if_ready(100.0));
        assert!(o.passed);
        o.advance(1.0);
        assert!(!o.mark_passed_if_ready(100.0));
        assert!(o.passed);
    }

    proptest! {
        #[test]
        fn prop_gap_size_constant_while_moving(
            gap_top in 50.0f32..400.0,
            steps in 1usize..300,
            speed in 0.5f32..10.0,
        ) {
            let mut o = Obstacle::new(1, 400.0, WIDTH, gap_top, gap_top + 150.0);
            let gap = o.gap_size();
            for _ in 0..steps {
                o.advance(speed);
                o.mark_passed_if_ready(100.0);
                prop_assert_eq!(o.gap_size(), gap);
            }
        }
    }
}
