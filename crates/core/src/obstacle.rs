//! A single descending obstacle.
//!
//! The horizontal position is locked to a lane center at spawn and never
//! changes. The speed is captured by value at spawn time and frozen for the
//! obstacle's lifetime; later difficulty increases only affect newly spawned
//! obstacles.

use crate::road;
use crate::types::{Rect, FIELD_HEIGHT, OBSTACLE_HEIGHT, OBSTACLE_SPAWN_Y, OBSTACLE_WIDTH};

#[derive(Debug, Clone)]
pub struct Obstacle {
    x: f64,
    y: f64,
    speed: f64,
    /// Cosmetic style index for the renderer; no behavioral meaning.
    style: u8,
}

impl Obstacle {
    /// Spawn centered in `lane`, above the visible field.
    pub fn new(lane: u8, speed: f64, style: u8) -> Self {
        Self {
            x: road::lane_x(lane, OBSTACLE_WIDTH),
            y: OBSTACLE_SPAWN_Y,
            speed,
            style,
        }
    }

    /// Advance one tick straight down.
    pub fn advance(&mut self) {
        self.y += self.speed;
    }

    /// Whether the obstacle has scrolled past the bottom of the field.
    pub fn off_screen(&self) -> bool {
        self.y > FIELD_HEIGHT
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn style(&self) -> u8 {
        self.style
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_above_the_field_at_the_lane_center() {
        let ob = Obstacle::new(2, 2.0, 0);
        assert_eq!(ob.y(), OBSTACLE_SPAWN_Y);
        assert_eq!(ob.bounds().x, road::lane_x(2, OBSTACLE_WIDTH));
        assert_eq!((ob.bounds().w, ob.bounds().h), (OBSTACLE_WIDTH, OBSTACLE_HEIGHT));
    }

    #[test]
    fn advances_by_its_own_speed() {
        let mut ob = Obstacle::new(0, 3.0, 0);
        ob.advance();
        ob.advance();
        assert_eq!(ob.y(), OBSTACLE_SPAWN_Y + 6.0);
    }

    #[test]
    fn off_screen_once_past_the_bottom_edge() {
        let mut ob = Obstacle::new(1, 350.5, 0);
        assert!(!ob.off_screen());
        ob.advance(); // y = 250.5
        assert!(!ob.off_screen());
        ob.advance(); // y = 601.0
        assert!(ob.off_screen());
    }

    #[test]
    fn horizontal_position_is_immutable() {
        let mut ob = Obstacle::new(3, 2.0, 0);
        let x = ob.bounds().x;
        for _ in 0..100 {
            ob.advance();
        }
        assert_eq!(ob.bounds().x, x);
    }
}
