//! Collision detection: a pure predicate over two bounding boxes.
//!
//! No response policy lives here; the game loop decides what a hit means.

use crate::types::Rect;

/// Whether two axis-aligned rectangles overlap on both axes.
///
/// Edge contact with zero-width overlap does not count as a collision.
pub fn collides(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_bounds_collide() {
        let r = Rect::new(150.0, 480.0, 50.0, 100.0);
        assert!(collides(&r, &r));
    }

    #[test]
    fn separation_on_either_axis_means_no_collision() {
        let vehicle = Rect::new(225.0, 480.0, 50.0, 100.0);
        // One lane over.
        assert!(!collides(&vehicle, &Rect::new(325.0, 480.0, 50.0, 100.0)));
        // Same lane, still descending.
        assert!(!collides(&vehicle, &Rect::new(225.0, 100.0, 50.0, 100.0)));
    }

    #[test]
    fn edge_contact_is_not_a_collision() {
        let a = Rect::new(225.0, 480.0, 50.0, 100.0);
        let touching_above = Rect::new(225.0, 380.0, 50.0, 100.0);
        assert!(!collides(&a, &touching_above));
    }

    #[test]
    fn collision_is_symmetric() {
        let a = Rect::new(225.0, 480.0, 50.0, 100.0);
        let b = Rect::new(240.0, 430.0, 50.0, 100.0);
        assert_eq!(collides(&a, &b), collides(&b, &a));
    }
}
