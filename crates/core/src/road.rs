//! Lane geometry of the four-lane road.

use crate::types::{LANE_WIDTH, ROAD_MARGIN};

/// Horizontal position of an entity of the given width, centered in `lane`.
///
/// Computed per entity because widths vary by vehicle and obstacle kind.
pub fn lane_x(lane: u8, entity_width: f64) -> f64 {
    ROAD_MARGIN + lane as f64 * LANE_WIDTH + (LANE_WIDTH - entity_width) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FIELD_WIDTH, MAX_LANE};

    #[test]
    fn lane_x_is_strictly_increasing() {
        for w in [30.0, 50.0, 80.0] {
            for lane in 0..MAX_LANE {
                assert!(lane_x(lane, w) < lane_x(lane + 1, w));
            }
        }
    }

    #[test]
    fn lane_x_centers_the_entity() {
        for lane in 0..=MAX_LANE {
            let lane_center = ROAD_MARGIN + lane as f64 * LANE_WIDTH + LANE_WIDTH / 2.0;
            for w in [30.0, 50.0, 80.0] {
                assert_eq!(lane_x(lane, w) + w / 2.0, lane_center);
            }
        }
    }

    #[test]
    fn lanes_stay_inside_the_road() {
        assert!(lane_x(0, 80.0) >= ROAD_MARGIN);
        assert!(lane_x(MAX_LANE, 80.0) + 80.0 <= FIELD_WIDTH - ROAD_MARGIN);
    }

    #[test]
    fn obstacle_lane_positions_match_reference_values() {
        // 50-wide obstacle: margin + lane*100 + 25.
        assert_eq!(lane_x(0, 50.0), 125.0);
        assert_eq!(lane_x(1, 50.0), 225.0);
        assert_eq!(lane_x(2, 50.0), 325.0);
        assert_eq!(lane_x(3, 50.0), 425.0);
    }
}
