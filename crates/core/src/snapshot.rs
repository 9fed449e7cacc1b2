//! Per-tick world view handed to the renderer.
//!
//! The snapshot is the one-way seam between the simulation (single writer)
//! and the renderer (single reader). It is allocation-free on the hot path:
//! callers keep one [`WorldSnapshot`] and refill it every tick via
//! [`crate::GameState::snapshot_into`].

use arrayvec::ArrayVec;

use crate::types::{Rect, VehicleKind, INITIAL_LANE};

/// Upper bound on concurrently visible obstacles.
///
/// At the minimum speed of 2 px/tick an obstacle crosses the 700 px of
/// traveled space in 350 ticks, and spawns are 80 ticks apart, so the active
/// set never exceeds a handful; 16 leaves generous headroom.
pub const MAX_SNAPSHOT_OBSTACLES: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleView {
    pub bounds: Rect,
    /// Tilt in degrees; negative while sliding left.
    pub rotation: f64,
    pub lane: u8,
    pub moving: bool,
    pub kind: VehicleKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleView {
    pub bounds: Rect,
    /// Cosmetic style index.
    pub style: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorldSnapshot {
    pub vehicle: VehicleView,
    /// Active obstacles, in internal set order (not stable across removals).
    pub obstacles: ArrayVec<ObstacleView, MAX_SNAPSHOT_OBSTACLES>,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub started: bool,
    pub paused: bool,
    pub game_over: bool,
    /// Remaining lifetime of the level-up notification, 0 when expired.
    pub level_banner_ms: u32,
}

impl WorldSnapshot {
    /// Whether the simulation is actively ticking.
    pub fn playing(&self) -> bool {
        self.started && !self.paused && !self.game_over
    }
}

impl Default for WorldSnapshot {
    fn default() -> Self {
        Self {
            vehicle: VehicleView {
                bounds: Rect::default(),
                rotation: 0.0,
                lane: INITIAL_LANE,
                moving: false,
                kind: VehicleKind::Car,
            },
            obstacles: ArrayVec::new(),
            score: 0,
            high_score: 0,
            level: 1,
            started: false,
            paused: false,
            game_over: false,
            level_banner_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_not_playing() {
        let snap = WorldSnapshot::default();
        assert!(!snap.playing());
        assert!(snap.obstacles.is_empty());
        assert_eq!(snap.level, 1);
    }

    #[test]
    fn playing_requires_started_and_neither_terminal_state() {
        let mut snap = WorldSnapshot::default();
        snap.started = true;
        assert!(snap.playing());
        snap.paused = true;
        assert!(!snap.playing());
        snap.paused = false;
        snap.game_over = true;
        assert!(!snap.playing());
    }
}
