//! Game state module - manages the complete session state
//!
//! Ties together the vehicle, the active obstacle set, the spawner, and the
//! score/level progression, and drives them all from a single fixed-cadence
//! `tick`. All mutation happens here, on one thread, to completion, before
//! the next tick may fire; intents arrive through [`GameState::apply_action`]
//! between ticks.

use crate::collision::collides;
use crate::obstacle::Obstacle;
use crate::snapshot::{ObstacleView, VehicleView, WorldSnapshot};
use crate::spawner::ObstacleSpawner;
use crate::types::{
    GameAction, VehicleKind, BASE_OBSTACLE_SPEED, LEVEL_BANNER_MS, LEVEL_UP_SCORE_STEP,
    SCORE_INTERVAL_TICKS, SPAWN_INTERVAL_TICKS, SPEED_PER_LEVEL, TICK_MS,
};
use crate::vehicle::Vehicle;

/// Complete session state.
///
/// Global phases: not-started (before the first Start intent), running,
/// paused, and game-over. No tick processing happens outside of running.
#[derive(Debug, Clone)]
pub struct GameState {
    vehicle: Vehicle,
    obstacles: Vec<Obstacle>,
    spawner: ObstacleSpawner,
    frame_count: u64,
    /// Simulated milliseconds, advanced by `TICK_MS` per tick. Drives the
    /// bounce animation so ticks never read a wall clock.
    elapsed_ms: u64,
    score: u32,
    /// Process-lifetime running maximum; survives restarts, never persisted.
    high_score: u32,
    level: u32,
    /// Speed captured into each obstacle at its spawn; rises with level.
    base_obstacle_speed: f64,
    started: bool,
    paused: bool,
    game_over: bool,
    /// Countdown of the transient level-up notification.
    level_banner_ms: u32,
}

impl GameState {
    /// Create a new not-yet-started session.
    pub fn new(kind: VehicleKind, seed: u32) -> Self {
        Self {
            vehicle: Vehicle::new(kind),
            obstacles: Vec::new(),
            spawner: ObstacleSpawner::new(seed),
            frame_count: 0,
            elapsed_ms: 0,
            score: 0,
            high_score: 0,
            level: 1,
            base_obstacle_speed: BASE_OBSTACLE_SPEED,
            started: false,
            paused: false,
            game_over: false,
            level_banner_ms: 0,
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn base_obstacle_speed(&self) -> f64 {
        self.base_obstacle_speed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Apply an external intent. Intents that violate a phase or motion
    /// guard are silently absorbed; the return value reports whether the
    /// intent changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.running() && self.vehicle.move_left(),
            GameAction::MoveRight => self.running() && self.vehicle.move_right(),
            GameAction::Start => {
                if self.started {
                    return false;
                }
                self.started = true;
                true
            }
            GameAction::Pause => {
                if !self.started || self.game_over {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                if !self.game_over {
                    return false;
                }
                self.restart();
                true
            }
        }
    }

    fn running(&self) -> bool {
        self.started && !self.paused && !self.game_over
    }

    /// Full session reset after game over: fresh vehicle of the same kind in
    /// its initial lane, empty road, score/level/difficulty back to their
    /// starting values. The high score and the RNG stream carry forward, and
    /// the session resumes running immediately.
    fn restart(&mut self) {
        let kind = self.vehicle.kind();
        let seed = self.spawner.seed();
        let high_score = self.high_score;
        *self = Self::new(kind, seed);
        self.high_score = high_score;
        self.started = true;
    }

    /// Advance the simulation by one fixed tick.
    ///
    /// Returns `false` without touching any state unless the session is
    /// running. Order per tick: timers, scoring, vehicle animation, spawn,
    /// obstacle motion and off-screen removal, collision scan.
    pub fn tick(&mut self) -> bool {
        if !self.running() {
            return false;
        }

        self.frame_count += 1;
        self.elapsed_ms += TICK_MS as u64;
        self.level_banner_ms = self.level_banner_ms.saturating_sub(TICK_MS);

        if self.frame_count % SCORE_INTERVAL_TICKS == 0 {
            self.bump_score();
        }

        self.vehicle.update_rotation();
        self.vehicle.update_bounce(self.elapsed_ms);
        self.vehicle.update_sliding();

        if self.frame_count % SPAWN_INTERVAL_TICKS == 0 {
            let obstacle = self.spawner.spawn(self.base_obstacle_speed);
            self.obstacles.push(obstacle);
        }

        for obstacle in &mut self.obstacles {
            obstacle.advance();
        }
        // Removal runs every tick to bound the active set.
        self.obstacles.retain(|o| !o.off_screen());

        let vehicle_bounds = self.vehicle.bounds();
        for obstacle in &self.obstacles {
            if collides(&vehicle_bounds, &obstacle.bounds()) {
                // First hit ends the session; no point scanning further.
                self.game_over = true;
                self.high_score = self.high_score.max(self.score);
                break;
            }
        }

        true
    }

    fn bump_score(&mut self) {
        self.score += 1;
        if self.score % LEVEL_UP_SCORE_STEP == 0 {
            self.level += 1;
            self.base_obstacle_speed += SPEED_PER_LEVEL;
            self.level_banner_ms = LEVEL_BANNER_MS;
        }
    }

    /// Remaining level-up notification time, 0 when expired.
    pub fn level_banner_ms(&self) -> u32 {
        self.level_banner_ms
    }

    /// Refill a reusable snapshot with the current world state.
    pub fn snapshot_into(&self, out: &mut WorldSnapshot) {
        out.vehicle = VehicleView {
            bounds: self.vehicle.bounds(),
            rotation: self.vehicle.rotation(),
            lane: self.vehicle.current_lane(),
            moving: self.vehicle.is_moving(),
            kind: self.vehicle.kind(),
        };
        out.obstacles.clear();
        for obstacle in self.obstacles.iter().take(out.obstacles.capacity()) {
            out.obstacles.push(ObstacleView {
                bounds: obstacle.bounds(),
                style: obstacle.style(),
            });
        }
        out.score = self.score;
        out.high_score = self.high_score;
        out.level = self.level;
        out.started = self.started;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.level_banner_ms = self.level_banner_ms;
    }

    /// Allocate a fresh snapshot (convenience for tests and cold paths).
    pub fn snapshot(&self) -> WorldSnapshot {
        let mut snap = WorldSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    #[cfg(test)]
    fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}
