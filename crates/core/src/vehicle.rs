//! Player vehicle: lane-change state machine with tilt and bounce animation.
//!
//! Two states: straight (`is_moving == false`, rotation easing to 0) and
//! sliding (`is_moving == true`, rotation easing to the tilt angle). A new
//! lane change is accepted only while straight; requests during a slide or at
//! the road edge are silently ignored.

use crate::road;
use crate::types::{
    Rect, VehicleKind, VehicleSpec, BOUNCE_AMPLITUDE, BOUNCE_FREQUENCY, INITIAL_LANE, MAX_LANE,
    ROTATION_RATE, TILT_DEGREES,
};

#[derive(Debug, Clone)]
pub struct Vehicle {
    kind: VehicleKind,
    spec: VehicleSpec,
    x: f64,
    /// Fixed vertical baseline; only the bounce offset moves the drawn box.
    y: f64,
    target_x: f64,
    current_lane: u8,
    is_moving: bool,
    current_rotation: f64,
    target_rotation: f64,
    vertical_offset: f64,
}

impl Vehicle {
    /// A fresh vehicle of the given kind, straight in the initial lane.
    pub fn new(kind: VehicleKind) -> Self {
        let spec = kind.spec();
        let x = road::lane_x(INITIAL_LANE, spec.width);
        Self {
            kind,
            spec,
            x,
            y: spec.start_y,
            target_x: x,
            current_lane: INITIAL_LANE,
            is_moving: false,
            current_rotation: 0.0,
            target_rotation: 0.0,
            vertical_offset: 0.0,
        }
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn current_lane(&self) -> u8 {
        self.current_lane
    }

    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    pub fn rotation(&self) -> f64 {
        self.current_rotation
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    /// Begin a slide one lane to the left.
    ///
    /// Accepted only while straight and not already in lane 0; otherwise a
    /// silent no-op. Returns whether the request was accepted.
    pub fn move_left(&mut self) -> bool {
        if self.is_moving || self.current_lane == 0 {
            return false;
        }
        self.current_lane -= 1;
        self.begin_slide(-TILT_DEGREES);
        true
    }

    /// Begin a slide one lane to the right (mirror of [`Self::move_left`]).
    pub fn move_right(&mut self) -> bool {
        if self.is_moving || self.current_lane >= MAX_LANE {
            return false;
        }
        self.current_lane += 1;
        self.begin_slide(TILT_DEGREES);
        true
    }

    fn begin_slide(&mut self, tilt: f64) {
        self.target_x = road::lane_x(self.current_lane, self.spec.width);
        self.target_rotation = tilt;
        self.is_moving = true;
    }

    /// Step `x` toward the target lane by at most the variant's slide speed.
    ///
    /// The step is clamped so the slide never overshoots; on exact arrival
    /// the vehicle straightens.
    pub fn update_sliding(&mut self) {
        if !self.is_moving {
            return;
        }
        if self.x < self.target_x {
            self.x = (self.x + self.spec.slide_speed).min(self.target_x);
        } else if self.x > self.target_x {
            self.x = (self.x - self.spec.slide_speed).max(self.target_x);
        }
        if self.x == self.target_x {
            self.is_moving = false;
            self.target_rotation = 0.0;
        }
    }

    /// Ease the rotation toward its target at a fixed rate, never
    /// overshooting. Runs every tick regardless of the sliding state, so
    /// straightening lags slightly behind arriving in the lane.
    pub fn update_rotation(&mut self) {
        if self.current_rotation < self.target_rotation {
            self.current_rotation = (self.current_rotation + ROTATION_RATE).min(self.target_rotation);
        } else if self.current_rotation > self.target_rotation {
            self.current_rotation = (self.current_rotation - ROTATION_RATE).max(self.target_rotation);
        }
    }

    /// Cosmetic vertical oscillation, driven by simulated elapsed time.
    pub fn update_bounce(&mut self, elapsed_ms: u64) {
        self.vertical_offset = BOUNCE_AMPLITUDE * (elapsed_ms as f64 * BOUNCE_FREQUENCY).sin();
    }

    /// Bounds used for collision and rendering, bounce included.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.x,
            self.y + self.vertical_offset,
            self.spec.width,
            self.spec.height,
        )
    }
}
