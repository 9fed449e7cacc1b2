//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: the road view draws the world
//! snapshot into a styled-cell framebuffer, and the terminal renderer flushes
//! framebuffers to the terminal with diff-based updates. The view is pure
//! (no I/O) and unit-testable; only [`renderer::TerminalRenderer`] touches
//! the terminal.

pub mod fb;
pub mod renderer;
pub mod road_view;

pub use lane_rush_core as core;
pub use lane_rush_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use road_view::{RoadView, Viewport};
