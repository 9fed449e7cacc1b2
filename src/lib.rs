//! Lane Rush (workspace facade crate).
//!
//! This package keeps the `lane_rush::{core,input,term,types}` public API in
//! one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use lane_rush_core as core;
pub use lane_rush_input as input;
pub use lane_rush_term as term;
pub use lane_rush_types as types;
