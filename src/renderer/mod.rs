//! Presentation projection
//!
//! Turns game state into plain drawing primitives. Pixels are the host's job.

pub mod colors;
pub mod shapes;
pub mod snapshot;

pub use snapshot::{RenderSnapshot, Screen, build_snapshot};
