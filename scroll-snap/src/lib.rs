//! A headless snap-scrolling engine for carousels, paginated card lists and tab strips.
//!
//! A horizontally scrollable strip of fixed-width cells that, when a drag is released,
//! animates to rest exactly on a cell boundary. The engine decides from raw pointer motion
//! whether the index advances, retreats or stays (including multi-cell flings and
//! wrap-around), then drives a linear interpolation to the target offset.
//!
//! It is UI-agnostic. A host (see [`SnapHost`]) is expected to provide:
//! - cell size and viewport width
//! - the content offset (read and written by the engine)
//! - the cell collection, reordered only through the operations the engine exposes
//!
//! For pointer-event plumbing, see the `scroll-snap-adapter` crate.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod drag;
mod engine;
mod error;
mod events;
mod host;
mod index;
mod lerp;
mod options;
mod types;


pub use engine::SnapEngine;
pub use error::SnapError;
pub use events::{CompleteListener, IndexListener, ListenerId};
pub use host::{SnapHost, Strip};
pub use index::{cells_per_viewport, max_index, normalize_index};
pub use options::{
    DEFAULT_LERP_DURATION_MS, DEFAULT_SETTLE_EPSILON, DEFAULT_TRIGGER_ACCELERATION,
    DEFAULT_TRIGGER_PERCENT, SnapOptions,
};
pub use types::{CellSize, Direction, Frame};
