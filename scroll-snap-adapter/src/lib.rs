//! Adapter utilities for the `scroll-snap` crate.
//!
//! The `scroll-snap` engine consumes drag samples and release positions; UI toolkits deliver
//! pointer presses, moves and releases. This crate bridges the two with a framework-neutral
//! [`Controller`]:
//!
//! - content follows the pointer while dragging
//! - per-move deltas and timings are fed to the engine's velocity latch
//! - presses are ignored while the engine reports input as blocked
//!
//! This crate is intentionally framework-agnostic (no windowing or widget bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;

#[cfg(test)]
mod tests;

pub use controller::Controller;
