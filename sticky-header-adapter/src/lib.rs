//! Host-side adapter utilities for the `sticky-header` crate.
//!
//! The `sticky-header` crate is UI-agnostic and only positions headers. This crate provides small,
//! framework-neutral helpers a list host commonly needs around it:
//!
//! - A lazily laid-out virtualized list host ([`ListLayout`])
//! - Pointer gating for the pinned header band ([`TouchGate`])
//! - The trailing inset heuristic for short lists ([`fills_viewport`])
//! - A controller tying layout, overlay and touch dispatch together ([`StickyList`])
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod change;
mod controller;
mod layout;
mod touch;
mod trailing;


pub use change::DataChange;
pub use controller::StickyList;
pub use layout::ListLayout;
pub use touch::{Dispatch, PointerEvent, PointerPhase, TouchGate};
pub use trailing::{fills_viewport, trailing_inset_for};
