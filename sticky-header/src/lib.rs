//! A headless sticky section header engine for virtualized lists.
//!
//! Items are grouped; the first item of every group carries an inline header strip drawn right
//! above it. While the list scrolls, the header of the group at the top of the viewport stays
//! pinned, and is pushed up and off by the next group's strip when it arrives.
//!
//! The engine is UI-agnostic. The host list provides:
//! - spacing queries during layout ([`StickyDecoration::top_inset`])
//! - its visible window during draw ([`HostList`])
//! - a drawing surface ([`HeaderCanvas`])
//! - data mutation notifications ([`StickyDecoration::notify_data_invalidated`])
//!
//! The embedding application provides header content through [`StickyHeaderProvider`].
//!
//! For host-side helpers (touch gating, a simulated list host, a controller), see the
//! `sticky-header-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cache;
mod decoration;
mod host;
mod options;
mod provider;
mod types;

#[cfg(test)]
mod tests;

pub use cache::HeaderRecord;
pub use decoration::StickyDecoration;
pub use host::{HostList, ListFrame};
pub use options::StickyOptions;
pub use provider::{HeaderCanvas, HeaderData, HeaderView, StickyHeaderProvider};
pub use types::{OverlayFrame, PinSource, PinnedHeader, Rect, VisibleItem};
