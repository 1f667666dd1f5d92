//! Hooks that bind the pure trackers in `portfolio_core` to mounted nodes.
//!
//! - [`scroll`]: active-section tracking for the page shell
//! - [`visibility`]: one-shot and continuous viewport observers
//! - [`reveal`]: staggered reveal of a group of items

pub mod reveal;
pub mod scroll;
pub mod visibility;

pub use reveal::{use_reveal_cascade, RevealCascade};
pub use scroll::{next_frame, use_scroll_controller, ScrollController};
pub use visibility::{use_reveal_once, use_visibility, ObservedRegion};
