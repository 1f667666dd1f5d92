//! Portfolio UI Components
//!
//! Presentational Dioxus components for the portfolio page shell. Nothing
//! in this crate owns application state: every component renders from its
//! props and reports interaction through event handlers.
//!
//! ## Look
//!
//! - **Slate (#0f172a)**: page background
//! - **Cyan (#22d3ee)**: primary accent, links, active navigation
//! - **Emerald / Purple / Blue / Pink**: per-card accent tokens
//! - Glass panels with a soft glow on hover

pub mod components;

pub use components::*;
