//! Reusable UI components
//!
//! All components share the glass-panel styling defined in the shell's
//! global stylesheet.

mod button;
mod icon;
mod section_header;
mod skill_bar;
mod tech_tag;

pub use button::*;
pub use icon::*;
pub use section_header::*;
pub use skill_bar::*;
pub use tech_tag::*;
