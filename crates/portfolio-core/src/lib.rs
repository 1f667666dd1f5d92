//! Portfolio Core Library
//!
//! Framework-free state behind the portfolio page shell.
//!
//! ## Overview
//!
//! The page is a single scrolling document of five sections. This crate
//! owns the small amount of real logic that sits behind it:
//!
//! - **Scroll tracking**: rate-limited evaluation of which section owns
//!   the viewport midpoint, plus a debounced "is scrolling" flag
//! - **Visibility**: one-shot and continuous intersection observers
//! - **Reveal**: staggered, one-time reveal of a container's children
//! - **Intro**: the once-per-profile terminal boot animation
//! - **Content**: authored profile, skills, timeline, contacts, projects
//!
//! Nothing here touches a DOM. Callers measure bounds, keep time, and feed
//! the results in; the state machines decide.
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{Bounds, ScrollTracker, SectionId, SectionProbe};
//!
//! let mut tracker = ScrollTracker::new();
//! if tracker.on_scroll_event() {
//!     // schedule a frame, then:
//!     if tracker.begin_frame(std::time::Instant::now()) {
//!         let probes = [SectionProbe::new(SectionId::Skills, Bounds::vertical(0.0, 900.0))];
//!         tracker.apply_evaluation(&probes, 400.0);
//!     }
//! }
//! ```

pub mod content;
pub mod debounce;
pub mod error;
pub mod intro;
pub mod particles;
pub mod project;
pub mod reveal;
pub mod scroll;
pub mod section;
pub mod storage;
pub mod theme;
pub mod visibility;

// Re-exports
pub use content::{Accent, PROFILE};
pub use debounce::Debouncer;
pub use error::{PortfolioError, PortfolioResult};
pub use intro::{IntroGate, IntroPhase, ScriptStep, TerminalScript};
pub use particles::ParticleField;
pub use project::{Carousel, ImageSlot, ImageState, ProjectEntry, FALLBACK_IMAGE, PROJECTS};
pub use reveal::{RevealSchedule, RevealSequencer};
pub use scroll::{FrameGate, QuietOutcome, ScrollState, ScrollTracker};
pub use section::{resolve_active, Bounds, SectionId, SectionProbe, SECTIONS};
pub use storage::{Storage, VisitFlag};
pub use theme::Theme;
pub use visibility::{ObserverOptions, Transition, VisibilityObserver};
