//! UI components for the portfolio shell.
//!
//! Stateless building blocks (buttons, icons, tags) live in `portfolio_ui`;
//! these are the stateful pieces that hook into the scroll and
//! visibility machinery.

mod mobile_nav;
pub mod navigation;
mod particle_canvas;
mod project_card;
mod project_image;
mod terminal_intro;
mod theme_toggle;

pub use mobile_nav::MobileNav;
pub use navigation::Navigation;
pub use particle_canvas::ParticleCanvas;
pub use project_card::ProjectCard;
pub use project_image::ProjectImage;
pub use terminal_intro::TerminalIntro;
pub use theme_toggle::ThemeToggle;
