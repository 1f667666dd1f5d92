//! Page sections, in declaration order.

mod contact;
mod experience;
mod hero;
mod projects;
mod skills;

pub use contact::Contact;
pub use experience::Experience;
pub use hero::Hero;
pub use projects::Projects;
pub use skills::Skills;
