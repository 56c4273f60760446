//! Landing page sections, top to bottom.

mod footer;
mod header;
mod hero;
mod plans;
mod stories;

pub use footer::FooterSection;
pub use header::HeaderSection;
pub use hero::HeroSection;
pub use plans::PlansSection;
pub use stories::StoriesSection;
