//! Career program landing page.
//!
//! Client-side rendered with Leptos. The page is a stack of static sections
//! plus one interactive piece: the plans carousel, which borrows vertical
//! wheel, keyboard and touch input while it is on screen (see [`capture`]
//! and the `scroll-capture` crate for the state machine itself).
//!
//! Copy, cards and capture tunables can be overridden from a JSON block in
//! `index.html`; see [`config`].

pub mod app;
pub mod capture;
pub mod config;
pub mod content;
pub mod logging;
pub mod sections;
pub mod styles;

pub use app::App;
pub use config::{ConfigLoadError, LandingConfig};
