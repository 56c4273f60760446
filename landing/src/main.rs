use career_landing::{App, LandingConfig, config, logging};
use leptos::prelude::*;
use tracing::{info, warn};

fn main() {
    console_error_panic_hook::set_once();

    let (config, rejected) = match config::load_from_document() {
        Ok(config) => (config, None),
        Err(err) => (LandingConfig::default(), Some(err)),
    };

    logging::init(config.level());
    if let Some(err) = rejected {
        warn!(%err, "ignoring embedded landing config, using defaults");
    }
    info!(cards = config.plan_cards.len(), "mounting landing page");

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
