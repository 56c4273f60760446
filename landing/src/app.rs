//! Root component.

use leptos::prelude::*;

use crate::config::LandingConfig;
use crate::sections::*;
use crate::styles::LANDING_CSS;

/// The whole page, built from a loaded [`LandingConfig`].
#[component]
pub fn App(config: LandingConfig) -> impl IntoView {
    let LandingConfig {
        capture,
        copy,
        plan_cards,
        ..
    } = config;

    view! {
        <style>{LANDING_CSS}</style>
        <main class="page">
            <HeaderSection title=copy.header_title button=copy.header_button />
            <HeroSection
                eyebrow=copy.hero_eyebrow
                title=copy.hero_title
                description=copy.hero_description
                cta=copy.hero_cta
            />
            <PlansSection
                eyebrow=copy.plans_eyebrow
                title=copy.plans_title
                description=copy.plans_description
                cards=plan_cards
                capture=capture
            />
            <StoriesSection
                eyebrow=copy.stories_eyebrow
                title=copy.stories_title
                description=copy.stories_description
                placeholders=copy.stories_placeholders
            />
            <FooterSection title=copy.footer_title button=copy.footer_button />
        </main>
    }
}
