//! Plans section: a featured card beside the scroll-capturing carousel.

use leptos::prelude::*;
use scroll_capture::CaptureConfig;
use tracing::warn;
use wasm_bindgen::JsCast;

use crate::capture::CaptureBinding;
use crate::content::{LABEL_ICON, PlanCard, split_featured};

#[component]
pub fn PlansSection(
    #[prop(into)] eyebrow: String,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    cards: Vec<PlanCard>,
    #[prop(optional)] capture: CaptureConfig,
) -> impl IntoView {
    let (featured, track_cards) = split_featured(cards);

    let section_ref = NodeRef::<leptos::html::Section>::new();
    let scroller_ref = NodeRef::<leptos::html::Div>::new();
    let binding = StoredValue::new_local(None::<CaptureBinding>);

    // Mount once both nodes exist; the binding lives until the section unmounts
    Effect::new(move || {
        let (Some(section), Some(scroller)) = (section_ref.get(), scroller_ref.get()) else {
            return;
        };
        if binding.with_value(Option::is_some) {
            return;
        }
        match crate::capture::mount(
            section.unchecked_into(),
            scroller.unchecked_into(),
            capture.clone(),
        ) {
            Ok(bound) => binding.set_value(Some(bound)),
            Err(err) => warn!(%err, "carousel scroll capture disabled"),
        }
    });
    on_cleanup(move || binding.set_value(None));

    let region_label = title.clone();
    let featured_image = featured.image_style();

    view! {
        <section node_ref=section_ref class="section plans-section">
            <div class="section-inner plans-layout">
                <aside class="plans-aside">
                    <div class="plans-aside-heading">
                        <span class="tag">{eyebrow}</span>
                        <h2>{title}</h2>
                        <p>{description}</p>
                    </div>
                    <article class="plans-featured">
                        <CardLabel text=featured.label />
                        <h3>{featured.title}</h3>
                        <p>{featured.description}</p>
                        <div class="plans-featured-media" aria-hidden="true">
                            <div class="plans-featured-media-primary" style=featured_image></div>
                            <div class="plans-featured-media-secondary"></div>
                        </div>
                    </article>
                </aside>
                <div class="section-scroller plans-scroller" role="region" aria-label=region_label>
                    <div node_ref=scroller_ref class="scroller" role="list" tabindex="-1">
                        <div class="scroller-track">
                            {track_cards.into_iter().map(|card| view! { <Card card /> }).collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CardLabel(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <span class="card-label">
            <img src=LABEL_ICON alt="" class="card-label-icon" />
            {text}
        </span>
    }
}

#[component]
fn Card(card: PlanCard) -> impl IntoView {
    let width = card.width_style();
    let image = card.image_style();

    view! {
        <article class="card" role="listitem" style=width>
            <CardLabel text=card.label />
            <h3>{card.title}</h3>
            <p>{card.description}</p>
            <div class="card-media" aria-hidden="true" style=image>
                {card.overlay.map(|overlay| view! {
                    <div class="card-overlay">
                        <strong class="card-overlay-stat">{overlay.stat}</strong>
                        <span class="card-overlay-text">{overlay.text}</span>
                    </div>
                })}
            </div>
        </article>
    }
}
