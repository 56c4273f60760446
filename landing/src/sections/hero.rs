use leptos::prelude::*;

#[component]
pub fn HeroSection(
    #[prop(into)] eyebrow: String,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(into)] cta: String,
) -> impl IntoView {
    view! {
        <section class="section hero">
            <div class="section-inner">
                <div class="section-content">
                    <span class="tag">{eyebrow}</span>
                    <h1>{title}</h1>
                    <p>{description}</p>
                    <button type="button" class="cta-button">
                        {cta}
                    </button>
                </div>
                <div class="section-media" aria-hidden="true"></div>
            </div>
        </section>
    }
}
