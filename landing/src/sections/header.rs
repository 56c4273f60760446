use leptos::prelude::*;

#[component]
pub fn HeaderSection(#[prop(into)] title: String, #[prop(into)] button: String) -> impl IntoView {
    view! {
        <section class="section">
            <div class="section-inner">
                <div class="section-content">
                    <h2>{title}</h2>
                    <button type="button" class="cta-button">
                        {button}
                    </button>
                </div>
                <div class="section-media" aria-hidden="true"></div>
            </div>
        </section>
    }
}
