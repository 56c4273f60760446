use leptos::prelude::*;

/// Community stories teaser. The tiles are decorative placeholders.
#[component]
pub fn StoriesSection(
    #[prop(into)] eyebrow: String,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(default = 3)] placeholders: usize,
) -> impl IntoView {
    view! {
        <section class="section">
            <div class="section-inner">
                <div class="section-content">
                    <span class="tag">{eyebrow}</span>
                    <h2>{title}</h2>
                    <p>{description}</p>
                    <div class="placeholder-grid" aria-hidden="true">
                        {(0..placeholders).map(|_| {
                            view! { <div class="placeholder-card"></div> }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}
