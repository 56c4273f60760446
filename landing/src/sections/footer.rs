use leptos::prelude::*;

#[component]
pub fn FooterSection(#[prop(into)] title: String, #[prop(into)] button: String) -> impl IntoView {
    view! {
        <footer class="section footer">
            <div class="section-inner">
                <div class="section-content">
                    <h2>{title}</h2>
                    <button type="button" class="cta-button">
                        {button}
                    </button>
                    <div class="placeholder-grid" aria-hidden="true">
                        <div class="placeholder-card"></div>
                        <div class="placeholder-card"></div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
