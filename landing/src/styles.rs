//! Stylesheet for the landing page.
//!
//! Injected once by [`crate::app::App`]. The carousel relies on three
//! classes from here:
//!
//! - `.scroller` is the horizontally scrolling track with mandatory snapping
//! - `.scroller-no-snap` turns snapping off while direct input is moving it
//! - `.card` uses `--card-width` for per-card widths

/// Complete CSS for the page.
pub const LANDING_CSS: &str = r#"
:root {
    --bg: #f7f5f2;
    --surface: #ffffff;
    --ink: #1c1b1f;
    --ink-dim: #5c5a63;
    --accent: #5b3df5;
    --accent-soft: #ece8ff;
    --radius: 24px;
    --gap: 24px;
    --card-width: 600px;
    --font: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--ink);
    font-family: var(--font);
    line-height: 1.5;
}

.page {
    display: flex;
    flex-direction: column;
    gap: 96px;
    padding: 48px 0 96px;
}

.section { width: 100%; }

.section-inner {
    display: grid;
    grid-template-columns: minmax(0, 1fr) minmax(0, 1fr);
    gap: var(--gap);
    max-width: 1280px;
    margin: 0 auto;
    padding: 0 32px;
}

.section-content {
    display: flex;
    flex-direction: column;
    align-items: flex-start;
    gap: 16px;
}

.section-content h1 { font-size: 56px; line-height: 1.1; margin: 0; }
.section-content h2,
.plans-aside-heading h2 { font-size: 40px; line-height: 1.15; margin: 0; }
.section-content p,
.plans-aside-heading p { color: var(--ink-dim); margin: 0; max-width: 56ch; }

.section-media {
    min-height: 320px;
    border-radius: var(--radius);
    background: linear-gradient(135deg, var(--accent-soft), #fde7d8);
}

.tag {
    display: inline-block;
    padding: 4px 12px;
    border-radius: 999px;
    background: var(--accent-soft);
    color: var(--accent);
    font-size: 14px;
    font-weight: 600;
}

.cta-button {
    border: 0;
    border-radius: 999px;
    padding: 14px 28px;
    background: var(--accent);
    color: #fff;
    font: inherit;
    font-weight: 600;
    cursor: pointer;
}

.cta-button:focus-visible { outline: 3px solid var(--ink); outline-offset: 2px; }

/* Plans */

.plans-section { min-height: 100vh; display: flex; align-items: center; }

.plans-layout { grid-template-columns: minmax(280px, 360px) minmax(0, 1fr); align-items: stretch; }

.plans-aside { display: flex; flex-direction: column; gap: var(--gap); }
.plans-aside-heading { display: flex; flex-direction: column; gap: 12px; }

.plans-featured {
    display: flex;
    flex-direction: column;
    gap: 12px;
    padding: 24px;
    border-radius: var(--radius);
    background: var(--surface);
}

.plans-featured h3,
.card h3 { margin: 0; font-size: 24px; }

.plans-featured-media { display: grid; grid-template-columns: 2fr 1fr; gap: 12px; }

.plans-featured-media-primary,
.plans-featured-media-secondary {
    min-height: 160px;
    border-radius: 16px;
    background: var(--accent-soft) center / cover no-repeat;
}

.section-scroller { min-width: 0; }

.scroller {
    overflow-x: auto;
    overflow-y: hidden;
    overscroll-behavior-x: contain;
    scroll-snap-type: x mandatory;
    scroll-behavior: smooth;
    scrollbar-width: none;
    -webkit-overflow-scrolling: touch;
}

.scroller::-webkit-scrollbar { display: none; }
.scroller:focus-visible { outline: 3px solid var(--accent); outline-offset: 4px; }

.scroller-no-snap { scroll-snap-type: none; }

.scroller-track {
    display: flex;
    gap: var(--gap);
    width: max-content;
    padding-bottom: 8px;
}

.card {
    flex: 0 0 auto;
    width: min(var(--card-width), 85vw);
    display: flex;
    flex-direction: column;
    gap: 12px;
    padding: 24px;
    border-radius: var(--radius);
    background: var(--surface);
    scroll-snap-align: start;
}

.card p { margin: 0; color: var(--ink-dim); }

.card-label {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    font-size: 14px;
    font-weight: 600;
    color: var(--accent);
}

.card-label-icon { width: 16px; height: 16px; }

.card-media {
    position: relative;
    margin-top: auto;
    min-height: 260px;
    border-radius: 16px;
    background: var(--accent-soft) center / cover no-repeat;
}

.card-overlay {
    position: absolute;
    left: 16px;
    bottom: 16px;
    max-width: 240px;
    padding: 16px;
    border-radius: 16px;
    background: rgba(255, 255, 255, 0.92);
}

.card-overlay-stat { display: block; font-size: 40px; line-height: 1; color: var(--accent); }
.card-overlay-text { font-size: 14px; color: var(--ink-dim); }

/* Stories / footer */

.placeholder-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
    gap: var(--gap);
    width: 100%;
}

.placeholder-card {
    min-height: 180px;
    border-radius: var(--radius);
    background: var(--surface);
}

@media (max-width: 900px) {
    .section-inner,
    .plans-layout { grid-template-columns: minmax(0, 1fr); padding: 0 20px; }
    .section-content h1 { font-size: 40px; }
    .section-content h2,
    .plans-aside-heading h2 { font-size: 30px; }
    .plans-section { min-height: auto; }
}

@media (prefers-reduced-motion: reduce) {
    .scroller { scroll-behavior: auto; }
}
"#;
