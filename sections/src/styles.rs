//! Shared stylesheet for every section.
//!
//! All keyframes and section classes live in one constant that the
//! document head inlines once, so sections never inject their own
//! `<style>` blocks.
//!
//! # Customization
//!
//! ```rust
//! use renu_sections::styles::SITE_CSS;
//!
//! let my_css = ".hero__title { letter-spacing: 0.02em; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! assert!(combined.contains("@keyframes float"));
//! ```

/// Complete CSS for the site.
///
/// Section colors that editors can change are passed as inline
/// `style` attributes; everything else is here.
pub const SITE_CSS: &str = r#"
:root {
    --green-50: #f0fdf4;
    --green-100: #dcfce7;
    --green-500: #22c55e;
    --green-600: #16a34a;
    --green-700: #15803d;
    --green-800: #166534;
    --renu-dark: #0e503c;
    --surface: #f5f7f4;
    --text: #1f2937;
    --text-muted: #4b5563;
    --radius: 1rem;
    --font: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
}

*, *::before, *::after { box-sizing: border-box; }
html { scroll-behavior: smooth; }
body { margin: 0; font-family: var(--font); color: var(--text); background: #fff; }
img { max-width: 100%; display: block; }
a { color: inherit; }

.container { width: 100%; max-width: 1200px; margin: 0 auto; padding: 0 1rem; }
.section { position: relative; padding: 4rem 0; overflow: hidden; }
.section--flush-top { padding-top: 0; }
.section--flush-bottom { padding-bottom: 0; }
@media (min-width: 768px) { .section { padding: 6rem 0; } }

/* ---- keyframes ---- */
@keyframes float {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-10px); }
}
@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}
@keyframes slideInRight {
    from { opacity: 0; transform: translateX(40px); }
    to { opacity: 1; transform: translateX(0); }
}
@keyframes slideUp {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes widthExpand {
    from { width: 0; }
    to { width: 100%; }
}
@keyframes expand {
    from { transform: scaleX(0); }
    to { transform: scaleX(1); }
}
@keyframes spin-slow {
    from { transform: rotate(0deg); }
    to { transform: rotate(360deg); }
}
@keyframes slow-zoom {
    from { transform: scale(1); }
    to { transform: scale(1.1); }
}
@keyframes sliding {
    from { transform: translateX(0); }
    to { transform: translateX(-50%); }
}
@property --dot-progress {
    syntax: '<percentage>';
    inherits: false;
    initial-value: 0%;
}
@keyframes progress {
    from { --dot-progress: 0%; }
    to { --dot-progress: 100%; }
}

.animate-float { animation: float 6s ease-in-out infinite; }
.animate-fade-in { animation: fadeIn 0.8s ease-out both; }
.animate-slide-in-right { animation: slideInRight 0.8s ease-out both; }
.animate-slide-up { animation: slideUp 0.8s ease-out both; }
.animate-width-expand { animation: widthExpand 1s ease-out both; }
.animate-expand { animation: expand 0.6s ease-out both; transform-origin: left; }
.animate-spin-slow { animation: spin-slow 20s linear infinite; }
.animate-slow-zoom { animation: slow-zoom 20s ease-in-out infinite alternate; }
@media (prefers-reduced-motion: reduce) {
    [class*="animate-"] { animation: none !important; }
}

/* ---- shared heading: badge + title + divider ---- */
.heading { display: flex; flex-direction: column; align-items: center; margin-bottom: 4rem; text-align: center; }
.heading--left { align-items: flex-start; text-align: left; }
.heading--right { align-items: flex-end; text-align: right; }
.heading__badge { display: inline-flex; padding: 0.375rem 1rem; margin-bottom: 1.5rem; background: var(--green-100); color: var(--green-800); border-radius: 999px; font-size: 0.875rem; font-weight: 500; }
.heading__title { margin: 0 0 2rem; max-width: 56rem; font-size: clamp(1.875rem, 4vw, 3rem); font-weight: 700; color: var(--green-800); }
.heading__divider { display: flex; gap: 0.75rem; }
.heading__divider span { height: 4px; width: 2.5rem; border-radius: 999px; background: var(--green-500); }
.heading__divider span:nth-child(2) { width: 4rem; background: var(--green-700); }
.accent-title { border-left: 6px solid var(--green-600); padding-left: 1rem; font-size: clamp(1.5rem, 3vw, 2.25rem); font-weight: 700; }

.rich-text p { margin: 0 0 1rem; line-height: 1.7; }
.rich-text strong { color: var(--renu-dark); }

.placeholder { background: #e5e7eb; border-radius: var(--radius); min-height: 12rem; width: 100%; }
.placeholder--tile { min-height: 4rem; display: flex; align-items: center; justify-content: center; color: var(--text-muted); font-weight: 600; }

/* ---- buttons ---- */
.btn { display: inline-flex; align-items: center; justify-content: center; gap: 0.5rem; padding: 0.75rem 1.5rem; border-radius: 999px; font-weight: 600; text-decoration: none; cursor: pointer; border: 2px solid transparent; transition: background 0.2s, color 0.2s; }
.btn--solid { background: var(--green-600); color: #fff; }
.btn--solid:hover { background: var(--green-700); }
.btn--outline { border-color: currentColor; background: transparent; }
.btn--ghost { background: transparent; }
.btn-circle { width: 3rem; height: 3rem; padding: 0; border-radius: 50%; border: 1px solid currentColor; background: transparent; }
.btn-circle:disabled { opacity: 0.3; cursor: default; }
.cta-row { display: flex; flex-wrap: wrap; gap: 1rem; margin-top: 2rem; }
.cta-row--center { justify-content: center; }
.cta-row--right { justify-content: flex-end; }

/* ---- header ---- */
.site-header { position: fixed; inset: 0 0 auto 0; z-index: 50; background: rgba(255,255,255,0.95); backdrop-filter: blur(8px); box-shadow: 0 1px 3px rgba(0,0,0,0.06); }
.site-header__bar { display: flex; align-items: center; justify-content: space-between; height: 4.5rem; }
.site-header__logo img { height: 2.5rem; width: auto; }
.site-header__nav { display: none; gap: 2rem; }
.site-header__nav a { text-decoration: none; font-weight: 500; }
.site-header__nav a:hover { color: var(--green-700); }
.site-header__langs { display: flex; gap: 0.5rem; font-size: 0.875rem; }
.site-header__lang--active { font-weight: 700; color: var(--green-700); }
.drawer-toggle { display: none; }
.drawer-button { cursor: pointer; font-size: 1.5rem; }
.drawer { display: none; flex-direction: column; gap: 1rem; padding: 1rem; }
.drawer-toggle:checked ~ .drawer { display: flex; }
@media (min-width: 1024px) {
    .site-header__nav { display: flex; }
    .drawer-button, .drawer { display: none !important; }
}

/* ---- hero ---- */
.hero { position: relative; min-height: 100vh; display: flex; align-items: center; color: #fff; overflow: hidden; }
.hero__bg { position: absolute; inset: 0; background-size: cover; background-position: center; }
.hero__overlay { position: absolute; inset: 0; background: linear-gradient(120deg, rgba(14,80,60,0.85), rgba(0,0,0,0.35)); }
.hero__content { position: relative; z-index: 1; max-width: 48rem; }
.hero__title { font-size: clamp(2.25rem, 6vw, 4.5rem); font-weight: 800; margin: 0 0 1.5rem; }
.hero__subtitle { font-size: 1.25rem; opacity: 0.9; }
.hero__logo { height: 4rem; width: auto; margin-bottom: 1.5rem; }
.chat-button { position: fixed; right: 1.5rem; bottom: 1.5rem; z-index: 40; }

/* ---- about ---- */
.about__grid { display: grid; gap: 3rem; align-items: center; }
@media (min-width: 1024px) { .about__grid { grid-template-columns: 1fr 1fr; } }
.about__logo { max-width: 20rem; margin: 0 auto; }
.partners { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; margin-top: 2rem; }

/* ---- cards ---- */
.card-grid { display: grid; gap: 2rem; }
@media (min-width: 768px) { .card-grid--3 { grid-template-columns: repeat(3, 1fr); } .card-grid--2 { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 1024px) { .card-grid--4 { grid-template-columns: repeat(4, 1fr); } .card-grid--5 { grid-template-columns: repeat(5, 1fr); } }
.card { background: #fff; border-radius: var(--radius); padding: 2rem; box-shadow: 0 4px 20px rgba(0,0,0,0.05); transition: transform 0.3s; }
.card:hover { transform: translateY(-4px); }
.card__title { font-size: 1.25rem; font-weight: 700; margin: 0 0 0.75rem; }
.card__icon { width: 3rem; height: 3rem; margin-bottom: 1rem; color: var(--green-600); }

/* ---- sustainability goals ---- */
.goal__badge { display: flex; align-items: center; justify-content: center; width: 4rem; height: 4rem; border-radius: 0.75rem; color: #fff; font-size: 1.5rem; font-weight: 800; margin-bottom: 1rem; }

/* ---- image with paragraph ---- */
.split { display: grid; gap: 3rem; align-items: center; }
@media (min-width: 1024px) {
    .split { grid-template-columns: 1fr 1fr; }
    .split--image-left .split__media { order: -1; }
}
.check-list { list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 1rem; }
.check-list li { display: flex; gap: 0.75rem; align-items: flex-start; }
.check-list__icon { flex: none; width: 1.5rem; height: 1.5rem; border: 2px solid currentColor; border-radius: 50%; display: flex; align-items: center; justify-content: center; }
.solution__benefit--highlighted { font-weight: 700; color: var(--green-600); }

/* ---- projects ---- */
.project { display: grid; gap: 2rem; align-items: center; }
@media (min-width: 1024px) { .project { grid-template-columns: 1fr 1fr; } }
.project__image { border-radius: var(--radius); overflow: hidden; }
.project__image img { width: 100%; height: 100%; object-fit: cover; }

/* ---- news ---- */
.news-card { display: flex; flex-direction: column; overflow: hidden; padding: 0; text-decoration: none; }
.news-card__strip { height: 4px; }
.news-card__source { display: flex; align-items: center; gap: 0.5rem; padding: 1rem 1.5rem 0; font-size: 0.875rem; color: var(--text-muted); }
.news-card__source img { height: 1.5rem; width: auto; padding: 0.25rem; border-radius: 0.25rem; }
.news-card__body { padding: 1rem 1.5rem 1.5rem; }

/* ---- logos marquee ---- */
.marquee { position: relative; width: 100%; overflow: hidden; height: 2.75rem; }
.animate-sliding { position: absolute; top: 0; left: 0; display: flex; flex-wrap: nowrap; gap: 5rem; height: 2.75rem; animation: sliding 30s linear infinite; }
.animate-sliding img { height: 25px; width: auto; }

/* ---- carousel ---- */
.carousel { display: flex; gap: 1.5rem; overflow-x: auto; scroll-snap-type: x mandatory; scroll-behavior: smooth; scrollbar-width: none; list-style: none; padding: 0; margin: 0; }
.carousel::-webkit-scrollbar { display: none; }
.carousel-item { flex: none; scroll-snap-align: center; width: 100%; max-width: 600px; }
.carousel-controls { display: flex; justify-content: space-between; align-items: center; padding-top: 2rem; }
.carousel-dots { display: flex; gap: 0.75rem; list-style: none; padding: 0; margin: 0; }
.carousel-dots button { background: none; border: 0; padding: 1.25rem 0; cursor: pointer; }
.dot { width: 0.5rem; height: 0.5rem; border-radius: 50%; background: linear-gradient(to right, var(--green-700) var(--dot-progress), #d1d5db var(--dot-progress)); }
[data-dot][aria-current="true"] .dot { animation: progress linear 1 forwards; background: var(--green-700); }
.carousel-arrows { display: flex; gap: 1rem; }
.testimonial { display: flex; flex-direction: column; justify-content: center; gap: 4rem; padding: 2rem; min-height: 292px; border: 1px solid var(--text); border-radius: var(--radius); }
.testimonial__author { display: flex; align-items: center; gap: 1.25rem; }
.testimonial__author img { width: 3.5rem; height: 3.5rem; border-radius: 50%; object-fit: cover; }

/* ---- footer ---- */
.site-footer { background: var(--renu-dark); color: #fff; padding: 4rem 0 2rem; }
.site-footer__grid { display: grid; gap: 3rem; }
@media (min-width: 1024px) { .site-footer__grid { grid-template-columns: 2fr 3fr; } }
.site-footer__columns { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2rem; }
.site-footer h3 { font-size: 1rem; margin: 0 0 1rem; }
.site-footer ul { list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 0.5rem; }
.site-footer a { text-decoration: none; opacity: 0.85; }
.site-footer a:hover { opacity: 1; }
.contact-form { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.contact-form input, .contact-form textarea { width: 100%; padding: 0.75rem 1rem; border-radius: 0.5rem; border: 1px solid rgba(255,255,255,0.3); background: rgba(255,255,255,0.08); color: #fff; font: inherit; }
.contact-form__wide { grid-column: 1 / -1; }
.site-footer__bottom { display: flex; flex-wrap: wrap; justify-content: space-between; gap: 1rem; margin-top: 3rem; padding-top: 2rem; border-top: 1px solid rgba(255,255,255,0.15); font-size: 0.875rem; }
.social { display: flex; gap: 1rem; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_animation_class_has_its_keyframes() {
        for name in [
            "float",
            "fadeIn",
            "slideInRight",
            "slideUp",
            "widthExpand",
            "expand",
            "spin-slow",
            "slow-zoom",
            "sliding",
            "progress",
        ] {
            let keyframes = format!("@keyframes {name} ");
            assert_eq!(
                SITE_CSS.matches(&keyframes).count(),
                1,
                "keyframes {name} should be declared exactly once"
            );
        }
    }
}
