//! CSS for the landing page.
//!
//! Both palettes live under a root class (`.light` / `.dark`) so switching
//! the theme is a single class swap on `<html>`.
//!
//! To extend or override styles:
//!
//! ```rust
//! use entropy_site::styles::SITE_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: -0.02em; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! ```

/// Complete stylesheet, inlined by both the static document and the wasm app.
pub const SITE_CSS: &str = r#"
:root,
.dark {
    --background: #09090b;
    --foreground: #fafafa;
    --card: #111113;
    --muted: #27272a;
    --muted-foreground: #a1a1aa;
    --primary: #22c55e;
    --primary-foreground: #052e16;
    --secondary: #27272a;
    --border: #27272a;
    --badge-bg: #ecfdf5;
    --badge-fg: #000000;
    --service-card: rgba(148, 163, 184, 0.15);
}

.light {
    --background: #ffffff;
    --foreground: #09090b;
    --card: #f4f4f5;
    --muted: #f4f4f5;
    --muted-foreground: #71717a;
    --primary: #16a34a;
    --primary-foreground: #f0fdf4;
    --secondary: #e4e4e7;
    --border: #e4e4e7;
    --badge-bg: #ecfdf5;
    --badge-fg: #000000;
    --service-card: rgba(148, 163, 184, 0.3);
}

*, *::before, *::after { box-sizing: border-box; }

body {
    margin: 0;
    background: var(--background);
    color: var(--foreground);
    font-family: "Inter", system-ui, -apple-system, sans-serif;
    line-height: 1.5;
    transition: background 0.2s, color 0.2s;
}

a { color: inherit; text-decoration: none; }

.container {
    width: 100%;
    max-width: 1280px;
    margin: 0 auto;
    padding: 0 2rem;
}

/* Nav */
.nav {
    position: sticky;
    top: 0;
    z-index: 10;
    background: var(--background);
    border-bottom: 1px solid var(--border);
}
.nav-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 64px;
}
.nav-brand { font-weight: 700; font-size: 1.25rem; }
.nav-links { display: flex; align-items: center; gap: 1.5rem; }
.nav-link { color: var(--muted-foreground); }
.nav-link:hover { color: var(--foreground); }
.theme-toggle {
    display: inline-flex;
    background: transparent;
    color: var(--foreground);
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 6px;
    cursor: pointer;
}

/* Hero */
.hero-grid {
    display: grid;
    place-items: center;
    gap: 2rem;
    padding: 5rem 2rem;
}
.hero-content { text-align: center; max-width: 1024px; }
.hero-badge {
    display: inline-block;
    padding: 0.25rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 9999px;
    background: var(--badge-bg);
    color: var(--badge-fg);
    font-size: 1.125rem;
    letter-spacing: 0.1em;
}
.hero-title { font-size: clamp(2.25rem, 5vw, 3.75rem); font-weight: 700; margin: 2rem 0; }
.hero-title-accent {
    padding: 0 0.5rem;
    background: linear-gradient(to right, #33e05e, var(--primary));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.hero-description { max-width: 640px; margin: 0 auto 2rem; font-size: 1.25rem; color: var(--muted-foreground); }
.hero-actions { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; }
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    min-width: 200px;
    padding: 0.75rem 1.5rem;
    border-radius: 8px;
    font-weight: 700;
}
.btn-primary { background: var(--primary); color: var(--primary-foreground); }
.btn-primary:hover .btn-arrow { transform: translateX(4px); }
.btn-arrow { transition: transform 0.2s; }
.btn-secondary { background: var(--secondary); color: var(--foreground); }
.hero-image-frame { position: relative; margin-top: 3.5rem; }
.hero-image-glow {
    position: absolute;
    top: -2rem;
    left: 50%;
    transform: translateX(-50%);
    width: 90%;
    height: 20rem;
    background: var(--primary);
    opacity: 0.5;
    border-radius: 9999px;
    filter: blur(64px);
}
.hero-image {
    position: relative;
    width: 100%;
    max-width: 1200px;
    height: auto;
    border-radius: 8px;
    border: 1px solid var(--secondary);
    border-top: 2px solid var(--primary);
}
.hero-image-fade {
    position: absolute;
    bottom: 0;
    left: 0;
    width: 100%;
    height: 7rem;
    background: linear-gradient(to bottom, transparent, var(--background));
}

/* Section headings */
section.benefits, section.features, section.services, section.faq { padding: 6rem 0; }
.section-header { margin-bottom: 2rem; }
.section-header.centered { text-align: center; max-width: 768px; margin: 0 auto 2rem; }
.section-eyebrow { color: var(--primary); font-size: 1.125rem; letter-spacing: 0.05em; margin: 0 0 0.5rem; }
.section-title { font-size: clamp(1.875rem, 3vw, 2.25rem); font-weight: 700; margin: 0 0 1rem; }
.section-description { font-size: 1.25rem; color: var(--muted-foreground); margin: 0; }

/* Cards */
.card-title { font-size: 1.25rem; font-weight: 600; margin: 0 0 0.5rem; }
.card-description { color: var(--muted-foreground); margin: 0; }

.benefits-grid { display: grid; gap: 6rem; align-items: center; }
.benefits-cards { display: grid; gap: 1rem; }
.benefit-card {
    padding: 1.5rem;
    border: 1px solid var(--border);
    border-radius: 12px;
    background: var(--card);
    transition: background 0.2s;
}
.benefit-card:hover { background: var(--background); }
.benefit-card-header { display: flex; justify-content: space-between; margin-bottom: 1.5rem; }
.benefit-icon { color: var(--primary); }
.benefit-number {
    font-size: 3rem;
    font-weight: 500;
    color: var(--muted-foreground);
    opacity: 0.15;
    transition: opacity 0.2s;
}
.benefit-card:hover .benefit-number { opacity: 0.3; }

.features-grid { display: grid; gap: 1.5rem; }
.feature-card { text-align: center; padding: 1.5rem; }
.feature-icon {
    display: inline-flex;
    padding: 0.75rem;
    margin-bottom: 1rem;
    border-radius: 9999px;
    background: var(--muted);
    color: var(--primary);
}

.services-grid { display: grid; gap: 1rem; max-width: 768px; margin: 0 auto; }
.service-card {
    position: relative;
    padding: 1.5rem;
    border-radius: 12px;
    background: var(--service-card);
}
.pro-badge {
    position: absolute;
    top: -0.5rem;
    right: -0.75rem;
    padding: 0.125rem 0.625rem;
    border-radius: 9999px;
    background: #64748b;
    color: #ffffff;
    font-size: 0.75rem;
    font-weight: 600;
}

/* FAQ */
.faq-container { max-width: 768px; }
.faq-list { display: flex; flex-direction: column; gap: 0.75rem; }
.faq-item { border: 1px solid var(--border); border-radius: 12px; overflow: hidden; }
.faq-question {
    display: flex;
    width: 100%;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    padding: 1rem 1.5rem;
    background: transparent;
    color: var(--foreground);
    border: 0;
    font: inherit;
    font-weight: 600;
    text-align: left;
    cursor: pointer;
}
.faq-chevron { flex-shrink: 0; transition: transform 0.3s; }
.faq-item.open .faq-chevron { transform: rotate(180deg); }
.faq-answer { padding: 0 1.5rem 1rem; color: var(--muted-foreground); }

/* Footer */
.footer { border-top: 1px solid var(--border); padding: 2rem 0; }
.footer-inner { display: flex; justify-content: space-between; align-items: center; }
.footer-brand { font-weight: 700; }
.footer-copyright { color: var(--muted-foreground); margin: 0; }

@media (min-width: 768px) {
    .features-grid { grid-template-columns: repeat(2, 1fr); }
    .services-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
    .benefits-grid { grid-template-columns: repeat(2, 1fr); }
    .benefits-cards { grid-template-columns: repeat(2, 1fr); }
    .features-grid { grid-template-columns: repeat(3, 1fr); }
}
"#;
