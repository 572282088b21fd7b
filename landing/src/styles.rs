//! CSS for the landing page.
//!
//! One embedded stylesheet, no build step. Colors are CSS custom properties;
//! the palette is selected by the `data-theme` attribute on the page root
//! (`light`, `dark`, or `system` which follows `prefers-color-scheme`).
//!
//! # Customization
//!
//! ```rust
//! use landing_page::styles::LANDING_CSS;
//!
//! let my_css = ".nav-link { letter-spacing: 0.02em; }";
//! let combined = format!("{}\n{}", LANDING_CSS, my_css);
//! ```

/// Complete CSS for the page.
pub const LANDING_CSS: &str = r#"
:root,
[data-theme="light"] {
    --background: #ffffff;
    --foreground: #0f172a;
    --muted: #f1f5f9;
    --muted-foreground: #64748b;
    --primary: #2563eb;
    --primary-foreground: #ffffff;
    --card: #f8fafc;
    --border: #e2e8f0;
    --container-max: 80rem;
    --font-sans: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
}

[data-theme="dark"] {
    --background: #0a0a0a;
    --foreground: #ededed;
    --muted: #1f1f1f;
    --muted-foreground: #a1a1aa;
    --primary: #3b82f6;
    --primary-foreground: #ffffff;
    --card: #141414;
    --border: rgba(237, 237, 237, 0.12);
}

@media (prefers-color-scheme: dark) {
    [data-theme="system"] {
        --background: #0a0a0a;
        --foreground: #ededed;
        --muted: #1f1f1f;
        --muted-foreground: #a1a1aa;
        --primary: #3b82f6;
        --primary-foreground: #ffffff;
        --card: #141414;
        --border: rgba(237, 237, 237, 0.12);
    }
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: var(--font-sans);
}

a {
    text-decoration: none;
}

.page {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    background: var(--background);
    color: var(--foreground);
}

.page-main {
    flex-grow: 1;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 1rem;
}

@media (min-width: 640px) {
    .container { padding: 0 1.5rem; }
}

@media (min-width: 1024px) {
    .container { padding: 0 2rem; }
}

/* Navigation */
.nav {
    width: 100%;
    border-bottom: 1px solid var(--border);
}

.nav-inner {
    display: flex;
    justify-content: space-between;
    align-items: center;
    height: 4rem;
}

.nav-brand {
    color: var(--foreground);
    font-size: 1.25rem;
    font-weight: 700;
}

.nav-links {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.nav-link {
    color: var(--muted-foreground);
    padding: 0.5rem 0.75rem;
    border-radius: 0.375rem;
    font-size: 0.875rem;
    font-weight: 500;
}

.nav-link:hover {
    color: var(--foreground);
}

.nav-link-primary {
    background: var(--primary);
    color: var(--primary-foreground);
    padding: 0.5rem 1rem;
}

.nav-link-primary:hover {
    color: var(--primary-foreground);
    opacity: 0.9;
}

/* Hero */
.hero {
    padding-top: 5rem;
    padding-bottom: 5rem;
    text-align: center;
}

.hero-title {
    font-size: 2.25rem;
    font-weight: 700;
    margin: 0 0 1.5rem;
}

@media (min-width: 640px) {
    .hero-title { font-size: 3rem; }
}

@media (min-width: 768px) {
    .hero-title { font-size: 3.75rem; }
}

.hero-description {
    font-size: 1.25rem;
    color: var(--muted-foreground);
    max-width: 42rem;
    margin: 0 auto 2rem;
}

.hero-actions {
    display: flex;
    justify-content: center;
    gap: 1rem;
}

.btn {
    padding: 0.75rem 1.5rem;
    border-radius: 0.5rem;
    font-size: 1.125rem;
    font-weight: 500;
}

.btn:hover {
    opacity: 0.9;
}

.btn-primary {
    background: var(--primary);
    color: var(--primary-foreground);
}

.btn-secondary {
    background: var(--muted);
    color: var(--foreground);
}

/* Feature grid */
.features-grid {
    margin-top: 5rem;
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
    padding: 0 1rem;
}

@media (min-width: 768px) {
    .features-grid { grid-template-columns: repeat(3, 1fr); }
}

.feature-card {
    background: var(--card);
    padding: 1.5rem;
    border-radius: 0.5rem;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
}

.feature-title {
    font-size: 1.25rem;
    font-weight: 600;
    margin: 0 0 0.75rem;
}

.feature-description {
    color: var(--muted-foreground);
    margin: 0;
}

/* Footer */
.footer {
    width: 100%;
    border-top: 1px solid var(--border);
    margin-top: auto;
}

.footer-inner {
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    align-items: center;
    padding-top: 2rem;
    padding-bottom: 2rem;
}

@media (min-width: 768px) {
    .footer-inner { flex-direction: row; }
}

.footer-copyright {
    color: var(--muted-foreground);
    font-size: 0.875rem;
    margin-bottom: 1rem;
}

@media (min-width: 768px) {
    .footer-copyright { margin-bottom: 0; }
}

.footer-links {
    display: flex;
    gap: 1.5rem;
}

.footer-link {
    color: var(--muted-foreground);
    font-size: 0.875rem;
}

.footer-link:hover {
    color: var(--foreground);
}
"#;
