//! # landing-page
//!
//! Leptos SSR renderer for a static marketing landing page.
//!
//! The page is four sections stacked vertically: a navigation bar, a hero
//! banner, a feature grid and a footer. Content comes from an optional
//! [`PageConfig`]; anything left out falls back to built-in defaults.
//!
//! ## Quick Start
//!
//! ```rust
//! use landing_page::{render_page, Theme, types::PageConfig};
//!
//! let config = PageConfig {
//!     brand_name: Some("Acme".into()),
//!     ..Default::default()
//! };
//!
//! let html = render_page(Some(&config), &Theme::Dark);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Acme"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Page content: nav items, features, config and defaults
//! - [`theme`] - The theme capability the page reads
//! - [`components`] - Leptos UI components
//! - [`config`] - Loading a [`PageConfig`] from TOML or JSON
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering uses Leptos 0.8's `RenderHtml` trait. No reactive runtime or
//! hydration is involved, the output is plain static HTML.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod styles;
pub mod theme;
pub mod types;

pub use theme::{EnvTheme, Theme, ThemeSource};
pub use types::{Feature, NavItem, PageConfig, PageContent};

use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use time::OffsetDateTime;

/// Render the complete landing page as an HTML document.
///
/// `config` may be `None`, or leave any field unset; the built-in defaults
/// fill the gaps. `theme` is read once. The footer year is the current
/// calendar year.
///
/// # Example
///
/// ```rust
/// use landing_page::{render_page, Theme};
///
/// let html = render_page(None, &Theme::System);
/// assert!(html.contains("YourApp"));
/// assert!(html.contains(r#"data-theme="system""#));
/// ```
pub fn render_page(config: Option<&PageConfig>, theme: &dyn ThemeSource) -> String {
    render_page_for_year(config, theme, current_year())
}

/// Same as [`render_page`], with the footer year supplied by the caller.
pub fn render_page_for_year(
    config: Option<&PageConfig>,
    theme: &dyn ThemeSource,
    year: i32,
) -> String {
    let fallback = PageConfig::default();
    let config = config.unwrap_or(&fallback);
    let theme = theme.current_theme();

    for href in config.duplicate_hrefs() {
        tracing::warn!(%href, "nav item href appears more than once");
    }
    for title in config.duplicate_titles() {
        tracing::warn!(%title, "feature title appears more than once");
    }

    tracing::debug!(
        brand = config.brand_name(),
        %theme,
        year,
        "rendering landing page"
    );

    let content = config.resolve();
    let doc = view! {
        <PageDocument content=content theme=theme year=year />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Current calendar year on the local clock, UTC when the local offset is
/// unavailable.
pub fn current_year() -> i32 {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Feature, NavItem};

    #[test]
    fn renders_default_page() {
        let html = render_page(None, &Theme::Light);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>YourApp</title>"));
        let body = &html[html.find("<body").expect("body")..];
        assert!(body.contains(r#"data-theme="light""#));
    }

    #[test]
    fn sections_render_in_page_order() {
        let html = render_page_for_year(None, &Theme::Dark, 2030);

        let nav = html.find(r#"class="nav""#).expect("nav");
        let main = html.find("<main").expect("main");
        let hero = html.find(r#"class="hero container""#).expect("hero");
        let grid = html.find(r#"class="features-grid""#).expect("grid");
        let footer = html.find("<footer").expect("footer");

        assert!(nav < main && main < hero && hero < grid && grid < footer);
    }

    #[test]
    fn footer_uses_supplied_year() {
        let html = render_page_for_year(None, &Theme::System, 1999);
        assert!(html.contains("© 1999 YourApp. All rights reserved."));
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }

    #[test]
    fn custom_content_replaces_defaults() {
        let config = PageConfig {
            brand_name: Some("Acme".into()),
            nav_items: Some(vec![NavItem::new("/docs", "Docs")].into()),
            features: Some(vec![Feature::new("Fast", "Very fast.")].into()),
        };
        let html = render_page_for_year(Some(&config), &Theme::Light, 2030);

        assert!(html.contains("Docs"));
        assert!(html.contains("Very fast."));
        assert!(!html.contains("Showcase Your Work"));
        assert!(!html.contains(r#"href="/home""#));
    }

    #[test]
    fn duplicate_keys_still_render() {
        let config = PageConfig {
            features: Some(
                vec![Feature::new("Same", "first"), Feature::new("Same", "second")].into(),
            ),
            ..Default::default()
        };
        let html = render_page_for_year(Some(&config), &Theme::Light, 2030);

        assert!(html.contains("first"));
        assert!(html.contains("second"));
    }
}
