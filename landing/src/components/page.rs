//! Page composer - stacks the four sections vertically

use super::{FeatureGrid, Footer, Hero, Navigation};
use crate::theme::Theme;
use crate::types::PageContent;
use leptos::prelude::*;

/// Navigation, hero, feature grid and footer, top to bottom.
///
/// Each section takes its own slice of `content`. The theme ends up on the
/// root element as `data-theme`.
#[component]
pub fn LandingPage(
    /// Resolved page content (see [`crate::types::PageConfig::resolve`])
    content: PageContent,
    /// Theme read from the caller's theme source
    theme: Theme,
    /// Calendar year shown in the footer
    year: i32,
) -> impl IntoView {
    let PageContent {
        brand_name,
        nav_items,
        features,
    } = content;

    view! {
        <div class="page" data-theme=theme.as_str()>
            <Navigation brand_name=brand_name.clone() nav_items=nav_items />
            <main class="page-main">
                <Hero brand_name=brand_name.clone() />
                <FeatureGrid features=features />
            </main>
            <Footer brand_name=brand_name year=year />
        </div>
    }
}
