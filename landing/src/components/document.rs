//! Root document component - the complete HTML page

use super::LandingPage;
use crate::styles::LANDING_CSS;
use crate::theme::Theme;
use crate::types::PageContent;
use leptos::prelude::*;

/// The complete HTML document: head with title and stylesheet, body with the page.
#[component]
pub fn PageDocument(content: PageContent, theme: Theme, year: i32) -> impl IntoView {
    let title = content.brand_name.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <LandingPage content=content theme=theme year=year />
            </body>
        </html>
    }
}
