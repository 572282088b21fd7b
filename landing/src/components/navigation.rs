//! Top navigation bar

use std::borrow::Cow;

use crate::types::NavItem;
use leptos::prelude::*;

/// Brand label on the left, links on the right in input order.
///
/// A link with a `style` override is rendered with that class list instead of
/// [`crate::types::DEFAULT_LINK_CLASS`].
#[component]
pub fn Navigation(brand_name: String, nav_items: Cow<'static, [NavItem]>) -> impl IntoView {
    let links = nav_items
        .iter()
        .map(|item| {
            let href = item.href.to_string();
            let class = item.class().to_string();
            let label = item.label.to_string();
            view! { <a href=href class=class>{label}</a> }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="nav">
            <div class="container">
                <div class="nav-inner">
                    <span class="nav-brand">{brand_name}</span>
                    <div class="nav-links">{links}</div>
                </div>
            </div>
        </nav>
    }
}
