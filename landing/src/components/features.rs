//! Feature grid and its cards

use std::borrow::Cow;

use crate::types::Feature;
use leptos::prelude::*;

/// One card per feature, in input order. No features, no cards.
#[component]
pub fn FeatureGrid(features: Cow<'static, [Feature]>) -> impl IntoView {
    let cards = features
        .iter()
        .map(|feature| {
            view! {
                <FeatureCard
                    title=feature.title.to_string()
                    description=feature.description.to_string()
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="features" class="features-grid">
            {cards}
        </section>
    }
}

/// Single feature card: title over description.
#[component]
pub fn FeatureCard(title: String, description: String) -> impl IntoView {
    view! {
        <div class="feature-card">
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </div>
    }
}
