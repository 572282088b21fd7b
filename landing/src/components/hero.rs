//! Hero banner

use leptos::prelude::*;

/// Fixed headline, pitch and the two calls to action.
///
/// `brand_name` is accepted so callers can pass the same props to every
/// section; nothing visible depends on it yet.
#[component]
pub fn Hero(brand_name: String) -> impl IntoView {
    let _ = brand_name;

    view! {
        <section class="hero container">
            <h1 class="hero-title">"Connect, Share, & Collaborate."</h1>
            <p class="hero-description">
                "Join a community of developers to showcase your projects, discover new ideas, and collaborate with peers."
            </p>
            <div class="hero-actions">
                <a href="/signup" class="btn btn-primary">"Get Started"</a>
                <a href="/login" class="btn btn-secondary">"Sign In"</a>
            </div>
        </section>
    }
}
