//! Leptos UI components for the landing page.
//!
//! Each component is a `#[component]` function reading only its own slice of
//! the page config. None of them depends on another's output.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! └── LandingPage (data-theme root)
//!     ├── Navigation
//!     ├── <main>
//!     │   ├── Hero
//!     │   └── FeatureGrid
//!     │       └── FeatureCard (per feature)
//!     └── Footer
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but can be
//! rendered on their own:
//!
//! ```rust
//! use landing_page::components::FeatureGrid;
//! use landing_page::types::DEFAULT_FEATURES;
//! use leptos::prelude::*;
//! use leptos::tachys::view::RenderHtml;
//! use std::borrow::Cow;
//!
//! let html = view! { <FeatureGrid features=Cow::Borrowed(DEFAULT_FEATURES) /> }.to_html();
//! assert!(html.contains("Showcase Your Work"));
//! ```

mod document;
mod features;
mod footer;
mod hero;
mod navigation;
mod page;

pub use document::PageDocument;
pub use features::{FeatureCard, FeatureGrid};
pub use footer::Footer;
pub use hero::Hero;
pub use navigation::Navigation;
pub use page::LandingPage;
