//! Page content types.
//!
//! These types define what the landing page shows. They're designed to be:
//!
//! - **Serializable** - load a [`PageConfig`] from TOML or JSON via serde
//! - **Optional** - every [`PageConfig`] field falls back to a built-in default
//! - **Allocation-free defaults** - the defaults are `const` data borrowed for `'static`
//!
//! # Example
//!
//! ```rust
//! use landing_page::types::{Feature, PageConfig};
//!
//! let config = PageConfig {
//!     brand_name: Some("Acme".into()),
//!     features: Some(vec![Feature::new("Fast", "Renders in microseconds.")].into()),
//!     ..Default::default()
//! };
//!
//! assert_eq!(config.brand_name(), "Acme");
//! assert_eq!(config.nav_items().len(), 3);
//! ```

use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Brand label used when the caller supplies none.
pub const DEFAULT_BRAND_NAME: &str = "YourApp";

/// Class list for nav links that carry no style override.
pub const DEFAULT_LINK_CLASS: &str = "nav-link";

/// Class list of the default "Sign Up" entry.
pub const PRIMARY_LINK_CLASS: &str = "nav-link nav-link-primary";

/// Navigation entries used when the caller supplies none.
pub const DEFAULT_NAV_ITEMS: &[NavItem] = &[
    NavItem::new_static("/home", "Home", None),
    NavItem::new_static("/login", "Login", None),
    NavItem::new_static("/signup", "Sign Up", Some(PRIMARY_LINK_CLASS)),
];

/// Feature cards used when the caller supplies none.
pub const DEFAULT_FEATURES: &[Feature] = &[
    Feature::new_static(
        "Showcase Your Work",
        "Share your latest projects with a vibrant community of developers.",
    ),
    Feature::new_static(
        "Discover & Learn",
        "Explore projects from other developers and learn new skills.",
    ),
    Feature::new_static(
        "Collaborate & Connect",
        "Find collaborators for your projects and connect with like-minded developers.",
    ),
];

/// One navigation-bar link.
///
/// `href` doubles as the item's identity and should be unique within a list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    /// Link target, rendered as-is (not validated)
    pub href: Cow<'static, str>,
    /// Link text
    pub label: Cow<'static, str>,
    /// Class list replacing [`DEFAULT_LINK_CLASS`] for this link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Cow<'static, str>>,
}

impl NavItem {
    /// Create a link with the default appearance.
    pub fn new(href: impl Into<Cow<'static, str>>, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            style: None,
        }
    }

    /// Replace the default link class with `style`.
    pub fn with_style(mut self, style: impl Into<Cow<'static, str>>) -> Self {
        self.style = Some(style.into());
        self
    }

    const fn new_static(href: &'static str, label: &'static str, style: Option<&'static str>) -> Self {
        Self {
            href: Cow::Borrowed(href),
            label: Cow::Borrowed(label),
            style: match style {
                Some(style) => Some(Cow::Borrowed(style)),
                None => None,
            },
        }
    }

    /// Class list the link is rendered with.
    pub fn class(&self) -> &str {
        self.style.as_deref().unwrap_or(DEFAULT_LINK_CLASS)
    }
}

/// One feature card.
///
/// `title` doubles as the card's identity and should be unique within a list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Card heading
    pub title: Cow<'static, str>,
    /// Card body text
    pub description: Cow<'static, str>,
}

impl Feature {
    /// Create a feature card.
    pub fn new(
        title: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    const fn new_static(title: &'static str, description: &'static str) -> Self {
        Self {
            title: Cow::Borrowed(title),
            description: Cow::Borrowed(description),
        }
    }
}

/// Everything a caller can configure about the page.
///
/// Each field is optional; `None` means "use the built-in default". An
/// explicitly empty list is honoured as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Brand label shown in the nav bar, footer and document title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    /// Navigation links, left to right
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav_items: Option<Cow<'static, [NavItem]>>,
    /// Feature cards, in grid order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Cow<'static, [Feature]>>,
}

impl PageConfig {
    /// A config with every field filled in from the built-in defaults.
    pub fn defaults() -> Self {
        Self {
            brand_name: Some(DEFAULT_BRAND_NAME.to_string()),
            nav_items: Some(Cow::Borrowed(DEFAULT_NAV_ITEMS)),
            features: Some(Cow::Borrowed(DEFAULT_FEATURES)),
        }
    }

    /// Brand label, or [`DEFAULT_BRAND_NAME`].
    pub fn brand_name(&self) -> &str {
        self.brand_name.as_deref().unwrap_or(DEFAULT_BRAND_NAME)
    }

    /// Navigation links, or [`DEFAULT_NAV_ITEMS`].
    pub fn nav_items(&self) -> &[NavItem] {
        self.nav_items.as_deref().unwrap_or(DEFAULT_NAV_ITEMS)
    }

    /// Feature cards, or [`DEFAULT_FEATURES`].
    pub fn features(&self) -> &[Feature] {
        self.features.as_deref().unwrap_or(DEFAULT_FEATURES)
    }

    /// Fill in the defaults and take the owned content the components render.
    ///
    /// This is the only place caller-supplied lists are copied; defaults stay
    /// borrowed.
    pub fn resolve(&self) -> PageContent {
        PageContent {
            brand_name: self.brand_name().to_string(),
            nav_items: self
                .nav_items
                .clone()
                .unwrap_or(Cow::Borrowed(DEFAULT_NAV_ITEMS)),
            features: self
                .features
                .clone()
                .unwrap_or(Cow::Borrowed(DEFAULT_FEATURES)),
        }
    }

    /// Fields set in `other` win over fields set in `self`.
    pub fn merge(self, other: PageConfig) -> Self {
        Self {
            brand_name: other.brand_name.or(self.brand_name),
            nav_items: other.nav_items.or(self.nav_items),
            features: other.features.or(self.features),
        }
    }

    /// `href`s that appear more than once in the resolved nav list.
    pub fn duplicate_hrefs(&self) -> Vec<String> {
        duplicates(self.nav_items().iter().map(|item| item.href.as_ref()))
    }

    /// Titles that appear more than once in the resolved feature list.
    pub fn duplicate_titles(&self) -> Vec<String> {
        duplicates(self.features().iter().map(|feature| feature.title.as_ref()))
    }
}

/// A [`PageConfig`] with every default applied, ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContent {
    /// Brand label
    pub brand_name: String,
    /// Navigation links, left to right
    pub nav_items: Cow<'static, [NavItem]>,
    /// Feature cards, in grid order
    pub features: Cow<'static, [Feature]>,
}

fn duplicates<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut dups = Vec::new();
    for key in keys {
        if !seen.insert(key) && reported.insert(key) {
            dups.push(key.to_string());
        }
    }
    dups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_resolves_to_defaults() {
        let config = PageConfig::default();

        assert_eq!(config.brand_name(), "YourApp");
        let labels: Vec<_> = config.nav_items().iter().map(|i| i.label.to_string()).collect();
        assert_eq!(labels, ["Home", "Login", "Sign Up"]);
        assert_eq!(config.features().len(), 3);
    }

    #[test]
    fn defaults_are_borrowed_not_cloned() {
        let content = PageConfig::default().resolve();
        assert!(matches!(content.nav_items, Cow::Borrowed(_)));
        assert!(matches!(content.features, Cow::Borrowed(_)));
        assert!(std::ptr::eq(content.features.as_ptr(), DEFAULT_FEATURES.as_ptr()));
    }

    #[test]
    fn accessors_borrow_caller_lists() {
        let config = PageConfig {
            nav_items: Some(vec![NavItem::new("/a", "A")].into()),
            features: Some(vec![Feature::new("F", "f")].into()),
            ..Default::default()
        };
        let own_nav = config.nav_items.as_deref().expect("nav items set");
        let own_features = config.features.as_deref().expect("features set");

        assert!(std::ptr::eq(config.nav_items(), own_nav));
        assert!(std::ptr::eq(config.features(), own_features));
    }

    #[test]
    fn resolve_applies_defaults_per_field() {
        let config = PageConfig {
            brand_name: Some("Acme".into()),
            features: Some(vec![Feature::new("F", "f")].into()),
            ..Default::default()
        };
        let content = config.resolve();

        assert_eq!(content.brand_name, "Acme");
        assert!(matches!(content.nav_items, Cow::Borrowed(_)));
        assert_eq!(content.features.to_vec(), vec![Feature::new("F", "f")]);
    }

    #[test]
    fn explicit_empty_features_are_kept() {
        let config = PageConfig {
            features: Some(Vec::<Feature>::new().into()),
            ..Default::default()
        };
        assert!(config.features().is_empty());
    }

    #[test]
    fn nav_item_class_falls_back_to_default() {
        let plain = NavItem::new("/docs", "Docs");
        let styled = NavItem::new("/docs", "Docs").with_style("cta");

        assert_eq!(plain.class(), DEFAULT_LINK_CLASS);
        assert_eq!(styled.class(), "cta");
        assert_eq!(DEFAULT_NAV_ITEMS[2].class(), PRIMARY_LINK_CLASS);
    }

    #[test]
    fn merge_prefers_the_override() {
        let base = PageConfig {
            brand_name: Some("Base".into()),
            features: Some(Vec::<Feature>::new().into()),
            ..Default::default()
        };
        let over = PageConfig {
            brand_name: Some("Over".into()),
            ..Default::default()
        };

        let merged = base.merge(over);
        assert_eq!(merged.brand_name(), "Over");
        assert!(merged.features().is_empty());
        assert_eq!(merged.nav_items().len(), 3);
    }

    #[test]
    fn reports_each_duplicate_key_once() {
        let config = PageConfig {
            nav_items: Some(
                vec![
                    NavItem::new("/a", "A"),
                    NavItem::new("/b", "B"),
                    NavItem::new("/a", "A again"),
                    NavItem::new("/a", "A thrice"),
                ]
                .into(),
            ),
            ..Default::default()
        };

        assert_eq!(config.duplicate_hrefs(), ["/a"]);
        assert!(config.duplicate_titles().is_empty());
    }

    #[test]
    fn deserializes_camel_case_json() {
        let json = r#"{
            "brandName": "Acme",
            "navItems": [{ "href": "/x", "label": "X", "style": "cta" }]
        }"#;
        let config: PageConfig = serde_json::from_str(json).expect("valid json");

        assert_eq!(config.brand_name(), "Acme");
        assert_eq!(config.nav_items()[0].class(), "cta");
        assert!(config.features.is_none());
    }
}
