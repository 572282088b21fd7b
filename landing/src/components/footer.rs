//! Page footer

use leptos::prelude::*;

/// Copyright line for `brand_name` and `year`, plus the legal links.
#[component]
pub fn Footer(brand_name: String, year: i32) -> impl IntoView {
    let copyright = copyright_line(&brand_name, year);

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-inner">
                    <div class="footer-copyright">{copyright}</div>
                    <div class="footer-links">
                        <a href="/privacy" class="footer-link">"Privacy Policy"</a>
                        <a href="/terms" class="footer-link">"Terms of Service"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

/// `© <year> <brand>. All rights reserved.`
pub(crate) fn copyright_line(brand_name: &str, year: i32) -> String {
    format!("© {year} {brand_name}. All rights reserved.")
}
