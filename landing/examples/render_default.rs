//! Render the page with default content.
//!
//! Run with: `cargo run --example render_default`

use landing_page::{render_page, Theme};

fn main() {
    let html = render_page(None, &Theme::System);

    let output_path = "landing.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
