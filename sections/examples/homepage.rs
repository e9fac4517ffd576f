//! Render the default homepage.
//!
//! Run with: `cargo run --example homepage`

use renu_sections::{render_page, types::Page, ClientAssets};

fn main() {
    let page = Page::default();

    // No wasm glue: carousels stay on their first slide
    let assets = ClientAssets::default();

    let html = render_page(&page, &assets);

    let output_path = "homepage.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("Sections: {}", page.sections.len());
    println!("HTML size: {} bytes", html.len());
}
