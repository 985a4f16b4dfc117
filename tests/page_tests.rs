use std::collections::HashMap;

use startpage::catalog::{Catalog, Category, Website};
use startpage::page::{self, PageContext};
use startpage::search::{SearchEngine, SearchRegistry};

fn fixture() -> (Catalog, SearchRegistry, HashMap<String, String>) {
    let catalog = Catalog {
        categories: vec![Category {
            id: "dev".to_string(),
            name: "Dev & Tools".to_string(),
            description: None,
            icon: None,
            websites: vec![
                Website {
                    title: "GitHub".to_string(),
                    url: "https://github.com".to_string(),
                    description: Some("Code hosting".to_string()),
                    icon: Some("https://github.com/favicon.ico".to_string()),
                },
                Website {
                    title: "No Icon".to_string(),
                    url: "https://example.com".to_string(),
                    description: None,
                    icon: None,
                },
            ],
        }],
    };
    let registry = SearchRegistry {
        engines: vec![SearchEngine {
            id: "google".to_string(),
            name: "Google".to_string(),
            icon: "https://www.google.com/favicon.ico".to_string(),
            search_url: "https://www.google.com/search?q={query}".to_string(),
        }],
    };
    let mut colors = HashMap::new();
    colors.insert(
        "https://github.com/favicon.ico".to_string(),
        "rgb(10, 20, 30)".to_string(),
    );
    (catalog, registry, colors)
}

#[test]
fn renders_cards_with_sampled_colors_and_tones() {
    let (catalog, registry, colors) = fixture();
    let html = page::render(&PageContext {
        title: "Start Page",
        footer: None,
        catalog: &catalog,
        registry: &registry,
        colors: &colors,
    });

    // sampled background is dark, so the card gets light text
    assert!(html.contains("background-color: rgb(10, 20, 30)"));
    assert!(html.contains("card text-light"));
    // the icon-less card keeps the white fallback and dark text
    assert!(html.contains("background-color: #ffffff"));
    assert!(html.contains("card text-dark"));
    assert!(html.contains("href=\"https://github.com\""));
}

#[test]
fn escapes_user_supplied_text() {
    let (catalog, registry, colors) = fixture();
    let html = page::render(&PageContext {
        title: "Links <& More>",
        footer: Some("© 2026 <admin>"),
        catalog: &catalog,
        registry: &registry,
        colors: &colors,
    });

    assert!(html.contains("<title>Links &lt;&amp; More&gt;</title>"));
    assert!(html.contains("<h2>Dev &amp; Tools</h2>"));
    assert!(html.contains("<footer>© 2026 &lt;admin&gt;</footer>"));
    assert!(!html.contains("<admin>"));
}

#[test]
fn search_box_carries_engine_templates_and_script() {
    let (catalog, registry, colors) = fixture();
    let html = page::render(&PageContext {
        title: "Start Page",
        footer: None,
        catalog: &catalog,
        registry: &registry,
        colors: &colors,
    });

    assert!(html.contains(
        "<option value=\"https://www.google.com/search?q={query}\" selected>Google</option>"
    ));
    assert!(html.contains("encodeURIComponent"));
    assert!(html.contains("template.replace('{query}'"));
}
