//! Renders the start page as one self-contained HTML document.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::catalog::{Catalog, Category, Website};
use crate::color::{self, FALLBACK_COLOR};
use crate::search::SearchRegistry;

/// Everything the renderer needs to emit one page.
pub struct PageContext<'a> {
    pub title: &'a str,
    pub footer: Option<&'a str>,
    pub catalog: &'a Catalog,
    pub registry: &'a SearchRegistry,
    /// Sampled background color per icon locator.
    pub colors: &'a HashMap<String, String>,
}

pub fn render(ctx: &PageContext<'_>) -> String {
    let mut body = String::new();
    body.push_str(&render_search_box(ctx.registry));
    for category in &ctx.catalog.categories {
        body.push_str(&render_category(category, ctx.colors));
    }
    layout(ctx.title, &body, ctx.footer)
}

fn render_search_box(registry: &SearchRegistry) -> String {
    let mut markup = String::new();
    markup.push_str("<form id=\"search\" class=\"search\">");
    markup.push_str("<select id=\"engine\" aria-label=\"Search engine\">");
    for (index, engine) in registry.engines.iter().enumerate() {
        let selected = if index == 0 { " selected" } else { "" };
        let _ = write!(
            markup,
            "<option value=\"{}\"{}>{}</option>",
            escape_html(&engine.search_url),
            selected,
            escape_html(&engine.name)
        );
    }
    markup.push_str("</select>");
    markup.push_str(
        "<input id=\"query\" type=\"text\" placeholder=\"Search the web\" autocomplete=\"off\">",
    );
    markup.push_str("<button type=\"submit\">Search</button>");
    markup.push_str("</form>");
    markup
}

fn render_category(category: &Category, colors: &HashMap<String, String>) -> String {
    let mut markup = String::new();
    markup.push_str("<section class=\"category\">");
    markup.push_str("<div class=\"category-head\">");
    if let Some(icon) = &category.icon {
        let _ = write!(
            markup,
            "<img src=\"{}\" alt=\"\">",
            escape_html(icon)
        );
    }
    let _ = write!(markup, "<h2>{}</h2>", escape_html(&category.name));
    markup.push_str("</div>");
    markup.push_str("<div class=\"grid\">");
    for site in &category.websites {
        markup.push_str(&render_card(site, colors));
    }
    markup.push_str("</div>");
    markup.push_str("</section>");
    markup
}

fn render_card(site: &Website, colors: &HashMap<String, String>) -> String {
    let background = site
        .icon
        .as_ref()
        .and_then(|icon| colors.get(icon))
        .map(String::as_str)
        .unwrap_or(FALLBACK_COLOR);
    let tone = color::text_tone_for(background).css_class();

    let mut markup = String::new();
    let _ = write!(
        markup,
        "<a class=\"card {}\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" style=\"background-color: {}\">",
        tone,
        escape_html(&site.url),
        escape_html(background)
    );
    markup.push_str("<span class=\"card-head\">");
    if let Some(icon) = &site.icon {
        let _ = write!(
            markup,
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(icon),
            escape_html(&site.title)
        );
    }
    let _ = write!(
        markup,
        "<span class=\"card-title\">{}</span>",
        escape_html(&site.title)
    );
    markup.push_str("</span>");
    if let Some(description) = &site.description {
        let _ = write!(
            markup,
            "<span class=\"card-desc\" title=\"{0}\">{0}</span>",
            escape_html(description)
        );
    }
    markup.push_str("</a>");
    markup
}

fn layout(title: &str, body: &str, footer: Option<&str>) -> String {
    let footer_markup = footer
        .map(|text| format!("<footer>{}</footer>", escape_html(text)))
        .unwrap_or_default();
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"><title>{}</title><style>{}</style></head><body><main>{}</main>{}{}</body></html>",
        escape_html(title),
        styles(),
        body,
        footer_markup,
        search_script()
    )
}

// Submits the search box to the selected engine in a new tab; the emitted
// page stays fully static.
fn search_script() -> &'static str {
    "<script>document.getElementById('search').addEventListener('submit', function (event) {\n  event.preventDefault();\n  var query = document.getElementById('query').value.trim();\n  if (!query) { return; }\n  var template = document.getElementById('engine').value;\n  window.open(template.replace('{query}', encodeURIComponent(query)), '_blank');\n});</script>"
}

fn styles() -> &'static str {
    "body { font-family: sans-serif; margin: 0; padding: 0; background: #f5f5f5; color: #222; }\nmain { max-width: 960px; margin: 0 auto; padding: 24px; }\n.search { display: flex; gap: 8px; margin-bottom: 32px; }\n.search select { padding: 8px; border-radius: 6px; border: 1px solid #ccc; background: #fff; }\n.search input { flex: 1; padding: 8px 12px; border-radius: 6px; border: 1px solid #ccc; }\n.search button { padding: 8px 20px; border-radius: 6px; border: 1px solid #1976d2; background: #2196f3; color: #fff; cursor: pointer; }\n.search button:hover { background: #1e88e5; }\n.category { margin-bottom: 32px; }\n.category-head { display: flex; align-items: center; gap: 8px; margin-bottom: 12px; }\n.category-head img { width: 24px; height: 24px; }\n.category-head h2 { margin: 0; font-size: 1.2rem; }\n.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 8px; }\n.card { display: flex; flex-direction: column; gap: 6px; padding: 12px; border-radius: 8px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.2); text-decoration: none; }\n.card:hover { box-shadow: 0 2px 6px rgba(0, 0, 0, 0.3); }\n.card-head { display: flex; align-items: center; gap: 8px; }\n.card-head img { width: 24px; height: 24px; object-fit: contain; }\n.card-title { font-weight: 600; }\n.card-desc { font-size: 0.8rem; opacity: 0.85; overflow: hidden; white-space: nowrap; text-overflow: ellipsis; }\n.text-dark { color: #1f2937; }\n.text-light { color: #fff; }\nfooter { text-align: center; padding: 16px; color: #555; font-size: 0.9rem; }"
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
