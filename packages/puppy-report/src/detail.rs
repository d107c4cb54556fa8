use lazy_static::lazy_static;
use regex::Regex;
use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node, Selector};
use tracing::warn;

use crate::config::{BASE_URL, IMAGE_HOST};
use crate::types::AnimalRecord;

lazy_static! {
    static ref LOAD_PHOTO_RE: Regex = Regex::new(r"loadPhoto\('([^']+)'\)").unwrap();
}

const UNKNOWN: &str = "Unknown";

/// Parse a detail page into a normalized record.
///
/// Returns `None` when the page's content root (`#DefaultLayoutDiv`) is
/// missing, which marks the page shape as unrecognized; the caller drops the
/// candidate and the run continues.
pub fn extract_detail(html: &str, fallback_name: &str, detail_url: &str) -> Option<AnimalRecord> {
    let document = Html::parse_document(html);

    let root_sel = Selector::parse("#DefaultLayoutDiv").ok()?;
    let Some(layout) = document.select(&root_sel).next() else {
        warn!(name = %fallback_name, "DefaultLayoutDiv not found on detail page");
        return None;
    };

    let detail_html = rewrite_element(layout);
    let image_urls = collect_image_urls(&document);

    Some(AnimalRecord {
        name: text_by_id(&document, "lbName")
            .unwrap_or_else(|| fallback_name.to_string()),
        id: field_by_id(&document, "lblID"),
        breed: field_by_id(&document, "lbBreed"),
        age: field_by_id(&document, "lbAge"),
        gender: field_by_id(&document, "lbSex"),
        size: field_by_id(&document, "lblSize"),
        color: field_by_id(&document, "lblColor"),
        detail_url: detail_url.to_string(),
        image_urls,
        detail_html,
    })
}

/// Rewrite one relative image source to an absolute URL.
///
/// Parent-relative paths resolve against the image host, bare `images/`
/// paths against the search-service base. Returns `None` for sources that
/// are already absolute (nothing to do).
pub fn rewrite_image_src(src: &str) -> Option<String> {
    if src.starts_with("../") {
        Some(format!("{}{}", IMAGE_HOST, src.trim_start_matches("../")))
    } else if src.starts_with("images/") {
        Some(format!("{BASE_URL}{src}"))
    } else {
        None
    }
}

/// Rewrite every relative `img src` in a serialized fragment, returning a
/// new string. The parse tree itself is never mutated.
///
/// The fragment is rebuilt from the parse tree with the rewrite applied at
/// the attribute level: sources whose serialized form differs from the
/// attribute value (query strings, where `&` serializes as `&amp;`) are
/// still rewritten, and matching byte sequences in text nodes stay
/// untouched.
pub fn rewrite_image_sources(fragment: &str) -> String {
    let document = Html::parse_fragment(fragment);
    let mut out = String::new();
    for child in document.root_element().children() {
        write_node(&mut out, child, false);
    }
    out
}

fn rewrite_element(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    write_element(&mut out, el);
    out
}

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

fn write_node(out: &mut String, node: NodeRef<'_, Node>, raw_text: bool) {
    match node.value() {
        Node::Element(_) => {
            if let Some(el) = ElementRef::wrap(node) {
                write_element(out, el);
            }
        }
        Node::Text(text) => {
            if raw_text {
                out.push_str(text.as_ref());
            } else {
                out.push_str(&escape_text(text.as_ref()));
            }
        }
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment.as_ref());
            out.push_str("-->");
        }
        _ => {}
    }
}

fn write_element(out: &mut String, el: ElementRef<'_>) {
    let element = el.value();
    let name = element.name();

    out.push('<');
    out.push_str(name);
    for (attr_name, attr_value) in element.attrs() {
        let value = if name == "img" && attr_name == "src" {
            rewrite_image_src(attr_value).unwrap_or_else(|| attr_value.to_string())
        } else {
            attr_value.to_string()
        };
        out.push(' ');
        out.push_str(attr_name);
        out.push_str("=\"");
        out.push_str(&escape_attr(&value));
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&name) {
        return;
    }

    // Script and style carry raw text; escaping would corrupt them.
    let raw_text = matches!(name, "script" | "style");
    for child in el.children() {
        write_node(out, child, raw_text);
    }

    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

fn escape_text(value: &str) -> String {
    value.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Main photo first, then every `loadPhoto('...')` handler target in
/// document order, skipping URLs already collected.
fn collect_image_urls(document: &Html) -> Vec<String> {
    let mut urls = Vec::new();

    if let Ok(main_sel) = Selector::parse("#imgAnimalPhoto") {
        if let Some(src) = document
            .select(&main_sel)
            .next()
            .and_then(|img| img.value().attr("src"))
        {
            urls.push(rewrite_image_src(src).unwrap_or_else(|| src.to_string()));
        }
    }

    if let Ok(link_sel) = Selector::parse("a[onclick]") {
        for link in document.select(&link_sel) {
            let Some(onclick) = link.value().attr("onclick") else {
                continue;
            };
            let Some(caps) = LOAD_PHOTO_RE.captures(onclick) else {
                continue;
            };
            let url = caps[1].to_string();
            if !urls.contains(&url) {
                urls.push(url);
            }
        }
    }

    urls
}

fn field_by_id(document: &Html, id: &str) -> String {
    text_by_id(document, id).unwrap_or_else(|| UNKNOWN.to_string())
}

fn text_by_id(document: &Html, id: &str) -> Option<String> {
    let sel = Selector::parse(&format!("#{id}")).ok()?;
    document
        .select(&sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}
