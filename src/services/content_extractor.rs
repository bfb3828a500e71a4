use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::domain::{PageSnapshot, SchemaBlock};

const JSON_LD_TYPE: &str = "application/ld+json";

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| static_selector("head title"));
static META_DESCRIPTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| static_selector(r#"meta[name="description"]"#));
static H1_SELECTOR: LazyLock<Selector> = LazyLock::new(|| static_selector("h1"));
static IMG_SELECTOR: LazyLock<Selector> = LazyLock::new(|| static_selector("img"));
static TYPED_SCRIPT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| static_selector("script[type]"));

fn static_selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("hard-coded selector is valid CSS")
}

fn element_text(element: ElementRef) -> String {
    element.text().collect()
}

/// Builds a [`PageSnapshot`] from whatever DOM the parser recovers. Never fails:
/// missing elements show up as empty or absent fields.
pub fn extract(html: &str) -> PageSnapshot {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(element_text)
        .unwrap_or_default();

    let meta_description = document
        .select(&META_DESCRIPTION_SELECTOR)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(|content| content.to_string());

    let headings: Vec<String> = document.select(&H1_SELECTOR).map(element_text).collect();

    let image_alt_texts: Vec<Option<String>> = document
        .select(&IMG_SELECTOR)
        .map(|img| img.value().attr("alt").map(|alt| alt.to_string()))
        .collect();

    log::info!(
        "Extracted page snapshot: {} h1 tags, {} images",
        headings.len(),
        image_alt_texts.len()
    );

    PageSnapshot::new(title, meta_description, headings, image_alt_texts)
}

/// Parses every JSON-LD script block. A block that is not valid JSON is logged
/// and dropped; the remaining blocks are still returned.
pub fn extract_schema(html: &str) -> Vec<SchemaBlock> {
    let document = Html::parse_document(html);

    document
        .select(&TYPED_SCRIPT_SELECTOR)
        .filter(|script| {
            script
                .value()
                .attr("type")
                .is_some_and(|kind| kind.trim().eq_ignore_ascii_case(JSON_LD_TYPE))
        })
        .enumerate()
        .filter_map(|(index, script)| {
            let text = element_text(script);
            match serde_json::from_str(&text) {
                Ok(value) => Some(SchemaBlock::new(value)),
                Err(e) => {
                    log::warn!("Skipping malformed JSON-LD block #{}: {}", index, e);
                    None
                }
            }
        })
        .collect()
}
