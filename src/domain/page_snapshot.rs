use serde::Serialize;

/// Normalized view of one fetched HTML document.
///
/// Built once by the content extractor and never mutated afterwards. The image
/// count is derived from the alt-text inventory, so the two always agree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    title: String,
    #[serde(rename = "h1Tags")]
    headings: Vec<String>,
    #[serde(rename = "imgCount")]
    image_count: usize,
    #[serde(rename = "imgAlts")]
    image_alt_texts: Vec<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    meta_description: Option<String>,
}

impl PageSnapshot {
    pub fn new(
        title: String,
        meta_description: Option<String>,
        headings: Vec<String>,
        image_alt_texts: Vec<Option<String>>,
    ) -> Self {
        PageSnapshot {
            title,
            headings,
            image_count: image_alt_texts.len(),
            image_alt_texts,
            meta_description,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn meta_description(&self) -> Option<&str> {
        self.meta_description.as_deref()
    }

    pub fn headings(&self) -> &[String] {
        &self.headings
    }

    pub fn image_alt_texts(&self) -> &[Option<String>] {
        &self.image_alt_texts
    }

    pub fn image_count(&self) -> usize {
        self.image_count
    }
}

/// One parsed JSON-LD object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SchemaBlock(serde_json::Value);

impl SchemaBlock {
    pub fn new(value: serde_json::Value) -> Self {
        SchemaBlock(value)
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.0
    }
}
