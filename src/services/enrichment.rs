use std::{
    fmt,
    sync::{Arc, LazyLock},
};

use itertools::Itertools;
use regex::Regex;
use serde::Serialize;

use crate::{
    domain::{PageSnapshot, SchemaBlock},
    error::ServiceError,
    services::CompletionService,
};

static IMPROVED_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)Improved title:[ \t]*(.+?)[ \t]*(?:Improved description:|$)")
        .expect("hard-coded pattern is valid")
});
static IMPROVED_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)Improved description:[ \t]*(.+?)[ \t]*$")
        .expect("hard-coded pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    MedicalQa,
    SeoTags,
    SchemaSummary,
    FaqSchema,
    SectorLookup,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::MedicalQa => "medical-qa",
            TaskKind::SeoTags => "seo-tags",
            TaskKind::SchemaSummary => "schema-summary",
            TaskKind::FaqSchema => "faq-schema",
            TaskKind::SectorLookup => "sector-lookup",
        }
    }

    /// Fixed instruction sent as the system message for every task of this kind.
    pub fn system_prompt(&self) -> &'static str {
        match self {
            TaskKind::MedicalQa => {
                "You are a medical professional that references WebMD for accurate information \
                 to help aid clients with medical concerns. Make sure to follow professional \
                 communication standards, never break character and do not discuss personal \
                 information that is not medical related."
            }
            TaskKind::SeoTags => {
                "You are tasked with generating SEO tags. Provide only an improved title and \
                 description for SEO, on two lines formatted as \
                 `Improved title: <title>` and `Improved description: <description>`."
            }
            TaskKind::SchemaSummary => {
                "You are tasked with creating an SEO optimized schema markup."
            }
            TaskKind::FaqSchema => {
                "You are tasked with creating an FAQ schema markup. Return in JSON format please."
            }
            TaskKind::SectorLookup => {
                "You are tasked with determining the sector of a company, give no dialogue but \
                 the sector."
            }
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One kind of enrichment: how to phrase the request and how to read the answer.
pub trait EnrichmentTask {
    type Output;

    const KIND: TaskKind;

    fn user_prompt(&self) -> String;

    fn parse(&self, completion: String) -> Result<Self::Output, ServiceError>;
}

pub struct MedicalQuestion<'a> {
    pub message: &'a str,
}

impl EnrichmentTask for MedicalQuestion<'_> {
    type Output = String;

    const KIND: TaskKind = TaskKind::MedicalQa;

    fn user_prompt(&self) -> String {
        self.message.to_string()
    }

    fn parse(&self, completion: String) -> Result<String, ServiceError> {
        Ok(completion)
    }
}

pub struct SeoTagRewrite<'a> {
    pub current_title: &'a str,
    pub current_description: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoTags {
    pub new_title: String,
    pub new_description: String,
}

impl EnrichmentTask for SeoTagRewrite<'_> {
    type Output = SeoTags;

    const KIND: TaskKind = TaskKind::SeoTags;

    fn user_prompt(&self) -> String {
        format!(
            "Current title: {}. Current description: {}. Please generate improved versions.",
            self.current_title, self.current_description
        )
    }

    fn parse(&self, completion: String) -> Result<SeoTags, ServiceError> {
        Ok(parse_seo_tags(&completion))
    }
}

/// Missing labels leave the matching field empty instead of failing.
pub fn parse_seo_tags(completion: &str) -> SeoTags {
    let capture = |pattern: &Regex| {
        pattern
            .captures(completion)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    };

    let tags = SeoTags {
        new_title: capture(&IMPROVED_TITLE),
        new_description: capture(&IMPROVED_DESCRIPTION),
    };

    if tags.new_title.is_empty() || tags.new_description.is_empty() {
        log::warn!("SEO completion is missing a labelled field: {:?}", completion);
    }

    tags
}

pub struct SchemaSummary<'a> {
    pub blocks: &'a [SchemaBlock],
}

impl EnrichmentTask for SchemaSummary<'_> {
    type Output = String;

    const KIND: TaskKind = TaskKind::SchemaSummary;

    fn user_prompt(&self) -> String {
        let blocks =
            serde_json::Value::Array(self.blocks.iter().map(|b| b.value().clone()).collect());
        format!("Scraped Schema: {}.", blocks)
    }

    fn parse(&self, completion: String) -> Result<String, ServiceError> {
        Ok(completion)
    }
}

pub struct FaqSchema<'a> {
    pub snapshot: &'a PageSnapshot,
}

impl EnrichmentTask for FaqSchema<'_> {
    type Output = String;

    const KIND: TaskKind = TaskKind::FaqSchema;

    fn user_prompt(&self) -> String {
        let alt_texts = self
            .snapshot
            .image_alt_texts()
            .iter()
            .map(|alt| alt.as_deref().unwrap_or(""))
            .join(", ");

        format!(
            "Title: {}. H1 Tags: {}. Alt Tags: {}. Meta Description: {}. Please summarize.",
            self.snapshot.title(),
            self.snapshot.headings().join(", "),
            alt_texts,
            self.snapshot.meta_description().unwrap_or(""),
        )
    }

    fn parse(&self, completion: String) -> Result<String, ServiceError> {
        Ok(completion)
    }
}

pub struct SectorLookup<'a> {
    pub company: &'a str,
}

impl EnrichmentTask for SectorLookup<'_> {
    type Output = String;

    const KIND: TaskKind = TaskKind::SectorLookup;

    fn user_prompt(&self) -> String {
        format!("What sector does the company {} belong to?", self.company)
    }

    fn parse(&self, completion: String) -> Result<String, ServiceError> {
        Ok(completion.trim().to_string())
    }
}

/// Cuts `prompt` down to at most `max_chars` characters.
pub fn bound_prompt(mut prompt: String, max_chars: usize) -> String {
    let cut = prompt.char_indices().nth(max_chars).map(|(index, _)| index);
    if let Some(byte_index) = cut {
        log::warn!(
            "Truncating prompt of {} bytes to {} characters",
            prompt.len(),
            max_chars
        );
        prompt.truncate(byte_index);
    }
    prompt
}

#[derive(Clone)]
pub struct EnrichmentOrchestrator {
    completion: Arc<dyn CompletionService>,
    model: String,
    max_prompt_chars: usize,
}

impl EnrichmentOrchestrator {
    pub fn new(
        completion: Arc<dyn CompletionService>,
        model: impl Into<String>,
        max_prompt_chars: usize,
    ) -> Self {
        EnrichmentOrchestrator {
            completion,
            model: model.into(),
            max_prompt_chars,
        }
    }

    /// One completion call, then the task's own parser over the reply.
    pub async fn run<T: EnrichmentTask>(&self, task: &T) -> Result<T::Output, ServiceError> {
        let user_prompt = bound_prompt(task.user_prompt(), self.max_prompt_chars);

        log::info!("Running {} enrichment with {}", T::KIND, self.model);
        let completion = self
            .completion
            .complete(T::KIND.system_prompt(), &user_prompt, &self.model)
            .await?;

        task.parse(completion)
    }
}
