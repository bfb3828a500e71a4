use actix_web::{post, web, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{PageSnapshot, SchemaBlock},
    error::ServiceError,
    services::{
        content_extractor, DocumentFetcher, EnrichmentOrchestrator, FaqSchema, SchemaSummary,
    },
};

#[derive(Deserialize)]
struct ScrapeBody {
    url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SchemaSummaryResponse {
    schema_scripts: Vec<SchemaBlock>,
    summary: String,
}

#[derive(Serialize)]
struct PageSummaryResponse {
    #[serde(flatten)]
    snapshot: PageSnapshot,
    summary: String,
}

async fn summarize_schema(
    fetcher: &DocumentFetcher,
    enrichment: &EnrichmentOrchestrator,
    url: &str,
) -> Result<SchemaSummaryResponse, ServiceError> {
    let html = fetcher.fetch(url).await?;
    let schema_scripts = content_extractor::extract_schema(&html);
    log::info!("Found {} schema blocks on {}", schema_scripts.len(), url);

    let summary = enrichment
        .run(&SchemaSummary {
            blocks: &schema_scripts,
        })
        .await?;

    Ok(SchemaSummaryResponse {
        schema_scripts,
        summary,
    })
}

async fn summarize_page(
    fetcher: &DocumentFetcher,
    enrichment: &EnrichmentOrchestrator,
    url: &str,
) -> Result<PageSummaryResponse, ServiceError> {
    let html = fetcher.fetch(url).await?;
    let snapshot = content_extractor::extract(&html);
    let summary = enrichment.run(&FaqSchema { snapshot: &snapshot }).await?;

    Ok(PageSummaryResponse { snapshot, summary })
}

#[post("/scrape-schema")]
pub async fn scrape_schema(
    fetcher: web::Data<DocumentFetcher>,
    enrichment: web::Data<EnrichmentOrchestrator>,
    body: web::Json<ScrapeBody>,
) -> HttpResponse {
    match summarize_schema(&fetcher, &enrichment, &body.url).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("Failed to summarize schema of {}: {:?}", body.url, e);
            e.error_response()
        }
    }
}

#[post("/scrape-and-summarize")]
pub async fn scrape_and_summarize(
    fetcher: web::Data<DocumentFetcher>,
    enrichment: web::Data<EnrichmentOrchestrator>,
    body: web::Json<ScrapeBody>,
) -> HttpResponse {
    match summarize_page(&fetcher, &enrichment, &body.url).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("Failed to summarize page {}: {:?}", body.url, e);
            e.error_response()
        }
    }
}
