use actix_web::{post, web, HttpResponse, ResponseError};
use serde::Deserialize;

use crate::services::{EnrichmentOrchestrator, SeoTagRewrite};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateSeoTagsBody {
    #[serde(default)]
    current_title: String,
    #[serde(default)]
    current_description: String,
}

#[post("/generate-seo-tags")]
pub async fn generate_seo_tags(
    enrichment: web::Data<EnrichmentOrchestrator>,
    body: web::Json<GenerateSeoTagsBody>,
) -> HttpResponse {
    let task = SeoTagRewrite {
        current_title: &body.current_title,
        current_description: &body.current_description,
    };

    match enrichment.run(&task).await {
        Ok(tags) => HttpResponse::Ok().json(tags),
        Err(e) => {
            log::error!("Failed to generate SEO tags: {:?}", e);
            e.error_response()
        }
    }
}
