use actix_web::{post, web, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

use crate::services::{EnrichmentOrchestrator, MedicalQuestion};

#[derive(Deserialize)]
struct AskBody {
    message: String,
}

#[derive(Serialize)]
struct AskResponse {
    message: String,
}

#[post("/ask")]
pub async fn ask(
    enrichment: web::Data<EnrichmentOrchestrator>,
    body: web::Json<AskBody>,
) -> HttpResponse {
    match enrichment
        .run(&MedicalQuestion {
            message: &body.message,
        })
        .await
    {
        Ok(message) => HttpResponse::Ok().json(AskResponse { message }),
        Err(e) => {
            log::error!("Failed to answer question: {:?}", e);
            e.error_response()
        }
    }
}
