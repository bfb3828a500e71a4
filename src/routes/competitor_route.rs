use actix_web::{http::StatusCode, post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::{
    domain::CompetitorCitation,
    error::{error_json, GENERIC_FAILURE},
    services::CompetitorResolver,
};

#[derive(Deserialize)]
struct SearchCompetitorsBody {
    company: String,
}

#[derive(Serialize)]
struct SearchCompetitorsResponse {
    competitors: Vec<CompetitorCitation>,
}

#[post("/search-competitors")]
pub async fn search_competitors(
    resolver: web::Data<CompetitorResolver>,
    body: web::Json<SearchCompetitorsBody>,
) -> HttpResponse {
    match resolver.resolve(&body.company).await {
        Ok(competitors) => HttpResponse::Ok().json(SearchCompetitorsResponse { competitors }),
        Err(e) => {
            log::error!("Failed to find competitors of {}: {:?}", body.company, e);
            // Either hop failing is reported the same way
            error_json(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE)
        }
    }
}
