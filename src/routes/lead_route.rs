use actix_web::{get, http::StatusCode, web, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

use crate::{
    domain::Lead,
    error::{error_json, ServiceError},
    services::{build_places_query, PlacesClient},
};

#[derive(Deserialize)]
struct FindLeadsQuery {
    state: String,
    city: String,
    sector: String,
}

#[derive(Serialize)]
struct FindLeadsResponse {
    leads: Vec<Lead>,
}

#[get("/find-leads")]
pub async fn find_leads(
    places: web::Data<PlacesClient>,
    query: web::Query<FindLeadsQuery>,
) -> HttpResponse {
    let search = build_places_query(&query.sector, &query.city, &query.state);

    match places.text_search(&search).await {
        Ok(results) => {
            let leads = results.into_iter().map(Lead::from).collect();
            HttpResponse::Ok().json(FindLeadsResponse { leads })
        }
        Err(e @ ServiceError::MissingData(_)) => e.error_response(),
        Err(e) => {
            log::error!("Failed to fetch leads for {}: {:?}", search, e);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch leads")
        }
    }
}
