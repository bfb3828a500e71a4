use std::{net::TcpListener, path::PathBuf, sync::Arc, time::Duration};

use actix_files::Files;
use actix_web::{
    dev::Server,
    error::InternalError,
    http::StatusCode,
    middleware::Logger,
    web::{self, Data},
    App, HttpServer,
};
use anyhow::Context;
use reqwest::Client;
use url::Url;

use crate::{
    configuration::Settings,
    error::error_json,
    routes::{ask_route, competitor_route, default_route, lead_route, scrape_route, seo_route},
    services::{
        CompetitorResolver, CompletionService, CustomSearchClient, DocumentFetcher,
        EnrichmentOrchestrator, OpenaiClient, PlacesClient,
    },
};

/// Every collaborator the request handlers need, built once at start-up.
pub struct AppContext {
    pub fetcher: DocumentFetcher,
    pub places: PlacesClient,
    pub enrichment: EnrichmentOrchestrator,
    pub competitors: CompetitorResolver,
    pub static_dir: Option<PathBuf>,
}

impl AppContext {
    pub fn build(settings: &Settings) -> Result<Self, anyhow::Error> {
        let completion = OpenaiClient::new(
            settings.api_keys.openai.clone(),
            settings.services.openai_base_url.clone(),
            api_client(settings)?,
        );

        Self::with_completion(settings, Arc::new(completion))
    }

    /// Same as [`AppContext::build`] but with a caller-provided completion service.
    pub fn with_completion(
        settings: &Settings,
        completion: Arc<dyn CompletionService>,
    ) -> Result<Self, anyhow::Error> {
        let services = &settings.services;
        let api_client = api_client(settings)?;
        let document_client = Client::builder()
            .timeout(Duration::from_secs(services.request_timeout_secs))
            .user_agent(fake_user_agent::get_rua())
            .build()
            .context("Failed to build document client")?;

        let enrichment = EnrichmentOrchestrator::new(
            completion,
            services.completion_model.clone(),
            services.max_prompt_chars,
        );
        let places = PlacesClient::new(
            api_client.clone(),
            Url::parse(&services.places_url).context("Invalid places_url")?,
            settings.api_keys.google.clone(),
        );
        let search = CustomSearchClient::new(
            api_client,
            Url::parse(&services.custom_search_url).context("Invalid custom_search_url")?,
            settings.api_keys.google.clone(),
            settings.api_keys.search_engine_id.clone(),
        );
        let competitors = CompetitorResolver::new(
            enrichment.clone(),
            search,
            services.competitor_result_count,
        );

        Ok(AppContext {
            fetcher: DocumentFetcher::new(document_client),
            places,
            enrichment,
            competitors,
            static_dir: settings.application.static_dir.clone(),
        })
    }
}

fn api_client(settings: &Settings) -> Result<Client, anyhow::Error> {
    Client::builder()
        .timeout(Duration::from_secs(settings.services.request_timeout_secs))
        .build()
        .context("Failed to build API client")
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = error_json(StatusCode::BAD_REQUEST, &err.to_string());
        InternalError::from_response(err, response).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let response = error_json(StatusCode::BAD_REQUEST, &err.to_string());
        InternalError::from_response(err, response).into()
    })
}

pub fn run(listener: TcpListener, context: AppContext) -> Result<Server, std::io::Error> {
    let fetcher = Data::new(context.fetcher);
    let places = Data::new(context.places);
    let enrichment = Data::new(context.enrichment);
    let competitors = Data::new(context.competitors);
    let static_dir = context.static_dir;

    let server = HttpServer::new(move || {
        let app = App::new()
            .wrap(Logger::default())
            .app_data(json_config())
            .app_data(query_config())
            .service(default_route::health)
            .service(lead_route::find_leads)
            .service(ask_route::ask)
            .service(seo_route::generate_seo_tags)
            .service(scrape_route::scrape_schema)
            .service(scrape_route::scrape_and_summarize)
            .service(competitor_route::search_competitors)
            .app_data(fetcher.clone())
            .app_data(places.clone())
            .app_data(enrichment.clone())
            .app_data(competitors.clone());

        // Registered last so the API paths above take precedence
        match &static_dir {
            Some(dir) => app.service(
                Files::new("/", dir)
                    .index_file("index.html")
                    .prefer_utf8(true),
            ),
            None => app,
        }
    })
    .listen(listener)?
    .run();

    Ok(server)
}
