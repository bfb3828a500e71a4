pub mod competitor_resolver;
pub mod content_extractor;
pub mod custom_search;
pub mod document_fetcher;
pub mod enrichment;
pub mod openai_client;
pub mod places_client;

pub use competitor_resolver::*;
pub use custom_search::*;
pub use document_fetcher::*;
pub use enrichment::*;
pub use openai_client::*;
pub use places_client::*;
