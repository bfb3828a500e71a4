pub mod competitor;
pub mod lead;
pub mod page_snapshot;

pub use competitor::CompetitorCitation;
pub use lead::{calculate_lead_score, Lead, Rating, SearchResult};
pub use page_snapshot::{PageSnapshot, SchemaBlock};
