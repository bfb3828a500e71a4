use serde::{Deserialize, Serialize};

/// A search hit naming a likely competitor, kept in the search service's order.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CompetitorCitation {
    pub title: String,
    pub link: String,
}
