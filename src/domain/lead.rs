use serde::{Deserialize, Serialize, Serializer};

/// One record of a places text search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult {
    pub name: Option<String>,
    pub rating: Option<f64>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rating {
    Score(f64),
    NotAvailable,
}

impl From<Option<f64>> for Rating {
    fn from(value: Option<f64>) -> Self {
        // A zero rating is how listings without reviews show up
        match value {
            Some(score) if score != 0.0 => Rating::Score(score),
            _ => Rating::NotAvailable,
        }
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Rating::Score(score) => serializer.serialize_f64(*score),
            Rating::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub rating: Rating,
    pub lead_score: i64,
}

impl From<SearchResult> for Lead {
    fn from(result: SearchResult) -> Self {
        let lead_score = calculate_lead_score(&result);
        Lead {
            name: result.name,
            rating: result.rating.into(),
            lead_score,
        }
    }
}

/// Placeholder heuristic: a shorter listing URL is taken as a weak sign of an
/// established business. Not calibrated. Length is counted in UTF-16 code
/// units, the unit browser clients see, and scores go negative past 100 of
/// them without clamping.
pub fn calculate_lead_score(result: &SearchResult) -> i64 {
    match &result.url {
        Some(url) => 100 - url.encode_utf16().count() as i64,
        None => 0,
    }
}
