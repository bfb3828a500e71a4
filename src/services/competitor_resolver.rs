use crate::{
    domain::CompetitorCitation,
    error::ServiceError,
    services::{CustomSearchClient, EnrichmentOrchestrator, SectorLookup},
};

pub fn build_competitor_query(company: &str, sector: &str) -> String {
    format!("{} in {} competitors", company, sector)
}

/// Company name -> inferred sector -> competitor search hits.
pub struct CompetitorResolver {
    enrichment: EnrichmentOrchestrator,
    search: CustomSearchClient,
    result_count: u8,
}

impl CompetitorResolver {
    pub fn new(
        enrichment: EnrichmentOrchestrator,
        search: CustomSearchClient,
        result_count: u8,
    ) -> Self {
        CompetitorResolver {
            enrichment,
            search,
            result_count,
        }
    }

    pub async fn resolve(&self, company: &str) -> Result<Vec<CompetitorCitation>, ServiceError> {
        let sector = self.enrichment.run(&SectorLookup { company }).await?;
        log::info!("Company {} belongs to sector: {}", company, sector);

        let query = build_competitor_query(company, &sector);
        let competitors = self.search.search(&query, self.result_count).await?;
        log::info!("Found {} competitors for {}", competitors.len(), company);

        Ok(competitors)
    }
}
