pub mod ask_route;
pub mod competitor_route;
pub mod default_route;
pub mod lead_route;
pub mod scrape_route;
pub mod seo_route;
