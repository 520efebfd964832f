use serde::{Deserialize, Serialize};

/// Compact summary of a venue or artist used by lists and search results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ListingSummaryDto {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: u64,
}

/// Venues sharing one (city, state) area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AreaVenuesDto {
    pub city: String,
    pub state: String,
    pub venues: Vec<ListingSummaryDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SearchResultsDto {
    pub search_term: String,
    pub count: usize,
    pub data: Vec<ListingSummaryDto>,
}
