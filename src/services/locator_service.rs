use std::sync::Arc;

use tracing::{info, warn};

use crate::external::generative::{GenerativeProvider, GroundingChunk, LatLng};
use crate::models::{Language, LocateOutcome, LocateQuery, PlaceResult};

pub struct LocatorService {
    provider: Arc<dyn GenerativeProvider>,
}

impl LocatorService {
    pub fn new(provider: Arc<dyn GenerativeProvider>) -> Self {
        Self { provider }
    }

    /// Looks up money changers near a coordinate pair or a named place.
    ///
    /// A service that answers with neither text nor map citations yields
    /// [`LocateOutcome::Empty`]; an unreachable or failing service yields
    /// [`LocateOutcome::Failed`].
    pub async fn locate(&self, query: &LocateQuery, language: Language) -> LocateOutcome {
        let (prompt, location) = match query {
            LocateQuery::Coordinates { latitude, longitude } => {
                info!("Locating money changers near coordinates ({:.4}, {:.4})", latitude, longitude);
                (
                    build_nearby_prompt(language),
                    Some(LatLng { latitude: *latitude, longitude: *longitude }),
                )
            }
            LocateQuery::Place { location } => {
                info!("Locating money changers in '{}'", location);
                (build_place_prompt(location, language), None)
            }
        };

        let response = match self.provider.generate_grounded(prompt, location).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Locator request failed: {}", e);
                return LocateOutcome::failed();
            }
        };

        let places = extract_places(&response.chunks);
        let summary = response.text.trim().to_string();

        if places.is_empty() && summary.is_empty() {
            info!("Locator returned no places and no summary");
            return LocateOutcome::empty();
        }

        info!("Locator found {} place(s)", places.len());
        LocateOutcome::Found { summary, places }
    }
}

fn build_nearby_prompt(language: Language) -> String {
    format!(
        "Find reliable money changer centers near my current location. List their names and provide clear links to their locations. PLEASE RESPOND IN THIS LANGUAGE: {}",
        language.code()
    )
}

fn build_place_prompt(location: &str, language: Language) -> String {
    format!(
        "Find reliable money changer centers in or near {}. List their names, exact locations, and provide links to their Google Maps pages. PLEASE RESPOND IN THIS LANGUAGE: {}",
        location,
        language.code()
    )
}

/// Keeps only map-tagged citations, in response order.
fn extract_places(chunks: &[GroundingChunk]) -> Vec<PlaceResult> {
    chunks
        .iter()
        .filter_map(|chunk| chunk.maps.as_ref())
        .map(|maps| PlaceResult {
            title: maps
                .title
                .clone()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| "Money changer".to_string()),
            address: maps.address.clone().filter(|a| !a.trim().is_empty()),
            map_uri: maps.uri.clone().unwrap_or_default(),
        })
        .collect()
}
