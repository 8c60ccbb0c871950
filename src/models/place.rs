use serde::{Deserialize, Serialize};

pub const EMPTY_RESULT_MESSAGE: &str = "No specific centers found. Try a different search term.";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch locations. Please check your connection and try again.";
pub const PERMISSION_DENIED_MESSAGE: &str = "Location access denied. Please type a city manually.";

/// A money changer extracted from a map-tagged grounding citation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceResult {
    pub title: String,
    pub address: Option<String>,
    pub map_uri: String,
}

/// Where to search: exactly one mode per call.
#[derive(Debug, Clone, PartialEq)]
pub enum LocateQuery {
    Coordinates { latitude: f64, longitude: f64 },
    Place { location: String },
}

/// Wire shape of a locate request. Validated into a [`LocateQuery`] or a
/// reported geolocation denial.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocateRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub location: Option<String>,
    /// Set by the client when the platform geolocation prompt was refused.
    #[serde(default)]
    pub geolocation_denied: bool,
}

/// Result of a locate call, as the money-changer panel renders it.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LocateOutcome {
    Found { summary: String, places: Vec<PlaceResult> },
    Empty { message: String },
    Failed { message: String },
    PermissionDenied { message: String },
}

impl LocateOutcome {
    pub fn empty() -> Self {
        LocateOutcome::Empty { message: EMPTY_RESULT_MESSAGE.to_string() }
    }

    pub fn failed() -> Self {
        LocateOutcome::Failed { message: FETCH_FAILED_MESSAGE.to_string() }
    }

    pub fn permission_denied() -> Self {
        LocateOutcome::PermissionDenied { message: PERMISSION_DENIED_MESSAGE.to_string() }
    }

    pub fn places(&self) -> &[PlaceResult] {
        match self {
            LocateOutcome::Found { places, .. } => places,
            _ => &[],
        }
    }
}

impl LocateQuery {
    pub fn from_request(request: &LocateRequest) -> Result<Option<Self>, String> {
        if request.geolocation_denied {
            return Ok(None);
        }

        let location = request
            .location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty());

        match (request.latitude, request.longitude, location) {
            (Some(latitude), Some(longitude), None) => {
                if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
                    return Err(format!("Coordinates out of range: {latitude}, {longitude}"));
                }
                Ok(Some(LocateQuery::Coordinates { latitude, longitude }))
            }
            (None, None, Some(location)) => Ok(Some(LocateQuery::Place { location: location.to_string() })),
            (None, None, None) => Err("Provide either coordinates or a location to search".to_string()),
            (Some(_), None, _) | (None, Some(_), _) => {
                Err("Both latitude and longitude are required".to_string())
            }
            (Some(_), Some(_), Some(_)) => {
                Err("Coordinates and a free-text location cannot be combined".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_query() {
        let request = LocateRequest { latitude: Some(35.68), longitude: Some(139.69), ..Default::default() };
        assert_eq!(
            LocateQuery::from_request(&request),
            Ok(Some(LocateQuery::Coordinates { latitude: 35.68, longitude: 139.69 }))
        );
    }

    #[test]
    fn test_free_text_query_is_trimmed() {
        let request = LocateRequest { location: Some("  Tokyo ".into()), ..Default::default() };
        assert_eq!(
            LocateQuery::from_request(&request),
            Ok(Some(LocateQuery::Place { location: "Tokyo".into() }))
        );
    }

    #[test]
    fn test_modes_are_exclusive() {
        let both = LocateRequest {
            latitude: Some(1.0),
            longitude: Some(2.0),
            location: Some("Paris".into()),
            geolocation_denied: false,
        };
        assert!(LocateQuery::from_request(&both).is_err());
        assert!(LocateQuery::from_request(&LocateRequest::default()).is_err());

        let blank = LocateRequest { location: Some("   ".into()), ..Default::default() };
        assert!(LocateQuery::from_request(&blank).is_err());

        let half = LocateRequest { latitude: Some(1.0), ..Default::default() };
        assert!(LocateQuery::from_request(&half).is_err());
    }

    #[test]
    fn test_zero_coordinates_are_valid() {
        let request = LocateRequest { latitude: Some(0.0), longitude: Some(0.0), ..Default::default() };
        assert!(matches!(LocateQuery::from_request(&request), Ok(Some(LocateQuery::Coordinates { .. }))));
    }

    #[test]
    fn test_denial_short_circuits() {
        let request = LocateRequest { geolocation_denied: true, ..Default::default() };
        assert_eq!(LocateQuery::from_request(&request), Ok(None));
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(LocateOutcome::empty()).unwrap();
        assert_eq!(json["status"], "empty");
        assert_eq!(json["message"], EMPTY_RESULT_MESSAGE);
    }
}
