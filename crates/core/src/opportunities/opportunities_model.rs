use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Latitude/longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityKind {
    Volunteer,
    Event,
    Cleanup,
    Planting,
    Education,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: OpportunityKind,
    pub location: GeoPoint,
    pub address: String,
    pub date: NaiveDate,
    pub points: i64,
    pub contact: String,
}

/// An opportunity annotated with the viewer's distance to it, when the
/// viewer's location is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityView {
    #[serde(flatten)]
    pub opportunity: Opportunity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}
