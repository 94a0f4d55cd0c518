use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Adult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Setting {
    City,
    Suburban,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommuteMode {
    Walk,
    Bike,
    Car,
    Public,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Animals,
    Climate,
    Plants,
    Oceans,
}

impl Interest {
    /// Capitalized label used in the plan title.
    pub fn label(&self) -> &'static str {
        match self {
            Interest::Animals => "Animals",
            Interest::Climate => "Climate",
            Interest::Plants => "Plants",
            Interest::Oceans => "Oceans",
        }
    }
}

/// Survey answers the plan is generated from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerInput {
    pub user_type: UserType,
    pub setting: Setting,
    pub commute: CommuteMode,
    pub interest: Interest,
}

/// Estimated annual impact of following the plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlanImpact {
    /// Potential CO2 offset in pounds per year.
    pub co2_saved_lbs: i64,
    /// Same offset expressed as trees planted.
    pub trees_equivalent: i64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    pub title: String,
    pub actions: Vec<String>,
    pub impact: PlanImpact,
}
