use serde::{Deserialize, Serialize};

/// The four supported donation causes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cause {
    Forests,
    Oceans,
    Renewable,
    Wildlife,
}

impl Cause {
    pub const ALL: [Cause; 4] = [Cause::Forests, Cause::Oceans, Cause::Renewable, Cause::Wildlife];
}

/// Everything a caller needs to present a cause and hand off to the
/// partner organization. All fields are always populated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CauseProfile {
    pub cause: Cause,
    pub name: String,
    pub description: String,
    pub organization: String,
    pub donation_url: String,
    /// Illustrative outcome shown alongside the cause.
    pub impact_note: String,
    /// Short rationale for why this cause matters right now.
    pub recommendation: String,
}

struct CauseSpec {
    cause: Cause,
    name: &'static str,
    description: &'static str,
    organization: &'static str,
    donation_url: &'static str,
    impact_note: &'static str,
    recommendation: &'static str,
}

const CAUSES: [CauseSpec; 4] = [
    CauseSpec {
        cause: Cause::Forests,
        name: "Forest Conservation",
        description: "Protect and restore forests worldwide",
        organization: "Rainforest Alliance",
        donation_url: "https://www.rainforest-alliance.org/donate",
        impact_note: "Help plant 100 trees",
        recommendation: "Based on current environmental data, forest conservation has the highest immediate impact on CO2 reduction and biodiversity protection.",
    },
    CauseSpec {
        cause: Cause::Oceans,
        name: "Ocean Protection",
        description: "Clean oceans and protect marine life",
        organization: "Ocean Conservancy",
        donation_url: "https://oceanconservancy.org/donate/",
        impact_note: "Remove 50 lbs of plastic",
        recommendation: "Ocean protection is critical right now: marine ecosystems are under unprecedented threat from plastic pollution and warming waters.",
    },
    CauseSpec {
        cause: Cause::Renewable,
        name: "Renewable Energy",
        description: "Support clean energy initiatives",
        organization: "Sierra Club",
        donation_url: "https://www.sierraclub.org/donate",
        impact_note: "Offset 500 lbs CO2",
        recommendation: "Renewable energy projects offer the best long-term solution to climate change, with exponential impact potential.",
    },
    CauseSpec {
        cause: Cause::Wildlife,
        name: "Wildlife Conservation",
        description: "Protect endangered species",
        organization: "World Wildlife Fund",
        donation_url: "https://www.worldwildlife.org/how-to-help",
        impact_note: "Protect 5 animals",
        recommendation: "Wildlife conservation protects keystone species that maintain ecosystem balance, creating cascading positive effects.",
    },
];

impl From<&CauseSpec> for CauseProfile {
    fn from(spec: &CauseSpec) -> Self {
        CauseProfile {
            cause: spec.cause,
            name: spec.name.to_string(),
            description: spec.description.to_string(),
            organization: spec.organization.to_string(),
            donation_url: spec.donation_url.to_string(),
            impact_note: spec.impact_note.to_string(),
            recommendation: spec.recommendation.to_string(),
        }
    }
}

/// Full profile for one cause.
pub fn cause_profile(cause: Cause) -> CauseProfile {
    let spec = match cause {
        Cause::Forests => &CAUSES[0],
        Cause::Oceans => &CAUSES[1],
        Cause::Renewable => &CAUSES[2],
        Cause::Wildlife => &CAUSES[3],
    };
    CauseProfile::from(spec)
}

/// All causes in presentation order.
pub fn all_causes() -> Vec<CauseProfile> {
    CAUSES.iter().map(CauseProfile::from).collect()
}

// ============== Tests ==============
