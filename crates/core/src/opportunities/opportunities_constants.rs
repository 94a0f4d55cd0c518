use chrono::NaiveDate;

use super::opportunities_model::{GeoPoint, Opportunity, OpportunityKind};

/// Fallback center used when the caller has no location: San Francisco.
pub const DEFAULT_LOCATION: GeoPoint = GeoPoint {
    lat: 37.7749,
    lng: -122.4194,
};

struct OpportunitySpec {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    kind: OpportunityKind,
    lat: f64,
    lng: f64,
    address: &'static str,
    date: (i32, u32, u32),
    points: i64,
    contact: &'static str,
}

const DEFAULTS: [OpportunitySpec; 6] = [
    OpportunitySpec {
        id: "1",
        title: "Beach Cleanup Day",
        description: "Join us for a community beach cleanup to remove plastic waste and debris. All materials provided.",
        kind: OpportunityKind::Cleanup,
        lat: 37.7749,
        lng: -122.4194,
        address: "Ocean Beach, San Francisco, CA",
        date: (2024, 2, 15),
        points: 50,
        contact: "beachcleanup@eco.org",
    },
    OpportunitySpec {
        id: "2",
        title: "Tree Planting Initiative",
        description: "Help plant native trees in the local park to restore the ecosystem and combat climate change.",
        kind: OpportunityKind::Planting,
        lat: 37.7849,
        lng: -122.4094,
        address: "Golden Gate Park, San Francisco, CA",
        date: (2024, 2, 20),
        points: 75,
        contact: "trees@green.org",
    },
    OpportunitySpec {
        id: "3",
        title: "Climate Action Workshop",
        description: "Learn about sustainable living practices and how to reduce your carbon footprint.",
        kind: OpportunityKind::Education,
        lat: 37.7649,
        lng: -122.4294,
        address: "Community Center, San Francisco, CA",
        date: (2024, 2, 18),
        points: 30,
        contact: "workshop@climate.org",
    },
    OpportunitySpec {
        id: "4",
        title: "Wildlife Habitat Restoration",
        description: "Volunteer to restore local wildlife habitats by removing invasive species and planting natives.",
        kind: OpportunityKind::Volunteer,
        lat: 37.7949,
        lng: -122.3994,
        address: "Presidio Park, San Francisco, CA",
        date: (2024, 2, 22),
        points: 60,
        contact: "wildlife@nature.org",
    },
    OpportunitySpec {
        id: "5",
        title: "Recycling Drive Event",
        description: "Community event to collect and properly recycle electronic waste and other materials.",
        kind: OpportunityKind::Event,
        lat: 37.7549,
        lng: -122.4394,
        address: "City Hall Plaza, San Francisco, CA",
        date: (2024, 2, 25),
        points: 40,
        contact: "recycle@city.gov",
    },
    OpportunitySpec {
        id: "6",
        title: "Solar Panel Installation Training",
        description: "Learn how to install solar panels and help bring renewable energy to underserved communities.",
        kind: OpportunityKind::Education,
        lat: 37.8049,
        lng: -122.3894,
        address: "Tech Hub, San Francisco, CA",
        date: (2024, 3, 1),
        points: 80,
        contact: "solar@renewable.org",
    },
];

/// The fixed fallback set, used whenever no viewer location is known.
pub fn default_opportunities() -> Vec<Opportunity> {
    DEFAULTS
        .iter()
        .map(|spec| Opportunity {
            id: spec.id.to_string(),
            title: spec.title.to_string(),
            description: spec.description.to_string(),
            kind: spec.kind,
            location: GeoPoint {
                lat: spec.lat,
                lng: spec.lng,
            },
            address: spec.address.to_string(),
            // Dates in DEFAULTS are valid by construction.
            date: NaiveDate::from_ymd_opt(spec.date.0, spec.date.1, spec.date.2)
                .unwrap_or_default(),
            points: spec.points,
            contact: spec.contact.to_string(),
        })
        .collect()
}
