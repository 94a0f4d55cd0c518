use chrono::{Duration, Utc};
use rand::Rng;

use super::opportunities_constants::default_opportunities;
use super::opportunities_model::{GeoPoint, Opportunity, OpportunityKind, OpportunityView};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

const GENERATED_KINDS: [OpportunityKind; 5] = [
    OpportunityKind::Cleanup,
    OpportunityKind::Planting,
    OpportunityKind::Education,
    OpportunityKind::Volunteer,
    OpportunityKind::Event,
];

const GENERATED_TITLES: [&str; 10] = [
    "Beach Cleanup Day",
    "Tree Planting Initiative",
    "Climate Action Workshop",
    "Wildlife Habitat Restoration",
    "Recycling Drive Event",
    "Solar Panel Installation Training",
    "Community Garden Project",
    "River Cleanup Event",
    "Environmental Education Session",
    "Green Energy Workshop",
];

const GENERATED_DESCRIPTIONS: [&str; 10] = [
    "Join us for a community cleanup to remove plastic waste and debris. All materials provided.",
    "Help plant native trees to restore the ecosystem and combat climate change.",
    "Learn about sustainable living practices and how to reduce your carbon footprint.",
    "Volunteer to restore local wildlife habitats by removing invasive species.",
    "Community event to collect and properly recycle electronic waste.",
    "Learn how to install solar panels and help bring renewable energy to communities.",
    "Help establish and maintain a community garden for sustainable food production.",
    "Participate in cleaning up local waterways and protecting aquatic ecosystems.",
    "Educational session about environmental conservation and sustainability.",
    "Workshop on renewable energy solutions and green technology.",
];

const GENERATED_POINTS: [i64; 6] = [30, 40, 50, 60, 75, 80];

/// Synthesizes `count` opportunities scattered within roughly ±0.1
/// degrees (10-20 km) of `center`, with titles, kinds, and point values
/// cycling through fixed catalogs and dates within the next 30 days.
pub fn generate_nearby(center: GeoPoint, count: usize) -> Vec<Opportunity> {
    let mut rng = rand::thread_rng();
    let today = Utc::now().date_naive();
    (0..count)
        .map(|i| {
            let lat = center.lat + rng.gen_range(-0.1..0.1);
            let lng = center.lng + rng.gen_range(-0.1..0.1);
            Opportunity {
                id: format!("opp-{}", i + 1),
                title: GENERATED_TITLES[i % GENERATED_TITLES.len()].to_string(),
                description: GENERATED_DESCRIPTIONS[i % GENERATED_DESCRIPTIONS.len()].to_string(),
                kind: GENERATED_KINDS[i % GENERATED_KINDS.len()],
                location: GeoPoint { lat, lng },
                address: format!("Local Area ({lat:.4}, {lng:.4})"),
                date: today + Duration::days(rng.gen_range(0..30)),
                points: GENERATED_POINTS[i % GENERATED_POINTS.len()],
                contact: format!("contact{}@eco.org", i + 1),
            }
        })
        .collect()
}

/// Listing parameters. An empty query returns everything in catalog
/// order; a viewer location switches the order to nearest-first.
#[derive(Debug, Clone, Default)]
pub struct OpportunityQuery {
    pub viewer: Option<GeoPoint>,
    pub search: Option<String>,
    pub kind: Option<OpportunityKind>,
}

/// Filters and orders a set of opportunities for display. Search is
/// case-insensitive over title and description. When the viewer's
/// location is known each row is annotated with its distance and the
/// result sorts nearest-first; otherwise the input order is kept.
pub fn list_opportunities(
    opportunities: Vec<Opportunity>,
    query: &OpportunityQuery,
) -> Vec<OpportunityView> {
    let needle = query.search.as_deref().map(str::to_lowercase);
    let mut views: Vec<OpportunityView> = opportunities
        .into_iter()
        .filter(|opp| {
            let matches_search = needle.as_deref().map_or(true, |n| {
                opp.title.to_lowercase().contains(n) || opp.description.to_lowercase().contains(n)
            });
            let matches_kind = query.kind.map_or(true, |k| opp.kind == k);
            matches_search && matches_kind
        })
        .map(|opp| {
            let distance_km = query.viewer.map(|viewer| haversine_km(viewer, opp.location));
            OpportunityView {
                opportunity: opp,
                distance_km,
            }
        })
        .collect();
    if query.viewer.is_some() {
        views.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
    views
}

/// Convenience wrapper over the fallback catalog.
pub fn list_default_opportunities(query: &OpportunityQuery) -> Vec<OpportunityView> {
    list_opportunities(default_opportunities(), query)
}

// ============== Tests ==============

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opportunities::DEFAULT_LOCATION;

    #[test]
    fn haversine_zero_for_same_point() {
        assert!(haversine_km(DEFAULT_LOCATION, DEFAULT_LOCATION).abs() < 1e-9);
    }

    #[test]
    fn haversine_sf_to_la_roughly_right() {
        let la = GeoPoint {
            lat: 34.0522,
            lng: -118.2437,
        };
        let d = haversine_km(DEFAULT_LOCATION, la);
        assert!((550.0..580.0).contains(&d), "got {d}");
    }

    #[test]
    fn generated_opportunities_stay_near_center() {
        let generated = generate_nearby(DEFAULT_LOCATION, 8);
        assert_eq!(generated.len(), 8);
        for opp in &generated {
            assert!((opp.location.lat - DEFAULT_LOCATION.lat).abs() <= 0.1);
            assert!((opp.location.lng - DEFAULT_LOCATION.lng).abs() <= 0.1);
            assert!(haversine_km(DEFAULT_LOCATION, opp.location) < 25.0);
        }
    }

    #[test]
    fn generated_ids_and_points_cycle() {
        let generated = generate_nearby(DEFAULT_LOCATION, 7);
        assert_eq!(generated[0].id, "opp-1");
        assert_eq!(generated[6].id, "opp-7");
        assert_eq!(generated[0].points, 30);
        assert_eq!(generated[6].points, 30);
    }

    #[test]
    fn listing_without_viewer_keeps_catalog_order() {
        let views = list_default_opportunities(&OpportunityQuery::default());
        assert_eq!(views.len(), 6);
        assert!(views.iter().all(|v| v.distance_km.is_none()));
        assert_eq!(views[0].opportunity.id, "1");
    }

    #[test]
    fn listing_with_viewer_sorts_nearest_first() {
        let query = OpportunityQuery {
            viewer: Some(DEFAULT_LOCATION),
            ..Default::default()
        };
        let views = list_default_opportunities(&query);
        let distances: Vec<f64> = views.iter().filter_map(|v| v.distance_km).collect();
        assert_eq!(distances.len(), 6);
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
        // Beach Cleanup Day sits exactly at the default center.
        assert_eq!(views[0].opportunity.id, "1");
    }

    #[test]
    fn search_matches_title_and_description() {
        let query = OpportunityQuery {
            search: Some("SOLAR".to_string()),
            ..Default::default()
        };
        let views = list_default_opportunities(&query);
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].opportunity.id, "6");
    }

    #[test]
    fn kind_filter_narrows_results() {
        let query = OpportunityQuery {
            kind: Some(OpportunityKind::Education),
            ..Default::default()
        };
        let views = list_default_opportunities(&query);
        assert_eq!(views.len(), 2);
        assert!(views
            .iter()
            .all(|v| v.opportunity.kind == OpportunityKind::Education));
    }
}
