use std::sync::Arc;

use log::warn;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use super::enviro_model::EnvSnapshot;
use super::enviro_provider::EnvironmentalProviderTrait;
use crate::opportunities::GeoPoint;

/// Serializes snapshot fetches through a single in-flight slot. A new
/// request aborts the fetch already running, so at most one fetch is
/// ever live and the last completed fetch owns the snapshot slot.
pub struct SnapshotFetcher {
    provider: Arc<dyn EnvironmentalProviderTrait>,
    latest: Arc<RwLock<Option<EnvSnapshot>>>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl SnapshotFetcher {
    pub fn new(provider: Arc<dyn EnvironmentalProviderTrait>) -> Self {
        Self {
            provider,
            latest: Arc::new(RwLock::new(None)),
            in_flight: Mutex::new(None),
        }
    }

    /// Starts a fetch for `location`, superseding any fetch still in
    /// flight. Returns once the fetch is scheduled, not once it lands.
    pub async fn request(&self, location: GeoPoint) {
        let mut slot = self.in_flight.lock().await;
        if let Some(previous) = slot.take() {
            previous.abort();
        }
        let provider = Arc::clone(&self.provider);
        let latest = Arc::clone(&self.latest);
        *slot = Some(tokio::spawn(async move {
            match provider.fetch(location).await {
                Ok(snapshot) => {
                    *latest.write().await = Some(snapshot);
                }
                Err(e) => {
                    warn!("environmental snapshot fetch failed: {e}");
                }
            }
        }));
    }

    /// Last successfully fetched snapshot, if any.
    pub async fn latest(&self) -> Option<EnvSnapshot> {
        self.latest.read().await.clone()
    }

    /// Waits for the in-flight fetch (if any) to finish or be aborted.
    pub async fn settle(&self) {
        let handle = self.in_flight.lock().await.take();
        if let Some(handle) = handle {
            // JoinError here means the fetch was aborted, which is fine.
            let _ = handle.await;
        }
    }
}

// ============== Tests ==============

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;
    use crate::enviro::{aqi_level, AirQuality, Weather};
    use crate::opportunities::DEFAULT_LOCATION;
    use crate::Result;

    struct ScriptedProvider {
        delay: Duration,
        aqi: u32,
        completed: AtomicUsize,
    }

    impl ScriptedProvider {
        fn new(delay: Duration, aqi: u32) -> Self {
            Self {
                delay,
                aqi,
                completed: AtomicUsize::new(0),
            }
        }

        fn snapshot(&self, location: GeoPoint) -> EnvSnapshot {
            EnvSnapshot {
                location,
                air_quality: AirQuality {
                    aqi: self.aqi,
                    level: aqi_level(self.aqi),
                    pm25: 10,
                    pm10: 20,
                    o3: None,
                    no2: None,
                    co: None,
                },
                weather: Weather {
                    temperature: 20,
                    condition: "Sunny".to_string(),
                    humidity: 50,
                    wind_speed: 10,
                    uv_index: None,
                },
                fetched_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl EnvironmentalProviderTrait for ScriptedProvider {
        async fn fetch(&self, location: GeoPoint) -> Result<EnvSnapshot> {
            tokio::time::sleep(self.delay).await;
            self.completed.fetch_add(1, Ordering::SeqCst);
            Ok(self.snapshot(location))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn completed_fetch_fills_the_slot() {
        let provider = Arc::new(ScriptedProvider::new(Duration::from_millis(100), 42));
        let fetcher = SnapshotFetcher::new(provider.clone());

        assert!(fetcher.latest().await.is_none());
        fetcher.request(DEFAULT_LOCATION).await;
        fetcher.settle().await;

        let snapshot = fetcher.latest().await.unwrap();
        assert_eq!(snapshot.air_quality.aqi, 42);
        assert_eq!(provider.completed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn new_request_supersedes_the_old_one() {
        let provider = Arc::new(ScriptedProvider::new(Duration::from_millis(100), 42));
        let fetcher = SnapshotFetcher::new(provider.clone());

        let first = GeoPoint { lat: 1.0, lng: 1.0 };
        let second = GeoPoint { lat: 2.0, lng: 2.0 };
        fetcher.request(first).await;
        fetcher.request(second).await;
        fetcher.settle().await;

        // The first fetch was aborted mid-sleep; only the second landed.
        let snapshot = fetcher.latest().await.unwrap();
        assert_eq!(snapshot.location, second);
        assert_eq!(provider.completed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_fetch_does_not_clobber_newer_result() {
        let provider = Arc::new(ScriptedProvider::new(Duration::from_millis(50), 60));
        let fetcher = SnapshotFetcher::new(provider.clone());

        fetcher.request(DEFAULT_LOCATION).await;
        fetcher.settle().await;
        let first = fetcher.latest().await.unwrap();

        let elsewhere = GeoPoint { lat: 5.0, lng: 5.0 };
        fetcher.request(elsewhere).await;
        fetcher.settle().await;
        let second = fetcher.latest().await.unwrap();

        assert_eq!(first.location, DEFAULT_LOCATION);
        assert_eq!(second.location, elsewhere);
        assert_eq!(provider.completed.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn settle_with_nothing_in_flight_is_a_noop() {
        let provider = Arc::new(ScriptedProvider::new(Duration::from_millis(1), 30));
        let fetcher = SnapshotFetcher::new(provider);
        fetcher.settle().await;
        assert!(fetcher.latest().await.is_none());
    }
}
