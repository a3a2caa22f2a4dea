//! Load drill for a running gateway.
//! Simulates a busy weekend: travelers request itineraries back to back, and every other one
//! trips the SOS button midway and cancels it.
//! Run with the gateway up: cargo run --bin load_drill

use std::time::Instant;

use reqwest::Client;
use serde_json::json;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const CONCURRENT_TRAVELERS: usize = 10;
const STEPS_PER_TRAVELER: usize = 5;
/// Step at which an SOS-prone traveler activates and cancels.
const SOS_STEP: usize = 2;

const DESTINATIONS: &[&str] = &["Goa", "Manali", "Kerala", "Udaipur", "Hampi", "Ladakh"];
const VIBES: &[&str] = &["adventure", "culture", "food", "nature", "photography", "solo"];

#[derive(Debug, Default)]
struct Tally {
    itinerary_ok: u32,
    itinerary_failed: u32,
    latencies_ms: Vec<u64>,
    sos_ok: u32,
    sos_failed: u32,
}

impl Tally {
    fn merge(&mut self, other: Tally) {
        self.itinerary_ok += other.itinerary_ok;
        self.itinerary_failed += other.itinerary_failed;
        self.latencies_ms.extend(other.latencies_ms);
        self.sos_ok += other.sos_ok;
        self.sos_failed += other.sos_failed;
    }

    fn report(&self) {
        let total = self.itinerary_ok + self.itinerary_failed;
        let success_rate = if total == 0 {
            0.0
        } else {
            f64::from(self.itinerary_ok) * 100.0 / f64::from(total)
        };
        let avg_ms = if self.latencies_ms.is_empty() {
            0.0
        } else {
            self.latencies_ms.iter().sum::<u64>() as f64 / self.latencies_ms.len() as f64
        };
        let max_ms = self.latencies_ms.iter().copied().max().unwrap_or(0);
        println!(
            "[LOAD DRILL] itineraries {}/{} ok ({:.1}%), avg {:.0}ms, max {}ms",
            self.itinerary_ok, total, success_rate, avg_ms, max_ms
        );
        println!(
            "[LOAD DRILL] SOS activate/cancel: {} ok, {} failed",
            self.sos_ok, self.sos_failed
        );
    }
}

struct Traveler {
    id: usize,
    client: Client,
    base_url: String,
}

impl Traveler {
    async fn run(self) -> Tally {
        let mut tally = Tally::default();
        for step in 0..STEPS_PER_TRAVELER {
            if step == SOS_STEP && self.id % 2 == 0 {
                if self.sos_round_trip().await {
                    tally.sos_ok += 1;
                } else {
                    tally.sos_failed += 1;
                }
            }
            let started = Instant::now();
            if self.request_itinerary(step).await {
                tally.itinerary_ok += 1;
                tally.latencies_ms.push(started.elapsed().as_millis() as u64);
            } else {
                tally.itinerary_failed += 1;
            }
        }
        tally
    }

    async fn request_itinerary(&self, step: usize) -> bool {
        let pick = self.id + step;
        let body = json!({
            "destination": DESTINATIONS[pick % DESTINATIONS.len()],
            "startDate": "2025-01-10",
            "endDate": "2025-01-13",
            "budget": "15000",
            "travelVibes": [VIBES[pick % VIBES.len()]],
            "safetyLevel": 1 + (self.id % 5),
        });
        self.post_ok("/api/generate-itinerary", body).await
    }

    async fn sos_round_trip(&self) -> bool {
        let device = format!("load-{}", self.id);
        self.post_ok(&format!("/api/sos/{}/activate", device), json!({ "confirmed": true }))
            .await
            && self.post_ok(&format!("/api/sos/{}/cancel", device), json!({})).await
    }

    async fn post_ok(&self, path: &str, body: serde_json::Value) -> bool {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await
            .map(|res| res.status().is_success())
            .unwrap_or(false)
    }
}

#[tokio::main]
async fn main() {
    let base_url = std::env::var("TRAILMATE_DRILL_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    println!(
        "[LOAD DRILL] {} travelers x {} steps against {}",
        CONCURRENT_TRAVELERS, STEPS_PER_TRAVELER, base_url
    );

    let client = Client::new();
    let handles: Vec<_> = (0..CONCURRENT_TRAVELERS)
        .map(|id| {
            let traveler = Traveler {
                id,
                client: client.clone(),
                base_url: base_url.clone(),
            };
            tokio::spawn(traveler.run())
        })
        .collect();

    let mut tally = Tally::default();
    for handle in handles {
        match handle.await {
            Ok(t) => tally.merge(t),
            Err(e) => eprintln!("[LOAD DRILL] traveler task failed: {}", e),
        }
    }
    tally.report();
}
