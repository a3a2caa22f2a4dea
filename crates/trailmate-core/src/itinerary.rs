//! Itinerary generation.
//!
//! [`MockItineraryService`] stands in for a planner backend: after a fixed delay it returns the
//! same three-day plan for every request, with the destination and dates substituted in.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Trip parameters as posted by the itinerary input screen. Fields are read as-is with no type
/// checks and echoed back unchanged; missing values are echoed as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripRequest {
    pub destination: Option<Value>,
    pub start_date: Option<Value>,
    pub end_date: Option<Value>,
    pub budget: Option<Value>,
    pub travel_vibes: Option<Value>,
    pub safety_level: Option<Value>,
    pub additional_notes: Option<Value>,
}

impl TripRequest {
    /// Destination as it reads inside the generated titles and locations.
    pub fn destination_text(&self) -> String {
        display_text(self.destination.as_ref())
    }
}

/// Renders a loose JSON value the way the mobile client interpolates it into a string:
/// a missing value reads `undefined`, arrays join with commas, objects are opaque.
pub fn display_text(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| match v {
                Value::Null => String::new(),
                other => display_text(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
        Some(other) => other.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Travel,
    Culture,
    Nature,
    Adventure,
    Food,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub time: String,
    pub location: String,
    pub details: String,
    pub tips: String,
    pub cost: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: String,
    pub date: Option<Value>,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelplineNumber {
    pub name: String,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedItinerary {
    pub id: i64,
    pub title: String,
    pub destination: Option<Value>,
    pub start_date: Option<Value>,
    pub end_date: Option<Value>,
    pub budget: Option<Value>,
    pub travel_vibes: Option<Value>,
    pub safety_level: Option<Value>,
    pub total_estimated_cost: Option<Value>,
    pub days: Vec<ItineraryDay>,
    pub safety_tips: Vec<String>,
    pub emergency_contacts: Vec<HelplineNumber>,
    pub best_time_to_visit: String,
    pub packing_list: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ItineraryError {
    #[error("Failed to generate itinerary")]
    Generation,
}

#[async_trait]
pub trait ItineraryService: Send + Sync {
    async fn generate(&self, request: &TripRequest) -> Result<GeneratedItinerary, ItineraryError>;
}

pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone)]
pub struct MockItineraryService {
    delay: Duration,
}

impl Default for MockItineraryService {
    fn default() -> Self {
        Self::new(DEFAULT_GENERATION_DELAY)
    }
}

impl MockItineraryService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ItineraryService for MockItineraryService {
    async fn generate(&self, request: &TripRequest) -> Result<GeneratedItinerary, ItineraryError> {
        tokio::time::sleep(self.delay).await;
        let id = chrono::Utc::now().timestamp_millis();
        tracing::info!(
            "[TRAILMATE ITINERARY] Generated plan {} for {}",
            id,
            request.destination_text()
        );
        Ok(fixture_itinerary(id, request))
    }
}

/// The fixed plan; only `destination` and the dates vary with the request.
pub fn fixture_itinerary(id: i64, request: &TripRequest) -> GeneratedItinerary {
    let dest = request.destination_text();
    let act = |name: &str, time: &str, location: String, details: &str, tips: &str, cost: &str, kind: ActivityType| Activity {
        name: name.to_string(),
        time: time.to_string(),
        location,
        details: details.to_string(),
        tips: tips.to_string(),
        cost: cost.to_string(),
        kind,
    };

    let days = vec![
        ItineraryDay {
            day: "Day 1".to_string(),
            date: request.start_date.clone(),
            activities: vec![
                act(
                    "Airport Arrival & Check-in",
                    "10:00 AM",
                    format!("{} Airport", dest),
                    "Land at the airport and check into your accommodation. Take some time to rest and freshen up.",
                    "Keep your documents handy and exchange currency if needed",
                    "₹2,000",
                    ActivityType::Travel,
                ),
                act(
                    "Local Market Exploration",
                    "3:00 PM",
                    format!("{} Main Market", dest),
                    "Explore the vibrant local markets and get a feel for the destination. Perfect for photography enthusiasts!",
                    "Try local street food and bargain for souvenirs",
                    "₹1,500",
                    ActivityType::Culture,
                ),
                act(
                    "Sunset Point Visit",
                    "6:00 PM",
                    "Scenic Sunset Point".to_string(),
                    "Watch the beautiful sunset from the best vantage point in the city. Great for solo travelers and photographers.",
                    "Arrive 30 minutes early to get the best spot",
                    "₹500",
                    ActivityType::Nature,
                ),
            ],
        },
        ItineraryDay {
            day: "Day 2".to_string(),
            date: Some(Value::from("Next day")),
            activities: vec![
                act(
                    "Adventure Activity",
                    "9:00 AM",
                    "Adventure Sports Center".to_string(),
                    "Experience thrilling adventure activities based on your preferences. Safety equipment provided.",
                    "Wear comfortable clothes and follow safety instructions",
                    "₹3,000",
                    ActivityType::Adventure,
                ),
                act(
                    "Cultural Heritage Tour",
                    "2:00 PM",
                    "Historical Sites".to_string(),
                    "Visit ancient temples, palaces, and heritage sites to understand local culture and history.",
                    "Hire a local guide for better insights",
                    "₹1,800",
                    ActivityType::Culture,
                ),
                act(
                    "Local Cuisine Experience",
                    "7:00 PM",
                    "Traditional Restaurant".to_string(),
                    "Enjoy authentic local cuisine at a highly recommended restaurant. Perfect for food lovers!",
                    "Try the chef's special and ask about ingredients if you have allergies",
                    "₹2,200",
                    ActivityType::Food,
                ),
            ],
        },
        ItineraryDay {
            day: "Day 3".to_string(),
            date: Some(Value::from("Final day")),
            activities: vec![
                act(
                    "Nature Walk & Photography",
                    "8:00 AM",
                    "Natural Park/Beach".to_string(),
                    "Early morning nature walk perfect for photography and peaceful moments. Ideal for solo travelers.",
                    "Bring a camera and enjoy the tranquility",
                    "₹800",
                    ActivityType::Nature,
                ),
                act(
                    "Souvenir Shopping",
                    "11:00 AM",
                    "Local Craft Markets".to_string(),
                    "Last-minute shopping for souvenirs and local crafts to remember your amazing trip.",
                    "Look for authentic local products",
                    "₹2,000",
                    ActivityType::Culture,
                ),
                act(
                    "Departure",
                    "3:00 PM",
                    format!("{} Airport", dest),
                    "Check out and head to the airport for departure. Safe travels!",
                    "Reach airport 2 hours before domestic flights",
                    "₹1,200",
                    ActivityType::Travel,
                ),
            ],
        },
    ];

    let helpline = |name: &str, number: &str| HelplineNumber {
        name: name.to_string(),
        number: number.to_string(),
    };

    GeneratedItinerary {
        id,
        title: format!("{} Adventure", dest),
        destination: request.destination.clone(),
        start_date: request.start_date.clone(),
        end_date: request.end_date.clone(),
        budget: request.budget.clone(),
        travel_vibes: request.travel_vibes.clone(),
        safety_level: request.safety_level.clone(),
        total_estimated_cost: request.budget.clone(),
        days,
        safety_tips: [
            "Always carry a copy of your ID and important documents",
            "Share your itinerary with family/friends",
            "Keep emergency contacts handy",
            "Be aware of local customs and dress codes",
            "Use registered taxis or ride-sharing apps",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        emergency_contacts: vec![
            helpline("Local Police", "100"),
            helpline("Tourist Helpline", "1363"),
            helpline("Medical Emergency", "108"),
        ],
        best_time_to_visit: "The weather is perfect this time of year!".to_string(),
        packing_list: [
            "Comfortable walking shoes",
            "Light cotton clothes",
            "Sunscreen and sunglasses",
            "Portable charger",
            "First aid kit",
            "Camera",
            "Local currency",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn goa() -> TripRequest {
        TripRequest {
            destination: Some(json!("Goa")),
            start_date: Some(json!("2024-12-15")),
            end_date: Some(json!("2024-12-18")),
            budget: Some(json!("15000")),
            travel_vibes: Some(json!(["food", "nature"])),
            safety_level: Some(json!(3)),
            additional_notes: Some(json!("vegetarian")),
        }
    }

    #[test]
    fn fixture_interpolates_destination() {
        let plan = fixture_itinerary(7, &goa());
        assert_eq!(plan.title, "Goa Adventure");
        assert_eq!(plan.days.len(), 3);
        assert_eq!(plan.days[0].date, Some(json!("2024-12-15")));
        assert_eq!(plan.days[0].activities[0].location, "Goa Airport");
        assert_eq!(plan.days[2].activities[2].location, "Goa Airport");
        assert_eq!(plan.total_estimated_cost, Some(json!("15000")));
        assert!(plan.days.iter().all(|d| d.activities.len() == 3));
    }

    #[test]
    fn fixture_serializes_camel_case_and_type() {
        let json = serde_json::to_value(fixture_itinerary(1, &goa())).unwrap();
        assert_eq!(json["startDate"], "2024-12-15");
        assert_eq!(json["days"][1]["activities"][2]["type"], "food");
        assert_eq!(json["emergencyContacts"][1]["number"], "1363");
        assert_eq!(json["packingList"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn request_fields_are_all_optional() {
        let req: TripRequest = serde_json::from_str(r#"{"destination":"Hampi"}"#).unwrap();
        assert_eq!(req.destination_text(), "Hampi");
        assert!(req.travel_vibes.is_none());
        let plan = fixture_itinerary(1, &req);
        assert!(plan.start_date.is_none());
    }

    #[test]
    fn loose_field_types_are_echoed_unchanged() {
        let req: TripRequest = serde_json::from_value(json!({
            "destination": "Goa",
            "budget": 20000,
            "safetyLevel": "3",
            "travelVibes": "food"
        }))
        .unwrap();
        let plan = fixture_itinerary(1, &req);
        assert_eq!(plan.budget, Some(json!(20000)));
        assert_eq!(plan.total_estimated_cost, Some(json!(20000)));
        assert_eq!(plan.safety_level, Some(json!("3")));
        assert_eq!(plan.travel_vibes, Some(json!("food")));
    }

    #[test]
    fn destination_text_follows_client_interpolation() {
        let plan = fixture_itinerary(1, &TripRequest::default());
        assert_eq!(plan.title, "undefined Adventure");
        assert_eq!(display_text(Some(&json!(42))), "42");
        assert_eq!(display_text(Some(&json!(["Goa", "Hampi"]))), "Goa,Hampi");
        assert_eq!(display_text(Some(&json!({"city": "Goa"}))), "[object Object]");
        assert_eq!(display_text(Some(&Value::Null)), "null");
    }

    #[tokio::test(start_paused = true)]
    async fn mock_waits_for_its_delay() {
        let svc = MockItineraryService::default();
        let started = tokio::time::Instant::now();
        let plan = svc.generate(&goa()).await.unwrap();
        assert!(started.elapsed() >= DEFAULT_GENERATION_DELAY);
        assert_eq!(plan.destination, Some(json!("Goa")));
    }
}
