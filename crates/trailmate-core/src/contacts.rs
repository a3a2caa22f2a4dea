//! Static emergency reference data for the Safety Center.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactCategory {
    Police,
    Medical,
    Fire,
    TouristInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: String,
    pub dial_number: String,
    pub category: ContactCategory,
}

impl EmergencyContact {
    fn new(name: &str, dial_number: &str, category: ContactCategory) -> Self {
        Self {
            name: name.to_string(),
            dial_number: dial_number.to_string(),
            category,
        }
    }

    /// Text shown in the "Call {name}?" prompt.
    pub fn call_prompt(&self) -> (String, String) {
        (
            format!("Call {}?", self.name),
            format!("This will dial {} immediately.", self.dial_number),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    Police,
    Hospital,
    Embassy,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyService {
    pub name: String,
    pub distance: String,
    pub address: String,
    pub kind: ServiceKind,
}

pub fn emergency_contacts() -> Vec<EmergencyContact> {
    vec![
        EmergencyContact::new("Police", "100", ContactCategory::Police),
        EmergencyContact::new("Ambulance", "108", ContactCategory::Medical),
        EmergencyContact::new("Fire Brigade", "101", ContactCategory::Fire),
        EmergencyContact::new("Tourist Helpline", "1363", ContactCategory::TouristInfo),
    ]
}

pub fn nearby_services() -> Vec<NearbyService> {
    let svc = |name: &str, distance: &str, address: &str, kind| NearbyService {
        name: name.to_string(),
        distance: distance.to_string(),
        address: address.to_string(),
        kind,
    };
    vec![
        svc("Police Station", "2.3 km", "MG Road, Goa", ServiceKind::Police),
        svc("General Hospital", "1.8 km", "Hospital Road, Goa", ServiceKind::Hospital),
        svc("Embassy", "5.2 km", "Diplomatic Area, Goa", ServiceKind::Embassy),
        svc("Tourist Center", "800 m", "Beach Road, Goa", ServiceKind::Info),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contacts_cover_every_category() {
        let contacts = emergency_contacts();
        for cat in [
            ContactCategory::Police,
            ContactCategory::Medical,
            ContactCategory::Fire,
            ContactCategory::TouristInfo,
        ] {
            assert!(contacts.iter().any(|c| c.category == cat), "missing {:?}", cat);
        }
    }

    #[test]
    fn call_prompt_names_number() {
        let police = &emergency_contacts()[0];
        let (title, body) = police.call_prompt();
        assert_eq!(title, "Call Police?");
        assert!(body.contains("100"));
    }
}
