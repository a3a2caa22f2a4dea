//! Form validation for the auth, profile setup and itinerary input screens.
//!
//! Failures carry the title and message of the blocking prompt the client shows; there is no
//! recovery beyond the user fixing the form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::itinerary::TripRequest;

/// Travel vibe chips offered on the itinerary input screen.
pub const VIBE_OPTIONS: &[(&str, &str)] = &[
    ("adventure", "Adventure"),
    ("culture", "Culture"),
    ("food", "Food"),
    ("nature", "Nature"),
    ("photography", "Photography"),
    ("nightlife", "Nightlife"),
    ("solo", "Solo vibes"),
    ("relaxation", "Relaxation"),
];

pub const PROFILE_PREFERENCES: &[&str] =
    &["Adventure", "Food", "Photography", "Nature", "Nightlife", "Culture", "Solo vibes"];

pub const BUDGET_OPTIONS: &[u32] = &[500, 1000, 2500, 5000, 10000, 25000, 50000];

pub const DEFAULT_SAFETY_LEVEL: u8 = 3;
pub const MIN_SAFETY_LEVEL: u8 = 1;
pub const MAX_SAFETY_LEVEL: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all required fields.")]
    MissingTripFields,
    #[error("Please select at least one travel vibe.")]
    NoTravelVibes,
    #[error("Please fill in all fields")]
    MissingAuthFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please fill in your name and age")]
    MissingNameOrAge,
    #[error("Please select at least one travel preference")]
    NoPreferences,
}

impl FormError {
    /// Title of the blocking prompt.
    pub fn title(&self) -> &'static str {
        match self {
            FormError::MissingTripFields => "Missing Information",
            FormError::NoTravelVibes => "Travel Vibes Required",
            _ => "Error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    Low = 1,
    Moderate = 2,
    High = 3,
    VeryHigh = 4,
    Maximum = 5,
}

impl SafetyLevel {
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(SafetyLevel::Low),
            2 => Some(SafetyLevel::Moderate),
            3 => Some(SafetyLevel::High),
            4 => Some(SafetyLevel::VeryHigh),
            5 => Some(SafetyLevel::Maximum),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SafetyLevel::Low => "Low",
            SafetyLevel::Moderate => "Moderate",
            SafetyLevel::High => "High",
            SafetyLevel::VeryHigh => "Very High",
            SafetyLevel::Maximum => "Maximum",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SafetyLevel::Low => "I can handle any adventure",
            SafetyLevel::Moderate => "Some adventure is fine",
            SafetyLevel::High => "Prefer safer experiences",
            SafetyLevel::VeryHigh => "Safety is my top priority",
            SafetyLevel::Maximum => "Only the safest options",
        }
    }
}

fn blank(s: &Option<String>) -> bool {
    s.as_deref().map(str::trim).unwrap_or("").is_empty()
}

/// Itinerary input form. Returns the request to hand to the itinerary service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripForm {
    pub destination: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub budget: Option<String>,
    pub travel_vibes: Vec<String>,
    pub safety_level: Option<u8>,
    pub additional_notes: Option<String>,
}

impl TripForm {
    pub fn validate(self) -> Result<TripRequest, FormError> {
        if blank(&self.destination) || blank(&self.start_date) || blank(&self.end_date) || blank(&self.budget) {
            return Err(FormError::MissingTripFields);
        }
        if self.travel_vibes.is_empty() {
            return Err(FormError::NoTravelVibes);
        }
        let safety_level = self
            .safety_level
            .unwrap_or(DEFAULT_SAFETY_LEVEL)
            .clamp(MIN_SAFETY_LEVEL, MAX_SAFETY_LEVEL);
        Ok(TripRequest {
            destination: self.destination.map(Value::from),
            start_date: self.start_date.map(Value::from),
            end_date: self.end_date.map(Value::from),
            budget: self.budget.map(Value::from),
            travel_vibes: Some(Value::from(self.travel_vibes)),
            safety_level: Some(Value::from(safety_level)),
            additional_notes: self.additional_notes.map(Value::from),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
    #[default]
    Email,
    Phone,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub auth_type: AuthType,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub name: Option<String>,
}

pub const ROUTE_TABS: &str = "/(tabs)";
pub const ROUTE_PROFILE_SETUP: &str = "/profile-setup";

impl AuthForm {
    /// Mock sign-in: checks the form and returns the route to open next.
    pub fn validate(&self) -> Result<&'static str, FormError> {
        let credential = match self.auth_type {
            AuthType::Email => &self.email,
            AuthType::Phone => &self.phone,
        };
        match self.mode {
            AuthMode::Login => {
                if blank(credential) || blank(&self.password) {
                    return Err(FormError::MissingAuthFields);
                }
                Ok(ROUTE_TABS)
            }
            AuthMode::Signup => {
                if blank(&self.name) || blank(credential) || blank(&self.password) || blank(&self.confirm_password) {
                    return Err(FormError::MissingAuthFields);
                }
                if self.password != self.confirm_password {
                    return Err(FormError::PasswordMismatch);
                }
                Ok(ROUTE_PROFILE_SETUP)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Up,
    Down,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    pub avatar: Option<String>,
    pub name: Option<String>,
    pub pronouns: Option<String>,
    pub age: Option<String>,
    pub preferences: Vec<String>,
    pub budget: u32,
    pub safety_level: u8,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            avatar: None,
            name: None,
            pronouns: None,
            age: None,
            preferences: Vec::new(),
            budget: 1000,
            safety_level: DEFAULT_SAFETY_LEVEL,
        }
    }
}

impl ProfileForm {
    /// Moves the budget one option up or down, starting from the first option at or above
    /// the current value. Stays put at either end; a budget above the largest option only
    /// steps down, onto the largest option.
    pub fn step_budget(&mut self, step: Step) {
        let current = BUDGET_OPTIONS
            .iter()
            .position(|&b| b >= self.budget)
            .unwrap_or(BUDGET_OPTIONS.len());
        match step {
            Step::Up if current + 1 < BUDGET_OPTIONS.len() => self.budget = BUDGET_OPTIONS[current + 1],
            Step::Down if current > 0 => self.budget = BUDGET_OPTIONS[current - 1],
            _ => {}
        }
    }

    pub fn step_safety(&mut self, step: Step) {
        match step {
            Step::Up if self.safety_level < MAX_SAFETY_LEVEL => self.safety_level += 1,
            Step::Down if self.safety_level > MIN_SAFETY_LEVEL => self.safety_level -= 1,
            _ => {}
        }
    }

    pub fn validate(&self) -> Result<&'static str, FormError> {
        if blank(&self.name) || blank(&self.age) {
            return Err(FormError::MissingNameOrAge);
        }
        if self.preferences.is_empty() {
            return Err(FormError::NoPreferences);
        }
        Ok(ROUTE_TABS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    fn full_trip() -> TripForm {
        TripForm {
            destination: s("Goa"),
            start_date: s("2024-12-15"),
            end_date: s("2024-12-18"),
            budget: s("15000"),
            travel_vibes: vec!["food".to_string()],
            safety_level: None,
            additional_notes: None,
        }
    }

    #[test]
    fn trip_requires_fields_before_vibes() {
        let mut form = full_trip();
        form.budget = s("  ");
        form.travel_vibes.clear();
        let err = form.validate().unwrap_err();
        assert_eq!(err, FormError::MissingTripFields);
        assert_eq!(err.title(), "Missing Information");
    }

    #[test]
    fn trip_requires_a_vibe() {
        let mut form = full_trip();
        form.travel_vibes.clear();
        let err = form.validate().unwrap_err();
        assert_eq!(err.title(), "Travel Vibes Required");
        assert_eq!(err.to_string(), "Please select at least one travel vibe.");
    }

    #[test]
    fn trip_defaults_safety_level() {
        let req = full_trip().validate().unwrap();
        assert_eq!(req.safety_level, Some(Value::from(3u8)));
        assert_eq!(SafetyLevel::from_level(3).map(SafetyLevel::label), Some("High"));
    }

    #[test]
    fn login_checks_selected_credential() {
        let form = AuthForm {
            auth_type: AuthType::Phone,
            email: s("a@b.c"),
            password: s("pw"),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(FormError::MissingAuthFields));

        let form = AuthForm {
            phone: s("+91 98765 43210"),
            ..form
        };
        assert_eq!(form.validate(), Ok(ROUTE_TABS));
    }

    #[test]
    fn signup_rejects_mismatched_passwords() {
        let form = AuthForm {
            mode: AuthMode::Signup,
            name: s("Alex"),
            email: s("alex@example.com"),
            password: s("one"),
            confirm_password: s("two"),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(FormError::PasswordMismatch));

        let form = AuthForm {
            confirm_password: s("one"),
            ..form
        };
        assert_eq!(form.validate(), Ok(ROUTE_PROFILE_SETUP));
    }

    #[test]
    fn budget_steps_through_options() {
        let mut p = ProfileForm::default();
        p.step_budget(Step::Up);
        assert_eq!(p.budget, 2500);
        p.budget = 50000;
        p.step_budget(Step::Up);
        assert_eq!(p.budget, 50000);
        p.budget = 700;
        p.step_budget(Step::Down);
        assert_eq!(p.budget, 500);
        p.step_budget(Step::Down);
        assert_eq!(p.budget, 500);
    }

    #[test]
    fn budget_above_largest_option_only_steps_down() {
        let mut p = ProfileForm {
            budget: 80_000,
            ..Default::default()
        };
        p.step_budget(Step::Up);
        assert_eq!(p.budget, 80_000);
        p.step_budget(Step::Down);
        assert_eq!(p.budget, 50_000);
    }

    #[test]
    fn safety_steps_are_clamped() {
        let mut p = ProfileForm::default();
        for _ in 0..5 {
            p.step_safety(Step::Up);
        }
        assert_eq!(p.safety_level, MAX_SAFETY_LEVEL);
        for _ in 0..9 {
            p.step_safety(Step::Down);
        }
        assert_eq!(p.safety_level, MIN_SAFETY_LEVEL);
    }

    #[test]
    fn profile_requires_preference() {
        let mut p = ProfileForm {
            name: s("Alex"),
            age: s("26"),
            ..Default::default()
        };
        assert_eq!(p.validate(), Err(FormError::NoPreferences));
        p.preferences.push(PROFILE_PREFERENCES[0].to_string());
        assert_eq!(p.validate(), Ok(ROUTE_TABS));
    }
}
