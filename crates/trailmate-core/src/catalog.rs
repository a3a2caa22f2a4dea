//! Read-only content behind the Explore, Itinerary, Community and Profile tabs.
//!
//! Built once per process with [`Catalog::builtin`] and shared by reference; nothing here is
//! mutated after construction. Per-user toggles live in [`crate::toggles::ToggleSet`].

use serde::{Deserialize, Serialize};

use crate::contacts::{emergency_contacts, nearby_services, EmergencyContact, NearbyService};
use crate::toggles::ToggleSet;

/// Filter chips on the Explore tab. "All" disables filtering.
pub const DESTINATION_FILTERS: &[&str] = &["All", "Budget", "Adventure", "Culture", "Food", "Nature", "Solo"];

/// Tab key meaning "every trip".
pub const ALL_TRIPS_TAB: &str = "all";

pub const INITIAL_SAVED_DESTINATIONS: &[u32] = &[2, 4];
pub const INITIAL_LIKED_POSTS: &[u32] = &[2];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub image: String,
    pub tags: Vec<String>,
    pub rating: f32,
    pub budget: String,
    pub duration: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Upcoming,
    Planning,
    Completed,
}

impl TripStatus {
    pub fn key(self) -> &'static str {
        match self {
            TripStatus::Upcoming => "upcoming",
            TripStatus::Planning => "planning",
            TripStatus::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TripStatus::Upcoming => "Upcoming",
            TripStatus::Planning => "Planning",
            TripStatus::Completed => "Completed",
        }
    }

    /// Exact tab key; no trimming or case folding.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "upcoming" => Some(TripStatus::Upcoming),
            "planning" => Some(TripStatus::Planning),
            "completed" => Some(TripStatus::Completed),
            _ => None,
        }
    }
}

/// Itinerary tab strip as `(key, label)`, in display order.
pub fn trip_tabs() -> Vec<(&'static str, &'static str)> {
    let statuses = [TripStatus::Upcoming, TripStatus::Planning, TripStatus::Completed];
    std::iter::once((ALL_TRIPS_TAB, "All Trips"))
        .chain(statuses.into_iter().map(|s| (s.key(), s.label())))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    pub id: u32,
    pub title: String,
    pub destination: String,
    pub dates: String,
    pub duration: String,
    pub budget: String,
    pub status: TripStatus,
    pub progress: f32,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Traveler {
    pub id: u32,
    pub name: String,
    pub age: u8,
    pub distance: String,
    pub location: String,
    pub avatar: String,
    pub vibes: Vec<String>,
    pub is_online: bool,
    pub mutual_connections: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub name: String,
    pub avatar: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedPost {
    pub id: u32,
    pub author: PostAuthor,
    pub image: String,
    pub caption: String,
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    pub hashtags: Vec<String>,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub trips: u32,
    pub countries: u32,
    pub followers: u32,
    pub following: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub age: u8,
    pub pronouns: String,
    pub location: String,
    pub avatar: String,
    pub bio: String,
    pub join_date: String,
    pub stats: ProfileStats,
    pub badges: Vec<Badge>,
    pub preferences: Vec<String>,
    pub saved_places: u32,
    pub shared_itineraries: u32,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub destinations: Vec<Destination>,
    pub trips: Vec<TripSummary>,
    pub travelers: Vec<Traveler>,
    pub feed: Vec<FeedPost>,
    pub profile: UserProfile,
    pub contacts: Vec<EmergencyContact>,
    pub nearby: Vec<NearbyService>,
}

impl Catalog {
    /// Destinations for an Explore filter chip. Unknown chips match by tag like any other.
    pub fn destinations_matching(&self, filter: &str) -> Vec<&Destination> {
        let filter = filter.trim();
        if filter.is_empty() || filter.eq_ignore_ascii_case("all") {
            return self.destinations.iter().collect();
        }
        self.destinations
            .iter()
            .filter(|d| d.tags.iter().any(|t| t.eq_ignore_ascii_case(filter)))
            .collect()
    }

    /// Trips for an Itinerary tab key: "all" or an exact status key.
    pub fn trips_with_status(&self, tab: &str) -> Vec<&TripSummary> {
        if tab == ALL_TRIPS_TAB {
            return self.trips.iter().collect();
        }
        match TripStatus::parse(tab) {
            Some(status) => self.trips.iter().filter(|t| t.status == status).collect(),
            None => Vec::new(),
        }
    }

    pub fn destination(&self, id: u32) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    pub fn post(&self, id: u32) -> Option<&FeedPost> {
        self.feed.iter().find(|p| p.id == id)
    }

    pub fn initial_saved() -> ToggleSet<u32> {
        INITIAL_SAVED_DESTINATIONS.iter().copied().collect()
    }

    pub fn initial_liked() -> ToggleSet<u32> {
        INITIAL_LIKED_POSTS.iter().copied().collect()
    }

    pub fn builtin() -> Self {
        Self {
            destinations: builtin_destinations(),
            trips: builtin_trips(),
            travelers: builtin_travelers(),
            feed: builtin_feed(),
            profile: builtin_profile(),
            contacts: emergency_contacts(),
            nearby: nearby_services(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn unsplash(photo: &str, w: u32, h: u32) -> String {
    format!("https://images.unsplash.com/{}?w={}&h={}&fit=crop", photo, w, h)
}

fn builtin_destinations() -> Vec<Destination> {
    let d = |id, name: &str, location: &str, photo: &str, h, tags: &[&str], rating, budget: &str, duration: &str| Destination {
        id,
        name: name.to_string(),
        location: location.to_string(),
        image: unsplash(photo, 400, h),
        tags: strings(tags),
        rating,
        budget: budget.to_string(),
        duration: duration.to_string(),
    };
    vec![
        d(1, "Goa Beaches", "Goa, India", "photo-1512343879784-a960bf40e7f2", 600, &["Beach", "Solo", "Photography"], 4.8, "₹15,000", "3-4 days"),
        d(2, "Manali Adventures", "Himachal Pradesh, India", "photo-1506905925346-21bda4d32df4", 500, &["Adventure", "Nature", "Culture"], 4.6, "₹20,000", "5-6 days"),
        d(3, "Kerala Backwaters", "Kerala, India", "photo-1602216056096-3b40cc0c9944", 700, &["Nature", "Culture", "Food"], 4.9, "₹18,000", "4-5 days"),
        d(4, "Rajasthan Palaces", "Rajasthan, India", "photo-1578662996442-48f60103fc96", 550, &["Culture", "Photography", "Architecture"], 4.7, "₹25,000", "6-7 days"),
        d(5, "Hampi Ruins", "Karnataka, India", "photo-1545146344-0ad958bd96b4", 600, &["Culture", "History", "Solo"], 4.5, "₹12,000", "2-3 days"),
        d(6, "Ladakh Landscapes", "Ladakh, India", "photo-1506664999203-9e84c8d1fea8", 650, &["Adventure", "Nature", "Photography"], 4.9, "₹35,000", "7-10 days"),
    ]
}

fn builtin_trips() -> Vec<TripSummary> {
    let t = |id, title: &str, destination: &str, dates: &str, duration: &str, budget: &str, status, progress, photo: &str| TripSummary {
        id,
        title: title.to_string(),
        destination: destination.to_string(),
        dates: dates.to_string(),
        duration: duration.to_string(),
        budget: budget.to_string(),
        status,
        progress,
        image: unsplash(photo, 400, 200),
    };
    vec![
        t(1, "Goa Beach Adventure", "Goa, India", "15-18 Dec 2024", "4 days", "₹15,000", TripStatus::Upcoming, 0.8, "photo-1512343879784-a960bf40e7f2"),
        t(2, "Himalayan Trek", "Manali, HP", "22-28 Jan 2025", "7 days", "₹25,000", TripStatus::Planning, 0.3, "photo-1506905925346-21bda4d32df4"),
        t(3, "Kerala Backwater Cruise", "Kerala, India", "10-14 Nov 2024", "5 days", "₹18,000", TripStatus::Completed, 1.0, "photo-1602216056096-3b40cc0c9944"),
    ]
}

fn builtin_travelers() -> Vec<Traveler> {
    let p = |id, name: &str, age, distance: &str, location: &str, photo: &str, vibes: &[&str], is_online, mutual_connections| Traveler {
        id,
        name: name.to_string(),
        age,
        distance: distance.to_string(),
        location: location.to_string(),
        avatar: format!("{}&crop=face", unsplash(photo, 80, 80)),
        vibes: strings(vibes),
        is_online,
        mutual_connections,
    };
    vec![
        p(1, "Priya Sharma", 24, "0.5 km", "Goa Beach", "photo-1494790108755-2616c79e6bae", &["Solo", "Photography", "Beach"], true, 3),
        p(2, "Arjun Patel", 28, "1.2 km", "Old Goa", "photo-1507003211169-0a1dd7228f2d", &["Culture", "History", "Food"], false, 1),
        p(3, "Sarah Johnson", 26, "2.1 km", "Anjuna Market", "photo-1438761681033-6461ffad8d80", &["Adventure", "Nightlife", "Music"], true, 2),
    ]
}

fn builtin_feed() -> Vec<FeedPost> {
    let post = |id, author: &str, author_photo: &str, location: &str, photo: &str, caption: &str, counts: (u32, u32, u32), hashtags: &[&str], timestamp: &str| FeedPost {
        id,
        author: PostAuthor {
            name: author.to_string(),
            avatar: format!("{}&crop=face", unsplash(author_photo, 40, 40)),
            location: location.to_string(),
        },
        image: unsplash(photo, 400, 300),
        caption: caption.to_string(),
        likes: counts.0,
        comments: counts.1,
        shares: counts.2,
        hashtags: strings(hashtags),
        timestamp: timestamp.to_string(),
    };
    vec![
        post(
            1,
            "Maya Singh",
            "photo-1517841905240-472988babdf9",
            "Udaipur, Rajasthan",
            "photo-1578662996442-48f60103fc96",
            "Golden hour at the City Palace! This place never fails to amaze me",
            (142, 23, 8),
            &["#udaipur", "#rajasthan", "#palace", "#goldenhour"],
            "2h ago",
        ),
        post(
            2,
            "Rohit Kumar",
            "photo-1472099645785-5658abf4ff4e",
            "Rishikesh, Uttarakhand",
            "photo-1506905925346-21bda4d32df4",
            "Morning meditation by the Ganges. The peace here is indescribable",
            (89, 15, 4),
            &["#rishikesh", "#meditation", "#ganges", "#peace"],
            "4h ago",
        ),
        post(
            3,
            "Lisa Chen",
            "photo-1487412720507-e7ab37603c6f",
            "Hampi, Karnataka",
            "photo-1545146344-0ad958bd96b4",
            "Exploring ancient ruins and feeling connected to history. Hampi is pure magic!",
            (256, 42, 18),
            &["#hampi", "#ruins", "#history", "#backpacker"],
            "1d ago",
        ),
    ]
}

fn builtin_profile() -> UserProfile {
    let badge = |name: &str, description: &str| Badge {
        name: name.to_string(),
        description: description.to_string(),
    };
    UserProfile {
        name: "Alex Johnson".to_string(),
        email: "alex.johnson@email.com".to_string(),
        age: 26,
        pronouns: "they/them".to_string(),
        location: "Mumbai, India".to_string(),
        avatar: format!("{}&crop=face", unsplash("photo-1535713875002-d1d0cf377fde", 200, 200)),
        bio: "Adventure seeker • Culture enthusiast • Solo traveler exploring incredible India".to_string(),
        join_date: "March 2024".to_string(),
        stats: ProfileStats {
            trips: 8,
            countries: 12,
            followers: 256,
            following: 189,
        },
        badges: vec![
            badge("Explorer", "Visited 10+ destinations"),
            badge("Photographer", "Shared 50+ photos"),
            badge("Culture Lover", "Visited 5+ cultural sites"),
            badge("Solo Traveler", "Completed 5+ solo trips"),
        ],
        preferences: strings(&["Adventure", "Culture", "Photography", "Solo vibes"]),
        saved_places: 23,
        shared_itineraries: 5,
    }
}
