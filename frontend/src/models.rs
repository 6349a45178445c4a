use serde::{Deserialize, Serialize};

/// A listing as returned by `GET /places/` and `GET /places/{id}`.
///
/// The collection endpoint only promises `id`, `title`, `description` and
/// an optional image, so everything else defaults when absent.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Place {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Owner {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

impl Owner {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Review {
    pub id: String,
    #[serde(default)]
    pub text: String,
    pub rating: u8,
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user: Option<ReviewAuthor>,
}

impl Review {
    pub fn author_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| format!("{} {}", u.first_name, u.last_name).trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Anonymous".to_string())
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ReviewAuthor {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Amenity {
    pub id: String,
    pub name: String,
}

/// The part of a created place the client needs to navigate to it.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CreatedPlace {
    pub id: String,
    #[serde(default)]
    pub title: String,
}

// ── Request bodies ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewPlace {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewReview {
    pub text: String,
    pub rating: u8,
    pub place_id: String,
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_place_parses_with_missing_fields() {
        let place: Place =
            serde_json::from_str(r#"{"id":"p1","title":"Loft","imageUrl":"/a.jpg"}"#).unwrap();
        assert_eq!(place.title, "Loft");
        assert_eq!(place.description, "");
        assert_eq!(place.image_url.as_deref(), Some("/a.jpg"));
        assert!(place.owner.is_none());
        assert!(place.amenities.is_empty());
        assert!(place.reviews.is_empty());
    }

    #[test]
    fn detailed_place_parses_nested_data() {
        let body = r#"{
            "id": "p1", "title": "Loft", "description": "Bright",
            "price": 80.5, "latitude": 48.85, "longitude": 2.35,
            "image_url": "/loft.jpg",
            "owner": {"id": "u1", "first_name": "Ana", "last_name": "Silva", "email": "ana@x.io"},
            "amenities": ["WiFi", "Pool"],
            "reviews": [{"id": "r1", "text": "Lovely", "rating": 5,
                         "user": {"first_name": "Bo", "last_name": "Li"}}]
        }"#;
        let place: Place = serde_json::from_str(body).unwrap();
        assert_eq!(place.owner.as_ref().unwrap().full_name(), "Ana Silva");
        assert_eq!(place.amenities, vec!["WiFi", "Pool"]);
        assert_eq!(place.reviews[0].author_name(), "Bo Li");
        assert_eq!(place.price, Some(80.5));
    }

    #[test]
    fn review_without_user_is_anonymous() {
        let review: Review = serde_json::from_str(r#"{"id":"r","rating":3}"#).unwrap();
        assert_eq!(review.author_name(), "Anonymous");
    }

    #[test]
    fn new_place_omits_empty_amenities() {
        let place = NewPlace {
            title: "t".into(),
            description: "d".into(),
            price: 1.0,
            latitude: 0.0,
            longitude: 0.0,
            owner_id: "u1".into(),
            amenities: Vec::new(),
        };
        let json = serde_json::to_value(&place).unwrap();
        assert!(json.get("amenities").is_none());
        assert_eq!(json["owner_id"], "u1");
    }

    #[test]
    fn new_review_sends_rating_as_integer() {
        let review = NewReview {
            text: "Great stay".into(),
            rating: 5,
            place_id: "p1".into(),
            user_id: "u1".into(),
        };
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["rating"], serde_json::json!(5));
        assert!(json["rating"].is_u64());
    }
}
