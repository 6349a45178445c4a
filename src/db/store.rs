use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::AppError;
use crate::models::{Amenity, Place, Review, User};

/// In-memory tables. Lists keep insertion order so responses are stable.
#[derive(Default)]
struct Tables {
    users: HashMap<String, User>,
    places: Vec<Place>,
    reviews: Vec<Review>,
    amenities: Vec<Amenity>,
}

#[derive(Clone, Default)]
pub struct Store {
    tables: Arc<RwLock<Tables>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Users ────────────────────────────────────────────────────────────────

    /// Inserts `user` unless its email (case-insensitive) is already taken.
    pub async fn insert_user(&self, user: User) -> Result<User, AppError> {
        let mut tables = self.tables.write().await;
        if tables
            .users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(AppError::EmailTaken);
        }
        debug!("Inserting user {}", user.id);
        tables.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    pub async fn find_user(&self, id: &str) -> Option<User> {
        self.tables.read().await.users.get(id).cloned()
    }

    pub async fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.tables
            .read()
            .await
            .users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    // ── Places ───────────────────────────────────────────────────────────────

    pub async fn insert_place(&self, place: Place) -> Place {
        debug!("Inserting place {}", place.id);
        self.tables.write().await.places.push(place.clone());
        place
    }

    pub async fn all_places(&self) -> Vec<Place> {
        self.tables.read().await.places.clone()
    }

    pub async fn find_place(&self, id: &str) -> Option<Place> {
        self.tables
            .read()
            .await
            .places
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    // ── Reviews ──────────────────────────────────────────────────────────────

    pub async fn insert_review(&self, review: Review) -> Review {
        debug!("Inserting review {} for place {}", review.id, review.place_id);
        self.tables.write().await.reviews.push(review.clone());
        review
    }

    pub async fn reviews_for_place(&self, place_id: &str) -> Vec<Review> {
        self.tables
            .read()
            .await
            .reviews
            .iter()
            .filter(|r| r.place_id == place_id)
            .cloned()
            .collect()
    }

    // ── Amenities ────────────────────────────────────────────────────────────

    pub async fn insert_amenity(&self, amenity: Amenity) -> Amenity {
        self.tables.write().await.amenities.push(amenity.clone());
        amenity
    }

    pub async fn all_amenities(&self) -> Vec<Amenity> {
        self.tables.read().await.amenities.clone()
    }

    pub async fn find_amenity(&self, id: &str) -> Option<Amenity> {
        self.tables
            .read()
            .await
            .amenities
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn user(id: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            first_name: "Ana".to_string(),
            last_name: "Silva".to_string(),
            email: email.to_string(),
            password: "pw".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_case_insensitively() {
        let store = Store::new();
        store.insert_user(user("u1", "ana@x.io")).await.unwrap();

        let err = store.insert_user(user("u2", "ANA@x.io")).await.unwrap_err();
        assert!(matches!(err, AppError::EmailTaken));
        assert!(store.find_user("u2").await.is_none());
    }

    #[tokio::test]
    async fn reviews_are_scoped_to_their_place() {
        let store = Store::new();
        for (id, place) in [("r1", "p1"), ("r2", "p2"), ("r3", "p1")] {
            store
                .insert_review(Review {
                    id: id.to_string(),
                    text: "ok".to_string(),
                    rating: 4,
                    place_id: place.to_string(),
                    user_id: "u1".to_string(),
                    created_at: Utc::now(),
                })
                .await;
        }

        let ids: Vec<_> = store
            .reviews_for_place("p1")
            .await
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["r1", "r3"]);
    }
}
