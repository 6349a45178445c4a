use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::db::store::Store;
use crate::errors::AppError;
use crate::models::{
    Amenity, Credentials, LoginResponse, NewPlace, NewReview, NewUser, Place, PlaceView, Review,
    ReviewAuthor, ReviewView, User, UserView,
};

const MIN_RATING: i64 = 1;
const MAX_RATING: i64 = 5;

#[derive(Clone)]
pub struct HbnbService {
    store: Store,
}

impl HbnbService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    // ── Users ────────────────────────────────────────────────────────────────

    pub async fn register(&self, input: NewUser) -> Result<UserView, AppError> {
        let user = User {
            id: Uuid::new_v4().to_string(),
            first_name: non_empty("first_name", &input.first_name)?,
            last_name: non_empty("last_name", &input.last_name)?,
            email: non_empty("email", &input.email)?.to_lowercase(),
            password: input.password,
            created_at: Utc::now(),
        };
        if user.password.is_empty() {
            return Err(AppError::EmptyField { field_name: "password" });
        }

        let user = self.store.insert_user(user).await?;
        info!("Registered user {}", user.id);
        Ok(UserView::from(&user))
    }

    pub async fn login(&self, credentials: Credentials) -> Result<LoginResponse, AppError> {
        let user = self
            .store
            .find_user_by_email(credentials.email.trim())
            .await
            .filter(|u| u.password == credentials.password)
            .ok_or(AppError::InvalidCredentials)?;

        Ok(LoginResponse {
            access_token: Uuid::new_v4().to_string(),
            user: UserView::from(&user),
        })
    }

    // ── Places ───────────────────────────────────────────────────────────────

    pub async fn list_places(&self) -> Vec<PlaceView> {
        let mut views = Vec::new();
        for place in self.store.all_places().await {
            views.push(self.place_view(place).await);
        }
        views
    }

    pub async fn get_place(&self, id: &str) -> Result<PlaceView, AppError> {
        let place = self
            .store
            .find_place(id)
            .await
            .ok_or_else(|| AppError::NotFound { entity: "Place", id: id.to_string() })?;
        Ok(self.place_view(place).await)
    }

    pub async fn create_place(&self, input: NewPlace) -> Result<PlaceView, AppError> {
        let title = non_empty("title", &input.title)?;
        let price = finite("price", input.price)?;
        let latitude = finite("latitude", input.latitude)?;
        let longitude = finite("longitude", input.longitude)?;

        if self.store.find_user(&input.owner_id).await.is_none() {
            return Err(AppError::UnknownReference { entity: "User", id: input.owner_id });
        }
        for amenity_id in &input.amenities {
            if self.store.find_amenity(amenity_id).await.is_none() {
                return Err(AppError::UnknownReference {
                    entity: "Amenity",
                    id: amenity_id.clone(),
                });
            }
        }

        let place = Place {
            id: Uuid::new_v4().to_string(),
            title,
            description: input.description.trim().to_string(),
            price,
            latitude,
            longitude,
            owner_id: input.owner_id,
            image_url: input.image_url,
            amenity_ids: input.amenities,
            created_at: Utc::now(),
        };
        let place = self.store.insert_place(place).await;
        info!("Created place {} for owner {}", place.id, place.owner_id);
        Ok(self.place_view(place).await)
    }

    // ── Amenities ────────────────────────────────────────────────────────────

    pub async fn list_amenities(&self) -> Vec<Amenity> {
        self.store.all_amenities().await
    }

    pub async fn add_amenity(&self, name: &str) -> Result<Amenity, AppError> {
        let amenity = Amenity {
            id: Uuid::new_v4().to_string(),
            name: non_empty("name", name)?,
        };
        Ok(self.store.insert_amenity(amenity).await)
    }

    // ── Reviews ──────────────────────────────────────────────────────────────

    pub async fn create_review(&self, input: NewReview) -> Result<ReviewView, AppError> {
        let text = non_empty("text", &input.text)?;
        if !(MIN_RATING..=MAX_RATING).contains(&input.rating) {
            return Err(AppError::RatingOutOfRange { value: input.rating });
        }
        if self.store.find_place(&input.place_id).await.is_none() {
            return Err(AppError::NotFound { entity: "Place", id: input.place_id });
        }
        let author = self
            .store
            .find_user(&input.user_id)
            .await
            .ok_or_else(|| AppError::UnknownReference {
                entity: "User",
                id: input.user_id.clone(),
            })?;

        let review = Review {
            id: Uuid::new_v4().to_string(),
            text,
            rating: input.rating as u8,
            place_id: input.place_id,
            user_id: input.user_id,
            created_at: Utc::now(),
        };
        let review = self.store.insert_review(review).await;
        info!("Review {} added to place {}", review.id, review.place_id);
        Ok(review_view(review, Some(&author)))
    }

    // ── Demo data ────────────────────────────────────────────────────────────

    /// Amenities plus one host with one place, so a fresh server has
    /// something to browse.
    pub async fn seed_demo_data(&self) -> Result<(), AppError> {
        let mut amenity_ids = Vec::new();
        for name in ["WiFi", "Pool", "Air conditioning", "Parking", "Kitchen"] {
            amenity_ids.push(self.add_amenity(name).await?.id);
        }

        let host = self
            .register(NewUser {
                first_name: "Demo".to_string(),
                last_name: "Host".to_string(),
                email: "host@hbnb.dev".to_string(),
                password: "hbnb".to_string(),
            })
            .await?;

        self.create_place(NewPlace {
            title: "Seaside Loft".to_string(),
            description: "Bright loft two minutes from the beach.".to_string(),
            price: 120.0,
            latitude: 43.2965,
            longitude: 5.3698,
            owner_id: host.id,
            image_url: None,
            amenities: amenity_ids.into_iter().take(2).collect(),
        })
        .await?;

        info!("Seeded demo data");
        Ok(())
    }

    async fn place_view(&self, place: Place) -> PlaceView {
        let owner = self.store.find_user(&place.owner_id).await;

        let mut amenities = Vec::new();
        for id in &place.amenity_ids {
            if let Some(amenity) = self.store.find_amenity(id).await {
                amenities.push(amenity.name);
            }
        }

        let mut reviews = Vec::new();
        for review in self.store.reviews_for_place(&place.id).await {
            let author = self.store.find_user(&review.user_id).await;
            reviews.push(review_view(review, author.as_ref()));
        }

        PlaceView {
            id: place.id,
            title: place.title,
            description: place.description,
            price: place.price,
            latitude: place.latitude,
            longitude: place.longitude,
            owner_id: place.owner_id,
            owner: owner.as_ref().map(UserView::from),
            image_url: place.image_url,
            amenities,
            reviews,
        }
    }
}

fn review_view(review: Review, author: Option<&User>) -> ReviewView {
    ReviewView {
        id: review.id,
        text: review.text,
        rating: review.rating,
        place_id: review.place_id,
        user_id: review.user_id,
        user: author.map(|u| ReviewAuthor {
            first_name: u.first_name.clone(),
            last_name: u.last_name.clone(),
        }),
    }
}

fn non_empty(field_name: &'static str, value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::EmptyField { field_name });
    }
    Ok(value.to_string())
}

fn finite(field_name: &'static str, value: f64) -> Result<f64, AppError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::InvalidNumber { field_name })
    }
}
