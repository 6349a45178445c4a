use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::ApiError;
use crate::http::{BrowserTransport, HttpRequest, Transport};
use crate::models::{
    Amenity, CreatedPlace, LoginRequest, NewPlace, NewReview, Place, SignupRequest,
};

/// Typed wrapper over the HBnB REST API.
///
/// Every call shares one success rule: status in `[200, 300)` and a body that
/// parses into the expected type. Anything else is an [`ApiError`].
#[derive(Clone, Debug)]
pub struct ApiClient<T = BrowserTransport> {
    base: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base: &str, transport: T) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// `GET /places/`
    pub async fn list_places(&self) -> Result<Vec<Place>, ApiError> {
        self.execute(HttpRequest::get(self.url("/places/"))).await
    }

    /// `GET /places/{id}`
    pub async fn get_place(&self, id: &str) -> Result<Place, ApiError> {
        self.execute(HttpRequest::get(self.url(&format!("/places/{id}"))))
            .await
    }

    /// `POST /places/`
    pub async fn create_place(
        &self,
        place: &NewPlace,
        token: Option<&str>,
    ) -> Result<CreatedPlace, ApiError> {
        let req = json_post(self.url("/places/"), place)?.with_bearer(token);
        self.execute(req).await
    }

    /// `GET /amenities/`
    pub async fn list_amenities(&self) -> Result<Vec<Amenity>, ApiError> {
        self.execute(HttpRequest::get(self.url("/amenities/"))).await
    }

    /// `POST /reviews/`. The created review is not used beyond confirming the
    /// body is JSON.
    pub async fn create_review(
        &self,
        review: &NewReview,
        token: Option<&str>,
    ) -> Result<Value, ApiError> {
        let req = json_post(self.url("/reviews/"), review)?.with_bearer(token);
        self.execute(req).await
    }

    /// `POST /users/`
    pub async fn signup(&self, input: &SignupRequest) -> Result<Value, ApiError> {
        self.execute(json_post(self.url("/users/"), input)?).await
    }

    /// `POST /users/login`. Returns the raw session payload.
    pub async fn login(&self, input: &LoginRequest) -> Result<Value, ApiError> {
        self.execute(json_post(self.url("/users/login"), input)?)
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    async fn execute<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        log::debug!("{:?} {}", request.method, request.url);
        let resp = self
            .transport
            .send(request)
            .await
            .map_err(ApiError::Network)?;

        if !resp.is_success() {
            return Err(ApiError::from_status(resp.status, &resp.body));
        }

        serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn json_post<B: Serialize>(url: String, body: &B) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok(HttpRequest::post_json(url, body))
}
