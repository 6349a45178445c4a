//! Submission flow shared by the signup, login, create-place and add-review
//! pages.
//!
//! A form moves `Idle -> Submitting -> Navigating` on success and
//! `Idle -> Submitting -> Idle` on failure. Each flow function below does the
//! validation and the API call and returns a [`Submission`]; [`settle`] turns
//! that into exactly one notice, at most one navigation, and the next phase.

use crate::api::ApiClient;
use crate::config::{REVIEW_REDIRECT_MS, SIGNUP_REDIRECT_MS};
use crate::errors::FormError;
use crate::http::Transport;
use crate::models::{CreatedPlace, LoginRequest, NewPlace, NewReview, SignupRequest};
use crate::session::{self, Session, SessionStore};
use crate::validation::{self, Rating};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    /// Succeeded; waiting for the delayed navigation. Inputs stay disabled.
    Navigating,
}

impl FormPhase {
    pub fn can_submit(self) -> bool {
        self == FormPhase::Idle
    }

    pub fn is_busy(self) -> bool {
        self != FormPhase::Idle
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A toast message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub path: String,
    pub delay_ms: u32,
}

impl Redirect {
    pub fn now(path: impl Into<String>) -> Self {
        Self { path: path.into(), delay_ms: 0 }
    }

    pub fn after(path: impl Into<String>, delay_ms: u32) -> Self {
        Self { path: path.into(), delay_ms }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Submitted {
    pub notice: String,
    pub redirect: Redirect,
    /// Set by login only.
    pub session: Option<Session>,
}

/// `Err` holds the text of the error notice.
pub type Submission = Result<Submitted, String>;

/// What a page does with the result of a submission.
pub trait Effects {
    fn notify(&self, notice: Notice);
    fn navigate(&self, redirect: Redirect);
    fn signed_in(&self, session: Session);
}

/// Applies a finished submission and returns the phase the form moves to.
pub fn settle(effects: &impl Effects, outcome: Submission) -> FormPhase {
    match outcome {
        Ok(done) => {
            if let Some(session) = done.session {
                effects.signed_in(session);
            }
            effects.notify(Notice::success(done.notice));
            effects.navigate(done.redirect);
            FormPhase::Navigating
        }
        Err(text) => {
            effects.notify(Notice::error(text));
            FormPhase::Idle
        }
    }
}

// ── Form inputs ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupRequest, FormError> {
        Ok(SignupRequest {
            first_name: validation::required("First name", &self.first_name)?,
            last_name: validation::required("Last name", &self.last_name)?,
            email: validation::required("Email", &self.email)?,
            password: required_secret("Password", &self.password)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, FormError> {
        Ok(LoginRequest {
            email: validation::required("Email", &self.email)?,
            password: required_secret("Password", &self.password)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub latitude: String,
    pub longitude: String,
    /// Selected amenity ids.
    pub amenities: Vec<String>,
}

impl PlaceForm {
    pub fn validate(&self, owner_id: &str) -> Result<NewPlace, FormError> {
        Ok(NewPlace {
            title: validation::required("Title", &self.title)?,
            description: validation::required("Description", &self.description)?,
            price: validation::number("Price", &self.price)?,
            latitude: validation::number("Latitude", &self.latitude)?,
            longitude: validation::number("Longitude", &self.longitude)?,
            owner_id: owner_id.to_string(),
            amenities: self.amenities.clone(),
        })
    }

    pub fn toggle_amenity(&mut self, id: &str) {
        if let Some(pos) = self.amenities.iter().position(|a| a == id) {
            self.amenities.remove(pos);
        } else {
            self.amenities.push(id.to_string());
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewForm {
    pub text: String,
    /// Raw text of the rating input.
    pub rating: String,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self {
            text: String::new(),
            rating: Rating::MIN.to_string(),
        }
    }
}

impl ReviewForm {
    pub fn validate(&self, place_id: &str, user_id: &str) -> Result<NewReview, FormError> {
        Ok(NewReview {
            text: validation::required("Review", &self.text)?,
            rating: Rating::parse(&self.rating)?.get(),
            place_id: place_id.to_string(),
            user_id: user_id.to_string(),
        })
    }
}

/// Passwords are checked for presence but sent untrimmed.
fn required_secret(field: &'static str, value: &str) -> Result<String, FormError> {
    validation::required(field, value)?;
    Ok(value.to_string())
}

// ── Flows ────────────────────────────────────────────────────────────────────

const SIGNUP_FAILED: &str = "Failed to sign up.";
const LOGIN_FAILED: &str = "Login failed.";
const CREATE_PLACE_FAILED: &str = "Failed to create place";
const REVIEW_FAILED: &str = "Failed to submit review.";

pub async fn signup<T: Transport>(api: &ApiClient<T>, form: &SignupForm) -> Submission {
    match try_signup(api, form).await {
        Ok(()) => Ok(Submitted {
            notice: "Account created successfully!".to_string(),
            redirect: Redirect::after("/", SIGNUP_REDIRECT_MS),
            session: None,
        }),
        Err(err) => {
            log::warn!("Signup failed: {err}");
            Err(format!("Error: {}", err.notice_text(SIGNUP_FAILED)))
        }
    }
}

async fn try_signup<T: Transport>(api: &ApiClient<T>, form: &SignupForm) -> Result<(), FormError> {
    let input = form.validate()?;
    api.signup(&input).await?;
    Ok(())
}

/// On success the full response body has been written to `store` exactly once.
pub async fn login<T: Transport, S: SessionStore>(
    api: &ApiClient<T>,
    store: &S,
    form: &LoginForm,
) -> Submission {
    match try_login(api, store, form).await {
        Ok(session) => {
            let notice = match session.first_name() {
                Some(name) => format!("Welcome, {name}!"),
                None => "Welcome back!".to_string(),
            };
            Ok(Submitted {
                notice,
                redirect: Redirect::now("/"),
                session: Some(session),
            })
        }
        Err(err) => {
            log::warn!("Login failed: {err}");
            Err(err.notice_text(LOGIN_FAILED))
        }
    }
}

async fn try_login<T: Transport, S: SessionStore>(
    api: &ApiClient<T>,
    store: &S,
    form: &LoginForm,
) -> Result<Session, FormError> {
    let input = form.validate()?;
    let payload = api.login(&input).await?;
    match session::persist(store, payload.clone()) {
        Ok(session) => Ok(session),
        Err(e) => {
            // The login itself succeeded; keep the session for this page load.
            log::error!("{e}");
            Ok(Session::from_payload(payload))
        }
    }
}

pub async fn create_place<T: Transport>(
    api: &ApiClient<T>,
    session: Option<&Session>,
    form: &PlaceForm,
) -> Submission {
    match try_create_place(api, session, form).await {
        Ok(created) => {
            let title = if created.title.is_empty() {
                form.title.trim().to_string()
            } else {
                created.title
            };
            log::info!("Created place {}", created.id);
            Ok(Submitted {
                notice: format!("Place \"{title}\" has been added."),
                redirect: Redirect::now(format!("/places/{}", created.id)),
                session: None,
            })
        }
        Err(err) => {
            log::warn!("Create place failed: {err}");
            Err(err.notice_text(CREATE_PLACE_FAILED))
        }
    }
}

async fn try_create_place<T: Transport>(
    api: &ApiClient<T>,
    session: Option<&Session>,
    form: &PlaceForm,
) -> Result<CreatedPlace, FormError> {
    let session = session.ok_or(FormError::NotAuthenticated)?;
    let owner_id = session.user_id().ok_or(FormError::NotAuthenticated)?;
    let input = form.validate(owner_id)?;
    Ok(api.create_place(&input, session.access_token()).await?)
}

pub async fn submit_review<T: Transport>(
    api: &ApiClient<T>,
    session: Option<&Session>,
    place_id: &str,
    form: &ReviewForm,
) -> Submission {
    match try_submit_review(api, session, place_id, form).await {
        Ok(()) => Ok(Submitted {
            notice: "Review submitted successfully!".to_string(),
            redirect: Redirect::after(format!("/places/{place_id}"), REVIEW_REDIRECT_MS),
            session: None,
        }),
        Err(FormError::Api(err)) => {
            log::error!("Error submitting review: {err}");
            Err(REVIEW_FAILED.to_string())
        }
        Err(err) => Err(err.to_string()),
    }
}

async fn try_submit_review<T: Transport>(
    api: &ApiClient<T>,
    session: Option<&Session>,
    place_id: &str,
    form: &ReviewForm,
) -> Result<(), FormError> {
    let session = session.ok_or(FormError::NotAuthenticated)?;
    let user_id = session.user_id().ok_or(FormError::NotAuthenticated)?;
    let input = form.validate(place_id, user_id)?;
    api.create_review(&input, session.access_token()).await?;
    Ok(())
}
