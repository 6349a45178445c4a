/// Base URL of the HBnB REST API. Override at build time with `HBNB_API_BASE`.
pub const API_BASE: &str = match option_env!("HBNB_API_BASE") {
    Some(base) => base,
    None => "http://127.0.0.1:5000/api/v1",
};

/// localStorage key holding the serialized login response.
pub const SESSION_KEY: &str = "user";

/// Banner shown on the detail page when a place has no image.
pub const DEFAULT_IMAGE: &str = "/images/default.jpg";

/// Delay before leaving the signup page after a successful registration.
pub const SIGNUP_REDIRECT_MS: u32 = 1_000;

/// Delay before returning to the place after a review is accepted.
pub const REVIEW_REDIRECT_MS: u32 = 3_000;

/// How long a toast stays on screen.
pub const TOAST_MS: u32 = 3_000;
