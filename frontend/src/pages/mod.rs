pub mod add_place;
pub mod add_review;
pub mod home;
pub mod login;
pub mod place_detail;
pub mod signup;
