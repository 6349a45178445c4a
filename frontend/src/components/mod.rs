pub mod field;
pub mod hero;
pub mod navbar;
pub mod place_card;
pub mod search_bar;
pub mod toasts;
