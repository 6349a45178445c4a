pub mod hbnb_service;
