pub mod auth;
pub mod dashboard;
pub mod equipment;
pub mod home;
pub mod resource;
pub mod users;
