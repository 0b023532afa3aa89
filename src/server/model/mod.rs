pub mod app;
pub mod auth;
pub mod favorite;
pub mod item;
pub mod profile;
