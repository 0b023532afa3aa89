//! Transport models shared by the API surface.

pub mod api;
pub mod favorite;
pub mod item;
pub mod profile;
