pub mod favorite;
pub mod item;
pub mod profile;
