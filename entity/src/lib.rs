pub mod favorite;
pub mod item;
pub mod prelude;
pub mod profile;
