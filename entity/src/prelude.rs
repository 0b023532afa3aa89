pub use super::favorite::Entity as Favorite;
pub use super::item::Entity as Item;
pub use super::profile::Entity as Profile;
