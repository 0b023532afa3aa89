pub mod factory;
pub mod seed;
