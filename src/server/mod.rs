//! Server application core modules.
//!
//! Everything backing the favorites API: configuration, routing, the
//! validated domain entities, their repositories, and the error
//! taxonomy mapping failures onto HTTP responses.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod startup;
pub mod util;
