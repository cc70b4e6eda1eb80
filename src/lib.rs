//! Base content entity for Pebble.
//!
//! [`Entity`] carries an id, a title, a slug derived from the title and a
//! last-modified time. Richer content types build on it.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;


pub use config::Config;
pub use error::{EntityError, Result};
pub use models::{Entity, EntityPatch, NewEntity};
