//! Business logic between the controllers and the data layer.
//!
//! Services validate input, derive defaults, and orchestrate repository calls. Every database
//! interaction a request needs finishes inside the service call, before any rendering starts.

pub mod game;
pub mod user;
