//! HTTP request handlers.
//!
//! Handlers parse input, call a service, and pick a render mode. All database work completes
//! before rendering starts, and every render goes through the shared `Templates`.

pub mod game;
pub mod home;
pub mod page;

#[cfg(test)]
mod test;
