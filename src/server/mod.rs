//! Server-rendered HTML backend.
//!
//! This module contains the complete server: the route table, request handlers, the template
//! renderer, business logic, and data access. The backend uses Axum as the web framework,
//! SeaORM over SQLite for persistence, and minijinja for HTML templates.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers; parse input, pick a render mode
//! - **Service Layer** (`service/`) - Validation, default derivation, and data orchestration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, parameters, and view-models
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Renderer** (`render`) - Precompiled templates with full-page and partial render modes
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, templates, user sampler)
//! - **Startup** (`startup`) - Database connection, schema creation, and shutdown signal
//! - **Router** (`router`) - Static route table and middleware layers
//!
//! # Request Flow
//!
//! 1. **Router** matches the exact path and method and calls a controller
//! 2. **Controller** extracts form or query input and calls a service
//! 3. **Service** validates, derives defaults, and calls the data layer
//! 4. **Data** queries SQLite and converts entities to domain models
//! 5. **Controller** builds a view-model and asks the renderer for a page or partial
//! 6. **Renderer** renders into a buffer and only then produces the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod render;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
