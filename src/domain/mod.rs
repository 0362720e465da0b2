//! Domain layer containing business entities and store contracts.
//!
//! This module defines the data model of the service and the narrow contracts
//! through which it talks to its two external stores. It has no dependencies
//! on infrastructure or presentation layers.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Store access trait definitions
//! - [`store_error`] - Classified store failures shared by all repositories
//!
//! # Redirect Flow
//!
//! 1. HTTP handler receives `GET /{code}`
//! 2. Link is resolved through [`repositories::LinkRepository`]
//! 3. Click counter is incremented through [`repositories::MetricsRepository`]
//!    (best-effort, failures never block the redirect)
//! 4. Handler responds with `301 Moved Permanently`

pub mod entities;
pub mod repositories;
pub mod store_error;

pub use store_error::StoreError;
