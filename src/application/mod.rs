//! Application layer services implementing business logic.
//!
//! Services validate input, coordinate repository calls and translate store
//! failures into [`crate::error::AppError`]. They consume repository traits
//! and provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link resolution, listing and creation
//! - [`services::metrics_service::MetricsService`] - Click recording and the metrics report

pub mod services;
