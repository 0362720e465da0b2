//! Utility functions shared by handlers, services and the admin CLI.
//!
//! - [`validation`] - Short code and target URL rules

pub mod validation;
