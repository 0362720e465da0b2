//! Link resolution, listing and creation service.

use std::sync::Arc;

use crate::domain::StoreError;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::validation::{validate_code, validate_target_url};
use serde_json::json;
use tracing::info;

/// Service for resolving, listing and creating short links.
///
/// Inputs are validated before the link store is contacted, so malformed
/// requests never reach the database.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Creates a link for a caller-chosen code.
    ///
    /// # Uniqueness
    ///
    /// The existence check performed first only catches the common case
    /// cheaply. Two concurrent requests for the same code can both pass it;
    /// the store's uniqueness constraint then rejects the slower insert,
    /// which is reported with the same error kind.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the code is shorter than three
    /// characters or the URL is malformed.
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken, with the
    /// message `"This code is already being used"` when the pre-check caught
    /// it and `"Duplicated code"` when the store constraint did.
    ///
    /// Returns [`AppError::Internal`] on any other store failure.
    pub async fn create_link(&self, code: String, url: String) -> Result<Link, AppError> {
        validate_code(&code)?;
        validate_target_url(&url)?;

        if self.link_repository.find_by_code(&code).await?.is_some() {
            return Err(AppError::conflict(
                "This code is already being used",
                json!({ "code": code }),
            ));
        }

        match self
            .link_repository
            .create(NewLink::new(code.clone(), url))
            .await
        {
            Ok(link) => {
                info!(id = link.id, code = %link.code, "Short link created");
                Ok(link)
            }
            Err(StoreError::Conflict { constraint }) => Err(AppError::conflict(
                "Duplicated code",
                json!({ "code": code, "constraint": constraint }),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Resolves a short code to its link.
    ///
    /// The code length is checked here rather than in the HTTP extractor so
    /// the redirect handler and the admin tool share one rule.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the code is shorter than three characters.
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        validate_code(code)?;

        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "code": code })))
    }

    /// Lists every link, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.link_repository.list_newest_first().await?)
    }

    /// Reports whether the link store is reachable.
    pub async fn is_healthy(&self) -> bool {
        self.link_repository.health_check().await
    }
}
