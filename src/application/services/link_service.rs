//! Link creation, resolution and management service.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{Link, LinkTotals, NewLink};
use crate::domain::repositories::{LinkOrder, LinkRepository};
use crate::error::{AppError, CODE_EXISTS_MESSAGE, LINK_NOT_FOUND_MESSAGE};
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_validator::validate_target_url;

/// Default number of attempts to find a free generated code.
pub const DEFAULT_GENERATION_ATTEMPTS: usize = 3;

/// Service for creating, resolving and deleting short links.
///
/// Holds no mutable state of its own. Code uniqueness and click counting are
/// delegated to the repository, so any number of requests may share one
/// instance.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    generation_attempts: usize,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self {
            link_repository,
            generation_attempts: DEFAULT_GENERATION_ATTEMPTS,
        }
    }

    /// Sets how many generated codes are tried before giving up (minimum 1).
    pub fn with_generation_attempts(mut self, attempts: usize) -> Self {
        self.generation_attempts = attempts.max(1);
        self
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `target_url` - Absolute `http`/`https` URL, stored verbatim
    /// - `requested_code` - Optional custom code; `None` or an empty string
    ///   means a 7-character code is generated
    ///
    /// # Collisions
    ///
    /// A taken custom code is rejected immediately. A taken generated code is
    /// replaced by a fresh one, up to the configured number of attempts. In
    /// both cases a duplicate-key failure from the store is treated exactly
    /// like a failed existence check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or custom code is invalid.
    ///
    /// Returns [`AppError::Conflict`] if the custom code is taken, or if every
    /// generated code collided.
    ///
    /// Returns [`AppError::Store`] on database errors.
    pub async fn create_link(
        &self,
        target_url: String,
        requested_code: Option<String>,
    ) -> Result<Link, AppError> {
        validate_target_url(&target_url)?;

        match requested_code.filter(|code| !code.is_empty()) {
            Some(code) => self.create_with_custom_code(target_url, code).await,
            None => self.create_with_generated_code(target_url).await,
        }
    }

    async fn create_with_custom_code(
        &self,
        target_url: String,
        code: String,
    ) -> Result<Link, AppError> {
        validate_custom_code(&code)?;

        if self.link_repository.find_by_code(&code).await?.is_some() {
            return Err(AppError::conflict(CODE_EXISTS_MESSAGE));
        }

        let link = self
            .link_repository
            .create(NewLink { code, target_url })
            .await?;

        info!(code = %link.code, "Link created with custom code");
        Ok(link)
    }

    async fn create_with_generated_code(&self, target_url: String) -> Result<Link, AppError> {
        for attempt in 1..=self.generation_attempts {
            let code = generate_code();

            if self.link_repository.find_by_code(&code).await?.is_some() {
                debug!(attempt, code = %code, "Generated code already in use");
                continue;
            }

            let new_link = NewLink {
                code,
                target_url: target_url.clone(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => {
                    info!(code = %link.code, "Link created with generated code");
                    return Ok(link);
                }
                Err(AppError::Conflict(_)) => {
                    debug!(attempt, "Generated code taken concurrently");
                }
                Err(e) => return Err(e),
            }
        }

        warn!(
            attempts = self.generation_attempts,
            "Could not find a free generated code"
        );
        Err(AppError::conflict(CODE_EXISTS_MESSAGE))
    }

    /// Resolves a code to its target URL and records one click.
    ///
    /// Lookup and increment are a single store operation, and the click is
    /// committed before this returns, so a redirect is only issued for visits
    /// that were counted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code; nothing is
    /// counted then.
    ///
    /// Returns [`AppError::Store`] on database errors.
    pub async fn resolve_and_count(&self, code: &str) -> Result<String, AppError> {
        self.link_repository
            .record_click(code)
            .await?
            .ok_or_else(|| AppError::not_found(LINK_NOT_FOUND_MESSAGE))
    }

    /// Retrieves a link by its exact code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(LINK_NOT_FOUND_MESSAGE))
    }

    /// Lists all links in the given order.
    pub async fn list_links(&self, order: LinkOrder) -> Result<Vec<Link>, AppError> {
        self.link_repository.list(order).await
    }

    /// Permanently deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if !self.link_repository.delete_by_code(code).await? {
            return Err(AppError::not_found(LINK_NOT_FOUND_MESSAGE));
        }

        info!(code = %code, "Link deleted");
        Ok(())
    }

    /// Returns the number of links and the sum of their clicks.
    pub async fn totals(&self) -> Result<LinkTotals, AppError> {
        self.link_repository.totals().await
    }

    /// Checks that the store answers.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}
