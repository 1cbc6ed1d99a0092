//! Repository trait for short link data access.

use crate::domain::entities::{Link, LinkTotals, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Sort order for link listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkOrder {
    /// Most recently created first.
    #[default]
    Newest,
    /// Highest click count first, newest first among equal counts.
    MostClicked,
}

/// Repository interface for managing short links.
///
/// All cross-request consistency is delegated to the store: code uniqueness is
/// enforced by a unique constraint and click counting by a single atomic
/// update. Callers never read-modify-write a counter.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its exact, case-sensitive code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Inserts a new link with zero clicks and no last click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken, including
    /// when another request inserted it after the caller's existence check.
    ///
    /// Returns [`AppError::Store`] on other database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Atomically increments `clicks`, sets `last_clicked` to now and returns
    /// the target URL, all in one statement.
    ///
    /// Returns `Ok(None)` if no link has this code; nothing is counted then.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn record_click(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Lists every link in the requested order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn list(&self, order: LinkOrder) -> Result<Vec<Link>, AppError>;

    /// Permanently removes a link.
    ///
    /// Returns `Ok(true)` if a link was deleted, `Ok(false)` if none matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn delete_by_code(&self, code: &str) -> Result<bool, AppError>;

    /// Counts links and sums their clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn totals(&self) -> Result<LinkTotals, AppError>;

    /// Runs a trivial query to confirm the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store does not answer.
    async fn ping(&self) -> Result<(), AppError>;
}
