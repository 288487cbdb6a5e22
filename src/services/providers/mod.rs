/// Employee data provider abstraction
///
/// The engine depends only on the `EmployeeRecord` shape, not on any
/// particular transport; any fetch mechanism yielding that structure can be
/// substituted (the integration tests use an in-memory stub).
use crate::{error::AppResult, models::EmployeeRecord};

pub mod employee_api;

/// Trait for upstream sources of employee course data
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait EmployeeDataProvider: Send + Sync {
    /// Fetch the full collection of employee course records
    ///
    /// Read-only; called once per recommendation request so that every
    /// request computes against the current upstream truth.
    async fn fetch_employees(&self) -> AppResult<Vec<EmployeeRecord>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
