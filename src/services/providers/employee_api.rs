/// HTTP provider for the admin employee-courses endpoint
///
/// Fetches the full employee course collection in one call. No caching: the
/// recommendation pipeline deliberately recomputes from a fresh fetch on
/// every request, so stale-model concerns never arise here.
use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::EmployeeRecord,
    services::providers::EmployeeDataProvider,
};

#[derive(Clone)]
pub struct EmployeeApiProvider {
    http_client: HttpClient,
    api_url: String,
}

impl EmployeeApiProvider {
    /// Creates a provider pointed at the employee-courses endpoint
    pub fn new(api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl EmployeeDataProvider for EmployeeApiProvider {
    async fn fetch_employees(&self) -> AppResult<Vec<EmployeeRecord>> {
        let response = self.http_client.get(&self.api_url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Employee API returned status {}: {}",
                status, body
            )));
        }

        let employees: Vec<EmployeeRecord> = response.json().await?;

        tracing::info!(
            employees = employees.len(),
            provider = self.name(),
            "Employee course data fetched"
        );

        Ok(employees)
    }

    fn name(&self) -> &'static str {
        "employee-api"
    }
}
