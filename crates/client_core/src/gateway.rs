use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use shared::{
    domain::{EmployeeForm, EmployeeRecord},
    error::RemoteError,
};
use tracing::{error, info, warn};

use crate::settings::ClientSettings;

/// The two calls the viewer makes against the employee API.
#[async_trait]
pub trait EmployeeGateway: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<EmployeeRecord>, RemoteError>;
    async fn create(&self, form: &EmployeeForm) -> Result<(), RemoteError>;
}

pub struct HttpEmployeeGateway {
    http: Client,
    api_base: String,
}

impl HttpEmployeeGateway {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> Self {
        Self::new(settings.api_base.clone())
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn employees_url(&self) -> String {
        format!("{}/employees", self.api_base)
    }
}

#[async_trait]
impl EmployeeGateway for HttpEmployeeGateway {
    async fn fetch_all(&self) -> Result<Vec<EmployeeRecord>, RemoteError> {
        let url = self.employees_url();
        info!(%url, "fetching employees");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| RemoteError::Transport(err.to_string()))?;
        let status = response.status();
        info!(status = status.as_u16(), "employee list response");
        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| RemoteError::Transport(err.to_string()))?;
        let body: Value =
            serde_json::from_slice(&bytes).map_err(|err| RemoteError::Decode(err.to_string()))?;

        let records = records_from_body(body);
        info!(count = records.len(), "employees loaded");
        Ok(records)
    }

    async fn create(&self, form: &EmployeeForm) -> Result<(), RemoteError> {
        let url = self.employees_url();
        info!(%url, emp_id = %form.emp_id, "posting employee");

        let response = self
            .http
            .post(&url)
            .json(form)
            .send()
            .await
            .map_err(|err| RemoteError::Transport(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

/// Interprets a decoded list body. Anything other than a JSON array yields an
/// empty list rather than an error.
pub fn records_from_body(body: Value) -> Vec<EmployeeRecord> {
    match body {
        Value::Array(items) => items.into_iter().map(EmployeeRecord::from_value).collect(),
        other => {
            warn!(
                kind = json_kind(&other),
                "employee list response is not an array; treating as empty"
            );
            Vec::new()
        }
    }
}

/// Fetches the list, degrading any failure to an empty list.
pub async fn load_or_empty<G>(gateway: &G) -> Vec<EmployeeRecord>
where
    G: EmployeeGateway + ?Sized,
{
    match gateway.fetch_all().await {
        Ok(records) => records,
        Err(err) => {
            error!("error loading employees: {err}");
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "tests/gateway_tests.rs"]
mod tests;
