use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Status literal counted as active on the summary cards.
pub const ACTIVE_STATUS: &str = "Active";

/// Values offered by the add-employee form.
pub const STATUS_OPTIONS: [&str; 2] = [ACTIVE_STATUS, "Inactive"];

/// One employee as returned by the remote API.
///
/// Every field is optional because the payload is untrusted. Deserialization
/// never fails on a single odd field: strings accept numbers and booleans,
/// `emp_net_pay` accepts numbers and numeric strings, anything else is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub emp_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub emp_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub emp_dept: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub emp_phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub emp_salary: Option<String>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub emp_net_pay: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub emp_status: Option<String>,
}

impl EmployeeRecord {
    /// Builds a record from one element of a list payload. Elements that are
    /// not JSON objects become a record with every field absent.
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }

    pub fn id(&self) -> &str {
        self.emp_id.as_deref().unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.emp_name.as_deref().unwrap_or_default()
    }

    pub fn dept(&self) -> &str {
        self.emp_dept.as_deref().unwrap_or_default()
    }

    pub fn phone(&self) -> &str {
        self.emp_phone.as_deref().unwrap_or_default()
    }

    pub fn salary(&self) -> &str {
        self.emp_salary.as_deref().unwrap_or_default()
    }

    pub fn status(&self) -> &str {
        self.emp_status.as_deref().unwrap_or_default()
    }

    /// Net pay for arithmetic; absent counts as zero.
    pub fn net_pay(&self) -> f64 {
        self.emp_net_pay.unwrap_or(0.0)
    }

    pub fn is_active(&self) -> bool {
        self.emp_status.as_deref() == Some(ACTIVE_STATUS)
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.emp_id.as_deref() == Some(id)
    }
}

/// Flat key/value payload collected from the add-employee form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeForm {
    pub emp_id: String,
    pub emp_name: String,
    pub emp_dept: String,
    pub emp_phone: String,
    pub emp_salary: String,
    pub emp_net_pay: String,
    pub emp_status: String,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            emp_id: String::new(),
            emp_name: String::new(),
            emp_dept: String::new(),
            emp_phone: String::new(),
            emp_salary: String::new(),
            emp_net_pay: String::new(),
            emp_status: ACTIVE_STATUS.to_string(),
        }
    }
}

impl EmployeeForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|amount| amount.is_finite()))
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
