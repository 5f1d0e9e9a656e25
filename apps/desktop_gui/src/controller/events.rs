//! UI/backend events and error modeling for desktop GUI controller.

use client_core::views::{CREATE_BACKEND_ERROR_MESSAGE, CREATE_NETWORK_ERROR_MESSAGE};
use shared::{domain::EmployeeRecord, error::RemoteError};

#[derive(Debug, Clone)]
pub enum UiEvent {
    Info(String),
    EmployeesLoaded(Vec<EmployeeRecord>),
    EmployeeCreated,
    CreateFailed(UiError),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Backend,
    Transport,
    Decode,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    SubmitEmployee,
}

pub fn context_label(context: UiErrorContext) -> &'static str {
    match context {
        UiErrorContext::BackendStartup => "startup",
        UiErrorContext::SubmitEmployee => "add employee",
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Backend => "Backend",
        UiErrorCategory::Transport => "Network",
        UiErrorCategory::Decode => "Response",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_remote(context: UiErrorContext, err: &RemoteError) -> Self {
        let category = match err {
            RemoteError::Status { .. } => UiErrorCategory::Backend,
            RemoteError::Transport(_) => UiErrorCategory::Transport,
            RemoteError::Decode(_) => UiErrorCategory::Decode,
        };
        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    pub fn new(
        category: UiErrorCategory,
        context: UiErrorContext,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            context,
            message: message.into(),
        }
    }

    /// Line shown under the add-employee form for this failure.
    pub fn form_message(&self) -> &'static str {
        match self.category {
            UiErrorCategory::Backend => CREATE_BACKEND_ERROR_MESSAGE,
            _ => CREATE_NETWORK_ERROR_MESSAGE,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
#[path = "../tests/events_tests.rs"]
mod tests;
