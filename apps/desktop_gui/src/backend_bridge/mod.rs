//! Bridge between the UI thread and the backend worker that owns the HTTP gateway.

pub mod commands;
pub mod runtime;
