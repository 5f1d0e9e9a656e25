//! Dashboard state and its transitions. User actions and backend events go
//! in, follow-up backend commands come out; every mutation of the record store
//! or the query rebuilds the view.

use chrono::{DateTime, Local};
use client_core::{
    render_dashboard, views::CREATE_SUCCESS_MESSAGE, DashboardView, RecordStore,
};
use shared::domain::EmployeeForm;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{context_label, err_label, UiEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    AddEmployee,
    Employees,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Dashboard, Section::AddEmployee, Section::Employees];

    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::AddEmployee => "Add Employee",
            Section::Employees => "Employees",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: FormMessageKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Navigate(Section),
    EditQuery(String),
    SubmitForm,
    DeleteEmployee(String),
    Reload,
}

pub struct DashboardState {
    store: RecordStore,
    query: String,
    section: Section,
    form: EmployeeForm,
    form_message: Option<FormMessage>,
    status: String,
    view: DashboardView,
    last_loaded: Option<DateTime<Local>>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            store: RecordStore::new(),
            query: String::new(),
            section: Section::Dashboard,
            form: EmployeeForm::default(),
            form_message: None,
            status: "Loading employees...".to_string(),
            view: DashboardView::default(),
            last_loaded: None,
        }
    }

    /// Commands to issue once at startup.
    pub fn initial_commands() -> Vec<BackendCommand> {
        vec![BackendCommand::LoadEmployees]
    }

    pub fn apply_action(&mut self, action: UserAction) -> Vec<BackendCommand> {
        match action {
            UserAction::Navigate(section) => {
                self.section = section;
                Vec::new()
            }
            UserAction::EditQuery(query) => {
                self.query = query;
                self.rerender();
                Vec::new()
            }
            UserAction::SubmitForm => {
                tracing::info!(emp_id = %self.form.emp_id, "submitting employee form");
                self.status = "Adding employee...".to_string();
                vec![BackendCommand::CreateEmployee {
                    form: self.form.clone(),
                }]
            }
            UserAction::DeleteEmployee(id) => {
                let removed = self.store.remove_by_id(&id);
                tracing::info!(emp_id = %id, removed, "removed employee locally");
                self.status = format!("Removed {removed} record(s) with id {id} from this view");
                self.rerender();
                Vec::new()
            }
            UserAction::Reload => {
                self.status = "Reloading employees...".to_string();
                vec![BackendCommand::LoadEmployees]
            }
        }
    }

    pub fn apply_event(&mut self, event: UiEvent) -> Vec<BackendCommand> {
        match event {
            UiEvent::Info(message) => {
                self.status = message;
                Vec::new()
            }
            UiEvent::EmployeesLoaded(records) => {
                self.store.replace(records);
                self.last_loaded = Some(Local::now());
                self.status = format!("Loaded {} employee(s)", self.store.len());
                self.rerender();
                Vec::new()
            }
            UiEvent::EmployeeCreated => {
                self.form_message = Some(FormMessage {
                    kind: FormMessageKind::Success,
                    text: CREATE_SUCCESS_MESSAGE.to_string(),
                });
                self.form.reset();
                self.status = "Employee added; reloading list".to_string();
                vec![BackendCommand::LoadEmployees]
            }
            UiEvent::CreateFailed(err) => {
                self.form_message = Some(FormMessage {
                    kind: FormMessageKind::Error,
                    text: err.form_message().to_string(),
                });
                self.status = format!(
                    "{} error ({}): {}",
                    err_label(err.category()),
                    context_label(err.context()),
                    err.message()
                );
                Vec::new()
            }
            UiEvent::Error(err) => {
                self.status = format!(
                    "{} error ({}): {}",
                    err_label(err.category()),
                    context_label(err.context()),
                    err.message()
                );
                Vec::new()
            }
        }
    }

    fn rerender(&mut self) {
        self.view = render_dashboard(&self.store, &self.query);
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn form_mut(&mut self) -> &mut EmployeeForm {
        &mut self.form
    }

    pub fn form_message(&self) -> Option<&FormMessage> {
        self.form_message.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut String {
        &mut self.status
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn last_loaded(&self) -> Option<DateTime<Local>> {
        self.last_loaded
    }
}

#[cfg(test)]
#[path = "../tests/reducer_tests.rs"]
mod tests;
