//! Backend commands queued from UI to backend worker.

use shared::domain::EmployeeForm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    LoadEmployees,
    CreateEmployee { form: EmployeeForm },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadEmployees => "load_employees",
            BackendCommand::CreateEmployee { .. } => "create_employee",
        }
    }
}
