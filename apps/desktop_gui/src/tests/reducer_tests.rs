use super::*;
use crate::controller::events::{UiError, UiErrorCategory, UiErrorContext};
use client_core::views::CREATE_BACKEND_ERROR_MESSAGE;
use shared::{domain::EmployeeRecord, error::RemoteError};

fn record(id: &str, name: &str, status: &str, net_pay: f64) -> EmployeeRecord {
    EmployeeRecord {
        emp_id: Some(id.to_string()),
        emp_name: Some(name.to_string()),
        emp_status: Some(status.to_string()),
        emp_net_pay: Some(net_pay),
        ..Default::default()
    }
}

fn loaded(records: Vec<EmployeeRecord>) -> DashboardState {
    let mut state = DashboardState::new();
    assert!(state.apply_event(UiEvent::EmployeesLoaded(records)).is_empty());
    state
}

#[test]
fn starts_on_dashboard_with_empty_views_and_requests_a_load() {
    let state = DashboardState::new();
    assert_eq!(state.section(), Section::Dashboard);
    assert_eq!(state.view().cards.total, 0);
    assert!(state.view().table.is_empty());
    assert_eq!(DashboardState::initial_commands(), vec![BackendCommand::LoadEmployees]);
}

#[test]
fn navigation_keeps_exactly_one_section_active() {
    let mut state = DashboardState::new();
    for section in [Section::Employees, Section::AddEmployee, Section::Dashboard, Section::Employees] {
        assert!(state.apply_action(UserAction::Navigate(section)).is_empty());
        assert_eq!(state.section(), section);
    }
}

#[test]
fn loading_one_employee_updates_cards() {
    let state = loaded(vec![record("E1", "Alice", "Active", 5000.0)]);
    let cards = &state.view().cards;
    assert_eq!(cards.total, 1);
    assert_eq!(cards.active, 1);
    assert_eq!(cards.average_pay, 5000);
    assert_eq!(cards.average_pay_label, "₹5,000");
    assert!(state.last_loaded().is_some());
}

#[test]
fn reload_replaces_instead_of_merging() {
    let mut state = loaded(vec![record("E1", "Alice", "Active", 1.0)]);
    state.apply_event(UiEvent::EmployeesLoaded(vec![record("E2", "Bob", "Inactive", 2.0)]));
    let ids: Vec<&str> = state.store().get().iter().map(EmployeeRecord::id).collect();
    assert_eq!(ids, vec!["E2"]);
    assert_eq!(state.view().cards.active, 0);
}

#[test]
fn search_narrows_only_the_full_table() {
    let mut state = loaded(vec![
        record("E1", "Alice", "Active", 100.0),
        record("E2", "Bob", "Active", 300.0),
    ]);
    let cards_before = state.view().cards.clone();

    assert!(state.apply_action(UserAction::EditQuery("  bOb ".into())).is_empty());
    assert_eq!(state.query(), "  bOb ");
    let table = &state.view().table;
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].id, "E2");
    assert_eq!(table[0].index, 1);
    assert_eq!(state.view().cards, cards_before);
    assert_eq!(state.view().recent.len(), 2);

    state.apply_action(UserAction::EditQuery(String::new()));
    assert_eq!(state.view().table.len(), 2);
}

#[test]
fn delete_is_local_and_removes_duplicates() {
    let mut state = loaded(vec![
        record("E1", "Alice", "Active", 100.0),
        record("E2", "Bob", "Active", 300.0),
        record("E1", "Alice (dup)", "Active", 100.0),
    ]);

    let commands = state.apply_action(UserAction::DeleteEmployee("E1".into()));
    assert!(commands.is_empty(), "delete must not reach the backend");
    assert_eq!(state.store().len(), 1);
    assert_eq!(state.view().cards.total, 1);
    assert_eq!(state.view().cards.average_pay, 300);
    assert_eq!(state.view().recent[0].id, "E2");
}

#[test]
fn deleted_record_reappears_after_reload() {
    let server_list = vec![record("E1", "Alice", "Active", 100.0)];
    let mut state = loaded(server_list.clone());
    state.apply_action(UserAction::DeleteEmployee("E1".into()));
    assert!(state.store().is_empty());

    assert_eq!(state.apply_action(UserAction::Reload), vec![BackendCommand::LoadEmployees]);
    state.apply_event(UiEvent::EmployeesLoaded(server_list));
    assert_eq!(state.store().len(), 1);
}

#[test]
fn submit_sends_the_current_form() {
    let mut state = DashboardState::new();
    state.form_mut().emp_id = "E9".into();
    state.form_mut().emp_name = "Zed".into();
    let expected = state.form_mut().clone();

    let commands = state.apply_action(UserAction::SubmitForm);
    assert_eq!(commands, vec![BackendCommand::CreateEmployee { form: expected }]);
}

#[test]
fn successful_create_resets_form_shows_success_and_reloads() {
    let mut state = DashboardState::new();
    state.form_mut().emp_id = "E9".into();

    let commands = state.apply_event(UiEvent::EmployeeCreated);
    assert_eq!(commands, vec![BackendCommand::LoadEmployees]);
    assert_eq!(*state.form_mut(), EmployeeForm::default());
    let message = state.form_message().expect("message");
    assert_eq!(message.kind, FormMessageKind::Success);
    assert_eq!(message.text, CREATE_SUCCESS_MESSAGE);
}

#[test]
fn failed_create_keeps_form_and_does_not_reload() {
    let mut state = DashboardState::new();
    state.form_mut().emp_id = "E9".into();

    let err = UiError::from_remote(UiErrorContext::SubmitEmployee, &RemoteError::Status { status: 500 });
    let commands = state.apply_event(UiEvent::CreateFailed(err));
    assert!(commands.is_empty());
    assert_eq!(state.form_mut().emp_id, "E9");
    let message = state.form_message().expect("message");
    assert_eq!(message.kind, FormMessageKind::Error);
    assert_eq!(message.text, CREATE_BACKEND_ERROR_MESSAGE);
    assert!(state.status().contains("500"));
}

#[test]
fn each_attempt_overwrites_the_previous_message() {
    let mut state = DashboardState::new();
    let err = UiError::from_remote(
        UiErrorContext::SubmitEmployee,
        &RemoteError::Transport("refused".into()),
    );
    state.apply_event(UiEvent::CreateFailed(err));
    assert_eq!(state.form_message().map(|m| m.kind), Some(FormMessageKind::Error));

    state.apply_event(UiEvent::EmployeeCreated);
    assert_eq!(state.form_message().map(|m| m.kind), Some(FormMessageKind::Success));
}

#[test]
fn info_and_error_events_update_status_only() {
    let mut state = loaded(vec![record("E1", "Alice", "Active", 1.0)]);
    state.apply_event(UiEvent::Info("Backend worker ready".into()));
    assert_eq!(state.status(), "Backend worker ready");

    state.apply_event(UiEvent::Error(UiError::new(
        UiErrorCategory::Unknown,
        UiErrorContext::BackendStartup,
        "backend worker startup failure",
    )));
    assert!(state.status().contains("startup"));
    assert_eq!(state.store().len(), 1);
    assert!(state.form_message().is_none());
}
