//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{load_or_empty, EmployeeGateway};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorCategory, UiErrorContext, UiEvent};

/// Spawns the backend worker thread. Commands are handled one at a time in
/// arrival order until the UI side of the queue is dropped. Events are never
/// dropped while the UI is alive.
pub fn launch<G>(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, gateway: G)
where
    G: EmployeeGateway + 'static,
{
    thread::spawn(move || {
        if !forward(&ui_tx, UiEvent::Info("Backend worker starting...".to_string())) {
            return;
        }
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                forward(
                    &ui_tx,
                    UiEvent::Error(UiError::new(
                        UiErrorCategory::Unknown,
                        UiErrorContext::BackendStartup,
                        format!("backend worker startup failure: failed to build runtime: {err}"),
                    )),
                );
                return;
            }
        };

        runtime.block_on(async move {
            if !forward(&ui_tx, UiEvent::Info("Backend worker ready".to_string())) {
                return;
            }
            while let Ok(cmd) = cmd_rx.recv() {
                for event in handle_command(&gateway, cmd).await {
                    if !forward(&ui_tx, event) {
                        return;
                    }
                }
            }
            tracing::info!("backend worker stopped: command queue closed");
        });
    });
}

/// Blocks until the UI has room for `event`. Returns false once the UI side
/// is gone.
fn forward(ui_tx: &Sender<UiEvent>, event: UiEvent) -> bool {
    match ui_tx.send(event) {
        Ok(()) => true,
        Err(_) => {
            tracing::info!("backend worker stopped: ui event queue closed");
            false
        }
    }
}

/// Runs one command against the gateway and returns the events to forward.
pub async fn handle_command<G>(gateway: &G, cmd: BackendCommand) -> Vec<UiEvent>
where
    G: EmployeeGateway + ?Sized,
{
    match cmd {
        BackendCommand::LoadEmployees => {
            tracing::info!("backend: load_employees");
            vec![UiEvent::EmployeesLoaded(load_or_empty(gateway).await)]
        }
        BackendCommand::CreateEmployee { form } => {
            tracing::info!(emp_id = %form.emp_id, "backend: create_employee");
            match gateway.create(&form).await {
                Ok(()) => vec![UiEvent::EmployeeCreated],
                Err(err) => {
                    tracing::error!("backend: create_employee failed: {err}");
                    vec![UiEvent::CreateFailed(UiError::from_remote(
                        UiErrorContext::SubmitEmployee,
                        &err,
                    ))]
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
