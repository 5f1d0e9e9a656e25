use std::time::Duration;

use client_core::ClientSettings;
use crossbeam_channel::{Receiver, Sender};
use shared::domain::STATUS_OPTIONS;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{DashboardState, FormMessageKind, Section, UserAction};

const SUCCESS_COLOR: egui::Color32 = egui::Color32::from_rgb(0x22, 0xc5, 0x5e);
const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(0xf9, 0x73, 0x73);

pub struct DesktopGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    api_base: String,
    state: DashboardState,
}

impl DesktopGuiApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        settings: &ClientSettings,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            api_base: settings.api_base.clone(),
            state: DashboardState::new(),
        };
        for cmd in DashboardState::initial_commands() {
            app.dispatch(cmd);
        }
        app
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, self.state.status_mut());
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            for cmd in self.state.apply_event(event) {
                self.dispatch(cmd);
            }
        }
    }

    fn apply_actions(&mut self, actions: Vec<UserAction>) {
        for action in actions {
            for cmd in self.state.apply_action(action) {
                self.dispatch(cmd);
            }
        }
    }

    fn show_navigation(&self, ctx: &egui::Context, actions: &mut Vec<UserAction>) {
        egui::SidePanel::left("section_navigation")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("Employee Records");
                ui.separator();

                let current = self.state.section();
                let mut selected = current;
                for section in Section::ALL {
                    ui.selectable_value(&mut selected, section, section.label());
                }
                if selected != current {
                    actions.push(UserAction::Navigate(selected));
                }
            });
    }

    fn show_status_bar(&self, ctx: &egui::Context, actions: &mut Vec<UserAction>) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small(self.state.status());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Reload").clicked() {
                        actions.push(UserAction::Reload);
                    }
                    if let Some(loaded_at) = self.state.last_loaded() {
                        ui.small(format!("last loaded {}", loaded_at.format("%H:%M:%S")));
                    }
                    ui.small(self.api_base.as_str());
                });
            });
        });
    }

    fn show_dashboard(&self, ui: &mut egui::Ui) {
        let view = self.state.view();

        ui.heading("Overview");
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            summary_card(ui, "Total Employees", view.cards.total.to_string());
            summary_card(ui, "Active Employees", view.cards.active.to_string());
            summary_card(ui, "Average Net Pay", view.cards.average_pay_label.clone());
        });

        ui.add_space(16.0);
        ui.heading("Recent Employees");
        ui.add_space(4.0);
        if view.recent.is_empty() {
            ui.weak("No employees yet.");
            return;
        }
        egui::Grid::new("recent_employees")
            .striped(true)
            .num_columns(6)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                for header in ["ID", "Name", "Department", "Salary", "Net Pay", "Status"] {
                    ui.strong(header);
                }
                ui.end_row();
                for row in &view.recent {
                    ui.label(&row.id);
                    ui.label(&row.name);
                    ui.label(&row.dept);
                    ui.label(&row.salary);
                    ui.label(&row.net_pay);
                    ui.label(&row.status);
                    ui.end_row();
                }
            });
    }

    fn show_add_form(&mut self, ui: &mut egui::Ui, actions: &mut Vec<UserAction>) {
        ui.heading("Add Employee");
        ui.add_space(8.0);

        let form = self.state.form_mut();
        egui::Grid::new("employee_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                form_field(ui, "Employee ID", "EMP001", &mut form.emp_id);
                form_field(ui, "Name", "Full name", &mut form.emp_name);
                form_field(ui, "Department", "Engineering", &mut form.emp_dept);
                form_field(ui, "Phone", "98xxxxxxxx", &mut form.emp_phone);
                form_field(ui, "Salary", "50000", &mut form.emp_salary);
                form_field(ui, "Net Pay", "45000", &mut form.emp_net_pay);

                ui.label("Status");
                egui::ComboBox::from_id_salt("employee_status")
                    .selected_text(form.emp_status.clone())
                    .show_ui(ui, |ui| {
                        for option in STATUS_OPTIONS {
                            ui.selectable_value(&mut form.emp_status, option.to_string(), option);
                        }
                    });
                ui.end_row();
            });

        ui.add_space(8.0);
        if ui.button("Add Employee").clicked() {
            actions.push(UserAction::SubmitForm);
        }

        if let Some(message) = self.state.form_message() {
            let color = match message.kind {
                FormMessageKind::Success => SUCCESS_COLOR,
                FormMessageKind::Error => ERROR_COLOR,
            };
            ui.add_space(6.0);
            ui.colored_label(color, message.text.as_str());
        }
    }

    fn show_employee_table(&self, ui: &mut egui::Ui, actions: &mut Vec<UserAction>) {
        ui.heading("All Employees");
        ui.add_space(8.0);

        let mut query = self.state.query().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .id_salt("employee_search")
                .hint_text("Search by ID or name")
                .desired_width(320.0),
        );
        if response.changed() {
            actions.push(UserAction::EditQuery(query));
        }
        ui.add_space(8.0);

        let rows = &self.state.view().table;
        if rows.is_empty() {
            ui.weak(if self.state.store().is_empty() {
                "No employees loaded."
            } else {
                "No employees match the search."
            });
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("employee_table_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("employee_table")
                    .striped(true)
                    .num_columns(9)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        for header in [
                            "#", "ID", "Name", "Department", "Phone", "Salary", "Net Pay",
                            "Status", "Actions",
                        ] {
                            ui.strong(header);
                        }
                        ui.end_row();
                        for row in rows {
                            ui.label(row.index.to_string());
                            ui.label(&row.id);
                            ui.label(&row.name);
                            ui.label(&row.dept);
                            ui.label(&row.phone);
                            ui.label(&row.salary);
                            ui.label(&row.net_pay);
                            ui.label(&row.status);
                            match &row.delete_id {
                                Some(id) => {
                                    let delete = egui::Button::new(
                                        egui::RichText::new("Delete").color(egui::Color32::WHITE),
                                    )
                                    .fill(egui::Color32::from_rgb(0xdc, 0x26, 0x26));
                                    if ui.add(delete).clicked() {
                                        actions.push(UserAction::DeleteEmployee(id.clone()));
                                    }
                                }
                                None => {
                                    ui.add_enabled(false, egui::Button::new("Delete"));
                                }
                            }
                            ui.end_row();
                        }
                    });
            });
    }
}

fn summary_card(ui: &mut egui::Ui, title: &str, value: String) {
    egui::Frame::group(ui.style())
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(14, 10))
        .show(ui, |ui| {
            ui.set_min_width(160.0);
            ui.small(title);
            ui.heading(value);
        });
}

fn form_field(ui: &mut egui::Ui, label: &str, hint: &str, value: &mut String) {
    ui.label(label);
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(260.0),
    );
    ui.end_row();
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut actions = Vec::new();
        self.show_navigation(ctx, &mut actions);
        self.show_status_bar(ctx, &mut actions);
        egui::CentralPanel::default().show(ctx, |ui| match self.state.section() {
            Section::Dashboard => self.show_dashboard(ui),
            Section::AddEmployee => self.show_add_form(ui, &mut actions),
            Section::Employees => self.show_employee_table(ui, &mut actions),
        });
        self.apply_actions(actions);

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
