//! Application state and core logic

use crate::config::ReportConfig;
use crate::platform::SHORTCUT_MODIFIERS;
use crate::report::{validate, write_xlsx, ImageAttachment};
use crate::state::{AppState, Focus, Notification, Overlay};
use crate::submit::{submit_report, ReportSink, SubmitError};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

const LOCKED_MESSAGE: &str = "Preencha o número da obra para gerar o relatório.";
const BUSY_MESSAGE: &str = "Envio em andamento, aguarde.";
const SUBMIT_SUCCESS: &str = "Dados enviados com sucesso!";
const SUBMIT_FAILURE: &str = "Erro ao enviar dados. Tente novamente.";
const EXPORT_SUCCESS: &str = "Relatório XLSX gerado com sucesso!";
const EXPORT_FAILURE: &str = "Erro ao gerar o relatório XLSX.";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Destination for submitted reports
    sink: Arc<dyn ReportSink>,
    /// Directory receiving xlsx exports
    export_dir: PathBuf,
    /// In-flight submission task
    pending: Option<JoinHandle<Result<(), SubmitError>>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &ReportConfig, sink: Arc<dyn ReportSink>) -> Self {
        Self {
            state: AppState::new(config.roster()),
            sink,
            export_dir: config.export_dir(),
            pending: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-frame housekeeping
    pub fn tick(&mut self) {
        self.state.expire_notification();
    }

    /// Apply the submission result if the task has completed
    pub async fn poll_submission(&mut self) {
        if self.pending.as_ref().is_some_and(|h| h.is_finished()) {
            self.finish_submission().await;
        }
    }

    /// Wait for the in-flight submission and apply its result
    pub async fn finish_submission(&mut self) {
        let Some(handle) = self.pending.take() else {
            return;
        };
        self.state.submitting = false;

        match handle.await {
            Ok(Ok(())) => {
                info!("Report submitted, resetting form");
                self.state.notify(Notification::success(SUBMIT_SUCCESS));
                self.state.form.reset();
            }
            Ok(Err(err)) => {
                warn!(error = %err, "Report submission failed");
                self.state.notify(Notification::error(err.user_message()));
            }
            Err(err) => {
                error!(error = %err, "Submission task failed");
                self.state.notify(Notification::error(SUBMIT_FAILURE));
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if matches!(self.state.overlay, Overlay::ImagePrompt { .. }) {
            self.handle_image_prompt_key(key);
            return Ok(());
        }

        if key.modifiers.intersects(SHORTCUT_MODIFIERS) {
            match key.code {
                KeyCode::Char('q') => self.quit = true,
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('e') => self.export(),
                KeyCode::Char('n') if self.state.form.is_unlocked() => {
                    self.state.form.add_labor_item()
                }
                KeyCode::Char('d') => {
                    if let Some(index) = self.state.form.focus.labor_index() {
                        self.state.form.remove_labor_item(index);
                    }
                }
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab => {
                self.state.form.next_focus();
                return Ok(());
            }
            KeyCode::BackTab => {
                self.state.form.prev_focus();
                return Ok(());
            }
            KeyCode::Esc => {
                self.state.notification = None;
                return Ok(());
            }
            _ => {}
        }

        self.handle_form_key(key);
        Ok(())
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        match form.focus {
            Focus::WorkOrder | Focus::LaborCode(_) | Focus::LaborQuantity(_) => match key.code {
                KeyCode::Enter => form.next_focus(),
                KeyCode::Backspace => {
                    if let Some(field) = form.active_text_field_mut() {
                        field.pop_char();
                    }
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                    if let Some(field) = form.active_text_field_mut() {
                        field.push_char(c);
                    }
                }
                _ => {}
            },
            Focus::WorkType => match key.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                    form.move_work_type_cursor()
                }
                KeyCode::Char(' ') | KeyCode::Enter => form.select_work_type(),
                _ => {}
            },
            Focus::Collaborators => match key.code {
                KeyCode::Left | KeyCode::Up => form.prev_collaborator(),
                KeyCode::Right | KeyCode::Down => form.next_collaborator(),
                KeyCode::Char(' ') | KeyCode::Enter => form.toggle_collaborator(),
                _ => {}
            },
            Focus::Images => match key.code {
                KeyCode::Enter | KeyCode::Char('a') => {
                    self.state.overlay = Overlay::ImagePrompt {
                        input: String::new(),
                    }
                }
                KeyCode::Up | KeyCode::Left => form.prev_image(),
                KeyCode::Down | KeyCode::Right => form.next_image(),
                KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('x') => {
                    if let Some(image) = form.remove_selected_image() {
                        info!(image = %image.name, "Removed image");
                    }
                }
                _ => {}
            },
            Focus::LaborAction(index) => match key.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => {
                    form.toggle_action(index)
                }
                _ => {}
            },
            Focus::AddItem => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    form.add_labor_item();
                }
            }
            Focus::Export => {
                if key.code == KeyCode::Enter {
                    self.export();
                }
            }
            Focus::Submit => {
                if key.code == KeyCode::Enter {
                    self.submit();
                }
            }
        }
    }

    fn handle_image_prompt_key(&mut self, key: KeyEvent) {
        let Overlay::ImagePrompt { input } = &mut self.state.overlay else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.state.overlay = Overlay::None,
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) => input.push(c),
            KeyCode::Enter => {
                let path = clean_path_input(input);
                self.state.overlay = Overlay::None;
                if !path.is_empty() {
                    self.attach_image(&path);
                }
            }
            _ => {}
        }
    }

    /// Attach an image file to the report
    pub fn attach_image(&mut self, path: &str) {
        match ImageAttachment::from_path(path) {
            Ok(image) => {
                info!(image = %image.name, "Attached image");
                self.state.form.attach_image(image);
            }
            Err(err) => self.state.notify(Notification::error(err.to_string())),
        }
    }

    /// Validate and start submitting the report in the background
    pub fn submit(&mut self) {
        if self.state.submitting {
            self.state.notify(Notification::error(BUSY_MESSAGE));
            return;
        }

        let report = self.state.form.snapshot();
        if !report.is_unlocked() {
            self.state.notify(Notification::error(LOCKED_MESSAGE));
            return;
        }
        if let Err(err) = validate(&report) {
            self.state.notify(Notification::error(err.to_string()));
            return;
        }

        self.state.submitting = true;
        let sink = Arc::clone(&self.sink);
        self.pending = Some(tokio::spawn(async move {
            submit_report(sink.as_ref(), &report).await
        }));
    }

    /// Export the current report as an xlsx file
    pub fn export(&mut self) {
        let report = self.state.form.snapshot();
        if !report.is_unlocked() {
            self.state.notify(Notification::error(LOCKED_MESSAGE));
            return;
        }

        match write_xlsx(&report, &self.export_dir) {
            Ok(path) => {
                info!(path = %path.display(), "Exported report");
                self.state.last_export = Some(path.display().to_string());
                self.state.notify(Notification::success(EXPORT_SUCCESS));
            }
            Err(err) => {
                error!(error = %err, "Failed to generate xlsx");
                self.state.notify(Notification::error(EXPORT_FAILURE));
            }
        }
    }
}

/// Strip whitespace and the quotes terminals add to dropped paths
fn clean_path_input(input: &str) -> String {
    input
        .trim()
        .trim_matches(|c| c == '\'' || c == '"')
        .to_string()
}
