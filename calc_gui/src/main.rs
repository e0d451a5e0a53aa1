//! # Material Estimator GUI
//!
//! Graphical front end for the material estimator, built with Iced.
//! Pick a task, enter the area (and tile size for flooring), press
//! Estimate and the right-hand panel lists the materials to buy.
//!
//! Settings are read from the JSON file named by `ESTIMATOR_CONFIG`, if set.

mod links;
mod ui;

use std::path::Path;

use iced::widget::{column, row, rule};
use iced::{Element, Length, Size, Theme};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use calc_core::calculations::Task;
use calc_core::form::EstimatorForm;
use calc_core::settings::{self, Settings};

/// Environment variable naming the settings file
const CONFIG_ENV: &str = "ESTIMATOR_CONFIG";

pub fn main() -> iced::Result {
    let loaded = match std::env::var_os(CONFIG_ENV) {
        Some(path) => settings::load_settings(Path::new(&path)),
        None => Ok(Settings::default()),
    };
    let (settings, load_error) = match loaded {
        Ok(s) => (s, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    init_tracing(&settings.log_filter);
    if let Some(e) = load_error {
        warn!(error = %e, "using default settings");
    }

    iced::application(move || App::new(&settings), App::update, App::view)
        .title("Material Estimator")
        .theme(App::theme)
        .window_size(Size::new(640.0, 480.0))
        .run()
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

/// Application state. The form owns every user-entered value.
pub struct App {
    pub form: EstimatorForm,
    pub error_message: Option<String>,
    pub status: String,
    pub dark_mode: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    TaskSelected(Task),
    AreaChanged(String),
    TileLengthChanged(String),
    TileWidthChanged(String),
    Estimate,
    ClearForm,
    ToggleDarkMode,
    OpenLink(&'static str),
}

impl App {
    fn new(settings: &Settings) -> Self {
        App {
            form: EstimatorForm::new(),
            error_message: None,
            status: "Ready".to_string(),
            dark_mode: settings.dark_mode,
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::TaskSelected(task) => {
                self.form.set_task(task);
                self.error_message = None;
                self.status = format!("Task: {}", task);
            }
            Message::AreaChanged(value) => {
                self.form.set_area(value);
                self.error_message = None;
            }
            Message::TileLengthChanged(value) => {
                self.form.set_tile_length(value);
                self.error_message = None;
            }
            Message::TileWidthChanged(value) => {
                self.form.set_tile_width(value);
                self.error_message = None;
            }
            Message::Estimate => match self.form.submit() {
                Ok(result) => {
                    self.status = format!("Estimated {} materials", result.len());
                    self.error_message = None;
                }
                Err(e) => {
                    self.status = e.to_string();
                    self.error_message = Some(e.user_message());
                }
            },
            Message::ClearForm => {
                self.form.clear();
                self.error_message = None;
                self.status = "Ready".to_string();
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
            }
            Message::OpenLink(url) => {
                info!(url, "opening data source");
                links::open_url(url);
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        column![
            ui::toolbar::view_header(self.dark_mode),
            ui::toolbar::view_sources(),
            rule::horizontal(1),
            row![
                ui::input_panel::view_input_panel(self),
                ui::results_panel::view_results_panel(self),
            ]
            .spacing(6)
            .height(Length::Fill),
            ui::status_bar::view_status_bar(&self.status, self.form.phase()),
        ]
        .spacing(6)
        .padding(10)
        .into()
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
