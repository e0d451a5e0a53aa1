//! Status Bar (Bottom)
//!
//! Displays the form phase and the latest status message.

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use calc_core::form::FormPhase;

use crate::Message;

/// Render the status bar
pub fn view_status_bar(status: &str, phase: FormPhase) -> Element<'_, Message> {
    let phase_label = match phase {
        FormPhase::TaskUnset => "No task selected",
        FormPhase::TaskSelected => "Waiting for inputs",
        FormPhase::InputsEntered => "Ready to estimate",
        FormPhase::ResultDisplayed => "Estimate shown",
    };

    row![
        text(phase_label).size(10).color([0.5, 0.5, 0.5]),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
