//! Input Panel (Left Side)
//!
//! Task picker and area field, plus tile length/width when the task is
//! flooring. The Estimate button submits the form.

use iced::widget::{button, column, container, pick_list, row, scrollable, text, text_input, Space};
use iced::{Alignment, Element, Length, Padding};

use calc_core::calculations::Task;

use crate::{App, Message};

const LABEL_WIDTH: f32 = 140.0;

/// Render the input panel
pub fn view_input_panel(app: &App) -> Element<'_, Message> {
    let form = &app.form;

    let task_picker = row![
        text("Select Task:").size(11).width(Length::Fixed(LABEL_WIDTH)),
        pick_list(&Task::ALL[..], form.task(), Message::TaskSelected)
            .placeholder("Select a task")
            .width(Length::Fill)
            .text_size(11),
    ]
    .align_y(Alignment::Center);

    let mut fields = column![
        text("Inputs").size(14),
        Space::new().height(8),
        task_picker,
        labeled_input("Enter Area (sq ft):", "e.g., 100", form.area(), Message::AreaChanged),
    ]
    .spacing(6);

    if form.requires_tile_dimensions() {
        fields = fields
            .push(labeled_input(
                "Enter Tile Length (in):",
                "e.g., 12",
                form.tile_length(),
                Message::TileLengthChanged,
            ))
            .push(labeled_input(
                "Enter Tile Width (in):",
                "e.g., 12",
                form.tile_width(),
                Message::TileWidthChanged,
            ));
    }

    let fields = fields.push(Space::new().height(10)).push(
        button(text("Estimate").size(12))
            .on_press(Message::Estimate)
            .width(Length::Fill)
            .padding(Padding::from([6, 12]))
            .style(button::primary),
    );

    container(scrollable(fields.padding(8)))
        .width(Length::FillPortion(60))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Helper to create a labeled text input
fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(LABEL_WIDTH)),
        text_input(placeholder, value)
            .on_input(on_change)
            .on_submit(Message::Estimate)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
