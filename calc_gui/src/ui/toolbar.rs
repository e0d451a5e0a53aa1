//! Toolbar component
//!
//! Title row with Clear and theme buttons, followed by the intro text and
//! data source links.

use iced::widget::{button, column, row, text, Row, Space};
use iced::{Alignment, Element, Length, Padding};

use calc_core::sources::{DATA_SOURCES, INTRO};

use crate::Message;

/// Render the application header with title and actions
pub fn view_header(dark_mode: bool) -> Element<'static, Message> {
    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };

    row![
        text("Material Estimator").size(24),
        Space::new().width(Length::Fill),
        button(text("Clear").size(11))
            .on_press(Message::ClearForm)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
        button(text(theme_label).size(11))
            .on_press(Message::ToggleDarkMode)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .spacing(4)
    .align_y(Alignment::Center)
    .into()
}

/// Render the intro text and a link button per data source
pub fn view_sources() -> Element<'static, Message> {
    let links = DATA_SOURCES.iter().fold(Row::new().spacing(4), |links, source| {
        links.push(
            button(text(source.label).size(11))
                .on_press(Message::OpenLink(source.url))
                .padding(Padding::from([2, 4]))
                .style(button::text),
        )
    });

    column![
        text(INTRO).size(11).color([0.5, 0.5, 0.5]),
        links.align_y(Alignment::Center),
    ]
    .spacing(2)
    .into()
}
