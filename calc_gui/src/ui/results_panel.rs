//! Results Panel (Right Side)
//!
//! - Error -> validation message
//! - Result -> one `Material: quantity` row per material
//! - Otherwise -> hint text

use iced::widget::{column, container, row, scrollable, text, Column, Space};
use iced::{Element, Length};

use calc_core::calculations::EstimateResult;

use crate::{App, Message};

/// Render the results panel based on the current form state
pub fn view_results_panel(app: &App) -> Element<'_, Message> {
    let content: Column<'_, Message> = if let Some(ref error) = app.error_message {
        column![
            text("Error").size(14),
            Space::new().height(8),
            text(error).size(12).color([0.8, 0.2, 0.2]),
        ]
    } else if let Some(result) = app.form.result() {
        view_result(result)
    } else {
        column![
            text("Select a task, fill in the fields").size(11).color([0.5, 0.5, 0.5]),
            text("and press Estimate.").size(11).color([0.5, 0.5, 0.5]),
        ]
    };

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(40))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_result(result: &EstimateResult) -> Column<'_, Message> {
    let rows = result.iter().fold(column![].spacing(4), |rows, item| {
        rows.push(row![
            text(format!("{}:", item.material.display_name())).size(12),
            Space::new().width(Length::Fill),
            text(item.quantity.to_string()).size(12),
        ])
    });

    column![
        text("Estimated Materials:").size(14),
        Space::new().height(8),
        rows,
    ]
}
