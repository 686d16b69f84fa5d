pub mod grid;
pub mod picker;

use iced::widget::{container, vertical_space, Column};
use iced::{Alignment, Element, Length};

use crate::app::{App, Message};
use crate::theme;

impl App {
    /// Card rows split around the picker: the first half above, the rest below.
    pub fn view(&self) -> Element<'_, Message> {
        let m = self.metrics;
        let rows = self.pool.rows();
        let (top, bottom) = rows.split_at(rows.len().div_ceil(2));

        let mut content = Column::new().spacing(m.section_spacing).align_x(Alignment::Center);
        for row in top {
            content = content.push(self.view_card_row(row));
        }
        content = content
            .push(vertical_space())
            .push(self.view_picker())
            .push(vertical_space());
        for row in bottom {
            content = content.push(self.view_card_row(row));
        }

        container(content.width(Length::Fill).height(Length::Fill))
            .padding(m.margin)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::background)
            .into()
    }
}
