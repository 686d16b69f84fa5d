use iced::mouse::Interaction;
use iced::widget::{button, container, image, mouse_area, text, Row};
use iced::{ContentFit, Element, Length};
use mapdice_core::{MapId, Visual};

use crate::app::{App, Message};
use crate::theme;

impl App {
    pub fn view_card_row(&self, row: &[MapId]) -> Element<'_, Message> {
        let cards = row.iter().map(|&id| self.view_card(id));
        Row::with_children(cards)
            .spacing(self.metrics.card_spacing)
            .into()
    }

    fn view_card(&self, id: MapId) -> Element<'_, Message> {
        let visual = self
            .pool
            .get(id)
            .map(|item| item.visual())
            .unwrap_or(Visual::Normal);

        let card = button(self.card_face(id, visual))
            .padding(0)
            .style(theme::card_button)
            .on_press(Message::CardToggled(id));

        mouse_area(card).interaction(Interaction::Pointer).into()
    }

    /// The image for a map, or a named placeholder if it failed to load.
    pub fn card_face(&self, id: MapId, visual: Visual) -> Element<'_, Message> {
        let m = self.metrics;

        if let Some(handle) = self.images.map(id, visual) {
            return image(handle.clone())
                .width(m.card_width)
                .height(m.card_height)
                .content_fit(ContentFit::Contain)
                .into();
        }

        let name = self.pool.get(id).map(|item| item.name()).unwrap_or("?");
        container(
            text(name)
                .size(m.card_height * 0.18)
                .color(theme::placeholder_text(visual)),
        )
        .center_x(Length::Fixed(m.card_width))
        .center_y(Length::Fixed(m.card_height))
        .style(move |_| theme::placeholder(visual))
        .into()
    }
}
