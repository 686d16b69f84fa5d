use iced::mouse::Interaction;
use iced::widget::{button, container, image, mouse_area, text};
use iced::{ContentFit, Element, Length};
use mapdice_core::{Display, Visual};

use crate::app::{App, Message};
use crate::theme;

impl App {
    /// The dice control. Disabled while the animation runs.
    pub fn view_picker(&self) -> Element<'_, Message> {
        let face = match self.picker.display() {
            Display::Ready => self.dice_face(),
            Display::Flicker(id) | Display::Revealed(id) => self.card_face(id, Visual::Normal),
        };

        let on_press = self.picker_press_message();
        let interaction = if on_press.is_some() {
            Interaction::Pointer
        } else {
            Interaction::Idle
        };
        let control = button(face)
            .padding(0)
            .style(theme::card_button)
            .on_press_maybe(on_press);

        mouse_area(control).interaction(interaction).into()
    }

    /// Message sent by the picker control, `None` while it is disabled.
    pub fn picker_press_message(&self) -> Option<Message> {
        (!self.picker.is_animating()).then_some(Message::PickerPressed)
    }

    fn dice_face(&self) -> Element<'_, Message> {
        let size = self.metrics.dice_size;

        match self.images.dice() {
            Some(handle) => image(handle.clone())
                .width(size)
                .height(size)
                .content_fit(ContentFit::Cover)
                .into(),
            None => container(text("ROLL").size(size * 0.25).color(theme::colors::ACCENT))
                .center_x(Length::Fixed(size))
                .center_y(Length::Fixed(size))
                .style(|_| theme::placeholder(Visual::Normal))
                .into(),
        }
    }
}
