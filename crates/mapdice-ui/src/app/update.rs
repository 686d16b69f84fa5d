use iced::Task;
use mapdice_core::{Area, GridMetrics, PressOutcome, TickOutcome};

use super::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CardToggled(id) => {
                self.pool.toggle(id);
            }

            Message::PickerPressed => {
                match self.picker.press(&self.pool, &mut self.rng, &mut self.timer) {
                    PressOutcome::Started { eligible, .. } => {
                        tracing::info!("Rolling over {} maps", eligible);
                    }
                    PressOutcome::NoEligible => {
                        tracing::info!("Every map is excluded, nothing to roll");
                    }
                    PressOutcome::Busy | PressOutcome::Reset => {}
                }
            }

            Message::AnimationTick => {
                let outcome = self.picker.tick(&mut self.rng, &mut self.timer);
                if let TickOutcome::Revealed(id) = outcome {
                    if let Some(item) = self.pool.get(id) {
                        tracing::info!("Picked {}", item.name());
                    }
                }
            }

            Message::WindowResized(size) => {
                self.metrics = GridMetrics::fit(
                    Area::new(size.width, size.height),
                    self.pool.widest_row(),
                    self.pool.row_count(),
                );
            }
        }

        Task::none()
    }
}
