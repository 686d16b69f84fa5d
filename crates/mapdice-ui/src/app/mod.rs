//! Application state and wiring.

use iced::{window, Size, Subscription, Task};
use mapdice_core::{
    AssetCatalog, Area, Config, CoreError, Display, GridMetrics, MapPool, Picker, Timer,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub mod messages;
pub mod timer;
pub mod update;
pub mod view;

pub use messages::*;
pub use timer::SubscriptionTimer;

use crate::images::ImageTable;

/// Window size before the first resize event arrives.
const INITIAL_WIDTH: f32 = 1280.0;
const INITIAL_HEIGHT: f32 = 800.0;

/// Launch options.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub config: Config,
}

/// Errors that stop the window from running.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Window error: {0}")]
    Iced(#[from] iced::Error),
}

pub struct App {
    pub pool: MapPool,
    pub picker: Picker,
    pub rng: StdRng,
    pub timer: SubscriptionTimer,
    pub images: ImageTable,
    pub metrics: GridMetrics,
    pub title: String,
}

impl App {
    pub fn new(config: &Config) -> Result<Self, CoreError> {
        let pool = config.pool()?;
        let picker = Picker::new(config.picker.schedule()?, config.picker.reveal_click);
        let rng = match config.picker.seed {
            Some(seed) => {
                tracing::info!("Using fixed seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        let images = ImageTable::load(&AssetCatalog::new(&config.assets.dir), &pool);
        let metrics = GridMetrics::fit(
            Area::new(INITIAL_WIDTH, INITIAL_HEIGHT),
            pool.widest_row(),
            pool.row_count(),
        );

        Ok(Self {
            pool,
            picker,
            rng,
            timer: SubscriptionTimer::default(),
            images,
            metrics,
            title: config.window.title.clone(),
        })
    }

    pub fn title(&self) -> String {
        match self.picker.display() {
            Display::Revealed(id) => {
                let name = self.pool.get(id).map(|m| m.name()).unwrap_or_default();
                format!("{} - {}", name, self.title)
            }
            _ => self.title.clone(),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let resize = window::resize_events().map(|(_, size)| Message::WindowResized(size));

        match self.timer.armed() {
            Some(interval) => Subscription::batch([
                resize,
                iced::time::every(interval).map(|_| Message::AnimationTick),
            ]),
            None => resize,
        }
    }
}

pub fn run(flags: Flags) -> Result<(), UiError> {
    let Flags { config } = flags;
    let app = App::new(&config)?;

    let startup = if config.window.maximized {
        window::get_oldest().and_then(|id| window::maximize(id, true))
    } else {
        Task::none()
    };

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .window_size(Size::new(INITIAL_WIDTH, INITIAL_HEIGHT))
        .theme(|_| iced::Theme::Dark)
        .antialiasing(true)
        .run_with(move || (app, startup))?;

    Ok(())
}
