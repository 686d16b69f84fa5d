//! Sizing the grid to the window.
//!
//! Cards are 300x169 at most and the dice 96x96. When the available area
//! is too small for a row of cards plus the reveal card in the middle,
//! everything scales down together, keeping the card aspect ratio.

/// Base card size in logical pixels.
pub const CARD_WIDTH: f32 = 300.0;
pub const CARD_HEIGHT: f32 = 169.0;

/// Base size of the ready glyph.
pub const DICE_SIZE: f32 = 96.0;

/// Outer window margin.
pub const MARGIN: f32 = 10.0;

/// Gap between cards in a row.
pub const CARD_SPACING: f32 = 10.0;

/// Gap between the rows and the picker.
pub const SECTION_SPACING: f32 = 40.0;

/// Smallest width a card is shrunk to.
const MIN_CARD_WIDTH: f32 = 48.0;

/// Drawing area available to the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    pub width: f32,
    pub height: f32,
}

impl Area {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Computed sizes for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub card_width: f32,
    pub card_height: f32,
    pub dice_size: f32,
    pub margin: f32,
    pub card_spacing: f32,
    pub section_spacing: f32,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self::scaled(1.0)
    }
}

impl GridMetrics {
    fn scaled(scale: f32) -> Self {
        Self {
            card_width: CARD_WIDTH * scale,
            card_height: CARD_HEIGHT * scale,
            dice_size: DICE_SIZE * scale,
            margin: MARGIN,
            card_spacing: CARD_SPACING,
            section_spacing: SECTION_SPACING,
        }
    }

    /// Fits `rows` rows of up to `per_row` cards plus the reveal card into `area`.
    pub fn fit(area: Area, per_row: usize, rows: usize) -> Self {
        let per_row = per_row.max(1) as f32;
        // The middle picker is one more card-high band.
        let bands = rows.max(1) as f32 + 1.0;

        let usable_width = area.width - 2.0 * MARGIN - CARD_SPACING * (per_row - 1.0);
        let width_limit = usable_width / per_row;

        let usable_height = area.height - 2.0 * MARGIN - SECTION_SPACING * (bands - 1.0);
        let height_limit = usable_height / bands * (CARD_WIDTH / CARD_HEIGHT);

        let card_width = width_limit
            .min(height_limit)
            .min(CARD_WIDTH)
            .max(MIN_CARD_WIDTH);

        Self::scaled(card_width / CARD_WIDTH)
    }
}
