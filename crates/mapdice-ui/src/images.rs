//! Pre-loaded image handles.
//!
//! ## Learning: Lookup Tables over Formatting
//!
//! Paths are resolved once at startup. Rendering a card is then an index
//! into a `Vec`, with no string building or filesystem access per frame.

use iced::widget::image::Handle;
use mapdice_core::{AssetCatalog, AssetKey, MapId, MapPool, Visual};

/// Image handles for every map visual and the dice glyph.
///
/// `None` entries are assets that were missing at startup.
#[derive(Debug, Clone, Default)]
pub struct ImageTable {
    maps: Vec<[Option<Handle>; 2]>,
    dice: Option<Handle>,
}

impl ImageTable {
    pub fn load(catalog: &AssetCatalog, pool: &MapPool) -> Self {
        let maps = pool
            .iter()
            .map(|(_, item)| {
                Visual::ALL.map(|visual| {
                    catalog
                        .resolve(AssetKey::Map { name: item.name(), visual })
                        .map(Handle::from_path)
                })
            })
            .collect();
        let dice = catalog.resolve(AssetKey::Dice).map(Handle::from_path);

        let table = Self { maps, dice };
        tracing::info!(
            "Loaded {} of {} images from {}",
            table.loaded(),
            pool.len() * 2 + 1,
            catalog.dir().display()
        );
        table
    }

    pub fn map(&self, id: MapId, visual: Visual) -> Option<&Handle> {
        self.maps.get(id.index())?[slot(visual)].as_ref()
    }

    pub fn dice(&self) -> Option<&Handle> {
        self.dice.as_ref()
    }

    /// Number of assets that were found.
    pub fn loaded(&self) -> usize {
        let maps = self.maps.iter().flatten().filter(|h| h.is_some()).count();
        maps + usize::from(self.dice.is_some())
    }
}

fn slot(visual: Visual) -> usize {
    match visual {
        Visual::Normal => 0,
        Visual::Excluded => 1,
    }
}
