//! The fixed set of maps shown on the grid.

use std::collections::HashSet;

use crate::item::{MapId, MapItem};
use crate::{CoreError, CoreResult};

/// Ordered maps laid out in rows.
///
/// Built once at startup. Items are never added or removed afterwards;
/// only their exclusion flags change.
#[derive(Debug, Clone)]
pub struct MapPool {
    items: Vec<MapItem>,
    row_lengths: Vec<usize>,
}

impl MapPool {
    /// Builds a pool from rows of map names.
    ///
    /// Fails on an empty roster or a repeated name. Empty rows are dropped.
    pub fn from_rows<R, S>(rows: R) -> CoreResult<Self>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items = Vec::new();
        let mut row_lengths = Vec::new();
        let mut seen = HashSet::new();

        for row in rows {
            let before = items.len();
            for name in row {
                let name: String = name.into();
                if !seen.insert(name.clone()) {
                    return Err(CoreError::DuplicateMap(name));
                }
                items.push(MapItem::new(name));
            }
            let len = items.len() - before;
            if len > 0 {
                row_lengths.push(len);
            }
        }

        if items.is_empty() {
            return Err(CoreError::EmptyRoster);
        }

        tracing::debug!("Map pool built: {} maps in {} rows", items.len(), row_lengths.len());
        Ok(Self { items, row_lengths })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: MapId) -> Option<&MapItem> {
        self.items.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (MapId, &MapItem)> {
        self.items.iter().enumerate().map(|(i, item)| (MapId(i), item))
    }

    /// Toggles exclusion of one map. Returns the new flag, or `None` for an unknown id.
    pub fn toggle(&mut self, id: MapId) -> Option<bool> {
        let item = self.items.get_mut(id.index())?;
        let excluded = item.toggle();
        tracing::debug!("{} {}", item.name(), if excluded { "excluded" } else { "included" });
        Some(excluded)
    }

    /// Ids of the maps whose exclusion flag is false, in grid order.
    pub fn eligible(&self) -> Vec<MapId> {
        self.iter()
            .filter(|(_, item)| !item.is_excluded())
            .map(|(id, _)| id)
            .collect()
    }

    /// Ids grouped by row, in grid order.
    pub fn rows(&self) -> Vec<Vec<MapId>> {
        let mut start = 0;
        self.row_lengths
            .iter()
            .map(|&len| {
                let row = (start..start + len).map(MapId).collect();
                start += len;
                row
            })
            .collect()
    }

    pub fn row_count(&self) -> usize {
        self.row_lengths.len()
    }

    /// Length of the longest row.
    pub fn widest_row(&self) -> usize {
        self.row_lengths.iter().copied().max().unwrap_or(0)
    }
}
