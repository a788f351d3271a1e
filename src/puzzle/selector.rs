//! Per-instance choice of data type and letter-removal index

use super::SetOnce;
use crate::rules::{DataType, RandomSource, DATA_TYPE_COUNT};
use log::warn;
use serde::{Deserialize, Serialize};

/// Exclusive upper bound of the letter-removal index.
///
/// "Constructor" has 11 letters but a row only shows 10, so one letter at this
/// index is dropped.
pub const INDEX_BOUND: usize = 10;

/// The frozen parameters of one puzzle instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub data_type: DataType,
    pub index: usize,
}

/// Chooses the active data type and index, then keeps them fixed
#[derive(Debug, Default)]
pub struct VariantSelector {
    data_type: SetOnce<DataType>,
    index: SetOnce<usize>,
}

impl VariantSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw an index in `[0, INDEX_BOUND)` and then a data type.
    ///
    /// Only the first successful draw is kept; later calls return the
    /// original selection.
    pub fn choose<R: RandomSource + ?Sized>(&mut self, random: &mut R) -> Selection {
        let index = random.next(INDEX_BOUND as u32) as usize % INDEX_BOUND;
        let variant = random.next(DATA_TYPE_COUNT as u32) as usize % DATA_TYPE_COUNT;
        self.freeze(DataType::ALL[variant], index)
    }

    /// Assign both values explicitly, subject to the set-once guard.
    ///
    /// An index outside `[0, INDEX_BOUND)` is rejected and nothing is written.
    pub fn assign(&mut self, data_type: DataType, index: usize) -> Option<Selection> {
        if index >= INDEX_BOUND {
            warn!("Rejecting letter index {} (must be below {})", index, INDEX_BOUND);
            return None;
        }
        Some(self.freeze(data_type, index))
    }

    fn freeze(&mut self, data_type: DataType, index: usize) -> Selection {
        self.index.initialize_once(index);
        self.data_type.initialize_once(data_type);
        Selection {
            data_type: self.data_type.get().copied().unwrap_or(data_type),
            index: self.index.get().copied().unwrap_or(index),
        }
    }

    /// The current selection, once both values are assigned
    pub fn selection(&self) -> Option<Selection> {
        Some(Selection {
            data_type: *self.data_type.get()?,
            index: *self.index.get()?,
        })
    }
}
