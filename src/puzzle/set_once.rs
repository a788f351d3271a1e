//! Write-once cell for per-instance parameters

use log::warn;

/// A value that can be assigned exactly once.
///
/// Unlike a default-value sentinel, an explicit `Option` distinguishes
/// "never assigned" from "assigned the zero value". Later assignments are
/// ignored; a later assignment with a different value is logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetOnce<T> {
    value: Option<T>,
}

impl<T> Default for SetOnce<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T: PartialEq + std::fmt::Debug> SetOnce<T> {
    /// Create an unassigned cell
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the value if the cell is empty.
    ///
    /// Returns `true` when this call stored the value.
    pub fn initialize_once(&mut self, value: T) -> bool {
        match &self.value {
            None => {
                self.value = Some(value);
                true
            }
            Some(existing) => {
                if *existing != value {
                    warn!("Ignoring reassignment of {:?} to {:?}", existing, value);
                }
                false
            }
        }
    }

    /// The stored value, if any
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Whether a value has been stored
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}
