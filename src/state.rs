use std::sync::Arc;

use anyhow::{Result, bail};

use crate::data::filter::YearRange;
use crate::data::model::EmissionsTable;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Shared application state: the dataset loaded once at startup plus the
/// year bounds offered to the slider.
///
/// The table is immutable and shared behind an `Arc`; handlers clone the
/// state cheaply and only ever derive fresh filtered copies from it.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<EmissionsTable>,
    pub bounds: YearRange,
}

impl AppState {
    /// Wrap a loaded table. Fails when no usable records survived loading,
    /// since an empty table leaves the slider without bounds.
    pub fn new(table: EmissionsTable) -> Result<Self> {
        let Some((min_year, max_year)) = table.year_bounds() else {
            bail!("dataset contains no usable records");
        };
        Ok(AppState {
            table: Arc::new(table),
            bounds: YearRange::new(min_year, max_year),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::EmissionsRecord;

    #[test]
    fn bounds_come_from_the_dataset() {
        let table = EmissionsTable::new(vec![
            EmissionsRecord::derive(1990, 100.0, 80.0).unwrap(),
            EmissionsRecord::derive(2020, 100.0, 80.0).unwrap(),
        ]);
        let state = AppState::new(table).unwrap();
        assert_eq!(state.bounds, YearRange::new(1990, 2020));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(AppState::new(EmissionsTable::new(Vec::new())).is_err());
    }
}
