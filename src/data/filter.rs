use super::model::{EmissionsRecord, EmissionsTable};

// ---------------------------------------------------------------------------
// Year range: the window selected by the range slider
// ---------------------------------------------------------------------------

/// Inclusive year window `[from, to]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub from: i32,
    pub to: i32,
}

impl YearRange {
    pub fn new(from: i32, to: i32) -> Self {
        YearRange { from, to }
    }

    /// A crossed range (`from > to`) is invalid input; the slider widget
    /// never produces one.
    pub fn is_crossed(&self) -> bool {
        self.from > self.to
    }

    /// Clamp both ends into `bounds` (the dataset's min/max year).
    pub fn clamp_to(self, bounds: YearRange) -> YearRange {
        YearRange {
            from: self.from.clamp(bounds.from, bounds.to),
            to: self.to.clamp(bounds.from, bounds.to),
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.from <= year && year <= self.to
    }
}

/// Return the records whose year falls inside `range`, in original order.
///
/// Always a fresh copy; the base table is shared between requests and never
/// mutated.
pub fn filter_years(table: &EmissionsTable, range: YearRange) -> Vec<EmissionsRecord> {
    table
        .records
        .iter()
        .filter(|rec| range.contains(rec.year))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::EmissionsRecord;

    fn table(years: &[i32]) -> EmissionsTable {
        EmissionsTable::new(
            years
                .iter()
                .map(|&y| EmissionsRecord::derive(y, 1000.0, 800.0).unwrap())
                .collect(),
        )
    }

    #[test]
    fn range_is_inclusive_and_preserves_order() {
        let table = table(&[1990, 1991, 1992, 1993, 1994]);
        let rows = filter_years(&table, YearRange::new(1991, 1993));
        let years: Vec<i32> = rows.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![1991, 1992, 1993]);
    }

    #[test]
    fn eleven_years_give_eleven_rows() {
        let years: Vec<i32> = (1990..=2020).collect();
        let rows = filter_years(&table(&years), YearRange::new(2000, 2010));
        assert_eq!(rows.len(), 11);
    }

    #[test]
    fn empty_window_gives_no_rows() {
        let table = table(&[1990, 1991]);
        assert!(filter_years(&table, YearRange::new(2000, 2010)).is_empty());
    }

    #[test]
    fn clamping_and_crossing() {
        let bounds = YearRange::new(1990, 2020);
        assert_eq!(
            YearRange::new(1800, 2500).clamp_to(bounds),
            YearRange::new(1990, 2020)
        );
        assert!(YearRange::new(2010, 2000).is_crossed());
        assert!(!YearRange::new(2000, 2000).is_crossed());
    }
}
