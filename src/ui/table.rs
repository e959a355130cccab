use anyhow::{Context, Result};
use serde::Serialize;

use crate::data::model::{COLUMNS, EmissionsRecord};

// ---------------------------------------------------------------------------
// Data table payload
// ---------------------------------------------------------------------------

/// One table column: the header shown and the key used in row objects.
#[derive(Debug, Clone, Serialize)]
pub struct Column {
    pub name: &'static str,
    pub id: &'static str,
}

/// Table content returned to the page; independent of the chart mode.
#[derive(Debug, Clone, Serialize)]
pub struct TableData {
    pub columns: Vec<Column>,
    pub rows: Vec<EmissionsRecord>,
}

/// Assemble the table payload from the (already filtered) rows.
pub fn table_data(rows: Vec<EmissionsRecord>) -> TableData {
    TableData {
        columns: COLUMNS.iter().map(|&c| Column { name: c, id: c }).collect(),
        rows,
    }
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Render the rows as CSV bytes for the export download. The header row
/// carries the display column names.
pub fn export_csv(rows: &[EmissionsRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row).context("writing export row")?;
    }
    // serialize() only emits headers once a row exists
    if rows.is_empty() {
        writer
            .write_record(COLUMNS)
            .context("writing export header")?;
    }
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing export buffer: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{YearRange, filter_years};
    use crate::data::model::EmissionsTable;

    fn table(years: std::ops::RangeInclusive<i32>) -> EmissionsTable {
        EmissionsTable::new(
            years
                .map(|y| EmissionsRecord::derive(y, 1000.0, 900.0).unwrap())
                .collect(),
        )
    }

    #[test]
    fn window_2000_to_2010_has_eleven_rows() {
        let rows = filter_years(&table(1990..=2020), YearRange::new(2000, 2010));
        let data = table_data(rows);
        assert_eq!(data.rows.len(), 11);
        assert_eq!(data.columns.len(), COLUMNS.len());
        assert_eq!(data.columns[0].name, "aasta");
    }

    #[test]
    fn rows_serialize_under_display_column_names() {
        let data = table_data(vec![EmissionsRecord::derive(1990, 1000.0, 900.0).unwrap()]);
        let json = serde_json::to_value(&data).unwrap();
        let row = &json["rows"][0];
        assert_eq!(row["aasta"], 1990);
        assert_eq!(row["koguheide_maakasutuseta_kt_co2_ekv"], 1000.0);
        assert_eq!(row["muu_heide"], 100.0);
        assert_eq!(row["en_protsent"], 90.0);
    }

    #[test]
    fn export_starts_with_display_header() {
        let rows = filter_years(&table(1990..=1992), YearRange::new(1990, 1992));
        let bytes = export_csv(&rows).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), COLUMNS.join(","));
        assert_eq!(lines.count(), 3);
    }

    #[test]
    fn export_of_empty_window_is_header_only() {
        let bytes = export_csv(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.trim_end(), COLUMNS.join(","));
    }
}
