use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::{EmissionsRecord, EmissionsTable};

// Normalized names of the columns the dashboard needs.
const YEAR_COL: &str = "aasta";
const TOTAL_COL: &str = "koguheide_maakasutuseta_kt_co2_ekv";
const ENERGY_COL: &str = "energeetika_kt_co2_ekv";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and prepare the emissions dataset from a CSV file.
///
/// Raw headers are natural-language, e.g.
/// `Aasta`, `Koguheide maakasutuseta (kt CO2 ekv)`, `Energeetika (kt CO2 ekv)`.
/// Headers are normalized (trim, lowercase, spaces to underscores, parens
/// and commas stripped), the three needed columns are selected by
/// normalized name and everything else is dropped.
///
/// Rows with an empty year, total or energy cell are treated as missing
/// data and skipped with a warning, as are rows whose total is zero (the
/// percentage columns would be undefined). A non-empty cell that fails to
/// parse is a schema error and fatal.
pub fn load_file(path: &Path) -> Result<EmissionsTable> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(normalize_header)
        .collect();

    let year_idx = column_index(&headers, YEAR_COL)?;
    let total_idx = column_index(&headers, TOTAL_COL)?;
    let energy_idx = column_index(&headers, ENERGY_COL)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let year: i32 = match parse_cell(record.get(year_idx), row_no, YEAR_COL)? {
            Some(v) => v,
            None => {
                log::warn!("row {row_no}: missing year, skipping");
                continue;
            }
        };
        let total: f64 = match parse_cell(record.get(total_idx), row_no, TOTAL_COL)? {
            Some(v) => v,
            None => {
                log::warn!("row {row_no} (year {year}): missing total emissions, skipping");
                continue;
            }
        };
        let energy: f64 = match parse_cell(record.get(energy_idx), row_no, ENERGY_COL)? {
            Some(v) => v,
            None => {
                log::warn!("row {row_no} (year {year}): missing energy emissions, skipping");
                continue;
            }
        };

        match EmissionsRecord::derive(year, total, energy) {
            Some(rec) => records.push(rec),
            None => {
                log::warn!(
                    "row {row_no} (year {year}): total {total} makes the sector share undefined, skipping"
                );
            }
        }
    }

    Ok(EmissionsTable::new(records))
}

// ---------------------------------------------------------------------------
// Header handling
// ---------------------------------------------------------------------------

/// Normalize a raw header to the consistent lowercase/underscore form:
/// `"Koguheide maakasutuseta (kt CO2 ekv)"` becomes
/// `"koguheide_maakasutuseta_kt_co2_ekv"`.
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('_'),
            '(' | ')' | ',' => None,
            c => Some(c),
        })
        .collect()
}

fn column_index(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .with_context(|| format!("CSV missing '{name}' column (normalized headers: {headers:?})"))
}

// ---------------------------------------------------------------------------
// Cell parsing
// ---------------------------------------------------------------------------

/// Parse one cell. Empty (or absent) cells are missing values, `Ok(None)`.
fn parse_cell<T: std::str::FromStr>(
    cell: Option<&str>,
    row: usize,
    col: &str,
) -> Result<Option<T>> {
    let text = cell.unwrap_or("").trim();
    if text.is_empty() {
        return Ok(None);
    }
    match text.parse() {
        Ok(v) => Ok(Some(v)),
        Err(_) => bail!("row {row}, column '{col}': '{text}' is not a number"),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const HEADER: &str = "Aasta,Koguheide maakasutusega (kt CO2 ekv),Koguheide maakasutuseta (kt CO2 ekv),Transport (kt CO2 ekv),Energeetika (kt CO2 ekv)";

    fn write_csv(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        writeln!(file, "{HEADER}").unwrap();
        write!(file, "{body}").unwrap();
        file
    }

    #[test]
    fn normalizes_raw_headers() {
        assert_eq!(normalize_header("Aasta"), "aasta");
        assert_eq!(
            normalize_header(" Koguheide maakasutuseta (kt CO2 ekv) "),
            "koguheide_maakasutuseta_kt_co2_ekv"
        );
        assert_eq!(
            normalize_header("Energeetika (kt CO2 ekv)"),
            "energeetika_kt_co2_ekv"
        );
    }

    #[test]
    fn loads_rows_and_computes_derived_columns() {
        let file = write_csv("1990,45000,40000,2000,35000\n1991,44000,39000,2100,34000\n");
        let table = load_file(file.path()).unwrap();

        assert_eq!(table.len(), 2);
        let rec = &table.records[0];
        assert_eq!(rec.year, 1990);
        assert_eq!(rec.total, 40000.0);
        assert_eq!(rec.energy, 35000.0);
        assert_eq!(rec.other, 5000.0);
        assert!((rec.energy_pct - 87.5).abs() < 1e-9);
        assert!((rec.other_pct - 12.5).abs() < 1e-9);
    }

    #[test]
    fn skips_rows_with_missing_or_zero_values() {
        let file = write_csv(
            "1990,45000,40000,2000,35000\n\
             1991,44000,,2100,34000\n\
             1992,43000,0,2200,33000\n\
             ,42000,38000,2300,32000\n\
             1994,41000,37000,2400,31000\n",
        );
        let table = load_file(file.path()).unwrap();

        let years: Vec<i32> = table.records.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![1990, 1994]);
    }

    #[test]
    fn unparsable_cell_is_fatal() {
        let file = write_csv("1990,45000,n/a,2000,35000\n");
        let err = load_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("not a number"));
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        writeln!(file, "Aasta,Transport (kt CO2 ekv)").unwrap();
        writeln!(file, "1990,2000").unwrap();

        let err = load_file(file.path()).unwrap_err();
        assert!(err.to_string().contains(TOTAL_COL));
    }

    #[test]
    fn missing_file_is_fatal() {
        assert!(load_file(Path::new("no_such_file.csv")).is_err());
    }
}
