use serde::Serialize;

// ---------------------------------------------------------------------------
// EmissionsRecord – one year of the prepared dataset
// ---------------------------------------------------------------------------

/// Wire/display column names, in table order. Serialized rows, the table
/// header and the CSV export all use these names.
pub const COLUMNS: [&str; 6] = [
    "aasta",
    "koguheide_maakasutuseta_kt_co2_ekv",
    "energeetika_kt_co2_ekv",
    "muu_heide",
    "en_protsent",
    "muu_protsent",
];

/// One row of the prepared dataset: the three source columns plus the
/// derived columns computed at load time.
///
/// Invariants (hold for every record the loader emits):
/// * `energy + other == total`
/// * `energy_pct + other_pct == 100`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionsRecord {
    /// Reporting year.
    #[serde(rename = "aasta")]
    pub year: i32,
    /// Total emissions excluding land-use change, kt CO2 eq.
    #[serde(rename = "koguheide_maakasutuseta_kt_co2_ekv")]
    pub total: f64,
    /// Energy-sector emissions, kt CO2 eq.
    #[serde(rename = "energeetika_kt_co2_ekv")]
    pub energy: f64,
    /// Derived: emissions outside the energy sector, kt CO2 eq.
    #[serde(rename = "muu_heide")]
    pub other: f64,
    /// Derived: energy-sector share of the total, percent.
    #[serde(rename = "en_protsent")]
    pub energy_pct: f64,
    /// Derived: complement of `energy_pct`, percent.
    #[serde(rename = "muu_protsent")]
    pub other_pct: f64,
}

impl EmissionsRecord {
    /// Build a record from the three source columns, computing the derived
    /// columns.
    ///
    /// Returns `None` when `total` is zero (the percentage would divide by
    /// zero) or when either value is non-finite; callers skip such rows.
    pub fn derive(year: i32, total: f64, energy: f64) -> Option<Self> {
        if total == 0.0 || !total.is_finite() || !energy.is_finite() {
            return None;
        }
        let energy_pct = energy / total * 100.0;
        Some(EmissionsRecord {
            year,
            total,
            energy,
            other: total - energy,
            energy_pct,
            other_pct: 100.0 - energy_pct,
        })
    }
}

// ---------------------------------------------------------------------------
// EmissionsTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full prepared dataset, in file order. Immutable after load: every
/// interaction derives a fresh filtered copy and leaves this untouched.
#[derive(Debug, Clone)]
pub struct EmissionsTable {
    pub records: Vec<EmissionsRecord>,
}

impl EmissionsTable {
    pub fn new(records: Vec<EmissionsRecord>) -> Self {
        EmissionsTable { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest and largest year in the table, or `None` when empty.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.year).min()?;
        let max = self.records.iter().map(|r| r.year).max()?;
        Some((min, max))
    }
}
