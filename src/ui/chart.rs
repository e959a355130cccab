use serde::Serialize;

use crate::color::generate_palette;
use crate::data::model::EmissionsRecord;

// ---------------------------------------------------------------------------
// Chart mode – the dropdown's two fixed options
// ---------------------------------------------------------------------------

/// The two charts the dropdown offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartMode {
    /// Sector shares of the yearly total, percent.
    #[default]
    Relative,
    /// Sector emissions in kt CO2 eq.
    Absolute,
}

impl ChartMode {
    pub const ALL: [ChartMode; 2] = [ChartMode::Relative, ChartMode::Absolute];

    /// Wire value carried by the dropdown.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartMode::Relative => "protsent",
            ChartMode::Absolute => "kogu",
        }
    }

    /// Human-facing dropdown label.
    pub fn label(&self) -> &'static str {
        match self {
            ChartMode::Relative => "suhteline heide",
            ChartMode::Absolute => "koguheide",
        }
    }

    /// Parse a wire value; anything outside the fixed set is `None`.
    pub fn parse(value: &str) -> Option<ChartMode> {
        Self::ALL.iter().copied().find(|m| m.as_str() == value)
    }
}

// ---------------------------------------------------------------------------
// Figure spec – plotly-shaped JSON rendered client-side
// ---------------------------------------------------------------------------

/// Fixed display names the series are relabeled to.
const SERIES_NAMES: [&str; 2] = ["energeetika", "muu"];

const LEGEND_TITLE: &str = "Sektor";
const RELATIVE_Y_TITLE: &str = "Suhteline heide (%)";
const ABSOLUTE_Y_TITLE: &str = "Heide (kt CO2 ekvivalenti)";

/// Decorative chart controls disabled on the rendered figure.
const REMOVED_MODE_BAR_BUTTONS: [&str; 8] = [
    "zoom2d",
    "pan2d",
    "select2d",
    "lasso2d",
    "zoomIn2d",
    "zoomOut2d",
    "autoScale2d",
    "resetScale2d",
];

#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    pub config: PlotConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub x: Vec<i32>,
    pub y: Vec<f64>,
    pub opacity: f64,
    pub marker: Marker,
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub barmode: &'static str,
    pub legend: Legend,
    pub yaxis: Axis,
    /// `false` switches panning/zooming off entirely.
    pub dragmode: bool,
}

/// Horizontal legend anchored above the plot area, right-aligned.
#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub orientation: &'static str,
    pub yanchor: &'static str,
    pub y: f64,
    pub xanchor: &'static str,
    pub x: f64,
    pub title: Title,
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotConfig {
    pub mode_bar_buttons_to_remove: [&'static str; 8],
}

// ---------------------------------------------------------------------------
// Figure building
// ---------------------------------------------------------------------------

/// Build the stacked bar figure for the given (already filtered) records.
///
/// Relative mode stacks the two percentage columns, absolute mode the two
/// kt CO2 eq columns; everything else about the figure is identical, so a
/// year-window change never alters which columns are stacked.
pub fn build_figure(records: &[EmissionsRecord], mode: ChartMode) -> Figure {
    let years: Vec<i32> = records.iter().map(|r| r.year).collect();

    let (energy, other, y_title): (Vec<f64>, Vec<f64>, &'static str) = match mode {
        ChartMode::Relative => (
            records.iter().map(|r| r.energy_pct).collect(),
            records.iter().map(|r| r.other_pct).collect(),
            RELATIVE_Y_TITLE,
        ),
        ChartMode::Absolute => (
            records.iter().map(|r| r.energy).collect(),
            records.iter().map(|r| r.other).collect(),
            ABSOLUTE_Y_TITLE,
        ),
    };

    let mut colors = generate_palette(SERIES_NAMES.len()).into_iter();
    let mut trace = |name: &'static str, y: Vec<f64>| Trace {
        kind: "bar",
        name,
        x: years.clone(),
        y,
        opacity: 0.7,
        marker: Marker {
            color: colors.next().unwrap_or_else(|| "#808080".to_string()),
        },
    };

    let data = vec![trace(SERIES_NAMES[0], energy), trace(SERIES_NAMES[1], other)];

    Figure {
        data,
        layout: Layout {
            barmode: "stack",
            legend: Legend {
                orientation: "h",
                yanchor: "bottom",
                y: 1.02,
                xanchor: "right",
                x: 1.0,
                title: Title { text: LEGEND_TITLE },
            },
            yaxis: Axis {
                title: Title { text: y_title },
            },
            dragmode: false,
        },
        config: PlotConfig {
            mode_bar_buttons_to_remove: REMOVED_MODE_BAR_BUTTONS,
        },
    }
}
