use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use thiserror::Error;

use crate::data::filter::{YearRange, filter_years};
use crate::state::AppState;
use crate::ui::chart::{self, ChartMode};
use crate::ui::{page, table};

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the application router: the page plus the two recompute endpoints
/// and the export download.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/chart", get(chart_handler))
        .route("/api/table", get(table_handler))
        .route("/export", get(export_handler))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request validation
// ---------------------------------------------------------------------------

/// Validation failures surfaced to the page instead of propagating a
/// numeric fault or a panic.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("unknown chart mode '{0}', expected 'protsent' or 'kogu'")]
    UnknownMode(String),
    #[error("year range {from}..{to} is crossed")]
    CrossedRange { from: i32, to: i32 },
    #[error("failed to render export")]
    Export(#[from] anyhow::Error),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = match &self {
            RequestError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        log::warn!("request rejected: {self}");
        (status, self.to_string()).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    pub mode: Option<String>,
    pub from: Option<i32>,
    pub to: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub from: Option<i32>,
    pub to: Option<i32>,
}

/// Fill missing ends from the dataset bounds, reject a crossed range, clamp
/// the rest into bounds (the widget can only produce in-bounds values, but
/// the endpoint is reachable without the widget).
fn resolve_range(
    bounds: YearRange,
    from: Option<i32>,
    to: Option<i32>,
) -> Result<YearRange, RequestError> {
    let range = YearRange::new(from.unwrap_or(bounds.from), to.unwrap_or(bounds.to));
    if range.is_crossed() {
        return Err(RequestError::CrossedRange {
            from: range.from,
            to: range.to,
        });
    }
    Ok(range.clamp_to(bounds))
}

fn resolve_mode(mode: Option<String>) -> Result<ChartMode, RequestError> {
    match mode {
        None => Ok(ChartMode::default()),
        Some(value) => ChartMode::parse(&value).ok_or(RequestError::UnknownMode(value)),
    }
}

// ---------------------------------------------------------------------------
// Handlers – one synchronous recompute per input change
// ---------------------------------------------------------------------------

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(page::render_index(state.bounds))
}

/// Chart recompute: figure = f(mode, year window).
async fn chart_handler(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<chart::Figure>, RequestError> {
    let mode = resolve_mode(query.mode)?;
    let range = resolve_range(state.bounds, query.from, query.to)?;
    let rows = filter_years(&state.table, range);
    Ok(Json(chart::build_figure(&rows, mode)))
}

/// Table recompute: rows = f(year window), independent of the chart mode.
async fn table_handler(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<table::TableData>, RequestError> {
    let range = resolve_range(state.bounds, query.from, query.to)?;
    let rows = filter_years(&state.table, range);
    Ok(Json(table::table_data(rows)))
}

/// Table export: the same filtered rows as a CSV attachment.
async fn export_handler(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Response, RequestError> {
    let range = resolve_range(state.bounds, query.from, query.to)?;
    let rows = filter_years(&state.table, range);
    let body = table::export_csv(&rows)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"kliimaandmed.csv\"",
            ),
        ],
        body,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{EmissionsRecord, EmissionsTable};

    fn state() -> AppState {
        let records = (1990..=2020)
            .map(|y| EmissionsRecord::derive(y, 40_000.0, 35_000.0).unwrap())
            .collect();
        AppState::new(EmissionsTable::new(records)).unwrap()
    }

    #[test]
    fn missing_ends_fall_back_to_bounds() {
        let bounds = YearRange::new(1990, 2020);
        assert_eq!(resolve_range(bounds, None, None).unwrap(), bounds);
        assert_eq!(
            resolve_range(bounds, Some(2000), None).unwrap(),
            YearRange::new(2000, 2020)
        );
    }

    #[test]
    fn out_of_bounds_ends_are_clamped() {
        let bounds = YearRange::new(1990, 2020);
        assert_eq!(
            resolve_range(bounds, Some(1800), Some(2500)).unwrap(),
            bounds
        );
    }

    #[test]
    fn crossed_range_is_rejected() {
        let bounds = YearRange::new(1990, 2020);
        assert!(matches!(
            resolve_range(bounds, Some(2010), Some(2000)),
            Err(RequestError::CrossedRange { from: 2010, to: 2000 })
        ));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(matches!(
            resolve_mode(Some("pie".into())),
            Err(RequestError::UnknownMode(_))
        ));
        assert_eq!(resolve_mode(None).unwrap(), ChartMode::Relative);
        assert_eq!(resolve_mode(Some("kogu".into())).unwrap(), ChartMode::Absolute);
    }

    #[tokio::test]
    async fn chart_endpoint_recomputes_for_the_window() {
        let query = ChartQuery {
            mode: Some("kogu".into()),
            from: Some(2000),
            to: Some(2010),
        };
        let Json(figure) = chart_handler(State(state()), Query(query)).await.unwrap();

        assert_eq!(figure.data.len(), 2);
        assert_eq!(figure.data[0].x.len(), 11);
        assert_eq!(figure.data[0].x[0], 2000);
    }

    #[tokio::test]
    async fn table_endpoint_is_mode_independent() {
        let query = RangeQuery {
            from: Some(2000),
            to: Some(2010),
        };
        let Json(data) = table_handler(State(state()), Query(query)).await.unwrap();
        assert_eq!(data.rows.len(), 11);
    }

    #[tokio::test]
    async fn export_endpoint_sets_attachment_headers() {
        let query = RangeQuery {
            from: None,
            to: None,
        };
        let response = export_handler(State(state()), Query(query)).await.unwrap();
        let headers = response.headers();
        assert_eq!(headers[header::CONTENT_TYPE.as_str()], "text/csv; charset=utf-8");
        assert!(
            headers[header::CONTENT_DISPOSITION.as_str()]
                .to_str()
                .unwrap()
                .contains("attachment")
        );
    }
}
