use crate::dashboard::{build_dashboard, build_summary, selection_from_query, ChartChoice};
use crate::errors::AppError;
use crate::models::{
    DashboardQuery, DashboardResponse, LookupResponse, OptionsQuery, OptionsResponse,
    SeriesRecord, StatsRecord, SummaryResponse,
};
use crate::period::{Bucket, Granularity};
use crate::registry::Lookup;
use crate::selection::Selection;
use crate::state::AppState;
use crate::ui::{render_index, render_summary};
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use tracing::debug;

pub async fn index() -> Html<String> {
    Html(render_index(&Selection::default()))
}

pub async fn summary_page() -> Html<String> {
    Html(render_summary())
}

pub async fn get_options(
    Query(query): Query<OptionsQuery>,
) -> Result<Json<OptionsResponse>, AppError> {
    let granularity = match query.granularity.as_deref() {
        Some(raw) => raw.parse::<Granularity>()?,
        None => Granularity::Monthly,
    };
    Ok(Json(Selection::defaults_for(granularity).options()))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>, AppError> {
    let selection = selection_from_query(&query)?;
    let charts = ChartChoice::from_query(&query);
    let dashboard = build_dashboard(&state.registry, &selection, charts)?;
    if dashboard.fallback {
        debug!(
            "dashboard {} served from series {} and stats {}",
            dashboard.selection.key, dashboard.series_key, dashboard.stats_key
        );
    }
    Ok(Json(dashboard))
}

pub async fn get_series(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<LookupResponse<SeriesRecord>>, AppError> {
    let bucket = Bucket::parse(&key)?;
    Ok(Json(to_response(state.registry.series(bucket))))
}

pub async fn get_stats(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<LookupResponse<StatsRecord>>, AppError> {
    let bucket = Bucket::parse(&key)?;
    Ok(Json(to_response(state.registry.stats(bucket))))
}

pub async fn get_summary(
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, AppError> {
    Ok(Json(build_summary(&state.registry)?))
}

fn to_response<T: Clone>(lookup: Lookup<'_, T>) -> LookupResponse<T> {
    LookupResponse {
        requested: lookup.requested,
        resolved: lookup.resolved,
        fallback: lookup.is_fallback(),
        record: lookup.record.clone(),
    }
}
