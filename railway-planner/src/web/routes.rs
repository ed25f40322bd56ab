//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::{info, warn};

use crate::planner::{Planner, SearchError, SearchRequest};

use super::dto::*;
use super::state::AppState;

/// Upper bound on `max_results` accepted from clients.
const MAX_RESULTS_CAP: usize = 100;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/network", get(network_summary))
        .route("/routes/:name", get(route_report))
        .route("/journeys", get(plan_journeys))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Summary of the loaded network.
async fn network_summary(State(state): State<AppState>) -> Json<NetworkSummaryResponse> {
    Json(NetworkSummaryResponse::from(state.network.as_ref()))
}

/// One route's stations and running distances.
async fn route_report(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RouteReportResponse>, AppError> {
    state
        .network
        .route(&name)
        .map(|route| Json(RouteReportResponse::from(route)))
        .ok_or_else(|| AppError::NotFound {
            message: format!("route not found on this network: {name}"),
        })
}

/// Plan journeys between two named stations.
async fn plan_journeys(
    State(state): State<AppState>,
    Query(req): Query<PlanJourneyRequest>,
) -> Result<Json<PlanJourneyResponse>, AppError> {
    if req.origin.trim().is_empty() || req.destination.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "origin and destination are required".to_string(),
        });
    }

    let mut request = SearchRequest::new(req.origin, req.destination);
    if let Some(max) = req.max_results {
        request = request.with_max_results(max.min(MAX_RESULTS_CAP));
    }

    // The search is CPU-bound and may be long on well-connected networks.
    let response = tokio::task::spawn_blocking(move || {
        let planner = Planner::new(&state.graph, &state.config);
        planner
            .search(&request)
            .map(|result| PlanJourneyResponse::from(&result))
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("search task failed: {e}"),
    })??;

    info!(
        journeys = response.journeys.len(),
        paths_explored = response.paths_explored,
        "planned journeys"
    );

    Ok(Json(response))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::StationNotFound { .. } => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(status = %status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;
    use crate::network::{RailwayNetwork, Route, Stop};
    use crate::planner::SearchConfig;

    fn state() -> AppState {
        let network = RailwayNetwork::new(
            "Test Network",
            vec![
                Route::new(
                    "Red",
                    vec![
                        Stop::new(StationId(1), "S1", Some(10.0)),
                        Stop::new(StationId(2), "S2", Some(5.0)),
                        Stop::new(StationId(3), "S3", None),
                    ],
                ),
                Route::new(
                    "Blue",
                    vec![
                        Stop::new(StationId(4), "S4", Some(7.0)),
                        Stop::new(StationId(2), "S2", Some(3.0)),
                        Stop::new(StationId(5), "S5", None),
                    ],
                ),
                Route::new("Island", vec![Stop::new(StationId(6), "S6", None)]),
            ],
        );
        AppState::new(network, SearchConfig::default())
    }

    fn query(origin: &str, destination: &str, max_results: Option<usize>) -> Query<PlanJourneyRequest> {
        Query(PlanJourneyRequest {
            origin: origin.to_string(),
            destination: destination.to_string(),
            max_results,
        })
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn network_summary_lists_routes() {
        let Json(summary) = network_summary(State(state())).await;
        assert_eq!(summary.name, "Test Network");
        assert_eq!(summary.total_stations, 6);
        assert_eq!(summary.longest_route.as_deref(), Some("Red"));
        assert_eq!(summary.routes.len(), 3);
    }

    #[tokio::test]
    async fn route_report_lists_stations() {
        let Json(response) = route_report(State(state()), Path("Blue".to_string()))
            .await
            .unwrap();
        assert_eq!(response.route.name, "Blue");
        assert_eq!(response.route.distance, 10.0);
        assert!(response.report.starts_with("ROUTE: Blue\nSTATIONS:\n1 S4 0 miles\n"));
        assert!(response.report.ends_with("Total Route Distance:10"));
    }

    #[tokio::test]
    async fn route_report_unknown_is_not_found() {
        let err = route_report(State(state()), Path("Purple".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn plan_finds_change() {
        let Json(response) = plan_journeys(State(state()), query("S1", "S5", None))
            .await
            .unwrap();

        assert_eq!(response.journeys.len(), 1);
        assert_eq!(response.journeys[0].distance, 13.0);
        assert_eq!(response.journeys[0].changes, 1);
        assert_eq!(response.journeys[0].stations, vec!["S1", "S2", "S5"]);
        assert!(!response.truncated);
    }

    #[tokio::test]
    async fn plan_unreachable_is_empty() {
        let Json(response) = plan_journeys(State(state()), query("S1", "S6", Some(5)))
            .await
            .unwrap();
        assert!(response.journeys.is_empty());
    }

    #[tokio::test]
    async fn plan_unknown_station_is_not_found() {
        let err = plan_journeys(State(state()), query("S1", "Nowhere", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn plan_requires_names() {
        let err = plan_journeys(State(state()), query(" ", "S5", None))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_error_status() {
        let err = AppError::Internal {
            message: "boom".to_string(),
        };
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
