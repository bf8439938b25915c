//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tracing::{debug, warn};

use crate::requests::{RequestError, RequestHandler, StatRequest, StatResponse};
use crate::router::{Itinerary, RouterError};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/requests", post(stat_requests))
        .route("/route", get(find_route))
        .route("/map", get(map_page))
        .route("/map.svg", get(map_svg))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Answer a batch of stat requests, same format as `process_requests`.
async fn stat_requests(
    State(state): State<AppState>,
    Json(requests): Json<Vec<StatRequest>>,
) -> Result<Json<Vec<StatResponse>>, AppError> {
    debug!(count = requests.len(), "Stat requests received");

    // Route searches are CPU-bound; keep them off the async workers
    let responses = tokio::task::spawn_blocking(move || {
        RequestHandler::new(&state.base).handle_all(&requests)
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("request task failed: {e}"),
    })?;

    Ok(Json(responses))
}

/// Fastest itinerary between two stops.
async fn find_route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<Itinerary>, AppError> {
    let RouteQuery { from, to } = query;

    let itinerary = tokio::task::spawn_blocking(move || {
        let router = state.base.router()?;
        Ok::<_, RouterError>(router.find_route(&from, &to))
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("route task failed: {e}"),
    })??;

    itinerary.map(Json).ok_or_else(|| AppError::NotFound {
        message: crate::requests::NOT_FOUND.to_string(),
    })
}

/// HTML page with the network map.
async fn map_page(State(state): State<AppState>) -> Response {
    let catalogue = state.base.catalogue();
    let rendered = match state.base.map() {
        Some(svg) => MapTemplate {
            svg: svg.to_string(),
            bus_count: catalogue.buses().len(),
            stop_count: catalogue.served_stops_by_name().len(),
        }
        .render(),
        None => {
            let html = ErrorTemplate {
                title: "Map unavailable".to_string(),
                message: RequestError::MapNotConfigured.to_string(),
            }
            .render();
            return match html {
                Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
                Err(e) => template_error(e),
            };
        }
    };

    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(e) => template_error(e),
    }
}

fn template_error(e: askama::Error) -> Response {
    AppError::Internal {
        message: format!("Template error: {e}"),
    }
    .into_response()
}

/// The raw SVG map.
async fn map_svg(State(state): State<AppState>) -> Result<Response, AppError> {
    let svg = state.base.map().ok_or_else(|| AppError::NotFound {
        message: RequestError::MapNotConfigured.to_string(),
    })?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg.to_string()).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
    Unavailable { message: String },
    Internal { message: String },
}

impl From<RouterError> for AppError {
    fn from(e: RouterError) -> Self {
        match e {
            RouterError::NotInitialized => AppError::Unavailable {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            warn!(%status, %message, "Request failed");
        } else {
            debug!(%status, %message, "Request rejected");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderSettings;
    use crate::requests::{BaseRequest, TransitBase, build_catalogue};
    use crate::router::RoutingSettings;
    use axum::body::to_bytes;
    use serde_json::{Value, json};

    fn state(routing: Option<RoutingSettings>, render: Option<RenderSettings>) -> AppState {
        let requests: Vec<BaseRequest> = serde_json::from_value(json!([
            {"type": "Stop", "name": "A", "latitude": 55.0, "longitude": 37.0,
             "road_distances": {"B": 1000}},
            {"type": "Stop", "name": "B", "latitude": 55.01, "longitude": 37.01},
            {"type": "Bus", "name": "5", "stops": ["A", "B"], "is_roundtrip": false}
        ]))
        .unwrap();
        let base = TransitBase::new(build_catalogue(&requests).unwrap(), routing, render).unwrap();
        AppState::new(base)
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn route_query(from: &str, to: &str) -> Query<RouteQuery> {
        Query(RouteQuery {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn stat_requests_answer_in_order() {
        let state = state(Some(RoutingSettings::new(2, 30.0).unwrap()), None);
        let requests: Vec<StatRequest> = serde_json::from_value(json!([
            {"id": 1, "type": "Stop", "name": "A"},
            {"id": 2, "type": "Route", "from": "A", "to": "B"},
            {"id": 3, "type": "Bus", "name": "nope"}
        ]))
        .unwrap();

        let Json(responses) = stat_requests(State(state), Json(requests)).await.unwrap();
        let body = serde_json::to_value(&responses).unwrap();

        assert_eq!(body[0], json!({"request_id": 1, "buses": ["5"]}));
        assert_eq!(body[1]["request_id"], 2);
        assert_eq!(body[1]["total_time"], 4.0);
        assert_eq!(body[1]["items"][0]["type"], "Wait");
        assert_eq!(body[1]["items"][1]["type"], "Bus");
        assert_eq!(body[2], json!({"request_id": 3, "error_message": "not found"}));
    }

    #[tokio::test]
    async fn route_endpoint() {
        let state = state(Some(RoutingSettings::new(2, 30.0).unwrap()), None);

        let Json(itinerary) = find_route(State(state.clone()), route_query("B", "A"))
            .await
            .unwrap();
        assert_eq!(itinerary.total_time, 4.0);

        let response = find_route(State(state), route_query("A", "Z"))
            .await
            .unwrap_err()
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"error": "not found"}));
    }

    #[tokio::test]
    async fn route_endpoint_without_router_is_unavailable() {
        let response = find_route(State(state(None, None)), route_query("A", "B"))
            .await
            .unwrap_err()
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn map_endpoints() {
        let state = state(None, Some(RenderSettings::default()));

        let svg = map_svg(State(state.clone())).await.unwrap();
        assert_eq!(svg.status(), StatusCode::OK);
        assert_eq!(
            svg.headers()[header::CONTENT_TYPE],
            "image/svg+xml"
        );

        let page = map_page(State(state)).await;
        assert_eq!(page.status(), StatusCode::OK);
        let bytes = to_bytes(page.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("<polyline"));
        assert!(html.contains("1 buses, 2 stops"));
    }

    #[tokio::test]
    async fn map_endpoints_without_render_settings() {
        let state = state(None, None);
        let svg = map_svg(State(state.clone())).await.unwrap_err().into_response();
        assert_eq!(svg.status(), StatusCode::NOT_FOUND);

        let page = map_page(State(state)).await;
        assert_eq!(page.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn router_errors_map_to_status() {
        let status = |e: RouterError| AppError::from(e).into_response().status();
        assert_eq!(status(RouterError::NotInitialized), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            status(RouterError::InvalidSettings("bus_velocity must be positive")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
