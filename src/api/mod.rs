//! HTTP boundary: axum router, content negotiation and response rendering.

use std::sync::Arc;

use axum::Router;
use axum::http::header::CONTENT_DISPOSITION;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::config::ApiConfig;
use crate::service::RecordsService;

mod negotiate;
mod render;
mod routes;

pub use negotiate::Format;
pub use render::{ExportError, ExportTarget, Renderer};
pub use routes::RecordRoute;

/// Shared, read-only state of every handler.
pub struct AppState {
    service: RecordsService,
    config: ApiConfig,
}

impl AppState {
    pub fn new(service: RecordsService, config: ApiConfig) -> Self {
        Self { service, config }
    }

    pub fn service(&self) -> &RecordsService {
        &self.service
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn export_target(&self, resource: &str) -> ExportTarget {
        ExportTarget {
            separator: self.config.csv_separator,
            file_stem: format!("{}-{resource}", self.config.export_file_prefix),
        }
    }
}

/// Build the API router.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(state.config());
    Router::new()
        .route("/api/records/{category}/{slice}", get(routes::records))
        .route("/api/summary", get(routes::summary))
        .route("/api/matches/{ca_id}", get(routes::match_summary))
        .route("/api/players", get(routes::players))
        .route("/api/teams", get(routes::teams))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origins = if config.allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(config.allowed_origins.iter().filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|err| {
                    warn!(
                        target: "cricrecords::api",
                        %origin,
                        error = %err,
                        "ignoring CORS origin"
                    );
                })
                .ok()
        }))
    };
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .expose_headers([CONTENT_DISPOSITION])
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::header::{ACCEPT, CONTENT_TYPE, ORIGIN};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::{
        BattingInnings, BattingSummary, BowlingInnings, BowlingSummary, FieldingInnings,
        FieldingSummary, PartnershipInnings, PartnershipSummary, TeamInnings, TeamSummary,
    };
    use crate::service::{
        FakeLookups, FakeSlices, Repositories, batting_row, partnership_innings,
    };

    const OVERALL: &str = "/api/records/batting/overall?matchType=t&teamId=0&opponentsId=0\
        &groundId=0&hostCountryId=0&sortOrder=4&sortDirection=DESC&page=1&pageSize=50";

    struct Harness {
        batting: FakeSlices<BattingSummary, BattingInnings>,
        app: Router,
    }

    fn harness() -> Harness {
        let batting = FakeSlices::new(
            vec![batting_row("DG Bradman", 6996), batting_row("SR Tendulkar", 15921)],
            Vec::new(),
        );
        let repositories = Repositories {
            batting: Arc::new(batting.clone()),
            bowling: Arc::new(FakeSlices::<BowlingSummary, BowlingInnings>::offline()),
            fielding: Arc::new(FakeSlices::<FieldingSummary, FieldingInnings>::new(
                Vec::new(),
                Vec::new(),
            )),
            team: Arc::new(FakeSlices::<TeamSummary, TeamInnings>::new(Vec::new(), Vec::new())),
            partnership: Arc::new(FakeSlices::<PartnershipSummary, PartnershipInnings>::new(
                Vec::new(),
                vec![partnership_innings(5, 405), partnership_innings(1, 415)],
            )),
            lookups: Arc::new(FakeLookups::with_names()),
        };
        let state = AppState::new(RecordsService::new(repositories), ApiConfig::default());
        Harness {
            batting,
            app: router(Arc::new(state)),
        }
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn overall_batting_request_returns_a_page() {
        let Harness { batting, app } = harness();
        let response = get(app, OVERALL).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json(response).await;
        assert_eq!(body["errorMessage"], "");
        assert_eq!(body["result"]["totalCount"], 2);
        assert_eq!(body["result"]["items"][0]["name"], "DG Bradman");
        assert_eq!(body["result"]["items"][0]["playerId"], 6996);

        let calls = batting.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].slice, Some(crate::service::SummarySlice::Overall));
        assert_eq!(calls[0].sort, crate::domain::SortKey::Runs);
    }

    #[tokio::test]
    async fn malformed_request_reports_every_problem() {
        let Harness { batting, app } = harness();
        let response = get(
            app,
            "/api/records/batting/overall?teamId=-1&sortDirection=SIDEWAYS",
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json(response).await;
        assert!(body["result"].is_null());
        let message = body["errorMessage"].as_str().unwrap();
        assert!(message.contains("teamId"));
        assert!(message.contains("SIDEWAYS"));
        assert!(message.contains("; "));
        assert!(batting.calls().is_empty());
    }

    #[tokio::test]
    async fn undecodable_query_string_still_gets_an_envelope() {
        let Harness { batting, app } = harness();
        let response = get(app.clone(), "/api/records/batting/overall?teamId=1&teamId=2").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");

        let body = json(response).await;
        assert!(body["result"].is_null());
        assert!(body["errorMessage"].as_str().unwrap().contains("teamId"));
        assert!(batting.calls().is_empty());

        let response = get(app, "/api/players?name=Grace&name=Hobbs").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json(response).await["result"].is_null());
    }

    #[tokio::test]
    async fn refused_media_type_is_skipped() {
        let Harness { app, .. } = harness();
        let response = app
            .oneshot(
                Request::builder()
                    .uri(OVERALL)
                    .header(ACCEPT, "text/csv;q=0, application/json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(json(response).await["result"]["totalCount"], 2);
    }

    #[tokio::test]
    async fn csv_is_negotiated_from_accept() {
        let Harness { app, .. } = harness();
        let response = app
            .oneshot(
                Request::builder()
                    .uri(OVERALL)
                    .header(ACCEPT, "text/csv")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[CONTENT_DISPOSITION],
            "attachment; filename=\"records-batting-overall.csv\""
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert_eq!(body.lines().count(), 3);
        assert!(body.starts_with("Name,Team,Opponents"));
        assert!(body.ends_with('\n'));
    }

    #[tokio::test]
    async fn format_hint_selects_a_workbook() {
        let Harness { app, .. } = harness();
        let response = get(app, &format!("{OVERALL}&format=xlsx")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[CONTENT_TYPE],
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[tokio::test]
    async fn unknown_slice_is_not_found() {
        let Harness { app, .. } = harness();
        let response = get(app, "/api/records/batting/by-planet").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(json(response).await["result"].is_null());
    }

    #[tokio::test]
    async fn data_access_failure_is_a_generic_server_error() {
        let Harness { app, .. } = harness();
        let response = get(app, "/api/records/bowling/overall").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json(response).await;
        assert_eq!(body["errorMessage"], "internal server error");
    }

    #[tokio::test]
    async fn partnerships_by_wicket_require_a_wicket() {
        let Harness { app, .. } = harness();
        let response = get(app.clone(), "/api/records/partnership/innings-by-wicket").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = get(app, "/api/records/partnership/innings-by-wicket?wicket=5").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json(response).await;
        assert_eq!(body["result"]["items"][0]["runs"], 405);
    }

    #[tokio::test]
    async fn summary_resolves_names_and_refuses_exports() {
        let Harness { app, .. } = harness();
        let response = get(app.clone(), "/api/summary?matchType=t&teamId=2&groundId=10").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json(response).await;
        assert_eq!(body["result"]["team"], "Australia");
        assert_eq!(body["result"]["opponents"], "All Teams");
        assert_eq!(body["result"]["ground"], "Lord's");

        let response = get(app.clone(), "/api/summary?teamId=77").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = get(app, "/api/summary?format=csv").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn match_and_search_lookups() {
        let Harness { app, .. } = harness();
        let response = get(app.clone(), "/api/matches/1234").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json(response).await["result"]["awayTeam"], "Australia");

        let response = get(app.clone(), "/api/matches/9999").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = get(app.clone(), "/api/players?name=Grace&matchType=t").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json(response).await["result"][0]["name"], "Grace");

        let response = get(app, "/api/teams?name=Eng").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json(response).await["result"][0]["name"], "England");
    }

    #[tokio::test]
    async fn cors_exposes_content_disposition() {
        let Harness { app, .. } = harness();
        let response = app
            .oneshot(
                Request::builder()
                    .uri(OVERALL)
                    .header(ORIGIN, "https://stats.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let exposed = response
            .headers()
            .get_all("access-control-expose-headers")
            .iter()
            .filter_map(|value| value.to_str().ok())
            .any(|value| value.to_ascii_lowercase().contains("content-disposition"));
        assert!(exposed);
    }
}
