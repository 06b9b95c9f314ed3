//! spectrum-lambda
//!
//! HTTP boundary for the Spectrum scoring engine. Route handlers validate
//! input, call the engine and persist through a [`ResultStore`].

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use spectrum_storage::ResultStore;

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

use state::AppState;

/// Build the application router over any result store.
pub fn router<S: ResultStore + 'static>(state: AppState<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Static catalog (no owner needed)
        .route("/colors", get(routes::catalog::list_colors))
        .route("/colors/{color}", get(routes::catalog::get_color))
        .route("/personalities", get(routes::catalog::list_personalities))
        .route(
            "/personalities/{personality}",
            get(routes::catalog::get_personality),
        )
        .route("/questions", get(routes::catalog::list_questions::<S>))
        // Results, scoped to the request owner
        .route(
            "/results",
            get(routes::results::list_results::<S>).post(routes::results::submit::<S>),
        )
        .route(
            "/results/{id}",
            get(routes::results::get_result::<S>).delete(routes::results::delete_result::<S>),
        )
        .route(
            "/results/{id}/dynamics",
            get(routes::results::get_dynamics::<S>),
        )
        .route("/results/{id}/report", get(routes::results::get_report::<S>))
        // Stateless analysis
        .route("/dynamics", post(routes::analysis::dynamics))
        .route("/compare", post(routes::analysis::compare))
        .route("/team/summary", post(routes::analysis::team_summary::<S>))
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::audit::audit_log))
                .layer(cors)
                .layer(axum_mw::from_fn(middleware::owner::resolve_owner)),
        )
        .with_state(state)
}
