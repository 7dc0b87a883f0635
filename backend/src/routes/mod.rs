//! Route definitions for the GDASH weather API

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{
    handlers,
    middleware::{admin_middleware, auth_middleware},
    AppState,
};

/// Create API routes, mounted under `/api`
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes(state.clone()))
        .nest("/weather", weather_routes(state.clone()))
        .nest("/users", user_routes(state))
}

/// Authentication routes
fn auth_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(handlers::me))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/login", post(handlers::login))
        .merge(protected)
}

/// Weather routes; ingestion is public, everything else needs a token
fn weather_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/logs", get(handlers::list_logs))
        .route("/export.csv", get(handlers::export_csv))
        .route("/export.xlsx", get(handlers::export_xlsx))
        .route("/analysis", get(handlers::get_analysis))
        .route("/analysis.csv", get(handlers::export_analysis_csv))
        .route("/insights", get(handlers::get_insights))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/logs", post(handlers::create_log))
        .merge(protected)
}

/// User management routes (admin only)
fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_users).post(handlers::create_user))
        .route(
            "/:id",
            get(handlers::get_user)
                .patch(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
