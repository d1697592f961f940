use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use catalog_backend::{
    config::Config,
    database::pool::create_pool,
    middleware::{auth::require_bearer_auth, cors::permissive_cors},
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let config = Config::from_env()?;

    let pool = create_pool(&config).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool, &config);

    let public_routes = Router::new()
        .route("/health", get(routes::health::health))
        .route("/token", post(routes::auth::login));

    let catalog_routes = Router::new()
        .route(
            "/api/products",
            get(routes::product::list_products).post(routes::product::create_product),
        )
        .route(
            "/api/products/:id",
            get(routes::product::get_product)
                .patch(routes::product::update_product)
                .delete(routes::product::delete_product),
        )
        .route(
            "/api/categories",
            get(routes::category::list_categories).post(routes::category::create_category),
        )
        .route(
            "/api/categories/:id",
            get(routes::category::get_category)
                .patch(routes::category::update_category)
                .delete(routes::category::delete_category),
        )
        .route_layer(from_fn_with_state(
            app_state.clone(),
            require_bearer_auth,
        ));

    let app = public_routes
        .merge(catalog_routes)
        .with_state(app_state)
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
