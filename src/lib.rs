pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use chrono::Duration;
use sqlx::PgPool;

use crate::config::Config;
use crate::services::{
    auth_service::AuthService,
    category_service::CategoryService,
    product_service::ProductService,
    user_service::{UserService, UserStore},
};
use crate::utils::token::TokenKeys;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub auth_service: AuthService,
    pub product_service: ProductService,
    pub category_service: CategoryService,
}

impl AppState {
    pub fn new(pool: PgPool, config: &Config) -> Self {
        let store = Arc::new(UserService::new(pool.clone()));
        Self::with_user_store(pool, config, store)
    }

    /// Wires the state around an alternate credential store. Tests use this
    /// to run the full login and guard flow without a database.
    pub fn with_user_store(pool: PgPool, config: &Config, store: Arc<dyn UserStore>) -> Self {
        let keys = TokenKeys::new(&config.jwt_secret);
        let auth_service =
            AuthService::new(store, keys, Duration::minutes(config.token_ttl_minutes));
        let product_service = ProductService::new(pool.clone());
        let category_service = CategoryService::new(pool.clone());

        Self {
            pool,
            auth_service,
            product_service,
            category_service,
        }
    }
}
