// src/state.rs
use std::sync::Arc;

use crate::auth::jwt::JwtKeys;
use crate::store::SaleStore;

/// Handles shared by every request. Built once by the composition root.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SaleStore>,
    pub jwt: Arc<JwtKeys>,
}

impl AppState {
    pub fn new(store: Arc<dyn SaleStore>, jwt: JwtKeys) -> Self {
        Self {
            store,
            jwt: Arc::new(jwt),
        }
    }
}
