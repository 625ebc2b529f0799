//! doc-console: client console for a document extraction backend.
//!
//! The backend parses and extracts; this application reconciles its document
//! collection with local view state (search, sort, selection, status) and
//! renders the result.

pub mod config;
pub mod controller;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use controller::ViewController;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state: the controller behind its single lock. Holding
/// the lock for the whole of an operation keeps every mutation atomic with
/// respect to rendering.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Mutex<ViewController>>,
}

impl AppState {
    pub fn new(controller: ViewController) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
        }
    }
}
