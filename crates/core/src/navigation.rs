//! Client-side navigation contract.
//!
//! Controllers never build URL strings themselves; they hand a [`Route`] to the
//! injected [`Navigator`], which the host (browser router, desktop shell, CLI)
//! implements.

use std::fmt;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Anchor inside a product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ProductAnchor {
    Question(String),
    Answer(String),
}

/// Destinations the storefront components can navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    Checkout,
    Cart,
    Order { id: String },
    Message { id: String },
    Product {
        id: String,
        anchor: Option<ProductAnchor>,
    },
    Notifications,
}

impl Route {
    /// Renders the URL path (and query, when there is one) for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Checkout => "/checkout".to_string(),
            Route::Cart => "/cart".to_string(),
            Route::Order { id } => format!("/account/orders/{}", encode_segment(id)),
            Route::Message { id } => format!("/messages/{}", encode_segment(id)),
            Route::Product { id, anchor } => {
                let base = format!("/products/{}", encode_segment(id));
                match anchor {
                    None => base,
                    Some(ProductAnchor::Question(q)) => {
                        format!("{}?question={}", base, urlencoding::encode(q))
                    }
                    Some(ProductAnchor::Answer(a)) => {
                        format!("{}?answer={}", base, urlencoding::encode(a))
                    }
                }
            }
            Route::Notifications => "/account/notifications".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Host-provided router.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &Route);
}

/// Navigator that only records requested routes, for tests and headless hosts.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    routes: Arc<Mutex<Vec<Route>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded routes, oldest first.
    pub fn routes(&self) -> Vec<Route> {
        self.routes
            .lock()
            .map(|routes| routes.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<Route> {
        self.routes().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &Route) {
        if let Ok(mut routes) = self.routes.lock() {
            routes.push(route.clone());
        }
    }
}
