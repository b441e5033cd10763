// SPDX-License-Identifier: MPL-2.0
//! Navigation routes and the router port.
//!
//! The storefront itself performs no routing: buy, chat and profile
//! actions resolve to a path and are handed to whatever [`Router`]
//! implementation the app was wired with. The default implementation only
//! reports the resolved path, which keeps the desktop build self-contained
//! while an embedding shell can substitute a real navigator.

use urlencoding::encode;

/// A navigation destination produced by card and modal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The listing's buy flow.
    Buy { destination: String },
    /// Chat with the seller about a specific item.
    Chat { seller: String, item: String },
    /// The seller's public profile.
    Profile { seller: String },
}

impl Route {
    /// Resolves the route to a path, URL-encoding interpolated values.
    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Route::Buy { destination } => {
                if destination.starts_with('/') {
                    destination.clone()
                } else {
                    format!("/{}", destination)
                }
            }
            Route::Chat { seller, item } => format!(
                "/chat?seller={}&item={}&action=chat",
                encode(seller),
                encode(item)
            ),
            Route::Profile { seller } => format!("/profile/{}", encode(seller)),
        }
    }
}

/// Port through which the app delegates navigation side effects.
pub trait Router {
    /// Navigates to the given route.
    fn open(&self, route: &Route);
}

/// Default router: reports the resolved path on stderr.
#[derive(Debug, Default)]
pub struct LogRouter;

impl Router for LogRouter {
    fn open(&self, route: &Route) {
        eprintln!("navigate: {}", route.to_path());
    }
}
