use dioxus::prelude::*;

use ui::{use_auth, use_client_config, AuthProvider};
use views::{Auth, Home};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/auth")]
    Auth {},
    #[route("/home")]
    Home {},
}

impl Route {
    /// Post-auth destination from the client config, falling back to `/home`.
    fn home(path: &str) -> Self {
        path.parse().unwrap_or_else(|_| {
            tracing::warn!(path, "Configured home route is not a known route");
            Route::Home {}
        })
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));

    rsx! {
        document::Title { "Signup form" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` based on whether a session exists.
#[component]
fn Root() -> Element {
    let auth = use_auth();
    let config = use_client_config();
    let nav = use_navigator();

    if !auth().loading {
        if auth().signed_in {
            nav.replace(Route::home(&config.home_route));
        } else {
            nav.replace(Route::Auth {});
        }
    }

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_route_parsing() {
        assert_eq!(Route::home("/home"), Route::Home {});
        assert_eq!(Route::home("/auth"), Route::Auth {});
        assert_eq!(Route::home("/nowhere"), Route::Home {});
    }
}
