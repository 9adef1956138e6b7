//! Sign-in / sign-up page.

use dioxus::prelude::*;
use ui::{use_auth, use_client_config, AuthForm};

use crate::Route;

/// Auth page component.
#[component]
pub fn Auth() -> Element {
    let auth = use_auth();
    let config = use_client_config();
    let nav = use_navigator();
    let home = Route::home(&config.home_route);

    // If already signed in, skip the form
    if !auth().loading && auth().signed_in {
        nav.replace(home.clone());
    }

    rsx! {
        AuthForm {
            on_authenticated: move |_| {
                nav.push(home.clone());
            },
        }
    }
}
