//! Post-auth landing page.

use dioxus::prelude::*;
use ui::{load_profile, use_auth, use_auth_client, SessionActivity, SessionActivityBadge, LogoutButton};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let client = use_auth_client();
    let nav = use_navigator();

    if !auth().loading && !auth().signed_in {
        nav.replace(Route::Auth {});
    }

    let profile = use_resource(move || {
        let client = client.clone();
        async move { load_profile(&client).await }
    });

    let greeting = match &*profile.read() {
        Some(Some(user)) => format!("Signed in as {}", user.display_name()),
        Some(None) => "Signed in".to_string(),
        None => "Loading profile...".to_string(),
    };

    rsx! {
        div {
            class: "home",
            h1 { "Home" }
            p { "{greeting}" }

            div {
                class: "home-actions",
                LogoutButton {
                    class: "home-signout",
                    on_logged_out: move |_| {
                        nav.replace(Route::Auth {});
                    },
                }
                SessionActivityBadge {}
            }

            SessionActivity {}
        }
    }
}
