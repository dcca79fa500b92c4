//! Login Status Widget
//!
//! Checks login state and renders the matching login/logout form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::store::{store_set_logged_in, use_page_store, PageStateStoreFields};

/// Button text and status label for a login state.
fn login_prompt(logged_in: bool) -> (&'static str, &'static str) {
    if logged_in {
        ("Logout", "You're logged in!")
    } else {
        ("Login", "Please log in to leave comment")
    }
}

#[component]
pub fn LoginWidget() -> impl IntoView {
    let store = use_page_store();

    // Fresh check on mount; nothing renders until it resolves.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_login_status().await {
                Ok(logged_in) => store_set_logged_in(&store, logged_in),
                Err(e) => web_sys::console::error_1(&e.into()),
            }
        });
    });

    view! {
        <div id="form">
            {move || store.logged_in().get().map(|logged_in| {
                let (button, status) = login_prompt(logged_in);
                view! {
                    <form action="/login" method="get">
                        <button type="submit">{button}</button>
                    </form>
                    <p class="login-status">{status}</p>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logged_in_prompt() {
        assert_eq!(login_prompt(true), ("Logout", "You're logged in!"));
    }

    #[test]
    fn test_logged_out_prompt() {
        assert_eq!(
            login_prompt(false),
            ("Login", "Please log in to leave comment")
        );
    }
}
