//! Portfolio Frontend App
//!
//! Root component wiring the four page features together.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CommentPanel, LoginWidget, MapWidget, QuoteDisplay};
use crate::store::PageState;

#[component]
pub fn App() -> impl IntoView {
    // Provide the page store to all children
    provide_context(Store::new(PageState::default()));

    view! {
        <div class="page-layout">
            <h1>"My Portfolio"</h1>
            <QuoteDisplay />
            <LoginWidget />
            <CommentPanel />
            <MapWidget />
        </div>
    }
}
