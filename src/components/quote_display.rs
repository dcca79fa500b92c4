//! Quote Display Component
//!
//! Shows one of the fixed quotes, re-rolled on demand.

use leptos::prelude::*;

use crate::quotes::random_quote;

#[component]
pub fn QuoteDisplay() -> impl IntoView {
    let (quote, set_quote) = signal(random_quote());

    view! {
        <section class="quote-section">
            <p id="quote-container">{quote}</p>
            <button on:click=move |_| set_quote.set(random_quote())>
                "New quote"
            </button>
        </section>
    }
}
