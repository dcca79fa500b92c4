//! Comment Panel Component
//!
//! Fetches and renders the comment list; supports refresh and delete-all.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::store::{store_append_comments, use_page_store, PageStateStoreFields, PageStore};

/// Fetch the comment list and append it to the store.
///
/// Appends without clearing, so calling this twice shows every comment twice.
async fn load_comments(store: PageStore) {
    match api::fetch_comments().await {
        Ok(batch) => store_append_comments(&store, batch),
        Err(e) => web_sys::console::error_1(&e.into()),
    }
}

/// Strictly sequence the delete flow: delete, then re-fetch, then reload.
/// Nothing past a failed delete runs.
async fn delete_sequence<D, F, R>(delete: D, refetch: F, reload: R) -> Result<(), String>
where
    D: Future<Output = Result<(), String>>,
    F: Future<Output = ()>,
    R: FnOnce(),
{
    delete.await?;
    refetch.await;
    reload();
    Ok(())
}

/// Delete everything, confirm the list is empty, then reload the page.
async fn delete_and_reload(store: PageStore) {
    let result = delete_sequence(api::delete_all_comments(), load_comments(store), || {
        if let Some(win) = web_sys::window() {
            let _ = win.location().reload();
        }
    })
    .await;
    if let Err(e) = result {
        web_sys::console::error_1(&e.into());
    }
}

#[component]
pub fn CommentPanel() -> impl IntoView {
    let store = use_page_store();

    // Initial load on mount
    Effect::new(move |_| {
        spawn_local(load_comments(store));
    });

    view! {
        <section class="comment-section">
            <h2>"Comments"</h2>
            <ul id="comment-list">
                {move || {
                    store.comments().get().into_iter().map(|comment| {
                        view! {
                            <li class="comment">
                                <span>{comment.text}</span>
                            </li>
                        }
                    }).collect_view()
                }}
            </ul>
            <button on:click=move |_| spawn_local(load_comments(store))>
                "Refresh"
            </button>
            <button class="delete-btn" on:click=move |_| spawn_local(delete_and_reload(store))>
                "Delete all"
            </button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type StepLog = Rc<RefCell<Vec<&'static str>>>;

    fn record(log: &StepLog, step: &'static str) {
        log.borrow_mut().push(step);
    }

    #[tokio::test]
    async fn test_reload_runs_once_after_delete_and_refetch() {
        let log: StepLog = Rc::new(RefCell::new(Vec::new()));

        let result = delete_sequence(
            {
                let log = Rc::clone(&log);
                async move {
                    record(&log, "delete");
                    Ok(())
                }
            },
            {
                let log = Rc::clone(&log);
                async move {
                    record(&log, "refetch");
                }
            },
            {
                let log = Rc::clone(&log);
                move || record(&log, "reload")
            },
        )
        .await;

        assert_eq!(result, Ok(()));
        assert_eq!(*log.borrow(), vec!["delete", "refetch", "reload"]);
    }

    #[tokio::test]
    async fn test_failed_delete_stops_the_sequence() {
        let log: StepLog = Rc::new(RefCell::new(Vec::new()));

        let result = delete_sequence(
            async { Err("delete failed".to_string()) },
            {
                let log = Rc::clone(&log);
                async move {
                    record(&log, "refetch");
                }
            },
            {
                let log = Rc::clone(&log);
                move || record(&log, "reload")
            },
        )
        .await;

        assert_eq!(result, Err("delete failed".to_string()));
        // The stale list stays; no re-fetch and no reload.
        assert!(log.borrow().is_empty());
    }
}
