//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Comment;

/// Shared page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Comments fetched so far, in arrival order. Fetches append without
    /// clearing, so repeated loads duplicate entries.
    pub comments: Vec<Comment>,
    /// Login state; `None` until the first successful check.
    pub logged_in: Option<bool>,
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

/// Append a fetched comment batch, preserving server order.
pub fn store_append_comments(store: &PageStore, batch: Vec<Comment>) {
    store.comments().write().extend(batch);
}

/// Record a fresh login check result.
pub fn store_set_logged_in(store: &PageStore, logged_in: bool) {
    store.logged_in().set(Some(logged_in));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(text: &str) -> Comment {
        Comment {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_append_preserves_server_order() {
        let store = PageStore::new(PageState::default());
        store_append_comments(&store, vec![comment("a"), comment("b")]);

        let comments = store.comments().get_untracked();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].text, "a");
        assert_eq!(comments[1].text, "b");
    }

    #[test]
    fn test_repeated_loads_duplicate_entries() {
        // Loads append without clearing, so a second fetch of the same list
        // shows every comment twice.
        let store = PageStore::new(PageState::default());
        store_append_comments(&store, vec![comment("a")]);
        store_append_comments(&store, vec![comment("a")]);

        let comments = store.comments().get_untracked();
        assert_eq!(comments.len(), 2);
        assert!(comments.iter().all(|c| c.text == "a"));
    }

    #[test]
    fn test_login_state_starts_undetermined() {
        let store = PageStore::new(PageState::default());
        assert_eq!(store.logged_in().get_untracked(), None);

        store_set_logged_in(&store, true);
        assert_eq!(store.logged_in().get_untracked(), Some(true));
    }
}
