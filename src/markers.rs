//! Marker Domain Helpers
//!
//! Tracks the single in-progress edit marker and encodes marker uploads.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Holder for the one marker the user is currently editing.
///
/// Invariant: at most one edit marker exists at a time. Beginning a new edit
/// hands back the previous occupant so the caller can take it off the map
/// before placing the next one.
#[derive(Debug)]
pub struct EditSlot<M> {
    current: Option<M>,
}

// Manual impl: an empty slot needs no `M: Default`, and the live map handles
// stored here have no default value.
impl<M> Default for EditSlot<M> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<M> EditSlot<M> {
    /// Store a new edit handle, returning the displaced one if any.
    pub fn begin(&mut self, handle: M) -> Option<M> {
        self.current.replace(handle)
    }

    /// Empty the slot, returning the active handle if any.
    pub fn finish(&mut self) -> Option<M> {
        self.current.take()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}

/// Form-encoded body for the marker POST: `lat=…&lng=…&title=…&content=…`.
pub fn form_body(lat: f64, lng: f64, title: &str, content: &str) -> String {
    format!(
        "lat={}&lng={}&title={}&content={}",
        lat,
        lng,
        utf8_percent_encode(title, NON_ALPHANUMERIC),
        utf8_percent_encode(content, NON_ALPHANUMERIC),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_starts_empty() {
        let slot = EditSlot::<u32>::default();
        assert!(!slot.is_active());
    }

    #[test]
    fn test_empty_slot_for_non_default_handles() {
        // Map handles carry no default value; the slot must still start empty.
        struct Handle;

        let mut slot = EditSlot::<Handle>::default();
        assert!(!slot.is_active());
        slot.begin(Handle);
        assert!(slot.is_active());
    }

    #[test]
    fn test_second_edit_displaces_the_first() {
        let mut slot = EditSlot::default();
        assert_eq!(slot.begin(1), None);
        // The first handle comes back out before the second goes in, so two
        // edit markers never coexist.
        assert_eq!(slot.begin(2), Some(1));
        assert!(slot.is_active());
        assert_eq!(slot.finish(), Some(2));
    }

    #[test]
    fn test_finish_empties_the_slot() {
        let mut slot = EditSlot::default();
        slot.begin(7);
        assert_eq!(slot.finish(), Some(7));
        assert!(!slot.is_active());
        assert_eq!(slot.finish(), None);
    }

    #[test]
    fn test_form_body_field_order() {
        assert_eq!(
            form_body(1.0, 2.0, "T", "C"),
            "lat=1&lng=2&title=T&content=C"
        );
    }

    #[test]
    fn test_form_body_encodes_reserved_characters() {
        let body = form_body(36.698, 99.106, "Qinghai Lake", "salt & sky");
        assert_eq!(
            body,
            "lat=36.698&lng=99.106&title=Qinghai%20Lake&content=salt%20%26%20sky"
        );
    }
}
