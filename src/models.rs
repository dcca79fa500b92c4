//! Frontend Models
//!
//! Data structures matching the backend JSON payloads.

use serde::{Deserialize, Serialize};

/// A comment in the comment section (matches `/leave-comment`)
///
/// The server attaches an id and timestamp; the client only renders the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
}

/// A map marker (matches `/initial-marker` and `/markers`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_comment_list() {
        let comments: Vec<Comment> =
            serde_json::from_str(r#"[{"text":"a"},{"text":"b"}]"#).unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].text, "a");
        assert_eq!(comments[1].text, "b");
    }

    #[test]
    fn test_decode_comment_ignores_server_fields() {
        // The server attaches id/timestamp; the client never reads them.
        let comments: Vec<Comment> =
            serde_json::from_str(r#"[{"id":42,"text":"hi","timestamp":1700000000}]"#).unwrap();
        assert_eq!(comments[0].text, "hi");
    }

    #[test]
    fn test_decode_empty_comment_list() {
        let comments: Vec<Comment> = serde_json::from_str("[]").unwrap();
        assert!(comments.is_empty());
    }

    #[test]
    fn test_decode_marker_list() {
        let markers: Vec<Marker> = serde_json::from_str(
            r#"[{"lat":36.698,"lng":99.106,"title":"Qinghai","content":"Qinghai Lake"}]"#,
        )
        .unwrap();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].lat, 36.698);
        assert_eq!(markers[0].title, "Qinghai");
    }
}
