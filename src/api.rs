//! Backend HTTP Wrappers
//!
//! One async function per portfolio endpoint, errors collapsed to `String`.
//! Network failure, non-2xx statuses, and malformed JSON all take the same
//! rejection path; callers log and move on.

use gloo_net::http::Request;

use crate::models::{Comment, Marker};

pub const COMMENTS_ENDPOINT: &str = "/leave-comment";
pub const DELETE_DATA_ENDPOINT: &str = "/delete-data";
pub const LOGIN_INFO_ENDPOINT: &str = "/get-login-info";
pub const INITIAL_MARKERS_ENDPOINT: &str = "/initial-marker";
pub const MARKERS_ENDPOINT: &str = "/markers";

/// Fetch the full comment list, in server order.
pub async fn fetch_comments() -> Result<Vec<Comment>, String> {
    Request::get(COMMENTS_ENDPOINT)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json::<Vec<Comment>>()
        .await
        .map_err(|e| e.to_string())
}

/// Tell the server to delete every comment. Empty POST body.
pub async fn delete_all_comments() -> Result<(), String> {
    Request::post(DELETE_DATA_ENDPOINT)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

/// Fetch the current login state. Never cached; fresh on every call.
pub async fn fetch_login_status() -> Result<bool, String> {
    Request::get(LOGIN_INFO_ENDPOINT)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json::<bool>()
        .await
        .map_err(|e| e.to_string())
}

/// Fetch the curated markers the page always shows.
pub async fn fetch_initial_markers() -> Result<Vec<Marker>, String> {
    Request::get(INITIAL_MARKERS_ENDPOINT)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json::<Vec<Marker>>()
        .await
        .map_err(|e| e.to_string())
}

/// Fetch the user-submitted markers.
pub async fn fetch_markers() -> Result<Vec<Marker>, String> {
    Request::get(MARKERS_ENDPOINT)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json::<Vec<Marker>>()
        .await
        .map_err(|e| e.to_string())
}

/// Persist a new marker as a form-encoded POST.
pub async fn post_marker(lat: f64, lng: f64, title: &str, content: &str) -> Result<(), String> {
    let body = crate::markers::form_body(lat, lng, title, content);
    Request::post(MARKERS_ENDPOINT)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}
