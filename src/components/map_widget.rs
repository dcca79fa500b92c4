//! Map Widget Component
//!
//! Interactive map with persisted display markers and a single click-to-edit
//! marker the user can fill in and submit.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::api;
use crate::maps;
use crate::markers::EditSlot;

/// Default map center
const MAP_CENTER_LAT: f64 = 37.422;
const MAP_CENTER_LNG: f64 = -122.084;
/// Zoom levels for the whole-world view and a focused marker
const OVERVIEW_ZOOM: f64 = 1.0;
const FOCUS_ZOOM: f64 = 10.0;

/// The live pieces of an in-progress marker edit.
struct EditHandle {
    marker: maps::Marker,
    window: maps::InfoWindow,
}

/// Owns the map instance and the edit-marker slot for the page session.
///
/// Kept alive past the component body by the JS event closures that hold
/// clones of the `Rc`.
pub struct MapController {
    map: maps::Map,
    edit: RefCell<EditSlot<EditHandle>>,
}

impl MapController {
    /// Create the map in `container` and wire up the click-to-edit handler.
    pub fn mount(container: &web_sys::Element) -> Rc<Self> {
        let map = maps::Map::new(
            container,
            &maps::map_options(MAP_CENTER_LAT, MAP_CENTER_LNG, OVERVIEW_ZOOM),
        );
        let ctrl = Rc::new(Self {
            map,
            edit: RefCell::new(EditSlot::default()),
        });

        let on_click = {
            let ctrl = Rc::clone(&ctrl);
            Closure::<dyn FnMut(maps::MapMouseEvent)>::new(move |ev: maps::MapMouseEvent| {
                let pos = ev.lat_lng();
                ctrl.begin_edit(pos.lat(), pos.lng());
            })
        };
        maps::add_listener(ctrl.map.as_ref(), "click", on_click.as_ref().unchecked_ref());
        on_click.forget();

        ctrl
    }

    /// Start the two persisted-marker loads.
    ///
    /// The fetches are independent and may resolve in either order; overlap
    /// between the two endpoints renders duplicate markers.
    pub fn load_persisted(self: &Rc<Self>) {
        let ctrl = Rc::clone(self);
        spawn_local(async move {
            match api::fetch_initial_markers().await {
                Ok(batch) => ctrl.render_batch(batch),
                Err(e) => web_sys::console::error_1(&e.into()),
            }
        });

        let ctrl = Rc::clone(self);
        spawn_local(async move {
            match api::fetch_markers().await {
                Ok(batch) => ctrl.render_batch(batch),
                Err(e) => web_sys::console::error_1(&e.into()),
            }
        });
    }

    fn render_batch(&self, batch: Vec<crate::models::Marker>) {
        for m in batch {
            self.add_display_marker(m.lat, m.lng, &m.title, &m.content);
        }
    }

    /// Place a read-only marker whose info window zooms the map in and out.
    pub fn add_display_marker(&self, lat: f64, lng: f64, title: &str, content: &str) {
        let marker = maps::Marker::new(&maps::marker_options(&self.map, lat, lng, title));

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(body) = doc.create_element("div") else {
            return;
        };
        body.set_text_content(Some(content));
        let window = maps::InfoWindow::new(&maps::info_window_options(&body));

        let on_click = {
            let map = self.map.clone();
            let marker = marker.clone();
            let window = window.clone();
            Closure::<dyn FnMut()>::new(move || {
                window.open(&map, &marker);
                map.set_zoom(FOCUS_ZOOM);
                map.set_center(&marker.get_position());
            })
        };
        maps::add_listener(marker.as_ref(), "click", on_click.as_ref().unchecked_ref());
        on_click.forget();

        let on_closeclick = {
            let map = self.map.clone();
            Closure::<dyn FnMut()>::new(move || {
                map.set_zoom(OVERVIEW_ZOOM);
            })
        };
        maps::add_listener(window.as_ref(), "closeclick", on_closeclick.as_ref().unchecked_ref());
        on_closeclick.forget();
    }

    /// Start editing a new marker at the clicked coordinate.
    ///
    /// Any marker already being edited is taken off the map first, so at most
    /// one edit marker ever exists.
    pub fn begin_edit(self: &Rc<Self>, lat: f64, lng: f64) {
        if let Some(prev) = self.edit.borrow_mut().finish() {
            prev.marker.set_map(None);
            prev.window.close();
        }

        let Some(form) = self.build_edit_form(lat, lng) else {
            return;
        };
        let marker = maps::Marker::new(&maps::marker_options(&self.map, lat, lng, "New marker"));
        let window = maps::InfoWindow::new(&maps::info_window_options(&form));

        // Closing without submitting abandons the edit; nothing is persisted.
        let on_closeclick = {
            let ctrl = Rc::clone(self);
            Closure::<dyn FnMut()>::new(move || {
                if let Some(edit) = ctrl.edit.borrow_mut().finish() {
                    edit.marker.set_map(None);
                }
            })
        };
        maps::add_listener(window.as_ref(), "closeclick", on_closeclick.as_ref().unchecked_ref());
        on_closeclick.forget();

        window.open(&self.map, &marker);
        self.edit.borrow_mut().begin(EditHandle { marker, window });
    }

    /// Build the editable info-window content: title, content, submit.
    fn build_edit_form(self: &Rc<Self>, lat: f64, lng: f64) -> Option<web_sys::Element> {
        let doc = web_sys::window().and_then(|w| w.document())?;
        let form = doc.create_element("div").ok()?;

        let title_area: web_sys::HtmlTextAreaElement =
            doc.create_element("textarea").ok()?.dyn_into().ok()?;
        title_area.set_placeholder("Title");
        let content_area: web_sys::HtmlTextAreaElement =
            doc.create_element("textarea").ok()?.dyn_into().ok()?;
        content_area.set_placeholder("Content");
        let submit: web_sys::HtmlButtonElement =
            doc.create_element("button").ok()?.dyn_into().ok()?;
        submit.set_text_content(Some("Submit"));

        form.append_child(&title_area).ok()?;
        form.append_child(&content_area).ok()?;
        form.append_child(&submit).ok()?;

        let on_submit = {
            let ctrl = Rc::clone(self);
            let title_area = title_area.clone();
            let content_area = content_area.clone();
            Closure::<dyn FnMut()>::new(move || {
                ctrl.submit_edit(lat, lng, title_area.value(), content_area.value());
            })
        };
        let _ = submit.add_event_listener_with_callback("click", on_submit.as_ref().unchecked_ref());
        on_submit.forget();

        Some(form)
    }

    /// Persist the edited marker and swap it for a display marker.
    ///
    /// The POST is fire-and-forget: the display marker appears immediately,
    /// whether or not the server ever acknowledges it.
    fn submit_edit(&self, lat: f64, lng: f64, title: String, content: String) {
        {
            let title = title.clone();
            let content = content.clone();
            spawn_local(async move {
                let _ = api::post_marker(lat, lng, &title, &content).await;
            });
        }
        self.add_display_marker(lat, lng, &title, &content);

        if let Some(edit) = self.edit.borrow_mut().finish() {
            edit.marker.set_map(None);
            edit.window.close();
        }
    }
}

#[component]
pub fn MapWidget() -> impl IntoView {
    let map_div = NodeRef::<Div>::new();
    let (mounted, set_mounted) = signal(false);

    // Create the map once the container element exists. The controller stays
    // alive through the event closures that hold it.
    Effect::new(move |_| {
        if mounted.get() {
            return;
        }
        let Some(el) = map_div.get() else {
            return;
        };
        let ctrl = MapController::mount(&el);
        ctrl.load_persisted();
        set_mounted.set(true);
    });

    view! {
        <section class="map-section">
            <h2>"Places"</h2>
            <div id="map" node_ref=map_div></div>
        </section>
    }
}
