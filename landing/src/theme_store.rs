//! Browser-side theme persistence.
//!
//! The chosen theme lives in `localStorage["theme"]` and is mirrored as a
//! `light`/`dark` class on `<html>`. Every browser API here can fail
//! (private mode, sandboxed iframes); failures are logged and the page keeps
//! rendering with whatever theme it already has.

use entropy_site::Theme;
use wasm_bindgen::prelude::*;

const STORAGE_KEY: &str = "theme";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Initial theme: stored choice, then OS preference, then the default.
pub fn load_theme() -> Theme {
    stored_preference()
        .map(|value| Theme::from_preference(&value))
        .or_else(system_preference)
        .unwrap_or_default()
}

/// Remember `theme` for the next visit.
pub fn store_theme(theme: Theme) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Err(err) = storage.set_item(STORAGE_KEY, theme.as_str()) {
        warn(&format!("[theme] could not persist '{}': {:?}", theme, err));
    }
}

/// Swap the root class so the CSS palette follows `theme`.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        warn("[theme] no document element to style");
        return;
    };

    let classes = root.class_list();
    let result = classes
        .remove_1(theme.toggled().as_str())
        .and_then(|_| classes.add_1(theme.as_str()));
    if let Err(err) = result {
        warn(&format!("[theme] could not apply '{}': {:?}", theme, err));
    }
}

fn stored_preference() -> Option<String> {
    let storage = local_storage()?;
    match storage.get_item(STORAGE_KEY) {
        Ok(value) => value,
        Err(err) => {
            warn(&format!("[theme] could not read stored theme: {:?}", err));
            None
        }
    }
}

fn system_preference() -> Option<Theme> {
    let window = web_sys::window()?;
    let query = window.match_media(DARK_QUERY).ok().flatten()?;
    Some(if query.matches() { Theme::Dark } else { Theme::Light })
}

fn local_storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            warn(&format!("[theme] localStorage unavailable: {:?}", err));
            None
        }
    }
}

fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
