//! Browser Helpers
//!
//! Thin wrappers over window dialogs, localStorage, the body class list,
//! file reading and downloads.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Blocking notification
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Blocking text prompt; None when cancelled
pub fn prompt(message: &str) -> Option<String> {
    web_sys::window()?.prompt_with_message(message).ok().flatten()
}

pub fn set_body_class(class: &str, enabled: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let classes = body.class_list();
    let result = if enabled { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(e) = result {
        log::warn!("[BROWSER] Failed to update body class {}: {:?}", class, e);
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Dark mode flag: key present means enabled
pub fn load_dark_mode(key: &str) -> bool {
    local_storage()
        .and_then(|s| s.get_item(key).ok().flatten())
        .is_some()
}

pub fn store_dark_mode(key: &str, enabled: bool) {
    let Some(storage) = local_storage() else {
        log::warn!("[BROWSER] localStorage unavailable, dark mode not persisted");
        return;
    };
    let result = if enabled { storage.set_item(key, "1") } else { storage.remove_item(key) };
    if let Err(e) = result {
        log::warn!("[BROWSER] Failed to persist dark mode: {:?}", e);
    }
}

/// Page origin, e.g. `http://localhost:5000`
pub fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Read the first file selected in an `<input type="file">`
pub async fn read_selected_file(input: &web_sys::HtmlInputElement) -> Result<Option<String>, String> {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };
    let text = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", file.name(), e))?;
    Ok(text.as_string())
}

/// Offer `content` as a file download
pub fn download_text(file_name: &str, content: &str, mime: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let body = document.body().ok_or("no body")?;

    let parts = js_sys::Array::of1(&content.into());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| format!("Blob error: {:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("URL error: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    let _ = body.append_child(&anchor);
    anchor.click();
    let _ = body.remove_child(&anchor);
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
