//! Style injection. All CSS this crate needs lands in one shared `<style>`
//! element in `<head>`; repeat calls append to it instead of stacking new
//! elements.

use wasm_bindgen::JsValue;
use web_sys::window;

pub const STYLE_ELEMENT_ID: &str = "mh-mouseplace-custom-styles";

/// Append a block of CSS text to the shared style element, creating the
/// element on first use.
pub fn add_styles(css: &str) -> Result<(), JsValue> {
    let doc = window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if let Some(existing) = doc.get_element_by_id(STYLE_ELEMENT_ID) {
        let merged = format!("{}{}", existing.text_content().unwrap_or_default(), css);
        existing.set_text_content(Some(&merged));
        return Ok(());
    }

    let style = doc.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(css));
    doc.head()
        .ok_or_else(|| JsValue::from_str("no head"))?
        .append_child(&style)?;
    Ok(())
}

/// Panel, row and header styling for the catch stats overlay.
pub const PANEL_STYLES: &str = "
    #mh-catch-stats {
        position: absolute;
        top: 25px;
        left: 25px;
        z-index: 50;
    }

    .mh-catch-stats-wrapper {
        width: 250px;
        background: #f6f3eb;
        border: 1px solid #534022;
        box-shadow: 1px 1px 1px 0px #9d917f, 0 0 20px 3px black;
    }

    .mh-catch-stats-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        border-bottom: 1px solid #ceb7a6;
        background-color: #926944;
        padding: 10px;
        color: #f6f3eb;
    }

    .mh-catch-stats-header h1 {
        color: #f6f3eb;
    }

    .mh-catch-stats-close:hover {
        outline: 1px solid #ccc;
        background-color: #eee;
        border-radius: 50%;
        cursor: pointer;
        color: #926944;
    }

    .mh-catch-stats-body {
        max-height: 90vh;
        overflow-y: scroll;
        overflow-x: hidden;
    }

    .mh-catch-stats-wrapper .mh-catch-stats:nth-child(odd) {
        background-color: #e8e3d7;
    }

    .mh-catch-stats {
        display: flex;
        justify-content: space-between;
        padding: 2px 0;
        align-items: center;
        padding: 10px 10px;
        color: #000;
    }

    .mh-catch-stats:hover,
    .mh-catch-stats-wrapper .mh-catch-stats:nth-child(odd):hover {
        outline: 1px solid #ccc;
        background-color: #eee;
        text-decoration: none;
        color: #665f5f;
    }

    .mh-catch-stats-image {
        position: relative;
        width: 40px;
        height: 40px;
        display: inline-block;
        vertical-align: middle;
        background-size: contain;
        background-repeat: no-repeat;
        border-radius: 2px;
        box-shadow: 1px 1px 1px #999;
    }

    .mh-catch-stats-crown {
        position: absolute;
        right: -5px;
        bottom: -5px;
        width: 20px;
        height: 20px;
        background-repeat: no-repeat;
        background-position: 50% 50%;
        background-color: #fff;
        border: 1px solid #333;
        background-size: 80%;
        border-radius: 50%;
    }

    .mh-catch-stats-name {
        display: inline-block;
        vertical-align: middle;
        padding-left: 10px;
    }

    .mh-catch-stats-catches {
        padding-right: 5px;
    }
";
