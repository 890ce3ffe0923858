#![cfg(target_arch = "wasm32")]

// Browser tests for the DOM-facing behavior: style injection, modal lifecycle
// and the silent no-op paths.

use mh_catch_stats::{
    MODAL_ID, STYLE_ELEMENT_ID, SessionContext, add_styles, add_submenu_item,
    make_element_draggable, show_modal, SubmenuItem,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::window;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    window().expect("window missing").document().expect("document missing")
}

// Let pending spawn_local futures settle.
async fn settle() {
    JsFuture::from(js_sys::Promise::resolve(&wasm_bindgen::JsValue::NULL))
        .await
        .unwrap();
}

#[wasm_bindgen_test]
fn styles_share_one_element() {
    add_styles(".t-one { color: red; }").unwrap();
    add_styles(".t-two { color: blue; }").unwrap();

    let doc = document();
    let found = doc
        .query_selector_all(&format!("#{}", STYLE_ELEMENT_ID))
        .unwrap();
    assert_eq!(found.length(), 1);

    let content = doc
        .get_element_by_id(STYLE_ELEMENT_ID)
        .unwrap()
        .text_content()
        .unwrap();
    assert!(content.contains(".t-one"));
    assert!(content.contains(".t-two"));
}

#[wasm_bindgen_test]
async fn opening_twice_leaves_one_modal() {
    show_modal(SessionContext::default()).unwrap();
    show_modal(SessionContext::default()).unwrap();
    settle().await;

    let found = document().query_selector_all(&format!("#{}", MODAL_ID)).unwrap();
    assert_eq!(found.length(), 1);
}

// No session hash: the panel opens but the body stays empty, without throwing.
#[wasm_bindgen_test]
async fn modal_body_stays_empty_without_session() {
    show_modal(SessionContext::default()).unwrap();
    settle().await;
    settle().await;

    let body = document()
        .query_selector(".mh-catch-stats-body")
        .unwrap()
        .expect("modal body missing");
    assert_eq!(body.child_element_count(), 0);
}

#[wasm_bindgen_test]
async fn close_icon_removes_the_modal() {
    show_modal(SessionContext::default()).unwrap();
    settle().await;

    let doc = document();
    let close: web_sys::HtmlElement = doc
        .query_selector(".mh-catch-stats-close")
        .unwrap()
        .expect("close icon missing")
        .unchecked_into();
    close.click();
    assert!(doc.get_element_by_id(MODAL_ID).is_none());
}

#[wasm_bindgen_test]
fn missing_menu_is_a_no_op() {
    // The test page has no .mousehuntHud-menu element.
    add_submenu_item(SubmenuItem {
        menu: "mice",
        label: "Test Entry",
        ..SubmenuItem::default()
    })
    .unwrap();
    assert!(
        document()
            .query_selector(".mh-submenu-item-test-entry")
            .unwrap()
            .is_none()
    );
}

#[wasm_bindgen_test]
fn missing_drag_target_is_a_no_op() {
    make_element_draggable("#does-not-exist", ".nor-this", 0, 0, None).unwrap();
}

#[wasm_bindgen_test]
fn draggable_init_applies_default_position() {
    let doc = document();
    let target: web_sys::HtmlElement = doc.create_element("div").unwrap().unchecked_into();
    target.set_id("drag-fixture");
    let handle = doc.create_element("div").unwrap();
    handle.set_class_name("drag-fixture-handle");
    target.append_child(&handle).unwrap();
    doc.body().unwrap().append_child(&target).unwrap();

    make_element_draggable("#drag-fixture", ".drag-fixture-handle", 25, 25, None).unwrap();
    let style = target.style();
    assert_eq!(style.get_property_value("left").unwrap(), "25px");
    assert_eq!(style.get_property_value("top").unwrap(), "25px");
    target.remove();
}
