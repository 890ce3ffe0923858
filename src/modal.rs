//! The catch stats overlay panel: fetches per-mouse catch counts for the
//! current location, sorts them, and renders one row per mouse.

use serde::{Deserialize, Deserializer};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::drag;
use crate::request::{SessionContext, post_request};
use crate::util::clog;

pub const MODAL_ID: &str = "mh-catch-stats";
pub const POSITION_STORAGE_KEY: &str = "mh-catch-stats-position";

const MOUSE_LIST_PATH: &str = "managers/ajax/mice/mouse_list.php";
const CROWN_IMAGE_BASE: &str = "https://www.mousehuntgame.com/images/ui/crowns/";
const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Catch-count milestone badge tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Crown {
    #[default]
    None,
    Bronze,
    Silver,
    Gold,
}

impl Crown {
    /// Badge overlay image URL; `None` for the un-crowned.
    pub fn badge_url(self) -> Option<String> {
        let tier = match self {
            Crown::None => return None,
            Crown::Bronze => "bronze",
            Crown::Silver => "silver",
            Crown::Gold => "gold",
        };
        Some(format!("{CROWN_IMAGE_BASE}crown_{tier}.png"))
    }
}

// The server sends the crown as a lowercase string, or null/absent for none;
// anything unrecognized also counts as none.
fn crown_from_value<'de, D>(d: D) -> Result<Crown, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(d)?;
    Ok(match raw.as_deref() {
        Some("bronze") => Crown::Bronze,
        Some("silver") => Crown::Silver,
        Some("gold") => Crown::Gold,
        _ => Crown::None,
    })
}

/// One mouse in the location's list, as the server reports it. Every field
/// defaults so a sparse record still renders.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MouseRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, deserialize_with = "crown_from_value")]
    pub crown: Crown,
    #[serde(default)]
    pub num_catches: u64,
}

/// Pull the first subgroup's mice out of a `mouse_list.php` response. An
/// absent or malformed `subgroups` array is an empty list, not an error.
pub fn extract_mice(response: &serde_json::Value) -> Vec<MouseRecord> {
    response
        .get("mouse_list_category")
        .and_then(|c| c.get("subgroups"))
        .and_then(|s| s.get(0))
        .and_then(|g| g.get("mice"))
        .and_then(|m| serde_json::from_value(m.clone()).ok())
        .unwrap_or_default()
}

/// Order rows by catches, most first. Stable, so ties keep the server's
/// relative order.
pub fn sort_by_catches(mice: &mut [MouseRecord]) {
    mice.sort_by(|a, b| b.num_catches.cmp(&a.num_catches));
}

/// Fetch and sort the catch list for the context's current environment.
/// Any failure along the way yields an empty list.
pub async fn fetch_mouse_stats(ctx: &SessionContext) -> Vec<MouseRecord> {
    let fields = [
        ("action", "get_environment"),
        ("category", ctx.environment_type.as_str()),
        ("user_id", ctx.user_id.as_str()),
        ("display_mode", "stats"),
        ("view", "ViewMouseListEnvironments"),
    ];
    let Some(response) = post_request(ctx, MOUSE_LIST_PATH, &fields).await else {
        return Vec::new();
    };
    let mut mice = extract_mice(&response);
    sort_by_catches(&mut mice);
    mice
}

/// Open the overlay panel. Any previously open instance is removed first, so
/// at most one exists. The panel appears immediately with an empty body; rows
/// arrive when the fetch resolves.
pub fn show_modal(ctx: SessionContext) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if let Some(existing) = document.get_element_by_id(MODAL_ID) {
        existing.remove();
    }

    let wrapper = document.create_element("div")?;
    wrapper.set_id(MODAL_ID);

    let panel = document.create_element("div")?;
    panel.class_list().add_1("mh-catch-stats-wrapper")?;

    let header = document.create_element("div")?;
    header.class_list().add_1("mh-catch-stats-header")?;

    let title = document.create_element("h1")?;
    title.set_text_content(Some("Mouse Catch Stats"));
    header.append_child(&title)?;

    let close_icon = document.create_element_ns(Some(SVG_NS), "svg")?;
    close_icon.set_attribute("class", "mh-catch-stats-close")?;
    close_icon.set_attribute("viewBox", "0 0 24 24")?;
    close_icon.set_attribute("width", "18")?;
    close_icon.set_attribute("height", "18")?;
    close_icon.set_attribute("fill", "none")?;
    close_icon.set_attribute("stroke", "currentColor")?;
    close_icon.set_attribute("stroke-width", "1.5")?;

    let close_path = document.create_element_ns(Some(SVG_NS), "path")?;
    close_path.set_attribute("d", "M18 6L6 18M6 6l12 12")?;
    close_icon.append_child(&close_path)?;

    {
        let wrapper = wrapper.clone();
        let closure = Closure::wrap(Box::new(move |_e: MouseEvent| {
            wrapper.remove();
        }) as Box<dyn FnMut(MouseEvent)>);
        close_icon.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    header.append_child(&close_icon)?;
    panel.append_child(&header)?;

    let body = document.create_element("div")?;
    body.class_list().add_1("mh-catch-stats-body")?;
    panel.append_child(&body)?;
    wrapper.append_child(&panel)?;

    document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&wrapper)?;

    drag::make_element_draggable(
        &format!("#{MODAL_ID}"),
        ".mh-catch-stats-header",
        25,
        25,
        Some(POSITION_STORAGE_KEY),
    )?;

    // If the panel is closed before the fetch resolves, the rows land on a
    // detached node and are never seen.
    spawn_local(async move {
        let mice = fetch_mouse_stats(&ctx).await;
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        for mouse in &mice {
            match build_mouse_row(&document, mouse) {
                Ok(row) => {
                    let _ = body.append_child(&row);
                }
                Err(_) => clog("failed to build catch stats row"),
            }
        }
    });

    Ok(())
}

/// One clickable row: image (with crown overlay), name, catch count. Clicking
/// opens the game's native mouse detail view.
fn build_mouse_row(document: &Document, mouse: &MouseRecord) -> Result<Element, JsValue> {
    let row: HtmlElement = document.create_element("a")?.dyn_into()?;
    row.class_list().add_1("mh-catch-stats")?;
    row.set_title(&mouse.name);

    {
        let kind = mouse.kind.clone();
        let closure = Closure::wrap(Box::new(move |_e: MouseEvent| {
            show_mouse_view(&kind);
        }) as Box<dyn FnMut(MouseEvent)>);
        row.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let image: HtmlElement = document.create_element("div")?.dyn_into()?;
    image.class_list().add_1("mh-catch-stats-image")?;
    image
        .style()
        .set_property("background-image", &format!("url('{}')", mouse.image))?;

    if let Some(url) = mouse.crown.badge_url() {
        let crown: HtmlElement = document.create_element("div")?.dyn_into()?;
        crown.class_list().add_1("mh-catch-stats-crown")?;
        crown
            .style()
            .set_property("background-image", &format!("url('{url}')"))?;
        image.append_child(&crown)?;
    }

    let name = document.create_element("div")?;
    name.class_list().add_1("mh-catch-stats-name")?;
    name.set_text_content(Some(&mouse.name));

    let image_name = document.create_element("div")?;
    image_name.append_child(&image)?;
    image_name.append_child(&name)?;

    let catches = document.create_element("div")?;
    catches.class_list().add_1("mh-catch-stats-catches")?;
    catches.set_text_content(Some(&mouse.num_catches.to_string()));

    row.append_child(&image_name)?;
    row.append_child(&catches)?;
    Ok(row.into())
}

/// Call the host page's `hg.views.MouseView.show(type)` when it exists;
/// silently does nothing when it doesn't.
fn show_mouse_view(mouse_type: &str) {
    let global = js_sys::global();
    let view = js_sys::Reflect::get(&global, &JsValue::from_str("hg"))
        .and_then(|hg| js_sys::Reflect::get(&hg, &JsValue::from_str("views")))
        .and_then(|views| js_sys::Reflect::get(&views, &JsValue::from_str("MouseView")));
    let Ok(view) = view else { return };
    let Ok(show) = js_sys::Reflect::get(&view, &JsValue::from_str("show")) else {
        return;
    };
    if let Some(func) = show.dyn_ref::<js_sys::Function>() {
        let _ = func.call1(&view, &JsValue::from_str(mouse_type));
    }
}
