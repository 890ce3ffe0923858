//! MouseHunt location catch stats overlay.
//!
//! Compiled to WASM and loaded into the game page (userscript loader or an
//! injected module script), this crate adds a "Location Catch Stats" entry to
//! the HUD mice menu. Clicking it opens a draggable panel listing the
//! player's catch counts for every mouse in the current location, fetched
//! from the game's own ajax endpoint. Every failure mode (missing session,
//! missing menu, bad response) degrades to the feature silently doing
//! nothing.

use wasm_bindgen::prelude::*;

mod drag;
mod menu;
mod modal;
mod request;
mod styles;
mod util;

pub use drag::{
    PanelPosition, clamp_left, clamp_position, clamp_top, decode_position, drag_step,
    encode_position, make_element_draggable,
};
pub use menu::{SubmenuItem, add_submenu_item, menu_slug};
pub use modal::{
    Crown, MODAL_ID, MouseRecord, POSITION_STORAGE_KEY, extract_mice, show_modal, sort_by_catches,
};
pub use request::{BASE_URL, SessionContext, build_request_body, encode_form, request_url};
pub use styles::{PANEL_STYLES, STYLE_ELEMENT_ID, add_styles};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Load-time setup: inject the panel styles and add the menu entry that opens
/// the stats panel. Called once by the loader after the page is ready.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    styles::add_styles(styles::PANEL_STYLES)?;
    menu::add_submenu_item(SubmenuItem {
        menu: "mice",
        label: "Location Catch Stats",
        icon: "https://www.mousehuntgame.com/images/ui/hud/menu/prize_shoppe.png?",
        callback: Some(Box::new(|| {
            let ctx = SessionContext::from_page();
            if modal::show_modal(ctx).is_err() {
                util::clog("failed to open catch stats panel");
            }
        })),
        ..SubmenuItem::default()
    })
}
