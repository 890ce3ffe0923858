//! Submenu injection into the game's HUD navigation menu.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlAnchorElement, MouseEvent};

use crate::styles::add_styles;

/// Declarative submenu entry, consumed once by [`add_submenu_item`].
pub struct SubmenuItem {
    /// Class of the top-level menu to attach under (`mice`, `kingdom`, ...).
    pub menu: &'static str,
    pub label: &'static str,
    /// Icon image URL; empty for no icon styling.
    pub icon: &'static str,
    /// Link target; `#` when the entry only fires a callback.
    pub href: &'static str,
    pub callback: Option<Box<dyn Fn() + 'static>>,
    /// External links open in a new tab and get the external-link icon.
    pub external: bool,
}

impl Default for SubmenuItem {
    fn default() -> Self {
        Self {
            menu: "kingdom",
            label: "",
            icon: "",
            href: "",
            callback: None,
            external: false,
        }
    }
}

/// CSS class slug derived from a label: lowercased, spaces to dashes.
pub fn menu_slug(label: &str) -> String {
    label.to_lowercase().replace(' ', "-")
}

/// Append the item to its parent menu. A missing menu element is a no-op.
pub fn add_submenu_item(item: SubmenuItem) -> Result<(), JsValue> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Ok(());
    };
    let selector = format!(".mousehuntHud-menu .{}", item.menu);
    let Some(menu_target) = document.query_selector(&selector).ok().flatten() else {
        return Ok(());
    };

    if !menu_target.class_list().contains("hasChildren") {
        menu_target.class_list().add_1("hasChildren")?;
    }

    let submenu = match menu_target.query_selector("ul").ok().flatten() {
        Some(ul) => ul,
        None => {
            let ul = document.create_element("ul")?;
            menu_target.append_child(&ul)?;
            ul
        }
    };

    let entry = document.create_element("li")?;
    let slug = menu_slug(item.label);
    entry.class_list().add_1(&format!("mh-submenu-item-{slug}"))?;

    if !item.icon.is_empty() {
        add_styles(&format!(
            ".mousehuntHud-menu .mh-submenu-item-{slug} .icon {{ background-image: url({}); }}",
            item.icon
        ))?;
    }

    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(if item.href.is_empty() { "#" } else { item.href });

    if let Some(callback) = item.callback {
        let closure = Closure::wrap(Box::new(move |e: MouseEvent| {
            e.prevent_default();
            callback();
        }) as Box<dyn FnMut(MouseEvent)>);
        link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let icon = document.create_element("div")?;
    icon.class_list().add_1("icon")?;

    let name = document.create_element("div")?;
    name.class_list().add_1("name")?;
    name.set_text_content(Some(item.label));

    link.append_child(&icon)?;
    link.append_child(&name)?;

    if item.external {
        let external_icon = document.create_element("div")?;
        external_icon.class_list().add_1("external_icon")?;
        link.append_child(&external_icon)?;
        link.set_target("_blank");
        link.set_rel("noopener noreferrer");
    }

    entry.append_child(&link)?;
    submenu.append_child(&entry)?;
    Ok(())
}
