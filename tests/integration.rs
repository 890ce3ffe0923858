// Integration tests (native) for the `mh-catch-stats` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use mh_catch_stats::{
    PanelPosition, SessionContext, build_request_body, clamp_left, clamp_position, clamp_top,
    decode_position, drag_step, encode_form, encode_position, menu_slug, request_url,
};

#[test]
fn top_clamp_floors_at_minus_twenty() {
    assert_eq!(clamp_top(-100), -20);
    assert_eq!(clamp_top(-21), -20);
    assert_eq!(clamp_top(-20), -20);
    assert_eq!(clamp_top(0), 0);
    assert_eq!(clamp_top(300), 300);
}

#[test]
fn left_clamp_keeps_twenty_px_of_handle_on_screen() {
    // Handle 250px wide, viewport body 1024px wide.
    assert_eq!(clamp_left(-500, 250, 1024), -230);
    assert_eq!(clamp_left(-230, 250, 1024), -230);
    assert_eq!(clamp_left(0, 250, 1024), 0);
    assert_eq!(clamp_left(1004, 250, 1024), 1004);
    assert_eq!(clamp_left(2000, 250, 1024), 1004);
}

// Pointer moving right/down drags the panel right/down by the same amount.
#[test]
fn drag_step_follows_pointer_delta() {
    let pos = PanelPosition { x: 25, y: 25 };
    let next = drag_step(pos, (100, 100), (110, 105), 250, 1024);
    assert_eq!(next, PanelPosition { x: 35, y: 30 });

    let back = drag_step(next, (110, 105), (100, 100), 250, 1024);
    assert_eq!(back, pos);
}

#[test]
fn drag_step_clamps_out_of_bounds_moves() {
    // Dragging far above the top stops at -20.
    let pos = PanelPosition { x: 25, y: 25 };
    let next = drag_step(pos, (100, 500), (100, 0), 250, 1024);
    assert_eq!(next.y, -20);

    // Dragging far off the right edge stops 20px short of losing the handle.
    let next = drag_step(pos, (0, 100), (5000, 100), 250, 1024);
    assert_eq!(next.x, 1004);
}

#[test]
fn position_round_trips_through_json() {
    let pos = PanelPosition { x: 100, y: 50 };
    let raw = encode_position(pos);
    assert_eq!(decode_position(&raw), Some(pos));

    // On-disk format matches what the storage key historically held.
    assert_eq!(decode_position("{\"x\":100,\"y\":50}"), Some(pos));
}

#[test]
fn corrupt_stored_position_is_rejected() {
    assert_eq!(decode_position("not json"), None);
    assert_eq!(decode_position("{\"x\":\"oops\"}"), None);
    assert_eq!(decode_position(""), None);
}

#[test]
fn stored_positions_are_clamped_on_restore() {
    let stored = PanelPosition { x: 9000, y: -300 };
    let restored = clamp_position(stored, 250, 1024);
    assert_eq!(restored, PanelPosition { x: 1004, y: -20 });
}

#[test]
fn form_encoding_escapes_reserved_characters() {
    assert_eq!(encode_form(&[("sn", "Hitgrab")]), "sn=Hitgrab");
    assert_eq!(
        encode_form(&[("a", "x y"), ("b", "1&2=3")]),
        "a=x+y&b=1%262%3D3"
    );
    assert_eq!(encode_form(&[]), "");
}

#[test]
fn request_body_carries_service_fields_then_caller_fields() {
    let ctx = SessionContext {
        unique_hash: "abc123".into(),
        ..SessionContext::default()
    };
    let body = build_request_body(&ctx, &[("action", "get_environment")]).unwrap();
    assert_eq!(body, "sn=Hitgrab&hg_is_ajax=1&uh=abc123&action=get_environment");
}

// No session hash means no request at all.
#[test]
fn missing_session_hash_yields_no_request_body() {
    let ctx = SessionContext::default();
    assert!(!ctx.has_session());
    assert!(build_request_body(&ctx, &[("action", "get_environment")]).is_none());
}

#[test]
fn request_url_prefers_callback_base() {
    let mut ctx = SessionContext::default();
    assert_eq!(
        request_url(&ctx, "managers/ajax/mice/mouse_list.php"),
        "https://www.mousehuntgame.com/managers/ajax/mice/mouse_list.php"
    );
    ctx.callback_url = Some("https://example.test/".into());
    assert_eq!(
        request_url(&ctx, "managers/ajax/mice/mouse_list.php"),
        "https://example.test/managers/ajax/mice/mouse_list.php"
    );
}

#[test]
fn menu_slug_lowercases_and_dashes() {
    assert_eq!(menu_slug("Location Catch Stats"), "location-catch-stats");
    assert_eq!(menu_slug("Mice"), "mice");
    assert_eq!(menu_slug(""), "");
}
