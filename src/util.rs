// Console helpers shared across modules.

/// Debug-level console message. Failure paths here degrade to silent no-ops
/// for the player, so this is the only trace they leave.
pub(crate) fn clog(msg: &str) {
    web_sys::console::debug_1(&msg.into());
}
