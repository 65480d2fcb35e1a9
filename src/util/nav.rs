//! Hard browser navigation for transitions that follow an auth change.
//!
//! Router-level redirects go through `gate::install_auth_redirect`; this is
//! for handler-driven jumps after sign-in, sign-up, and logout, where a
//! history replacement keeps the abandoned form off the back stack.

/// Replace the current history entry with `path`.
pub fn replace_with(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().replace(path).is_err() {
                log::warn!("navigation to {path} failed");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = path;
}
