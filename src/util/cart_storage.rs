//! Cart persistence across page reloads.
//!
//! Serializes the cart lines to `localStorage` as JSON. Requires a
//! browser environment; SSR builds get inert stubs. Storage failures are
//! swallowed — a cart that doesn't survive a reload beats a crashed page.

use crate::state::cart::CartLine;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "coursemart_cart";

/// Read the persisted cart, if any. Malformed stored JSON is treated as
/// an empty cart.
#[must_use]
pub fn load() -> Option<Vec<CartLine>> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the current cart lines.
pub fn save(lines: &[CartLine]) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(raw) = serde_json::to_string(lines) {
                    if storage.set_item(STORAGE_KEY, &raw).is_err() {
                        log::warn!("cart: could not persist to localStorage");
                    }
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lines;
    }
}
