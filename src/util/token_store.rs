//! Persisted session token.
//!
//! The bearer token lives in `localStorage` under a fixed key so the
//! session survives page reloads. Outgoing requests re-read it on every
//! call rather than trusting an in-memory copy. Requires a browser
//! environment; off the hydrate build every operation is a no-op.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "helpy_token";

/// Read the persisted token, if any.
pub fn read() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a freshly issued token.
pub fn write(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted token on logout.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
