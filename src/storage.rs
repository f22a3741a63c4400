//! Best-streak persistence in `localStorage`.
//! Best is a convenience value, not authoritative game state, so the public
//! wrappers are best-effort: a missing, denied or garbled store degrades to 0
//! on read and to a dropped write. Callers never see an error.

use web_sys::Storage;

/// Namespaced key; value is the decimal string of the best streak.
const BEST_KEY: &str = "shade_best_v1";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Parse a stored best value. Missing or non-numeric input counts as 0.
pub fn parse_best(raw: Option<String>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok()).unwrap_or(0)
}

/// Load the persisted best streak, defaulting to 0 when storage is
/// unavailable or the value is unreadable.
pub fn load_best() -> u32 {
    let raw = local_storage().and_then(|store| store.get_item(BEST_KEY).ok().flatten());
    parse_best(raw)
}

/// Persist the best streak. Write failures (quota, denied storage) are
/// silently dropped.
pub fn save_best(best: u32) {
    if let Some(store) = local_storage() {
        let _ = store.set_item(BEST_KEY, &best.to_string());
    }
}
