use globe_core::library::{FAVORITES_KEY, ROULETTE_HISTORY_KEY};
use globe_core::{Favorites, RouletteHistory};
use web_sys as web;

fn local_storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}

fn read(key: &str) -> Option<String> {
    let raw = local_storage()?.get_item(key).ok().flatten()?;
    (!raw.trim().is_empty()).then_some(raw)
}

fn write(key: &str, value: &str) {
    let Some(storage) = local_storage() else {
        log::warn!("[storage] localStorage unavailable; {} not saved", key);
        return;
    };
    if let Err(e) = storage.set_item(key, value) {
        log::warn!("[storage] set_item({}) failed: {:?}", key, e);
    }
}

/// Saved favorites, or an empty list when nothing (or nothing readable) is stored.
pub fn load_favorites() -> Favorites {
    read(FAVORITES_KEY)
        .map(|raw| {
            Favorites::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("[storage] {}", e);
                Favorites::default()
            })
        })
        .unwrap_or_default()
}

pub fn save_favorites(favorites: &Favorites) {
    write(FAVORITES_KEY, &favorites.to_json());
}

pub fn load_history() -> RouletteHistory {
    read(ROULETTE_HISTORY_KEY)
        .map(|raw| {
            RouletteHistory::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("[storage] {}", e);
                RouletteHistory::default()
            })
        })
        .unwrap_or_default()
}

pub fn save_history(history: &RouletteHistory) {
    write(ROULETTE_HISTORY_KEY, &history.to_json());
}
