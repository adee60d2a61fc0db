//! Browser Configuration
//!
//! The TOML file is embedded at build time; localStorage keys with the
//! same names as the environment overrides adjust it per browser.

use mindi::Config;

const EMBEDDED_CONFIG: &str = include_str!("../mindi.toml");

/// Load the embedded configuration with localStorage overrides applied.
///
/// A broken file or override falls back to the defaults with a console
/// warning; the dashboard should still come up.
pub fn load() -> Config {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    let lookup = |key: &str| {
        storage
            .as_ref()
            .and_then(|s| s.get_item(key).ok().flatten())
    };

    match Config::load_with_overrides(EMBEDDED_CONFIG, lookup) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(&format!("Invalid configuration, using defaults: {}", e).into());
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_embedded_config_matches_defaults() {
        let parsed = Config::from_toml_str(EMBEDDED_CONFIG).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[wasm_bindgen_test]
    fn test_local_storage_overrides_apply() {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .unwrap();
        storage.set_item("MINDI_REFRESH_SECS", "60").unwrap();

        let config = load();
        storage.remove_item("MINDI_REFRESH_SECS").unwrap();

        assert_eq!(config.refresh.interval_secs, 60);
        assert_eq!(config.pages.journal_page, 5);
    }

    #[wasm_bindgen_test]
    fn test_zero_refresh_in_storage_falls_back_to_defaults() {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .unwrap();
        storage.set_item("MINDI_REFRESH_SECS", "0").unwrap();

        let config = load();
        storage.remove_item("MINDI_REFRESH_SECS").unwrap();

        assert_eq!(config.refresh.interval_secs, 300);
    }
}
