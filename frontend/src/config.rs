use shared::WheelConfig;
use web_sys::window;

/// Id of the `<script type="application/json">` block holding page settings.
pub const CONFIG_ELEMENT_ID: &str = "wheel-config";

pub fn load_wheel_config() -> WheelConfig {
    let raw = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        log::debug!("No embedded wheel config, using defaults");
        return WheelConfig::default();
    };

    match WheelConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring malformed wheel config: {}", e);
            WheelConfig::default()
        }
    }
}
