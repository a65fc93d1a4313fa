//! Navigation options with TOML preset support.
//!
//! Everything a host can tune (motion toggles, movement limits, rate
//! shaping, reference body, key bindings) is consolidated here. Options
//! serialize to/from TOML so hosts can keep navigation presets on disk.

mod body;
mod keybindings;
mod limits;
mod motion;

use std::path::Path;

pub use body::ReferenceBody;
pub use keybindings::KeybindingOptions;
pub use limits::{LimitOptions, RateOptions, FAR};
pub use motion::{InertiaOptions, MotionOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[limits]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct NavigationOptions {
    /// Which motions the knobs may drive.
    pub motion: MotionOptions,
    /// Inertia tuning carried for hosts.
    #[schemars(skip)]
    pub inertia: InertiaOptions,
    /// Per-frame movement caps and zoom distance bounds.
    pub limits: LimitOptions,
    /// Zoom and rotate rate shaping.
    pub rates: RateOptions,
    /// Reference body used for heights and rotate-rate scaling.
    #[schemars(skip)]
    pub reference_body: ReferenceBody,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl NavigationOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(NavigationOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let content = std::fs::read_to_string(path).map_err(NavError::Io)?;
        let mut options: Self = toml::from_str(&content)
            .map_err(|e| NavError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        options.validate()?;
        log::info!("Loaded navigation options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), NavError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NavError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(NavError::Io)?;
        }
        std::fs::write(path, content).map_err(NavError::Io)?;
        log::info!("Saved navigation options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Check every value against its documented domain.
    pub fn validate(&self) -> Result<(), NavError> {
        let limits = &self.limits;
        let rates = &self.rates;

        if !(0.0..1.0).contains(&limits.maximum_movement_ratio) {
            return Err(invalid(format!(
                "maximum_movement_ratio must be in [0, 1), got {}",
                limits.maximum_movement_ratio
            )));
        }
        if !limits.minimum_zoom_distance.is_finite()
            || limits.minimum_zoom_distance < 0.0
        {
            return Err(invalid(format!(
                "minimum_zoom_distance must be finite and non-negative, got {}",
                limits.minimum_zoom_distance
            )));
        }
        if limits.maximum_zoom_distance.is_nan()
            || limits.maximum_zoom_distance < limits.minimum_zoom_distance
        {
            return Err(invalid(format!(
                "maximum_zoom_distance ({}) must be at least \
                 minimum_zoom_distance ({})",
                limits.maximum_zoom_distance, limits.minimum_zoom_distance
            )));
        }
        if rates.zoom_factor.is_nan() || rates.zoom_factor <= 0.0
            || !positive_range(rates.minimum_zoom_rate, rates.maximum_zoom_rate)
        {
            return Err(invalid(
                "zoom rates must be positive with minimum <= maximum".into(),
            ));
        }
        if !positive_range(
            rates.minimum_rotate_rate,
            rates.maximum_rotate_rate,
        ) {
            return Err(invalid(
                "rotate rates must be positive with minimum <= maximum".into(),
            ));
        }
        if !self.reference_body.ellipsoid().is_valid() {
            return Err(invalid(format!(
                "reference body radii must be finite and positive: {:?}",
                self.reference_body
            )));
        }
        self.keybindings.validate()
    }
}

/// `true` when `0 < min <= max`; NaN on either side fails.
fn positive_range(min: f64, max: f64) -> bool {
    min > 0.0 && max >= min
}

fn invalid(msg: String) -> NavError {
    NavError::InvalidOptions(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavCommand;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = NavigationOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: NavigationOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
        assert!(parsed.limits.maximum_zoom_distance.is_infinite());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[limits]
minimum_zoom_distance = 100.0

[motion]
enable_tilt = false
";
        let opts: NavigationOptions = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.limits.minimum_zoom_distance, 100.0);
        assert!(!opts.motion.enable_tilt);
        // Everything else should be default
        assert_eq!(opts.limits.maximum_movement_ratio, 0.1);
        assert!(opts.motion.enable_zoom);
        assert_eq!(opts.reference_body, ReferenceBody::Wgs84);
    }

    #[test]
    fn custom_reference_body_parses() {
        let toml_str = r"
[reference_body.custom]
radii = [1737400.0, 1737400.0, 1737400.0]
";
        let opts: NavigationOptions = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.reference_body.ellipsoid().maximum_radius(), 1_737_400.0);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = NavigationOptions::default();
        assert_eq!(opts.keybindings.lookup("Equal"), Some(NavCommand::ZoomIn));
        assert_eq!(opts.keybindings.lookup("Minus"), Some(NavCommand::ZoomOut));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn conflicting_keybindings_are_rejected_on_load() {
        let toml_str = "[keybindings.bindings]\nzoom_in = \"KeyZ\"\nzoom_out = \"KeyZ\"\n";
        let opts: NavigationOptions = toml::from_str(toml_str).unwrap();
        assert!(matches!(opts.validate(), Err(NavError::InvalidOptions(_))));
    }

    #[test]
    fn defaults_are_valid() {
        assert!(NavigationOptions::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let mut opts = NavigationOptions::default();
        opts.limits.maximum_movement_ratio = 1.0;
        assert!(matches!(opts.validate(), Err(NavError::InvalidOptions(_))));

        let mut opts = NavigationOptions::default();
        opts.limits.minimum_zoom_distance = 500.0;
        opts.limits.maximum_zoom_distance = 100.0;
        assert!(opts.validate().is_err());

        let mut opts = NavigationOptions::default();
        opts.rates.maximum_rotate_rate = f64::NAN;
        assert!(opts.validate().is_err());

        let mut opts = NavigationOptions::default();
        opts.reference_body = ReferenceBody::Custom {
            radii: [1.0, 0.0, 1.0],
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn save_then_load_preserves_options() {
        let dir = std::env::temp_dir().join(format!(
            "globe-nav-presets-{}",
            std::process::id()
        ));
        let path = dir.join("close_orbit.toml");
        let mut opts = NavigationOptions::default();
        opts.limits.minimum_zoom_distance = 250.0;
        opts.save(&path).unwrap();

        let loaded = NavigationOptions::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(loaded.keybindings.lookup("Equal"), Some(NavCommand::ZoomIn));
        assert_eq!(
            NavigationOptions::list_presets(&dir),
            vec!["close_orbit".to_owned()]
        );
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(NavigationOptions::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("motion"));
        assert!(props.contains_key("limits"));
        assert!(props.contains_key("rates"));

        // Skipped sections should be absent
        assert!(!props.contains_key("inertia"));
        assert!(!props.contains_key("keybindings"));
        assert!(!props.contains_key("reference_body"));

        let limits = &props["limits"]["properties"];
        assert!(limits.get("maximum_movement_ratio").is_some());
        assert!(limits.get("maximum_zoom_distance").is_none());
    }
}
