//! Window options and their defaults

use serde::{Deserialize, Serialize};
use crate::error::WindowError;

/// Default selector for the drag handle
pub const DEFAULT_TITLEBAR_SELECTOR: &str = ".titlebar";
/// Default selector for titlebar descendants that must not start a drag
pub const DEFAULT_NO_DRAG_SELECTOR: &str = ".no-drag";
/// Default resize border thickness in pixels
pub const DEFAULT_RESIZE_REGION_WIDTH: f64 = 5.0;

/// Options for binding a window to an element
///
/// Deserializing a partial object fills absent keys from [`Default`], which
/// is the shallow merge the JS API performs (caller keys win).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WindowOptions {
    /// Selector for the titlebar child element
    pub titlebar_selector: String,
    /// Selector marking titlebar descendants that never start a drag
    pub titlebar_no_drag_selector: String,
    /// Initial width (None = leave as styled)
    pub width: Option<f64>,
    /// Initial height (None = leave as styled)
    pub height: Option<f64>,
    pub min_width: Option<f64>,
    pub min_height: Option<f64>,
    pub max_width: Option<f64>,
    pub max_height: Option<f64>,
    /// Whether the titlebar drags the window
    pub draggable: bool,
    /// Whether edges and corners resize the window
    pub resizable: bool,
    /// Thickness of the resize border in pixels
    pub resize_region_width: f64,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            titlebar_selector: DEFAULT_TITLEBAR_SELECTOR.to_string(),
            titlebar_no_drag_selector: DEFAULT_NO_DRAG_SELECTOR.to_string(),
            width: None,
            height: None,
            min_width: None,
            min_height: None,
            max_width: None,
            max_height: None,
            draggable: true,
            resizable: true,
            resize_region_width: DEFAULT_RESIZE_REGION_WIDTH,
        }
    }
}

/// Caller overrides for [`WindowOptions::merge`]
///
/// Every `Some` field replaces the corresponding option.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WindowOptionsPatch {
    pub titlebar_selector: Option<String>,
    pub titlebar_no_drag_selector: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub min_width: Option<f64>,
    pub min_height: Option<f64>,
    pub max_width: Option<f64>,
    pub max_height: Option<f64>,
    pub draggable: Option<bool>,
    pub resizable: Option<bool>,
    pub resize_region_width: Option<f64>,
}

impl WindowOptions {
    /// Shallow merge: patch values win per key, absent keys keep ours
    pub fn merge(mut self, patch: WindowOptionsPatch) -> Self {
        if let Some(v) = patch.titlebar_selector {
            self.titlebar_selector = v;
        }
        if let Some(v) = patch.titlebar_no_drag_selector {
            self.titlebar_no_drag_selector = v;
        }
        if let Some(v) = patch.draggable {
            self.draggable = v;
        }
        if let Some(v) = patch.resizable {
            self.resizable = v;
        }
        if let Some(v) = patch.resize_region_width {
            self.resize_region_width = v;
        }
        self.width = patch.width.or(self.width);
        self.height = patch.height.or(self.height);
        self.min_width = patch.min_width.or(self.min_width);
        self.min_height = patch.min_height.or(self.min_height);
        self.max_width = patch.max_width.or(self.max_width);
        self.max_height = patch.max_height.or(self.max_height);
        self
    }

    /// Check numeric options are finite, non-negative and ordered
    pub fn validate(&self) -> Result<(), WindowError> {
        let numeric = [
            ("width", self.width),
            ("height", self.height),
            ("minWidth", self.min_width),
            ("minHeight", self.min_height),
            ("maxWidth", self.max_width),
            ("maxHeight", self.max_height),
            ("resizeRegionWidth", Some(self.resize_region_width)),
        ];
        for (name, value) in numeric {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(WindowError::invalid_option(name, format!("{} is not a finite number", v)));
                }
                if v < 0.0 {
                    return Err(WindowError::invalid_option(name, format!("{} is negative", v)));
                }
            }
        }

        if let (Some(min), Some(max)) = (self.min_width, self.max_width) {
            if min > max {
                return Err(WindowError::invalid_option("minWidth", format!("{} exceeds maxWidth {}", min, max)));
            }
        }
        if let (Some(min), Some(max)) = (self.min_height, self.max_height) {
            if min > max {
                return Err(WindowError::invalid_option("minHeight", format!("{} exceeds maxHeight {}", min, max)));
            }
        }

        if self.titlebar_selector.trim().is_empty() {
            return Err(WindowError::invalid_option("titlebarSelector", "must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = WindowOptions::default();
        assert_eq!(opts.titlebar_selector, ".titlebar");
        assert_eq!(opts.titlebar_no_drag_selector, ".no-drag");
        assert!(opts.draggable);
        assert!(opts.resizable);
        assert!((opts.resize_region_width - 5.0).abs() < 0.001);
        assert!(opts.width.is_none());
        assert!(opts.min_width.is_none());
        assert!(opts.max_height.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let opts: WindowOptions =
            serde_json::from_str(r#"{"draggable": false, "minWidth": 200, "resizeRegionWidth": 8}"#).unwrap();
        assert!(!opts.draggable);
        assert!(opts.resizable);
        assert_eq!(opts.min_width, Some(200.0));
        assert!((opts.resize_region_width - 8.0).abs() < 0.001);
        assert_eq!(opts.titlebar_selector, ".titlebar");
    }

    #[test]
    fn test_merge_patch_wins_per_key() {
        let opts = WindowOptions::default().merge(WindowOptionsPatch {
            titlebar_selector: Some("#bar".to_string()),
            resizable: Some(false),
            height: Some(300.0),
            ..Default::default()
        });
        assert_eq!(opts.titlebar_selector, "#bar");
        assert_eq!(opts.titlebar_no_drag_selector, ".no-drag");
        assert!(!opts.resizable);
        assert!(opts.draggable);
        assert_eq!(opts.height, Some(300.0));
        assert_eq!(opts.width, None);
    }

    #[test]
    fn test_validate_rejects_negative_bounds() {
        let opts = WindowOptions {
            min_width: Some(-1.0),
            ..Default::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(WindowError::InvalidOption { name: "minWidth", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let opts = WindowOptions {
            min_height: Some(500.0),
            max_height: Some(100.0),
            ..Default::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(WindowError::InvalidOption { name: "minHeight", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let opts = WindowOptions {
            resize_region_width: f64::NAN,
            ..Default::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(WindowOptions::default().validate().is_ok());
    }
}
