// File: crates/crosshair-core/src/config.rs
// Summary: Crosshair options: user-facing partial options, immutable defaults and per-option resolution.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::Result;

/// Identifier partitioning charts into sets that mirror each other.
pub type SyncGroup = u32;

/// Veto hook run before a zoom is applied; returning `false` cancels it.
pub type BeforeZoomFn = Rc<dyn Fn(f64, f64) -> bool>;
/// Notification run after a zoom has been applied.
pub type AfterZoomFn = Rc<dyn Fn(f64, f64)>;

#[derive(Clone, Debug, PartialEq)]
pub struct LineConfig {
    pub color: Color,
    pub width: f64,
    pub dash_pattern: Cow<'static, [f64]>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyncConfig {
    pub enabled: bool,
    pub group: SyncGroup,
    pub suppress_tooltips: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ZoomConfig {
    pub enabled: bool,
    pub zoombox_background_color: Color,
    pub zoombox_border_color: Color,
    pub zoom_button_text: Cow<'static, str>,
    pub zoom_button_class: Cow<'static, str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnapConfig {
    pub enabled: bool,
}

#[derive(Clone, Default)]
pub struct Callbacks {
    pub before_zoom: Option<BeforeZoomFn>,
    pub after_zoom: Option<AfterZoomFn>,
}

impl Callbacks {
    /// Runs `before_zoom`; no callback means "allow".
    pub fn allow_zoom(&self, start: f64, end: f64) -> bool {
        self.before_zoom.as_ref().map_or(true, |f| f(start, end))
    }

    pub fn zoomed(&self, start: f64, end: f64) {
        if let Some(f) = &self.after_zoom { f(start, end); }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("before_zoom", &self.before_zoom.is_some())
            .field("after_zoom", &self.after_zoom.is_some())
            .finish()
    }
}

/// Fully resolved configuration for one chart.
#[derive(Clone, Debug)]
pub struct CrosshairConfig {
    pub line: LineConfig,
    pub sync: SyncConfig,
    pub zoom: ZoomConfig,
    pub snap: SnapConfig,
    pub callbacks: Callbacks,
}

/// Fallback table consulted for every option the user leaves unset.
pub const DEFAULT_CONFIG: CrosshairConfig = CrosshairConfig {
    line: LineConfig {
        color: Color::from_rgb(0xff, 0x66, 0x66),
        width: 1.0,
        dash_pattern: Cow::Borrowed(&[]),
    },
    sync: SyncConfig { enabled: false, group: 1, suppress_tooltips: false },
    zoom: ZoomConfig {
        enabled: false,
        zoombox_background_color: Color::from_argb(51, 66, 133, 244),
        zoombox_border_color: Color::from_rgb(0x44, 0x88, 0xff),
        zoom_button_text: Cow::Borrowed("Reset Zoom"),
        zoom_button_class: Cow::Borrowed("reset-zoom"),
    },
    snap: SnapConfig { enabled: false },
    callbacks: Callbacks { before_zoom: None, after_zoom: None },
};

impl Default for CrosshairConfig {
    fn default() -> Self { DEFAULT_CONFIG }
}

// ---- user options -----------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineOptions {
    pub color: Option<Color>,
    pub width: Option<f64>,
    pub dash_pattern: Option<Vec<f64>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncOptions {
    pub enabled: Option<bool>,
    pub group: Option<SyncGroup>,
    pub suppress_tooltips: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZoomOptions {
    pub enabled: Option<bool>,
    pub zoombox_background_color: Option<Color>,
    pub zoombox_border_color: Option<Color>,
    pub zoom_button_text: Option<String>,
    pub zoom_button_class: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapOptions {
    pub enabled: Option<bool>,
}

/// Options as supplied by the user. Every field may be absent, in which case
/// the matching entry of [`DEFAULT_CONFIG`] applies.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CrosshairOptions {
    pub line: Option<LineOptions>,
    pub sync: Option<SyncOptions>,
    pub zoom: Option<ZoomOptions>,
    pub snap: Option<SnapOptions>,
    #[serde(skip)]
    pub callbacks: Callbacks,
}

impl CrosshairOptions {
    /// Parse the JSON form, e.g. `{"sync": {"enabled": true, "group": 2}}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_before_zoom(mut self, f: impl Fn(f64, f64) -> bool + 'static) -> Self {
        self.callbacks.before_zoom = Some(Rc::new(f));
        self
    }

    pub fn with_after_zoom(mut self, f: impl Fn(f64, f64) + 'static) -> Self {
        self.callbacks.after_zoom = Some(Rc::new(f));
        self
    }

    pub fn resolve(&self) -> CrosshairConfig {
        CrosshairConfig::resolve(self)
    }
}

/// Per-option fallback: the user's value when present, the default otherwise.
#[inline]
pub fn resolve<T>(user: Option<T>, default: T) -> T {
    user.unwrap_or(default)
}

impl CrosshairConfig {
    pub fn resolve(user: &CrosshairOptions) -> Self {
        let d = DEFAULT_CONFIG;
        let line = user.line.clone().unwrap_or_default();
        let sync = user.sync.clone().unwrap_or_default();
        let zoom = user.zoom.clone().unwrap_or_default();
        let snap = user.snap.clone().unwrap_or_default();

        Self {
            line: LineConfig {
                color: resolve(line.color, d.line.color),
                width: resolve(line.width, d.line.width),
                dash_pattern: resolve(line.dash_pattern.map(Cow::Owned), d.line.dash_pattern),
            },
            sync: SyncConfig {
                enabled: resolve(sync.enabled, d.sync.enabled),
                group: resolve(sync.group, d.sync.group),
                suppress_tooltips: resolve(sync.suppress_tooltips, d.sync.suppress_tooltips),
            },
            zoom: ZoomConfig {
                enabled: resolve(zoom.enabled, d.zoom.enabled),
                zoombox_background_color: resolve(zoom.zoombox_background_color, d.zoom.zoombox_background_color),
                zoombox_border_color: resolve(zoom.zoombox_border_color, d.zoom.zoombox_border_color),
                zoom_button_text: resolve(zoom.zoom_button_text.map(Cow::Owned), d.zoom.zoom_button_text),
                zoom_button_class: resolve(zoom.zoom_button_class.map(Cow::Owned), d.zoom.zoom_button_class),
            },
            snap: SnapConfig { enabled: resolve(snap.enabled, d.snap.enabled) },
            callbacks: Callbacks {
                before_zoom: user.callbacks.before_zoom.clone(),
                after_zoom: user.callbacks.after_zoom.clone(),
            },
        }
    }
}
