//! Controller configuration.
//!
//! This module defines the configuration consumed by the run-loop controller
//! and the CLI. It provides:
//! 1. **Defaults:** Step pacing, default grid size, token colours, layout.
//! 2. **Structures:** Run, style, view and share sections plus the optional
//!    boot-time level string.
//! 3. **Loading:** JSON from a string or a file; every field is optional.
//!
//! # Example
//!
//! ```
//! use tapeworks_core::config::Config;
//!
//! let json = r##"{
//!     "run": { "step_millis": 120 },
//!     "style": { "empty_fill": "#000" },
//!     "share": { "base_url": "https://example.org/play" }
//! }"##;
//!
//! let config = Config::from_json(json).unwrap();
//! assert_eq!(config.run.step_millis, 120);
//! assert_eq!(config.run.default_cols, 9);
//! assert_eq!(config.style.empty_fill, "#000");
//! assert_eq!(config.share.title, "Sample");
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::anim::{Fill, GridLayout};
use crate::common::{ConfigError, Symbol};

/// Default configuration constants.
mod defaults {
    /// Duration of one visible step, in milliseconds.
    pub const STEP_MILLIS: u64 = 500;

    /// Width of the grid created when no level is loaded.
    pub const GRID_COLS: u32 = 9;

    /// Height of the grid created when no level is loaded.
    pub const GRID_ROWS: u32 = 9;

    /// Token fill while the head reads the empty sentinel.
    pub const EMPTY_FILL: &str = "#E0E";

    /// Token fill for a red head symbol.
    pub const RED_FILL: &str = "#E33";

    /// Token fill for a blue head symbol.
    pub const BLUE_FILL: &str = "#36D";

    /// Token fill for a green head symbol.
    pub const GREEN_FILL: &str = "#3B4";

    /// Token fill for a yellow head symbol.
    pub const YELLOW_FILL: &str = "#EC2";

    /// Left edge of the program view.
    pub const ORIGIN_X: f64 = 10.0;

    /// Top edge of the program view.
    pub const ORIGIN_Y: f64 = 10.0;

    /// Side length of one grid cell.
    pub const CELL_SIZE: f64 = 56.0;

    /// Title written into shared levels.
    pub const SHARE_TITLE: &str = "Sample";
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Run-loop pacing and the default grid.
    pub run: RunConfig,
    /// Token colours.
    pub style: StyleConfig,
    /// Grid placement on screen.
    pub view: ViewConfig,
    /// Share link settings.
    pub share: ShareConfig,
    /// Level string (or share link) loaded when the controller is built.
    pub initial_level: Option<String>,
}

impl Config {
    /// Parses a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Json`] if it is malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// Run-loop settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Length of one animated step in milliseconds.
    #[serde(default = "RunConfig::default_step_millis")]
    pub step_millis: u64,

    /// Width of the empty program created at boot when no level loads.
    #[serde(default = "RunConfig::default_cols")]
    pub default_cols: u32,

    /// Height of the empty program created at boot when no level loads.
    #[serde(default = "RunConfig::default_rows")]
    pub default_rows: u32,
}

impl RunConfig {
    /// Step length as a [`Duration`].
    pub const fn step_duration(&self) -> Duration {
        Duration::from_millis(self.step_millis)
    }

    fn default_step_millis() -> u64 {
        defaults::STEP_MILLIS
    }

    fn default_cols() -> u32 {
        defaults::GRID_COLS
    }

    fn default_rows() -> u32 {
        defaults::GRID_ROWS
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            step_millis: defaults::STEP_MILLIS,
            default_cols: defaults::GRID_COLS,
            default_rows: defaults::GRID_ROWS,
        }
    }
}

/// Token colours keyed by the symbol under the head.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// Fill while the head reads nothing.
    #[serde(default = "StyleConfig::default_empty")]
    pub empty_fill: String,

    /// Fill for red.
    #[serde(default = "StyleConfig::default_red")]
    pub red: String,

    /// Fill for blue.
    #[serde(default = "StyleConfig::default_blue")]
    pub blue: String,

    /// Fill for green.
    #[serde(default = "StyleConfig::default_green")]
    pub green: String,

    /// Fill for yellow.
    #[serde(default = "StyleConfig::default_yellow")]
    pub yellow: String,
}

impl StyleConfig {
    /// Token fill for a head symbol; the empty fill for [`Symbol::Empty`].
    pub fn fill_for(&self, symbol: Symbol) -> Fill {
        let color = match symbol {
            Symbol::Empty => &self.empty_fill,
            Symbol::Red => &self.red,
            Symbol::Blue => &self.blue,
            Symbol::Green => &self.green,
            Symbol::Yellow => &self.yellow,
        };
        Fill(color.clone())
    }

    fn default_empty() -> String {
        defaults::EMPTY_FILL.to_string()
    }

    fn default_red() -> String {
        defaults::RED_FILL.to_string()
    }

    fn default_blue() -> String {
        defaults::BLUE_FILL.to_string()
    }

    fn default_green() -> String {
        defaults::GREEN_FILL.to_string()
    }

    fn default_yellow() -> String {
        defaults::YELLOW_FILL.to_string()
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            empty_fill: Self::default_empty(),
            red: Self::default_red(),
            blue: Self::default_blue(),
            green: Self::default_green(),
            yellow: Self::default_yellow(),
        }
    }
}

/// Where the program grid sits on screen.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    /// Left edge of the grid.
    #[serde(default = "ViewConfig::default_origin_x")]
    pub origin_x: f64,

    /// Top edge of the grid.
    #[serde(default = "ViewConfig::default_origin_y")]
    pub origin_y: f64,

    /// Cell side length.
    #[serde(default = "ViewConfig::default_cell_size")]
    pub cell_size: f64,
}

impl ViewConfig {
    /// The layout bridges use to place the token.
    pub const fn layout(&self) -> GridLayout {
        GridLayout {
            origin_x: self.origin_x,
            origin_y: self.origin_y,
            cell_size: self.cell_size,
        }
    }

    fn default_origin_x() -> f64 {
        defaults::ORIGIN_X
    }

    fn default_origin_y() -> f64 {
        defaults::ORIGIN_Y
    }

    fn default_cell_size() -> f64 {
        defaults::CELL_SIZE
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            origin_x: defaults::ORIGIN_X,
            origin_y: defaults::ORIGIN_Y,
            cell_size: defaults::CELL_SIZE,
        }
    }
}

/// Share link settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ShareConfig {
    /// Title stored in shared levels.
    #[serde(default = "ShareConfig::default_title")]
    pub title: String,

    /// Link prefix placed before `#`; empty yields a bare fragment.
    #[serde(default)]
    pub base_url: String,
}

impl ShareConfig {
    fn default_title() -> String {
        defaults::SHARE_TITLE.to_string()
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            title: Self::default_title(),
            base_url: String::new(),
        }
    }
}
