//! Game configuration.
//!
//! Manages engine and window settings loaded from an INI configuration file.
//! Provides defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//! title = MSFR Engine
//!
//! [engine]
//! max_delta = 0.25
//! time_scale = 1.0
//! fps_log_interval = 5.0
//! show_collision = false
//! ```

use std::path::PathBuf;

use configparser::ini::Ini;
use log::{info, warn};

use crate::error::{EngineError, EngineResult};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TITLE: &str = "MSFR Engine";
const DEFAULT_MAX_DELTA: f32 = 0.25;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_FPS_LOG_INTERVAL: f32 = 5.0;
const DEFAULT_SHOW_COLLISION: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    pub title: String,
    /// Upper bound for a single frame delta, in seconds.
    pub max_delta: f32,
    /// Multiplier applied to every clamped frame delta.
    pub time_scale: f32,
    /// Seconds between FPS log lines. Zero or less disables them.
    pub fps_log_interval: f32,
    /// Draw collision outlines.
    pub show_collision: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            title: DEFAULT_TITLE.to_string(),
            max_delta: DEFAULT_MAX_DELTA,
            time_scale: DEFAULT_TIME_SCALE,
            fps_log_interval: DEFAULT_FPS_LOG_INTERVAL,
            show_collision: DEFAULT_SHOW_COLLISION,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing or malformed values retain their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> EngineResult<()> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| EngineError::Config(format!("Failed to load config file: {}", e)))?;
        self.apply(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, max_delta={}, time_scale={}, show_collision={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.max_delta,
            self.time_scale,
            self.show_collision
        );

        Ok(())
    }

    /// Same as [`GameConfig::load_from_file`] but from INI text.
    pub fn load_from_str(&mut self, text: &str) -> EngineResult<()> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| EngineError::Config(format!("Failed to parse config: {}", e)))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }

        // [engine] section
        if let Some(max_delta) = config.getfloat("engine", "max_delta").ok().flatten() {
            let max_delta = max_delta as f32;
            if max_delta.is_finite() && max_delta > 0.0 {
                self.max_delta = max_delta;
            } else {
                warn!("Ignoring max_delta = {}, keeping {}", max_delta, self.max_delta);
            }
        }
        if let Some(time_scale) = config.getfloat("engine", "time_scale").ok().flatten() {
            let time_scale = time_scale as f32;
            if time_scale.is_finite() && time_scale >= 0.0 {
                self.time_scale = time_scale;
            } else {
                warn!("Ignoring time_scale = {}, keeping {}", time_scale, self.time_scale);
            }
        }
        if let Some(interval) = config.getfloat("engine", "fps_log_interval").ok().flatten() {
            self.fps_log_interval = interval as f32;
        }
        if let Some(show) = config.getbool("engine", "show_collision").ok().flatten() {
            self.show_collision = show;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> EngineResult<()> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "title", Some(self.title.clone()));

        // [engine] section
        config.set("engine", "max_delta", Some(self.max_delta.to_string()));
        config.set("engine", "time_scale", Some(self.time_scale.to_string()));
        config.set(
            "engine",
            "fps_log_interval",
            Some(self.fps_log_interval.to_string()),
        );
        config.set(
            "engine",
            "show_collision",
            Some(self.show_collision.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| EngineError::Config(format!("Failed to save config file: {}", e)))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Set window size.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_width = width;
        self.window_height = height;
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
