//! Configuration shared by driver programs.

use crate::geometry::Size;

/// Configuration for a Tether program.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub window: WindowConfig,
    pub frame_rate: FrameRate,
    pub profiling: ProfilingMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            window: WindowConfig::default(),
            frame_rate: FrameRate::Capped(60),
            profiling: ProfilingMode::Off,
        }
    }
}

impl Config {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.window.size = Size::new(width, height);
        self
    }

    pub fn with_frame_rate(mut self, frame_rate: FrameRate) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    pub fn with_profiling(mut self, profiling: ProfilingMode) -> Self {
        self.profiling = profiling;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub size: Size<u32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Tether".to_string(),
            size: Size::new(640, 480),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRate {
    /// Run as fast as the platform presents frames
    Uncapped,
    /// Sleep between frames to hold this many frames per second
    Capped(u32),
}

impl FrameRate {
    /// Frames per second when capped. A cap of zero is treated as uncapped.
    pub fn target(self) -> Option<u32> {
        match self {
            FrameRate::Uncapped | FrameRate::Capped(0) => None,
            FrameRate::Capped(fps) => Some(fps),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingMode {
    /// Profiling is disabled
    Off,
    /// Scopes are collected and served to `puffin_viewer` over HTTP
    WithWebserver,
}
