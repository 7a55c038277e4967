use core::fmt;

/// Overscan used when the caller does not pick one.
pub const DEFAULT_OVERSCAN: usize = 5;

/// Layout constants for one renderer instance.
///
/// Heights are in layout units (pixels for GUI hosts, rows for terminal hosts). A zero
/// height is a caller contract violation; the window computation degrades to an empty window
/// instead of panicking. Use [`RenderConfig::try_new`] or [`RenderConfig::validate`] to reject
/// such configs up front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderConfig {
    pub item_height: u32,
    pub container_height: u32,
    pub overscan: usize,
}

impl RenderConfig {
    pub fn new(item_height: u32, container_height: u32) -> Self {
        Self {
            item_height,
            container_height,
            overscan: DEFAULT_OVERSCAN,
        }
    }

    /// Same as [`RenderConfig::new`], but rejects zero heights.
    pub fn try_new(item_height: u32, container_height: u32) -> Result<Self, ConfigError> {
        let config = Self::new(item_height, container_height);
        config.validate()?;
        Ok(config)
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_item_height(mut self, item_height: u32) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_container_height(mut self, container_height: u32) -> Self {
        self.container_height = container_height;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.item_height == 0 {
            return Err(ConfigError::ZeroItemHeight);
        }
        if self.container_height == 0 {
            return Err(ConfigError::ZeroContainerHeight);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Number of items that fit in the container, rounding partial items up.
    pub fn items_per_view(&self) -> usize {
        if self.item_height == 0 {
            return 0;
        }
        self.container_height.div_ceil(self.item_height) as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    ZeroItemHeight,
    ZeroContainerHeight,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroItemHeight => f.write_str("item height must be greater than zero"),
            Self::ZeroContainerHeight => f.write_str("container height must be greater than zero"),
        }
    }
}

impl core::error::Error for ConfigError {}
