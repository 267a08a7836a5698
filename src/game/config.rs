use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Cell the snake's head starts on
    pub start_x: i32,
    pub start_y: i32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Initial tick interval in milliseconds
    pub initial_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            start_x: 5,
            start_y: 5,
            initial_snake_length: 3,
            initial_delay_ms: 200,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size. Dimensions are
    /// clamped to 1..=u16::MAX cells per axis, and the start cell is pulled
    /// toward the center on grids too small for the default.
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.clamp(1, u16::MAX as usize);
        let height = height.clamp(1, u16::MAX as usize);
        let defaults = Self::default();
        Self {
            grid_width: width,
            grid_height: height,
            start_x: defaults.start_x.min(width as i32 / 2),
            start_y: defaults.start_y.min(height as i32 / 2),
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.initial_delay_ms, 200);
        assert_eq!((config.start_x, config.start_y), (5, 5));
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 15);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 15);
        assert_eq!(config.initial_delay_ms, 200);
        assert_eq!((config.start_x, config.start_y), (5, 5));
    }

    #[test]
    fn test_small_grid_pulls_start_inward() {
        let config = GameConfig::new(8, 8);
        assert_eq!((config.start_x, config.start_y), (4, 4));
    }

    #[test]
    fn test_degenerate_grid_sizes_clamped() {
        let config = GameConfig::new(0, 0);
        assert_eq!(config.grid_width, 1);
        assert_eq!(config.grid_height, 1);
        assert_eq!((config.start_x, config.start_y), (0, 0));

        let config = GameConfig::new(usize::MAX, usize::MAX);
        assert_eq!(config.grid_width, u16::MAX as usize);
        assert_eq!(config.grid_height, u16::MAX as usize);
    }
}
