use std::time::Duration;

use anyhow::{Context, Result, ensure};

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Length of the snake at the start of every run
    pub initial_snake_length: usize,
    /// Points awarded per food eaten
    pub food_reward: u32,
    /// Delay between ticks in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 30,
            grid_height: 20,
            initial_snake_length: 3,
            food_reward: 10,
            tick_interval_ms: 150,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Create a large grid
    pub fn large() -> Self {
        Self::new(40, 30)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check that a fresh run can be laid out on this grid.
    ///
    /// The initial snake sits with its head at the grid centre and its body
    /// trailing left, so the centre column must leave room for it, and at
    /// least one cell must remain free for food.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_width > 0 && self.grid_height > 0,
            "grid must be at least 1x1, got {}x{}",
            self.grid_width,
            self.grid_height
        );
        ensure!(
            self.grid_width <= i32::MAX as usize && self.grid_height <= i32::MAX as usize,
            "grid {}x{} exceeds the coordinate range of {} cells per side",
            self.grid_width,
            self.grid_height,
            i32::MAX
        );
        ensure!(
            self.initial_snake_length > 0,
            "initial snake length must be at least 1"
        );
        ensure!(
            self.grid_width / 2 + 1 >= self.initial_snake_length,
            "a snake of length {} does not fit left of centre on a grid {} wide",
            self.initial_snake_length,
            self.grid_width
        );
        let cells = self
            .grid_width
            .checked_mul(self.grid_height)
            .with_context(|| {
                format!("grid {}x{} has too many cells", self.grid_width, self.grid_height)
            })?;
        ensure!(
            cells > self.initial_snake_length,
            "grid {}x{} leaves no room for food",
            self.grid_width,
            self.grid_height
        );
        ensure!(self.tick_interval_ms > 0, "tick interval must be non-zero");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 30);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.food_reward, 10);
        assert_eq!(config.tick_interval(), Duration::from_millis(150));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 12);
        assert_eq!(config.food_reward, 10);
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(GameConfig::small().validate().is_ok());
        assert!(GameConfig::large().validate().is_ok());
        assert!(GameConfig::new(5, 5).validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_grid() {
        let err = GameConfig::new(0, 10).validate().unwrap_err();
        assert!(err.to_string().contains("at least 1x1"));
    }

    #[test]
    fn test_rejects_snake_that_does_not_fit() {
        let config = GameConfig {
            initial_snake_length: 6,
            ..GameConfig::new(8, 8)
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            initial_snake_length: 5,
            ..GameConfig::new(8, 8)
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_grid_without_room_for_food() {
        let config = GameConfig {
            initial_snake_length: 2,
            ..GameConfig::new(2, 1)
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("no room for food"));
    }

    #[test]
    fn test_rejects_side_beyond_coordinate_range() {
        let too_wide = i32::MAX as usize + 1;

        let err = GameConfig::new(too_wide, 1).validate().unwrap_err();
        assert!(err.to_string().contains("coordinate range"));
        assert!(GameConfig::new(1, too_wide).validate().is_err());
    }

    #[test]
    fn test_huge_grid_is_an_error_not_a_panic() {
        let err = GameConfig::new(usize::MAX, 2).validate().unwrap_err();
        assert!(err.to_string().contains("coordinate range"));

        let widest = GameConfig::new(i32::MAX as usize, 1);
        assert!(widest.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_length_and_zero_interval() {
        let config = GameConfig {
            initial_snake_length: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            tick_interval_ms: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
