use std::time::Duration;

use crate::GridInt;

// Terminal characters are about twice as tall as wide, so a cell spans two columns
pub type CellSize = (u16, u16);

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub grid_width: GridInt,
    pub grid_height: GridInt,
    pub cell_size: CellSize,
    pub ticks_per_second: u32,
    pub initial_snake_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_width: 30,
            grid_height: 30,
            cell_size: (2, 1),
            ticks_per_second: 10,
            initial_snake_length: 3,
        }
    }
}

impl GameConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 30);
        assert_eq!(config.grid_height, 30);
        assert_eq!(config.initial_snake_length, 3);
    }

    #[test]
    fn ten_ticks_per_second() {
        let config = GameConfig::default();
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn zero_tick_rate_does_not_divide_by_zero() {
        let config = GameConfig { ticks_per_second: 0, ..Default::default() };
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
    }
}
