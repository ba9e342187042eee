mod audio;
mod config;
mod error;
mod food;
mod game;
mod grid;
mod input;
mod render;
mod snake;
mod term;

use std::{env, fs::File};

use anyhow::{Context, Result};
use log::{error, info, LevelFilter};
use rand::{rngs::StdRng, SeedableRng};
use simplelog::WriteLogger;

use crate::config::GameConfig;
use crate::game::SnakeGame;
use crate::grid::GridSpace;
use crate::term::TermManager;

pub type GridInt = i32;
pub type Cell = (GridInt, GridInt);

const LOG_FILE: &str = "snake.log";

fn main() -> Result<()> {
    // stdout belongs to the game screen, so logs go to a file
    let log_path = env::temp_dir().join(LOG_FILE);
    WriteLogger::init(
        LevelFilter::Info,
        simplelog::Config::default(),
        File::create(&log_path).with_context(|| format!("Error creating {}", log_path.display()))?,
    )
    .context("Error initializing logger")?;

    let config = GameConfig::default();
    let grid = GridSpace::fit(&config, term::get_terminal_size()?)?;
    info!("Starting on a {}x{} grid", grid.width(), grid.height());

    let mut term = TermManager::new(grid)?;
    let result = term.setup().and_then(|_| play(&config, grid, &mut term));
    if let Err(e) = &result {
        error!("Exiting with error: {:#}", e);
    }

    let restored = term.restore();
    finish(result, restored)
}

/// A game error wins over a failure to restore the terminal, which is only logged
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(e) = &restored {
        error!("Error restoring the terminal: {:#}", e);
    }
    if result.is_ok() && restored.is_ok() {
        info!("Exiting cleanly");
    }
    result.and(restored)
}

fn play(config: &GameConfig, grid: GridSpace, term: &mut TermManager) -> Result<()> {
    let mut game = SnakeGame::new(grid, config.initial_snake_length, StdRng::from_entropy())?;
    game::run(&mut game, term, config.tick_interval())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn game_error_is_kept_when_restoring_also_fails() {
        let res = finish(Err(anyhow!("draw failed")), Err(anyhow!("raw mode stuck")));
        assert_eq!(res.unwrap_err().to_string(), "draw failed");
    }

    #[test]
    fn restore_error_surfaces_after_a_clean_game() {
        let res = finish(Ok(()), Err(anyhow!("raw mode stuck")));
        assert_eq!(res.unwrap_err().to_string(), "raw mode stuck");
    }

    #[test]
    fn clean_game_and_restore() {
        assert!(finish(Ok(()), Ok(())).is_ok());
    }
}
