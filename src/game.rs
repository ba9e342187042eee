use std::{thread::sleep, time::{Duration, Instant}};

use anyhow::Result;
use log::{debug, info};
use rand::Rng;

use crate::audio::{Audio, EAT_TONE, GAME_OVER_TONE};
use crate::error::GameError;
use crate::food::Food;
use crate::grid::GridSpace;
use crate::input::{InputEvent, InputSource};
use crate::render::{Renderer, Role, TextColor, TextPos, TextSize};
use crate::snake::{Direction, MoveResult::*, Snake};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    Running,
    /// `won` is set when the snake filled the board and no food could be placed
    GameOver { won: bool },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Restarted,
    Quit,
}

pub struct SnakeGame<R> {
    grid: GridSpace,
    initial_length: usize,
    snake: Snake,
    food: Food,
    score: u32,
    state: GameState,
    dir_change: Option<Direction>,
    rng: R,
}

impl<R: Rng> SnakeGame<R> {
    pub fn new(grid: GridSpace, initial_length: usize, mut rng: R) -> Result<Self, GameError> {
        let snake = Snake::initial(&grid, initial_length);
        let food = Food::new(&grid, snake.occupied(), &mut rng)?;

        Ok(SnakeGame {
            grid,
            initial_length,
            snake,
            food,
            score: 0,
            state: GameState::Running,
            dir_change: None,
            rng,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Puts the snake, food and score back to how a new game starts, in place
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.snake = Snake::initial(&self.grid, self.initial_length);
        self.food = Food::new(&self.grid, self.snake.occupied(), &mut self.rng)?;
        self.score = 0;
        self.dir_change = None;
        self.state = GameState::Running;
        info!("Game restarted");
        Ok(())
    }

    pub fn handle_event(&mut self, ev: InputEvent) -> Result<Flow, GameError> {
        match (ev, self.state) {
            (InputEvent::Quit, _) => return Ok(Flow::Quit),
            (InputEvent::Turn(dir), GameState::Running) => {
                // Only the latest usable turn before a tick counts
                if dir != self.snake.get_direction().opposite() {
                    self.dir_change = Some(dir);
                }
            }
            (InputEvent::Restart, GameState::GameOver { .. }) => {
                self.restart()?;
                return Ok(Flow::Restarted);
            }
            _ => {}
        }
        Ok(Flow::Continue)
    }

    /// One game step. Does nothing once the game is over.
    pub fn tick<C: Renderer + Audio>(&mut self, ctx: &mut C) -> Result<()> {
        if self.state != GameState::Running {
            return Ok(());
        }

        if let Some(dir) = self.dir_change.take() {
            self.snake.set_direction(dir);
        }

        match self.snake.move_step(&self.grid) {
            Dead(collision) => {
                info!("Snake died ({:?}) at length {} with score {}", collision, self.snake.len(), self.score);
                self.game_over(ctx, false)
            }
            Alive { new_head } => {
                if new_head == self.food.position() {
                    ctx.play_tone(EAT_TONE);
                    self.snake.grow();
                    self.score += 1;
                    debug!("Ate food at {:?}, score {}", new_head, self.score);

                    match self.food.randomize(&self.grid, self.snake.occupied(), &mut self.rng) {
                        Ok(()) => {}
                        Err(GameError::NoFreeCellAvailable) => {
                            info!("Board filled with score {}", self.score);
                            return self.game_over(ctx, true);
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
                self.render(ctx)
            }
        }
    }

    pub fn render<C: Renderer>(&self, ctx: &mut C) -> Result<()> {
        ctx.clear_frame();
        ctx.draw_grid();

        let head_role = Role::Head(self.snake.get_direction());
        for (i, cell) in self.snake.body().enumerate() {
            ctx.draw_cell(*cell, if i == 0 { head_role } else { Role::Body });
        }
        ctx.draw_cell(self.food.position(), Role::Food);

        ctx.draw_text(&format!("Score: {}", self.score), TextSize::Small, TextPos::StatusLine, TextColor::White);
        ctx.present_frame()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn game_over<C: Renderer + Audio>(&mut self, ctx: &mut C, won: bool) -> Result<()> {
        self.state = GameState::GameOver { won };
        ctx.play_tone(GAME_OVER_TONE);

        let s = if won {"You won!"} else {"Game Over!"};

        ctx.clear_frame();
        ctx.draw_text(s, TextSize::Large, TextPos::Centered { line: 0 }, TextColor::Red);
        ctx.draw_text(
            &format!("Your Score: {}", self.score),
            TextSize::Medium,
            TextPos::Centered { line: 2 },
            TextColor::White,
        );
        ctx.draw_text(
            "Press R to Restart or Q to Quit",
            TextSize::Small,
            TextPos::Centered { line: 4 },
            TextColor::White,
        );
        ctx.present_frame()
    }
}

/// Runs until the player quits: drain input, step, wait for the next tick.
pub fn run<R, C>(game: &mut SnakeGame<R>, ctx: &mut C, tick_interval: Duration) -> Result<()>
where
    R: Rng,
    C: Renderer + Audio + InputSource,
{
    game.render(ctx)?;
    let mut next_tick = Instant::now() + tick_interval;

    loop {
        let now = Instant::now();
        if next_tick > now {
            sleep(next_tick - now);
            next_tick += tick_interval;
        } else {
            // Fell behind, don't try to catch up with a burst of ticks
            next_tick = now + tick_interval;
        }

        for ev in ctx.drain_events()? {
            match game.handle_event(ev)? {
                Flow::Continue => {}
                // Show the starting position before the first step of the new game
                Flow::Restarted => game.render(ctx)?,
                Flow::Quit => {
                    info!("Quit with score {} ({:?})", game.score(), game.state());
                    return Ok(());
                }
            }
        }

        game.tick(ctx)?;
    }
}
