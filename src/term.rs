use std::{io::{Stdout, Write, stdout}, time::Duration};

use anyhow::{Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::{Attribute, Color};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, read, poll};
use log::{debug, warn};

use crate::audio::{Audio, Tone};
use crate::grid::GridSpace;
use crate::input::{map_key, InputEvent, InputSource};
use crate::render::{Renderer, Role, TextColor, TextPos, TextSize};
use crate::snake::Direction;
use crate::Cell;

/// Where grid cell (0, 0) is drawn: right of the left border, below the status
/// line and the top border
const BOARD_ORIGIN: (u16, u16) = (1, 2);

const SNAKE_BODY_CHAR: char = '█';
const FOOD_CHAR: char = '●';
const GRID_DOT_CHAR: char = '·';

#[derive(Copy, Clone, PartialEq, Eq)]
struct Glyph {
    ch: char,
    color: Color,
    bold: bool,
}

const BLANK: Glyph = Glyph { ch: ' ', color: Color::Reset, bold: false };

/// The terminal, owning the screen, the keyboard and the bell. Drawing goes to
/// `screen`; `present_frame` sends only what differs from `shown`. Dropping it
/// restores the terminal if `setup` got past entering the alternate screen.
pub struct TermManager {
    width: u16,
    height: u16,
    grid: GridSpace,
    stdout: Stdout,
    screen: Vec<Glyph>,
    shown: Vec<Glyph>,
    active: bool,
}

impl TermManager {
    pub fn new(grid: GridSpace) -> Result<Self> {
        let (width, height) = get_terminal_size()?;
        let stdout = stdout();
        let screen = vec![BLANK; width as usize * height as usize];
        let shown = screen.clone();
        Ok(TermManager { width, height, grid, stdout, screen, shown, active: false })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        self.active = true;
        terminal::enable_raw_mode().context("Error setting raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking, terminal::Clear(ClearType::All))
            .context("Error preparing the screen")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        // Leave the alternate screen even if raw mode could not be unset
        let raw = terminal::disable_raw_mode().context("Error unsetting raw mode");
        let screen = execute!(
            self.stdout,
            style::ResetColor,
            cursor::Show,
            cursor::EnableBlinking,
            LeaveAlternateScreen
        )
        .context("Error leaving alt screen");
        raw.and(screen)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn put(&mut self, pos: (u16, u16), glyph: Glyph) {
        if pos.0 < self.width && pos.1 < self.height {
            self.screen[self.width as usize * pos.1 as usize + pos.0 as usize] = glyph;
        }
    }

    fn put_str(&mut self, pos: (u16, u16), text: &str, color: Color, bold: bool) {
        for (x_diff, ch) in text.chars().enumerate() {
            self.put((pos.0 + x_diff as u16, pos.1), Glyph { ch, color, bold });
        }
    }

    fn draw_borders(&mut self) {
        let (board_w, board_h) = self.grid.screen_size();
        let (left, top) = (BOARD_ORIGIN.0 - 1, BOARD_ORIGIN.1 - 1);
        let (right, bottom) = (BOARD_ORIGIN.0 + board_w, BOARD_ORIGIN.1 + board_h);

        for x in left..=right {
            let ch = if x == left || x == right {'+'} else {'-'};
            self.put((x, top), Glyph { ch, ..BLANK });
            self.put((x, bottom), Glyph { ch, ..BLANK });
        }

        for y in top + 1..bottom {
            self.put((left, y), Glyph { ch: '|', ..BLANK });
            self.put((right, y), Glyph { ch: '|', ..BLANK });
        }
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        // Only does anything on early returns and panics, main restores explicitly
        if let Err(e) = self.restore() {
            warn!("Error restoring the terminal: {:#}", e);
        }
    }
}

impl Renderer for TermManager {
    fn clear_frame(&mut self) {
        for glyph in self.screen.iter_mut() {
            *glyph = BLANK;
        }
    }

    fn draw_grid(&mut self) {
        self.draw_borders();

        let dot = Glyph { ch: GRID_DOT_CHAR, color: Color::DarkGrey, bold: false };
        for cell in self.grid.cells() {
            let pos = self.grid.to_screen(cell, BOARD_ORIGIN);
            self.put(pos, dot);
        }
    }

    fn draw_cell(&mut self, cell: Cell, role: Role) {
        if !self.grid.contains(cell) {
            return;
        }

        let (ch, fill, color, bold) = match role {
            Role::Head(dir) => (head_char(dir), head_char(dir), Color::Green, true),
            Role::Body => (SNAKE_BODY_CHAR, SNAKE_BODY_CHAR, Color::DarkGreen, false),
            Role::Food => (FOOD_CHAR, ' ', Color::Red, true),
        };

        let (x, y) = self.grid.to_screen(cell, BOARD_ORIGIN);
        let (cell_w, cell_h) = self.grid.cell_size();
        for y_diff in 0..cell_h {
            for x_diff in 0..cell_w {
                let ch = if x_diff == 0 {ch} else {fill};
                self.put((x + x_diff, y + y_diff), Glyph { ch, color, bold });
            }
        }
    }

    fn draw_text(&mut self, text: &str, size: TextSize, pos: TextPos, color: TextColor) {
        let color = match color {
            TextColor::White => Color::White,
            TextColor::Red => Color::Red,
        };

        // The terminal has one font size, larger tiers get emphasis instead
        let (text, bold) = match size {
            TextSize::Small => (text.to_string(), false),
            TextSize::Medium => (text.to_string(), true),
            TextSize::Large => (letter_spaced(text), true),
        };

        let text_w = text.chars().count() as u16;
        let pos = match pos {
            TextPos::StatusLine => (BOARD_ORIGIN.0, 0),
            TextPos::Centered { line } => {
                (self.width.saturating_sub(text_w) / 2, self.height / 3 + line)
            }
        };

        self.put_str(pos, &text, color, bold);
    }

    fn present_frame(&mut self) -> Result<()> {
        for (i, glyph) in self.screen.iter().enumerate() {
            if *glyph == self.shown[i] {
                continue;
            }

            let (x, y) = ((i % self.width as usize) as u16, (i / self.width as usize) as u16);
            let weight = if glyph.bold {Attribute::Bold} else {Attribute::NormalIntensity};
            queue!(
                self.stdout,
                cursor::MoveTo(x, y),
                style::SetForegroundColor(glyph.color),
                style::SetAttribute(weight),
                style::Print(glyph.ch)
            )
            .context("Error drawing frame")?;
        }

        self.stdout.flush().context("Error flushing")?;
        self.shown.copy_from_slice(&self.screen);
        Ok(())
    }
}

impl Audio for TermManager {
    fn play_tone(&mut self, tone: Tone) {
        // A terminal can only ring its bell, whatever the pitch
        debug!("Tone {} Hz for {} ms", tone.frequency_hz, tone.duration_ms);
        if let Err(e) = execute!(self.stdout, style::Print('\x07')) {
            warn!("Error ringing the bell: {}", e);
        }
    }
}

impl InputSource for TermManager {
    fn drain_events(&mut self) -> Result<Vec<InputEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0)).context("Error polling input")? {
            if let Event::Key(ev) = read().context("Error reading input")? {
                events.extend(map_key(&ev));
            }
        }

        Ok(events)
    }
}

pub fn get_terminal_size() -> Result<(u16, u16)> {
    terminal::size().context("Error reading size")
}

fn head_char(direction: Direction) -> char {
    match direction {
        Direction::Up => '^',
        Direction::Down => 'v',
        Direction::Left => '<',
        Direction::Right => '>',
    }
}

fn letter_spaced(text: &str) -> String {
    let mut spaced = String::with_capacity(text.len() * 2);
    for (i, ch) in text.chars().enumerate() {
        if i > 0 {
            spaced.push(' ');
        }
        spaced.push(ch);
    }
    spaced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_text_is_letter_spaced() {
        assert_eq!(letter_spaced("Game!"), "G a m e !");
        assert_eq!(letter_spaced(""), "");
    }

    #[test]
    fn head_points_where_the_snake_goes() {
        assert_eq!(head_char(Direction::Up), '^');
        assert_eq!(head_char(Direction::Right), '>');
    }
}
