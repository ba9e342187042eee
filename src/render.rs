use crate::snake::Direction;
use crate::Cell;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Role {
    Head(Direction),
    Body,
    Food,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextSize {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextColor {
    White,
    Red,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextPos {
    StatusLine,
    /// Horizontally centered, `line` rows below the top third of the screen
    Centered { line: u16 },
}

/// Draws into a frame buffer that is shown once per tick by `present_frame`.
pub trait Renderer {
    fn clear_frame(&mut self);
    fn draw_grid(&mut self);
    fn draw_cell(&mut self, cell: Cell, role: Role);
    fn draw_text(&mut self, text: &str, size: TextSize, pos: TextPos, color: TextColor);
    fn present_frame(&mut self) -> anyhow::Result<()>;
}
