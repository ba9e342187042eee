use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("No free cell left on the board")]
    NoFreeCellAvailable,
    #[error("Terminal is too small ({width}x{height}) to fit the board")]
    TerminalTooSmall { width: u16, height: u16 },
}
