#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration_ms: u64,
}

pub const EAT_TONE: Tone = Tone { frequency_hz: 1000, duration_ms: 100 };
pub const GAME_OVER_TONE: Tone = Tone { frequency_hz: 300, duration_ms: 500 };

/// Fire-and-forget notification sounds. Must not block the game loop.
pub trait Audio {
    fn play_tone(&mut self, tone: Tone);
}
