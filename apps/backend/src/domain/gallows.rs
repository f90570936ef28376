//! Outcome labels for the hangman minigame.
//!
//! The figure is assembled one piece per mistake; a full figure is a
//! loss. The allowed mistake count is derived from the stage count so
//! the two can never drift apart.

/// Progressive stages of the hangman figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gallows {
    Empty,
    Post,
    Beam,
    Noose,
    Head,
    Torso,
    LeftArm,
    RightArm,
    Legs,
    Hanged,
}

impl Gallows {
    const ALL: [Gallows; 10] = [
        Gallows::Empty,
        Gallows::Post,
        Gallows::Beam,
        Gallows::Noose,
        Gallows::Head,
        Gallows::Torso,
        Gallows::LeftArm,
        Gallows::RightArm,
        Gallows::Legs,
        Gallows::Hanged,
    ];

    pub const STAGES: usize = Self::ALL.len();

    /// Mistakes allowed before the game is lost.
    pub const MAX_MISTAKES: u8 = (Self::STAGES - 1) as u8;

    /// Stage shown after `mistakes` wrong guesses (clamped at the last
    /// stage).
    pub fn at(mistakes: u8) -> Self {
        let idx = (mistakes as usize).min(Self::STAGES - 1);
        Self::ALL[idx]
    }

    pub fn label(self) -> &'static str {
        match self {
            Gallows::Empty => "_______",
            Gallows::Post => "|______",
            Gallows::Beam => "|=====_",
            Gallows::Noose => "|==i==_",
            Gallows::Head => "|==i==_ o",
            Gallows::Torso => "|==i==_ o|",
            Gallows::LeftArm => "|==i==_ o|-",
            Gallows::RightArm => "|==i==_ -o|-",
            Gallows::Legs => "|==i==_ -o|-<",
            Gallows::Hanged => "|==i==_ x_x",
        }
    }
}
