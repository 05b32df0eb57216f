use alloc::string::ToString;
use rand::prelude::*;

use crate::*;

/// Pixel edge of one cell in the classic sprite art.
pub const CELL_SIZE: u32 = 15;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
}

/// Receives the status line the presentation layer shows under the board.
pub trait StatusSink {
    fn set_status(&mut self, text: &str);
}

impl<T: StatusSink + ?Sized> StatusSink for &mut T {
    fn set_status(&mut self, text: &str) {
        (**self).set_status(text);
    }
}

/// Drives sessions on behalf of a presentation layer: translates pixel
/// clicks into engine calls, restarts finished games, and keeps the status
/// line current.
///
/// Sessions are replaced wholesale on restart, never patched in place.
pub struct GameController<S> {
    session: GameSession,
    rng: SmallRng,
    sink: S,
}

impl<S: StatusSink> GameController<S> {
    /// Deploys a first session for `config`; `seed` fixes the whole run.
    pub fn new(config: GameConfig, seed: u64, sink: S) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let session = GameSession::new(RandomDeployer::new(rng.random()).deploy(config));
        Self::start(session, rng, sink)
    }

    /// Adopts an existing session, e.g. one deployed from a fixed layout.
    pub fn from_session(session: GameSession, seed: u64, sink: S) -> Self {
        Self::start(session, SmallRng::seed_from_u64(seed), sink)
    }

    fn start(session: GameSession, rng: SmallRng, sink: S) -> Self {
        let mut controller = Self { session, rng, sink };
        controller.announce_mines_remaining();
        controller
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn draw_tile(&self, pos: Pos) -> Result<DrawTile> {
        self.session.draw_tile(pos)
    }

    /// Discards the current session and deploys a fresh one with the same
    /// configuration.
    pub fn new_game(&mut self) {
        let config = self.session.config();
        self.session = GameSession::new(RandomDeployer::new(self.rng.random()).deploy(config));
        self.announce_mines_remaining();
    }

    /// Routes one pointer click.
    ///
    /// A click anywhere on a finished game starts a new session first, and
    /// a click inside the board then also acts on that fresh session.
    /// Returns whether anything needs redrawing.
    pub fn handle_click(&mut self, x: u32, y: u32, button: MouseButton) -> Result<bool> {
        let mut repaint = false;

        if self.session.is_finished() {
            self.new_game();
            repaint = true;
        }

        let (rows, cols) = self.session.size();
        if x >= u32::from(cols) * CELL_SIZE || y >= u32::from(rows) * CELL_SIZE {
            return Ok(repaint);
        }
        let pos = ((y / CELL_SIZE) as Coord, (x / CELL_SIZE) as Coord);

        match button {
            MouseButton::Primary => {
                let result = self.session.reveal(pos)?;
                match result.outcome {
                    RevealOutcome::HitMine => self.sink.set_status("Game lost"),
                    RevealOutcome::Won => self.sink.set_status("Game won"),
                    RevealOutcome::Revealed | RevealOutcome::NoChange => {}
                }
                repaint |= result.has_update();
            }
            MouseButton::Secondary => {
                let outcome = self.session.toggle_flag(pos)?;
                match outcome {
                    MarkOutcome::Flagged | MarkOutcome::Unflagged => {
                        self.announce_mines_remaining()
                    }
                    MarkOutcome::NoMarksLeft => self.sink.set_status("No marks left"),
                    MarkOutcome::NoChange => {}
                }
                repaint |= outcome.has_update();
            }
        }

        Ok(repaint)
    }

    fn announce_mines_remaining(&mut self) {
        let text = self.session.mines_remaining().to_string();
        self.sink.set_status(&text);
    }
}
