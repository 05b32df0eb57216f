use crate::*;
pub use random::*;

mod random;

/// Produces the fixed mine placement for a new session.
pub trait MineDeployer {
    fn deploy(self, config: GameConfig) -> MineLayout;
}
