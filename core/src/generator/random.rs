use super::*;

/// Uniform rejection-sampling deployment from a seeded generator.
///
/// Positions are drawn over the whole board; a draw that lands on an
/// existing mine is discarded and redrawn, so no position is deployed
/// twice. The loop has no attempt bound, which holds up while the mine
/// budget stays well below the cell count.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomDeployer {
    seed: u64,
}

impl RandomDeployer {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineDeployer for RandomDeployer {
    fn deploy(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;

        let mut layout = MineLayout::empty(config.size());
        let total = config.total_cells();

        // saturated boards skip the sampling loop entirely
        if config.mines >= total {
            if config.mines > total {
                log::warn!(
                    "mine budget {} exceeds the {} cells, filling the board",
                    config.mines,
                    total
                );
            }
            for row in 0..config.rows {
                for col in 0..config.cols {
                    layout.place_mine((row, col));
                }
            }
            return layout;
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut deployed: CellCount = 0;
        while deployed < config.mines {
            let position = rng.random_range(0..total);
            let pos = (
                (position / CellCount::from(config.cols)) as Coord,
                (position % CellCount::from(config.cols)) as Coord,
            );
            if layout.place_mine(pos) {
                deployed += 1;
            }
        }

        log::debug!(
            "deployed {} mines on a {}x{} board",
            deployed,
            config.rows,
            config.cols
        );
        layout
    }
}
