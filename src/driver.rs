#![cfg(feature = "std")]

//! Seeded click generators that take a session from empty grids to game
//! over through the service, standing in for two human players.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::common::{Coord, PlayerId, SessionId};
use crate::config::GRID_SIZE;
use crate::events::SessionUpdate;
use crate::grid::SetupStatus;
use crate::service::{InteractionReply, SessionHandle};
use crate::session::AttackReport;

/// Upper bound on placement clicks before the driver gives up. Random
/// clicking converges long before this on a 5x5 board.
const MAX_PLACEMENT_CLICKS: usize = 10_000;

/// Plays one seat of a session with seeded random clicks.
pub struct RandomDriver {
    player: PlayerId,
    rng: SmallRng,
    targets: Vec<Coord>,
}

impl RandomDriver {
    pub fn new(player: PlayerId, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut targets: Vec<Coord> = (0..GRID_SIZE)
            .flat_map(|r| (0..GRID_SIZE).map(move |c| (r, c)))
            .collect();
        targets.shuffle(&mut rng);
        RandomDriver {
            player,
            rng,
            targets,
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Click random cells until the grid reports every ship placed.
    pub async fn place_fleet(
        &mut self,
        handle: &SessionHandle,
        session: SessionId,
    ) -> anyhow::Result<()> {
        for _ in 0..MAX_PLACEMENT_CLICKS {
            let coord = (
                self.rng.random_range(0..GRID_SIZE),
                self.rng.random_range(0..GRID_SIZE),
            );
            if let InteractionReply::Applied(SessionUpdate::FleetUpdated {
                grid_status: SetupStatus::SetupDone,
                ..
            }) = handle.place_ship(session, self.player, coord).await?
            {
                return Ok(());
            }
        }
        Err(anyhow::anyhow!(
            "{} could not finish placement within {} clicks",
            self.player,
            MAX_PLACEMENT_CLICKS
        ))
    }

    /// Fire at the next untried cell of the opponent's grid. Only call when
    /// this driver holds the turn.
    pub async fn next_attack(
        &mut self,
        handle: &SessionHandle,
        session: SessionId,
    ) -> anyhow::Result<AttackReport> {
        while let Some(coord) = self.targets.pop() {
            match handle.attack(session, self.player, coord).await? {
                InteractionReply::Applied(SessionUpdate::AttackResolved { report, .. }) => {
                    return Ok(report);
                }
                _ => continue,
            }
        }
        Err(anyhow::anyhow!(
            "{} ran out of target cells before the game ended",
            self.player
        ))
    }
}

/// Result of a driver-vs-driver match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSummary {
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub shots: usize,
}

/// Drive a freshly opened session to completion with two random players.
pub async fn run_match(
    handle: &SessionHandle,
    session: SessionId,
    mut first: RandomDriver,
    mut second: RandomDriver,
) -> anyhow::Result<MatchSummary> {
    first.place_fleet(handle, session).await?;
    second.place_fleet(handle, session).await?;

    let reply = handle.signal_done(session, first.player()).await?;
    anyhow::ensure!(
        matches!(reply, InteractionReply::Applied(_)),
        "done signal for {} was dropped",
        first.player()
    );
    let reply = handle.signal_done(session, second.player()).await?;
    let opener = match reply {
        InteractionReply::Applied(SessionUpdate::PlayBegan { first }) => first,
        other => anyhow::bail!("expected play to begin, got {:?}", other),
    };

    let mut turn = opener;
    let mut shots = 0usize;
    loop {
        let driver = if turn == first.player() {
            &mut first
        } else {
            &mut second
        };
        let report = driver.next_attack(handle, session).await?;
        shots += 1;
        if let Some(over) = report.game_over {
            return Ok(MatchSummary {
                winner: over.winner,
                loser: over.loser,
                shots,
            });
        }
        turn = report.defender;
    }
}
