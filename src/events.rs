//! Interaction events coming in from a front end and the updates pushed
//! back out for rendering.

use alloc::vec::Vec;

use crate::common::{Coord, PlayerId, SessionId};
use crate::grid::{BoardView, PlacementOutcome, SetupStatus};
use crate::session::AttackReport;

/// One user click, addressed to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Interaction {
    /// Placement click on the acting player's own grid.
    PlaceShip {
        session: SessionId,
        player: PlayerId,
        coord: Coord,
    },
    /// Explicit signal that the player's setup is complete.
    SignalDone {
        session: SessionId,
        player: PlayerId,
    },
    /// Shot at the opponent's grid.
    Attack {
        session: SessionId,
        player: PlayerId,
        coord: Coord,
    },
}

impl Interaction {
    pub fn session(&self) -> SessionId {
        match *self {
            Interaction::PlaceShip { session, .. }
            | Interaction::SignalDone { session, .. }
            | Interaction::Attack { session, .. } => session,
        }
    }

    pub fn player(&self) -> PlayerId {
        match *self {
            Interaction::PlaceShip { player, .. }
            | Interaction::SignalDone { player, .. }
            | Interaction::Attack { player, .. } => player,
        }
    }
}

/// State change pushed to the presenter after an applied interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionUpdate {
    /// A placement click changed (or failed to change) the player's fleet.
    FleetUpdated {
        player: PlayerId,
        outcome: PlacementOutcome,
        grid_status: SetupStatus,
        board: BoardView,
    },
    /// The player signalled done and is waiting for the opponent.
    SetupComplete { player: PlayerId },
    /// Both players are done; `first` holds the opening turn.
    PlayBegan { first: PlayerId },
    /// An attack was resolved; the board is the defender's grid as the
    /// attacker sees it.
    AttackResolved {
        report: AttackReport,
        board: BoardView,
    },
    /// Terminal update; the session has been removed from the registry.
    GameOver {
        winner: PlayerId,
        loser: PlayerId,
        /// Never-hit ship cells on the winner's grid.
        reveal: Vec<Coord>,
    },
}
