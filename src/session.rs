//! One two-player match: grids, done flags, turn order and win detection.

use alloc::vec::Vec;

use crate::common::{ChannelId, Coord, PlayerId, SessionError, SessionId};
use crate::config::TOTAL_SHIP_CELLS;
use crate::grid::{BoardView, Grid, PlacementOutcome, SetupStatus};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionStatus {
    /// Players place ships independently.
    Setup,
    /// Both players signalled done; boards are targetable.
    SetupDone,
    /// A fleet was fully hit. Terminal.
    Finished,
}

/// Carried on the final attack report once a fleet is fully hit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOver {
    pub winner: PlayerId,
    pub loser: PlayerId,
    /// Never-hit ship cells on the winner's grid, revealed to the loser.
    pub reveal: Vec<Coord>,
}

/// Outcome of one resolved attack.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    pub attacker: PlayerId,
    pub defender: PlayerId,
    pub coord: Coord,
    pub hit: bool,
    /// Hits the defender's grid has absorbed so far.
    pub hits_taken: usize,
    pub game_over: Option<GameOver>,
}

/// One active match. The session is the sole owner of both grids and both
/// done flags; all mutation goes through its methods.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    channel: ChannelId,
    players: [PlayerId; 2],
    grids: [Grid; 2],
    done: [bool; 2],
    turn: PlayerId,
    status: SessionStatus,
}

impl Session {
    /// New session in setup. The initiating player holds the first turn once
    /// play begins.
    pub fn new(
        id: SessionId,
        channel: ChannelId,
        initiator: PlayerId,
        opponent: PlayerId,
    ) -> Self {
        Session {
            id,
            channel,
            players: [initiator, opponent],
            grids: [Grid::new(), Grid::new()],
            done: [false, false],
            turn: initiator,
            status: SessionStatus::Setup,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn channel(&self) -> ChannelId {
        self.channel
    }

    pub fn players(&self) -> [PlayerId; 2] {
        self.players
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Holder of the current turn. Meaningful once play has begun.
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    /// Seat index (0 or 1) of a participant.
    pub fn seat(&self, player: PlayerId) -> Option<usize> {
        self.players.iter().position(|&p| p == player)
    }

    pub fn opponent_of(&self, player: PlayerId) -> Option<PlayerId> {
        self.seat(player).map(|s| self.players[1 - s])
    }

    /// A participant's own grid.
    pub fn grid(&self, player: PlayerId) -> Result<&Grid, SessionError> {
        let seat = self.seat(player).ok_or(SessionError::NotAParticipant(player))?;
        Ok(&self.grids[seat])
    }

    /// Handle a placement click on the acting player's own grid. Rejected
    /// once that player signalled done or the session left setup.
    pub fn place_ship(
        &mut self,
        player: PlayerId,
        coord: Coord,
    ) -> Result<PlacementOutcome, SessionError> {
        let seat = self.seat(player).ok_or(SessionError::NotAParticipant(player))?;
        if self.status != SessionStatus::Setup {
            return Err(SessionError::WrongPhase);
        }
        if self.done[seat] {
            return Err(SessionError::AlreadyDone);
        }
        Ok(self.grids[seat].add_ship(coord))
    }

    /// Record a player's done signal. Requires that player's grid to be
    /// fully set up. Returns `true` when this signal was the second one and
    /// play has begun.
    pub fn signal_done(&mut self, player: PlayerId) -> Result<bool, SessionError> {
        let seat = self.seat(player).ok_or(SessionError::NotAParticipant(player))?;
        if self.status != SessionStatus::Setup {
            return Err(SessionError::WrongPhase);
        }
        if self.done[seat] {
            return Err(SessionError::AlreadyDone);
        }
        if self.grids[seat].status() != SetupStatus::SetupDone {
            return Err(SessionError::SetupIncomplete);
        }
        self.done[seat] = true;
        if self.done == [true, true] {
            self.status = SessionStatus::SetupDone;
            self.turn = self.players[0];
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Adjudicate an attack by `attacker` on the opponent's grid.
    ///
    /// Turn ownership, phase and the already-resolved cell are checked here;
    /// `coord` must already be in bounds (caller contract, as for
    /// [`Grid::get_hit`]). The turn passes unconditionally after every
    /// resolved attack. The tenth hit finishes the session.
    pub fn resolve_attack(
        &mut self,
        attacker: PlayerId,
        coord: Coord,
    ) -> Result<AttackReport, SessionError> {
        let seat = self
            .seat(attacker)
            .ok_or(SessionError::NotAParticipant(attacker))?;
        if self.status != SessionStatus::SetupDone {
            return Err(SessionError::WrongPhase);
        }
        if self.turn != attacker {
            return Err(SessionError::NotYourTurn);
        }
        let defender = self.players[1 - seat];
        let defender_grid = &mut self.grids[1 - seat];
        if defender_grid.is_resolved(coord) {
            return Err(SessionError::CellResolved);
        }

        let hit = defender_grid.get_hit(coord);
        if !hit {
            defender_grid.mark_miss(coord);
        }
        let hits_taken = defender_grid.hits_taken();

        let game_over = if hits_taken == TOTAL_SHIP_CELLS {
            self.status = SessionStatus::Finished;
            Some(GameOver {
                winner: attacker,
                loser: defender,
                reveal: self.grids[seat].game_over_coordinates(),
            })
        } else {
            self.turn = defender;
            None
        };

        Ok(AttackReport {
            attacker,
            defender,
            coord,
            hit,
            hits_taken,
            game_over,
        })
    }

    /// Render a participant's grid: owners see their ships, opponents only
    /// the shot marks.
    pub fn board_view(&self, owner: PlayerId, for_owner: bool) -> Result<BoardView, SessionError> {
        Ok(self.grid(owner)?.view(for_owner))
    }
}
