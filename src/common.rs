//! Common types: identifiers, coordinates and session errors.

use core::fmt;

/// Board coordinate as `(row, col)`, both in `0..GRID_SIZE`.
pub type Coord = (usize, usize);

/// Identifies a player across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u64);

/// Identifies one active session in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionId(pub u64);

/// Opaque reference to the channel a session originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player#{}", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session#{}", self.0)
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "channel#{}", self.0)
    }
}

/// Errors returned by session and registry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// No session with this identifier is registered.
    NotFound(SessionId),
    /// A session with this identifier is already registered.
    AlreadyOpen(SessionId),
    /// The acting player is not one of the session's two participants.
    NotAParticipant(PlayerId),
    /// Done signal while ships remain unplaced.
    SetupIncomplete,
    /// Done signal repeated by the same player.
    AlreadyDone,
    /// The interaction does not match the session's current phase.
    WrongPhase,
    /// Attack by the player who does not hold the turn.
    NotYourTurn,
    /// Attack on a cell that was already resolved as hit or miss.
    CellResolved,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotFound(id) => write!(f, "{} not found", id),
            SessionError::AlreadyOpen(id) => write!(f, "{} is already open", id),
            SessionError::NotAParticipant(p) => write!(f, "{} is not in this session", p),
            SessionError::SetupIncomplete => write!(f, "ships remain unplaced"),
            SessionError::AlreadyDone => write!(f, "setup was already signalled done"),
            SessionError::WrongPhase => write!(f, "interaction does not match the session phase"),
            SessionError::NotYourTurn => write!(f, "it is the other player's turn"),
            SessionError::CellResolved => write!(f, "cell was already resolved"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SessionError {}
