//! Keyed lookup of active sessions, owned by the composition root.

use alloc::collections::BTreeMap;

use crate::common::{ChannelId, PlayerId, SessionError, SessionId};
use crate::session::Session;

/// Map from session identifier to the session it owns. Entries are created
/// when a match is opened and removed by game-over cleanup; a lookup miss is
/// a typed error, never silent.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: BTreeMap<SessionId, Session>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        SessionRegistry {
            sessions: BTreeMap::new(),
        }
    }

    /// Open a session between two players. Duplicate identifiers are
    /// rejected.
    pub fn open(
        &mut self,
        id: SessionId,
        channel: ChannelId,
        initiator: PlayerId,
        opponent: PlayerId,
    ) -> Result<&mut Session, SessionError> {
        if self.sessions.contains_key(&id) {
            return Err(SessionError::AlreadyOpen(id));
        }
        Ok(self
            .sessions
            .entry(id)
            .or_insert_with(|| Session::new(id, channel, initiator, opponent)))
    }

    pub fn get(&self, id: SessionId) -> Result<&Session, SessionError> {
        self.sessions.get(&id).ok_or(SessionError::NotFound(id))
    }

    pub fn get_mut(&mut self, id: SessionId) -> Result<&mut Session, SessionError> {
        self.sessions.get_mut(&id).ok_or(SessionError::NotFound(id))
    }

    /// Remove a session, returning it. Used by game-over cleanup.
    pub fn remove(&mut self, id: SessionId) -> Result<Session, SessionError> {
        self.sessions.remove(&id).ok_or(SessionError::NotFound(id))
    }

    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
