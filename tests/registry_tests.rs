use seabattle::{ChannelId, PlayerId, SessionError, SessionId, SessionRegistry, SessionStatus};

const ONE: PlayerId = PlayerId(1);
const TWO: PlayerId = PlayerId(2);

#[test]
fn open_and_lookup() {
    let mut registry = SessionRegistry::new();
    assert!(registry.is_empty());

    let id = SessionId(5);
    let session = registry.open(id, ChannelId(9), ONE, TWO).unwrap();
    assert_eq!(session.players(), [ONE, TWO]);
    assert_eq!(session.status(), SessionStatus::Setup);

    assert!(registry.contains(id));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get(id).unwrap().channel(), ChannelId(9));
}

#[test]
fn duplicate_open_is_rejected() {
    let mut registry = SessionRegistry::new();
    let id = SessionId(5);
    registry.open(id, ChannelId(1), ONE, TWO).unwrap();
    assert_eq!(
        registry.open(id, ChannelId(2), TWO, ONE).err(),
        Some(SessionError::AlreadyOpen(id))
    );
    // original entry untouched
    assert_eq!(registry.get(id).unwrap().players(), [ONE, TWO]);
}

#[test]
fn missing_sessions_are_typed_errors() {
    let mut registry = SessionRegistry::new();
    let id = SessionId(404);
    assert_eq!(registry.get(id).err(), Some(SessionError::NotFound(id)));
    assert_eq!(registry.get_mut(id).err(), Some(SessionError::NotFound(id)));
    assert_eq!(registry.remove(id).err(), Some(SessionError::NotFound(id)));
}

#[test]
fn remove_returns_the_session() {
    let mut registry = SessionRegistry::new();
    let id = SessionId(5);
    registry.open(id, ChannelId(1), ONE, TWO).unwrap();

    let session = registry.remove(id).unwrap();
    assert_eq!(session.id(), id);
    assert!(!registry.contains(id));
    assert_eq!(registry.get(id).err(), Some(SessionError::NotFound(id)));
}
