use seabattle::{
    ChannelId, PlayerId, Session, SessionError, SessionId, SessionStatus, TOTAL_SHIP_CELLS,
};

const ONE: PlayerId = PlayerId(1);
const TWO: PlayerId = PlayerId(2);

fn new_session() -> Session {
    Session::new(SessionId(7), ChannelId(42), ONE, TWO)
}

/// Fleet facing east in rows 0..4; see grid tests for the layout.
fn place_fleet(session: &mut Session, player: PlayerId) {
    for row in 0..4 {
        session.place_ship(player, (row, 0)).unwrap();
    }
}

fn fleet_cells() -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for (row, len) in [(0, 1), (1, 2), (2, 3), (3, 4)] {
        for col in 0..len {
            cells.push((row, col));
        }
    }
    cells
}

/// Cells guaranteed empty under the standard layout.
fn empty_cells() -> Vec<(usize, usize)> {
    (0..5)
        .flat_map(|r| (0..5).map(move |c| (r, c)))
        .filter(|cell| !fleet_cells().contains(cell))
        .collect()
}

fn ready_session() -> Session {
    let mut session = new_session();
    place_fleet(&mut session, ONE);
    place_fleet(&mut session, TWO);
    assert_eq!(session.signal_done(ONE), Ok(false));
    assert_eq!(session.signal_done(TWO), Ok(true));
    session
}

#[test]
fn done_signal_requires_full_setup() {
    let mut session = new_session();
    assert_eq!(session.signal_done(ONE), Err(SessionError::SetupIncomplete));

    place_fleet(&mut session, ONE);
    assert_eq!(session.signal_done(ONE), Ok(false));
    assert_eq!(session.status(), SessionStatus::Setup);
    assert_eq!(session.signal_done(ONE), Err(SessionError::AlreadyDone));

    // a done player's fleet is frozen
    assert_eq!(
        session.place_ship(ONE, (4, 4)),
        Err(SessionError::AlreadyDone)
    );
}

#[test]
fn play_begins_when_both_players_are_done() {
    let session = ready_session();
    assert_eq!(session.status(), SessionStatus::SetupDone);
    assert_eq!(session.turn(), ONE, "initiator opens");
}

#[test]
fn strangers_are_rejected() {
    let mut session = new_session();
    let stranger = PlayerId(99);
    assert_eq!(
        session.place_ship(stranger, (0, 0)),
        Err(SessionError::NotAParticipant(stranger))
    );
    assert_eq!(
        session.signal_done(stranger),
        Err(SessionError::NotAParticipant(stranger))
    );
    assert_eq!(session.opponent_of(ONE), Some(TWO));
    assert_eq!(session.opponent_of(stranger), None);
}

#[test]
fn attacks_are_gated_on_phase_and_turn() {
    let mut session = new_session();
    assert_eq!(
        session.resolve_attack(ONE, (0, 0)),
        Err(SessionError::WrongPhase)
    );

    let mut session = ready_session();
    assert_eq!(
        session.resolve_attack(TWO, (0, 0)),
        Err(SessionError::NotYourTurn)
    );
    assert!(session.resolve_attack(ONE, (0, 0)).is_ok());
}

#[test]
fn turn_alternates_after_hit_and_after_miss() {
    let mut session = ready_session();

    // hit: turn still passes
    let report = session.resolve_attack(ONE, (0, 0)).unwrap();
    assert!(report.hit);
    assert_eq!(report.defender, TWO);
    assert_eq!(session.turn(), TWO);

    // miss: turn passes back
    let report = session.resolve_attack(TWO, (4, 4)).unwrap();
    assert!(!report.hit);
    assert_eq!(session.turn(), ONE);
}

#[test]
fn resolved_cells_are_rejected() {
    let mut session = ready_session();
    session.resolve_attack(ONE, (0, 0)).unwrap();
    session.resolve_attack(TWO, (4, 4)).unwrap();
    assert_eq!(
        session.resolve_attack(ONE, (0, 0)),
        Err(SessionError::CellResolved)
    );
    // the gate also covers misses
    session.resolve_attack(ONE, (4, 4)).unwrap();
    assert_eq!(
        session.resolve_attack(TWO, (4, 4)),
        Err(SessionError::CellResolved)
    );
}

#[test]
fn tenth_hit_finishes_the_session() {
    let mut session = ready_session();
    let targets = fleet_cells();
    let fillers = empty_cells();

    // ONE sweeps TWO's fleet; TWO misses in between
    for (i, &target) in targets.iter().enumerate() {
        let report = session.resolve_attack(ONE, target).unwrap();
        assert!(report.hit);
        assert_eq!(report.hits_taken, i + 1);

        if i + 1 < TOTAL_SHIP_CELLS {
            assert!(report.game_over.is_none());
            let report = session.resolve_attack(TWO, fillers[i]).unwrap();
            assert!(!report.hit);
        } else {
            let over = report.game_over.expect("tenth hit ends the game");
            assert_eq!(over.winner, ONE);
            assert_eq!(over.loser, TWO);
            // TWO never hit anything, so ONE's whole fleet is revealed
            let mut reveal = over.reveal.clone();
            reveal.sort();
            assert_eq!(reveal, fleet_cells());
        }
    }

    assert_eq!(session.status(), SessionStatus::Finished);
    // the loser's own grid has nothing left to reveal
    assert!(session.grid(TWO).unwrap().game_over_coordinates().is_empty());
    // no further attacks
    assert_eq!(
        session.resolve_attack(TWO, (4, 0)),
        Err(SessionError::WrongPhase)
    );
}

#[test]
fn placement_is_rejected_once_play_began() {
    let mut session = ready_session();
    assert_eq!(
        session.place_ship(ONE, (4, 4)),
        Err(SessionError::WrongPhase)
    );
    assert_eq!(session.signal_done(ONE), Err(SessionError::WrongPhase));
}
