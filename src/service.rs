#![cfg(feature = "std")]

//! Interaction dispatch: a single task owns the registry and applies every
//! click in arrival order, so no two mutations of a session ever interleave.

use tokio::sync::{mpsc, oneshot};

use crate::common::{ChannelId, Coord, PlayerId, SessionError, SessionId};
use crate::config::GRID_SIZE;
use crate::events::{Interaction, SessionUpdate};
use crate::presenter::Presenter;
use crate::registry::SessionRegistry;

/// Reply to one interaction. Invalid clicks (wrong turn, resolved cell,
/// premature done, stranger clicks, off-board coordinates) are dropped
/// without surfacing an error to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionReply {
    Applied(SessionUpdate),
    Ignored,
}

enum Command {
    Open {
        id: SessionId,
        channel: ChannelId,
        initiator: PlayerId,
        opponent: PlayerId,
        reply: oneshot::Sender<Result<(), SessionError>>,
    },
    Interact {
        event: Interaction,
        reply: oneshot::Sender<InteractionReply>,
    },
}

/// Cloneable handle for submitting commands to a running service.
#[derive(Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<Command>,
}

impl SessionHandle {
    /// Open a new session. Duplicate identifiers are an error.
    pub async fn open(
        &self,
        id: SessionId,
        channel: ChannelId,
        initiator: PlayerId,
        opponent: PlayerId,
    ) -> anyhow::Result<()> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Open {
                id,
                channel,
                initiator,
                opponent,
                reply,
            })
            .await
            .map_err(|_| anyhow::anyhow!("session service stopped"))?;
        rx.await
            .map_err(|_| anyhow::anyhow!("session service stopped"))?
            .map_err(anyhow::Error::from)
    }

    /// Submit an interaction and await the Applied/Ignored reply.
    pub async fn interact(&self, event: Interaction) -> anyhow::Result<InteractionReply> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Interact { event, reply })
            .await
            .map_err(|_| anyhow::anyhow!("session service stopped"))?;
        rx.await
            .map_err(|_| anyhow::anyhow!("session service stopped"))
    }

    pub async fn place_ship(
        &self,
        session: SessionId,
        player: PlayerId,
        coord: Coord,
    ) -> anyhow::Result<InteractionReply> {
        self.interact(Interaction::PlaceShip {
            session,
            player,
            coord,
        })
        .await
    }

    pub async fn signal_done(
        &self,
        session: SessionId,
        player: PlayerId,
    ) -> anyhow::Result<InteractionReply> {
        self.interact(Interaction::SignalDone { session, player })
            .await
    }

    pub async fn attack(
        &self,
        session: SessionId,
        player: PlayerId,
        coord: Coord,
    ) -> anyhow::Result<InteractionReply> {
        self.interact(Interaction::Attack {
            session,
            player,
            coord,
        })
        .await
    }
}

/// The service task. Owns the registry for its whole lifetime.
pub struct SessionService<P: Presenter> {
    registry: SessionRegistry,
    presenter: P,
    rx: mpsc::Receiver<Command>,
}

impl<P: Presenter> SessionService<P> {
    pub fn new(presenter: P) -> (Self, SessionHandle) {
        let (tx, rx) = mpsc::channel(64);
        (
            SessionService {
                registry: SessionRegistry::new(),
                presenter,
                rx,
            },
            SessionHandle { tx },
        )
    }

    /// Process commands until every handle is dropped. Interactions that
    /// reference a session with no registry entry abort the service with a
    /// `NotFound` error.
    pub async fn run(mut self) -> anyhow::Result<()> {
        while let Some(cmd) = self.rx.recv().await {
            match cmd {
                Command::Open {
                    id,
                    channel,
                    initiator,
                    opponent,
                    reply,
                } => {
                    let res = self
                        .registry
                        .open(id, channel, initiator, opponent)
                        .map(|_| ());
                    if let Ok(()) = res {
                        log::info!("{} opened: {} vs {}", id, initiator, opponent);
                    }
                    let _ = reply.send(res);
                }
                Command::Interact { event, reply } => {
                    let outcome = self.apply(event).await?;
                    let _ = reply.send(outcome);
                }
            }
        }
        Ok(())
    }

    async fn apply(&mut self, event: Interaction) -> anyhow::Result<InteractionReply> {
        let id = event.session();
        if let Interaction::PlaceShip { coord, .. } | Interaction::Attack { coord, .. } = event {
            if coord.0 >= GRID_SIZE || coord.1 >= GRID_SIZE {
                log::warn!("{}: off-board click {:?} dropped", id, coord);
                return Ok(InteractionReply::Ignored);
            }
        }

        match event {
            Interaction::PlaceShip { player, coord, .. } => {
                let session = self.registry.get_mut(id)?;
                match session.place_ship(player, coord) {
                    Ok(outcome) => {
                        let grid_status = session.grid(player)?.status();
                        let board = session.board_view(player, true)?;
                        let update = SessionUpdate::FleetUpdated {
                            player,
                            outcome,
                            grid_status,
                            board,
                        };
                        self.presenter.present(id, &update).await?;
                        Ok(InteractionReply::Applied(update))
                    }
                    Err(e) => {
                        log::debug!("{}: placement click dropped: {}", id, e);
                        Ok(InteractionReply::Ignored)
                    }
                }
            }
            Interaction::SignalDone { player, .. } => {
                let session = self.registry.get_mut(id)?;
                match session.signal_done(player) {
                    Ok(began) => {
                        let ready = SessionUpdate::SetupComplete { player };
                        if began {
                            let first = session.turn();
                            self.presenter.present(id, &ready).await?;
                            let update = SessionUpdate::PlayBegan { first };
                            self.presenter.present(id, &update).await?;
                            Ok(InteractionReply::Applied(update))
                        } else {
                            self.presenter.present(id, &ready).await?;
                            Ok(InteractionReply::Applied(ready))
                        }
                    }
                    Err(e) => {
                        log::debug!("{}: done signal dropped: {}", id, e);
                        Ok(InteractionReply::Ignored)
                    }
                }
            }
            Interaction::Attack { player, coord, .. } => {
                let session = self.registry.get_mut(id)?;
                match session.resolve_attack(player, coord) {
                    Ok(report) => {
                        let board = session.board_view(report.defender, false)?;
                        let game_over = report.game_over.clone();
                        let update = SessionUpdate::AttackResolved { report, board };
                        self.presenter.present(id, &update).await?;
                        if let Some(over) = game_over {
                            self.registry.remove(id)?;
                            log::info!("{} finished: {} wins", id, over.winner);
                            let cleanup = SessionUpdate::GameOver {
                                winner: over.winner,
                                loser: over.loser,
                                reveal: over.reveal,
                            };
                            self.presenter.present(id, &cleanup).await?;
                        }
                        Ok(InteractionReply::Applied(update))
                    }
                    Err(e) => {
                        log::debug!("{}: attack dropped: {}", id, e);
                        Ok(InteractionReply::Ignored)
                    }
                }
            }
        }
    }
}
