#![cfg(feature = "std")]

//! Rendering seam: the service pushes session updates through a [`Presenter`]
//! so a front end can re-render after every click.

use std::fmt::Write as _;

use crate::common::SessionId;
use crate::config::GRID_SIZE;
use crate::events::SessionUpdate;
use crate::grid::{BoardView, CellView};

#[async_trait::async_trait]
pub trait Presenter: Send {
    async fn present(&mut self, session: SessionId, update: &SessionUpdate) -> anyhow::Result<()>;
}

/// Discards every update. Useful for headless simulations.
pub struct NullPresenter;

#[async_trait::async_trait]
impl Presenter for NullPresenter {
    async fn present(&mut self, _: SessionId, _: &SessionUpdate) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Prints updates and boards to stdout.
pub struct ConsolePresenter;

#[async_trait::async_trait]
impl Presenter for ConsolePresenter {
    async fn present(&mut self, session: SessionId, update: &SessionUpdate) -> anyhow::Result<()> {
        match update {
            SessionUpdate::FleetUpdated {
                player,
                outcome,
                grid_status,
                board,
            } => {
                println!(
                    "[{}] {} fleet click: {:?} (grid {:?})",
                    session, player, outcome, grid_status
                );
                print!("{}", render_board(board));
            }
            SessionUpdate::SetupComplete { player } => {
                println!("[{}] {} is ready", session, player);
            }
            SessionUpdate::PlayBegan { first } => {
                println!("[{}] both fleets set, {} opens", session, first);
            }
            SessionUpdate::AttackResolved { report, board } => {
                println!(
                    "[{}] {} fires at {}: {} ({} hits taken)",
                    session,
                    report.attacker,
                    coord_label(report.coord),
                    if report.hit { "hit" } else { "miss" },
                    report.hits_taken,
                );
                print!("{}", render_board(board));
            }
            SessionUpdate::GameOver {
                winner,
                loser,
                reveal,
            } => {
                println!("[{}] {} defeats {}", session, winner, loser);
                if !reveal.is_empty() {
                    let cells: Vec<String> =
                        reveal.iter().map(|&c| coord_label(c)).collect();
                    println!("surviving ship cells: {}", cells.join(" "));
                }
            }
        }
        Ok(())
    }
}

/// Human-readable cell label, column letter then 1-based row (e.g. `C2`).
pub fn coord_label((row, col): (usize, usize)) -> String {
    format!("{}{}", (b'A' + col as u8) as char, row + 1)
}

/// ASCII rendering of a board view with column letters and row numbers.
pub fn render_board(view: &BoardView) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..GRID_SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    for r in 0..GRID_SIZE {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..GRID_SIZE {
            let ch = match view.cells[r][c] {
                CellView::Empty => '.',
                CellView::ShipOrigin => 'O',
                CellView::Ship => '#',
                CellView::Hit => 'x',
                CellView::Miss => 'o',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}
