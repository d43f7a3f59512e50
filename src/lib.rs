#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
pub mod events;
mod grid;
mod registry;
mod session;
mod ship;
#[cfg(feature = "std")]
mod driver;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod presenter;
#[cfg(feature = "std")]
pub mod service;

pub use common::*;
pub use config::*;
pub use events::*;
pub use grid::*;
pub use registry::*;
pub use session::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use driver::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use presenter::{coord_label, render_board, ConsolePresenter, NullPresenter, Presenter};
#[cfg(feature = "std")]
pub use service::{InteractionReply, SessionHandle, SessionService};
