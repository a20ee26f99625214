#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
mod game;
mod player;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod session;
pub mod prelude;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use player::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use session::{Command, Outcome, Session};
