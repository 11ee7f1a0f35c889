//! The driving loop and its collaborator seams.
//!
//! The rule engine in [`core`](crate::core) is self-contained; this
//! module supplies what sits around it in a running game: agents that
//! choose moves, observers that render them, the session configuration,
//! and the referee that sequences turns.

mod agent;
mod config;
mod observer;
mod referee;

pub use agent::{PlayerAgent, RandomAgent, ScriptedAgent};
pub use config::SessionConfig;
pub use observer::{GameObserver, SummaryLogger};
pub use referee::Referee;
