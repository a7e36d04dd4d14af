//! Paced countdown used to check that a host IDE launches a process and
//! streams its standard output line by line.
//!
//! The [`countdown::CountdownEmitter`] writes a fixed transcript: a banner, the
//! toolchain version, a countdown from 5 to 1 with a one second pause after
//! each count, and two closing lines.

pub mod countdown;
pub mod error;
pub mod models;
pub mod runtime;

pub use countdown::{CountdownConfig, CountdownEmitter, Pacer, RunReport, ThreadPacer};
pub use error::CountdownError;
