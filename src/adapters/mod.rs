//! Adapter implementations of the port traits.
//!
//! `live/` talks to the real outside world (HTTP store, webhook, system
//! clock); `memory/` keeps everything in-process for tests and for running
//! the CLI without a hosted store.

pub mod live;
pub mod memory;
