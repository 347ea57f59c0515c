//! Dispatchers and pattern demos built on the shared components.
//!
//! Submodules overview
//! - [`facade`] – one entry point hiding handlers, catalogs and the player state machine
//! - [`mediator`] – central event hub with a typed reaction table and re-entrant dispatch
//! - [`observer`] – gun subject fanning out to effect observers in registration order
//! - [`strategy`] – weapon attack behaviors swapped at runtime

pub mod facade;
pub mod mediator;
pub mod observer;
pub mod strategy;
