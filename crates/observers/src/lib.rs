//! Reusable observers for newrap solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits
//! that work with any solver event exposing an iterate and a residual.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIterate`], [`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] — logs each iteration through the `log` facade
//! - [`History`] — records each iteration for later inspection
//! - [`ResidualCeiling`] — stops a solve whose residual grows past a limit
//!
//! [`Observer`]: newrap_core::Observer
//! [`HasIterate`]: traits::HasIterate
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod ceiling;
mod history;
mod logging;

pub use ceiling::ResidualCeiling;
pub use history::{History, Record};
pub use logging::LogObserver;
