//! The `navlink-runtime` library drives the GNSS subsystem of cellular modems.
//!
//! This library contains modules for core data types, device drivers and
//! mathematics. The `core` module defines the `PositionFix` record, a
//! snapshot of the receiver state at one query instant. The `driver` module
//! contains the fix report parser and the modem controller, which issues
//! its commands over the `transport::Transport` collaborator. The `math`
//! module provides the great-circle distance utility.
//!
//! The transport itself is not part of this library: anything that can
//! exchange a command string for a sequence of response lines can back the
//! controller. Binaries provide a concrete transport and compose it with
//! the driver.

pub mod core;
pub mod driver;
pub mod math;
pub mod transport;

mod config;
mod error;

pub use self::config::*;
pub use self::error::{Error, Result};
