//! # terrarium-domain
//!
//! Pure domain model for the terrarium dashboard client.
//!
//! ## Responsibilities
//! - Define the **Snapshot** returned by one status poll (sensor readings,
//!   derived status labels, actuator states)
//! - Define **Actuator** states (`ON` / `OFF`) and the toggle rule
//! - Define the client-side **ControlState** mirror and the **ControlCommand**
//!   sent back to the server
//! - Define the **Layout**: which snapshot field or actuator is bound to which
//!   page element
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod actuator;
pub mod control;
pub mod layout;
pub mod snapshot;
