//! # PracticeMorse configuration registry
//!
//! Single source of truth for every user-adjustable parameter of the
//! practice keyer/trainer: what exists, its range and default, which
//! operating mode surfaces it, and its current value.
//!
//! ## Architecture
//!
//! Three static tables plus one mutable cell per parameter:
//! - [`params`]: descriptor per parameter (storage key, type, bounds, default)
//! - [`groups`]: ordered parameter lists per operating mode
//! - [`registry`]: live values as atomics in the [`CONFIG`] static
//!
//! Collaborators (keying engine, audio, menu UI, persistence) only read
//! and write through this crate; none of their mechanics live here.

#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod groups;
pub mod params;
pub mod registry;

pub use error::RegistryError;
pub use groups::{find_group, OpMode};
pub use params::{
    find_param, param_names, KeyerMode, Param, ParamDescriptor, ParamType, PARAMS,
    SIDETONE_NOTES,
};
pub use registry::{get_default, get_valid_range, validate, Registry, CONFIG};
