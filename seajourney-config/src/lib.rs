//! Shared configuration library for the Sea Journey landing page.
//!
//! This crate centralizes config loading and validation: an optional TOML
//! file, a `.env` file, and process environment overrides are composed into a
//! single [`Config`]. Both the desktop page and the headless runtime load
//! through [`ConfigLoader`] so defaults and validation rules live in one place.

#![allow(missing_docs)]

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::{
    CarouselConfig, Config, ConfigMetadata, CountdownConfig, LaunchConfig,
    SlideSpec, StoreConfig, StoreKind, SubscriptionConfig,
};
pub use validation::{ConfigWarning, ConfigWarnings};
