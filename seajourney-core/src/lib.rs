//! # Sea Journey Core
//!
//! Behaviour behind the Sea Journey launch page, independent of any
//! rendering surface.
//!
//! ## Overview
//!
//! - **Countdown**: days/hours/minutes/seconds until the launch instant,
//!   clamped at zero and finished once the instant has passed
//! - **Carousel**: wrap-around slide index with manual navigation and a
//!   viewport-dependent visible window
//! - **Subscription**: email validation, the `Idle`/`Submitting` form machine
//!   and the stores that receive one insert per submission
//! - **Notices**: short-lived success/error toasts
//!
//! [`page::LandingPage`] ties these together behind a single message-driven
//! `update`, and [`runtime`] drives it headlessly on tokio.
//!
//! ## Feature Flags
//!
//! - `database`: PostgreSQL store via SQLx, plus [`MIGRATOR`]
//! - `rest`: hosted REST store via reqwest
//! - `headless`: the `seajourney-headless` binary and its tracing setup
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use chrono::Utc;
//! use seajourney_config::ConfigLoader;
//! use seajourney_core::{
//!     page::LandingPage,
//!     runtime::{self, RuntimeSettings, SystemClock, UserAction},
//!     subscription::build_store,
//! };
//!
//! async fn run() -> anyhow::Result<()> {
//!     let config = ConfigLoader::new().load()?.config;
//!     let page = LandingPage::from_config(&config, Utc::now())?;
//!     let store = build_store(&config.subscriptions)?;
//!
//!     let handle = runtime::spawn(
//!         page,
//!         store,
//!         RuntimeSettings::from_config(&config),
//!         Arc::new(SystemClock),
//!     );
//!     handle
//!         .send(UserAction::EmailChanged("traveller@example.com".into()))
//!         .await?;
//!     handle.send(UserAction::Submit).await?;
//!     handle.shutdown().await?;
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod carousel;
pub mod catalog;
pub mod countdown;
pub mod notice;
pub mod page;
pub mod runtime;
pub mod subscription;

pub use carousel::{Carousel, Slide, Viewport};
pub use countdown::{Countdown, CountdownRemaining};
pub use page::{LandingPage, PageCommand, PageEvent, PageSnapshot};

/// Schema for the `subscriptions` table.
#[cfg(feature = "database")]
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
