//! Sea Journey desktop page
//!
//! An iced rendition of the launch page. All behaviour lives in
//! `seajourney-core`; this crate owns the timers (as subscriptions), the
//! outbound write (as a task) and the widgets.
//!
//! Notes
//! - The subscription store is built inside a boot task so lazily-connected
//!   pools are created on iced's tokio executor.
//! - Modules are public so the update loop can be exercised from tests.

pub mod app;
pub mod images;
pub mod links;
pub mod messages;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod update;
pub mod views;
