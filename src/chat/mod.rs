//! # Chat Module
//!
//! Session-scoped chat state and reply scheduling.
//!
//! ## Components
//! - `log`: caller-owned, append-only message store for the session
//! - `scheduler`: deferred canned-reply tasks on the tokio timer

pub mod log;
pub mod scheduler;

pub use log::ChatLog;
pub use scheduler::{PendingReply, ReplyScheduler};
