//! # Matcher Module
//!
//! Keyword-rule intent matching for the unified inbox assistant.
//! Maps free-text user input to one of a fixed set of canned replies
//! without any model call.
//!
//! ## Components
//! - `intent`: the ordered first-match-wins classifier
//! - `responses`: the static rule table and canned reply strings

pub mod intent;
pub mod responses;

pub use intent::{Intent, IntentMatcher, MatchResult};
pub use responses::{ResponseRule, FALLBACK_RESPONSE, RULES};
