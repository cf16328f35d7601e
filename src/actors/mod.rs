//! # Actors Module
//!
//! The hub actor and its collaborators.
//!
//! ## Components
//! - `messages`: actor mailbox messages, events and errors
//! - `traits`: the `Responder` seam the hub orchestrates
//! - `responder`: production responder (intent matcher behind a typing delay)
//! - `hub`: the hub actor itself and its public handle

pub mod hub;
pub mod messages;
pub mod responder;
pub mod traits;

pub use hub::HubHandle;
pub use messages::{ActorError, HubEvent, HubMessage};
pub use responder::CannedResponder;
pub use traits::Responder;
