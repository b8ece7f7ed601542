//! Conversation-Starter Recommendation Engine
//!
//! Selects and categorizes conversation questions for two interest
//! profiles: questions about what both people share, about what only the
//! counterpart brings, about combinations across the union of both, and
//! about the social situation itself. Pure and synchronous; the only
//! randomness is the opt-in refresh sampling, seeded by the caller.

mod engine;
mod sampling;
mod types;

pub use engine::QuestionEngine;
pub use sampling::{refresh_seed, sample_in_order};
pub use types::*;
