//! Spaced-repetition scheduling for previously attempted problems.
//!
//! The core is an SM-2 family scheduler: a solved/failed outcome plus an
//! optional difficulty rating is mapped onto a 0-5 quality score, and the
//! quality score drives the interval-update step that produces the next
//! review date. Every operation is a pure function over explicit state;
//! persistence is left to the embedding application through the
//! [`store::ReviewStore`] trait.

pub mod config;
pub mod engine;
pub mod logging;
pub mod scheduler;
pub mod store;
pub mod types;
