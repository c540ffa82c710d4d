//! # OrderMail Engine
//! The notification rule engine: given the previous and current snapshot of
//! an order, decide which emails to produce. Pure and synchronous; all I/O
//! lives behind the capability traits in ordermail-core.

pub mod rules;
pub mod templates;

pub use rules::RuleEngine;
