//! scenarist-core: scenario transcoding engine.
//!
//! Converts game-scenario documents between a raw attribute tree
//! ([`RawNode`], produced by the `scenarist-xml` bridge) and a normalized,
//! strongly-typed aggregate ([`Scenario`]), and back.
//!
//! Parsing is tolerant by construction: every field, entity, condition and
//! action validates independently, and whatever fails to validate is
//! dropped while the rest of the document survives. Only two structural
//! failures abort a parse ([`ScenarioError`]).
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`parse_scenario()`] -- raw tree to normalized [`Scenario`]
//! - [`Scenario::to_raw()`] -- normalized aggregate back to a raw tree
//! - [`Condition`], [`Action`], [`Event`] -- the typed fragment engines
//! - [`template`] -- fragment emitters honoring the disabled flag
//! - [`ScenarioError`] -- the two structural parse failures

pub mod action;
pub mod condition;
pub mod enums;
pub mod error;
pub mod event;
pub mod raw;
pub mod scenario;
pub mod template;
pub mod validate;

// ── Convenience re-exports: key types ────────────────────────────────

pub use action::Action;
pub use condition::Condition;
pub use error::ScenarioError;
pub use event::Event;
pub use raw::RawNode;
pub use scenario::{Disaster, Goal, Location, Milestone, Scenario, StartingConditions};

// ── Convenience re-exports: pipeline entry points ────────────────────

pub use scenario::parse_scenario;
