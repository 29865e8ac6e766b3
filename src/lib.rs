//! Whirlwind – a guided tour of core and modern Rust idioms.
//!
//! The crate is a linear sequence of small, self-contained demonstrations:
//! functions and closures, destructuring and defaults, sequence
//! transformation and searching, ordered and hashed collections, string
//! interpolation and padding, trait-based dispatch, deferred resolution on
//! a timer, local error recovery, and shallow-versus-independent copy
//! semantics. Each demonstration computes a value; the [`tour`] module
//! strings them together in order and renders one printable line per
//! result.
//!
//! ## Modules
//! * [`functions`] – callables, defaults, the rest/first split, and the
//!   counter closure.
//! * [`sequences`] – ordered integer sequences: transform, search, sort,
//!   slice, splice, and the aliasing demonstration.
//! * [`collections`] – records, ordered key mappings, associative stores,
//!   deduplicated sets.
//! * [`text`] – interpolation and padding.
//! * [`speech`] – the [`speech::Speaks`] trait with a provided default
//!   voice and an overriding variant.
//! * [`deferred`] – timer-based deferred resolution as an explicit task.
//! * [`client`] – inert CRUD routines against a public demo API.
//! * [`tour`] – the orchestrator producing the full transcript.
//! * [`settings`] – optional file-based configuration with defaults.
//!
//! ## Quick Start
//! ```
//! let lines = whirlwind::tour::run_blocks();
//! assert_eq!(lines[0], "8");
//! assert_eq!(lines.last().unwrap(), whirlwind::tour::CLOSING_LINE);
//! ```
//!
//! The network routines in [`client`] are documented, callable, and never
//! invoked by the default run; set `exercise_network` in `whirlwind.json`
//! to fire them against the demo API.

pub mod client;
pub mod collections;
pub mod deferred;
pub mod error;
pub mod functions;
pub mod sequences;
pub mod settings;
pub mod speech;
pub mod text;
pub mod tour;
