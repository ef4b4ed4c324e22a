//! # structure-lint-rules
//!
//! The hierarchical project-structure validation pipeline.
//!
//! A file is validated by four gates, in order:
//!
//! 1. Location - is the category folder known and permitted?
//! 2. Depth - does nesting match the category, with kebab-case segments?
//! 3. Filename - suffix, kebab-case, domain-prefix match
//! 4. Exports - exactly one correctly named value export
//!
//! A failing gate halts the pipeline for that file (Level 3 may report two
//! findings before halting); Level 4 accumulates its naming findings
//! instead of stopping at the first. [`StructureRule`] is the driver;
//! [`classify`] decides whether a path participates at all.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod case;
pub mod classifier;
pub mod derive;

mod depth_gate;
mod export_gate;
mod filename_gate;
mod location_gate;
mod pipeline;
mod suffix;

pub use classifier::{classify, Classification};
pub use pipeline::{Gate, Outcome, StructureRule};
pub use suffix::{strip_file_suffix, SuffixMatch};
