//! Core library for the competency-tools command line application.
//!
//! The library exposes high-level orchestration helpers that power the
//! command-line interface as well as the unit tests. The modules are structured
//! to keep responsibilities narrow and composable: IO adapters live under
//! [`competency::tools::io`], data representations inside
//! [`competency::tools::model`], identifier synthesis in
//! [`competency::tools::codes`], the hierarchy reformatter in
//! [`competency::tools::reformat`], and the per-file and per-directory
//! orchestration under [`competency::tools::sync`] and
//! [`competency::tools::batch`].

pub mod competency;

pub use competency::tools::{Result, ToolError, batch, codes, error, io, model, reformat, sync};
