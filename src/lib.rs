//! Core library for the gics-tools command line application.
//!
//! The library exposes high-level orchestration helpers that power the
//! command-line interface as well as the integration tests. The modules are
//! structured to keep responsibilities narrow and composable: IO adapters
//! live under [`gics::tools::io`], the classification entities inside
//! [`gics::tools::model`], the CSV table layout in [`gics::tools::tables`],
//! and the pipeline orchestration under [`gics::tools::pipeline`].

pub mod gics;

pub use gics::tools::{Result, ToolError, error, io, model, pipeline, tables};
