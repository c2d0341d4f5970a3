#![doc(test(attr(deny(warnings))))]

//! Selfcalc generates a LaTeX table of priced line items with one form
//! checkbox per row and a total field that recalculates itself in the PDF
//! viewer, compiles it with an external engine and opens the result.

pub mod compiler;
pub mod config;
pub mod document;
pub mod errors;
pub mod format;
pub mod items;
pub mod output;
pub mod pipeline;
pub mod utils;
pub mod viewer;

use std::sync::Once;

pub use errors::{Result, SelfCalcError};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("selfcalc tracing initialized.");
    });
}
