/// Utility modules for the repurposing pipeline
///
/// This module contains dataset loading and the output formatting and export
/// helpers.

pub mod dataset;
pub mod output_formatter;
