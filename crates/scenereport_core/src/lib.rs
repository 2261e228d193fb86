//! Public library API for producing introspection reports over 3D scene assets.

/// Record model, record sources, reference analysis, bounds and report printing.
pub mod report;
