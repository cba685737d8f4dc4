//! # Boxforge
//!
//! Parametric finger-jointed (box-joint) box generator for laser cutters
//! and CNC routers.
//!
//! ## Architecture
//!
//! Boxforge is organized as a workspace with two crates plus this binary:
//!
//! 1. **boxforge-core** - finger-layout engine, edge classifier, panel
//!    outline builder, box assembly orchestration
//! 2. **boxforge-camtools** - sheet layout, SVG and laser G-code export
//! 3. **boxforge** - the command-line binary tying them together

pub use boxforge_camtools::{
    arrange, gcode, svg, LaserParameters, PlacedPanel, SheetParameters,
};
pub use boxforge_core::{
    BoxAssembler, BoxError, BoxSpec, DimensionMode, FingerPattern, GenerationReport, Outline,
    PanelKind, PanelSet, RecordingBackend,
};

/// Initialize the tracing subscriber for the CLI. INFO by default,
/// overridable through `RUST_LOG`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
