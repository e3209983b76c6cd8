//! Adapters binding the playground core's service traits to an installed
//! TypeScript toolchain: `tsc` for diagnostics and transpilation, `node`
//! for execution. Nothing here reimplements a checker; the toolchain stays
//! an external collaborator.

mod checker;
mod engine;
mod toolchain;
mod transpiler;

pub use checker::TscCheckService;
pub use engine::NodeEngine;
pub use toolchain::Toolchain;
pub use transpiler::TscTranspiler;

use std::sync::Arc;
use tslab_core::{CompilerConfig, PlaygroundServices, ServiceError};

/// Probes the toolchain, builds the full service bundle and applies the
/// compiler configuration once. Called a single time at startup.
pub fn connect(config: &CompilerConfig) -> Result<PlaygroundServices, ServiceError> {
    let toolchain = Toolchain::probe()?;
    let services = PlaygroundServices::new(
        Arc::new(TscCheckService::new(toolchain.clone())?),
        Arc::new(TscTranspiler::new(toolchain.clone())?),
        Arc::new(NodeEngine::new(toolchain)),
    );
    services.configure_once(config)?;
    Ok(services)
}
