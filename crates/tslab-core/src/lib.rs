pub mod console;
pub mod constants;
pub mod controller;
pub mod events;
pub mod filter;
pub mod markers;
pub mod run_control;
pub mod sandbox;
pub mod services;
pub mod session;

pub use constants::CoreConstants;
pub use controller::{PlaygroundController, RunState};
pub use events::RunEvent;
pub use filter::{
    AMBIENT_IDENTIFIERS, SANDBOX_NOISE_FRAGMENTS, UNTYPED_OBJECT_MEMBERS, filter_markers,
};
pub use markers::{DiagnosticMarker, MarkerSeverity};
pub use run_control::RunControl;
pub use sandbox::{ExecutionOutcome, ExecutionSandbox};
pub use services::{
    CompilerConfig, PlaygroundServices, ScriptEngine, ServiceError, TranspileService,
    TypeCheckService, snippet_path,
};
pub use session::SnippetSession;
