use crate::constants::CoreConstants;
use crate::markers::DiagnosticMarker;
use serde::{Deserialize, Serialize};
use shared::NanoId;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

/// Compiler options handed to the type-checking service once at startup.
/// The checker treats this as process-global state, so it is applied a
/// single time rather than per keystroke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    pub target: String,
    pub module: String,
    pub module_resolution: String,
    pub strict: bool,
    pub libs: Vec<String>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            target: "es2020".to_string(),
            module: "esnext".to_string(),
            module_resolution: "node".to_string(),
            strict: true,
            libs: vec!["es2020".to_string(), "dom".to_string()],
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("TypeScript toolchain unavailable: {0}")]
    Unavailable(String),

    #[error("Type check failed: {0}")]
    Check(String),

    #[error("{0}")]
    Transpile(String),

    #[error("{0}")]
    Eval(String),
}

/// Stable checker-side path for one playground, so concurrently mounted
/// playgrounds never share type-checking state.
pub fn snippet_path(id: &NanoId) -> String {
    format!(
        "{}{}{}",
        CoreConstants::SNIPPET_PATH_PREFIX,
        id,
        CoreConstants::SNIPPET_PATH_SUFFIX
    )
}

/// On-demand static analysis over a snippet buffer.
pub trait TypeCheckService: Send + Sync {
    fn configure(&self, config: &CompilerConfig) -> Result<(), ServiceError>;

    fn markers(&self, snippet: &NanoId, source: &str)
    -> Result<Vec<DiagnosticMarker>, ServiceError>;
}

/// Strips type annotations down to executable text.
pub trait TranspileService: Send + Sync {
    fn transpile(&self, source: &str) -> Result<String, ServiceError>;
}

/// Evaluates transpiled text in an isolated scope. Console output produced
/// during evaluation must flow through [`crate::console::emit`] so the
/// active capture sees it. A thrown value surfaces as
/// [`ServiceError::Eval`] carrying its message.
pub trait ScriptEngine: Send + Sync {
    fn eval(&self, source: &str) -> Result<(), ServiceError>;
}

/// The three external collaborators bundled for sharing across every
/// playground on a page.
#[derive(Clone)]
pub struct PlaygroundServices {
    pub checker: Arc<dyn TypeCheckService>,
    pub transpiler: Arc<dyn TranspileService>,
    pub engine: Arc<dyn ScriptEngine>,
    configured: Arc<Mutex<bool>>,
}

impl PlaygroundServices {
    pub fn new(
        checker: Arc<dyn TypeCheckService>,
        transpiler: Arc<dyn TranspileService>,
        engine: Arc<dyn ScriptEngine>,
    ) -> Self {
        Self {
            checker,
            transpiler,
            engine,
            configured: Arc::new(Mutex::new(false)),
        }
    }

    /// Applies the compiler configuration exactly once per bundle; later
    /// calls (e.g. from additional playground mounts) are no-ops.
    pub fn configure_once(&self, config: &CompilerConfig) -> Result<(), ServiceError> {
        let mut configured = self
            .configured
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !*configured {
            self.checker.configure(config)?;
            *configured = true;
        }
        Ok(())
    }
}
