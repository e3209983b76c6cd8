use std::process::Command;
use tslab_core::ServiceError;

/// Locations of the external TypeScript toolchain binaries. `probe` is the
/// bounded readiness check: each binary must answer `--version` once
/// before any playground is configured.
#[derive(Debug, Clone)]
pub struct Toolchain {
    pub node: String,
    pub tsc: String,
}

impl Toolchain {
    pub fn probe() -> Result<Self, ServiceError> {
        let toolchain = Self {
            node: std::env::var("TSLAB_NODE").unwrap_or_else(|_| "node".to_string()),
            tsc: std::env::var("TSLAB_TSC").unwrap_or_else(|_| "tsc".to_string()),
        };
        toolchain.check_binary(&toolchain.node)?;
        toolchain.check_binary(&toolchain.tsc)?;
        Ok(toolchain)
    }

    fn check_binary(&self, binary: &str) -> Result<(), ServiceError> {
        let status = Command::new(binary)
            .arg("--version")
            .output()
            .map_err(|err| ServiceError::Unavailable(format!("{binary}: {err}")))?;
        if status.status.success() {
            Ok(())
        } else {
            Err(ServiceError::Unavailable(format!(
                "{binary} --version exited with {}",
                status.status
            )))
        }
    }
}
