use crate::toolchain::Toolchain;
use std::process::Command;
use tslab_core::{ScriptEngine, ServiceError, console};

/// Evaluates transpiled JavaScript as a function body under `node`. The
/// wrapper tees `console.log` so objects are pretty-printed and the
/// original sink still fires, then restores it in a `finally` block; each
/// stdout line is forwarded into the core console tee.
pub struct NodeEngine {
    toolchain: Toolchain,
}

impl NodeEngine {
    pub fn new(toolchain: Toolchain) -> Self {
        Self { toolchain }
    }
}

impl ScriptEngine for NodeEngine {
    fn eval(&self, source: &str) -> Result<(), ServiceError> {
        let program = wrap_as_function_body(source);

        let output = Command::new(&self.toolchain.node)
            .arg("-e")
            .arg(&program)
            .output()
            .map_err(|err| ServiceError::Unavailable(format!("{}: {err}", self.toolchain.node)))?;

        for line in String::from_utf8_lossy(&output.stdout).lines() {
            console::emit(line);
        }

        if output.status.success() {
            Ok(())
        } else {
            Err(ServiceError::Eval(extract_thrown_message(
                &String::from_utf8_lossy(&output.stderr),
            )))
        }
    }
}

/// Builds the evaluation harness around one transpiled snippet. The
/// snippet text is embedded as a JSON string literal, so arbitrary quotes
/// and newlines survive.
pub fn wrap_as_function_body(source: &str) -> String {
    let literal = serde_json::to_string(source).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"const __format = (arg) =>
  typeof arg === "object" && arg !== null ? JSON.stringify(arg, null, 2) : String(arg);
const __log = console.log;
console.log = (...args) => {{
  __log(args.map(__format).join(" "));
}};
try {{
  new Function({literal})();
}} finally {{
  console.log = __log;
}}
"#
    )
}

/// Pulls the thrown value's message out of node's stderr dump: the first
/// `SomethingError: message` line wins; a bare thrown value falls back to
/// the first non-stack line; an empty dump to the exit description.
pub fn extract_thrown_message(stderr: &str) -> String {
    let lines: Vec<&str> = stderr
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();

    for line in &lines {
        if let Some(message) = error_line_message(line) {
            return message;
        }
    }

    lines
        .iter()
        .find(|line| !is_stack_or_banner_line(line))
        .map_or_else(
            || "Script exited with a failure status".to_string(),
            |line| (*line).trim().to_string(),
        )
}

fn error_line_message(line: &str) -> Option<String> {
    let (name, message) = line.split_once(": ")?;
    let is_error_name = !name.is_empty()
        && name.chars().all(char::is_alphanumeric)
        && name.ends_with("Error");
    is_error_name.then(|| message.to_string())
}

fn is_stack_or_banner_line(line: &str) -> bool {
    // Stack frames and the offending-source echo are indented; the rest
    // are node's own banners.
    line.starts_with(' ')
        || line.starts_with('\t')
        || line.starts_with('^')
        || line.starts_with("node:")
        || line.starts_with("Node.js v")
        || line.starts_with("(Use ")
}
