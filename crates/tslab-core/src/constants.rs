pub struct CoreConstants;

impl CoreConstants {
    /// Grace period between a run request and the marker query, so the
    /// asynchronous checker catches up with the latest edit.
    pub const MARKER_SETTLE_MS: u64 = 300;

    /// Shown verbatim when a run succeeds without logging anything.
    pub const NO_OUTPUT_SENTINEL: &'static str = "Code ran successfully (no output).";

    /// Captured console lines beyond this are dropped for one run.
    pub const MAX_CAPTURED_LINES: usize = 1_000;

    pub const SNIPPET_PATH_PREFIX: &'static str = "snippets/";
    pub const SNIPPET_PATH_SUFFIX: &'static str = ".ts";
}
