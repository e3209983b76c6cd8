use crate::markers::DiagnosticMarker;

/// Ambient names the sandbox cannot resolve because its type-checking
/// environment carries no real module graph or DOM setup. An unresolved
/// reference to one of these is an artifact of the sandbox, not a learner
/// mistake.
pub const AMBIENT_IDENTIFIERS: &[&str] = &[
    "console",
    "window",
    "document",
    "globalThis",
    "JSON",
    "Math",
    "Date",
    "Promise",
    "Error",
    "Array",
    "Object",
    "String",
    "Number",
    "Boolean",
    "Symbol",
    "RegExp",
    "Map",
    "Set",
    "WeakMap",
    "WeakSet",
    "fetch",
    "alert",
    "setTimeout",
    "setInterval",
    "clearTimeout",
    "clearInterval",
    "localStorage",
    "sessionStorage",
    "HTMLElement",
    "HTMLInputElement",
    "HTMLButtonElement",
    "Event",
    "MouseEvent",
    "KeyboardEvent",
    "Partial",
    "Required",
    "Readonly",
    "Record",
    "Pick",
    "Omit",
    "Exclude",
    "Extract",
    "NonNullable",
    "ReturnType",
    "Parameters",
    "Awaited",
];

/// Standard container and string members forgiven on an empty-object
/// literal. The checker cannot follow an `{}` literal's evolving shape, so
/// these accesses produce false positives in lesson snippets.
pub const UNTYPED_OBJECT_MEMBERS: &[&str] = &[
    "length",
    "push",
    "pop",
    "shift",
    "unshift",
    "slice",
    "splice",
    "concat",
    "join",
    "reverse",
    "sort",
    "map",
    "filter",
    "reduce",
    "forEach",
    "find",
    "findIndex",
    "includes",
    "indexOf",
    "some",
    "every",
    "flat",
    "keys",
    "values",
    "entries",
    "split",
    "trim",
    "toUpperCase",
    "toLowerCase",
    "charAt",
    "substring",
    "replace",
    "startsWith",
    "endsWith",
    "padStart",
    "padEnd",
    "repeat",
    "toFixed",
];

/// Message fragments marking a missing global type, a standard-library
/// resolution failure, or a change-your-target-library hint. All of them
/// come from the sandbox's incomplete ambient environment.
pub const SANDBOX_NOISE_FRAGMENTS: &[&str] = &[
    "Cannot find global type",
    "Cannot find global value",
    "Cannot find lib definition",
    "Do you need to change your target library",
    "Cannot find module",
];

/// Reduce raw checker markers to the learner-relevant error list. Pure:
/// the result depends only on `markers`, in their original order. Each
/// surviving marker is formatted as `Line L, Col C: message`.
pub fn filter_markers(markers: &[DiagnosticMarker]) -> Vec<String> {
    markers
        .iter()
        .filter(|marker| is_relevant(marker))
        .map(format_marker)
        .collect()
}

pub fn format_marker(marker: &DiagnosticMarker) -> String {
    format!(
        "Line {}, Col {}: {}",
        marker.line, marker.column, marker.message
    )
}

fn is_relevant(marker: &DiagnosticMarker) -> bool {
    if !marker.severity.is_error() {
        return false;
    }

    let message = marker.message.as_str();

    if let Some(name) = quoted_subject(message, "Cannot find name '")
        && AMBIENT_IDENTIFIERS.contains(&name)
    {
        return false;
    }

    if SANDBOX_NOISE_FRAGMENTS
        .iter()
        .any(|fragment| message.contains(fragment))
    {
        return false;
    }

    if let Some(member) = untyped_object_member(message)
        && UNTYPED_OBJECT_MEMBERS.contains(&member)
    {
        return false;
    }

    // The sandbox does not enforce the no-implicit-any tier for learners.
    if message.contains("implicitly has an 'any' type")
        || message.contains("implicitly has type 'any'")
    {
        return false;
    }

    // Independent snippets share one ambient analysis namespace.
    if message.contains("Cannot redeclare block-scoped variable") {
        return false;
    }

    // Lessons intentionally author incomplete object literals.
    if is_missing_required_property(message) {
        return false;
    }

    true
}

/// Extracts `name` from a message starting with `prefix'name'`.
fn quoted_subject<'a>(message: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = message.strip_prefix(prefix)?;
    let end = rest.find('\'')?;
    Some(&rest[..end])
}

/// Extracts `member` from `Property 'member' does not exist on type '{}'`.
fn untyped_object_member(message: &str) -> Option<&str> {
    let member = quoted_subject(message, "Property '")?;
    message
        .contains("does not exist on type '{}'")
        .then_some(member)
}

fn is_missing_required_property(message: &str) -> bool {
    (message.contains("is missing in type") && message.contains("but required in type"))
        || message.contains("missing the following properties")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::MarkerSeverity;

    fn error(message: &str) -> DiagnosticMarker {
        DiagnosticMarker::error(message, 1, 1)
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(filter_markers(&[]).is_empty());
    }

    #[test]
    fn test_non_errors_discarded() {
        let markers = vec![
            DiagnosticMarker::new(MarkerSeverity::Warning, "Unused variable 'x'.", 1, 5),
            DiagnosticMarker::new(MarkerSeverity::Info, "Consider const.", 2, 1),
            DiagnosticMarker::new(MarkerSeverity::Hint, "Could be narrowed.", 3, 1),
        ];
        assert!(filter_markers(&markers).is_empty());
    }

    #[test]
    fn test_ambient_name_discarded_unknown_name_retained() {
        let markers = vec![
            error("Cannot find name 'console'."),
            error("Cannot find name 'myUndefinedVar'."),
        ];
        let result = filter_markers(&markers);
        assert_eq!(result.len(), 1);
        assert!(result[0].contains("myUndefinedVar"));
    }

    #[test]
    fn test_utility_type_name_discarded() {
        let markers = vec![error("Cannot find name 'Partial'.")];
        assert!(filter_markers(&markers).is_empty());
    }

    #[test]
    fn test_target_library_hint_discarded() {
        let markers = vec![error(
            "Cannot find name 'BigInt'. Do you need to change your target library? \
             Try changing the 'lib' compiler option to 'es2020' or later.",
        )];
        assert!(filter_markers(&markers).is_empty());
    }

    #[test]
    fn test_missing_global_type_discarded() {
        let markers = vec![
            error("Cannot find global type 'Array'."),
            error("Cannot find global value 'Promise'."),
        ];
        assert!(filter_markers(&markers).is_empty());
    }

    #[test]
    fn test_container_member_on_empty_object_discarded_custom_retained() {
        let markers = vec![
            error("Property 'reduce' does not exist on type '{}'."),
            error("Property 'orderTotal' does not exist on type '{}'."),
        ];
        let result = filter_markers(&markers);
        assert_eq!(result.len(), 1);
        assert!(result[0].contains("orderTotal"));
    }

    #[test]
    fn test_container_member_on_real_type_retained() {
        // Only the `'{}'` inference gap is forgiven, not a genuine miss.
        let markers = vec![error(
            "Property 'reduce' does not exist on type 'number'.",
        )];
        assert_eq!(filter_markers(&markers).len(), 1);
    }

    #[test]
    fn test_implicit_any_discarded() {
        let markers = vec![
            error("Parameter 'x' implicitly has an 'any' type."),
            error("Variable 'acc' implicitly has type 'any' in some locations."),
        ];
        assert!(filter_markers(&markers).is_empty());
    }

    #[test]
    fn test_redeclared_block_scoped_variable_discarded() {
        let markers = vec![error("Cannot redeclare block-scoped variable 'user'.")];
        assert!(filter_markers(&markers).is_empty());
    }

    #[test]
    fn test_missing_required_property_discarded() {
        let markers = vec![
            error("Property 'email' is missing in type '{ name: string; }' but required in type 'User'."),
            error("Type '{}' is missing the following properties from type 'User': name, email"),
        ];
        assert!(filter_markers(&markers).is_empty());
    }

    #[test]
    fn test_genuine_type_mismatch_retained_and_formatted() {
        let markers = vec![DiagnosticMarker::error(
            "Type 'string' is not assignable to type 'number'.",
            1,
            5,
        )];
        let result = filter_markers(&markers);
        assert_eq!(
            result,
            vec!["Line 1, Col 5: Type 'string' is not assignable to type 'number'.".to_string()]
        );
    }

    #[test]
    fn test_original_order_preserved() {
        let markers = vec![
            DiagnosticMarker::error("Type 'string' is not assignable to type 'number'.", 3, 1),
            DiagnosticMarker::error("Cannot find name 'undefinedThing'.", 1, 1),
        ];
        let result = filter_markers(&markers);
        assert_eq!(result.len(), 2);
        assert!(result[0].starts_with("Line 3"));
        assert!(result[1].starts_with("Line 1"));
    }

    #[test]
    fn test_filter_is_pure() {
        let markers = vec![
            error("Cannot find name 'console'."),
            error("Cannot find name 'oops'."),
        ];
        let first = filter_markers(&markers);
        let second = filter_markers(&markers);
        assert_eq!(first, second);
        assert_eq!(markers.len(), 2);
    }
}
