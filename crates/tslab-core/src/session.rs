use shared::NanoId;

/// Editable source state for one playground widget: the learner's draft,
/// the immutable reference solution, and which of the two the editor is
/// currently showing.
///
/// Invariant: while `viewing_reference` is false, `current == draft`.
/// While it is true, `current` mirrors the reference solution and `draft`
/// keeps whatever the learner had at the moment of the swap.
#[derive(Debug, Clone)]
pub struct SnippetSession {
    id: NanoId,
    default_snippet: String,
    current: String,
    draft: String,
    reference: Option<String>,
    viewing_reference: bool,
}

impl SnippetSession {
    pub fn new(default_snippet: impl Into<String>, reference: Option<String>) -> Self {
        let default_snippet = default_snippet.into();
        Self {
            id: NanoId::generate(),
            current: default_snippet.clone(),
            draft: default_snippet.clone(),
            default_snippet,
            reference,
            viewing_reference: false,
        }
    }

    pub fn id(&self) -> &NanoId {
        &self.id
    }

    pub fn current_source(&self) -> &str {
        &self.current
    }

    pub fn draft_source(&self) -> &str {
        &self.draft
    }

    pub fn default_snippet(&self) -> &str {
        &self.default_snippet
    }

    pub fn reference_solution(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn has_reference(&self) -> bool {
        self.reference.is_some()
    }

    pub fn is_viewing_reference(&self) -> bool {
        self.viewing_reference
    }

    /// Applies an editor change. Edits made while the reference solution is
    /// displayed only touch the transient text; the draft stays intact.
    pub fn edit(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !self.viewing_reference {
            self.draft.clone_from(&text);
        }
        self.current = text;
    }

    /// Swaps between the draft and the reference solution. Returns false
    /// when no reference solution exists (nothing changes).
    pub fn toggle_reference(&mut self) -> bool {
        let Some(reference) = self.reference.clone() else {
            return false;
        };

        if self.viewing_reference {
            self.current.clone_from(&self.draft);
            self.viewing_reference = false;
        } else {
            self.draft.clone_from(&self.current);
            self.current = reference;
            self.viewing_reference = true;
        }
        true
    }

    /// Returns both source slots to the author-provided default.
    pub fn reset(&mut self) {
        self.current.clone_from(&self.default_snippet);
        self.draft.clone_from(&self.default_snippet);
        self.viewing_reference = false;
    }

    /// Replaces the draft with previously saved text, e.g. restored from
    /// the progress store. Shows it immediately unless the reference
    /// solution is on screen.
    pub fn restore_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        if !self.viewing_reference {
            self.current.clone_from(&self.draft);
        }
    }
}
