//! Scale form state management.
//!
//! This module holds the text being edited in the scale form and the outcome
//! of the last submission.

use rangekit::{ScaleForm, ScaleOutcome};

/// State of the scale form.
///
/// Responsibilities:
/// - Owning the editable field text
/// - Remembering the last submission's outcome for display
#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// Editable field text
    fields: ScaleForm,
    /// Outcome of the most recent submission
    last_outcome: Option<ScaleOutcome>,
}

impl FormState {
    /// Creates form state prefilled with the given fields.
    pub fn with_fields(fields: ScaleForm) -> Self {
        Self {
            fields,
            last_outcome: None,
        }
    }

    // ===== Queries =====

    pub fn fields(&self) -> &ScaleForm {
        &self.fields
    }

    /// Returns the outcome of the most recent submission, if any.
    pub fn last_outcome(&self) -> Option<&ScaleOutcome> {
        self.last_outcome.as_ref()
    }

    // ===== Mutations =====

    /// Mutable access to the field text for the text editors.
    pub fn fields_mut(&mut self) -> &mut ScaleForm {
        &mut self.fields
    }

    /// Submits the current fields and stores the outcome.
    pub fn submit(&mut self) -> &ScaleOutcome {
        self.last_outcome.insert(self.fields.submit())
    }
}
