//! In-memory render targets and the form controls rendered into them.
//!
//! A [`Section`] is the region of the page a reference-data loader owns. It
//! is serialized straight into the template context, where `status` selects
//! between the loading placeholder, the error message and the controls.

use serde::Serialize;

use crate::domain::types::MaterialId;

/// Visible state of a render target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionState<C> {
    Loading { message: String },
    Ready { items: Vec<C> },
    Failed { message: String },
}

/// A render target holding controls of type `C`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Section<C> {
    state: SectionState<C>,
}

impl<C> Default for Section<C> {
    fn default() -> Self {
        Self {
            state: SectionState::Ready { items: Vec::new() },
        }
    }
}

impl<C> Section<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SectionState<C> {
        &self.state
    }

    /// Replaces whatever is shown with a loading placeholder.
    pub fn begin_loading(&mut self, message: impl Into<String>) {
        self.state = SectionState::Loading {
            message: message.into(),
        };
    }

    /// Replaces whatever is shown with an error message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = SectionState::Failed {
            message: message.into(),
        };
    }

    /// Removes every control, leaving an empty ready section.
    pub fn clear(&mut self) {
        self.state = SectionState::Ready { items: Vec::new() };
    }

    /// Appends a control. A section that is loading or failed is cleared first.
    pub fn push(&mut self, control: C) {
        if let SectionState::Ready { items } = &mut self.state {
            items.push(control);
            return;
        }
        self.state = SectionState::Ready {
            items: vec![control],
        };
    }

    /// Controls currently shown; empty unless the section is ready.
    pub fn items(&self) -> &[C] {
        match &self.state {
            SectionState::Ready { items } => items,
            _ => &[],
        }
    }

    pub fn items_mut(&mut self) -> &mut [C] {
        match &mut self.state {
            SectionState::Ready { items } => items.as_mut_slice(),
            _ => Default::default(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SectionState::Loading { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SectionState::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Numeric quantity input for one raw material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialControl {
    pub material_id: MaterialId,
    pub label: String,
    pub value: String,
}

/// `<option>` of the page-count select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSelectOption {
    pub value: u32,
    pub text: String,
    pub selected: bool,
}
