//! Delete-confirm flow.
//!
//! Clicking a delete affordance opens an inline yes/no prompt next to it;
//! only an explicit "yes" issues the DELETE request, and the link row is
//! removed from the page only after that request resolves. The live element
//! tree is the single source of truth for which rows are mid-confirmation:
//! at most one prompt exists per row because opening checks for the
//! prompt's id before injecting it.

use std::collections::HashMap;

use crate::error::{LinkstashError, Result};
use crate::http::HttpClient;
use crate::page::{ElementSpec, Page};

/// Class marking delete affordances in the server-rendered templates.
pub const DELETE_LINK_CLASS: &str = "deletelink";

/// Observable state of one link row, derived from the element tree.
///
/// There is no observable "deleting" state: the UI thread is suspended
/// inside [`DeleteConfirm::confirm`] for the request's whole duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    /// Row present, no prompt open.
    Idle,
    /// Row present with an open confirmation prompt.
    Confirming,
    /// Row no longer attached to the page.
    Removed,
}

/// What a handled click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// A fresh confirmation prompt was opened for the row.
    PromptOpened,
    /// A prompt was already open; the click was a no-op.
    AlreadyConfirming,
    /// The prompt was dismissed; the row is untouched.
    Cancelled,
    /// The DELETE resolved and the row was removed from the page.
    Deleted,
    /// The DELETE failed in transport. The row and the open prompt stay in
    /// place; "yes" can be activated again and "no" still cancels.
    DeleteFailed,
}

#[derive(Debug, Clone)]
struct RowBinding {
    url: String,
}

/// Controller for every delete affordance on one page.
#[derive(Debug, Clone)]
pub struct DeleteConfirm {
    /// Trigger element id -> row id.
    triggers: HashMap<String, String>,
    /// Row id -> deletion endpoint.
    rows: HashMap<String, RowBinding>,
}

fn row_element(id: &str) -> String {
    format!("link_{id}")
}

fn confirm_element(id: &str) -> String {
    format!("confirm_{id}")
}

fn yes_element(id: &str) -> String {
    format!("do_delete_{id}")
}

fn cancel_element(id: &str) -> String {
    format!("cancel_delete_{id}")
}

impl DeleteConfirm {
    /// Scan the page for delete affordances and record their endpoints.
    ///
    /// A marked affordance missing `data-url` or `data-link-id` is a
    /// templating bug and surfaces as an error rather than a dead button.
    pub fn bind(page: &impl Page) -> Result<Self> {
        let mut triggers = HashMap::new();
        let mut rows = HashMap::new();
        for element in page.elements_with_class(DELETE_LINK_CLASS) {
            let url = page.attr(&element, "data-url").ok_or_else(|| {
                LinkstashError::MissingAttribute(element.clone(), "data-url".to_string())
            })?;
            let id = page.attr(&element, "data-link-id").ok_or_else(|| {
                LinkstashError::MissingAttribute(element.clone(), "data-link-id".to_string())
            })?;
            triggers.insert(element, id.clone());
            rows.insert(id, RowBinding { url });
        }
        Ok(DeleteConfirm { triggers, rows })
    }

    /// Number of deletable rows bound at mount time.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Current state of the row, read from the page.
    pub fn state(&self, page: &impl Page, id: &str) -> RowState {
        if !page.has_element(&row_element(id)) {
            RowState::Removed
        } else if page.has_element(&confirm_element(id)) {
            RowState::Confirming
        } else {
            RowState::Idle
        }
    }

    /// Ensure exactly one confirmation prompt is open for the row.
    ///
    /// Idempotent: if the prompt already exists, nothing changes.
    pub fn request_delete(&self, page: &mut impl Page, id: &str) -> Result<DeleteOutcome> {
        if page.has_element(&confirm_element(id)) {
            return Ok(DeleteOutcome::AlreadyConfirming);
        }
        let anchor = self
            .triggers
            .iter()
            .find(|(_, row)| row.as_str() == id)
            .map(|(trigger, _)| trigger.clone())
            .ok_or_else(|| LinkstashError::ElementNotFound(format!("delete trigger for '{id}'")))?;

        let prompt = ElementSpec::new("span")
            .id(confirm_element(id))
            .class("deleteconfirm")
            .text("Are you sure?")
            .child(
                ElementSpec::new("a")
                    .id(yes_element(id))
                    .class(DELETE_LINK_CLASS)
                    .class("yesdelete")
                    .text("yes"),
            )
            .child(
                ElementSpec::new("a")
                    .id(cancel_element(id))
                    .class(DELETE_LINK_CLASS)
                    .text("no"),
            );
        page.append_child(&anchor, prompt)?;
        Ok(DeleteOutcome::PromptOpened)
    }

    /// Handle an explicit "yes": issue the DELETE, then remove the row.
    pub async fn confirm(
        &self,
        page: &mut impl Page,
        http: &impl HttpClient,
        id: &str,
    ) -> Result<DeleteOutcome> {
        let Some(row) = self.rows.get(id) else {
            return Err(LinkstashError::ElementNotFound(format!(
                "delete trigger for '{id}'"
            )));
        };
        match http.delete(&row.url).await {
            Ok(()) => {
                page.remove(&row_element(id));
                Ok(DeleteOutcome::Deleted)
            }
            Err(err) => {
                tracing::warn!("delete of link '{id}' failed: {err}");
                Ok(DeleteOutcome::DeleteFailed)
            }
        }
    }

    /// Handle an explicit "no": remove exactly the prompt.
    pub fn cancel(&self, page: &mut impl Page, id: &str) -> DeleteOutcome {
        page.remove(&confirm_element(id));
        DeleteOutcome::Cancelled
    }

    /// Route a click to the flow, if it belongs to it.
    ///
    /// Returns `None` for clicks on elements this flow does not own, and
    /// for confirm/cancel clicks whose prompt is no longer open (stale
    /// events from the host).
    pub async fn handle_click(
        &self,
        page: &mut impl Page,
        http: &impl HttpClient,
        target: &str,
    ) -> Result<Option<(String, DeleteOutcome)>> {
        if let Some(id) = self.triggers.get(target) {
            let id = id.clone();
            let outcome = self.request_delete(page, &id)?;
            return Ok(Some((id, outcome)));
        }
        if let Some(id) = target.strip_prefix("do_delete_") {
            if self.rows.contains_key(id) && page.has_element(&confirm_element(id)) {
                let outcome = self.confirm(page, http, id).await?;
                return Ok(Some((id.to_string(), outcome)));
            }
            return Ok(None);
        }
        if let Some(id) = target.strip_prefix("cancel_delete_") {
            if self.rows.contains_key(id) && page.has_element(&confirm_element(id)) {
                return Ok(Some((id.to_string(), self.cancel(page, id))));
            }
            return Ok(None);
        }
        Ok(None)
    }
}
