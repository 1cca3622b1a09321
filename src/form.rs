//! Tag-edit form flow.
//!
//! Wraps the marked tag input on the edit-link page, reads the form fields
//! out at submission time, posts them as JSON to the form's action URL, and
//! navigates based on the response. Suppressing the browser's native
//! submission is the host binding's side of the contract; the controller
//! reports every handled submit so the binding knows to do so.

use serde::{Deserialize, Serialize};

use crate::error::{LinkstashError, Result};
use crate::http::HttpClient;
use crate::page::Page;
use crate::tags::TagEditor;

/// Class marking the tag input in the server-rendered templates.
pub const TAG_INPUT_CLASS: &str = "tagtest";

/// Name of the edit-link form in the server-rendered templates.
pub const EDIT_FORM_NAME: &str = "edit_link";

/// The flat record posted to the edit-link endpoint.
///
/// Field order matters only for byte-stable serialization in tests; the
/// server reads by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditLinkForm {
    pub url: String,
    pub name: String,
    pub description: String,
    pub private: bool,
    pub tags: Vec<String>,
}

/// Expected response from the edit-link endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitResponse {
    pub redirect: Option<String>,
}

/// Where a handled submission ended up. The fall-back branches are modeled
/// explicitly: navigating to the form's own action URL on failure is
/// deliberate behavior, not a swallowed error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The response carried a `redirect` field; we navigated there.
    Redirected(String),
    /// The response carried no usable `redirect`; we navigated to the
    /// form's action URL.
    NoRedirect,
    /// The request failed in transport; we navigated to the form's action
    /// URL anyway (fail-open).
    NetworkFailed,
}

/// Controller for the edit-link form, bound to one page.
#[derive(Debug, Clone)]
pub struct EditForm {
    action: String,
    pub tags: TagEditor,
}

impl EditForm {
    /// Bind to the page, if it carries the tag-edit form.
    ///
    /// An absent tag input is a valid page (nothing to edit here) and
    /// yields `None`. A present tag input with a missing or action-less
    /// form is a templating bug and yields an error.
    pub fn bind(page: &impl Page) -> Result<Option<Self>> {
        if page.elements_with_class(TAG_INPUT_CLASS).is_empty() {
            return Ok(None);
        }
        let action = page
            .form_action(EDIT_FORM_NAME)
            .ok_or_else(|| LinkstashError::MissingFormAction(EDIT_FORM_NAME.to_string()))?;
        let tags = TagEditor::from_input(&page.input_value("tags").unwrap_or_default());
        Ok(Some(EditForm { action, tags }))
    }

    /// The form's declared action URL.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Read the current field values into the record posted to the server.
    pub fn read(&self, page: &impl Page) -> EditLinkForm {
        EditLinkForm {
            url: page.input_value("url").unwrap_or_default(),
            name: page.input_value("name").unwrap_or_default(),
            description: page.input_value("description").unwrap_or_default(),
            private: page.checkbox_checked("private"),
            tags: self.tags.values().to_vec(),
        }
    }

    /// Serialize the fields, POST them, and navigate per the response.
    pub async fn submit(
        &self,
        page: &mut impl Page,
        http: &impl HttpClient,
    ) -> Result<SubmitOutcome> {
        let body = self.read(page);
        match http.post_json(&self.action, &body).await {
            Ok(response) => {
                let parsed: SubmitResponse =
                    serde_json::from_str(&response).unwrap_or_default();
                match parsed.redirect {
                    Some(redirect) => {
                        page.navigate(&redirect);
                        Ok(SubmitOutcome::Redirected(redirect))
                    }
                    None => {
                        tracing::debug!("edit-link response had no redirect, using form action");
                        page.navigate(&self.action);
                        Ok(SubmitOutcome::NoRedirect)
                    }
                }
            }
            Err(err) => {
                tracing::warn!("edit-link submit failed: {err}");
                page.navigate(&self.action);
                Ok(SubmitOutcome::NetworkFailed)
            }
        }
    }
}
