//! Interaction controller: one-time registration and event dispatch.
//!
//! Mounted once, after the page's structural content is available. The
//! three flows (delete-confirm, tag-edit form, search-submit) are
//! independent; the optional ones bind only when their marker element is
//! present, and registration order between them carries no meaning.

use crate::delete::{DeleteConfirm, DeleteOutcome};
use crate::error::Result;
use crate::events::PageEvent;
use crate::form::{EDIT_FORM_NAME, EditForm, SubmitOutcome};
use crate::http::HttpClient;
use crate::page::Page;
use crate::search::SearchSubmit;

/// Externally observable outcome of one dispatched event.
///
/// Every fail-open branch gets its own variant so nothing recovers behind
/// an unlabeled catch-all. `Submitted*` and `Searched` also signal the host
/// binding to suppress the platform's default for the handled event (native
/// form submission, implicit Enter submit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled {
    /// The event belonged to none of the three flows.
    Ignored,
    /// A confirmation prompt was opened for the row.
    ConfirmOpened { id: String },
    /// The row already had an open prompt; nothing changed.
    ConfirmRepeated { id: String },
    /// The prompt was dismissed; the row is untouched.
    DeleteCancelled { id: String },
    /// The DELETE resolved and the row was removed.
    Deleted { id: String },
    /// The DELETE failed in transport; row and prompt remain (warn-logged).
    DeleteFailed { id: String },
    /// The edit form was posted and the response redirected us.
    Submitted { url: String },
    /// The edit form was posted but we fell back to the form's action URL,
    /// either because the response carried no redirect or because the
    /// request failed in transport.
    SubmittedFellBack { url: String, network_failed: bool },
    /// Enter in the search field navigated to the search results path.
    Searched { path: String },
}

/// Owns the page handle and the HTTP client, and routes input events to
/// whichever flow claims them.
pub struct InteractionController<P: Page, H: HttpClient> {
    page: P,
    http: H,
    delete: DeleteConfirm,
    edit_form: Option<EditForm>,
    search: Option<SearchSubmit>,
}

impl<P: Page, H: HttpClient> InteractionController<P, H> {
    /// Scan the page contract and bind every flow it carries.
    ///
    /// Absent optional elements (tag input, search field) are valid;
    /// malformed present ones (missing data attributes, action-less form)
    /// are errors.
    pub fn mount(page: P, http: H) -> Result<Self> {
        let delete = DeleteConfirm::bind(&page)?;
        let edit_form = EditForm::bind(&page)?;
        let search = SearchSubmit::bind(&page)?;
        tracing::debug!(
            "mounted: {} delete row(s), edit form: {}, search field: {}",
            delete.row_count(),
            edit_form.is_some(),
            search.is_some(),
        );
        Ok(InteractionController {
            page,
            http,
            delete,
            edit_form,
            search,
        })
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn delete(&self) -> &DeleteConfirm {
        &self.delete
    }

    pub fn edit_form(&self) -> Option<&EditForm> {
        self.edit_form.as_ref()
    }

    pub fn edit_form_mut(&mut self) -> Option<&mut EditForm> {
        self.edit_form.as_mut()
    }

    pub fn search(&self) -> Option<&SearchSubmit> {
        self.search.as_ref()
    }

    /// Dispatch one input event. Runs to completion before the next event;
    /// only the network awaits inside suspend.
    pub async fn handle(&mut self, event: PageEvent) -> Result<Handled> {
        match event {
            PageEvent::Click { target } => {
                match self
                    .delete
                    .handle_click(&mut self.page, &self.http, &target)
                    .await?
                {
                    Some((id, outcome)) => Ok(match outcome {
                        DeleteOutcome::PromptOpened => Handled::ConfirmOpened { id },
                        DeleteOutcome::AlreadyConfirming => Handled::ConfirmRepeated { id },
                        DeleteOutcome::Cancelled => Handled::DeleteCancelled { id },
                        DeleteOutcome::Deleted => Handled::Deleted { id },
                        DeleteOutcome::DeleteFailed => Handled::DeleteFailed { id },
                    }),
                    None => Ok(Handled::Ignored),
                }
            }
            PageEvent::Submit { form } => {
                let Some(edit_form) = &self.edit_form else {
                    return Ok(Handled::Ignored);
                };
                if form != EDIT_FORM_NAME {
                    return Ok(Handled::Ignored);
                }
                let outcome = edit_form.submit(&mut self.page, &self.http).await?;
                Ok(match outcome {
                    SubmitOutcome::Redirected(url) => Handled::Submitted { url },
                    SubmitOutcome::NoRedirect => Handled::SubmittedFellBack {
                        url: edit_form.action().to_string(),
                        network_failed: false,
                    },
                    SubmitOutcome::NetworkFailed => Handled::SubmittedFellBack {
                        url: edit_form.action().to_string(),
                        network_failed: true,
                    },
                })
            }
            PageEvent::Key { target, key } => {
                let Some(search) = &self.search else {
                    return Ok(Handled::Ignored);
                };
                match search.handle_key(&mut self.page, &target, key)? {
                    Some(path) => Ok(Handled::Searched { path }),
                    None => Ok(Handled::Ignored),
                }
            }
        }
    }
}
