//! Search-submit flow.
//!
//! Enter in the search field navigates to that user's search results page.
//! Every other key passes through untouched. A handled Enter also tells the
//! host binding to suppress the key's default behavior (an implicit form
//! submission, typically), which is why handling is reported back at all.

use url::Url;

use crate::error::{LinkstashError, Result};
use crate::events::Key;
use crate::page::Page;

/// Id of the search field in the server-rendered templates.
pub const SEARCH_FIELD_ID: &str = "search_text";

/// Base used only to borrow the `url` crate's path-segment encoder; the
/// produced path is relative.
const ENCODER_BASE: &str = "http://localhost";

/// Controller for the scoped search field, bound to one page.
#[derive(Debug, Clone)]
pub struct SearchSubmit {
    user: String,
}

impl SearchSubmit {
    /// Bind to the page, if it carries the search field.
    ///
    /// An absent field is a valid page and yields `None`. A present field
    /// without its `data-user` scope is a templating bug.
    pub fn bind(page: &impl Page) -> Result<Option<Self>> {
        if !page.has_element(SEARCH_FIELD_ID) {
            return Ok(None);
        }
        let user = page.attr(SEARCH_FIELD_ID, "data-user").ok_or_else(|| {
            LinkstashError::MissingAttribute(
                SEARCH_FIELD_ID.to_string(),
                "data-user".to_string(),
            )
        })?;
        Ok(Some(SearchSubmit { user }))
    }

    /// The user scope whose results are being browsed.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Build `/u/<user>/search/<text>` with both values percent-encoded as
    /// path segments.
    pub fn search_path(&self, text: &str) -> Result<String> {
        let mut url = Url::parse(ENCODER_BASE)
            .map_err(|e| LinkstashError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| LinkstashError::InvalidUrl(ENCODER_BASE.to_string()))?
            .push("u")
            .push(&self.user)
            .push("search")
            .push(text);
        Ok(url.path().to_string())
    }

    /// Route a key press to the flow. Returns the path navigated to when
    /// the key was Enter in the search field, `None` otherwise.
    pub fn handle_key(
        &self,
        page: &mut impl Page,
        target: &str,
        key: Key,
    ) -> Result<Option<String>> {
        if target != SEARCH_FIELD_ID || key != Key::Enter {
            return Ok(None);
        }
        let text = page.value(SEARCH_FIELD_ID).unwrap_or_default();
        let path = self.search_path(&text)?;
        page.navigate(&path);
        Ok(Some(path))
    }
}
