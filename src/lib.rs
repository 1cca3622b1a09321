pub mod controller;
pub mod delete;
pub mod error;
pub mod events;
pub mod form;
pub mod http;
pub mod page;
pub mod search;
pub mod tags;

pub use controller::{Handled, InteractionController};
pub use delete::{DeleteConfirm, DeleteOutcome, RowState};
pub use error::{LinkstashError, Result};
pub use events::{Key, PageEvent};
pub use form::{EditForm, EditLinkForm, SubmitOutcome, SubmitResponse};
pub use http::{ClientOptions, HttpClient, ReqwestHttpClient};
pub use page::{ElementSpec, Page, memory::MemoryPage};
pub use search::SearchSubmit;
pub use tags::TagEditor;
