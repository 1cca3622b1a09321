//! Input events delivered to the interaction controller.
//!
//! The host binding translates platform input into these events and feeds
//! them to [`crate::InteractionController::handle`]. Handlers run to
//! completion on the UI thread; only network awaits suspend. No ordering is
//! imposed beyond the order the host delivers events in.

/// A key activation inside a form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    /// Any key the controllers never react to (arrows, modifiers, ...).
    Other,
}

/// One user input event, addressed by element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// Click on the element with the given id.
    Click { target: String },
    /// Submission of the form with the given `name` attribute.
    Submit { form: String },
    /// Key press while the element with the given id has focus.
    Key { target: String, key: Key },
}

impl PageEvent {
    pub fn click(target: impl Into<String>) -> Self {
        PageEvent::Click {
            target: target.into(),
        }
    }

    pub fn submit(form: impl Into<String>) -> Self {
        PageEvent::Submit { form: form.into() }
    }

    pub fn key(target: impl Into<String>, key: Key) -> Self {
        PageEvent::Key {
            target: target.into(),
            key,
        }
    }
}
