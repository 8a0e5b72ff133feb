use crate::{RestrictionKind, Viewport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Page script started once the document is ready.
    Started { form_present: bool },
    /// Window finished loading.
    Loaded(Viewport),
    /// Window was resized.
    Resized(Viewport),
    /// User clicked one of the auth-type toggle labels.
    AuthToggleClicked,
    /// Value of the currently checked auth-type toggle, read from the document.
    AuthTypeRead(Option<String>),
    /// A restriction group's enabling checkbox changed.
    RestrictionToggled {
        kind: RestrictionKind,
        checked: bool,
        failed: bool,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
