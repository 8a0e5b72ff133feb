use crate::{AuthType, RestrictionClass, RestrictionKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetNavbarCollapsed(bool),
    SetContentMinHeight(u32),
    InitSearchWidgets,
    InitRelativeTimes,
    /// Read the checked auth toggle now and feed back `Msg::AuthTypeRead`.
    ReadSelectedAuthType,
    /// Run the task on the next turn of the event loop.
    Defer(Task),
    HideAuthPanels,
    ShowAuthPanel(AuthType),
    /// Clear every restriction class on the group, then add `class`.
    SetRestrictionClass {
        kind: RestrictionKind,
        class: RestrictionClass,
    },
}

/// Single-shot work scheduled for the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    ReadSelectedAuthType,
}
