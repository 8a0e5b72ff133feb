//! Page core: pure page-behavior state machine and layout rules.
mod auth;
mod effect;
mod layout;
mod msg;
mod restriction;
pub mod selectors;
mod state;
mod update;
mod view_model;

pub use auth::{AuthType, UnknownAuthType};
pub use effect::{Effect, Task};
pub use layout::{
    compute_layout, Layout, Viewport, BORDER_ALLOWANCE, EXPANDED_TOP_OFFSET, NARROW_BREAKPOINT,
    STACKED_TOP_OFFSET,
};
pub use msg::Msg;
pub use restriction::{classify, RestrictionClass, RestrictionKind, UnknownRestrictionKind};
pub use state::PageState;
pub use update::update;
pub use view_model::PageView;
