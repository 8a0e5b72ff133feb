//! DOM selectors and class names the page controller reads and writes.

use crate::{AuthType, RestrictionKind};

pub const NAVBAR: &str = "div.navbar-collapse";
pub const NAVBAR_COLLAPSED_CLASS: &str = "collapse";
pub const PAGE_WRAPPER: &str = "#page-wrapper";
pub const MIN_HEIGHT_PROPERTY: &str = "min-height";

pub const SEARCH_WIDGETS: &str = ".select2";
pub const RELATIVE_TIMES: &str = "time.rel";

pub const CONSUMER_FORM: &str = "#consumer-form";
pub const AUTH_TOGGLE_INPUTS: &str = "#auth-type-toggle input";
pub const AUTH_TOGGLE_CHECKED: &str = "#auth-type-toggle input:checked";
pub const AUTH_TOGGLE_LABELS: &str = "#auth-type-toggle label";
pub const AUTH_PANELS: &str = "#authentications > div";

pub const RESTRICTION_GROUP: &str = ".restriction";
pub const RESTRICTION_CHECKBOX: &str = ".restriction .panel-heading input";
pub const FAILED_MARKER_CLASS: &str = "failed";

pub fn auth_panel(auth: AuthType) -> String {
    format!("#{}", auth.panel_id())
}

/// Container of one restriction group.
pub fn restriction_group(kind: RestrictionKind) -> String {
    format!("#restriction-{kind}")
}

/// Enabling checkbox in the heading of one restriction group.
pub fn restriction_checkbox(kind: RestrictionKind) -> String {
    format!("#restriction-{kind}-enabled")
}
