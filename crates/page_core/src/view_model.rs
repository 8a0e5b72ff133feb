use crate::{AuthType, RestrictionClass, RestrictionKind};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageView {
    pub started: bool,
    pub form_present: bool,
    pub selected_auth: Option<AuthType>,
    pub visible_auth_panel: Option<String>,
    pub navbar_collapsed: Option<bool>,
    pub content_min_height: Option<u32>,
    pub restrictions: Vec<(RestrictionKind, RestrictionClass)>,
    pub dirty: bool,
}
