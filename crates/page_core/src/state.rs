use std::collections::BTreeMap;

use crate::view_model::PageView;
use crate::{AuthType, Layout, RestrictionClass, RestrictionKind};

/// Controller state for a single page view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    started: bool,
    form_present: bool,
    selected_auth: Option<AuthType>,
    navbar_collapsed: Option<bool>,
    content_min_height: Option<u32>,
    restrictions: BTreeMap<RestrictionKind, RestrictionClass>,
    dirty: bool,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> PageView {
        PageView {
            started: self.started,
            form_present: self.form_present,
            selected_auth: self.selected_auth,
            visible_auth_panel: self.selected_auth.map(AuthType::panel_id),
            navbar_collapsed: self.navbar_collapsed,
            content_min_height: self.content_min_height,
            restrictions: self
                .restrictions
                .iter()
                .map(|(kind, class)| (*kind, *class))
                .collect(),
            dirty: self.dirty,
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn form_present(&self) -> bool {
        self.form_present
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn start(&mut self, form_present: bool) {
        self.started = true;
        self.form_present = form_present;
        self.dirty = true;
    }

    /// A skipped min-height leaves the previously applied one in place.
    pub(crate) fn apply_layout(&mut self, layout: Layout) {
        if self.navbar_collapsed != Some(layout.navbar_collapsed) {
            self.navbar_collapsed = Some(layout.navbar_collapsed);
            self.dirty = true;
        }
        if let Some(height) = layout.content_min_height {
            if self.content_min_height != Some(height) {
                self.content_min_height = Some(height);
                self.dirty = true;
            }
        }
    }

    pub(crate) fn select_auth(&mut self, selected: Option<AuthType>) {
        if self.selected_auth != selected {
            self.selected_auth = selected;
            self.dirty = true;
        }
    }

    pub(crate) fn set_restriction(&mut self, kind: RestrictionKind, class: RestrictionClass) {
        if self.restrictions.insert(kind, class) != Some(class) {
            self.dirty = true;
        }
    }
}
