use std::collections::VecDeque;

use page_core::selectors::{self, AUTH_TOGGLE_INPUTS, CONSUMER_FORM, FAILED_MARKER_CLASS};
use page_core::{update, Msg, PageState, PageView, RestrictionKind, Task};
use stage_logging::{set_loop_tick, stage_debug};

use super::document::Document;
use super::effects;

/// Single-threaded page event loop.
///
/// Messages dispatched in the current turn are handled to completion;
/// deferred tasks wait in `next_tick` until `run_until_idle` drains them.
pub struct PageHost<D: Document> {
    document: D,
    state: PageState,
    next_tick: VecDeque<Task>,
    tick: u64,
}

impl<D: Document> PageHost<D> {
    pub fn new(document: D) -> Self {
        Self {
            document,
            state: PageState::new(),
            next_tick: VecDeque::new(),
            tick: 0,
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn view(&self) -> PageView {
        self.state.view()
    }

    #[cfg(test)]
    pub fn pending_tasks(&self) -> usize {
        self.next_tick.len()
    }

    /// Document ready: binds the page script once.
    pub fn start(&mut self) {
        let form_present = self.document.has_element(CONSUMER_FORM);
        self.dispatch(Msg::Started { form_present });
    }

    pub fn load(&mut self) {
        let viewport = self.document.viewport();
        self.dispatch(Msg::Loaded(viewport));
    }

    pub fn resize(&mut self) {
        let viewport = self.document.viewport();
        self.dispatch(Msg::Resized(viewport));
    }

    /// Click on the toggle label for `value`. Handlers run first; the
    /// browser commits the checked state afterwards.
    pub fn click_auth_toggle(&mut self, value: &str) {
        self.dispatch(Msg::AuthToggleClicked);
        self.document.check_radio(AUTH_TOGGLE_INPUTS, value);
    }

    /// User flips the enabling checkbox of a restriction group.
    pub fn change_restriction(&mut self, kind: RestrictionKind, checked: bool) {
        let checkbox = selectors::restriction_checkbox(kind);
        if self.document.set_checked(&checkbox, checked) == 0 {
            return;
        }
        let failed = self.document.has_class(&checkbox, FAILED_MARKER_CLASS);
        self.dispatch(Msg::RestrictionToggled {
            kind,
            checked: self.document.is_checked(&checkbox),
            failed,
        });
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            for effect in effects {
                if let Some(follow_up) =
                    effects::apply(&mut self.document, &mut self.next_tick, effect)
                {
                    inbox.push_back(follow_up);
                }
            }
        }
        if self.state.consume_dirty() {
            stage_debug!("tick={} page state changed", self.tick);
        }
    }

    /// Runs deferred tasks, one per tick, until none remain. Returns the
    /// number of ticks taken.
    pub fn run_until_idle(&mut self) -> u64 {
        let started_at = self.tick;
        while let Some(task) = self.next_tick.pop_front() {
            self.tick += 1;
            set_loop_tick(self.tick);
            let msg = effects::run_task(&self.document, task);
            self.dispatch(msg);
        }
        self.tick - started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::document::{MemoryDocument, Plugin};
    use page_core::selectors::{AUTH_PANELS, NAVBAR, RESTRICTION_GROUP};
    use page_core::{AuthType, RestrictionClass, Viewport};
    use pretty_assertions::assert_eq;

    fn form_page(checked: AuthType) -> PageHost<MemoryDocument> {
        let doc = MemoryDocument::consumer_form(
            Viewport::new(1280, 900),
            Some(checked),
            &[
                (RestrictionKind::Throttle, false, false),
                (RestrictionKind::TlsCert, true, true),
            ],
        )
        .with_search_widgets(2)
        .with_relative_times(3);
        let mut host = PageHost::new(doc);
        host.start();
        host.load();
        host
    }

    fn restriction_classes(host: &PageHost<MemoryDocument>, kind: RestrictionKind) -> Vec<String> {
        let id = selectors::restriction_group(kind);
        host.document()
            .element(id.trim_start_matches('#'))
            .map(|e| e.classes.iter().cloned().collect())
            .unwrap_or_default()
    }

    #[test]
    fn startup_shows_panel_of_default_selection() {
        for auth in AuthType::ALL {
            let host = form_page(auth);
            assert_eq!(host.document().visible_ids(AUTH_PANELS), vec![auth.panel_id().as_str()]);
        }
    }

    #[test]
    fn click_takes_effect_after_the_next_tick() {
        let mut host = form_page(AuthType::ApiKey);

        host.click_auth_toggle("tls_cert");
        assert_eq!(host.pending_tasks(), 1);
        assert_eq!(host.document().visible_ids(AUTH_PANELS), vec!["auth-api_key"]);

        assert_eq!(host.run_until_idle(), 1);
        assert_eq!(host.document().visible_ids(AUTH_PANELS), vec!["auth-tls_cert"]);
        assert_eq!(host.view().selected_auth, Some(AuthType::TlsCert));
    }

    #[test]
    fn every_click_schedules_one_read() {
        let mut host = form_page(AuthType::ApiKey);
        host.click_auth_toggle("tls_cert");
        host.click_auth_toggle("api_key");

        assert_eq!(host.pending_tasks(), 2);
        assert_eq!(host.run_until_idle(), 2);
        assert_eq!(host.document().visible_ids(AUTH_PANELS), vec!["auth-api_key"]);
    }

    #[test]
    fn widgets_initialize_once_per_load() {
        let mut host = form_page(AuthType::ApiKey);
        host.start();

        let doc = host.document();
        for i in 0..2 {
            let widget = doc.element(&format!("select2-{i}")).unwrap();
            assert_eq!(widget.plugins, vec![Plugin::SearchSelect]);
        }
        for i in 0..3 {
            let time = doc.element(&format!("time-{i}")).unwrap();
            assert_eq!(time.plugins, vec![Plugin::TimeAgo]);
        }
    }

    #[test]
    fn restriction_group_carries_exactly_one_state_class() {
        let mut host = form_page(AuthType::ApiKey);

        host.change_restriction(RestrictionKind::Throttle, true);
        assert_eq!(
            restriction_classes(&host, RestrictionKind::Throttle),
            vec![RestrictionClass::Success.css_class()]
        );

        host.change_restriction(RestrictionKind::TlsCert, false);
        assert_eq!(
            restriction_classes(&host, RestrictionKind::TlsCert),
            vec![RestrictionClass::Neutral.css_class()]
        );
        host.change_restriction(RestrictionKind::TlsCert, true);
        assert_eq!(
            restriction_classes(&host, RestrictionKind::TlsCert),
            vec![RestrictionClass::Failed.css_class()]
        );
    }

    #[test]
    fn absent_restriction_group_is_ignored() {
        let mut host = form_page(AuthType::ApiKey);
        host.change_restriction(RestrictionKind::Date, true);

        assert!(host.view().restrictions.is_empty());
        assert_eq!(host.document().visible_ids(RESTRICTION_GROUP).len(), 2);
    }

    #[test]
    fn resize_follows_the_breakpoint() {
        let mut host = form_page(AuthType::ApiKey);
        assert!(!host.document().has_class(NAVBAR, "collapse"));
        assert_eq!(host.document().content_min_height(), Some("849px"));

        host.document_mut().set_viewport(Viewport::new(320, 400));
        host.resize();
        assert!(host.document().has_class(NAVBAR, "collapse"));
        assert_eq!(host.document().content_min_height(), Some("299px"));

        host.document_mut().set_viewport(Viewport::new(320, 150));
        host.resize();
        assert_eq!(host.document().content_min_height(), Some("299px"));
    }

    #[test]
    fn plain_admin_page_ignores_form_events() {
        let mut host = PageHost::new(MemoryDocument::admin_page(Viewport::new(1024, 800)));
        host.start();
        host.load();
        host.click_auth_toggle("tls_cert");
        host.change_restriction(RestrictionKind::File, true);

        assert_eq!(host.pending_tasks(), 0);
        assert!(host.view().selected_auth.is_none());
        assert_eq!(host.document().content_min_height(), Some("749px"));
    }
}
