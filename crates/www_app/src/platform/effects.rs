use std::collections::VecDeque;

use page_core::selectors::{
    self, AUTH_PANELS, AUTH_TOGGLE_CHECKED, MIN_HEIGHT_PROPERTY, NAVBAR, NAVBAR_COLLAPSED_CLASS,
    PAGE_WRAPPER, RELATIVE_TIMES, SEARCH_WIDGETS,
};
use page_core::{Effect, Msg, RestrictionClass, Task};
use stage_logging::{loop_tick, stage_debug, stage_trace};

use super::document::{Document, Plugin};

/// Applies one effect to the document. Reads that feed the controller come
/// back as a follow-up message; deferred tasks are pushed onto `next_tick`.
pub fn apply(
    document: &mut dyn Document,
    next_tick: &mut VecDeque<Task>,
    effect: Effect,
) -> Option<Msg> {
    match effect {
        Effect::SetNavbarCollapsed(collapsed) => {
            document.set_class(NAVBAR, NAVBAR_COLLAPSED_CLASS, collapsed);
            None
        }
        Effect::SetContentMinHeight(height) => {
            document.set_style(PAGE_WRAPPER, MIN_HEIGHT_PROPERTY, &format!("{height}px"));
            None
        }
        Effect::InitSearchWidgets => {
            let count = document.initialize_plugin(SEARCH_WIDGETS, Plugin::SearchSelect);
            stage_debug!("tick={} initialized {} search widget(s)", loop_tick(), count);
            None
        }
        Effect::InitRelativeTimes => {
            let count = document.initialize_plugin(RELATIVE_TIMES, Plugin::TimeAgo);
            stage_debug!("tick={} initialized {} relative time(s)", loop_tick(), count);
            None
        }
        Effect::ReadSelectedAuthType => Some(run_task(document, Task::ReadSelectedAuthType)),
        Effect::Defer(task) => {
            stage_trace!("tick={} deferred {:?}", loop_tick(), task);
            next_tick.push_back(task);
            None
        }
        Effect::HideAuthPanels => {
            document.set_visible(AUTH_PANELS, false);
            None
        }
        Effect::ShowAuthPanel(auth) => {
            document.set_visible(&selectors::auth_panel(auth), true);
            None
        }
        Effect::SetRestrictionClass { kind, class } => {
            document.replace_classes(
                &selectors::restriction_group(kind),
                &RestrictionClass::all_css_classes(),
                class.css_class(),
            );
            None
        }
    }
}

pub fn run_task(document: &dyn Document, task: Task) -> Msg {
    match task {
        Task::ReadSelectedAuthType => {
            let value = document.value_of(AUTH_TOGGLE_CHECKED);
            stage_trace!("tick={} checked auth type {:?}", loop_tick(), value);
            Msg::AuthTypeRead(value)
        }
    }
}
