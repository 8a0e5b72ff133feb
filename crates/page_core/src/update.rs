use stage_logging::{stage_debug, stage_warn};

use crate::{classify, compute_layout, AuthType, Effect, Msg, PageState, Task};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started { form_present } => {
            // Widget initialization runs exactly once per page load.
            if state.started() {
                return (state, Vec::new());
            }
            state.start(form_present);
            let mut effects = vec![Effect::InitSearchWidgets, Effect::InitRelativeTimes];
            if form_present {
                effects.push(Effect::ReadSelectedAuthType);
            }
            effects
        }
        Msg::Loaded(viewport) | Msg::Resized(viewport) => {
            let layout = compute_layout(viewport);
            stage_debug!(
                "layout width={} height={} collapsed={} offset={} min_height={:?}",
                viewport.width(),
                viewport.height(),
                layout.navbar_collapsed,
                layout.top_offset,
                layout.content_min_height
            );
            state.apply_layout(layout);
            let mut effects = vec![Effect::SetNavbarCollapsed(layout.navbar_collapsed)];
            if let Some(height) = layout.content_min_height {
                effects.push(Effect::SetContentMinHeight(height));
            }
            effects
        }
        Msg::AuthToggleClicked => {
            if state.form_present() {
                // The toggle's checked state is committed after click handlers run.
                vec![Effect::Defer(Task::ReadSelectedAuthType)]
            } else {
                Vec::new()
            }
        }
        Msg::AuthTypeRead(value) => {
            if !state.form_present() {
                return (state, Vec::new());
            }
            let selected = match value.as_deref().map(str::parse::<AuthType>) {
                Some(Ok(auth)) => Some(auth),
                Some(Err(err)) => {
                    stage_warn!("{err}; hiding all authentication panels");
                    None
                }
                None => {
                    stage_warn!("no authentication type is checked; hiding all panels");
                    None
                }
            };
            state.select_auth(selected);
            let mut effects = vec![Effect::HideAuthPanels];
            if let Some(auth) = selected {
                effects.push(Effect::ShowAuthPanel(auth));
            }
            effects
        }
        Msg::RestrictionToggled {
            kind,
            checked,
            failed,
        } => {
            if !state.form_present() {
                return (state, Vec::new());
            }
            let class = classify(checked, failed);
            state.set_restriction(kind, class);
            vec![Effect::SetRestrictionClass { kind, class }]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
