use std::sync::Once;

use page_core::{update, AuthType, Effect, Msg, PageState, Task};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(stage_logging::initialize_for_tests);
}

fn started(form_present: bool) -> (PageState, Vec<Effect>) {
    update(PageState::new(), Msg::Started { form_present })
}

#[test]
fn start_initializes_widgets_and_syncs_form() {
    init_logging();
    let (state, effects) = started(true);

    assert_eq!(
        effects,
        vec![
            Effect::InitSearchWidgets,
            Effect::InitRelativeTimes,
            Effect::ReadSelectedAuthType,
        ]
    );
    assert!(state.view().form_present);
}

#[test]
fn start_without_form_only_initializes_widgets() {
    init_logging();
    let (_state, effects) = started(false);

    assert_eq!(
        effects,
        vec![Effect::InitSearchWidgets, Effect::InitRelativeTimes]
    );
}

#[test]
fn second_start_is_ignored() {
    init_logging();
    let (state, _) = started(true);
    let (_state, effects) = update(state, Msg::Started { form_present: true });

    assert!(effects.is_empty());
}

#[test]
fn read_value_shows_exactly_one_panel() {
    init_logging();
    for auth in AuthType::ALL {
        let (state, _) = started(true);
        let (state, effects) = update(state, Msg::AuthTypeRead(Some(auth.to_string())));

        assert_eq!(
            effects,
            vec![Effect::HideAuthPanels, Effect::ShowAuthPanel(auth)]
        );
        assert_eq!(state.view().visible_auth_panel, Some(auth.panel_id()));
    }
}

#[test]
fn click_defers_the_read() {
    init_logging();
    let (state, _) = started(true);
    let (state, _) = update(state, Msg::AuthTypeRead(Some("api_key".into())));
    let (state, effects) = update(state, Msg::AuthToggleClicked);

    assert_eq!(effects, vec![Effect::Defer(Task::ReadSelectedAuthType)]);
    // Nothing changes until the deferred read reports the new value.
    assert_eq!(state.view().selected_auth, Some(AuthType::ApiKey));

    let (state, _) = update(state, Msg::AuthTypeRead(Some("tls_cert".into())));
    assert_eq!(state.view().visible_auth_panel, Some("auth-tls_cert".to_string()));
}

#[test]
fn unknown_value_hides_every_panel() {
    init_logging();
    let (state, _) = started(true);
    let (state, effects) = update(state, Msg::AuthTypeRead(Some("kerberos".into())));

    assert_eq!(effects, vec![Effect::HideAuthPanels]);
    assert_eq!(state.view().visible_auth_panel, None);

    let (_state, effects) = update(state, Msg::AuthTypeRead(None));
    assert_eq!(effects, vec![Effect::HideAuthPanels]);
}

#[test]
fn form_events_are_ignored_without_form() {
    init_logging();
    let (state, _) = started(false);
    let (state, effects) = update(state, Msg::AuthToggleClicked);
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::AuthTypeRead(Some("api_key".into())));
    assert!(effects.is_empty());
    assert_eq!(state.view().selected_auth, None);
}
