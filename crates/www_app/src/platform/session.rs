//! Scripted page sessions replayed through the page host.
//!
//! A script describes the page (viewport, widgets, optional consumer form)
//! and a list of user events. Replaying it loads the page, applies every
//! event, drains deferred work after each one and reports the final
//! document state.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use page_core::selectors::{AUTH_PANELS, NAVBAR, NAVBAR_COLLAPSED_CLASS, RESTRICTION_GROUP};
use page_core::{AuthType, RestrictionKind, Viewport};
use serde::{Deserialize, Serialize};
use stage_logging::stage_info;

use super::document::{Document, MemoryDocument};
use super::host::PageHost;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PersistedViewport {
    width: i32,
    height: i32,
    /// Zero means "same as the inner reading".
    #[serde(default)]
    screen_width: i32,
    #[serde(default)]
    screen_height: i32,
}

impl From<PersistedViewport> for Viewport {
    fn from(v: PersistedViewport) -> Self {
        let or_inner = |screen: i32, inner: i32| if screen == 0 { inner } else { screen };
        Viewport::new(v.width, v.height).with_screen(
            or_inner(v.screen_width, v.width),
            or_inner(v.screen_height, v.height),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedRestriction {
    kind: String,
    enabled: bool,
    #[serde(default)]
    failed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedForm {
    checked: Option<String>,
    #[serde(default)]
    restrictions: Vec<PersistedRestriction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
enum PersistedEvent {
    Resize(PersistedViewport),
    ClickAuth(String),
    ToggleRestriction { kind: String, enabled: bool },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedScript {
    viewport: PersistedViewport,
    #[serde(default)]
    search_widgets: usize,
    #[serde(default)]
    relative_times: usize,
    #[serde(default)]
    form: Option<PersistedForm>,
    #[serde(default)]
    events: Vec<PersistedEvent>,
}

/// Final document state after a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub navbar_collapsed: bool,
    pub selected_auth: Option<String>,
    pub content_min_height: Option<String>,
    pub visible_auth_panels: Vec<String>,
    pub restriction_classes: Vec<(String, Vec<String>)>,
    pub ticks: u64,
}

impl SessionOutcome {
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("navbar collapsed: {}\n", self.navbar_collapsed));
        out.push_str(&format!(
            "selected auth type: {}\n",
            self.selected_auth.as_deref().unwrap_or("none")
        ));
        out.push_str(&format!(
            "content min-height: {}\n",
            self.content_min_height.as_deref().unwrap_or("unset")
        ));
        out.push_str(&format!(
            "visible auth panels: [{}]\n",
            self.visible_auth_panels.join(", ")
        ));
        for (id, classes) in &self.restriction_classes {
            out.push_str(&format!("{id}: {}\n", classes.join(" ")));
        }
        out.push_str(&format!("deferred ticks: {}\n", self.ticks));
        out
    }
}

pub fn replay_file(path: &Path) -> Result<SessionOutcome> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read page script {}", path.display()))?;
    replay(&content).with_context(|| format!("failed to replay page script {}", path.display()))
}

pub fn replay(script: &str) -> Result<SessionOutcome> {
    let script: PersistedScript = ron::from_str(script)?;
    let document = build_document(&script)?;

    let mut host = PageHost::new(document);
    host.start();
    host.load();
    let mut ticks = host.run_until_idle();

    for event in script.events {
        match event {
            PersistedEvent::Resize(viewport) => {
                host.document_mut().set_viewport(viewport.into());
                host.resize();
            }
            PersistedEvent::ClickAuth(value) => host.click_auth_toggle(&value),
            PersistedEvent::ToggleRestriction { kind, enabled } => {
                let kind: RestrictionKind = kind.parse()?;
                host.change_restriction(kind, enabled);
            }
        }
        ticks += host.run_until_idle();
    }

    let mut outcome = outcome(host.document(), ticks);
    outcome.selected_auth = host.view().selected_auth.map(|auth| auth.to_string());
    stage_info!(
        "Replayed page session: {} deferred tick(s), {} visible auth panel(s)",
        outcome.ticks,
        outcome.visible_auth_panels.len()
    );
    Ok(outcome)
}

fn build_document(script: &PersistedScript) -> Result<MemoryDocument> {
    let viewport = script.viewport.into();
    let document = match &script.form {
        Some(form) => {
            let checked = form
                .checked
                .as_deref()
                .map(str::parse::<AuthType>)
                .transpose()?;
            let restrictions = form
                .restrictions
                .iter()
                .map(|r| Ok((r.kind.parse::<RestrictionKind>()?, r.enabled, r.failed)))
                .collect::<Result<Vec<_>>>()?;
            MemoryDocument::consumer_form(viewport, checked, &restrictions)
        }
        None => MemoryDocument::admin_page(viewport),
    };
    Ok(document
        .with_search_widgets(script.search_widgets)
        .with_relative_times(script.relative_times))
}

fn outcome(document: &MemoryDocument, ticks: u64) -> SessionOutcome {
    SessionOutcome {
        navbar_collapsed: document.has_class(NAVBAR, NAVBAR_COLLAPSED_CLASS),
        selected_auth: None,
        content_min_height: document.content_min_height().map(ToOwned::to_owned),
        visible_auth_panels: document
            .visible_ids(AUTH_PANELS)
            .into_iter()
            .map(ToOwned::to_owned)
            .collect(),
        restriction_classes: document
            .elements()
            .iter()
            .filter(|e| e.selectors.contains(RESTRICTION_GROUP))
            .map(|e| (e.id.clone(), e.classes.iter().cloned().collect()))
            .collect(),
        ticks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SCRIPT: &str = r#"(
        viewport: (width: 1024, height: 800),
        search_widgets: 2,
        relative_times: 1,
        form: Some((
            checked: Some("api_key"),
            restrictions: [
                (kind: "throttle", enabled: true),
                (kind: "origin_ip", enabled: true, failed: true),
            ],
        )),
        events: [
            Resize((width: 320, height: 400)),
            ClickAuth("tls_cert"),
            ToggleRestriction(kind: "throttle", enabled: false),
        ],
    )"#;

    #[test]
    fn replay_reports_final_document_state() {
        let outcome = replay(SCRIPT).unwrap();

        assert_eq!(
            outcome,
            SessionOutcome {
                navbar_collapsed: true,
                selected_auth: Some("tls_cert".to_string()),
                content_min_height: Some("299px".to_string()),
                visible_auth_panels: vec!["auth-tls_cert".to_string()],
                restriction_classes: vec![
                    ("restriction-throttle".to_string(), vec!["panel-default".to_string()]),
                    ("restriction-origin_ip".to_string(), vec!["panel-danger".to_string()]),
                ],
                ticks: 1,
            }
        );
    }

    #[test]
    fn demo_script_replays() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/consumer_form.ron");
        let outcome = replay_file(&path).unwrap();

        assert!(outcome.navbar_collapsed);
        assert_eq!(outcome.content_min_height.as_deref(), Some("566px"));
        assert_eq!(outcome.visible_auth_panels, vec!["auth-tls_cert".to_string()]);
        assert_eq!(
            outcome.restriction_classes,
            vec![
                ("restriction-throttle".to_string(), vec!["panel-default".to_string()]),
                ("restriction-origin_ip".to_string(), vec!["panel-danger".to_string()]),
                ("restriction-date".to_string(), vec!["panel-success".to_string()]),
            ]
        );
    }

    #[test]
    fn page_without_form_only_lays_out() {
        let outcome = replay("(viewport: (width: 0, height: 0, screen_width: 1366, screen_height: 768))").unwrap();

        assert!(!outcome.navbar_collapsed);
        assert_eq!(outcome.content_min_height.as_deref(), Some("717px"));
        assert!(outcome.visible_auth_panels.is_empty());
        assert_eq!(outcome.ticks, 0);
    }

    #[test]
    fn unknown_restriction_kind_is_rejected() {
        let script = r#"(viewport: (width: 800, height: 600), form: Some((checked: None, restrictions: [(kind: "geo", enabled: true)])))"#;
        assert!(replay(script).is_err());
    }
}
