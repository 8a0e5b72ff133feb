//! Document abstraction the page host drives, plus an in-memory model.
//!
//! Every mutating call returns how many elements it touched; zero means the
//! target is absent from this page, which is not an error.

use std::collections::{BTreeMap, BTreeSet};

use page_core::selectors::{
    self, AUTH_PANELS, AUTH_TOGGLE_INPUTS, AUTH_TOGGLE_LABELS, CONSUMER_FORM,
    FAILED_MARKER_CLASS, NAVBAR, PAGE_WRAPPER, RELATIVE_TIMES, RESTRICTION_CHECKBOX,
    RESTRICTION_GROUP, SEARCH_WIDGETS,
};
use page_core::{classify, AuthType, RestrictionKind, Viewport};

/// Third-party widgets initialized through their one-call entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Plugin {
    SearchSelect,
    TimeAgo,
}

pub trait Document {
    fn viewport(&self) -> Viewport;
    fn has_element(&self, selector: &str) -> bool;
    /// Value of the first matching element, honoring a trailing `:checked`.
    fn value_of(&self, selector: &str) -> Option<String>;
    fn is_checked(&self, selector: &str) -> bool;
    fn has_class(&self, selector: &str, class: &str) -> bool;

    fn set_class(&mut self, selector: &str, class: &str, present: bool) -> usize;
    fn replace_classes(&mut self, selector: &str, remove: &[&str], add: &str) -> usize;
    fn set_style(&mut self, selector: &str, property: &str, value: &str) -> usize;
    fn set_visible(&mut self, selector: &str, visible: bool) -> usize;
    fn initialize_plugin(&mut self, selector: &str, plugin: Plugin) -> usize;

    /// User input: check the radio in `group` whose value is `value`.
    fn check_radio(&mut self, group: &str, value: &str) -> usize;
    /// User input: set a checkbox.
    fn set_checked(&mut self, selector: &str, checked: bool) -> usize;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    pub selectors: BTreeSet<String>,
    pub classes: BTreeSet<String>,
    pub style: BTreeMap<String, String>,
    pub visible: bool,
    pub checked: bool,
    pub value: Option<String>,
    pub plugins: Vec<Plugin>,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            selectors: BTreeSet::new(),
            classes: BTreeSet::new(),
            style: BTreeMap::new(),
            visible: true,
            checked: false,
            value: None,
            plugins: Vec::new(),
        }
    }

    pub fn matching(mut self, selector: &str) -> Self {
        self.selectors.insert(selector.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    fn matches(&self, selector: &str) -> bool {
        selector
            .strip_prefix('#')
            .is_some_and(|id| id == self.id)
            || self.selectors.contains(selector)
    }
}

/// Flat element list; an element matches `#id` or any selector it was
/// registered under.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemoryDocument {
    viewport: Viewport,
    elements: Vec<Element>,
}

impl MemoryDocument {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            elements: Vec::new(),
        }
    }

    /// Skeleton shared by every admin page: navbar and content wrapper.
    pub fn admin_page(viewport: Viewport) -> Self {
        Self::new(viewport)
            .with_element(Element::new("side-menu").matching(NAVBAR))
            .with_element(Element::new(PAGE_WRAPPER.trim_start_matches('#')))
    }

    /// Admin page with the consumer form: one toggle and panel per auth
    /// type, and one group per restriction `(kind, enabled, failed)`.
    pub fn consumer_form(
        viewport: Viewport,
        checked: Option<AuthType>,
        restrictions: &[(RestrictionKind, bool, bool)],
    ) -> Self {
        let mut doc = Self::admin_page(viewport)
            .with_element(Element::new(CONSUMER_FORM.trim_start_matches('#')));
        for auth in AuthType::ALL {
            doc.push(
                Element::new(format!("auth-type-{auth}"))
                    .matching(AUTH_TOGGLE_INPUTS)
                    .with_value(auth.identifier())
                    .checked(checked == Some(auth)),
            );
            doc.push(Element::new(format!("auth-type-{auth}-label")).matching(AUTH_TOGGLE_LABELS));
            doc.push(Element::new(auth.panel_id()).matching(AUTH_PANELS));
        }
        for (kind, enabled, failed) in restrictions {
            let group = selectors::restriction_group(*kind);
            let class = classify(*enabled, *failed).css_class();
            doc.push(
                Element::new(group.trim_start_matches('#'))
                    .matching(RESTRICTION_GROUP)
                    .with_class(class),
            );
            let checkbox = selectors::restriction_checkbox(*kind);
            let mut input = Element::new(checkbox.trim_start_matches('#'))
                .matching(RESTRICTION_CHECKBOX)
                .checked(*enabled);
            if *failed {
                input = input.with_class(FAILED_MARKER_CLASS);
            }
            doc.push(input);
        }
        doc
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.push(element);
        self
    }

    /// Adds `count` elements carrying the search widget selector.
    pub fn with_search_widgets(mut self, count: usize) -> Self {
        for i in 0..count {
            self.push(Element::new(format!("select2-{i}")).matching(SEARCH_WIDGETS));
        }
        self
    }

    /// Adds `count` elements carrying the relative timestamp selector.
    pub fn with_relative_times(mut self, count: usize) -> Self {
        for i in 0..count {
            self.push(Element::new(format!("time-{i}")).matching(RELATIVE_TIMES));
        }
        self
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Ids of matching elements that are currently visible.
    pub fn visible_ids(&self, selector: &str) -> Vec<&str> {
        self.query(selector)
            .into_iter()
            .filter(|e| e.visible)
            .map(|e| e.id.as_str())
            .collect()
    }

    pub fn content_min_height(&self) -> Option<&str> {
        self.element(PAGE_WRAPPER.trim_start_matches('#'))
            .and_then(|e| e.style.get(selectors::MIN_HEIGHT_PROPERTY))
            .map(String::as_str)
    }

    fn query(&self, selector: &str) -> Vec<&Element> {
        let (base, only_checked) = split_checked(selector);
        self.elements
            .iter()
            .filter(|e| e.matches(base) && (!only_checked || e.checked))
            .collect()
    }

    fn for_each_match(&mut self, selector: &str, mut apply: impl FnMut(&mut Element)) -> usize {
        let (base, only_checked) = split_checked(selector);
        let mut touched = 0;
        for element in self
            .elements
            .iter_mut()
            .filter(|e| e.matches(base) && (!only_checked || e.checked))
        {
            apply(element);
            touched += 1;
        }
        touched
    }
}

fn split_checked(selector: &str) -> (&str, bool) {
    match selector.strip_suffix(":checked") {
        Some(base) => (base, true),
        None => (selector, false),
    }
}

impl Document for MemoryDocument {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn has_element(&self, selector: &str) -> bool {
        !self.query(selector).is_empty()
    }

    fn value_of(&self, selector: &str) -> Option<String> {
        self.query(selector).first().and_then(|e| e.value.clone())
    }

    fn is_checked(&self, selector: &str) -> bool {
        self.query(selector).first().is_some_and(|e| e.checked)
    }

    fn has_class(&self, selector: &str, class: &str) -> bool {
        self.query(selector)
            .first()
            .is_some_and(|e| e.classes.contains(class))
    }

    fn set_class(&mut self, selector: &str, class: &str, present: bool) -> usize {
        self.for_each_match(selector, |e| {
            if present {
                e.classes.insert(class.to_string());
            } else {
                e.classes.remove(class);
            }
        })
    }

    fn replace_classes(&mut self, selector: &str, remove: &[&str], add: &str) -> usize {
        self.for_each_match(selector, |e| {
            for class in remove {
                e.classes.remove(*class);
            }
            e.classes.insert(add.to_string());
        })
    }

    fn set_style(&mut self, selector: &str, property: &str, value: &str) -> usize {
        self.for_each_match(selector, |e| {
            e.style.insert(property.to_string(), value.to_string());
        })
    }

    fn set_visible(&mut self, selector: &str, visible: bool) -> usize {
        self.for_each_match(selector, |e| e.visible = visible)
    }

    fn initialize_plugin(&mut self, selector: &str, plugin: Plugin) -> usize {
        self.for_each_match(selector, |e| e.plugins.push(plugin))
    }

    fn check_radio(&mut self, group: &str, value: &str) -> usize {
        let touched = self
            .query(group)
            .into_iter()
            .filter(|e| e.value.as_deref() == Some(value))
            .count();
        if touched > 0 {
            self.for_each_match(group, |e| e.checked = e.value.as_deref() == Some(value));
        }
        touched
    }

    fn set_checked(&mut self, selector: &str, checked: bool) -> usize {
        self.for_each_match(selector, |e| e.checked = checked)
    }
}
