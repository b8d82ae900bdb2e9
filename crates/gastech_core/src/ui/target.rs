//! Render target capability and the in-process page model.
//!
//! # Responsibility
//! - Abstract "set content / query children / attach listener" away from any
//!   concrete document so renderers stay testable.
//! - Hold every target of one page by element id.
//!
//! # Invariants
//! - Replacing content drops listeners attached to the previous content.
//! - Listener keys are unique per target; re-attaching replaces the action.

use crate::store::ConceptFilter;
use regex::Regex;
use std::collections::BTreeMap;

/// User interaction a listener triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    SelectTab(String),
    SelectFilter(ConceptFilter),
    ShowConcept(String),
    CloseDetails,
}

/// A mount point renderers write markup into.
pub trait RenderTarget {
    fn id(&self) -> &str;

    /// Replaces the content; previously attached listeners are dropped.
    fn set_content(&mut self, markup: String);

    fn content(&self) -> &str;

    /// Values of `attribute` on elements in the current content, in order.
    fn query_children(&self, attribute: &str) -> Vec<String>;

    fn attach_listener(&mut self, key: &str, action: UiAction);

    fn listener(&self, key: &str) -> Option<&UiAction>;

    fn set_visible(&mut self, visible: bool);

    fn is_visible(&self) -> bool;
}

/// In-memory render target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryTarget {
    id: String,
    content: String,
    listeners: BTreeMap<String, UiAction>,
    visible: bool,
}

impl MemoryTarget {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: String::new(),
            listeners: BTreeMap::new(),
            visible: true,
        }
    }

    /// Creates a target that starts hidden (e.g. an inactive tab panel).
    pub fn hidden(id: impl Into<String>) -> Self {
        let mut target = Self::new(id);
        target.visible = false;
        target
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl RenderTarget for MemoryTarget {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_content(&mut self, markup: String) {
        self.content = markup;
        self.listeners.clear();
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn query_children(&self, attribute: &str) -> Vec<String> {
        let pattern = format!(r#"\s{}="([^"]*)""#, regex::escape(attribute));
        let Ok(re) = Regex::new(&pattern) else {
            return Vec::new();
        };
        re.captures_iter(&self.content)
            .map(|caps| caps[1].to_string())
            .collect()
    }

    fn attach_listener(&mut self, key: &str, action: UiAction) {
        self.listeners.insert(key.to_string(), action);
    }

    fn listener(&self, key: &str) -> Option<&UiAction> {
        self.listeners.get(key)
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

/// All render targets of one page, keyed by element id.
#[derive(Default)]
pub struct Page {
    targets: BTreeMap<String, Box<dyn RenderTarget>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with one visible `MemoryTarget` per id.
    pub fn with_targets<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut page = Self::new();
        for id in ids {
            page.insert(MemoryTarget::new(id));
        }
        page
    }

    pub fn insert(&mut self, target: impl RenderTarget + 'static) {
        self.targets
            .insert(target.id().to_string(), Box::new(target));
    }

    pub fn remove(&mut self, id: &str) -> Option<Box<dyn RenderTarget>> {
        self.targets.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.targets.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&dyn RenderTarget> {
        self.targets.get(id).map(|target| target.as_ref())
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut dyn RenderTarget> {
        match self.targets.get_mut(id) {
            Some(target) => Some(target.as_mut()),
            None => None,
        }
    }

    /// Content of `id`, or an empty string when the target is absent.
    pub fn content_of(&self, id: &str) -> &str {
        self.get(id).map(|target| target.content()).unwrap_or("")
    }

    /// Returns whether any target's content contains an element with `element_id`.
    pub fn contains_element(&self, element_id: &str) -> bool {
        let needle = format!(r#"id="{element_id}""#);
        self.targets
            .values()
            .any(|target| target.content().contains(&needle))
    }
}
