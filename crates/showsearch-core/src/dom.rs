//! In-memory page model for the widget
//!
//! Mirrors the handful of page elements the widget touches: the search
//! form and its query input, the shows container, and the episode panel
//! (a visibility wrapper plus a list container). Handles are cheap to
//! clone and share one underlying element, like DOM references.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShowSearchError};

/// Attribute carrying a card's show identifier
pub const SHOW_ID_ATTR: &str = "data-show-id";

/// Attribute marking an element's role within a card
pub const ROLE_ATTR: &str = "data-role";

/// Role value of the "Episodes" affordance
pub const EPISODES_ROLE: &str = "episodes";

#[derive(Debug, Default)]
struct ElementState {
    children: Vec<String>,
    hidden: bool,
}

/// Handle to a container element
///
/// Children are stored as markup fragments in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Element {
    state: Arc<Mutex<ElementState>>,
}

impl Element {
    /// Create a visible, empty element
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hidden, empty element
    pub fn hidden() -> Self {
        let element = Self::new();
        element.hide();
        element
    }

    fn lock(&self) -> MutexGuard<'_, ElementState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Remove all children
    #[cfg(test)]
    pub(crate) fn empty(&self) {
        self.lock().children.clear();
    }

    /// Append one child fragment
    #[cfg(test)]
    pub(crate) fn append(&self, html: impl Into<String>) {
        self.lock().children.push(html.into());
    }

    /// Clear the element and append `children` in one step
    ///
    /// Concurrent readers see either the old or the new children, never
    /// a partially filled element.
    pub fn replace_children(&self, children: Vec<String>) {
        self.lock().children = children;
    }

    /// Make the element visible
    pub fn show(&self) {
        self.lock().hidden = false;
    }

    /// Hide the element
    pub fn hide(&self) {
        self.lock().hidden = true;
    }

    /// Whether the element is currently visible
    pub fn is_visible(&self) -> bool {
        !self.lock().hidden
    }

    /// Number of child fragments
    pub fn child_count(&self) -> usize {
        self.lock().children.len()
    }

    /// Concatenated markup of all children
    pub fn inner_html(&self) -> String {
        self.lock().children.concat()
    }
}

/// Handle to a text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: Arc<Mutex<String>>,
}

impl TextInput {
    /// Current value of the input
    pub fn value(&self) -> String {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the input's value, as typing would
    pub fn set_value(&self, value: impl Into<String>) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = value.into();
    }
}

/// The search form
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    /// The query text input
    pub query_input: TextInput,
}

/// A form submission event
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    /// Create a new, unhandled submission event
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the form's default navigation
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether default navigation was suppressed
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Explicit references to the page elements used by one widget session
#[derive(Debug, Clone)]
pub struct PageHandles {
    /// Search form with the query input
    pub search_form: SearchForm,
    /// Container receiving show cards
    pub shows_list: Element,
    /// Episode panel wrapper whose visibility is toggled
    pub episodes_area: Element,
    /// Container receiving episode entries
    pub episodes_list: Element,
}

impl PageHandles {
    /// Fresh page: empty containers and a hidden episode panel
    pub fn new() -> Self {
        Self {
            search_form: SearchForm::default(),
            shows_list: Element::new(),
            episodes_area: Element::hidden(),
            episodes_list: Element::new(),
        }
    }

    /// Capture the current state of the page
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            shows_list_html: self.shows_list.inner_html(),
            episodes_list_html: self.episodes_list.inner_html(),
            episodes_visible: self.episodes_area.is_visible(),
        }
    }
}

impl Default for PageHandles {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable view of the page, for a front end to apply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    /// Markup of the shows container
    pub shows_list_html: String,
    /// Markup of the episodes container
    pub episodes_list_html: String,
    /// Whether the episode panel is visible
    pub episodes_visible: bool,
}

/// The element a click landed on, within the shows container
///
/// `selector` is matched against the container's markup and `index`
/// picks among the matches in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickTarget {
    /// CSS selector of the clicked element
    pub selector: String,
    /// Position among the elements matching `selector`
    #[serde(default)]
    pub index: usize,
}

impl ClickTarget {
    /// First element matching `selector`
    pub fn new(selector: impl Into<String>) -> Self {
        Self::nth(selector, 0)
    }

    /// The `index`-th element matching `selector`
    pub fn nth(selector: impl Into<String>, index: usize) -> Self {
        Self {
            selector: selector.into(),
            index,
        }
    }
}

/// The element itself followed by its element ancestors, innermost first
fn self_and_ancestors(element: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    std::iter::once(element).chain(element.ancestors().filter_map(ElementRef::wrap))
}

/// Resolve a click inside the shows container to a show identifier
///
/// Walks up from the target to the nearest Episodes affordance, then to
/// the nearest element carrying [`SHOW_ID_ATTR`].
///
/// # Returns
/// `Ok(None)` if the selector matches nothing or the target is not inside
/// an Episodes affordance
///
/// # Errors
/// - `InvalidSelector` if the selector does not parse
/// - `InvalidId` if the affordance has no enclosing card or the card's
///   identifier is not a number
pub fn resolve_show_id(container_html: &str, target: &ClickTarget) -> Result<Option<u64>> {
    let selector = Selector::parse(&target.selector).map_err(|e| {
        ShowSearchError::InvalidSelector(format!("{}: {:?}", target.selector, e))
    })?;

    let fragment = Html::parse_fragment(container_html);
    let Some(clicked) = fragment.select(&selector).nth(target.index) else {
        return Ok(None);
    };

    let Some(affordance) =
        self_and_ancestors(clicked).find(|el| el.value().attr(ROLE_ATTR) == Some(EPISODES_ROLE))
    else {
        return Ok(None);
    };

    let raw_id = self_and_ancestors(affordance)
        .find_map(|el| el.value().attr(SHOW_ID_ATTR))
        .ok_or_else(|| ShowSearchError::InvalidId("no enclosing show card".to_string()))?;

    raw_id
        .trim()
        .parse::<u64>()
        .map(Some)
        .map_err(|_| ShowSearchError::InvalidId(raw_id.to_string()))
}
