//! Host document abstraction and an in-memory implementation.
//!
//! A paged list never keeps references to elements. Each render looks the
//! container up by id, replaces its content, then binds listeners to the
//! freshly created controls. Replacing a container's content drops every
//! listener bound to elements inside it, the same way a browser discards
//! listeners together with the subtree they were attached to.

use std::sync::OnceLock;

use regex::Regex;

use super::render::escape_html;
use crate::config::PageShellConfig;

/// Navigation control a click listener is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
}

/// A click delivered to a bound control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    selector: String,
    control: Control,
    default_prevented: bool,
}

impl ClickEvent {
    pub fn new(selector: impl Into<String>, control: Control) -> Self {
        Self {
            selector: selector.into(),
            control,
            default_prevented: false,
        }
    }

    /// Suppress the element's default action
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn control(&self) -> Control {
        self.control
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }
}

/// The host environment a paged list renders into
pub trait Document {
    /// Replace the content of the element with `id`.
    /// Returns false when the document has no such element.
    fn replace_content(&mut self, id: &str, markup: &str) -> bool;

    /// Attach a click listener to the first element matching `selector`.
    /// Returns false when nothing matches.
    fn bind_click(&mut self, selector: &str, control: Control) -> bool;

    /// Listener a click on the first element matching `selector` would reach.
    /// Disabled elements never deliver clicks.
    fn listener(&self, selector: &str) -> Option<Control>;
}

#[derive(Debug, Clone)]
struct Container {
    tag: String,
    id: String,
    markup: String,
}

#[derive(Debug, Clone)]
struct Listener {
    container: usize,
    element: usize,
    control: Control,
}

/// Position of a matched element inside the document
#[derive(Debug, Clone, Copy)]
struct ElementRef {
    container: usize,
    element: usize,
    disabled: bool,
}

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"<([a-zA-Z][a-zA-Z0-9-]*)([^>]*)>").expect("static tag pattern")
    })
}

fn class_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"\bclass\s*=\s*"([^"]*)""#).expect("static class pattern"))
}

fn quoted_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#""[^"]*""#).expect("static quote pattern"))
}

fn disabled_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:^|\s)disabled(?:[\s=/]|$)").expect("static disabled pattern")
    })
}

fn has_class(attrs: &str, class: &str) -> bool {
    class_pattern()
        .captures(attrs)
        .and_then(|caps| caps.get(1))
        .is_some_and(|value| value.as_str().split_whitespace().any(|c| c == class))
}

fn is_disabled(attrs: &str) -> bool {
    // Ignore attribute values so class="disabled" does not count
    let bare = quoted_pattern().replace_all(attrs, "\"\"");
    disabled_pattern().is_match(&bare)
}

/// In-memory document holding a flat list of containers.
///
/// Only class selectors (`.name`) are understood.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    containers: Vec<Container>,
    listeners: Vec<Listener>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MemoryDocument::add_container`]
    pub fn with_container(mut self, tag: &str, id: &str) -> Self {
        self.add_container(tag, id);
        self
    }

    /// Add an empty `<tag id="id">` element. Returns false if the id is taken.
    pub fn add_container(&mut self, tag: &str, id: &str) -> bool {
        if self.has_container(id) {
            return false;
        }
        self.containers.push(Container {
            tag: tag.to_string(),
            id: id.to_string(),
            markup: String::new(),
        });
        true
    }

    /// Remove a container and every listener bound inside it
    pub fn remove_container(&mut self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.containers.remove(index);
        self.listeners.retain(|l| l.container != index);
        for listener in &mut self.listeners {
            if listener.container > index {
                listener.container -= 1;
            }
        }
        true
    }

    pub fn has_container(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Current content of a container
    pub fn content(&self, id: &str) -> Option<&str> {
        self.position(id).map(|i| self.containers[i].markup.as_str())
    }

    /// Number of live listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Serialize the document as a standalone HTML page
    pub fn to_html(&self, shell: &PageShellConfig) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n");
        html.push_str(&format!("<html lang=\"{}\">\n", escape_html(&shell.lang)));
        html.push_str("<head>\n");
        html.push_str("  <meta charset=\"utf-8\"/>\n");
        html.push_str(&format!("  <title>{}</title>\n", escape_html(&shell.title)));
        if let Some(href) = &shell.stylesheet {
            html.push_str(&format!(
                "  <link rel=\"stylesheet\" href=\"{}\"/>\n",
                escape_html(href)
            ));
        }
        html.push_str("</head>\n<body>\n");
        for container in &self.containers {
            html.push_str(&format!(
                "<{tag} id=\"{id}\">\n{markup}</{tag}>\n",
                tag = container.tag,
                id = escape_html(&container.id),
                markup = container.markup,
            ));
        }
        html.push_str("</body>\n</html>\n");
        html
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.containers.iter().position(|c| c.id == id)
    }

    /// First element in document order matching `selector`
    fn find(&self, selector: &str) -> Option<ElementRef> {
        let Some(class) = selector.strip_prefix('.') else {
            tracing::debug!(selector, "Unsupported selector");
            return None;
        };

        for (ci, container) in self.containers.iter().enumerate() {
            for (ei, caps) in tag_pattern().captures_iter(&container.markup).enumerate() {
                let attrs = caps.get(2).map(|m| m.as_str()).unwrap_or("");
                if has_class(attrs, class) {
                    return Some(ElementRef {
                        container: ci,
                        element: ei,
                        disabled: is_disabled(attrs),
                    });
                }
            }
        }
        None
    }
}

impl Document for MemoryDocument {
    fn replace_content(&mut self, id: &str, markup: &str) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.containers[index].markup = markup.to_string();
        // Old elements are gone, and their listeners with them
        self.listeners.retain(|l| l.container != index);
        true
    }

    fn bind_click(&mut self, selector: &str, control: Control) -> bool {
        match self.find(selector) {
            Some(element) => {
                self.listeners.push(Listener {
                    container: element.container,
                    element: element.element,
                    control,
                });
                true
            }
            None => false,
        }
    }

    fn listener(&self, selector: &str) -> Option<Control> {
        let element = self.find(selector)?;
        if element.disabled {
            return None;
        }
        self.listeners
            .iter()
            .find(|l| l.container == element.container && l.element == element.element)
            .map(|l| l.control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> MemoryDocument {
        MemoryDocument::new()
            .with_container("ul", "list")
            .with_container("div", "pager")
    }

    #[test]
    fn test_replace_missing_container() {
        let mut doc = document();
        assert!(!doc.replace_content("nope", "<p>x</p>"));
        assert!(doc.replace_content("list", "<li>x</li>"));
        assert_eq!(doc.content("list"), Some("<li>x</li>"));
    }

    #[test]
    fn test_add_container_rejects_duplicates() {
        let mut doc = document();
        assert!(!doc.add_container("div", "list"));
        assert!(doc.add_container("div", "other"));
    }

    #[test]
    fn test_bind_and_dispatch() {
        let mut doc = document();
        doc.replace_content("pager", "<button class=\"next-button go\">n</button>");

        assert!(doc.bind_click(".go", Control::Next));
        assert_eq!(doc.listener(".go"), Some(Control::Next));
        assert!(!doc.bind_click(".missing", Control::Previous));
        assert_eq!(doc.listener(".missing"), None);
    }

    #[test]
    fn test_replace_drops_listeners() {
        let mut doc = document();
        doc.replace_content("pager", "<button class=\"go\">n</button>");
        doc.bind_click(".go", Control::Next);
        assert_eq!(doc.listener_count(), 1);

        doc.replace_content("pager", "<button class=\"go\">n</button>");
        assert_eq!(doc.listener_count(), 0);
        assert_eq!(doc.listener(".go"), None);
    }

    #[test]
    fn test_replace_keeps_other_container_listeners() {
        let mut doc = document();
        doc.replace_content("pager", "<button class=\"go\">n</button>");
        doc.bind_click(".go", Control::Next);

        doc.replace_content("list", "<li>a</li>");
        assert_eq!(doc.listener(".go"), Some(Control::Next));
    }

    #[test]
    fn test_disabled_button_delivers_nothing() {
        let mut doc = document();
        doc.replace_content("pager", "<button class=\"go\" disabled>n</button>");
        assert!(doc.bind_click(".go", Control::Next));
        assert_eq!(doc.listener(".go"), None);
    }

    #[test]
    fn test_disabled_class_is_not_disabled_attribute() {
        let mut doc = document();
        doc.replace_content("pager", "<button class=\"go disabled\">n</button>");
        doc.bind_click(".go", Control::Next);
        assert_eq!(doc.listener(".go"), Some(Control::Next));
    }

    #[test]
    fn test_class_match_is_token_based() {
        let mut doc = document();
        doc.replace_content("pager", "<button class=\"go-on\">n</button>");
        assert!(!doc.bind_click(".go", Control::Next));
    }

    #[test]
    fn test_remove_container() {
        let mut doc = document();
        doc.replace_content("pager", "<button class=\"go\">n</button>");
        doc.bind_click(".go", Control::Next);

        assert!(doc.remove_container("list"));
        assert!(!doc.has_container("list"));
        // Listener in the shifted container survives
        assert_eq!(doc.listener(".go"), Some(Control::Next));

        assert!(doc.remove_container("pager"));
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn test_click_event() {
        let mut event = ClickEvent::new(".go", Control::Previous);
        assert!(!event.default_prevented());
        event.prevent_default();
        assert!(event.default_prevented());
        assert_eq!(event.control(), Control::Previous);
        assert_eq!(event.selector(), ".go");
    }

    #[test]
    fn test_to_html() {
        let mut doc = document();
        doc.replace_content("list", "<li>a</li>\n");
        let shell = PageShellConfig {
            stylesheet: Some("style.css".to_string()),
            ..Default::default()
        };

        let html = doc.to_html(&shell);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"ja\">"));
        assert!(html.contains("<title>Magazines</title>"));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"style.css\"/>"));
        assert!(html.contains("<ul id=\"list\">\n<li>a</li>\n</ul>"));
        assert!(html.contains("<div id=\"pager\">\n</div>"));
    }
}
