//! Minimal view of a markup tree.
//!
//! The week-grid layout is addressed entirely through class markers,
//! colspan attributes, and node order, so the parser only needs a handful
//! of tree operations. They are collected in [`DomNode`] and implemented
//! for `scraper` elements here; the parsing modules are generic over the
//! trait and unit-test against a synthetic node instead of markup.

use scraper::ElementRef;

/// The tree operations the week-grid parser needs from a node.
pub(crate) trait DomNode: Clone {
    /// Tag name of this node.
    fn tag(&self) -> &str;

    /// Whether the node carries the given class.
    fn has_class(&self, class: &str) -> bool;

    /// Attribute value by name.
    fn attr(&self, name: &str) -> Option<&str>;

    /// Collected text of this node and its descendants.
    fn text(&self) -> String;

    /// Collected text segmented at line-break elements.
    ///
    /// `"09:00 - 10:30<br>Algorithms"` yields two segments. A node with
    /// no line break yields a single segment holding all of its text.
    fn lines(&self) -> Vec<String>;

    /// Element children in document order.
    fn children(&self) -> Vec<Self>;

    /// Preceding element siblings, nearest first.
    fn preceding_siblings(&self) -> Vec<Self>;
}

/// Every descendant of `node` carrying `class`, in document order.
pub(crate) fn select_class<N: DomNode>(node: &N, class: &str) -> Vec<N> {
    let mut found = Vec::new();
    collect_class(node, class, &mut found);
    found
}

fn collect_class<N: DomNode>(node: &N, class: &str, found: &mut Vec<N>) {
    for child in node.children() {
        if child.has_class(class) {
            found.push(child.clone());
        }
        collect_class(&child, class, found);
    }
}

/// The first descendant of `node` with the given tag, in document order.
pub(crate) fn first_tag<N: DomNode>(node: &N, tag: &str) -> Option<N> {
    for child in node.children() {
        if child.tag() == tag {
            return Some(child);
        }
        if let Some(found) = first_tag(&child, tag) {
            return Some(found);
        }
    }
    None
}

/// Adapter implementing [`DomNode`] for a parsed `scraper` element.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HtmlNode<'a>(pub ElementRef<'a>);

impl DomNode for HtmlNode<'_> {
    fn tag(&self) -> &str {
        self.0.value().name()
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.value().classes().any(|c| c == class)
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.0.value().attr(name)
    }

    fn text(&self) -> String {
        self.0.text().collect()
    }

    fn lines(&self) -> Vec<String> {
        let mut segments = Vec::new();
        let mut current = String::new();
        collect_segments(self.0, &mut segments, &mut current);
        segments.push(current);
        segments
    }

    fn children(&self) -> Vec<Self> {
        self.0
            .children()
            .filter_map(ElementRef::wrap)
            .map(HtmlNode)
            .collect()
    }

    fn preceding_siblings(&self) -> Vec<Self> {
        self.0
            .prev_siblings()
            .filter_map(ElementRef::wrap)
            .map(HtmlNode)
            .collect()
    }
}

fn collect_segments(element: ElementRef, segments: &mut Vec<String>, current: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            current.push_str(text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if child_element.value().name() == "br" {
                segments.push(std::mem::take(current));
            } else {
                collect_segments(child_element, segments, current);
            }
        }
    }
}
