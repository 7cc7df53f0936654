use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Semantic tag an editable region renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tag {
    #[serde(rename = "h1")]
    H1,
    #[serde(rename = "h2")]
    H2,
    #[serde(rename = "h3")]
    H3,
    #[serde(rename = "p")]
    Paragraph,
    #[serde(rename = "label")]
    Label,
    #[serde(rename = "button")]
    Button,
    #[serde(rename = "span")]
    Span,
}

impl Tag {
    /// DOM tag name.
    pub fn name(&self) -> &'static str {
        match self {
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::Paragraph => "p",
            Tag::Label => "label",
            Tag::Button => "button",
            Tag::Span => "span",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One node in a template's renderable tree.
///
/// `Element` nodes are static chrome; `Region` nodes are the editable
/// leaves, each addressed by a dot-separated path that is unique within
/// its template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    Element {
        tag: String,
        #[serde(skip_serializing_if = "String::is_empty", default)]
        class: String,
        #[serde(skip_serializing_if = "HashMap::is_empty", default)]
        attrs: HashMap<String, String>,
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        children: Vec<Node>,
    },
    Region {
        path: String,
        tag: Tag,
        #[serde(skip_serializing_if = "String::is_empty", default)]
        class: String,
        text: String,
        /// Style properties a shift-click may edit. Empty = text-only region.
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        style_props: Vec<String>,
    },
}

impl Node {
    pub fn element(tag: impl Into<String>) -> Self {
        Node::Element {
            tag: tag.into(),
            class: String::new(),
            attrs: HashMap::new(),
            children: Vec::new(),
        }
    }

    pub fn region(path: impl Into<String>, tag: Tag, text: impl Into<String>) -> Self {
        Node::Region {
            path: path.into(),
            tag,
            class: String::new(),
            text: text.into(),
            style_props: Vec::new(),
        }
    }

    pub fn with_class(mut self, value: impl Into<String>) -> Self {
        match &mut self {
            Node::Element { class, .. } | Node::Region { class, .. } => *class = value.into(),
        }
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Node::Element { attrs, .. } = &mut self {
            attrs.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, nodes: Vec<Node>) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.extend(nodes);
        }
        self
    }

    pub fn with_style_props(mut self, props: &[&str]) -> Self {
        if let Node::Region { style_props, .. } = &mut self {
            *style_props = props.iter().map(|p| p.to_string()).collect();
        }
        self
    }

    /// Region path, if this node is a region.
    pub fn path(&self) -> Option<&str> {
        match self {
            Node::Region { path, .. } => Some(path),
            Node::Element { .. } => None,
        }
    }

    /// Depth-first visit of every region in the tree.
    pub fn visit_regions<'a>(&'a self, visit: &mut dyn FnMut(&'a Node)) {
        match self {
            Node::Region { .. } => visit(self),
            Node::Element { children, .. } => {
                for child in children {
                    child.visit_regions(visit);
                }
            }
        }
    }

    /// Number of editable regions under (and including) this node.
    pub fn region_count(&self) -> usize {
        let mut count = 0;
        self.visit_regions(&mut |_| count += 1);
        count
    }
}
