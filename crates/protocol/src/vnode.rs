use serde::{Deserialize, Serialize};

/// A structured view fragment.
///
/// The core emits a `ViewNode` tree for each rendered region (modal body,
/// form message). Renderers materialize the tree node by node — text is
/// always character data, never parsed as markup, so catalog content can
/// contain arbitrary strings without an injection path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewNode {
    Element {
        tag: String,
        classes: Vec<String>,
        attrs: Vec<(String, String)>,
        children: Vec<ViewNode>,
    },
    Text(String),
}

/// Start an element node. Classes, attributes, and children are added
/// through the builder methods.
pub fn el(tag: impl Into<String>) -> ViewNode {
    ViewNode::Element {
        tag: tag.into(),
        classes: Vec::new(),
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

/// A text node.
pub fn text(content: impl Into<String>) -> ViewNode {
    ViewNode::Text(content.into())
}

impl ViewNode {
    pub fn class(mut self, name: impl Into<String>) -> Self {
        if let ViewNode::Element { classes, .. } = &mut self {
            classes.push(name.into());
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let ViewNode::Element { attrs, .. } = &mut self {
            attrs.push((name.into(), value.into()));
        }
        self
    }

    pub fn child(mut self, node: ViewNode) -> Self {
        if let ViewNode::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = ViewNode>) -> Self {
        if let ViewNode::Element { children, .. } = &mut self {
            children.extend(nodes);
        }
        self
    }

    /// Concatenated text content of this subtree, in document order.
    pub fn text_content(&self) -> String {
        match self {
            ViewNode::Text(t) => t.clone(),
            ViewNode::Element { children, .. } => {
                children.iter().map(ViewNode::text_content).collect()
            }
        }
    }

    /// Depth-first search for the first element carrying `class_name`.
    pub fn find_by_class(&self, class_name: &str) -> Option<&ViewNode> {
        match self {
            ViewNode::Text(_) => None,
            ViewNode::Element { classes, children, .. } => {
                if classes.iter().any(|c| c == class_name) {
                    return Some(self);
                }
                children.iter().find_map(|c| c.find_by_class(class_name))
            }
        }
    }

    /// All elements in this subtree carrying `class_name`, document order.
    pub fn find_all_by_class<'a>(&'a self, class_name: &str, out: &mut Vec<&'a ViewNode>) {
        if let ViewNode::Element { classes, children, .. } = self {
            if classes.iter().any(|c| c == class_name) {
                out.push(self);
            }
            for c in children {
                c.find_all_by_class(class_name, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_assembles_tree() {
        let node = el("div")
            .class("wrap")
            .child(el("span").class("tag").child(text("Figma")))
            .child(el("span").class("tag").child(text("Prototyping")));

        let mut tags = Vec::new();
        node.find_all_by_class("tag", &mut tags);
        assert_eq!(tags.len(), 2);
        assert_eq!(node.text_content(), "FigmaPrototyping");
    }

    #[test]
    fn text_is_opaque_character_data() {
        let node = el("p").child(text("<script>alert(1)</script>"));
        // The markup-looking payload stays a plain text node.
        match &node {
            ViewNode::Element { children, .. } => {
                assert!(matches!(&children[0], ViewNode::Text(t) if t.contains("<script>")));
            }
            ViewNode::Text(_) => unreachable!(),
        }
    }

    #[test]
    fn find_by_class_hits_nested_element() {
        let node = el("div").child(el("div").class("inner").attr("id", "x"));
        let found = node.find_by_class("inner");
        assert!(matches!(
            found,
            Some(ViewNode::Element { attrs, .. }) if attrs.iter().any(|(k, v)| k == "id" && v == "x")
        ));
    }

    #[test]
    fn serializes_round_trip() {
        let node = el("ul").child(el("li").child(text("item")));
        let json = serde_json::to_string(&node).unwrap();
        let back: ViewNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
