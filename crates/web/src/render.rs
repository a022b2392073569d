//! Materialize [`ViewNode`] trees into real DOM nodes.
//!
//! Nodes are built with `createElement` / `createTextNode`; no markup
//! string ever reaches the parser, so catalog strings render as plain
//! character data.

use folio_protocol::ViewNode;
use web_sys::{Document, Node};

use crate::dom::{MountError, js};

pub fn materialize(doc: &Document, node: &ViewNode) -> Result<Node, MountError> {
    match node {
        ViewNode::Text(content) => Ok(doc.create_text_node(content).into()),
        ViewNode::Element {
            tag,
            classes,
            attrs,
            children,
        } => {
            let el = doc.create_element(tag).map_err(js)?;
            if !classes.is_empty() {
                el.set_class_name(&classes.join(" "));
            }
            for (name, value) in attrs {
                el.set_attribute(name, value).map_err(js)?;
            }
            for child in children {
                el.append_child(&materialize(doc, child)?).map_err(js)?;
            }
            Ok(el.into())
        }
    }
}
