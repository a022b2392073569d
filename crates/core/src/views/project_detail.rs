//! Typed template for the project dialog body.

use folio_protocol::{ViewNode, vnode::el, vnode::text};

use crate::catalog::{DescriptionBlock, ProjectEntry};

/// Id the dialog's `aria-labelledby` points at.
pub const MODAL_TITLE_ID: &str = "modal-title";

/// Render a catalog entry into the dialog body structure. Every string
/// from the entry lands as a text node, so catalog content cannot smuggle
/// markup into the page.
pub fn render(entry: &ProjectEntry) -> ViewNode {
    el("div")
        .class("modal__project")
        .child(
            el("div").class("modal__project-image").child(
                el("img")
                    .attr("src", entry.image_path.as_str())
                    .attr("alt", entry.title.as_str()),
            ),
        )
        .child(
            el("div")
                .class("modal__project-content")
                .child(
                    el("span")
                        .class("modal__project-category")
                        .child(text(entry.category.label())),
                )
                .child(
                    el("h2")
                        .class("modal__project-title")
                        .attr("id", MODAL_TITLE_ID)
                        .child(text(entry.title.as_str())),
                )
                .child(
                    el("div")
                        .class("modal__project-description")
                        .children(entry.description.iter().map(render_block)),
                )
                .child(
                    el("div").class("modal__project-tags").children(
                        entry
                            .tags
                            .iter()
                            .map(|tag| el("span").class("tag").child(text(tag.as_str()))),
                    ),
                ),
        )
}

fn render_block(block: &DescriptionBlock) -> ViewNode {
    match block {
        DescriptionBlock::Heading(t) => el("h3").child(text(t.as_str())),
        DescriptionBlock::Paragraph(t) => el("p").child(text(t.as_str())),
        DescriptionBlock::List(items) => el("ul").children(
            items.iter().map(|item| el("li").child(text(item.as_str()))),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn renders_title_category_and_tags() {
        let catalog = Catalog::builtin();
        let entry = catalog.get(1).unwrap();
        let body = render(entry);

        let title = body.find_by_class("modal__project-title").unwrap();
        assert_eq!(title.text_content(), "Mobile App Redesign");

        let category = body.find_by_class("modal__project-category").unwrap();
        assert_eq!(category.text_content(), "UX Design");

        let mut tags = Vec::new();
        body.find_all_by_class("tag", &mut tags);
        let tag_texts: Vec<String> = tags.iter().map(|t| t.text_content()).collect();
        assert_eq!(tag_texts, entry.tags);
    }

    #[test]
    fn title_carries_dialog_label_id() {
        let catalog = Catalog::builtin();
        let body = render(catalog.get(6).unwrap());
        let title = body.find_by_class("modal__project-title").unwrap();
        assert!(matches!(
            title,
            ViewNode::Element { attrs, .. }
                if attrs.iter().any(|(k, v)| k == "id" && v == MODAL_TITLE_ID)
        ));
    }

    #[test]
    fn description_blocks_keep_document_order() {
        let catalog = Catalog::builtin();
        let body = render(catalog.get(4).unwrap());
        let desc = body.find_by_class("modal__project-description").unwrap();
        let ViewNode::Element { children, .. } = desc else {
            unreachable!();
        };
        // Heading, paragraph, heading, list — as in the catalog entry.
        assert_eq!(children.len(), 4);
        assert!(matches!(&children[0], ViewNode::Element { tag, .. } if tag == "h3"));
        assert!(matches!(&children[3], ViewNode::Element { tag, .. } if tag == "ul"));
    }

    #[test]
    fn image_uses_entry_path_and_alt() {
        let catalog = Catalog::builtin();
        let entry = catalog.get(5).unwrap();
        let body = render(entry);
        let image_wrap = body.find_by_class("modal__project-image").unwrap();
        let ViewNode::Element { children, .. } = image_wrap else {
            unreachable!();
        };
        assert!(matches!(
            &children[0],
            ViewNode::Element { tag, attrs, .. }
                if tag == "img"
                    && attrs.iter().any(|(k, v)| k == "src" && v == &entry.image_path)
                    && attrs.iter().any(|(k, v)| k == "alt" && v == &entry.title)
        ));
    }
}
