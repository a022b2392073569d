//! Typed template for the inline form result message.

use folio_protocol::{ViewNode, vnode::el, vnode::text};

use crate::form::FormMessage;

pub const MESSAGE_CLASS: &str = "form-message";

pub fn render(message: &FormMessage) -> ViewNode {
    el("div")
        .class(MESSAGE_CLASS)
        .class(message.kind.css_modifier())
        .attr("role", "status")
        .child(text(message.text.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FormMessage, SubmitOutcome};
    use folio_protocol::MessageKind;

    #[test]
    fn success_and_error_share_base_class() {
        for outcome in [SubmitOutcome::Delivered, SubmitOutcome::Failed] {
            let node = render(&FormMessage::for_outcome(outcome));
            assert!(node.find_by_class(MESSAGE_CLASS).is_some());
        }
    }

    #[test]
    fn kind_picks_the_modifier() {
        let node = render(&FormMessage::for_outcome(SubmitOutcome::Failed));
        assert!(node.find_by_class(MessageKind::Error.css_modifier()).is_some());
        assert!(node.find_by_class(MessageKind::Success.css_modifier()).is_none());
    }
}
