// File: crates/cartesian-samples/src/controls.rs
// Summary: Binds one handler per document control; handlers receive the page context explicitly.

use std::collections::HashMap;
use std::fmt;

use anyhow::Context;
use tracing::debug;

use crate::document::{Document, Node, NodeId};

/// An interaction delivered to a control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlEvent {
    Click,
    /// New slider value; delivered to the handler after clamping and snapping.
    Input(f64),
    Toggle(bool),
}

impl fmt::Display for ControlEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlEvent::Click => f.write_str("click"),
            ControlEvent::Input(v) => write!(f, "input({v})"),
            ControlEvent::Toggle(b) => write!(f, "toggle({b})"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ControlError {
    #[error("no control bound at {0}")]
    UnknownControl(NodeId),
    #[error("{0} is not an interactive control")]
    NotInteractive(NodeId),
    #[error("{control} does not accept {event}")]
    UnexpectedEvent { control: NodeId, event: ControlEvent },
}

pub type Handler<C> = Box<dyn Fn(&ControlEvent, &mut C) -> anyhow::Result<()>>;

pub struct ControlPanel<C> {
    handlers: HashMap<NodeId, Handler<C>>,
}

impl<C> Default for ControlPanel<C> {
    fn default() -> Self {
        Self { handlers: HashMap::new() }
    }
}

impl<C> ControlPanel<C> {
    pub fn new() -> Self { Self::default() }

    /// Append `node` to the document and bind `handler` to it.
    pub fn add(
        &mut self,
        doc: &mut Document,
        node: Node,
        handler: impl Fn(&ControlEvent, &mut C) -> anyhow::Result<()> + 'static,
    ) -> NodeId {
        let id = doc.append(node);
        self.handlers.insert(id, Box::new(handler));
        id
    }

    /// Update the control's state from `event`, then run its handler against `ctx`.
    /// Nothing in the document changes when the control cannot be fired.
    pub fn fire(&self, doc: &mut Document, id: NodeId, event: ControlEvent, ctx: &mut C) -> anyhow::Result<()> {
        let node = doc.node_mut(id).ok_or(ControlError::UnknownControl(id))?;
        match (&*node, event) {
            (Node::Button { .. }, ControlEvent::Click)
            | (Node::Slider(_), ControlEvent::Input(_))
            | (Node::Checkbox { .. }, ControlEvent::Toggle(_)) => {}
            (Node::Break | Node::ChartSurface { .. }, _) => return Err(ControlError::NotInteractive(id).into()),
            (_, event) => return Err(ControlError::UnexpectedEvent { control: id, event }.into()),
        }
        let handler = self.handlers.get(&id).ok_or(ControlError::UnknownControl(id))?;
        let event = match (node, event) {
            (Node::Slider(slider), ControlEvent::Input(v)) => {
                slider.value = slider.snap(v);
                ControlEvent::Input(slider.value)
            }
            (Node::Checkbox { checked, .. }, ControlEvent::Toggle(on)) => {
                *checked = on;
                ControlEvent::Toggle(on)
            }
            (_, event) => event,
        };
        debug!(control = %id, %event, "fire control");
        handler(&event, ctx).with_context(|| format!("handler of {id} failed on {event}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Slider;

    #[test]
    fn slider_value_is_snapped_before_handler_runs() {
        let mut doc = Document::new();
        let mut panel = ControlPanel::<f64>::new();
        let id = panel.add(&mut doc, Node::Slider(Slider::new(0.0, 10.0, 0.5, 2.0)), |e, width| {
            if let ControlEvent::Input(v) = e {
                *width = *v;
            }
            Ok(())
        });
        let mut width = 0.0;
        panel.fire(&mut doc, id, ControlEvent::Input(42.0), &mut width).unwrap();
        assert_eq!(width, 10.0);
        assert_eq!(doc.slider(id).map(|s| s.value), Some(10.0));
    }

    #[test]
    fn unbound_and_passive_nodes_are_rejected() {
        let mut doc = Document::new();
        let panel = ControlPanel::<()>::new();
        let brk = doc.append(Node::Break);
        let button = doc.append(Node::button("Orphan"));

        let err = panel.fire(&mut doc, brk, ControlEvent::Click, &mut ()).unwrap_err();
        assert_eq!(err.downcast_ref::<ControlError>(), Some(&ControlError::NotInteractive(brk)));
        let err = panel.fire(&mut doc, button, ControlEvent::Click, &mut ()).unwrap_err();
        assert_eq!(err.downcast_ref::<ControlError>(), Some(&ControlError::UnknownControl(button)));
    }

    #[test]
    fn failed_fire_leaves_controls_untouched() {
        let mut doc = Document::new();
        let panel = ControlPanel::<()>::new();
        let slider = doc.append(Node::Slider(Slider::new(0.0, 10.0, 0.5, 2.0)));
        let checkbox = doc.append(Node::checkbox("nice", true));

        assert!(panel.fire(&mut doc, slider, ControlEvent::Input(7.0), &mut ()).is_err());
        assert!(panel.fire(&mut doc, checkbox, ControlEvent::Toggle(false), &mut ()).is_err());
        assert_eq!(doc.slider(slider).map(|s| s.value), Some(2.0));
        assert_eq!(doc.checked(checkbox), Some(true));
    }

    #[test]
    fn mismatched_event_is_rejected() {
        let mut doc = Document::new();
        let mut panel = ControlPanel::<()>::new();
        let id = panel.add(&mut doc, Node::button("Go"), |_, _| Ok(()));
        let err = panel.fire(&mut doc, id, ControlEvent::Toggle(true), &mut ()).unwrap_err();
        assert!(matches!(err.downcast_ref::<ControlError>(), Some(ControlError::UnexpectedEvent { .. })));
    }
}
