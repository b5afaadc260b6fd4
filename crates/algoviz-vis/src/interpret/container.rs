//! Stack, queue and linked list view.

use algoviz_steps::ContainerStep;
use algoviz_structures::{Container, ContainerKind};
use serde::Serialize;

use super::{value_at, Interpreter, IDLE_MESSAGE};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerView {
    pub kind: ContainerKind,
    pub items: Vec<i64>,
    pub capacity: usize,
    /// Slot under the cursor for this step only
    pub focus: Option<usize>,
    /// Value the last pop, dequeue or removal returned
    pub last_removed: Option<i64>,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ContainerInterpreter {
    kind: ContainerKind,
    items: Vec<i64>,
    capacity: usize,
}

impl ContainerInterpreter {
    /// Snapshot `container` as the starting point for replay.
    pub fn snapshot(container: &impl Container) -> Self {
        Self {
            kind: container.kind(),
            items: container.items().to_vec(),
            capacity: container.capacity(),
        }
    }
}

impl Interpreter for ContainerInterpreter {
    type Step = ContainerStep;
    type View = ContainerView;

    fn initial(&self) -> ContainerView {
        ContainerView {
            kind: self.kind,
            items: self.items.clone(),
            capacity: self.capacity,
            focus: None,
            last_removed: None,
            message: IDLE_MESSAGE.to_string(),
        }
    }

    fn apply(&self, mut view: ContainerView, step: &ContainerStep) -> ContainerView {
        view.focus = None;

        view.message = match *step {
            ContainerStep::Focus { index } => {
                view.focus = Some(index);
                let value = value_at(&view.items, index);
                match self.kind {
                    ContainerKind::Stack => format!("Top is {value}"),
                    ContainerKind::Queue => format!("Front is {value}"),
                    ContainerKind::LinkedList => format!("At node {index} ({value})"),
                }
            }
            ContainerStep::Insert { value, .. } => {
                step.apply_to(&mut view.items);
                view.last_removed = None;
                match self.kind {
                    ContainerKind::Stack => format!("Pushed {value}"),
                    ContainerKind::Queue => format!("Enqueued {value}"),
                    ContainerKind::LinkedList => format!("Appended {value}"),
                }
            }
            ContainerStep::Remove { value, .. } => {
                step.apply_to(&mut view.items);
                view.last_removed = Some(value);
                match self.kind {
                    ContainerKind::Stack => format!("Popped {value}"),
                    ContainerKind::Queue => format!("Dequeued {value}"),
                    ContainerKind::LinkedList => format!("Removed {value}"),
                }
            }
        };
        view
    }
}
