//! Bounded stack, queue and singly linked list.
//!
//! Operations validate first and mutate second: a refused operation returns
//! an error and the contents stay exactly as they were.

use algoviz_steps::ContainerStep;

use crate::error::{ContainerKind, Result, StructureError};

pub const STACK_CAPACITY: usize = 7;
pub const QUEUE_CAPACITY: usize = 7;
pub const LIST_CAPACITY: usize = 6;

pub const STACK_SEED: [i64; 2] = [10, 20];
pub const QUEUE_SEED: [i64; 2] = [10, 20];
pub const LIST_SEED: [i64; 3] = [15, 99, 37];

/// Read access shared by the linear containers.
pub trait Container {
    fn kind(&self) -> ContainerKind;

    /// Contents front to back. For a stack the back is the top.
    fn items(&self) -> &[i64];

    fn capacity(&self) -> usize;

    fn len(&self) -> usize {
        self.items().len()
    }

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Bounded {
    kind: ContainerKind,
    items: Vec<i64>,
    capacity: usize,
}

impl Bounded {
    fn new(kind: ContainerKind, capacity: usize, seed: &[i64]) -> Self {
        let mut items = seed.to_vec();
        items.truncate(capacity);
        Self {
            kind,
            items,
            capacity,
        }
    }

    fn ensure_room(&self) -> Result<()> {
        if self.items.len() >= self.capacity {
            return Err(StructureError::Full {
                kind: self.kind,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    fn ensure_nonempty(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(StructureError::Empty { kind: self.kind });
        }
        Ok(())
    }

    fn commit(&mut self, steps: &[ContainerStep]) {
        for step in steps {
            step.apply_to(&mut self.items);
        }
        tracing::debug!(kind = %self.kind, len = self.items.len(), steps = steps.len(), "container updated");
    }
}

macro_rules! impl_container {
    ($ty:ty) => {
        impl Container for $ty {
            fn kind(&self) -> ContainerKind {
                self.inner.kind
            }

            fn items(&self) -> &[i64] {
                &self.inner.items
            }

            fn capacity(&self) -> usize {
                self.inner.capacity
            }
        }
    };
}

/// LIFO stack; the last item is the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    inner: Bounded,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new(STACK_CAPACITY, &STACK_SEED)
    }
}

impl Stack {
    pub fn new(capacity: usize, seed: &[i64]) -> Self {
        Self {
            inner: Bounded::new(ContainerKind::Stack, capacity, seed),
        }
    }

    pub fn push(&mut self, value: i64) -> Result<Vec<ContainerStep>> {
        self.inner.ensure_room()?;
        let steps = vec![ContainerStep::Insert {
            index: self.inner.items.len(),
            value,
        }];
        self.inner.commit(&steps);
        Ok(steps)
    }

    /// Focus the top, then remove it.
    pub fn pop(&mut self) -> Result<Vec<ContainerStep>> {
        self.inner.ensure_nonempty()?;
        let top = self.inner.items.len() - 1;
        let steps = vec![
            ContainerStep::Focus { index: top },
            ContainerStep::Remove {
                index: top,
                value: self.inner.items[top],
            },
        ];
        self.inner.commit(&steps);
        Ok(steps)
    }

    pub fn peek(&self) -> Option<i64> {
        self.inner.items.last().copied()
    }
}

impl_container!(Stack);

/// FIFO queue; items enter at the back and leave from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue {
    inner: Bounded,
}

impl Default for Queue {
    fn default() -> Self {
        Self::new(QUEUE_CAPACITY, &QUEUE_SEED)
    }
}

impl Queue {
    pub fn new(capacity: usize, seed: &[i64]) -> Self {
        Self {
            inner: Bounded::new(ContainerKind::Queue, capacity, seed),
        }
    }

    pub fn enqueue(&mut self, value: i64) -> Result<Vec<ContainerStep>> {
        self.inner.ensure_room()?;
        let steps = vec![ContainerStep::Insert {
            index: self.inner.items.len(),
            value,
        }];
        self.inner.commit(&steps);
        Ok(steps)
    }

    /// Focus the front, then remove it.
    pub fn dequeue(&mut self) -> Result<Vec<ContainerStep>> {
        self.inner.ensure_nonempty()?;
        let steps = vec![
            ContainerStep::Focus { index: 0 },
            ContainerStep::Remove {
                index: 0,
                value: self.inner.items[0],
            },
        ];
        self.inner.commit(&steps);
        Ok(steps)
    }

    pub fn front(&self) -> Option<i64> {
        self.inner.items.first().copied()
    }
}

impl_container!(Queue);

/// Singly linked list. Appends and removals walk from the head, so every
/// operation first focuses each node in turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedList {
    inner: Bounded,
}

impl Default for LinkedList {
    fn default() -> Self {
        Self::new(LIST_CAPACITY, &LIST_SEED)
    }
}

impl LinkedList {
    pub fn new(capacity: usize, seed: &[i64]) -> Self {
        Self {
            inner: Bounded::new(ContainerKind::LinkedList, capacity, seed),
        }
    }

    fn walk(&self) -> Vec<ContainerStep> {
        (0..self.inner.items.len())
            .map(|index| ContainerStep::Focus { index })
            .collect()
    }

    pub fn append(&mut self, value: i64) -> Result<Vec<ContainerStep>> {
        self.inner.ensure_room()?;
        let mut steps = self.walk();
        steps.push(ContainerStep::Insert {
            index: self.inner.items.len(),
            value,
        });
        self.inner.commit(&steps);
        Ok(steps)
    }

    pub fn remove_last(&mut self) -> Result<Vec<ContainerStep>> {
        self.inner.ensure_nonempty()?;
        let last = self.inner.items.len() - 1;
        let mut steps = self.walk();
        steps.push(ContainerStep::Remove {
            index: last,
            value: self.inner.items[last],
        });
        self.inner.commit(&steps);
        Ok(steps)
    }
}

impl_container!(LinkedList);
