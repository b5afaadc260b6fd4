//! One selected visualization: its input or structure, its step log and the
//! playback cursor over it.

use algoviz_steps::{
    array_deletion, array_insertion, demo, ContainerStep, Graph, TreeStep, VertexId,
};
use algoviz_structures::{
    Bst, LinkedList, Queue, Stack, LIST_SEED, QUEUE_SEED, STACK_SEED, TREE_DEMO_VALUES,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::catalog::{Affordance, AlgorithmKey, Category};
use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::interpret::{
    ArrayInterpreter, ContainerInterpreter, FrontierKind, GraphInterpreter, SearchInterpreter,
    SortInterpreter, TreeInterpreter, View,
};
use crate::timeline::{Controls, PlaybackState, PlaybackStatus, Speed, Timeline};

/// Everything a presentation layer needs to draw one moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub key: AlgorithmKey,
    pub name: &'static str,
    pub category: Category,
    pub status: PlaybackStatus,
    pub view: View,
}

/// A linear container of any kind.
#[derive(Debug, Clone)]
enum ContainerModel {
    Stack(Stack),
    Queue(Queue),
    List(LinkedList),
}

impl ContainerModel {
    fn snapshot(&self) -> ContainerInterpreter {
        match self {
            ContainerModel::Stack(s) => ContainerInterpreter::snapshot(s),
            ContainerModel::Queue(q) => ContainerInterpreter::snapshot(q),
            ContainerModel::List(l) => ContainerInterpreter::snapshot(l),
        }
    }
}

/// Per-family state. Generated families own just their timeline; structure
/// families also own the structure that operations mutate.
#[derive(Debug, Clone)]
enum Family {
    Sort {
        timeline: Timeline<SortInterpreter>,
    },
    Search {
        timeline: Timeline<SearchInterpreter>,
    },
    Array {
        timeline: Timeline<ArrayInterpreter>,
    },
    Graph {
        timeline: Timeline<GraphInterpreter>,
    },
    Tree {
        tree: Bst,
        timeline: Timeline<TreeInterpreter>,
    },
    Container {
        model: ContainerModel,
        timeline: Timeline<ContainerInterpreter>,
    },
}

impl Family {
    fn controls(&self) -> &dyn Controls {
        match self {
            Family::Sort { timeline } => timeline,
            Family::Search { timeline } => timeline,
            Family::Array { timeline } => timeline,
            Family::Graph { timeline } => timeline,
            Family::Tree { timeline, .. } => timeline,
            Family::Container { timeline, .. } => timeline,
        }
    }

    fn controls_mut(&mut self) -> &mut dyn Controls {
        match self {
            Family::Sort { timeline } => timeline,
            Family::Search { timeline } => timeline,
            Family::Array { timeline } => timeline,
            Family::Graph { timeline } => timeline,
            Family::Tree { timeline, .. } => timeline,
            Family::Container { timeline, .. } => timeline,
        }
    }
}

/// A selected algorithm with its playback state.
#[derive(Debug, Clone)]
pub struct Session {
    key: AlgorithmKey,
    config: SessionConfig,
    rng: StdRng,
    speed: Speed,
    family: Family,
}

impl Session {
    /// Select `key` with fresh demo data.
    pub fn new(key: AlgorithmKey, config: SessionConfig) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let speed = config.speeds.for_category(key.category());
        let family = build(key, &config, &mut rng, speed)?;
        tracing::info!(%key, seed = config.seed, "Session started");
        Ok(Self {
            key,
            config,
            rng,
            speed,
            family,
        })
    }

    pub fn key(&self) -> AlgorithmKey {
        self.key
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Switch to another algorithm. The structure, step log and speed all
    /// start over.
    pub fn select(&mut self, key: AlgorithmKey) -> Result<()> {
        let speed = self.config.speeds.for_category(key.category());
        self.family = build(key, &self.config, &mut self.rng, speed)?;
        self.key = key;
        self.speed = speed;
        tracing::info!(%key, "Selected algorithm");
        Ok(())
    }

    /// Return to `Idle`.
    ///
    /// Sorting and searching draw a new array and regenerate their steps;
    /// array and graph demos regenerate from their fixed input. Tree and
    /// container sessions keep the structure and drop the last operation.
    pub fn reset(&mut self) -> Result<()> {
        match &mut self.family {
            Family::Tree { tree, timeline } => {
                *timeline = Timeline::new(TreeInterpreter::snapshot(tree), Vec::new(), self.speed);
            }
            Family::Container { model, timeline } => {
                *timeline = Timeline::new(model.snapshot(), Vec::new(), self.speed);
            }
            _ => {
                self.family = build(self.key, &self.config, &mut self.rng, self.speed)?;
            }
        }
        tracing::info!(key = %self.key, "Reset");
        Ok(())
    }

    pub fn play(&mut self) {
        self.family.controls_mut().play();
    }

    pub fn pause(&mut self) {
        self.family.controls_mut().pause();
    }

    /// Apply one step. Returns whether anything changed.
    pub fn step(&mut self) -> bool {
        let stepped = self.family.controls_mut().step();
        if stepped {
            tracing::debug!(key = %self.key, index = self.status().current_step, "Step");
        }
        stepped
    }

    pub fn step_back(&mut self) {
        self.family.controls_mut().step_back();
    }

    pub fn seek(&mut self, index: usize) {
        self.family.controls_mut().seek(index);
    }

    /// Change the step interval; zero is rejected and leaves the speed as is.
    pub fn set_speed(&mut self, ms: u64) -> Result<()> {
        let speed = Speed::from_millis(ms)?;
        self.speed = speed;
        self.family.controls_mut().set_speed(speed);
        Ok(())
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn status(&self) -> PlaybackStatus {
        self.family.controls().status()
    }

    pub fn state(&self) -> PlaybackState {
        self.status().state
    }

    pub fn is_playing(&self) -> bool {
        self.state() == PlaybackState::Playing
    }

    pub fn view(&self) -> View {
        self.family.controls().current_view()
    }

    pub fn frame(&self) -> Frame {
        Frame {
            key: self.key,
            name: self.key.name(),
            category: self.key.category(),
            status: self.status(),
            view: self.view(),
        }
    }

    /// Insert `value` into the tree and play the walk.
    pub fn insert(&mut self, value: i64) -> Result<()> {
        self.run_tree(Affordance::Insert, |tree| tree.insert(value))
    }

    /// Look `value` up in the tree and play the walk.
    pub fn search(&mut self, value: i64) -> Result<()> {
        self.run_tree(Affordance::Search, |tree| tree.find(value).1)
    }

    /// Run the traversal order the selected key names.
    pub fn traverse(&mut self) -> Result<()> {
        let order = self
            .key
            .traversal_order()
            .ok_or_else(|| self.unsupported(Affordance::Traverse))?;
        self.run_tree(Affordance::Traverse, |tree| tree.traversal(order))
    }

    pub fn push(&mut self, value: i64) -> Result<()> {
        self.run_container(Affordance::Push, |model| match model {
            ContainerModel::Stack(stack) => Some(stack.push(value)),
            _ => None,
        })
    }

    pub fn pop(&mut self) -> Result<()> {
        self.run_container(Affordance::Pop, |model| match model {
            ContainerModel::Stack(stack) => Some(stack.pop()),
            _ => None,
        })
    }

    pub fn enqueue(&mut self, value: i64) -> Result<()> {
        self.run_container(Affordance::Enqueue, |model| match model {
            ContainerModel::Queue(queue) => Some(queue.enqueue(value)),
            _ => None,
        })
    }

    pub fn dequeue(&mut self) -> Result<()> {
        self.run_container(Affordance::Dequeue, |model| match model {
            ContainerModel::Queue(queue) => Some(queue.dequeue()),
            _ => None,
        })
    }

    pub fn append(&mut self, value: i64) -> Result<()> {
        self.run_container(Affordance::Append, |model| match model {
            ContainerModel::List(list) => Some(list.append(value)),
            _ => None,
        })
    }

    pub fn remove_last(&mut self) -> Result<()> {
        self.run_container(Affordance::RemoveLast, |model| match model {
            ContainerModel::List(list) => Some(list.remove_last()),
            _ => None,
        })
    }

    /// Replay the array operation from its starting array.
    pub fn run_demo(&mut self) -> Result<()> {
        self.require(Affordance::RunDemo)?;
        if !matches!(self.family, Family::Array { .. }) {
            return Err(self.unsupported(Affordance::RunDemo));
        }
        let controls = self.family.controls_mut();
        controls.rewind();
        controls.play();
        Ok(())
    }

    fn unsupported(&self, affordance: Affordance) -> Error {
        Error::Unsupported {
            key: self.key,
            affordance,
        }
    }

    fn require(&self, affordance: Affordance) -> Result<()> {
        if self.key.supports(affordance) {
            Ok(())
        } else {
            Err(self.unsupported(affordance))
        }
    }

    /// Run a tree operation and play its steps from the tree as it was.
    fn run_tree(
        &mut self,
        affordance: Affordance,
        operation: impl FnOnce(&mut Bst) -> Vec<TreeStep>,
    ) -> Result<()> {
        self.require(affordance)?;
        let unsupported = self.unsupported(affordance);
        let speed = self.speed;
        let Family::Tree { tree, timeline } = &mut self.family else {
            return Err(unsupported);
        };
        let start = TreeInterpreter::snapshot(tree);
        let steps = operation(tree);
        *timeline = playing(start, steps, speed);
        Ok(())
    }

    /// Run a container operation. `operation` returns `None` when the
    /// model is not the kind the operation needs.
    fn run_container(
        &mut self,
        affordance: Affordance,
        operation: impl FnOnce(
            &mut ContainerModel,
        ) -> Option<algoviz_structures::Result<Vec<ContainerStep>>>,
    ) -> Result<()> {
        self.require(affordance)?;
        let unsupported = self.unsupported(affordance);
        let speed = self.speed;
        let Family::Container { model, timeline } = &mut self.family else {
            return Err(unsupported);
        };
        let start = model.snapshot();
        let steps = operation(model).ok_or(unsupported)??;
        *timeline = playing(start, steps, speed);
        Ok(())
    }
}

/// A timeline that starts playing right away.
fn playing<I>(interpreter: I, steps: Vec<I::Step>, speed: Speed) -> Timeline<I>
where
    I: crate::interpret::Interpreter,
{
    let mut timeline = Timeline::new(interpreter, steps, speed);
    timeline.play();
    timeline
}

fn build(
    key: AlgorithmKey,
    config: &SessionConfig,
    rng: &mut StdRng,
    speed: Speed,
) -> Result<Family> {
    if !key.is_implemented() {
        return Err(Error::NotImplemented(key));
    }

    if let Some(algorithm) = key.sort_algorithm() {
        let input = demo::sort_array(rng, config.array_len);
        let steps = algorithm.generate(&input);
        return Ok(Family::Sort {
            timeline: Timeline::new(SortInterpreter::new(input), steps, speed),
        });
    }

    if let Some(algorithm) = key.search_algorithm() {
        let input = demo::search_array(rng, config.array_len, config.search_target);
        let steps = algorithm.generate(&input, config.search_target);
        return Ok(Family::Search {
            timeline: Timeline::new(
                SearchInterpreter::new(input, config.search_target),
                steps,
                speed,
            ),
        });
    }

    if let Some(algorithm) = key.traversal_algorithm() {
        let graph = Graph::demo();
        let steps = algorithm.generate(&graph, VertexId(0))?;
        let kind = if algorithm.uses_queue() {
            FrontierKind::Queue
        } else {
            FrontierKind::Stack
        };
        return Ok(Family::Graph {
            timeline: Timeline::new(GraphInterpreter::new(graph, kind), steps, speed),
        });
    }

    let family = match key {
        AlgorithmKey::ArrayInsertion | AlgorithmKey::ArrayDeletion => {
            let input = demo::ARRAY_OP_VALUES.to_vec();
            let steps = if key == AlgorithmKey::ArrayInsertion {
                array_insertion(&input, demo::ARRAY_OP_INDEX, demo::ARRAY_OP_VALUE)?
            } else {
                array_deletion(&input, demo::ARRAY_OP_INDEX)?
            };
            Family::Array {
                timeline: Timeline::new(ArrayInterpreter::new(input), steps, speed),
            }
        }
        AlgorithmKey::Stack | AlgorithmKey::Queue | AlgorithmKey::LinkedList => {
            let model = match key {
                AlgorithmKey::Stack => {
                    ContainerModel::Stack(Stack::new(config.stack_capacity, &STACK_SEED))
                }
                AlgorithmKey::Queue => {
                    ContainerModel::Queue(Queue::new(config.queue_capacity, &QUEUE_SEED))
                }
                _ => ContainerModel::List(LinkedList::new(config.list_capacity, &LIST_SEED)),
            };
            let timeline = Timeline::new(model.snapshot(), Vec::new(), speed);
            Family::Container { model, timeline }
        }
        _ => {
            let tree = Bst::from_values(config.tree_capacity, &TREE_DEMO_VALUES);
            let timeline = Timeline::new(TreeInterpreter::snapshot(&tree), Vec::new(), speed);
            Family::Tree { tree, timeline }
        }
    };
    Ok(family)
}
