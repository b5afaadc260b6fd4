//! The algorithm catalog: stable keys, display names, categories and the
//! operations each visualization offers.

use std::fmt;
use std::str::FromStr;

use algoviz_steps::{SearchAlgorithm, SortAlgorithm, TraversalAlgorithm, TraversalOrder};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Catalog sections, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Arrays,
    Sorting,
    Searching,
    Graphs,
    Trees,
    LinkedLists,
    StacksAndQueues,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Arrays => "Arrays",
            Category::Sorting => "Sorting",
            Category::Searching => "Searching",
            Category::Graphs => "Graphs",
            Category::Trees => "Trees",
            Category::LinkedLists => "Linked Lists",
            Category::StacksAndQueues => "Stacks & Queues",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User operations beyond the playback controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Affordance {
    Insert,
    Search,
    Traverse,
    Push,
    Pop,
    Enqueue,
    Dequeue,
    Append,
    RemoveLast,
    RunDemo,
}

impl fmt::Display for Affordance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Affordance::Insert => "insert",
            Affordance::Search => "search",
            Affordance::Traverse => "traverse",
            Affordance::Push => "push",
            Affordance::Pop => "pop",
            Affordance::Enqueue => "enqueue",
            Affordance::Dequeue => "dequeue",
            Affordance::Append => "append",
            Affordance::RemoveLast => "remove last",
            Affordance::RunDemo => "run demo",
        })
    }
}

/// Asymptotic costs shown next to an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub time: &'static str,
    pub space: &'static str,
}

/// Every catalog entry, addressed by a stable string key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlgorithmKey {
    ArrayInsertion,
    ArrayDeletion,
    BubbleSort,
    InsertionSort,
    SelectionSort,
    MergeSort,
    QuickSort,
    LinearSearch,
    BinarySearch,
    Bfs,
    Dfs,
    BstInsertion,
    BstSearch,
    BstDeletion,
    InOrderTraversal,
    PreOrderTraversal,
    PostOrderTraversal,
    LinkedList,
    Stack,
    Queue,
}

impl AlgorithmKey {
    /// Every key, in menu order.
    pub const ALL: [AlgorithmKey; 20] = [
        AlgorithmKey::ArrayInsertion,
        AlgorithmKey::ArrayDeletion,
        AlgorithmKey::BubbleSort,
        AlgorithmKey::InsertionSort,
        AlgorithmKey::SelectionSort,
        AlgorithmKey::MergeSort,
        AlgorithmKey::QuickSort,
        AlgorithmKey::LinearSearch,
        AlgorithmKey::BinarySearch,
        AlgorithmKey::Bfs,
        AlgorithmKey::Dfs,
        AlgorithmKey::BstInsertion,
        AlgorithmKey::BstSearch,
        AlgorithmKey::BstDeletion,
        AlgorithmKey::InOrderTraversal,
        AlgorithmKey::PreOrderTraversal,
        AlgorithmKey::PostOrderTraversal,
        AlgorithmKey::LinkedList,
        AlgorithmKey::Stack,
        AlgorithmKey::Queue,
    ];

    /// The stable key string.
    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmKey::ArrayInsertion => "arrayInsertion",
            AlgorithmKey::ArrayDeletion => "arrayDeletion",
            AlgorithmKey::BubbleSort => "bubbleSort",
            AlgorithmKey::InsertionSort => "insertionSort",
            AlgorithmKey::SelectionSort => "selectionSort",
            AlgorithmKey::MergeSort => "mergeSort",
            AlgorithmKey::QuickSort => "quickSort",
            AlgorithmKey::LinearSearch => "linearSearch",
            AlgorithmKey::BinarySearch => "binarySearch",
            AlgorithmKey::Bfs => "bfs",
            AlgorithmKey::Dfs => "dfs",
            AlgorithmKey::BstInsertion => "bstInsertion",
            AlgorithmKey::BstSearch => "bstSearch",
            AlgorithmKey::BstDeletion => "bstDeletion",
            AlgorithmKey::InOrderTraversal => "inOrderTraversal",
            AlgorithmKey::PreOrderTraversal => "preOrderTraversal",
            AlgorithmKey::PostOrderTraversal => "postOrderTraversal",
            AlgorithmKey::LinkedList => "linkedList",
            AlgorithmKey::Stack => "stack",
            AlgorithmKey::Queue => "queue",
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKey::ArrayInsertion => "Array: Insertion",
            AlgorithmKey::ArrayDeletion => "Array: Deletion",
            AlgorithmKey::BubbleSort => "Bubble Sort",
            AlgorithmKey::InsertionSort => "Insertion Sort",
            AlgorithmKey::SelectionSort => "Selection Sort",
            AlgorithmKey::MergeSort => "Merge Sort",
            AlgorithmKey::QuickSort => "Quick Sort",
            AlgorithmKey::LinearSearch => "Linear Search",
            AlgorithmKey::BinarySearch => "Binary Search",
            AlgorithmKey::Bfs => "Breadth-First Search",
            AlgorithmKey::Dfs => "Depth-First Search",
            AlgorithmKey::BstInsertion => "BST: Insertion",
            AlgorithmKey::BstSearch => "BST: Search",
            AlgorithmKey::BstDeletion => "BST: Deletion",
            AlgorithmKey::InOrderTraversal => "Traversal: In-order",
            AlgorithmKey::PreOrderTraversal => "Traversal: Pre-order",
            AlgorithmKey::PostOrderTraversal => "Traversal: Post-order",
            AlgorithmKey::LinkedList => "Linked List",
            AlgorithmKey::Stack => "Stack (LIFO)",
            AlgorithmKey::Queue => "Queue (FIFO)",
        }
    }

    pub fn category(self) -> Category {
        match self {
            AlgorithmKey::ArrayInsertion | AlgorithmKey::ArrayDeletion => Category::Arrays,
            AlgorithmKey::BubbleSort
            | AlgorithmKey::InsertionSort
            | AlgorithmKey::SelectionSort
            | AlgorithmKey::MergeSort
            | AlgorithmKey::QuickSort => Category::Sorting,
            AlgorithmKey::LinearSearch | AlgorithmKey::BinarySearch => Category::Searching,
            AlgorithmKey::Bfs | AlgorithmKey::Dfs => Category::Graphs,
            AlgorithmKey::BstInsertion
            | AlgorithmKey::BstSearch
            | AlgorithmKey::BstDeletion
            | AlgorithmKey::InOrderTraversal
            | AlgorithmKey::PreOrderTraversal
            | AlgorithmKey::PostOrderTraversal => Category::Trees,
            AlgorithmKey::LinkedList => Category::LinkedLists,
            AlgorithmKey::Stack | AlgorithmKey::Queue => Category::StacksAndQueues,
        }
    }

    pub fn complexity(self) -> Complexity {
        let (time, space) = match self {
            AlgorithmKey::ArrayInsertion | AlgorithmKey::ArrayDeletion => ("O(n)", "O(1)"),
            AlgorithmKey::BubbleSort | AlgorithmKey::InsertionSort | AlgorithmKey::SelectionSort => {
                ("O(n^2)", "O(1)")
            }
            AlgorithmKey::MergeSort => ("O(n log n)", "O(n)"),
            AlgorithmKey::QuickSort => ("O(n log n) average", "O(log n)"),
            AlgorithmKey::LinearSearch => ("O(n)", "O(1)"),
            AlgorithmKey::BinarySearch => ("O(log n)", "O(1)"),
            AlgorithmKey::Bfs | AlgorithmKey::Dfs => ("O(V + E)", "O(V)"),
            AlgorithmKey::BstInsertion | AlgorithmKey::BstSearch | AlgorithmKey::BstDeletion => {
                ("O(log n) average, O(n) worst", "O(log n) recursive")
            }
            AlgorithmKey::InOrderTraversal
            | AlgorithmKey::PreOrderTraversal
            | AlgorithmKey::PostOrderTraversal => ("O(n)", "O(n)"),
            AlgorithmKey::LinkedList => {
                ("O(n) traversal, O(1) insertion/deletion at ends", "O(n)")
            }
            AlgorithmKey::Stack | AlgorithmKey::Queue => ("O(1)", "O(n)"),
        };
        Complexity { time, space }
    }

    /// Operations offered on top of play, pause, step and reset.
    pub fn affordances(self) -> &'static [Affordance] {
        match self {
            AlgorithmKey::ArrayInsertion | AlgorithmKey::ArrayDeletion => &[Affordance::RunDemo],
            AlgorithmKey::BstInsertion => &[Affordance::Insert],
            AlgorithmKey::BstSearch => &[Affordance::Search],
            AlgorithmKey::InOrderTraversal
            | AlgorithmKey::PreOrderTraversal
            | AlgorithmKey::PostOrderTraversal => &[Affordance::Traverse],
            AlgorithmKey::LinkedList => &[Affordance::Append, Affordance::RemoveLast],
            AlgorithmKey::Stack => &[Affordance::Push, Affordance::Pop],
            AlgorithmKey::Queue => &[Affordance::Enqueue, Affordance::Dequeue],
            _ => &[],
        }
    }

    pub fn supports(self, affordance: Affordance) -> bool {
        self.affordances().contains(&affordance)
    }

    /// Whether a visualization exists for this key.
    pub fn is_implemented(self) -> bool {
        !matches!(self, AlgorithmKey::BstDeletion)
    }

    pub fn sort_algorithm(self) -> Option<SortAlgorithm> {
        match self {
            AlgorithmKey::BubbleSort => Some(SortAlgorithm::Bubble),
            AlgorithmKey::InsertionSort => Some(SortAlgorithm::Insertion),
            AlgorithmKey::SelectionSort => Some(SortAlgorithm::Selection),
            AlgorithmKey::MergeSort => Some(SortAlgorithm::Merge),
            AlgorithmKey::QuickSort => Some(SortAlgorithm::Quick),
            _ => None,
        }
    }

    pub fn search_algorithm(self) -> Option<SearchAlgorithm> {
        match self {
            AlgorithmKey::LinearSearch => Some(SearchAlgorithm::Linear),
            AlgorithmKey::BinarySearch => Some(SearchAlgorithm::Binary),
            _ => None,
        }
    }

    pub fn traversal_algorithm(self) -> Option<TraversalAlgorithm> {
        match self {
            AlgorithmKey::Bfs => Some(TraversalAlgorithm::BreadthFirst),
            AlgorithmKey::Dfs => Some(TraversalAlgorithm::DepthFirst),
            _ => None,
        }
    }

    pub fn traversal_order(self) -> Option<TraversalOrder> {
        match self {
            AlgorithmKey::InOrderTraversal => Some(TraversalOrder::InOrder),
            AlgorithmKey::PreOrderTraversal => Some(TraversalOrder::PreOrder),
            AlgorithmKey::PostOrderTraversal => Some(TraversalOrder::PostOrder),
            _ => None,
        }
    }
}

impl fmt::Display for AlgorithmKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlgorithmKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}
