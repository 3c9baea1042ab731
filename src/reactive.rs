/// Tipboard Reactive Graph
///
/// An explicit dependency graph replacing framework-style implicit
/// reactivity. Derived values register the nodes they read up front; writing
/// an input marks every transitive dependent stale, and stale values
/// recompute lazily on their next read, staying memoized until the next
/// invalidation.
///
/// The model is single-threaded and pull-based: writes never trigger
/// computation, so a handler performing several writes is atomic from the
/// perspective of every consumer — nothing recomputes until the next read.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Identifier of a node (input or derived) in a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Default)]
struct GraphInner {
    /// Direct dependents of each node.
    dependents: Vec<Vec<NodeId>>,
    stale: Vec<bool>,
}

/// Dependency graph shared by inputs and derived values.
///
/// Cheap to clone: clones share the same underlying graph.
#[derive(Clone, Default)]
pub struct Graph {
    inner: Rc<RefCell<GraphInner>>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.inner.borrow().dependents.len()
    }

    pub fn is_stale(&self, id: NodeId) -> bool {
        self.inner.borrow().stale[id.0]
    }

    fn add_input_node(&self) -> NodeId {
        let mut inner = self.inner.borrow_mut();
        let id = NodeId(inner.dependents.len());
        inner.dependents.push(Vec::new());
        // Inputs are never stale; they hold their value directly.
        inner.stale.push(false);
        id
    }

    fn add_derived_node(&self, deps: &[NodeId]) -> NodeId {
        let mut inner = self.inner.borrow_mut();
        let id = NodeId(inner.dependents.len());
        inner.dependents.push(Vec::new());
        // Starts stale so the first read computes it.
        inner.stale.push(true);
        for dep in deps {
            inner.dependents[dep.0].push(id);
        }
        id
    }

    /// Mark every transitive dependent of `id` stale.
    ///
    /// `id` itself is left untouched: for an input it is the origin of the
    /// change, and a derived node's own staleness is managed by its reads.
    pub fn invalidate(&self, id: NodeId) {
        let mut inner = self.inner.borrow_mut();
        let mut seen = vec![false; inner.dependents.len()];
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            // Dependencies are registered at construction, so the graph is
            // acyclic and this walk terminates.
            for i in 0..inner.dependents[node.0].len() {
                let dep = inner.dependents[node.0][i];
                if !seen[dep.0] {
                    seen[dep.0] = true;
                    inner.stale[dep.0] = true;
                    stack.push(dep);
                }
            }
        }
    }

    fn clear_stale(&self, id: NodeId) {
        self.inner.borrow_mut().stale[id.0] = false;
    }
}

/// A settable source value in the graph.
///
/// `set` stores the value and invalidates dependents; it never computes
/// anything. Clones share the same underlying value and node.
pub struct Input<T> {
    graph: Graph,
    id: NodeId,
    value: Rc<RefCell<T>>,
}

impl<T: Clone> Input<T> {
    pub fn new(graph: &Graph, initial: T) -> Self {
        Input {
            graph: graph.clone(),
            id: graph.add_input_node(),
            value: Rc::new(RefCell::new(initial)),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Write a new value and mark all transitive dependents stale.
    ///
    /// Always invalidates, even if the new value equals the old one: the
    /// consumer decides whether recomputation is worth skipping, not the
    /// input.
    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value;
        self.graph.invalidate(self.id);
    }
}

impl<T> Clone for Input<T> {
    fn clone(&self) -> Self {
        Input {
            graph: self.graph.clone(),
            id: self.id,
            value: self.value.clone(),
        }
    }
}

/// A memoized computation over other nodes.
///
/// The dependency list is declared at construction; the compute closure must
/// read exactly those nodes. `get` recomputes only when the node is stale
/// (or has never run), otherwise it returns the cached value.
pub struct Derived<T> {
    graph: Graph,
    id: NodeId,
    cache: Rc<RefCell<Option<T>>>,
    compute: Rc<dyn Fn() -> T>,
    runs: Rc<Cell<u64>>,
}

impl<T: Clone> Derived<T> {
    pub fn new<F>(graph: &Graph, deps: &[NodeId], compute: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        Derived {
            graph: graph.clone(),
            id: graph.add_derived_node(deps),
            cache: Rc::new(RefCell::new(None)),
            compute: Rc::new(compute),
            runs: Rc::new(Cell::new(0)),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Current value, recomputing only if a dependency changed since the
    /// last read.
    pub fn get(&self) -> T {
        if !self.graph.is_stale(self.id) {
            if let Some(cached) = self.cache.borrow().as_ref() {
                return cached.clone();
            }
        }

        // The cache borrow above is released before compute runs, so the
        // closure is free to read other derived values on the same graph.
        let value = (self.compute)();
        self.runs.set(self.runs.get() + 1);
        *self.cache.borrow_mut() = Some(value.clone());
        self.graph.clear_stale(self.id);
        value
    }

    /// How many times the compute closure has run. Lets tests and benches
    /// observe memoization.
    pub fn recompute_count(&self) -> u64 {
        self.runs.get()
    }
}

impl<T> Clone for Derived<T> {
    fn clone(&self) -> Self {
        Derived {
            graph: self.graph.clone(),
            id: self.id,
            cache: self.cache.clone(),
            compute: self.compute.clone(),
            runs: self.runs.clone(),
        }
    }
}

/// An edge-triggered event: a discrete occurrence distinct from continuous
/// state. Every `emit` runs all subscribed handlers exactly once, even when
/// no state changed in between.
#[derive(Clone, Default)]
pub struct EventSource {
    handlers: Rc<RefCell<Vec<Box<dyn Fn()>>>>,
    activations: Rc<Cell<u64>>,
}

impl EventSource {
    pub fn new() -> Self {
        EventSource::default()
    }

    pub fn subscribe<F>(&self, handler: F)
    where
        F: Fn() + 'static,
    {
        self.handlers.borrow_mut().push(Box::new(handler));
    }

    /// Fire the event once. Handlers run immediately, in subscription order.
    ///
    /// Handlers must not emit this event or subscribe to it reentrantly.
    pub fn emit(&self) {
        self.activations.set(self.activations.get() + 1);
        for handler in self.handlers.borrow().iter() {
            handler();
        }
    }

    /// Total number of activations so far.
    pub fn activations(&self) -> u64 {
        self.activations.get()
    }
}
