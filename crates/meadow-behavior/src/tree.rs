//! Behavior-tree nodes.
//!
//! A tree is a plain value: a closed set of node variants over boxed leaf
//! closures and owned child lists, so trees can be assembled at runtime
//! (from data, per kind, per test) and shared read-only across threads.
//!
//! ```ignore
//! let tree = Node::selector([
//!     Node::sequence([Node::condition(is_hungry), Node::action(seek_food)]),
//!     Node::action(wander),
//! ]);
//! let status = tree.tick(&mut ctx);
//! ```

use crate::AgentCtx;

/// Result of ticking a node.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Status {
    Success,
    Failure,
    Running,
}

pub type ConditionFn = Box<dyn Fn(&mut AgentCtx<'_>) -> bool + Send + Sync>;
pub type ActionFn = Box<dyn Fn(&mut AgentCtx<'_>) + Send + Sync>;
pub type TaskFn = Box<dyn Fn(&mut AgentCtx<'_>) -> Status + Send + Sync>;

pub enum Node {
    /// `Success` if the predicate holds, else `Failure`.  May cache a target.
    Condition(ConditionFn),
    /// Unconditional effect; always `Success`.
    Action(ActionFn),
    /// Leaf that reports its own status, for work spanning several ticks.
    Task(TaskFn),
    /// Returns the first non-`Success` child result, else `Success`.
    Sequence(Vec<Node>),
    /// Returns the first `Success` or `Running` child result, else `Failure`.
    Selector(Vec<Node>),
    /// Swaps `Success` and `Failure`; passes `Running` through.
    Inverter(Box<Node>),
}

impl Node {
    pub fn condition<F>(f: F) -> Self
    where
        F: Fn(&mut AgentCtx<'_>) -> bool + Send + Sync + 'static,
    {
        Node::Condition(Box::new(f))
    }

    pub fn action<F>(f: F) -> Self
    where
        F: Fn(&mut AgentCtx<'_>) + Send + Sync + 'static,
    {
        Node::Action(Box::new(f))
    }

    pub fn task<F>(f: F) -> Self
    where
        F: Fn(&mut AgentCtx<'_>) -> Status + Send + Sync + 'static,
    {
        Node::Task(Box::new(f))
    }

    pub fn sequence(children: impl IntoIterator<Item = Node>) -> Self {
        Node::Sequence(children.into_iter().collect())
    }

    pub fn selector(children: impl IntoIterator<Item = Node>) -> Self {
        Node::Selector(children.into_iter().collect())
    }

    pub fn inverter(child: Node) -> Self {
        Node::Inverter(Box::new(child))
    }

    /// Evaluate this node once against `ctx`.
    pub fn tick(&self, ctx: &mut AgentCtx<'_>) -> Status {
        match self {
            Node::Condition(pred) => {
                if pred(ctx) { Status::Success } else { Status::Failure }
            }
            Node::Action(act) => {
                act(ctx);
                Status::Success
            }
            Node::Task(task) => task(ctx),
            Node::Sequence(children) => {
                for child in children {
                    let status = child.tick(ctx);
                    if status != Status::Success {
                        return status;
                    }
                }
                Status::Success
            }
            Node::Selector(children) => {
                for child in children {
                    let status = child.tick(ctx);
                    if status != Status::Failure {
                        return status;
                    }
                }
                Status::Failure
            }
            Node::Inverter(child) => match child.tick(ctx) {
                Status::Success => Status::Failure,
                Status::Failure => Status::Success,
                Status::Running => Status::Running,
            },
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        match self {
            Node::Condition(_) | Node::Action(_) | Node::Task(_) => 1,
            Node::Sequence(children) | Node::Selector(children) => {
                1 + children.iter().map(Node::node_count).sum::<usize>()
            }
            Node::Inverter(child) => 1 + child.node_count(),
        }
    }
}
