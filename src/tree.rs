//! **C5 — Spanning Tree Structure.**
//!
//! The basis of a network simplex iterate is always a spanning tree of the
//! augmented graph (spec.md §4.4). This module keeps that tree's shape —
//! parent pointers, predecessor arcs, depths, and a preorder "thread" over
//! all nodes — so the engine (C7) can find the join node of the cycle a
//! candidate entering arc closes, walk that cycle to compute the leaving
//! arc and its flow delta, and answer "is `a` an ancestor of `b`" in O(1)
//! once the thread is built.
//!
//! Grounded on the parent/pred/depth/thread/rev_thread/last_succ/succ_num
//! arrays of the reference network simplex implementation studied for this
//! crate (a from-scratch Rust port of LEMON's `NetworkSimplex`), but
//! simplified at the tree-restructuring step: rather than the source
//! material's in-place thread splice after every pivot, [`SpanningTree`]
//! rebuilds the thread by a single DFS over the whole tree
//! ([`SpanningTree::rebuild_thread`]). That trades the source's O(depth)
//! amortized restructuring for O(node count) per pivot — see `DESIGN.md`
//! for the full rationale.

use crate::ids::{ArcId, NodeId};

/// The spanning tree of the augmented graph underlying one simplex basis.
///
/// Node ids are exactly `0..node_num`, matching the augmented
/// [`crate::graph::Digraph`] the engine builds in its preprocessing step.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    node_num: usize,
    root: NodeId,
    /// `parent[n]` — `n`'s parent in the tree. Meaningless for `root`.
    parent: Vec<NodeId>,
    /// `pred_arc[n]` — the tree arc connecting `n` to `parent[n]`.
    /// Meaningless for `root`.
    pred_arc: Vec<ArcId>,
    /// `pred_forward[n]` — `true` when `pred_arc[n]` is oriented
    /// `parent[n] -> n` (i.e. its graph direction agrees with the path away
    /// from the root), `false` when it is oriented `n -> parent[n]`.
    pred_forward: Vec<bool>,
    depth: Vec<usize>,
    /// Preorder sequence of all nodes: `thread[0] == root`.
    thread: Vec<NodeId>,
    /// Inverse of `thread`: `order[n]` is `n`'s position in `thread`.
    order: Vec<usize>,
    /// Size of the subtree rooted at `n`, counting `n` itself.
    succ_num: Vec<usize>,
    /// The last node (in thread order) of the subtree rooted at `n`.
    last_succ: Vec<NodeId>,
}

impl SpanningTree {
    /// Allocates a tree over `node_num` nodes rooted at `root`. The caller
    /// must call [`SpanningTree::init_star`] before using it.
    pub fn new(node_num: usize, root: NodeId) -> Self {
        SpanningTree {
            node_num,
            root,
            parent: vec![root; node_num],
            pred_arc: vec![ArcId::new(0); node_num],
            pred_forward: vec![true; node_num],
            depth: vec![0; node_num],
            thread: vec![root; node_num],
            order: vec![0; node_num],
            succ_num: vec![1; node_num],
            last_succ: vec![root; node_num],
        }
    }

    pub fn node_num(&self) -> usize {
        self.node_num
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Builds the initial "star" tree: every non-root node is a direct
    /// child of `root`, connected by the arc `pred_of(node)` returns
    /// (arc id, and whether it points `root -> node`). This is exactly the
    /// shape of the artificial arcs the preprocessor attaches (spec.md
    /// §4.4): one artificial arc per original node, all incident to the
    /// artificial root.
    pub fn init_star(&mut self, pred_of: impl Fn(NodeId) -> (ArcId, bool)) {
        for i in 0..self.node_num {
            let n = NodeId::new(i);
            if n == self.root {
                continue;
            }
            self.parent[i] = self.root;
            let (arc, forward) = pred_of(n);
            self.pred_arc[i] = arc;
            self.pred_forward[i] = forward;
            self.depth[i] = 1;
        }
        self.depth[self.root.index()] = 0;
        self.rebuild_thread();
    }

    pub fn parent(&self, node: NodeId) -> NodeId {
        self.parent[node.index()]
    }

    pub fn pred_arc(&self, node: NodeId) -> ArcId {
        self.pred_arc[node.index()]
    }

    pub fn pred_forward(&self, node: NodeId) -> bool {
        self.pred_forward[node.index()]
    }

    pub fn depth(&self, node: NodeId) -> usize {
        self.depth[node.index()]
    }

    pub fn order(&self, node: NodeId) -> usize {
        self.order[node.index()]
    }

    pub fn succ_num(&self, node: NodeId) -> usize {
        self.succ_num[node.index()]
    }

    pub fn last_succ(&self, node: NodeId) -> NodeId {
        self.last_succ[node.index()]
    }

    /// The full preorder sequence of nodes, `thread[0] == root()`. Used by
    /// the engine to recompute node potentials in a single top-down pass
    /// after every pivot (see `crate::engine`'s module doc for why this
    /// crate recomputes wholesale rather than shifting incrementally).
    pub fn thread(&self) -> &[NodeId] {
        &self.thread
    }

    /// `true` iff `anc` lies on the tree path from `node` up to the root,
    /// `anc` included. O(1) given a current thread.
    pub fn is_ancestor(&self, anc: NodeId, node: NodeId) -> bool {
        let p = self.order[anc.index()];
        let q = self.order[node.index()];
        q >= p && q < p + self.succ_num[anc.index()]
    }

    /// The nearest common ancestor of `u` and `v`: walk the deeper node up
    /// to the shallower node's depth, then walk both up in lockstep.
    /// O(depth), matching every other tree-path query in this module.
    pub fn find_join(&self, u: NodeId, v: NodeId) -> NodeId {
        let mut a = u;
        let mut b = v;
        while self.depth[a.index()] > self.depth[b.index()] {
            a = self.parent[a.index()];
        }
        while self.depth[b.index()] > self.depth[a.index()] {
            b = self.parent[b.index()];
        }
        while a != b {
            a = self.parent[a.index()];
            b = self.parent[b.index()];
        }
        a
    }

    /// Walks the tree path from `node` up to (excluding) `to`, which must
    /// be an ancestor of `node`, yielding `(child, pred_arc, pred_forward)`
    /// for each step. Used to walk both legs of the cycle an entering arc
    /// closes — once to find the leaving arc and flow delta, once more to
    /// apply the flow update (mirrors the two-pass `u_in`/`v_in` walk of
    /// the reference pivot routine).
    pub fn path_up(&self, node: NodeId, to: NodeId) -> PathUp<'_> {
        PathUp {
            tree: self,
            cur: node,
            to,
        }
    }

    /// Re-parents `node` under `new_parent`, connected by `new_pred_arc`
    /// (oriented as `new_pred_forward` describes). Does not update
    /// depth/thread bookkeeping; call [`SpanningTree::rebuild_thread`]
    /// once all re-parenting for a pivot is done.
    pub fn set_parent(
        &mut self,
        node: NodeId,
        new_parent: NodeId,
        new_pred_arc: ArcId,
        new_pred_forward: bool,
    ) {
        self.parent[node.index()] = new_parent;
        self.pred_arc[node.index()] = new_pred_arc;
        self.pred_forward[node.index()] = new_pred_forward;
    }

    /// Recomputes `depth`, `thread`, `order`, `succ_num` and `last_succ`
    /// for the whole tree from the current `parent` pointers, via an
    /// iterative preorder DFS rooted at [`SpanningTree::root`].
    ///
    /// O(node_num) regardless of how many nodes actually changed parent —
    /// see the module doc for why this crate accepts that over in-place
    /// thread splicing.
    pub fn rebuild_thread(&mut self) {
        let mut children: Vec<Vec<NodeId>> = vec![Vec::new(); self.node_num];
        for i in 0..self.node_num {
            let n = NodeId::new(i);
            if n != self.root {
                children[self.parent[i].index()].push(n);
            }
        }

        self.thread.clear();
        let mut stack: Vec<(NodeId, usize)> = vec![(self.root, 0)];
        self.depth[self.root.index()] = 0;
        self.thread.push(self.root);
        self.order[self.root.index()] = 0;

        // Iterative preorder DFS: push root, then repeatedly descend into
        // the next unvisited child of the node on top of the stack,
        // backtracking when none remain.
        while let Some(&(node, _)) = stack.last() {
            let idx = stack.last().unwrap().1;
            if idx < children[node.index()].len() {
                let child = children[node.index()][idx];
                stack.last_mut().unwrap().1 += 1;
                self.depth[child.index()] = self.depth[node.index()] + 1;
                self.order[child.index()] = self.thread.len();
                self.thread.push(child);
                stack.push((child, 0));
            } else {
                stack.pop();
            }
        }

        // succ_num / last_succ from a reverse scan of the preorder thread:
        // every node's subtree is a contiguous range starting at its own
        // position, so folding in each node's children's already-computed
        // sizes (processed in reverse preorder, hence after their own
        // children) is correct in one pass.
        for i in 0..self.node_num {
            self.succ_num[i] = 1;
            self.last_succ[i] = NodeId::new(i);
        }
        for pos in (0..self.thread.len()).rev() {
            let node = self.thread[pos];
            if node == self.root {
                continue;
            }
            let parent = self.parent[node.index()];
            self.succ_num[parent.index()] += self.succ_num[node.index()];
            let node_last = self.last_succ[node.index()];
            if self.order[node_last.index()] >= self.order[self.last_succ[parent.index()].index()]
            {
                self.last_succ[parent.index()] = node_last;
            }
        }
    }
}

/// Iterator over the tree-path steps from a node up to an ancestor,
/// produced by [`SpanningTree::path_up`].
pub struct PathUp<'a> {
    tree: &'a SpanningTree,
    cur: NodeId,
    to: NodeId,
}

impl<'a> Iterator for PathUp<'a> {
    /// `(node whose pred arc this is, pred arc, pred_forward)`.
    type Item = (NodeId, ArcId, bool);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur == self.to {
            return None;
        }
        let node = self.cur;
        let arc = self.tree.pred_arc(node);
        let forward = self.tree.pred_forward(node);
        self.cur = self.tree.parent(node);
        Some((node, arc, forward))
    }
}
