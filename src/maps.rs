//! **C2 — Attribute Maps.**
//!
//! Read-only mappings arc→cost/lower/upper and node→supply, plus writable
//! mappings arc→flow and node→potential. Mirrors `petgraph::data::{Data,
//! DataMap, DataMapMut}`: that trait family separates "does this graph
//! *have* per-node/per-edge data" from "can I read it" from "can I write
//! it". Here the graph (C1) carries no attributes at all — LEMON's
//! `ArcMap`/`NodeMap` style fully decouples attributes from topology so the
//! same [`crate::graph::Digraph`] can be paired with different cost/supply
//! scenarios without copying — so only the read/write split remains.

use crate::ids::{ArcId, NodeId};

/// A read-only arc-indexed map of `T`.
pub trait ArcMap<T> {
    fn get(&self, arc: ArcId) -> T;
}

/// A writable arc-indexed map of `T`.
pub trait ArcMapMut<T>: ArcMap<T> {
    fn set(&mut self, arc: ArcId, value: T);
}

/// A read-only node-indexed map of `T`.
pub trait NodeMap<T> {
    fn get(&self, node: NodeId) -> T;
}

/// A writable node-indexed map of `T`.
pub trait NodeMapMut<T>: NodeMap<T> {
    fn set(&mut self, node: NodeId, value: T);
}

impl<T: Copy> ArcMap<T> for Vec<T> {
    fn get(&self, arc: ArcId) -> T {
        self[arc.index()]
    }
}

impl<T: Copy> ArcMapMut<T> for Vec<T> {
    fn set(&mut self, arc: ArcId, value: T) {
        self[arc.index()] = value;
    }
}

impl<T: Copy> NodeMap<T> for Vec<T> {
    fn get(&self, node: NodeId) -> T {
        self[node.index()]
    }
}

impl<T: Copy> NodeMapMut<T> for Vec<T> {
    fn set(&mut self, node: NodeId, value: T) {
        self[node.index()] = value;
    }
}

impl<T: Copy, M: ArcMap<T> + ?Sized> ArcMap<T> for &M {
    fn get(&self, arc: ArcId) -> T {
        (**self).get(arc)
    }
}

impl<T: Copy, M: NodeMap<T> + ?Sized> NodeMap<T> for &M {
    fn get(&self, node: NodeId) -> T {
        (**self).get(node)
    }
}

/// A map that returns the same value for every id. Used by the builder to
/// realize the documented defaults (spec.md §4.2: unbound upper = `T::MAX`,
/// unbound lower = zero, unbound cost = one, unbound supply = zero) without
/// special-casing "is this map bound" throughout the preprocessor.
#[derive(Copy, Clone, Debug)]
pub struct ConstMap<T>(pub T);

impl<T: Copy> ArcMap<T> for ConstMap<T> {
    fn get(&self, _arc: ArcId) -> T {
        self.0
    }
}

impl<T: Copy> NodeMap<T> for ConstMap<T> {
    fn get(&self, _node: NodeId) -> T {
        self.0
    }
}
