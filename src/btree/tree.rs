// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! In-memory B+-Tree implementation.
//!
//! Main index structure: an ordered key-value map with linked leaves for
//! range scans. All nodes live in a slot arena and reference each other by
//! `NodeId`; the tree owns the arena, the arena owns the nodes.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │ BPlusTree                                       │
//! ├─────────────────────────────────────────────────┤
//! │ - arena: NodeArena (slot vector + free list)    │
//! │ - root:  NodeId                                 │
//! │ - order: Order (fan-out m)                      │
//! │ - len:   live key count                         │
//! └─────────────────────────────────────────────────┘
//!              │
//!              ▼
//!        [Internal]   separators route the descent
//!        /         \
//!   [Leaf] ⇄ [Leaf] ⇄ [Leaf]   doubly-linked chain in key order
//! ```
//!
//! ## Operations
//!
//! - **Point lookup**: O(log n) descent + binary search in the leaf
//! - **Insert**: O(log n) with splits propagating up the spine
//! - **Delete**: O(log n) with borrow/merge rebalancing and root collapse
//! - **Range scan**: O(log n + k) descent + leaf-chain walk
//!
//! Every public mutation either completes and leaves all structural
//! invariants intact, or (deleting an absent key) leaves the tree
//! untouched.
//!
//! ## Example Usage
//!
//! ```rust
//! use leafbase::btree::{BPlusTree, Order};
//!
//! let mut tree = BPlusTree::new(Order::new(4)?);
//!
//! tree.insert("page.title".to_string(), "Welcome".to_string());
//! tree.insert("page.body".to_string(), "Hello".to_string());
//!
//! assert_eq!(tree.get(&"page.title".to_string()), Some(&"Welcome".to_string()));
//!
//! let results = tree.range(&"page.a".to_string(), &"page.z".to_string());
//! assert_eq!(results.len(), 2);
//! # Ok::<(), leafbase::LeafError>(())
//! ```

use super::arena::NodeArena;
use super::iter::{Iter, RangeScan};
use super::node::{InternalNode, LeafNode, Node};
use super::types::{Index, NodeId, Order};
use crate::error::{LeafError, LeafResult};
use std::fmt;

/// In-memory B+-Tree index.
///
/// ## Type Parameters
/// - `K`: Key type (must be `Clone + Ord`; the total order is the caller's
///   contract and is not validated at runtime)
/// - `V`: Value type (opaque payload, owned by the tree until overwritten
///   or deleted)
///
/// ## Thread Safety
/// - Not thread-safe; the tree is owned by one logical caller
///
/// ## References
/// - `get` hands out a reference that is valid until the next mutating
///   call; splits and merges move data between nodes
pub struct BPlusTree<K, V>
where
    K: Clone + Ord,
{
    /// Node storage.
    arena: NodeArena<K, V>,

    /// Root node identifier.
    root: NodeId,

    /// Tree fan-out.
    order: Order,

    /// Number of live keys.
    len: usize,
}

impl<K, V> fmt::Debug for BPlusTree<K, V>
where
    K: Clone + Ord,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BPlusTree")
            .field("order", &self.order)
            .field("len", &self.len)
            .field("root", &self.root)
            .field("nodes", &self.arena.live_nodes())
            .finish()
    }
}

impl<K, V> BPlusTree<K, V>
where
    K: Clone + Ord,
{
    /// Create an empty tree: the root is a leaf holding zero pairs.
    ///
    /// ## Input
    /// - `order`: Validated tree fan-out (see [`Order::new`])
    ///
    /// ## Output
    /// - Empty tree of the given order
    pub fn new(order: Order) -> Self {
        let mut arena = NodeArena::new();
        let root = arena.alloc(Node::Leaf(LeafNode::new()));
        Self {
            arena,
            root,
            order,
            len: 0,
        }
    }

    /// Tree fan-out.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Number of live keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels; a tree that is a single leaf has height 1.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut current = self.root;
        while let Node::Internal(internal) = self.arena.node(current) {
            height += 1;
            current = internal.children[0];
        }
        height
    }

    /// Number of live nodes in the arena (leaves plus internal nodes).
    pub fn node_count(&self) -> usize {
        self.arena.live_nodes()
    }

    /// Point lookup.
    ///
    /// ## Input
    /// - `key`: Key to look up
    ///
    /// ## Output
    /// - `Some(&V)` if the key exists; the reference is valid until the
    ///   next mutating call
    /// - `None` if the key is not present
    ///
    /// ## Performance
    /// - O(log n) descent, binary search within each node
    pub fn get(&self, key: &K) -> Option<&V> {
        let leaf_id = self.search_leaf(key);
        self.arena.leaf(leaf_id).find_value(key)
    }

    /// Insert or overwrite.
    ///
    /// ## Input
    /// - `key`: Key to insert
    /// - `value`: Value to store
    ///
    /// ## Output
    /// - `Some(previous)` when the key existed (value replaced in place,
    ///   no structural change)
    /// - `None` when a new pair was inserted
    ///
    /// ## Performance
    /// - O(log n); an overflowing leaf splits and the promoted separator
    ///   may cascade further splits up to the root
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let leaf_id = self.search_leaf(&key);
        let previous = self.arena.leaf_mut(leaf_id).insert(key, value);
        if previous.is_some() {
            return previous;
        }
        self.len += 1;
        if self.arena.leaf(leaf_id).is_overflow(self.order) {
            self.split_leaf(leaf_id);
        }
        None
    }

    /// Delete the pair with `key`.
    ///
    /// ## Input
    /// - `key`: Key to remove
    ///
    /// ## Output
    /// - `Some(value)` when a pair was removed
    /// - `None` when the key was absent (tree unchanged)
    ///
    /// ## Performance
    /// - O(log n); a deficient leaf borrows from a sibling or merges, and
    ///   merges may cascade up to a root collapse
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let leaf_id = self.search_leaf(key);
        let value = self.arena.leaf_mut(leaf_id).remove(key)?;
        self.len -= 1;

        // A root leaf may hold any number of keys down to zero.
        if leaf_id == self.root {
            return Some(value);
        }

        // The removed key may have been a subtree minimum; refresh the
        // separators guarding this leaf before any rebalancing decision.
        if !self.arena.leaf(leaf_id).keys.is_empty() {
            self.repair_separators(leaf_id);
        }
        if self.arena.leaf(leaf_id).is_deficient(self.order) {
            self.rebalance(leaf_id);
        }
        Some(value)
    }

    /// All key-value pairs in `[start, end]`, inclusive both ends, in
    /// ascending key order.
    ///
    /// ## Performance
    /// - O(log n + k) where k is the result size
    pub fn range(&self, start: &K, end: &K) -> Vec<(K, V)>
    where
        V: Clone,
    {
        self.scan(start, end)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Lazy range scan over `[start, end]`, yielding references.
    pub fn scan<'a>(&'a self, start: &K, end: &'a K) -> RangeScan<'a, K, V> {
        let leaf_id = self.search_leaf(start);
        RangeScan::new(&self.arena, leaf_id, start, end)
    }

    /// Lazy ordered enumeration of all pairs via the leaf chain.
    ///
    /// The iterator is double-ended: `.rev()` walks the chain backward
    /// through the `prev` links.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.arena, self.first_leaf(), self.last_leaf())
    }

    /// All live keys in ascending order.
    pub fn keys_in_order(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Level-order structure dump, one line per level.
    ///
    /// Each node prints as its key list; sibling nodes are separated by a
    /// space. Used by the shell `tree` command.
    pub fn format_levels(&self) -> String
    where
        K: fmt::Debug,
    {
        let mut out = String::new();
        let mut level = vec![self.root];
        while !level.is_empty() {
            let mut next = Vec::new();
            for (i, id) in level.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                match self.arena.node(*id) {
                    Node::Leaf(leaf) => out.push_str(&format!("{:?}", leaf.keys)),
                    Node::Internal(internal) => {
                        out.push_str(&format!("{:?}", internal.keys));
                        next.extend_from_slice(&internal.children);
                    }
                }
            }
            out.push('\n');
            level = next;
        }
        out
    }

    // ------------------------------------------------------------------
    // Descent
    // ------------------------------------------------------------------

    /// Descend to the unique leaf that contains `key` or would receive it.
    ///
    /// A key equal to a separator follows the separator's right child,
    /// because separators equal the minimum of their right subtree.
    fn search_leaf(&self, key: &K) -> NodeId {
        let mut current = self.root;
        loop {
            match self.arena.node(current) {
                Node::Leaf(_) => return current,
                Node::Internal(internal) => {
                    current = internal.children[internal.find_child(key)];
                }
            }
        }
    }

    /// Leftmost leaf of the whole tree.
    fn first_leaf(&self) -> NodeId {
        let mut current = self.root;
        loop {
            match self.arena.node(current) {
                Node::Leaf(_) => return current,
                Node::Internal(internal) => current = internal.children[0],
            }
        }
    }

    /// Rightmost leaf of the whole tree.
    fn last_leaf(&self) -> NodeId {
        let mut current = self.root;
        loop {
            match self.arena.node(current) {
                Node::Leaf(_) => return current,
                Node::Internal(internal) => {
                    current = *internal
                        .children
                        .last()
                        .expect("internal node holds at least one child");
                }
            }
        }
    }

    /// Minimum key of the subtree rooted at `id`.
    ///
    /// The subtree must hold at least one pair.
    fn subtree_min(&self, id: NodeId) -> K {
        let mut current = id;
        loop {
            match self.arena.node(current) {
                Node::Leaf(leaf) => return leaf.keys[0].clone(),
                Node::Internal(internal) => current = internal.children[0],
            }
        }
    }

    // ------------------------------------------------------------------
    // Insertion: splits and the promote step
    // ------------------------------------------------------------------

    /// Split an overflowing leaf and promote a copy of the right half's
    /// first key into the parent.
    fn split_leaf(&mut self, leaf_id: NodeId) {
        let mid = self.order.split_mid();
        let (separator, mut right) = self.arena.leaf_mut(leaf_id).split(mid);

        // Splice the new leaf into the chain immediately after the left.
        let old_next = self.arena.leaf(leaf_id).next;
        right.prev = Some(leaf_id);
        right.next = old_next;
        let right_id = self.arena.alloc(Node::Leaf(right));
        self.arena.leaf_mut(leaf_id).next = Some(right_id);
        if let Some(next_id) = old_next {
            self.arena.leaf_mut(next_id).prev = Some(right_id);
        }

        self.insert_in_parent(leaf_id, separator, right_id);
    }

    /// Split an overflowing internal node; the middle key moves up.
    fn split_internal(&mut self, node_id: NodeId) {
        let mid = self.order.split_mid();
        let (separator, right) = self.arena.internal_mut(node_id).split(mid);

        let moved_children = right.children.clone();
        let right_id = self.arena.alloc(Node::Internal(right));
        for child in moved_children {
            self.arena.node_mut(child).set_parent(Some(right_id));
        }

        self.insert_in_parent(node_id, separator, right_id);
    }

    /// Promote step: hang `right_id` next to `left_id` under their shared
    /// parent, guarded by `separator`; grows a fresh root when `left_id`
    /// was the root.
    fn insert_in_parent(&mut self, left_id: NodeId, separator: K, right_id: NodeId) {
        match self.arena.node(left_id).parent() {
            None => {
                let mut root = InternalNode::new();
                root.children.push(left_id);
                root.keys.push(separator);
                root.children.push(right_id);
                let root_id = self.arena.alloc(Node::Internal(root));
                self.arena.node_mut(left_id).set_parent(Some(root_id));
                self.arena.node_mut(right_id).set_parent(Some(root_id));
                self.root = root_id;
            }
            Some(parent_id) => {
                {
                    let parent = self.arena.internal_mut(parent_id);
                    let pos = parent.position_of(left_id);
                    parent.insert_key_after(pos, separator, right_id);
                }
                self.arena.node_mut(right_id).set_parent(Some(parent_id));
                if self.arena.internal(parent_id).is_overflow(self.order) {
                    self.split_internal(parent_id);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Deletion: borrow, merge, root collapse
    // ------------------------------------------------------------------

    /// Restore minimum occupancy at a deficient non-root node.
    ///
    /// Tries to borrow from the left sibling, then the right; otherwise
    /// merges (preferring the left) and recurses on the parent when the
    /// removed separator left it deficient in turn.
    fn rebalance(&mut self, node_id: NodeId) {
        let parent_id = self
            .arena
            .node(node_id)
            .parent()
            .expect("deficient node is never the root");
        let (pos, left_sibling, right_sibling) = {
            let parent = self.arena.internal(parent_id);
            let pos = parent.position_of(node_id);
            let left = if pos > 0 {
                Some(parent.children[pos - 1])
            } else {
                None
            };
            let right = if pos + 1 < parent.children.len() {
                Some(parent.children[pos + 1])
            } else {
                None
            };
            (pos, left, right)
        };
        let is_leaf = self.arena.node(node_id).is_leaf();

        if let Some(left_id) = left_sibling {
            if self.can_lend(left_id) {
                if is_leaf {
                    self.borrow_leaf_from_left(node_id, left_id, parent_id, pos);
                } else {
                    self.borrow_internal_from_left(node_id, left_id, parent_id, pos);
                }
                self.repair_separators(node_id);
                return;
            }
        }
        if let Some(right_id) = right_sibling {
            if self.can_lend(right_id) {
                if is_leaf {
                    self.borrow_leaf_from_right(node_id, right_id, parent_id, pos);
                } else {
                    self.borrow_internal_from_right(node_id, right_id, parent_id, pos);
                }
                self.repair_separators(node_id);
                return;
            }
        }

        // Neither sibling can lend: merge, preferring the left sibling.
        let survivor = match left_sibling {
            Some(left_id) => self.merge_into_left(left_id, node_id, parent_id, pos - 1),
            None => {
                let right_id =
                    right_sibling.expect("a non-root parent holds at least two children");
                self.merge_into_left(node_id, right_id, parent_id, pos)
            }
        };

        // The parent lost a separator; it may collapse or turn deficient.
        if parent_id == self.root {
            if self.arena.internal(parent_id).keys.is_empty() {
                let sole_child = self.arena.internal(parent_id).children[0];
                self.arena.node_mut(sole_child).set_parent(None);
                self.arena.free(parent_id);
                self.root = sole_child;
            }
            return;
        }
        self.repair_separators(survivor);
        if self.arena.internal(parent_id).is_deficient(self.order) {
            self.rebalance(parent_id);
        }
    }

    /// Whether the sibling at `id` may lend one entry and stay legal.
    fn can_lend(&self, id: NodeId) -> bool {
        match self.arena.node(id) {
            Node::Leaf(leaf) => leaf.can_lend(self.order),
            Node::Internal(internal) => internal.can_lend(self.order),
        }
    }

    /// Leaf borrow: the left sibling's last pair becomes this leaf's first.
    fn borrow_leaf_from_left(
        &mut self,
        node_id: NodeId,
        left_id: NodeId,
        parent_id: NodeId,
        pos: usize,
    ) {
        let (key, value) = {
            let left = self.arena.leaf_mut(left_id);
            let key = left.keys.pop().expect("lending leaf has keys");
            let value = left.values.pop().expect("lending leaf has values");
            (key, value)
        };
        {
            let node = self.arena.leaf_mut(node_id);
            node.keys.insert(0, key);
            node.values.insert(0, value);
        }
        let new_first = self.arena.leaf(node_id).keys[0].clone();
        self.arena.internal_mut(parent_id).keys[pos - 1] = new_first;
    }

    /// Leaf borrow: the right sibling's first pair becomes this leaf's
    /// last.
    fn borrow_leaf_from_right(
        &mut self,
        node_id: NodeId,
        right_id: NodeId,
        parent_id: NodeId,
        pos: usize,
    ) {
        let (key, value) = {
            let right = self.arena.leaf_mut(right_id);
            (right.keys.remove(0), right.values.remove(0))
        };
        {
            let node = self.arena.leaf_mut(node_id);
            node.keys.push(key);
            node.values.push(value);
        }
        let new_first = self.arena.leaf(right_id).keys[0].clone();
        self.arena.internal_mut(parent_id).keys[pos] = new_first;
    }

    /// Internal borrow: the parent separator rotates down, the left
    /// sibling's last key rotates up, its last child moves over.
    fn borrow_internal_from_left(
        &mut self,
        node_id: NodeId,
        left_id: NodeId,
        parent_id: NodeId,
        pos: usize,
    ) {
        let (moved_child, lifted_key) = {
            let left = self.arena.internal_mut(left_id);
            let child = left.children.pop().expect("lending node has children");
            let key = left.keys.pop().expect("lending node has keys");
            (child, key)
        };
        let lowered_key = std::mem::replace(
            &mut self.arena.internal_mut(parent_id).keys[pos - 1],
            lifted_key,
        );
        {
            let node = self.arena.internal_mut(node_id);
            node.keys.insert(0, lowered_key);
            node.children.insert(0, moved_child);
        }
        self.arena.node_mut(moved_child).set_parent(Some(node_id));
    }

    /// Internal borrow: the parent separator rotates down, the right
    /// sibling's first key rotates up, its first child moves over.
    fn borrow_internal_from_right(
        &mut self,
        node_id: NodeId,
        right_id: NodeId,
        parent_id: NodeId,
        pos: usize,
    ) {
        let (moved_child, lifted_key) = {
            let right = self.arena.internal_mut(right_id);
            (right.children.remove(0), right.keys.remove(0))
        };
        let lowered_key = std::mem::replace(
            &mut self.arena.internal_mut(parent_id).keys[pos],
            lifted_key,
        );
        {
            let node = self.arena.internal_mut(node_id);
            node.keys.push(lowered_key);
            node.children.push(moved_child);
        }
        self.arena.node_mut(moved_child).set_parent(Some(node_id));
    }

    /// Fuse the right sibling into the left and drop the separator at
    /// `sep_idx` (with its child pointer) from the parent.
    ///
    /// Leaf merges discard the separator (leaves keep all their data);
    /// internal merges pull it down between the fused key runs. Returns
    /// the surviving node.
    fn merge_into_left(
        &mut self,
        left_id: NodeId,
        right_id: NodeId,
        parent_id: NodeId,
        sep_idx: usize,
    ) -> NodeId {
        let separator = {
            let parent = self.arena.internal_mut(parent_id);
            let key = parent.keys.remove(sep_idx);
            parent.children.remove(sep_idx + 1);
            key
        };

        match self.arena.free(right_id) {
            Node::Leaf(right) => {
                let next = right.next;
                {
                    let left = self.arena.leaf_mut(left_id);
                    left.keys.extend(right.keys);
                    left.values.extend(right.values);
                    left.next = next;
                }
                if let Some(next_id) = next {
                    self.arena.leaf_mut(next_id).prev = Some(left_id);
                }
                // The separator was a copy of a leaf key; it dies here.
                drop(separator);
            }
            Node::Internal(right) => {
                let moved_children = right.children.clone();
                {
                    let left = self.arena.internal_mut(left_id);
                    left.keys.push(separator);
                    left.keys.extend(right.keys);
                    left.children.extend(right.children);
                }
                for child in moved_children {
                    self.arena.node_mut(child).set_parent(Some(left_id));
                }
            }
        }
        left_id
    }

    // ------------------------------------------------------------------
    // Separator maintenance
    // ------------------------------------------------------------------

    /// Walk the ancestor chain and refresh every separator guarding the
    /// climbing node with its subtree's current minimum.
    ///
    /// Recurses unconditionally to the root. The subtree under `node_id`
    /// must be non-empty.
    fn repair_separators(&mut self, mut node_id: NodeId) {
        while let Some(parent_id) = self.arena.node(node_id).parent() {
            let pos = self.arena.internal(parent_id).position_of(node_id);
            if pos > 0 {
                let min = self.subtree_min(node_id);
                self.arena.internal_mut(parent_id).keys[pos - 1] = min;
            }
            node_id = parent_id;
        }
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    /// Verify every structural invariant by a full traversal.
    ///
    /// ## Output
    /// - `Ok(())` when the tree is structurally sound
    /// - `Err(LeafError::InvariantViolation)` naming the first violation
    ///
    /// Checks leaf depth uniformity, root shape, occupancy bounds, key
    /// ordering within and across nodes, separator consistency, parent
    /// back-references, and the doubly-linked leaf chain.
    pub fn validate(&self) -> LeafResult<()> {
        if self.arena.node(self.root).parent().is_some() {
            return Err(violation("root has a parent reference"));
        }
        if let Node::Internal(internal) = self.arena.node(self.root) {
            if internal.children.len() < 2 {
                return Err(violation("internal root has fewer than two children"));
            }
        }

        let mut leaf_depth = None;
        let mut pairs = 0;
        self.check_subtree(self.root, 0, None, None, &mut leaf_depth, &mut pairs)?;
        if pairs != self.len {
            return Err(violation(format!(
                "traversal found {} pairs but len is {}",
                pairs, self.len
            )));
        }
        self.check_leaf_chain()
    }

    /// Recursive structural check with key-range bounds `[lo, hi)`.
    fn check_subtree(
        &self,
        id: NodeId,
        depth: usize,
        lo: Option<&K>,
        hi: Option<&K>,
        leaf_depth: &mut Option<usize>,
        pairs: &mut usize,
    ) -> LeafResult<()> {
        match self.arena.node(id) {
            Node::Leaf(leaf) => {
                if leaf.keys.len() != leaf.values.len() {
                    return Err(violation("leaf key and value counts differ"));
                }
                if !strictly_ascending(&leaf.keys) {
                    return Err(violation("leaf keys not strictly ascending"));
                }
                if leaf.keys.len() > self.order.max_keys() {
                    return Err(violation("leaf above maximum occupancy"));
                }
                if id != self.root && leaf.keys.len() < self.order.min_leaf_keys() {
                    return Err(violation("non-root leaf below minimum occupancy"));
                }
                for key in &leaf.keys {
                    if lo.is_some_and(|lo| key < lo) {
                        return Err(violation("leaf key below its subtree's lower bound"));
                    }
                    if hi.is_some_and(|hi| key >= hi) {
                        return Err(violation("leaf key at or above its subtree's upper bound"));
                    }
                }
                match *leaf_depth {
                    None => *leaf_depth = Some(depth),
                    Some(expected) if expected != depth => {
                        return Err(violation("leaves at differing depths"));
                    }
                    _ => {}
                }
                *pairs += leaf.keys.len();
            }
            Node::Internal(internal) => {
                if internal.children.len() != internal.keys.len() + 1 {
                    return Err(violation("internal child count is not keys + 1"));
                }
                if !strictly_ascending(&internal.keys) {
                    return Err(violation("internal keys not strictly ascending"));
                }
                if internal.keys.len() > self.order.max_keys() {
                    return Err(violation("internal node above maximum occupancy"));
                }
                if id != self.root && internal.keys.len() < self.order.min_internal_keys() {
                    return Err(violation("non-root internal node below minimum occupancy"));
                }
                for (i, &child) in internal.children.iter().enumerate() {
                    if self.arena.node(child).parent() != Some(id) {
                        return Err(violation("child's parent back-reference is wrong"));
                    }
                    let child_lo = if i == 0 { lo } else { Some(&internal.keys[i - 1]) };
                    let child_hi = if i == internal.keys.len() {
                        hi
                    } else {
                        Some(&internal.keys[i])
                    };
                    self.check_subtree(child, depth + 1, child_lo, child_hi, leaf_depth, pairs)?;
                }
                for (i, key) in internal.keys.iter().enumerate() {
                    if self.subtree_min(internal.children[i + 1]) != *key {
                        return Err(violation(
                            "separator does not equal its right subtree's minimum",
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// Walk the leaf chain checking links and cross-boundary ordering.
    fn check_leaf_chain(&self) -> LeafResult<()> {
        let first = self.first_leaf();
        if self.arena.leaf(first).prev.is_some() {
            return Err(violation("first leaf has a backward link"));
        }
        let mut current = first;
        let mut pairs = 0;
        loop {
            let leaf = self.arena.leaf(current);
            pairs += leaf.keys.len();
            let Some(next_id) = leaf.next else {
                break;
            };
            let next = self.arena.leaf(next_id);
            if next.prev != Some(current) {
                return Err(violation("backward link does not mirror forward link"));
            }
            if let (Some(last), Some(first_key)) = (leaf.keys.last(), next.keys.first()) {
                if last >= first_key {
                    return Err(violation("leaf chain not ascending across a boundary"));
                }
            }
            current = next_id;
        }
        if pairs != self.len {
            return Err(violation("leaf chain does not cover all live pairs"));
        }
        Ok(())
    }

}

impl<K, V> Index<K, V> for BPlusTree<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    fn get(&self, key: &K) -> Option<V> {
        BPlusTree::get(self, key).cloned()
    }

    fn range(&self, start: &K, end: &K) -> Vec<(K, V)> {
        BPlusTree::range(self, start, end)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        BPlusTree::insert(self, key, value)
    }

    fn delete(&mut self, key: &K) -> Option<V> {
        BPlusTree::delete(self, key)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (K, V)> + '_> {
        Box::new(BPlusTree::iter(self).map(|(k, v)| (k.clone(), v.clone())))
    }

    fn len(&self) -> usize {
        self.len
    }

    fn backend_type(&self) -> &'static str {
        "btree"
    }

    fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.arena.slot_bytes()
    }
}

/// Build an invariant-violation error.
fn violation(reason: impl Into<String>) -> LeafError {
    LeafError::InvariantViolation {
        reason: reason.into(),
    }
}

/// Strictly ascending check over a key slice.
fn strictly_ascending<K: Ord>(keys: &[K]) -> bool {
    keys.windows(2).all(|pair| pair[0] < pair[1])
}
