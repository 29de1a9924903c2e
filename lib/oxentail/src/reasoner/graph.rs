//! Relation graphs shared by the rules.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A directed graph with insertion-ordered nodes, queried for reachability.
pub(crate) struct Hierarchy<N> {
    nodes: Vec<N>,
    ids: FxHashMap<N, usize>,
    successors: Vec<Vec<usize>>,
}

impl<N: Clone + Eq + Hash> Hierarchy<N> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            ids: FxHashMap::default(),
            successors: Vec::new(),
        }
    }

    fn id(&mut self, node: &N) -> usize {
        if let Some(id) = self.ids.get(node) {
            return *id;
        }
        let id = self.nodes.len();
        self.nodes.push(node.clone());
        self.ids.insert(node.clone(), id);
        self.successors.push(Vec::new());
        id
    }

    pub fn add_edge(&mut self, from: &N, to: &N) {
        let from = self.id(from);
        let to = self.id(to);
        if !self.successors[from].contains(&to) {
            self.successors[from].push(to);
        }
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Nodes reachable from `from` through at least one edge, in breadth-first order.
    ///
    /// `from` itself is only returned if it lies on a cycle.
    pub fn reachable(&self, from: &N) -> Vec<&N> {
        let Some(start) = self.ids.get(from) else {
            return Vec::new();
        };
        let mut visited = vec![false; self.nodes.len()];
        let mut queue = self.successors[*start].clone();
        let mut reached = Vec::new();
        let mut i = 0;
        while let Some(&id) = queue.get(i) {
            i += 1;
            if visited[id] {
                continue;
            }
            visited[id] = true;
            reached.push(&self.nodes[id]);
            queue.extend(self.successors[id].iter().filter(|s| !visited[**s]));
        }
        reached
    }

    /// Every `(a, b)` such that `b` is reachable from `a` and `a != b`.
    pub fn closure(&self) -> impl Iterator<Item = (&N, &N)> {
        self.nodes.iter().flat_map(move |a| {
            self.reachable(a)
                .into_iter()
                .filter(move |b| *b != a)
                .map(move |b| (a, b))
        })
    }
}

/// Disjoint sets with insertion-ordered members, for equivalence relations.
pub(crate) struct UnionFind<N> {
    nodes: Vec<N>,
    ids: FxHashMap<N, usize>,
    parents: Vec<usize>,
    sizes: Vec<usize>,
}

impl<N: Clone + Eq + Hash> UnionFind<N> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            ids: FxHashMap::default(),
            parents: Vec::new(),
            sizes: Vec::new(),
        }
    }

    fn id(&mut self, node: &N) -> usize {
        if let Some(id) = self.ids.get(node) {
            return *id;
        }
        let id = self.nodes.len();
        self.nodes.push(node.clone());
        self.ids.insert(node.clone(), id);
        self.parents.push(id);
        self.sizes.push(1);
        id
    }

    fn root(&self, mut id: usize) -> usize {
        while self.parents[id] != id {
            id = self.parents[id];
        }
        id
    }

    /// Puts all of `group` in the same set.
    pub fn union_all<'a>(&mut self, group: impl IntoIterator<Item = &'a N>)
    where
        N: 'a,
    {
        let mut group = group.into_iter();
        let Some(first) = group.next() else {
            return;
        };
        let first = self.id(first);
        for other in group {
            let other = self.id(other);
            self.union_ids(first, other);
        }
    }

    pub fn union(&mut self, a: &N, b: &N) {
        let a = self.id(a);
        let b = self.id(b);
        self.union_ids(a, b);
    }

    fn union_ids(&mut self, a: usize, b: usize) {
        let (a, b) = (self.root(a), self.root(b));
        if a == b {
            return;
        }
        let (big, small) = if self.sizes[a] >= self.sizes[b] {
            (a, b)
        } else {
            (b, a)
        };
        self.parents[small] = big;
        self.sizes[big] += self.sizes[small];
    }

    pub fn same(&self, a: &N, b: &N) -> bool {
        match (self.ids.get(a), self.ids.get(b)) {
            (Some(a), Some(b)) => self.root(*a) == self.root(*b),
            _ => a == b,
        }
    }

    /// The members of the set of `node`, itself included, in insertion order.
    ///
    /// A node never added is alone in its set.
    pub fn group_of<'a>(&'a self, node: &'a N) -> Vec<&'a N> {
        let Some(id) = self.ids.get(node) else {
            return vec![node];
        };
        let root = self.root(*id);
        (0..self.nodes.len())
            .filter(|i| self.root(*i) == root)
            .map(|i| &self.nodes[i])
            .collect()
    }

    /// All the sets with at least two members.
    pub fn groups(&self) -> Vec<Vec<&N>> {
        let mut groups = FxHashMap::<usize, Vec<&N>>::default();
        let mut roots = Vec::new();
        for (i, node) in self.nodes.iter().enumerate() {
            let root = self.root(i);
            let group = groups.entry(root).or_default();
            if group.is_empty() {
                roots.push(root);
            }
            group.push(node);
        }
        roots
            .into_iter()
            .filter_map(|root| groups.remove(&root))
            .filter(|group| group.len() > 1)
            .collect()
    }
}
