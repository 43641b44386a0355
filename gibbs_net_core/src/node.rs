//! Nodes, variables and the operations shared by every variable kind.

use smallvec::SmallVec;

use crate::arena::{Arena, NodeId};
use crate::categorical::{self, Categorical};
use crate::continuous::{self, ContinuousSampler};
use crate::error::{NetError, Result};
use crate::rng::Random;

/// Value holder with an observation override.
///
/// A pinned node reports the observed value and is skipped by sweeps.
pub(crate) struct Node {
    observed: bool,
    observed_value: f64,
    kind: NodeKind,
}

pub(crate) enum NodeKind {
    Constant(f64),
    Variable(Variable),
}

impl Node {
    pub fn constant(val: f64) -> Node {
        Node {
            observed: false,
            observed_value: 0.0,
            kind: NodeKind::Constant(val),
        }
    }

    pub fn variable(sampler: Sampler) -> Node {
        Node {
            observed: false,
            observed_value: 0.0,
            kind: NodeKind::Variable(Variable {
                cat_parents: SmallVec::new(),
                children: SmallVec::new(),
                sampler,
            }),
        }
    }

    #[inline]
    pub fn is_observed(&self) -> bool {
        self.observed
    }

    pub fn observe(&mut self, val: f64) {
        self.observed = true;
        self.observed_value = val;
    }

    #[inline]
    pub fn value(&self) -> f64 {
        if self.observed {
            self.observed_value
        } else {
            self.state_value()
        }
    }

    /// The sampler's own state, ignoring any observation.
    #[inline]
    pub fn state_value(&self) -> f64 {
        match &self.kind {
            NodeKind::Constant(val) => *val,
            NodeKind::Variable(var) => var.sampler.state(),
        }
    }

    #[inline]
    pub fn set_state(&mut self, val: f64) {
        if let NodeKind::Variable(var) = &mut self.kind {
            var.sampler.set_state(val);
        }
    }

    /// Constants have no Markov blanket, so they drop the link.
    pub fn on_new_child(&mut self, child: NodeId) {
        if let NodeKind::Variable(var) = &mut self.kind {
            if !var.children.contains(&child) {
                var.children.push(child);
            }
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match &self.kind {
            NodeKind::Variable(var) => Some(var),
            NodeKind::Constant(_) => None,
        }
    }

    pub fn as_variable_mut(&mut self) -> Option<&mut Variable> {
        match &mut self.kind {
            NodeKind::Variable(var) => Some(var),
            NodeKind::Constant(_) => None,
        }
    }
}

pub(crate) struct Variable {
    /// categorical parents in registration order, they address the table rows
    pub cat_parents: SmallVec<[NodeId; 4]>,
    pub children: SmallVec<[NodeId; 4]>,
    pub sampler: Sampler,
}

impl Variable {
    pub fn as_categorical(&self) -> Option<&Categorical> {
        match &self.sampler {
            Sampler::Categorical(cat) => Some(cat),
            Sampler::Continuous(_) => None,
        }
    }

    pub fn as_continuous(&self) -> Option<&ContinuousSampler> {
        match &self.sampler {
            Sampler::Continuous(cont) => Some(cont),
            Sampler::Categorical(_) => None,
        }
    }

    pub fn as_continuous_mut(&mut self) -> Option<&mut ContinuousSampler> {
        match &mut self.sampler {
            Sampler::Continuous(cont) => Some(cont),
            Sampler::Categorical(_) => None,
        }
    }

    pub fn table_mut(&mut self) -> &mut CondTable {
        match &mut self.sampler {
            Sampler::Categorical(cat) => cat.table_mut(),
            Sampler::Continuous(cont) => cont.table_mut(),
        }
    }
}

pub(crate) enum Sampler {
    Categorical(Categorical),
    Continuous(ContinuousSampler),
}

impl Sampler {
    #[inline]
    fn state(&self) -> f64 {
        match self {
            Sampler::Categorical(cat) => cat.value() as f64,
            Sampler::Continuous(cont) => cont.current_mean(),
        }
    }

    #[inline]
    fn set_state(&mut self, val: f64) {
        match self {
            Sampler::Categorical(cat) => cat.set_value(val as usize),
            Sampler::Continuous(cont) => cont.set_current_mean(val),
        }
    }
}

/// Rows of node references addressed by the configuration of the
/// categorical parents; each row holds `width` entries.
#[derive(Debug)]
pub(crate) struct CondTable {
    width: usize,
    cells: Vec<NodeId>,
}

impl CondTable {
    pub fn new(width: usize, default: NodeId) -> CondTable {
        CondTable {
            width,
            cells: vec![default; width],
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len() / self.width
    }

    /// Grow to `rows` rows, new cells point to `default`.
    pub fn resize(&mut self, rows: usize, default: NodeId) {
        self.cells.resize(self.width * rows, default);
    }

    pub fn set_row(&mut self, row: usize, cells: &[NodeId]) -> Result<()> {
        let rows = self.rows();
        if row >= rows {
            return Err(NetError::RowOutOfRange { row, rows });
        }
        if cells.len() != self.width {
            return Err(NetError::WrongWeightCount {
                expected: self.width,
                given: cells.len(),
            });
        }
        let base = row * self.width;
        self.cells[base..base + self.width].copy_from_slice(cells);
        Ok(())
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[NodeId] {
        let base = row * self.width;
        &self.cells[base..base + self.width]
    }
}

impl Arena {
    #[inline]
    pub fn current_value(&self, id: NodeId) -> f64 {
        self[id].value()
    }

    /// Number of categories of a categorical variable, zero for anything else.
    pub fn categories(&self, id: NodeId) -> usize {
        self.variable(id)
            .and_then(Variable::as_categorical)
            .map(Categorical::categories)
            .unwrap_or(0)
    }

    /// Product of the categories of all the categorical parents.
    pub fn cat_count(&self, id: NodeId) -> usize {
        match self.variable(id) {
            Some(var) => var
                .cat_parents
                .iter()
                .map(|p| self.categories(*p))
                .product(),
            None => 1,
        }
    }

    /// Mixed-radix index of the current parent configuration, parents in
    /// registration order with the first one as the least significant digit.
    pub fn current_cat_index(&self, id: NodeId) -> usize {
        let var = match self.variable(id) {
            Some(var) => var,
            None => return 0,
        };
        let mut mult = 1;
        let mut index = 0;
        for parent in &var.cat_parents {
            let val = self.current_value(*parent) as usize;
            let categories = self.categories(*parent);
            debug_assert!(categories > 0 && val < categories);
            index += mult * val;
            mult *= categories;
        }
        index
    }

    /// Likelihood of `x` under the variable's own conditional distribution,
    /// given the current values of its parents.
    pub fn likelihood(&self, id: NodeId, x: f64) -> f64 {
        match self.variable(id).map(|var| &var.sampler) {
            Some(Sampler::Categorical(cat)) => cat.likelihood(self, id, x),
            Some(Sampler::Continuous(cont)) => cont.likelihood(self, id, x),
            // constants are never registered as children
            None => 1.0,
        }
    }

    /// Resample a single variable; no-op for observed nodes and constants.
    pub fn sample<R: Random + ?Sized>(&mut self, id: NodeId, rand: &mut R) {
        if self[id].is_observed() {
            return;
        }
        let is_categorical = match self.variable(id) {
            Some(var) => matches!(var.sampler, Sampler::Categorical(_)),
            None => return,
        };
        if is_categorical {
            categorical::sample(self, id, rand);
        } else {
            continuous::sample(self, id, rand);
        }
    }
}
