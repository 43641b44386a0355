//! Discrete variables driven by a conditional weight table, resampled with
//! an exact Gibbs step over their Markov blanket.

use smallvec::SmallVec;

use crate::arena::{Arena, NodeId};
use crate::error::{NetError, Result};
use crate::node::{CondTable, Variable};
use crate::rng::Random;

#[derive(Debug)]
pub(crate) struct Categorical {
    categories: usize,
    /// one row of `categories` weight nodes per parent configuration
    weights: CondTable,
    value: usize,
}

impl Categorical {
    pub fn new(categories: usize, default_weight: NodeId) -> Result<Categorical> {
        if categories < 2 {
            return Err(NetError::TooFewCategories(categories));
        }
        Ok(Categorical {
            categories,
            weights: CondTable::new(categories, default_weight),
            value: 0,
        })
    }

    #[inline]
    pub fn categories(&self) -> usize {
        self.categories
    }

    #[inline]
    pub fn value(&self) -> usize {
        self.value
    }

    #[inline]
    pub fn set_value(&mut self, val: usize) {
        self.value = val;
    }

    pub fn table_mut(&mut self) -> &mut CondTable {
        &mut self.weights
    }

    /// Normalized weight of category `x` in the row selected by the parents.
    pub fn likelihood(&self, arena: &Arena, id: NodeId, x: f64) -> f64 {
        if x < 0.0 || x >= self.categories as f64 {
            return 0.0;
        }
        let row = self.weights.row(arena.current_cat_index(id));
        let sum: f64 = row.iter().map(|w| arena.current_value(*w)).sum();
        let num = arena.current_value(row[x as usize]);
        if num > 0.0 && sum > 0.0 {
            num / sum
        } else {
            0.0
        }
    }
}

/// Gibbs step: weight each category by its own table entry times the
/// likelihood every child assigns to its current value, then draw.
pub(crate) fn sample<R: Random + ?Sized>(arena: &mut Arena, id: NodeId, rand: &mut R) {
    let (categories, row) = match arena.variable(id).and_then(Variable::as_categorical) {
        Some(cat) => (cat.categories, arena.current_cat_index(id)),
        None => return,
    };

    let previous = arena[id].state_value();
    let mut probs: SmallVec<[f64; 8]> = SmallVec::with_capacity(categories);
    let mut sum = 0.0;
    for i in 0..categories {
        arena[id].set_state(i as f64);
        let prob = blanket_probability(arena, id, row, i);
        sum += prob;
        probs.push(prob);
    }
    arena[id].set_state(previous);

    if !(sum > 0.0) {
        log::trace!("degenerate blanket for {}, normalizer {}", id, sum);
    }

    let uni = rand.uniform();
    let mut cumulative = 0.0;
    let mut choice = categories - 1;
    for (i, prob) in probs.iter().enumerate() {
        cumulative += prob / sum;
        if cumulative >= uni {
            choice = i;
            break;
        }
    }
    arena[id].set_state(choice as f64);
}

fn blanket_probability(arena: &Arena, id: NodeId, row: usize, category: usize) -> f64 {
    let var = match arena.variable(id) {
        Some(var) => var,
        None => return 0.0,
    };
    let cat = match var.as_categorical() {
        Some(cat) => cat,
        None => return 0.0,
    };
    let mut prob = arena.current_value(cat.weights.row(row)[category]);
    for child in &var.children {
        prob *= arena.likelihood(*child, arena.current_value(*child));
    }
    prob
}
