//! The network: owner of every node, the sweep order and the random source.

use crate::arena::{Arena, NodeId};
use crate::categorical::Categorical;
use crate::config::CONF;
use crate::continuous::ContinuousSampler;
use crate::dists::Family;
use crate::error::{NetError, Result};
use crate::node::{Node, Sampler, Variable};
use crate::rng::{NetRng, Random};

macro_rules! node_handle {
    ( $(#[$doc:meta])* struct $name:ident ) => {
        $(#[$doc])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        pub struct $name(NodeId);

        impl $name {
            pub fn id(self) -> NodeId {
                self.0
            }
        }

        impl From<$name> for NodeId {
            fn from(handle: $name) -> NodeId {
                handle.0
            }
        }
    };
    ( $(#[$doc:meta])* struct $name:ident: $($params:ident),* ) => {
        node_handle!($(#[$doc])* struct $name);

        impl VarNode for $name {}
        $( impl $params for $name {} )*
    };
}

/// Any sweepable variable.
pub trait VarNode: Into<NodeId> + Copy {}

/// Families parameterised by a mean and a deviation.
pub trait MeanAndDev: VarNode {}
/// Families parameterised by a lower and an upper bound.
pub trait MinAndMax: VarNode {}
/// Families parameterised by a single rate.
pub trait Lambda: VarNode {}
/// Families parameterised by two shape/rate values.
pub trait AlphaAndBeta: VarNode {}

node_handle!(
    /// A fixed value, used as weight or parameter.
    struct ConstNode
);
node_handle!(struct CatNode:);
node_handle!(struct NormalNode: MeanAndDev);
node_handle!(struct LogNormalNode: MeanAndDev);
node_handle!(struct ParetoNode:);
node_handle!(struct UniformDiscreteNode: MinAndMax);
node_handle!(struct UniformContinuousNode: MinAndMax);
node_handle!(struct PoissonNode: Lambda);
node_handle!(struct ExponentialNode: Lambda);
node_handle!(struct BetaNode: AlphaAndBeta);
node_handle!(
    /// Gamma variable, its second parameter is a rate unless the node was
    /// created as scale-parameterised.
    struct GammaNode: AlphaAndBeta
);

/// A probabilistic graphical model sampled by repeated sweeps.
///
/// Variables are swept in creation order. A sweep reads the current values of
/// the children of each variable, whether or not they were already updated
/// in the same sweep; only eventual revisiting matters for the chain.
pub struct Network<R: Random = NetRng> {
    arena: Arena,
    sample_nodes: Vec<NodeId>,
    const_one: ConstNode,
    rand: R,
}

impl Network<NetRng> {
    pub fn new(seed: u64) -> Network<NetRng> {
        Network::with_rng(NetRng::new(seed))
    }
}

impl Default for Network<NetRng> {
    fn default() -> Network<NetRng> {
        Network::new(CONF.seed)
    }
}

impl<R: Random> Network<R> {
    pub fn with_rng(rand: R) -> Network<R> {
        let mut arena = Arena::new();
        let const_one = ConstNode(arena.alloc(Node::constant(1.0)));
        Network {
            arena,
            sample_nodes: Vec::new(),
            const_one,
            rand,
        }
    }

    /// The built-in `1.0` constant, default weight of every new table row.
    pub fn def(&self) -> ConstNode {
        self.const_one
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rand
    }

    /// Number of variables visited by a sweep.
    pub fn len(&self) -> usize {
        self.sample_nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sample_nodes.is_empty()
    }

    // factories:

    pub fn new_const(&mut self, val: f64) -> ConstNode {
        ConstNode(self.arena.alloc(Node::constant(val)))
    }

    pub fn new_cat(&mut self, categories: usize) -> Result<CatNode> {
        let cat = Categorical::new(categories, self.const_one.0)?;
        let id = self.register(Sampler::Categorical(cat));
        log::debug!("new categorical {} with {} categories", id, categories);
        Ok(CatNode(id))
    }

    pub fn new_normal(&mut self, prior_mean: f64, prior_dev: f64) -> NormalNode {
        NormalNode(self.new_continuous(Family::Normal, prior_mean, prior_dev))
    }

    pub fn new_log_normal(&mut self, prior_mean: f64, prior_dev: f64) -> LogNormalNode {
        LogNormalNode(self.new_continuous(Family::LogNormal, prior_mean, prior_dev))
    }

    pub fn new_pareto(&mut self, prior_mean: f64, prior_dev: f64) -> ParetoNode {
        ParetoNode(self.new_continuous(Family::Pareto, prior_mean, prior_dev))
    }

    pub fn new_uniform_discrete(&mut self, prior_mean: f64, prior_dev: f64) -> UniformDiscreteNode {
        UniformDiscreteNode(self.new_continuous(Family::UniformDiscrete, prior_mean, prior_dev))
    }

    pub fn new_uniform_continuous(
        &mut self,
        prior_mean: f64,
        prior_dev: f64,
    ) -> UniformContinuousNode {
        UniformContinuousNode(self.new_continuous(Family::UniformContinuous, prior_mean, prior_dev))
    }

    pub fn new_poisson(&mut self, prior_mean: f64, prior_dev: f64) -> PoissonNode {
        PoissonNode(self.new_continuous(Family::Poisson, prior_mean, prior_dev))
    }

    pub fn new_exponential(&mut self, prior_mean: f64, prior_dev: f64) -> ExponentialNode {
        ExponentialNode(self.new_continuous(Family::Exponential, prior_mean, prior_dev))
    }

    pub fn new_beta(&mut self, prior_mean: f64, prior_dev: f64) -> BetaNode {
        BetaNode(self.new_continuous(Family::Beta, prior_mean, prior_dev))
    }

    /// When `scale_instead_of_rate` is set the second parameter of every row
    /// is read as a scale.
    pub fn new_gamma(
        &mut self,
        prior_mean: f64,
        prior_dev: f64,
        scale_instead_of_rate: bool,
    ) -> GammaNode {
        let family = Family::Gamma {
            scale: scale_instead_of_rate,
        };
        GammaNode(self.new_continuous(family, prior_mean, prior_dev))
    }

    fn new_continuous(&mut self, family: Family, prior_mean: f64, prior_dev: f64) -> NodeId {
        let sampler = ContinuousSampler::new(family, prior_mean, prior_dev, self.const_one.0);
        let id = self.register(Sampler::Continuous(sampler));
        log::debug!(
            "new {:?} variable {} (prior mean {}, deviation {})",
            family,
            id,
            prior_mean,
            prior_dev
        );
        id
    }

    fn register(&mut self, sampler: Sampler) -> NodeId {
        let id = self.arena.alloc(Node::variable(sampler));
        self.sample_nodes.push(id);
        id
    }

    // wiring:

    /// Make `parent` a categorical parent of `var`; the table grows to one row
    /// per parent configuration, new rows point to the default weight.
    pub fn add_cat_parent<V: VarNode>(&mut self, var: V, parent: CatNode) -> Result<()> {
        let default = self.const_one;
        self.add_cat_parent_with_default(var, parent, default)
    }

    pub fn add_cat_parent_with_default<V, W>(
        &mut self,
        var: V,
        parent: CatNode,
        default: W,
    ) -> Result<()>
    where
        V: VarNode,
        W: Into<NodeId>,
    {
        let (var, parent, default) = (var.into(), parent.0, default.into());
        self.categorical(parent)?;
        self.node(default)?;
        self.variable_mut(var)?.cat_parents.push(parent);
        self.arena[parent].on_new_child(var);
        let rows = self.arena.cat_count(var);
        self.variable_mut(var)?.table_mut().resize(rows, default);
        self.arena[default].on_new_child(var);
        log::debug!("{} is now a categorical parent of {}", parent, var);
        Ok(())
    }

    /// Assign the weight nodes of one table row of a categorical variable,
    /// exactly one per category.
    pub fn set_weights<W>(&mut self, cat: CatNode, row: usize, weights: &[W]) -> Result<()>
    where
        W: Into<NodeId> + Copy,
    {
        self.categorical(cat.0)?;
        let cells: Vec<NodeId> = weights.iter().map(|w| (*w).into()).collect();
        self.set_row(cat.0, row, &cells)
    }

    /// Like `set_weights`, creating one constant per value.
    pub fn set_cpt_row(&mut self, cat: CatNode, row: usize, weights: &[f64]) -> Result<()> {
        self.check_row(cat.0, row)?;
        let categories = self.categorical(cat.0)?.categories();
        if weights.len() != categories {
            return Err(NetError::WrongWeightCount {
                expected: categories,
                given: weights.len(),
            });
        }
        let cells: Vec<NodeId> = weights.iter().map(|w| self.new_const(*w).0).collect();
        self.set_row(cat.0, row, &cells)
    }

    pub fn set_mean_and_dev<V, M, D>(
        &mut self,
        var: V,
        row: usize,
        mean: M,
        dev: D,
    ) -> Result<()>
    where
        V: MeanAndDev,
        M: Into<NodeId>,
        D: Into<NodeId>,
    {
        self.set_row(var.into(), row, &[mean.into(), dev.into()])
    }

    pub fn set_alpha_and_m<A, M>(
        &mut self,
        var: ParetoNode,
        row: usize,
        alpha: A,
        m: M,
    ) -> Result<()>
    where
        A: Into<NodeId>,
        M: Into<NodeId>,
    {
        self.set_row(var.0, row, &[alpha.into(), m.into()])
    }

    pub fn set_min_and_max<V, A, B>(&mut self, var: V, row: usize, min: A, max: B) -> Result<()>
    where
        V: MinAndMax,
        A: Into<NodeId>,
        B: Into<NodeId>,
    {
        self.set_row(var.into(), row, &[min.into(), max.into()])
    }

    pub fn set_lambda<V, L>(&mut self, var: V, row: usize, lambda: L) -> Result<()>
    where
        V: Lambda,
        L: Into<NodeId>,
    {
        self.set_row(var.into(), row, &[lambda.into()])
    }

    pub fn set_alpha_and_beta<V, A, B>(
        &mut self,
        var: V,
        row: usize,
        alpha: A,
        beta: B,
    ) -> Result<()>
    where
        V: AlphaAndBeta,
        A: Into<NodeId>,
        B: Into<NodeId>,
    {
        self.set_row(var.into(), row, &[alpha.into(), beta.into()])
    }

    fn check_row(&self, var: NodeId, row: usize) -> Result<()> {
        self.variable(var)?;
        let rows = self.arena.cat_count(var);
        if row >= rows {
            return Err(NetError::RowOutOfRange { row, rows });
        }
        Ok(())
    }

    fn set_row(&mut self, var: NodeId, row: usize, cells: &[NodeId]) -> Result<()> {
        for cell in cells {
            self.node(*cell)?;
        }
        self.variable_mut(var)?.table_mut().set_row(row, cells)?;
        for cell in cells {
            self.arena[*cell].on_new_child(var);
        }
        Ok(())
    }

    fn node(&self, id: NodeId) -> Result<&Node> {
        self.arena.get(id).ok_or(NetError::UnknownNode(id))
    }

    fn variable(&self, id: NodeId) -> Result<&Variable> {
        self.node(id)?.as_variable().ok_or(NetError::NotVariable(id))
    }

    fn categorical(&self, id: NodeId) -> Result<&Categorical> {
        self.variable(id)?
            .as_categorical()
            .ok_or(NetError::NotCategorical(id))
    }

    fn variable_mut(&mut self, id: NodeId) -> Result<&mut Variable> {
        match self.arena.get_mut(id) {
            Some(node) => node.as_variable_mut().ok_or(NetError::NotVariable(id)),
            None => Err(NetError::UnknownNode(id)),
        }
    }

    // evidence and inspection:

    /// Pin a node to `val`; sweeps leave it untouched from now on.
    pub fn set_observed<N: Into<NodeId>>(&mut self, node: N, val: f64) -> Result<()> {
        let id = node.into();
        if let Some(cat) = self.node(id)?.as_variable().and_then(Variable::as_categorical) {
            let valid = val >= 0.0 && val.fract() == 0.0 && (val as usize) < cat.categories();
            if !valid {
                return Err(NetError::ObservationOutOfRange { node: id, value: val });
            }
        }
        self.arena[id].observe(val);
        log::debug!("{} observed at {}", id, val);
        Ok(())
    }

    /// # Panics
    /// If `node` was created by another, larger network.
    pub fn is_observed<N: Into<NodeId>>(&self, node: N) -> bool {
        self.arena[node.into()].is_observed()
    }

    /// # Panics
    /// If `node` was created by another, larger network.
    pub fn current_value<N: Into<NodeId>>(&self, node: N) -> f64 {
        self.arena.current_value(node.into())
    }

    pub fn categories(&self, cat: CatNode) -> usize {
        self.arena.categories(cat.0)
    }

    /// Number of parent configurations (table rows) of a variable.
    pub fn cat_count<V: VarNode>(&self, var: V) -> usize {
        self.arena.cat_count(var.into())
    }

    pub fn current_cat_index<V: VarNode>(&self, var: V) -> usize {
        self.arena.current_cat_index(var.into())
    }

    /// Likelihood of `x` under the variable's distribution given the current
    /// values of its parents and parameters.
    pub fn likelihood<V: VarNode>(&self, var: V, x: f64) -> f64 {
        self.arena.likelihood(var.into(), x)
    }

    pub fn family<V: VarNode>(&self, var: V) -> Option<Family> {
        self.continuous(var.into()).map(ContinuousSampler::family)
    }

    /// Current proposal deviation of a Metropolis variable.
    pub fn deviation<V: VarNode>(&self, var: V) -> Option<f64> {
        self.continuous(var.into()).map(ContinuousSampler::deviation)
    }

    /// Sweeps accumulated in the proposal statistics of a Metropolis variable.
    pub fn sample_count<V: VarNode>(&self, var: V) -> Option<u32> {
        self.continuous(var.into()).map(ContinuousSampler::sample_count)
    }

    fn continuous(&self, id: NodeId) -> Option<&ContinuousSampler> {
        self.arena.variable(id).and_then(Variable::as_continuous)
    }

    // sampling:

    /// One sweep: every variable is resampled once, in creation order.
    pub fn sample(&mut self) {
        for id in &self.sample_nodes {
            self.arena.sample(*id, &mut self.rand);
        }
    }

    pub fn burn_in(&mut self, sweeps: usize) {
        log::debug!(
            "burning in {} sweeps over {} variables ({} nodes)",
            sweeps,
            self.len(),
            self.arena.len()
        );
        for _ in 0..sweeps {
            self.sample();
        }
    }
}
