//! Fluent builder for constructing a [`Sim`].

use log::debug;

use cc_agent::AgentStoreBuilder;
use cc_behavior::{InfectionRule, SentenceSampler, SexPairRule, TransmissionTable};
use cc_core::{AgentId, ModelParams, MonthClock, Race, Sentence, Sex, SimRng};
use cc_network::{ContactNetwork, ErdosRenyi};

use crate::{DataCollector, RandomActivation, Sim, SimError, SimResult};

/// Which G(n, p) generator builds the network.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum NetworkModel {
    /// One coin per pair.
    #[default]
    Dense,
    /// Geometric skipping; faster for large sparse populations.
    Sparse,
}

/// Fluent builder for [`Sim<R>`].
///
/// # Construction order
///
/// All randomness comes from one [`SimRng`] seeded with `params.seed`, drawn
/// in this order:
///
/// 1. network ties
/// 2. agent sexes
/// 3. the shared sentence
/// 4. the initial outbreak
///
/// Supplying any of these explicitly skips its draws.
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                  |
/// |--------------------------|------------------------------------------|
/// | `.network(n)`            | G(n, avg_degree / n)                     |
/// | `.network_model(m)`      | `NetworkModel::Dense`                    |
/// | `.sexes(v)`              | uniform draws                            |
/// | `.sentence(s)`           | Gamma–Poisson draw for `params.race`     |
/// | `.initial_outbreak(v)`   | `min(outbreak, n)` nodes without replacement |
/// | `.infection_rule(r)`     | `SexPairRule` with the default table     |
///
/// # Example
///
/// ```rust
/// use cc_core::ModelParams;
/// use cc_sim::SimBuilder;
///
/// let mut sim = SimBuilder::new(ModelParams::default())
///     .race_label("white")?
///     .build()?;
/// sim.run(24);
/// assert_eq!(sim.collector().len(), 25);
/// # Ok::<(), cc_sim::SimError>(())
/// ```
pub struct SimBuilder<R: InfectionRule = SexPairRule> {
    params:        ModelParams,
    network:       Option<ContactNetwork>,
    network_model: NetworkModel,
    sexes:         Option<Vec<Sex>>,
    sentence:      Option<Sentence>,
    outbreak:      Option<Vec<AgentId>>,
    rule:          R,
}

impl SimBuilder<SexPairRule> {
    pub fn new(params: ModelParams) -> Self {
        Self {
            params,
            network:       None,
            network_model: NetworkModel::Dense,
            sexes:         None,
            sentence:      None,
            outbreak:      None,
            rule:          SexPairRule::default(),
        }
    }

    /// Use the sex-pair rule with a custom probability table.
    pub fn transmission(mut self, table: TransmissionTable) -> Self {
        self.rule = SexPairRule::new(table);
        self
    }
}

impl<R: InfectionRule> SimBuilder<R> {
    /// Set the race category from its label.
    ///
    /// Fails immediately with a configuration error for anything but
    /// `"black"` / `"white"`, before any part of the model is built.
    pub fn race_label(mut self, label: &str) -> SimResult<Self> {
        self.params.race = label.parse()?;
        Ok(self)
    }

    pub fn race(mut self, race: Race) -> Self {
        self.params.race = race;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.params.seed = seed;
        self
    }

    /// Replace the infection rule.
    pub fn infection_rule<R2: InfectionRule>(self, rule: R2) -> SimBuilder<R2> {
        SimBuilder {
            params:        self.params,
            network:       self.network,
            network_model: self.network_model,
            sexes:         self.sexes,
            sentence:      self.sentence,
            outbreak:      self.outbreak,
            rule,
        }
    }

    /// Supply the contact network.  Its node count must equal
    /// `params.population_size`.
    pub fn network(mut self, network: ContactNetwork) -> Self {
        self.network = Some(network);
        self
    }

    pub fn network_model(mut self, model: NetworkModel) -> Self {
        self.network_model = model;
        self
    }

    /// Supply every agent's sex (length must equal `population_size`).
    pub fn sexes(mut self, sexes: Vec<Sex>) -> Self {
        self.sexes = Some(sexes);
        self
    }

    /// Fix the shared sentence instead of sampling it.
    pub fn sentence(mut self, sentence: Sentence) -> Self {
        self.sentence = Some(sentence);
        self
    }

    /// Seed these agents instead of a random outbreak.  Duplicates are
    /// harmless; out-of-range ids fail the build.
    pub fn initial_outbreak(mut self, agents: Vec<AgentId>) -> Self {
        self.outbreak = Some(agents);
        self
    }

    /// Validate inputs, draw the random components and return a ready-to-run
    /// [`Sim`] with its month-0 snapshot recorded.
    pub fn build(self) -> SimResult<Sim<R>> {
        let n = self.params.population_size;

        // ── Validate before anything is built ─────────────────────────────
        let sampler = SentenceSampler::new(self.params.race)?;
        if let Some(net) = &self.network {
            if net.node_count() != n {
                return Err(SimError::PopulationMismatch {
                    expected: n,
                    got:      net.node_count(),
                    what:     "network nodes",
                });
            }
        }
        if let Some(sexes) = &self.sexes {
            if sexes.len() != n {
                return Err(SimError::PopulationMismatch {
                    expected: n,
                    got:      sexes.len(),
                    what:     "sexes",
                });
            }
        }
        if let Some(seeds) = &self.outbreak {
            if let Some(&bad) = seeds.iter().find(|a| a.index() >= n) {
                return Err(SimError::OutbreakOutOfRange(bad));
            }
        }

        let mut rng = SimRng::new(self.params.seed);

        // ── 1. Network ────────────────────────────────────────────────────
        let network = match self.network {
            Some(net) => net,
            None => {
                let g = ErdosRenyi::with_mean_degree(n, self.params.avg_degree);
                match self.network_model {
                    NetworkModel::Dense  => g.generate(&mut rng),
                    NetworkModel::Sparse => g.generate_sparse(&mut rng),
                }
            }
        };

        // ── 2. Agents ─────────────────────────────────────────────────────
        let agents = match self.sexes {
            Some(sexes) => AgentStoreBuilder::new(n).sexes(sexes),
            None        => AgentStoreBuilder::new(n).draw_sexes(&mut rng),
        };

        // ── 3. Shared sentence ────────────────────────────────────────────
        let sentence = match self.sentence {
            Some(s) => s,
            None    => sampler.sample(&mut rng)?,
        };
        let mut agents = agents.build(sentence);

        // ── 4. Initial outbreak ───────────────────────────────────────────
        let seeds: Vec<AgentId> = match self.outbreak {
            Some(seeds) => seeds,
            None => rng
                .sample_indices(n, self.params.clamped_outbreak())
                .into_iter()
                .map(|i| AgentId(i as u32))
                .collect(),
        };
        for agent in seeds {
            agents.convict(agent);
        }

        let initial = agents.counts();
        debug!(
            "built {} agents, {} ties, race {}, sentence {}; month 0: {}",
            n,
            network.edge_count(),
            self.params.race,
            sentence,
            initial
        );

        Ok(Sim {
            params:    self.params,
            clock:     MonthClock::new(),
            network,
            scheduler: RandomActivation::new(n),
            collector: DataCollector::new(initial),
            agents,
            rule:      self.rule,
            rng,
        })
    }
}
