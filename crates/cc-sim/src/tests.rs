//! Integration tests for cc-sim.

use cc_agent::{IncarcerationState, StateCounts};
use cc_behavior::{InfectionRule, TransmissionTable};
use cc_core::{AgentId, CcError, Month, ModelParams, NodeId, Race, Sentence, Sex, SimRng};
use cc_network::{ContactNetwork, ContactNetworkBuilder};

use crate::{LogObserver, NetworkModel, Sim, SimBuilder, SimError, SimObserver, StepStats};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn params(population_size: usize, avg_degree: f64, outbreak: usize) -> ModelParams {
    ModelParams {
        population_size,
        avg_degree,
        initial_outbreak_size: outbreak,
        race: Race::Black,
        seed: 42,
    }
}

/// Path network 0 - 1 - 2 - ... - (n-1).
fn line_network(n: usize) -> ContactNetwork {
    let mut b = ContactNetworkBuilder::new(n);
    for i in 1..n as u32 {
        b.add_tie(NodeId(i - 1), NodeId(i)).unwrap();
    }
    b.build()
}

fn states(sim: &Sim<impl InfectionRule>) -> Vec<IncarcerationState> {
    sim.agents().states().to_vec()
}

/// Infects only female targets, always.
struct FemaleTargetsOnly;

impl InfectionRule for FemaleTargetsOnly {
    fn attempt(&self, _source: Sex, target: Sex, rng: &mut SimRng) -> bool {
        target == Sex::Female && rng.gen_bool(1.0)
    }
}

#[derive(Default)]
struct CountingObserver {
    starts:    Vec<Month>,
    ends:      Vec<(Month, StateCounts)>,
    run_ends:  usize,
}

impl SimObserver for CountingObserver {
    fn on_step_start(&mut self, month: Month) {
        self.starts.push(month);
    }

    fn on_step_end(&mut self, month: Month, _stats: &StepStats, counts: &StateCounts) {
        self.ends.push((month, *counts));
    }

    fn on_run_end(&mut self, _final_month: Month, _counts: &StateCounts) {
        self.run_ends += 1;
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn initial_snapshot_counts_outbreak() {
        let mut sim = SimBuilder::new(params(100, 3.0, 10)).build().unwrap();
        sim.run(0);
        assert_eq!(sim.month(), Month::ZERO);
        assert_eq!(
            sim.collector().latest(),
            StateCounts { incarcerated: 10, susceptible: 90, released: 0 }
        );
        assert_eq!(sim.collector().len(), 1);
    }

    #[test]
    fn outbreak_agents_start_with_zero_time_served() {
        let sim = SimBuilder::new(params(50, 3.0, 5)).build().unwrap();
        for v in sim.node_views() {
            if v.state == IncarcerationState::Incarcerated {
                assert_eq!(v.time_served, 0);
            }
        }
    }

    #[test]
    fn empty_population() {
        let mut sim = SimBuilder::new(params(0, 3.0, 10)).build().unwrap();
        assert_eq!(sim.population_size(), 0);
        assert_eq!(sim.counts(), StateCounts::default());
        sim.run(5);
        assert!(sim.collector().snapshots().iter().all(|c| c.total() == 0));
        assert_eq!(sim.collector().len(), 6);
    }

    #[test]
    fn outbreak_larger_than_population_is_clamped() {
        let sim = SimBuilder::new(params(8, 2.0, 25)).build().unwrap();
        assert_eq!(sim.counts(), StateCounts { incarcerated: 8, susceptible: 0, released: 0 });
        assert!(states(&sim).iter().all(|&s| s == IncarcerationState::Incarcerated));
    }

    #[test]
    fn unsupported_race_label_fails_before_build() {
        let result = SimBuilder::new(params(100, 3.0, 10)).race_label("purple");
        assert!(matches!(
            result,
            Err(SimError::Core(CcError::UnsupportedRace(ref label))) if label == "purple"
        ));
    }

    #[test]
    fn race_label_sets_category() {
        let sim = SimBuilder::new(params(10, 3.0, 1))
            .race_label("white")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(sim.params.race, Race::White);
    }

    #[test]
    fn network_size_mismatch_errors() {
        let result = SimBuilder::new(params(5, 3.0, 1)).network(line_network(4)).build();
        assert!(matches!(result, Err(SimError::PopulationMismatch { expected: 5, got: 4, .. })));
    }

    #[test]
    fn sexes_length_mismatch_errors() {
        let result = SimBuilder::new(params(3, 3.0, 1)).sexes(vec![Sex::Male; 2]).build();
        assert!(matches!(result, Err(SimError::PopulationMismatch { what: "sexes", .. })));
    }

    #[test]
    fn explicit_outbreak_out_of_range_errors() {
        let result = SimBuilder::new(params(3, 3.0, 1))
            .initial_outbreak(vec![AgentId(0), AgentId(3)])
            .build();
        assert_eq!(result.err(), Some(SimError::OutbreakOutOfRange(AgentId(3))));
    }

    #[test]
    fn explicit_outbreak_seeds_chosen_agents() {
        let sim = SimBuilder::new(params(6, 0.0, 0))
            .initial_outbreak(vec![AgentId(2), AgentId(4), AgentId(2)])
            .build()
            .unwrap();
        assert_eq!(sim.counts().incarcerated, 2);
        assert_eq!(sim.state(AgentId(2)), IncarcerationState::Incarcerated);
        assert_eq!(sim.state(AgentId(4)), IncarcerationState::Incarcerated);
        assert_eq!(sim.state(AgentId(0)), IncarcerationState::Susceptible);
    }

    #[test]
    fn fixed_sentence_is_shared() {
        let sim = SimBuilder::new(params(20, 3.0, 2)).sentence(Sentence(9)).build().unwrap();
        assert_eq!(sim.sentence(), Sentence(9));
        assert_eq!(sim.agents().sentence(), Sentence(9));
    }

    #[test]
    fn sparse_network_model_builds() {
        let sim = SimBuilder::new(params(500, 4.0, 10))
            .network_model(NetworkModel::Sparse)
            .build()
            .unwrap();
        assert_eq!(sim.network().node_count(), 500);
        assert_eq!(sim.counts().total(), 500);
    }
}

// ── Stepping ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn run_appends_one_snapshot_per_step() {
        let mut sim = SimBuilder::new(params(100, 3.0, 10)).build().unwrap();
        sim.run(12);
        assert_eq!(sim.month(), Month(12));
        assert_eq!(sim.collector().len(), 13);
        sim.step();
        assert_eq!(sim.month(), Month(13));
        assert_eq!(sim.collector().len(), 14);
    }

    #[test]
    fn counts_are_conserved_every_step() {
        let mut sim = SimBuilder::new(params(300, 5.0, 15))
            .transmission(TransmissionTable::uniform(0.2))
            .build()
            .unwrap();
        sim.run(48);
        for c in sim.collector().snapshots() {
            assert_eq!(c.total(), 300);
        }
    }

    #[test]
    fn step_stats_match_count_changes() {
        let mut sim = SimBuilder::new(params(300, 5.0, 15))
            .transmission(TransmissionTable::uniform(0.1))
            .sentence(Sentence(3))
            .build()
            .unwrap();
        for _ in 0..30 {
            let before = sim.counts();
            let stats = sim.step();
            let after = sim.counts();
            assert_eq!(before.susceptible - after.susceptible, stats.convictions);
            assert_eq!(after.released - before.released, stats.releases);
        }
    }

    #[test]
    fn released_is_absorbing() {
        let mut sim = SimBuilder::new(params(300, 5.0, 20))
            .transmission(TransmissionTable::uniform(0.3))
            .sentence(Sentence(2))
            .build()
            .unwrap();
        let mut prev = states(&sim);
        let mut saw_release = false;
        for _ in 0..40 {
            sim.step();
            let now = states(&sim);
            for (p, n) in prev.iter().zip(&now) {
                if *p == IncarcerationState::Released {
                    assert_eq!(*n, IncarcerationState::Released);
                    saw_release = true;
                }
                if *p == IncarcerationState::Incarcerated {
                    assert_ne!(*n, IncarcerationState::Susceptible);
                }
            }
            prev = now;
        }
        assert!(saw_release);
    }

    #[test]
    fn time_served_is_monotone_and_bounded() {
        let sentence = Sentence(4);
        let mut sim = SimBuilder::new(params(200, 4.0, 20))
            .transmission(TransmissionTable::uniform(0.2))
            .sentence(sentence)
            .build()
            .unwrap();
        let mut prev: Vec<_> = sim.node_views().collect();
        for _ in 0..30 {
            sim.step();
            let now: Vec<_> = sim.node_views().collect();
            for (p, n) in prev.iter().zip(&now) {
                if n.state == IncarcerationState::Incarcerated {
                    assert!(n.time_served <= sentence.months());
                    if p.state == IncarcerationState::Incarcerated {
                        assert!(n.time_served >= p.time_served);
                    }
                }
            }
            prev = now;
        }
    }

    #[test]
    fn release_timing_on_isolated_agent() {
        // One isolated agent with a 3-month sentence: serves months 1..=3,
        // released on its fourth turn.
        let mut sim = SimBuilder::new(params(1, 0.0, 1))
            .sentence(Sentence(3))
            .build()
            .unwrap();
        let a = AgentId(0);
        for expected in 1..=3 {
            sim.step();
            assert_eq!(sim.state(a), IncarcerationState::Incarcerated);
            assert_eq!(sim.agents().time_served(a), expected);
        }
        let stats = sim.step();
        assert_eq!(sim.state(a), IncarcerationState::Released);
        assert_eq!(stats.releases, 1);
        assert_eq!(sim.agents().time_served(a), 3);
    }

    #[test]
    fn zero_sentence_releases_after_first_step() {
        let mut sim = SimBuilder::new(params(10, 0.0, 4))
            .sentence(Sentence(0))
            .build()
            .unwrap();
        sim.step();
        assert_eq!(sim.counts(), StateCounts { incarcerated: 0, susceptible: 6, released: 4 });
    }

    #[test]
    fn zero_probability_keeps_susceptible_constant() {
        let mut sim = SimBuilder::new(params(200, 6.0, 20))
            .transmission(TransmissionTable::uniform(0.0))
            .build()
            .unwrap();
        sim.run(60);
        let susceptible = sim.collector().series("Susceptible").unwrap();
        assert!(susceptible.iter().all(|&s| s == 180));
    }

    #[test]
    fn certain_transmission_reaches_every_neighbour_in_one_step() {
        let mut sim = SimBuilder::new(params(200, 3.0, 5))
            .transmission(TransmissionTable::uniform(1.0))
            .sentence(Sentence(1))
            .build()
            .unwrap();
        for _ in 0..5 {
            let infectious: Vec<AgentId> = sim
                .agents()
                .agent_ids()
                .filter(|&a| sim.state(a).is_infectious())
                .collect();
            sim.step();
            for a in infectious {
                for b in sim.neighbors(a) {
                    assert_ne!(sim.state(b), IncarcerationState::Susceptible, "{a} -> {b}");
                }
            }
        }
    }

    #[test]
    fn convictions_are_visible_within_the_sweep() {
        // On a path seeded at one end, certain transmission convicts node 1
        // and then every later node whose left neighbour acted before it.
        // The incarcerated set is always a prefix of the path.
        let mut sim = SimBuilder::new(params(6, 0.0, 0))
            .network(line_network(6))
            .transmission(TransmissionTable::uniform(1.0))
            .sentence(Sentence(10))
            .initial_outbreak(vec![AgentId(0)])
            .build()
            .unwrap();
        sim.step();
        let s = states(&sim);
        assert_eq!(s[1], IncarcerationState::Incarcerated);
        let reached = s.iter().take_while(|&&x| x != IncarcerationState::Susceptible).count();
        assert!(reached >= 2);
        assert!(s[reached..].iter().all(|&x| x == IncarcerationState::Susceptible));
    }

    #[test]
    fn custom_rule_is_used() {
        let mut sim = SimBuilder::new(params(200, 6.0, 10))
            .infection_rule(FemaleTargetsOnly)
            .sentence(Sentence(5))
            .build()
            .unwrap();
        let susceptible_males = |sim: &Sim<FemaleTargetsOnly>| {
            sim.node_views()
                .filter(|v| v.sex == Sex::Male && v.state == IncarcerationState::Susceptible)
                .count()
        };
        let before = susceptible_males(&sim);
        sim.run(20);
        assert_eq!(susceptible_males(&sim), before);
    }

    #[test]
    fn released_agents_keep_transmitting() {
        // 0 - 1 with a zero sentence: agent 0 is released on its first turn
        // but still convicts agent 1 (same step or the next).
        let mut sim = SimBuilder::new(params(2, 0.0, 0))
            .network(line_network(2))
            .transmission(TransmissionTable::uniform(1.0))
            .sentence(Sentence(0))
            .initial_outbreak(vec![AgentId(0)])
            .build()
            .unwrap();
        sim.run(2);
        assert_eq!(sim.state(AgentId(0)), IncarcerationState::Released);
        assert_ne!(sim.state(AgentId(1)), IncarcerationState::Susceptible);
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism_tests {
    use super::*;

    #[test]
    fn same_seed_same_series() {
        let run = || {
            let mut sim = SimBuilder::new(params(250, 4.0, 10))
                .transmission(TransmissionTable::uniform(0.05))
                .build()
                .unwrap();
            sim.run(36);
            (sim.collector().snapshots().to_vec(), states(&sim), sim.sentence())
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn different_seed_different_network() {
        let a = SimBuilder::new(params(200, 4.0, 10)).seed(1).build().unwrap();
        let b = SimBuilder::new(params(200, 4.0, 10)).seed(2).build().unwrap();
        assert_ne!(a.network().edges(), b.network().edges());
    }
}

// ── Observers ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[test]
    fn observer_sees_every_step() {
        let mut sim = SimBuilder::new(params(50, 3.0, 5)).build().unwrap();
        let mut obs = CountingObserver::default();
        sim.run_observed(4, &mut obs);
        assert_eq!(obs.starts, vec![Month(0), Month(1), Month(2), Month(3)]);
        assert_eq!(obs.ends.len(), 4);
        assert_eq!(obs.ends[3].0, Month(4));
        assert_eq!(obs.ends[3].1, sim.counts());
        assert_eq!(obs.run_ends, 1);
    }

    #[test]
    fn log_observer_runs() {
        let mut sim = SimBuilder::new(params(50, 3.0, 5)).build().unwrap();
        sim.run_observed(6, &mut LogObserver::new(2));
        sim.run_observed(1, &mut LogObserver::new(0));
        assert_eq!(sim.month(), Month(7));
    }
}

// ── Read surface ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod read_surface_tests {
    use super::*;

    #[test]
    fn series_by_label() {
        let mut sim = SimBuilder::new(params(100, 3.0, 10)).build().unwrap();
        sim.run(3);
        let vars = sim.collector().model_vars();
        assert_eq!(vars.keys().copied().collect::<Vec<_>>(), vec!["Incarcerated", "Released", "Susceptible"]);
        assert_eq!(vars["Incarcerated"][0], 10);
        assert_eq!(sim.collector().series("Released").unwrap().len(), 4);
        assert!(sim.collector().series("Recovered").is_none());
        assert_eq!(sim.collector().at(Month(0)).unwrap().susceptible, 90);
        assert!(sim.collector().at(Month(4)).is_none());
    }

    #[test]
    fn neighbors_mirror_network() {
        let sim = SimBuilder::new(params(5, 0.0, 0)).network(line_network(5)).build().unwrap();
        assert_eq!(sim.neighbors(AgentId(2)).collect::<Vec<_>>(), vec![AgentId(1), AgentId(3)]);
        assert_eq!(sim.neighbors(AgentId(0)).collect::<Vec<_>>(), vec![AgentId(1)]);
    }

    #[test]
    fn node_views_cover_population() {
        let sim = SimBuilder::new(params(30, 3.0, 3))
            .sexes(vec![Sex::Female; 30])
            .build()
            .unwrap();
        let views: Vec<_> = sim.node_views().collect();
        assert_eq!(views.len(), 30);
        assert!(views.iter().enumerate().all(|(i, v)| v.id == AgentId(i as u32)));
        assert!(views.iter().all(|v| v.sex == Sex::Female));
        assert_eq!(sim.sex(AgentId(7)), Sex::Female);
    }

    #[test]
    fn checked_agent_lookup() {
        let sim = SimBuilder::new(params(3, 0.0, 0)).build().unwrap();
        assert!(sim.agent(AgentId(2)).is_ok());
        assert_eq!(
            sim.agent(AgentId(3)).unwrap_err(),
            SimError::Core(CcError::AgentNotFound(AgentId(3)))
        );
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scheduler_tests {
    use cc_core::{AgentId, SimRng};

    use crate::RandomActivation;

    #[test]
    fn each_order_is_a_permutation() {
        let mut sched = RandomActivation::new(40);
        let mut rng = SimRng::new(4);
        for _ in 0..5 {
            let mut order = sched.shuffle(&mut rng).to_vec();
            order.sort_unstable();
            assert_eq!(order, (0..40).map(AgentId).collect::<Vec<_>>());
        }
    }

    #[test]
    fn orders_differ_between_steps() {
        let mut sched = RandomActivation::new(50);
        let mut rng = SimRng::new(4);
        let first = sched.shuffle(&mut rng).to_vec();
        let second = sched.shuffle(&mut rng).to_vec();
        assert_ne!(first, second);
        assert_eq!(sched.last_order(), second.as_slice());
    }

    #[test]
    fn empty_scheduler() {
        let mut sched = RandomActivation::new(0);
        assert!(sched.shuffle(&mut SimRng::new(1)).is_empty());
        assert_eq!(sched.agent_count(), 0);
    }
}
