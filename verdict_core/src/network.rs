//! Network - registry, cache and entropy source for one variant.
//!
//! Generation is recursive: a node's sequence needs the sequences of its
//! correlates (same length), which are fetched through the registry and
//! memoized on the way. An in-progress stack turns any cycle in the
//! correlation graph into a `CorrelationCycle` error instead of unbounded
//! recursion. The same stack bounds acyclic chains: a node more than
//! [`MAX_CORRELATION_DEPTH`] correlates away from the queried one fails with
//! `CorrelationTooDeep` before the thread stack runs out.
//!
//! Every `predict` owns a fresh `ChaCha8Rng` seeded from the node's seed.
//! No generator is shared between nodes, so the order in which unrelated
//! nodes are generated cannot change their sequences.

use crate::cache::{CacheStats, PredictionCache};
use crate::error::NetworkError;
use crate::node::{Node, NodeSpec};
use crate::outcome::{Decided, TernaryOutcome};
use crate::probability;
use crate::registry::Registry;
use crate::variant::{Binary, Ternary, Variant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};
use verdict_env::{EntropySource, OsEntropy, ProgressObserver};

/// Longest chain of correlates followed while generating one node.
pub const MAX_CORRELATION_DEPTH: usize = 256;

/// Network of binary decision-makers.
pub type BinaryNetwork = Network<Binary>;

/// Network of ternary decision-makers.
pub type TernaryNetwork = Network<Ternary>;

/// Correlate sequences resolved for one node: `(weight, sequence)`.
type Signals<O> = Vec<(f64, Arc<[O]>)>;

/// A simulation session for one variant.
///
/// Owns the registry, the prediction cache and the seed source. Not meant to
/// be shared between threads: every query takes `&mut self`.
pub struct Network<V: Variant> {
    registry: Registry<V>,
    cache: PredictionCache<V>,
    entropy: Box<dyn EntropySource>,
}

impl<V: Variant> Default for Network<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> std::fmt::Debug for Network<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Network")
            .field("variant", &V::NAME)
            .field("nodes", &self.registry.names())
            .field("cached", &self.cache.len())
            .field("entropy_seed", &self.entropy.seed())
            .finish()
    }
}

impl<V: Variant> Network<V> {
    /// Creates an empty network drawing missing seeds from OS entropy.
    pub fn new() -> Self {
        Self::with_entropy(OsEntropy::new())
    }

    /// Creates an empty network with a custom seed source.
    pub fn with_entropy(entropy: impl EntropySource + 'static) -> Self {
        Self {
            registry: Registry::new(),
            cache: PredictionCache::new(),
            entropy: Box::new(entropy),
        }
    }

    /// Builds a node from its spec and registers it.
    ///
    /// Registering an existing name replaces that node and drops the cached
    /// results of everything that depended on it.
    pub fn create(&mut self, spec: NodeSpec) -> Result<&Node<V>, NetworkError> {
        let entropy = &mut self.entropy;
        let node = Node::<V>::build(spec, || entropy.draw_seed())?;
        let name = node.name().to_string();

        debug!(variant = V::NAME, node = %name, seed = node.seed(), "Registering node");

        if self.registry.insert(node).is_some() {
            warn!(variant = V::NAME, node = %name, "Replacing existing node");
            self.invalidate_dependents(&name);
        }

        self.registry.resolve(&name)
    }

    /// Looks up a registered node.
    pub fn node(&self, name: &str) -> Result<&Node<V>, NetworkError> {
        self.registry.resolve(name)
    }

    pub fn registry(&self) -> &Registry<V> {
        &self.registry
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Returns the `len` predictions of node `name`.
    ///
    /// The same node and length always yield the same sequence. Sequences of
    /// different lengths are generated independently; a shorter one is not
    /// promised to be a prefix of a longer one.
    pub fn predict(&mut self, name: &str, len: usize) -> Result<Arc<[V::Outcome]>, NetworkError> {
        self.generate(name, len, &mut Vec::new(), None)
    }

    /// Returns the prediction at `index` of the `len`-long sequence.
    pub fn predict_at(
        &mut self,
        name: &str,
        index: usize,
        len: usize,
    ) -> Result<V::Outcome, NetworkError> {
        check_index(index, len)?;
        let sequence = self.predict(name, len)?;
        Ok(sequence[index])
    }

    /// Returns the distribution node `name` draws from at `index`, given a
    /// planned sequence length `len`, without drawing.
    pub fn probability_at(
        &mut self,
        name: &str,
        index: usize,
        len: usize,
    ) -> Result<V::Distribution, NetworkError> {
        check_index(index, len)?;
        if let Some(hit) = self.cache.distribution(name, len, index) {
            return Ok(hit);
        }

        let node = self.registry.resolve(name)?.clone();
        node.integrity_check()?;

        let mut stack = vec![node.name().to_string()];
        let signals = self.correlate_sequences(&node, len, &mut stack)?;
        let distribution = distribution_at(&node, index, &signals)?;

        self.cache.store_distribution(name, len, index, distribution);
        Ok(distribution)
    }

    /// Replaces the correlates of an existing node.
    ///
    /// Cached results of the node and of everything depending on it are
    /// dropped, so later queries never see stale sequences.
    pub fn set_correlates(
        &mut self,
        name: &str,
        correlates: BTreeMap<String, f64>,
    ) -> Result<(), NetworkError> {
        let node = self
            .registry
            .get_mut(name)
            .ok_or_else(|| NetworkError::unknown(name))?;
        node.replace_correlates(correlates)?;

        self.invalidate_dependents(name);
        Ok(())
    }

    /// Drops cached results of `name` and of its dependents.
    ///
    /// Returns the number of cache entries removed.
    pub fn invalidate(&mut self, name: &str) -> Result<usize, NetworkError> {
        self.registry.resolve(name)?;
        Ok(self.invalidate_dependents(name))
    }

    fn invalidate_dependents(&mut self, name: &str) -> usize {
        let removed: usize = self
            .registry
            .dependents_of(name)
            .iter()
            .map(|affected| self.cache.invalidate(affected))
            .sum();

        debug!(variant = V::NAME, node = %name, removed, "Invalidated cache entries");
        removed
    }

    fn generate(
        &mut self,
        name: &str,
        len: usize,
        stack: &mut Vec<String>,
        mut observer: Option<&mut dyn ProgressObserver>,
    ) -> Result<Arc<[V::Outcome]>, NetworkError> {
        if let Some(hit) = self.cache.sequence(name, len) {
            return Ok(hit);
        }

        if stack.iter().any(|visiting| visiting == name) {
            let mut path = stack.clone();
            path.push(name.to_string());
            return Err(NetworkError::CorrelationCycle(path));
        }
        if stack.len() >= MAX_CORRELATION_DEPTH {
            return Err(NetworkError::CorrelationTooDeep {
                node: name.to_string(),
                depth: MAX_CORRELATION_DEPTH,
            });
        }

        let node = self.registry.resolve(name)?.clone();
        node.integrity_check()?;

        stack.push(node.name().to_string());
        let signals = self.correlate_sequences(&node, len, stack);
        stack.pop();
        let signals = signals?;

        debug!(
            variant = V::NAME,
            node = %name,
            len,
            seed = node.seed(),
            correlates = signals.len(),
            "Generating sequence"
        );

        let mut rng = ChaCha8Rng::seed_from_u64(node.seed());
        if let Some(observer) = observer.as_deref_mut() {
            observer.begin(name, len);
        }

        let mut outcomes = Vec::with_capacity(len);
        for index in 0..len {
            let distribution = distribution_at(&node, index, &signals)?;
            outcomes.push(V::draw(&distribution, &mut rng));

            if let Some(observer) = observer.as_deref_mut() {
                observer.advance(name, index);
            }
        }

        if let Some(observer) = observer.as_deref_mut() {
            observer.finish(name);
        }

        let sequence: Arc<[V::Outcome]> = Arc::from(outcomes);
        self.cache.store_sequence(name, len, Arc::clone(&sequence));
        Ok(sequence)
    }

    fn correlate_sequences(
        &mut self,
        node: &Node<V>,
        len: usize,
        stack: &mut Vec<String>,
    ) -> Result<Signals<V::Outcome>, NetworkError> {
        let mut signals = Vec::with_capacity(node.correlates().len());

        for (correlate, weight) in node.correlates() {
            if !self.registry.contains(correlate) {
                return Err(NetworkError::UnknownCorrelate {
                    node: node.name().to_string(),
                    correlate: correlate.clone(),
                });
            }
            let sequence = self.generate(correlate, len, stack, None)?;
            signals.push((*weight, sequence));
        }

        Ok(signals)
    }
}

impl Network<Ternary> {
    /// Like [`Network::predict`], notifying `observer` for every generated
    /// position. Observers never change the generated values.
    pub fn predict_with_progress(
        &mut self,
        name: &str,
        len: usize,
        observer: &mut dyn ProgressObserver,
    ) -> Result<Arc<[TernaryOutcome]>, NetworkError> {
        self.generate(name, len, &mut Vec::new(), Some(observer))
    }

    /// Removes every node and every cached result.
    pub fn clear_registry(&mut self) {
        warn!(
            variant = Ternary::NAME,
            nodes = self.registry.len(),
            "Clearing registry"
        );
        self.registry.clear();
        self.cache.clear();
    }
}

fn check_index(index: usize, len: usize) -> Result<(), NetworkError> {
    if index >= len {
        return Err(NetworkError::IndexOutOfRange { index, len });
    }
    Ok(())
}

fn distribution_at<V: Variant>(
    node: &Node<V>,
    index: usize,
    signals: &Signals<V::Outcome>,
) -> Result<V::Distribution, NetworkError> {
    let psum = probability::aggregate(
        signals
            .iter()
            .map(|(weight, sequence)| (*weight, sequence[index].signal())),
    );

    let distribution = V::distribution(psum, node.calibration());
    if !V::is_drawable(&distribution) {
        return Err(NetworkError::NonFiniteProbability {
            node: node.name().to_string(),
            index,
        });
    }
    Ok(distribution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::outcome::Outcome;
    use approx::assert_relative_eq;
    use verdict_env::SEED_BOUND;

    /// Entropy source handing out 100, 101, 102, ...
    struct Counter(u64);

    impl EntropySource for Counter {
        fn draw_seed(&mut self) -> u64 {
            self.0 += 1;
            self.0 + 99
        }

        fn seed(&self) -> u64 {
            0
        }
    }

    #[derive(Default)]
    struct Recorder {
        begun: Vec<(String, usize)>,
        advanced: usize,
        finished: usize,
    }

    impl ProgressObserver for Recorder {
        fn begin(&mut self, node: &str, total: usize) {
            self.begun.push((node.to_string(), total));
        }

        fn advance(&mut self, _node: &str, _index: usize) {
            self.advanced += 1;
        }

        fn finish(&mut self, _node: &str) {
            self.finished += 1;
        }
    }

    fn panel() -> BinaryNetwork {
        let mut net = BinaryNetwork::new();
        net.create(NodeSpec::new("truth").seed(1)).unwrap();
        net.create(NodeSpec::new("ai").correlate("truth", 1.0).seed(2)).unwrap();
        net
    }

    #[test]
    fn test_empty_correlates_are_even() {
        let mut net = panel();
        for len in [1, 5, 50] {
            for index in 0..len {
                assert_eq!(net.probability_at("truth", index, len).unwrap(), 0.5);
            }
        }
    }

    #[test]
    fn test_probability_follows_correlate() {
        let mut net = panel();
        let truth = net.predict("truth", 20).unwrap();

        for (index, outcome) in truth.iter().enumerate() {
            let p = net.probability_at("ai", index, 20).unwrap();
            match outcome {
                Outcome::Positive => assert_relative_eq!(p, 2.0 / 3.0),
                Outcome::Negative => assert_relative_eq!(p, 1.0 / 3.0),
            }
        }
    }

    #[test]
    fn test_predict_is_reproducible_and_cached() {
        let mut net = panel();
        let first = net.predict("ai", 100).unwrap();
        let second = net.predict("ai", 100).unwrap();

        assert_eq!(first, second);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(net.cache_stats().hits >= 1);
    }

    #[test]
    fn test_same_seed_same_sequence_across_networks() {
        let mut a = panel();
        let mut b = panel();

        // Different query order must not matter
        b.predict("truth", 64).unwrap();
        assert_eq!(a.predict("ai", 64).unwrap(), b.predict("ai", 64).unwrap());
    }

    #[test]
    fn test_predict_at_matches_sequence() {
        let mut net = panel();
        let sequence = net.predict("ai", 30).unwrap();
        assert_eq!(net.predict_at("ai", 17, 30).unwrap(), sequence[17]);
        assert_eq!(
            net.predict_at("ai", 30, 30).unwrap_err(),
            NetworkError::IndexOutOfRange { index: 30, len: 30 }
        );
    }

    #[test]
    fn test_zero_length() {
        let mut net = panel();
        assert!(net.predict("ai", 0).unwrap().is_empty());
        assert!(net.probability_at("ai", 0, 0).is_err());
    }

    #[test]
    fn test_unknown_names_fail_fast() {
        let mut net = BinaryNetwork::new();
        net.create(NodeSpec::new("ai").correlate("truth", 1.0)).unwrap();

        assert_eq!(
            net.predict("ghost", 3).unwrap_err(),
            NetworkError::UnknownNode("ghost".into())
        );
        assert_eq!(
            net.predict("ai", 3).unwrap_err(),
            NetworkError::UnknownCorrelate {
                node: "ai".into(),
                correlate: "truth".into()
            }
        );

        // Declaring the correlate later makes the node usable
        net.create(NodeSpec::new("truth")).unwrap();
        assert_eq!(net.predict("ai", 3).unwrap().len(), 3);
    }

    #[test]
    fn test_binary_self_loop_is_a_cycle() {
        let mut net = BinaryNetwork::new();
        net.create(NodeSpec::new("narcissus").correlate("narcissus", 1.0))
            .unwrap();

        assert_eq!(
            net.predict("narcissus", 4).unwrap_err(),
            NetworkError::CorrelationCycle(vec!["narcissus".into(), "narcissus".into()])
        );
    }

    #[test]
    fn test_longer_cycle_detected() {
        let mut net = BinaryNetwork::new();
        net.create(NodeSpec::new("a").correlate("b", 1.0)).unwrap();
        net.create(NodeSpec::new("b").correlate("c", 1.0)).unwrap();
        net.create(NodeSpec::new("c").correlate("a", -1.0)).unwrap();

        let err = net.probability_at("a", 0, 4).unwrap_err();
        assert_eq!(
            err,
            NetworkError::CorrelationCycle(
                ["a", "b", "c", "a"].iter().map(|s| s.to_string()).collect()
            )
        );
    }

    fn chain(links: usize) -> BinaryNetwork {
        let mut net = BinaryNetwork::with_entropy(Counter(0));
        net.create(NodeSpec::new("n_0")).unwrap();
        for i in 1..links {
            net.create(NodeSpec::new(format!("n_{}", i)).correlate(format!("n_{}", i - 1), 1.0))
                .unwrap();
        }
        net
    }

    #[test]
    fn test_chain_at_depth_limit_generates() {
        let mut net = chain(MAX_CORRELATION_DEPTH);
        let last = format!("n_{}", MAX_CORRELATION_DEPTH - 1);
        assert_eq!(net.predict(&last, 2).unwrap().len(), 2);
    }

    #[test]
    fn test_chain_beyond_depth_limit_fails() {
        let links = MAX_CORRELATION_DEPTH + 1;
        let mut net = chain(links);
        let last = format!("n_{}", links - 1);

        let err = net.predict(&last, 2).unwrap_err();
        assert_eq!(
            err,
            NetworkError::CorrelationTooDeep {
                node: "n_0".into(),
                depth: MAX_CORRELATION_DEPTH
            }
        );
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(net.cache.sequence(&last, 2).is_none());

        // A chain many times deeper still returns an error instead of overflowing
        let mut net = chain(8 * MAX_CORRELATION_DEPTH);
        let last = format!("n_{}", 8 * MAX_CORRELATION_DEPTH - 1);
        assert!(matches!(
            net.probability_at(&last, 0, 2),
            Err(NetworkError::CorrelationTooDeep { .. })
        ));
    }

    /// `echo` copies `source`; `amplified` leans on both with weights whose
    /// sum overflows to infinity whenever they agree.
    fn overflowing<V: Variant>(p_neutral: Option<f64>) -> Network<V> {
        let mut net = Network::<V>::with_entropy(Counter(0));
        net.create(NodeSpec::new("source").seed(1)).unwrap();
        net.create(NodeSpec::new("echo").correlate("source", 1e308).seed(2))
            .unwrap();

        let mut amplified = NodeSpec::new("amplified")
            .correlate("source", 1e308)
            .correlate("echo", 1e308)
            .seed(3);
        amplified.p_neutral = p_neutral;
        net.create(amplified).unwrap();
        net
    }

    #[test]
    fn test_infinite_signal_in_binary_network_is_not_drawn() {
        let mut net = overflowing::<Binary>(None);
        let source = net.predict("source", 64).unwrap();
        let first_positive = source
            .iter()
            .position(|o| *o == Outcome::Positive)
            .unwrap();

        assert_eq!(
            net.predict("amplified", 64).unwrap_err(),
            NetworkError::NonFiniteProbability {
                node: "amplified".into(),
                index: first_positive
            }
        );
        assert!(net.cache.sequence("amplified", 64).is_none());

        assert!(matches!(
            net.probability_at("amplified", first_positive, 64),
            Err(NetworkError::NonFiniteProbability { .. })
        ));
        assert!(net.cache.distribution("amplified", 64, first_positive).is_none());
    }

    #[test]
    fn test_infinite_signal_in_calibrated_ternary_network_is_not_drawn() {
        let mut net = overflowing::<Ternary>(Some(0.2));

        // Inflating infinite odds yields NaN whichever way the signal points
        let err = net.predict("amplified", 16).unwrap_err();
        assert_eq!(
            err,
            NetworkError::NonFiniteProbability {
                node: "amplified".into(),
                index: 0
            }
        );
        assert_eq!(err.kind(), ErrorKind::Numeric);
        assert!(net.cache.sequence("amplified", 16).is_none());

        assert!(net.probability_at("amplified", 0, 16).is_err());
        assert!(net.cache.distribution("amplified", 16, 0).is_none());
    }

    #[test]
    fn test_seedless_nodes_draw_once() {
        let mut net = BinaryNetwork::with_entropy(Counter(0));
        let first = net.create(NodeSpec::new("a")).unwrap().seed();
        let second = net.create(NodeSpec::new("b")).unwrap().seed();
        let fixed = net.create(NodeSpec::new("c").seed(5)).unwrap().seed();

        assert_eq!((first, second, fixed), (100, 101, 5));
    }

    #[test]
    fn test_os_seeds_in_range() {
        let mut net = BinaryNetwork::new();
        assert!(net.create(NodeSpec::new("a")).unwrap().seed() < SEED_BOUND);
    }

    #[test]
    fn test_set_correlates_invalidates_dependents() {
        let mut net = panel();
        net.create(NodeSpec::new("human").correlate("ai", 2.0).seed(3))
            .unwrap();
        let before = net.predict("human", 200).unwrap();

        let mut flipped = BTreeMap::new();
        flipped.insert("truth".to_string(), -5.0);
        net.set_correlates("ai", flipped).unwrap();

        let after = net.predict("human", 200).unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_ne!(before, after);
    }

    #[test]
    fn test_replacing_node_invalidates_dependents() {
        let mut net = panel();
        let before = net.predict("ai", 200).unwrap();

        net.create(NodeSpec::new("truth").seed(77)).unwrap();
        let after = net.predict("ai", 200).unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn test_invalidate_unknown_node() {
        let mut net = panel();
        assert!(net.invalidate("ghost").is_err());
        net.predict("ai", 10).unwrap();
        assert_eq!(net.invalidate("truth").unwrap(), 2);
    }

    #[test]
    fn test_ternary_self_correlation_rejected() {
        let mut net = TernaryNetwork::new();
        let err = net
            .create(NodeSpec::new("judge").correlate("judge", 1.0))
            .unwrap_err();

        assert_eq!(err, NetworkError::SelfCorrelation("judge".into()));
        assert!(net.registry().is_empty());
    }

    #[test]
    fn test_ternary_without_calibration_never_undecided() {
        let mut net = TernaryNetwork::new();
        net.create(NodeSpec::new("truth").seed(1)).unwrap();
        net.create(NodeSpec::new("judge").correlate("truth", 1.5).seed(2))
            .unwrap();

        for index in 0..50 {
            let dist = net.probability_at("judge", index, 50).unwrap();
            assert_eq!(dist.p_undecided, 0.0);
        }
        assert!(net
            .predict("judge", 500)
            .unwrap()
            .iter()
            .all(|o| !o.is_undecided()));
    }

    #[test]
    fn test_ternary_calibrated_indecision() {
        let mut net = TernaryNetwork::new();
        net.create(NodeSpec::new("judge").indecision(0.3).seed(4)).unwrap();

        for len in [1, 10, 1000] {
            let dist = net.probability_at("judge", 0, len).unwrap();
            assert_relative_eq!(dist.p_undecided, 0.3, epsilon = 1e-12);
            assert_relative_eq!(dist.total(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ternary_undecided_correlates_carry_no_signal() {
        let mut net = TernaryNetwork::new();
        net.create(NodeSpec::new("dither").indecision(0.45).seed(8)).unwrap();
        net.create(NodeSpec::new("follower").correlate("dither", 3.0).seed(9))
            .unwrap();

        let dither = net.predict("dither", 200).unwrap();
        let undecided = dither.iter().position(|o| o.is_undecided()).unwrap();

        let dist = net.probability_at("follower", undecided, 200).unwrap();
        assert_eq!(dist.p_negative, 0.5);
        assert_eq!(dist.p_positive, 0.5);
    }

    #[test]
    fn test_ternary_invalid_indecision() {
        let mut net = TernaryNetwork::new();
        assert!(matches!(
            net.create(NodeSpec::new("judge").indecision(0.5)),
            Err(NetworkError::InvalidIndecision { .. })
        ));
    }

    #[test]
    fn test_binary_rejects_indecision() {
        let mut net = BinaryNetwork::new();
        assert_eq!(
            net.create(NodeSpec::new("judge").indecision(0.2)).unwrap_err(),
            NetworkError::IndecisionUnsupported("judge".into())
        );
    }

    #[test]
    fn test_progress_does_not_change_values() {
        let build = || {
            let mut net = TernaryNetwork::new();
            net.create(NodeSpec::new("truth").seed(1)).unwrap();
            net.create(
                NodeSpec::new("judge")
                    .correlate("truth", 1.0)
                    .indecision(0.2)
                    .seed(2),
            )
            .unwrap();
            net
        };

        let mut quiet = build();
        let mut loud = build();
        let mut recorder = Recorder::default();

        let expected = quiet.predict("judge", 40).unwrap();
        let observed = loud.predict_with_progress("judge", 40, &mut recorder).unwrap();

        assert_eq!(expected, observed);
        // Only the requested node reports; correlates are generated silently
        assert_eq!(recorder.begun, vec![("judge".to_string(), 40)]);
        assert_eq!(recorder.advanced, 40);
        assert_eq!(recorder.finished, 1);

        // A cached sequence is not regenerated, so nothing is reported
        loud.predict_with_progress("judge", 40, &mut recorder).unwrap();
        assert_eq!(recorder.advanced, 40);
    }

    #[test]
    fn test_clear_registry() {
        let mut net = TernaryNetwork::new();
        net.create(NodeSpec::new("truth").seed(1)).unwrap();
        net.predict("truth", 10).unwrap();

        net.clear_registry();

        assert!(net.registry().is_empty());
        assert_eq!(
            net.predict("truth", 10).unwrap_err(),
            NetworkError::UnknownNode("truth".into())
        );
    }

    #[test]
    fn test_ternary_outcomes_cover_all_classes() {
        let mut net = TernaryNetwork::new();
        net.create(NodeSpec::new("judge").indecision(0.3).seed(12)).unwrap();
        let sequence = net.predict("judge", 300).unwrap();

        for class in [
            TernaryOutcome::Negative,
            TernaryOutcome::Positive,
            TernaryOutcome::Undecided,
        ] {
            assert!(sequence.contains(&class));
        }
    }
}
