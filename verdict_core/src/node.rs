//! Node configuration and construction.

use crate::error::NetworkError;
use crate::variant::{Ternary, Variant};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::marker::PhantomData;

/// Declarative description of a node, before it is registered.
///
/// Correlates are declared by name, so a spec may point at nodes that do not
/// exist yet; names are only resolved when predictions are requested.
///
/// # Example
///
/// ```
/// use verdict_core::NodeSpec;
///
/// let spec = NodeSpec::new("ai")
///     .correlate("truth", 1.5)
///     .seed(7);
/// assert_eq!(spec.correlates["truth"], 1.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    /// Registry key
    pub name: String,

    /// Correlate name -> weight on the decision odds
    #[serde(default)]
    pub correlates: BTreeMap<String, f64>,

    /// Fixed seed; drawn from the network's entropy source when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Desired indecision probability (ternary only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p_neutral: Option<f64>,
}

impl NodeSpec {
    /// Creates a spec with no correlates and no seed.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Adds (or replaces) a correlate weight.
    pub fn correlate(mut self, name: impl Into<String>, weight: f64) -> Self {
        self.correlates.insert(name.into(), weight);
        self
    }

    /// Adds several correlates at once.
    pub fn correlates<I, S>(mut self, correlates: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        self.correlates
            .extend(correlates.into_iter().map(|(name, weight)| (name.into(), weight)));
        self
    }

    /// Fixes the seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the desired indecision probability.
    pub fn indecision(mut self, p_neutral: f64) -> Self {
        self.p_neutral = Some(p_neutral);
        self
    }
}

/// A registered decision-maker.
///
/// Name, seed and calibration are fixed at construction. Correlates can only
/// be changed through [`Network::set_correlates`](crate::Network::set_correlates),
/// which also drops every cached result that depended on them.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<V: Variant> {
    name: String,
    correlates: BTreeMap<String, f64>,
    seed: u64,
    calibration: V::Calibration,
    _variant: PhantomData<V>,
}

impl<V: Variant> Node<V> {
    /// Validates a spec and builds the node.
    ///
    /// `draw_seed` is only called when the spec carries no seed and every
    /// other check has passed, so rejected specs never consume entropy.
    pub(crate) fn build<F>(spec: NodeSpec, draw_seed: F) -> Result<Self, NetworkError>
    where
        F: FnOnce() -> u64,
    {
        if spec.name.is_empty() {
            return Err(NetworkError::EmptyName);
        }
        check_weights(&spec.name, &spec.correlates)?;
        let calibration = V::calibrate(&spec.name, spec.p_neutral)?;

        let node = Self {
            seed: spec.seed.unwrap_or_else(draw_seed),
            name: spec.name,
            correlates: spec.correlates,
            calibration,
            _variant: PhantomData,
        };
        node.integrity_check()?;
        Ok(node)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn correlates(&self) -> &BTreeMap<String, f64> {
        &self.correlates
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn calibration(&self) -> &V::Calibration {
        &self.calibration
    }

    /// Returns true if this node lists `other` among its correlates.
    pub fn depends_on(&self, other: &str) -> bool {
        self.correlates.contains_key(other)
    }

    /// Rejects a node that correlates with itself.
    ///
    /// Only variants with `CHECKS_SELF_CORRELATION` enforce this. Binary
    /// self-loops pass here and are reported as cycles at generation time.
    pub fn integrity_check(&self) -> Result<(), NetworkError> {
        if V::CHECKS_SELF_CORRELATION && self.depends_on(&self.name) {
            return Err(NetworkError::SelfCorrelation(self.name.clone()));
        }
        Ok(())
    }

    /// Swaps in new correlates after validating them.
    pub(crate) fn replace_correlates(
        &mut self,
        correlates: BTreeMap<String, f64>,
    ) -> Result<(), NetworkError> {
        check_weights(&self.name, &correlates)?;
        if V::CHECKS_SELF_CORRELATION && correlates.contains_key(&self.name) {
            return Err(NetworkError::SelfCorrelation(self.name.clone()));
        }
        self.correlates = correlates;
        Ok(())
    }
}

impl Node<Ternary> {
    /// Odds inflation derived from `p_neutral`, if any.
    pub fn neutral(&self) -> Option<f64> {
        self.calibration
    }
}

fn check_weights(node: &str, correlates: &BTreeMap<String, f64>) -> Result<(), NetworkError> {
    match correlates.iter().find(|(_, weight)| !weight.is_finite()) {
        Some((correlate, weight)) => Err(NetworkError::NonFiniteWeight {
            node: node.to_string(),
            correlate: correlate.clone(),
            weight: *weight,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::Binary;
    use approx::assert_relative_eq;

    #[test]
    fn test_spec_builder() {
        let spec = NodeSpec::new("human")
            .correlates([("truth", 0.5), ("ai", 2.0)])
            .correlate("truth", 1.0)
            .seed(3)
            .indecision(0.2);

        assert_eq!(spec.correlates.len(), 2);
        assert_eq!(spec.correlates["truth"], 1.0);
        assert_eq!(spec.seed, Some(3));
        assert_eq!(spec.p_neutral, Some(0.2));
    }

    #[test]
    fn test_specs_do_not_share_correlates() {
        let a = NodeSpec::new("a").correlate("x", 1.0);
        let b = NodeSpec::new("b");

        assert!(b.correlates.is_empty());
        assert_eq!(a.correlates.len(), 1);
    }

    #[test]
    fn test_spec_from_json() {
        let spec: NodeSpec =
            serde_json::from_str(r#"{"name": "ai", "correlates": {"truth": 1.0}}"#).unwrap();

        assert_eq!(spec.name, "ai");
        assert_eq!(spec.seed, None);
        assert_eq!(spec.p_neutral, None);
    }

    #[test]
    fn test_seed_drawn_only_when_missing() {
        let fixed = Node::<Binary>::build(NodeSpec::new("a").seed(5), || panic!("drawn")).unwrap();
        assert_eq!(fixed.seed(), 5);

        let drawn = Node::<Binary>::build(NodeSpec::new("a"), || 99).unwrap();
        assert_eq!(drawn.seed(), 99);
    }

    #[test]
    fn test_rejected_spec_consumes_no_seed() {
        let result = Node::<Ternary>::build(NodeSpec::new("a").correlate("a", 1.0), || {
            panic!("seed drawn for an invalid node")
        });
        assert_eq!(result, Err(NetworkError::SelfCorrelation("a".into())));
    }

    #[test]
    fn test_binary_self_correlation_is_accepted() {
        let node = Node::<Binary>::build(NodeSpec::new("a").correlate("a", 1.0), || 1).unwrap();
        assert!(node.integrity_check().is_ok());
        assert!(node.depends_on("a"));
    }

    #[test]
    fn test_non_finite_weight() {
        let result = Node::<Binary>::build(NodeSpec::new("a").correlate("b", f64::NAN), || 1);
        assert!(matches!(result, Err(NetworkError::NonFiniteWeight { .. })));
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(
            Node::<Binary>::build(NodeSpec::new(""), || 1),
            Err(NetworkError::EmptyName)
        );
    }

    #[test]
    fn test_neutral_value() {
        let node = Node::<Ternary>::build(NodeSpec::new("a").indecision(0.25), || 1).unwrap();
        // |2 - 1/0.25| - 1
        assert_relative_eq!(node.neutral().unwrap(), 1.0);
    }

    #[test]
    fn test_replace_correlates_checks_self() {
        let mut node = Node::<Ternary>::build(NodeSpec::new("a"), || 1).unwrap();
        let mut correlates = BTreeMap::new();
        correlates.insert("a".to_string(), 1.0);

        assert!(node.replace_correlates(correlates).is_err());
        assert!(node.correlates().is_empty());
    }
}
