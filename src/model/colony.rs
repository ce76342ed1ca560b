//! The colony: colonists, resource pool, conflicts and assignments.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

use super::colonist::{Colonist, ColonistId};
use crate::error::{ColonyError, Result, ValidationError};
use crate::exhaustive::{ExhaustiveConfig, ExhaustiveResult, ExhaustiveRunner};
use crate::greedy::{GreedyResult, GreedyRunner};
use crate::jealousy::Instance;
use crate::local_search::{LocalSearchConfig, LocalSearchResult, LocalSearchRunner};

/// A community of colonists sharing a pool of resources.
///
/// Colonists are kept in insertion order and never removed. The resource
/// pool is a set iterated in sorted order; replacing it leaves existing
/// preference lists untouched, they are only checked when set.
///
/// # Examples
///
/// ```
/// use u_colony::Colony;
///
/// let mut colony = Colony::new();
/// colony.set_resources(["1", "2"]);
/// colony.add_colonist("A").unwrap();
/// colony.add_colonist("B").unwrap();
/// colony.set_preferences("A", ["1", "2"]).unwrap();
/// colony.set_preferences("B", ["2", "1"]).unwrap();
///
/// colony.assign_greedy().unwrap();
/// assert_eq!(colony.assignment("A").unwrap(), Some("1"));
/// assert_eq!(colony.assignment("B").unwrap(), Some("2"));
/// assert_eq!(colony.jealousy(), 0);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Colony {
    colonists: Vec<Colonist>,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: HashMap<String, ColonistId>,
    resources: BTreeSet<String>,
}

impl Colony {
    /// Creates an empty colony with an empty resource pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `n` colonists named `A`, `B`, … (`AA`, `AB`, … past `Z`)
    /// and resources `"1"` through `"n"`.
    pub fn generated(n: usize) -> Self {
        let mut colony = Self::new();
        colony.set_resources((1..=n).map(|i| i.to_string()));
        for i in 0..n {
            let name = letter_name(i);
            colony.index.insert(name.clone(), i);
            colony.colonists.push(Colonist::new(name));
        }
        colony
    }

    // ---- Mutation ----

    /// Adds a colonist and returns its id.
    pub fn add_colonist(&mut self, name: impl Into<String>) -> Result<ColonistId> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.index.contains_key(&name) {
            return Err(ValidationError::DuplicateColonist { name }.into());
        }
        let id = self.colonists.len();
        self.index.insert(name.clone(), id);
        self.colonists.push(Colonist::new(name));
        Ok(id)
    }

    /// Records a symmetric conflict between two colonists.
    pub fn add_conflict(&mut self, first: &str, second: &str) -> Result<()> {
        let a = self.require(first)?;
        let b = self.require(second)?;
        if a == b {
            return Err(ValidationError::SelfConflict {
                name: first.to_string(),
            }
            .into());
        }
        if self.colonists[a].conflicts_with(b) {
            return Err(ValidationError::DuplicateConflict {
                first: first.to_string(),
                second: second.to_string(),
            }
            .into());
        }
        self.colonists[a].conflicts.insert(b);
        self.colonists[b].conflicts.insert(a);
        Ok(())
    }

    /// Sets a colonist's preference list, most wanted first.
    ///
    /// The list must name every resource of the current pool exactly once.
    /// On success returns `true` if a previous list was replaced. On error
    /// the colonist is left untouched.
    pub fn set_preferences<I, S>(&mut self, name: &str, preferences: I) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = self.require(name)?;
        let preferences: Vec<String> = preferences.into_iter().map(Into::into).collect();

        let distinct: HashSet<&str> = preferences.iter().map(String::as_str).collect();
        let matches = preferences.len() == self.resources.len()
            && distinct.len() == self.resources.len()
            && distinct.iter().all(|r| self.resources.contains(*r));
        if !matches {
            return Err(ValidationError::MismatchedPreferences {
                name: name.to_string(),
                expected: self.resources.len(),
                distinct: distinct.len(),
                given: preferences.len(),
            }
            .into());
        }

        let colonist = &mut self.colonists[id];
        let replaced = colonist.has_preferences();
        if replaced {
            tracing::info!(colonist = name, "replacing existing preferences");
        }
        colonist.preferences = preferences;
        Ok(replaced)
    }

    /// Replaces the resource pool. Duplicate ids collapse.
    pub fn set_resources<I, S>(&mut self, resources: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resources = resources.into_iter().map(Into::into).collect();
        tracing::debug!(resources = self.resources.len(), "resource pool replaced");
    }

    /// Swaps the resources currently held by two colonists.
    ///
    /// An unassigned side is swapped like any other value, so exchanging
    /// with an unassigned colonist leaves the other one unassigned.
    pub fn exchange(&mut self, first: &str, second: &str) -> Result<()> {
        let a = self.require(first)?;
        let b = self.require(second)?;
        if a != b {
            let held = self.colonists[a].assigned.take();
            self.colonists[a].assigned = self.colonists[b].assigned.take();
            self.colonists[b].assigned = held;
        }
        Ok(())
    }

    // ---- Assignment ----

    /// Runs the greedy assigner and installs its result.
    ///
    /// Previous assignments are discarded; colonists the greedy pass could
    /// not serve end up unassigned.
    pub fn assign_greedy(&mut self) -> Result<GreedyResult> {
        let instance = self.instance()?;
        let result = GreedyRunner::run(&instance);
        self.install(result.assignment.iter().copied());
        tracing::info!(
            jealousy = result.jealousy,
            unassigned = result.unassigned,
            "greedy assignment installed"
        );
        Ok(result)
    }

    /// Runs the swap local search and installs its result.
    ///
    /// Requires a 1:1 colony with complete preferences.
    pub fn assign_local_search(&mut self, config: &LocalSearchConfig) -> Result<LocalSearchResult> {
        let instance = self.instance()?;
        let result = LocalSearchRunner::run(&instance, config)?;
        self.install(result.assignment.iter().copied().map(Some));
        tracing::info!(
            jealousy = result.jealousy,
            swaps = result.swaps,
            "local search assignment installed"
        );
        Ok(result)
    }

    /// Runs the exhaustive search and installs its result.
    ///
    /// Requires a 1:1 colony with complete preferences, no larger than
    /// `config.max_colonists`. Cost grows as `n!`.
    pub fn assign_exhaustive(&mut self, config: &ExhaustiveConfig) -> Result<ExhaustiveResult> {
        let instance = self.instance()?;
        let result = ExhaustiveRunner::run(&instance, config)?;
        self.install(result.assignment.iter().copied().map(Some));
        tracing::info!(
            jealousy = result.jealousy,
            evaluated = result.evaluated,
            "exhaustive assignment installed"
        );
        Ok(result)
    }

    /// Snapshots the colony into index space for the runners.
    ///
    /// Resource `r` is the `r`-th pool entry in sorted order; colonist `c`
    /// is the `c`-th added. Fails with `StaleResource` if a colonist's list
    /// names a resource dropped by a since-replaced pool, and with
    /// `MismatchedPreferences` if the list no longer covers the pool.
    pub fn instance(&self) -> Result<Instance> {
        let resource_ids: HashMap<&str, usize> = self
            .resources
            .iter()
            .enumerate()
            .map(|(i, r)| (r.as_str(), i))
            .collect();

        let mut preferences = Vec::with_capacity(self.colonists.len());
        for colonist in &self.colonists {
            let row = colonist
                .preferences
                .iter()
                .map(|r| {
                    resource_ids.get(r.as_str()).copied().ok_or_else(|| {
                        ValidationError::StaleResource {
                            name: colonist.name.clone(),
                            resource: r.clone(),
                        }
                    })
                })
                .collect::<std::result::Result<Vec<usize>, _>>()?;
            preferences.push(row);
        }

        let names = self.colonists.iter().map(|c| c.name.clone()).collect();
        let conflicts = self
            .colonists
            .iter()
            .map(|c| c.conflicts().collect())
            .collect();
        Instance::from_parts(names, self.resources.len(), preferences, conflicts)
    }

    fn install(&mut self, assignment: impl Iterator<Item = Option<usize>>) {
        let pool: Vec<&String> = self.resources.iter().collect();
        for (colonist, slot) in self.colonists.iter_mut().zip(assignment) {
            colonist.assigned = slot.map(|r| pool[r].clone());
        }
    }

    // ---- Queries ----

    /// Number of jealous colonists under the current assignment.
    ///
    /// Unassigned colonists are never jealous, and an unassigned rival
    /// never makes anyone jealous.
    ///
    /// Ranks are read from the stored preference lists rather than an
    /// [`Instance`], so the count stays defined after [`set_resources`]
    /// leaves those lists stale; a resource missing from a colonist's list
    /// never makes it jealous. On a consistent colony this agrees with
    /// [`Instance::partial_jealousy`].
    ///
    /// [`set_resources`]: Colony::set_resources
    pub fn jealousy(&self) -> usize {
        (0..self.colonists.len())
            .filter(|&id| self.is_jealous(id))
            .count()
    }

    /// Names of the colonists currently jealous, in insertion order.
    pub fn jealous_colonists(&self) -> Vec<&str> {
        (0..self.colonists.len())
            .filter(|&id| self.is_jealous(id))
            .map(|id| self.colonists[id].name())
            .collect()
    }

    fn is_jealous(&self, id: ColonistId) -> bool {
        let colonist = &self.colonists[id];
        let Some(own) = colonist.assigned().and_then(|r| colonist.rank_of(r)) else {
            return false;
        };
        colonist.conflicts().any(|rival| {
            self.colonists[rival]
                .assigned()
                .and_then(|r| colonist.rank_of(r))
                .is_some_and(|theirs| theirs < own)
        })
    }

    /// The resource held by a colonist, `None` while unassigned.
    pub fn assignment(&self, name: &str) -> Result<Option<&str>> {
        let id = self.require(name)?;
        Ok(self.colonists[id].assigned())
    }

    /// `(name, resource)` for every colonist in insertion order.
    pub fn assignments(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.colonists.iter().map(|c| (c.name(), c.assigned()))
    }

    /// Names of colonists whose preference list is still empty.
    pub fn missing_preferences(&self) -> Vec<&str> {
        self.colonists
            .iter()
            .filter(|c| !c.has_preferences())
            .map(Colonist::name)
            .collect()
    }

    /// Whether every colonist has a preference list.
    pub fn has_complete_preferences(&self) -> bool {
        self.colonists.iter().all(Colonist::has_preferences)
    }

    /// Looks up a colonist by name.
    pub fn colonist(&self, name: &str) -> Option<&Colonist> {
        self.id_of(name).map(|id| &self.colonists[id])
    }

    pub fn id_of(&self, name: &str) -> Option<ColonistId> {
        self.index.get(name).copied()
    }

    /// All colonists in insertion order.
    pub fn colonists(&self) -> &[Colonist] {
        &self.colonists
    }

    /// Resource pool in sorted order.
    pub fn resources(&self) -> impl Iterator<Item = &str> + '_ {
        self.resources.iter().map(String::as_str)
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    pub fn len(&self) -> usize {
        self.colonists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colonists.is_empty()
    }

    fn require(&self, name: &str) -> Result<ColonistId> {
        self.id_of(name).ok_or_else(|| ColonyError::unknown(name))
    }
}

impl fmt::Display for Colony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pool: Vec<&str> = self.resources().collect();
        writeln!(
            f,
            "Colony: {} colonists, resources [{}]",
            self.colonists.len(),
            pool.join(", ")
        )?;
        for colonist in &self.colonists {
            let rivals: Vec<&str> = colonist
                .conflicts()
                .map(|id| self.colonists[id].name())
                .collect();
            write!(
                f,
                "  {}: preferences [{}]",
                colonist.name(),
                colonist.preferences.join(", ")
            )?;
            if rivals.is_empty() {
                write!(f, ", no conflicts")?;
            } else {
                write!(f, ", conflicts [{}]", rivals.join(", "))?;
            }
            match colonist.assigned() {
                Some(resource) => writeln!(f, ", assigned {resource}")?,
                None => writeln!(f, ", unassigned")?,
            }
        }
        Ok(())
    }
}

/// Spreadsheet-style column name: 0 → `A`, 25 → `Z`, 26 → `AA`.
fn letter_name(mut i: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(char::from(b'A' + (i % 26) as u8));
        if i < 26 {
            break;
        }
        i = i / 26 - 1;
    }
    letters.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StateError;

    /// Spec scenario: A=[1,2,3], B=[2,3,1], C=[3,1,2]; A-B, B-C.
    fn three() -> Colony {
        let mut colony = Colony::new();
        colony.set_resources(["1", "2", "3"]);
        for name in ["A", "B", "C"] {
            colony.add_colonist(name).unwrap();
        }
        colony.add_conflict("A", "B").unwrap();
        colony.add_conflict("B", "C").unwrap();
        colony.set_preferences("A", ["1", "2", "3"]).unwrap();
        colony.set_preferences("B", ["2", "3", "1"]).unwrap();
        colony.set_preferences("C", ["3", "1", "2"]).unwrap();
        colony
    }

    fn validation(err: ColonyError) -> ValidationError {
        match err {
            ColonyError::Validation(e) => e,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    // ---- Entity model ----

    #[test]
    fn test_add_colonist_rejects_empty_and_duplicate() {
        let mut colony = Colony::new();
        assert_eq!(colony.add_colonist("A").unwrap(), 0);
        assert_eq!(colony.add_colonist("B").unwrap(), 1);
        assert_eq!(
            validation(colony.add_colonist("").unwrap_err()),
            ValidationError::EmptyName
        );
        assert_eq!(
            validation(colony.add_colonist("B").unwrap_err()),
            ValidationError::DuplicateColonist { name: "B".into() }
        );
        assert_eq!(colony.len(), 2);
    }

    #[test]
    fn test_add_conflict_symmetric() {
        let colony = three();
        let a = colony.colonist("A").unwrap();
        let b = colony.colonist("B").unwrap();
        assert!(a.conflicts_with(1));
        assert!(b.conflicts_with(0));
        assert_eq!(b.conflicts().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_add_conflict_errors() {
        let mut colony = three();
        assert_eq!(
            validation(colony.add_conflict("A", "Z").unwrap_err()),
            ValidationError::UnknownColonist { name: "Z".into() }
        );
        assert_eq!(
            validation(colony.add_conflict("A", "A").unwrap_err()),
            ValidationError::SelfConflict { name: "A".into() }
        );
        assert!(matches!(
            validation(colony.add_conflict("B", "A").unwrap_err()),
            ValidationError::DuplicateConflict { .. }
        ));
    }

    #[test]
    fn test_set_preferences_rejects_mismatch() {
        let mut colony = Colony::new();
        colony.set_resources(["1", "2"]);
        colony.add_colonist("A").unwrap();

        let too_many = colony.set_preferences("A", ["1", "2", "3"]).unwrap_err();
        assert_eq!(
            validation(too_many),
            ValidationError::MismatchedPreferences {
                name: "A".into(),
                expected: 2,
                distinct: 3,
                given: 3,
            }
        );
        assert!(colony.set_preferences("A", ["1", "1"]).is_err());
        assert!(colony.set_preferences("A", ["1"]).is_err());
        assert!(colony.set_preferences("A", ["1", "9"]).is_err());
        assert!(colony.set_preferences("A", ["1", "2", "2"]).is_err());
        assert!(!colony.colonist("A").unwrap().has_preferences());
    }

    #[test]
    fn test_set_preferences_unknown_colonist() {
        let mut colony = three();
        assert_eq!(
            validation(colony.set_preferences("Z", ["1", "2", "3"]).unwrap_err()),
            ValidationError::UnknownColonist { name: "Z".into() }
        );
    }

    #[test]
    fn test_set_preferences_replaces() {
        let mut colony = three();
        let replaced = colony.set_preferences("A", ["3", "2", "1"]).unwrap();
        assert!(replaced);
        assert_eq!(colony.colonist("A").unwrap().preferences(), ["3", "2", "1"]);
    }

    #[test]
    fn test_rejected_update_keeps_old_list() {
        let mut colony = three();
        assert!(colony.set_preferences("A", ["3", "3", "1"]).is_err());
        assert_eq!(colony.colonist("A").unwrap().preferences(), ["1", "2", "3"]);
    }

    #[test]
    fn test_first_preferences_not_a_replacement() {
        let mut colony = Colony::generated(2);
        assert!(!colony.set_preferences("A", ["1", "2"]).unwrap());
    }

    #[test]
    fn test_generated() {
        let colony = Colony::generated(3);
        let names: Vec<&str> = colony.colonists().iter().map(Colonist::name).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(colony.resources().collect::<Vec<_>>(), ["1", "2", "3"]);
        assert_eq!(colony.missing_preferences(), ["A", "B", "C"]);
        assert!(!colony.has_complete_preferences());
        assert_eq!(colony.id_of("C"), Some(2));
    }

    #[test]
    fn test_letter_names() {
        assert_eq!(letter_name(0), "A");
        assert_eq!(letter_name(25), "Z");
        assert_eq!(letter_name(26), "AA");
        assert_eq!(letter_name(27), "AB");
        assert_eq!(letter_name(701), "ZZ");
        assert_eq!(letter_name(702), "AAA");
    }

    #[test]
    fn test_assignment_unknown_and_unset() {
        let colony = three();
        assert_eq!(colony.assignment("A").unwrap(), None);
        assert!(colony.assignment("Z").is_err());
    }

    // ---- Assigners ----

    #[test]
    fn test_two_colonists_no_conflicts() {
        let mut colony = Colony::new();
        colony.set_resources(["1", "2"]);
        colony.add_colonist("A").unwrap();
        colony.add_colonist("B").unwrap();
        colony.set_preferences("A", ["1", "2"]).unwrap();
        colony.set_preferences("B", ["2", "1"]).unwrap();

        colony.assign_greedy().unwrap();
        assert_eq!(colony.assignment("A").unwrap(), Some("1"));
        assert_eq!(colony.assignment("B").unwrap(), Some("2"));
        assert_eq!(colony.jealousy(), 0);
    }

    #[test]
    fn test_top_choices_all_strategies() {
        let mut colony = three();
        assert_eq!(colony.assign_greedy().unwrap().jealousy, 0);
        assert_eq!(colony.jealousy(), 0);

        let mut colony = three();
        colony
            .assign_local_search(&LocalSearchConfig::default())
            .unwrap();
        assert_eq!(colony.jealousy(), 0);

        let mut colony = three();
        colony
            .assign_exhaustive(&ExhaustiveConfig::default())
            .unwrap();
        assert_eq!(colony.jealousy(), 0);
        assert_eq!(colony.assignment("C").unwrap(), Some("3"));
    }

    #[test]
    fn test_contention_leaves_one_jealous() {
        let mut colony = three();
        colony.set_preferences("C", ["2", "3", "1"]).unwrap();

        colony.assign_greedy().unwrap();
        assert_eq!(colony.jealousy(), 1);
        assert_eq!(colony.jealous_colonists(), ["C"]);

        colony
            .assign_local_search(&LocalSearchConfig::default())
            .unwrap();
        assert_eq!(colony.jealousy(), 1);

        let result = colony
            .assign_exhaustive(&ExhaustiveConfig::default())
            .unwrap();
        assert_eq!(result.jealousy, 1);
        assert_eq!(colony.jealousy(), 1);
    }

    #[test]
    fn test_installed_jealousy_matches_result() {
        let mut colony = three();
        colony.set_preferences("A", ["2", "3", "1"]).unwrap();
        colony.set_preferences("C", ["2", "1", "3"]).unwrap();
        let result = colony
            .assign_exhaustive(&ExhaustiveConfig::default())
            .unwrap();
        assert_eq!(colony.jealousy(), result.jealousy);
        let local = colony
            .assign_local_search(&LocalSearchConfig::default())
            .unwrap();
        assert_eq!(colony.jealousy(), local.jealousy);
    }

    #[test]
    fn test_greedy_resets_previous_assignment() {
        let mut colony = Colony::new();
        colony.set_resources(["1", "2"]);
        colony.add_colonist("A").unwrap();
        colony.add_colonist("B").unwrap();
        colony.set_preferences("A", ["2", "1"]).unwrap();
        colony.assign_greedy().unwrap();
        assert_eq!(colony.assignment("A").unwrap(), Some("2"));
        assert_eq!(colony.assignment("B").unwrap(), None);
    }

    #[test]
    fn test_greedy_more_colonists_than_resources() {
        let mut colony = Colony::new();
        colony.set_resources(["1"]);
        colony.add_colonist("A").unwrap();
        colony.add_colonist("B").unwrap();
        colony.set_preferences("A", ["1"]).unwrap();
        colony.set_preferences("B", ["1"]).unwrap();
        let result = colony.assign_greedy().unwrap();
        assert_eq!(result.unassigned, 1);
        assert_eq!(colony.assignment("B").unwrap(), None);
    }

    #[test]
    fn test_optimizers_require_one_to_one() {
        let mut colony = Colony::new();
        colony.set_resources(["1", "2", "3"]);
        colony.add_colonist("A").unwrap();
        colony.set_preferences("A", ["1", "2", "3"]).unwrap();

        let expected: ColonyError = StateError::NotBijective {
            colonists: 1,
            resources: 3,
        }
        .into();
        assert_eq!(
            colony
                .assign_local_search(&LocalSearchConfig::default())
                .unwrap_err(),
            expected
        );
        assert_eq!(
            colony
                .assign_exhaustive(&ExhaustiveConfig::default())
                .unwrap_err(),
            expected
        );
        assert_eq!(colony.assignment("A").unwrap(), None);
    }

    #[test]
    fn test_optimizers_require_preferences() {
        let mut colony = Colony::generated(2);
        colony.set_preferences("A", ["1", "2"]).unwrap();
        assert_eq!(
            colony
                .assign_exhaustive(&ExhaustiveConfig::default())
                .unwrap_err(),
            StateError::MissingPreferences { name: "B".into() }.into()
        );
    }

    #[test]
    fn test_stale_preferences_after_pool_change() {
        let mut colony = Colony::generated(2);
        colony.set_preferences("A", ["1", "2"]).unwrap();
        colony.set_preferences("B", ["2", "1"]).unwrap();
        colony.set_resources(["2", "y"]);
        assert_eq!(
            validation(colony.assign_greedy().unwrap_err()),
            ValidationError::StaleResource {
                name: "A".into(),
                resource: "1".into(),
            }
        );
        // Lists survive the pool change untouched.
        assert_eq!(colony.colonist("A").unwrap().preferences(), ["1", "2"]);
    }

    #[test]
    fn test_stale_preferences_after_pool_growth() {
        let mut colony = Colony::generated(2);
        colony.set_preferences("A", ["1", "2"]).unwrap();
        colony.set_preferences("B", ["2", "1"]).unwrap();
        colony.set_resources(["1", "2", "3"]);
        assert_eq!(
            validation(colony.instance().unwrap_err()),
            ValidationError::MismatchedPreferences {
                name: "A".into(),
                expected: 3,
                distinct: 2,
                given: 2,
            }
        );
    }

    #[test]
    fn test_jealousy_matches_instance_on_partial_state() {
        let mut colony = three();
        colony.set_preferences("C", ["2", "3", "1"]).unwrap();
        colony.assign_greedy().unwrap();
        colony.add_colonist("D").unwrap();
        colony.set_resources(["1", "2", "3", "4"]);
        for name in ["A", "B", "C"] {
            let mut prefs: Vec<String> = colony
                .colonist(name)
                .unwrap()
                .preferences()
                .to_vec();
            prefs.push("4".into());
            colony.set_preferences(name, prefs).unwrap();
        }
        colony.set_preferences("D", ["2", "1", "3", "4"]).unwrap();
        colony.add_conflict("D", "A").unwrap();

        let instance = colony.instance().unwrap();
        let held: Vec<Option<usize>> = colony
            .assignments()
            .map(|(_, r)| r.and_then(|r| colony.resources().position(|p| p == r)))
            .collect();
        assert_eq!(held, [Some(0), Some(1), Some(2), None]);
        assert_eq!(colony.jealousy(), instance.partial_jealousy(&held));
        assert_eq!(colony.jealousy(), 1);
    }

    #[test]
    fn test_jealousy_survives_stale_preferences() {
        let mut colony = three();
        colony.set_preferences("C", ["2", "3", "1"]).unwrap();
        colony.assign_greedy().unwrap();
        colony.set_resources(["2", "3", "9"]);
        assert!(colony.instance().is_err());
        // C still ranks B's "2" above its own "3".
        assert_eq!(colony.jealousy(), 1);
        assert_eq!(colony.jealous_colonists(), ["C"]);
    }

    // ---- Exchange ----

    #[test]
    fn test_exchange_swaps_and_reverts() {
        let mut colony = three();
        colony.assign_greedy().unwrap();
        colony.exchange("A", "C").unwrap();
        assert_eq!(colony.assignment("A").unwrap(), Some("3"));
        assert_eq!(colony.assignment("C").unwrap(), Some("1"));
        assert_eq!(colony.jealousy(), 1);

        colony.exchange("A", "C").unwrap();
        assert_eq!(colony.assignment("A").unwrap(), Some("1"));
        assert_eq!(colony.assignment("C").unwrap(), Some("3"));
        assert_eq!(colony.jealousy(), 0);
    }

    #[test]
    fn test_exchange_with_unassigned() {
        let mut colony = three();
        colony.add_colonist("D").unwrap();
        colony.set_resources(["1", "2", "3"]);
        colony.assign_greedy().unwrap();
        colony.exchange("A", "D").unwrap();
        assert_eq!(colony.assignment("A").unwrap(), None);
        assert_eq!(colony.assignment("D").unwrap(), Some("1"));
    }

    #[test]
    fn test_exchange_unknown_and_self() {
        let mut colony = three();
        colony.assign_greedy().unwrap();
        assert!(colony.exchange("A", "Z").is_err());
        colony.exchange("B", "B").unwrap();
        assert_eq!(colony.assignment("B").unwrap(), Some("2"));
    }

    // ---- Rendering ----

    #[test]
    fn test_display() {
        let mut colony = three();
        colony.assign_greedy().unwrap();
        let text = colony.to_string();
        assert!(text.starts_with("Colony: 3 colonists, resources [1, 2, 3]\n"));
        assert!(text.contains("  A: preferences [1, 2, 3], conflicts [B], assigned 1\n"));
        assert!(text.contains("  B: preferences [2, 3, 1], conflicts [A, C], assigned 2\n"));
    }

    #[test]
    fn test_display_blank_colonist() {
        let colony = Colony::generated(1);
        assert_eq!(
            colony.to_string(),
            "Colony: 1 colonists, resources [1]\n  A: preferences [], no conflicts, unassigned\n"
        );
    }

    #[test]
    fn test_assignments_in_order() {
        let mut colony = three();
        colony.assign_greedy().unwrap();
        let pairs: Vec<_> = colony.assignments().collect();
        assert_eq!(
            pairs,
            vec![("A", Some("1")), ("B", Some("2")), ("C", Some("3"))]
        );
    }
}
