//! Index-space snapshot of a colony and the jealousy metric.

use crate::error::{ColonyError, Result, StateError, ValidationError};

/// Immutable view of a colony in index space.
///
/// Colonists are numbered `0..colonist_count()` and resources
/// `0..resource_count()`. A colonist's preference row is either empty
/// (not yet configured) or a permutation of all resource indices, most
/// wanted first. Conflicts are symmetric adjacency lists.
///
/// Runners build and score candidate assignments against an `Instance`
/// without touching the colony until a winner is chosen.
#[derive(Debug, Clone)]
pub struct Instance {
    names: Vec<String>,
    resource_count: usize,
    preferences: Vec<Vec<usize>>,
    /// `ranks[c][r]` is the position of resource `r` in colonist `c`'s list.
    ranks: Vec<Vec<usize>>,
    conflicts: Vec<Vec<usize>>,
}

impl Instance {
    /// Builds an instance from raw index data.
    ///
    /// Colonists are named `c0`, `c1`, … in error messages. Duplicate
    /// conflict pairs are merged.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_colony::jealousy::Instance;
    ///
    /// let instance = Instance::new(
    ///     2,
    ///     vec![vec![0, 1], vec![0, 1]],
    ///     &[(0, 1)],
    /// ).unwrap();
    /// // Colonist 1 wants resource 0, which its rival holds.
    /// assert_eq!(instance.jealousy(&[0, 1]), 1);
    /// ```
    pub fn new(
        resource_count: usize,
        preferences: Vec<Vec<usize>>,
        conflicts: &[(usize, usize)],
    ) -> Result<Self> {
        let names = (0..preferences.len()).map(|c| format!("c{c}")).collect();
        let n = preferences.len();

        let mut adjacency = vec![Vec::new(); n];
        for &(a, b) in conflicts {
            for c in [a, b] {
                if c >= n {
                    return Err(ColonyError::unknown(&format!("c{c}")));
                }
            }
            if a == b {
                return Err(ValidationError::SelfConflict {
                    name: format!("c{a}"),
                }
                .into());
            }
            if !adjacency[a].contains(&b) {
                adjacency[a].push(b);
                adjacency[b].push(a);
            }
        }

        Self::from_parts(names, resource_count, preferences, adjacency)
    }

    /// Builds an instance from already-indexed colony data.
    pub(crate) fn from_parts(
        names: Vec<String>,
        resource_count: usize,
        preferences: Vec<Vec<usize>>,
        conflicts: Vec<Vec<usize>>,
    ) -> Result<Self> {
        let mut ranks = Vec::with_capacity(preferences.len());
        for (c, row) in preferences.iter().enumerate() {
            if row.is_empty() {
                ranks.push(Vec::new());
                continue;
            }
            let mut rank = vec![usize::MAX; resource_count];
            let mut distinct = 0;
            for (pos, &r) in row.iter().enumerate() {
                if r < resource_count && rank[r] == usize::MAX {
                    rank[r] = pos;
                    distinct += 1;
                }
            }
            if distinct != resource_count || row.len() != resource_count {
                return Err(ValidationError::MismatchedPreferences {
                    name: names[c].clone(),
                    expected: resource_count,
                    distinct,
                    given: row.len(),
                }
                .into());
            }
            ranks.push(rank);
        }

        Ok(Self {
            names,
            resource_count,
            preferences,
            ranks,
            conflicts,
        })
    }

    /// Number of colonists.
    pub fn colonist_count(&self) -> usize {
        self.preferences.len()
    }

    /// Number of resources in the pool.
    pub fn resource_count(&self) -> usize {
        self.resource_count
    }

    /// Name of colonist `c`.
    pub fn name(&self, c: usize) -> &str {
        &self.names[c]
    }

    /// Resource indices in colonist `c`'s preference order.
    pub fn preferences(&self, c: usize) -> &[usize] {
        &self.preferences[c]
    }

    /// Colonists in conflict with `c`.
    pub fn conflicts(&self, c: usize) -> &[usize] {
        &self.conflicts[c]
    }

    /// Rank of resource `r` for colonist `c` (0 = most wanted), or `None`
    /// if `c` has no preferences.
    pub fn rank(&self, c: usize, r: usize) -> Option<usize> {
        self.ranks[c].get(r).copied()
    }

    /// Checks the 1:1 precondition of the swap and permutation searches:
    /// as many colonists as resources, every colonist with preferences.
    pub fn require_bijective(&self) -> Result<()> {
        if self.colonist_count() != self.resource_count {
            return Err(StateError::NotBijective {
                colonists: self.colonist_count(),
                resources: self.resource_count,
            }
            .into());
        }
        if let Some(c) = self.ranks.iter().position(Vec::is_empty) {
            return Err(StateError::MissingPreferences {
                name: self.names[c].clone(),
            }
            .into());
        }
        Ok(())
    }

    /// Jealousy of a complete assignment (`assignment[c]` is the resource
    /// held by colonist `c`).
    ///
    /// A colonist is jealous if any rival holds a resource it ranks
    /// strictly above its own; each colonist counts at most once.
    ///
    /// # Panics
    ///
    /// If `assignment` is shorter than [`colonist_count`](Self::colonist_count)
    /// or names a resource outside `0..resource_count()`.
    pub fn jealousy(&self, assignment: &[usize]) -> usize {
        debug_assert_eq!(assignment.len(), self.colonist_count());
        self.count_jealous(|c| Some(assignment[c]))
    }

    /// Jealousy of a partial assignment.
    ///
    /// Unassigned colonists and colonists without preferences are never
    /// jealous, and an unassigned rival never makes anyone jealous.
    ///
    /// # Panics
    ///
    /// If `assignment` is shorter than [`colonist_count`](Self::colonist_count).
    pub fn partial_jealousy(&self, assignment: &[Option<usize>]) -> usize {
        debug_assert_eq!(assignment.len(), self.colonist_count());
        self.count_jealous(|c| assignment[c])
    }

    fn count_jealous<F>(&self, held: F) -> usize
    where
        F: Fn(usize) -> Option<usize> + Copy,
    {
        (0..self.colonist_count())
            .filter(|&c| self.jealous_under(c, held))
            .count()
    }

    fn jealous_under<F>(&self, c: usize, held: F) -> bool
    where
        F: Fn(usize) -> Option<usize>,
    {
        let Some(own) = held(c).and_then(|r| self.rank(c, r)) else {
            return false;
        };
        self.conflicts[c].iter().any(|&rival| {
            held(rival)
                .and_then(|r| self.rank(c, r))
                .is_some_and(|theirs| theirs < own)
        })
    }
}
