//! Greedy first-available assignment.
//!
//! # Algorithm
//!
//! 1. Mark every resource as available
//! 2. For each colonist in index (insertion) order, walk its preference
//!    list from most to least wanted and take the first available resource
//! 3. Colonists whose list runs out stay unassigned
//!
//! Each colonist gets its best choice *among what is left*, so the result
//! depends on colonist order and is not jealousy-optimal.

use crate::jealousy::Instance;

/// Result of a greedy pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyResult {
    /// Resource index per colonist, `None` when nothing was left.
    pub assignment: Vec<Option<usize>>,
    /// Jealousy of the assignment.
    pub jealousy: usize,
    /// Number of colonists left without a resource.
    pub unassigned: usize,
}

impl GreedyResult {
    /// Returns the assignment without the `Option` wrapper if every
    /// colonist received a resource.
    pub fn as_complete(&self) -> Option<Vec<usize>> {
        self.assignment.iter().copied().collect()
    }
}

/// Greedy assigner.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Assigns resources in colonist order, first available preference wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_colony::jealousy::Instance;
    /// use u_colony::greedy::GreedyRunner;
    ///
    /// let instance = Instance::new(2, vec![vec![0, 1], vec![1, 0]], &[]).unwrap();
    /// let result = GreedyRunner::run(&instance);
    /// assert_eq!(result.assignment, vec![Some(0), Some(1)]);
    /// assert_eq!(result.jealousy, 0);
    /// ```
    pub fn run(instance: &Instance) -> GreedyResult {
        let mut available = vec![true; instance.resource_count()];
        let mut assignment = Vec::with_capacity(instance.colonist_count());

        for c in 0..instance.colonist_count() {
            let pick = instance
                .preferences(c)
                .iter()
                .copied()
                .find(|&r| available[r]);
            if let Some(r) = pick {
                available[r] = false;
            }
            assignment.push(pick);
        }

        let unassigned = assignment.iter().filter(|slot| slot.is_none()).count();
        let jealousy = instance.partial_jealousy(&assignment);

        GreedyResult {
            assignment,
            jealousy,
            unassigned,
        }
    }
}
