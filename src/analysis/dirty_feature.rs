//! Dirty features, variables to be removed from a formula, ranked by the cost of their removal.
//!
//! Removing a variable *v* from a formula by resolution replaces each clause containing *v* and each clause containing ¬*v* with the resolvents of each pair.
//! So, with *p* clauses containing *v* and *n* clauses containing ¬*v*, removal changes the count of clauses by *p*·*n* − (*p* + *n*).
//!
//! Variables are ranked by this count, from greatest to least.
//!
//! ```rust
//! # use otter_twise::analysis::dirty_feature::DirtyFeature;
//! # use otter_twise::structures::{assignment::Assignment, assignment_list::AssignmentList, variable_map::VariableMap};
//! let mut clauses = AssignmentList::new(VariableMap::from_names(["a", "b"]));
//! clauses.push(Assignment::from(vec![1, 2]));
//! clauses.push(Assignment::from(vec![1, -2]));
//! clauses.push(Assignment::from(vec![-1, 2]));
//! clauses.push(Assignment::from(vec![-1, 2]));
//!
//! let mut features = DirtyFeature::count_clauses(&clauses);
//! DirtyFeature::rank(&mut features);
//!
//! assert_eq!(features[0].atom, 1);
//! assert_eq!(features[0].clause_count(), 0);
//! assert_eq!(features[1].clause_count(), -1);
//! ```

use serde::Serialize;

use crate::structures::{
    assignment_list::AssignmentList,
    atom::Atom,
    literal::Literal,
};

/// Counts of the clauses containing a variable, by polarity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DirtyFeature {
    pub atom: Atom,

    /// Clauses containing the variable positively, and not negatively.
    pub positive: i64,

    /// Clauses containing the variable negatively, and not positively.
    pub negative: i64,

    /// Clauses containing the variable in both polarities.
    pub mixed: i64,
}

impl DirtyFeature {
    pub fn new(atom: Atom) -> Self {
        DirtyFeature {
            atom,
            ..Default::default()
        }
    }

    pub fn inc_positive(&mut self) {
        self.positive += 1;
    }

    pub fn inc_negative(&mut self) {
        self.negative += 1;
    }

    pub fn inc_mixed(&mut self) {
        self.mixed += 1;
    }

    pub fn dec_positive(&mut self) {
        self.positive -= 1;
    }

    pub fn dec_negative(&mut self) {
        self.negative -= 1;
    }

    pub fn dec_mixed(&mut self) {
        self.mixed -= 1;
    }

    /// The change to the count of clauses from removing the variable, or [i64::MAX] if the change overflows.
    pub fn clause_count(&self) -> i64 {
        self.positive
            .checked_mul(self.negative)
            .zip(self.positive.checked_add(self.negative))
            .and_then(|(product, sum)| product.checked_sub(sum))
            .unwrap_or(i64::MAX)
    }

    /// True if the variable occurs in at most one polarity, and so removal only drops clauses.
    pub fn exp0(&self) -> bool {
        self.positive == 0 || self.negative == 0
    }

    /// True if the variable occurs at most once in some polarity, and so removal does not grow the formula.
    pub fn exp1(&self) -> bool {
        self.positive < 2 || self.negative < 2
    }

    /// A dirty feature for each variable of the list, in order of atom.
    pub fn count_clauses(clauses: &AssignmentList) -> Vec<DirtyFeature> {
        let atoms = clauses.variable_map().atoms().collect::<Vec<_>>();
        Self::count_clauses_of(clauses, &atoms)
    }

    /// A dirty feature for each of the given variables, in the order given.
    ///
    /// Each clause containing a variable counts once, as positive, negative, or mixed if the clause contains both polarities.
    /// Literals of variables outside of the variable map of the list are ignored.
    pub fn count_clauses_of(clauses: &AssignmentList, dirty: &[Atom]) -> Vec<DirtyFeature> {
        let atom_count = clauses.variable_map().len();

        let mut position = vec![None; atom_count + 1];
        let mut features = Vec::with_capacity(dirty.len());
        for atom in dirty {
            if let Some(slot) = position.get_mut(*atom as usize) {
                *slot = Some(features.len());
                features.push(DirtyFeature::new(*atom));
            }
        }

        // Polarities seen in the clause, by feature.
        let mut seen: Vec<(bool, bool)> = vec![(false, false); features.len()];
        let mut touched = Vec::new();

        for clause in clauses {
            for literal in clause {
                let Some(Some(index)) = position.get(literal.atom() as usize) else {
                    continue;
                };
                let entry = &mut seen[*index];
                if *entry == (false, false) {
                    touched.push(*index);
                }
                match literal.polarity() {
                    true => entry.0 = true,
                    false => entry.1 = true,
                }
            }

            for index in touched.drain(..) {
                let feature = &mut features[index];
                match std::mem::take(&mut seen[index]) {
                    (true, true) => feature.inc_mixed(),
                    (true, false) => feature.inc_positive(),
                    _ => feature.inc_negative(),
                }
            }
        }

        features
    }

    /// Sorts features by clause count, from greatest to least, keeping the order of features with equal counts.
    pub fn rank(features: &mut [DirtyFeature]) {
        features.sort_by_key(|feature| std::cmp::Reverse(feature.clause_count()));
    }
}

#[cfg(test)]
mod dirty_feature_tests {
    use super::*;
    use crate::structures::{assignment::Assignment, variable_map::VariableMap};

    #[test]
    fn overflow_saturates() {
        let feature = DirtyFeature {
            atom: 1,
            positive: i64::MAX / 2,
            negative: 3,
            mixed: 0,
        };
        assert_eq!(feature.clause_count(), i64::MAX);
    }

    #[test]
    fn expansions() {
        let mut feature = DirtyFeature::new(1);
        assert!(feature.exp0() && feature.exp1());

        feature.inc_positive();
        feature.inc_positive();
        feature.inc_negative();
        assert!(!feature.exp0());
        assert!(feature.exp1());
        assert_eq!(feature.clause_count(), -1);

        feature.inc_negative();
        assert!(!feature.exp1());
        assert_eq!(feature.clause_count(), 0);

        feature.dec_negative();
        feature.dec_positive();
        assert_eq!(feature.clause_count(), -1);
    }

    #[test]
    fn selected_variables_and_mixed_clauses() {
        let mut clauses = AssignmentList::new(VariableMap::from_names(["a", "b", "c"]));
        clauses.push(Assignment::from(vec![1, 2]));
        clauses.push(Assignment::from(vec![-1, 3]));
        clauses.push(Assignment::from(vec![-2, -3]));
        clauses.push(Assignment::from(vec![3, 2, -3]));

        let features = DirtyFeature::count_clauses_of(&clauses, &[3, 1]);

        assert_eq!(features[0].atom, 3);
        assert_eq!((features[0].positive, features[0].negative, features[0].mixed), (1, 1, 1));
        assert_eq!(features[1].atom, 1);
        assert_eq!((features[1].positive, features[1].negative, features[1].mixed), (1, 1, 0));
    }

    #[test]
    fn tautology_counts_once() {
        let mut clauses = AssignmentList::new(VariableMap::from_names(["a", "b"]));
        clauses.push(Assignment::from(vec![1, -1]));
        clauses.push(Assignment::from(vec![1, 2]));

        let features = DirtyFeature::count_clauses_of(&clauses, &[1]);
        assert_eq!((features[0].positive, features[0].negative, features[0].mixed), (1, 0, 1));

        let features = DirtyFeature::count_clauses(&clauses);
        assert_eq!((features[1].positive, features[1].negative, features[1].mixed), (1, 0, 0));
    }

    #[test]
    fn ranking_is_stable() {
        let mut features = vec![DirtyFeature::new(1), DirtyFeature::new(2), DirtyFeature::new(3)];
        features[2].positive = 3;
        features[2].negative = 3;

        DirtyFeature::rank(&mut features);
        assert_eq!(
            features.iter().map(|feature| feature.atom).collect::<Vec<_>>(),
            vec![3, 1, 2]
        );
    }
}
