//! Assignment lists, aka. a collection of [assignments](crate::structures::assignment) which share a [variable map](crate::structures::variable_map).
//!
//! A list is used both for a sample of configurations and for a formula of clauses.

use crate::{
    misc::log::targets::{self},
    structures::{assignment::Assignment, variable_map::VariableMap},
    types::err::{self},
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssignmentList {
    variable_map: VariableMap,
    assignments: Vec<Assignment>,
}

impl AssignmentList {
    /// An empty list over the given variable map.
    pub fn new(variable_map: VariableMap) -> Self {
        AssignmentList {
            variable_map,
            assignments: Vec::default(),
        }
    }

    pub fn from_assignments(variable_map: VariableMap, assignments: Vec<Assignment>) -> Self {
        AssignmentList {
            variable_map,
            assignments,
        }
    }

    pub fn variable_map(&self) -> &VariableMap {
        &self.variable_map
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn push(&mut self, assignment: Assignment) {
        self.assignments.push(assignment)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.assignments.iter()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Moves every assignment of the list to the given variable map, and then takes the map as the map of the list.
    ///
    /// If some assignment cannot be moved the list is left untouched.
    pub fn adapt(&mut self, to: &VariableMap) -> Result<(), err::VariableMapError> {
        if self.variable_map == *to {
            return Ok(());
        }

        let adapted = self
            .assignments
            .iter()
            .map(|assignment| assignment.adapt(&self.variable_map, to))
            .collect::<Result<Vec<_>, _>>()?;

        log::trace!(target: targets::RECONCILE, "Adapted {} assignments from {} to {} variables", adapted.len(), self.variable_map.len(), to.len());

        self.assignments = adapted;
        self.variable_map = to.clone();
        Ok(())
    }
}

impl<'a> IntoIterator for &'a AssignmentList {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}
