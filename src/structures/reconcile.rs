/*!
Reconciliation of variable maps.

Literals from lists with different variable maps cannot be compared directly, as the same atom may name different variables.
So, before any comparison, a *reference* map is extended to a map which contains every variable of every input, and each input is moved to the extended map.

- Variables of the reference map keep their atoms, so a list over the reference map is unchanged when moved.
- Variables only in some other input are appended, in the order the inputs are included and, within an input, in the order of their atoms.

```rust
# use otter_twise::structures::{assignment_list::AssignmentList, reconcile::Reconciler, variable_map::VariableMap};
# use otter_twise::structures::assignment::Assignment;
let mut sample = AssignmentList::new(VariableMap::from_names(["a", "b"]));
sample.push(Assignment::from(vec![1, -2]));

let mut formula = AssignmentList::new(VariableMap::from_names(["b", "c"]));
formula.push(Assignment::from(vec![-1, 2]));

let mut reconciler = Reconciler::from_reference(sample.variable_map());
reconciler.include(formula.variable_map());
let merged = reconciler.finish();

assert!(sample.adapt(&merged).is_ok());
assert!(formula.adapt(&merged).is_ok());

assert_eq!(sample.assignments()[0].literals(), &[1, -2]);
assert_eq!(formula.assignments()[0].literals(), &[-2, 3]);
```
*/

use crate::{misc::log::targets::{self}, structures::variable_map::VariableMap};

/// Accumulates a merged variable map from a reference map and any number of other maps.
pub struct Reconciler {
    merged: VariableMap,
}

impl Reconciler {
    pub fn from_reference(reference: &VariableMap) -> Self {
        Reconciler {
            merged: reference.clone(),
        }
    }

    /// Extends the merged map with any variable of `map` not already present.
    pub fn include(&mut self, map: &VariableMap) -> &mut Self {
        let before = self.merged.len();
        self.merged = self.merged.merge(map);
        if self.merged.len() > before {
            log::debug!(target: targets::RECONCILE, "Appended {} variables", self.merged.len() - before);
        }
        self
    }

    pub fn finish(self) -> VariableMap {
        self.merged
    }
}
