/*!
A session method for boolean constraint propagation.

# Overview
Propagates an atom being assigned some value, given as a literal.

This is done by examining clauses watching the negation of the literal, and for each such clause either:
- Leaving the watches of the clause unchanged, as the other watched literal holds.
- Moving the watch to some literal of the clause which is not false.
- Assigning the other watched literal, as every other literal of the clause is false.
- Noting a conflict, as every literal of the clause is false.

# Watches

The watched literals of a clause are the literals at index 0 and index 1 of the clause.
Before inspection, a clause is arranged so the falsified watch is at index 1, and so the literal at index 0 is the only watch which may hold or be assigned.

The watch list being inspected is taken from the session for the duration of propagation, and restored after.
As the falsified literal has a value it is never a candidate for a fresh watch, and so no clause is added to the taken list in the meantime.

Keys to clauses which have been removed from the session are dropped from the list when found.

```rust,ignore
match self.propagate() {
    Err(err::BCPError::Conflict(key)) => match self.backtrack() { ... }
    Ok(()) => match self.make_decision() { ... }
    ...
}
```
*/

use rand::SeedableRng;

use crate::{
    misc::log::targets::{self},
    session::GenericSession,
    structures::literal::{IntLiteral, Literal},
    types::err::{self},
};

/// The value of a literal on a valuation.
fn value_of(valuation: &[Option<bool>], literal: IntLiteral) -> Option<bool> {
    valuation[literal.atom() as usize].map(|value| value == literal.polarity())
}

impl<R: rand::Rng + SeedableRng> GenericSession<R> {
    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    ///
    /// # Soundness
    /// The literal should hold on the current valuation.
    pub fn bcp(&mut self, literal: IntLiteral) -> Result<(), err::BCPError> {
        let falsified = literal.negate();
        let mut watch_list = std::mem::take(&mut self.watches[falsified.index()]);
        let mut result = Ok(());

        let mut index = 0;
        'watch_loop: while index < watch_list.len() {
            let key = watch_list[index];

            let clause = match self.clause_db.get_mut(key) {
                Some(clause) => clause,
                None => {
                    watch_list.swap_remove(index);
                    continue 'watch_loop;
                }
            };

            if clause[0] == falsified {
                clause.swap(0, 1);
            }
            if clause[1] != falsified {
                log::error!(target: targets::PROPAGATION, "Clause {key:?} is watched by {falsified} without containing {falsified}");
                result = Err(err::BCPError::CorruptWatch(key));
                break 'watch_loop;
            }

            if value_of(&self.valuation, clause[0]) == Some(true) {
                index += 1;
                continue 'watch_loop;
            }

            let replacement = clause[2..]
                .iter()
                .position(|candidate| value_of(&self.valuation, *candidate) != Some(false));

            if let Some(offset) = replacement {
                clause.swap(1, offset + 2);
                let fresh_watch = clause[1];
                self.watches[fresh_watch.index()].push(key);
                watch_list.swap_remove(index);
                continue 'watch_loop;
            }

            let watch = clause[0];
            match value_of(&self.valuation, watch) {
                None => {
                    log::trace!(target: targets::PROPAGATION, "Consequence of {key:?} and {literal} is {watch}");
                    self.counters.propagations += 1;
                    self.record_assignment(watch);
                    index += 1;
                }

                Some(_) => {
                    log::trace!(target: targets::PROPAGATION, "Consequence of {key:?} and {literal} is contradiction");
                    result = Err(err::BCPError::Conflict(key));
                    break 'watch_loop;
                }
            }
        }

        watch_list.append(&mut self.watches[falsified.index()]);
        self.watches[falsified.index()] = watch_list;

        result
    }

    /// Propagates literals on the trail until every literal has been propagated or a conflict is found.
    pub fn propagate(&mut self) -> Result<(), err::BCPError> {
        while let Some(&literal) = self.trail.get(self.q_head) {
            self.bcp(literal)?;
            self.q_head += 1;
        }
        Ok(())
    }
}
