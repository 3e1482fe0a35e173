/*!
Methods for choosing the value of an atom.

# Overview

The decision procedure is straightforward:
- Search through the order of atoms of the session for the first atom which is not assigned a value, and assign a value given by the [selection strategy](crate::session::SelectionStrategy) of the session.

```rust,ignore
let atom = self.order.iter().find(|atom| self.valuation[atom].is_none())?;
let decision_as_literal = IntLiteral::new(atom, value);
```

As the order is fixed between [shuffles](crate::session::GenericSession::shuffle_order), the order of atoms is the only source of variation between solves with a non-random strategy.

# Decisions as literals

Strictly a decision is to value some atom *a* with value *v*.
Still, it is convenient to represent such a decision as a literal with atom *a* and polarity *v*.
For example, a decision to value *p* with value *false* can be represented with the literal *-p*.
*/

use rand::SeedableRng;

use crate::{
    misc::log::targets::{self},
    session::{GenericSession, SelectionStrategy},
    structures::literal::{IntLiteral, Literal},
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
pub enum DecisionOk {
    /// Some truth value was chosen for some atom.
    Literal(IntLiteral),

    /// All atoms had already been assigned truth values, so no decision could be made.
    Exhausted,
}

impl<R: rand::Rng + SeedableRng> GenericSession<R> {
    /// Chooses an atom without a value, and a value for the atom.
    ///
    /// The choice is returned, and is not recorded.
    pub fn make_decision(&mut self) -> DecisionOk {
        let chosen_atom = self
            .order
            .iter()
            .copied()
            .find(|atom| self.valuation[*atom as usize].is_none());

        match chosen_atom {
            Some(atom) => {
                self.counters.decisions += 1;

                let polarity = match self.config.selection {
                    SelectionStrategy::Negative => false,
                    SelectionStrategy::Positive => true,
                    SelectionStrategy::Random => self.rng.gen_bool(0.5),
                };

                let decision = IntLiteral::new(atom, polarity);
                log::trace!(target: targets::SESSION, "Decision {decision}");
                DecisionOk::Literal(decision)
            }

            None => DecisionOk::Exhausted,
        }
    }
}
