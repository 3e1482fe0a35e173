/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *a* such that *a* is at least 1 and at most the number of variables in the [variable map](crate::structures::variable_map) the atom is read against.
So, the atoms of a map with *n* variables are [1..=*n*].

This representation allows atoms to be used as the indicies of a structure, e.g. `valuation[atom]`, with index 0 left unused.

# Notes
- The name of an atom is stored in a variable map, and an atom is meaningless without the map it was read against.
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom, so that every atom has a literal of either polarity.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
