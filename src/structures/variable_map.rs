/*!
A bijection between the names of variables and [atoms](crate::structures::atom).

A variable map with *n* variables maps names to the atoms [1..=*n*], in order.
Literals are meaningful only with respect to the map they were read against, and so literals from lists with different maps are compared only after the maps have been [reconciled](crate::structures::reconcile).

```rust
# use otter_twise::structures::variable_map::VariableMap;
let map = VariableMap::from_names(["root", "leaf"]);
let other = VariableMap::from_names(["leaf", "branch"]);

let merged = map.merge(&other);

assert_eq!(merged.id_of("root"), Some(1));
assert_eq!(merged.id_of("leaf"), Some(2));
assert_eq!(merged.id_of("branch"), Some(3));
assert_eq!(merged.name_of(3), Some("branch"));
```
*/

use std::collections::HashMap;

use crate::{
    structures::{
        atom::Atom,
        literal::{IntLiteral, Literal},
    },
    types::err::{self},
};

/// Names of variables, in the order of their atoms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariableMap {
    /// The name of atom *a* is at index *a* - 1.
    names: Vec<String>,

    /// The inverse of `names`.
    ids: HashMap<String, Atom>,
}

impl VariableMap {
    /// A map of the given names, with the first name mapped to atom 1, etc.
    ///
    /// Repeated names are ignored after their first occurrence.
    pub fn from_names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        let mut map = VariableMap::default();
        for name in names {
            let name = name.into();
            if !map.ids.contains_key(&name) {
                map.push_name(name);
            }
        }
        map
    }

    /// A map of `count` variables, each named by the decimal representation of its atom.
    pub fn with_count(count: usize) -> Self {
        VariableMap::from_names((1..=count).map(|atom| atom.to_string()))
    }

    /// Appends a fresh variable with the given name, and returns its atom.
    ///
    /// An error is returned if the name is already in use.
    pub fn add_variable(&mut self, name: impl Into<String>) -> Result<Atom, err::VariableMapError> {
        let name = name.into();
        if self.ids.contains_key(&name) {
            return Err(err::VariableMapError::DuplicateName(name));
        }
        Ok(self.push_name(name))
    }

    fn push_name(&mut self, name: String) -> Atom {
        let atom = (self.names.len() + 1) as Atom;
        self.ids.insert(name.clone(), atom);
        self.names.push(name);
        atom
    }

    /// The atom of a named variable, if the variable is in the map.
    pub fn id_of(&self, name: &str) -> Option<Atom> {
        self.ids.get(name).copied()
    }

    /// The name of an atom, if the atom is in the map.
    pub fn name_of(&self, atom: Atom) -> Option<&str> {
        self.names
            .get((atom as usize).wrapping_sub(1))
            .map(|name| name.as_str())
    }

    /// A count of variables in the map.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// An iterator over all atoms of the map, in order.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> {
        1..=(self.names.len() as Atom)
    }

    /// An iterator over all names of the map, in order of their atoms.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|name| name.as_str())
    }

    /// A map containing every variable of `self` and of `other`.
    ///
    /// Variables of `self` keep their atoms, and any variable only in `other` is appended, in the order of its atom in `other`.
    pub fn merge(&self, other: &VariableMap) -> VariableMap {
        let mut merged = self.clone();
        for name in other.names() {
            if !merged.ids.contains_key(name) {
                merged.push_name(name.to_owned());
            }
        }
        merged
    }

    /// The literal of `to` with the same variable and polarity as `literal` has in `self`.
    pub fn adapt_literal(
        &self,
        literal: IntLiteral,
        to: &VariableMap,
    ) -> Result<IntLiteral, err::VariableMapError> {
        let Some(name) = self.name_of(literal.atom()) else {
            return Err(err::VariableMapError::UnknownAtom(literal.atom()));
        };
        match to.id_of(name) {
            Some(atom) => Ok(IntLiteral::new(atom, literal.polarity())),
            None => Err(err::VariableMapError::Unmapped(name.to_owned())),
        }
    }

    /// The literal of a named variable, read with a leading '-' as negation.
    pub fn literal_from_string(&self, string: &str) -> Result<IntLiteral, err::ErrorKind> {
        let trimmed = string.trim();
        let (polarity, name) = match trimmed.strip_prefix('-') {
            Some("") => return Err(err::ErrorKind::from(err::ParseError::Negation)),
            Some(name) => (false, name),
            None if trimmed.is_empty() => {
                return Err(err::ErrorKind::from(err::ParseError::Empty));
            }
            None => (true, trimmed),
        };
        match self.id_of(name) {
            Some(atom) => Ok(IntLiteral::new(atom, polarity)),
            None => Err(err::ErrorKind::from(err::VariableMapError::Unmapped(
                name.to_owned(),
            ))),
        }
    }
}
