/*!
A bit index over a list of configurations.

# Overview

The index answers a single question: does some configuration of the index contain each literal of a combination?

For this, the index keeps a column of bits for each literal, with a row for each configuration.
The bit of row *r* in the column of literal *l* is set if and only if configuration *r* contains *l*.
So, for an atom *a* configuration *r* either:
- Assigns *a* true, and the bit of *r* is set in the column of *a* and clear in the column of -*a*.
- Assigns *a* false, and the bit of *r* is clear in the column of *a* and set in the column of -*a*.
- Leaves *a* unset, and the bit of *r* is clear in both columns.

A test of a combination is then a conjunction of the columns of each literal, word by word, stopping at the first word with some bit set.

# Growth

Configurations are only ever added, and rows are never reused.
So, once a configuration containing some combination has been added every later test of the combination succeeds.

```rust
# use otter_twise::db::sample_index::SampleIndex;
let mut index = SampleIndex::new(3);

assert!(!index.test(&[1, -2]));

index.add(&[1, -2, 3]);

assert!(index.test(&[1, -2]));
assert!(index.test(&[-2, 3]));
assert!(!index.test(&[1, 2]));
```
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        assignment_list::AssignmentList,
        literal::{IntLiteral, Literal},
    },
};

/// Bits in a word of a column.
const WORD_BITS: usize = u64::BITS as usize;

/// A column of bits for each literal of some number of atoms, with a row for each configuration.
#[derive(Clone, Debug)]
pub struct SampleIndex {
    /// The column of a literal is at the [index](Literal::index) of the literal.
    columns: Vec<Vec<u64>>,

    /// A count of configurations in the index.
    rows: usize,

    /// A count of atoms in the index.
    atom_count: usize,
}

impl SampleIndex {
    /// An empty index over atoms [1..=atom_count].
    pub fn new(atom_count: usize) -> Self {
        SampleIndex {
            columns: vec![Vec::default(); (atom_count + 1) * 2],
            rows: 0,
            atom_count,
        }
    }

    /// An index of each assignment of a list, in order.
    ///
    /// Literals of atoms outside of the variable map of the list are ignored.
    pub fn from_list(list: &AssignmentList) -> Self {
        let mut index = SampleIndex::new(list.variable_map().len());
        for configuration in list {
            index.add(configuration.literals());
        }
        index
    }

    /// A count of configurations in the index.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    /// Adds a configuration as a fresh row of the index.
    pub fn add(&mut self, configuration: &[IntLiteral]) {
        let row = self.rows;
        let (word, bit) = (row / WORD_BITS, row % WORD_BITS);

        if bit == 0 {
            for column in &mut self.columns {
                column.push(0);
            }
        }

        for literal in configuration {
            if literal.atom() as usize > self.atom_count {
                log::trace!(target: targets::SAMPLE_INDEX, "Ignored {literal}, outside of {} atoms", self.atom_count);
                continue;
            }
            self.columns[literal.index()][word] |= 1 << bit;
        }

        self.rows += 1;
    }

    /// True if some configuration of the index contains every literal of `literals`, false otherwise.
    ///
    /// An empty combination is contained in any configuration, so is contained in a non-empty index.
    pub fn test(&self, literals: &[IntLiteral]) -> bool {
        if literals
            .iter()
            .any(|literal| literal.atom() == 0 || literal.atom() as usize > self.atom_count)
        {
            return false;
        }

        let words = self.rows.div_ceil(WORD_BITS);

        'word_loop: for word in 0..words {
            let mut conjunction = match word + 1 == words && self.rows % WORD_BITS != 0 {
                true => (1_u64 << (self.rows % WORD_BITS)) - 1,
                false => u64::MAX,
            };

            for literal in literals {
                conjunction &= self.columns[literal.index()][word];
                if conjunction == 0 {
                    continue 'word_loop;
                }
            }

            return true;
        }

        false
    }
}
