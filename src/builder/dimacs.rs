/*!
Reading and writing assignment lists in DIMACS form.

The same form is used for both formulas and samples:
- Each assignment is a sequence of non-zero integers terminated by `0`, and may span lines.
- A comment line `c <id> <name>` names the variable with the given id.
  Any other comment line is ignored.
- An optional problem line `p cnf <variables> <assignments>` gives the count of variables.
- A line starting with `%` ends the input.

Variables without a name are named by their id.
Duplicate literals within an assignment are dropped.

```rust
# use otter_twise::builder::dimacs::{read_dimacs, write_dimacs};
let dimacs = "
c 1 root
c 2 leaf
p cnf 3 2
 1 -2 0
-1  2  3 3 0
";

let list = read_dimacs(dimacs.as_bytes()).unwrap();

assert_eq!(list.variable_map().len(), 3);
assert_eq!(list.variable_map().name_of(2), Some("leaf"));
assert_eq!(list.variable_map().name_of(3), Some("3"));
assert_eq!(list.assignments()[1].literals(), &[-1, 2, 3]);

let again = read_dimacs(write_dimacs(&list).as_bytes()).unwrap();
assert_eq!(list, again);
```
*/

use std::{collections::HashMap, io::BufRead};

use crate::{
    misc::log::targets::{self},
    structures::{
        assignment::Assignment,
        assignment_list::AssignmentList,
        atom::Atom,
        literal::{IntLiteral, Literal},
        variable_map::VariableMap,
    },
    types::err::{self},
};

/// Reads an assignment list in DIMACS form.
///
/// ```rust,ignore
/// let list = read_dimacs(BufReader::new(&file))?;
/// ```
pub fn read_dimacs(mut reader: impl BufRead) -> Result<AssignmentList, err::ErrorKind> {
    let mut buffer = String::with_capacity(1024);
    let mut names = HashMap::<Atom, String>::default();
    let mut assignments = Vec::<Assignment>::default();
    let mut assignment_buffer = Assignment::default();

    let mut specified_count = None;
    let mut atom_count: usize = 0;
    let mut line_counter = 0;

    'line_loop: loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
        }

        let line = buffer.trim();

        match line.chars().next() {
            None => continue 'line_loop,

            Some('%') => break 'line_loop,

            Some('c') => {
                let mut details = line.split_whitespace().skip(1);
                let id = details.next().and_then(|id| id.parse::<Atom>().ok());
                let name = details.collect::<Vec<_>>().join(" ");

                if let Some(id) = id.filter(|id| *id > 0 && !name.is_empty()) {
                    atom_count = atom_count.max(id as usize);
                    names.insert(id, name);
                }
            }

            Some('p') => {
                let mut problem_details = line.split_whitespace();
                let count = match problem_details.nth(2).map(|string| string.parse::<usize>()) {
                    Some(Ok(count)) => count,
                    _ => return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification)),
                };
                specified_count = Some(count);
                atom_count = atom_count.max(count);
            }

            _ => {
                for item in line.split_whitespace() {
                    match item {
                        "0" => assignments.push(std::mem::take(&mut assignment_buffer)),

                        _ => {
                            let literal = match item.parse::<IntLiteral>() {
                                Ok(int) if int != 0 && int != IntLiteral::MIN => int,
                                _ => {
                                    return Err(err::ErrorKind::from(err::ParseError::Literal(
                                        line_counter,
                                    )))
                                }
                            };

                            atom_count = atom_count.max(literal.atom() as usize);
                            if !assignment_buffer.contains(literal) {
                                assignment_buffer.push(literal);
                            }
                        }
                    }
                }
            }
        }
    }

    if !assignment_buffer.is_empty() {
        log::warn!(target: targets::BUILDER, "Final assignment is missing a terminating 0");
        assignments.push(assignment_buffer);
    }

    if let Some(count) = specified_count.filter(|count| *count < atom_count) {
        log::warn!(target: targets::BUILDER, "Problem line specifies {count} variables, though {atom_count} are used");
    }

    let mut variable_map = VariableMap::default();
    for atom in 1..=(atom_count as Atom) {
        let name = match names.remove(&atom) {
            Some(name) => name,
            None => atom.to_string(),
        };
        variable_map.add_variable(name)?;
    }

    log::info!(target: targets::BUILDER, "Read {} assignments over {} variables", assignments.len(), variable_map.len());

    Ok(AssignmentList::from_assignments(variable_map, assignments))
}

/// An assignment list in DIMACS form, with a comment naming each variable.
pub fn write_dimacs(list: &AssignmentList) -> String {
    let mut dimacs = String::default();

    for (atom, name) in list.variable_map().atoms().zip(list.variable_map().names()) {
        dimacs.push_str(&format!("c {atom} {name}\n"));
    }

    dimacs.push_str(&format!("p cnf {} {}\n", list.variable_map().len(), list.len()));

    for assignment in list {
        dimacs.push_str(&assignment.as_dimacs(true));
        dimacs.push('\n');
    }

    dimacs
}
