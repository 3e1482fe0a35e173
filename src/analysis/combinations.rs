/*!
Enumeration of combinations of variables, in lexicographic order.

A combination of size *t* over *n* variables is a strictly increasing sequence of *t* indicies from [0..n).
Combinations are ordered lexicographically, and so the last position varies fastest.

Each combination has a *rank*, its position in the order, and any range of ranks may be enumerated.
So, the combinations of a computation may be split into disjoint ranges and enumerated independently.

```rust
# use otter_twise::analysis::combinations::{binomial, LexicographicIterator};
let mut combinations = LexicographicIterator::new(2, 3);

assert_eq!(combinations.next_combination(), Some([0, 1].as_slice()));
assert_eq!(combinations.next_combination(), Some([0, 2].as_slice()));
assert_eq!(combinations.next_combination(), Some([1, 2].as_slice()));
assert_eq!(combinations.next_combination(), None);

let mut tail = LexicographicIterator::with_range(2, 4, 3..binomial(4, 2));
assert_eq!(tail.next_combination(), Some([1, 2].as_slice()));
```

The iterator lends each combination, rather than returning an owned copy.
*/

use std::ops::Range;

/// The number of ways to choose `k` things from `n` things, saturating at [usize::MAX].
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);

    // As k <= n / 2, choose(n, i) increases with i, and so once past usize::MAX stays past.
    let mut result: u128 = 1;
    for i in 0..k {
        // result * (n - i) is divisible by (i + 1), as result is choose(n, i).
        result = result * (n - i) as u128 / (i + 1) as u128;
        if result > usize::MAX as u128 {
            return usize::MAX;
        }
    }
    result as usize
}

pub struct LexicographicIterator {
    /// Variables to choose from.
    n: usize,

    /// The current combination.
    elements: Vec<usize>,

    /// The rank of the next combination.
    rank: usize,

    /// One past the rank of the last combination.
    end: usize,

    started: bool,
}

impl LexicographicIterator {
    /// Every combination of size `t` over `n` variables.
    pub fn new(t: usize, n: usize) -> Self {
        Self::with_range(t, n, 0..binomial(n, t))
    }

    /// The combinations of size `t` over `n` variables with rank in `range`.
    ///
    /// The range is clamped to the ranks which exist.
    pub fn with_range(t: usize, n: usize, range: Range<usize>) -> Self {
        let total = binomial(n, t);
        let start = range.start.min(total);
        let end = range.end.clamp(start, total);

        LexicographicIterator {
            n,
            elements: unrank(t, n, start),
            rank: start,
            end,
            started: false,
        }
    }

    /// The rank of the combination to be returned by the next call to [next_combination](Self::next_combination).
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// A count of combinations yet to be returned.
    pub fn remaining(&self) -> usize {
        self.end - self.rank
    }

    /// The next combination, if any.
    pub fn next_combination(&mut self) -> Option<&[usize]> {
        if self.rank >= self.end {
            return None;
        }

        if self.started && !self.advance() {
            self.end = self.rank;
            return None;
        }
        self.started = true;
        self.rank += 1;

        Some(&self.elements)
    }

    /// Moves to the next combination in lexicographic order, returning false if there is none.
    fn advance(&mut self) -> bool {
        let t = self.elements.len();

        let mut position = t;
        while position > 0 {
            position -= 1;
            if self.elements[position] < self.n - t + position {
                self.elements[position] += 1;
                for following in (position + 1)..t {
                    self.elements[following] = self.elements[following - 1] + 1;
                }
                return true;
            }
        }
        false
    }
}

/// The combination of size `t` over `n` variables with the given rank, or the first combination if the rank is too large.
fn unrank(t: usize, n: usize, mut rank: usize) -> Vec<usize> {
    let mut elements = Vec::with_capacity(t);
    if t > n || rank >= binomial(n, t) {
        elements.extend(0..t);
        return elements;
    }

    let mut candidate = 0;
    for position in 0..t {
        loop {
            let with_candidate = binomial(n - candidate - 1, t - position - 1);
            if rank < with_candidate {
                break;
            }
            rank -= with_candidate;
            candidate += 1;
        }
        elements.push(candidate);
        candidate += 1;
    }
    elements
}
