//! Greedy matching-block sequence matcher
//!
//! Reproduces the classic "Ratcliff/Obershelp"-style matcher: find the
//! longest contiguous matching block, then repeat on the unmatched regions to
//! its left and right, summing block sizes. This is a heuristic, not an
//! optimal LCS, and score values depend on its exact tie-breaking:
//!
//! - among equally long blocks the one starting earliest in `a` wins, then
//!   earliest in `b`;
//! - regions are processed from an explicit work stack, never recursively.
//!
//! The optional "autojunk" rule mirrors the reference implementation: when
//! `b` has at least 200 elements, any element occurring more than
//! `len(b) / 100 + 1` times is not used to seed matches (it can still extend
//! one).

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Minimum length of `b` before the autojunk rule kicks in
pub const AUTOJUNK_MIN_LEN: usize = 200;

/// A matching block: `a[a..a + size] == b[b..b + size]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

/// Sequence matcher over two borrowed slices
pub struct SequenceMatcher<'s, T: Eq + Hash> {
    a: &'s [T],
    b: &'s [T],
    /// Positions of each element in `b`, ascending, minus popular elements
    b2j: FxHashMap<&'s T, Vec<usize>>,
}

impl<'s, T: Eq + Hash> SequenceMatcher<'s, T> {
    /// Create a matcher with the autojunk rule disabled
    pub fn new(a: &'s [T], b: &'s [T]) -> Self {
        Self::with_autojunk(a, b, false)
    }

    pub fn with_autojunk(a: &'s [T], b: &'s [T], autojunk: bool) -> Self {
        let mut b2j: FxHashMap<&'s T, Vec<usize>> = FxHashMap::default();
        for (j, elt) in b.iter().enumerate() {
            b2j.entry(elt).or_default().push(j);
        }

        if autojunk && b.len() >= AUTOJUNK_MIN_LEN {
            let ntest = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= ntest);
        }

        Self { a, b, b2j }
    }

    /// Longest matching block in `a[alo..ahi]` and `b[blo..bhi]`
    ///
    /// Returns a zero-size match at `(alo, blo)` when nothing matches.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let (a, b) = (self.a, self.b);
        let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0usize);

        // j2len[j] = length of the match ending at a[i - 1] and b[j]
        let mut j2len: FxHashMap<usize, usize> = FxHashMap::default();
        let mut new_j2len: FxHashMap<usize, usize> = FxHashMap::default();

        for i in alo..ahi {
            new_j2len.clear();
            if let Some(positions) = self.b2j.get(&a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = match j.checked_sub(1) {
                        Some(prev) => j2len.get(&prev).copied().unwrap_or(0) + 1,
                        None => 1,
                    };
                    new_j2len.insert(j, k);
                    if k > bestsize {
                        besti = i + 1 - k;
                        bestj = j + 1 - k;
                        bestsize = k;
                    }
                }
            }
            std::mem::swap(&mut j2len, &mut new_j2len);
        }

        // Popular elements never seed a match but may extend one
        while besti > alo && bestj > blo && a[besti - 1] == b[bestj - 1] {
            besti -= 1;
            bestj -= 1;
            bestsize += 1;
        }
        while besti + bestsize < ahi
            && bestj + bestsize < bhi
            && a[besti + bestsize] == b[bestj + bestsize]
        {
            bestsize += 1;
        }

        Match {
            a: besti,
            b: bestj,
            size: bestsize,
        }
    }

    /// All matching blocks, sorted by position, excluding the zero-size sentinel
    pub fn matching_blocks(&self) -> Vec<Match> {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            blocks.push(m);
            if alo < m.a && blo < m.b {
                queue.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                queue.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
        }

        blocks.sort_unstable();
        blocks
    }

    /// Total number of matched elements across all matching blocks
    pub fn matched_len(&self) -> usize {
        self.matching_blocks().iter().map(|m| m.size).sum()
    }

    /// `2 * M / T` over the greedy matching blocks
    pub fn ratio(&self) -> f64 {
        calculate_ratio(self.matched_len(), self.a.len() + self.b.len())
    }

    /// Upper bound on `ratio()`: size of the multiset intersection, ignoring order
    pub fn quick_ratio(&self) -> f64 {
        let mut available: FxHashMap<&T, usize> = FxHashMap::default();
        for elt in self.b {
            *available.entry(elt).or_insert(0) += 1;
        }

        let mut matches = 0;
        for elt in self.a {
            if let Some(count) = available.get_mut(elt) {
                if *count > 0 {
                    *count -= 1;
                    matches += 1;
                }
            }
        }

        calculate_ratio(matches, self.a.len() + self.b.len())
    }
}

/// Two empty sequences are identical
fn calculate_ratio(matches: usize, length: usize) -> f64 {
    if length == 0 {
        return 1.0;
    }
    2.0 * matches as f64 / length as f64
}
