// Copyright 2024 The Linediff Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Longest-common-subsequence alignment of two sequences.

use std::cmp::max;

/// Computes an optimal alignment between `candidate` and `reference`.
///
/// The result is the list of index pairs `(i, j)` such that
/// `candidate[i] == reference[j]`, strictly increasing in both `i` and `j`,
/// of maximum length. Inputs with several equally long subsequences have
/// several valid alignments; downstream edit scripts are rendered into
/// literal test expectations, so the choice must be repeatable. The
/// back-trace therefore always takes a diagonal step when the compared
/// elements are equal and otherwise consumes a candidate element before a
/// reference element on equal table entries.
///
/// Runs in `O(n * m)` time and space. Empty inputs yield an empty
/// alignment.
///
/// For example (`-` marking unmatched elements):
///
/// ```text
/// align(["a", "b", "c"], ["a", "b", "c"]) => [(0,0), (1,1), (2,2)]
/// align(["a", "x", "c"], ["a", "b", "c"]) => [(0,0), (2,2)]
/// align(["a", "b"],      ["b", "a"])      => [(0,1)]
/// ```
pub fn align<T: Eq>(candidate: &[T], reference: &[T]) -> Vec<(usize, usize)> {
    let n = candidate.len();
    let m = reference.len();
    if n == 0 || m == 0 {
        return vec![];
    }

    // lengths[i][j] is the LCS length of candidate[..i] and reference[..j].
    let mut lengths = vec![vec![0_usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            lengths[i][j] = if candidate[i - 1] == reference[j - 1] {
                lengths[i - 1][j - 1] + 1
            } else {
                max(lengths[i - 1][j], lengths[i][j - 1])
            };
        }
    }

    let mut pairs = vec![];
    let mut i = n;
    let mut j = m;
    while i > 0 && j > 0 {
        if candidate[i - 1] == reference[j - 1] {
            pairs.push((i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if lengths[i - 1][j] >= lengths[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    pairs.reverse();
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_pairs() -> Vec<(usize, usize)> {
        vec![]
    }

    #[test]
    fn test_align_empty() {
        assert_eq!(align::<&str>(&[], &[]), no_pairs());
        assert_eq!(align(&[], &["a"]), no_pairs());
        assert_eq!(align(&["a"], &[]), no_pairs());
    }

    #[test]
    fn test_align_identical() {
        assert_eq!(
            align(&["a", "b", "c"], &["a", "b", "c"]),
            vec![(0, 0), (1, 1), (2, 2)]
        );
    }

    #[test]
    fn test_align_nothing_in_common() {
        assert_eq!(align(&["a", "b"], &["x", "y"]), no_pairs());
    }

    #[test]
    fn test_align_interleaved() {
        assert_eq!(
            align(&["a", "x", "b"], &["a", "b", "y"]),
            vec![(0, 0), (2, 1)]
        );
    }

    #[test]
    fn test_align_blank_lines_match() {
        assert_eq!(align(&["", "a"], &["", "a"]), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_align_duplicate_elements() {
        // Both occurrences on the candidate side could pair with the single
        // reference "a"; the back-trace settles on the later one.
        assert_eq!(align(&["a", "a"], &["a"]), vec![(1, 0)]);
        assert_eq!(align(&["a"], &["a", "a"]), vec![(0, 1)]);
    }

    #[test]
    fn test_align_tie_break_is_deterministic() {
        // ["a", "b"] vs ["b", "a"] has two one-element alignments. Equal
        // table entries consume the candidate side first, which keeps "a".
        assert_eq!(align(&["a", "b"], &["b", "a"]), vec![(0, 1)]);
    }

    #[test]
    fn test_align_crossing_matches_cannot_both_survive() {
        // "c" appearing early on one side and late on the other must not
        // produce a non-monotonic alignment.
        let pairs = align(&["c", "a", "b"], &["a", "b", "c"]);
        assert_eq!(pairs, vec![(1, 0), (2, 1)]);
    }

    #[test]
    fn test_align_is_monotonic() {
        let candidate = ["x", "a", "x", "b", "x", "c"];
        let reference = ["a", "y", "b", "y", "c", "y"];
        let pairs = align(&candidate, &reference);
        for window in pairs.windows(2) {
            assert!(window[0].0 < window[1].0);
            assert!(window[0].1 < window[1].1);
        }
        for &(i, j) in &pairs {
            assert_eq!(candidate[i], reference[j]);
        }
    }
}
