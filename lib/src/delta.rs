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

//! Classified differences and their canonical rendering.

use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

/// The classification of one contiguous run of differing lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeltaKind {
    /// The reference has lines the candidate is missing.
    Insert,
    /// The candidate has lines the reference does not.
    Delete,
    /// Both sides have lines here and they differ.
    Replace,
}

/// One classified, anchored difference between a candidate and a reference
/// line sequence.
///
/// A delta covers one maximal gap between aligned lines: all unmatched
/// candidate lines and all unmatched reference lines of that gap, even when
/// their counts differ. `Display` renders the report that assertion
/// failure messages embed byte-for-byte, so the format must not change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delta {
    kind: DeltaKind,
    candidate_lines: Vec<String>,
    reference_lines: Vec<String>,
    anchor: usize,
}

impl Delta {
    /// Classifies one gap of unmatched lines. `anchor` is the 1-based
    /// reference position at which the gap begins.
    ///
    /// The kind follows from which sides are populated: reference lines
    /// only is an insert, candidate lines only a delete, both a replace.
    /// The edit-script builder never materializes an empty gap.
    pub(crate) fn new(
        candidate_lines: Vec<String>,
        reference_lines: Vec<String>,
        anchor: usize,
    ) -> Self {
        let kind = match (candidate_lines.is_empty(), reference_lines.is_empty()) {
            (true, false) => DeltaKind::Insert,
            (false, true) => DeltaKind::Delete,
            (false, false) => DeltaKind::Replace,
            (true, true) => panic!("delta must cover at least one line"),
        };
        Delta {
            kind,
            candidate_lines,
            reference_lines,
            anchor,
        }
    }

    /// The classification of this delta.
    pub fn kind(&self) -> DeltaKind {
        self.kind
    }

    /// 1-based position in the reference sequence where this delta begins.
    ///
    /// For inserts and replaces this is the first reference line the delta
    /// touches. A delete touches no reference lines; its anchor is the
    /// reference position immediately adjacent to the deletion point, which
    /// is `reference.len() + 1` for a trailing delete.
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// The candidate lines covered by this delta. Empty for inserts.
    pub fn candidate_lines(&self) -> &[String] {
        &self.candidate_lines
    }

    /// The reference lines covered by this delta. Empty for deletes.
    pub fn reference_lines(&self) -> &[String] {
        &self.reference_lines
    }
}

impl Display for Delta {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            DeltaKind::Replace => {
                writeln!(f, "Changed content at line {}:", self.anchor)?;
                writeln!(f, "expecting:")?;
                write_line_list(f, &self.reference_lines)?;
                writeln!(f, "but was:")?;
                write_line_list(f, &self.candidate_lines)
            }
            DeltaKind::Insert => {
                writeln!(f, "Missing content at line {}:", self.anchor)?;
                write_line_list(f, &self.reference_lines)
            }
            DeltaKind::Delete => {
                writeln!(f, "Extra content at line {}:", self.anchor)?;
                write_line_list(f, &self.candidate_lines)
            }
        }
    }
}

/// Renders a bracketed line list. Every element after the first starts a
/// new physical line indented by three spaces, which puts its opening
/// quote directly below the first element's (the list itself is indented
/// by two). Lines are quoted verbatim, without escaping.
fn write_line_list(f: &mut Formatter<'_>, lines: &[String]) -> fmt::Result {
    let elements = lines.iter().map(|line| format!("\"{line}\"")).join(",\n   ");
    writeln!(f, "  [{elements}]")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    fn lines(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_kind_follows_populated_sides() {
        assert_matches!(
            Delta::new(lines(&[]), lines(&["a"]), 1).kind(),
            DeltaKind::Insert
        );
        assert_matches!(
            Delta::new(lines(&["a"]), lines(&[]), 1).kind(),
            DeltaKind::Delete
        );
        assert_matches!(
            Delta::new(lines(&["a"]), lines(&["b"]), 1).kind(),
            DeltaKind::Replace
        );
    }

    #[test]
    #[should_panic(expected = "at least one line")]
    fn test_empty_gap_is_rejected() {
        Delta::new(vec![], vec![], 1);
    }

    #[test]
    fn test_render_replace_multi_line() {
        let delta = Delta::new(lines(&["line_0", "line_1"]), lines(&["line0", "line1"]), 1);
        assert_eq!(
            delta.to_string(),
            indoc! {r#"
                Changed content at line 1:
                expecting:
                  ["line0",
                   "line1"]
                but was:
                  ["line_0",
                   "line_1"]
            "#}
        );
    }

    #[test]
    fn test_render_replace_uneven_sides() {
        // A gap reported as one replace even when the sides differ in
        // length: two expected lines against one actual line.
        let delta = Delta::new(lines(&["actual"]), lines(&["expected a", "expected b"]), 3);
        assert_eq!(
            delta.to_string(),
            indoc! {r#"
                Changed content at line 3:
                expecting:
                  ["expected a",
                   "expected b"]
                but was:
                  ["actual"]
            "#}
        );
    }

    #[test]
    fn test_render_insert_single_line() {
        let delta = Delta::new(lines(&[]), lines(&["line_1"]), 2);
        assert_eq!(
            delta.to_string(),
            indoc! {r#"
                Missing content at line 2:
                  ["line_1"]
            "#}
        );
    }

    #[test]
    fn test_render_delete_multi_line() {
        let delta = Delta::new(lines(&["line 9", "line 10", "line 11"]), lines(&[]), 8);
        assert_eq!(
            delta.to_string(),
            indoc! {r#"
                Extra content at line 8:
                  ["line 9",
                   "line 10",
                   "line 11"]
            "#}
        );
    }

    #[test]
    fn test_render_quotes_lines_verbatim() {
        // No escaping: a line containing a quote is emitted as-is.
        let delta = Delta::new(lines(&[]), lines(&[r#"say "hi""#]), 1);
        assert_eq!(
            delta.to_string(),
            "Missing content at line 1:\n  [\"say \"hi\"\"]\n"
        );
    }

    #[test]
    fn test_render_blank_line() {
        let delta = Delta::new(lines(&["", "x"]), lines(&[]), 1);
        assert_eq!(
            delta.to_string(),
            indoc! {r#"
                Extra content at line 1:
                  ["",
                   "x"]
            "#}
        );
    }
}
