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

//! The diff engine: edit-script construction over an alignment, and the
//! file-level entry point.

use std::iter;
use std::path::Path;

use crate::align::align;
use crate::content::{read_lines, ContentReadError, Encoding};
use crate::delta::Delta;

/// Turns an alignment into the ordered edit script.
///
/// Walks a candidate cursor and a reference cursor together with the match
/// pairs. Every gap between consecutive matches (including before the
/// first and after the last) becomes exactly one delta covering all
/// unmatched lines on both sides; no finer sub-alignment is attempted
/// inside a gap, so a gap with mismatches on both sides is one block
/// replace even when a recursive pass could find partial matches. That
/// keeps edit scripts low-noise and the reports short.
///
/// The anchor of every delta is the 1-based reference position at which
/// its gap begins.
fn build_edit_script(
    candidate: &[String],
    reference: &[String],
    alignment: &[(usize, usize)],
) -> Vec<Delta> {
    let mut deltas = vec![];
    let mut i = 0;
    let mut j = 0;
    // A sentinel pair past both ends turns the trailing gap into a regular
    // one.
    let end = (candidate.len(), reference.len());
    for (match_i, match_j) in alignment.iter().copied().chain(iter::once(end)) {
        if i < match_i || j < match_j {
            deltas.push(Delta::new(
                candidate[i..match_i].to_vec(),
                reference[j..match_j].to_vec(),
                j + 1,
            ));
        }
        i = match_i + 1;
        j = match_j + 1;
    }
    deltas
}

/// Diffs two in-memory line sequences.
///
/// This is the pure engine: total over any two finite sequences, including
/// empty ones. Identical sequences yield an empty list; an empty side
/// yields a single delta spanning the whole other side. Deltas come out
/// ordered by increasing anchor.
pub fn diff_lines(candidate: &[String], reference: &[String]) -> Vec<Delta> {
    let alignment = align(candidate, reference);
    build_edit_script(candidate, reference, &alignment)
}

/// Diffs the contents of two files, each decoded under its own encoding.
///
/// The files are resolved to line sequences up front; a read or decode
/// failure on either side aborts the comparison before any alignment work
/// and surfaces unmodified. Mirrors the candidate/reference orientation of
/// [`diff_lines`]: the first file is the candidate ("actual") side.
pub fn diff_files(
    candidate_path: &Path,
    candidate_encoding: Encoding,
    reference_path: &Path,
    reference_encoding: Encoding,
) -> Result<Vec<Delta>, ContentReadError> {
    let candidate = read_lines(candidate_path, candidate_encoding)?;
    let reference = read_lines(reference_path, reference_encoding)?;
    let deltas = diff_lines(&candidate, &reference);
    tracing::debug!(
        candidate = %candidate_path.display(),
        reference = %reference_path.display(),
        deltas = deltas.len(),
        "diffed files"
    );
    Ok(deltas)
}
