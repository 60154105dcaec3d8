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

//! Line-based structural diff engine for assertion failure reporting.
//!
//! Given a candidate line sequence (the "actual" side) and a reference line
//! sequence (the "expected" side), the engine produces an ordered list of
//! [`Delta`](delta::Delta)s, each classifying one contiguous run of
//! differing lines as changed, missing, or extra content, anchored to a
//! 1-based position in the reference. Each delta renders, via `Display`, a
//! fixed multi-line report that assertion messages embed byte-for-byte.
//!
//! The pipeline is strictly forward: [`align`](align::align) finds a
//! longest common subsequence of the two sequences, the edit-script builder
//! in [`diff`] turns the gaps between matches into deltas, and the renderer
//! in [`delta`] formats them. Each comparison is a pure function of its two
//! inputs; nothing is retained across calls.

#![warn(missing_docs)]
#![deny(unused_must_use)]
#![forbid(unsafe_code)]

pub mod align;
pub mod content;
pub mod delta;
pub mod diff;
