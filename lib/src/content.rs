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

//! Resolving files into line sequences under an explicit text encoding.

use std::fmt::{self, Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{fs, mem};

use thiserror::Error;
use tracing::instrument;

/// Text encodings the line reader understands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Encoding {
    /// UTF-8, the default.
    #[default]
    Utf8,
    /// ISO-8859-1. Decoding is total; every byte maps to a character.
    Latin1,
    /// UTF-16, little endian, without a byte order mark.
    Utf16Le,
    /// UTF-16, big endian, without a byte order mark.
    Utf16Be,
}

impl Encoding {
    fn label(self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Latin1 => "ISO-8859-1",
            Encoding::Utf16Le => "UTF-16LE",
            Encoding::Utf16Be => "UTF-16BE",
        }
    }
}

impl Display for Encoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error for an encoding label [`Encoding::from_str`] does not recognize.
#[derive(Debug, Error)]
#[error("Unknown encoding {0:?}")]
pub struct UnknownEncodingError(String);

impl FromStr for Encoding {
    type Err = UnknownEncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(Encoding::Latin1),
            "utf-16le" | "utf16le" => Ok(Encoding::Utf16Le),
            "utf-16be" | "utf16be" => Ok(Encoding::Utf16Be),
            _ => Err(UnknownEncodingError(s.to_owned())),
        }
    }
}

/// Error from resolving a file into a line sequence.
#[derive(Debug, Error)]
pub enum ContentReadError {
    /// The file could not be read at all.
    #[error("Cannot read {path}")]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The file was read but its bytes are not valid in the requested
    /// encoding.
    #[error("Content of {path} is not valid {encoding}")]
    Decode {
        /// The file whose content could not be decoded.
        path: PathBuf,
        /// The encoding the content was expected to be in.
        encoding: Encoding,
    },
}

/// Reads `path` and decodes it under `encoding` into an ordered line
/// sequence.
///
/// `\n`, `\r\n`, and a lone `\r` all terminate a line and are not part of
/// it; a terminator at the end of the content does not open a trailing
/// empty line. This matches what a buffered per-line reader produces, so
/// whether two files differ only in line-ending style is decided here, not
/// by the diff engine.
#[instrument]
pub fn read_lines(path: &Path, encoding: Encoding) -> Result<Vec<String>, ContentReadError> {
    let bytes = fs::read(path).map_err(|source| ContentReadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode(&bytes, encoding).ok_or_else(|| ContentReadError::Decode {
        path: path.to_path_buf(),
        encoding,
    })?;
    Ok(split_lines(&text))
}

fn decode(bytes: &[u8], encoding: Encoding) -> Option<String> {
    match encoding {
        Encoding::Utf8 => String::from_utf8(bytes.to_vec()).ok(),
        Encoding::Latin1 => Some(bytes.iter().map(|&b| b as char).collect()),
        Encoding::Utf16Le => decode_utf16(bytes, u16::from_le_bytes),
        Encoding::Utf16Be => decode_utf16(bytes, u16::from_be_bytes),
    }
}

fn decode_utf16(bytes: &[u8], unit: impl Fn([u8; 2]) -> u16) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }
    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units).collect::<Result<_, _>>().ok()
}

fn split_lines(text: &str) -> Vec<String> {
    let mut lines = vec![];
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\n' => lines.push(mem::take(&mut current)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
