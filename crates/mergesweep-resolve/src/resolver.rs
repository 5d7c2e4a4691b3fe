//! In-place conflict resolution keeping the incoming side.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use mergesweep_core::{ConflictMarkers, ResolveError, ResolveOutcome, ResolveSummary};

/// Where the scanner is relative to a conflict block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BandState {
    /// Outside any conflict block; lines are kept.
    #[default]
    Neutral,
    /// Between the start marker and the separator; lines are dropped.
    Ours,
    /// Between the separator and the end marker; lines are kept.
    Theirs,
}

impl BandState {
    /// Advance the state for one line.
    ///
    /// Returns the next state and whether the line belongs in the output.
    /// Marker lines are never kept. A separator or end marker outside a
    /// block is plain text, and a start marker inside a block reopens it.
    pub fn step(self, line: &[u8], markers: &ConflictMarkers) -> (Self, bool) {
        if markers.is_start(line) {
            return (Self::Ours, false);
        }
        match self {
            Self::Neutral => (Self::Neutral, true),
            Self::Ours | Self::Theirs if markers.is_separator(line) => (Self::Theirs, false),
            Self::Ours | Self::Theirs if markers.is_end(line) => (Self::Neutral, false),
            Self::Ours => (Self::Ours, false),
            Self::Theirs => (Self::Theirs, true),
        }
    }
}

/// Result of resolving content in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Content with markers and "ours" bands removed.
    pub content: Vec<u8>,
    /// Number of start markers seen.
    pub conflicts: usize,
    /// Input ended inside a block.
    ///
    /// Lines are never rolled back: "ours" lines up to the end of input are
    /// dropped, "theirs" lines after a separator are kept.
    pub unterminated: bool,
}

/// Resolve every conflict block in `input`, keeping the incoming side.
///
/// Works on raw bytes split after each `\n`, so line endings and bytes that
/// are not valid UTF-8 pass through unchanged.
pub fn resolve_content(input: &[u8], markers: &ConflictMarkers) -> Resolution {
    let mut content = Vec::with_capacity(input.len());
    let mut state = BandState::Neutral;
    let mut conflicts = 0;

    for line in input.split_inclusive(|&b| b == b'\n') {
        if markers.is_start(line) {
            conflicts += 1;
        }
        let (next, keep) = state.step(line, markers);
        if keep {
            content.extend_from_slice(line);
        }
        state = next;
    }

    Resolution {
        content,
        conflicts,
        unterminated: state != BandState::Neutral,
    }
}

/// Resolve a file in place.
///
/// Files without a start marker are left untouched and reported as
/// [`ResolveOutcome::Clean`]. The rewrite is a plain overwrite; a failed
/// write may leave the file partially written.
pub fn resolve_file(
    path: &Path,
    markers: &ConflictMarkers,
) -> Result<ResolveOutcome, ResolveError> {
    let input = fs::read(path).map_err(|e| ResolveError::read(path, e))?;
    let resolution = resolve_content(&input, markers);

    if resolution.conflicts == 0 {
        debug!(path = %path.display(), "no conflict markers");
        return Ok(ResolveOutcome::Clean);
    }
    if resolution.unterminated {
        warn!(path = %path.display(), "file ends inside a conflict block");
    }

    fs::write(path, &resolution.content).map_err(|e| ResolveError::write(path, e))?;
    info!(path = %path.display(), conflicts = resolution.conflicts, "resolved");

    Ok(ResolveOutcome::Resolved(ResolveSummary {
        path: path.to_path_buf(),
        conflicts: resolution.conflicts,
        unterminated: resolution.unterminated,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(input: &str) -> (String, usize, bool) {
        let r = resolve_content(input.as_bytes(), &ConflictMarkers::git());
        (String::from_utf8(r.content).unwrap(), r.conflicts, r.unterminated)
    }

    #[test]
    fn test_single_block_keeps_theirs() {
        let input = "before\n<<<<<<< HEAD\nA\n=======\nB\n>>>>>>> branch\nafter\n";
        assert_eq!(resolve(input), ("before\nB\nafter\n".to_string(), 1, false));
    }

    #[test]
    fn test_multiple_blocks() {
        let input = "\
<<<<<<< HEAD
one-ours
=======
one-theirs
>>>>>>> feature
middle
<<<<<<< HEAD
two-ours
two-ours-again
=======
two-theirs
>>>>>>> feature
<<<<<<< HEAD:path/to/file
=======
three-theirs
>>>>>>> 1a2b3c4
";
        let (out, conflicts, unterminated) = resolve(input);
        assert_eq!(out, "one-theirs\nmiddle\ntwo-theirs\nthree-theirs\n");
        assert_eq!(conflicts, 3);
        assert!(!unterminated);
    }

    #[test]
    fn test_empty_theirs_band_removes_block() {
        let input = "a\n<<<<<<< HEAD\ngone\n=======\n>>>>>>> b\nz\n";
        assert_eq!(resolve(input).0, "a\nz\n");
    }

    #[test]
    fn test_markers_outside_block_are_text() {
        let input = "Heading\n=======\n>>>>>>> not a marker\n";
        assert_eq!(resolve(input), (input.to_string(), 0, false));
    }

    #[test]
    fn test_no_conflicts_is_identity() {
        let input = "fn main() {\n    println!(\"hi\");\n}";
        assert_eq!(resolve(input), (input.to_string(), 0, false));
        assert_eq!(resolve(""), (String::new(), 0, false));
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        let input = "x\r\n<<<<<<< HEAD\r\nA\r\n=======\r\nB\r\n>>>>>>> main";
        assert_eq!(resolve(input), ("x\r\nB\r\n".to_string(), 1, false));
    }

    #[test]
    fn test_unterminated_in_ours_drops_to_eof() {
        let input = "keep\n<<<<<<< HEAD\nours\nmore ours\n";
        assert_eq!(resolve(input), ("keep\n".to_string(), 1, true));
    }

    #[test]
    fn test_unterminated_in_theirs_keeps_to_eof() {
        let input = "keep\n<<<<<<< HEAD\nours\n=======\ntheirs\ntrailing\n";
        assert_eq!(resolve(input), ("keep\ntheirs\ntrailing\n".to_string(), 1, true));
    }

    #[test]
    fn test_start_marker_inside_block_restarts_it() {
        let input = "<<<<<<< HEAD\na\n=======\nb\n<<<<<<< HEAD\nc\n=======\nd\n>>>>>>> x\n";
        assert_eq!(resolve(input), ("b\nd\n".to_string(), 2, false));
    }

    #[test]
    fn test_separator_prefix_inside_theirs_is_consumed() {
        let input = "<<<<<<< HEAD\na\n=======\nb\n========\nc\n>>>>>>> x\n";
        assert_eq!(resolve(input).0, "b\nc\n");
    }

    #[test]
    fn test_non_utf8_bytes_preserved() {
        let mut input = vec![0xe9, b'\n'];
        input.extend_from_slice(b"<<<<<<< HEAD\nA\n=======\n");
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b">>>>>>> b\n");

        let r = resolve_content(&input, &ConflictMarkers::git());
        assert_eq!(r.content, vec![0xe9, b'\n', 0xff, 0xfe, b'\n']);
        assert_eq!(r.conflicts, 1);
    }

    #[test]
    fn test_band_state_transitions() {
        let m = ConflictMarkers::git();
        assert_eq!(BandState::Neutral.step(b"<<<<<<< HEAD\n", &m), (BandState::Ours, false));
        assert_eq!(BandState::Ours.step(b"x\n", &m), (BandState::Ours, false));
        assert_eq!(BandState::Ours.step(b"=======\n", &m), (BandState::Theirs, false));
        assert_eq!(BandState::Theirs.step(b"y\n", &m), (BandState::Theirs, true));
        assert_eq!(BandState::Theirs.step(b">>>>>>> b\n", &m), (BandState::Neutral, false));
        assert_eq!(BandState::Neutral.step(b"=======\n", &m), (BandState::Neutral, true));
        assert_eq!(BandState::Ours.step(b">>>>>>> b\n", &m), (BandState::Neutral, false));
    }
}
