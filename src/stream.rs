//! Candidate stream - validates one password per input line.

use std::io::{self, BufRead, Read};

use secrecy::{ExposeSecret, SecretSlice};

#[cfg(feature = "async")]
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::dictionary::Dictionary;
use crate::outcome::ValidationOutcome;
use crate::validator::validate;

/// Counters for a processed stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub checked: usize,
    pub rejected: usize,
}

impl ValidationSummary {
    fn record(&mut self, outcome: &ValidationOutcome) {
        self.checked += 1;
        if !outcome.is_valid() {
            self.rejected += 1;
        }
    }
}

/// Longest line kept in memory. Anything past it is discarded up to the
/// next newline; the kept prefix is still far over [`MAX_LENGTH`](crate::MAX_LENGTH).
pub const MAX_LINE_BYTES: usize = 64 * 1024;

// read limit: one byte past MAX_LINE_BYTES tells an overlong line apart
const READ_LIMIT: u64 = MAX_LINE_BYTES as u64 + 1;

fn strip_line_ending(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    if line.last() == Some(&b'\r') {
        line.pop();
    }
}

/// Cuts a line that hit the read limit without a newline back to
/// [`MAX_LINE_BYTES`], never splitting a UTF-8 sequence.
///
/// Returns `true` if the line was overlong.
fn truncate_overlong(line: &mut Vec<u8>) -> bool {
    if line.len() <= MAX_LINE_BYTES || line.last() == Some(&b'\n') {
        return false;
    }
    let mut cut = MAX_LINE_BYTES;
    // back up over continuation bytes to the sequence start
    while cut > MAX_LINE_BYTES - 3 && (line[cut] & 0xC0) == 0x80 {
        cut -= 1;
    }
    line.truncate(cut);

    #[cfg(feature = "tracing")]
    tracing::warn!("Candidate longer than {} bytes, rest of line discarded", MAX_LINE_BYTES);

    true
}

/// Consumes input up to and including the next newline.
fn skip_line<R: BufRead>(reader: &mut R) -> io::Result<()> {
    loop {
        let (found, used) = {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                return Ok(());
            }
            match buf.iter().position(|&b| b == b'\n') {
                Some(i) => (true, i + 1),
                None => (false, buf.len()),
            }
        };
        reader.consume(used);
        if found {
            return Ok(());
        }
    }
}

/// Reads the next candidate from `reader`.
///
/// Returns `Ok(None)` at end of stream. A last line without a terminator is
/// still a candidate. Lines longer than [`MAX_LINE_BYTES`] are truncated to
/// that size, and the rest of the line is skipped.
pub fn read_candidate<R: BufRead>(reader: &mut R) -> io::Result<Option<SecretSlice<u8>>> {
    let mut line = Vec::new();
    if reader.by_ref().take(READ_LIMIT).read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    if truncate_overlong(&mut line) {
        skip_line(reader)?;
    } else {
        strip_line_ending(&mut line);
    }
    Ok(Some(line.into()))
}

/// Validates every line of `reader` and hands each outcome to `report`.
///
/// Stops at the first read or report error.
pub fn validate_lines<R, F>(
    mut reader: R,
    dictionary: &Dictionary,
    mut report: F,
) -> io::Result<ValidationSummary>
where
    R: BufRead,
    F: FnMut(&ValidationOutcome) -> io::Result<()>,
{
    let mut summary = ValidationSummary::default();

    while let Some(candidate) = read_candidate(&mut reader)? {
        let outcome = validate(candidate.expose_secret(), dictionary);
        summary.record(&outcome);
        report(&outcome)?;
    }

    #[cfg(feature = "tracing")]
    tracing::info!(
        "Stream finished: {} checked, {} rejected",
        summary.checked,
        summary.rejected
    );

    Ok(summary)
}

#[cfg(feature = "async")]
async fn skip_line_async<R: AsyncBufRead + Unpin>(reader: &mut R) -> io::Result<()> {
    loop {
        let (found, used) = {
            let buf = reader.fill_buf().await?;
            if buf.is_empty() {
                return Ok(());
            }
            match buf.iter().position(|&b| b == b'\n') {
                Some(i) => (true, i + 1),
                None => (false, buf.len()),
            }
        };
        reader.consume(used);
        if found {
            return Ok(());
        }
    }
}

/// Async version that sends each outcome via channel.
///
/// The token is checked before every line; once cancelled, no further line
/// is read. A dropped receiver also ends the stream.
#[cfg(feature = "async")]
pub async fn validate_lines_tx<R>(
    mut reader: R,
    dictionary: &Dictionary,
    token: CancellationToken,
    tx: mpsc::Sender<ValidationOutcome>,
) -> io::Result<ValidationSummary>
where
    R: AsyncBufRead + Unpin,
{
    let mut summary = ValidationSummary::default();
    let mut line = Vec::new();

    loop {
        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::info!("Stream validation cancelled after {} candidates", summary.checked);
            break;
        }

        line.clear();
        if (&mut reader).take(READ_LIMIT).read_until(b'\n', &mut line).await? == 0 {
            break;
        }
        if truncate_overlong(&mut line) {
            skip_line_async(&mut reader).await?;
        } else {
            strip_line_ending(&mut line);
        }

        let candidate: SecretSlice<u8> = std::mem::take(&mut line).into();
        let outcome = validate(candidate.expose_secret(), dictionary);
        summary.record(&outcome);

        if tx.send(outcome).await.is_err() {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send validation outcome: receiver dropped");
            break;
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::FailureKind;

    #[test]
    fn test_read_candidate_lines() {
        let mut input: &[u8] = b"first\r\nsecond\n\nlast";
        let mut lines = Vec::new();
        while let Some(candidate) = read_candidate(&mut input).expect("read from slice") {
            lines.push(candidate.expose_secret().to_vec());
        }
        assert_eq!(
            lines,
            vec![b"first".to_vec(), b"second".to_vec(), Vec::new(), b"last".to_vec()]
        );
    }

    #[test]
    fn test_read_candidate_trailing_cr_without_newline() {
        let mut input: &[u8] = b"password\r";
        let candidate = read_candidate(&mut input).unwrap().unwrap();
        assert_eq!(candidate.expose_secret(), b"password");
        assert!(read_candidate(&mut input).unwrap().is_none());
    }

    #[test]
    fn test_validate_lines_trailing_cr_matches_dictionary() {
        let dictionary = Dictionary::from_reader(&b"password\r"[..]).unwrap();
        let input: &[u8] = b"password\r";
        let mut reported = Vec::new();
        validate_lines(input, &dictionary, |outcome| {
            reported.push(outcome.to_string());
            Ok(())
        })
        .unwrap();
        assert_eq!(reported, vec!["password -> Error: Too Common"]);
    }

    #[test]
    fn test_read_candidate_overlong_line_is_bounded() {
        let mut raw = vec![b'a'; MAX_LINE_BYTES * 3];
        raw.extend_from_slice(b"\nnext\n");
        let mut input: &[u8] = &raw;

        let first = read_candidate(&mut input).unwrap().unwrap();
        assert_eq!(first.expose_secret().len(), MAX_LINE_BYTES);
        let second = read_candidate(&mut input).unwrap().unwrap();
        assert_eq!(second.expose_secret(), b"next");
        assert!(read_candidate(&mut input).unwrap().is_none());
    }

    #[test]
    fn test_read_candidate_overlong_keeps_utf8_boundary() {
        // "£" is two bytes; place one across the cut point
        let mut raw = vec![b'a'; MAX_LINE_BYTES - 1];
        raw.extend_from_slice("££".as_bytes());
        let mut input: &[u8] = &raw;

        let candidate = read_candidate(&mut input).unwrap().unwrap();
        assert_eq!(candidate.expose_secret().len(), MAX_LINE_BYTES - 1);
    }

    #[test]
    fn test_read_candidate_exact_limit_with_crlf() {
        let mut raw = vec![b'b'; MAX_LINE_BYTES];
        raw.extend_from_slice(b"\r\nnext");
        let mut input: &[u8] = &raw;

        let first = read_candidate(&mut input).unwrap().unwrap();
        assert_eq!(first.expose_secret(), &raw[..MAX_LINE_BYTES]);
        let second = read_candidate(&mut input).unwrap().unwrap();
        assert_eq!(second.expose_secret(), b"next");
    }

    #[test]
    fn test_validate_lines_overlong_reported_too_long() {
        let raw = vec![b'x'; MAX_LINE_BYTES * 2];
        let mut failures = Vec::new();
        validate_lines(&raw[..], &Dictionary::default(), |outcome| {
            failures.push(outcome.failure());
            Ok(())
        })
        .unwrap();
        assert_eq!(failures, vec![Some(FailureKind::TooLong)]);
    }

    #[test]
    fn test_read_candidate_end_of_stream() {
        let mut input: &[u8] = b"";
        assert!(read_candidate(&mut input).expect("read from slice").is_none());
    }

    #[test]
    fn test_read_candidate_keeps_raw_bytes() {
        let mut input: &[u8] = b"\xc2\xa3short\n";
        let candidate = read_candidate(&mut input).unwrap().unwrap();
        assert_eq!(candidate.expose_secret(), "£short".as_bytes());
    }

    #[test]
    fn test_validate_lines_reports_every_outcome() {
        let dictionary = Dictionary::new(["password"]);
        let input: &[u8] = "password\n£short\nzxlkas12s\nshort\n".as_bytes();

        let mut reported = Vec::new();
        let summary = validate_lines(input, &dictionary, |outcome| {
            reported.push(outcome.to_string());
            Ok(())
        })
        .expect("validate from slice");

        assert_eq!(summary, ValidationSummary { checked: 4, rejected: 3 });
        assert_eq!(
            reported,
            vec![
                "password -> Error: Too Common",
                "*short -> Error: Invalid Characters",
                "zxlkas12s",
                "short -> Error: Too Short",
            ]
        );
    }

    #[test]
    fn test_validate_lines_propagates_report_error() {
        let input: &[u8] = b"one\ntwo\nthree\n";
        let mut calls = 0;
        let result = validate_lines(input, &Dictionary::default(), |_| {
            calls += 1;
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        });

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_validate_lines_propagates_read_error() {
        struct FailingReader;

        impl io::Read for FailingReader {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("disk gone"))
            }
        }

        let reader = io::BufReader::new(FailingReader);
        let result = validate_lines(reader, &Dictionary::default(), |_| Ok(()));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_lines_crlf_input() {
        let dictionary = Dictionary::new(["password"]);
        let input: &[u8] = b"password\r\n";
        let mut failures = Vec::new();
        validate_lines(input, &dictionary, |outcome| {
            failures.push(outcome.failure());
            Ok(())
        })
        .unwrap();
        assert_eq!(failures, vec![Some(FailureKind::TooCommon)]);
    }
}
