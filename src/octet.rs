//! Run-length encoding of a file payload as a sequence of 64-bit big-endian
//! "octets". Consecutive identical octet values collapse into one emission
//! followed by an ` X <count>` marker.

use std::io::{self, Write};

use crate::cursor::Cursor;
use crate::error::CafError;
use crate::numeral::{emit_int, parse_int};

const RUN_MARKER: &str = " X ";

/// Encodes `data` as a newline-delimited octet sequence, writing it to `out`.
///
/// The very first byte written is always a newline: by design this is the
/// same newline that terminates the preceding `ROZMIAR <size>` line (see the
/// emitter), so callers must not write their own newline before calling this.
pub fn encode_payload<W: Write>(data: &[u8], out: &mut W) -> io::Result<()> {
    let mut last: Option<u64> = None;
    let mut run: u64 = 0;

    for chunk in data.chunks(8) {
        let mut group = [0u8; 8];
        group[..chunk.len()].copy_from_slice(chunk);
        let v = u64::from_be_bytes(group);

        match last {
            Some(lv) if lv == v => run += 1,
            _ => {
                if run > 1 {
                    write!(out, "{RUN_MARKER}{}", emit_int(run))?;
                }
                write!(out, "\n{}", emit_int(v))?;
                last = Some(v);
                run = 1;
            }
        }
    }

    if run > 1 {
        write!(out, "{RUN_MARKER}{}", emit_int(run))?;
    }
    writeln!(out)?;
    Ok(())
}

/// Decodes `length` bytes of payload from a run-length octet sequence.
///
/// The caller is expected to have already consumed the newline that follows
/// the declared `ROZMIAR <size>`; that newline is shared with (is, in fact)
/// the first octet group's leading newline emitted by [`encode_payload`].
pub fn decode_payload(cur: &mut Cursor, length: usize) -> Result<Vec<u8>, CafError> {
    let target = length.div_ceil(8) * 8;
    let mut out = Vec::with_capacity(target);

    while out.len() < target {
        let v = parse_int(cur);
        let run = if cur.eat_literal(RUN_MARKER) {
            parse_int(cur)
        } else {
            1
        };
        if !cur.eat_literal("\n") {
            return Err(CafError::framing(
                cur.pos(),
                "expected newline after octet group",
            ));
        }
        for _ in 0..run {
            out.extend_from_slice(&v.to_be_bytes());
        }
    }

    out.truncate(length);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(data: &[u8]) -> Vec<u8> {
        let mut encoded = Vec::new();
        encode_payload(data, &mut encoded).unwrap();
        let mut cur = Cursor::new(&encoded);
        // In the full archive grammar this leading newline is consumed by
        // the frame parser as part of the preceding `ROZMIAR <size>` line.
        assert!(cur.eat_literal("\n"));
        decode_payload(&mut cur, data.len()).unwrap()
    }

    #[test]
    fn empty_payload() {
        let mut encoded = Vec::new();
        encode_payload(&[], &mut encoded).unwrap();
        assert_eq!(encoded, b"\n");
        assert_eq!(round_trip(&[]), Vec::<u8>::new());
    }

    #[test]
    fn partial_final_group_round_trips() {
        let data = b"Hello, world!";
        assert_eq!(round_trip(data), data);
    }

    #[test]
    fn run_length_collapses_repeated_groups() {
        let data = [0u8; 64];
        let mut encoded = Vec::new();
        encode_payload(&data, &mut encoded).unwrap();
        let text = String::from_utf8(encoded.clone()).unwrap();
        assert!(text.contains(" X "), "expected a run marker in {text:?}");
        assert_eq!(text, "\nzero X osiem\n");
        assert_eq!(round_trip(&data), data.to_vec());
    }

    #[test]
    fn mixed_runs_round_trip() {
        let mut data = Vec::new();
        data.extend(std::iter::repeat_n(0xAAu8, 24)); // one group value, run 3
        data.extend(std::iter::repeat_n(0xBBu8, 16)); // run 2
        data.extend([1, 2, 3, 4, 5]); // partial trailing group
        assert_eq!(round_trip(&data), data);
    }

    #[test]
    fn single_group_no_marker() {
        assert_eq!(round_trip(b"abcdefgh"), b"abcdefgh");
    }
}
