//! Stream framing for reconstructing an archive from bytes.

use crate::cursor::Cursor;
use crate::error::{CafError, MAX_SUPPORTED_VERSION};
use crate::model::{Archive, IndexEntry};
use crate::numeral::{parse_byte, parse_int};
use crate::octet::decode_payload;

/// Parses a complete CAF archive from `input`.
///
/// The whole input is expected to be buffered in memory; the numeral grammar
/// requires unbounded lookahead, so there is no meaningful incremental or
/// streaming variant of this parser.
pub fn parse(input: &[u8]) -> Result<Archive, CafError> {
    let mut cur = Cursor::new(input);

    expect_literal(&mut cur, "CAF ")?;
    let version = parse_byte(&mut cur);
    expect_newline(&mut cur)?;
    if version > MAX_SUPPORTED_VERSION {
        return Err(CafError::UnsupportedVersion {
            found: version,
            max_supported: MAX_SUPPORTED_VERSION,
        });
    }

    expect_literal(&mut cur, "INDEKS ")?;
    let entry_count = parse_int(&mut cur) as usize;
    expect_newline(&mut cur)?;

    let mut index = Vec::with_capacity(entry_count);
    for _ in 0..entry_count {
        let entry = if cur.eat_literal("KATALOG ") {
            let name = read_name(&mut cur)?;
            IndexEntry::Directory { name }
        } else if cur.eat_literal("PLIK ") {
            let name = read_name(&mut cur)?;
            IndexEntry::File { name }
        } else {
            return Err(CafError::framing(
                cur.pos(),
                "expected 'KATALOG ' or 'PLIK ' index entry marker",
            ));
        };
        index.push(entry);
    }

    let file_count = index
        .iter()
        .filter(|e| matches!(e, IndexEntry::File { .. }))
        .count();

    let mut files = Vec::with_capacity(file_count);
    for _ in 0..file_count {
        expect_literal(&mut cur, "ROZMIAR ")?;
        let size = parse_int(&mut cur) as usize;
        expect_newline(&mut cur)?;
        files.push(decode_payload(&mut cur, size)?);
    }

    // The closing newline is expected but, per the format, not strictly
    // validated: a truncated stream missing only this byte still yields a
    // complete, correct archive.
    let _ = cur.eat_literal("\n");

    Ok(Archive {
        version,
        index,
        files,
    })
}

fn expect_literal(cur: &mut Cursor, literal: &str) -> Result<(), CafError> {
    if cur.eat_literal(literal) {
        Ok(())
    } else {
        Err(CafError::framing(
            cur.pos(),
            format!("expected {literal:?}"),
        ))
    }
}

fn expect_newline(cur: &mut Cursor) -> Result<(), CafError> {
    expect_literal(cur, "\n")
}

fn read_name(cur: &mut Cursor) -> Result<String, CafError> {
    let offset = cur.pos();
    let raw = cur
        .read_until_newline()
        .ok_or_else(|| CafError::framing(offset, "unterminated index entry name"))?;
    String::from_utf8(raw.to_vec())
        .map_err(|_| CafError::framing(offset, "index entry name is not valid UTF-8"))
}
