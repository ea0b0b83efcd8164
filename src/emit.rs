//! Stream framing for producing the bytes of an archive.

use std::io::{self, Write};

use crate::model::{Archive, IndexEntry};
use crate::numeral::{emit_byte, emit_int};
use crate::octet::encode_payload;

/// Writes the full byte stream of `archive` to `out`: header, index, then
/// file payloads, in that order.
pub fn emit<W: Write>(archive: &Archive, out: &mut W) -> io::Result<()> {
    writeln!(out, "CAF {}", emit_byte(archive.version))?;

    writeln!(out, "INDEKS {}", emit_int(archive.index.len() as u64))?;
    for entry in &archive.index {
        match entry {
            IndexEntry::Directory { name } => writeln!(out, "KATALOG {name}")?,
            IndexEntry::File { name } => writeln!(out, "PLIK {name}")?,
        }
    }

    for file in &archive.files {
        write!(out, "ROZMIAR {}", emit_int(file.len() as u64))?;
        encode_payload(file, out)?;
    }
    writeln!(out)?;

    Ok(())
}

/// Convenience wrapper returning the emitted bytes as a fresh buffer.
pub fn emit_to_vec(archive: &Archive) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    emit(archive, &mut buf)?;
    Ok(buf)
}
