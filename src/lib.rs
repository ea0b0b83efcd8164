//! A library for reading and writing CAF archives.
//!
//! CAF is a text-based, line-oriented archive format whose distinguishing
//! feature is that every integer value (version numbers, counts, sizes, and
//! the byte content of files themselves) is spelled out as a Polish
//! cardinal numeral, with run-length compression of repeated 64-bit groups.
//!
//! This crate provides the codec itself: a [`Builder`] to assemble an
//! [`Archive`] from directory-change markers and file payloads, an
//! [`emit`](emit()) function to serialize one to bytes, a
//! [`parse`](parse()) function to read one back, and an
//! [`unpack`](unpack()) function to materialize one onto a filesystem. It
//! does not handle compression beyond the format's own run-length scheme,
//! random access, streaming partial reads, encryption, or any file metadata
//! beyond names.

pub mod builder;
pub mod cursor;
pub mod emit;
pub mod error;
pub mod model;
pub mod numeral;
pub mod octet;
pub mod parse;
pub mod unpack;

pub use builder::Builder;
pub use error::{CafError, Result};
pub use model::{Archive, IndexEntry};

pub use emit::{emit, emit_to_vec};
pub use parse::parse;
pub use unpack::unpack;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_roundtrip_through_tempdir() {
        let src = tempfile::tempdir().unwrap();
        std::fs::write(src.path().join("hi.txt"), b"Hello, world!").unwrap();
        std::fs::create_dir(src.path().join("sub")).unwrap();
        std::fs::write(
            src.path().join("sub").join("deep.txt"),
            [0u8; 64].as_slice(),
        )
        .unwrap();

        let mut builder = Builder::new();
        builder.add_directory_tree(src.path(), None).unwrap();
        let archive = builder.finish();

        let bytes = emit_to_vec(&archive).unwrap();
        let parsed = parse(&bytes).unwrap();
        assert_eq!(parsed, archive);

        let dest = tempfile::tempdir().unwrap();
        unpack(&parsed, dest.path()).unwrap();
        assert_eq!(
            std::fs::read(dest.path().join("hi.txt")).unwrap(),
            b"Hello, world!"
        );
        assert_eq!(
            std::fs::read(dest.path().join("sub").join("deep.txt")).unwrap(),
            vec![0u8; 64]
        );
    }
}
