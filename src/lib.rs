//! rand-cli: emit random bytes to stdout in a handful of encodings.
//!
//! The pipeline is a single pass: draw a buffer of `N` bytes from a
//! [`ByteSource`], then encode it per the selected [`Format`]. The secure
//! source reads the OS CSPRNG; passing a seed swaps in a reproducible
//! generator instead.
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

pub mod error;
pub mod format;
pub mod source;

pub use crate::error::RandError;
pub use crate::format::Format;
pub use crate::source::ByteSource;

/// UUID mode ignores the requested length and always draws this many bytes.
pub const UUID_LENGTH: usize = 16;

/// Draw `length` bytes from `source` and encode them in `format`.
///
/// `omit` only matters for [`Format::Password`], where it lists forbidden
/// characters. The returned buffer carries no trailing newline; the caller
/// decides the terminator.
pub fn render(
    format: Format,
    length: usize,
    omit: &str,
    source: &mut ByteSource,
) -> Result<Vec<u8>, RandError> {
    let length = match format {
        Format::Uuid => UUID_LENGTH,
        _ => length,
    };

    let mut bytes = vec![0u8; length];
    source.fill(&mut bytes)?;
    debug!("drew {} bytes from {} source", bytes.len(), source.label());

    Ok(match format {
        Format::Hex => hex::encode(&bytes).into_bytes(),
        Format::Base64 => STANDARD.encode(&bytes).into_bytes(),
        Format::Binary => bytes,
        Format::Password => format::password(&bytes, omit, source).into_bytes(),
        Format::Uuid => {
            // `bytes` was forced to `UUID_LENGTH` above, so it's safe to
            // `unwrap` the conversion to `[u8; 16]`
            format::uuid(bytes.try_into().unwrap()).into_bytes()
        }
    })
}

/// The line terminator appended after the payload.
///
/// Raw binary goes out exactly as drawn and never gets one; every other
/// format gets a newline unless suppressed.
pub fn terminator(format: Format, omit_newline: bool) -> &'static [u8] {
    match format {
        Format::Binary => b"",
        _ if omit_newline => b"",
        _ => b"\n",
    }
}

#[cfg(test)]
mod tests {
    use crate::{render, terminator, ByteSource, Format};

    fn rendered(format: Format, length: usize, seed: i64) -> Vec<u8> {
        render(format, length, "", &mut ByteSource::seeded(seed)).unwrap()
    }

    #[test]
    fn hex_output_is_lowercase_and_twice_as_long() {
        for n in [0, 1, 16, 255] {
            let out = rendered(Format::Hex, n, 3);
            assert_eq!(out.len(), 2 * n);
            assert!(out
                .iter()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn base64_length_and_padding() {
        for n in 0..48 {
            let out = rendered(Format::Base64, n, 3);
            assert_eq!(out.len(), 4 * n.div_ceil(3));

            let padding = out.iter().rev().take_while(|&&c| c == b'=').count();
            assert_eq!(padding, (3 - n % 3) % 3);
        }
    }

    #[test]
    fn binary_output_is_the_raw_buffer() {
        let out = rendered(Format::Binary, 32, 3);
        let mut raw = [0u8; 32];
        ByteSource::seeded(3).fill(&mut raw).unwrap();
        assert_eq!(out, raw);
    }

    #[test]
    fn password_output_has_requested_length() {
        let out = rendered(Format::Password, 24, 3);
        assert_eq!(out.len(), 24);
    }

    #[test]
    fn uuid_ignores_the_requested_length() {
        for n in [0, 16, 1024] {
            assert_eq!(rendered(Format::Uuid, n, 3).len(), 36);
        }
    }

    #[test]
    fn newline_unless_suppressed() {
        for format in [Format::Hex, Format::Base64, Format::Password, Format::Uuid] {
            assert_eq!(terminator(format, false), b"\n".as_slice());
            assert_eq!(terminator(format, true), b"".as_slice());
        }

        // raw binary never carries one
        assert_eq!(terminator(Format::Binary, false), b"".as_slice());
        assert_eq!(terminator(Format::Binary, true), b"".as_slice());
    }

    #[test]
    fn hex_emission_is_newline_terminated() {
        let mut out = rendered(Format::Hex, 16, 3);
        out.extend_from_slice(terminator(Format::Hex, false));

        assert_eq!(out.len(), 2 * 16 + 1);
        let (payload, end) = out.split_at(out.len() - 1);
        assert_eq!(end, b"\n".as_slice());
        assert!(payload.iter().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn same_seed_same_output() {
        for format in [Format::Hex, Format::Base64, Format::Password, Format::Uuid] {
            assert_eq!(rendered(format, 21, 1234), rendered(format, 21, 1234));
        }
    }
}
