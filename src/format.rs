//! Output formats and their encoders.
use crate::error::RandError;
use crate::source::ByteSource;

/// The password alphabet: the 94 printable ASCII characters, `!` through `~`.
pub const PASSWORD_CHARS: &[u8; 94] =
    b"!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

/// How the drawn bytes are written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// lowercase hexadecimal, no separators (the default)
    Hex,
    /// standard alphabet, with padding
    Base64,
    /// raw bytes, unmodified
    Binary,
    /// one printable character per byte, see [`password`]
    Password,
    /// an RFC-4122 version-4 UUID string, see [`uuid`]
    Uuid,
}

impl Format {
    /// Pick the output format from the CLI switches.
    ///
    /// The switches are mutually exclusive: setting more than one fails
    /// with an error listing every flag that was set.
    pub fn select(
        base64: bool,
        binary: bool,
        password: bool,
        uuid: bool,
    ) -> Result<Self, RandError> {
        let set: Vec<_> = [
            (base64, "--base64", Format::Base64),
            (binary, "--binary", Format::Binary),
            (password, "--password", Format::Password),
            (uuid, "--uuid", Format::Uuid),
        ]
        .into_iter()
        .filter(|(on, _, _)| *on)
        .collect();

        match set.as_slice() {
            [] => Ok(Format::Hex),
            [(_, _, format)] => Ok(*format),
            _ => Err(RandError::IncompatibleFlags(
                set.iter().map(|(_, flag, _)| format!(r#""{}""#, flag)).collect(),
            )),
        }
    }
}

/// Map bytes onto [`PASSWORD_CHARS`], one character per byte.
///
/// Characters listed in `omit` are redrawn from the insecure generator of
/// `source` until an allowed one comes up, so the output never contains an
/// omitted character and always has the length of `bytes`.
///
/// An `omit` set covering the whole alphabet makes the redraw loop spin
/// forever; callers are expected not to do that.
pub fn password(bytes: &[u8], omit: &str, source: &mut ByteSource) -> String {
    bytes
        .iter()
        .map(|&b| {
            let mut c = PASSWORD_CHARS[usize::from(b) % PASSWORD_CHARS.len()] as char;
            while omit.contains(c) {
                c = PASSWORD_CHARS[source.redraw_below(PASSWORD_CHARS.len())] as char;
            }
            c
        })
        .collect()
}

/// Stamp 16 random bytes into an RFC-4122 version-4 UUID string.
///
/// The version nibble of byte 6 is forced to `4` and the variant bits of
/// byte 8 to `10`, then the bytes are printed as lowercase-hex
/// `8-4-4-4-12` groups.
pub fn uuid(mut bytes: [u8; 16]) -> String {
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    format!(
        "{}-{}-{}-{}-{}",
        hex::encode(&bytes[..4]),
        hex::encode(&bytes[4..6]),
        hex::encode(&bytes[6..8]),
        hex::encode(&bytes[8..10]),
        hex::encode(&bytes[10..]),
    )
}
