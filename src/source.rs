//! Byte sources
//!
//! Two sources can back an emission:
//! - a _secure_ one, reading from the operating system's CSPRNG
//! - an _insecure_ one, a [`StdRng`] seeded from a user-supplied integer,
//!   which makes the output reproducible
//!
//! Password redraws always come from the insecure generator, so a
//! [`ByteSource`] carries one even in secure mode.
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use tracing::debug;

use crate::error::RandError;

pub struct ByteSource {
    secure: bool,
    insecure: StdRng,
}

impl ByteSource {
    /// A source backed by the OS CSPRNG, unsuitable for reproducible output.
    pub fn secure() -> Self {
        Self {
            secure: true,
            insecure: StdRng::from_entropy(),
        }
    }

    /// A deterministic source: the same seed always yields the same bytes.
    pub fn seeded(seed: i64) -> Self {
        debug!("seeding insecure source with {}", seed);
        Self {
            secure: false,
            insecure: StdRng::seed_from_u64(seed as u64),
        }
    }

    pub fn label(&self) -> &'static str {
        if self.secure {
            "secure"
        } else {
            "insecure"
        }
    }

    /// Fill `buf` entirely from this source.
    pub fn fill(&mut self, buf: &mut [u8]) -> Result<(), RandError> {
        let res = if self.secure {
            OsRng.try_fill_bytes(buf)
        } else {
            self.insecure.try_fill_bytes(buf)
        };

        res.map_err(|e| RandError::SourceRead {
            label: self.label(),
            source: e,
        })
    }

    /// Draw an index below `bound` from the insecure generator.
    pub(crate) fn redraw_below(&mut self, bound: usize) -> usize {
        self.insecure.gen_range(0..bound)
    }
}
