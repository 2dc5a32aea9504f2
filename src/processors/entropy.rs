//! Random-byte providers for the request-id processor
//!
//! Providers are probed in order; the first one reporting itself available
//! fills the buffer on its own. Sources are never combined.

use rand::rngs::OsRng;
use rand::{Rng, RngCore};

pub trait RandomBytesProvider: Send + Sync {
    fn available(&self) -> bool;
    fn fill(&self, buf: &mut [u8]);
}

/// Cryptographically strong bytes from the operating system.
pub struct OsRandom;

impl RandomBytesProvider for OsRandom {
    fn available(&self) -> bool {
        OsRng.try_fill_bytes(&mut [0u8; 1]).is_ok()
    }

    fn fill(&self, buf: &mut [u8]) {
        OsRng.fill_bytes(buf);
    }
}

/// Thread-local pseudo-random generator seeded by the operating system.
pub struct ThreadRandom;

impl RandomBytesProvider for ThreadRandom {
    fn available(&self) -> bool {
        true
    }

    fn fill(&self, buf: &mut [u8]) {
        rand::thread_rng().fill_bytes(buf);
    }
}

/// Last-resort fallback accumulating one bounded integer draw per byte.
pub struct AccumulatedRandom;

impl RandomBytesProvider for AccumulatedRandom {
    fn available(&self) -> bool {
        true
    }

    fn fill(&self, buf: &mut [u8]) {
        let mut rng = rand::thread_rng();
        for byte in buf.iter_mut() {
            *byte = rng.gen_range(0..=255u16) as u8;
        }
    }
}

/// The default cascade, strongest source first.
pub fn default_providers() -> Vec<Box<dyn RandomBytesProvider>> {
    vec![
        Box::new(OsRandom),
        Box::new(ThreadRandom),
        Box::new(AccumulatedRandom),
    ]
}

/// Fill `n` bytes from the first available provider, or `None` when the
/// whole cascade is unavailable.
pub fn generate(providers: &[Box<dyn RandomBytesProvider>], n: usize) -> Option<Vec<u8>> {
    let provider = providers.iter().find(|provider| provider.available())?;
    let mut buf = vec![0u8; n];
    provider.fill(&mut buf);
    Some(buf)
}
