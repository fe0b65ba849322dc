use rand::RngCore;
use rand::rngs::OsRng;

/// Bytes pulled from the underlying generator per refill. Batching keeps the
/// acquisition cost out of the per-draw path; a refill only ever happens at a
/// batch boundary.
pub const BATCH_BYTES: usize = 64 * 1024;

/// A byte stream served from large batches of an underlying generator.
///
/// Production sampling uses [`EntropySource::from_os`], backed by the
/// operating system's CSPRNG. Tests substitute a seeded [`rand::rngs::StdRng`]
/// for deterministic draws.
#[derive(Debug)]
pub struct EntropySource<R: RngCore> {
    rng: R,
    buf: Vec<u8>,
    pos: usize,
}

impl EntropySource<OsRng> {
    pub fn from_os() -> Self {
        Self::new(OsRng)
    }
}

impl<R: RngCore> EntropySource<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            buf: vec![0u8; BATCH_BYTES],
            // Start exhausted so the first use pulls a fresh batch.
            pos: BATCH_BYTES,
        }
    }

    pub fn next_u8(&mut self) -> u8 {
        if self.pos == self.buf.len() {
            self.rng.fill_bytes(&mut self.buf);
            self.pos = 0;
        }
        let byte = self.buf[self.pos];
        self.pos += 1;
        byte
    }

    pub fn next_u16(&mut self) -> u16 {
        u16::from_le_bytes([self.next_u8(), self.next_u8()])
    }

    pub fn next_u32(&mut self) -> u32 {
        u32::from_le_bytes([
            self.next_u8(),
            self.next_u8(),
            self.next_u8(),
            self.next_u8(),
        ])
    }
}
