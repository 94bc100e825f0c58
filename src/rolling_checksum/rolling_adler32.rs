use super::RollingChecksum;

/// Classic Adler-32 (modulus 65521, `a` seeded with 1) behind the same rolling interface,
/// for peers that only speak the 32-bit checksum.
pub struct RollingAdler32 {
    actual: adler32::RollingAdler32,
}

impl RollingChecksum for RollingAdler32 {
    type ChecksumType = u32;

    fn new(initial_window: &[u8]) -> Self {
        RollingAdler32 {
            actual: adler32::RollingAdler32::from_buffer(initial_window),
        }
    }

    fn checksum(&self) -> Self::ChecksumType {
        self.actual.hash()
    }

    fn reset(&mut self) {
        self.actual = adler32::RollingAdler32::new();
    }

    fn update(&mut self, data: &[u8]) {
        self.actual.update_buffer(data);
    }

    fn roll(&mut self, blocksize: usize, old_byte: u8, new_byte: u8) {
        self.actual.remove(blocksize, old_byte);
        self.actual.update(new_byte);
    }
}
