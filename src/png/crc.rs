//! CRC-32 (IEEE 802.3), as used by PNG chunk framing and zlib.

const POLYNOMIAL: u32 = 0xEDB8_8320;

/// Incremental CRC-32 so a chunk's type and payload can be hashed without
/// joining them first.
#[derive(Clone, Copy, Debug)]
pub struct Crc32 {
    register: u32,
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc32 {
    pub const fn new() -> Crc32 {
        Crc32 {
            register: 0xFFFF_FFFF,
        }
    }

    pub fn update(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.register ^= u32::from(byte);
            for _ in 0..8 {
                let carry = self.register & 1;
                self.register >>= 1;
                if carry == 1 {
                    self.register ^= POLYNOMIAL;
                }
            }
        }
    }

    pub const fn finalize(self) -> u32 {
        !self.register
    }
}

pub fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = Crc32::new();
    crc.update(bytes);
    crc.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn check_value() {
        assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn empty_input() {
        assert_eq!(crc32(&[]), 0);
    }

    #[test]
    fn iend_chunk_crc() {
        // Every PNG ends with this one.
        assert_eq!(crc32(b"IEND"), 0xAE42_6082);
    }

    #[test]
    fn incremental_matches_one_shot() {
        let mut crc = Crc32::new();
        crc.update(b"IHDR");
        crc.update(&[0, 0, 0, 2, 0, 0, 0, 2, 8, 2, 0, 0, 0]);
        let mut joined = b"IHDR".to_vec();
        joined.extend_from_slice(&[0, 0, 0, 2, 0, 0, 0, 2, 8, 2, 0, 0, 0]);
        assert_eq!(crc.finalize(), crc32(&joined));
    }

    #[test]
    fn agrees_with_crc32fast() {
        let samples: [&[u8]; 4] = [
            b"",
            b"a",
            b"The quick brown fox jumps over the lazy dog",
            &[0xFF; 1024],
        ];
        for sample in samples {
            assert_eq!(crc32(sample), crc32fast::hash(sample), "{sample:02X?}");
        }
        let ramp: Vec<u8> = (0..=255).cycle().take(5000).collect();
        assert_eq!(crc32(&ramp), crc32fast::hash(&ramp));
    }
}
