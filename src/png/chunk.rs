use std::fmt::{self, Debug};

use super::crc::Crc32;
use crate::error::{Error, Result};

/// A four-letter chunk tag such as `IHDR`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkType([u8; 4]);

impl ChunkType {
    pub const IHDR: ChunkType = ChunkType(*b"IHDR");
    pub const IDAT: ChunkType = ChunkType(*b"IDAT");
    pub const IEND: ChunkType = ChunkType(*b"IEND");

    pub fn new(tag: &str) -> Result<ChunkType> {
        let bytes: [u8; 4] = tag
            .as_bytes()
            .try_into()
            .map_err(|_| Error::InvalidChunkType(tag.to_owned()))?;
        if !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(Error::InvalidChunkType(tag.to_owned()));
        }
        Ok(ChunkType(bytes))
    }

    pub const fn bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl Debug for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

struct HexDump<'a>(&'a [u8]);

impl Debug for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .0
            .chunks(16)
            .map(|row| {
                format!(
                    "\t{}",
                    row.iter()
                        .map(|x| format!("0x{:02X?}", x))
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
            .collect::<Vec<_>>()
            .join(",\n");
        write!(f, "[\n{}\n]", rows)
    }
}

#[derive(Clone)]
pub struct Chunk {
    kind: ChunkType,
    payload: Vec<u8>,
    crc: u32,
}

impl Debug for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chunk {{
    Size:\t {}
    Name:\t\"{:?}\"
    Data:\t{}
    CRC:\t{:08X?}
}}",
            self.payload.len(),
            self.kind,
            format!("{:?}", HexDump(&self.payload)).replace('\n', "\n\t\t"),
            self.crc
        )
    }
}

impl Chunk {
    pub fn crc(kind: ChunkType, payload: &[u8]) -> u32 {
        let mut crc = Crc32::new();
        crc.update(kind.bytes());
        crc.update(payload);
        crc.finalize()
    }

    pub fn new(kind: ChunkType, payload: Vec<u8>) -> Result<Chunk> {
        if u32::try_from(payload.len()).is_err() {
            return Err(Error::ChunkTooLarge(payload.len()));
        }
        Ok(Chunk {
            crc: Chunk::crc(kind, &payload),
            kind,
            payload,
        })
    }

    pub fn kind(&self) -> ChunkType {
        self.kind
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn check_crc(&self) -> bool {
        Chunk::crc(self.kind, &self.payload) == self.crc
    }

    /// Size on the wire: length, type, payload and CRC.
    pub fn encoded_len(&self) -> usize {
        self.payload.len() + 12
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        // Length was range-checked in `new`.
        out.extend_from_slice(&(self.payload.len() as u32).to_be_bytes());
        out.extend_from_slice(self.kind.bytes());
        out.extend_from_slice(&self.payload);
        out.extend_from_slice(&self.crc.to_be_bytes());
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut res);
        res
    }
}

/// Frame `payload` as a complete chunk: `[len][type][payload][crc]`.
pub fn make_chunk(tag: &str, payload: &[u8]) -> Result<Vec<u8>> {
    Ok(Chunk::new(ChunkType::new(tag)?, payload.to_vec())?.to_bytes())
}
