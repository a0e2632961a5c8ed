use log::{debug, info};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use super::params::{
    Phase, PhaseWeights, WeightTable, PAWN_STRUCTURE_SIZE, PIECE_COMBO_SIZE,
    PIECE_RELATIVE_PST_SIZE,
};
use crate::{Value, KNOWN_WIN};

// File Layout (all integers little-endian):
//
//   "BAEW" | version: u32 | pst len: u32 | pawn len: u32 | combo len: u32
//   [opening: pst | pawn structure | combo][endgame: pst | pawn structure | combo]
//
// Every coefficient is an i32 strictly inside (-KNOWN_WIN, KNOWN_WIN).

const MAGIC: &[u8; 4] = b"BAEW";
pub const FORMAT_VERSION: u32 = 1;

const VALUE_BYTES: usize = std::mem::size_of::<Value>();

/// Values are decoded in chunks to bound the scratch buffer.
const CHUNK_VALUES: usize = 1 << 16;

impl WeightTable {
    /// Reads a table, rejecting anything whose header does not match the compiled layout.
    pub fn read<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if &magic != MAGIC {
            return Err(invalid_data(format!(
                "Not a BAE weight file (magic {:?})",
                magic
            )));
        }

        let version = read_u32(&mut reader)?;
        if version != FORMAT_VERSION {
            return Err(invalid_data(format!(
                "Unsupported weight file version {} (expected {})",
                version, FORMAT_VERSION
            )));
        }

        expect_len(&mut reader, "piece-relative PST", PIECE_RELATIVE_PST_SIZE)?;
        expect_len(&mut reader, "pawn structure", PAWN_STRUCTURE_SIZE)?;
        expect_len(&mut reader, "piece combo", PIECE_COMBO_SIZE)?;

        let opening = read_phase(&mut reader)?;
        let endgame = read_phase(&mut reader)?;

        Ok(Self::from_phases(opening, endgame))
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(MAGIC)?;
        writer.write_all(&FORMAT_VERSION.to_le_bytes())?;
        writer.write_all(&(PIECE_RELATIVE_PST_SIZE as u32).to_le_bytes())?;
        writer.write_all(&(PAWN_STRUCTURE_SIZE as u32).to_le_bytes())?;
        writer.write_all(&(PIECE_COMBO_SIZE as u32).to_le_bytes())?;

        for phase in Phase::ALL {
            let weights = &self[phase];
            write_values(writer, weights.pst())?;
            write_values(writer, weights.pawn_structure())?;
            write_values(writer, weights.piece_combo())?;
        }

        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        debug!("Reading BAE weights from {}", path.display());

        let table = Self::read(BufReader::new(File::open(path)?))?;
        info!("Loaded BAE weights from {}", path.display());
        Ok(table)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write(&mut writer)?;
        writer.flush()?;

        info!("Saved BAE weights to {}", path.display());
        Ok(())
    }
}

fn read_phase<R: Read>(reader: &mut R) -> io::Result<PhaseWeights> {
    let mut weights = PhaseWeights::zeroed();
    read_values(reader, weights.pst_mut())?;
    read_values(reader, weights.pawn_structure_mut())?;
    read_values(reader, weights.piece_combo_mut())?;
    Ok(weights)
}

fn read_values<R: Read>(reader: &mut R, values: &mut [Value]) -> io::Result<()> {
    let mut buffer = vec![0u8; CHUNK_VALUES * VALUE_BYTES];

    for chunk in values.chunks_mut(CHUNK_VALUES) {
        let bytes = &mut buffer[..chunk.len() * VALUE_BYTES];
        reader.read_exact(bytes)?;

        for (value, raw) in chunk.iter_mut().zip(bytes.chunks_exact(VALUE_BYTES)) {
            *value = Value::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]);
            if value.unsigned_abs() >= KNOWN_WIN.unsigned_abs() {
                return Err(invalid_data(format!(
                    "Coefficient {} out of range (limit {})",
                    value, KNOWN_WIN
                )));
            }
        }
    }

    Ok(())
}

fn write_values<W: Write>(writer: &mut W, values: &[Value]) -> io::Result<()> {
    let mut buffer = Vec::with_capacity(CHUNK_VALUES * VALUE_BYTES);

    for chunk in values.chunks(CHUNK_VALUES) {
        buffer.clear();
        for value in chunk {
            buffer.extend_from_slice(&value.to_le_bytes());
        }
        writer.write_all(&buffer)?;
    }

    Ok(())
}

fn read_u32<R: Read>(reader: &mut R) -> io::Result<u32> {
    let mut bytes = [0u8; 4];
    reader.read_exact(&mut bytes)?;
    Ok(u32::from_le_bytes(bytes))
}

fn expect_len<R: Read>(reader: &mut R, table: &str, expected: usize) -> io::Result<()> {
    let len = read_u32(reader)? as usize;
    if len != expected {
        return Err(invalid_data(format!(
            "{} table has {} entries, expected {}",
            table, len, expected
        )));
    }
    Ok(())
}

fn invalid_data(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}
