#![no_main]

use bitstream::{BitReader, BitWriter};
use layout::SaveVersion;
use libfuzzer_sys::fuzz_target;
use tables::{TableSet, MAX_CODE_LEN, PROPERTY_LIST_END, STAT_ID_BITS};

const MAX_SYMBOLS: usize = 64;
const MAX_PROPERTIES: usize = 64;

fn read_symbol(reader: &mut BitReader<'_>, tables: &TableSet) -> Option<char> {
    let mut bits = 0u16;
    for len in 1..=MAX_CODE_LEN {
        bits |= u16::from(reader.read_bit().ok()?) << (len - 1);
        if let Some(symbol) = tables.huffman_symbol(bits, len) {
            return Some(symbol);
        }
    }
    None
}

/// Reads one stat id and its parameter and value fields, echoing them to `writer`.
fn copy_property(reader: &mut BitReader<'_>, tables: &TableSet, writer: &mut BitWriter) -> bool {
    let Ok(raw) = reader.read_bits(STAT_ID_BITS) else {
        return false;
    };
    writer.write_bits(raw, STAT_ID_BITS).expect("id fits 9 bits");
    // 9-bit read always fits.
    #[allow(clippy::cast_possible_truncation)]
    let id = raw as u16;
    if id == PROPERTY_LIST_END {
        return false;
    }
    let Some(head) = tables.item_stat(id) else {
        return false;
    };
    for member in 0..u16::from(head.group_size) {
        let Some(def) = tables.item_stat(id + member) else {
            return false;
        };
        for width in [def.param_bits, def.save_bits] {
            if width == 0 {
                continue;
            }
            let Ok(value) = reader.read_bits(width) else {
                return false;
            };
            writer.write_bits(value, width).expect("value fits its width");
        }
    }
    true
}

fn bits_of(bytes: &[u8], start: usize, len: usize) -> Vec<bool> {
    let mut reader = BitReader::new(bytes);
    for _ in 0..start {
        reader.read_bit().expect("start is in range");
    }
    (0..len)
        .map(|_| reader.read_bit().expect("length is in range"))
        .collect()
}

fuzz_target!(|data: &[u8]| {
    let tables = TableSet::builtin(SaveVersion::RESURRECTED);
    let mut reader = BitReader::new(data);

    // Type code symbols write back as the bits they were read from.
    let mut writer = BitWriter::new();
    let mut consumed = 0;
    for _ in 0..MAX_SYMBOLS {
        let Some(symbol) = read_symbol(&mut reader, tables) else {
            break;
        };
        let code = tables.huffman_code(symbol).expect("decoded symbol has a code");
        writer
            .write_bits(u64::from(code.bits), code.len)
            .expect("code fits its length");
        consumed = reader.bit_position();
    }
    let written = writer.bits_written();
    assert_eq!(written, consumed);
    assert_eq!(bits_of(&writer.finish(), 0, written), bits_of(data, 0, written));

    // Property ids and fields from where the codes stopped.
    let start = consumed;
    let mut reader = BitReader::new(data);
    for _ in 0..start {
        reader.read_bit().expect("start is in range");
    }
    let mut writer = BitWriter::new();
    for _ in 0..MAX_PROPERTIES {
        if !copy_property(&mut reader, tables, &mut writer) {
            break;
        }
    }
    let written = writer.bits_written();
    assert_eq!(
        bits_of(&writer.finish(), 0, written),
        bits_of(data, start, written)
    );
});
