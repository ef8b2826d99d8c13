//! Raw binary image loading: copy bytes verbatim into RAM at a start
//! address and set the reset vector to point at them. No header, no
//! symbol or debug metadata.

use super::error::CoreError;

const ADDRESS_SPACE: u32 = 0x1_0000;

/// Copy `image` into `[start, start+image.len())`, failing if the image
/// would overflow the 64 KiB address space. `write_byte` is called once
/// per byte in order, letting the caller target RAM, a bus, or a test
/// double.
pub fn load_program(
    start: u16,
    image: &[u8],
    mut write_byte: impl FnMut(u16, u8),
) -> Result<(), CoreError> {
    let end = start as u32 + image.len() as u32;
    if end > ADDRESS_SPACE {
        return Err(CoreError::RangeExceeded {
            start: start as u32,
            len: image.len(),
        });
    }
    for (offset, &byte) in image.iter().enumerate() {
        write_byte(start + offset as u16, byte);
    }
    Ok(())
}

/// Read a binary image from disk. Reports `IoFailure` if the file cannot
/// be opened or fully read.
pub fn read_image(path: &std::path::Path) -> Result<Vec<u8>, CoreError> {
    std::fs::read(path).map_err(CoreError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_bytes_verbatim() {
        let mut ram = [0u8; 0x10000];
        load_program(0x8000, &[0xDE, 0xAD, 0xBE, 0xEF], |addr, b| {
            ram[addr as usize] = b;
        })
        .unwrap();
        assert_eq!(&ram[0x8000..0x8004], &[0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn overflow_is_range_exceeded() {
        let result = load_program(0xFFF0, &[0u8; 32], |_, _| {});
        assert!(matches!(result, Err(CoreError::RangeExceeded { .. })));
    }

    #[test]
    fn exact_fit_at_top_of_space_succeeds() {
        let result = load_program(0xFF00, &[0u8; 0x100], |_, _| {});
        assert!(result.is_ok());
    }
}
