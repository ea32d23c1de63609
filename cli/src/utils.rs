/// Format bytes as space separated upper-case hex, e.g. `F0 9F 94 92`.
pub(crate) fn format_hex_bytes(data: &[u8]) -> String {
    data.iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::format_hex_bytes;

    #[test]
    fn test_format_hex_bytes() {
        assert_eq!("", format_hex_bytes(&[]));
        assert_eq!("41", format_hex_bytes(b"A"));
        assert_eq!("F0 9F 94 92", format_hex_bytes(&[0xF0, 0x9F, 0x94, 0x92]));
    }
}
