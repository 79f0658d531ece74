use super::MemoryConfigStore;

/// Load `key=value` provisioning lines into a store. Lines without a
/// `=` and blank lines are skipped; values keep their bytes verbatim
/// after trimming line-end whitespace. Returns the number of entries
/// stored, or `Err` once the store rejects an entry.
pub fn load_config_lines(store: &mut MemoryConfigStore, buf: &[u8]) -> Result<usize, ()> {
    let mut stored = 0usize;
    for raw_line in buf.split(|byte| *byte == b'\n') {
        let line = trim_ascii_line(raw_line);
        if line.is_empty() {
            continue;
        }
        let separator = match line.iter().position(|byte| *byte == b'=') {
            Some(position) => position,
            None => continue,
        };
        let key = match core::str::from_utf8(&line[..separator]) {
            Ok(key) if !key.is_empty() => key,
            _ => continue,
        };
        store.set(key, &line[separator + 1..])?;
        stored += 1;
    }
    Ok(stored)
}

fn trim_ascii_line(mut line: &[u8]) -> &[u8] {
    while matches!(line.last(), Some(b'\r' | b' ' | b'\t')) {
        line = &line[..line.len().saturating_sub(1)];
    }
    while matches!(line.first(), Some(b' ' | b'\t')) {
        line = &line[1..];
    }
    line
}
