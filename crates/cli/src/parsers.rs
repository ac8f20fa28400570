/// Parse a byte size with an optional binary suffix (e.g. `512`, `64K`, `1MiB`).
///
/// # Errors
/// Returns an error if the number is malformed, zero, or larger than 1 GiB.
pub fn parse_buffer_size(s: &str) -> Result<usize, String> {
    const MAX: u64 = 1024 * 1024 * 1024;

    let s = s.trim().replace('_', "");
    let lower = s.to_ascii_lowercase();
    let (num_str, multiplier) = parse_with_suffix(&lower);
    let num: u64 = num_str
        .parse()
        .map_err(|_| format!("Invalid size number: {num_str}"))?;
    let bytes = num
        .checked_mul(multiplier)
        .filter(|&b| b <= MAX)
        .ok_or_else(|| format!("size must be at most {MAX} bytes"))?;
    if bytes == 0 {
        return Err("size must be at least 1 byte".to_string());
    }
    usize::try_from(bytes).map_err(|_| format!("size {bytes} does not fit in memory"))
}

fn parse_with_suffix(s: &str) -> (&str, u64) {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const SUFFIXES: &[(&[&str], u64)] = &[
        (&["gib", "gb", "g"], GB),
        (&["mib", "mb", "m"], MB),
        (&["kib", "kb", "k"], KB),
    ];
    for (suffixes, multiplier) in SUFFIXES {
        for suffix in *suffixes {
            if let Some(stripped) = s.strip_suffix(suffix) {
                return (stripped.trim(), *multiplier);
            }
        }
    }
    (s, 1)
}
