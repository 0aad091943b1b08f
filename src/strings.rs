/// Bytes of `c` up to, not including, the first NUL.
///
/// Without a NUL the whole slice is the string.
pub fn until_nul(c: &[u8]) -> &[u8] {
    &c[..strlen(c)]
}

fn strlen(c: &[u8]) -> usize {
    let mut len: usize = 0;
    while len < c.len() && c[len] != 0 {
        len += 1;
    }

    len
}
