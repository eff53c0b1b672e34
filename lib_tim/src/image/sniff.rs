use std::io::{ErrorKind, Read, Seek, SeekFrom};

use super::format::TIM_SIGNATURE;

/// Checks whether `stream` starts with the TIM signature `10 00 00 00`.
///
/// Reads up to four bytes, then seeks back, so the read position is left
/// untouched. A stream that cannot supply four bytes, or fails to read, is
/// reported as `false`.
pub fn can_decode<R: Read + Seek + ?Sized>(stream: &mut R) -> bool {
    let Ok(start) = stream.seek(SeekFrom::Current(0)) else {
        return false;
    };

    let mut head = [0; TIM_SIGNATURE.len()];
    let filled = fill_head(stream, &mut head);

    let rewound = stream.seek(SeekFrom::Start(start)).is_ok();
    rewound && filled == Some(head.len()) && head == TIM_SIGNATURE
}

// Short reads are retried until the buffer is full or the stream ends.
fn fill_head<R: Read + ?Sized>(stream: &mut R, head: &mut [u8]) -> Option<usize> {
    let mut filled = 0;
    while filled < head.len() {
        match stream.read(&mut head[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(_) => return None,
        }
    }
    Some(filled)
}
