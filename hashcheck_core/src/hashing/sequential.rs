//! Sequential streaming digest
//!
//! Reads the input through a single fixed-size buffer and feeds every chunk
//! to the digest in the order it was read. Memory use is the buffer plus the
//! hasher state, whatever the input size.

use super::{HashAlgorithm, StreamingHasher};
use std::io::{ErrorKind, Read};

/// Raw output of a streaming pass
#[derive(Debug)]
pub(crate) struct StreamOutcome {
    pub digest: Vec<u8>,
    pub bytes_processed: u64,
    pub io_operations: u64,
}

/// Digest everything `reader` yields until end of input.
///
/// Read errors are returned as-is; `Interrupted` reads are reissued.
pub(crate) fn digest_stream<R: Read + ?Sized>(
    reader: &mut R,
    algorithm: HashAlgorithm,
    buffer_size: usize,
) -> std::io::Result<StreamOutcome> {
    let mut hasher = algorithm.create_hasher();
    let mut buffer = vec![0u8; buffer_size];
    let mut bytes_processed = 0u64;
    let mut io_operations = 0u64;

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                log::debug!("{algorithm} stream aborted after {bytes_processed} bytes: {e}");
                return Err(e);
            }
        };
        io_operations += 1;

        if n == 0 {
            break;
        }

        hasher.update(&buffer[..n]);
        bytes_processed += n as u64;
        log::trace!("{algorithm}: chunk of {n} bytes, {bytes_processed} total");
    }

    let digest = hasher.finalize();
    log::debug!("{algorithm}: digested {bytes_processed} bytes in {io_operations} reads");

    Ok(StreamOutcome {
        digest,
        bytes_processed,
        io_operations,
    })
}
