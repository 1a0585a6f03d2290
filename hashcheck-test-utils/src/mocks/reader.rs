//! Readers for exercising error and retry paths of the streaming engine

use std::io::{self, Read};

/// Yields `data`, then fails every later read with `kind`
pub struct FailingReader {
    data: Vec<u8>,
    position: usize,
    kind: io::ErrorKind,
    failures: usize,
}

impl FailingReader {
    /// Fail with a generic I/O error once `data` is exhausted
    pub fn new(data: Vec<u8>) -> Self {
        Self::with_kind(data, io::ErrorKind::Other)
    }

    /// Fail with a specific error kind once `data` is exhausted
    pub fn with_kind(data: Vec<u8>, kind: io::ErrorKind) -> Self {
        Self {
            data,
            position: 0,
            kind,
            failures: 0,
        }
    }

    /// Number of reads that returned an error
    pub fn failures(&self) -> usize {
        self.failures
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.position >= self.data.len() {
            self.failures += 1;
            return Err(io::Error::new(self.kind, "simulated read failure"));
        }
        let n = buf.len().min(self.data.len() - self.position);
        buf[..n].copy_from_slice(&self.data[self.position..self.position + n]);
        self.position += n;
        Ok(n)
    }
}

/// Interrupts every other read, otherwise yields `data` in full
pub struct InterruptingReader {
    data: Vec<u8>,
    position: usize,
    interrupt_next: bool,
    interruptions: usize,
}

impl InterruptingReader {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            position: 0,
            interrupt_next: true,
            interruptions: 0,
        }
    }

    /// How many reads were interrupted
    pub fn interruptions(&self) -> usize {
        self.interruptions
    }
}

impl Read for InterruptingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.interrupt_next {
            self.interrupt_next = false;
            self.interruptions += 1;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        self.interrupt_next = true;

        let n = buf.len().min(self.data.len() - self.position);
        buf[..n].copy_from_slice(&self.data[self.position..self.position + n]);
        self.position += n;
        Ok(n)
    }
}
