use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

/// Destination for raw request payloads.
///
/// The login handler prints every parsed body here, unredacted. The sink is
/// attached to the router as an `Extension` layer by the caller, so tests can
/// swap stdout for an in-memory buffer.
#[derive(Clone)]
pub struct PayloadSink(Arc<Mutex<Box<dyn Write + Send>>>);

impl PayloadSink {
    pub fn stdout() -> Self {
        Self(Arc::new(Mutex::new(Box::new(io::stdout()))))
    }

    /// Buffer-backed sink; returns the sink and a handle to the captured
    /// bytes.
    pub fn memory() -> (Self, Arc<Mutex<Vec<u8>>>) {
        let buf = Arc::new(Mutex::new(Vec::new()));
        let sink = Self(Arc::new(Mutex::new(Box::new(SharedBuf(buf.clone())))));
        (sink, buf)
    }

    /// Write one line to the sink, swallowing I/O errors. Payload logging
    /// never fails a request.
    pub fn write_line(&self, line: &str) {
        let mut writer = match self.0.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(writer, "{line}");
    }
}

struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut buf = match self.0.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
