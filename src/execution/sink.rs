//! Where trace lines and child output go
//!
//! `Inherit` is the operator's terminal: children share our stdin, stdout
//! and stderr. `Capture` collects everything into an in-memory buffer in
//! the order it was produced, which is what tests look at.

use crate::cli::output::{format_confirmation, format_trace_line};
use crate::core::CommandSpec;
use console::style;
use std::io::{self, Write};
use std::process::{Output, Stdio};
use std::sync::{Arc, Mutex};

/// Shared, append-only text buffer
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, data: &[u8]) {
        let mut bytes = self.bytes.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        bytes.extend_from_slice(data);
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

/// Destination for the runner's own output and its children's streams
#[derive(Debug, Clone)]
pub enum OutputSink {
    /// Write to the real terminal, children inherit our streams
    Inherit,
    /// Collect into a buffer
    Capture(CaptureBuffer),
}

impl OutputSink {
    /// A capturing sink plus a handle to read what it collected
    pub fn capture() -> (Self, CaptureBuffer) {
        let buffer = CaptureBuffer::new();
        (OutputSink::Capture(buffer.clone()), buffer)
    }

    /// Echo a command before it runs
    pub fn trace(&self, command: &CommandSpec) {
        let line = format_trace_line(command);
        match self {
            OutputSink::Inherit => {
                let mut out = io::stdout().lock();
                let _ = writeln!(out, "{}", style(line).bold());
                // must reach the terminal before the child writes anything
                let _ = out.flush();
            }
            OutputSink::Capture(buffer) => {
                buffer.append(line.as_bytes());
                buffer.append(b"\n");
            }
        }
    }

    /// Print the final success message
    pub fn confirm(&self) {
        match self {
            OutputSink::Inherit => {
                let mut out = io::stdout().lock();
                let _ = writeln!(out, "{}", format_confirmation(true));
                let _ = out.flush();
            }
            OutputSink::Capture(buffer) => {
                buffer.append(format_confirmation(false).as_bytes());
                buffer.append(b"\n");
            }
        }
    }

    /// Stdio handles for a child: (stdin, stdout, stderr)
    pub fn child_stdio(&self) -> (Stdio, Stdio, Stdio) {
        match self {
            OutputSink::Inherit => (Stdio::inherit(), Stdio::inherit(), Stdio::inherit()),
            OutputSink::Capture(_) => (Stdio::null(), Stdio::piped(), Stdio::piped()),
        }
    }

    /// Record a finished child's piped output (no-op when inherited)
    pub fn collect(&self, output: &Output) {
        if let OutputSink::Capture(buffer) = self {
            buffer.append(&output.stdout);
            buffer.append(&output.stderr);
        }
    }
}
