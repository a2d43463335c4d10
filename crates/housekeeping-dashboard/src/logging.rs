/*
[INPUT]:  Log level directive, output target, optional log directory
[OUTPUT]: Installed tracing subscriber and the in-memory log buffer the TUI renders
[POS]:    Logging setup shared by CLI and TUI modes
[UPDATE]: When changing log destinations or buffer behaviour
*/

use std::collections::VecDeque;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_BUFFER_CAPACITY: usize = 2000;
const LOG_FILE_PREFIX: &str = "housekeeping-dashboard.log";

pub type LogBufferHandle = Arc<Mutex<LogBuffer>>;

/// Bounded ring of formatted log lines
#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity,
        }
    }

    pub fn handle(capacity: usize) -> LogBufferHandle {
        Arc::new(Mutex::new(Self::new(capacity)))
    }

    pub fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    /// Last `count` lines, oldest first
    pub fn tail(&self, count: usize) -> Vec<String> {
        let skip = self.lines.len().saturating_sub(count);
        self.lines.iter().skip(skip).cloned().collect()
    }
}

fn lock_buffer(buffer: &LogBufferHandle) -> MutexGuard<'_, LogBuffer> {
    // a panic while holding the lock only loses a partial line
    buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// `MakeWriter` that splits formatted output into lines of a [`LogBuffer`]
#[derive(Clone)]
pub struct LogWriterFactory {
    buffer: LogBufferHandle,
}

impl LogWriterFactory {
    pub fn new(buffer: LogBufferHandle) -> Self {
        Self { buffer }
    }
}

pub struct LogWriter {
    buffer: LogBufferHandle,
    partial: String,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let chunk = String::from_utf8_lossy(buf);
        self.partial.push_str(&chunk);
        while let Some(pos) = self.partial.find('\n') {
            let line = self.partial[..pos].trim_end_matches('\r').to_string();
            self.partial.drain(..=pos);
            lock_buffer(&self.buffer).push_line(line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.partial.is_empty() {
            let line = std::mem::take(&mut self.partial);
            lock_buffer(&self.buffer).push_line(line);
        }
        Ok(())
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
            partial: String::new(),
        }
    }
}

/// Where console-style output goes
pub enum LogTarget {
    /// stderr, for one-shot commands
    Stderr,
    /// In-memory buffer, for the TUI (stdout belongs to the terminal)
    Buffer(LogBufferHandle),
}

/// Install the global subscriber.
///
/// The returned guard must be held for the life of the program when a log
/// directory is configured, otherwise buffered file output is lost.
pub fn init_tracing(
    log_level: &str,
    target: LogTarget,
    log_dir: Option<&Path>,
) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create log dir {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let (stderr_layer, buffer_layer) = match target {
        LogTarget::Stderr => (
            Some(tracing_subscriber::fmt::layer().with_writer(io::stderr)),
            None,
        ),
        LogTarget::Buffer(buffer) => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(LogWriterFactory::new(buffer))
                    .with_ansi(false)
                    .with_target(false),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(buffer_layer)
        .with(file_layer)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;

    Ok(guard)
}
