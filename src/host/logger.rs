use std::fmt::{Display, Formatter};
use tracing::{debug, error, info, warn};

/// Structured key-value context attached to a log call.
pub type LogContext<'a> = &'a [(&'a str, &'a dyn Display)];

/// Leveled logging sink supplied by the host.
pub trait PlatformLogger: Send + Sync {
    fn debug(&self, message: &str, context: LogContext<'_>);
    fn info(&self, message: &str, context: LogContext<'_>);
    fn warn(&self, message: &str, context: LogContext<'_>);
    fn error(&self, message: &str, context: LogContext<'_>);
}

/// Forwards log calls to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl PlatformLogger for TracingLogger {
    fn debug(&self, message: &str, context: LogContext<'_>) {
        debug!(context = %Fields(context), "{}", message);
    }

    fn info(&self, message: &str, context: LogContext<'_>) {
        info!(context = %Fields(context), "{}", message);
    }

    fn warn(&self, message: &str, context: LogContext<'_>) {
        warn!(context = %Fields(context), "⚠️ {}", message);
    }

    fn error(&self, message: &str, context: LogContext<'_>) {
        error!(context = %Fields(context), "❌ {}", message);
    }
}

struct Fields<'a>(LogContext<'a>);

impl Display for Fields<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingLogger {
    entries: std::sync::Mutex<Vec<(LogLevel, String)>>,
}

#[cfg(test)]
impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.lock().unwrap().clone()
    }

    pub fn entries_at(&self, level: LogLevel) -> Vec<String> {
        self.entries().into_iter().filter(|(l, _)| *l == level).map(|(_, message)| message).collect()
    }

    fn record(&self, level: LogLevel, message: &str, context: LogContext<'_>) {
        let line = if context.is_empty() {
            message.to_string()
        } else {
            format!("{} {}", message, Fields(context))
        };
        self.entries.lock().unwrap().push((level, line));
    }
}

#[cfg(test)]
impl PlatformLogger for RecordingLogger {
    fn debug(&self, message: &str, context: LogContext<'_>) {
        self.record(LogLevel::Debug, message, context);
    }

    fn info(&self, message: &str, context: LogContext<'_>) {
        self.record(LogLevel::Info, message, context);
    }

    fn warn(&self, message: &str, context: LogContext<'_>) {
        self.record(LogLevel::Warn, message, context);
    }

    fn error(&self, message: &str, context: LogContext<'_>) {
        self.record(LogLevel::Error, message, context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn fields_render_as_key_value_pairs() {
        let device = 1;
        let field = "token";
        let context: LogContext = &[("device", &device), ("field", &field)];

        assert_eq!(Fields(context).to_string(), "device=1 field=token");
    }

    #[test]
    fn fields_render_empty_context_as_empty_string() {
        assert_eq!(Fields(&[]).to_string(), "");
    }

    #[test]
    fn recording_logger_keeps_level_and_context() {
        let logger = RecordingLogger::new();
        let seconds = 0;

        logger.warn("invalid poller interval", &[("pollerseconds", &seconds)]);
        logger.debug("using default", &[]);

        assert_eq!(
            logger.entries(),
            vec![
                (LogLevel::Warn, "invalid poller interval pollerseconds=0".to_string()),
                (LogLevel::Debug, "using default".to_string()),
            ]
        );
    }

    #[derive(Clone, Default)]
    struct SharedBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn tracing_logger_forwards_levels_messages_and_context() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .without_time()
            .with_writer(move || writer.clone())
            .finish();
        let device = 0;

        tracing::subscriber::with_default(subscriber, || {
            let logger = TracingLogger;
            logger.debug("loaded device", &[("device", &device)]);
            logger.info("loaded platform configuration", &[]);
            logger.warn("invalid poller interval", &[]);
            logger.error("invalid platform configuration", &[("device", &device)]);
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let lines = output.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 4, "unexpected output: {}", output);
        assert!(lines[0].contains("DEBUG") && lines[0].contains("loaded device") && lines[0].contains("context=device=0"));
        assert!(lines[1].contains("INFO") && lines[1].contains("loaded platform configuration"));
        assert!(lines[2].contains("WARN") && lines[2].contains("⚠️ invalid poller interval"));
        assert!(lines[3].contains("ERROR") && lines[3].contains("❌ invalid platform configuration"));
    }
}
