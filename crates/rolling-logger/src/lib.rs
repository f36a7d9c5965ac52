//! Rolling Logger
//!
//! `tracing` subscriber writing to `{log_dir}/{app_name}.log`. When the file
//! grows past [`MAX_FILE_BYTES`] it is moved to `{app_name}.log.1` and a
//! fresh file is started. The newest lines are also kept in memory so the
//! app can show them without touching the filesystem.
//!
//! `log` records from libraries are bridged into `tracing` on desktop. On
//! Android a [`LogBridge`] writes them to the same file and buffer before
//! handing them to logcat through `android_logger`.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

pub const MAX_FILE_BYTES: u64 = 1024 * 1024;
pub const BUFFER_LINES: usize = 500;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

static LOGGER: OnceLock<RollingWriter> = OnceLock::new();

struct RollingFile {
    path: PathBuf,
    backup: PathBuf,
    max_bytes: u64,
    file: File,
    written: u64,
}

impl RollingFile {
    fn open(path: PathBuf, max_bytes: u64) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        let mut backup = path.clone().into_os_string();
        backup.push(".1");
        Ok(Self {
            backup: PathBuf::from(backup),
            path,
            max_bytes,
            file,
            written,
        })
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.roll()?;
        }
        self.file.write_all(buf)?;
        self.written += buf.len() as u64;
        Ok(())
    }

    fn roll(&mut self) -> io::Result<()> {
        self.file.flush()?;
        fs::rename(&self.path, &self.backup)?;
        self.file = OpenOptions::new().create(true).write(true).truncate(true).open(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

struct Inner {
    file: Mutex<RollingFile>,
    lines: Mutex<VecDeque<String>>,
    capacity: usize,
}

/// Cloneable handle used as the subscriber's writer
#[derive(Clone)]
pub struct RollingWriter {
    inner: Arc<Inner>,
}

impl RollingWriter {
    pub fn new(log_dir: &Path, app_name: &str, max_bytes: u64, capacity: usize) -> io::Result<Self> {
        fs::create_dir_all(log_dir)?;
        let file = RollingFile::open(log_dir.join(format!("{}.log", app_name)), max_bytes)?;
        Ok(Self {
            inner: Arc::new(Inner {
                file: Mutex::new(file),
                lines: Mutex::new(VecDeque::with_capacity(capacity)),
                capacity,
            }),
        })
    }

    /// Newest lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        match self.inner.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn remember(&self, buf: &[u8]) {
        if self.inner.capacity == 0 {
            return;
        }
        let Ok(mut lines) = self.inner.lines.lock() else {
            return;
        };
        for line in String::from_utf8_lossy(buf).lines().filter(|l| !l.is_empty()) {
            if lines.len() == self.inner.capacity {
                lines.pop_front();
            }
            lines.push_back(line.to_string());
        }
    }
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.remember(buf);
        let mut file = self
            .inner
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.inner.file.lock() {
            Ok(mut file) => file.file.flush(),
            Err(_) => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Local wall-clock timestamps
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format(TIME_FORMAT))
    }
}

/// `log` backend that writes each record to the rolling file, then
/// forwards it to `inner`
#[cfg(any(target_os = "android", test))]
struct LogBridge<L> {
    writer: RollingWriter,
    inner: L,
    level: log::LevelFilter,
}

#[cfg(any(target_os = "android", test))]
impl<L: log::Log> LogBridge<L> {
    fn new(writer: RollingWriter, inner: L, level: log::LevelFilter) -> Self {
        Self { writer, inner, level }
    }
}

#[cfg(any(target_os = "android", test))]
impl<L: log::Log> log::Log for LogBridge<L> {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "{} {:>5} {}: {}\n",
            chrono::Local::now().format(TIME_FORMAT),
            record.level(),
            record.target(),
            record.args()
        );
        let mut writer = self.writer.clone();
        if let Err(e) = writer.write_all(line.as_bytes()) {
            eprintln!("[rolling-logger] write failed: {}", e);
        }
        self.inner.log(record);
    }

    fn flush(&self) {
        let _ = self.writer.clone().flush();
        self.inner.flush();
    }
}

/// Install the global subscriber; call once at startup
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    let writer = RollingWriter::new(&log_dir, app_name, MAX_FILE_BYTES, BUFFER_LINES)
        .map_err(|e| format!("Failed to open log file in {}: {}", log_dir.display(), e))?;
    LOGGER
        .set(writer.clone())
        .map_err(|_| "Logger already initialized".to_string())?;

    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_ansi(false)
        .with_timer(LocalTime)
        .with_max_level(tracing::Level::INFO);

    #[cfg(target_os = "android")]
    {
        let logcat = android_logger::AndroidLogger::new(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Info)
                .with_tag(app_name),
        );
        let bridge = LogBridge::new(writer.clone(), logcat, log::LevelFilter::Info);
        log::set_boxed_logger(Box::new(bridge)).map_err(|e| e.to_string())?;
        log::set_max_level(log::LevelFilter::Info);
        tracing::subscriber::set_global_default(subscriber.finish()).map_err(|e| e.to_string())?;
    }

    #[cfg(not(target_os = "android"))]
    {
        use tracing_subscriber::util::SubscriberInitExt;
        subscriber.finish().try_init().map_err(|e| e.to_string())?;
    }

    log::info!("{} logging to {}", app_name, log_dir.display());
    Ok(())
}

/// Lines kept in memory by the global logger
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingWriter::recent_lines).unwrap_or_default()
}

fn ensure_initialized() -> Result<(), String> {
    if LOGGER.get().is_some() {
        Ok(())
    } else {
        Err("Logger not initialized".to_string())
    }
}

pub fn info(message: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::info!("{}", message);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_to_app_log() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingWriter::new(dir.path(), "Pantry", 1024, 10).unwrap();
        writer.write_all(b"hello\n").unwrap();
        writer.flush().unwrap();

        let content = fs::read_to_string(dir.path().join("Pantry.log")).unwrap();
        assert_eq!(content, "hello\n");
    }

    #[test]
    fn test_rolls_over_past_cap() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingWriter::new(dir.path(), "Pantry", 32, 10).unwrap();
        for i in 0..6 {
            writer.write_all(format!("line number {}\n", i).as_bytes()).unwrap();
        }
        writer.flush().unwrap();

        let current = fs::read_to_string(dir.path().join("Pantry.log")).unwrap();
        let backup = fs::read_to_string(dir.path().join("Pantry.log.1")).unwrap();
        assert!(current.len() as u64 <= 32);
        assert!(current.ends_with("line number 5\n"));
        assert!(!backup.is_empty());
        assert!(!current.contains("line number 0"));
    }

    #[test]
    fn test_ring_buffer_keeps_newest() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingWriter::new(dir.path(), "Pantry", 1024, 3).unwrap();
        writer.write_all(b"a\nb\n").unwrap();
        writer.write_all(b"c\n").unwrap();
        writer.write_all(b"d\ne\n").unwrap();
        assert_eq!(writer.recent_lines(), vec!["c", "d", "e"]);
    }

    /// Stands in for logcat
    #[derive(Default)]
    struct Recorder {
        messages: Mutex<Vec<String>>,
    }

    impl log::Log for &Recorder {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            self.messages.lock().unwrap().push(record.args().to_string());
        }

        fn flush(&self) {}
    }

    #[test]
    fn test_log_bridge_writes_buffer_and_forwards() {
        use log::Log;

        let dir = tempfile::tempdir().unwrap();
        let writer = RollingWriter::new(dir.path(), "Pantry", 1024, 10).unwrap();
        let recorder = Recorder::default();
        let bridge = LogBridge::new(writer.clone(), &recorder, log::LevelFilter::Info);

        bridge.log(
            &log::Record::builder()
                .level(log::Level::Warn)
                .target("pantry_core::settings")
                .args(format_args!("[settings] failed to save preferences"))
                .build(),
        );
        bridge.log(
            &log::Record::builder()
                .level(log::Level::Debug)
                .args(format_args!("too chatty"))
                .build(),
        );
        bridge.flush();

        let lines = writer.recent_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(" WARN pantry_core::settings: [settings] failed to save preferences"));

        let content = fs::read_to_string(dir.path().join("Pantry.log")).unwrap();
        assert!(content.contains("failed to save preferences"));
        assert!(!content.contains("too chatty"));

        assert_eq!(*recorder.messages.lock().unwrap(), vec!["[settings] failed to save preferences"]);
    }

    #[test]
    fn test_helpers_require_init() {
        // The global logger is never installed in unit tests
        if LOGGER.get().is_none() {
            assert!(info("x").is_err());
            assert!(recent_lines().is_empty());
        }
    }
}
