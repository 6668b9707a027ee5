use std::sync::{Mutex, OnceLock};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Discard is a writer that discards all data written to it.
struct Discard;

impl std::io::Write for Discard {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// keeps the non-blocking writers alive for the lifetime of the process
fn worker_guards() -> &'static Mutex<Vec<WorkerGuard>> {
    static GUARDS: OnceLock<Mutex<Vec<WorkerGuard>>> = OnceLock::new();
    GUARDS.get_or_init(|| Mutex::new(Vec::new()))
}

/// Install the global tracing subscriber from the `log` section of the numkit config.
///
/// Console output and a daily rolling file are both optional; calling this more than
/// once is a no-op. Returns false when a subscriber was already installed elsewhere.
pub fn logging_initialize() -> bool {
    static INITIALIZED: OnceLock<bool> = OnceLock::new();
    *INITIALIZED.get_or_init(install)
}

fn install() -> bool {
    let (app_name, log_conf) = match crate::conf::numkit().read() {
        Ok(numkit) => (numkit.name.clone(), numkit.log.clone().unwrap_or_default()),
        Err(_) => ("numkit".to_string(), Default::default()),
    };

    let (nonblocking, discard_guard) = tracing_appender::non_blocking(Discard {});
    let (console, console_reload) =
        tracing_subscriber::reload::Layer::new(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(nonblocking.clone()));

    let (persist, persist_reload) =
        tracing_subscriber::reload::Layer::new(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(nonblocking.clone()));

    let mut guards: Vec<WorkerGuard> = vec![discard_guard];
    if log_conf.console {
        let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);
        if let Err(e) = console_reload.reload(tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(true)) {
            eprintln!("console log layer reload failed: {}", e);
        }
    }

    let logs_dir = log_conf.dirs.trim();
    if !logs_dir.is_empty() {
        if std::path::Path::new(logs_dir).is_dir() {
            let prefix = format!("{}_numkit.log", app_name);
            let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(logs_dir, prefix));
            guards.push(guard);
            if let Err(e) = persist_reload.reload(tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false)) {
                eprintln!("file log layer reload failed: {}", e);
            }
        } else {
            eprintln!("log dir is not a directory, file logging disabled: {}", logs_dir);
        }
    }

    let filter = tracing_subscriber::EnvFilter::new(log_conf.level.as_str());
    let installed = tracing_subscriber::registry().with(console).with(persist).with(filter).try_init().is_ok();

    if let Ok(mut kept) = worker_guards().lock() {
        kept.extend(guards);
    }

    installed
}
