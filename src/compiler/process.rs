use std::{
    fmt,
    io::{self, BufRead, BufReader, Write},
    path::Path,
    process::{Command, Stdio},
    sync::Arc,
    thread,
};

use super::{CompilerSettings, PassRunner};
use crate::errors::{Result, SelfCalcError};

/// Receives each line the compiler writes to stdout.
pub type OutputSink = Arc<dyn Fn(&str) + Send + Sync>;

/// Runs the configured engine as a child process, relaying its stdout.
pub struct ProcessRunner {
    settings: CompilerSettings,
    sink: OutputSink,
}

impl ProcessRunner {
    pub fn new(settings: CompilerSettings) -> Self {
        Self {
            settings,
            sink: Arc::new(print_line),
        }
    }

    pub fn with_sink(mut self, sink: OutputSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn settings(&self) -> &CompilerSettings {
        &self.settings
    }
}

impl fmt::Debug for ProcessRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessRunner")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl PassRunner for ProcessRunner {
    fn run_pass(&mut self, pass: u32, work_dir: &Path, source: &Path) -> Result<()> {
        tracing::debug!(
            program = %self.settings.program,
            args = ?self.settings.args,
            work_dir = %work_dir.display(),
            "spawning compiler"
        );
        let mut child = Command::new(&self.settings.program)
            .args(&self.settings.args)
            .arg(source)
            .current_dir(work_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| SelfCalcError::CompilerSpawn {
                program: self.settings.program.clone(),
                source,
            })?;

        let Some(stdout) = child.stdout.take() else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(SelfCalcError::CompilerOutput {
                pass,
                source: io::Error::new(io::ErrorKind::Other, "compiler stdout was not captured"),
            });
        };

        let sink = Arc::clone(&self.sink);
        let drain = thread::spawn(move || drain_lines(BufReader::new(stdout), &*sink));
        let drained = drain.join().unwrap_or_else(|_| {
            Err(io::Error::new(
                io::ErrorKind::Other,
                "compiler output thread panicked",
            ))
        });
        if let Err(source) = drained {
            let _ = child.kill();
            let _ = child.wait();
            return Err(SelfCalcError::CompilerOutput { pass, source });
        }

        let status = child
            .wait()
            .map_err(|source| SelfCalcError::CompilerOutput { pass, source })?;
        if !status.success() {
            return Err(SelfCalcError::CompilerExit { pass, status });
        }
        Ok(())
    }
}

/// Reads `reader` to EOF, handing each line (without its terminator) to `sink`.
///
/// Engines may emit bytes that are not valid UTF-8, so lines are decoded
/// lossily instead of failing the pass.
fn drain_lines<R: BufRead>(
    mut reader: R,
    sink: &(dyn Fn(&str) + Send + Sync),
) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        let text = String::from_utf8_lossy(&buf);
        let line = text.trim_end_matches(['\n', '\r']);
        tracing::trace!(target: "selfcalc::compiler::output", "{line}");
        sink(line);
    }
}

fn print_line(line: &str) {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "{line}");
}
