mod logging;

use std::io::IsTerminal as _;
use std::process::ExitCode;

use anyhow::Context as _;
use camino::Utf8PathBuf;
use clap::Parser;
use salsa::DatabaseImpl;
use xjs_db::{Job, diagnostics, transpile};
use xjs_errors::Renderer;
use xjs_inputs::File;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Rewrites tag syntax in host source files into factory calls.
#[derive(Parser)]
enum Options {
    /// Transpile a file and print the result.
    Run {
        path: Utf8PathBuf,
        /// Callee emitted for every element.
        #[arg(long, default_value = xjs_jsx::DEFAULT_FACTORY)]
        factory: String,
        /// Write the output here instead of stdout.
        #[arg(long)]
        out: Option<Utf8PathBuf>,
    },
    /// Only report diagnostics.
    Check { path: Utf8PathBuf },
}

fn main() -> anyhow::Result<ExitCode> {
    logging::init();

    let db = DatabaseImpl::default();

    match Options::parse() {
        Options::Run { path, factory, out } => {
            let job = load(&db, path, factory)?;
            let output = transpile(&db, job);

            match out {
                Some(out) => std::fs::write(&out, format!("{output}\n"))
                    .with_context(|| format!("failed to write `{out}`"))?,
                None => println!("{output}"),
            }

            Ok(report(&db, job))
        }
        Options::Check { path } => {
            let job = load(&db, path, xjs_jsx::DEFAULT_FACTORY.to_owned())?;
            Ok(report(&db, job))
        }
    }
}

fn load(db: &DatabaseImpl, path: Utf8PathBuf, factory: String) -> anyhow::Result<Job> {
    let text =
        std::fs::read_to_string(&path).with_context(|| format!("failed to read `{path}`"))?;
    tracing::debug!(%path, bytes = text.len(), %factory, "loaded");

    let file = File::new(db, path, text);
    Ok(Job::new(db, file, factory))
}

/// Prints every diagnostic of `job` to stderr.
fn report(db: &DatabaseImpl, job: Job) -> ExitCode {
    let diagnostics = diagnostics(db, job);
    if diagnostics.is_empty() {
        return ExitCode::SUCCESS;
    }

    let renderer =
        if std::io::stderr().is_terminal() { Renderer::styled() } else { Renderer::plain() };

    let file = job.file(db);
    let path = file.path(db).as_str();
    let text = file.text(db);

    for diagnostic in &diagnostics {
        eprintln!("{}", diagnostic.render(&renderer, path, text));
    }

    let (line, column) = file.location(db, diagnostics[0].range().start());
    tracing::info!(count = diagnostics.len(), line, column, "first error");

    ExitCode::FAILURE
}
