pub use xjs_errors::Diagnostic;
pub use xjs_inputs::File;
use xjs_jsx::JsxOptions;
use xjs_parse::Syntax;

/// One file to transpile, and the factory its elements are rewritten into.
#[salsa::input(debug)]
pub struct Job {
    pub file: File,
    #[returns(deref)]
    pub factory: String,
}

impl Job {
    /// A job using the default `createElement` factory.
    pub fn with_default_factory(db: &dyn salsa::Database, file: File) -> Self {
        Self::new(db, file, xjs_jsx::DEFAULT_FACTORY.to_owned())
    }
}

/// Host source for `job`, with every element rewritten into a factory call.
/// Parse errors are accumulated as [`Diagnostic`]s; statements that failed to
/// parse are left out of the output.
#[salsa::tracked(returns(ref))]
pub fn transpile(db: &dyn salsa::Database, job: Job) -> String {
    use salsa::Accumulator as _;

    let file = job.file(db);
    let _span = tracing::debug_span!("transpile", path = %file.path(db)).entered();

    let options = JsxOptions::default().factory(job.factory(db));
    let syntax = Syntax::builder().plugin(|builder| options.install(builder)).build();
    let parse = syntax.parse(file.text(db));

    tracing::debug!(
        statements = parse.program.statements.len(),
        errors = parse.diagnostics.len(),
        "parsed"
    );

    for diagnostic in parse.diagnostics {
        diagnostic.accumulate(db);
    }

    parse.program.to_string()
}

pub fn diagnostics(db: &dyn salsa::Database, job: Job) -> Vec<Diagnostic> {
    transpile::accumulated::<Diagnostic>(db, job).into_iter().cloned().collect()
}
