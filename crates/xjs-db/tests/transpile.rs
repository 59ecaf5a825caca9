use salsa::{Database, DatabaseImpl, Setter as _};
use xjs_db::{Diagnostic, File, Job, diagnostics, transpile};

#[derive(Debug, PartialEq, Eq)]
struct ExpectedDiag {
    line: u32,
    message: String,
}

fn parse_expectations(fixture: &str) -> Vec<ExpectedDiag> {
    fixture
        .lines()
        .zip(1..)
        .filter_map(|(line, number)| {
            let (_, comment) = line.split_once("//~")?;
            let message = comment.trim().strip_prefix("ERROR")?.trim();
            Some(ExpectedDiag { line: number, message: message.to_owned() })
        })
        .collect()
}

fn actual_lines(db: &dyn Database, file: File, diagnostics: &[Diagnostic]) -> Vec<ExpectedDiag> {
    diagnostics
        .iter()
        .map(|diag| {
            let (line, _) = file.location(db, diag.range().start());
            ExpectedDiag { line, message: diag.message().to_owned() }
        })
        .collect()
}

/// Transpiles `fixture` and checks its diagnostics against the `//~ ERROR`
/// annotations, in order.
#[track_caller]
fn check(fixture: &str) -> String {
    let db = DatabaseImpl::default();
    let file = File::new(&db, "fixture.xjs".into(), fixture.to_owned());
    let job = Job::with_default_factory(&db, file);

    let output = transpile(&db, job).clone();
    let actual = actual_lines(&db, file, &diagnostics(&db, job));
    assert_eq!(actual, parse_expectations(fixture));

    output
}

#[test]
fn clean_file_has_no_diagnostics() {
    let output = check(
        r#"
let title = "Home"
let page = <main id="root"><h1>Welcome</h1><br/></main>
render(page, document)
"#,
    );

    assert_eq!(
        output,
        "let title = \"Home\"\n\
         let page = createElement(\"main\", {\"id\": \"root\"}, createElement(\"h1\", null, \"Welcome\"), createElement(\"br\", null))\n\
         render(page, document)"
    );
}

#[test]
fn mismatched_closing_tag() {
    check(
        r#"
let a = <div>text</span> //~ ERROR malformed closing tag
let b = 1
"#,
    );
}

#[test]
fn missing_bracket_after_tag_name() {
    check(
        r#"
let a = <img src="a.png" ; //~ ERROR expected '>' after tag name
"#,
    );
}

#[test]
fn unterminated_element() {
    check(
        r#"
let ok = <p>fine</p>
let a = <div> //~ ERROR unterminated element `<div>`
  <span>never closed</span>
"#,
    );
}

#[test]
fn comparisons_stay_host_syntax() {
    let output = check(
        r#"
let small = size < 10
let odd = < 3 //~ ERROR expected expression
"#,
    );

    assert_eq!(output, "let small = size < 10");
}

#[test]
fn factory_change_reruns_transpile() {
    let mut db = DatabaseImpl::default();
    let file = File::new(&db, "app.xjs".into(), "let a = <br/>".to_owned());
    let job = Job::with_default_factory(&db, file);

    assert_eq!(transpile(&db, job), r#"let a = createElement("br", null)"#);

    job.set_factory(&mut db).to("h".to_owned());
    assert_eq!(transpile(&db, job), r#"let a = h("br", null)"#);
}

#[test]
fn text_edit_updates_diagnostics() {
    let mut db = DatabaseImpl::default();
    let file = File::new(&db, "app.xjs".into(), "let a = <b>x</i>".to_owned());
    let job = Job::with_default_factory(&db, file);

    assert_eq!(diagnostics(&db, job).len(), 1);

    file.set_text(&mut db).to("let a = <b>x</b>".to_owned());
    assert!(diagnostics(&db, job).is_empty());
    assert_eq!(transpile(&db, job), r#"let a = createElement("b", null, "x")"#);
}
