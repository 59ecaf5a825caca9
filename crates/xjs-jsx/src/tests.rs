use std::fs;
use std::path::{Path, PathBuf};

use expect_test::{expect, expect_file};
use xjs_parse::ast::{BooleanLiteral, StringLiteral};
use xjs_parse::{Parse, Syntax, TextRange};
use xjs_tokenizer::SyntaxKind::*;

use crate::ast::{AttrValue, Attribute, Element, Node, Text};
use crate::error::JsxError;
use crate::{JsxOptions, grammar};

fn syntax() -> Syntax {
    Syntax::builder().plugin(crate::plugin).build()
}

fn render(parse: &Parse) -> String {
    let diagnostics =
        parse.diagnostics.iter().map(|d| format!("  {}\n", d.message())).collect::<String>();
    format!("{}\nErrors:\n{diagnostics}", parse.program)
}

struct TestCase {
    input: PathBuf,
    expected: PathBuf,
}

fn test_cases() -> Vec<TestCase> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data");
    let mut cases = fs::read_dir(&dir)
        .unwrap_or_else(|err| panic!("Cannot read directory {}: {err}", dir.display()))
        .filter_map(|entry| {
            let input = entry.ok()?.path();
            (input.extension()? == "xjs")
                .then(|| TestCase { expected: input.with_extension("js"), input })
        })
        .collect::<Vec<_>>();

    cases.sort_by(|a, b| a.input.cmp(&b.input));
    cases
}

#[test]
fn transpile() {
    let cases = test_cases();
    assert!(!cases.is_empty(), "no test data found");

    let syntax = syntax();
    for case in cases {
        let text = fs::read_to_string(&case.input).unwrap();
        let parse = syntax.parse(&text);
        expect_file![&case.expected].assert_eq(&render(&parse));
    }
}

fn parse_element(text: &str) -> (Result<Element, JsxError>, Vec<String>) {
    let syntax = Syntax::default();
    let mut p = syntax.parser(text);
    let element = grammar::element(&mut p);
    let messages = p.finish().iter().map(|d| d.message().to_owned()).collect();
    (element, messages)
}

#[test]
fn guard_needs_identifier_after_less_than() {
    let syntax = Syntax::default();

    for (text, expected) in [("<div>", true), ("< 5", false), ("</div>", false), ("div", false)]
    {
        let p = syntax.parser(text);
        assert_eq!(grammar::at_element_start(&p), expected, "{text:?}");
    }
}

#[test]
fn declined_position_is_left_for_the_host() {
    let syntax = syntax();
    let parse = syntax.parse("x = < 5");

    let [diagnostic] = parse.diagnostics.as_slice() else {
        panic!("expected one diagnostic, got {:?}", parse.diagnostics);
    };
    assert_eq!(diagnostic.message(), "expected expression");
    assert_eq!(diagnostic.range(), TextRange::new(4.into(), 5.into()));
}

#[test]
fn element_tree_keeps_source_order() {
    let (element, messages) = parse_element(r#"<a x="1" flag x="2">hi<b/>there</a>"#);
    assert!(messages.is_empty(), "{messages:?}");

    let string = |value: &str| AttrValue::String(StringLiteral::new(value));
    assert_eq!(
        element,
        Ok(Element {
            tag_name: "a".to_owned(),
            attributes: vec![
                Attribute { name: "x".to_owned(), value: string("1") },
                Attribute {
                    name: "flag".to_owned(),
                    value: AttrValue::Boolean(BooleanLiteral::TRUE),
                },
                Attribute { name: "x".to_owned(), value: string("2") },
            ],
            children: vec![
                Node::Text(Text { value: "hi".to_owned() }),
                Node::Element(Element {
                    tag_name: "b".to_owned(),
                    attributes: Vec::new(),
                    children: Vec::new(),
                    self_closing: true,
                }),
                Node::Text(Text { value: "there".to_owned() }),
            ],
            self_closing: false,
        })
    );
}

#[test]
fn parser_stops_after_closing_tag() {
    let syntax = Syntax::default();
    let mut p = syntax.parser("<a></a> + 1");

    assert!(grammar::element(&mut p).is_ok());
    assert!(p.at(PLUS));
}

#[test]
fn missing_bracket_is_reported_at_offending_token() {
    let syntax = Syntax::default();
    let mut p = syntax.parser("<div ;");

    assert_eq!(grammar::element(&mut p), Err(JsxError::MissingClosingBracket));
    let diagnostics = p.finish();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message(), "expected '>' after tag name");
    assert_eq!(diagnostics[0].range(), TextRange::new(5.into(), 6.into()));
}

#[test]
fn closing_tag_without_bracket_is_malformed() {
    let (element, messages) = parse_element("<a>x</a");
    assert_eq!(element, Err(JsxError::MalformedClosingTag));
    assert_eq!(messages, ["malformed closing tag"]);
}

#[test]
fn nested_failure_is_reported_once() {
    let (element, messages) = parse_element("<a><b><c>deep</b></a>");
    assert_eq!(element, Err(JsxError::MalformedClosingTag));
    assert_eq!(messages, ["malformed closing tag"]);
}

#[test]
fn unterminated_element_points_at_its_opening_tag() {
    let syntax = Syntax::default();
    let mut p = syntax.parser("  <main>text");

    assert_eq!(
        grammar::element(&mut p),
        Err(JsxError::UnterminatedElement { tag: "main".to_owned() })
    );
    let diagnostics = p.finish();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message(), "unterminated element `<main>`");
    assert_eq!(diagnostics[0].range(), TextRange::new(2.into(), 3.into()));
}

fn nested(depth: usize) -> String {
    format!("{}x{}", "<a>".repeat(depth), "</a>".repeat(depth))
}

#[test]
fn nesting_up_to_the_limit_parses() {
    let (element, messages) = parse_element(&nested(grammar::MAX_NESTING));
    assert!(messages.is_empty(), "{messages:?}");
    assert!(element.is_ok());
}

#[test]
fn nesting_past_the_limit_is_an_error() {
    let (element, messages) = parse_element(&nested(grammar::MAX_NESTING + 1));
    assert_eq!(element, Err(JsxError::NestingTooDeep));
    assert_eq!(messages, ["elements nested too deeply"]);
}

#[test]
fn very_deep_markup_reports_instead_of_overflowing() {
    let text = format!("let x = {}", nested(8000));
    let parse = syntax().parse(&text);

    let messages = parse.diagnostics.iter().map(|d| d.message()).collect::<Vec<_>>();
    assert_eq!(messages, ["elements nested too deeply"]);
    assert!(parse.program.statements.is_empty());
}

#[test]
fn apostrophe_and_line_comment_swallow_the_closing_tag() {
    for text in ["<p>don't</p>", "<p>see http://x</p>"] {
        let (element, messages) = parse_element(text);
        assert_eq!(element, Err(JsxError::UnterminatedElement { tag: "p".to_owned() }), "{text}");
        assert_eq!(messages, ["unterminated element `<p>`"], "{text}");
    }
}

#[test]
fn rendering_is_deterministic() {
    let syntax = syntax();
    let text = r#"let v = <ul class="x"><li>a</li><li disabled>b</li></ul>"#;

    let first = syntax.parse(text).program.to_string();
    let second = syntax.parse(text).program.to_string();
    assert_eq!(first, second);
}

#[test]
fn custom_factory() {
    let options = JsxOptions::default().factory("React.createElement");
    let syntax = Syntax::builder().plugin(|builder| options.install(builder)).build();

    let parse = syntax.parse("let el = <p id=\"a\"><br/></p>");
    assert!(!parse.has_errors());
    expect![[r#"let el = React.createElement("p", {"id": "a"}, React.createElement("br", null))"#]]
        .assert_eq(&parse.program.to_string());
}

#[test]
fn bare_handler_uses_default_factory() {
    let syntax = Syntax::builder().expression_handler(crate::parse_jsx_expression).build();
    let parse = syntax.parse("f(<i/>)");
    assert_eq!(parse.program.to_string(), r#"f(createElement("i", null))"#);
}

#[test]
fn emit_text_escapes_only_quotes() {
    let text = Text { value: r#"a "b" \n c"#.to_owned() };
    expect![[r#""a \"b\" \n c""#]].assert_eq(&text.to_string());
}

#[test]
fn emit_element_shapes() {
    let leaf = |tag: &str| Element {
        tag_name: tag.to_owned(),
        attributes: Vec::new(),
        children: Vec::new(),
        self_closing: false,
    };

    expect![[r#"createElement("T", null)"#]].assert_eq(&leaf("T").to_string());

    let mut element = leaf("A");
    element.children.push(Node::Element(leaf("B")));
    element.children.push(Node::Text(Text { value: "x".to_owned() }));
    element.attributes.push(Attribute {
        name: "on".to_owned(),
        value: AttrValue::Boolean(BooleanLiteral::TRUE),
    });
    expect![[r#"h("A", {"on": true}, h("B", null), "x")"#]]
        .assert_eq(&element.render("h").to_string());
}
