use super::*;

const HELLO: &str = include_str!("../../fixtures/hello.html");

fn page(head: &str, body: &str) -> String {
    format!("<!DOCTYPE html><html><head>{head}</head><body>{body}</body></html>")
}

const MAIN: &str = r#"<main><output name="cout" class="1"></output></main>"#;

fn expected_hello() -> String {
    lines(&[
        "/**",
        "// Ada Lovelace",
        "// Reads a number and greets",
        "**/",
        "#include <iostream>",
        "#include \"greet.h\"",
        "using namespace std;",
        "namespace greet {",
        "    void hello(int n) {",
        "        for (int i = 0; i < n; i++) {",
        "            cout << \"hi\" << endl;",
        "        }",
        "    }",
        "}",
        "class Counter {",
        "    public: int count = 0;",
        "};",
        "",
        "int main() {",
        "    int n = 3;",
        "    cin >> n;",
        "    if (n > 0) {",
        "        greet::hello(n);",
        "    }",
        "    else {",
        "        cout << \"none\" << endl;",
        "    }",
        "\treturn 0;",
        "}",
    ])
}

/// Every line ending with `{` is closed by a line starting with `}` at the
/// same indentation.
fn assert_balanced(source: &str) {
    let mut open = Vec::new();
    for line in source.lines() {
        let body = line.trim_start();
        let indent = &line[..line.len() - body.len()];
        if body.starts_with('}') {
            assert_eq!(open.pop(), Some(indent), "unbalanced close: {line:?}");
        }
        if body.ends_with('{') {
            open.push(indent);
        }
    }
    assert!(open.is_empty(), "unclosed blocks: {open:?}");
}

#[test]
fn convert_fixture() {
    let source = Hcpp::new().convert_html(HELLO).unwrap();
    assert_eq!(source.target_name(), "hello.cpp");
    assert_eq!(source.text.as_str(), expected_hello());
    assert_balanced(&source.text);
}

#[test]
fn conversion_is_deterministic() {
    let first = conv(HELLO).unwrap();
    let second = conv(HELLO).unwrap();
    assert_eq!(first, second);
}

#[test]
fn preamble_omitted_without_author_and_description() {
    let html = page(
        r#"<title>t.cpp</title><link rel="system" href="vector">"#,
        MAIN,
    );
    assert_eq!(
        conv(&html).unwrap(),
        lines(&[
            "#include <vector>",
            "",
            "int main() {",
            "    cout << 1;",
            "\treturn 0;",
            "}",
        ])
    );
}

#[test]
fn preamble_with_description_only() {
    let html = page(
        r#"<title>t.cpp</title><meta name="description" content="only">"#,
        MAIN,
    );
    let text = conv(&html).unwrap();
    assert!(text.starts_with("/**\nonly\n**/\n\nint main() {\n"), "{text}");
}

#[test]
fn body_children_come_before_main() {
    let html = page(
        "<title>t.cpp</title>",
        r#"<main><var class="int" id="a">1</var></main><var class="int" id="g">2</var>"#,
    );
    assert_eq!(
        conv(&html).unwrap(),
        lines(&["int g = 2;", "", "int main() {", "    int a = 1;", "\treturn 0;", "}"])
    );
}

#[test]
fn first_main_is_the_entry() {
    let html = page(
        "<title>t.cpp</title>",
        r#"<section class="n"><main>first();</main></section><main>second();</main>"#,
    );
    assert_eq!(
        conv(&html).unwrap(),
        lines(&["namespace n {", "}", "", "int main() {", "    first();", "\treturn 0;", "}"])
    );
}

#[test]
fn missing_main_fails() {
    let html = page("<title>t.cpp</title>", "<p>nothing</p>");
    let err = conv(&html).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::MissingEntry));
}

#[test]
fn missing_title_fails() {
    let err = conv(&page("", MAIN)).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::MissingTitle));
}

#[test]
fn missing_body_fails() {
    let document = Node::Document(vec![
        Element::new("html")
            .with_child(Element::new("head").with_child(Element::new("title").with_child(Node::text("t"))))
            .into(),
    ]);
    let err = Hcpp::new().convert_document(&document).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::MissingBody));
}

#[test]
fn missing_attribute_aborts_whole_conversion() {
    let html = page(
        "<title>t.cpp</title>",
        r#"<section class="ok"></section><object data="Foo"></object>"#,
    );
    let err = conv(&html).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::MissingAttr { tag, attr: "type" } if tag == "object"
    ));
}

#[test]
fn tab_indentation() {
    let html = page(
        "<title>t.cpp</title>",
        r#"<main><div class="if" content="x">y();</div></main>"#,
    );
    let source = Hcpp::new()
        .with_feature(HcppFeat {
            indent: "\t".into(),
        })
        .convert_html(&html)
        .unwrap();
    assert_eq!(
        source.text.as_str(),
        "\nint main() {\n\tif (x) {\n\t\ty();\n\t}\n\treturn 0;\n}\n"
    );
}

#[test]
fn write_to_uses_title_as_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let source = Hcpp::new().convert_html(HELLO).unwrap();
    let path = source.write_to(dir.path()).unwrap();
    assert_eq!(path, dir.path().join("hello.cpp"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), expected_hello());
}

#[test]
fn convert_file_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("hello.html");
    std::fs::write(&input, HELLO).unwrap();
    let source = Hcpp::new().convert_file(&input).unwrap();
    assert_eq!(source.text.as_str(), expected_hello());

    let err = Hcpp::new()
        .convert_file(&dir.path().join("absent.html"))
        .unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Io(_)));
}
