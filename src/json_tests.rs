use crate::to_json;

fn parse(input: &str) -> crate::Table {
    crate::parse(input).unwrap_or_else(|e| panic!("parse failed for {input:?}: {e}"))
}

#[test]
fn dotted_keys_build_nested_objects() {
    let doc = parse("a.b.c = 1\n");
    assert_eq!(
        to_json(&doc, 0, true),
        "{\n  \"a\": {\n    \"b\": {\n      \"c\": 1\n    }\n  }\n}"
    );
}

#[test]
fn array_of_tables_layout() {
    let doc = parse("[[products]]\nname = \"A\"\n[[products]]\nname = \"B\"\n");
    let expected = "\
{
  \"products\": [
    {
      \"name\": \"A\"
    },
    {
      \"name\": \"B\"
    }
  ]
}";
    assert_eq!(to_json(&doc, 0, true), expected);
}

#[test]
fn empty_containers_span_two_lines() {
    let doc = parse("");
    assert_eq!(to_json(&doc, 0, true), "{\n}");

    let doc = parse("a = []\n");
    assert_eq!(to_json(&doc, 0, true), "{\n  \"a\": [\n  ]\n}");

    let doc = parse("a = {}\n");
    assert_eq!(to_json(&doc, 0, true), "{\n  \"a\": {\n  }\n}");
}

#[test]
fn initial_indent_level() {
    let doc = parse("a = 1");
    assert_eq!(to_json(&doc, 0, true), "{\n  \"a\": 1\n}");
    assert_eq!(to_json(&doc, 1, true), "{\n    \"a\": 1\n  }");
}

#[test]
fn float_specials_strict_and_relaxed() {
    let doc = parse("x = inf\ny = nan\nz = -inf\n");

    let strict = to_json(&doc, 0, true);
    assert_eq!(
        strict,
        "{\n  \"x\": \"Infinity\",\n  \"y\": \"NaN\",\n  \"z\": \"-Infinity\"\n}"
    );

    let relaxed = to_json(&doc, 0, false);
    assert_eq!(
        relaxed,
        "{\n  \"x\": Infinity,\n  \"y\": NaN,\n  \"z\": -Infinity\n}"
    );
}

#[test]
fn described_floats_emit_verbatim() {
    let doc = parse("a = 1e3\nb = 1.5E-3\nc = +0.5\nd = 1_0.5\n");
    let json = to_json(&doc, 0, true);
    assert!(json.contains("\"a\": 1e3"));
    assert!(json.contains("\"b\": 1.5E-3"));
    assert!(json.contains("\"c\": 0.5"));
    assert!(json.contains("\"d\": 10.5"));
}

#[test]
fn multiline_string_trimming() {
    let doc = parse("s = \"\"\"\nhello\nworld\"\"\"\n");
    assert_eq!(to_json(&doc, 0, true), "{\n  \"s\": \"hello\\nworld\"\n}");
}

#[test]
fn strings_and_keys_are_escaped() {
    let doc = parse("s = \"tab\\there\"\n'we\"ird' = 1\nw = 'back\\slash'\n");
    let json = to_json(&doc, 0, true);
    assert!(json.contains("\"s\": \"tab\\there\""));
    assert!(json.contains("\"we\\\"ird\": 1"));
    assert!(json.contains("\"w\": \"back\\\\slash\""));

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["we\"ird"], 1);
    assert_eq!(parsed["w"], "back\\slash");
}

#[test]
fn scalar_forms() {
    let doc = parse(
        "s = \"text\"\ni = -42\nb = true\nd = 1979-05-27T07:32:00Z\nf = 2.5\n",
    );
    let json = to_json(&doc, 0, true);
    assert!(json.contains("\"s\": \"text\""));
    assert!(json.contains("\"i\": -42"));
    assert!(json.contains("\"b\": true"));
    assert!(json.contains("\"d\": \"1979-05-27T07:32:00Z\""));
    assert!(json.contains("\"f\": 2.5"));
}

#[test]
fn entries_sorted_lexicographically() {
    let doc = parse("zeta = 1\nalpha = 2\n[mid]\nx = 1\n");
    let json = to_json(&doc, 0, true);
    let alpha = json.find("\"alpha\"").unwrap();
    let mid = json.find("\"mid\"").unwrap();
    let zeta = json.find("\"zeta\"").unwrap();
    assert!(alpha < mid && mid < zeta);
}

#[test]
fn strict_output_is_well_formed_json() {
    let input = r#"
title = "Example"
pi = 3.14
count = 0x10
flag = false
when = 1979-05-27 07:32:00
empty = []
nested = [[1, 2], [3]]
inline = {x = 1, y.z = "deep"}
"multi\nline" = '''
raw '' body'''

[server]
host = "127.0.0.1"
ports = [80, 443]

[[jobs]]
name = "first"
[[jobs]]
name = "second"
[jobs.opts]
retry = true
"#;
    let doc = parse(input);
    let json = to_json(&doc, 0, true);
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed["title"], "Example");
    assert_eq!(parsed["count"], 16);
    assert_eq!(parsed["pi"], 3.14);
    assert_eq!(parsed["when"], "1979-05-27 07:32:00");
    assert_eq!(parsed["inline"]["y"]["z"], "deep");
    assert_eq!(parsed["multi\nline"], "raw '' body");
    assert_eq!(parsed["server"]["ports"][1], 443);
    assert_eq!(parsed["jobs"][1]["name"], "second");
    assert_eq!(parsed["jobs"][1]["opts"]["retry"], true);
}

#[test]
fn control_characters_escape_as_hex() {
    let doc = parse(r#"s = "bell\u0007""#);
    let json = to_json(&doc, 0, true);
    assert!(json.contains("\\u0007"));
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["s"], "bell\u{7}");
}
