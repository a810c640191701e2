//! JSON emission for parsed TOML documents.

#[cfg(test)]
#[path = "./json_tests.rs"]
mod tests;

use crate::array::Array;
use crate::table::Table;
use crate::value::Value;
use std::fmt::Write as _;

/// Serializes a document tree to JSON.
///
/// `indent` is the initial indentation level; each level is two spaces.
/// `strict` controls float special values: when `true`, infinities and NaN
/// are emitted as the quoted strings `"Infinity"`, `"-Infinity"`, and
/// `"NaN"` so the output stays well-formed JSON; when `false` the same
/// tokens are emitted bare.
///
/// Table entries are emitted in lexicographic key order. Keys and string
/// bodies are escaped; every other scalar maps to its literal JSON form,
/// with [`DescribedFloat`](crate::DescribedFloat) values reproducing their
/// original notation verbatim.
pub fn to_json(document: &Table, indent: usize, strict: bool) -> String {
    let mut out = String::with_capacity(256);
    write_table(&mut out, document, indent, strict);
    out
}

fn write_table(out: &mut String, table: &Table, indent: usize, strict: bool) {
    out.push('{');
    let mut joiner = "\n";
    for (key, value) in table {
        out.push_str(joiner);
        push_indent(out, indent + 1);
        out.push('"');
        escape_into(out, key);
        out.push_str("\": ");
        write_value(out, value, indent, strict);
        joiner = ",\n";
    }
    out.push('\n');
    push_indent(out, indent);
    out.push('}');
}

fn write_array(out: &mut String, array: &Array, indent: usize, strict: bool) {
    out.push('[');
    let mut joiner = "\n";
    for value in array {
        out.push_str(joiner);
        push_indent(out, indent + 1);
        write_value(out, value, indent, strict);
        joiner = ",\n";
    }
    out.push('\n');
    push_indent(out, indent);
    out.push(']');
}

fn write_value(out: &mut String, value: &Value, indent: usize, strict: bool) {
    match value {
        Value::Table(t) => write_table(out, t, indent + 1, strict),
        Value::Array(a) => write_array(out, a, indent + 1, strict),
        Value::String(s) => {
            out.push('"');
            escape_into(out, s);
            out.push('"');
        }
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Integer(i) => {
            let _ = write!(out, "{i}");
        }
        Value::Float(f) => write_float(out, *f, strict),
        Value::DescribedFloat(d) => out.push_str(&d.description),
        Value::DateTime(dt) => {
            out.push('"');
            out.push_str(&dt.text);
            out.push('"');
        }
    }
}

fn write_float(out: &mut String, f: f64, strict: bool) {
    if f.is_infinite() {
        let token = if f < 0.0 { "-Infinity" } else { "Infinity" };
        if strict {
            out.push('"');
            out.push_str(token);
            out.push('"');
        } else {
            out.push_str(token);
        }
    } else if f.is_nan() {
        out.push_str(if strict { "\"NaN\"" } else { "NaN" });
    } else {
        // max_digits10 worth of precision in scientific notation
        let _ = write!(out, "{f:.17e}");
    }
}

fn push_indent(out: &mut String, levels: usize) {
    for _ in 0..levels {
        out.push_str("  ");
    }
}

/// Escapes a string for inclusion in a JSON string literal.
fn escape_into(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
}
