//! The TOML parser: scanner, key parser, value parser, and table assembler.

#[cfg(test)]
#[path = "./parser_tests.rs"]
mod tests;

use crate::array::Array;
use crate::error::{Error, ErrorKind};
use crate::table::Table;
use crate::time::{self, DateTime};
use crate::value::{DescribedFloat, Value};
use crate::Span;

const MAX_RECURSION_DEPTH: i16 = 256;

const fn build_hex_table() -> [i8; 256] {
    let mut table = [-1i8; 256];
    let mut ch = 0usize;
    while ch < 256 {
        table[ch] = match ch as u8 {
            b'0'..=b'9' => (ch as u8 - b'0') as i8,
            b'A'..=b'F' => (ch as u8 - b'A' + 10) as i8,
            b'a'..=b'f' => (ch as u8 - b'a' + 10) as i8,
            _ => -1,
        };
        ch += 1;
    }
    table
}

static HEX: [i8; 256] = build_hex_table();

/// Parses a TOML string into a [`Table`].
///
/// The returned table owns all of its descendants; on error no partial tree
/// is exposed. Table iteration order is lexicographic by key, which is also
/// the order [`to_json`](crate::to_json) emits entries in.
pub fn parse(s: &str) -> Result<Table, Error> {
    // Spans are byte offsets stored as u32.
    if s.len() > u32::MAX as usize {
        return Err(Error {
            kind: ErrorKind::FileTooLarge,
            span: Span::new(0, 0),
        });
    }

    let mut root = Table::new();
    let mut parser = Parser::new(s);
    parser.parse_document(&mut root)?;
    finalize_tables(&mut root);
    Ok(root)
}

/// Strips the array accumulator markers left behind by `[[header]]` lines.
/// After this pass no array anywhere in the tree reports itself appendable.
fn finalize_tables(table: &mut Table) {
    for value in table.values_mut() {
        match value {
            Value::Table(t) => finalize_tables(t),
            Value::Array(a) => finalize_arrays(a),
            _ => {}
        }
    }
}

fn finalize_arrays(array: &mut Array) {
    array.finalize();
    for value in array.as_mut_slice() {
        match value {
            Value::Table(t) => finalize_tables(t),
            Value::Array(a) => finalize_arrays(a),
            _ => {}
        }
    }
}

struct Parser<'de> {
    input: &'de str,
    /// Raw bytes of the input. Always valid UTF-8 (derived from `&str`).
    bytes: &'de [u8],
    cursor: usize,
}

impl<'de> Parser<'de> {
    fn new(input: &'de str) -> Self {
        let bytes = input.as_bytes();
        // Skip UTF-8 BOM (U+FEFF = EF BB BF) if present at the start.
        let cursor = if bytes.starts_with(b"\xef\xbb\xbf") {
            3
        } else {
            0
        };
        Parser {
            input,
            bytes,
            cursor,
        }
    }

    #[cold]
    fn error(&self, start: usize, kind: ErrorKind) -> Error {
        self.error_span(start, self.cursor, kind)
    }

    #[cold]
    fn error_span(&self, start: usize, end: usize, kind: ErrorKind) -> Error {
        let len = self.bytes.len();
        let start = start.min(len);
        let end = end.max(start + 1).min(len).max(start);
        Error {
            kind,
            span: Span::new(start as u32, end as u32),
        }
    }

    #[inline]
    fn peek_byte(&self) -> Option<u8> {
        self.bytes.get(self.cursor).copied()
    }

    #[inline]
    fn peek_byte_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.cursor + offset).copied()
    }

    #[inline]
    fn eat_byte(&mut self, b: u8) -> bool {
        if self.peek_byte() == Some(b) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Advances over tabs, spaces, newlines, and CRLF pairs. A lone CR is
    /// left unconsumed unless it ends the input.
    fn skip_ws(&mut self) {
        while let Some(b) = self.peek_byte() {
            match b {
                b' ' | b'\t' | b'\n' => self.cursor += 1,
                b'\r' if self.peek_byte_at(1) == Some(b'\n') => self.cursor += 2,
                b'\r' if self.peek_byte_at(1).is_none() => self.cursor += 1,
                _ => break,
            }
        }
    }

    /// Advances over tabs and spaces only; newlines stop it.
    fn skip_ws_inline(&mut self) {
        while let Some(b' ' | b'\t') = self.peek_byte() {
            self.cursor += 1;
        }
    }

    /// Advances until (but not past) the next LF or CR.
    fn skip_to_newline(&mut self) {
        while let Some(b) = self.peek_byte() {
            if b == b'\n' || b == b'\r' {
                break;
            }
            self.cursor += 1;
        }
    }

    fn read_keylike(&mut self) -> &'de str {
        let start = self.cursor;
        while let Some(b) = self.peek_byte() {
            if !is_keylike_byte(b) {
                break;
            }
            self.cursor += 1;
        }
        &self.input[start..self.cursor]
    }

    fn parse_document(&mut self, root: &mut Table) -> Result<(), Error> {
        self.read_table_body(root)?;
        while self.peek_byte().is_some() {
            let target = self.process_header(root)?;
            self.read_table_body(target)?;
        }
        Ok(())
    }

    /// Consumes key-value lines and comments into `table` until the next
    /// table header or the end of input.
    fn read_table_body(&mut self, table: &mut Table) -> Result<(), Error> {
        loop {
            self.skip_ws();
            match self.peek_byte() {
                None => return Ok(()),
                Some(b'#') => self.skip_to_newline(),
                Some(b'[') => return Ok(()),
                Some(_) => self.key_value_line(table)?,
            }
        }
    }

    /// Parses a `[keys]` or `[[keys]]` header line and returns the table
    /// that subsequent key-value lines should be inserted into.
    fn process_header<'t>(&mut self, root: &'t mut Table) -> Result<&'t mut Table, Error> {
        let header_start = self.cursor;
        self.cursor += 1;
        let is_array = self.eat_byte(b'[');

        self.skip_ws_inline();
        let keys = self.parse_keys()?;
        if !self.eat_byte(b']') {
            return Err(self.error(header_start, ErrorKind::IllFormedToml));
        }
        if is_array && !self.eat_byte(b']') {
            return Err(self.error(header_start, ErrorKind::IllFormedToml));
        }

        // parse_keys always yields at least one segment
        let (leaf, path) = keys.split_last().unwrap();
        let parent = self.navigate(root, path, header_start)?;
        if is_array {
            self.open_array_entry(parent, leaf, header_start)
        } else {
            self.open_table(parent, leaf, header_start)
        }
    }

    /// Parses one `keys = value` line into `table`.
    fn key_value_line(&mut self, table: &mut Table) -> Result<(), Error> {
        let at = self.cursor;
        match self.peek_byte() {
            Some(b'"' | b'\'') => {}
            Some(b) if is_keylike_byte(b) => {}
            _ => return Err(self.error(at, ErrorKind::IllFormedToml)),
        }
        let keys = self.parse_keys()?;
        if !self.eat_byte(b'=') {
            return Err(self.error(at, ErrorKind::IllFormedToml));
        }
        self.skip_ws_inline();
        let value = self.value(MAX_RECURSION_DEPTH)?;
        self.insert_leaf(table, &keys, value, at)
    }

    /// Parses a dotted key sequence, consuming trailing inline whitespace.
    fn parse_keys(&mut self) -> Result<Vec<String>, Error> {
        let mut keys = Vec::new();
        loop {
            keys.push(self.key_segment()?);
            self.skip_ws_inline();
            if !self.eat_byte(b'.') {
                return Ok(keys);
            }
            self.skip_ws_inline();
        }
    }

    /// Parses one key segment: bare, basic-quoted, or literal-quoted.
    fn key_segment(&mut self) -> Result<String, Error> {
        let start = self.cursor;
        match self.peek_byte() {
            Some(b'"') => {
                self.cursor += 1;
                let key = self.read_basic_string(false, ErrorKind::IllFormedKeys)?;
                if key.is_empty() {
                    return Err(self.error(start, ErrorKind::IllFormedKeys));
                }
                Ok(key)
            }
            Some(b'\'') => {
                self.cursor += 1;
                let key = self.read_literal_string(false, ErrorKind::IllFormedKeys)?;
                if key.is_empty() {
                    return Err(self.error(start, ErrorKind::IllFormedKeys));
                }
                Ok(key)
            }
            Some(b) if is_keylike_byte(b) => Ok(self.read_keylike().to_string()),
            _ => Err(self.error(start, ErrorKind::IllFormedKeys)),
        }
    }

    /// Walks the intermediate segments of a dotted key path, creating empty
    /// tables as needed, and returns the table the leaf belongs in.
    ///
    /// An existing child must be a table (descended into directly) or an
    /// array whose last element is a table (the array-of-tables case); any
    /// other child is an invalid-key error, as is a sealed inline table.
    fn navigate<'t>(
        &self,
        mut table: &'t mut Table,
        path: &[String],
        at: usize,
    ) -> Result<&'t mut Table, Error> {
        for seg in path {
            let current: &'t mut Table = table;
            table = match current.find_index(seg) {
                Some(idx) => match current.value_at_mut(idx) {
                    Value::Table(t) if !t.is_sealed() => t,
                    Value::Array(a) => match a.last_mut() {
                        Some(Value::Table(t)) if !t.is_sealed() => t,
                        _ => {
                            return Err(
                                self.error(at, ErrorKind::InvalidKey { key: seg.clone() })
                            );
                        }
                    },
                    _ => {
                        return Err(self.error(at, ErrorKind::InvalidKey { key: seg.clone() }));
                    }
                },
                None => {
                    // find_index returned None, so the insert cannot collide
                    let idx = current
                        .insert_unique(seg.clone(), Value::Table(Table::new()))
                        .unwrap();
                    match current.value_at_mut(idx) {
                        Value::Table(t) => t,
                        _ => unreachable!(),
                    }
                }
            };
        }
        Ok(table)
    }

    /// Navigates a dotted key path and stores `value` at the leaf, which
    /// must not already exist.
    fn insert_leaf(
        &self,
        table: &mut Table,
        keys: &[String],
        value: Value,
        at: usize,
    ) -> Result<(), Error> {
        // parse_keys always yields at least one segment
        let (leaf, path) = keys.split_last().unwrap();
        let target = self.navigate(table, path, at)?;
        match target.insert_unique(leaf.clone(), value) {
            Ok(_) => Ok(()),
            Err(_) => Err(self.error(at, ErrorKind::DuplicateKey { key: leaf.clone() })),
        }
    }

    /// Handles the final segment of a `[keys]` header: the leaf must not
    /// already exist.
    fn open_table<'t>(
        &self,
        parent: &'t mut Table,
        leaf: &str,
        at: usize,
    ) -> Result<&'t mut Table, Error> {
        match parent.insert_unique(leaf.to_string(), Value::Table(Table::new())) {
            Ok(idx) => match parent.value_at_mut(idx) {
                Value::Table(t) => Ok(t),
                _ => unreachable!(),
            },
            Err(_) => Err(self.error(
                at,
                ErrorKind::DuplicateKey {
                    key: leaf.to_string(),
                },
            )),
        }
    }

    /// Handles the final segment of a `[[keys]]` header: creates or extends
    /// the array-of-tables accumulator and returns its fresh last entry.
    fn open_array_entry<'t>(
        &self,
        parent: &'t mut Table,
        leaf: &str,
        at: usize,
    ) -> Result<&'t mut Table, Error> {
        let idx = match parent.find_index(leaf) {
            Some(idx) => idx,
            // The key is absent, so the insert cannot collide
            None => parent
                .insert_unique(leaf.to_string(), Value::Array(Array::accumulator()))
                .unwrap(),
        };
        match parent.value_at_mut(idx) {
            Value::Array(arr) => {
                if !arr.is_appendable() {
                    return Err(self.error(
                        at,
                        ErrorKind::StaticArrayNotAppendable {
                            key: leaf.to_string(),
                        },
                    ));
                }
                arr.push(Value::Table(Table::new()));
                match arr.last_mut() {
                    Some(Value::Table(t)) => Ok(t),
                    _ => unreachable!(),
                }
            }
            _ => Err(self.error(
                at,
                ErrorKind::InvalidKey {
                    key: leaf.to_string(),
                },
            )),
        }
    }

    /// Parses the next value token, dispatched by its first byte.
    fn value(&mut self, depth_remaining: i16) -> Result<Value, Error> {
        let at = self.cursor;
        let Some(byte) = self.peek_byte() else {
            return Err(self.error(at, ErrorKind::UnexpectedEof));
        };
        match byte {
            b'[' => {
                self.cursor += 1;
                let arr = self.array_contents(at, depth_remaining - 1)?;
                Ok(Value::Array(arr))
            }
            b'{' => {
                self.cursor += 1;
                let table = self.inline_table_contents(at, depth_remaining - 1)?;
                Ok(Value::Table(table))
            }
            b'"' => {
                if self.peek_byte_at(1) == Some(b'"') && self.peek_byte_at(2) == Some(b'"') {
                    self.cursor += 3;
                    let s = self.read_basic_string(
                        true,
                        ErrorKind::IllFormedValue("multi-line basic strings"),
                    )?;
                    Ok(Value::String(s))
                } else {
                    self.cursor += 1;
                    let s =
                        self.read_basic_string(false, ErrorKind::IllFormedValue("basic strings"))?;
                    Ok(Value::String(s))
                }
            }
            b'\'' => {
                if self.peek_byte_at(1) == Some(b'\'') && self.peek_byte_at(2) == Some(b'\'') {
                    self.cursor += 3;
                    let s = self.read_literal_string(
                        true,
                        ErrorKind::IllFormedValue("multi-line literal strings"),
                    )?;
                    Ok(Value::String(s))
                } else {
                    self.cursor += 1;
                    let s = self
                        .read_literal_string(false, ErrorKind::IllFormedValue("literal strings"))?;
                    Ok(Value::String(s))
                }
            }
            _ => self.scalar(at),
        }
    }

    /// Classifies a scalar token: boolean, float special form, float,
    /// integer, or date-time.
    fn scalar(&mut self, at: usize) -> Result<Value, Error> {
        let mut end = at;
        while end < self.bytes.len() && !is_terminator(self.bytes[end]) {
            end += 1;
        }
        let token = &self.input[at..end];

        match token {
            "" => return Err(self.error(at, ErrorKind::NotImplemented)),
            "true" => {
                self.cursor = end;
                return Ok(Value::Boolean(true));
            }
            "false" => {
                self.cursor = end;
                return Ok(Value::Boolean(false));
            }
            "inf" | "+inf" => {
                self.cursor = end;
                return Ok(Value::Float(f64::INFINITY));
            }
            "-inf" => {
                self.cursor = end;
                return Ok(Value::Float(f64::NEG_INFINITY));
            }
            "nan" | "+nan" | "-nan" => {
                self.cursor = end;
                return Ok(Value::Float(f64::NAN));
            }
            _ => {}
        }

        let bytes = token.as_bytes();

        if is_float_token(bytes) {
            let mut description: String = token.chars().filter(|c| *c != '_').collect();
            if description.starts_with('+') {
                description.remove(0);
            }
            return match description.parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    self.cursor = end;
                    Ok(Value::DescribedFloat(DescribedFloat { value, description }))
                }
                _ => Err(self.error_span(at, end, ErrorKind::IllFormedValue("float"))),
            };
        }

        if let Some((radix, digits)) = classify_integer(token) {
            return match i64::from_str_radix(&digits, radix) {
                Ok(value) => {
                    self.cursor = end;
                    Ok(Value::Integer(value))
                }
                Err(_) => Err(self.error_span(at, end, ErrorKind::IllFormedValue("integer"))),
            };
        }

        if bytes[0].is_ascii_digit() {
            // Scan the raw remainder: a date-time may contain a space
            // separator, which the token scan above stops at.
            if let Some(n) = time::scan(&self.bytes[at..]) {
                let dt_end = at + n;
                if dt_end >= self.bytes.len() || is_terminator(self.bytes[dt_end]) {
                    self.cursor = dt_end;
                    return Ok(Value::DateTime(DateTime {
                        text: self.input[at..dt_end].to_string(),
                    }));
                }
            }
        }

        Err(self.error_span(at, end, ErrorKind::NotImplemented))
    }

    /// Reads the contents of a static array after the opening bracket.
    /// Static arrays may span lines and contain comment lines; elements
    /// must all carry the same variant tag.
    fn array_contents(&mut self, start: usize, depth_remaining: i16) -> Result<Array, Error> {
        if depth_remaining < 0 {
            return Err(self.error(start, ErrorKind::RecursionLimit));
        }
        let mut arr = Array::new();
        let mut first = true;
        loop {
            self.skip_array_ws(start)?;
            if self.eat_byte(b']') {
                return Ok(arr);
            }
            if !first {
                if !self.eat_byte(b',') {
                    return Err(self.error(self.cursor, ErrorKind::IllFormedArray));
                }
                self.skip_array_ws(start)?;
                if self.eat_byte(b']') {
                    return Ok(arr);
                }
            }
            let value_start = self.cursor;
            let value = self.value(depth_remaining)?;
            if let Some(head) = arr.first() {
                if !head.same_kind(&value) {
                    return Err(self.error_span(
                        value_start,
                        self.cursor,
                        ErrorKind::MixedTypeArray {
                            expected: head.type_str(),
                            found: value.type_str(),
                        },
                    ));
                }
            }
            arr.push(value);
            first = false;
        }
    }

    /// Skips whitespace (including newlines) and whole comment lines inside
    /// a static array. Reaching end of input here is an ill-formed array.
    fn skip_array_ws(&mut self, start: usize) -> Result<(), Error> {
        loop {
            self.skip_ws();
            match self.peek_byte() {
                Some(b'#') => self.skip_to_newline(),
                Some(_) => return Ok(()),
                None => return Err(self.error(start, ErrorKind::IllFormedArray)),
            }
        }
    }

    /// Reads the contents of an inline table after the opening brace.
    /// Inline tables are single-line; the table is sealed once the closing
    /// brace is read and can no longer be extended.
    fn inline_table_contents(
        &mut self,
        start: usize,
        depth_remaining: i16,
    ) -> Result<Table, Error> {
        if depth_remaining < 0 {
            return Err(self.error(start, ErrorKind::RecursionLimit));
        }
        let mut table = Table::new();
        let mut first = true;
        loop {
            self.skip_ws_inline();
            if self.at_line_break() {
                return Err(self.error(start, ErrorKind::IllFormedInlineTable));
            }
            if self.eat_byte(b'}') {
                table.seal();
                return Ok(table);
            }
            if !first {
                if !self.eat_byte(b',') {
                    return Err(self.error(self.cursor, ErrorKind::IllFormedInlineTable));
                }
                self.skip_ws_inline();
                if self.at_line_break() {
                    return Err(self.error(start, ErrorKind::IllFormedInlineTable));
                }
                if self.eat_byte(b'}') {
                    table.seal();
                    return Ok(table);
                }
            }
            let entry_start = self.cursor;
            let keys = self.parse_keys()?;
            if !self.eat_byte(b'=') {
                return Err(self.error(entry_start, ErrorKind::IllFormedInlineTable));
            }
            self.skip_ws_inline();
            let value = self.value(depth_remaining)?;
            self.insert_leaf(&mut table, &keys, value, entry_start)?;
            first = false;
        }
    }

    #[inline]
    fn at_line_break(&self) -> bool {
        matches!(self.peek_byte(), None | Some(b'\n' | b'\r'))
    }

    /// Reads a basic string body after the opening delimiter, decoding
    /// escape sequences. `kind` is the error reported for malformed input.
    fn read_basic_string(&mut self, multiline: bool, kind: ErrorKind) -> Result<String, Error> {
        let start = self.cursor;
        if multiline {
            self.trim_leading_newline();
        }
        let mut out = String::new();
        let mut run_start = self.cursor;
        loop {
            let Some(b) = self.peek_byte() else {
                return Err(self.error(start, kind));
            };
            match b {
                b'"' => {
                    if !multiline {
                        out.push_str(&self.input[run_start..self.cursor]);
                        self.cursor += 1;
                        return Ok(out);
                    }
                    let mut quotes = 1;
                    while quotes < 5 && self.peek_byte_at(quotes) == Some(b'"') {
                        quotes += 1;
                    }
                    if quotes >= 3 {
                        // Up to two quotes may belong to the content, the
                        // last three close the string.
                        let extra = quotes - 3;
                        out.push_str(&self.input[run_start..self.cursor + extra]);
                        self.cursor += quotes;
                        return Ok(out);
                    }
                    self.cursor += quotes;
                }
                b'\\' => {
                    out.push_str(&self.input[run_start..self.cursor]);
                    self.cursor += 1;
                    self.read_escape(&mut out, multiline, start, kind.clone())?;
                    run_start = self.cursor;
                }
                b'\n' | b'\r' if !multiline => {
                    return Err(self.error(self.cursor, kind));
                }
                _ => self.cursor += 1,
            }
        }
    }

    /// Decodes one escape sequence following a backslash.
    fn read_escape(
        &mut self,
        out: &mut String,
        multiline: bool,
        string_start: usize,
        kind: ErrorKind,
    ) -> Result<(), Error> {
        let escape_start = self.cursor - 1;
        let Some(b) = self.peek_byte() else {
            return Err(self.error(string_start, kind));
        };
        self.cursor += 1;
        match b {
            b'"' => out.push('"'),
            b'\\' => out.push('\\'),
            b'b' => out.push('\u{0008}'),
            b'f' => out.push('\u{000C}'),
            b'n' => out.push('\n'),
            b'r' => out.push('\r'),
            b't' => out.push('\t'),
            b'u' => {
                let ch = self.read_hex(4, string_start, kind)?;
                out.push(ch);
            }
            b'U' => {
                let ch = self.read_hex(8, string_start, kind)?;
                out.push(ch);
            }
            b' ' | b'\t' | b'\n' | b'\r' if multiline => {
                // Line continuation: the backslash, any trailing whitespace,
                // the newline, and all following whitespace are elided.
                self.cursor -= 1;
                loop {
                    match self.peek_byte() {
                        Some(b' ' | b'\t') => self.cursor += 1,
                        Some(b'\n') => {
                            self.cursor += 1;
                            break;
                        }
                        Some(b'\r') if self.peek_byte_at(1) == Some(b'\n') => {
                            self.cursor += 2;
                            break;
                        }
                        _ => return Err(self.error(escape_start, kind)),
                    }
                }
                loop {
                    match self.peek_byte() {
                        Some(b' ' | b'\t' | b'\n') => self.cursor += 1,
                        Some(b'\r') if self.peek_byte_at(1) == Some(b'\n') => self.cursor += 2,
                        _ => break,
                    }
                }
            }
            _ => return Err(self.error(escape_start, kind)),
        }
        Ok(())
    }

    /// Reads `n` hex digits and converts them to a char.
    fn read_hex(
        &mut self,
        n: usize,
        string_start: usize,
        kind: ErrorKind,
    ) -> Result<char, Error> {
        let escape_start = self.cursor;
        let mut val: u32 = 0;
        for _ in 0..n {
            let Some(b) = self.peek_byte() else {
                return Err(self.error(string_start, kind));
            };
            let digit = HEX[b as usize];
            if digit < 0 {
                return Err(self.error(self.cursor, kind));
            }
            val = (val << 4) | digit as u32;
            self.cursor += 1;
        }
        char::from_u32(val).ok_or_else(|| self.error_span(escape_start, escape_start + n, kind))
    }

    /// Reads a literal string body after the opening delimiter. No escape
    /// sequences exist in literal strings; the content is taken verbatim.
    fn read_literal_string(&mut self, multiline: bool, kind: ErrorKind) -> Result<String, Error> {
        let start = self.cursor;
        if multiline {
            self.trim_leading_newline();
        }
        let content_start = self.cursor;
        loop {
            let Some(b) = self.peek_byte() else {
                return Err(self.error(start, kind));
            };
            match b {
                b'\'' => {
                    if !multiline {
                        let s = self.input[content_start..self.cursor].to_string();
                        self.cursor += 1;
                        return Ok(s);
                    }
                    let mut quotes = 1;
                    while quotes < 5 && self.peek_byte_at(quotes) == Some(b'\'') {
                        quotes += 1;
                    }
                    if quotes >= 3 {
                        let extra = quotes - 3;
                        let s = self.input[content_start..self.cursor + extra].to_string();
                        self.cursor += quotes;
                        return Ok(s);
                    }
                    self.cursor += quotes;
                }
                b'\n' | b'\r' if !multiline => {
                    return Err(self.error(self.cursor, kind));
                }
                _ => self.cursor += 1,
            }
        }
    }

    /// A newline immediately following an opening multi-line delimiter is
    /// trimmed.
    fn trim_leading_newline(&mut self) {
        match self.peek_byte() {
            Some(b'\n') => self.cursor += 1,
            Some(b'\r') if self.peek_byte_at(1) == Some(b'\n') => self.cursor += 2,
            _ => {}
        }
    }
}

#[inline]
fn is_keylike_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

/// Bytes that end a scalar token.
#[inline]
fn is_terminator(b: u8) -> bool {
    matches!(
        b,
        b' ' | b'\t' | b'\r' | b'\n' | b'#' | b',' | b']' | b'}'
    )
}

/// Matches `sign? digits ('.' digits exponent? | ('.' digits)? exponent)`
/// where the integer and fractional digit runs may contain underscores.
fn is_float_token(bytes: &[u8]) -> bool {
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_digits = count_digit_run(&bytes[i..]);
    if int_digits == 0 {
        return false;
    }
    i += int_digits;

    let mut has_frac = false;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let frac_digits = count_digit_run(&bytes[i..]);
        if frac_digits == 0 {
            return false;
        }
        i += frac_digits;
        has_frac = true;
    }

    let mut has_exp = false;
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_digits = bytes[i..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if exp_digits == 0 {
            return false;
        }
        i += exp_digits;
        has_exp = true;
    }

    i == bytes.len() && (has_frac || has_exp)
}

#[inline]
fn count_digit_run(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .take_while(|b| b.is_ascii_digit() || **b == b'_')
        .count()
}

/// Recognizes integer tokens in the four radices, returning the radix and
/// the digit text to parse (underscores stripped, sign kept for decimal).
fn classify_integer(token: &str) -> Option<(u32, String)> {
    let bytes = token.as_bytes();
    match bytes {
        [b'0', b'x', rest @ ..] => {
            if rest.is_empty()
                || !rest.iter().all(|b| b.is_ascii_hexdigit() || *b == b'_')
            {
                return None;
            }
            Some((16, token[2..].chars().filter(|c| *c != '_').collect()))
        }
        [b'0', b'o', rest @ ..] => {
            if rest.is_empty() || !rest.iter().all(|b| (b'0'..=b'7').contains(b)) {
                return None;
            }
            Some((8, token[2..].to_string()))
        }
        [b'0', b'b', rest @ ..] => {
            if rest.is_empty() || !rest.iter().all(|b| *b == b'0' || *b == b'1') {
                return None;
            }
            Some((2, token[2..].to_string()))
        }
        _ => {
            let digits = match bytes.first() {
                Some(b'+' | b'-') => &bytes[1..],
                _ => bytes,
            };
            if digits.is_empty()
                || !digits.iter().all(|b| b.is_ascii_digit() || *b == b'_')
            {
                return None;
            }
            Some((10, token.chars().filter(|c| *c != '_').collect()))
        }
    }
}
