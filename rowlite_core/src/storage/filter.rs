//! Minimal selection parsing and row ordering for the in-memory store.
//!
//! The grammar is `column op rhs` predicates conjoined with `and`, where
//! `op` is one of `=  !=  <>  <  <=  >  >=` and `rhs` is a `?` placeholder,
//! a quoted literal, or a bare token. Nothing else is recognized; an
//! unparsable selection fails the query.

use std::cmp::Ordering;

use crate::storage::StoreError;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

#[derive(Debug)]
struct Predicate {
    column: usize,
    op: CompareOp,
    rhs: String,
}

/// A parsed, argument-bound selection.
#[derive(Debug, Default)]
pub(crate) struct Selection {
    predicates: Vec<Predicate>,
}

impl Selection {
    /// Parses `selection` against the table columns and binds `args` to the
    /// `?` placeholders in order. Every argument must be bound.
    pub(crate) fn parse(
        selection: Option<&str>,
        args: &[String],
        columns: &[String],
    ) -> Result<Selection, StoreError> {
        let text = match selection {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                if !args.is_empty() {
                    return Err(StoreError::ArgumentCount {
                        expected: 0,
                        given: args.len(),
                    });
                }
                return Ok(Selection::default());
            }
        };

        let tokens = tokenize(text)?;
        let mut predicates = Vec::new();
        let mut bound = 0usize;
        let mut i = 0;
        loop {
            if i + 3 > tokens.len() {
                return Err(StoreError::BadSelection(text.to_string()));
            }
            let column = columns
                .iter()
                .position(|c| *c == tokens[i])
                .ok_or_else(|| StoreError::NoSuchColumn(tokens[i].clone()))?;
            let op = parse_op(&tokens[i + 1])
                .ok_or_else(|| StoreError::BadSelection(tokens[i + 1].clone()))?;
            let rhs = if tokens[i + 2] == "?" {
                let value = args.get(bound).ok_or(StoreError::ArgumentCount {
                    expected: bound + 1,
                    given: args.len(),
                })?;
                bound += 1;
                value.clone()
            } else {
                unquote(&tokens[i + 2])
            };
            predicates.push(Predicate { column, op, rhs });

            i += 3;
            if i == tokens.len() {
                break;
            }
            if !tokens[i].eq_ignore_ascii_case("and") {
                return Err(StoreError::BadSelection(tokens[i].clone()));
            }
            i += 1;
        }
        if bound != args.len() {
            return Err(StoreError::ArgumentCount {
                expected: bound,
                given: args.len(),
            });
        }
        Ok(Selection { predicates })
    }

    /// True when `row` matches every predicate. NULL cells match nothing.
    pub(crate) fn matches(&self, row: &[Option<String>]) -> bool {
        self.predicates.iter().all(|p| {
            let Some(Some(cell)) = row.get(p.column) else {
                return false;
            };
            let ord = compare_cells(cell, &p.rhs);
            match p.op {
                CompareOp::Eq => ord == Ordering::Equal,
                CompareOp::Ne => ord != Ordering::Equal,
                CompareOp::Lt => ord == Ordering::Less,
                CompareOp::Le => ord != Ordering::Greater,
                CompareOp::Gt => ord == Ordering::Greater,
                CompareOp::Ge => ord != Ordering::Less,
            }
        })
    }
}

/// Sorts rows by a comma-separated key list, each key `column [asc|desc]`.
/// NULL cells sort before values.
pub(crate) fn order_rows(
    rows: &mut [Vec<Option<String>>],
    order_by: &str,
    columns: &[String],
) -> Result<(), StoreError> {
    let mut keys = Vec::new();
    for part in order_by.split(',') {
        let mut words = part.split_whitespace();
        let Some(name) = words.next() else {
            return Err(StoreError::BadSelection(order_by.to_string()));
        };
        let descending = match words.next() {
            None => false,
            Some(dir) if dir.eq_ignore_ascii_case("asc") => false,
            Some(dir) if dir.eq_ignore_ascii_case("desc") => true,
            Some(dir) => return Err(StoreError::BadSelection(dir.to_string())),
        };
        if words.next().is_some() {
            return Err(StoreError::BadSelection(order_by.to_string()));
        }
        let index = columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| StoreError::NoSuchColumn(name.to_string()))?;
        keys.push((index, descending));
    }

    rows.sort_by(|a, b| {
        for &(index, descending) in &keys {
            let ord = match (&a[index], &b[index]) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(l), Some(r)) => compare_cells(l, r),
            };
            let ord = if descending { ord.reverse() } else { ord };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });
    Ok(())
}

/// Compares two text cells the way the store orders values: as integers
/// when both parse, as floats when both parse, otherwise as text.
fn compare_cells(left: &str, right: &str) -> Ordering {
    if let (Ok(l), Ok(r)) = (left.parse::<i64>(), right.parse::<i64>()) {
        return l.cmp(&r);
    }
    if let (Ok(l), Ok(r)) = (left.parse::<f64>(), right.parse::<f64>()) {
        return l.partial_cmp(&r).unwrap_or(Ordering::Equal);
    }
    left.cmp(right)
}

fn parse_op(token: &str) -> Option<CompareOp> {
    match token {
        "=" => Some(CompareOp::Eq),
        "!=" | "<>" => Some(CompareOp::Ne),
        "<" => Some(CompareOp::Lt),
        "<=" => Some(CompareOp::Le),
        ">" => Some(CompareOp::Gt),
        ">=" => Some(CompareOp::Ge),
        _ => None,
    }
}

/// Splits a selection into column/operator/value tokens. Quoted literals
/// keep their quotes so a quoted `?` is not mistaken for a placeholder.
fn tokenize(text: &str) -> Result<Vec<String>, StoreError> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();
    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '\'' | '"' => {
                let quote = c;
                chars.next();
                let mut literal = String::new();
                loop {
                    match chars.next() {
                        Some(ch) if ch == quote => break,
                        Some(ch) => literal.push(ch),
                        None => return Err(StoreError::BadSelection(text.to_string())),
                    }
                }
                tokens.push(format!("{quote}{literal}{quote}"));
            }
            '=' => {
                chars.next();
                tokens.push("=".to_string());
            }
            '!' | '<' | '>' => {
                chars.next();
                let mut op = String::from(c);
                if let Some(&next) = chars.peek() {
                    if next == '=' || (c == '<' && next == '>') {
                        op.push(next);
                        chars.next();
                    }
                }
                tokens.push(op);
            }
            '?' => {
                chars.next();
                tokens.push("?".to_string());
            }
            _ => {
                let mut word = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch.is_whitespace() || matches!(ch, '=' | '!' | '<' | '>' | '\'' | '"') {
                        break;
                    }
                    word.push(ch);
                    chars.next();
                }
                tokens.push(word);
            }
        }
    }
    Ok(tokens)
}

fn unquote(token: &str) -> String {
    let bytes = token.as_bytes();
    if bytes.len() >= 2 && (bytes[0] == b'\'' || bytes[0] == b'"') && bytes[bytes.len() - 1] == bytes[0]
    {
        token[1..token.len() - 1].to_string()
    } else {
        token.to_string()
    }
}
