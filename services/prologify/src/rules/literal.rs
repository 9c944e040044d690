//! Decoder for the literal record syntax rule miners write out
//!
//! Records look like `{'rules': ['p(X) <- q(x)'], 'score': 0.5}`: a data-only
//! subset of dicts, lists, tuples, quoted strings, numbers, `True`, `False`
//! and `None`. Nothing is evaluated; the text is parsed into a
//! `serde_json::Value` and rejected if it strays outside that subset.

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_while_m_n},
    character::complete::{char as nomchar, digit1, multispace0, one_of},
    combinator::{all_consuming, map, map_opt, opt, recognize, value},
    multi::{fold_many0, separated_list0},
    sequence::{delimited, pair, preceded, separated_pair, terminated, tuple},
    IResult,
};
use serde_json::{Map, Number, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid literal at byte {position}: {message}")]
pub struct LiteralError {
    pub position: usize,
    pub message: String,
}

pub fn parse_literal(text: &str) -> Result<Value, LiteralError> {
    match all_consuming(literal)(text) {
        Ok((_rest, value)) => Ok(value),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(LiteralError {
            position: text.len() - e.input.len(),
            message: if e.input.is_empty() {
                "unexpected end of input".to_string()
            } else {
                format!("unexpected input {:?}", e.input.chars().take(20).collect::<String>())
            },
        }),
        Err(nom::Err::Incomplete(_)) => Err(LiteralError {
            position: text.len(),
            message: "unexpected end of input".to_string(),
        }),
    }
}

//////////////////////////////////////

type In<'a> = &'a str;

fn ws<'a, F, O>(inner: F) -> impl FnMut(In<'a>) -> IResult<In<'a>, O>
where
    F: FnMut(In<'a>) -> IResult<In<'a>, O>,
{
    delimited(multispace0, inner, multispace0)
}

fn literal(input: In) -> IResult<In, Value> {
    ws(alt((
        dict,
        sequence('[', ']'),
        sequence('(', ')'),
        map(string, Value::String),
        number,
        keyword,
    )))(input)
}

/// Comma-separated items between `open` and `close`, trailing comma allowed
fn sequence<'a>(open: char, close: char) -> impl FnMut(In<'a>) -> IResult<In<'a>, Value> {
    map(
        delimited(
            nomchar(open),
            terminated(
                separated_list0(ws(nomchar(',')), literal),
                opt(ws(nomchar(','))),
            ),
            ws(nomchar(close)),
        ),
        Value::Array,
    )
}

fn dict(input: In) -> IResult<In, Value> {
    let entry = separated_pair(literal, ws(nomchar(':')), literal);
    map(
        delimited(
            nomchar('{'),
            terminated(
                separated_list0(ws(nomchar(',')), entry),
                opt(ws(nomchar(','))),
            ),
            ws(nomchar('}')),
        ),
        |entries: Vec<(Value, Value)>| {
            let mut object = Map::new();
            for (key, value) in entries {
                let key = match key {
                    Value::String(key) => key,
                    other => other.to_string(),
                };
                object.insert(key, value);
            }
            Value::Object(object)
        },
    )(input)
}

enum Fragment<'a> {
    Literal(&'a str),
    Escaped(char),
}

fn string(input: In) -> IResult<In, String> {
    alt((quoted('\'', "\\'"), quoted('"', "\\\"")))(input)
}

fn quoted<'a>(
    quote: char,
    stop: &'static str,
) -> impl FnMut(In<'a>) -> IResult<In<'a>, String> {
    delimited(
        nomchar(quote),
        fold_many0(
            alt((map(is_not(stop), Fragment::Literal), map(escape, Fragment::Escaped))),
            String::new,
            |mut out: String, fragment: Fragment<'a>| {
                match fragment {
                    Fragment::Literal(text) => out.push_str(text),
                    Fragment::Escaped(c) => out.push(c),
                }
                out
            },
        ),
        nomchar(quote),
    )
}

fn escape(input: In) -> IResult<In, char> {
    preceded(
        nomchar('\\'),
        alt((
            value('\n', nomchar('n')),
            value('\t', nomchar('t')),
            value('\r', nomchar('r')),
            value('\\', nomchar('\\')),
            value('\'', nomchar('\'')),
            value('"', nomchar('"')),
            preceded(nomchar('x'), code_point(2, 2, 16)),
            preceded(nomchar('u'), code_point(4, 4, 16)),
            preceded(nomchar('U'), code_point(8, 8, 16)),
            code_point(1, 3, 8),
        )),
    )(input)
}

/// Between `min` and `max` digits in `radix`, decoded as a char
fn code_point<'a>(
    min: usize,
    max: usize,
    radix: u32,
) -> impl FnMut(In<'a>) -> IResult<In<'a>, char> {
    map_opt(
        take_while_m_n(min, max, move |c: char| c.is_digit(radix)),
        move |digits: &str| u32::from_str_radix(digits, radix).ok().and_then(char::from_u32),
    )
}

fn number(input: In) -> IResult<In, Value> {
    map_opt(
        recognize(tuple((
            opt(one_of("+-")),
            digit1,
            opt(pair(nomchar('.'), opt(digit1))),
            opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
        ))),
        |text: &str| {
            let text = text.strip_prefix('+').unwrap_or(text);
            if let Ok(int) = text.parse::<i64>() {
                return Some(Value::Number(int.into()));
            }
            text.parse::<f64>().ok().and_then(Number::from_f64).map(Value::Number)
        },
    )(input)
}

fn keyword(input: In) -> IResult<In, Value> {
    alt((
        value(Value::Bool(true), tag("True")),
        value(Value::Bool(false), tag("False")),
        value(Value::Null, tag("None")),
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attempt_record() {
        let record = "{'rules': ['p(X) <- q(x) ∧ INV(y,z)', \"r(x) <- s(x)\"], 'score': 0.5}";
        let value = parse_literal(record).unwrap();
        assert_eq!(
            value,
            json!({
                "rules": ["p(X) <- q(x) ∧ INV(y,z)", "r(x) <- s(x)"],
                "score": 0.5,
            })
        );
    }

    #[test]
    fn test_scalars_and_tuples() {
        let value = parse_literal("(1, -2, 3.5e2, True, False, None, [],)").unwrap();
        assert_eq!(value, json!([1, -2, 350.0, true, false, null, []]));
    }

    #[test]
    fn test_string_escapes() {
        let value = parse_literal(r#"'it\'s \x41é\n'"#).unwrap();
        assert_eq!(value, json!("it's Aé\n"));
    }

    #[test]
    fn test_octal_escapes() {
        let value = parse_literal(r#"['\012', '\0', '\101b', '\1234']"#).unwrap();
        assert_eq!(value, json!(["\n", "\0", "Ab", "S4"]));
    }

    #[test]
    fn test_non_string_keys() {
        let value = parse_literal("{1: 'a', None: 'b'}").unwrap();
        assert_eq!(value, json!({"1": "a", "null": "b"}));
    }

    #[test]
    fn test_rejects_expressions() {
        assert!(parse_literal("__import__('os')").is_err());
        assert!(parse_literal("{'rules': []} + 1").is_err());
        assert!(parse_literal("['unterminated").is_err());
        assert!(parse_literal("{'a' 1}").is_err());
        assert!(parse_literal("'bad \\q escape'").is_err());
        assert!(parse_literal("").is_err());
    }

    #[test]
    fn test_error_position() {
        let err = parse_literal("{'rules': []} + 1").unwrap_err();
        assert_eq!(err.position, 14);
    }
}
