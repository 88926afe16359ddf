//! A small `printf`-style formatter for message templates.
//!
//! Supports `%%`, `%d`, `%u` (absolute value) and `%s`, with an optional
//! 1-based positional index (`%2$d`), `0` and `-` flags, and a minimum
//! width. That is everything the message bundles use.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::FormatError;

/// A single template argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    Int(i64),
    Str(&'a str),
}

impl From<i64> for Arg<'_> {
    fn from(n: i64) -> Self {
        Arg::Int(n)
    }
}

impl From<i32> for Arg<'_> {
    fn from(n: i32) -> Self {
        Arg::Int(i64::from(n))
    }
}

impl From<u32> for Arg<'_> {
    fn from(n: u32) -> Self {
        Arg::Int(i64::from(n))
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Str(s)
    }
}

#[derive(Debug, Default)]
struct Directive {
    position: Option<usize>,
    zero_pad: bool,
    left_align: bool,
    width: Option<usize>,
}

/// Expands `template` with `args`.
pub fn sprintf(template: &str, args: &[Arg<'_>]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len() + 8);
    let mut chars = template.char_indices().peekable();
    let mut next_arg = 0usize;

    while let Some((start, c)) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        if chars.next_if(|&(_, c)| c == '%').is_some() {
            out.push('%');
            continue;
        }

        let mut directive = Directive::default();
        // A leading `0` is a flag, so only `1`-`9` can start an index.
        if chars.peek().is_some_and(|&(_, c)| matches!(c, '1'..='9')) {
            let leading = take_number(&mut chars);
            if chars.next_if(|&(_, c)| c == '$').is_some() {
                directive.position = leading;
            } else {
                directive.width = leading;
            }
        }

        if directive.width.is_none() {
            while let Some((_, flag)) = chars.next_if(|&(_, c)| c == '0' || c == '-') {
                match flag {
                    '0' => directive.zero_pad = true,
                    _ => directive.left_align = true,
                }
            }
            directive.width = take_number(&mut chars);
        }

        let Some((_, conversion)) = chars.next() else {
            return Err(FormatError::UnsupportedDirective(template[start..].to_owned()));
        };

        let index = match directive.position {
            Some(position) => position.saturating_sub(1),
            None => {
                let index = next_arg;
                next_arg += 1;
                index
            }
        };
        let arg = args
            .get(index)
            .ok_or(FormatError::TooFewArguments(index + 1))?;

        let rendered = match (conversion, arg) {
            ('d', Arg::Int(n)) => n.to_string(),
            ('u', Arg::Int(n)) => n.unsigned_abs().to_string(),
            ('s', Arg::Int(n)) => n.to_string(),
            ('s', Arg::Str(s)) => (*s).to_owned(),
            ('d' | 'u', Arg::Str(_)) => {
                return Err(FormatError::ExpectedNumber {
                    directive: conversion,
                });
            }
            _ => {
                let end = chars.peek().map_or(template.len(), |&(i, _)| i);
                return Err(FormatError::UnsupportedDirective(
                    template[start..end].to_owned(),
                ));
            }
        };

        pad_into(&mut out, &rendered, &directive);
    }

    Ok(out)
}

fn take_number(chars: &mut Peekable<CharIndices<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some((_, digit)) = chars.next_if(|&(_, c)| c.is_ascii_digit()) {
        let digit = digit.to_digit(10).unwrap_or(0) as usize;
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit));
    }
    value
}

fn pad_into(out: &mut String, rendered: &str, directive: &Directive) {
    let len = rendered.chars().count();
    let fill = directive.width.unwrap_or(0).saturating_sub(len);

    if directive.left_align {
        out.push_str(rendered);
        out.extend(std::iter::repeat_n(' ', fill));
    } else {
        let pad = if directive.zero_pad { '0' } else { ' ' };
        out.extend(std::iter::repeat_n(pad, fill));
        out.push_str(rendered);
    }
}
