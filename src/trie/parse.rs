use super::error::TrieError;

use regex::Regex;

/// Parsed form of one pattern segment.
pub(super) enum Segment<'p> {
    /// Exact text, including the empty trailing segment and the
    /// unescaped text of `::` segments.
    Literal(&'p str),
    Named {
        name: &'p str,
        regex: Option<Regex>,
        suffix: Option<&'p str>,
        wildcard: bool,
    },
}

pub(super) fn parse_segment(frag: &str) -> Result<Segment<'_>, TrieError> {
    if frag.is_empty() {
        return Ok(Segment::Literal(frag));
    }
    if let Some(rest) = frag.strip_prefix("::") {
        // "::bc" is the literal ":bc"; only word characters may follow.
        if rest.bytes().all(is_word_byte) {
            return Ok(Segment::Literal(&frag[1..]));
        }
    }
    match frag.as_bytes()[0] {
        b':' => parse_named(frag),
        b'*' | b'(' | b')' => Err(TrieError::InvalidPattern(frag.to_owned())),
        _ => Ok(Segment::Literal(frag)),
    }
}

fn parse_named(frag: &str) -> Result<Segment<'_>, TrieError> {
    let body = &frag[1..];
    let invalid = || TrieError::InvalidPattern(frag.to_owned());

    let name;
    let mut regex = None;
    let mut suffix = None;
    let mut wildcard = false;

    if let Some(open) = body.find('(') {
        let close = matching_paren(body, open).ok_or_else(invalid)?;
        let source = &body[open + 1..close];
        if source.is_empty() {
            return Err(invalid());
        }
        name = &body[..open];
        regex = Some(Regex::new(source).map_err(|_| invalid())?);
        match &body[close + 1..] {
            "" => {}
            rest => match rest.strip_prefix('+') {
                Some(sfx) => suffix = Some(sfx),
                None => return Err(invalid()),
            },
        }
    } else if let Some(plus) = body.find('+') {
        name = &body[..plus];
        suffix = Some(&body[plus + 1..]);
    } else if let Some(stripped) = body.strip_suffix('*') {
        name = stripped;
        wildcard = true;
    } else {
        name = body;
    }

    if name.is_empty() || !name.bytes().all(is_word_byte) {
        return Err(invalid());
    }
    if let Some(sfx) = suffix {
        if sfx.is_empty() || !sfx.bytes().all(is_suffix_byte) {
            return Err(invalid());
        }
    }

    Ok(Segment::Named {
        name,
        regex,
        suffix,
        wildcard,
    })
}

/// Position of the `)` balancing the `(` at `open`.
fn matching_paren(s: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, b) in s.bytes().enumerate().skip(open) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn is_word_byte(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

/// The URL-path literal character class allowed in suffixes.
fn is_suffix_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b','
                | b'-'
                | b'.'
                | b':'
                | b';'
                | b'='
                | b'@'
                | b'_'
                | b'~'
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(frag: &str) -> Segment<'_> {
        parse_segment(frag).unwrap()
    }

    fn err(frag: &str) -> bool {
        parse_segment(frag).is_err()
    }

    #[test]
    fn literal_segments() {
        assert!(matches!(ok(""), Segment::Literal("")));
        assert!(matches!(ok("abc"), Segment::Literal("abc")));
        assert!(matches!(ok("a*b"), Segment::Literal("a*b")));
        assert!(matches!(ok("::"), Segment::Literal(":")));
        assert!(matches!(ok("::bc"), Segment::Literal(":bc")));
    }

    #[test]
    fn named_segments() {
        match ok(":b") {
            Segment::Named {
                name,
                regex,
                suffix,
                wildcard,
            } => {
                assert_eq!(name, "b");
                assert!(regex.is_none());
                assert!(suffix.is_none());
                assert!(!wildcard);
            }
            _ => panic!("expected named"),
        }
        match ok(":b(a+)+a2") {
            Segment::Named {
                name,
                regex,
                suffix,
                ..
            } => {
                assert_eq!(name, "b");
                assert_eq!(regex.unwrap().as_str(), "a+");
                assert_eq!(suffix, Some("a2"));
            }
            _ => panic!("expected named"),
        }
        match ok(":b(^(x|y)$)++undelete") {
            Segment::Named { regex, suffix, .. } => {
                assert_eq!(regex.unwrap().as_str(), "^(x|y)$");
                assert_eq!(suffix, Some("+undelete"));
            }
            _ => panic!("expected named"),
        }
        match ok(":b*") {
            Segment::Named { name, wildcard, .. } => {
                assert_eq!(name, "b");
                assert!(wildcard);
            }
            _ => panic!("expected named"),
        }
    }

    #[test]
    fn invalid_segments() {
        for frag in &[
            ":", ":abc$", ":+", ":+a", ":*", ":#*", ":abc(*", ":b(c)*", ":(", ":)", ":()",
            ":bc)", ":bc()", ":(bc)", ":#(bc)", "*", "(", ")", "::b-c", ":b+",
        ] {
            assert!(err(frag), "expected {:?} to be rejected", frag);
        }
    }
}
