use crate::models::{ReadError, TextSource, TextSpan};

pub const QUOTE_CHARS: [char; 2] = ['"', '\''];

const TRIPLE: usize = 3;

fn is_quote(c: char) -> bool {
    QUOTE_CHARS.contains(&c)
}

/// The content of the string literal whose delimiter touches `offset`.
///
/// A quote right before `offset` is taken as the opening delimiter and the
/// literal is matched forward; otherwise a quote at `offset` is taken as the
/// closing delimiter and matched backward. Triple-quoted delimiters are
/// recognised on either side. The returned span never includes delimiters.
///
/// Escapes are not interpreted: a literal is assumed not to contain its own
/// delimiter. `None` when no quote touches `offset` or the literal is
/// unterminated.
pub fn match_quoted<S: TextSource + ?Sized>(text: &S, offset: usize) -> Option<TextSpan> {
    match quoted_span(text, offset) {
        Ok(span) => span,
        Err(err) => {
            tracing::trace!(offset, error = %err, "quote match abandoned");
            None
        }
    }
}

fn quoted_span<S: TextSource + ?Sized>(
    text: &S,
    offset: usize,
) -> Result<Option<TextSpan>, ReadError> {
    let len = text.len_chars();
    if offset > len {
        return Err(ReadError::OutOfRange { index: offset, len });
    }

    if offset > 0 {
        let quote = text.char_at(offset - 1)?;
        if is_quote(quote) {
            let width = if offset >= TRIPLE
                && text.char_at(offset - 2)? == quote
                && text.char_at(offset - 3)? == quote
            {
                TRIPLE
            } else {
                1
            };
            let close = find_delimiter_forward(text, offset, quote, width)?;
            return Ok(close.map(|close| TextSpan::from_range(offset..close)));
        }
    }

    if offset < len {
        let quote = text.char_at(offset)?;
        if is_quote(quote) {
            let width = if offset + TRIPLE <= len
                && text.char_at(offset + 1)? == quote
                && text.char_at(offset + 2)? == quote
            {
                TRIPLE
            } else {
                1
            };
            let open = find_delimiter_backward(text, offset, quote, width)?;
            return Ok(open.map(|open| TextSpan::from_range(open + width..offset)));
        }
    }

    Ok(None)
}

fn delimiter_at<S: TextSource + ?Sized>(
    text: &S,
    pos: usize,
    quote: char,
    width: usize,
) -> Result<bool, ReadError> {
    for k in 0..width {
        if text.char_at(pos + k)? != quote {
            return Ok(false);
        }
    }
    Ok(true)
}

/// First `pos >= from` where the delimiter starts.
fn find_delimiter_forward<S: TextSource + ?Sized>(
    text: &S,
    from: usize,
    quote: char,
    width: usize,
) -> Result<Option<usize>, ReadError> {
    let len = text.len_chars();
    let mut pos = from;
    while pos + width <= len {
        if delimiter_at(text, pos, quote, width)? {
            return Ok(Some(pos));
        }
        pos += 1;
    }
    Ok(None)
}

/// Last delimiter that ends at or before `before`.
fn find_delimiter_backward<S: TextSource + ?Sized>(
    text: &S,
    before: usize,
    quote: char,
    width: usize,
) -> Result<Option<usize>, ReadError> {
    let Some(mut pos) = before.checked_sub(width) else {
        return Ok(None);
    };
    loop {
        if delimiter_at(text, pos, quote, width)? {
            return Ok(Some(pos));
        }
        if pos == 0 {
            return Ok(None);
        }
        pos -= 1;
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/scan/quote.rs"]
mod tests;
