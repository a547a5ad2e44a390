use quick_xml::events::Event;
use quick_xml::Reader;
use std::fmt;

/// Malformed XML, located at the offending fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Byte offset into the input
    pub position: u64,
    /// 1-based line of `position`
    pub line: usize,
    /// 1-based column (in characters) of `position`
    pub column: usize,
    pub message: String,
}

impl ParseError {
    fn at(xml: &str, position: u64, message: impl Into<String>) -> Self {
        let (line, column) = line_and_column(xml, position as usize);
        Self {
            position,
            line,
            column,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (line {}, column {}, offset {})",
            self.message, self.line, self.column, self.position
        )
    }
}

impl std::error::Error for ParseError {}

/// Structural event seen while walking a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmlVisit<'a> {
    /// An element was opened; the path ends with its local name
    Open(&'a [String]),
    /// An element was closed, with its trimmed text content
    Close(&'a [String], &'a str),
}

/// Walks a document, reporting every element open/close together with the
/// path of local names from the root element down to it.
///
/// Namespace prefixes are dropped, entities are unescaped and CDATA is kept
/// verbatim. Whitespace-only text never reaches the visitor.
pub fn walk<F>(xml: &str, mut visit: F) -> Result<(), ParseError>
where
    F: FnMut(XmlVisit<'_>),
{
    let mut reader = Reader::from_str(xml);
    let mut path: Vec<String> = Vec::new();
    let mut texts: Vec<String> = Vec::new();
    let mut seen_root = false;

    loop {
        let position = reader.buffer_position() as u64;
        let event = reader.read_event().map_err(|e| {
            ParseError::at(xml, reader.error_position() as u64, e.to_string())
        })?;

        match event {
            Event::Start(start) => {
                if path.is_empty() && seen_root {
                    return Err(ParseError::at(xml, position, "content after root element"));
                }
                seen_root = true;
                path.push(String::from_utf8_lossy(start.local_name().as_ref()).into_owned());
                texts.push(String::new());
                visit(XmlVisit::Open(&path));
            }
            Event::Empty(empty) => {
                if path.is_empty() && seen_root {
                    return Err(ParseError::at(xml, position, "content after root element"));
                }
                seen_root = true;
                path.push(String::from_utf8_lossy(empty.local_name().as_ref()).into_owned());
                visit(XmlVisit::Open(&path));
                visit(XmlVisit::Close(&path, ""));
                path.pop();
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| ParseError::at(xml, position, e.to_string()))?;
                match texts.last_mut() {
                    Some(buffer) => buffer.push_str(&text),
                    None if text.trim().is_empty() => {}
                    None => {
                        return Err(ParseError::at(xml, position, "text outside of root element"))
                    }
                }
            }
            Event::CData(cdata) => {
                let bytes = cdata.into_inner();
                if let Some(buffer) = texts.last_mut() {
                    buffer.push_str(&String::from_utf8_lossy(&bytes));
                }
            }
            Event::End(_) => {
                let text = texts.pop().unwrap_or_default();
                visit(XmlVisit::Close(&path, text.trim()));
                path.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = path.last() {
        return Err(ParseError::at(
            xml,
            xml.len() as u64,
            format!("unexpected end of document: <{}> is not closed", open),
        ));
    }
    if !seen_root {
        return Err(ParseError::at(xml, 0, "document has no root element"));
    }
    Ok(())
}

/// Whether `path` ends with the given suffix of element names
pub fn path_ends_with(path: &[String], suffix: &[&str]) -> bool {
    path.len() >= suffix.len()
        && path[path.len() - suffix.len()..]
            .iter()
            .zip(suffix)
            .all(|(a, b)| a == b)
}

fn line_and_column(xml: &str, position: usize) -> (usize, usize) {
    let mut end = position.min(xml.len());
    while !xml.is_char_boundary(end) {
        end -= 1;
    }
    let before = &xml[..end];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
