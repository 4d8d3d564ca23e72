//! Parser for `.resx` string resource documents.
//!
//! The accepted shape is a single root element holding `<data name="...">`
//! children, each with a `<value>` child:
//!
//! ```xml
//! <root>
//!   <data name="Greeting">
//!     <value>Hello</value>
//!     <comment>Shown on the start screen</comment>
//!   </data>
//! </root>
//! ```
//!
//! Other root children (`resheader`, `xsd:schema`, `metadata`, ...) are
//! skipped. Parsing is fail-fast: the first structural problem aborts the
//! whole document and no partial entry list is returned.

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use std::io::BufRead;
use tracing::{debug, trace};

use crate::{error::Error, types::ResourceEntry};

const DATA: &[u8] = b"data";
const VALUE: &[u8] = b"value";
const COMMENT: &[u8] = b"comment";

/// Parses resource entries from document text.
///
/// `None`, empty and whitespace-only content yield no entries. Anything else
/// must be a well-formed document.
pub fn parse(content: Option<&str>) -> Result<Vec<ResourceEntry>, Error> {
    let content = match content {
        Some(content) => content.trim_start_matches('\u{feff}'),
        None => return Ok(Vec::new()),
    };
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = Reader::from_str(content);
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if depth == 0 {
                    enter_root(&mut seen_root)?;
                } else if depth == 1 && e.name().as_ref() == DATA {
                    let entry = parse_data(&e, entries.len(), &mut reader)?;
                    trace!(name = %entry.name, "parsed resource entry");
                    entries.push(entry);
                    continue;
                }
                depth += 1;
            }
            Event::Empty(e) => {
                if depth == 0 {
                    enter_root(&mut seen_root)?;
                } else if depth == 1 && e.name().as_ref() == DATA {
                    let name = data_name(&e, entries.len())?;
                    return Err(Error::MissingValueElement { name });
                }
            }
            Event::End(e) => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    Error::malformed(
                        format!(
                            "unmatched closing tag `{}`",
                            String::from_utf8_lossy(e.name().as_ref())
                        ),
                        None,
                    )
                })?;
            }
            Event::Text(e) if depth == 0 => {
                if !e.unescape()?.trim().is_empty() {
                    return Err(Error::malformed("text outside of the root element", None));
                }
            }
            Event::CData(_) if depth == 0 => {
                return Err(Error::malformed("CDATA outside of the root element", None));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(Error::malformed(
            "unexpected end of document: unclosed element",
            None,
        ));
    }
    if !seen_root {
        return Err(Error::malformed("document has no root element", None));
    }

    debug!(entries = entries.len(), "parsed resource document");
    Ok(entries)
}

/// Reads a whole stream, then parses it with [`parse`].
pub fn parse_reader<R: BufRead>(mut reader: R) -> Result<Vec<ResourceEntry>, Error> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse(Some(&content))
}

fn enter_root(seen_root: &mut bool) -> Result<(), Error> {
    if *seen_root {
        return Err(Error::malformed("document has more than one root element", None));
    }
    *seen_root = true;
    Ok(())
}

fn data_name(start: &BytesStart, index: usize) -> Result<String, Error> {
    let attr = start
        .try_get_attribute("name")
        .map_err(quick_xml::Error::from)?
        .ok_or(Error::MissingNameAttribute { index })?;
    let name = attr.unescape_value()?.into_owned();
    if name.trim().is_empty() {
        return Err(Error::EmptyResourceName { index });
    }
    Ok(name)
}

/// Consumes a `<data>` element up to and including its closing tag.
fn parse_data(
    start: &BytesStart,
    index: usize,
    reader: &mut Reader<&[u8]>,
) -> Result<ResourceEntry, Error> {
    let name = data_name(start, index)?;
    let mut value = None;
    let mut comment = None;
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if depth == 0 && e.name().as_ref() == VALUE {
                    let text = read_inner_text(reader)?;
                    value.get_or_insert(text);
                    continue;
                }
                if depth == 0 && e.name().as_ref() == COMMENT {
                    let text = read_inner_text(reader)?;
                    comment.get_or_insert(text);
                    continue;
                }
                depth += 1;
            }
            Event::Empty(e) if depth == 0 => match e.name().as_ref() {
                VALUE => {
                    value.get_or_insert_with(String::new);
                }
                COMMENT => {
                    comment.get_or_insert_with(String::new);
                }
                _ => {}
            },
            Event::End(_) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            Event::Eof => {
                return Err(Error::malformed(
                    format!("unexpected end of document inside resource `{name}`"),
                    None,
                ));
            }
            _ => {}
        }
    }

    let value = value.ok_or_else(|| Error::MissingValueElement { name: name.clone() })?;
    Ok(ResourceEntry {
        name,
        value,
        comment,
    })
}

/// Collects all text below the element just opened, consuming its closing tag.
fn read_inner_text(reader: &mut Reader<&[u8]>) -> Result<String, Error> {
    let mut text = String::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Text(e) => text.push_str(&e.unescape()?),
            Event::CData(e) => text.push_str(&String::from_utf8_lossy(&e)),
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                if depth == 0 {
                    return Ok(text);
                }
                depth -= 1;
            }
            Event::Eof => {
                return Err(Error::malformed(
                    "unexpected end of document inside element text",
                    None,
                ));
            }
            _ => {}
        }
    }
}
