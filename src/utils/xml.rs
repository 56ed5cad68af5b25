//! Small helpers over `quick_xml::Writer` for generated documents.

use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::io::Cursor;

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Writer with two-space indentation.
#[inline]
pub fn create_xml_writer() -> XmlWriter {
    Writer::new_with_indent(Cursor::new(Vec::with_capacity(4096)), b' ', 2)
}

/// Write the `<?xml version="1.0" encoding="UTF-8"?>` declaration.
#[inline]
pub fn write_decl(writer: &mut XmlWriter) -> Result<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    Ok(())
}

/// Write a start tag with attributes: `<tag attr1="val1" ...>`.
#[inline]
pub fn write_start(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Start(elem))?;
    Ok(())
}

#[inline]
pub fn write_end(writer: &mut XmlWriter, tag: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write a text element: `<tag>text</tag>`.
#[inline]
pub fn write_text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write an empty element with attributes: `<tag attr1="val1" ... />`.
#[inline]
pub fn write_empty_elem(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// Consume the writer and return the document as a string.
pub fn finish(writer: XmlWriter) -> String {
    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut XmlWriter) -> Result<()>) -> String {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        f(&mut writer).unwrap();
        finish(writer)
    }

    #[test]
    fn test_write_text_element_escapes() {
        let out = render(|w| write_text_element(w, "loc", "https://e.com/?a=1&b=<2>"));
        assert_eq!(out, "<loc>https://e.com/?a=1&amp;b=&lt;2&gt;</loc>");
    }

    #[test]
    fn test_write_empty_elem_attributes() {
        let out = render(|w| write_empty_elem(w, "xhtml:link", &[("rel", "alternate"), ("hreflang", "ja")]));
        assert_eq!(out, r#"<xhtml:link rel="alternate" hreflang="ja"/>"#);
    }

    #[test]
    fn test_write_start_and_end() {
        let out = render(|w| {
            write_start(w, "urlset", &[("xmlns", "ns")])?;
            write_end(w, "urlset")
        });
        assert_eq!(out, r#"<urlset xmlns="ns"></urlset>"#);
    }

    #[test]
    fn test_write_decl() {
        let out = render(write_decl);
        assert_eq!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    }
}
