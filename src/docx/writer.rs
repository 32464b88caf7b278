//! DOCX package writer.
//!
//! Serializes a [`Document`] into the OOXML package format: a ZIP archive
//! whose fixed packaging parts (content types, relationships, numbering)
//! are emitted verbatim and whose per-document parts (`styles.xml`,
//! `document.xml`) are generated from the model.

use std::io::{self, Seek, Write};
use std::path::Path;

use quick_xml::Writer as XmlWriter;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::Result;

use super::document::{Body, Document, ListStyle, Table};

/// WordprocessingML main namespace.
const WPML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Write a [`Document`] to a DOCX file on disk.
///
/// The output is overwritten unconditionally if it already exists.
///
/// # Example
///
/// ```no_run
/// use mdox::{Document, write_docx};
///
/// let mut doc = Document::new();
/// doc.add_heading("My Notes", 0);
/// write_docx(&doc, "notes.docx")?;
/// # Ok::<(), mdox::Error>(())
/// ```
pub fn write_docx<P: AsRef<Path>>(doc: &Document, path: P) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_docx_to_writer(doc, file)
}

/// Write a [`Document`] to any [`Write`] + [`Seek`] destination.
///
/// Useful for writing to memory buffers.
pub fn write_docx_to_writer<W: Write + Seek>(doc: &Document, writer: W) -> Result<()> {
    let mut zip = ZipWriter::new(writer);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(CONTENT_TYPES_XML.as_bytes())?;

    zip.start_file("_rels/.rels", options)?;
    zip.write_all(ROOT_RELS_XML.as_bytes())?;

    zip.start_file("word/_rels/document.xml.rels", options)?;
    zip.write_all(DOCUMENT_RELS_XML.as_bytes())?;

    zip.start_file("word/styles.xml", options)?;
    zip.write_all(generate_styles(doc).as_bytes())?;

    zip.start_file("word/numbering.xml", options)?;
    zip.write_all(NUMBERING_XML.as_bytes())?;

    let document = generate_document(doc)?;
    zip.start_file("word/document.xml", options)?;
    zip.write_all(&document)?;

    zip.finish()?;
    Ok(())
}

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
  <Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/>
</Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/>
</Relationships>"#;

/// Bullet (numId 1) and decimal (numId 2) numbering definitions backing
/// the `ListBullet` and `ListNumber` paragraph styles.
const NUMBERING_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:abstractNum w:abstractNumId="0">
    <w:lvl w:ilvl="0">
      <w:start w:val="1"/>
      <w:numFmt w:val="bullet"/>
      <w:lvlText w:val="&#8226;"/>
      <w:lvlJc w:val="left"/>
      <w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr>
    </w:lvl>
  </w:abstractNum>
  <w:abstractNum w:abstractNumId="1">
    <w:lvl w:ilvl="0">
      <w:start w:val="1"/>
      <w:numFmt w:val="decimal"/>
      <w:lvlText w:val="%1."/>
      <w:lvlJc w:val="left"/>
      <w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr>
    </w:lvl>
  </w:abstractNum>
  <w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>
  <w:num w:numId="2"><w:abstractNumId w:val="1"/></w:num>
</w:numbering>"#;

/// Generate `word/styles.xml` with the document's default font and the
/// paragraph/table styles the body can reference.
fn generate_styles(doc: &Document) -> String {
    let font = escape_xml(&doc.font_family);
    // OOXML measures font sizes in half-points.
    let size = doc.font_size_pt * 2;

    let mut styles = String::new();
    styles.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n");
    styles.push_str(&format!("<w:styles xmlns:w=\"{}\">\n", WPML_NS));

    styles.push_str(&format!(
        r#"  <w:docDefaults>
    <w:rPrDefault>
      <w:rPr>
        <w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:cs="{font}"/>
        <w:sz w:val="{size}"/>
        <w:szCs w:val="{size}"/>
      </w:rPr>
    </w:rPrDefault>
    <w:pPrDefault/>
  </w:docDefaults>
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
  </w:style>
"#
    ));

    styles.push_str(
        r#"  <w:style w:type="paragraph" w:styleId="Title">
    <w:name w:val="Title"/>
    <w:basedOn w:val="Normal"/>
    <w:pPr><w:spacing w:after="240"/></w:pPr>
    <w:rPr><w:b/><w:sz w:val="56"/><w:szCs w:val="56"/></w:rPr>
  </w:style>
"#,
    );

    // Heading1-Heading3, descending size, each tagged with its outline
    // level for the navigation pane.
    for (level, half_points) in [(1u8, 32u32), (2, 28), (3, 24)] {
        styles.push_str(&format!(
            r#"  <w:style w:type="paragraph" w:styleId="Heading{level}">
    <w:name w:val="heading {level}"/>
    <w:basedOn w:val="Normal"/>
    <w:pPr><w:spacing w:before="240" w:after="120"/><w:outlineLvl w:val="{outline}"/></w:pPr>
    <w:rPr><w:b/><w:sz w:val="{half_points}"/><w:szCs w:val="{half_points}"/></w:rPr>
  </w:style>
"#,
            outline = level - 1,
        ));
    }

    styles.push_str(
        r#"  <w:style w:type="paragraph" w:styleId="ListBullet">
    <w:name w:val="List Bullet"/>
    <w:basedOn w:val="Normal"/>
    <w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr></w:pPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="ListNumber">
    <w:name w:val="List Number"/>
    <w:basedOn w:val="Normal"/>
    <w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="2"/></w:numPr></w:pPr>
  </w:style>
  <w:style w:type="table" w:styleId="TableGrid">
    <w:name w:val="Table Grid"/>
    <w:tblPr>
      <w:tblBorders>
        <w:top w:val="single" w:sz="4" w:space="0" w:color="auto"/>
        <w:left w:val="single" w:sz="4" w:space="0" w:color="auto"/>
        <w:bottom w:val="single" w:sz="4" w:space="0" w:color="auto"/>
        <w:right w:val="single" w:sz="4" w:space="0" w:color="auto"/>
        <w:insideH w:val="single" w:sz="4" w:space="0" w:color="auto"/>
        <w:insideV w:val="single" w:sz="4" w:space="0" w:color="auto"/>
      </w:tblBorders>
    </w:tblPr>
  </w:style>
</w:styles>
"#,
    );

    styles
}

/// Generate `word/document.xml` from the document body.
fn generate_document(doc: &Document) -> io::Result<Vec<u8>> {
    let mut writer = XmlWriter::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    let mut root = BytesStart::new("w:document");
    root.push_attribute(("xmlns:w", WPML_NS));
    writer.write_event(Event::Start(root))?;
    writer.write_event(Event::Start(BytesStart::new("w:body")))?;

    for item in &doc.body {
        match item {
            Body::Heading { text, level } => {
                write_paragraph(&mut writer, text, Some(heading_style(*level)), None)?;
            }
            Body::Paragraph { text, style } => {
                let (style_id, num_id) = match style {
                    Some(ListStyle::Bulleted) => (Some("ListBullet"), Some(1)),
                    Some(ListStyle::Numbered) => (Some("ListNumber"), Some(2)),
                    None => (None, None),
                };
                write_paragraph(&mut writer, text, style_id, num_id)?;
            }
            Body::Table(table) => write_table(&mut writer, table)?,
        }
    }

    write_section_props(&mut writer)?;

    writer.write_event(Event::End(BytesEnd::new("w:body")))?;
    writer.write_event(Event::End(BytesEnd::new("w:document")))?;
    Ok(writer.into_inner())
}

/// Map a heading level to its paragraph style.
fn heading_style(level: u8) -> &'static str {
    match level {
        0 => "Title",
        1 => "Heading1",
        2 => "Heading2",
        _ => "Heading3",
    }
}

fn write_paragraph<W: io::Write>(
    writer: &mut XmlWriter<W>,
    text: &str,
    style_id: Option<&str>,
    num_id: Option<u32>,
) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new("w:p")))?;

    if style_id.is_some() || num_id.is_some() {
        writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;
        if let Some(style_id) = style_id {
            let mut style = BytesStart::new("w:pStyle");
            style.push_attribute(("w:val", style_id));
            writer.write_event(Event::Empty(style))?;
        }
        if let Some(num_id) = num_id {
            writer.write_event(Event::Start(BytesStart::new("w:numPr")))?;
            let mut ilvl = BytesStart::new("w:ilvl");
            ilvl.push_attribute(("w:val", "0"));
            writer.write_event(Event::Empty(ilvl))?;
            let value = num_id.to_string();
            let mut num = BytesStart::new("w:numId");
            num.push_attribute(("w:val", value.as_str()));
            writer.write_event(Event::Empty(num))?;
            writer.write_event(Event::End(BytesEnd::new("w:numPr")))?;
        }
        writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;
    }

    write_run(writer, text)?;
    writer.write_event(Event::End(BytesEnd::new("w:p")))?;
    Ok(())
}

fn write_run<W: io::Write>(writer: &mut XmlWriter<W>, text: &str) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new("w:r")))?;

    let mut t = BytesStart::new("w:t");
    // Word strips unprotected edge whitespace when reloading the part.
    if text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace) {
        t.push_attribute(("xml:space", "preserve"));
    }
    writer.write_event(Event::Start(t))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new("w:t")))?;

    writer.write_event(Event::End(BytesEnd::new("w:r")))?;
    Ok(())
}

fn write_table<W: io::Write>(writer: &mut XmlWriter<W>, table: &Table) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new("w:tbl")))?;

    writer.write_event(Event::Start(BytesStart::new("w:tblPr")))?;
    let mut style = BytesStart::new("w:tblStyle");
    style.push_attribute(("w:val", "TableGrid"));
    writer.write_event(Event::Empty(style))?;
    let mut width = BytesStart::new("w:tblW");
    width.push_attribute(("w:w", "0"));
    width.push_attribute(("w:type", "auto"));
    writer.write_event(Event::Empty(width))?;
    writer.write_event(Event::End(BytesEnd::new("w:tblPr")))?;

    writer.write_event(Event::Start(BytesStart::new("w:tblGrid")))?;
    for _ in 0..table.cols() {
        writer.write_event(Event::Empty(BytesStart::new("w:gridCol")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("w:tblGrid")))?;

    for row in table.rows() {
        writer.write_event(Event::Start(BytesStart::new("w:tr")))?;
        for cell in row {
            writer.write_event(Event::Start(BytesStart::new("w:tc")))?;
            // Every cell must contain at least one paragraph.
            write_paragraph(writer, cell, None, None)?;
            writer.write_event(Event::End(BytesEnd::new("w:tc")))?;
        }
        writer.write_event(Event::End(BytesEnd::new("w:tr")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("w:tbl")))?;
    Ok(())
}

/// Letter-size page with one-inch margins.
fn write_section_props<W: io::Write>(writer: &mut XmlWriter<W>) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new("w:sectPr")))?;

    let mut size = BytesStart::new("w:pgSz");
    size.push_attribute(("w:w", "12240"));
    size.push_attribute(("w:h", "15840"));
    writer.write_event(Event::Empty(size))?;

    let mut margins = BytesStart::new("w:pgMar");
    for side in ["w:top", "w:right", "w:bottom", "w:left"] {
        margins.push_attribute((side, "1440"));
    }
    writer.write_event(Event::Empty(margins))?;

    writer.write_event(Event::End(BytesEnd::new("w:sectPr")))?;
    Ok(())
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
