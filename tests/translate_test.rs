//! Translation tests: classified blocks and the builder calls they issue.
//!
//! These exercise the public API end to end at the in-memory level; the
//! DOCX packaging itself is covered by `docx_test.rs`.

use mdox::{Block, Blocks, Body, ListStyle, convert_text};

fn blocks(text: &str) -> Vec<Block<'_>> {
    Blocks::new(text).collect()
}

// ============================================================================
// Block grouping
// ============================================================================

#[test]
fn test_title_and_paragraph() {
    let doc = convert_text("# Title\n\nSome text.\n");
    assert_eq!(
        doc.body,
        vec![
            Body::Heading {
                text: "Title".into(),
                level: 0
            },
            Body::Paragraph {
                text: "Some text.".into(),
                style: None
            },
        ]
    );
}

#[test]
fn test_heading_levels_map_to_hash_counts() {
    let doc = convert_text("# a\n## b\n### c\n#### d\n");
    let levels: Vec<u8> = doc
        .body
        .iter()
        .map(|item| match item {
            Body::Heading { level, .. } => *level,
            other => panic!("expected heading, got {other:?}"),
        })
        .collect();
    assert_eq!(levels, vec![0, 1, 2, 3]);
}

#[test]
fn test_bulleted_list() {
    let doc = convert_text("- one\n- two\n");
    assert_eq!(
        doc.body,
        vec![
            Body::Paragraph {
                text: "one".into(),
                style: Some(ListStyle::Bulleted)
            },
            Body::Paragraph {
                text: "two".into(),
                style: Some(ListStyle::Bulleted)
            },
        ]
    );
}

#[test]
fn test_numbered_list() {
    let doc = convert_text("1. first\n2. second\n10. tenth\n");
    assert!(doc.body.iter().all(|item| matches!(
        item,
        Body::Paragraph {
            style: Some(ListStyle::Numbered),
            ..
        }
    )));
    assert_eq!(doc.body.len(), 3);
}

#[test]
fn test_blank_run_produces_single_paragraph() {
    let doc = convert_text("\n\n\n\nOnly paragraph.\n\n\n");
    assert_eq!(doc.body.len(), 1);
}

// ============================================================================
// Tables
// ============================================================================

#[test]
fn test_basic_table_with_separator() {
    let doc = convert_text("| A | B |\n|---|---|\n| 1 | 2 |\n");

    assert_eq!(doc.body.len(), 1);
    let Body::Table(table) = &doc.body[0] else {
        panic!("expected table, got {:?}", doc.body[0]);
    };
    assert_eq!(table.cols(), 2);
    assert_eq!(
        table.rows(),
        &[
            vec!["A".to_string(), "B".to_string()],
            vec!["1".to_string(), "2".to_string()],
        ]
    );
}

#[test]
fn test_separator_after_n_rows_contributes_nothing() {
    // N rows, separator, M rows: one block with N + M data rows.
    let text = "| h1 | h2 |\n| a | b |\n|---|---|\n| c | d |\n| e | f |\n| g | h |\n";
    let grouped = blocks(text);
    assert_eq!(grouped.len(), 1);
    let Block::Table(rows) = &grouped[0] else {
        panic!("expected table");
    };
    assert_eq!(rows.len(), 5);
}

#[test]
fn test_table_consumed_greedily_until_non_table_line() {
    let doc = convert_text("| A | B |\n| 1 | 2 |\ntrailing text\n");
    assert_eq!(doc.body.len(), 2);
    assert!(matches!(&doc.body[0], Body::Table(_)));
    assert_eq!(
        doc.body[1],
        Body::Paragraph {
            text: "trailing text".into(),
            style: None
        }
    );
}

#[test]
fn test_blank_splits_tables() {
    let doc = convert_text("| A |B |\n\n| C | D |\n");
    assert_eq!(doc.body.len(), 2);
    assert!(doc.body.iter().all(|b| matches!(b, Body::Table(_))));
}

#[test]
fn test_pipe_without_second_pipe_is_a_paragraph() {
    let doc = convert_text("| not a table\n");
    assert_eq!(
        doc.body,
        vec![Body::Paragraph {
            text: "| not a table".into(),
            style: None
        }]
    );
}

// ============================================================================
// Mixed documents
// ============================================================================

#[test]
fn test_mixed_document_preserves_order() {
    let text = "\
# Report

Intro paragraph.

## Data

| k | v |
|---|---|
| a | 1 |

- point one
- point two

---

1. step
";
    let doc = convert_text(text);

    let kinds: Vec<&str> = doc
        .body
        .iter()
        .map(|item| match item {
            Body::Heading { .. } => "heading",
            Body::Paragraph { style: None, .. } => "paragraph",
            Body::Paragraph {
                style: Some(ListStyle::Bulleted),
                ..
            } => "bullet",
            Body::Paragraph {
                style: Some(ListStyle::Numbered),
                ..
            } => "numbered",
            Body::Table(_) => "table",
        })
        .collect();

    assert_eq!(
        kinds,
        vec![
            "heading",
            "paragraph",
            "heading",
            "table",
            "bullet",
            "bullet",
            "paragraph", // the rule renders as a separator paragraph
            "numbered",
        ]
    );
}

#[test]
fn test_conversion_is_deterministic() {
    let text = "# T\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n- x\n";
    assert_eq!(convert_text(text), convert_text(text));
    assert_eq!(blocks(text), blocks(text));
}

#[test]
fn test_empty_input_produces_empty_body() {
    assert!(convert_text("").body.is_empty());
    assert!(convert_text("\n\n\n").body.is_empty());
}
