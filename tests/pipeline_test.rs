// Forward pipeline scenarios: base text + layers -> decorated document

use annotation_layers_wasm::edit::locate;
use annotation_layers_wasm::{
    apply_layers, BaseLeaf, BaseParagraph, BaseText, ColorOverlapPolicy, Comment, CommentPayload,
    DecoratedDocument, DiffRange, EngineConfig, FlatText, Highlight, Layer, LayerError, LayerInputs,
    Leaf, Span,
};

fn render(
    text: &str,
    highlights: &[Highlight],
    comments: &[Comment],
    diffs: &[DiffRange],
) -> DecoratedDocument {
    let flat = FlatText::from_plain(text);
    apply_layers(&flat, LayerInputs::new(highlights, comments, diffs), &EngineConfig::default())
        .expect("pipeline should succeed")
}

fn comment(id: &str, offset: i64) -> Comment {
    Comment::new(id, offset, CommentPayload::new("coder-1", "see here"))
}

fn leaf_at(doc: &DecoratedDocument, span: Span) -> &Leaf {
    doc.leaves()
        .find(|leaf| !leaf.is_placeholder() && leaf.span() == span)
        .unwrap_or_else(|| panic!("no leaf at {}", span))
}

#[test]
fn test_bold_and_underline_stack() {
    let doc = render(
        "hello world",
        &[Highlight::new(Layer::Bold, 0, 5), Highlight::new(Layer::Underline, 3, 8)],
        &[],
        &[],
    );

    let both = leaf_at(&doc, Span::new(3, 5));
    assert!(both.marks.bold && both.marks.underline);
    assert!(leaf_at(&doc, Span::new(0, 3)).marks.bold);
    assert!(!leaf_at(&doc, Span::new(0, 3)).marks.underline);
    assert!(leaf_at(&doc, Span::new(5, 8)).marks.underline);
    assert!(!leaf_at(&doc, Span::new(5, 8)).marks.bold);
    assert_eq!(doc.plain_text(), "hello world");
}

#[test]
fn test_all_three_styles_over_a_color() {
    let doc = render(
        "abcdefgh",
        &[
            Highlight::color("#ffd400", 1, 7),
            Highlight::new(Layer::Italic, 2, 6),
            Highlight::new(Layer::Bold, 3, 5),
            Highlight::new(Layer::Underline, 4, 8),
        ],
        &[],
        &[],
    );

    let center = leaf_at(&doc, Span::new(4, 5));
    assert_eq!(center.marks.color.as_deref(), Some("#ffd400"));
    assert!(center.marks.italic && center.marks.bold && center.marks.underline);
    let tail = leaf_at(&doc, Span::new(7, 8));
    assert_eq!(tail.marks.color, None);
    assert!(tail.marks.underline);
}

#[test]
fn test_diff_tagging_keeps_color() {
    let doc = render("abcdefghij", &[Highlight::color("red", 0, 6)], &[], &[DiffRange::new(2, 4)]);

    let tagged = leaf_at(&doc, Span::new(2, 4));
    assert!(tagged.marks.is_diff);
    assert_eq!(tagged.marks.color.as_deref(), Some("red"));
    for span in [Span::new(0, 2), Span::new(4, 6)] {
        let leaf = leaf_at(&doc, span);
        assert!(!leaf.marks.is_diff);
        assert_eq!(leaf.marks.color.as_deref(), Some("red"));
    }
    assert!(!leaf_at(&doc, Span::new(6, 10)).marks.is_diff);
}

#[test]
fn test_overlapping_diff_ranges() {
    let doc = render("abcdefghij", &[], &[], &[DiffRange::new(1, 5), DiffRange::new(3, 8)]);
    let tagged: Vec<_> = doc.leaves().filter(|l| l.marks.is_diff).map(|l| l.span()).collect();
    assert_eq!(tagged, vec![Span::new(1, 3), Span::new(3, 5), Span::new(5, 8)]);
}

#[test]
fn test_comment_at_start_and_end() {
    let doc = render("0123456789", &[], &[comment("first", 0), comment("last", 10)], &[]);

    let leaves: Vec<_> = doc.leaves().collect();
    assert!(leaves.first().unwrap().is_placeholder());
    assert_eq!(leaves.first().unwrap().start, 0);
    assert!(leaves.last().unwrap().is_placeholder());
    assert_eq!(leaves.last().unwrap().start, 10);
    assert_eq!(doc.placeholders().count(), 2);
}

#[test]
fn test_comments_grouped_at_one_offset() {
    let doc = render(
        "hello world",
        &[Highlight::color("red", 0, 5), Highlight::color("blue", 5, 11)],
        &[comment("a", 5), comment("b", 5), comment("c", 5)],
        &[],
    );

    let markers: Vec<_> = doc.placeholders().collect();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].start, 5);
    assert_eq!(markers[0].comments.as_ref().map(Vec::len), Some(3));
    assert_eq!(doc.plain_text(), "hello world");
}

#[test]
fn test_comment_inside_style_keeps_styling() {
    let doc = render("abcdef", &[Highlight::new(Layer::Bold, 0, 6)], &[comment("x", 3)], &[]);
    let leaves: Vec<_> = doc.leaves().collect();
    assert_eq!(leaves.len(), 3);
    assert!(leaves.iter().all(|l| l.marks.bold));
    assert!(leaves[1].is_placeholder());
}

#[test]
fn test_comment_offsets_clamped() {
    let doc = render("abc", &[], &[comment("before", -4), comment("after", 40)], &[]);
    let offsets: Vec<_> = doc.placeholders().map(|l| l.start).collect();
    assert_eq!(offsets, vec![0, 3]);
}

#[test]
fn test_paragraphs_follow_base_text() {
    let base = BaseText::new(vec![
        BaseParagraph::new(vec![BaseLeaf::new("First "), BaseLeaf::new("para.")]),
        BaseParagraph::new(vec![]),
        BaseParagraph::new(vec![BaseLeaf::new("Third.")]),
    ]);
    let flat = FlatText::normalize(&base);
    assert_eq!(flat.as_string(), "First para.\n\nThird.");

    let highlights = vec![Highlight::color("green", 6, 19)];
    let inputs = LayerInputs::new(&highlights, &[], &[]);
    let doc = apply_layers(&flat, inputs, &EngineConfig::default()).unwrap();

    assert_eq!(doc.paragraphs.len(), 3);
    assert_eq!(doc.paragraphs[0].plain_text(), "First para.");
    assert_eq!(doc.paragraphs[1].plain_text(), "");
    assert_eq!(doc.paragraphs[2].plain_text(), "Third.");
    let third = &doc.paragraphs[2].leaves[0];
    assert_eq!(third.span(), Span::new(13, 19));
    assert_eq!(third.marks.color.as_deref(), Some("green"));
}

#[test]
fn test_comment_at_paragraph_start() {
    let doc = render("ab\ncd", &[], &[comment("p2", 3)], &[]);
    assert_eq!(doc.paragraphs.len(), 2);
    assert!(doc.paragraphs[1].leaves[0].is_placeholder());
    assert_eq!(doc.paragraphs[1].leaves[1].text, "cd");
}

#[test]
fn test_comment_at_paragraph_end() {
    let doc = render("ab\ncd", &[], &[comment("p1", 2)], &[]);
    let first = &doc.paragraphs[0].leaves;
    assert_eq!(first.len(), 2);
    assert!(first[1].is_placeholder());
    assert_eq!(doc.paragraphs[1].leaves.len(), 1);
}

#[test]
fn test_empty_text() {
    let doc = render("", &[], &[comment("only", 0)], &[]);
    assert_eq!(doc.paragraphs.len(), 1);
    assert_eq!(doc.placeholders().count(), 1);
    assert_eq!(doc.plain_text(), "");
}

#[test]
fn test_every_offset_locates_with_trailing_comments() {
    let doc = render(
        "ç bçbççb\n\n",
        &[],
        &[comment("a", -1), comment("b", 7), comment("c", 9), comment("d", 9)],
        &[],
    );
    assert_eq!(doc.paragraphs.len(), 3);
    assert!(doc.paragraphs[2].leaves.iter().any(|leaf| !leaf.is_placeholder()));
    for offset in 0..=10 {
        assert!(locate(&doc, offset).is_some(), "offset {}", offset);
    }
    assert!(locate(&doc, 11).is_none());
}

#[test]
fn test_empty_text_with_comment_locates_zero() {
    let doc = render("", &[], &[comment("only", 0)], &[]);
    let found = locate(&doc, 0).expect("offset 0 is in range");
    assert_eq!(found.paragraph, 0);
    assert!(!doc.paragraphs[0].leaves[found.leaf].is_placeholder());
}

#[test]
fn test_zero_length_highlights_dropped() {
    let doc = render(
        "abc",
        &[Highlight::color("red", 2, 2), Highlight::new(Layer::Bold, 3, 1)],
        &[],
        &[],
    );
    assert_eq!(doc.leaves().count(), 1);
    assert_eq!(doc.paragraphs[0].leaves[0].marks, Default::default());
}

#[test]
fn test_highlight_past_end_is_rejected() {
    let flat = FlatText::from_plain("abc");
    let highlights = vec![Highlight::new(Layer::Italic, 0, 4)];
    let inputs = LayerInputs::new(&highlights, &[], &[]);
    let err = apply_layers(&flat, inputs, &EngineConfig::default()).unwrap_err();
    assert!(matches!(err, LayerError::OutOfBounds { end: 4, len: 3, .. }));
}

#[test]
fn test_overlap_reject_policy() {
    let flat = FlatText::from_plain("abcdef");
    let config = EngineConfig {
        color_overlap: ColorOverlapPolicy::Reject,
        ..EngineConfig::default()
    };
    let highlights = vec![Highlight::color("red", 0, 4), Highlight::color("blue", 2, 6)];
    let err = apply_layers(&flat, LayerInputs::new(&highlights, &[], &[]), &config).unwrap_err();
    assert!(matches!(err, LayerError::OverlappingColors { .. }));
}

#[test]
fn test_overlap_last_write_wins() {
    let doc = render(
        "abcdef",
        &[Highlight::color("red", 0, 4), Highlight::color("blue", 2, 6)],
        &[],
        &[],
    );
    assert_eq!(leaf_at(&doc, Span::new(0, 2)).marks.color.as_deref(), Some("red"));
    assert_eq!(leaf_at(&doc, Span::new(2, 6)).marks.color.as_deref(), Some("blue"));
}

#[test]
fn test_custom_placeholder_glyph() {
    let flat = FlatText::from_plain("abc");
    let config = EngineConfig {
        placeholder_glyph: "†".to_string(),
        ..EngineConfig::default()
    };
    let comments = vec![comment("x", 1)];
    let doc = apply_layers(&flat, LayerInputs::new(&[], &comments, &[]), &config).unwrap();
    assert_eq!(doc.placeholders().next().map(|l| l.text.as_str()), Some("†"));
}
