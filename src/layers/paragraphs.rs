//! Paragraph assembler
//!
//! Re-splits the final fragment stream at every `\n` of the flattened text
//! and builds the paragraph/leaf tree. The newline itself belongs to no leaf.

use crate::models::{DecoratedDocument, DecoratedParagraph, Fragment, Leaf, Marks};

struct Assembler {
    paragraphs: Vec<DecoratedParagraph>,
    current: Vec<Leaf>,
    /// Offset where the open paragraph starts
    paragraph_start: usize,
}

impl Assembler {
    fn new() -> Self {
        Self {
            paragraphs: Vec::new(),
            current: Vec::new(),
            paragraph_start: 0,
        }
    }

    fn push_text(&mut self, text: String, start: usize, end: usize, marks: &Marks) {
        if start < end {
            self.current.push(Leaf::new(text, start, end, marks.clone()));
        }
    }

    /// Close the open paragraph; the next one starts at `next_start`.
    ///
    /// A paragraph without a text leaf (empty, or holding only comment
    /// placeholders) gets an empty one so every offset has a text leaf.
    fn close(&mut self, next_start: usize) {
        let mut leaves = std::mem::take(&mut self.current);
        if leaves.iter().all(Leaf::is_placeholder) {
            let at = self.paragraph_start;
            leaves.push(Leaf::new(String::new(), at, at, Marks::default()));
        }
        self.paragraphs.push(DecoratedParagraph::new(leaves));
        self.paragraph_start = next_start;
    }

    fn finish(mut self) -> DecoratedDocument {
        let end = self.paragraph_start;
        self.close(end);
        DecoratedDocument::new(self.paragraphs)
    }
}

pub fn assemble_paragraphs(fragments: Vec<Fragment>) -> DecoratedDocument {
    let mut assembler = Assembler::new();

    for fragment in fragments {
        if fragment.is_placeholder() {
            assembler.current.push(Leaf {
                text: fragment.text,
                start: fragment.start,
                end: fragment.end,
                marks: fragment.marks,
                comments: fragment.comments,
            });
            continue;
        }

        if !fragment.text.contains('\n') {
            assembler.push_text(fragment.text, fragment.start, fragment.end, &fragment.marks);
            continue;
        }

        let mut piece = String::new();
        let mut piece_start = fragment.start;
        for (i, ch) in fragment.text.chars().enumerate() {
            let offset = fragment.start + i;
            if ch == '\n' {
                let text = std::mem::take(&mut piece);
                assembler.push_text(text, piece_start, offset, &fragment.marks);
                assembler.close(offset + 1);
                piece_start = offset + 1;
            } else {
                piece.push(ch);
            }
        }
        assembler.push_text(piece, piece_start, fragment.end, &fragment.marks);
    }

    assembler.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Span;

    #[test]
    fn test_split_on_newline_keeps_marks_and_offsets() {
        let fragments = vec![
            Fragment::new("ab\ncd".into(), 0, 5, Marks::with_color("red")),
            Fragment::new("e".into(), 5, 6, Marks::default()),
        ];
        let doc = assemble_paragraphs(fragments);
        assert_eq!(doc.paragraphs.len(), 2);
        let first = &doc.paragraphs[0].leaves;
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].span(), Span::new(0, 2));
        let second = &doc.paragraphs[1].leaves;
        assert_eq!(second[0].text, "cd");
        assert_eq!(second[0].span(), Span::new(3, 5));
        assert_eq!(second[0].marks.color.as_deref(), Some("red"));
        assert_eq!(second[1].span(), Span::new(5, 6));
    }

    #[test]
    fn test_empty_paragraph_gets_empty_leaf() {
        let fragments = vec![Fragment::new("a\n\nb".into(), 0, 4, Marks::default())];
        let doc = assemble_paragraphs(fragments);
        assert_eq!(doc.paragraphs.len(), 3);
        let middle = &doc.paragraphs[1].leaves;
        assert_eq!(middle.len(), 1);
        assert_eq!(middle[0].text, "");
        assert_eq!(middle[0].span(), Span::new(2, 2));
        assert_eq!(doc.plain_text(), "a\n\nb");
    }

    #[test]
    fn test_trailing_newline_opens_last_paragraph() {
        let fragments = vec![Fragment::new("a\n".into(), 0, 2, Marks::default())];
        let doc = assemble_paragraphs(fragments);
        assert_eq!(doc.paragraphs.len(), 2);
        assert_eq!(doc.paragraphs[1].leaves[0].span(), Span::new(2, 2));
    }

    #[test]
    fn test_placeholder_only_paragraph_gets_text_leaf() {
        let fragments = vec![
            Fragment::new("a\n".into(), 0, 2, Marks::default()),
            Fragment::placeholder("*", 2, Marks::default(), Vec::new()),
        ];
        let doc = assemble_paragraphs(fragments);
        let last = &doc.paragraphs[1].leaves;
        assert_eq!(last.len(), 2);
        assert!(last[0].is_placeholder());
        assert!(!last[1].is_placeholder());
        assert_eq!(last[1].span(), Span::new(2, 2));
    }

    #[test]
    fn test_no_fragments_is_one_empty_paragraph() {
        let doc = assemble_paragraphs(Vec::new());
        assert_eq!(doc.paragraphs.len(), 1);
        assert_eq!(doc.paragraphs[0].leaves.len(), 1);
        assert_eq!(doc.plain_text(), "");
    }
}
