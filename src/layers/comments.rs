//! Comment splitter
//!
//! Inserts one zero-width placeholder per distinct comment offset, grouping
//! every comment anchored there. The enclosing fragment is split around the
//! placeholder and the placeholder copies its marks, so styling is unchanged.

use crate::config::CommentOffsetPolicy;
use crate::models::{Comment, Fragment, Marks};
use std::collections::BTreeMap;

/// Comments grouped by anchor offset, each group free of duplicate ids
pub type CommentGroups = BTreeMap<usize, Vec<Comment>>;

/// Group comments by offset after applying the out-of-range policy
pub fn group_comments(
    comments: &[Comment],
    len: usize,
    policy: CommentOffsetPolicy,
) -> CommentGroups {
    let mut groups = CommentGroups::new();

    for comment in comments {
        let offset = match usize::try_from(comment.offset) {
            Ok(offset) if offset <= len => offset,
            _ => match policy {
                CommentOffsetPolicy::Clamp => {
                    let clamped = if comment.offset < 0 { 0 } else { len };
                    log::warn!(
                        "comment {} at offset {} is outside [0, {}], clamped to {}",
                        comment.id,
                        comment.offset,
                        len,
                        clamped
                    );
                    clamped
                }
                CommentOffsetPolicy::Drop => {
                    log::warn!(
                        "comment {} at offset {} is outside [0, {}], dropped",
                        comment.id,
                        comment.offset,
                        len
                    );
                    continue;
                }
            },
        };

        let group = groups.entry(offset).or_default();
        if group.iter().any(|existing| existing.id == comment.id) {
            log::debug!("duplicate comment {} at offset {} ignored", comment.id, offset);
            continue;
        }
        group.push(comment.clone());
    }

    groups
}

/// Split fragments at every comment offset and insert the placeholders.
///
/// Offsets are handed out in ascending order, so each one is placed exactly
/// once even when several fragments abut it: the first fragment whose span
/// reaches it claims it. Offsets left over after the last fragment (only
/// possible for an empty text) are appended.
pub fn split_comments(
    fragments: Vec<Fragment>,
    groups: CommentGroups,
    glyph: &str,
) -> Vec<Fragment> {
    let mut out = Vec::with_capacity(fragments.len() + groups.len() * 2);
    let mut pending = groups.into_iter().peekable();

    for fragment in fragments {
        if fragment.is_placeholder() {
            out.push(fragment);
            continue;
        }

        let mut cursor = fragment.start;
        while let Some((offset, _)) = pending.peek() {
            if *offset > fragment.end {
                break;
            }
            let Some((offset, comments)) = pending.next() else {
                break;
            };
            let offset = offset.max(cursor);
            if offset > cursor {
                out.push(fragment.slice(cursor, offset));
                cursor = offset;
            }
            out.push(Fragment::placeholder(glyph, offset, fragment.marks.clone(), comments));
        }

        if cursor == fragment.start {
            out.push(fragment);
        } else if cursor < fragment.end {
            out.push(fragment.slice(cursor, fragment.end));
        }
    }

    for (offset, comments) in pending {
        out.push(Fragment::placeholder(glyph, offset, Marks::default(), comments));
    }

    out
}
