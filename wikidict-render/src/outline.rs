//! Sense outlines: senses grouped into a nested list by shared gloss prefix.
//!
//! Senses are ordered gloss lists that refine a meaning step by step. Two
//! senses that start with the same gloss share one list item, under which
//! their diverging refinements are listed. Grouping is applied recursively,
//! one gloss position per level.

use wikidict_model::Sense;

use crate::escape::escape_text;
use crate::RenderError;

/// Deepest outline level rendered before the entry is rejected.
///
/// Real senses are a handful of glosses deep. Grouping recurses once per
/// level on the caller's stack, so a corrupt record with an enormous gloss
/// list is rejected here instead of overflowing a worker thread's stack.
pub const MAX_OUTLINE_DEPTH: usize = 1024;

/// One list item of a sense outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode<'a> {
    /// Shared gloss of the grouped senses; `None` for an absent gloss.
    pub gloss: Option<&'a str>,
    pub children: Vec<OutlineNode<'a>>,
}

/// Groups senses into an outline.
pub fn build_outline(senses: &[Sense]) -> Result<Vec<OutlineNode<'_>>, RenderError> {
    let members: Vec<&Sense> = senses.iter().collect();
    group_at(&members, 0)
}

fn group_at<'a>(members: &[&'a Sense], depth: usize) -> Result<Vec<OutlineNode<'a>>, RenderError> {
    // A branch stops at the shallowest member's gloss count.
    let Some(shallowest) = members.iter().map(|s| s.len()).min() else {
        return Ok(Vec::new());
    };
    if depth >= shallowest {
        return Ok(Vec::new());
    }
    if depth >= MAX_OUTLINE_DEPTH {
        return Err(RenderError::OutlineTooDeep { depth });
    }

    let mut groups: Vec<(Option<&'a str>, Vec<&'a Sense>)> = Vec::new();
    for &sense in members {
        let key = sense.gloss(depth);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, bucket)) => bucket.push(sense),
            None => groups.push((key, vec![sense])),
        }
    }

    groups
        .into_iter()
        .map(|(gloss, group_members)| {
            Ok(OutlineNode {
                gloss,
                children: group_at(&group_members, depth + 1)?,
            })
        })
        .collect()
}

/// Writes an outline as nested ordered lists. An empty outline writes nothing.
pub fn write_outline(out: &mut String, nodes: &[OutlineNode<'_>]) {
    if nodes.is_empty() {
        return;
    }
    out.push_str("<ol>");
    for node in nodes {
        out.push_str("<li>");
        if let Some(gloss) = node.gloss {
            out.push_str(&escape_text(gloss));
        }
        write_outline(out, &node.children);
        out.push_str("</li>");
    }
    out.push_str("</ol>");
}
