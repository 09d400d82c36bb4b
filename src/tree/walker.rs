use std::io::Write;
use std::path::Path;

use crate::error::{Result, TreeError};

use super::entry::DirEntry;
use super::exclude::ExcludeSet;
use super::label::entry_label;
use super::lister::list_children;
use super::options::RenderOptions;

const TEE: &str = "├───";
const CORNER: &str = "└───";
const BRANCH_CONTINUATION: &str = "│\t";
const LAST_CONTINUATION: &str = "\t";

/// Per-level state threaded through the walk.
///
/// The prefix accumulates one connector fragment per ancestor level.
/// Each recursion derives a new extended copy, so sibling subtrees never
/// observe each other's prefixes.
#[derive(Debug, Clone)]
struct RenderContext {
    prefix: String,
    print_files: bool,
}

impl RenderContext {
    fn root(print_files: bool) -> Self {
        Self {
            prefix: String::new(),
            print_files,
        }
    }

    fn descend(&self, is_last: bool) -> Self {
        let continuation = if is_last {
            LAST_CONTINUATION
        } else {
            BRANCH_CONTINUATION
        };
        Self {
            prefix: format!("{}{}", self.prefix, continuation),
            print_files: self.print_files,
        }
    }
}

/// Render the subtree rooted at `path` into `out`, one line per visible
/// entry, depth-first. The root itself is not printed; output starts with
/// its children.
///
/// A listing failure anywhere in the subtree aborts the whole walk and is
/// reported for the offending path. Lines already written stay in the sink.
pub fn render_tree<W: Write>(
    out: &mut W,
    path: &Path,
    options: &RenderOptions,
    exclude: &ExcludeSet,
) -> Result<()> {
    let context = RenderContext::root(options.print_files);
    walk(out, path, &context, options, exclude)
}

fn walk<W: Write>(
    out: &mut W,
    path: &Path,
    context: &RenderContext,
    options: &RenderOptions,
    exclude: &ExcludeSet,
) -> Result<()> {
    let children = list_children(path, options.sort)?;
    let visible: Vec<&DirEntry> = children
        .iter()
        .filter(|child| !exclude.contains(&child.name))
        .collect();

    for (idx, child) in visible.iter().enumerate() {
        let is_last = is_last_visible(&visible, idx, context.print_files);

        if child.is_dir {
            emit(out, context, is_last, child)?;
            walk(
                out,
                &path.join(&child.name),
                &context.descend(is_last),
                options,
                exclude,
            )?;
        } else if context.print_files {
            emit(out, context, is_last, child)?;
        }
    }

    Ok(())
}

fn emit<W: Write>(
    out: &mut W,
    context: &RenderContext,
    is_last: bool,
    entry: &DirEntry,
) -> Result<()> {
    let glyph = if is_last { CORNER } else { TEE };
    writeln!(out, "{}{}{}", context.prefix, glyph, entry_label(entry)).map_err(TreeError::Write)
}

/// Decide whether the entry at `idx` is the last sibling that will actually
/// be drawn at this level.
///
/// With files printed the last listed entry terminates the level. Without
/// files the last directory does, even when files follow it in listing
/// order. A level with no directory marks nothing as last.
fn is_last_visible(siblings: &[&DirEntry], idx: usize, print_files: bool) -> bool {
    if print_files {
        return idx == siblings.len() - 1;
    }

    siblings[idx].is_dir && !siblings[idx + 1..].iter().any(|sibling| sibling.is_dir)
}
