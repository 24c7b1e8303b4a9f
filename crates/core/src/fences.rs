//! Code fence masking.
//!
//! The rewrite pipeline must never touch embed tags that appear inside
//! fenced code blocks (```` ``` ```` or `~~~`), where they are examples
//! rather than content. Before the HTML pass, fenced blocks are swapped
//! for comment placeholders; afterwards the placeholders are swapped
//! back, so fenced content is byte-identical across the pipeline.

/// Masked fence blocks, keyed by the placeholder that replaced them.
#[derive(Debug, Default)]
pub struct FenceMask {
    blocks: Vec<(String, String)>,
}

#[derive(Debug, Clone, Copy)]
struct OpenFence {
    marker: u8,
    length: usize,
}

/// Replaces fenced code blocks in `input` with comment placeholders.
///
/// Returns the masked text together with the [`FenceMask`] needed to
/// restore it. An unclosed fence is masked through end of input, with
/// a warning.
pub fn protect_fences(input: &str) -> (String, FenceMask) {
    let mut out = String::with_capacity(input.len());
    let mut blocks: Vec<(String, String)> = Vec::new();
    let mut open: Option<OpenFence> = None;
    let mut buf = String::new();
    let mut next_key = 0usize;

    // split_inclusive keeps line endings so masked blocks restore verbatim.
    for line in input.split_inclusive('\n') {
        match open {
            Some(fence) => {
                buf.push_str(line);
                if closes_fence(line, fence) {
                    let key = fresh_placeholder(input, &mut next_key);
                    out.push_str(&key);
                    blocks.push((key, std::mem::take(&mut buf)));
                    open = None;
                }
            }
            None => {
                if let Some(fence) = detect_opening_fence(line) {
                    open = Some(fence);
                    buf.push_str(line);
                } else {
                    out.push_str(line);
                }
            }
        }
    }

    if open.is_some() {
        log::warn!("unclosed code fence; masking through end of input");
        let key = fresh_placeholder(input, &mut next_key);
        out.push_str(&key);
        blocks.push((key, buf));
    }

    (out, FenceMask { blocks })
}

impl FenceMask {
    /// Restores masked fence blocks in rewritten text.
    pub fn restore(&self, input: &str) -> String {
        let mut restored = input.to_string();
        for (key, block) in &self.blocks {
            restored = restored.replacen(key.as_str(), block, 1);
        }
        restored
    }

    /// Number of masked blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether no blocks were masked.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

fn placeholder(idx: usize) -> String {
    format!("<!--mdlog:fence:{}-->", idx)
}

/// Picks the next placeholder whose text does not already occur in the
/// document, so authored content that spells out a placeholder cannot
/// hijack restore.
fn fresh_placeholder(input: &str, next: &mut usize) -> String {
    loop {
        let key = placeholder(*next);
        *next += 1;
        if !input.contains(&key) {
            return key;
        }
    }
}

/// CommonMark opener: 0-3 spaces of indent, then a run of 3+ backticks
/// or tildes. A backtick info string may not itself contain a backtick.
fn detect_opening_fence(line: &str) -> Option<OpenFence> {
    let text = line.trim_end_matches(['\n', '\r']);
    let (indent, rest) = split_indent(text);
    if indent > 3 {
        return None;
    }

    let marker = match rest.bytes().next() {
        Some(b @ (b'`' | b'~')) => b,
        _ => return None,
    };

    let length = rest.bytes().take_while(|&b| b == marker).count();
    if length < 3 {
        return None;
    }

    let info = &rest[length..];
    if marker == b'`' && info.contains('`') {
        return None;
    }

    Some(OpenFence { marker, length })
}

/// Closer: 0-3 spaces of indent, a run of the opening marker at least
/// as long as the opener, and nothing but whitespace after it.
fn closes_fence(line: &str, fence: OpenFence) -> bool {
    let text = line.trim_end_matches(['\n', '\r']);
    let (indent, rest) = split_indent(text);
    if indent > 3 {
        return false;
    }

    let run = rest.bytes().take_while(|&b| b == fence.marker).count();
    run >= fence.length && rest[run..].trim().is_empty()
}

fn split_indent(line: &str) -> (usize, &str) {
    let indent = line.bytes().take_while(|&b| b == b' ').count();
    (indent, &line[indent..])
}
