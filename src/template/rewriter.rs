//! Token Rewriter
//!
//! Template text is parsed into a sequence of text runs and named slots,
//! then rendered against a [`Config`]. Parsing happens in two passes:
//!
//! 1. Region collapse: each `begin ... end` marker block (plus the newline
//!    after the end marker) becomes a region slot. This is what lets a
//!    previously generated file be regenerated.
//! 2. Literal tokens: each token in [`LITERAL_TOKENS`], in order, is split
//!    out of the remaining text runs.
//!
//! Slots are never rescanned, so rendered snippets cannot be mistaken for
//! tokens.

use crate::codegen::{
    cuda_buffer_declarations, cuda_buffer_init, metal_buffer_declarations, metal_buffer_init,
    Region,
};
use crate::config::Config;

/// A substitution point in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Decimal sample rate.
    SampleRate,
    /// Bare class name.
    Name,
    /// A marker-delimited block, rendered with its markers.
    Region(Region),
}

/// Literal tokens, in substitution order.
///
/// The sample rate token has no leading `__`, unlike the others.
pub const LITERAL_TOKENS: [(&str, Slot); 6] = [
    ("gpuagen.tok.SAMPLERATE", Slot::SampleRate),
    ("__gpuagen.tok.NAME", Slot::Name),
    (
        "__gpuagen.tok.BUFFER_HEADER",
        Slot::Region(Region::CudaBufferHeader),
    ),
    (
        "__gpuagen.tok.BUFFER_INIT",
        Slot::Region(Region::CudaBufferInit),
    ),
    (
        "__gpuagen.tok.metal.BUFFER_HEADER",
        Slot::Region(Region::MetalBufferHeader),
    ),
    (
        "__gpuagen.tok.metal.BUFFER_INIT",
        Slot::Region(Region::MetalBufferInit),
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Slot(Slot),
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(text: &str) -> Self {
        let mut segments = vec![Segment::Text(text.to_string())];

        for region in Region::ALL {
            segments = split_text(segments, |run| collapse_regions(run, region));
        }
        for (token, slot) in LITERAL_TOKENS {
            segments = split_text(segments, |run| split_token(run, token, slot));
        }

        Self { segments }
    }

    /// Slots in the order they appear.
    pub fn slots(&self) -> Vec<Slot> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Slot(slot) => Some(*slot),
                Segment::Text(_) => None,
            })
            .collect()
    }

    pub fn render(&self, config: &Config) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Slot(slot) => out.push_str(&render_slot(*slot, config)),
            }
        }
        out
    }
}

fn render_slot(slot: Slot, config: &Config) -> String {
    match slot {
        Slot::SampleRate => config.parameters.samplerate.to_string(),
        Slot::Name => config.parameters.classname.clone(),
        Slot::Region(Region::CudaBufferHeader) => cuda_buffer_declarations(config),
        Slot::Region(Region::CudaBufferInit) => cuda_buffer_init(config),
        Slot::Region(Region::MetalBufferHeader) => metal_buffer_declarations(config),
        Slot::Region(Region::MetalBufferInit) => metal_buffer_init(config),
        Slot::Region(Region::Name) => format!(
            "{}\n{}\n{}\n",
            Region::Name.begin_marker(),
            config.parameters.classname,
            Region::Name.end_marker()
        ),
    }
}

/// Apply `split` to every text run, leaving slots untouched.
fn split_text<F>(segments: Vec<Segment>, mut split: F) -> Vec<Segment>
where
    F: FnMut(&str) -> Vec<Segment>,
{
    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            Segment::Text(text) => out.extend(split(&text)),
            slot => out.push(slot),
        }
    }
    out
}

/// Replace each `begin ... end` block of `region` with a slot.
///
/// A block spans from a begin marker to the first end marker after it. A
/// begin marker with no matching end is left as text.
fn collapse_regions(text: &str, region: Region) -> Vec<Segment> {
    let begin = region.begin_marker();
    let end = region.end_marker();
    let mut out = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(begin) {
        let after_begin = start + begin.len();
        let Some(end_offset) = rest[after_begin..].find(end) else {
            break;
        };
        let mut stop = after_begin + end_offset + end.len();
        if rest[stop..].starts_with('\n') {
            stop += 1;
        }

        push_text(&mut out, &rest[..start]);
        out.push(Segment::Slot(Slot::Region(region)));
        rest = &rest[stop..];
    }
    push_text(&mut out, rest);
    out
}

fn split_token(text: &str, token: &str, slot: Slot) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut pieces = text.split(token);
    if let Some(first) = pieces.next() {
        push_text(&mut out, first);
    }
    for piece in pieces {
        out.push(Segment::Slot(slot));
        push_text(&mut out, piece);
    }
    out
}

fn push_text(out: &mut Vec<Segment>, text: &str) {
    if !text.is_empty() {
        out.push(Segment::Text(text.to_string()));
    }
}
