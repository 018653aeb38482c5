//! Dotted and indexed field paths.
//!
//! A path is parsed once into segments that point back into the original string, so resolving
//! it against a record never allocates.

use std::fmt;
use std::ops::Range;

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment {
    span: Range<usize>,
    // Preceded by a '.', so it may be glued onto the previous segment when an object key itself
    // contains dots.
    joinable: bool,
}

/// A parsed path such as `a.b`, `items.0.name` or `items[0].name`.
#[derive(Clone, PartialEq, Eq)]
pub struct FieldPath {
    raw: String,
    segments: Vec<Segment>,
}

impl FieldPath {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let segments = parse(&raw);
        Self { raw, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Looks the path up in `value`. Returns `None` as soon as a segment is missing, indexes
    /// out of bounds, or walks into a scalar.
    pub fn resolve<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        if self.segments.is_empty() {
            return None;
        }

        let mut current = value;
        let mut i = 0;
        while i < self.segments.len() {
            match current {
                Value::Object(map) => {
                    let start = self.segments[i].span.start;
                    let mut j = i;
                    loop {
                        let key = &self.raw[start..self.segments[j].span.end];
                        if let Some(next) = map.get(key) {
                            current = next;
                            i = j + 1;
                            break;
                        }

                        j += 1;
                        if j == self.segments.len() || !self.segments[j].joinable {
                            return None;
                        }
                    }
                }
                Value::Array(items) => {
                    let index = self.segment(i).parse::<usize>().ok()?;
                    current = items.get(index)?;
                    i += 1;
                }
                _ => return None,
            }
        }

        Some(current)
    }

    fn segment(&self, i: usize) -> &str {
        &self.raw[self.segments[i].span.clone()]
    }
}

impl fmt::Debug for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldPath").field(&self.raw).finish()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for FieldPath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for FieldPath {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

fn parse(raw: &str) -> Vec<Segment> {
    let bytes = raw.as_bytes();
    let mut segments = Vec::new();

    if raw.is_empty() {
        return segments;
    }

    // A plain (non-bracket) segment is open at `start` while `open` is set.
    let mut start = 0;
    let mut open = true;
    let mut joinable = false;
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'.' => {
                if open {
                    segments.push(Segment {
                        span: start..pos,
                        joinable,
                    });
                }
                // Only a plain segment can be glued onto the next one.
                joinable = open;
                open = true;
                pos += 1;
                start = pos;
            }
            b'[' => {
                if open && pos > start {
                    segments.push(Segment {
                        span: start..pos,
                        joinable,
                    });
                }

                let Some(offset) = raw[pos + 1..].find(']') else {
                    // Unclosed bracket: keep the rest as one key that never matches an index.
                    segments.push(Segment {
                        span: pos..bytes.len(),
                        joinable: false,
                    });
                    return segments;
                };

                let close = pos + 1 + offset;
                segments.push(Segment {
                    span: pos + 1..close,
                    joinable: false,
                });
                open = false;
                joinable = false;
                pos = close + 1;
                start = pos;
            }
            _ => {
                if !open {
                    open = true;
                    joinable = false;
                    start = pos;
                }
                pos += 1;
            }
        }
    }

    if open {
        segments.push(Segment {
            span: start..bytes.len(),
            joinable,
        });
    }

    segments
}
