/// Kind of an open block. `Unknown` stands in when a header's opening
/// syntax itself was malformed but balance must still be tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Elaithe,
    Alaithe,
    Malli,
    Unknown,
}

impl BlockKind {
    pub fn label(self) -> &'static str {
        match self {
            BlockKind::Elaithe => "ELAITHE",
            BlockKind::Alaithe => "ALAITHE",
            BlockKind::Malli => "MALLI",
            BlockKind::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone)]
pub struct BlockFrame {
    pub kind: BlockKind,
    pub opened_at: usize,
}

/// Stack of open-block frames: push-only at headers, pop-only at closing
/// markers, never driven below depth 0.
#[derive(Debug, Default)]
pub struct BlockStack {
    frames: Vec<BlockFrame>,
}

impl BlockStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: BlockKind, line: usize) {
        self.frames.push(BlockFrame {
            kind,
            opened_at: line,
        });
    }

    pub fn pop(&mut self) -> Option<BlockFrame> {
        self.frames.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Remaining frames in stack order (outermost first), for end-of-input
    /// reporting.
    pub fn into_frames(self) -> Vec<BlockFrame> {
        self.frames
    }
}
