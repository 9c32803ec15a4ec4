//! Splitting long documents into bounded chunks

/// Default maximum chunk size in characters
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 6000;

/// One piece of a document, numbered from 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Position in the document, 1-based
    pub index: usize,
    /// Trimmed chunk text
    pub text: String,
}

/// Splits text into chunks of at most `max_chars` characters
///
/// A window that would end mid-document is pulled back to just after the
/// last newline or `". "` inside it, provided that boundary is not at the
/// very start of the window.
#[derive(Debug, Clone)]
pub struct TextChunker {
    max_chars: usize,
}

impl Default for TextChunker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHUNK_CHARS)
    }
}

impl TextChunker {
    /// Create a new text chunker
    pub fn new(max_chars: usize) -> Self {
        Self {
            max_chars: max_chars.max(1),
        }
    }

    /// Maximum chunk size in characters
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Chunk the given text, trimming each piece
    ///
    /// Empty input gives no chunks. Input that fits in one chunk gives a
    /// single trimmed chunk, even if that trims it down to nothing.
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        if text.is_empty() {
            return Vec::new();
        }
        if text.chars().count() <= self.max_chars {
            return vec![Chunk {
                index: 1,
                text: text.trim().to_string(),
            }];
        }

        self.windows(text)
            .into_iter()
            .enumerate()
            .map(|(i, window)| Chunk {
                index: i + 1,
                text: window.trim().to_string(),
            })
            .collect()
    }

    /// Untrimmed windows covering the text end to end
    ///
    /// Concatenating the windows reproduces the input exactly.
    pub fn windows<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let chars: Vec<char> = text.chars().collect();
        let offsets: Vec<usize> = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()))
            .collect();
        let total = chars.len();

        let mut windows = Vec::new();
        let mut start = 0;
        while start < total {
            let mut end = total.min(start + self.max_chars);
            if end < total {
                if let Some(split) = last_boundary(&chars, start, end) {
                    if split > start {
                        end = split + 1;
                    }
                }
            }
            windows.push(&text[offsets[start]..offsets[end]]);
            start = end;
        }
        windows
    }
}

/// Position of the last newline, or of the `.` of the last `". "`, in `[start, end)`
fn last_boundary(chars: &[char], start: usize, end: usize) -> Option<usize> {
    let newline = (start..end).rev().find(|&k| chars[k] == '\n');
    let sentence = (start..end - 1)
        .rev()
        .find(|&k| chars[k] == '.' && chars[k + 1] == ' ');
    newline.max(sentence)
}
