//! Anchor-based text insertion.
//!
//! The inserter locates an anchored region in an existing source file and
//! splices a generated snippet into it. It is a line-oriented state machine
//! over an immutable input sequence producing a new output sequence; callers
//! commit the result in one atomic write, so partial rewrites can never be
//! observed.
//!
//! ```text
//!  SEARCHING ──start matches──▶ ARMED ──end matches──▶ DONE (Inserted)
//!                                 │
//!                                 └──dedup matches──▶ SKIPPED (AlreadyPresent)
//! ```
//!
//! Reaching end-of-input in `SEARCHING` or `ARMED` is an error and leaves
//! the file untouched.

use crate::domain::error::DomainError;

/// Where the snippet lands relative to the anchored region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Immediately before the line matching the end pattern (list-style
    /// registrations, e.g. the `db.AutoMigrate(...)` argument list).
    BeforeEnd,
    /// Immediately after the line matching the start pattern (marker-style
    /// anchors, e.g. "generated registrations are appended below").
    AfterStart,
}

/// One insertion rule: patterns, snippet, placement and dedup needle.
///
/// Constructed per insertion call and discarded after the target file is
/// rewritten.
#[derive(Debug, Clone)]
pub struct AnchorRule {
    start: String,
    end: String,
    snippet: String,
    placement: Placement,
    dedup: String,
}

impl AnchorRule {
    /// Build a rule. The dedup needle defaults to the trimmed snippet, so a
    /// line carrying extra indentation still counts as already-present.
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        snippet: impl Into<String>,
        placement: Placement,
    ) -> Self {
        let snippet = snippet.into();
        let dedup = snippet.trim().to_string();
        Self {
            start: start.into(),
            end: end.into(),
            snippet,
            placement,
            dedup,
        }
    }

    /// Override the dedup needle. Multi-line snippets must pick a single
    /// line that identifies a previous insertion.
    pub fn with_dedup(mut self, needle: impl Into<String>) -> Self {
        self.dedup = needle.into();
        self
    }

}

/// Result of a successful scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The full rewritten file content, ready for an atomic replace.
    Inserted(String),
    /// The snippet already exists; the caller must not write anything.
    AlreadyPresent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Searching,
    Armed,
}

/// Run the insertion state machine over `input`.
///
/// Line matching rules:
/// - start: substring containment, first match wins;
/// - dedup: substring containment of the rule's needle;
/// - end: the trimmed line equals the end pattern exactly.
///
/// All lines are copied to the output byte for byte, their own terminators
/// included (CRLF files stay CRLF); only the snippet is added, using the
/// file's newline convention. A trailing newline in the input is preserved.
pub fn apply(rule: &AnchorRule, input: &str) -> Result<InsertOutcome, DomainError> {
    // Each element keeps its own terminator so untouched lines survive
    // verbatim. Pattern tests run against the stripped body.
    let lines: Vec<&str> = input.split_inclusive('\n').collect();

    let mut state = State::Searching;
    let mut start_idx = 0usize;
    let mut end_idx = None;

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim_end_matches('\n').trim_end_matches('\r');
        match state {
            State::Searching => {
                if line.contains(&rule.start) {
                    start_idx = i;
                    state = State::Armed;
                }
            }
            State::Armed => {
                if line.contains(&rule.dedup) {
                    return Ok(InsertOutcome::AlreadyPresent);
                }
                if line.trim() == rule.end {
                    end_idx = Some(i);
                    break;
                }
            }
        }
    }

    let Some(end_idx) = end_idx else {
        let pattern = match state {
            State::Searching => rule.start.clone(),
            State::Armed => rule.end.clone(),
        };
        return Err(DomainError::AnchorNotFound { pattern });
    };

    // The end line always follows the start line, so the insertion point is
    // strictly inside the file for either placement and every line before it
    // carries a terminator.
    let at = match rule.placement {
        Placement::BeforeEnd => end_idx,
        Placement::AfterStart => start_idx + 1,
    };

    let newline = if input.contains("\r\n") { "\r\n" } else { "\n" };

    let mut content = String::with_capacity(input.len() + rule.snippet.len() + 4);
    for raw in &lines[..at] {
        content.push_str(raw);
    }
    for line in rule.snippet.lines() {
        content.push_str(line);
        content.push_str(newline);
    }
    for raw in &lines[at..] {
        content.push_str(raw);
    }
    Ok(InsertOutcome::Inserted(content))
}
