//! Authored event records and their markdown file format.
//!
//! # Responsibility
//! - Define the journal record users author through the CLI.
//! - Encode/decode the on-disk markdown-with-frontmatter representation.
//!
//! # Invariants
//! - File names follow `YYYY-MM-DD_<slug>.md` so a directory listing sorts
//!   roughly chronologically on its own.
//! - The frontmatter block is flat `key: value` lines between `---` fences;
//!   `title`, `date`, `type` and `description` are all required.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Event kinds accepted by the authoring path when no custom set is given.
///
/// Dataset nodes are not held to this set; it only guards new journal
/// entries against typos.
pub const DEFAULT_EVENT_KINDS: [&str; 5] = ["life", "education", "work", "travel", "health"];

static NON_ALNUM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug regex"));

/// Converts a title into a filename-safe slug.
///
/// Lowercases, maps every run of non-alphanumeric characters to a single
/// `-`, and trims leading/trailing dashes.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    NON_ALNUM_RE
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Validation error for authored events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Kind is not in the allowed set for the authoring path.
    UnknownKind { kind: String, allowed: Vec<String> },
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "event title cannot be empty"),
            Self::UnknownKind { kind, allowed } => write!(
                f,
                "unknown event kind `{kind}`; allowed kinds: {}",
                allowed.join(", ")
            ),
        }
    }
}

impl Error for EventValidationError {}

/// Decode error for persisted event files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDecodeError {
    /// No complete `---` ... `---` frontmatter block was found.
    MissingFrontmatter,
    /// A required frontmatter key is absent.
    MissingField(&'static str),
    /// The `date` value is not a `YYYY-MM-DD` calendar date.
    InvalidDate { value: String },
}

impl Display for EventDecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFrontmatter => write!(f, "missing frontmatter block"),
            Self::MissingField(field) => write!(f, "missing frontmatter field `{field}`"),
            Self::InvalidDate { value } => {
                write!(f, "invalid date `{value}`; expected format YYYY-MM-DD")
            }
        }
    }
}

impl Error for EventDecodeError {}

/// A journaled life event as authored by the user.
///
/// Events are the editable source form; dataset nodes are projected from
/// them and never edited directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub title: String,
    pub date: NaiveDate,
    pub kind: String,
    pub description: String,
}

impl Event {
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        kind: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date,
            kind: kind.into(),
            description: description.into(),
        }
    }

    /// Validates the event against [`DEFAULT_EVENT_KINDS`].
    pub fn validate(&self) -> Result<(), EventValidationError> {
        self.validate_with(&DEFAULT_EVENT_KINDS)
    }

    /// Validates the event against a caller-provided set of allowed kinds.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title is blank.
    /// - `UnknownKind` when `kind` is not in `allowed`.
    pub fn validate_with(&self, allowed: &[&str]) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }
        if !allowed.contains(&self.kind.as_str()) {
            return Err(EventValidationError::UnknownKind {
                kind: self.kind.clone(),
                allowed: allowed.iter().map(|kind| kind.to_string()).collect(),
            });
        }
        Ok(())
    }

    /// Returns the file name this event is stored under.
    pub fn file_name(&self) -> String {
        format!("{}_{}.md", self.date.format("%Y-%m-%d"), slugify(&self.title))
    }

    /// Renders the event as a markdown file with a frontmatter header.
    pub fn to_markdown(&self) -> String {
        format!(
            "---\n\
             title: {title}\n\
             date: {date}\n\
             type: {kind}\n\
             description: {description}\n\
             ---\n\
             \n\
             # {title}\n\
             \n\
             {description}\n",
            title = self.title,
            date = self.date.format("%Y-%m-%d"),
            kind = self.kind,
            description = self.description,
        )
    }

    /// Parses an event back from its markdown file form.
    ///
    /// # Errors
    /// - `MissingFrontmatter` when the `---` fences are absent or unclosed.
    /// - `MissingField` when a required key is not present.
    /// - `InvalidDate` when the `date` value does not parse.
    pub fn from_markdown(content: &str) -> Result<Self, EventDecodeError> {
        let mut sections = content.splitn(3, "---");
        let frontmatter = match (sections.next(), sections.next(), sections.next()) {
            (Some(_), Some(frontmatter), Some(_)) => frontmatter,
            _ => return Err(EventDecodeError::MissingFrontmatter),
        };

        let mut title = None;
        let mut date_raw = None;
        let mut kind = None;
        let mut description = None;

        for line in frontmatter.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "title" => title = Some(value.to_string()),
                "date" => date_raw = Some(value.to_string()),
                "type" => kind = Some(value.to_string()),
                "description" => description = Some(value.to_string()),
                _ => {}
            }
        }

        let title = title.ok_or(EventDecodeError::MissingField("title"))?;
        let date_raw = date_raw.ok_or(EventDecodeError::MissingField("date"))?;
        let kind = kind.ok_or(EventDecodeError::MissingField("type"))?;
        let description = description.ok_or(EventDecodeError::MissingField("description"))?;

        let date = NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d")
            .map_err(|_| EventDecodeError::InvalidDate { value: date_raw })?;

        Ok(Self {
            title,
            date,
            kind,
            description,
        })
    }
}
