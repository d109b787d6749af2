//! Line recognizers.
//!
//! Every non-blank line is classified into exactly one [`LineKind`]. The
//! recognizers are tried in priority order: process header, description,
//! pollutant-list header, pollutant entry. Anything else is
//! [`LineKind::Other`].

use winnow::{
    Parser as _,
    ascii::{digit1, space0},
    combinator::{eof, opt, preceded},
    error::ModalResult,
    token::{literal, one_of, rest, take_till},
};

/// Prefix of a process header line.
pub(crate) const PROCESS_HEADER_PREFIX: &str = "### ";
/// Prefix of a process description line.
pub(crate) const DESCRIPTION_MARKER: &str = "- **工艺流程描述**";
/// The complete pollutant-list header line.
pub(crate) const POLLUTANT_LIST_MARKER: &str = "- **污染物**";

/// Separators accepted after a bold label.
const SEPARATORS: [char; 2] = [':', '：'];

type Input<'a> = &'a str;

/// What a trimmed source line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    Blank,
    ProcessHeader { title: &'a str },
    Description { text: &'a str },
    PollutantListHeader,
    /// A line shaped like `- **<LABEL>**: <text>`. Neither the label nor the
    /// presence of text has been validated yet.
    PollutantEntry { label: &'a str, text: &'a str },
    Other,
}

/// Classifies one trimmed line.
pub(crate) fn classify(text: &str) -> LineKind<'_> {
    if text.is_empty() {
        return LineKind::Blank;
    }
    if let Ok(title) = process_header.parse(text) {
        return LineKind::ProcessHeader { title };
    }
    if let Ok(text) = description_line.parse(text) {
        return LineKind::Description { text };
    }
    if pollutant_list_header.parse(text).is_ok() {
        return LineKind::PollutantListHeader;
    }
    if let Ok((label, text)) = pollutant_entry.parse(text) {
        return LineKind::PollutantEntry { label, text };
    }
    LineKind::Other
}

/// `### [<n>.] <title>`; yields the title without its ordinal prefix.
fn process_header<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    preceded(
        literal(PROCESS_HEADER_PREFIX),
        preceded(opt((digit1, '.', space0)), rest),
    )
    .map(str::trim)
    .parse_next(input)
}

/// `- **工艺流程描述**[：|:] <text>`; yields the trimmed text.
fn description_line<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    preceded(
        literal(DESCRIPTION_MARKER),
        preceded(opt(one_of(SEPARATORS)), rest),
    )
    .map(str::trim)
    .parse_next(input)
}

fn pollutant_list_header(input: &mut Input<'_>) -> ModalResult<()> {
    (literal(POLLUTANT_LIST_MARKER), eof)
        .void()
        .parse_next(input)
}

/// `- **<LABEL>**[：|:] <text>` where the label starts with an ASCII
/// uppercase letter; yields `(label, text)` with the text trimmed.
fn pollutant_entry<'a>(input: &mut Input<'a>) -> ModalResult<(&'a str, &'a str)> {
    (
        '-',
        space0,
        "**",
        take_till(1.., '*')
            .verify(|label: &str| label.starts_with(|c: char| c.is_ascii_uppercase())),
        "**",
        one_of(SEPARATORS),
        rest,
    )
        .map(|(_, _, _, label, _, _, text): (_, _, _, &'a str, _, _, &'a str)| {
            (label, text.trim())
        })
        .parse_next(input)
}
