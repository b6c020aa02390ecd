mod widget;
pub(crate) use self::widget::PageWidget;
use crate::calendar::Cell;
use std::collections::{vec_deque, VecDeque};
use std::fmt;

/// Number of lines a [`Transcript`] retains before dropping the oldest
pub(crate) const TRANSCRIPT_LINES: usize = 256;

/// A named area of a [`Surface`]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Region {
    Title,
    Grid,
    Diagnostics,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Title => write!(f, "title"),
            Region::Grid => write!(f, "grid"),
            Region::Diagnostics => write!(f, "diagnostics"),
        }
    }
}

/// Something a calendar view can draw into.  Each region may or may not
/// exist; the title and grid are required for rendering, while the diagnostic
/// region is optional.
pub(crate) trait Surface {
    fn has_region(&self, region: Region) -> bool;

    fn title_region(&mut self) -> Option<&mut String>;

    fn grid_region(&mut self) -> Option<&mut Vec<Cell>>;

    /// Append-only transcript of what the view has been doing
    fn diagnostic_region(&mut self) -> Option<&mut Transcript>;
}

/// The most recent [`TRANSCRIPT_LINES`] diagnostic messages, oldest first
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Transcript(VecDeque<String>);

impl Transcript {
    pub(crate) fn push(&mut self, line: String) {
        if self.0.len() >= TRANSCRIPT_LINES {
            self.0.pop_front();
        }
        self.0.push_back(line);
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn iter(&self) -> vec_deque::Iter<'_, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a String;
    type IntoIter = vec_deque::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The retained contents of the terminal page, drawn by [`PageWidget`]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Page {
    title: Option<String>,
    grid: Option<Vec<Cell>>,
    diagnostics: Option<Transcript>,
}

impl Page {
    /// A page with a title and a grid but no diagnostic region
    pub(crate) fn new() -> Page {
        Page::empty().with_title().with_grid()
    }

    /// A page with no regions at all
    pub(crate) fn empty() -> Page {
        Page::default()
    }

    pub(crate) fn with_title(mut self) -> Page {
        self.title.get_or_insert_with(String::new);
        self
    }

    pub(crate) fn with_grid(mut self) -> Page {
        self.grid.get_or_insert_with(Vec::new);
        self
    }

    pub(crate) fn with_diagnostics(mut self) -> Page {
        self.diagnostics.get_or_insert_with(Transcript::default);
        self
    }

    pub(crate) fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub(crate) fn grid(&self) -> Option<&[Cell]> {
        self.grid.as_deref()
    }

    pub(crate) fn diagnostics(&self) -> Option<&Transcript> {
        self.diagnostics.as_ref()
    }
}

impl Surface for Page {
    fn has_region(&self, region: Region) -> bool {
        match region {
            Region::Title => self.title.is_some(),
            Region::Grid => self.grid.is_some(),
            Region::Diagnostics => self.diagnostics.is_some(),
        }
    }

    fn title_region(&mut self) -> Option<&mut String> {
        self.title.as_mut()
    }

    fn grid_region(&mut self) -> Option<&mut Vec<Cell>> {
        self.grid.as_mut()
    }

    fn diagnostic_region(&mut self) -> Option<&mut Transcript> {
        self.diagnostics.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_page_regions() {
        let page = Page::new();
        assert!(page.has_region(Region::Title));
        assert!(page.has_region(Region::Grid));
        assert!(!page.has_region(Region::Diagnostics));
        assert_eq!(page.title(), Some(""));
        assert_eq!(page.grid(), Some(&[][..]));
        assert!(page.diagnostics().is_none());
    }

    #[test]
    fn test_empty_page() {
        let mut page = Page::empty().with_diagnostics();
        assert!(page.title_region().is_none());
        assert!(page.grid_region().is_none());
        page.diagnostic_region().unwrap().push(String::from("hello"));
        let transcript = page.diagnostics().unwrap();
        assert_eq!(transcript.iter().collect::<Vec<_>>(), ["hello"]);
    }

    #[test]
    fn test_transcript_drops_oldest() {
        let mut transcript = Transcript::default();
        assert_eq!(transcript.len(), 0);
        for i in 0..TRANSCRIPT_LINES + 44 {
            transcript.push(format!("line {i}"));
        }
        assert_eq!(transcript.len(), TRANSCRIPT_LINES);
        assert_eq!(transcript.iter().next().map(String::as_str), Some("line 44"));
        assert_eq!(
            transcript.iter().last().map(String::as_str),
            Some(format!("line {}", TRANSCRIPT_LINES + 43).as_str())
        );
    }
}
