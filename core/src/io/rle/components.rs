use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

use super::*;
use crate::vec2::UVec2;

/// RLE contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rle {
    /// RLE header.
    pub(super) header: RleHeader,
    /// RLE runs.
    pub(super) runs: Vec<RleRun>,
    /// Mask comments.
    pub(super) comments: String,
}
impl Rle {
    /// Returns the mask size declared in the header.
    pub fn size(&self) -> UVec2 {
        self.header.size
    }

    /// Returns the comments, one per line, including the leading `#`.
    pub fn comments(&self) -> &str {
        &self.comments
    }
    /// Sets the comments.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn with_comments(mut self, comments: impl ToString) -> Self {
        self.comments = comments.to_string();
        self
    }
}
impl fmt::Display for Rle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for comment_line in self.comments.trim_end().lines() {
            if !comment_line.starts_with('#') {
                write!(f, "#C ")?;
            }
            writeln!(f, "{}", comment_line)?;
        }
        writeln!(f, "{}", self.header)?;

        let mut line_len = 0;
        for run in &self.runs {
            line_len += run.str_len();
            if line_len > MAX_LINE_LEN {
                writeln!(f)?;
                line_len = run.str_len();
            }
            write!(f, "{}", run)?;
        }
        writeln!(f)?;

        Ok(())
    }
}
impl FromStr for Rle {
    type Err = RleError;

    fn from_str(s: &str) -> RleResult<Self> {
        let mut header = None;
        let mut runs = vec![];
        let mut comments = String::new();
        let mut ended = false;

        for line in s.lines() {
            let line = line.trim();
            if line.starts_with('#') {
                comments.push_str(line);
                comments.push('\n');
            } else if line.starts_with('x') && header.is_none() {
                header = Some(line.parse()?);
            } else if !ended {
                for run in RLE_RUN_REGEX.find_iter(line) {
                    let run: RleRun = run.as_str().parse()?;
                    runs.push(run);
                    if run.item == RleItem::End {
                        // Anything after the end of the mask is ignored.
                        ended = true;
                        break;
                    }
                }
            }
        }

        let header = header.ok_or(RleError::MissingHeader)?;

        Ok(Self {
            header,
            runs,
            comments,
        })
    }
}

/// RLE header contents.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RleHeader {
    /// Mask size.
    pub size: UVec2,
}
impl fmt::Display for RleHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x = {}, y = {}", self.size.x, self.size.y)
    }
}
impl FromStr for RleHeader {
    type Err = RleError;

    fn from_str(s: &str) -> RleResult<Self> {
        let mut ret = Self::default();

        // Parse comma-separated parameters.
        for param in s.split(',') {
            // Each parameter consists of `name = value`.
            match param.split('=').map(str::trim).collect_vec().as_slice() {
                ["x", x] => ret.size.x = parse_rle_size(x)?,
                ["y", y] => ret.size.y = parse_rle_size(y)?,
                _ => (), // Ignore unknown parameters, such as `rule`.
            }
        }

        Ok(ret)
    }
}

fn parse_rle_size(s: &str) -> RleResult<usize> {
    s.parse::<usize>().map_err(|_| RleError::InvalidSize)
}

/// List of runs that merges each new run into the previous ones where
/// possible.
#[derive(Debug, Default)]
pub struct RleRunVec(Vec<RleRun>);
impl RleRunVec {
    pub fn into_vec(self) -> Vec<RleRun> {
        self.0
    }
    pub fn append(&mut self, run: impl Into<RleRun>) {
        let mut run = run.into();
        if run.count == 0 {
            return;
        }
        while let Some(&last) = self.0.last() {
            match last.try_merge(run) {
                Ok(merged) => {
                    self.0.pop();
                    run = merged;
                }
                Err(_) => break,
            }
        }
        self.0.push(run);
    }
}

/// Run of repeated items in an RLE.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RleRun {
    pub count: usize,
    pub item: RleItem,
}
impl RleRun {
    /// Tries to merge two runs, returning `Ok(merged)` if successful or
    /// `Err((self, other))` if they cannot be merged.
    pub fn try_merge(mut self, other: RleRun) -> Result<RleRun, (RleRun, RleRun)> {
        match (self.item, other.item) {
            // Omit clear cells at end of row/mask.
            (RleItem::Cell(false), RleItem::NextRow) => Ok(other),
            (RleItem::Cell(false), RleItem::End) => Ok(other),
            // Omit empty rows at end of mask.
            (RleItem::NextRow, RleItem::End) => Ok(other),
            // Merge identical items.
            (_, _) => {
                if self.item == other.item {
                    self.count += other.count;
                    Ok(self)
                } else {
                    Err((self, other))
                }
            }
        }
    }
    /// Returns the number of characters in the string representation.
    pub fn str_len(self) -> usize {
        let digits = match self.count {
            0 => return 0,
            1 => 0,
            n => n.to_string().len(),
        };
        digits + 1
    }
}
impl From<RleItem> for RleRun {
    fn from(item: RleItem) -> Self {
        Self { count: 1, item }
    }
}
impl FromStr for RleRun {
    type Err = RleError;

    fn from_str(s: &str) -> RleResult<Self> {
        let end_of_count = s
            .find(|ch: char| !ch.is_ascii_digit())
            .ok_or(RleError::InvalidItem)?;

        let count: usize = if end_of_count != 0 {
            s[..end_of_count]
                .parse()
                .map_err(|_| RleError::InvalidCount)?
        } else {
            1
        };
        let item = s[end_of_count..].trim_start().parse()?;

        Ok(Self { count, item })
    }
}
impl fmt::Display for RleRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count > 1 {
            write!(f, "{}", self.count)?;
        }
        if self.count > 0 {
            write!(f, "{}", self.item)?;
        }
        Ok(())
    }
}

/// Single "content item" that may be repeated in an RLE.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RleItem {
    /// Cell state.
    Cell(bool),
    /// Advance to the next row.
    NextRow,
    /// End of the whole RLE.
    End,
}
impl FromStr for RleItem {
    type Err = RleError;

    fn from_str(s: &str) -> RleResult<Self> {
        if !s.is_ascii() {
            return Err(RleError::NonAscii);
        }

        match s.chars().collect_tuple() {
            Some((ch,)) => match ch {
                'b' | '.' => Ok(Self::Cell(false)),
                'o' | 'A' => Ok(Self::Cell(true)),
                '$' => Ok(Self::NextRow),
                '!' => Ok(Self::End),
                _ => Err(RleError::UnknownSymbol(ch)),
            },
            None => Err(RleError::InvalidItem),
        }
    }
}
impl fmt::Display for RleItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cell(false) => write!(f, "b"),
            Self::Cell(true) => write!(f, "o"),
            Self::NextRow => write!(f, "$"),
            Self::End => write!(f, "!"),
        }
    }
}
