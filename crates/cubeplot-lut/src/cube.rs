//! .cube 3D LUT parser.
//!
//! The .cube format is a line-oriented text format. Only 3D tables are
//! read; a `LUT_1D_SIZE` directive aborts the parse.
//!
//! # Format
//!
//! ```text
//! # Comment
//! TITLE "LUT Name"
//! LUT_3D_SIZE 33
//! 0.0 0.0 0.0
//! ...
//! 1.0 1.0 1.0
//! ```
//!
//! Data rows fill the grid with B varying fastest, then G, then R.
//! `DOMAIN_MIN` / `DOMAIN_MAX` and other unknown directives are skipped,
//! the domain is always `[0, 1]`.
//!
//! # Example
//!
//! ```rust,ignore
//! use cubeplot_lut::cube;
//!
//! let grid = cube::read_cube("grade.cube")?;
//! println!("{} ({}^3)", grid.title(), grid.size());
//! ```

use crate::{CubeError, CubeResult, LutGrid};
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info, trace, warn};

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^TITLE[ \t]+"([\w ]+)""#).expect("valid regex"));
static SIZE_3D_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^LUT_3D_SIZE[ \t]+(\d+)").expect("valid regex"));
static SIZE_1D_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^LUT_1D_SIZE[ \t]+\d+").expect("valid regex"));
static KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("valid regex"));
// Spellings `f64::from_str` accepts that must not pass as directives.
const FLOAT_WORDS: [&str; 3] = ["NAN", "INF", "INFINITY"];
// Decimal with optional sign and exponent: `0`, `-1.5`, `.5`, `1.23456e-05`.
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").expect("valid regex")
});

/// What a single trimmed input line is.
///
/// Variants are listed in the order they are tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `TITLE "..."`, holding the text between the quotes.
    Title(&'a str),
    /// `LUT_3D_SIZE n`, holding the digits of `n`.
    Size3D(&'a str),
    /// `LUT_1D_SIZE n`.
    Size1D,
    /// Anything that has to be a row of three numbers.
    Data(&'a str),
    /// Blank line, comment or unrecognized directive.
    Ignored,
}

impl<'a> LineKind<'a> {
    /// Classifies one line. Leading and trailing whitespace is ignored.
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim();

        if let Some(caps) = TITLE_RE.captures(line) {
            return caps.get(1).map_or(Self::Ignored, |m| Self::Title(m.as_str()));
        }
        if let Some(caps) = SIZE_3D_RE.captures(line) {
            return caps.get(1).map_or(Self::Ignored, |m| Self::Size3D(m.as_str()));
        }
        if SIZE_1D_RE.is_match(line) {
            return Self::Size1D;
        }

        let Some(first) = line.split_whitespace().next() else {
            return Self::Ignored;
        };
        let directive = KEYWORD_RE.is_match(first) && !FLOAT_WORDS.contains(&first);
        if first.starts_with('#') || directive {
            return Self::Ignored;
        }
        Self::Data(line)
    }
}

/// Mutable state of one parse.
///
/// Feed lines in file order with [`ParseState::feed_line`], then call
/// [`ParseState::finish`] to get the grid. Any error returned by
/// `feed_line` is terminal; the state must be dropped.
#[derive(Debug, Default)]
pub struct ParseState {
    grid: Option<LutGrid>,
    title: String,
    line: usize,
    // First data row seen before any size declaration.
    orphan_row: Option<usize>,
}

impl ParseState {
    /// Creates an empty parse state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declared grid size, if any.
    pub fn size(&self) -> Option<usize> {
        self.grid.as_ref().map(LutGrid::size)
    }

    /// Current title, without quotes.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }

    /// Grid position the next data row will be written to.
    ///
    /// `None` until a size is declared. Once the grid is full this is
    /// `(size, 0, 0)`.
    pub fn cursor(&self) -> Option<(usize, usize, usize)> {
        self.grid.as_ref().map(|grid| {
            let n = grid.size();
            let k = grid.filled();
            (k / (n * n), (k / n) % n, k % n)
        })
    }

    /// Consumes the next line of input.
    pub fn feed_line(&mut self, line: &str) -> CubeResult<()> {
        self.line += 1;
        let line_no = self.line;

        match LineKind::classify(line) {
            LineKind::Title(title) => {
                info!("TITLE: {title}");
                self.title = title.to_string();
            }
            LineKind::Size3D(digits) => {
                let size: usize = digits.parse().map_err(|_| CubeError::InvalidSize {
                    line: line_no,
                    reason: format!("{digits} is out of range"),
                })?;
                if let Some(old) = &self.grid {
                    warn!(
                        "line {line_no}: LUT_3D_SIZE redeclared ({} -> {size}), discarding {} rows",
                        old.size(),
                        old.filled()
                    );
                }
                self.grid = Some(LutGrid::zeroed(size, line_no)?);
                info!("LUT_3D_SIZE: {size}");
            }
            LineKind::Size1D => {
                return Err(CubeError::UnsupportedFormat { line: line_no });
            }
            LineKind::Data(row) => {
                let rgb = parse_row(row, line_no)?;
                match &mut self.grid {
                    Some(grid) => {
                        if !grid.push(rgb) {
                            return Err(CubeError::GridOverflow {
                                line: line_no,
                                size: grid.size(),
                            });
                        }
                    }
                    None => {
                        debug!("line {line_no}: data row before LUT_3D_SIZE");
                        self.orphan_row.get_or_insert(line_no);
                    }
                }
            }
            LineKind::Ignored => {
                trace!("line {line_no}: skipped");
            }
        }
        Ok(())
    }

    /// Ends the parse and hands over the grid.
    ///
    /// An under-filled grid is returned as is, with the missing cells left
    /// at zero; see [`LutGrid::is_complete`].
    pub fn finish(self) -> CubeResult<LutGrid> {
        if let Some(line) = self.orphan_row {
            debug!("first data row without a size at line {line}");
            return Err(CubeError::MissingSize);
        }
        let mut grid = self.grid.ok_or(CubeError::MissingSize)?;

        if !grid.is_complete() {
            warn!(
                "expected {} rows, found {}; remaining cells are zero",
                grid.entry_count(),
                grid.filled()
            );
        }
        grid.set_title(self.title);
        Ok(grid)
    }
}

/// Parses a 3D LUT from a sequence of lines.
pub fn parse<I, S>(lines: I) -> CubeResult<LutGrid>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut state = ParseState::new();
    for line in lines {
        state.feed_line(line.as_ref())?;
    }
    state.finish()
}

/// Parses a 3D LUT from a reader.
pub fn parse_reader<R: BufRead>(reader: R) -> CubeResult<LutGrid> {
    let mut state = ParseState::new();
    for line in reader.lines() {
        state.feed_line(&line?)?;
    }
    state.finish()
}

/// Parses a 3D LUT from in-memory text.
pub fn parse_str(text: &str) -> CubeResult<LutGrid> {
    parse(text.lines())
}

/// Reads a 3D LUT from a .cube file.
///
/// # Example
///
/// ```rust,ignore
/// let grid = cube::read_cube("grade.cube")?;
/// ```
pub fn read_cube<P: AsRef<Path>>(path: P) -> CubeResult<LutGrid> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CubeError::FileNotFound(path.to_path_buf()),
        _ => CubeError::Io(e),
    })?;
    debug!("reading {}", path.display());
    parse_reader(BufReader::new(file))
}

fn parse_row(row: &str, line: usize) -> CubeResult<[f64; 3]> {
    let malformed = |reason: String| CubeError::MalformedRow { line, reason };

    let parts: Vec<&str> = row.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(malformed(format!("expected 3 values, found {}", parts.len())));
    }

    let mut rgb = [0.0_f64; 3];
    for (slot, token) in rgb.iter_mut().zip(&parts) {
        if !NUMBER_RE.is_match(token) {
            return Err(malformed(format!("invalid number {token:?}")));
        }
        *slot = token
            .parse()
            .map_err(|_| malformed(format!("invalid number {token:?}")))?;
    }
    Ok(rgb)
}
