//! Parsing for recorded sample case files.
//!
//! Input files hold repeated blocks of a waypoint count followed by that
//! many `x y penalty` triples, terminated by a zero count. Every block
//! gains a synthetic origin at `(0, 0)` and destination at `(100, 100)`,
//! both with zero skip penalty.

use geo::Coord;
use thiserror::Error;
use waypost_core::{Course, CourseError, Waypoint};

/// File-name prefix identifying recorded inputs.
pub(crate) const INPUT_PREFIX: &str = "sample_input";
const OUTPUT_PREFIX: &str = "sample_output";

/// Origin sentinel prepended to every recorded course.
const ORIGIN: Waypoint = Waypoint::new(Coord { x: 0.0, y: 0.0 }, 0.0);
/// Destination sentinel appended to every recorded course.
const DESTINATION: Waypoint = Waypoint::new(Coord { x: 100.0, y: 100.0 }, 0.0);

/// Errors produced while reading sample case files.
#[derive(Debug, Error)]
pub enum CaseFileError {
    /// A token could not be parsed as a number.
    #[error("invalid number {token:?}")]
    InvalidNumber {
        /// The offending token.
        token: String,
    },
    /// The file ended inside a waypoint block.
    #[error("unexpected end of file inside a waypoint block")]
    UnexpectedEof,
    /// A block failed course validation.
    #[error(transparent)]
    Course(#[from] CourseError),
    /// The expected-output file holds a different number of values.
    #[error("{cases} cases but {expected} expected values")]
    ExpectedCountMismatch {
        /// Number of parsed course blocks.
        cases: usize,
        /// Number of expected-output values.
        expected: usize,
    },
}

/// Parse every course block in a recorded input file.
pub(crate) fn parse_courses(text: &str) -> Result<Vec<Course>, CaseFileError> {
    let mut tokens = text.split_whitespace();
    let mut courses = Vec::new();
    while let Some(token) = tokens.next() {
        let count: usize = token
            .parse()
            .map_err(|_| CaseFileError::InvalidNumber {
                token: token.to_owned(),
            })?;
        if count == 0 {
            break;
        }
        let mut waypoints = Vec::with_capacity(count + 2);
        waypoints.push(ORIGIN);
        for _ in 0..count {
            let x = next_number(&mut tokens)?;
            let y = next_number(&mut tokens)?;
            let penalty = next_number(&mut tokens)?;
            waypoints.push(Waypoint::new(Coord { x, y }, penalty));
        }
        waypoints.push(DESTINATION);
        courses.push(Course::new(waypoints)?);
    }
    Ok(courses)
}

fn next_number<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<f64, CaseFileError> {
    let token = tokens.next().ok_or(CaseFileError::UnexpectedEof)?;
    token.parse().map_err(|_| CaseFileError::InvalidNumber {
        token: token.to_owned(),
    })
}

/// Parse the expected lowest-time values, one per case in file order.
pub(crate) fn expected_values(text: &str) -> Result<Vec<f64>, CaseFileError> {
    text.split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| CaseFileError::InvalidNumber {
                token: token.to_owned(),
            })
        })
        .collect()
}

/// Derive the expected-output file name paired with an input file name.
pub(crate) fn expected_file_name(input_name: &str) -> String {
    input_name.replace(INPUT_PREFIX, OUTPUT_PREFIX)
}
