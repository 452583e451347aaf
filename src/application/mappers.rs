// Mappers: Convert between the plain-text knapsack format and domain models
// Keeps text handling out of the solvers
//
// Input:              Output:
//   n capacity          total_value optimal_flag
//   v_0 w_0             x_0 x_1 ... x_{n-1}
//   ...
//   v_{n-1} w_{n-1}

use crate::domain::models::{Item, Problem, Solution};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Input is empty, expected a header line `item_count capacity`")]
    MissingHeader,

    #[error("Can't parse header line: {0:?}")]
    MalformedHeader(String),

    #[error("Can't parse item on line {line_number}: {line:?}")]
    MalformedItem { line_number: usize, line: String },

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] ParseIntError),

    #[error("Header declares {declared} items but {found} were found")]
    CountMismatch { declared: usize, found: usize },
}

/// Read two leading integers from a line, ignoring anything after them
fn parse_pair<A, B>(line: &str) -> Option<Result<(A, B), ParseIntError>>
where
    A: FromStr<Err = ParseIntError>,
    B: FromStr<Err = ParseIntError>,
{
    let mut split = line.split_whitespace();
    let (first, second) = (split.next()?, split.next()?);
    Some(first.parse().and_then(|a| second.parse().map(|b| (a, b))))
}

/// Convert problem text to a domain Problem
pub fn parse_problem(input: &str) -> Result<Problem, ParseError> {
    let mut lines = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header) = lines.next().ok_or(ParseError::MissingHeader)?;
    let (declared, capacity): (usize, u64) = parse_pair(header)
        .ok_or_else(|| ParseError::MalformedHeader(header.to_string()))??;

    let items = lines
        .enumerate()
        .map(|(index, (line_index, line))| -> Result<Item, ParseError> {
            let (value, weight) = parse_pair(line).ok_or_else(|| ParseError::MalformedItem {
                line_number: line_index + 1,
                line: line.to_string(),
            })??;
            Ok(Item::new(index, value, weight))
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    if items.len() != declared {
        return Err(ParseError::CountMismatch {
            declared,
            found: items.len(),
        });
    }

    Ok(Problem::new(capacity, items))
}

/// Convert a domain Solution to the two-line text format
pub fn format_solution(solution: &Solution) -> String {
    solution.to_string()
}

impl FromStr for Problem {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_problem(s)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.total_value, self.status.as_flag())?;
        let flags: Vec<&str> = self
            .selected
            .iter()
            .map(|&taken| if taken { "1" } else { "0" })
            .collect();
        write!(f, "{}", flags.join(" "))
    }
}
