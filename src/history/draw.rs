use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 45;
pub const DRAW_SIZE: usize = 6;

/// One recorded result: 6 distinct numbers in 1..=45, kept in the order they were entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<u8>")]
pub struct Draw([u8; DRAW_SIZE]);

impl Draw {
    /// Validation gate shared by add-draw, import and the initial load.
    pub fn new(numbers: &[i64]) -> Result<Self, ValidationError> {
        if numbers.len() != DRAW_SIZE {
            return Err(ValidationError::WrongCount {
                found: numbers.len(),
            });
        }

        if let Some(&bad) = numbers
            .iter()
            .find(|&&n| n < MIN_NUMBER as i64 || n > MAX_NUMBER as i64)
        {
            return Err(ValidationError::OutOfRange(bad));
        }

        let mut out = [0u8; DRAW_SIZE];
        for (i, &n) in numbers.iter().enumerate() {
            if numbers[..i].contains(&n) {
                return Err(ValidationError::Duplicate(n));
            }
            out[i] = n as u8;
        }

        Ok(Draw(out))
    }

    pub fn numbers(&self) -> &[u8; DRAW_SIZE] {
        &self.0
    }

    pub fn sorted(&self) -> [u8; DRAW_SIZE] {
        let mut sorted = self.0;
        sorted.sort_unstable();
        sorted
    }

    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&n| n as u32).sum()
    }
}

/// Splits user input such as `"3, 11, 19, 27, 33, 42"` on commas and/or whitespace.
pub fn parse_numbers(text: &str) -> Result<Vec<i64>, ValidationError> {
    let tokens: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    tokens
        .into_iter()
        .map(|t| {
            t.parse::<i64>()
                .map_err(|_| ValidationError::NotANumber(t.to_string()))
        })
        .collect()
}

impl TryFrom<Vec<i64>> for Draw {
    type Error = ValidationError;

    fn try_from(numbers: Vec<i64>) -> Result<Self, Self::Error> {
        Draw::new(&numbers)
    }
}

impl From<Draw> for Vec<u8> {
    fn from(draw: Draw) -> Self {
        draw.0.to_vec()
    }
}
