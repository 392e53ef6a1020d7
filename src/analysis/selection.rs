use super::patterns::consecutive_pairs;
use crate::error::ValidationError;
use crate::history::draw::Draw;
use serde::Serialize;

/// Quick look at one set of 6 numbers, e.g. a freshly generated suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionAnalysis {
    pub numbers: [u8; 6],
    pub sum: u32,
    pub odd: usize,
    pub even: usize,
    pub consecutive: usize,
}

pub fn analyze_selection(numbers: &[i64]) -> Result<SelectionAnalysis, ValidationError> {
    let draw = Draw::new(numbers)?;
    let odd = draw.numbers().iter().filter(|&&n| n % 2 == 1).count();

    Ok(SelectionAnalysis {
        numbers: draw.sorted(),
        sum: draw.sum(),
        odd,
        even: draw.numbers().len() - odd,
        consecutive: consecutive_pairs(draw.numbers()),
    })
}
