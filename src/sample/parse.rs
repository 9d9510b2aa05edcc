use crate::error::CvrErr;
use crate::sample::{error::SampleErr, types::Arm};

/// Reads outcomes from text: numbers separated by whitespace and/or commas,
/// `#` comments run to end of line.
pub fn parse_sample(arm: Arm, text: &str) -> Result<Vec<f64>, CvrErr> {
    let mut values = Vec::new();
    for (i, raw_line) in text.lines().enumerate() {
        let line = match raw_line.split_once('#') {
            Some((content, _comment)) => content,
            None => raw_line,
        };
        for token in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let value = token.parse::<f64>().map_err(|_| SampleErr::BadToken {
                arm,
                line: i + 1,
                token: token.to_string(),
            })?;
            values.push(value);
        }
    }
    Ok(values)
}
