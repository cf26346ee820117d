use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub struct CharTryFromSurrogateError {}

impl Error for CharTryFromSurrogateError {}

impl fmt::Display for CharTryFromSurrogateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        "converted integer out of range for `char`".fmt(f)
    }
}

pub fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

pub fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

pub fn try_from_utf16_surrogate_pair(
    high: u16,
    low: u16,
) -> Result<char, CharTryFromSurrogateError> {
    if !is_high_surrogate(high) || !is_low_surrogate(low) {
        return Err(CharTryFromSurrogateError {});
    }

    // Courtesy of: http://www.russellcottrell.com/greek/utilities/SurrogatePairCalculator.htm
    let code = ((high as u32 - 0xD800) * 0x400) + (low as u32 - 0xDC00) + 0x10000;

    char::try_from(code).map_err(|_| CharTryFromSurrogateError {})
}
