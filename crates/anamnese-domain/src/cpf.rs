//! CPF normalization and check-digit validation.
//!
//! The CPF (Cadastro de Pessoas Físicas) is Brazil's 11-digit individual
//! taxpayer identifier. The last two digits are check digits computed from
//! the first nine.

/// Strip every non-digit character from a human-entered CPF.
///
/// Order-preserving, total: `"529.982.247-25"` becomes `"52998224725"`,
/// the empty string stays empty. The result has arbitrary length — callers
/// that need an exact CPF must additionally check for length 11.
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validate a CPF against the standard check-digit scheme.
///
/// The input is normalized first, so formatted (`529.982.247-25`) and bare
/// (`52998224725`) forms are both accepted. Sequences of 11 identical
/// digits are structurally invalid even though some pass the checksum.
pub fn is_valid(cpf: &str) -> bool {
    let digits: Vec<u32> = normalize(cpf)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();
    if digits.len() != 11 {
        return false;
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }
    check_digit(&digits[..9], 10) == digits[9] && check_digit(&digits[..10], 11) == digits[10]
}

/// Weighted-sum check digit: weights run from `first_weight` down to 2,
/// `remainder = (sum * 10) % 11`, with 10 and 11 mapping to 0.
fn check_digit(digits: &[u32], first_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip((2..=first_weight).rev())
        .map(|(&d, w)| d * w)
        .sum();
    let remainder = (sum * 10) % 11;
    if remainder >= 10 { 0 } else { remainder }
}
