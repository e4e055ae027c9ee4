const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [&str; 12] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
];

/// Parameter name for a parser destination.
pub fn parameter_name(dest: &str) -> String {
    dest.replace('-', "_")
}

/// Joins underscore-separated segments into lower camel case.
///
/// The first segment keeps its casing; later segments are title-cased.
/// Identifiers without an underscore are returned unchanged.
pub fn lower_camel_case(identifier: &str) -> String {
    if !identifier.contains('_') {
        return identifier.to_string();
    }

    let mut segments = identifier.split('_');
    let mut output = segments.next().unwrap_or_default().to_string();
    for segment in segments {
        output.push_str(&title_case(segment));
    }
    output
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
fn title_case(segment: &str) -> String {
    let mut output = String::with_capacity(segment.len());
    let mut in_word = false;
    for ch in segment.chars() {
        if ch.is_alphabetic() {
            if in_word {
                output.extend(ch.to_lowercase());
            } else {
                output.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            output.push(ch);
            in_word = false;
        }
    }
    output
}

/// Spells a decimal number in English words, e.g. `42` as `forty-two`.
///
/// `digits` holds ASCII digits only. Returns `None` past the decillions.
pub fn spell_number(negative: bool, digits: &str) -> Option<String> {
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Some(ONES[0].to_string());
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) || digits.len().div_ceil(3) > SCALES.len() {
        return None;
    }

    let mut groups = Vec::new();
    let mut end = digits.len();
    while end > 0 {
        let start = end.saturating_sub(3);
        groups.push(digits[start..end].parse::<u64>().ok()?);
        end = start;
    }

    let mut output = String::new();
    if negative {
        output.push_str("minus ");
    }
    let mut first = true;
    for (scale, group) in groups.into_iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        if !first {
            output.push_str(if scale == 0 && group < 100 { " and " } else { ", " });
        }
        first = false;

        output.push_str(&spell_below_thousand(group));
        if scale > 0 {
            output.push(' ');
            output.push_str(SCALES[scale]);
        }
    }
    Some(output)
}

/// Identifier form of a spelled number, e.g. `101` as `one_hundred_and_one`.
pub fn number_identifier(negative: bool, digits: &str) -> Option<String> {
    spell_number(negative, digits).map(|words| words.replace(',', "").replace(['-', ' '], "_"))
}

fn spell_below_thousand(value: u64) -> String {
    let hundreds = value / 100;
    let rest = value % 100;

    let mut output = String::new();
    if hundreds > 0 {
        output.push_str(ONES[hundreds as usize]);
        output.push_str(" hundred");
        if rest > 0 {
            output.push_str(" and ");
        }
    }
    if rest > 0 || hundreds == 0 {
        output.push_str(&spell_below_hundred(rest));
    }
    output
}

fn spell_below_hundred(value: u64) -> String {
    if value < 20 {
        return ONES[value as usize].to_string();
    }
    let tens = TENS[(value / 10) as usize];
    match value % 10 {
        0 => tens.to_string(),
        ones => format!("{tens}-{}", ONES[ones as usize]),
    }
}
