//! Hebrew numerals (gematria) for day-of-month and year labels.

const GERESH: char = '\u{05F3}';
const GERSHAYIM: char = '\u{05F4}';

const HUNDREDS: [(u32, char); 4] = [(400, 'ת'), (300, 'ש'), (200, 'ר'), (100, 'ק')];
const TENS: [char; 9] = ['י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ'];
const ONES: [char; 9] = ['א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט'];

/// Spell `n` (1..=999) in Hebrew letters with geresh/gershayim punctuation.
///
/// 15 and 16 are written ט״ו and ט״ז to avoid spelling a divine name.
/// Values of 1000 or more have their thousands dropped, the customary way
/// of writing years (5784 → תשפ״ד).
pub fn hebrew_numeral(n: u32) -> String {
    let mut rest = n % 1000;
    let mut letters: Vec<char> = Vec::new();

    while rest >= 100 {
        for &(value, letter) in &HUNDREDS {
            if rest >= value {
                letters.push(letter);
                rest -= value;
                break;
            }
        }
    }

    match rest {
        15 => letters.extend(['ט', 'ו']),
        16 => letters.extend(['ט', 'ז']),
        _ => {
            if rest >= 10 {
                letters.push(TENS[(rest / 10 - 1) as usize]);
            }
            if rest % 10 > 0 {
                letters.push(ONES[(rest % 10 - 1) as usize]);
            }
        }
    }

    punctuate(&letters)
}

fn punctuate(letters: &[char]) -> String {
    match letters {
        [] => String::new(),
        [single] => format!("{single}{GERESH}"),
        [init @ .., last] => {
            let mut out: String = init.iter().collect();
            out.push(GERSHAYIM);
            out.push(*last);
            out
        }
    }
}
