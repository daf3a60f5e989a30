//! Low-level text cleaning shared by every canonicalizer

/// Lowercase `raw` and fold accented Latin letters to their ASCII base.
///
/// Combining marks (U+0300..U+036F) are dropped, so decomposed input folds
/// the same way as precomposed input.
pub fn fold_diacritics(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars().flat_map(char::to_lowercase) {
        if ('\u{0300}'..='\u{036f}').contains(&c) {
            continue;
        }
        match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' | 'ǎ' => out.push('a'),
            'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => out.push('c'),
            'ď' | 'đ' | 'ð' => out.push('d'),
            'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => out.push('e'),
            'ĝ' | 'ğ' | 'ġ' | 'ģ' => out.push('g'),
            'ĥ' | 'ħ' => out.push('h'),
            'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' | 'ǐ' => out.push('i'),
            'ĵ' => out.push('j'),
            'ķ' => out.push('k'),
            'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => out.push('l'),
            'ñ' | 'ń' | 'ņ' | 'ň' | 'ŉ' | 'ŋ' => out.push('n'),
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' | 'ơ' | 'ǒ' => out.push('o'),
            'ŕ' | 'ŗ' | 'ř' => out.push('r'),
            'ś' | 'ŝ' | 'ş' | 'š' | 'ș' | 'ſ' => out.push('s'),
            'ţ' | 'ť' | 'ț' | 'ŧ' => out.push('t'),
            'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' | 'ư' | 'ǔ' => out.push('u'),
            'ŵ' => out.push('w'),
            'ý' | 'ÿ' | 'ŷ' => out.push('y'),
            'ź' | 'ż' | 'ž' => out.push('z'),
            // Vietnamese precomposed vowels
            '\u{1ea0}'..='\u{1eb7}' => out.push('a'),
            '\u{1eb8}'..='\u{1ec7}' => out.push('e'),
            '\u{1ec8}'..='\u{1ecb}' => out.push('i'),
            '\u{1ecc}'..='\u{1ee3}' => out.push('o'),
            '\u{1ee4}'..='\u{1ef1}' => out.push('u'),
            '\u{1ef2}'..='\u{1ef9}' => out.push('y'),
            'ß' => out.push_str("ss"),
            'æ' => out.push_str("ae"),
            'œ' => out.push_str("oe"),
            'þ' => out.push_str("th"),
            'ĳ' => out.push_str("ij"),
            other => out.push(other),
        }
    }
    out
}

/// Fold, lowercase and collapse punctuation and whitespace into single spaces.
///
/// Numeric detail survives: `.` or `,` between two digits becomes `.`, and a
/// `+`/`-` that starts a number is kept as its sign. The output only contains
/// alphanumerics, single spaces, and those kept characters, so cleaning is a
/// fixed point.
pub fn clean(raw: &str) -> String {
    let chars: Vec<char> = fold_diacritics(raw).chars().collect();
    let mut out = String::with_capacity(chars.len());

    for (i, &c) in chars.iter().enumerate() {
        let prev = i.checked_sub(1).map(|j| chars[j]);
        let digit_follows = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());

        let kept = if c.is_alphanumeric() {
            Some(c)
        } else if matches!(c, '.' | ',') && digit_follows && prev.is_some_and(|p| p.is_ascii_digit())
        {
            Some('.')
        } else if matches!(c, '+' | '-') && digit_follows && !prev.is_some_and(char::is_alphanumeric)
        {
            Some(c)
        } else {
            None
        };
        out.push(kept.unwrap_or(' '));
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop filler tokens from an already cleaned string.
///
/// A name made only of fillers is returned unchanged.
pub fn strip_fillers(cleaned: &str, fillers: &[&str]) -> String {
    let kept: Vec<&str> = cleaned
        .split(' ')
        .filter(|token| !fillers.contains(token))
        .collect();

    if kept.is_empty() {
        cleaned.to_string()
    } else {
        kept.join(" ")
    }
}
