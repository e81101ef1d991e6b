//! Raw agency name → display name, phonetic key and synonyms.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Literal substitutions, applied in order.
///
/// These are plain substring replacements, so `"11 "` becomes `"11st "`
/// and a trailing capital `"S "` anywhere becomes `"South "`.
const REPLACEMENTS: &[(&str, &str)] = &[
    // parenthetical qualifiers become comma-separated segments
    (" (", ", "),
    (")", ""),
    ("Hts", "Heights"),
    ("Sq", "Square"),
    ("Pkwy", "Parkway"),
    ("Blvd", "Boulevard"),
    ("Hwy", "Highway"),
    ("Ctr", "Center"),
    ("Jct", "Junction"),
    ("1 ", "1st "),
    ("2 ", "2nd "),
    ("2-", "2nd "),
    ("3 ", "3rd "),
    ("4 ", "4th "),
    ("4-", "4th "),
    ("5 ", "5th "),
    ("6 ", "6th "),
    ("7 ", "7th "),
    ("7-", "7th "),
    ("8 ", "8th "),
    ("9 ", "9th "),
    ("0 ", "0th "),
    ("E ", "East "),
    ("W ", "West "),
    ("N ", "North "),
    ("S ", "South "),
    ("/", ", "),
];

/// Street-type abbreviations that only expand at a word end.
const STREET_TYPES: &[(&str, &str)] = &[
    ("Av", "Avenue"),
    ("Avs", "Avenues"),
    ("St", "Street"),
    ("Sts", "Streets"),
    ("Pl", "Place"),
];

static STREET_TYPE_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    STREET_TYPES
        .iter()
        .map(|(abbr, full)| {
            let re = Regex::new(&format!("({abbr})($| - |,| )"))
                .expect("street-type pattern is a valid regex");
            (re, *full)
        })
        .collect()
});

/// Every name derived from one raw agency name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopNames {
    /// Human-readable name, e.g. `"86th Street, 4th Avenue"`.
    pub display: String,
    /// Lookup key: the display name with `" - "` separators turned into commas.
    pub phonetic: String,
    /// Alternative phrasings a rider might use for this stop.
    pub synonyms: Vec<String>,
}

/// Derive display name, phonetic key and synonyms from a raw station name.
///
/// Pure: the same input always gives the same output.
///
/// # Examples
///
/// ```
/// use subway_data::names::normalize;
///
/// let names = normalize("86 St - 4 Av");
/// assert_eq!(names.display, "86th Street, 4th Avenue");
/// assert_eq!(
///     names.synonyms,
///     vec!["86th Street", "4th Avenue", "4th Avenue, 86th Street"]
/// );
/// ```
pub fn normalize(raw: &str) -> StopNames {
    let mut display = raw.to_string();
    for (from, to) in REPLACEMENTS {
        display = display.replace(from, to);
    }
    for (re, full) in STREET_TYPE_PATTERNS.iter() {
        display = expand_street_type(re, &display, full);
    }
    let display = display.split_whitespace().collect::<Vec<_>>().join(" ");

    let phonetic = display.replace(" - ", ", ");

    let mut synonyms: Vec<String> = phonetic
        .split(',')
        .map(|segment| segment.trim().to_string())
        .collect();
    if let [first, second] = synonyms.as_slice() {
        let reversed = format!("{second}, {first}");
        synonyms.push(reversed);
    }
    if phonetic != display {
        synonyms.push(phonetic.clone());
    }

    StopNames {
        display,
        phonetic,
        synonyms,
    }
}

/// A separator consumed by the match is put back as a comma.
fn expand_street_type(re: &Regex, given: &str, full: &str) -> String {
    re.replace_all(given, |caps: &Captures| {
        let found = &caps[0];
        let mut rep = full.to_string();
        if found.contains('-') || found.contains(',') {
            rep.push(',');
        }
        rep.push(' ');
        rep
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_and_avenue_pair() {
        let names = normalize("86 St - 4 Av");

        assert_eq!(names.display, "86th Street, 4th Avenue");
        assert_eq!(names.phonetic, "86th Street, 4th Avenue");
        assert_eq!(
            names.synonyms,
            vec!["86th Street", "4th Avenue", "4th Avenue, 86th Street"]
        );
    }

    #[test]
    fn surviving_dash_adds_phonetic_synonym() {
        let names = normalize("Times Sq - 42 St");

        assert_eq!(names.display, "Times Square - 42nd Street");
        assert_eq!(names.phonetic, "Times Square, 42nd Street");
        assert_eq!(
            names.synonyms,
            vec![
                "Times Square",
                "42nd Street",
                "42nd Street, Times Square",
                "Times Square, 42nd Street",
            ]
        );
    }

    #[test]
    fn parenthetical_becomes_segment() {
        let names = normalize("Bedford Park Blvd (Lehman College)");

        assert_eq!(names.display, "Bedford Park Boulevard, Lehman College");
        assert_eq!(
            names.synonyms,
            vec![
                "Bedford Park Boulevard",
                "Lehman College",
                "Lehman College, Bedford Park Boulevard",
            ]
        );
    }

    #[test]
    fn slash_separates_segments() {
        let names = normalize("Lexington Av/53 St");

        assert_eq!(names.display, "Lexington Avenue, 53rd Street");
        assert_eq!(names.synonyms.len(), 3);
    }

    #[test]
    fn directional_and_ordinal_prefixes() {
        assert_eq!(normalize("W 4 St").display, "West 4th Street");
        assert_eq!(normalize("E 180 St").display, "East 180th Street");
    }

    #[test]
    fn plural_street_types() {
        assert_eq!(
            normalize("Hoyt - Schermerhorn Sts").display,
            "Hoyt - Schermerhorn Streets"
        );
        assert_eq!(normalize("Marcy Avs").display, "Marcy Avenues");
    }

    #[test]
    fn place_and_abbreviations() {
        assert_eq!(normalize("Astor Pl").display, "Astor Place");
        assert_eq!(normalize("Broadway Jct").display, "Broadway Junction");
        assert_eq!(
            normalize("Jackson Hts - Roosevelt Av").display,
            "Jackson Heights - Roosevelt Avenue"
        );
        assert_eq!(normalize("Eastern Pkwy").display, "Eastern Parkway");
        assert_eq!(normalize("Barclays Ctr").display, "Barclays Center");
    }

    #[test]
    fn ordinal_substitution_over_matches() {
        // "1 " inside "11 " is still rewritten
        assert_eq!(normalize("111 St").display, "111st Street");
    }

    #[test]
    fn abbreviation_inside_word_is_left_alone() {
        assert_eq!(normalize("Stillwell Av").display, "Stillwell Avenue");
        assert_eq!(normalize("Avenue U").display, "Avenue U");
    }

    #[test]
    fn three_segments_get_no_reversed_synonym() {
        let names = normalize("World Trade Center, Cortlandt, Fulton");

        assert_eq!(
            names.synonyms,
            vec!["World Trade Center", "Cortlandt", "Fulton"]
        );
    }

    #[test]
    fn single_segment_is_its_own_synonym() {
        let names = normalize("Canal St");

        assert_eq!(names.display, "Canal Street");
        assert_eq!(names.synonyms, vec!["Canal Street"]);
    }

    #[test]
    fn whitespace_is_collapsed() {
        assert_eq!(normalize("  Bowery   ").display, "Bowery");
    }
}
