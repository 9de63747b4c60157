//! Download filenames derived from the team name.

use regex::Regex;

/// Collapse whitespace runs to single underscores; every other character
/// is kept as typed.
#[must_use]
pub fn filename_slug(team_name: &str) -> String {
    Regex::new(r"\s+")
        .map(|re| re.replace_all(team_name, "_").into_owned())
        .unwrap_or_else(|_| team_name.replace(char::is_whitespace, "_"))
}

#[must_use]
pub fn backup_filename(team_name: &str) -> String {
    format!("{}_innings.json", filename_slug(team_name))
}

#[must_use]
pub fn summary_filename(team_name: &str) -> String {
    format!("{}_innings_summary.csv", filename_slug(team_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_whitespace_runs() {
        assert_eq!(filename_slug("Riverside Otters"), "Riverside_Otters");
        assert_eq!(filename_slug("  spaced\tout  team "), "_spaced_out_team_");
        assert_eq!(filename_slug("OneWord"), "OneWord");
        assert_eq!(filename_slug(""), "");
    }

    #[test]
    fn filenames_carry_the_expected_suffixes() {
        assert_eq!(backup_filename("My Team"), "My_Team_innings.json");
        assert_eq!(
            summary_filename("My Team"),
            "My_Team_innings_summary.csv"
        );
    }
}
