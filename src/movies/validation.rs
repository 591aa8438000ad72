use super::mapping::payload_from_form;
use super::models::{FormField, FormState, MoviePayload, SearchResult};
use std::fmt;
use thiserror::Error;

/// A single problem with the editor form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Missing(FormField),
    NotANumber(FormField),
    NoSelection,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Missing(field) => write!(f, "{} is required", field.label()),
            Violation::NotANumber(field) => write!(f, "{} must be a number", field.label()),
            Violation::NoSelection => write!(f, "Please select a movie."),
        }
    }
}

/// Every violation found on a form, reported together
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", join_violations(.0))]
pub struct ValidationError(pub Vec<Violation>);

impl ValidationError {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }
}

impl From<Violation> for ValidationError {
    fn from(violation: Violation) -> Self {
        ValidationError(vec![violation])
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn parse_number(field: FormField, value: &str) -> Result<f64, Violation> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or(Violation::NotANumber(field))
}

/// Check a form and its selection, returning the submission payload when valid.
pub fn validate(
    form: &FormState,
    selection: Option<&SearchResult>,
) -> Result<MoviePayload, ValidationError> {
    let mut violations = Vec::new();

    for field in FormField::ALL {
        let value = form.get(field);
        if value.trim().is_empty() {
            violations.push(Violation::Missing(field));
        } else if field.is_numeric() {
            if let Err(violation) = parse_number(field, value) {
                violations.push(violation);
            }
        }
    }

    let Some(selection) = selection else {
        violations.push(Violation::NoSelection);
        return Err(ValidationError(violations));
    };

    if !violations.is_empty() {
        return Err(ValidationError(violations));
    }

    Ok(payload_from_form(form, selection)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> SearchResult {
        SearchResult {
            id: 603,
            original_title: "The Matrix".to_string(),
            overview: "Neo".to_string(),
            popularity: 60.1,
            release_date: "1999-03-30".to_string(),
            vote_average: 8.2,
            poster_path: Some("/matrix.jpg".to_string()),
            backdrop_path: None,
        }
    }

    fn filled_form() -> FormState {
        FormState {
            title: "The Matrix".to_string(),
            description: "Neo".to_string(),
            popularity: "60.1".to_string(),
            release_date: "1999-03-30".to_string(),
            rating: "8.2".to_string(),
        }
    }

    #[test]
    fn test_empty_form_reports_every_violation() {
        let err = validate(&FormState::default(), None).unwrap_err();
        assert_eq!(
            err.violations(),
            &[
                Violation::Missing(FormField::Title),
                Violation::Missing(FormField::Description),
                Violation::Missing(FormField::ReleaseDate),
                Violation::Missing(FormField::Popularity),
                Violation::Missing(FormField::Rating),
                Violation::NoSelection,
            ]
        );
        assert_eq!(
            err.to_string(),
            "Title is required, Description is required, Release date is required, \
             Popularity is required, Rating is required, Please select a movie."
        );
    }

    #[test]
    fn test_missing_selection_alone() {
        let err = validate(&filled_form(), None).unwrap_err();
        assert_eq!(err.to_string(), "Please select a movie.");
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut form = filled_form();
        form.title = "   ".to_string();
        let err = validate(&form, Some(&selection())).unwrap_err();
        assert_eq!(err.violations(), &[Violation::Missing(FormField::Title)]);
    }

    #[test]
    fn test_non_numeric_popularity() {
        let mut form = filled_form();
        form.popularity = "lots".to_string();
        let err = validate(&form, Some(&selection())).unwrap_err();
        assert_eq!(err.to_string(), "Popularity must be a number");
    }

    #[test]
    fn test_valid_form_builds_payload() {
        let payload = validate(&filled_form(), Some(&selection())).unwrap();
        assert_eq!(payload.tmdb_id, 603);
        assert_eq!(payload.popularity, 60.1);
        assert_eq!(payload.backdrop_path, "");
    }

    #[test]
    fn test_parse_number_rejects_nan() {
        assert_eq!(
            parse_number(FormField::Rating, "NaN"),
            Err(Violation::NotANumber(FormField::Rating))
        );
        assert_eq!(parse_number(FormField::Rating, " 7.5 "), Ok(7.5));
    }
}
