//! Conversions between the TMDB search shape, the persisted record, the
//! editor form and the submission payload. One function per direction.

use super::models::{FormState, MoviePayload, MovieRecord, SearchResult};
use super::validation::{parse_number, Violation};
use super::FormField;

/// Host prefix that turns a TMDB image fragment into a displayable URL
pub const IMAGE_HOST: &str = "https://image.tmdb.org/t/p/original/";

/// Build a full image URL from a TMDB fragment.
///
/// Leading slashes are trimmed so `/abc.jpg` and `abc.jpg` map to the same URL.
/// Missing or blank fragments yield an empty string.
pub fn image_url(fragment: Option<&str>) -> String {
    match fragment.map(|f| f.trim().trim_start_matches('/')) {
        Some(fragment) if !fragment.is_empty() => format!("{}{}", IMAGE_HOST, fragment),
        _ => String::new(),
    }
}

/// Recover the raw fragment from a persisted image URL.
///
/// URLs that don't carry the image host are kept whole.
pub fn image_fragment(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    let fragment = url.strip_prefix(IMAGE_HOST).unwrap_or(url);
    if fragment.is_empty() {
        None
    } else {
        Some(fragment.to_string())
    }
}

pub fn form_from_search_result(result: &SearchResult) -> FormState {
    FormState {
        title: result.original_title.clone(),
        description: result.overview.clone(),
        popularity: result.popularity.to_string(),
        release_date: result.release_date.clone(),
        rating: result.vote_average.to_string(),
    }
}

pub fn form_from_record(record: &MovieRecord) -> FormState {
    FormState {
        title: record.title.clone(),
        description: record.description.clone(),
        popularity: record.popularity.to_string(),
        release_date: record.release_date.clone(),
        rating: record.rating.to_string(),
    }
}

/// Rebuild the search-shaped selection for a persisted record so the editor
/// can show its poster and keep its TMDB id.
pub fn selection_from_record(record: &MovieRecord) -> SearchResult {
    SearchResult {
        id: record.tmdb_id,
        original_title: record.title.clone(),
        overview: record.description.clone(),
        popularity: record.popularity,
        release_date: record.release_date.clone(),
        vote_average: record.rating,
        poster_path: image_fragment(&record.poster_path),
        backdrop_path: image_fragment(&record.backdrop_path),
    }
}

/// Build the submission payload. Fails only if a numeric field doesn't parse.
pub fn payload_from_form(
    form: &FormState,
    selection: &SearchResult,
) -> Result<MoviePayload, Violation> {
    Ok(MoviePayload {
        tmdb_id: selection.id,
        title: form.title.clone(),
        description: form.description.clone(),
        popularity: parse_number(FormField::Popularity, &form.popularity)?,
        release_date: form.release_date.clone(),
        rating: parse_number(FormField::Rating, &form.rating)?,
        backdrop_path: image_url(selection.backdrop_path.as_deref()),
        poster_path: image_url(selection.poster_path.as_deref()),
        is_featured: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inception() -> SearchResult {
        SearchResult {
            id: 27205,
            original_title: "Inception".to_string(),
            overview: "A thief who steals corporate secrets".to_string(),
            popularity: 83.952,
            release_date: "2010-07-15".to_string(),
            vote_average: 8.4,
            poster_path: Some("/abc.jpg".to_string()),
            backdrop_path: Some("/back.jpg".to_string()),
        }
    }

    fn record() -> MovieRecord {
        MovieRecord {
            id: 12,
            tmdb_id: 27205,
            title: "Inception".to_string(),
            description: "A thief who steals corporate secrets".to_string(),
            popularity: 83.952,
            release_date: "2010-07-15".to_string(),
            rating: 8.4,
            backdrop_path: "https://image.tmdb.org/t/p/original/back.jpg".to_string(),
            poster_path: "https://image.tmdb.org/t/p/original/abc.jpg".to_string(),
            is_featured: true,
        }
    }

    #[test]
    fn test_form_from_search_result() {
        let form = form_from_search_result(&inception());
        assert_eq!(form.title, "Inception");
        assert_eq!(form.description, "A thief who steals corporate secrets");
        assert_eq!(form.popularity, "83.952");
        assert_eq!(form.release_date, "2010-07-15");
        assert_eq!(form.rating, "8.4");
    }

    #[test]
    fn test_whole_numbers_render_without_fraction() {
        let mut result = inception();
        result.vote_average = 8.0;
        assert_eq!(form_from_search_result(&result).rating, "8");
    }

    #[test]
    fn test_image_url_normalizes_leading_slash() {
        assert_eq!(
            image_url(Some("/abc.jpg")),
            "https://image.tmdb.org/t/p/original/abc.jpg"
        );
        assert_eq!(
            image_url(Some("abc.jpg")),
            "https://image.tmdb.org/t/p/original/abc.jpg"
        );
        assert_eq!(image_url(None), "");
        assert_eq!(image_url(Some("  ")), "");
    }

    #[test]
    fn test_image_fragment_strips_host() {
        assert_eq!(
            image_fragment("https://image.tmdb.org/t/p/original/abc.jpg"),
            Some("abc.jpg".to_string())
        );
        assert_eq!(
            image_fragment("https://cdn.example.com/x.jpg"),
            Some("https://cdn.example.com/x.jpg".to_string())
        );
        assert_eq!(image_fragment(""), None);
        assert_eq!(image_fragment(IMAGE_HOST), None);
    }

    #[test]
    fn test_selection_from_record_carries_raw_fragments() {
        let selection = selection_from_record(&record());
        assert_eq!(selection.id, 27205);
        assert_eq!(selection.poster_path.as_deref(), Some("abc.jpg"));
        assert_eq!(selection.backdrop_path.as_deref(), Some("back.jpg"));
    }

    #[test]
    fn test_payload_from_form() {
        let result = inception();
        let form = form_from_search_result(&result);
        let payload = payload_from_form(&form, &result).unwrap();

        assert_eq!(payload.tmdb_id, 27205);
        assert_eq!(payload.popularity, 83.952);
        assert_eq!(payload.rating, 8.4);
        assert_eq!(
            payload.poster_path,
            "https://image.tmdb.org/t/p/original/abc.jpg"
        );
        assert!(!payload.is_featured);
    }

    #[test]
    fn test_record_round_trips_through_payload() {
        let record = record();
        let form = form_from_record(&record);
        let selection = selection_from_record(&record);
        let payload = payload_from_form(&form, &selection).unwrap();

        assert_eq!(payload.title, record.title);
        assert_eq!(payload.description, record.description);
        assert_eq!(payload.popularity, record.popularity);
        assert_eq!(payload.release_date, record.release_date);
        assert_eq!(payload.rating, record.rating);
        assert_eq!(payload.poster_path, record.poster_path);
        assert_eq!(payload.backdrop_path, record.backdrop_path);
        assert_eq!(payload.tmdb_id, record.tmdb_id);
    }

    #[test]
    fn test_payload_rejects_non_numeric_rating() {
        let result = inception();
        let mut form = form_from_search_result(&result);
        form.rating = "great".to_string();
        assert_eq!(
            payload_from_form(&form, &result),
            Err(Violation::NotANumber(FormField::Rating))
        );
    }
}
