use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A movie as returned by the TMDB search endpoint.
///
/// Image paths are partial fragments (e.g. `/abc.jpg`) that only become
/// displayable once prefixed with the image host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub id: u64,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
}

/// One page of TMDB search results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchPage {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<SearchResult>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

fn first_page() -> u32 {
    1
}

/// A movie as persisted by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub id: i64,
    pub tmdb_id: u64,
    pub title: String,
    // Older records were written with TMDB's field names
    #[serde(default, alias = "overview", deserialize_with = "string_or_null")]
    pub description: String,
    #[serde(deserialize_with = "number_or_string")]
    pub popularity: f64,
    #[serde(default, deserialize_with = "string_or_null")]
    pub release_date: String,
    #[serde(alias = "voteAverage", deserialize_with = "number_or_string")]
    pub rating: f64,
    #[serde(default, deserialize_with = "string_or_null")]
    pub backdrop_path: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub poster_path: String,
    #[serde(default, deserialize_with = "flag_from_int_or_bool")]
    pub is_featured: bool,
}

/// The normalized body sent on create and update
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoviePayload {
    pub tmdb_id: u64,
    pub title: String,
    pub description: String,
    pub popularity: f64,
    pub release_date: String,
    pub rating: f64,
    pub backdrop_path: String,
    pub poster_path: String,
    #[serde(serialize_with = "flag_as_int")]
    pub is_featured: bool,
}

/// The editor's working copy. Numeric fields stay strings until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub description: String,
    pub popularity: String,
    pub release_date: String,
    pub rating: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Description,
    Popularity,
    ReleaseDate,
    Rating,
}

impl FormField {
    /// Fields in the order violations are reported
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Description,
        FormField::ReleaseDate,
        FormField::Popularity,
        FormField::Rating,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::Popularity => "Popularity",
            FormField::ReleaseDate => "Release date",
            FormField::Rating => "Rating",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, FormField::Popularity | FormField::Rating)
    }
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Popularity => &self.popularity,
            FormField::ReleaseDate => &self.release_date,
            FormField::Rating => &self.rating,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Title => self.title = value,
            FormField::Description => self.description = value,
            FormField::Popularity => self.popularity = value,
            FormField::ReleaseDate => self.release_date = value,
            FormField::Rating => self.rating = value,
        }
    }
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn flag_from_int_or_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(value)) => Ok(value),
        Some(Flag::Int(value)) => Ok(value != 0),
        None => Ok(false),
    }
}

fn flag_as_int<S>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*flag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accepts_numeric_strings_and_int_flags() {
        let json = r#"{
            "id": 7,
            "tmdbId": 27205,
            "title": "Inception",
            "description": "A thief who steals corporate secrets",
            "popularity": "83.95",
            "releaseDate": "2010-07-15",
            "rating": 8.4,
            "backdropPath": "https://image.tmdb.org/t/p/original/back.jpg",
            "posterPath": "https://image.tmdb.org/t/p/original/abc.jpg",
            "isFeatured": 1
        }"#;

        let record: MovieRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.popularity, 83.95);
        assert_eq!(record.rating, 8.4);
        assert!(record.is_featured);
    }

    #[test]
    fn test_list_tolerates_null_text_columns() {
        let json = r#"[
            {"id": 1, "tmdbId": 949, "title": "Heat", "description": null, "popularity": 30.1,
             "releaseDate": null, "rating": 7.9, "backdropPath": null, "posterPath": null,
             "isFeatured": 0},
            {"id": 2, "tmdbId": 8195, "title": "Ronin", "description": "Mercenaries", "popularity": 12,
             "releaseDate": "1998-09-25", "rating": 6.9,
             "backdropPath": "https://image.tmdb.org/t/p/original/ronin_bd.jpg",
             "posterPath": "https://image.tmdb.org/t/p/original/ronin.jpg", "isFeatured": 1}
        ]"#;

        let records: Vec<MovieRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].poster_path, "");
        assert_eq!(records[0].backdrop_path, "");
        assert_eq!(records[0].description, "");
        assert_eq!(records[0].release_date, "");
        assert_eq!(records[1].poster_path, "https://image.tmdb.org/t/p/original/ronin.jpg");
        assert!(records[1].is_featured);
    }

    #[test]
    fn test_record_accepts_tmdb_field_aliases() {
        let json = r#"{
            "id": 3,
            "tmdbId": 1,
            "title": "Heat",
            "overview": "Crime saga",
            "popularity": 12.5,
            "releaseDate": "1995-12-15",
            "voteAverage": 7.9,
            "isFeatured": null
        }"#;

        let record: MovieRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.description, "Crime saga");
        assert_eq!(record.rating, 7.9);
        assert!(!record.is_featured);
        assert_eq!(record.poster_path, "");
    }

    #[test]
    fn test_payload_serializes_camel_case_with_int_flag() {
        let payload = MoviePayload {
            tmdb_id: 27205,
            title: "Inception".to_string(),
            description: "Dreams".to_string(),
            popularity: 83.95,
            release_date: "2010-07-15".to_string(),
            rating: 8.4,
            backdrop_path: "https://image.tmdb.org/t/p/original/back.jpg".to_string(),
            poster_path: "https://image.tmdb.org/t/p/original/abc.jpg".to_string(),
            is_featured: false,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["tmdbId"], 27205);
        assert_eq!(value["releaseDate"], "2010-07-15");
        assert_eq!(value["isFeatured"], 0);
        assert_eq!(value["posterPath"], "https://image.tmdb.org/t/p/original/abc.jpg");
    }

    #[test]
    fn test_search_page_tolerates_missing_fields() {
        let page: SearchPage =
            serde_json::from_str(r#"{"results": [{"id": 1, "poster_path": null}]}"#).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.results[0].original_title, "");
        assert_eq!(page.results[0].backdrop_path, None);
    }

    #[test]
    fn test_form_field_get_set() {
        let mut form = FormState::default();
        form.set(FormField::ReleaseDate, "2010-07-15".to_string());
        assert_eq!(form.get(FormField::ReleaseDate), "2010-07-15");
        assert_eq!(form.get(FormField::Title), "");
    }
}
