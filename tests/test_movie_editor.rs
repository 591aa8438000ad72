#![cfg(feature = "test-utils")]

mod support;

use crate::support::tracing_init;
use marquee::backend::BackendError;
use marquee::editor::{EditorError, MovieEditor, SaveOutcome};
use marquee::movies::{FormField, SearchResult};
use marquee::test_support::{
    sample_record, sample_result, search_page, BackendCall, MockBackend, MockCatalog,
};

const TOKEN: &str = "session-token";

fn inception() -> SearchResult {
    SearchResult {
        id: 27205,
        original_title: "Inception".to_string(),
        overview: "A thief who steals corporate secrets...".to_string(),
        popularity: 83.9,
        release_date: "2010-07-15".to_string(),
        vote_average: 8.4,
        poster_path: Some("/abc.jpg".to_string()),
        backdrop_path: Some("/backdrop.jpg".to_string()),
    }
}

#[tokio::test]
async fn test_search_select_and_create() {
    tracing_init();

    let catalog = MockCatalog::new();
    catalog.push_page(search_page(
        vec![inception(), sample_result(64956, "Inception: The Cobol Job")],
        1,
    ));
    let backend = MockBackend::new();

    let mut editor = MovieEditor::create();
    editor.set_query("Inception");
    editor.search(&catalog).await.unwrap();

    assert_eq!(catalog.calls(), vec![("Inception".to_string(), 1)]);
    let titles: Vec<&str> = editor
        .results()
        .iter()
        .map(|r| r.original_title.as_str())
        .collect();
    assert_eq!(titles, vec!["Inception", "Inception: The Cobol Job"]);
    assert!(!editor.show_pagination());

    editor.select(inception());
    assert!(editor.is_selected(27205));
    assert_eq!(editor.form().get(FormField::Title), "Inception");
    assert_eq!(editor.form().get(FormField::ReleaseDate), "2010-07-15");
    assert_eq!(editor.form().get(FormField::Rating), "8.4");
    assert_eq!(
        editor.poster_url().as_deref(),
        Some("https://image.tmdb.org/t/p/original/abc.jpg")
    );

    editor.update_field(FormField::Title, "Inception (2010)");
    let outcome = editor.save(&backend, Some(TOKEN)).await.unwrap();
    assert_eq!(outcome, SaveOutcome::Saved);

    let created = backend.created();
    assert_eq!(created.len(), 1);
    let (credential, payload) = &created[0];
    assert_eq!(credential, TOKEN);
    assert_eq!(payload.tmdb_id, 27205);
    assert_eq!(payload.title, "Inception (2010)");
    assert_eq!(payload.rating, 8.4);
    assert_eq!(
        payload.poster_path,
        "https://image.tmdb.org/t/p/original/abc.jpg"
    );
    assert_eq!(
        payload.backdrop_path,
        "https://image.tmdb.org/t/p/original/backdrop.jpg"
    );
    assert!(!payload.is_featured);
    assert_eq!(backend.movies().len(), 1);
}

#[tokio::test]
async fn test_paging_through_results() {
    tracing_init();

    let catalog = MockCatalog::new();
    catalog.push_page(search_page(vec![sample_result(1, "Alien")], 3));
    catalog.push_page(search_page(vec![sample_result(2, "Aliens")], 3));

    let mut editor = MovieEditor::create();
    editor.set_query("alien");
    editor.search(&catalog).await.unwrap();
    assert!(editor.show_pagination());
    assert!(!editor.can_go_previous());

    let request = editor.next_page().expect("page 2 should be requested");
    editor.run_search(&catalog, request).await;

    assert_eq!(editor.current_page(), 2);
    assert_eq!(editor.results()[0].original_title, "Aliens");
    assert_eq!(
        catalog.calls(),
        vec![("alien".to_string(), 1), ("alien".to_string(), 2)]
    );
}

#[tokio::test]
async fn test_empty_query_is_rejected_without_a_call() {
    tracing_init();

    let catalog = MockCatalog::new();
    let mut editor = MovieEditor::create();
    editor.set_query("   ");

    let result = editor.search(&catalog).await;

    assert_eq!(result, Err(EditorError::EmptyQuery));
    assert_eq!(editor.error(), Some("Please provide a search term."));
    assert!(catalog.calls().is_empty());
}

#[tokio::test]
async fn test_save_while_logged_out_sends_nothing() {
    tracing_init();

    let backend = MockBackend::new();
    let mut editor = MovieEditor::create();
    editor.select(inception());

    let result = editor.save(&backend, None).await;

    assert_eq!(result, Err(EditorError::AuthRequired));
    assert_eq!(editor.error(), Some("You must be logged in."));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_save_without_selection_reports_every_problem() {
    tracing_init();

    let backend = MockBackend::new();
    let mut editor = MovieEditor::create();
    editor.update_field(FormField::Popularity, "lots");

    let result = editor.save(&backend, Some(TOKEN)).await;

    assert!(matches!(result, Err(EditorError::Invalid(_))));
    let message = editor.error().unwrap_or_default();
    assert!(message.contains("Title is required"));
    assert!(message.contains("Popularity must be a number"));
    assert!(message.contains("Please select a movie."));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_edit_round_trip_keeps_image_urls() {
    tracing_init();

    let record = sample_record(7, "Heat");
    let backend = MockBackend::with_movies(vec![record.clone()]);

    let mut editor = MovieEditor::edit(7);
    assert!(!editor.show_search());
    editor.load(&backend).await;

    assert_eq!(editor.form().get(FormField::Title), "Heat");
    assert_eq!(editor.selected().map(|s| s.id), Some(record.tmdb_id));
    assert_eq!(
        editor.selected().and_then(|s| s.poster_path.as_deref()),
        Some("heat.jpg")
    );

    editor.update_field(FormField::Rating, "8.3");
    let outcome = editor.save(&backend, Some(TOKEN)).await.unwrap();
    assert_eq!(outcome, SaveOutcome::Saved);

    let updated = backend.updated();
    assert_eq!(updated.len(), 1);
    let (_, movie_id, payload) = &updated[0];
    assert_eq!(*movie_id, 7);
    assert_eq!(payload.rating, 8.3);
    assert_eq!(payload.poster_path, record.poster_path);
    assert_eq!(payload.backdrop_path, record.backdrop_path);
    assert_eq!(
        backend.calls()[0],
        BackendCall::Get(7),
        "edit mode fetches the record before anything else"
    );
}

#[tokio::test]
async fn test_update_of_removed_movie_shows_server_message() {
    tracing_init();

    let backend = MockBackend::with_movies(vec![sample_record(4, "Ronin")]);
    let mut editor = MovieEditor::edit(4);
    editor.load(&backend).await;

    backend.fail_next_write(BackendError::NotFound {
        message: Some("Movie not found".to_string()),
    });
    let outcome = editor.save(&backend, Some(TOKEN)).await.unwrap();

    assert_eq!(outcome, SaveOutcome::Failed);
    assert_eq!(editor.error(), Some("Movie not found"));
}

#[tokio::test]
async fn test_rejected_save_shows_server_message() {
    tracing_init();

    let backend = MockBackend::new();
    backend.fail_next_write(BackendError::Server {
        status: 400,
        message: Some("title must be unique".to_string()),
    });

    let mut editor = MovieEditor::create();
    editor.select(inception());
    let outcome = editor.save(&backend, Some(TOKEN)).await.unwrap();

    assert_eq!(outcome, SaveOutcome::Failed);
    assert_eq!(editor.error(), Some("title must be unique"));
    assert!(!editor.is_loading());
}
