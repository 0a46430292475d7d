use chrono::NaiveDate;
use lifeline_core::{Event, EventRepository, FsEventRepository, RepoError};
use tempfile::TempDir;

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").expect("test date should parse")
}

fn journal() -> (TempDir, FsEventRepository) {
    let dir = TempDir::new().expect("temp dir should be created");
    let repo = FsEventRepository::new(dir.path().join("events"));
    (dir, repo)
}

#[test]
fn save_then_load_roundtrip() {
    let (_dir, repo) = journal();
    let event = Event::new("First Job", date("2012-07-10"), "work", "Started first job.");

    let path = repo.save_event(&event).expect("save should succeed");
    assert!(path.ends_with("2012-07-10_first-job.md"));
    assert!(path.exists());

    let loaded = repo
        .load_event("2012-07-10_first-job.md")
        .expect("load should succeed");
    assert_eq!(loaded, event);
}

#[test]
fn save_creates_the_events_directory() {
    let (_dir, repo) = journal();
    assert!(!repo.events_dir().exists());

    let event = Event::new("Graduation", date("2012-05-15"), "education", "Done.");
    repo.save_event(&event).expect("save should succeed");
    assert!(repo.events_dir().is_dir());
}

#[test]
fn invalid_event_is_rejected_before_touching_disk() {
    let (_dir, repo) = journal();
    let event = Event::new("Oops", date("2012-05-15"), "not-a-kind", "Bad kind.");

    let err = repo.save_event(&event).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(!repo.events_dir().exists());
}

#[test]
fn list_returns_events_chronologically() {
    let (_dir, repo) = journal();
    let later = Event::new("Promotion", date("2018-11-05"), "work", "Promoted.");
    let earlier = Event::new("Started School", date("1995-09-01"), "education", "First day.");
    let middle = Event::new("First Job", date("2012-07-10"), "work", "Hired.");

    repo.save_event(&later).expect("save should succeed");
    repo.save_event(&earlier).expect("save should succeed");
    repo.save_event(&middle).expect("save should succeed");

    let titles: Vec<String> = repo
        .list_events()
        .expect("list should succeed")
        .into_iter()
        .map(|event| event.title)
        .collect();
    assert_eq!(titles, ["Started School", "First Job", "Promotion"]);
}

#[test]
fn list_of_missing_directory_is_empty() {
    let (_dir, repo) = journal();
    let events = repo.list_events().expect("missing dir should list as empty");
    assert!(events.is_empty());
}

#[test]
fn list_ignores_non_markdown_files() {
    let (_dir, repo) = journal();
    let event = Event::new("Trip", date("2019-04-01"), "travel", "Went somewhere.");
    repo.save_event(&event).expect("save should succeed");
    std::fs::write(repo.events_dir().join("notes.txt"), "not an event").expect("stray file");

    let events = repo.list_events().expect("list should succeed");
    assert_eq!(events.len(), 1);
}

#[test]
fn list_surfaces_undecodable_files() {
    let (_dir, repo) = journal();
    let event = Event::new("Trip", date("2019-04-01"), "travel", "Went somewhere.");
    repo.save_event(&event).expect("save should succeed");
    std::fs::write(repo.events_dir().join("broken.md"), "no frontmatter").expect("stray file");

    let err = repo.list_events().unwrap_err();
    assert!(matches!(err, RepoError::Decode { .. }));
    assert!(err.to_string().contains("broken.md"));
}

#[test]
fn load_missing_event_is_not_found() {
    let (_dir, repo) = journal();
    let err = repo.load_event("2000-01-01_missing.md").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(name) if name == "2000-01-01_missing.md"));
}

#[test]
fn media_dir_sits_next_to_the_event_file() {
    let (_dir, repo) = journal();
    let event = Event::new("Trip", date("2019-04-01"), "travel", "Went somewhere.");
    repo.save_event(&event).expect("save should succeed");

    let media_dir = repo
        .create_media_dir(&event)
        .expect("media dir should be created");
    assert!(media_dir.is_dir());
    assert!(media_dir.ends_with("2019-04-01_trip"));
}
