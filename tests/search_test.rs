mod common;

use acromatch::config::Config;
use acromatch::corpus::{self, ScanOptions};
use acromatch::search::HitOrigin;
use acromatch::{Finder, FinderOptions, MatchSource, Suggestion, format};
use assert2::{check, let_assert};
use common::{TempWorkspace, VAULT_VISIBLE_FILES, notes_vault};
use rstest::rstest;

fn suggestions(workspace: &TempWorkspace, options: &ScanOptions) -> Vec<Suggestion> {
    let_assert!(Ok(files) = corpus::scan(workspace.path(), options));
    files.into_iter().map(Suggestion::from).collect()
}

#[rstest]
fn scan_skips_hidden_and_ignored(notes_vault: TempWorkspace) {
    let_assert!(Ok(files) = corpus::scan(notes_vault.path(), &ScanOptions::default()));
    let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
    check!(paths == VAULT_VISIBLE_FILES);
}

#[rstest]
fn scan_includes_hidden_when_asked(notes_vault: TempWorkspace) {
    let options = ScanOptions {
        include_hidden: true,
        ..ScanOptions::default()
    };
    let_assert!(Ok(files) = corpus::scan(notes_vault.path(), &options));
    check!(files.iter().any(|f| f.path == ".obsidian/workspace-state.json"));
    check!(!files.iter().any(|f| f.path.starts_with("build/")));
}

#[rstest]
fn scan_filters_extensions(notes_vault: TempWorkspace) {
    let options = ScanOptions {
        extensions: vec!["md".to_string()],
        ..ScanOptions::default()
    };
    let_assert!(Ok(files) = corpus::scan(notes_vault.path(), &options));
    check!(files.len() == 3);
    check!(files.iter().all(|f| f.name.ends_with(".md")));
}

#[rstest]
fn acronym_search_finds_component(notes_vault: TempWorkspace) {
    let suggestions = suggestions(&notes_vault, &ScanOptions::default());
    let hits = Finder::new("mfc", FinderOptions::default()).find(&suggestions);

    let_assert!([hit] = hits.as_slice());
    check!(hit.identity == "src/components/MyFirstComponent.jsx");
    check!(hit.origin == HitOrigin::Acronym(MatchSource::Primary));
    // Highlight offsets assume one delimiter char between camelCase words.
    check!(format::highlight(&hit.text, &hit.spans) == "[M]yF[i]rstCo[m]ponent.jsx");
}

#[rstest]
fn name_matches_rank_ahead_of_acronyms(notes_vault: TempWorkspace) {
    notes_vault.create_file("notes/pp.md", "");
    let suggestions = suggestions(&notes_vault, &ScanOptions::default());

    let hits = Finder::new("pp", FinderOptions::default()).find(&suggestions);
    let order: Vec<(&str, HitOrigin)> = hits
        .iter()
        .map(|h| (h.identity.as_str(), h.origin))
        .collect();
    check!(
        order
            == [
                ("notes/pp.md", HitOrigin::Primary),
                ("notes/project-plan.md", HitOrigin::Acronym(MatchSource::Primary)),
            ]
    );
}

#[rstest]
fn config_cap_limits_acronym_results(notes_vault: TempWorkspace) {
    notes_vault.create_file(".acromatch.toml", "max_acronym_results = 1\nprimary_search = false\n");
    let_assert!(Ok(config) = Config::load_from(&notes_vault.path().join(".acromatch.toml")));

    // Several files match "n" through their initials.
    notes_vault.create_files(&["notes/new-idea.md", "notes/next-steps.md"]);
    let suggestions = suggestions(&notes_vault, &config.scan_options());
    let hits = Finder::new("n", config.finder_options()).find(&suggestions);
    check!(hits.len() == 1);
}

#[rstest]
fn missing_root_is_an_error() {
    let workspace = TempWorkspace::new();
    let missing = workspace.path().join("nope");
    let result = corpus::scan(&missing, &ScanOptions::default());
    let_assert!(Err(acromatch::Error::RootNotFound(path)) = result);
    check!(path == missing);
}
