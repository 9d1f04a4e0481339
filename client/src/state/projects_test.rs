use super::*;

fn project(name: &str, tags: &[&str], is_public: bool) -> Project {
    Project {
        id: format!("p-{name}"),
        name: name.to_owned(),
        description: None,
        user_id: "u1".to_owned(),
        created_at: "2024-05-01T10:00:00Z".to_owned(),
        updated_at: "2024-05-01T10:00:00Z".to_owned(),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        is_public,
        thumbnail: None,
    }
}

#[test]
fn finish_ok_replaces_items_and_clears_error() {
    let mut state = ProjectsState { loading: true, error: Some("stale".into()), ..ProjectsState::default() };
    state.finish(Ok(vec![project("Churn", &[], false)]));
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn finish_err_keeps_previous_items() {
    let mut state = ProjectsState { items: vec![project("Churn", &[], false)], loading: true, error: None };
    state.finish(Err("projects request failed: 500".into()));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("projects request failed: 500"));
    assert_eq!(state.items.len(), 1);
}

#[test]
fn project_meta_formats_visibility_and_tags() {
    assert_eq!(project_meta(&project("a", &[], false)), "Private");
    assert_eq!(project_meta(&project("b", &["sales"], true)), "Public · 1 tag");
    assert_eq!(project_meta(&project("c", &["sales", "q3"], false)), "Private · 2 tags");
}
