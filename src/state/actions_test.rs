use super::*;

fn summary(id: &str, name: &str) -> BoardSummary {
    BoardSummary {
        id: id.to_owned(),
        name: name.to_owned(),
    }
}

fn board(id: &str, name: &str) -> Board {
    Board {
        id: id.to_owned(),
        name: name.to_owned(),
        thumbnails: Vec::new(),
    }
}

fn thumbnail(id: &str, board_id: &str) -> Thumbnail {
    Thumbnail {
        id: id.to_owned(),
        board_id: board_id.to_owned(),
        video_url: "https://youtu.be/abc123".to_owned(),
        thumbnail_url: "https://i.ytimg.com/vi/abc123/hqdefault.jpg".to_owned(),
        title: None,
    }
}

fn normal_with_active(id: &str) -> ViewState {
    ViewState {
        boards: vec![summary(id, "Active")],
        active: Some(board(id, "Active")),
        ..ViewState::default()
    }
}

fn shared() -> ViewState {
    ViewState {
        shared_view: true,
        ..ViewState::default()
    }
}

/// True if the effect list contains any network intent.
fn hits_network(effects: &[Effect]) -> bool {
    effects.iter().any(|e| {
        !matches!(
            e,
            Effect::PushBoardUrl(_)
                | Effect::ResetUrl
                | Effect::ResetUrlIfOnBoardPath
                | Effect::Toast { .. }
        )
    })
}

fn error_toast(effects: &[Effect]) -> Option<&str> {
    effects.iter().find_map(|e| match e {
        Effect::Toast { message, success: false } => Some(message.as_str()),
        _ => None,
    })
}

// =============================================================
// Bootstrap
// =============================================================

#[test]
fn boot_normal_fetches_the_board_list() {
    let mut view = ViewState::default();
    let mut ui = UiState::default();
    let effects = apply(&mut view, &mut ui, Action::BootNormal);
    assert_eq!(effects, vec![Effect::FetchBoards]);
    assert!(!view.shared_view);
}

#[test]
fn boot_shared_fetches_only_that_board() {
    let mut view = ViewState::default();
    let mut ui = UiState::default();
    let effects = apply(&mut view, &mut ui, Action::BootShared("b-9".to_owned()));
    assert_eq!(effects, vec![Effect::FetchBoard("b-9".to_owned())]);
    assert!(view.shared_view);
    assert!(!effects.contains(&Effect::FetchBoards));
}

#[test]
fn empty_board_list_creates_the_default_board() {
    let mut view = ViewState::default();
    let mut ui = UiState::default();
    let effects = apply(&mut view, &mut ui, Action::BoardsFetched(Ok(Vec::new())));
    assert_eq!(
        effects,
        vec![Effect::CreateBoard {
            name: DEFAULT_BOARD_NAME.to_owned(),
        }]
    );
}

#[test]
fn first_board_becomes_active_when_none_is() {
    let mut view = ViewState::default();
    let mut ui = UiState::default();
    let list = vec![summary("b-1", "First"), summary("b-2", "Second")];
    let effects = apply(&mut view, &mut ui, Action::BoardsFetched(Ok(list)));
    assert_eq!(effects, vec![Effect::FetchBoard("b-1".to_owned())]);
    assert_eq!(view.boards.len(), 2);
}

#[test]
fn refetched_list_keeps_the_active_board() {
    let mut view = normal_with_active("b-2");
    let mut ui = UiState::default();
    let list = vec![summary("b-1", "First"), summary("b-2", "Active")];
    let effects = apply(&mut view, &mut ui, Action::BoardsFetched(Ok(list)));
    assert_eq!(effects, vec![Effect::FetchBoard("b-2".to_owned())]);
}

#[test]
fn board_list_failure_only_toasts() {
    let mut view = ViewState::default();
    let mut ui = UiState::default();
    let before = view.clone();
    let effects = apply(
        &mut view,
        &mut ui,
        Action::BoardsFetched(Err(ApiError::Http(500))),
    );
    assert_eq!(error_toast(&effects), Some("Failed to load boards. Please try again."));
    assert!(!hits_network(&effects));
    assert_eq!(view, before);
}

// =============================================================
// Board detail fetch
// =============================================================

#[test]
fn fetched_board_becomes_active() {
    let mut view = ViewState::default();
    let mut ui = UiState::default();
    let effects = apply(&mut view, &mut ui, Action::BoardFetched(Ok(board("b-1", "First"))));
    assert!(effects.is_empty());
    assert_eq!(view.active_id(), Some("b-1"));
}

#[test]
fn refetching_the_same_board_is_idempotent() {
    let mut view = ViewState::default();
    let mut ui = UiState::default();
    let mut b = board("b-1", "First");
    b.thumbnails.push(thumbnail("7", "b-1"));

    apply(&mut view, &mut ui, Action::BoardFetched(Ok(b.clone())));
    let first = view.clone();
    apply(&mut view, &mut ui, Action::BoardFetched(Ok(b)));
    assert_eq!(view, first);
}

#[test]
fn missing_board_in_shared_view_renders_not_found_in_place() {
    let mut view = shared();
    let mut ui = UiState::default();
    let effects = apply(&mut view, &mut ui, Action::BoardFetched(Err(ApiError::NotFound)));
    assert!(view.board_missing);
    assert!(view.active.is_none());
    assert!(!effects.contains(&Effect::ResetUrl));
    assert_eq!(error_toast(&effects), Some("Board not found. It might have been deleted."));
}

#[test]
fn missing_board_in_normal_view_falls_back_to_root() {
    let mut view = normal_with_active("b-1");
    let mut ui = UiState::default();
    let effects = apply(&mut view, &mut ui, Action::BoardFetched(Err(ApiError::NotFound)));
    assert!(view.active.is_none());
    assert!(!view.board_missing);
    assert!(effects.contains(&Effect::ResetUrl));
    assert!(effects.contains(&Effect::FetchBoards));
}

#[test]
fn other_detail_failures_leave_state_unchanged() {
    let mut view = normal_with_active("b-1");
    let mut ui = UiState::default();
    let before = view.clone();
    let effects = apply(
        &mut view,
        &mut ui,
        Action::BoardFetched(Err(ApiError::Network("offline".to_owned()))),
    );
    assert_eq!(view, before);
    assert_eq!(error_toast(&effects), Some("Failed to load thumbnails. Please try again."));
}

// =============================================================
// Board switching
// =============================================================

#[test]
fn selecting_a_board_pushes_the_url_then_fetches() {
    let mut view = normal_with_active("b-1");
    let mut ui = UiState::default();
    let effects = apply(&mut view, &mut ui, Action::SelectBoard("b-2".to_owned()));
    assert_eq!(
        effects,
        vec![
            Effect::PushBoardUrl("b-2".to_owned()),
            Effect::FetchBoard("b-2".to_owned()),
        ]
    );
}

#[test]
fn selecting_the_active_board_is_a_no_op() {
    let mut view = normal_with_active("b-1");
    let mut ui = UiState::default();
    let effects = apply(&mut view, &mut ui, Action::SelectBoard("b-1".to_owned()));
    assert!(effects.is_empty());
}

#[test]
fn board_switching_is_disabled_in_shared_view() {
    let mut view = shared();
    let mut ui = UiState::default();
    let effects = apply(&mut view, &mut ui, Action::SelectBoard("b-2".to_owned()));
    assert!(effects.is_empty());
}

// =============================================================
// Create board
// =============================================================

#[test]
fn create_board_with_empty_name_toasts() {
    let mut view = ViewState::default();
    let mut ui = UiState::default();
    let effects = apply(
        &mut view,
        &mut ui,
        Action::CreateBoard {
            name: "   ".to_owned(),
            initial: false,
        },
    );
    assert_eq!(error_toast(&effects), Some("Board name cannot be empty."));
    assert!(!hits_network(&effects));
}

#[test]
fn initial_create_with_empty_name_is_silent() {
    let mut view = ViewState::default();
    let mut ui = UiState::default();
    let effects = apply(
        &mut view,
        &mut ui,
        Action::CreateBoard {
            name: String::new(),
            initial: true,
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn create_board_is_rejected_in_shared_view_before_any_request() {
    let mut view = shared();
    let mut ui = UiState::default();
    let effects = apply(
        &mut view,
        &mut ui,
        Action::CreateBoard {
            name: "Sneaky".to_owned(),
            initial: false,
        },
    );
    assert!(!hits_network(&effects));
    assert_eq!(error_toast(&effects), Some("Cannot create boards in shared view."));
}

#[test]
fn create_board_trims_the_name() {
    let mut view = ViewState::default();
    let mut ui = UiState::default();
    let effects = apply(
        &mut view,
        &mut ui,
        Action::CreateBoard {
            name: "  Trailers  ".to_owned(),
            initial: false,
        },
    );
    assert_eq!(
        effects,
        vec![Effect::CreateBoard {
            name: "Trailers".to_owned(),
        }]
    );
}

#[test]
fn created_board_becomes_active_and_resets_a_board_url() {
    let mut view = ViewState::default();
    let mut ui = UiState {
        add_board_open: true,
        ..UiState::default()
    };
    let effects = apply(
        &mut view,
        &mut ui,
        Action::BoardCreated(Ok(summary("b-3", "Trailers"))),
    );
    assert!(!ui.add_board_open);
    assert_eq!(view.active_id(), Some("b-3"));
    assert!(effects.contains(&Effect::ResetUrlIfOnBoardPath));
    assert!(effects.contains(&Effect::FetchBoards));
    assert!(effects.contains(&Effect::Toast {
        message: "New board created!".to_owned(),
        success: true,
    }));
}

#[test]
fn create_failure_surfaces_the_server_message() {
    let mut view = ViewState::default();
    let mut ui = UiState::default();
    let before = view.clone();
    let effects = apply(
        &mut view,
        &mut ui,
        Action::BoardCreated(Err(ApiError::Api("Board name cannot be empty".to_owned()))),
    );
    assert_eq!(view, before);
    assert_eq!(
        error_toast(&effects),
        Some("Failed to create board: Board name cannot be empty")
    );
}

// =============================================================
// Rename board
// =============================================================

#[test]
fn rename_updates_the_active_title_immediately() {
    let mut view = normal_with_active("b-1");
    let mut ui = UiState {
        edit_board: Some(summary("b-1", "Active")),
        ..UiState::default()
    };
    let effects = apply(
        &mut view,
        &mut ui,
        Action::BoardRenamed(Ok(summary("b-1", "Renamed"))),
    );
    assert_eq!(view.active.as_ref().map(|b| b.name.as_str()), Some("Renamed"));
    assert!(ui.edit_board.is_none());
    assert!(effects.contains(&Effect::FetchBoards));
}

#[test]
fn renaming_an_inactive_board_leaves_the_title_alone() {
    let mut view = normal_with_active("b-1");
    let mut ui = UiState::default();
    apply(&mut view, &mut ui, Action::BoardRenamed(Ok(summary("b-2", "Other"))));
    assert_eq!(view.active.as_ref().map(|b| b.name.as_str()), Some("Active"));
}

#[test]
fn rename_failure_closes_the_modal_and_keeps_the_name() {
    let mut view = normal_with_active("42");
    let mut ui = UiState {
        edit_board: Some(summary("42", "Active")),
        ..UiState::default()
    };
    let effects = apply(
        &mut view,
        &mut ui,
        Action::BoardRenamed(Err(ApiError::Api("name too long".to_owned()))),
    );
    assert_eq!(error_toast(&effects), Some("Failed to update board: name too long"));
    assert_eq!(view.active.as_ref().map(|b| b.name.as_str()), Some("Active"));
    assert!(ui.edit_board.is_none());
}

#[test]
fn rename_is_rejected_in_shared_view_before_any_request() {
    let mut view = shared();
    let mut ui = UiState::default();
    let effects = apply(
        &mut view,
        &mut ui,
        Action::RenameBoard {
            id: "b-1".to_owned(),
            name: "New".to_owned(),
        },
    );
    assert!(!hits_network(&effects));
}

// =============================================================
// Delete board
// =============================================================

#[test]
fn deleted_board_clears_active_state_and_resets_the_url() {
    let mut view = normal_with_active("b-1");
    let mut ui = UiState {
        edit_board: Some(summary("b-1", "Active")),
        ..UiState::default()
    };
    let effects = apply(&mut view, &mut ui, Action::BoardDeleted(Ok(())));
    assert!(view.active.is_none());
    assert!(ui.edit_board.is_none());
    assert!(effects.contains(&Effect::ResetUrl));
    assert!(effects.contains(&Effect::FetchBoards));
}

#[test]
fn delete_failure_keeps_the_modal_open() {
    let mut view = normal_with_active("b-1");
    let mut ui = UiState {
        edit_board: Some(summary("b-1", "Active")),
        ..UiState::default()
    };
    let effects = apply(
        &mut view,
        &mut ui,
        Action::BoardDeleted(Err(ApiError::Http(500))),
    );
    assert!(ui.edit_board.is_some());
    assert_eq!(error_toast(&effects), Some("Failed to delete board: HTTP status 500"));
}

#[test]
fn delete_is_rejected_in_shared_view_before_any_request() {
    let mut view = shared();
    let mut ui = UiState::default();
    let effects = apply(&mut view, &mut ui, Action::DeleteBoard("b-1".to_owned()));
    assert!(!hits_network(&effects));
}

// =============================================================
// Thumbnails
// =============================================================

#[test]
fn add_thumbnail_requires_a_url() {
    let mut view = normal_with_active("b-1");
    let mut ui = UiState::default();
    let effects = apply(&mut view, &mut ui, Action::AddThumbnail("  ".to_owned()));
    assert_eq!(error_toast(&effects), Some("Please enter a YouTube video URL."));
    assert!(!hits_network(&effects));
}

#[test]
fn add_thumbnail_requires_an_active_board() {
    let mut view = ViewState::default();
    let mut ui = UiState::default();
    let effects = apply(
        &mut view,
        &mut ui,
        Action::AddThumbnail("https://youtu.be/abc123".to_owned()),
    );
    assert_eq!(error_toast(&effects), Some("Please select a board first."));
    assert!(!hits_network(&effects));
}

#[test]
fn add_thumbnail_is_rejected_in_shared_view_before_any_request() {
    let mut view = ViewState {
        active: Some(board("b-1", "Shared")),
        shared_view: true,
        ..ViewState::default()
    };
    let mut ui = UiState::default();
    let effects = apply(
        &mut view,
        &mut ui,
        Action::AddThumbnail("https://youtu.be/abc123".to_owned()),
    );
    assert!(!hits_network(&effects));
    assert_eq!(error_toast(&effects), Some("Cannot add thumbnails in shared view."));
}

#[test]
fn add_thumbnail_targets_the_active_board() {
    let mut view = normal_with_active("b-1");
    let mut ui = UiState::default();
    let effects = apply(
        &mut view,
        &mut ui,
        Action::AddThumbnail("https://youtu.be/abc123".to_owned()),
    );
    assert_eq!(
        effects,
        vec![Effect::CreateThumbnail {
            board_id: "b-1".to_owned(),
            video_url: "https://youtu.be/abc123".to_owned(),
        }]
    );
}

#[test]
fn added_thumbnail_clears_the_input_and_refetches_the_board() {
    let mut view = normal_with_active("b-1");
    let mut ui = UiState {
        thumbnail_url: "https://youtu.be/abc123".to_owned(),
        ..UiState::default()
    };
    let effects = apply(
        &mut view,
        &mut ui,
        Action::ThumbnailAdded(Ok(thumbnail("7", "b-1"))),
    );
    assert!(ui.thumbnail_url.is_empty());
    assert!(effects.contains(&Effect::FetchBoard("b-1".to_owned())));
}

#[test]
fn add_thumbnail_failure_keeps_the_input() {
    let mut view = normal_with_active("b-1");
    let mut ui = UiState {
        thumbnail_url: "not a url".to_owned(),
        ..UiState::default()
    };
    let effects = apply(
        &mut view,
        &mut ui,
        Action::ThumbnailAdded(Err(ApiError::Api(
            "Invalid YouTube URL or video ID not found".to_owned(),
        ))),
    );
    assert_eq!(ui.thumbnail_url, "not a url");
    assert_eq!(
        error_toast(&effects),
        Some("Failed to add thumbnail: Invalid YouTube URL or video ID not found")
    );
}

#[test]
fn remove_thumbnail_is_rejected_in_shared_view_before_any_request() {
    let mut view = shared();
    let mut ui = UiState::default();
    let effects = apply(
        &mut view,
        &mut ui,
        Action::RemoveThumbnail {
            board_id: "b-1".to_owned(),
            thumbnail_id: "7".to_owned(),
        },
    );
    assert!(!hits_network(&effects));
}

#[test]
fn removed_thumbnail_refetches_the_board() {
    let mut view = normal_with_active("b-1");
    let mut ui = UiState::default();
    let effects = apply(&mut view, &mut ui, Action::ThumbnailRemoved(Ok(())));
    assert!(effects.contains(&Effect::FetchBoard("b-1".to_owned())));
}

// =============================================================
// Modals
// =============================================================

#[test]
fn share_without_an_active_board_toasts() {
    let mut view = ViewState::default();
    let mut ui = UiState::default();
    let effects = apply(&mut view, &mut ui, Action::OpenShare);
    assert!(!ui.share_open);
    assert_eq!(error_toast(&effects), Some("No board selected to share."));
}

#[test]
fn share_opens_for_the_active_board() {
    let mut view = normal_with_active("b-1");
    let mut ui = UiState::default();
    let effects = apply(&mut view, &mut ui, Action::OpenShare);
    assert!(ui.share_open);
    assert!(effects.is_empty());
}
