use super::*;
use crate::state::form::message_for;

fn meta(name: &str, size: u64, mime: &str) -> FileMeta {
    FileMeta {
        name: name.to_owned(),
        size,
        mime: mime.to_owned(),
    }
}

fn filled_wizard() -> WizardState {
    let mut wizard = WizardState::default();
    wizard.draft.title = "Practical Rust".to_owned();
    wizard.draft.description = "Ownership without tears.".to_owned();
    wizard.draft.category_id = Some("cat-1".to_owned());
    wizard.draft.cover = Some(meta("cover.png", 1024, "image/png"));
    let lesson_id = wizard.add_lesson();
    wizard.set_lesson_title(&lesson_id, "Hello, borrow checker".to_owned());
    wizard.draft.price_cents = Some(4999);
    wizard
}

// =============================================================
// File checks
// =============================================================

#[test]
fn cover_accepts_supported_types_under_the_limit() {
    assert!(check_cover(&meta("c.png", MAX_COVER_BYTES, "image/png")).is_ok());
    assert!(check_cover(&meta("c.jpg", 1, "image/jpeg")).is_ok());
    assert!(check_cover(&meta("c.webp", 1, "image/webp")).is_ok());
}

#[test]
fn cover_rejects_unsupported_type() {
    let result = check_cover(&meta("c.gif", 1, "image/gif"));
    assert!(matches!(
        result,
        Err(FileRejection::UnsupportedType { .. })
    ));
}

#[test]
fn cover_rejects_oversized_file() {
    let result = check_cover(&meta("c.png", MAX_COVER_BYTES + 1, "image/png"));
    assert_eq!(
        result,
        Err(FileRejection::TooLarge {
            size: MAX_COVER_BYTES + 1,
            max: MAX_COVER_BYTES,
        })
    );
}

#[test]
fn video_limits_are_independent_of_cover_limits() {
    assert!(check_video(&meta("v.mp4", MAX_COVER_BYTES + 1, "video/mp4")).is_ok());
    assert!(check_video(&meta("v.webm", MAX_VIDEO_BYTES, "video/webm")).is_ok());
    assert!(check_video(&meta("v.mp4", MAX_VIDEO_BYTES + 1, "video/mp4")).is_err());
    assert!(check_video(&meta("v.mov", 1, "video/quicktime")).is_err());
}

#[test]
fn type_check_runs_before_size_check() {
    let result = check_cover(&meta("c.gif", MAX_COVER_BYTES + 1, "image/gif"));
    assert!(matches!(
        result,
        Err(FileRejection::UnsupportedType { .. })
    ));
}

// =============================================================
// Step navigation
// =============================================================

#[test]
fn all_lists_every_step_in_order() {
    assert_eq!(
        WizardStep::ALL,
        [
            WizardStep::Details,
            WizardStep::Media,
            WizardStep::Curriculum,
            WizardStep::Pricing,
            WizardStep::Review,
        ]
    );
}

#[test]
fn next_blocks_on_invalid_details() {
    let mut wizard = WizardState::default();
    assert!(!wizard.next());
    assert_eq!(wizard.step, WizardStep::Details);
    assert!(message_for(&wizard.errors, "title").is_some());
    assert!(message_for(&wizard.errors, "description").is_some());
    assert!(message_for(&wizard.errors, "category").is_some());
}

#[test]
fn next_walks_a_valid_draft_to_review() {
    let mut wizard = filled_wizard();
    for expected in [
        WizardStep::Media,
        WizardStep::Curriculum,
        WizardStep::Pricing,
        WizardStep::Review,
    ] {
        assert!(wizard.next());
        assert_eq!(wizard.step, expected);
        assert!(wizard.errors.is_empty());
    }
    // Review is terminal.
    assert!(!wizard.next());
    assert_eq!(wizard.step, WizardStep::Review);
}

#[test]
fn back_clears_errors_and_stops_at_details() {
    let mut wizard = filled_wizard();
    assert!(wizard.next());
    wizard.errors.push(FieldError::new("cover", "stale"));
    wizard.back();
    assert_eq!(wizard.step, WizardStep::Details);
    assert!(wizard.errors.is_empty());
    wizard.back();
    assert_eq!(wizard.step, WizardStep::Details);
}

#[test]
fn media_step_requires_a_cover() {
    let mut wizard = filled_wizard();
    wizard.draft.cover = None;
    assert!(wizard.next());
    assert!(!wizard.next());
    assert_eq!(wizard.step, WizardStep::Media);
    assert!(message_for(&wizard.errors, "cover").is_some());
}

#[test]
fn curriculum_step_requires_titled_lessons() {
    let mut wizard = filled_wizard();
    let untitled = wizard.add_lesson();
    assert!(wizard.next());
    assert!(wizard.next());
    assert!(!wizard.next());
    assert_eq!(wizard.step, WizardStep::Curriculum);
    assert_eq!(
        message_for(&wizard.errors, "lessons"),
        Some("Lesson 2 needs a title")
    );
    wizard.remove_lesson(&untitled);
    assert!(wizard.next());
}

#[test]
fn pricing_step_requires_a_parsed_price() {
    let mut wizard = filled_wizard();
    wizard.draft.price_cents = None;
    wizard.step = WizardStep::Pricing;
    assert!(!wizard.next());
    assert_eq!(message_for(&wizard.errors, "price"), Some("Enter a price"));
    wizard.draft.price_cents = Some(0);
    assert!(wizard.next());
}

// =============================================================
// Draft mutation
// =============================================================

#[test]
fn set_cover_keeps_previous_on_rejection() {
    let mut wizard = WizardState::default();
    assert!(wizard.set_cover(meta("a.png", 10, "image/png")).is_ok());
    let rejected = wizard.set_cover(meta("b.gif", 10, "image/gif"));
    assert!(rejected.is_err());
    assert_eq!(
        wizard.draft.cover.as_ref().map(|m| m.name.as_str()),
        Some("a.png")
    );
}

#[test]
fn lessons_get_distinct_client_ids() {
    let mut wizard = WizardState::default();
    let first = wizard.add_lesson();
    let second = wizard.add_lesson();
    assert_ne!(first, second);
    assert_eq!(wizard.draft.lessons.len(), 2);
}

#[test]
fn set_lesson_video_targets_one_lesson() {
    let mut wizard = WizardState::default();
    let first = wizard.add_lesson();
    let second = wizard.add_lesson();
    assert!(
        wizard
            .set_lesson_video(&second, meta("v.mp4", 10, "video/mp4"))
            .is_ok()
    );
    let videos: Vec<bool> = wizard
        .draft
        .lessons
        .iter()
        .map(|lesson| lesson.video.is_some())
        .collect();
    assert_eq!(videos, [false, true]);
    let _ = first;
}

#[test]
fn move_lesson_reorders_the_curriculum() {
    let mut wizard = WizardState::default();
    let a = wizard.add_lesson();
    let b = wizard.add_lesson();
    let c = wizard.add_lesson();
    assert!(wizard.move_lesson(2, 0));
    let order: Vec<&str> = wizard
        .draft
        .lessons
        .iter()
        .map(|lesson| lesson.id.as_str())
        .collect();
    assert_eq!(order, [c.as_str(), a.as_str(), b.as_str()]);
    assert!(!wizard.move_lesson(0, 3));
}

// =============================================================
// Submission
// =============================================================

#[test]
fn ready_to_submit_checks_every_step() {
    let mut wizard = filled_wizard();
    assert!(wizard.ready_to_submit());
    wizard.draft.cover = None;
    assert!(!wizard.ready_to_submit());
}

#[test]
fn submit_request_trims_and_numbers_lessons() {
    let mut wizard = filled_wizard();
    wizard.draft.title = "  Practical Rust  ".to_owned();
    wizard.draft.subtitle = "   ".to_owned();
    let second = wizard.add_lesson();
    wizard.set_lesson_title(&second, "  Lifetimes  ".to_owned());
    assert!(wizard.move_lesson(1, 0));

    let request = wizard.submit_request();
    assert_eq!(request.title, "Practical Rust");
    assert_eq!(request.subtitle, None);
    assert_eq!(request.category_id, "cat-1");
    assert_eq!(request.price_cents, 4999);
    assert_eq!(request.cover_name.as_deref(), Some("cover.png"));
    assert_eq!(request.lessons.len(), 2);
    assert_eq!(request.lessons[0].title, "Lifetimes");
    assert_eq!(request.lessons[0].order_index, 1);
    assert_eq!(request.lessons[1].title, "Hello, borrow checker");
    assert_eq!(request.lessons[1].order_index, 2);
}

#[test]
fn submit_request_keeps_a_non_blank_subtitle() {
    let mut wizard = filled_wizard();
    wizard.draft.subtitle = " From zero to ownership ".to_owned();
    assert_eq!(
        wizard.submit_request().subtitle.as_deref(),
        Some("From zero to ownership")
    );
}
