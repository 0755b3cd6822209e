//! Course-upload wizard state: step progression, per-step validation,
//! client-side file checks, and the draft curriculum list.
//!
//! DESIGN
//! ======
//! The wizard never talks to the network; it accumulates a `CourseDraft`
//! and hands a `NewCourseRequest` to the page when the operator submits
//! from the review step. File checks look only at metadata (name, size,
//! declared MIME type) — the binary never leaves the browser before the
//! backend accepts the course. Lesson reordering uses the same
//! single-element move semantics as the admin list controller.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use thiserror::Error;
use uuid::Uuid;

use super::form::{FieldError, require};
use super::orderable::move_element;
use crate::net::types::{NewCourseRequest, NewLesson};

/// Largest accepted cover image: 2 MiB.
pub const MAX_COVER_BYTES: u64 = 2 * 1024 * 1024;
/// Largest accepted lesson video: 512 MiB.
pub const MAX_VIDEO_BYTES: u64 = 512 * 1024 * 1024;

const COVER_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];
const VIDEO_TYPES: &[&str] = &["video/mp4", "video/webm"];

/// Metadata of a file picked or dropped in the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
    /// Declared MIME type; empty when the browser could not determine one.
    pub mime: String,
}

/// Why a dropped file was rejected client-side.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FileRejection {
    #[error("unsupported file type \"{mime}\" (accepted: {accepted})")]
    UnsupportedType { mime: String, accepted: String },
    #[error("file is too large ({size} bytes, limit {max})")]
    TooLarge { size: u64, max: u64 },
}

fn check_file(meta: &FileMeta, accepted: &[&str], max: u64) -> Result<(), FileRejection> {
    if !accepted.contains(&meta.mime.as_str()) {
        return Err(FileRejection::UnsupportedType {
            mime: meta.mime.clone(),
            accepted: accepted.join(", "),
        });
    }
    if meta.size > max {
        return Err(FileRejection::TooLarge {
            size: meta.size,
            max,
        });
    }
    Ok(())
}

/// Validate a cover image candidate.
///
/// # Errors
///
/// Returns a [`FileRejection`] for unsupported types or oversized files.
pub fn check_cover(meta: &FileMeta) -> Result<(), FileRejection> {
    check_file(meta, COVER_TYPES, MAX_COVER_BYTES)
}

/// Validate a lesson video candidate.
///
/// # Errors
///
/// Returns a [`FileRejection`] for unsupported types or oversized files.
pub fn check_video(meta: &FileMeta) -> Result<(), FileRejection> {
    check_file(meta, VIDEO_TYPES, MAX_VIDEO_BYTES)
}

/// Wizard steps, in order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Details,
    Media,
    Curriculum,
    Pricing,
    Review,
}

impl WizardStep {
    /// All steps in display order, for the progress header.
    pub const ALL: [Self; 5] = [
        Self::Details,
        Self::Media,
        Self::Curriculum,
        Self::Pricing,
        Self::Review,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Details => "Details",
            Self::Media => "Media",
            Self::Curriculum => "Curriculum",
            Self::Pricing => "Pricing",
            Self::Review => "Review",
        }
    }

    #[must_use]
    fn next(self) -> Option<Self> {
        match self {
            Self::Details => Some(Self::Media),
            Self::Media => Some(Self::Curriculum),
            Self::Curriculum => Some(Self::Pricing),
            Self::Pricing => Some(Self::Review),
            Self::Review => None,
        }
    }

    #[must_use]
    fn previous(self) -> Option<Self> {
        match self {
            Self::Details => None,
            Self::Media => Some(Self::Details),
            Self::Curriculum => Some(Self::Media),
            Self::Pricing => Some(Self::Curriculum),
            Self::Review => Some(Self::Pricing),
        }
    }
}

/// A lesson being drafted. The id is client-generated and only used for
/// stable row identity before the course exists server-side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonDraft {
    pub id: String,
    pub title: String,
    pub video: Option<FileMeta>,
}

/// Everything the wizard collects across its steps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseDraft {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub category_id: Option<String>,
    pub subcategory_id: Option<String>,
    pub cover: Option<FileMeta>,
    pub lessons: Vec<LessonDraft>,
    /// Price in minor units; `None` until the pricing step parses a value.
    pub price_cents: Option<i64>,
}

/// Wizard state: current step, accumulated draft, and the current step's
/// inline validation errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WizardState {
    pub step: WizardStep,
    pub draft: CourseDraft,
    pub errors: Vec<FieldError>,
}

impl WizardState {
    /// Validation for one step, independent of wizard position so the
    /// review step can re-check everything.
    #[must_use]
    pub fn validate_step(step: WizardStep, draft: &CourseDraft) -> Vec<FieldError> {
        let mut errors = Vec::new();
        match step {
            WizardStep::Details => {
                require(&mut errors, "title", &draft.title, "Title");
                require(&mut errors, "description", &draft.description, "Description");
                if draft.category_id.is_none() {
                    errors.push(FieldError::new("category", "Pick a category"));
                }
            }
            WizardStep::Media => {
                if draft.cover.is_none() {
                    errors.push(FieldError::new("cover", "A cover image is required"));
                }
            }
            WizardStep::Curriculum => {
                if draft.lessons.is_empty() {
                    errors.push(FieldError::new("lessons", "Add at least one lesson"));
                }
                for (position, lesson) in draft.lessons.iter().enumerate() {
                    if lesson.title.trim().is_empty() {
                        errors.push(FieldError::new(
                            "lessons",
                            format!("Lesson {} needs a title", position + 1),
                        ));
                    }
                }
            }
            WizardStep::Pricing => match draft.price_cents {
                None => errors.push(FieldError::new("price", "Enter a price")),
                Some(cents) if cents < 0 => {
                    errors.push(FieldError::new("price", "Price cannot be negative"));
                }
                Some(_) => {}
            },
            WizardStep::Review => {}
        }
        errors
    }

    /// Advance to the next step if the current one validates. Returns
    /// whether the step changed; on failure the errors are kept for
    /// inline display.
    pub fn next(&mut self) -> bool {
        self.errors = Self::validate_step(self.step, &self.draft);
        if !self.errors.is_empty() {
            return false;
        }
        match self.step.next() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Step back without validating; nothing is lost by revisiting.
    pub fn back(&mut self) {
        if let Some(step) = self.step.previous() {
            self.step = step;
            self.errors.clear();
        }
    }

    /// Accept a cover image candidate after the client-side file check.
    ///
    /// # Errors
    ///
    /// Returns the [`FileRejection`] unchanged; the draft keeps its
    /// previous cover.
    pub fn set_cover(&mut self, meta: FileMeta) -> Result<(), FileRejection> {
        check_cover(&meta)?;
        self.draft.cover = Some(meta);
        Ok(())
    }

    /// Append an empty-titled lesson and return its client-side id.
    pub fn add_lesson(&mut self) -> String {
        let id = Uuid::new_v4().to_string();
        self.draft.lessons.push(LessonDraft {
            id: id.clone(),
            title: String::new(),
            video: None,
        });
        id
    }

    pub fn remove_lesson(&mut self, id: &str) {
        self.draft.lessons.retain(|lesson| lesson.id != id);
    }

    pub fn set_lesson_title(&mut self, id: &str, title: String) {
        if let Some(lesson) = self.draft.lessons.iter_mut().find(|l| l.id == id) {
            lesson.title = title;
        }
    }

    /// Attach a validated video to one lesson.
    ///
    /// # Errors
    ///
    /// Returns the [`FileRejection`] unchanged; the lesson keeps its
    /// previous video.
    pub fn set_lesson_video(&mut self, id: &str, meta: FileMeta) -> Result<(), FileRejection> {
        check_video(&meta)?;
        if let Some(lesson) = self.draft.lessons.iter_mut().find(|l| l.id == id) {
            lesson.video = Some(meta);
        }
        Ok(())
    }

    /// Reorder the curriculum: move the lesson at `from` to `to`, keeping
    /// all other lessons in relative order.
    pub fn move_lesson(&mut self, from: usize, to: usize) -> bool {
        move_element(&mut self.draft.lessons, from, to)
    }

    /// Whether every step validates, gating the submit button on review.
    #[must_use]
    pub fn ready_to_submit(&self) -> bool {
        WizardStep::ALL
            .iter()
            .all(|step| Self::validate_step(*step, &self.draft).is_empty())
    }

    /// Build the creation request from the draft. Lesson order indices are
    /// recomputed from positions, 1-based and contiguous. Call only when
    /// [`ready_to_submit`](Self::ready_to_submit) holds.
    #[must_use]
    pub fn submit_request(&self) -> NewCourseRequest {
        let subtitle = self.draft.subtitle.trim();
        NewCourseRequest {
            title: self.draft.title.trim().to_owned(),
            subtitle: (!subtitle.is_empty()).then(|| subtitle.to_owned()),
            description: self.draft.description.trim().to_owned(),
            category_id: self.draft.category_id.clone().unwrap_or_default(),
            subcategory_id: self.draft.subcategory_id.clone(),
            price_cents: self.draft.price_cents.unwrap_or_default(),
            cover_name: self.draft.cover.as_ref().map(|meta| meta.name.clone()),
            lessons: self
                .draft
                .lessons
                .iter()
                .enumerate()
                .map(|(position, lesson)| NewLesson {
                    title: lesson.title.trim().to_owned(),
                    video_name: lesson.video.as_ref().map(|meta| meta.name.clone()),
                    order_index: u32::try_from(position + 1).unwrap_or(u32::MAX),
                })
                .collect(),
        }
    }
}
