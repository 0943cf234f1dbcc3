use std::time::Instant;

pub const INTRO_TITLE: &str = "Swipe to switch apps";
pub const INTRO_SUBTITLE: &str =
    "Swipe up from the bottom of your screen, hold, then let go";

/// User-visible feedback shown after a gesture attempt. Stands in for the
/// launcher's string resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackMessage {
    SwipeTooFarFromEdge,
    HomeDetected,
    GestureComplete,
    WrongSwipeDirection,
}

impl FeedbackMessage {
    pub fn text(self) -> &'static str {
        match self {
            FeedbackMessage::SwipeTooFarFromEdge => {
                "Make sure you swipe up from the bottom edge of the screen"
            }
            FeedbackMessage::HomeDetected => {
                "Try holding the window for longer before releasing"
            }
            FeedbackMessage::GestureComplete => "You completed the switch apps gesture!",
            FeedbackMessage::WrongSwipeDirection => "Make sure you swipe straight up",
        }
    }
}

/// Whether a feedback hide action is scheduled.
///
/// Explicit two-state status instead of a nullable deferred-action field; the
/// nav-bar entry point treats `HidePending` as "ignore everything until the
/// deadline fires".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackStatus {
    Idle,
    HidePending {
        deadline: Instant,
        auto_advance: bool,
    },
}

impl FeedbackStatus {
    pub fn is_hide_pending(&self) -> bool {
        matches!(self, FeedbackStatus::HidePending { .. })
    }
}
