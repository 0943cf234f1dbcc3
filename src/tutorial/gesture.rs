/// Lesson the controller is currently teaching.
///
/// Set once at construction; the dispatch tables in the controller branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialType {
    OverviewNavigation,
    OverviewNavigationComplete,
}

/// Classified outcome of a back-edge swipe attempt, as reported by the
/// edge-gesture recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackGestureResult {
    CompletedFromLeft,
    CompletedFromRight,
    CancelledFromLeft,
    CancelledFromRight,
    NotStartedTooFarFromEdge,
    NotStartedMultiTouch,
    NotStartedInNavBarArea,
}

/// Classified outcome of a nav-bar swipe attempt, as reported by the nav-bar
/// gesture recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavBarGestureResult {
    HomeGestureCompleted,
    OverviewGestureCompleted,
    HomeNotStartedTooFarFromEdge,
    OverviewNotStartedTooFarFromEdge,
    HomeOrOverviewNotStartedWrongSwipeDirection,
    HomeOrOverviewCancelled,
    AssistantCompleted,
    AssistantNotStartedBadAngle,
}

/// Final pointer velocity at gesture release, in px/ms.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureVelocity {
    pub x: f32,
    pub y: f32,
}

impl From<(f32, f32)> for GestureVelocity {
    fn from(value: (f32, f32)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}
