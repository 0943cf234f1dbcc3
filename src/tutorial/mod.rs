mod anim;
mod controller;
mod feedback;
mod gesture;

pub use anim::{accel, linear, AnimatedFloat, PendingAnimation, RunningAnim, TutorialAnim};
pub use controller::{
    HostCall, OverviewTutorialController, RecordingHost, TutorialFragment, TutorialHost,
};
pub use feedback::{FeedbackMessage, FeedbackStatus, INTRO_SUBTITLE, INTRO_TITLE};
pub use gesture::{BackGestureResult, GestureVelocity, NavBarGestureResult, TutorialType};
