use crate::settings::TutorialSettings;
use crate::tutorial::anim::{accel, AnimatedFloat, PendingAnimation, RunningAnim, TutorialAnim};
use crate::tutorial::feedback::{FeedbackMessage, FeedbackStatus, INTRO_SUBTITLE, INTRO_TITLE};
use crate::tutorial::gesture::{
    BackGestureResult, GestureVelocity, NavBarGestureResult, TutorialType,
};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// UI-side collaborators of the tutorial screen: the feedback surface, the
/// fake task-preview view and the swipe-up animation logic.
pub trait TutorialHost {
    fn show_feedback(&mut self, message: FeedbackMessage, auto_advance: bool);
    fn hide_feedback(&mut self);
    /// Construct (but do not start) the animation that flies the fake task
    /// view back home after a mistaken home gesture.
    fn build_fly_home_anim(&mut self, velocity: GestureVelocity, duration: Duration)
        -> TutorialAnim;
    fn reset_fake_task_view(&mut self);
    fn fade_out_fake_task_view(
        &mut self,
        reversed: bool,
        on_complete: Option<Box<dyn FnOnce() + 'static>>,
    );
    fn on_motion_paused(&mut self, forced: bool);
}

/// Lifecycle operations of the hosting tutorial fragment.
pub trait TutorialFragment {
    fn close_tutorial(&mut self);
    fn continue_tutorial(&mut self);
}

/// Deferred work to run when the in-flight animation completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnimFollowUp {
    ResetAndShowHomeDetected,
}

/// Screen-controller for the Overview multitasking-gesture lesson.
///
/// Dispatches classified back-edge and nav-bar gesture outcomes to feedback
/// messages, short animations or tutorial lifecycle transitions, depending on
/// the lesson the controller was constructed for. The host pumps `tick` from
/// its UI event queue to advance animations and fire the deferred feedback
/// hide.
pub struct OverviewTutorialController {
    tutorial_type: TutorialType,
    host: Box<dyn TutorialHost>,
    fragment: Box<dyn TutorialFragment>,
    current_shift: AnimatedFloat,
    running_anim: Option<RunningAnim>,
    follow_up: Option<AnimFollowUp>,
    feedback: FeedbackStatus,
    overview_anim: Duration,
    fake_task_fade: Duration,
    feedback_visible: Duration,
}

impl OverviewTutorialController {
    pub fn new(
        tutorial_type: TutorialType,
        host: Box<dyn TutorialHost>,
        fragment: Box<dyn TutorialFragment>,
        settings: &TutorialSettings,
    ) -> Self {
        Self {
            tutorial_type,
            host,
            fragment,
            current_shift: AnimatedFloat::new(0.0),
            running_anim: None,
            follow_up: None,
            feedback: FeedbackStatus::Idle,
            overview_anim: Duration::from_millis(settings.overview_anim_ms),
            fake_task_fade: Duration::from_millis(settings.fake_task_fade_ms),
            feedback_visible: Duration::from_millis(settings.feedback_visible_ms),
        }
    }

    pub fn intro_title(&self) -> &'static str {
        INTRO_TITLE
    }

    pub fn intro_subtitle(&self) -> &'static str {
        INTRO_SUBTITLE
    }

    /// Shared swipe-up shift value, observable by the host's renderer.
    pub fn current_shift(&self) -> AnimatedFloat {
        self.current_shift.clone()
    }

    pub fn feedback_status(&self) -> FeedbackStatus {
        self.feedback
    }

    pub fn is_animating(&self) -> bool {
        self.running_anim.is_some()
    }

    pub fn on_back_gesture_attempted(&mut self, result: BackGestureResult) {
        self.handle_back_gesture(result, Instant::now());
    }

    pub fn on_nav_bar_gesture_attempted(
        &mut self,
        result: NavBarGestureResult,
        velocity: GestureVelocity,
    ) {
        self.handle_nav_bar_gesture(result, velocity, Instant::now());
    }

    /// Advance the running animation and the feedback hide deadline to `now`.
    /// Called from the host's UI queue, typically once per frame.
    pub fn tick(&mut self, now: Instant) {
        let finished = match self.running_anim.as_mut() {
            Some(anim) => anim.tick(now),
            None => false,
        };
        if finished {
            self.running_anim = None;
            if let Some(follow_up) = self.follow_up.take() {
                match follow_up {
                    AnimFollowUp::ResetAndShowHomeDetected => {
                        self.host.reset_fake_task_view();
                        self.show_feedback(now, FeedbackMessage::HomeDetected, false);
                    }
                }
            }
        }

        if let FeedbackStatus::HidePending {
            deadline,
            auto_advance,
        } = self.feedback
        {
            if now >= deadline {
                self.host.hide_feedback();
                self.feedback = FeedbackStatus::Idle;
                if auto_advance {
                    self.fragment.continue_tutorial();
                }
            }
        }
    }

    fn handle_back_gesture(&mut self, result: BackGestureResult, now: Instant) {
        match self.tutorial_type {
            TutorialType::OverviewNavigation => match result {
                BackGestureResult::CompletedFromLeft
                | BackGestureResult::CompletedFromRight
                | BackGestureResult::CancelledFromLeft
                | BackGestureResult::CancelledFromRight => {
                    self.show_feedback(now, FeedbackMessage::SwipeTooFarFromEdge, false);
                }
                other => {
                    tracing::debug!(?other, "back gesture outcome has no effect in this lesson");
                }
            },
            TutorialType::OverviewNavigationComplete => match result {
                BackGestureResult::CompletedFromLeft | BackGestureResult::CompletedFromRight => {
                    self.fragment.close_tutorial();
                }
                other => {
                    tracing::debug!(?other, "back gesture outcome has no effect in this lesson");
                }
            },
        }
    }

    fn handle_nav_bar_gesture(
        &mut self,
        result: NavBarGestureResult,
        velocity: GestureVelocity,
        now: Instant,
    ) {
        if self.feedback.is_hide_pending() {
            tracing::debug!(?result, "feedback hide pending; ignoring nav-bar gesture");
            return;
        }
        match self.tutorial_type {
            TutorialType::OverviewNavigation => match result {
                NavBarGestureResult::HomeGestureCompleted => {
                    let mut anim = self.host.build_fly_home_anim(velocity, self.fake_task_fade);
                    anim.start(now);
                    self.install_anim(
                        RunningAnim::wrap(anim),
                        Some(AnimFollowUp::ResetAndShowHomeDetected),
                    );
                }
                NavBarGestureResult::HomeNotStartedTooFarFromEdge
                | NavBarGestureResult::OverviewNotStartedTooFarFromEdge => {
                    self.show_feedback(now, FeedbackMessage::SwipeTooFarFromEdge, false);
                }
                NavBarGestureResult::OverviewGestureCompleted => {
                    let mut anim = PendingAnimation::new(self.overview_anim)
                        .set_float(&self.current_shift, 1.0, accel)
                        .build();
                    anim.start(now);
                    self.install_anim(RunningAnim::wrap(anim), None);
                    self.host.on_motion_paused(true);
                    self.show_feedback(now, FeedbackMessage::GestureComplete, true);
                }
                NavBarGestureResult::HomeOrOverviewNotStartedWrongSwipeDirection
                | NavBarGestureResult::HomeOrOverviewCancelled => {
                    self.host.fade_out_fake_task_view(false, None);
                    self.show_feedback(now, FeedbackMessage::WrongSwipeDirection, false);
                }
                other => {
                    tracing::debug!(?other, "nav-bar outcome has no effect in this lesson");
                }
            },
            TutorialType::OverviewNavigationComplete => match result {
                NavBarGestureResult::HomeGestureCompleted => {
                    self.fragment.close_tutorial();
                }
                other => {
                    tracing::debug!(?other, "nav-bar outcome has no effect in this lesson");
                }
            },
        }
    }

    fn show_feedback(&mut self, now: Instant, message: FeedbackMessage, auto_advance: bool) {
        self.host.show_feedback(message, auto_advance);
        self.feedback = FeedbackStatus::HidePending {
            deadline: now + self.feedback_visible,
            auto_advance,
        };
    }

    // Previous handle is cancelled before replacement so a superseded
    // animation can neither update the shift nor fire its follow-up.
    fn install_anim(&mut self, anim: RunningAnim, follow_up: Option<AnimFollowUp>) {
        if let Some(mut previous) = self.running_anim.take() {
            previous.cancel();
        }
        self.follow_up = follow_up;
        self.running_anim = Some(anim);
    }
}

/// Everything the controller asked its collaborators to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    ShowFeedback(FeedbackMessage, bool),
    HideFeedback,
    FlyHomeBuilt(GestureVelocity),
    ResetFakeTaskView,
    FadeOutFakeTaskView { reversed: bool },
    MotionPaused(bool),
    TutorialClosed,
    TutorialContinued,
}

/// Host and fragment double that records every call. Clones share the same
/// log, so one `RecordingHost` can serve as both collaborators while the test
/// keeps a third clone for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    calls: Arc<Mutex<Vec<HostCall>>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn record(&self, call: HostCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl TutorialHost for RecordingHost {
    fn show_feedback(&mut self, message: FeedbackMessage, auto_advance: bool) {
        self.record(HostCall::ShowFeedback(message, auto_advance));
    }

    fn hide_feedback(&mut self) {
        self.record(HostCall::HideFeedback);
    }

    fn build_fly_home_anim(
        &mut self,
        velocity: GestureVelocity,
        duration: Duration,
    ) -> TutorialAnim {
        self.record(HostCall::FlyHomeBuilt(velocity));
        PendingAnimation::new(duration).build()
    }

    fn reset_fake_task_view(&mut self) {
        self.record(HostCall::ResetFakeTaskView);
    }

    fn fade_out_fake_task_view(
        &mut self,
        reversed: bool,
        on_complete: Option<Box<dyn FnOnce() + 'static>>,
    ) {
        self.record(HostCall::FadeOutFakeTaskView { reversed });
        if let Some(on_complete) = on_complete {
            on_complete();
        }
    }

    fn on_motion_paused(&mut self, forced: bool) {
        self.record(HostCall::MotionPaused(forced));
    }
}

impl TutorialFragment for RecordingHost {
    fn close_tutorial(&mut self) {
        self.record(HostCall::TutorialClosed);
    }

    fn continue_tutorial(&mut self) {
        self.record(HostCall::TutorialContinued);
    }
}
