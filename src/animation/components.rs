//! Animation domain: animator parameters, playback state, and IK bindings.

use bevy::prelude::*;

/// Normalized parameters handed to the animation layer each frame.
///
/// `horizontal_speed` is the planar speed over the max horizontal speed;
/// `vertical_speed` is remapped from `[-jump_speed, jump_speed]` to
/// `[-1, 1]`.
#[derive(Component, Debug, Default)]
pub struct AnimatorParams {
    pub horizontal_speed: f32,
    pub vertical_speed: f32,
    pub grounded: bool,
}

/// Animation states for the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
}

/// Normalized horizontal speed above which the character reads as running.
pub const RUN_THRESHOLD: f32 = 0.05;

/// Pick the animation state for the current animator parameters.
pub fn select_state(params: &AnimatorParams) -> AnimationState {
    if !params.grounded {
        if params.vertical_speed > 0.0 {
            AnimationState::Jump
        } else {
            AnimationState::Fall
        }
    } else if params.horizontal_speed > RUN_THRESHOLD {
        AnimationState::Run
    } else {
        AnimationState::Idle
    }
}

/// Component for frame-stepped animation playback.
#[derive(Component, Debug)]
pub struct AnimationController {
    /// Current animation state.
    pub state: AnimationState,
    /// Previous state (for detecting transitions).
    pub previous_state: AnimationState,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in current animation.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Whether the animation should loop.
    pub looping: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            state: AnimationState::Idle,
            previous_state: AnimationState::Idle,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.15,
            looping: true,
        }
    }
}

impl AnimationController {
    /// Set the animation state, resetting frame progress if it changed.
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state != state {
            self.previous_state = self.state;
            self.state = state;
            self.current_frame = 0;
            self.frame_timer = 0.0;

            self.looping = matches!(state, AnimationState::Idle | AnimationState::Run);

            self.total_frames = match state {
                AnimationState::Idle => 4,
                AnimationState::Run => 6,
                AnimationState::Jump => 2,
                AnimationState::Fall => 2,
            };
        }
    }

    /// Accumulate time and step at most one frame. Looping states wrap back
    /// to frame zero; non-looping states hold their final frame until the
    /// state changes.
    pub fn advance(&mut self, dt: f32) {
        self.frame_timer += dt;

        if self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= self.total_frames {
                if self.looping {
                    self.current_frame = 0;
                } else {
                    self.current_frame = self.total_frames - 1;
                }
            }
        }
    }
}

/// Inverse-kinematics goals mirrored onto effector entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IkGoal {
    LeftHand,
    RightHand,
    LeftFoot,
    RightFoot,
}

/// Marker on a free-standing entity whose pose tracks a bound IK target.
#[derive(Component, Debug)]
pub struct IkEffector(pub IkGoal);

/// Optional target bindings, one per goal. Non-owning: targets are looked up
/// each frame and a missing or despawned target simply skips that goal.
#[derive(Component, Debug, Default)]
pub struct IkTargets {
    pub left_hand: Option<Entity>,
    pub right_hand: Option<Entity>,
    pub left_foot: Option<Entity>,
    pub right_foot: Option<Entity>,
}

impl IkTargets {
    pub fn target_for(&self, goal: IkGoal) -> Option<Entity> {
        match goal {
            IkGoal::LeftHand => self.left_hand,
            IkGoal::RightHand => self.right_hand,
            IkGoal::LeftFoot => self.left_foot,
            IkGoal::RightFoot => self.right_foot,
        }
    }

    pub fn iter_bound(&self) -> impl Iterator<Item = Entity> + '_ {
        [self.left_hand, self.right_hand, self.left_foot, self.right_foot]
            .into_iter()
            .flatten()
    }
}
