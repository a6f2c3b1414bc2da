//! Pose signals derived from one frame of body landmarks.
//!
//! Landmarks follow the 33-point full-body layout produced by common pose
//! estimators. Coordinates are normalized to the frame, with `y` growing
//! downwards, so "above" means a smaller `y`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const LEFT_SHOULDER: usize = 11;
const RIGHT_SHOULDER: usize = 12;
const LEFT_WRIST: usize = 15;
const RIGHT_WRIST: usize = 16;
const LEFT_HIP: usize = 23;
const RIGHT_HIP: usize = 24;
const LEFT_ANKLE: usize = 27;
const RIGHT_ANKLE: usize = 28;

/// Minimum landmark count needed to read every joint used here.
pub const MIN_LANDMARKS: usize = RIGHT_ANKLE + 1;

const RAISE_MARGIN: f32 = 0.1;
const VISIBILITY_THRESHOLD: f32 = 0.5;
const TORSO_MIN: f32 = 0.2;
const LEGS_MIN: f32 = 0.15;
const SEATED_SPAN: f32 = 0.3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoseError {
    #[error("Expected at least {MIN_LANDMARKS} landmarks, got {0}")]
    TooFewLandmarks(usize),
}

/// One estimated body point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
    /// Estimator confidence that the point is in frame; absent means unknown.
    #[serde(default)]
    pub visibility: Option<f32>,
}

impl Landmark {
    fn visibility(&self) -> f32 {
        self.visibility.unwrap_or(0.0)
    }
}

/// Boolean pose features the coaching tasks check against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoseSignals {
    pub left_hand_raised: bool,
    pub right_hand_raised: bool,
    pub both_hands_raised: bool,
    pub sitting: bool,
    pub standing: bool,
}

impl PoseSignals {
    /// Derives signals from one frame.
    pub fn analyze(landmarks: &[Landmark]) -> Result<Self, PoseError> {
        if landmarks.len() < MIN_LANDMARKS {
            return Err(PoseError::TooFewLandmarks(landmarks.len()));
        }
        let at = |i: usize| landmarks[i];

        let (l_wrist, r_wrist) = (at(LEFT_WRIST), at(RIGHT_WRIST));
        let (l_shoulder, r_shoulder) = (at(LEFT_SHOULDER), at(RIGHT_SHOULDER));
        let (l_hip, r_hip) = (at(LEFT_HIP), at(RIGHT_HIP));
        let (l_ankle, r_ankle) = (at(LEFT_ANKLE), at(RIGHT_ANKLE));

        let left_visible = side_visible(&l_wrist, &l_shoulder);
        let right_visible = side_visible(&r_wrist, &r_shoulder);
        let body_visible =
            l_hip.visibility() > 0.0 && r_hip.visibility() > VISIBILITY_THRESHOLD;

        let left_hand_raised = left_visible && l_wrist.y < l_shoulder.y - RAISE_MARGIN;
        let right_hand_raised = right_visible && r_wrist.y < r_shoulder.y - RAISE_MARGIN;

        let shoulder_y = midpoint(l_shoulder.y, r_shoulder.y);
        let hip_y = midpoint(l_hip.y, r_hip.y);
        let ankle_y = midpoint(l_ankle.y, r_ankle.y);

        let standing =
            body_visible && hip_y > shoulder_y + TORSO_MIN && ankle_y > hip_y + LEGS_MIN;
        let sitting = body_visible && (!standing || hip_y < ankle_y + SEATED_SPAN);

        Ok(Self {
            left_hand_raised,
            right_hand_raised,
            both_hands_raised: left_hand_raised && right_hand_raised,
            sitting,
            standing,
        })
    }
}

fn side_visible(wrist: &Landmark, shoulder: &Landmark) -> bool {
    wrist.visibility() > 0.0 && shoulder.visibility() > VISIBILITY_THRESHOLD
}

fn midpoint(a: f32, b: f32) -> f32 {
    (a + b) / 2.0
}
