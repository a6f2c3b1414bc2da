//! Coaching task library and difficulty progression.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

use super::pose::PoseSignals;

/// Highest difficulty level in the library.
pub const MAX_DIFFICULTY: u8 = 3;

/// Completed tasks needed to unlock the next difficulty level.
pub const TASKS_PER_LEVEL: u32 = 3;

/// The pose signal a task waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PoseCheck {
    LeftHandRaised,
    RightHandRaised,
    BothHandsRaised,
    Sitting,
    Standing,
}

impl PoseCheck {
    pub fn is_met(self, signals: &PoseSignals) -> bool {
        match self {
            Self::LeftHandRaised => signals.left_hand_raised,
            Self::RightHandRaised => signals.right_hand_raised,
            Self::BothHandsRaised => signals.both_hands_raised,
            Self::Sitting => signals.sitting,
            Self::Standing => signals.standing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachTask {
    pub id: u32,
    pub instruction: &'static str,
    pub check: PoseCheck,
    pub difficulty: u8,
}

impl CoachTask {
    pub fn is_satisfied(&self, signals: &PoseSignals) -> bool {
        self.check.is_met(signals)
    }
}

const fn task(id: u32, instruction: &'static str, check: PoseCheck, difficulty: u8) -> CoachTask {
    CoachTask {
        id,
        instruction,
        check,
        difficulty,
    }
}

pub const TASKS: [CoachTask; 10] = [
    task(1, "Raise your right hand up high", PoseCheck::RightHandRaised, 1),
    task(2, "Raise your left hand up high", PoseCheck::LeftHandRaised, 1),
    task(3, "Raise both hands above your head", PoseCheck::BothHandsRaised, 2),
    task(4, "Wave with your right hand", PoseCheck::RightHandRaised, 2),
    task(5, "Touch your nose with your right hand", PoseCheck::RightHandRaised, 3),
    task(6, "Stand up straight and tall", PoseCheck::Standing, 1),
    task(7, "Clap your hands together", PoseCheck::BothHandsRaised, 2),
    task(8, "Bend your knees and squat down", PoseCheck::Sitting, 2),
    task(9, "Raise your hands and jump", PoseCheck::BothHandsRaised, 3),
    task(10, "Touch your shoulders with both hands", PoseCheck::BothHandsRaised, 2),
];

pub fn find_task(id: u32) -> Option<&'static CoachTask> {
    TASKS.iter().find(|t| t.id == id)
}

/// Difficulty level unlocked after `tasks_completed` successes.
pub fn difficulty_for(tasks_completed: u32) -> u8 {
    let level = tasks_completed / TASKS_PER_LEVEL + 1;
    level.min(u32::from(MAX_DIFFICULTY)) as u8
}

/// Tasks at or below `difficulty`, in library order.
pub fn available_tasks(difficulty: u8) -> Vec<&'static CoachTask> {
    TASKS.iter().filter(|t| t.difficulty <= difficulty).collect()
}

/// Picks a random task suited to the child's progress.
pub fn pick_task<R: Rng + ?Sized>(tasks_completed: u32, rng: &mut R) -> &'static CoachTask {
    let pool = available_tasks(difficulty_for(tasks_completed));
    // Level 1 always has tasks, so the pool is never empty.
    pool.choose(rng).copied().unwrap_or(&TASKS[0])
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn difficulty_rises_every_three_completions_and_caps() {
        assert_eq!(difficulty_for(0), 1);
        assert_eq!(difficulty_for(2), 1);
        assert_eq!(difficulty_for(3), 2);
        assert_eq!(difficulty_for(5), 2);
        assert_eq!(difficulty_for(6), 3);
        assert_eq!(difficulty_for(1_000), 3);
    }

    #[test]
    fn level_one_has_only_easy_tasks() {
        let ids: Vec<u32> = available_tasks(1).iter().map(|t| t.id).collect();
        assert_eq!(ids, [1, 2, 6]);
    }

    #[test]
    fn top_level_unlocks_everything() {
        assert_eq!(available_tasks(MAX_DIFFICULTY).len(), TASKS.len());
    }

    #[test]
    fn picked_task_respects_difficulty() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(pick_task(0, &mut rng).difficulty <= 1);
            assert!(pick_task(4, &mut rng).difficulty <= 2);
        }
    }

    #[test]
    fn task_checks_map_to_signals() {
        let signals = PoseSignals {
            right_hand_raised: true,
            ..Default::default()
        };
        assert!(find_task(1).unwrap().is_satisfied(&signals));
        assert!(!find_task(2).unwrap().is_satisfied(&signals));
        assert!(!find_task(3).unwrap().is_satisfied(&signals));
    }

    #[test]
    fn unknown_task_id() {
        assert!(find_task(0).is_none());
        assert!(find_task(11).is_none());
    }

    #[test]
    fn task_ids_are_sequential() {
        for (i, task) in TASKS.iter().enumerate() {
            assert_eq!(task.id as usize, i + 1);
        }
    }
}
