//! PickDailyTips - Samples one tip from each content pool for a page render.

use std::sync::Arc;

use crate::domain::{ContentLibrary, DailyTips};
use crate::ports::{random_pick, RandomSource};

/// Handler producing the three ambient tips shown on every render.
pub struct PickDailyTipsHandler {
    library: ContentLibrary,
    random: Arc<dyn RandomSource>,
}

impl PickDailyTipsHandler {
    pub fn new(library: ContentLibrary, random: Arc<dyn RandomSource>) -> Self {
        Self { library, random }
    }

    /// Each pool is sampled independently and uniformly.
    pub fn handle(&self) -> DailyTips {
        DailyTips {
            daily_thought: *random_pick(self.random.as_ref(), self.library.daily_thoughts()),
            meal_suggestion: *random_pick(self.random.as_ref(), self.library.meal_suggestions()),
            wellness_suggestion: *random_pick(
                self.random.as_ref(),
                self.library.wellness_suggestions(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{DAILY_THOUGHTS, MEAL_SUGGESTIONS, WELLNESS_SUGGESTIONS};
    use std::sync::Mutex;

    struct ScriptedSource {
        indices: Mutex<Vec<usize>>,
    }

    impl RandomSource for ScriptedSource {
        fn pick_index(&self, len: usize) -> usize {
            self.indices.lock().unwrap().remove(0).min(len - 1)
        }

        fn chance(&self, _probability: f64) -> bool {
            false
        }
    }

    #[test]
    fn tips_come_from_their_respective_pools() {
        let handler = PickDailyTipsHandler::new(
            ContentLibrary::new(),
            Arc::new(ScriptedSource {
                indices: Mutex::new(vec![0, 1, 2]),
            }),
        );

        let tips = handler.handle();

        assert_eq!(tips.daily_thought, DAILY_THOUGHTS[0]);
        assert_eq!(tips.meal_suggestion, MEAL_SUGGESTIONS[1]);
        assert_eq!(tips.wellness_suggestion, WELLNESS_SUGGESTIONS[2]);
    }
}
