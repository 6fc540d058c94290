use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::Label;

use crate::catalog::LabelCatalog;

/// How the candidate labels for a round are assembled.
///
/// This is presentation policy, not sampler state; the session itself
/// only ever sees the one label the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChoicePolicy {
    /// Present the whole catalog vocabulary in catalog order.
    #[default]
    Fixed,
    /// Present the correct label mixed with `distractors` other
    /// vocabulary labels, in shuffled order.
    Shuffled { distractors: usize },
}

/// Build the candidate labels for one round.
///
/// With `ChoicePolicy::Shuffled`, distractors are sampled without
/// replacement from the non-correct vocabulary; the correct label is
/// always present exactly once.
pub(crate) fn build_choices(
    policy: ChoicePolicy,
    catalog: &LabelCatalog,
    correct: &Label,
    rng: &mut impl Rng,
) -> Vec<Label> {
    match policy {
        ChoicePolicy::Fixed => catalog.labels().to_vec(),
        ChoicePolicy::Shuffled { distractors } => {
            let mut others: Vec<Label> = catalog
                .labels()
                .iter()
                .filter(|label| *label != correct)
                .cloned()
                .collect();

            let take = distractors.min(others.len());
            let mut choices = Vec::with_capacity(take + 1);
            choices.push(correct.clone());
            for _ in 0..take {
                let index = rng.random_range(0..others.len());
                choices.push(others.swap_remove(index));
            }

            choices.shuffle(rng);
            choices
        }
    }
}
