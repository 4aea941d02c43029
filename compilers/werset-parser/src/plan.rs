use werset_index::Corpus;

use crate::error::PlanError;
use crate::lookup;

/// Day-by-day reading plan with its passages rendered up front.
#[derive(Debug, Clone, Default)]
pub struct ReadingPlan {
    references: Vec<Vec<String>>,
    days: Vec<Vec<String>>,
}

impl ReadingPlan {
    /// Renders every reference of every day. References that fail to parse
    /// or resolve are logged and left out of that day.
    pub fn compile(corpus: &Corpus, references: Vec<Vec<String>>) -> Self {
        let days = references
            .iter()
            .enumerate()
            .map(|(day, refs)| {
                refs.iter()
                    .filter(|reference| !reference.is_empty())
                    .filter_map(|reference| {
                        tracing::debug!(day, %reference, "processing");
                        match lookup(corpus, reference) {
                            Ok(passage) => Some(passage.render()),
                            Err(error) => {
                                tracing::warn!(day, %reference, %error, "skipping plan reference");
                                None
                            }
                        }
                    })
                    .collect()
            })
            .collect();

        Self { references, days }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Raw references of one day, no wrap-around.
    pub fn references(&self, day: usize) -> Result<&[String], PlanError> {
        self.references
            .get(day)
            .map(Vec::as_slice)
            .ok_or(PlanError::UnknownDay(day))
    }

    /// Rendered passages of `day`; the plan repeats once it runs out.
    pub fn day(&self, day: usize) -> Result<&[String], PlanError> {
        if self.days.is_empty() {
            return Err(PlanError::UnknownDay(day));
        }
        Ok(&self.days[day % self.days.len()])
    }
}
