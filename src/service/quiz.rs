//! Random question selection for the quiz flow.
//!
//! The server keeps no quiz session: every request carries the ids the client
//! has already been shown and gets back one unseen question, or `None` once
//! the pool is exhausted.

use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;

use crate::db::models::Question;

/// Which questions a quiz draws from. Category id `0` on the wire means all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i64),
}

impl QuizScope {
    pub const ALL_CATEGORIES: i64 = 0;

    pub fn from_category_id(id: i64) -> Self {
        if id == Self::ALL_CATEGORIES {
            QuizScope::All
        } else {
            QuizScope::Category(id)
        }
    }
}

/// Pick one question from `pool` whose id is not in `previous_ids`,
/// uniformly at random.
pub fn next_question<R>(
    pool: Vec<Question>,
    previous_ids: &HashSet<i64>,
    rng: &mut R,
) -> Option<Question>
where
    R: Rng + ?Sized,
{
    let remaining: Vec<Question> = pool
        .into_iter()
        .filter(|q| !previous_ids.contains(&q.id))
        .collect();
    remaining.choose(rng).cloned()
}
