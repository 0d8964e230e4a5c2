use crate::db::models::Question;

/// Keep the questions whose text contains `term`, ignoring case.
///
/// Only the question text is searched, never the answer. The term is matched
/// literally: `%`, `_` and `\` carry no pattern meaning here.
pub fn search(items: Vec<Question>, term: &str) -> Vec<Question> {
    let needle = term.to_lowercase();
    items
        .into_iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect()
}
