//! Solve-status reconciliation
//!
//! Merges a viewer's submission records into a per-slug status map. The
//! merge is a max-reduction over `ProblemStatus`, so the result does not
//! depend on the order the persistence layer returns rows in: any accepted
//! submission pins the slug to solved, anything else marks it attempted.

use std::collections::HashMap;

use crate::{
    constants::submission_status,
    models::{ProblemStatus, SubmissionStatus},
};

/// Build a slug -> status map from a viewer's submissions
pub fn reconcile(submissions: &[SubmissionStatus]) -> HashMap<String, ProblemStatus> {
    let mut map: HashMap<String, ProblemStatus> = HashMap::new();

    for sub in submissions {
        let status = if sub.status == submission_status::ACCEPTED {
            ProblemStatus::Solved
        } else {
            ProblemStatus::Attempted
        };

        let entry = map
            .entry(sub.problem_slug.clone())
            .or_insert(ProblemStatus::Unsolved);
        if status > *entry {
            *entry = status;
        }
    }

    map
}

/// Look up a slug's status, defaulting to unsolved
pub fn status_for(map: &HashMap<String, ProblemStatus>, slug: &str) -> ProblemStatus {
    map.get(slug).copied().unwrap_or(ProblemStatus::Unsolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(slug: &str, status: &str) -> SubmissionStatus {
        SubmissionStatus {
            problem_slug: slug.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_accepted_wins_over_failed_attempts() {
        let subs = vec![
            sub("two-sum", submission_status::ACCEPTED),
            sub("two-sum", submission_status::WRONG_ANSWER),
        ];
        let map = reconcile(&subs);
        assert_eq!(status_for(&map, "two-sum"), ProblemStatus::Solved);
    }

    #[test]
    fn test_order_independent() {
        let forward = vec![
            sub("two-sum", submission_status::WRONG_ANSWER),
            sub("two-sum", submission_status::ACCEPTED),
            sub("two-sum", submission_status::TIME_LIMIT_EXCEEDED),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();
        let rotated = vec![
            forward[2].clone(),
            forward[0].clone(),
            forward[1].clone(),
        ];

        for perm in [&forward, &reversed, &rotated] {
            let map = reconcile(perm);
            assert_eq!(status_for(&map, "two-sum"), ProblemStatus::Solved);
        }
    }

    #[test]
    fn test_failed_attempts_mark_attempted() {
        let subs = vec![sub("reverse-list", submission_status::WRONG_ANSWER)];
        let map = reconcile(&subs);
        assert_eq!(status_for(&map, "reverse-list"), ProblemStatus::Attempted);
    }

    #[test]
    fn test_any_non_accepted_status_counts_as_attempt() {
        for status in [
            submission_status::PENDING,
            submission_status::TIME_LIMIT_EXCEEDED,
            submission_status::RUNTIME_ERROR,
            submission_status::COMPILATION_ERROR,
        ] {
            let map = reconcile(&[sub("fizz-buzz", status)]);
            assert_eq!(status_for(&map, "fizz-buzz"), ProblemStatus::Attempted);
        }
    }

    #[test]
    fn test_no_submissions_defaults_to_unsolved() {
        let map = reconcile(&[]);
        assert_eq!(status_for(&map, "two-sum"), ProblemStatus::Unsolved);
    }

    #[test]
    fn test_slugs_reconcile_independently() {
        let subs = vec![
            sub("two-sum", submission_status::ACCEPTED),
            sub("reverse-list", submission_status::WRONG_ANSWER),
        ];
        let map = reconcile(&subs);
        assert_eq!(status_for(&map, "two-sum"), ProblemStatus::Solved);
        assert_eq!(status_for(&map, "reverse-list"), ProblemStatus::Attempted);
        assert_eq!(status_for(&map, "fizz-buzz"), ProblemStatus::Unsolved);
    }
}
