//! Heuristic match scoring: shared interest tokens weigh heaviest, with an
//! age-proximity term that fades to zero at a 20-year gap.

use lovelink_types::api::RankedMatch;
use lovelink_types::models::User;

use crate::{App, AppError, Result};

/// Number of suggestions kept after ranking.
const MAX_SUGGESTIONS: usize = 8;

/// Points per shared interest token.
const OVERLAP_WEIGHT: u32 = 20;

/// Age gap (in years) beyond which the proximity term contributes nothing.
const AGE_GAP_CUTOFF: u32 = 20;

impl App {
    /// Suggestions for `email`: every other registered user, scored and
    /// ranked, best first. Declines when the viewer is not a registered
    /// identity.
    pub fn suggestions_for(&self, email: &str) -> Result<Vec<RankedMatch>> {
        let users = self.all_users()?;
        let viewer = users
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(AppError::NotSignedIn)?;
        Ok(rank(&viewer, &users))
    }
}

/// Split a comma-separated interests string into normalized tokens:
/// trimmed, lowercased, empties dropped.
pub fn interest_tokens(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Rank `pool` against `viewer`. The viewer's own record is skipped, ties
/// keep pool order (the sort is stable), and the result is truncated to
/// [`MAX_SUGGESTIONS`].
pub fn rank(viewer: &User, pool: &[User]) -> Vec<RankedMatch> {
    let mine = interest_tokens(&viewer.interests);

    let mut ranked: Vec<RankedMatch> = pool
        .iter()
        .filter(|u| u.email != viewer.email)
        .map(|candidate| score_candidate(viewer, &mine, candidate))
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(MAX_SUGGESTIONS);
    ranked
}

fn score_candidate(viewer: &User, mine: &[String], candidate: &User) -> RankedMatch {
    let theirs = interest_tokens(&candidate.interests);

    // Membership test: each of the viewer's tokens counts once when it
    // appears anywhere in the candidate's list.
    let shared: Vec<String> = mine
        .iter()
        .filter(|t| theirs.contains(*t))
        .cloned()
        .collect();

    let age_gap = viewer.age.abs_diff(candidate.age);
    let score = shared.len() as u32 * OVERLAP_WEIGHT + AGE_GAP_CUTOFF.saturating_sub(age_gap);

    let shared_label = if shared.is_empty() {
        "none".to_string()
    } else {
        shared.join(", ")
    };
    let reason = format!("Shared interests: {shared_label}; age gap {age_gap}");

    RankedMatch {
        user: candidate.clone(),
        score,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, age: u32, interests: &str) -> User {
        User {
            email: email.into(),
            name: email.into(),
            password: "1234".into(),
            age,
            gender: "other".into(),
            interests: interests.into(),
            city: None,
            bio: None,
        }
    }

    #[test]
    fn tokenizes_trimmed_lowercased_and_drops_empties() {
        assert_eq!(
            interest_tokens(" Hiking ,  COFFEE,, jazz ,"),
            vec!["hiking", "coffee", "jazz"]
        );
        assert!(interest_tokens("").is_empty());
    }

    #[test]
    fn one_shared_interest_and_two_year_gap_scores_38() {
        let viewer = user("me@x", 24, "hiking, coffee");
        let pool = [user("them@x", 26, "hiking, ramen")];

        let ranked = rank(&viewer, &pool);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 38);
        assert_eq!(ranked[0].reason, "Shared interests: hiking; age gap 2");
    }

    #[test]
    fn no_overlap_and_no_gap_scores_20() {
        let viewer = user("me@x", 30, "chess");
        let pool = [user("them@x", 30, "surfing")];

        let ranked = rank(&viewer, &pool);
        assert_eq!(ranked[0].score, 20);
        assert_eq!(ranked[0].reason, "Shared interests: none; age gap 0");
    }

    #[test]
    fn wide_age_gap_contributes_nothing() {
        let viewer = user("me@x", 22, "hiking");
        let pool = [user("them@x", 60, "hiking")];

        let ranked = rank(&viewer, &pool);
        assert_eq!(ranked[0].score, 20); // overlap only
    }

    #[test]
    fn viewer_without_interests_ranks_by_age_proximity() {
        let viewer = user("me@x", 25, "");
        let pool = [user("far@x", 45, "hiking"), user("near@x", 26, "chess")];

        let ranked = rank(&viewer, &pool);
        assert_eq!(ranked[0].user.email, "near@x");
        assert_eq!(ranked[0].score, 19);
        assert_eq!(ranked[1].score, 0);
    }

    #[test]
    fn truncates_to_the_eight_best() {
        let viewer = user("me@x", 40, "");
        // Ages 20..40: strictly increasing scores as age approaches 40.
        let pool: Vec<User> = (0..20)
            .map(|i| user(&format!("u{i}@x"), 20 + i, ""))
            .collect();

        let ranked = rank(&viewer, &pool);
        assert_eq!(ranked.len(), 8);
        let scores: Vec<u32> = ranked.iter().map(|m| m.score).collect();
        assert_eq!(scores, [19, 18, 17, 16, 15, 14, 13, 12]);
        assert_eq!(ranked[0].user.email, "u19@x");
    }

    #[test]
    fn ties_keep_pool_order() {
        let viewer = user("me@x", 30, "");
        let pool = [user("first@x", 32, ""), user("second@x", 28, "")];

        let ranked = rank(&viewer, &pool);
        assert_eq!(ranked[0].user.email, "first@x");
        assert_eq!(ranked[1].user.email, "second@x");
    }

    #[test]
    fn viewer_is_excluded_from_the_pool() {
        let viewer = user("me@x", 30, "hiking");
        let pool = [viewer.clone(), user("them@x", 30, "hiking")];

        let ranked = rank(&viewer, &pool);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].user.email, "them@x");
    }
}
