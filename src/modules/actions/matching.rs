//! Mutual-match predicate over two users' action records.
//!
//! A pair is mutual when each side's `likes` holds the other. The `likedBy`
//! arrays are the backend's reverse index; when both likes are present but
//! neither reverse entry was written, the records are inconsistent.

use super::model::UserActions;

/// `true` when `b` is in `likes_a` and `a` is in `likes_b`.
pub fn is_mutual(a: &str, likes_a: &[String], b: &str, likes_b: &[String]) -> bool {
    likes_a.iter().any(|id| id == b) && likes_b.iter().any(|id| id == a)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionStatus {
    /// Liked the other user and is liked back.
    Mutual,
    AwaitingReciprocation,
    NeedsLikeBack,
    None,
}

impl InteractionStatus {
    /// How one record sees its relationship with `other`.
    pub fn of(actions: &UserActions, other: &str) -> Self {
        match (actions.has_liked(other), actions.is_liked_by(other)) {
            (true, true) => InteractionStatus::Mutual,
            (true, false) => InteractionStatus::AwaitingReciprocation,
            (false, true) => InteractionStatus::NeedsLikeBack,
            (false, false) => InteractionStatus::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchDiagnosis {
    pub a_likes_b: bool,
    pub b_likes_a: bool,
    /// `b` appears in A's `likedBy`.
    pub a_liked_by_b: bool,
    /// `a` appears in B's `likedBy`.
    pub b_liked_by_a: bool,
}

impl MatchDiagnosis {
    pub fn new(a: &str, actions_a: &UserActions, b: &str, actions_b: &UserActions) -> Self {
        Self {
            a_likes_b: actions_a.has_liked(b),
            b_likes_a: actions_b.has_liked(a),
            a_liked_by_b: actions_a.is_liked_by(b),
            b_liked_by_a: actions_b.is_liked_by(a),
        }
    }

    pub fn mutual(&self) -> bool {
        self.a_likes_b && self.b_likes_a
    }

    /// At least one reverse entry exists.
    pub fn backfilled(&self) -> bool {
        self.a_liked_by_b || self.b_liked_by_a
    }

    /// Both likes recorded but neither `likedBy` was written.
    pub fn backfill_inconsistent(&self) -> bool {
        self.mutual() && !self.backfilled()
    }

    /// The check the backend runs when A's like of B lands: B already sits in A's `likedBy`.
    pub fn like_from_a_completes_match(&self) -> bool {
        self.a_liked_by_b
    }

    pub fn like_from_b_completes_match(&self) -> bool {
        self.b_liked_by_a
    }

    pub fn swap(self) -> Self {
        Self {
            a_likes_b: self.b_likes_a,
            b_likes_a: self.a_likes_b,
            a_liked_by_b: self.b_liked_by_a,
            b_liked_by_a: self.a_liked_by_b,
        }
    }
}
