//! Client-side student search.
//!
//! Linear scan over the loaded list; recomputed every frame.

use crate::User;

/// Whether `user` matches `term`: a case-insensitive substring of the name,
/// email or room number. An empty term matches everyone.
pub fn matches_search(user: &User, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();

    [&user.name, &user.email, &user.room_number]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// The visible subset of `users`, in their original order.
pub fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    users
        .iter()
        .filter(|user| matches_search(user, term))
        .collect()
}
