//! In-memory roster store.
//!
//! One [`ActivityStore`] is built at startup and shared with every worker
//! through `web::Data`. The whole mapping sits behind a single `RwLock`:
//! listing takes a read lock and hands back a snapshot, while signup and
//! unregister hold the write lock across their check-then-mutate step.

use std::collections::BTreeMap;
use std::fmt;

use parking_lot::RwLock;

use crate::models::activity::{seed_activities, Activity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterError {
    NotFound,
    AlreadyRegistered,
    NotRegistered,
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::NotFound => write!(f, "Activity not found"),
            RosterError::AlreadyRegistered => write!(f, "Student is already signed up for this activity"),
            RosterError::NotRegistered => write!(f, "Student is not registered for this activity"),
        }
    }
}

impl std::error::Error for RosterError {}

pub struct ActivityStore {
    activities: RwLock<BTreeMap<String, Activity>>,
}

impl ActivityStore {
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self { activities: RwLock::new(activities) }
    }

    /// Store holding the built-in activity list.
    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    pub fn list(&self) -> BTreeMap<String, Activity> {
        self.activities.read().clone()
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.activities.read().contains_key(name)
    }

    /// Adds `email` to the roster of `name` and returns the updated activity.
    ///
    /// Capacity is not enforced; callers can inspect [`Activity::spots_left`].
    pub fn signup(&self, name: &str, email: &str) -> Result<Activity, RosterError> {
        let mut activities = self.activities.write();
        let activity = activities.get_mut(name).ok_or(RosterError::NotFound)?;

        if activity.is_registered(email) {
            return Err(RosterError::AlreadyRegistered);
        }

        activity.participants.push(email.to_string());
        Ok(activity.clone())
    }

    /// Removes `email` from the roster of `name` and returns the updated activity.
    pub fn unregister(&self, name: &str, email: &str) -> Result<Activity, RosterError> {
        let mut activities = self.activities.write();
        let activity = activities.get_mut(name).ok_or(RosterError::NotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RosterError::NotRegistered)?;

        activity.participants.remove(position);
        Ok(activity.clone())
    }
}
