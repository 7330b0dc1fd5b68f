//! Optimistic membership state for one student group.
//!
//! The roster partitions students into current members and students still
//! available to add. Moves are applied locally before the batch request is
//! sent; every move hands back a [`RosterSnapshot`] so a failed request can
//! put the lists back exactly as they were.

use delpresence_models::ids::StudentId;
use delpresence_models::student_groups::Student;

/// Saved state of a [`MemberRoster`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSnapshot {
    members: Vec<Student>,
    available: Vec<Student>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberRoster {
    members: Vec<Student>,
    available: Vec<Student>,
}

impl MemberRoster {
    /// Students listed on both sides are kept as members only.
    pub fn new(members: Vec<Student>, available: Vec<Student>) -> Self {
        let available = available
            .into_iter()
            .filter(|s| !members.iter().any(|m| m.id == s.id))
            .collect();
        Self { members, available }
    }

    pub fn members(&self) -> &[Student] {
        &self.members
    }

    pub fn available(&self) -> &[Student] {
        &self.available
    }

    /// Ids from `ids` that can be added, in the order given, without duplicates.
    #[must_use]
    pub fn addable(&self, ids: &[StudentId]) -> Vec<StudentId> {
        present(&self.available, ids)
    }

    /// Ids from `ids` that can be removed, in the order given, without duplicates.
    #[must_use]
    pub fn removable(&self, ids: &[StudentId]) -> Vec<StudentId> {
        present(&self.members, ids)
    }

    #[must_use]
    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            members: self.members.clone(),
            available: self.available.clone(),
        }
    }

    /// Moves the given students from available to members.
    pub fn add(&mut self, ids: &[StudentId]) -> RosterSnapshot {
        let snapshot = self.snapshot();
        move_students(&mut self.available, &mut self.members, ids);
        snapshot
    }

    /// Moves the given students from members back to available.
    pub fn remove(&mut self, ids: &[StudentId]) -> RosterSnapshot {
        let snapshot = self.snapshot();
        move_students(&mut self.members, &mut self.available, ids);
        snapshot
    }

    pub fn restore(&mut self, snapshot: RosterSnapshot) {
        self.members = snapshot.members;
        self.available = snapshot.available;
    }
}

fn present(side: &[Student], ids: &[StudentId]) -> Vec<StudentId> {
    let mut found: Vec<StudentId> = Vec::with_capacity(ids.len());
    for id in ids {
        if side.iter().any(|s| s.id == *id) && !found.contains(id) {
            found.push(*id);
        }
    }
    found
}

fn move_students(from: &mut Vec<Student>, to: &mut Vec<Student>, ids: &[StudentId]) {
    let (moving, staying): (Vec<Student>, Vec<Student>) =
        std::mem::take(from).into_iter().partition(|s| ids.contains(&s.id));
    *from = staying;
    to.extend(moving);
}
