//! Strongly-typed ID newtypes for backend entities.
//!
//! The backend uses unsigned integer primary keys. Wrapping them prevents
//! passing a `RoomId` where a `CourseId` is expected.
//!
//! # Example
//!
//! ```ignore
//! use delpresence_models::ids::{CourseId, RoomId};
//!
//! let course: CourseId = "12".parse().unwrap();
//! assert_eq!(course.get(), 12);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::ValidationError;

/// Access to the raw numeric value of an id newtype.
pub trait EntityId: Copy {
    fn get(self) -> u64;
}

impl<I: EntityId> EntityId for &I {
    #[inline]
    fn get(self) -> u64 {
        (*self).get()
    }
}

/// Rejects the zero id, which the backend never issues.
pub fn validate_id<I: EntityId>(id: &I) -> Result<(), ValidationError> {
    if id.get() == 0 {
        return Err(ValidationError::new("id").with_message("ID wajib dipilih".into()));
    }
    Ok(())
}

/// Macro to define a strongly-typed ID newtype over `u64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            #[inline]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            #[inline]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl EntityId for $name {
            #[inline]
            fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            #[inline]
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            #[inline]
            fn from(id: $name) -> u64 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<u64>().map(Self)
            }
        }
    };
}

define_id!(
    /// Faculty primary key.
    FacultyId
);
define_id!(
    /// Study program primary key. Study programs are the departments
    /// courses, groups and schedules belong to.
    StudyProgramId
);
define_id!(
    /// Lecturer profile primary key.
    LecturerId
);
define_id!(
    /// User account primary key (lecturers are assigned by user id).
    UserId
);
define_id!(AcademicYearId);
define_id!(RoomId);
define_id!(CourseId);
define_id!(CourseGroupId);
define_id!(AssignmentId);
define_id!(ScheduleId);
define_id!(StudentGroupId);
define_id!(StudentId);
define_id!(
    /// Attendance session primary key.
    SessionId
);

/// Departments are study programs.
pub type DepartmentId = StudyProgramId;
