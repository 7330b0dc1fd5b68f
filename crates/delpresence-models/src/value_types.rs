//! Enumerated domain values shared by several DTOs.
//!
//! Every enum accepts the backend spelling on the wire plus the common
//! Indonesian and English spellings operators type on the command line.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error type for value parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueParseError {
    pub kind: &'static str,
    pub input: String,
}

impl std::error::Error for ValueParseError {}

impl fmt::Display for ValueParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.kind, self.input)
    }
}

fn parse_error(kind: &'static str, input: &str) -> ValueParseError {
    ValueParseError {
        kind,
        input: input.to_string(),
    }
}

// ============================================================================
// Degree
// ============================================================================

/// Degree level of a study program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Degree {
    D3,
    D4,
    S1,
    S2,
    S3,
}

impl FromStr for Degree {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "D3" => Ok(Self::D3),
            "D4" => Ok(Self::D4),
            "S1" => Ok(Self::S1),
            "S2" => Ok(Self::S2),
            "S3" => Ok(Self::S3),
            _ => Err(parse_error("degree", s)),
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::D3 => "D3",
            Self::D4 => "D4",
            Self::S1 => "S1",
            Self::S2 => "S2",
            Self::S3 => "S3",
        };
        f.write_str(s)
    }
}

// ============================================================================
// Term
// ============================================================================

/// Semester designation of an academic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    #[serde(rename = "ganjil", alias = "Ganjil", alias = "GANJIL")]
    Ganjil,
    #[serde(rename = "genap", alias = "Genap", alias = "GENAP")]
    Genap,
}

impl Term {
    /// Whether a course semester (1-based) is taught in this term.
    #[must_use]
    pub const fn includes_semester(self, semester: u8) -> bool {
        match self {
            Self::Ganjil => semester % 2 == 1,
            Self::Genap => semester != 0 && semester % 2 == 0,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ganjil => f.write_str("Ganjil"),
            Self::Genap => f.write_str("Genap"),
        }
    }
}

// ============================================================================
// CourseType
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    #[serde(alias = "teori")]
    Theory,
    #[serde(alias = "praktikum")]
    Practice,
    #[serde(alias = "campuran")]
    Mixed,
}

impl FromStr for CourseType {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "theory" | "teori" => Ok(Self::Theory),
            "practice" | "praktikum" => Ok(Self::Practice),
            "mixed" | "campuran" => Ok(Self::Mixed),
            _ => Err(parse_error("course type", s)),
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Theory => f.write_str("Teori"),
            Self::Practice => f.write_str("Praktikum"),
            Self::Mixed => f.write_str("Teori & Praktikum"),
        }
    }
}

// ============================================================================
// Day
// ============================================================================

/// Day of a weekly class schedule, in Indonesian.
///
/// Variants are declared Monday first so sorting follows the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    #[serde(alias = "senin", alias = "monday")]
    Senin,
    #[serde(alias = "selasa", alias = "tuesday")]
    Selasa,
    #[serde(alias = "rabu", alias = "wednesday")]
    Rabu,
    #[serde(alias = "kamis", alias = "thursday")]
    Kamis,
    #[serde(alias = "jumat", alias = "friday")]
    Jumat,
    #[serde(alias = "sabtu", alias = "saturday")]
    Sabtu,
    #[serde(alias = "minggu", alias = "sunday")]
    Minggu,
}

impl Day {
    #[must_use]
    pub const fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Self::Senin,
            Weekday::Tue => Self::Selasa,
            Weekday::Wed => Self::Rabu,
            Weekday::Thu => Self::Kamis,
            Weekday::Fri => Self::Jumat,
            Weekday::Sat => Self::Sabtu,
            Weekday::Sun => Self::Minggu,
        }
    }
}

impl FromStr for Day {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "senin" | "monday" | "mon" => Ok(Self::Senin),
            "selasa" | "tuesday" | "tue" => Ok(Self::Selasa),
            "rabu" | "wednesday" | "wed" => Ok(Self::Rabu),
            "kamis" | "thursday" | "thu" => Ok(Self::Kamis),
            "jumat" | "jum'at" | "friday" | "fri" => Ok(Self::Jumat),
            "sabtu" | "saturday" | "sat" => Ok(Self::Sabtu),
            "minggu" | "sunday" | "sun" => Ok(Self::Minggu),
            _ => Err(parse_error("day", s)),
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ============================================================================
// Attendance
// ============================================================================

/// How students check in to an attendance session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceType {
    QrCode,
    FaceRecognition,
    Both,
}

impl FromStr for AttendanceType {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "qr" | "qr_code" => Ok(Self::QrCode),
            "face" | "face_recognition" => Ok(Self::FaceRecognition),
            "both" => Ok(Self::Both),
            _ => Err(parse_error("attendance type", s)),
        }
    }
}

impl fmt::Display for AttendanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QrCode => f.write_str("QR Code"),
            Self::FaceRecognition => f.write_str("Face Recognition"),
            Self::Both => f.write_str("QR Code & Face Recognition"),
        }
    }
}

/// Lifecycle state of an attendance session. Owned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Active,
    Closed,
    #[serde(alias = "CANCELLED")]
    Canceled,
}

impl FromStr for SessionStatus {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" | "aktif" => Ok(Self::Active),
            "closed" | "ditutup" => Ok(Self::Closed),
            "canceled" | "cancelled" | "dibatalkan" => Ok(Self::Canceled),
            _ => Err(parse_error("session status", s)),
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("Aktif"),
            Self::Closed => f.write_str("Ditutup"),
            Self::Canceled => f.write_str("Dibatalkan"),
        }
    }
}
