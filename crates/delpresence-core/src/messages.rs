//! User-facing messages.
//!
//! The backend reports errors in English; operators read Indonesian. Known
//! server phrases are translated, everything else falls back to a message
//! describing the operation that failed.

use crate::errors::{ApiError, format_validation_errors};

pub const NOT_FOUND: &str = "Data tidak ditemukan";
pub const ALREADY_EXISTS: &str = "Data sudah ada";
pub const HAS_RELATED_DATA: &str = "Data tidak dapat dihapus karena masih memiliki data terkait";
pub const SESSION_EXPIRED: &str = "Sesi Anda telah berakhir, silakan login kembali";
pub const FORBIDDEN: &str = "Anda tidak memiliki akses untuk melakukan tindakan ini";
pub const CONNECTION_FAILED: &str = "Tidak dapat terhubung ke server";
pub const SCHEDULE_CONFLICT: &str = "Jadwal bentrok dengan jadwal lain";

/// The kind of action a request performed, used to pick toast messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Fetch,
    Create,
    Update,
    Delete,
    AddMembers,
    RemoveMembers,
    CheckConflicts,
    StartSession,
    CloseSession,
}

impl Operation {
    #[must_use]
    pub const fn success_message(self) -> &'static str {
        match self {
            Self::Fetch => "Data berhasil dimuat",
            Self::Create => "Data berhasil disimpan",
            Self::Update => "Data berhasil diperbarui",
            Self::Delete => "Data berhasil dihapus",
            Self::AddMembers => "Mahasiswa berhasil ditambahkan ke kelompok",
            Self::RemoveMembers => "Mahasiswa berhasil dikeluarkan dari kelompok",
            Self::CheckConflicts => "Tidak ada jadwal yang bentrok",
            Self::StartSession => "Sesi presensi berhasil dimulai",
            Self::CloseSession => "Sesi presensi berhasil ditutup",
        }
    }

    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Fetch => "Gagal memuat data",
            Self::Create => "Gagal menyimpan data",
            Self::Update => "Gagal memperbarui data",
            Self::Delete => "Gagal menghapus data",
            Self::AddMembers => "Gagal menambahkan mahasiswa ke kelompok",
            Self::RemoveMembers => "Gagal mengeluarkan mahasiswa dari kelompok",
            Self::CheckConflicts => "Gagal memeriksa bentrok jadwal",
            Self::StartSession => "Gagal memulai sesi presensi",
            Self::CloseSession => "Gagal menutup sesi presensi",
        }
    }
}

/// Translates a known English server phrase.
///
/// Matching is case-insensitive on substrings; the first rule wins.
#[must_use]
pub fn translate_server_message(message: &str) -> Option<&'static str> {
    const RULES: &[(&[&str], &str)] = &[
        (&["not found", "no rows"], NOT_FOUND),
        (&["already exists", "duplicate"], ALREADY_EXISTS),
        (&["foreign key", "related", "still in use"], HAS_RELATED_DATA),
        (&["schedule conflict", "jadwal", "bentrok"], SCHEDULE_CONFLICT),
        (&["unauthorized", "invalid token", "token expired"], SESSION_EXPIRED),
        (&["forbidden", "permission denied"], FORBIDDEN),
    ];

    let lowered = message.to_lowercase();
    RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| lowered.contains(n)))
        .map(|(_, translated)| *translated)
}

impl ApiError {
    /// The toast text shown to the operator when `op` fails with this error.
    #[must_use]
    pub fn user_message(&self, op: Operation) -> String {
        match self {
            Self::Http(_) => CONNECTION_FAILED.to_string(),
            Self::Unauthenticated | Self::TokenExpired => SESSION_EXPIRED.to_string(),
            Self::Validation(errors) => {
                format!("Data tidak valid: {}", format_validation_errors(errors))
            }
            Self::Api { status, message } => match *status {
                409 if op == Operation::Delete => HAS_RELATED_DATA.to_string(),
                409 if op == Operation::CheckConflicts => SCHEDULE_CONFLICT.to_string(),
                401 => SESSION_EXPIRED.to_string(),
                403 => FORBIDDEN.to_string(),
                _ => translate_server_message(message)
                    .map(str::to_string)
                    .unwrap_or_else(|| match *status {
                        404 => NOT_FOUND.to_string(),
                        409 => ALREADY_EXISTS.to_string(),
                        _ => op.failure_message().to_string(),
                    }),
            },
            Self::Parse(_) | Self::Config(_) | Self::Other(_) => op.failure_message().to_string(),
        }
    }
}
