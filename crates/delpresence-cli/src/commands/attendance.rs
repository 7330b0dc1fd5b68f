use chrono::{Local, Utc};
use clap::Subcommand;
use delpresence::modules::AttendanceService;
use delpresence::modules::attendance::{
    AttendanceSession, CreateSessionDto, SessionFilter, SystemClock, WatchEvent,
    format_remaining, remaining_seconds, watcher,
};
use delpresence_core::{ListFilter, Operation};
use delpresence_models::ids::{ScheduleId, SessionId};
use delpresence_models::value_types::{AttendanceType, Day, SessionStatus};
use tokio::sync::{mpsc, watch};

use crate::commands::{ConfirmArgs, Context};
use crate::output::{Table, check, or_dash, success};

#[derive(Debug, Subcommand)]
pub enum AttendanceCommand {
    /// List the lecturer's schedules
    Schedules {
        /// Only today's schedules
        #[arg(long, conflicts_with = "day")]
        today: bool,
        #[arg(long)]
        day: Option<Day>,
    },
    /// Start an attendance session for a schedule
    Start {
        #[arg(long)]
        schedule: ScheduleId,
        /// qr, face or both
        #[arg(long = "type", default_value = "qr")]
        attendance_type: AttendanceType,
        /// Check-in window in minutes (1-240)
        #[arg(long, default_value_t = 15)]
        duration: u32,
        /// Close the session automatically when the window ends
        #[arg(long)]
        auto_close: bool,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List active sessions with their remaining time
    Active {
        #[arg(long = "type")]
        attendance_type: Option<AttendanceType>,
        #[arg(long)]
        status: Option<SessionStatus>,
    },
    /// Show one session
    Show { id: SessionId },
    /// Close a session now
    Close {
        id: SessionId,
        #[command(flatten)]
        confirm: ConfirmArgs,
    },
    /// Follow active sessions live and auto-close expired ones
    Watch,
}

pub async fn run(ctx: &Context, command: AttendanceCommand) -> anyhow::Result<()> {
    let client = &ctx.client;
    match command {
        AttendanceCommand::Schedules { today, day } => {
            let result = match (today, day) {
                (true, _) => AttendanceService::today_schedules(client).await,
                (false, Some(day)) => AttendanceService::schedules_on(client, day).await,
                (false, None) => AttendanceService::lecturer_schedules(client).await,
            };
            let schedules = check(Operation::Fetch, result)?;

            let mut table = Table::new(["ID", "Hari", "Jam", "Mata Kuliah", "Ruangan", "Kelompok"]);
            for schedule in &schedules {
                table.row([
                    schedule.id.to_string(),
                    schedule.day.to_string(),
                    schedule.time_slot(),
                    or_dash(schedule.course_name.as_deref()),
                    or_dash(schedule.room_name.as_deref()),
                    or_dash(schedule.student_group_name.as_deref()),
                ]);
            }
            table.print();
        }
        AttendanceCommand::Start {
            schedule,
            attendance_type,
            duration,
            auto_close,
            notes,
        } => {
            let dto = CreateSessionDto {
                course_schedule_id: schedule,
                attendance_type,
                duration,
                auto_close,
                notes,
            };
            let session = check(
                Operation::StartSession,
                AttendanceService::start_session(client, dto).await,
            )?;
            success(Operation::StartSession);
            println!(
                "   Sesi #{} berakhir pukul {}",
                session.id,
                session.ends_at().with_timezone(&Local).format("%H:%M:%S")
            );
        }
        AttendanceCommand::Active {
            attendance_type,
            status,
        } => {
            let sessions = check(Operation::Fetch, AttendanceService::active_sessions(client).await)?;
            let filter = SessionFilter {
                status,
                attendance_type,
            };
            print_sessions(&filter.apply(&sessions));
        }
        AttendanceCommand::Show { id } => {
            let session = check(Operation::Fetch, AttendanceService::get_session(client, id).await)?;
            let remaining = remaining_seconds(session.created_at, session.duration, Utc::now());
            println!("{}", session.title());
            println!("Status     : {}", session.status);
            println!("Jenis      : {}", session.attendance_type);
            println!("Ruangan    : {}", or_dash(session.room.as_deref()));
            println!("Durasi     : {} menit (sisa {})", session.duration, format_remaining(remaining));
            println!(
                "Kehadiran  : {}/{} hadir, {} terlambat, {} absen ({:.1}%)",
                session.attended_count,
                session.total_students,
                session.late_count,
                session.absent_count,
                session.attendance_rate()
            );
            println!("Catatan    : {}", or_dash(session.notes.as_deref()));
        }
        AttendanceCommand::Close { id, confirm } => {
            if confirm.confirm(&format!("Tutup sesi presensi #{id}?"))? {
                check(
                    Operation::CloseSession,
                    AttendanceService::close_session(client, id).await,
                )?;
                success(Operation::CloseSession);
            }
        }
        AttendanceCommand::Watch => watch_sessions(ctx).await?,
    }
    Ok(())
}

fn print_sessions(sessions: &[AttendanceSession]) {
    let now = Utc::now();
    let mut table = Table::new(["ID", "Mata Kuliah", "Jenis", "Status", "Sisa", "Hadir", "Auto"]);
    for session in sessions {
        table.row([
            session.id.to_string(),
            session.title(),
            session.attendance_type.to_string(),
            session.status.to_string(),
            format_remaining(remaining_seconds(session.created_at, session.duration, now)),
            format!("{}/{}", session.attended_count, session.total_students),
            if session.auto_close { "Ya" } else { "" }.to_string(),
        ]);
    }
    table.print();
}

async fn watch_sessions(ctx: &Context) -> anyhow::Result<()> {
    let (events_tx, mut events) = mpsc::channel(32);
    let (stop_tx, stop) = watch::channel(false);

    let client = ctx.client.clone();
    let config = ctx.attendance.clone();
    let handle = tokio::spawn(async move {
        watcher::run(&client, &SystemClock, &config, events_tx, stop).await;
    });

    println!("Memantau sesi aktif, tekan Ctrl-C untuk berhenti");
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            event = events.recv() => match event {
                Some(event) => render(event),
                None => break,
            },
        }
    }

    let _ = stop_tx.send(true);
    drop(events);
    handle.await?;
    Ok(())
}

fn render(event: WatchEvent) {
    match event {
        WatchEvent::Synced { sessions } => {
            tracing::debug!(active = sessions.len(), "Active sessions refreshed");
        }
        WatchEvent::Tick { countdowns } => {
            if countdowns.is_empty() {
                return;
            }
            let line = countdowns
                .iter()
                .map(|c| {
                    format!(
                        "#{} {} {}",
                        c.session_id,
                        c.title,
                        format_remaining(c.remaining_seconds)
                    )
                })
                .collect::<Vec<_>>()
                .join(" | ");
            println!("⏱  {line}");
        }
        WatchEvent::AutoClosed { session_id } => {
            println!("✅ Sesi #{session_id}: {}", Operation::CloseSession.success_message());
        }
        WatchEvent::CloseFailed { session_id, error } => {
            tracing::debug!(%error, "Close request failed");
            eprintln!("❌ Sesi #{session_id}: {}", Operation::CloseSession.failure_message());
        }
        WatchEvent::SyncFailed { error } => {
            eprintln!("⚠️  {}: {error}", Operation::Fetch.failure_message());
        }
    }
}
