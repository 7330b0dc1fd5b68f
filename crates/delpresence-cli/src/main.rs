use clap::{Parser, Subcommand};
use delpresence::ApiClient;
use delpresence::logging::init_tracing;
use delpresence_auth::TokenStore;
use delpresence_cli::commands::assignments::{self, AssignmentCommand};
use delpresence_cli::commands::attendance::{self, AttendanceCommand};
use delpresence_cli::commands::auth::{self, AuthCommand};
use delpresence_cli::commands::course_groups::{self, CourseGroupCommand};
use delpresence_cli::commands::courses::{self, CourseCommand};
use delpresence_cli::commands::schedules::{self, ScheduleCommand};
use delpresence_cli::commands::student_groups::{self, StudentGroupCommand};
use delpresence_cli::commands::study_programs::{self, LecturerCommand, StudyProgramCommand};
use delpresence_cli::commands::{Context, reference};
use delpresence_config::{ApiConfig, AttendanceConfig, LogConfig};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "delpresence")]
#[command(about = "DelPresence CLI - Academic scheduling and attendance administration", long_about = None)]
#[command(version)]
struct Cli {
    /// Backend base URL (overrides API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the stored access token
    #[command(subcommand)]
    Auth(AuthCommand),
    /// Study programs (departments)
    #[command(subcommand)]
    StudyPrograms(StudyProgramCommand),
    /// List faculties
    Faculties,
    /// Look up lecturers
    #[command(subcommand)]
    Lecturers(LecturerCommand),
    /// Courses
    #[command(subcommand)]
    Courses(CourseCommand),
    /// Course groups
    #[command(subcommand)]
    CourseGroups(CourseGroupCommand),
    /// Lecturer to course assignments
    #[command(subcommand)]
    Assignments(AssignmentCommand),
    /// Weekly class schedules
    #[command(subcommand)]
    Schedules(ScheduleCommand),
    /// Student groups and their members
    #[command(subcommand)]
    StudentGroups(StudentGroupCommand),
    /// List academic years
    AcademicYears {
        /// Only the year covering today
        #[arg(long)]
        current: bool,
    },
    /// List rooms
    Rooms,
    /// Lecturer attendance sessions
    #[command(subcommand)]
    Attendance(AttendanceCommand),
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    let _log_guard = init_tracing(&LogConfig::from_env());

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let store = TokenStore::from_env()?;

    let api = match cli.api_url {
        Some(url) => ApiConfig::new(url),
        None => ApiConfig::from_env(),
    };
    let ctx = Context {
        client: ApiClient::new(&api, store.load())?,
        attendance: AttendanceConfig::from_env(),
    };
    tracing::debug!(base_url = ctx.client.base_url(), "Client ready");

    match cli.command {
        Commands::Auth(command) => auth::run(&store, command),
        Commands::StudyPrograms(command) => study_programs::run(&ctx, command).await,
        Commands::Faculties => study_programs::faculties(&ctx).await,
        Commands::Lecturers(command) => study_programs::lecturers(&ctx, command).await,
        Commands::Courses(command) => courses::run(&ctx, command).await,
        Commands::CourseGroups(command) => course_groups::run(&ctx, command).await,
        Commands::Assignments(command) => assignments::run(&ctx, command).await,
        Commands::Schedules(command) => schedules::run(&ctx, command).await,
        Commands::StudentGroups(command) => student_groups::run(&ctx, command).await,
        Commands::AcademicYears { current } => reference::academic_years(&ctx, current).await,
        Commands::Rooms => reference::rooms(&ctx).await,
        Commands::Attendance(command) => attendance::run(&ctx, command).await,
    }
}
