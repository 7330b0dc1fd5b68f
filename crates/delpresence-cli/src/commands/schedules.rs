use clap::{Args, Subcommand};
use delpresence::modules::ScheduleService;
use delpresence::modules::schedules::{
    ConflictCheckRequest, CreateScheduleDto, ScheduleFilter, UpdateScheduleDto,
};
use delpresence_core::{DepartmentFilter, ListFilter, Operation, SemesterFilter, TextQuery};
use delpresence_models::ids::{
    AcademicYearId, CourseId, RoomId, ScheduleId, StudentGroupId, UserId,
};
use delpresence_models::value_types::Day;

use crate::commands::{ConfirmArgs, Context, PageArgs};
use crate::output::{Table, check, or_dash, page_footer, success};

/// The slot a schedule occupies.
#[derive(Debug, Clone, Args)]
pub struct SlotArgs {
    #[arg(long)]
    pub course: CourseId,
    /// Senin..Minggu (English names accepted)
    #[arg(long)]
    pub day: Day,
    /// HH:MM
    #[arg(long)]
    pub start: String,
    /// HH:MM
    #[arg(long)]
    pub end: String,
    #[arg(long)]
    pub room: RoomId,
    /// Lecturer's user id
    #[arg(long)]
    pub lecturer: UserId,
    #[arg(long)]
    pub student_group: StudentGroupId,
    #[arg(long)]
    pub academic_year: AcademicYearId,
    #[arg(long)]
    pub capacity: Option<u32>,
}

impl From<SlotArgs> for CreateScheduleDto {
    fn from(slot: SlotArgs) -> Self {
        Self {
            course_id: slot.course,
            day: slot.day,
            start_time: slot.start,
            end_time: slot.end,
            room_id: slot.room,
            lecturer_id: slot.lecturer,
            student_group_id: slot.student_group,
            academic_year_id: slot.academic_year,
            capacity: slot.capacity,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ScheduleCommand {
    /// List schedules, Monday first
    List {
        /// Search course, lecturer, room or student group
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        day: Option<Day>,
        #[arg(long)]
        department: Option<DepartmentFilter>,
        #[arg(long)]
        semester: Option<SemesterFilter>,
        #[arg(long)]
        academic_year: Option<AcademicYearId>,
        #[arg(long)]
        room: Option<RoomId>,
        #[arg(long)]
        lecturer: Option<UserId>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show one schedule
    Show { id: ScheduleId },
    /// Check a slot for room, lecturer and student group conflicts
    Check {
        #[command(flatten)]
        slot: SlotArgs,
        /// Schedule being edited
        #[arg(long)]
        exclude: Option<ScheduleId>,
    },
    /// Create a schedule after checking for conflicts
    Create {
        #[command(flatten)]
        slot: SlotArgs,
        #[arg(long)]
        skip_conflict_check: bool,
    },
    /// Update a schedule after checking for conflicts
    Update {
        id: ScheduleId,
        #[arg(long)]
        course: Option<CourseId>,
        #[arg(long)]
        day: Option<Day>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        room: Option<RoomId>,
        #[arg(long)]
        lecturer: Option<UserId>,
        #[arg(long)]
        student_group: Option<StudentGroupId>,
        #[arg(long)]
        academic_year: Option<AcademicYearId>,
        #[arg(long)]
        capacity: Option<u32>,
        #[arg(long)]
        skip_conflict_check: bool,
    },
    /// Delete a schedule
    Delete {
        id: ScheduleId,
        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

pub async fn run(ctx: &Context, command: ScheduleCommand) -> anyhow::Result<()> {
    let client = &ctx.client;
    match command {
        ScheduleCommand::List {
            search,
            day,
            department,
            semester,
            academic_year,
            room,
            lecturer,
            page,
        } => {
            let schedules = check(
                Operation::Fetch,
                ScheduleService::list(client, academic_year).await,
            )?;
            let filter = ScheduleFilter {
                search: TextQuery::new(search.as_deref()),
                day,
                department: department.unwrap_or_default(),
                semester: semester.unwrap_or_default(),
                academic_year_id: academic_year,
                room_id: room,
                lecturer_id: lecturer,
            };
            let page = page.slice(filter.apply(&schedules));

            let mut table = Table::new(["ID", "Hari", "Jam", "Mata Kuliah", "Ruangan", "Dosen", "Kelompok"]);
            for schedule in &page.data {
                table.row([
                    schedule.id.to_string(),
                    schedule.day.to_string(),
                    schedule.time_slot(),
                    or_dash(schedule.course_name.as_deref()),
                    or_dash(schedule.room_name.as_deref()),
                    or_dash(schedule.lecturer_name.as_deref()),
                    or_dash(schedule.student_group_name.as_deref()),
                ]);
            }
            table.print();
            println!("{}", page_footer(&page.meta));
        }
        ScheduleCommand::Show { id } => {
            let s = check(Operation::Fetch, ScheduleService::get(client, id).await)?;
            println!("{} {}", s.day, s.time_slot());
            println!(
                "Mata Kuliah : {} {}",
                or_dash(s.course_code.as_deref()),
                or_dash(s.course_name.as_deref())
            );
            println!(
                "Ruangan     : {} ({})",
                or_dash(s.room_name.as_deref()),
                or_dash(s.building.as_deref())
            );
            println!("Dosen       : {}", or_dash(s.lecturer_name.as_deref()));
            println!("Kelompok    : {}", or_dash(s.student_group_name.as_deref()));
            println!("Tahun       : {}", or_dash(s.academic_year_name.as_deref()));
        }
        ScheduleCommand::Check { slot, exclude } => {
            let dto = CreateScheduleDto::from(slot);
            let request = ConflictCheckRequest::for_schedule(&dto, exclude);
            let result = check(
                Operation::CheckConflicts,
                ScheduleService::check_conflicts(client, &request).await,
            )?;
            if !result.has_conflict {
                success(Operation::CheckConflicts);
                return Ok(());
            }

            println!("⚠️  {}", delpresence_core::messages::SCHEDULE_CONFLICT);
            let mut table = Table::new(["Jenis", "Jadwal", "Mata Kuliah", "Waktu", "Keterangan"]);
            for conflict in &result.conflicts {
                let when = match (&conflict.day, &conflict.start_time, &conflict.end_time) {
                    (Some(day), Some(start), Some(end)) => format!("{day} {start} - {end}"),
                    _ => "-".to_string(),
                };
                table.row([
                    conflict.conflict_type.to_string(),
                    conflict
                        .schedule_id
                        .map(|id| id.to_string())
                        .unwrap_or_else(|| "-".into()),
                    or_dash(conflict.course_name.as_deref()),
                    when,
                    or_dash(conflict.message.as_deref()),
                ]);
            }
            table.print();
        }
        ScheduleCommand::Create {
            slot,
            skip_conflict_check,
        } => {
            let dto = CreateScheduleDto::from(slot);
            let result = if skip_conflict_check {
                ScheduleService::create(client, dto).await
            } else {
                ScheduleService::create_checked(client, dto).await
            };
            let schedule = check(Operation::Create, result)?;
            success(Operation::Create);
            println!("   ID: {}", schedule.id);
        }
        ScheduleCommand::Update {
            id,
            course,
            day,
            start,
            end,
            room,
            lecturer,
            student_group,
            academic_year,
            capacity,
            skip_conflict_check,
        } => {
            let dto = UpdateScheduleDto {
                course_id: course,
                day,
                start_time: start,
                end_time: end,
                room_id: room,
                lecturer_id: lecturer,
                student_group_id: student_group,
                academic_year_id: academic_year,
                capacity,
            };
            check(
                Operation::Update,
                ScheduleService::update(client, id, dto, skip_conflict_check).await,
            )?;
            success(Operation::Update);
        }
        ScheduleCommand::Delete { id, confirm } => {
            if confirm.confirm(&format!("Hapus jadwal #{id}?"))? {
                check(Operation::Delete, ScheduleService::delete(client, id).await)?;
                success(Operation::Delete);
            }
        }
    }
    Ok(())
}
