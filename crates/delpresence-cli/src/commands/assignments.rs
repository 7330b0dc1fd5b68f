use clap::Subcommand;
use delpresence::modules::AssignmentService;
use delpresence::modules::assignments::{
    AssignmentFilter, CreateAssignmentDto, UpdateAssignmentDto,
};
use delpresence_core::{ListFilter, Operation, TextQuery};
use delpresence_models::ids::{AcademicYearId, AssignmentId, CourseId, UserId};

use crate::commands::{ConfirmArgs, Context, PageArgs};
use crate::output::{Table, check, or_dash, page_footer, success};

#[derive(Debug, Subcommand)]
pub enum AssignmentCommand {
    /// List lecturer assignments
    List {
        /// Search lecturer name, NIP or course
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        academic_year: Option<AcademicYearId>,
        #[arg(long)]
        course: Option<CourseId>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Assign a lecturer to a course
    Create {
        /// Lecturer's user id
        #[arg(long)]
        lecturer: UserId,
        #[arg(long)]
        course: CourseId,
        #[arg(long)]
        academic_year: AcademicYearId,
    },
    /// Change an assignment
    Update {
        id: AssignmentId,
        #[arg(long)]
        lecturer: Option<UserId>,
        #[arg(long)]
        course: Option<CourseId>,
        #[arg(long)]
        academic_year: Option<AcademicYearId>,
    },
    /// Remove an assignment
    Delete {
        id: AssignmentId,
        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

pub async fn run(ctx: &Context, command: AssignmentCommand) -> anyhow::Result<()> {
    let client = &ctx.client;
    match command {
        AssignmentCommand::List {
            search,
            academic_year,
            course,
            page,
        } => {
            let assignments = check(
                Operation::Fetch,
                AssignmentService::list(client, academic_year).await,
            )?;
            let filter = AssignmentFilter {
                search: TextQuery::new(search.as_deref()),
                academic_year_id: academic_year,
                course_id: course,
            };
            let page = page.slice(filter.apply(&assignments));

            let mut table = Table::new(["ID", "Dosen", "NIP", "Mata Kuliah", "Tahun Akademik"]);
            for assignment in &page.data {
                let course = match (&assignment.course_code, &assignment.course_name) {
                    (Some(code), Some(name)) => format!("{code} - {name}"),
                    (code, name) => or_dash(name.as_deref().or(code.as_deref())),
                };
                table.row([
                    assignment.id.to_string(),
                    or_dash(assignment.lecturer_name.as_deref()),
                    or_dash(assignment.lecturer_nip.as_deref()),
                    course,
                    or_dash(assignment.academic_year_name.as_deref()),
                ]);
            }
            table.print();
            println!("{}", page_footer(&page.meta));
        }
        AssignmentCommand::Create {
            lecturer,
            course,
            academic_year,
        } => {
            let dto = CreateAssignmentDto {
                user_id: lecturer,
                course_id: course,
                academic_year_id: academic_year,
            };
            let assignment = check(Operation::Create, AssignmentService::create(client, dto).await)?;
            success(Operation::Create);
            println!("   ID: {}", assignment.id);
        }
        AssignmentCommand::Update {
            id,
            lecturer,
            course,
            academic_year,
        } => {
            let dto = UpdateAssignmentDto {
                user_id: lecturer,
                course_id: course,
                academic_year_id: academic_year,
            };
            check(Operation::Update, AssignmentService::update(client, id, dto).await)?;
            success(Operation::Update);
        }
        AssignmentCommand::Delete { id, confirm } => {
            if confirm.confirm(&format!("Hapus penugasan dosen #{id}?"))? {
                check(Operation::Delete, AssignmentService::delete(client, id).await)?;
                success(Operation::Delete);
            }
        }
    }
    Ok(())
}
