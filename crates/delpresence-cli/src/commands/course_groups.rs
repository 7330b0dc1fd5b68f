use clap::Subcommand;
use delpresence::modules::course_groups::service::resolve_courses;
use delpresence::modules::course_groups::{
    CourseGroupFilter, CreateCourseGroupDto, UpdateCourseGroupDto,
};
use delpresence::modules::{CourseGroupService, CourseService};
use delpresence_core::{DepartmentFilter, ListFilter, Operation, TextQuery};
use delpresence_models::ids::{CourseGroupId, CourseId, DepartmentId};

use crate::commands::{ConfirmArgs, Context, PageArgs};
use crate::output::{Table, check, or_dash, page_footer, success};

#[derive(Debug, Subcommand)]
pub enum CourseGroupCommand {
    /// List course groups with their semester range and credits
    List {
        #[arg(short, long)]
        search: Option<String>,
        /// Study program id or name
        #[arg(long)]
        department: Option<DepartmentFilter>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show a course group and its courses
    Show { id: CourseGroupId },
    /// Create a course group
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        department: DepartmentId,
        /// Member course ids, comma separated
        #[arg(long = "courses", value_delimiter = ',', required = true)]
        course_ids: Vec<CourseId>,
    },
    /// Update a course group; `--courses` replaces the member list
    Update {
        id: CourseGroupId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        department: Option<DepartmentId>,
        #[arg(long = "courses", value_delimiter = ',')]
        course_ids: Option<Vec<CourseId>>,
    },
    /// Delete a course group
    Delete {
        id: CourseGroupId,
        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

pub async fn run(ctx: &Context, command: CourseGroupCommand) -> anyhow::Result<()> {
    let client = &ctx.client;
    match command {
        CourseGroupCommand::List {
            search,
            department,
            page,
        } => {
            let groups = check(
                Operation::Fetch,
                CourseGroupService::list_with_courses(client, None).await,
            )?;
            let filter = CourseGroupFilter {
                search: TextQuery::new(search.as_deref()),
                department: department.unwrap_or_default(),
            };
            let page = page.slice(filter.apply(&groups));

            let mut table = Table::new(["ID", "Kode", "Nama", "Prodi", "Semester", "MK", "SKS"]);
            for group in &page.data {
                table.row([
                    group.id.to_string(),
                    or_dash(group.code.as_deref()),
                    group.name.clone(),
                    or_dash(group.department_name.as_deref()),
                    group
                        .semester_range()
                        .map(|r| r.to_string())
                        .unwrap_or_else(|| "-".into()),
                    group.member_ids().len().to_string(),
                    group.total_credits().to_string(),
                ]);
            }
            table.print();
            println!("{}", page_footer(&page.meta));
        }
        CourseGroupCommand::Show { id } => {
            let mut group = check(Operation::Fetch, CourseGroupService::get(client, id).await)?;
            if group.courses.is_empty() && !group.course_ids.is_empty() {
                let courses = check(Operation::Fetch, CourseService::list(client, None).await)?;
                resolve_courses(&mut group, &courses);
            }

            println!("{} ({})", group.name, or_dash(group.code.as_deref()));
            println!("Prodi     : {}", or_dash(group.department_name.as_deref()));
            println!("Deskripsi : {}", or_dash(group.description.as_deref()));
            if let Some(range) = group.semester_range() {
                println!("{range}, total {} SKS", group.total_credits());
            }
            let mut table = Table::new(["ID", "Kode", "Nama", "SKS", "Smt"]);
            for course in &group.courses {
                table.row([
                    course.id.to_string(),
                    course.code.clone(),
                    course.name.clone(),
                    course.sks.to_string(),
                    course.semester.to_string(),
                ]);
            }
            table.print();
        }
        CourseGroupCommand::Create {
            name,
            code,
            description,
            department,
            course_ids,
        } => {
            let dto = CreateCourseGroupDto {
                name,
                code,
                description,
                department_id: department,
                course_ids,
            };
            let group = check(Operation::Create, CourseGroupService::create(client, dto).await)?;
            success(Operation::Create);
            println!("   ID: {}", group.id);
        }
        CourseGroupCommand::Update {
            id,
            name,
            code,
            description,
            department,
            course_ids,
        } => {
            let dto = UpdateCourseGroupDto {
                name,
                code,
                description,
                department_id: department,
                course_ids,
            };
            check(Operation::Update, CourseGroupService::update(client, id, dto).await)?;
            success(Operation::Update);
        }
        CourseGroupCommand::Delete { id, confirm } => {
            if confirm.confirm(&format!("Hapus kelompok mata kuliah #{id}?"))? {
                check(Operation::Delete, CourseGroupService::delete(client, id).await)?;
                success(Operation::Delete);
            }
        }
    }
    Ok(())
}
