use clap::Subcommand;
use delpresence::modules::CourseService;
use delpresence::modules::courses::{CourseFilter, CreateCourseDto, UpdateCourseDto};
use delpresence_core::{DepartmentFilter, ListFilter, Operation, SemesterFilter, TextQuery};
use delpresence_models::ids::{AcademicYearId, CourseId, DepartmentId};
use delpresence_models::value_types::CourseType;

use crate::commands::{ConfirmArgs, Context, PageArgs};
use crate::output::{Table, check, or_dash, page_footer, success};

#[derive(Debug, Subcommand)]
pub enum CourseCommand {
    /// List courses
    List {
        /// Search code or name
        #[arg(short, long)]
        search: Option<String>,
        /// Study program id or name
        #[arg(long)]
        department: Option<DepartmentFilter>,
        /// Semester number, or ganjil/genap
        #[arg(long)]
        semester: Option<SemesterFilter>,
        #[arg(long)]
        academic_year: Option<AcademicYearId>,
        /// teori, praktikum or campuran
        #[arg(long = "type")]
        course_type: Option<CourseType>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show one course
    Show { id: CourseId },
    /// Create a course
    Create {
        #[arg(long)]
        code: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        sks: u8,
        #[arg(long)]
        semester: u8,
        #[arg(long = "type")]
        course_type: CourseType,
        #[arg(long)]
        department: DepartmentId,
        #[arg(long)]
        academic_year: AcademicYearId,
    },
    /// Update fields of a course
    Update {
        id: CourseId,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        sks: Option<u8>,
        #[arg(long)]
        semester: Option<u8>,
        #[arg(long = "type")]
        course_type: Option<CourseType>,
        #[arg(long)]
        department: Option<DepartmentId>,
        #[arg(long)]
        academic_year: Option<AcademicYearId>,
    },
    /// Delete a course
    Delete {
        id: CourseId,
        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

pub async fn run(ctx: &Context, command: CourseCommand) -> anyhow::Result<()> {
    let client = &ctx.client;
    match command {
        CourseCommand::List {
            search,
            department,
            semester,
            academic_year,
            course_type,
            page,
        } => {
            let courses = check(Operation::Fetch, CourseService::list(client, academic_year).await)?;
            let filter = CourseFilter {
                search: TextQuery::new(search.as_deref()),
                department: department.unwrap_or_default(),
                semester: semester.unwrap_or_default(),
                academic_year_id: academic_year,
                course_type,
            };
            let page = page.slice(filter.apply(&courses));

            let mut table = Table::new(["ID", "Kode", "Nama", "SKS", "Smt", "Jenis", "Prodi", "Tahun Akademik"]);
            for course in &page.data {
                table.row([
                    course.id.to_string(),
                    course.code.clone(),
                    course.name.clone(),
                    course.sks.to_string(),
                    course.semester.to_string(),
                    course.course_type.to_string(),
                    or_dash(course.department_name.as_deref()),
                    or_dash(course.academic_year_name.as_deref()),
                ]);
            }
            table.print();
            println!("{}", page_footer(&page.meta));
        }
        CourseCommand::Show { id } => {
            let course = check(Operation::Fetch, CourseService::get(client, id).await)?;
            println!("{}", course.label());
            println!("SKS / Semester : {} / {}", course.sks, course.semester);
            println!("Jenis          : {}", course.course_type);
            println!("Prodi          : {}", or_dash(course.department_name.as_deref()));
            println!("Tahun Akademik : {}", or_dash(course.academic_year_name.as_deref()));
        }
        CourseCommand::Create {
            code,
            name,
            sks,
            semester,
            course_type,
            department,
            academic_year,
        } => {
            let dto = CreateCourseDto {
                code,
                name,
                sks,
                semester,
                course_type,
                department_id: department,
                academic_year_id: academic_year,
            };
            let course = check(Operation::Create, CourseService::create(client, dto).await)?;
            success(Operation::Create);
            println!("   ID: {}", course.id);
        }
        CourseCommand::Update {
            id,
            code,
            name,
            sks,
            semester,
            course_type,
            department,
            academic_year,
        } => {
            let dto = UpdateCourseDto {
                code,
                name,
                sks,
                semester,
                course_type,
                department_id: department,
                academic_year_id: academic_year,
            };
            check(Operation::Update, CourseService::update(client, id, dto).await)?;
            success(Operation::Update);
        }
        CourseCommand::Delete { id, confirm } => {
            if confirm.confirm(&format!("Hapus mata kuliah #{id}?"))? {
                check(Operation::Delete, CourseService::delete(client, id).await)?;
                success(Operation::Delete);
            }
        }
    }
    Ok(())
}
