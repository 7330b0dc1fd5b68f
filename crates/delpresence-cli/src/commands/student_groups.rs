use clap::Subcommand;
use delpresence::modules::StudentGroupService;
use delpresence::modules::student_groups::{
    CreateStudentGroupDto, Student, StudentFilter, StudentGroupFilter, UpdateStudentGroupDto,
};
use delpresence_core::{DepartmentFilter, ListFilter, Operation, SemesterFilter, TextQuery};
use delpresence_models::ids::{AcademicYearId, DepartmentId, StudentGroupId, StudentId};

use crate::commands::{ConfirmArgs, Context, PageArgs};
use crate::output::{Table, check, or_dash, page_footer, success};

#[derive(Debug, Subcommand)]
pub enum StudentGroupCommand {
    /// List student groups
    List {
        #[arg(short, long)]
        search: Option<String>,
        /// Study program id or name
        #[arg(long)]
        department: Option<DepartmentFilter>,
        #[arg(long)]
        semester: Option<SemesterFilter>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show one student group
    Show { id: StudentGroupId },
    /// Create a student group
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        department: DepartmentId,
        #[arg(long)]
        semester: u8,
        #[arg(long)]
        academic_year: Option<AcademicYearId>,
    },
    /// Update a student group
    Update {
        id: StudentGroupId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        department: Option<DepartmentId>,
        #[arg(long)]
        semester: Option<u8>,
        #[arg(long)]
        academic_year: Option<AcademicYearId>,
    },
    /// Delete a student group
    Delete {
        id: StudentGroupId,
        #[command(flatten)]
        confirm: ConfirmArgs,
    },
    /// List members of a group
    Members {
        id: StudentGroupId,
        /// Search NIM, name or email
        #[arg(short, long)]
        search: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// List students that may join a group
    Available {
        id: StudentGroupId,
        #[arg(short, long)]
        search: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Add students to a group
    Add {
        id: StudentGroupId,
        /// Student ids, comma separated
        #[arg(value_delimiter = ',', required = true)]
        students: Vec<StudentId>,
    },
    /// Remove students from a group
    Remove {
        id: StudentGroupId,
        #[arg(value_delimiter = ',', required = true)]
        students: Vec<StudentId>,
        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

fn print_students(students: &[Student], search: Option<&str>, page: PageArgs) {
    let page = page.slice(StudentFilter::new(search).apply(students));
    let mut table = Table::new(["ID", "NIM", "Nama", "Angkatan", "Prodi"]);
    for student in &page.data {
        table.row([
            student.id.to_string(),
            student.nim.clone(),
            student.full_name.clone(),
            student.year.map(|y| y.to_string()).unwrap_or_else(|| "-".into()),
            or_dash(student.department_name.as_deref()),
        ]);
    }
    table.print();
    println!("{}", page_footer(&page.meta));
}

pub async fn run(ctx: &Context, command: StudentGroupCommand) -> anyhow::Result<()> {
    let client = &ctx.client;
    match command {
        StudentGroupCommand::List {
            search,
            department,
            semester,
            page,
        } => {
            let groups = check(Operation::Fetch, StudentGroupService::list(client, None).await)?;
            let filter = StudentGroupFilter {
                search: TextQuery::new(search.as_deref()),
                department: department.unwrap_or_default(),
                semester: semester.unwrap_or_default(),
            };
            let page = page.slice(filter.apply(&groups));

            let mut table = Table::new(["ID", "Nama", "Prodi", "Semester", "Mahasiswa"]);
            for group in &page.data {
                table.row([
                    group.id.to_string(),
                    group.name.clone(),
                    or_dash(group.department_name.as_deref()),
                    group.semester.to_string(),
                    group.student_count.to_string(),
                ]);
            }
            table.print();
            println!("{}", page_footer(&page.meta));
        }
        StudentGroupCommand::Show { id } => {
            let group = check(Operation::Fetch, StudentGroupService::get(client, id).await)?;
            println!("Nama      : {}", group.name);
            println!("Prodi     : {}", or_dash(group.department_name.as_deref()));
            println!("Semester  : {}", group.semester);
            println!("Mahasiswa : {}", group.student_count);
        }
        StudentGroupCommand::Create {
            name,
            department,
            semester,
            academic_year,
        } => {
            let dto = CreateStudentGroupDto {
                name,
                department_id: department,
                semester,
                academic_year_id: academic_year,
            };
            let group = check(Operation::Create, StudentGroupService::create(client, dto).await)?;
            success(Operation::Create);
            println!("   ID: {}", group.id);
        }
        StudentGroupCommand::Update {
            id,
            name,
            department,
            semester,
            academic_year,
        } => {
            let dto = UpdateStudentGroupDto {
                name,
                department_id: department,
                semester,
                academic_year_id: academic_year,
            };
            check(Operation::Update, StudentGroupService::update(client, id, dto).await)?;
            success(Operation::Update);
        }
        StudentGroupCommand::Delete { id, confirm } => {
            if confirm.confirm(&format!("Hapus kelompok mahasiswa #{id}?"))? {
                check(Operation::Delete, StudentGroupService::delete(client, id).await)?;
                success(Operation::Delete);
            }
        }
        StudentGroupCommand::Members { id, search, page } => {
            let members = check(Operation::Fetch, StudentGroupService::members(client, id).await)?;
            print_students(&members, search.as_deref(), page);
        }
        StudentGroupCommand::Available { id, search, page } => {
            let available = check(
                Operation::Fetch,
                StudentGroupService::available_students(client, id).await,
            )?;
            print_students(&available, search.as_deref(), page);
        }
        StudentGroupCommand::Add { id, students } => {
            if let [student] = students.as_slice() {
                check(
                    Operation::AddMembers,
                    StudentGroupService::add_member(client, id, *student).await,
                )?;
                success(Operation::AddMembers);
                return Ok(());
            }

            let mut roster = check(Operation::Fetch, StudentGroupService::load_roster(client, id).await)?;
            let response = check(
                Operation::AddMembers,
                StudentGroupService::add_members(client, id, &mut roster, &students).await,
            )?;
            success(Operation::AddMembers);
            if !response.failed_ids.is_empty() {
                println!("⚠️  Gagal ditambahkan: {}", join_ids(&response.failed_ids));
            }
            println!("   Anggota sekarang: {}", roster.members().len());
        }
        StudentGroupCommand::Remove {
            id,
            students,
            confirm,
        } => {
            if !confirm.confirm(&format!(
                "Keluarkan {} mahasiswa dari kelompok #{id}?",
                students.len()
            ))? {
                return Ok(());
            }

            let mut roster = check(Operation::Fetch, StudentGroupService::load_roster(client, id).await)?;
            let response = check(
                Operation::RemoveMembers,
                StudentGroupService::remove_members(client, id, &mut roster, &students).await,
            )?;
            success(Operation::RemoveMembers);
            if !response.failed_ids.is_empty() {
                println!("⚠️  Gagal dikeluarkan: {}", join_ids(&response.failed_ids));
            }
            println!("   Anggota sekarang: {}", roster.members().len());
        }
    }
    Ok(())
}

fn join_ids(ids: &[StudentId]) -> String {
    ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
