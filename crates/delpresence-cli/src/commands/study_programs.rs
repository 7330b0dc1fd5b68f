use clap::Subcommand;
use delpresence::modules::StudyProgramService;
use delpresence::modules::study_programs::{
    CreateStudyProgramDto, StudyProgramFilter, UpdateStudyProgramDto,
};
use delpresence_core::{ListFilter, Operation};
use delpresence_models::ids::{FacultyId, LecturerId, StudyProgramId};
use delpresence_models::value_types::Degree;

use crate::commands::{ConfirmArgs, Context, PageArgs};
use crate::output::{Table, check, or_dash, page_footer, success};

#[derive(Debug, Subcommand)]
pub enum StudyProgramCommand {
    /// List study programs
    List {
        /// Search code, name, faculty or head of department
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        faculty: Option<FacultyId>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show one study program
    Show { id: StudyProgramId },
    /// Create a study program
    Create {
        #[arg(long)]
        code: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        faculty: FacultyId,
        /// D3, D4, S1, S2 or S3
        #[arg(long)]
        degree: Degree,
        #[arg(long)]
        accreditation: Option<String>,
        /// Lecturer id of the head of department
        #[arg(long)]
        head: Option<LecturerId>,
        #[arg(long)]
        established: Option<i32>,
    },
    /// Update fields of a study program
    Update {
        id: StudyProgramId,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        faculty: Option<FacultyId>,
        #[arg(long)]
        degree: Option<Degree>,
        #[arg(long)]
        accreditation: Option<String>,
        #[arg(long)]
        head: Option<LecturerId>,
        #[arg(long)]
        established: Option<i32>,
    },
    /// Delete a study program
    Delete {
        id: StudyProgramId,
        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum LecturerCommand {
    /// Search lecturers by name or NIP
    Search { query: String },
    /// Show one lecturer
    Show { id: LecturerId },
}

pub async fn run(ctx: &Context, command: StudyProgramCommand) -> anyhow::Result<()> {
    let client = &ctx.client;
    match command {
        StudyProgramCommand::List {
            search,
            faculty,
            page,
        } => {
            let programs = check(Operation::Fetch, StudyProgramService::list(client).await)?;
            let filter = StudyProgramFilter::new(search.as_deref(), faculty);
            let page = page.slice(filter.apply(&programs));

            let mut table = Table::new(["ID", "Kode", "Nama", "Jenjang", "Fakultas", "Kaprodi", "Dosen", "Mhs"]);
            for program in &page.data {
                table.row([
                    program.id.to_string(),
                    program.code.clone(),
                    program.name.clone(),
                    program.degree.clone(),
                    or_dash(program.faculty_name()),
                    or_dash(program.head_name()),
                    program.lecturer_count.to_string(),
                    program.student_count.to_string(),
                ]);
            }
            table.print();
            println!("{}", page_footer(&page.meta));
        }
        StudyProgramCommand::Show { id } => {
            let program = check(Operation::Fetch, StudyProgramService::get(client, id).await)?;
            println!("Kode        : {}", program.code);
            println!("Nama        : {}", program.name);
            println!("Jenjang     : {}", program.degree);
            println!("Fakultas    : {}", or_dash(program.faculty_name()));
            println!("Akreditasi  : {}", or_dash(program.accreditation.as_deref()));
            println!("Kaprodi     : {}", or_dash(program.head_name()));
            println!(
                "Tahun berdiri: {}",
                program
                    .establishment_year
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "-".into())
            );
            println!("Dosen / Mhs : {} / {}", program.lecturer_count, program.student_count);
        }
        StudyProgramCommand::Create {
            code,
            name,
            faculty,
            degree,
            accreditation,
            head,
            established,
        } => {
            let dto = CreateStudyProgramDto {
                code,
                name,
                faculty_id: faculty,
                degree,
                accreditation,
                head_of_department_id: head,
                establishment_year: established,
            };
            let program = check(Operation::Create, StudyProgramService::create(client, dto).await)?;
            success(Operation::Create);
            println!("   ID: {}", program.id);
        }
        StudyProgramCommand::Update {
            id,
            code,
            name,
            faculty,
            degree,
            accreditation,
            head,
            established,
        } => {
            let dto = UpdateStudyProgramDto {
                code,
                name,
                faculty_id: faculty,
                degree,
                accreditation,
                head_of_department_id: head,
                establishment_year: established,
            };
            check(Operation::Update, StudyProgramService::update(client, id, dto).await)?;
            success(Operation::Update);
        }
        StudyProgramCommand::Delete { id, confirm } => {
            if confirm.confirm(&format!("Hapus program studi #{id}?"))? {
                check(Operation::Delete, StudyProgramService::delete(client, id).await)?;
                success(Operation::Delete);
            }
        }
    }
    Ok(())
}

pub async fn faculties(ctx: &Context) -> anyhow::Result<()> {
    let faculties = check(
        Operation::Fetch,
        StudyProgramService::list_faculties(&ctx.client).await,
    )?;
    let mut table = Table::new(["ID", "Kode", "Nama", "Dekan"]);
    for faculty in &faculties {
        table.row([
            faculty.id.to_string(),
            faculty.code.clone(),
            faculty.name.clone(),
            or_dash(faculty.dean.as_deref()),
        ]);
    }
    table.print();
    Ok(())
}

pub async fn lecturers(ctx: &Context, command: LecturerCommand) -> anyhow::Result<()> {
    let lecturers = match command {
        LecturerCommand::Search { query } => check(
            Operation::Fetch,
            StudyProgramService::search_lecturers(&ctx.client, &query).await,
        )?,
        LecturerCommand::Show { id } => vec![check(
            Operation::Fetch,
            StudyProgramService::get_lecturer(&ctx.client, id).await,
        )?],
    };

    let mut table = Table::new(["ID", "User ID", "NIP", "Nama", "Jabatan", "Prodi"]);
    for lecturer in &lecturers {
        table.row([
            lecturer.id.to_string(),
            lecturer.user_id.to_string(),
            or_dash(lecturer.nip.as_deref()),
            lecturer.full_name.clone(),
            or_dash(lecturer.position.as_deref()),
            or_dash(lecturer.program.as_deref()),
        ]);
    }
    table.print();
    Ok(())
}
