use delpresence::modules::ReferenceService;
use delpresence_core::Operation;

use crate::commands::Context;
use crate::output::{Table, check, or_dash};

pub async fn academic_years(ctx: &Context, current: bool) -> anyhow::Result<()> {
    let years = if current {
        check(
            Operation::Fetch,
            ReferenceService::current_academic_year(&ctx.client).await,
        )?
        .into_iter()
        .collect()
    } else {
        check(
            Operation::Fetch,
            ReferenceService::academic_years(&ctx.client).await,
        )?
    };

    let mut table = Table::new(["ID", "Tahun Akademik", "Semester", "Mulai", "Selesai", "Aktif"]);
    for year in &years {
        table.row([
            year.id.to_string(),
            year.name.clone(),
            year.semester.to_string(),
            year.start_date.map(|d| d.to_string()).unwrap_or_else(|| "-".into()),
            year.end_date.map(|d| d.to_string()).unwrap_or_else(|| "-".into()),
            if year.is_active { "Ya" } else { "" }.to_string(),
        ]);
    }
    table.print();
    Ok(())
}

pub async fn rooms(ctx: &Context) -> anyhow::Result<()> {
    let rooms = check(Operation::Fetch, ReferenceService::rooms(&ctx.client).await)?;

    let mut table = Table::new(["ID", "Kode", "Nama", "Gedung", "Kapasitas"]);
    for room in &rooms {
        table.row([
            room.id.to_string(),
            room.code.clone(),
            room.name.clone(),
            or_dash(room.building.as_deref()),
            room.capacity.map(|c| c.to_string()).unwrap_or_else(|| "-".into()),
        ]);
    }
    table.print();
    Ok(())
}
