use std::io::{self, BufWriter, Write};

use uniscan_core::Region;

use crate::{
    cli::{Format, LookupConfig},
    lookup::Lookup,
};

pub async fn lookup(config: LookupConfig) -> anyhow::Result<()> {
    let client = super::build_client(&config.client)?;
    let region = Region::new(config.start, config.end)?;

    let lookup = crate::lookup::lookup(&client, &config.accession, region).await?;

    let stdout = io::stdout().lock();
    let mut writer = BufWriter::new(stdout);

    match config.format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut writer, &lookup)?;
            writeln!(writer)?;
        }
        Format::Table => write_table(&mut writer, &lookup)?,
    }

    writer.flush()?;

    Ok(())
}

fn write_table<W>(writer: &mut W, lookup: &Lookup) -> io::Result<()>
where
    W: Write,
{
    const TYPE_HEADER: &str = "Type";
    const DESCRIPTION_HEADER: &str = "Description";
    const POSITION_HEADER: &str = "Position";

    let Some(summary) = lookup.summary.as_deref() else {
        return writeln!(
            writer,
            "No features found overlapping region {} in {}",
            lookup.region, lookup.accession
        );
    };

    writeln!(writer, "{summary}")?;
    writeln!(writer)?;

    let rows: Vec<_> = lookup
        .features
        .iter()
        .map(|feature| {
            let description = if feature.description.is_empty() {
                "-"
            } else {
                feature.description.as_str()
            };

            let position = format!("{}-{}", feature.start, feature.end);

            (feature.ty.as_str(), description, position)
        })
        .collect();

    let type_width = column_width(TYPE_HEADER, rows.iter().map(|(ty, _, _)| *ty));
    let description_width = column_width(
        DESCRIPTION_HEADER,
        rows.iter().map(|(_, description, _)| *description),
    );
    let position_width = column_width(
        POSITION_HEADER,
        rows.iter().map(|(_, _, position)| position.as_str()),
    );

    writeln!(
        writer,
        "{TYPE_HEADER:<type_width$}  {DESCRIPTION_HEADER:<description_width$}  {POSITION_HEADER:>position_width$}"
    )?;

    for (ty, description, position) in &rows {
        writeln!(
            writer,
            "{ty:<type_width$}  {description:<description_width$}  {position:>position_width$}"
        )?;
    }

    Ok(())
}

fn column_width<'a, I>(header: &str, values: I) -> usize
where
    I: Iterator<Item = &'a str>,
{
    values
        .map(|value| value.chars().count())
        .chain([header.len()])
        .max()
        .unwrap_or_default()
}
