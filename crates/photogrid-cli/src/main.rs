use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "photogrid", about = "Arrange images into a paginated PDF grid", version)]
struct Cli {
    /// Input image files, placed in grid order after sorting
    #[arg(required = true, num_args = 1..)]
    images: Vec<PathBuf>,

    /// Output PDF file
    #[arg(short, long)]
    output: PathBuf,

    /// Columns per page
    #[arg(long, default_value = "2")]
    columns: u32,

    /// Rows per page
    #[arg(long, default_value = "2")]
    rows: u32,

    /// Output paper size
    #[arg(long, default_value = "a4", value_enum)]
    paper: PaperArg,

    /// Landscape page orientation
    #[arg(long)]
    landscape: bool,

    /// Page margin in points
    #[arg(long, default_value = "50.0")]
    margin: f32,

    /// Ingestion sort order
    #[arg(long, default_value = "mtime", value_enum)]
    sort: SortArg,

    /// Draw the file name under each image
    #[arg(long)]
    labels: bool,

    /// Skip images with malformed dimensions instead of aborting
    #[arg(long)]
    skip_malformed: bool,

    /// Load options from a JSON config file (overrides the layout flags)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show placement statistics only, don't generate the PDF
    #[arg(long)]
    stats_only: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Mtime,
    Name,
    None,
}

impl From<PaperArg> for photogrid_pdf::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
        }
    }
}

impl From<SortArg> for photogrid_pdf::SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Mtime => Self::ModifiedTime,
            SortArg::Name => Self::Name,
            SortArg::None => Self::Unsorted,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = match &cli.config {
        Some(path) => photogrid_pdf::GridOptions::load(path).await?,
        None => photogrid_pdf::GridOptions {
            columns: cli.columns,
            rows: cli.rows,
            paper_size: cli.paper.into(),
            orientation: if cli.landscape {
                photogrid_pdf::PageOrientation::Landscape
            } else {
                photogrid_pdf::PageOrientation::Portrait
            },
            margin_pt: cli.margin,
            label_images: cli.labels,
            dimension_policy: if cli.skip_malformed {
                photogrid_pdf::DimensionPolicy::Skip
            } else {
                photogrid_pdf::DimensionPolicy::Strict
            },
        },
    };

    let loaded = photogrid_pdf::load_images(cli.images.clone(), cli.sort.into()).await?;

    let stats = photogrid_pdf::calculate_statistics(&loaded.working_set, &options)?;
    println!("Grid Statistics:");
    println!("  Source images: {}", loaded.working_set.len());
    println!("  Images per page: {}", stats.images_per_page);
    println!("  Output pages: {}", stats.output_pages);
    if stats.skipped_images > 0 {
        println!("  Skipped images: {}", stats.skipped_images);
    }

    if cli.stats_only {
        return Ok(());
    }

    let (tx, mut rx) = mpsc::unbounded_channel::<photogrid_pdf::Progress>();
    let reporter = tokio::spawn(async move {
        while let Some(p) = rx.recv().await {
            eprint!("\r  placing {}/{}", p.completed, p.total);
            let _ = std::io::stderr().flush();
        }
        eprintln!();
    });

    let summary = photogrid_pdf::generate_pdf(&loaded, &options, &cli.output, Some(tx)).await?;
    reporter.await?;

    for skipped in &summary.skipped {
        eprintln!(
            "warning: skipped {} ({}x{} px)",
            skipped.source.name, skipped.width_px, skipped.height_px
        );
    }
    println!(
        "Generated {} page(s) → {}",
        summary.pages,
        cli.output.display()
    );

    Ok(())
}
