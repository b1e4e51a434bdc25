//! Gridgram CLI - layout to box-drawing diagram generator

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};

#[cfg(feature = "cli")]
use gridgram::{
    extract_placements, extract_source_order, grid_from_flow_pair, grid_from_flow_single,
    grid_from_placements, page_layout_block_with_options, render_grid, splice_between_markers,
    LabelMap, LayoutResult, ViewOptions, LAYOUT_MARKER_END, LAYOUT_MARKER_START,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "l2d")]
#[command(version)]
#[command(about = "Gridgram - layout to box-drawing diagram generator", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Page source path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Render a single view instead of the full block
    #[arg(short, long, value_enum, default_value_t = View::All)]
    view: View,

    /// Label file overriding the built-in cell labels
    #[arg(short, long)]
    labels: Option<String>,

    /// Identifier that spans the full width of the 2-column view
    #[arg(long, default_value = "c")]
    full_width: String,

    /// Column width for the 4-column view
    #[arg(long)]
    width_four: Option<usize>,

    /// Column width for the 2-column view
    #[arg(long)]
    width_two: Option<usize>,

    /// Column width for the 1-column view
    #[arg(long)]
    width_one: Option<usize>,

    /// Use narrow column widths
    #[arg(long)]
    compact: bool,

    /// Quiet mode: suppress status output to stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Inject the layout block into a README between markers
    Inject {
        /// Page source path
        input: String,

        /// README path to rewrite in place
        #[arg(short, long, default_value = "README.md")]
        readme: String,

        /// Label file overriding the built-in cell labels
        #[arg(short, long)]
        labels: Option<String>,

        /// Identifier that spans the full width of the 2-column view
        #[arg(long, default_value = "c")]
        full_width: String,

        /// Use narrow column widths
        #[arg(long)]
        compact: bool,

        /// Quiet mode
        #[arg(short, long)]
        quiet: bool,
    },

    /// Parse the page source and report what was found
    Check {
        /// Page source path (reads from stdin if not provided)
        input: Option<String>,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum View {
    /// Full block with all three views
    All,
    /// 4-column desktop view
    Four,
    /// 2-column tablet view
    Two,
    /// 1-column mobile view
    One,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Handle subcommands first
    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd);
    }

    let src = read_input(cli.input_file.as_deref())?;
    let labels = load_labels(cli.labels.as_deref())?;

    let mut options = if cli.compact {
        ViewOptions::compact()
    } else {
        ViewOptions::default()
    };
    options.full_width_id = cli.full_width.clone();
    if let Some(width) = cli.width_four {
        options.width_four = width;
    }
    if let Some(width) = cli.width_two {
        options.width_two = width;
    }
    if let Some(width) = cli.width_one {
        options.width_single = width;
    }

    let result = match render_view(&src, cli.view, &labels, &options) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("✗ {}", err);
            std::process::exit(1);
        }
    };

    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", result)?;
            if !cli.quiet {
                eprintln!("✓ Layout diagrams written to: {}", path);
            }
        }
        None => {
            println!("{}", result);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn render_view(
    src: &str,
    view: View,
    labels: &LabelMap,
    options: &ViewOptions,
) -> LayoutResult<String> {
    match view {
        View::All => page_layout_block_with_options(src, labels, options),
        View::Four => {
            let grid = grid_from_placements(&extract_placements(src)?)?;
            Ok(render_grid(&grid, labels, options.width_four))
        }
        View::Two => {
            let order = extract_source_order(src)?;
            let grid = grid_from_flow_pair(&order, &options.full_width_id)?;
            Ok(render_grid(&grid, labels, options.width_two))
        }
        View::One => {
            let grid = grid_from_flow_single(&extract_source_order(src)?)?;
            Ok(render_grid(&grid, labels, options.width_single))
        }
    }
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands) -> io::Result<()> {
    match cmd {
        Commands::Inject {
            input,
            readme,
            labels,
            full_width,
            compact,
            quiet,
        } => {
            let src = fs::read_to_string(&input)?;
            let labels = load_labels(labels.as_deref())?;
            let mut options = if compact {
                ViewOptions::compact()
            } else {
                ViewOptions::default()
            };
            options.full_width_id = full_width;

            let block = match page_layout_block_with_options(&src, &labels, &options) {
                Ok(block) => block,
                Err(err) => {
                    eprintln!("✗ {}", err);
                    std::process::exit(1);
                }
            };

            let doc = fs::read_to_string(&readme)?;
            let updated =
                match splice_between_markers(&doc, &block, LAYOUT_MARKER_START, LAYOUT_MARKER_END) {
                    Ok(updated) => updated,
                    Err(err) => {
                        eprintln!("✗ {}: {}", readme, err);
                        std::process::exit(1);
                    }
                };

            fs::write(&readme, &updated)?;
            if !quiet {
                eprintln!("✓ Layout diagrams injected into: {}", readme);
            }
        }

        Commands::Check { input } => {
            let src = read_input(input.as_deref())?;

            let mut failed = false;
            match extract_placements(&src) {
                Ok(placements) => {
                    println!("Placements ({}):", placements.len());
                    for (id, p) in &placements {
                        println!(
                            "  {}: rows {} / {}, cols {} / {}",
                            id, p.row.0, p.row.1, p.col.0, p.col.1
                        );
                    }
                }
                Err(err) => {
                    eprintln!("✗ {}", err);
                    failed = true;
                }
            }
            match extract_source_order(&src) {
                Ok(order) => {
                    println!("Source order: {}", order.join(" → "));
                }
                Err(err) => {
                    eprintln!("✗ {}", err);
                    failed = true;
                }
            }

            if failed {
                std::process::exit(1);
            }
            eprintln!("✓ Page source parses cleanly");
        }

        Commands::Info => {
            println!("Gridgram - layout to box-drawing diagram generator");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ Box-drawing diagrams with merged spans and proper junctions");
            println!("  ✓ 4-column / 2-column / 1-column responsive views");
            println!("  ✓ CSS grid placement and HTML source order extraction");
            println!("  ✓ README injection between LAYOUT markers");
            println!("  ✓ Label overrides via label files");
            println!();
            println!("Markers:");
            println!("  {}", LAYOUT_MARKER_START);
            println!("  {}", LAYOUT_MARKER_END);
            println!();
        }
    }

    Ok(())
}

/// Read the page source from a file or stdin
#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Load the label map from a file, or fall back to the built-in labels
#[cfg(feature = "cli")]
fn load_labels(path: Option<&str>) -> io::Result<LabelMap> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            match LabelMap::parse(&content) {
                Ok(labels) => Ok(labels),
                Err(err) => {
                    eprintln!("✗ {}: {}", path, err);
                    std::process::exit(1);
                }
            }
        }
        None => Ok(LabelMap::with_defaults()),
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install gridgram --features cli");
    eprintln!("  l2d [OPTIONS] [INPUT_FILE]");
}
