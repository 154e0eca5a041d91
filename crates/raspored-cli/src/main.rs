mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use raspored_core::parsing::SlotNumbering;
use raspored_core::Strategy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "raspored",
    version,
    about = "Convert a school timetable PDF into schedule records and a recurring-event calendar"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract day/class/slot records from a timetable PDF
    Extract {
        /// Path to the source PDF file
        pdf_path: PathBuf,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Extraction heuristic
        #[arg(long, value_enum, default_value_t = StrategyArg::Auto)]
        strategy: StrategyArg,

        /// Slot numbering in line mode
        #[arg(long, value_enum, default_value_t = NumberingArg::Explicit)]
        numbering: NumberingArg,

        /// Output format: csv (default) or json
        #[arg(short, long, default_value = "csv")]
        format: String,
    },
    /// Build a biweekly-recurring ICS calendar from record lines
    Calendar {
        /// Path to the day,label,slot input file
        input_file: PathBuf,

        /// Output ICS path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Use the table grid when one is detected, else line scanning
    Auto,
    /// Force the line-scanning heuristic
    Lines,
    /// Force the table-grid heuristic
    Table,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Auto => Strategy::Auto,
            StrategyArg::Lines => Strategy::Lines,
            StrategyArg::Table => Strategy::Table,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum NumberingArg {
    /// Slots come from explicit "N." marker lines
    Explicit,
    /// Number records 1, 2, 3… per day
    Ordinal,
}

impl From<NumberingArg> for SlotNumbering {
    fn from(arg: NumberingArg) -> Self {
        match arg {
            NumberingArg::Explicit => SlotNumbering::Explicit,
            NumberingArg::Ordinal => SlotNumbering::Ordinal,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            pdf_path,
            output,
            strategy,
            numbering,
            format,
        } => commands::extract::run(pdf_path, output, strategy.into(), numbering.into(), &format),
        Commands::Calendar { input_file, output } => commands::calendar::run(input_file, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
