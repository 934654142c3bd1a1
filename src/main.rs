use clap::builder::TypedValueParser;
use clap::{ArgAction, Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;
use total_account::cli;
use total_account::config::{self, PairingMode, RunConfiguration};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "total-account")]
#[command(about = "Build a debit/credit account summary workbook from a ledger spreadsheet")]
#[command(long_about = "Total Account - two-sided account summary from a ledger workbook

Scans one sheet of the input workbook from the header row on. Rows whose
debit or credit account equals one of the target accounts are copied into a
new \"Total Account\" sheet: sequence, date and amount on the debit side,
amount, date and sequence on the credit side.

Source columns: A = sequence, B = date, E = debit amount, G = credit amount.

EXAMPLES:
  total-account -i journal.xlsx -o cash.xlsx
  total-account -i journal.xlsx -o bank.xlsx -a 보통예금 당좌예금 -f yyyy/MM/dd
  total-account -i journal.xlsx -o cash.xlsx -h 4 -d H -c J --no-open

Logging honours RUST_LOG (default: info).")]
#[command(version)]
#[command(disable_help_flag = true)]
struct Cli {
    /// Input file for processing
    #[arg(short, long)]
    input: PathBuf,

    /// Output file
    #[arg(short, long)]
    output: PathBuf,

    /// Sheet index (1-based)
    #[arg(short, long, default_value_t = config::DEFAULT_SHEET,
          value_parser = clap::value_parser!(u64).range(1..).map(|v| v as usize))]
    sheet: usize,

    /// First data row (0-based); rows above it are ignored
    #[arg(short = 'h', long = "headerRow", default_value_t = config::DEFAULT_HEADER_ROW)]
    header_row: u32,

    /// Debit account column letter
    #[arg(short, long = "debitColumn", default_value = config::DEFAULT_DEBIT_COLUMN,
          value_parser = config::parse_column)]
    debit_column: usize,

    /// Credit account column letter
    #[arg(short, long = "creditColumn", default_value = config::DEFAULT_CREDIT_COLUMN,
          value_parser = config::parse_column)]
    credit_column: usize,

    /// Accounts to collect, separated by space. ex) 현금 카드
    #[arg(short = 'a', long = "targetAccounts", num_args = 1..,
          default_values_t = [config::DEFAULT_ACCOUNT.to_string()])]
    target_accounts: Vec<String>,

    /// Excel number format for date cells
    #[arg(short = 'f', long = "dateFormat", default_value = config::DEFAULT_DATE_FORMAT)]
    date_format: String,

    /// Title of the summary sheet
    #[arg(long, default_value = config::DEFAULT_TITLE)]
    title: String,

    /// How credit entries find their output row
    #[arg(long, value_enum, default_value_t = Pairing::LastRow)]
    pairing: Pairing,

    /// Do not open the result file after it is written
    #[arg(long)]
    no_open: bool,

    /// Log more detail (-v debug, -vv trace) when RUST_LOG is unset
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Pairing {
    /// Credit entries fill the most recently appended row
    LastRow,
    /// Credit entries join a row only when it came from the same input row
    SourceRow,
}

impl From<Pairing> for PairingMode {
    fn from(pairing: Pairing) -> Self {
        match pairing {
            Pairing::LastRow => PairingMode::LastRow,
            Pairing::SourceRow => PairingMode::SourceRow,
        }
    }
}

impl Cli {
    fn into_config(self) -> RunConfiguration {
        RunConfiguration {
            input: self.input,
            output: self.output,
            sheet: self.sheet,
            header_row: self.header_row,
            debit_column: self.debit_column,
            credit_column: self.credit_column,
            target_accounts: self.target_accounts,
            date_format: self.date_format,
            title: self.title,
            pairing: self.pairing.into(),
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let open_viewer = !cli.no_open;
    let config = cli.into_config();

    cli::run(&config, open_viewer)?;
    Ok(())
}
