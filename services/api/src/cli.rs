use crate::demo::{run_check, run_dashboard, run_demo, CheckArgs, DashboardArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use loan_eligibility::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Eligibility Checker",
    about = "Score loan applications and serve the eligibility API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single application and print the decision
    Check(CheckArgs),
    /// Summarize the synthetic sample portfolio
    Dashboard(DashboardArgs),
    /// Score the reference applications end to end
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Check(args) => run_check(args).await,
        Command::Dashboard(args) => run_dashboard(args),
        Command::Demo => run_demo().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loan_eligibility::eligibility::{EmploymentType, ExistingLoans};

    #[test]
    fn check_accepts_form_labels() {
        let cli = Cli::try_parse_from([
            "loan-eligibility",
            "check",
            "--income",
            "3000",
            "--loan-amount",
            "200000",
            "--term",
            "36",
            "--credit-score",
            "600",
            "--employment",
            "Self-Employed",
            "--existing-loans",
            "3+",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Check(args)) => {
                assert_eq!(args.employment, EmploymentType::SelfEmployed);
                assert_eq!(args.existing_loans, ExistingLoans::ThreeOrMore);
                assert_eq!(args.term, 36);
            }
            other => panic!("expected check command, got {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["loan-eligibility"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
