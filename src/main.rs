use anyhow::Result;
use clap::Parser;

use git_bump::cli::{run_bump_workflow, BumpWorkflowArgs};
use git_bump::git::GitCli;
use git_bump::{logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "git-bump",
    version,
    about = "Create the next version tag from the latest git tag"
)]
struct Args {
    /// Version component to bump: major, minor or patch
    #[arg(value_name = "KIND")]
    kinds: Vec<String>,

    #[arg(short = 'n', long, help = "Print the new tag without creating it")]
    dry_run: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose)?;

    let workflow_args = BumpWorkflowArgs {
        kinds: args.kinds,
        dry_run: args.dry_run,
    };

    let repo = GitCli::current();
    match run_bump_workflow(&repo, &workflow_args) {
        Ok(outcome) => {
            ui::display_report(&outcome.old_tag, &outcome.new_tag);
            if !outcome.created {
                ui::display_status(&format!(
                    "Dry run: tag {} was not created",
                    outcome.new_tag
                ));
            }
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}
