mod adapters;
mod cli;
mod core;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();

    let result = match &args.command {
        Commands::Show { file, filter, json } => {
            cli::commands::show::execute(file, filter.as_deref(), *json)
        }
        Commands::Diff {
            file1,
            file2,
            filter,
            json,
        } => cli::commands::diff::execute(file1, file2, filter.as_deref(), *json),
        Commands::Merge {
            file1,
            file2,
            select1,
            select2,
            plugin1,
            plugin2,
            all1,
            all2,
            output,
        } => cli::commands::merge::execute(
            file1,
            file2,
            &cli::commands::merge::SelectionArgs {
                select: select1,
                plugins: plugin1,
                all: *all1,
            },
            &cli::commands::merge::SelectionArgs {
                select: select2,
                plugins: plugin2,
                all: *all2,
            },
            output,
        ),
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
