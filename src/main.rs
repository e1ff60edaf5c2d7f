use anyhow::Result;
use clap::Parser;
use exhume::cli::{Cli, Commands};
use exhume::commands::{analyze, convert};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            extensions,
        } => analyze::run(analyze::AnalyzeConfig {
            path,
            format,
            output,
            extensions,
        }),
        Commands::Convert {
            wsdl,
            format,
            output,
            auth,
            target,
            service_name,
            no_examples,
        } => convert::run(convert::ConvertConfig {
            wsdl,
            format,
            output,
            auth,
            target,
            service_name,
            no_examples,
        }),
    }
}
