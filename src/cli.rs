use crate::io::output::OutputFormat;
use crate::soap::{AuthStrategy, TargetFramework};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "exhume")]
#[command(about = "Legacy code risk analyzer and SOAP-to-REST converter", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SpecFormat {
    /// Full conversion result as JSON
    Json,
    /// OpenAPI document only, as YAML
    Yaml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze source files for legacy patterns and risk
    Analyze {
        /// File or directory to analyze
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// File extensions to include (defaults to a broad legacy set)
        #[arg(long, value_delimiter = ',')]
        extensions: Option<Vec<String>>,
    },

    /// Convert a SOAP/WSDL service descriptor to an OpenAPI document
    Convert {
        /// WSDL file to convert
        wsdl: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: SpecFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Authentication scheme for the generated API
        #[arg(long, value_enum, default_value = "bearer")]
        auth: AuthStrategy,

        /// Target framework noted in the conversion options
        #[arg(long, value_enum, default_value = "nextjs")]
        target: TargetFramework,

        /// Override the service name extracted from the WSDL
        #[arg(long)]
        service_name: Option<String>,

        /// Skip example payload synthesis
        #[arg(long)]
        no_examples: bool,
    },
}
