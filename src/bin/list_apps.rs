use clap::Parser;
use teams_sweep::core::lister;
use teams_sweep::utils::logger;

#[derive(Debug, Parser)]
#[command(name = "list_apps")]
#[command(about = "List the Teams app ids found in a JSON export, without deleting anything")]
struct Args {
    /// JSON file holding the exported app list.
    #[arg(long, env = "JSON_FILE_PATH", default_value = "teams_apps.json")]
    json_file_path: String,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    lister::list_apps(&args.json_file_path);
}
