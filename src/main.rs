use std::{io, path::PathBuf};

use clap::Parser;
use course_planner::{loader, menu::Planner, OrderedCourseStore};

#[derive(Parser, Debug)]
#[command(
    name = "course-planner",
    version,
    about = "Browse a course catalog and its prerequisites"
)]
struct Cli {
    /// Course file to load before the menu starts
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    let mut store = OrderedCourseStore::new();
    if let Some(path) = cli.file.as_deref() {
        // a bad preload is reported but the menu still starts
        if let Err(e) = loader::load_file(path, &mut store) {
            eprintln!("{}", e);
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Planner::with_store(store, stdin.lock(), stdout.lock()).run()
}
