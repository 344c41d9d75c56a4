use clap::Parser;
use miette::{IntoDiagnostic, Result};
use shoplist::reader::ActionReader;
use shoplist::session::Session;
use shoplist::view::TextView;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Action script CSV file. Reads from stdin when omitted.
    input: Option<PathBuf>,

    /// Print the final list state as JSON after the script has run.
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source: Box<dyn Read> = match cli.input {
        Some(path) => Box::new(File::open(path).into_diagnostic()?),
        None => Box::new(io::stdin()),
    };

    let stdout = io::stdout();
    let view = TextView::new(stdout.lock());
    let mut session = Session::new(view);
    session.init().into_diagnostic()?;

    // A bad action only loses that action; the session keeps running.
    let reader = ActionReader::new(source);
    for action_result in reader.actions() {
        match action_result {
            Ok(action) => {
                if let Err(e) = session.apply(action) {
                    eprintln!("Action rejected: {e}");
                }
            }
            Err(e) => {
                eprintln!("Error reading action: {e}");
            }
        }
    }

    if cli.dump {
        let json = serde_json::to_string_pretty(session.store()).into_diagnostic()?;
        println!("{json}");
    }

    Ok(())
}
