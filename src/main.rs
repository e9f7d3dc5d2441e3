#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # gradebook
//!
//! Keep track of your grades across courses, see your GPA, and find out what
//! a future assignment would do to both.
//!
//! Run `gradebook` (or `gradebook interactive`) for the menu, `gradebook demo`
//! for a worked example, or `gradebook letter 88.5` for a quick lookup.

use std::io::{self, BufWriter, IsTerminal, Write};

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use gradebook::{LetterGrade, config, demo, interactive::Session};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Menu-driven session
    Interactive,
    /// Worked example, optionally as JSON
    Demo {
        /// Print the sample student as JSON instead of the report
        json: bool,
    },
    /// Letter and grade points for a percentage
    Letter(f64),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the `--json` switch
    fn json() -> impl Parser<bool> {
        long("json")
            .help("Print the sample student as JSON")
            .switch()
    }

    /// parses a percentage
    fn percent() -> impl Parser<f64> {
        positional::<f64>("PERCENT").help("Course percentage, eg. 88.5")
    }

    let interactive = pure(Cmd::Interactive)
        .to_options()
        .command("interactive")
        .help("Manage grades through a menu (default)");

    let json = json();
    let demo = construct!(Cmd::Demo { json })
        .to_options()
        .command("demo")
        .help("Walk through a sample student with what-if scenarios");

    let letter = construct!(Cmd::Letter(percent()))
        .to_options()
        .command("letter")
        .help("Show the letter grade and grade points for a percentage");

    let cmd = construct!([interactive, demo, letter]).fallback(Cmd::Interactive);

    cmd.to_options()
        .descr("Student grade manager: grades, GPA and what-if projections")
        .run()
}

fn main() -> Result<()> {
    dotenv().ok();
    let cfg = config::get();

    let fmt = fmt::layer()
        .with_writer(io::stderr)
        .without_time()
        .with_file(false)
        .with_line_number(false);
    tracing_subscriber::registry()
        .with(fmt)
        .with(cfg.log_level())
        .init();
    cfg.warn_rejected();

    match options() {
        Cmd::Interactive => {
            let stdin = io::stdin();
            let session =
                Session::new(stdin.lock(), io::stdout()).with_color(io::stdout().is_terminal());
            if let Some(student) = session.run()? {
                tracing::info!(
                    "Session ended for {} with {} course(s)",
                    student.name(),
                    student.len()
                );
            }
        }
        Cmd::Demo { json } => {
            let mut out = BufWriter::new(io::stdout().lock());
            if json {
                let student = demo::sample_student().context("Failed to build the sample student")?;
                serde_json::to_writer_pretty(&mut out, &student)
                    .context("Failed to serialize the sample student")?;
                writeln!(out)?;
            } else {
                demo::run(&mut out)?;
            }
            out.flush().context("Failed to flush output")?;
        }
        Cmd::Letter(percent) => {
            let letter = LetterGrade::from_percentage(percent);
            println!("{percent:.2}% -> {letter} ({:.1} grade points)", letter.points());
        }
    };

    Ok(())
}
