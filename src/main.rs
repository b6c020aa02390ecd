mod app;
mod calendar;
mod clock;
mod diagnostics;
mod help;
mod page;
mod theme;
mod view;
use crate::app::App;
use crate::clock::LocalClock;
use crate::diagnostics::{init_logger, LogRecorder};
use crate::page::Page;
use crate::view::CalendarView;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use time::{format_description::FormatItem, macros::format_description, Date};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        date: Option<Date>,
        debug: bool,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut date = None;
        let mut debug = false;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('d') | Arg::Long("debug") => debug = true,
                Arg::Short('l') | Arg::Long("log-file") => {
                    log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Value(value) if date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run {
            date,
            debug,
            log_file,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                date,
                debug,
                log_file,
            } => {
                let clock = LocalClock::new().context("failed to determine local time offset")?;
                let mut logging = init_logger(log_file.as_deref())?;
                log::info!("{} {} starting", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                let page = if debug {
                    Page::new().with_diagnostics()
                } else {
                    Page::new()
                };
                let mut view = CalendarView::new(page, LogRecorder, clock);
                if let Some(date) = date {
                    view = view.start_date(date);
                }
                // Initialization failures reach stderr before the terminal
                // takes over the screen
                view.initialize();
                logging.quiet_console(|| {
                    with_terminal(|mut terminal| {
                        terminal.hide_cursor().context("failed to hide cursor")?;
                        App::new(view).run(&mut terminal)?;
                        Ok(())
                    })
                })
            }
            Command::Help => {
                println!("Usage: monthcal [options] [YYYY-MM-DD]");
                println!();
                println!("Terminal month-view calendar");
                println!();
                println!("Options:");
                println!("  -d, --debug           Show the diagnostic transcript pane");
                println!("  -l, --log-file PATH   Write log records to PATH");
                println!("  -h, --help            Display this help message and exit");
                println!("  -V, --version         Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
