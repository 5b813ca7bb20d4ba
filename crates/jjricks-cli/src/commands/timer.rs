use std::io::{IsTerminal, Write};
use std::str::FromStr;
use std::time::Duration;

use clap::Subcommand;
use jjricks_core::{format_mm_ss, Config, Event, IntervalTimer, Mode, Ticker};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run an interactive study/break session.
    ///
    /// Reads commands from stdin: start, pause, reset, configure <study> <break>,
    /// status, help, quit. When stdin closes the session runs until the timer
    /// stops.
    Run {
        /// Study minutes (defaults to timer.study_minutes)
        #[arg(long)]
        study: Option<String>,
        /// Break minutes (defaults to timer.break_minutes)
        #[arg(long = "break")]
        break_min: Option<String>,
        /// Milliseconds per timer second (defaults to timer.tick_ms)
        #[arg(long)]
        tick_ms: Option<u64>,
        /// Start the study period immediately
        #[arg(long)]
        autostart: bool,
        /// Print events as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Format a number of seconds as MM:SS
    Format {
        seconds: u64,
    },
}

#[derive(Debug, PartialEq, Eq)]
enum SessionCommand {
    Start,
    Pause,
    Reset,
    Configure { study: String, break_min: String },
    Status,
    Help,
    Quit,
}

const HELP: &str = "commands: start | pause | reset | configure <study> <break> | status | help | quit";

impl FromStr for SessionCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let cmd = words.next().unwrap_or("").to_ascii_lowercase();
        let parsed = match cmd.as_str() {
            "start" | "resume" | "s" => SessionCommand::Start,
            "pause" | "stop" | "p" => SessionCommand::Pause,
            "reset" | "r" => SessionCommand::Reset,
            "status" => SessionCommand::Status,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            "configure" | "config" => {
                let study = words.next().unwrap_or("").to_string();
                let break_min = words.next().unwrap_or("").to_string();
                SessionCommand::Configure { study, break_min }
            }
            other => return Err(format!("unknown command: {other:?} ({HELP})")),
        };
        Ok(parsed)
    }
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Format { seconds } => {
            println!("{}", format_mm_ss(seconds));
            Ok(())
        }
        TimerAction::Run {
            study,
            break_min,
            tick_ms,
            autostart,
            json,
        } => {
            let config = Config::load_or_default();
            let mut timer = IntervalTimer::with_durations(config.durations()?);
            if study.is_some() || break_min.is_some() {
                let study = study.unwrap_or_else(|| config.timer.study_minutes.to_string());
                let break_min = break_min.unwrap_or_else(|| config.timer.break_minutes.to_string());
                timer.configure(&study, &break_min)?;
            }
            let period = Duration::from_millis(tick_ms.unwrap_or(config.timer.tick_ms));

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let result = runtime.block_on(session(timer, period, autostart, Output::new(json)));
            // A pending stdin read would otherwise block shutdown.
            runtime.shutdown_background();
            result
        }
    }
}

/// Single-owner event loop: user commands and ticks are serialized here.
async fn session(
    mut timer: IntervalTimer,
    period: Duration,
    autostart: bool,
    mut out: Output,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut ticker = Ticker::new(period);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;
    let mut error: Option<String> = None;

    tracing::info!(period_ms = period.as_millis() as u64, "timer session started");
    if autostart {
        out.events(timer.start(), &timer)?;
    } else {
        out.event(&timer.snapshot(), &timer)?;
    }

    loop {
        ticker.sync(timer.is_running());
        if !input_open && !timer.is_running() {
            break;
        }

        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    tracing::debug!("stdin closed");
                    input_open = false;
                    continue;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<SessionCommand>() {
                    Ok(SessionCommand::Quit) => break,
                    Ok(SessionCommand::Help) => out.note(HELP)?,
                    Ok(SessionCommand::Start) => {
                        error = None;
                        out.events(timer.start(), &timer)?;
                    }
                    Ok(SessionCommand::Pause) => out.events(timer.pause(), &timer)?,
                    Ok(SessionCommand::Reset) => {
                        error = None;
                        out.events(timer.reset(), &timer)?;
                    }
                    Ok(SessionCommand::Status) => {
                        if let Some(message) = &error {
                            out.error(message)?;
                        }
                        out.event(&timer.snapshot(), &timer)?;
                    }
                    Ok(SessionCommand::Configure { study, break_min }) => {
                        match timer.configure(&study, &break_min) {
                            Ok(()) => {
                                error = None;
                                let d = timer.durations();
                                out.note(&format!(
                                    "configured: study {} min, break {} min",
                                    d.study_min(),
                                    d.break_min()
                                ))?;
                            }
                            Err(e) => {
                                let message = e.to_string();
                                out.error(&message)?;
                                error = Some(message);
                            }
                        }
                    }
                    Err(message) => out.error(&message)?,
                }
            }
            _ = ticker.tick() => {
                let event = timer.tick();
                out.countdown(&timer)?;
                out.events(event, &timer)?;
            }
        }
    }

    out.finish()?;
    tracing::info!(sessions = timer.session_count(), "timer session ended");
    Ok(())
}

/// Renders events for a human or as JSON lines.
struct Output {
    json: bool,
    live: bool,
    stdout: std::io::Stdout,
}

impl Output {
    fn new(json: bool) -> Self {
        let stdout = std::io::stdout();
        let live = !json && stdout.is_terminal();
        Self { json, live, stdout }
    }

    fn events(&mut self, event: Option<Event>, timer: &IntervalTimer) -> std::io::Result<()> {
        match event {
            Some(event) => self.event(&event, timer),
            None => Ok(()),
        }
    }

    fn event(&mut self, event: &Event, timer: &IntervalTimer) -> std::io::Result<()> {
        let line = if self.json {
            serde_json::to_string(event)?
        } else {
            describe(event, timer)
        };
        self.line(&line)
    }

    fn note(&mut self, message: &str) -> std::io::Result<()> {
        if self.json {
            return Ok(());
        }
        self.line(message)
    }

    fn error(&mut self, message: &str) -> std::io::Result<()> {
        if self.live {
            // Drop the in-place countdown before writing to stderr.
            writeln!(self.stdout)?;
            self.stdout.flush()?;
        }
        writeln!(std::io::stderr(), "error: {message}")
    }

    /// Redraws the countdown in place when attached to a terminal.
    fn countdown(&mut self, timer: &IntervalTimer) -> std::io::Result<()> {
        if !self.live {
            return Ok(());
        }
        write!(
            self.stdout,
            "\r{} {}   ",
            timer.headline(),
            timer.format_remaining()
        )?;
        self.stdout.flush()
    }

    fn line(&mut self, line: &str) -> std::io::Result<()> {
        if self.live {
            write!(self.stdout, "\r")?;
        }
        writeln!(self.stdout, "{line}")?;
        self.stdout.flush()
    }

    fn finish(&mut self) -> std::io::Result<()> {
        self.stdout.flush()
    }
}

fn describe(event: &Event, timer: &IntervalTimer) -> String {
    match event {
        Event::TimerStarted { duration_secs, .. } => {
            format!("FOCUS TIME {}", format_mm_ss(*duration_secs))
        }
        Event::TimerResumed {
            mode,
            remaining_secs,
            ..
        } => format!("resumed {} {}", mode_label(*mode), format_mm_ss(*remaining_secs)),
        Event::TimerPaused {
            mode,
            remaining_secs,
            ..
        } => format!("paused {} {}", mode_label(*mode), format_mm_ss(*remaining_secs)),
        Event::TimerReset { .. } => "READY? 00:00".to_string(),
        Event::BreakStarted {
            session_count,
            duration_secs,
            ..
        } => format!(
            "BREAK TIME {}\nSessions completed: {session_count}",
            format_mm_ss(*duration_secs)
        ),
        Event::BreakFinished { message, .. } => message.clone(),
        Event::StateSnapshot {
            headline,
            remaining,
            session_count,
            ..
        } => {
            let mut text = format!("{headline} {remaining}");
            if !timer.is_running() {
                text.push_str(&format!(" [{}]", timer.start_label()));
            }
            if *session_count > 0 {
                text.push_str(&format!("\nSessions completed: {session_count}"));
            }
            text
        }
    }
}

fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Study => "FOCUS TIME",
        Mode::Break => "BREAK TIME",
    }
}
