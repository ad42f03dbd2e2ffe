use crate::core::render::render_svg;
use crate::core::session::Session;
use crate::domain::model::OutputFormat;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const DRAWING_FILE: &str = "triangle.svg";
const PROMPT: &str = "> ";
const HELP: &str = "\
Commands:
  a <value>          set leg a (2.5 or 2,5)
  b <value>          set leg b
  draw [a b]         draw the triangle
  find [max]         list triplets with x + y + z <= max
  resize <w> <h>     change the canvas size and redraw
  show               print the current state
  save               write the drawing and the table to the output directory
  help               show this text
  quit               leave";

/// One line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetA(String),
    SetB(String),
    Draw(Option<(String, String)>),
    Find(Option<String>),
    Resize(String, String),
    Show,
    Save,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Self::Empty;
        };
        let args: Vec<String> = words.map(str::to_string).collect();

        match (head.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("a", _) => Self::SetA(args.join(" ")),
            ("b", _) => Self::SetB(args.join(" ")),
            ("draw", []) => Self::Draw(None),
            ("draw", [a, b]) => Self::Draw(Some((a.clone(), b.clone()))),
            ("find", []) => Self::Find(None),
            ("find", [max]) => Self::Find(Some(max.clone())),
            ("resize", [w, h]) => Self::Resize(w.clone(), h.clone()),
            ("show", []) => Self::Show,
            ("save", []) => Self::Save,
            ("help" | "?", _) => Self::Help,
            ("quit" | "exit" | "q", _) => Self::Quit,
            _ => Self::Unknown(line.trim().to_string()),
        }
    }
}

/// The terminal front end: owns the session and writes artifacts through
/// `Storage`.
pub struct PythagorasApp<S: Storage> {
    storage: S,
    session: Session,
    formats: Vec<OutputFormat>,
}

impl<S: Storage> PythagorasApp<S> {
    pub fn new(storage: S, session: Session, formats: Vec<OutputFormat>) -> Self {
        Self {
            storage,
            session,
            formats,
        }
    }

    pub fn from_config<C: ConfigProvider>(storage: S, config: &C) -> Self {
        let session = Session::new(config.form_inputs(), config.canvas());
        Self::new(storage, session, config.output_formats())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Writes the current drawing and table, skipping whichever is missing.
    /// Returns the locations written.
    pub fn save(&self) -> Result<Vec<String>> {
        let mut saved = Vec::new();

        if let Some(layout) = self.session.drawing() {
            self.storage
                .write_file(DRAWING_FILE, render_svg(layout).as_bytes())?;
            saved.push(self.storage.location(DRAWING_FILE));
        }

        if let Some(table) = self.session.table() {
            for format in &self.formats {
                let name = format!("triplets.{}", format.extension());
                self.storage
                    .write_file(&name, table.render(*format)?.as_bytes())?;
                saved.push(self.storage.location(&name));
            }
        }

        tracing::info!(files = saved.len(), "artifacts saved");
        Ok(saved)
    }

    pub fn run_triplets<W: Write>(
        &mut self,
        format: OutputFormat,
        save: bool,
        out: &mut W,
    ) -> Result<()> {
        let rendered = self.session.find()?.render(format)?;
        write!(out, "{}", rendered)?;
        if format == OutputFormat::Text {
            writeln!(out, "{}", self.session.message())?;
        }
        if save {
            for location in self.save()? {
                tracing::info!("📁 Saved {}", location);
            }
        }
        Ok(())
    }

    pub fn run_triangle<W: Write>(&mut self, save: bool, out: &mut W) -> Result<()> {
        let summary = self.session.draw()?.describe();
        writeln!(out, "{}", summary)?;
        if save {
            for location in self.save()? {
                tracing::info!("📁 Saved {}", location);
            }
        }
        Ok(())
    }

    /// Line-oriented loop. Input mistakes are reported and the loop goes on.
    pub fn run_interactive<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        self.session.start();
        self.write_state(&mut out)?;
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            let command = Command::parse(&line);
            tracing::debug!(?command, "interactive command");
            if !self.handle(command, &mut out)? {
                break;
            }
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Returns `false` when the loop should stop.
    fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> Result<bool> {
        match command {
            Command::SetA(text) => self.session.set_a(text),
            Command::SetB(text) => self.session.set_b(text),
            Command::Draw(legs) => {
                if let Some((a, b)) = legs {
                    self.session.set_a(a);
                    self.session.set_b(b);
                }
                let result = self.session.draw().map(|layout| layout.describe());
                self.write_outcome(result, out)?;
            }
            Command::Find(max) => {
                if let Some(max) = max {
                    self.session.set_max_sum(max);
                }
                let result = self.session.find().map(|table| table.to_text());
                if let Ok(text) = &result {
                    write!(out, "{}", text)?;
                }
                writeln!(out, "{}", self.session.message())?;
            }
            Command::Resize(w, h) => match (w.parse::<u32>(), h.parse::<u32>()) {
                (Ok(width), Ok(height)) => {
                    let result = self.session.resize(width, height).map(|l| l.describe());
                    self.write_outcome(result, out)?;
                }
                _ => writeln!(out, "usage: resize <width> <height>")?,
            },
            Command::Show => self.write_state(out)?,
            Command::Save => match self.save() {
                Ok(saved) if saved.is_empty() => writeln!(out, "nothing to save")?,
                Ok(saved) => {
                    for location in saved {
                        writeln!(out, "saved {}", location)?;
                    }
                }
                Err(e) => {
                    tracing::error!("❌ Save failed: {}", e);
                    writeln!(out, "{}", e.user_friendly_message())?;
                }
            },
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(false),
            Command::Empty => {}
            Command::Unknown(text) => {
                writeln!(out, "unknown command '{}', try 'help'", text)?;
            }
        }
        Ok(true)
    }

    fn write_outcome<W: Write>(&self, result: Result<String>, out: &mut W) -> Result<()> {
        match result {
            Ok(summary) => writeln!(out, "{}", summary)?,
            Err(_) => writeln!(out, "{}", self.session.message())?,
        }
        Ok(())
    }

    fn write_state<W: Write>(&self, out: &mut W) -> Result<()> {
        let inputs = self.session.inputs();
        writeln!(
            out,
            "Kathete a: {}  Kathete b: {}  Max Summe: {}",
            inputs.a, inputs.b, inputs.max_sum
        )?;
        match self.session.drawing() {
            Some(layout) => writeln!(out, "{}", layout.describe())?,
            None => writeln!(out, "(no drawing)")?,
        }
        if let Some(table) = self.session.table() {
            write!(out, "{}", table.to_text())?;
        }
        if !self.session.message().is_empty() {
            writeln!(out, "{}", self.session.message())?;
        }
        Ok(())
    }
}
