use crate::adapters::render::{renderer_for, SharedWriter};
use crate::config::Settings;
use crate::core::presenter::VolumePresenter;
use crate::core::scope::PresenterScope;
use crate::domain::model::ViewState;
use crate::domain::ports::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::view::{DimensionInputs, Field, VolumeView};
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  length <value>   set the length field (alias: l)
  width <value>    set the width field (alias: w)
  height <value>   set the height field (alias: h)
  calc             compute the volume (aliases: compute, =)
  rotate           recreate the screen, keeping the result
  show             print the fields and the current result
  help             show this message
  quit             leave (alias: exit)";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    SetField(Field, String),
    Compute,
    Rotate,
    Show,
    Help,
    Quit,
    Blank,
    Unknown(String),
}

impl ScreenEvent {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        if line.trim().is_empty() {
            return ScreenEvent::Blank;
        }

        let (command, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        let command = command.to_lowercase();

        if let Some(field) = Field::from_name(&command) {
            return ScreenEvent::SetField(field, rest.to_string());
        }

        match command.as_str() {
            "calc" | "compute" | "=" => ScreenEvent::Compute,
            "rotate" => ScreenEvent::Rotate,
            "show" => ScreenEvent::Show,
            "help" | "?" => ScreenEvent::Help,
            "quit" | "exit" => ScreenEvent::Quit,
            _ => ScreenEvent::Unknown(command),
        }
    }
}

/// Hosts the volume screen on a line-oriented terminal.
///
/// Results go to `out`. Help, `show` and hints go to `out` as well in text
/// mode; in JSON mode they go to stderr so `out` stays a JSON-lines stream.
pub struct Session<W: Write + 'static> {
    scope: PresenterScope,
    view: Option<VolumeView>,
    out: SharedWriter<W>,
    messages: Box<dyn Write>,
    settings: Settings,
    computations: usize,
}

impl<W: Write + 'static> Session<W> {
    pub fn new(settings: Settings, out: W) -> Self {
        let out = SharedWriter::new(out);
        let mut scope =
            PresenterScope::new(VolumePresenter::with_tolerance(settings.integer_tolerance()));
        let view = scope.attach_view(renderer_for(settings.output_format(), out.clone()));
        let messages: Box<dyn Write> = match settings.output_format() {
            OutputFormat::Text => Box::new(out.clone()),
            OutputFormat::Json => Box::new(std::io::stderr()),
        };

        Self {
            scope,
            view: Some(view),
            out,
            messages,
            settings,
            computations: 0,
        }
    }

    /// Redirects help, `show` and hint text.
    pub fn with_messages<M: Write + 'static>(mut self, messages: M) -> Self {
        self.messages = Box::new(messages);
        self
    }

    pub fn output(&self) -> &SharedWriter<W> {
        &self.out
    }

    pub fn view(&self) -> Option<&VolumeView> {
        self.view.as_ref()
    }

    pub fn scope(&self) -> &PresenterScope {
        &self.scope
    }

    pub fn computations(&self) -> usize {
        self.computations
    }

    /// Fills the fields, computes once and returns the shown text.
    pub fn run_once(&mut self, inputs: DimensionInputs) -> Option<String> {
        let view = self.view.as_mut()?;
        view.set_inputs(inputs);
        view.on_compute();
        self.computations += 1;
        view.displayed_text()
    }

    /// Reads events until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        let mut line = String::new();
        loop {
            self.prompt()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!("Input closed");
                break;
            }
            if !self.handle(ScreenEvent::parse(&line))? {
                break;
            }
        }
        Ok(())
    }

    /// Applies one event. Returns `false` when the session should end.
    pub fn handle(&mut self, event: ScreenEvent) -> Result<bool> {
        match event {
            ScreenEvent::SetField(field, text) => {
                if let Some(view) = self.view.as_mut() {
                    view.set_input(field, text);
                }
            }
            ScreenEvent::Compute => {
                if let Some(view) = self.view.as_mut() {
                    let dimensions = view.on_compute();
                    self.computations += 1;
                    tracing::debug!(
                        "Computed with length={} width={} height={}",
                        dimensions.length,
                        dimensions.width,
                        dimensions.height
                    );
                }
            }
            ScreenEvent::Rotate => self.rotate(),
            ScreenEvent::Show => self.show()?,
            ScreenEvent::Help => writeln!(self.messages, "{}", HELP)?,
            ScreenEvent::Quit => return Ok(false),
            ScreenEvent::Blank => {}
            ScreenEvent::Unknown(command) => {
                writeln!(self.messages, "Unknown command '{}', type 'help'", command)?;
            }
        }
        Ok(true)
    }

    /// Drops the current view and attaches a fresh one. Field text carries
    /// over and the retained result is shown again.
    fn rotate(&mut self) {
        let inputs = self
            .view
            .take()
            .map(|old| old.inputs().clone())
            .unwrap_or_default();

        let renderer = renderer_for(self.settings.output_format(), self.out.clone());
        let mut view = self.scope.attach_view(renderer);
        view.set_inputs(inputs);
        self.view = Some(view);
    }

    fn show(&mut self) -> Result<()> {
        let Some(view) = self.view.as_ref() else {
            return Ok(());
        };
        let inputs = view.inputs().clone();
        let result = match view.state() {
            ViewState::Idle => "(none)".to_string(),
            ViewState::ResultShown(text) => text,
        };
        let fields = [Field::Length, Field::Width, Field::Height]
            .iter()
            .map(|field| format!("{}='{}'", field.label(), inputs.get(*field)))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.messages, "{} result={}", fields, result)?;
        self.messages.flush()?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        if self.settings.output_format() == OutputFormat::Text {
            write!(self.out, "{}", self.settings.prompt())?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Ends the session and its presenter scope.
    pub fn finish(mut self) -> usize {
        self.view.take();
        let computations = self.computations;
        self.scope.teardown();
        computations
    }
}
