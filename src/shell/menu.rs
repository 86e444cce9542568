//! Interactive numbered menu over the registry.

use std::{
    io::{BufRead, Write},
    ops::ControlFlow,
    path::Path,
};

use crate::{core::registry::PatronRegistry, import::line::parse_fine};

use super::ShellError;

const MENU: &[&str] = &[
    "1) Import patrons from file",
    "2) Add patron manually",
    "3) Remove patron by ID",
    "4) List all patrons",
    "5) Exit",
];

type Step = ControlFlow<()>;

/// Menu loop over any line-oriented input and writable output.
///
/// Each choice calls exactly one registry operation. End of input behaves
/// like choosing exit.
pub struct Shell<'a, R, W> {
    registry: &'a mut PatronRegistry,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Wraps `registry` with the given streams.
    pub fn new(registry: &'a mut PatronRegistry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
        }
    }

    /// Runs until `5` is chosen or input ends.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            writeln!(self.output)?;
            for item in MENU {
                writeln!(self.output, "{item}")?;
            }
            let Some(choice) = self.prompt("Choose: ")? else {
                break;
            };

            let step = match choice.trim() {
                "1" => self.import_file()?,
                "2" => self.add_patron()?,
                "3" => self.remove_patron()?,
                "4" => self.list_patrons()?,
                "5" => break,
                _ => {
                    writeln!(self.output, "Invalid option")?;
                    Step::Continue(())
                }
            };
            if step.is_break() {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn import_file(&mut self) -> Result<Step, ShellError> {
        let Some(path) = self.prompt("File path: ")? else {
            return Ok(Step::Break(()));
        };
        let report = self.registry.import_from_source(Some(Path::new(path.trim())));
        writeln!(self.output, "\n{report}")?;
        Ok(Step::Continue(()))
    }

    fn add_patron(&mut self) -> Result<Step, ShellError> {
        let mut fields = Vec::with_capacity(4);
        for label in ["ID (7 digits): ", "Name: ", "Address: ", "Fine (0-250): "] {
            let Some(value) = self.prompt(label)? else {
                return Ok(Step::Break(()));
            };
            fields.push(value);
        }

        let Some(fine) = parse_fine(&fields[3]) else {
            writeln!(self.output, "Invalid fine")?;
            return Ok(Step::Continue(()));
        };
        let added = self.registry.add(&fields[0], &fields[1], &fields[2], fine);
        writeln!(self.output, "{}", if added { "Added" } else { "Invalid or duplicate" })?;
        Ok(Step::Continue(()))
    }

    fn remove_patron(&mut self) -> Result<Step, ShellError> {
        let Some(id) = self.prompt("ID to remove: ")? else {
            return Ok(Step::Break(()));
        };
        let removed = self.registry.remove(&id);
        writeln!(self.output, "{}", if removed { "Removed" } else { "Not found" })?;
        Ok(Step::Continue(()))
    }

    fn list_patrons(&mut self) -> Result<Step, ShellError> {
        if !self.registry.is_empty() {
            writeln!(self.output)?;
        }
        writeln!(self.output, "{}", self.registry.render_table())?;
        Ok(Step::Continue(()))
    }

    /// Writes `label`, then reads one line without its terminator.
    /// `None` means the input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>, ShellError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
