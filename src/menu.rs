use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use crate::{course_store::OrderedCourseStore, loader};

const MENU: &str =
    "\n1. Load Data Structure.\n2. Print Course List.\n3. Print Course.\n9. Exit\n\nWhat would you like to do? ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    PrintList,
    PrintCourse,
    Exit,
    Invalid(String),
}

impl MenuChoice {
    /// Choices are numbers, so `01` and `+3` select options too.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.parse::<u32>() {
            Ok(1) => MenuChoice::Load,
            Ok(2) => MenuChoice::PrintList,
            Ok(3) => MenuChoice::PrintCourse,
            Ok(9) => MenuChoice::Exit,
            _ => MenuChoice::Invalid(input.to_string()),
        }
    }
}

/// Interactive advising loop over any line source and sink. Loading appends
/// to the catalog already held, it never starts a fresh one.
pub struct Planner<R, W> {
    store: OrderedCourseStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Planner<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_store(OrderedCourseStore::new(), input, output)
    }

    pub fn with_store(store: OrderedCourseStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    pub fn store(&self) -> &OrderedCourseStore {
        &self.store
    }

    /// Runs until the user picks `9` or the input is exhausted.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the course planner.")?;

        loop {
            let Some(line) = self.prompt(MENU)? else {
                log::debug!("input closed, leaving planner");
                return Ok(());
            };

            let choice = MenuChoice::parse(&line);
            log::debug!("menu choice {:?}", choice);

            match choice {
                MenuChoice::Load => self.load()?,
                MenuChoice::PrintList => self.print_course_list()?,
                MenuChoice::PrintCourse => self.print_course()?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Thank you for using the course planner!")?;
                    return Ok(());
                }
                MenuChoice::Invalid(raw) => {
                    writeln!(self.output, "\n{} is not a valid option.\n", raw)?;
                }
            }
        }
    }

    /// Write `text`, then read one line without its line ending. `None` at
    /// end of input. Surrounding spaces are kept, file names may carry them.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn load(&mut self) -> io::Result<()> {
        let Some(file_name) = self.prompt("Enter the file name: ")? else {
            return Ok(());
        };

        match loader::load_file(Path::new(&file_name), &mut self.store) {
            Ok(report) => {
                log::debug!(
                    "catalog now holds {} courses, height {}",
                    self.store.len(),
                    self.store.height()
                );
                if report.skipped > 0 {
                    log::warn!("{} malformed records skipped", report.skipped);
                }
            }
            Err(e) => {
                log::warn!("load of {} failed: {:?}", file_name, e);
                writeln!(self.output, "{}", e)?;
            }
        }
        Ok(())
    }

    fn print_course_list(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nHere is a sample schedule:\n")?;
        for course in self.store.iter() {
            writeln!(self.output, "{}", course)?;
        }
        Ok(())
    }

    fn print_course(&mut self) -> io::Result<()> {
        let Some(wanted) = self.prompt("What course do you want to know about? ")? else {
            return Ok(());
        };
        let wanted = wanted.trim().to_ascii_uppercase();

        match self.store.find(&wanted) {
            Some(course) => {
                writeln!(self.output, "{}", course)?;
                writeln!(self.output, "Prerequisites: {}", course.prerequisites_line())?;
            }
            None => writeln!(self.output, "Course not found.")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_choices() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::Load);
        assert_eq!(MenuChoice::parse(" 2\n"), MenuChoice::PrintList);
        assert_eq!(MenuChoice::parse("3"), MenuChoice::PrintCourse);
        assert_eq!(MenuChoice::parse("9"), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("4"), MenuChoice::Invalid("4".into()));
        assert_eq!(MenuChoice::parse("load"), MenuChoice::Invalid("load".into()));
        assert_eq!(MenuChoice::parse("-1"), MenuChoice::Invalid("-1".into()));
    }

    #[test]
    fn numeric_choices_accept_leading_zeros_and_sign() {
        assert_eq!(MenuChoice::parse("01"), MenuChoice::Load);
        assert_eq!(MenuChoice::parse("+3"), MenuChoice::PrintCourse);
        assert_eq!(MenuChoice::parse("009"), MenuChoice::Exit);
    }

    #[test]
    fn prompt_strips_only_the_line_ending() {
        let mut out = Vec::new();
        let mut planner = Planner::new(&b"  spaced name.csv \r\nlast"[..], &mut out);
        assert_eq!(
            planner.prompt("? ").unwrap().as_deref(),
            Some("  spaced name.csv ")
        );
        assert_eq!(planner.prompt("? ").unwrap().as_deref(), Some("last"));
        assert_eq!(planner.prompt("? ").unwrap(), None);
    }

    #[test]
    fn exits_at_end_of_input() {
        let mut out = Vec::new();
        Planner::new(&b""[..], &mut out).run().unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Welcome to the course planner.\n"));
        assert!(out.ends_with("What would you like to do? "));
    }
}
