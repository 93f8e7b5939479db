//! # Interactive Menu
//!
//! The menu loop a user drives from the console: list, add, edit, search, exit.
//! Each cycle maps to one [`DirectoryApi`] call; the Record Set is saved once, when
//! the loop ends.
//!
//! Input and output are generic (`BufRead` / `Write`) so the whole dialogue can be
//! scripted in tests. End of input is treated like choosing "exit", which still saves.
//! Invalid numbers, pages, positions and options print a hint and ask again.

use super::render::{render_current, render_menu, render_messages, render_page, render_records};
use phonebook::api::DirectoryApi;
use phonebook::error::Result;
use phonebook::model::{Field, RecordFields, SearchCriteria};
use phonebook::page::{positioned, PageView};
use phonebook::store::DataStore;
use std::io::{BufRead, Write};

const MAIN_MENU: [(usize, &str); 5] = [
    (1, "List records"),
    (2, "Add a record"),
    (3, "Edit a record"),
    (4, "Search records"),
    (0, "Exit"),
];

const EDIT_MENU: [(usize, &str); 3] = [(1, "Edit record"), (2, "Delete record"), (0, "Back")];

pub struct Session<'a, S: DataStore, R: BufRead, W: Write> {
    api: &'a mut DirectoryApi<S>,
    input: R,
    output: W,
    use_color: bool,
}

impl<'a, S: DataStore, R: BufRead, W: Write> Session<'a, S, R, W> {
    pub fn new(api: &'a mut DirectoryApi<S>, input: R, output: W, use_color: bool) -> Self {
        Self {
            api,
            input,
            output,
            use_color,
        }
    }

    /// Runs the menu until exit or end of input, then saves.
    pub fn run(mut self) -> Result<()> {
        loop {
            let menu = render_menu(&MAIN_MENU, self.use_color);
            write!(self.output, "{}", menu)?;

            match self.read_number("Enter an option number: ")? {
                None | Some(0) => break,
                Some(1) => self.list_pages()?,
                Some(2) => self.add_record()?,
                Some(3) => self.edit_record()?,
                Some(4) => self.search_records()?,
                Some(_) => writeln!(self.output, "Invalid option, choose 0-4.")?,
            }
        }

        let result = self.api.close()?;
        self.show(&render_messages(&result.messages, self.use_color))
    }

    fn list_pages(&mut self) -> Result<()> {
        if self.api.is_empty() {
            return self.show("No records found.\n");
        }

        writeln!(
            self.output,
            "Enter a page number or 0 to stop. Pages: {}",
            self.api.page_count()
        )?;

        loop {
            let Some(page) = self.read_number("")? else {
                return Ok(());
            };
            match self.api.render_page(page) {
                Ok(PageView::Stop) => return Ok(()),
                Ok(view) => {
                    let text = render_page(&view, self.use_color);
                    self.show(&text)?;
                }
                Err(e) if e.is_recoverable() => writeln!(self.output, "No such page")?,
                Err(e) => return Err(e),
            }
        }
    }

    fn add_record(&mut self) -> Result<()> {
        let Some(fields) = self.read_fields("Enter", None)? else {
            return Ok(());
        };
        let result = self.api.add_record(fields)?;
        self.show(&render_messages(&result.messages, self.use_color))
    }

    fn edit_record(&mut self) -> Result<()> {
        if self.api.is_empty() {
            return self.show("No records to edit.\n");
        }

        let prompt = format!(
            "Enter the position of the record to edit (1-{}), or 0 to go back: ",
            self.api.len()
        );
        let position = loop {
            match self.read_number(&prompt)? {
                None | Some(0) => return Ok(()),
                Some(position) => match self.api.record_at(position) {
                    Ok(_) => break position,
                    Err(e) if e.is_recoverable() => writeln!(self.output, "Invalid position")?,
                    Err(e) => return Err(e),
                },
            }
        };

        if let Some(current) = positioned(self.api.records()).get(position - 1) {
            let text = render_current(current, self.use_color);
            self.show(&text)?;
        }

        loop {
            let menu = render_menu(&EDIT_MENU, self.use_color);
            write!(self.output, "{}", menu)?;

            match self.read_number("")? {
                None | Some(0) => return Ok(()),
                Some(1) => {
                    // Every field is re-entered; a blank answer blanks the field.
                    let current = self.api.record_at(position)?.fields();
                    let Some(fields) = self.read_fields("New", Some(&current))? else {
                        return Ok(());
                    };
                    let result = self.api.update_record(position, fields)?;
                    return self.show(&render_messages(&result.messages, self.use_color));
                }
                Some(2) => {
                    let result = self.api.delete_record(position)?;
                    return self.show(&render_messages(&result.messages, self.use_color));
                }
                Some(_) => writeln!(self.output, "Invalid option")?,
            }
        }
    }

    fn search_records(&mut self) -> Result<()> {
        writeln!(self.output, "Enter search values (leave blank to skip a field):")?;
        let Some(fields) = self.read_fields("", None)? else {
            return Ok(());
        };

        let result = self.api.search(&SearchCriteria::from(fields))?;
        let mut text = render_records(&result.listed_records, self.use_color);
        text.push_str(&render_messages(&result.messages, self.use_color));
        self.show(&text)
    }

    /// Prompts for all six fields. `None` if input ends part way.
    /// `current` values are shown in brackets for reference only.
    fn read_fields(
        &mut self,
        verb: &str,
        current: Option<&RecordFields>,
    ) -> Result<Option<RecordFields>> {
        let mut fields = RecordFields::default();
        for field in Field::ALL {
            let mut prompt = if verb.is_empty() {
                field.label().to_string()
            } else {
                format!("{} {}", verb, field.label().to_lowercase())
            };
            if let Some(current) = current {
                prompt.push_str(&format!(" [{}]", current.get(field)));
            }
            prompt.push_str(": ");
            match self.read_line(&prompt)? {
                Some(value) => fields.set(field, value),
                None => return Ok(None),
            }
        }
        Ok(Some(fields))
    }

    /// Reads a non-negative number, re-prompting on anything else.
    fn read_number(&mut self, prompt: &str) -> Result<Option<usize>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<usize>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.output, "Please enter a number.")?,
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        if !prompt.is_empty() {
            write!(self.output, "{}", prompt)?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn show(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        Ok(())
    }
}
