//! Terminal stand-in for the host's subgroup selection dialog.
//!
//! Lists the selectable subgroups in a table, then prompts for a choice
//! and a starting number. Entering `q` cancels the whole operation, the
//! way closing the host dialog would; an empty choice accepts the
//! default.

use std::io::{BufRead, Write};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sheetnum_core::SubgroupSelector;
use sheetnum_model::{HostError, RenumberRequest, Selection};

pub struct PromptSelector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> Result<Option<String>, HostError> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            // End of input counts as cancellation.
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, HostError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }
}

impl<R: BufRead, W: Write> SubgroupSelector for PromptSelector<R, W> {
    fn select(&mut self, options: &[String], default: &str) -> Result<Selection, HostError> {
        writeln!(self.output, "{}", options_table(options, default))?;

        let subgroup = loop {
            let Some(answer) = self.prompt(&format!("Subgroup [{default}], q to cancel: "))?
            else {
                return Ok(Selection::Cancelled);
            };
            if answer.eq_ignore_ascii_case("q") {
                return Ok(Selection::Cancelled);
            }
            if answer.is_empty() {
                break default.to_string();
            }
            if let Ok(index) = answer.parse::<usize>() {
                if index >= 1 && index <= options.len() {
                    break options[index - 1].clone();
                }
            }
            if let Some(key) = options.iter().find(|key| **key == answer) {
                break key.clone();
            }
            writeln!(self.output, "No such subgroup: {answer}")?;
        };

        let Some(start) = self.prompt("Starting number [1]: ")? else {
            return Ok(Selection::Cancelled);
        };
        Ok(Selection::Chosen(RenumberRequest { subgroup, start }))
    }
}

fn options_table(options: &[String], default: &str) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("#").fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new("Subgroup")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ]);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (index, option) in options.iter().enumerate() {
        let cell = if option == default {
            Cell::new(option).add_attribute(Attribute::Bold)
        } else {
            Cell::new(option)
        };
        table.add_row(vec![Cell::new(index + 1), cell]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["1Arch".to_string(), "2Arch".to_string()]
    }

    fn run(input: &str) -> Selection {
        let mut output = Vec::new();
        let mut selector = PromptSelector::new(input.as_bytes(), &mut output);
        selector
            .select(&options(), "1Arch")
            .expect("selection does not fail")
    }

    #[test]
    fn empty_choice_takes_the_default() {
        let selection = run("\n10\n");
        assert_eq!(
            selection,
            Selection::Chosen(RenumberRequest {
                subgroup: "1Arch".to_string(),
                start: "10".to_string(),
            })
        );
    }

    #[test]
    fn numeric_choice_picks_by_index() {
        let selection = run("2\n5\n");
        assert_eq!(
            selection,
            Selection::Chosen(RenumberRequest {
                subgroup: "2Arch".to_string(),
                start: "5".to_string(),
            })
        );
    }

    #[test]
    fn exact_key_is_accepted() {
        let selection = run("2Arch\n1\n");
        assert_eq!(
            selection,
            Selection::Chosen(RenumberRequest {
                subgroup: "2Arch".to_string(),
                start: "1".to_string(),
            })
        );
    }

    #[test]
    fn q_cancels() {
        assert_eq!(run("q\n"), Selection::Cancelled);
    }

    #[test]
    fn end_of_input_cancels() {
        assert_eq!(run(""), Selection::Cancelled);
    }

    #[test]
    fn bad_choice_reprompts() {
        let selection = run("Nope\n2\n7\n");
        assert_eq!(
            selection,
            Selection::Chosen(RenumberRequest {
                subgroup: "2Arch".to_string(),
                start: "7".to_string(),
            })
        );
    }
}
