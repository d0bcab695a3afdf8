//! Interactive menu
//!
//! A numbered menu loop over any reader and writer. Bad input (an unknown
//! category, text where a number belongs, a position that doesn't exist) is
//! reported and the user is asked again. Storage errors end the loop.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::resolve_date;
use crate::config::Settings;
use crate::display::{format_expense_fields, format_expense_list, format_summary};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::ExportFormat;
use crate::models::{ExpenseEdit, ExpenseField, Money};
use crate::services::{ExpenseService, NewExpense};

/// What the loop should do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive numbered menu
pub struct Menu<'s, R, W> {
    input: R,
    output: W,
    settings: &'s Settings,
    export_path: PathBuf,
}

impl<'s, R: BufRead, W: Write> Menu<'s, R, W> {
    pub fn new(input: R, output: W, settings: &'s Settings, export_path: PathBuf) -> Self {
        Self {
            input,
            output,
            settings,
            export_path,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self, service: &mut ExpenseService<'_>) -> ExpenseResult<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.add(service)?,
                "2" => self.edit(service)?,
                "3" => self.delete(service)?,
                "4" => self.summary(service)?,
                "5" => self.export(service)?,
                "6" => {
                    writeln!(self.output, "Exiting...")?;
                    Flow::Quit
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Please enter a valid option.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> ExpenseResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Expense Tracker")?;
        writeln!(self.output, "1. Add Expense")?;
        writeln!(self.output, "2. Edit Expense")?;
        writeln!(self.output, "3. Delete Expense")?;
        writeln!(self.output, "4. View Summary")?;
        writeln!(self.output, "5. Export to Spreadsheet")?;
        writeln!(self.output, "6. Exit")?;
        Ok(())
    }

    fn add(&mut self, service: &mut ExpenseService<'_>) -> ExpenseResult<Flow> {
        let Some(amount) = self.prompt_amount("Enter the amount spent: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(description) = self.prompt("Enter a brief description: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(category) = self.prompt_category(service, "Enter the category of the expense: ")?
        else {
            return Ok(Flow::Quit);
        };
        let Some(date) = self.prompt(
            "Enter the date (YYYY-MM-DD) of the expense [Leave blank for current date]: ",
        )?
        else {
            return Ok(Flow::Quit);
        };

        let date = match resolve_date(Some(&date), self.settings) {
            Ok(date) => date,
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };

        let input = NewExpense {
            date,
            amount,
            description,
            category,
        };

        match service.add(input) {
            Ok(_) => writeln!(self.output, "Expense added successfully!")?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn edit(&mut self, service: &mut ExpenseService<'_>) -> ExpenseResult<Flow> {
        writeln!(self.output, "Edit Expense:")?;
        let Some(index) = self.prompt_index(service, "Enter the index of the expense to edit: ")?
        else {
            return Ok(Flow::Quit);
        };
        let Some(index) = index else {
            return Ok(Flow::Continue);
        };

        let current = service.ledger().get(index)?.clone();
        writeln!(self.output, "\nEditing Expense:")?;
        write!(self.output, "{}", format_expense_fields(&current))?;

        let Some(choice) = self.prompt("Enter the number of the field to edit: ")? else {
            return Ok(Flow::Quit);
        };
        let Ok(field) = choice.parse::<ExpenseField>() else {
            writeln!(self.output, "Invalid choice!")?;
            return Ok(Flow::Continue);
        };

        let edit = match field {
            ExpenseField::Amount => match self.prompt_amount("Enter new amount: ")? {
                Some(amount) => ExpenseEdit::Amount(amount),
                None => return Ok(Flow::Quit),
            },
            ExpenseField::Category => {
                match self.prompt_category(service, "Enter new category: ")? {
                    Some(category) => ExpenseEdit::Category(category),
                    None => return Ok(Flow::Quit),
                }
            }
            ExpenseField::Date => match self.prompt("Enter new date (YYYY-MM-DD): ")? {
                Some(date) => ExpenseEdit::Date(date),
                None => return Ok(Flow::Quit),
            },
            ExpenseField::Description => match self.prompt("Enter new description: ")? {
                Some(description) => ExpenseEdit::Description(description),
                None => return Ok(Flow::Quit),
            },
        };

        match service.edit(index, edit) {
            Ok(_) => writeln!(self.output, "Expense edited successfully!")?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self, service: &mut ExpenseService<'_>) -> ExpenseResult<Flow> {
        writeln!(self.output, "Delete Expense:")?;
        let Some(index) =
            self.prompt_index(service, "Enter the index of the expense to delete: ")?
        else {
            return Ok(Flow::Quit);
        };
        let Some(index) = index else {
            return Ok(Flow::Continue);
        };

        match service.delete(index) {
            Ok(_) => writeln!(self.output, "Expense deleted successfully!")?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn summary(&mut self, service: &ExpenseService<'_>) -> ExpenseResult<Flow> {
        writeln!(self.output)?;
        write!(
            self.output,
            "{}",
            format_summary(&service.summary(), &self.settings.currency_symbol)
        )?;
        Ok(Flow::Continue)
    }

    fn export(&mut self, service: &ExpenseService<'_>) -> ExpenseResult<Flow> {
        match service.export(&self.export_path, ExportFormat::Csv) {
            Ok(()) => writeln!(
                self.output,
                "Expenses exported to {} successfully!",
                self.export_path.display()
            )?,
            Err(ExpenseError::Export(msg)) => writeln!(self.output, "Export failed: {}", msg)?,
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    /// List expenses and read a position
    ///
    /// Outer `None` means input ended; inner `None` means the position was
    /// rejected and already reported.
    fn prompt_index(
        &mut self,
        service: &ExpenseService<'_>,
        message: &str,
    ) -> ExpenseResult<Option<Option<usize>>> {
        write!(
            self.output,
            "\n{}",
            format_expense_list(service.expenses(), &self.settings.currency_symbol)
        )?;
        if service.expenses().is_empty() {
            return Ok(Some(None));
        }

        let Some(raw) = self.prompt(message)? else {
            return Ok(None);
        };
        match raw.parse::<usize>() {
            Ok(index) if service.ledger().get(index).is_ok() => Ok(Some(Some(index))),
            _ => {
                writeln!(self.output, "Invalid index!")?;
                Ok(Some(None))
            }
        }
    }

    fn prompt_amount(&mut self, message: &str) -> ExpenseResult<Option<Money>> {
        loop {
            let Some(raw) = self.prompt(message)? else {
                return Ok(None);
            };
            match Money::parse(&raw) {
                Ok(amount) if amount.is_negative() => {
                    writeln!(self.output, "Amount cannot be negative.")?;
                }
                Ok(amount) => return Ok(Some(amount)),
                Err(e) => writeln!(self.output, "Invalid amount: {}. Please enter a number.", e)?,
            }
        }
    }

    fn prompt_category(
        &mut self,
        service: &ExpenseService<'_>,
        message: &str,
    ) -> ExpenseResult<Option<String>> {
        loop {
            let Some(raw) = self.prompt(message)? else {
                return Ok(None);
            };
            match service.registry().validate(&raw) {
                Ok(category) => return Ok(Some(category)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Print a message and read one line; `None` at end of input
    fn prompt(&mut self, message: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Print recoverable errors, propagate the rest
    fn report(&mut self, err: ExpenseError) -> ExpenseResult<()> {
        if err.is_recoverable() {
            writeln!(self.output, "{}", err)?;
            Ok(())
        } else {
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::storage::Storage;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_script(storage: &Storage, script: &str) -> (String, Vec<crate::models::Expense>) {
        let settings = Settings::default();
        let mut service = ExpenseService::load(storage, &settings).unwrap();
        let mut output = Vec::new();
        let export_path = storage.paths().default_export_file();

        Menu::new(Cursor::new(script.to_string()), &mut output, &settings, export_path)
            .run(&mut service)
            .unwrap();

        (String::from_utf8(output).unwrap(), service.expenses().to_vec())
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, Storage::new(paths).unwrap())
    }

    #[test]
    fn test_add_reprompts_on_bad_input() {
        let (_temp_dir, storage) = create_test_storage();
        let script = "1\ntwelve\n12.50\nlunch\nrent\nFood\n2024-01-01\n6\n";

        let (output, expenses) = run_script(&storage, script);

        assert!(output.contains("Please enter a number."));
        assert!(output.contains("Invalid category 'rent'"));
        assert!(output.contains("Expense added successfully!"));
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].category, "food");
        assert_eq!(expenses[0].amount, Money::from_cents(1250));
        assert_eq!(expenses[0].date, "2024-01-01");
    }

    #[test]
    fn test_edit_and_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let script = concat!(
            "1\n10\nlunch\nfood\n2024-01-01\n",
            "1\n20\nbus\ntransportation\n2024-01-02\n",
            "2\n1\n4\nutilities\n",
            "3\n2\n",
            "6\n"
        );

        let (output, expenses) = run_script(&storage, script);

        assert!(output.contains("Expense edited successfully!"));
        assert!(output.contains("Expense deleted successfully!"));
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].category, "utilities");
        assert_eq!(storage.expenses.load().unwrap(), expenses);
    }

    #[test]
    fn test_invalid_index_leaves_ledger_unchanged() {
        let (_temp_dir, storage) = create_test_storage();
        let script = "1\n10\nlunch\nfood\n2024-01-01\n3\n5\n3\nabc\n6\n";

        let (output, expenses) = run_script(&storage, script);

        assert_eq!(output.matches("Invalid index!").count(), 2);
        assert_eq!(expenses.len(), 1);
    }

    #[test]
    fn test_summary_on_empty_ledger() {
        let (_temp_dir, storage) = create_test_storage();

        let (output, _) = run_script(&storage, "4\n6\n");

        assert!(output.contains("Total Amount Spent: $0.00"));
        assert!(output.contains("No expenses recorded."));
    }

    #[test]
    fn test_export_writes_default_file() {
        let (_temp_dir, storage) = create_test_storage();

        let (output, _) = run_script(&storage, "1\n3\ntea\nfood\n2024-01-01\n5\n6\n");

        assert!(output.contains("successfully!"));
        let contents = std::fs::read_to_string(storage.paths().default_export_file()).unwrap();
        assert_eq!(contents, "Date,Description,Amount,Category\n2024-01-01,tea,3.00,food\n");
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_temp_dir, storage) = create_test_storage();

        let (output, expenses) = run_script(&storage, "9\n1\n5\n");

        assert!(output.contains("Invalid choice."));
        assert!(expenses.is_empty());
    }

    #[test]
    fn test_bad_date_format_is_reported() {
        let (_temp_dir, storage) = create_test_storage();
        let mut settings = Settings::default();
        settings.date_format = "%Q".into();
        let mut service = ExpenseService::load(&storage, &settings).unwrap();
        let mut output = Vec::new();

        Menu::new(
            Cursor::new("1\n4\ntea\nfood\n\n6\n".to_string()),
            &mut output,
            &settings,
            storage.paths().default_export_file(),
        )
        .run(&mut service)
        .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Invalid date_format '%Q'"));
        assert!(output.contains("Exiting..."));
        assert!(service.expenses().is_empty());
    }
}
