use crate::error::Result;
use crate::item::Item;
use std::io::Write;

/// Raw text of the two form fields, exactly as the user entered it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub price: String,
}

/// Presentation contract between the session and the display surface.
///
/// Only the session calls these methods, once per store mutation, so what
/// is on screen is always a function of the store state at the time of the
/// call. Render methods are fallible because the surface is an arbitrary
/// writer.
pub trait ListView {
    /// Replaces the whole list display.
    fn render_all(&mut self, items: &[Item]) -> Result<()>;
    /// Appends one freshly added item to the list display.
    fn render_append(&mut self, item: &Item) -> Result<()>;
    /// Redraws a single item after an update.
    fn render_update(&mut self, item: &Item) -> Result<()>;
    /// Removes a single item from the list display.
    fn render_remove(&mut self, id: u32) -> Result<()>;
    /// Removes every item from the list display.
    fn render_clear(&mut self) -> Result<()>;
    /// Shows the running total.
    fn show_total(&mut self, total: i64) -> Result<()>;
    /// Hides the (empty) list display.
    fn hide_list(&mut self) -> Result<()>;

    /// Current form field text.
    fn read_form(&self) -> FormInput;
    /// Sets the form fields, either from the user typing or from the item
    /// being edited.
    fn write_form(&mut self, name: &str, price: &str);
    /// Blanks both form fields.
    fn clear_form(&mut self);

    fn enter_edit_mode(&mut self);
    fn exit_edit_mode(&mut self);
}

/// Line-oriented view over any writer.
///
/// Each render call emits one stable line, so a transcript of a session is
/// both human-readable and easy to assert on. The form fields and the edit
/// flag live here as plain state, standing in for the input elements and
/// button visibility of a real surface.
pub struct TextView<W: Write> {
    out: W,
    form: FormInput,
    editing: bool,
}

impl<W: Write> TextView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            form: FormInput::default(),
            editing: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Consumes the view and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn item_line(&mut self, prefix: &str, item: &Item) -> Result<()> {
        writeln!(self.out, "{prefix}{}. {}: {} $", item.id, item.name, item.price)?;
        Ok(())
    }
}

impl<W: Write> ListView for TextView<W> {
    fn render_all(&mut self, items: &[Item]) -> Result<()> {
        for item in items {
            self.item_line("", item)?;
        }
        Ok(())
    }

    fn render_append(&mut self, item: &Item) -> Result<()> {
        self.item_line("+ ", item)
    }

    fn render_update(&mut self, item: &Item) -> Result<()> {
        self.item_line("~ ", item)
    }

    fn render_remove(&mut self, id: u32) -> Result<()> {
        writeln!(self.out, "- {id}.")?;
        Ok(())
    }

    fn render_clear(&mut self) -> Result<()> {
        writeln!(self.out, "list cleared")?;
        Ok(())
    }

    fn show_total(&mut self, total: i64) -> Result<()> {
        writeln!(self.out, "total: {total} $")?;
        Ok(())
    }

    fn hide_list(&mut self) -> Result<()> {
        writeln!(self.out, "(no items)")?;
        Ok(())
    }

    fn read_form(&self) -> FormInput {
        self.form.clone()
    }

    fn write_form(&mut self, name: &str, price: &str) {
        self.form.name = name.to_string();
        self.form.price = price.to_string();
    }

    fn clear_form(&mut self) {
        self.form = FormInput::default();
    }

    fn enter_edit_mode(&mut self) {
        self.editing = true;
    }

    fn exit_edit_mode(&mut self) {
        self.editing = false;
    }
}
