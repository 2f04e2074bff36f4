//! Loan form: editable fields, focus, and the installment toggle.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use mortcalc_core::fields::{sanitize_input, Field, FormSnapshot, InputKind};
use mortcalc_core::request::PrepaymentStrategy;

use crate::styles::ColorTheme;

/// Editable state of the loan form.
#[derive(Debug, Clone)]
pub struct FormModel {
    values: FormSnapshot,
    focus: Field,
}

impl FormModel {
    /// A form holding `initial`, focused on the first field.
    #[must_use]
    pub fn new(initial: FormSnapshot) -> Self {
        Self {
            values: initial,
            focus: Field::LoanAmount,
        }
    }

    /// Field with keyboard focus.
    #[must_use]
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Whether the installment toggle is pressed.
    #[must_use]
    pub fn installment(&self) -> bool {
        self.values.installment()
    }

    /// Raw text of a field.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// The prepayment strategy currently selected.
    #[must_use]
    pub fn strategy(&self) -> PrepaymentStrategy {
        PrepaymentStrategy::from_form_value(self.values.get(Field::PrepaymentStrategy))
    }

    /// Fields shown in the form. The rate field is hidden in installment mode.
    #[must_use]
    pub fn visible_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|&f| !(f == Field::InterestRate && self.installment()))
            .collect()
    }

    /// Move focus to the next visible field, wrapping around.
    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    /// Move focus to the previous visible field, wrapping around.
    pub fn focus_prev(&mut self) {
        let n = self.visible_fields().len();
        self.move_focus(n.saturating_sub(1));
    }

    fn move_focus(&mut self, step: usize) {
        let fields = self.visible_fields();
        let current = fields.iter().position(|&f| f == self.focus).unwrap_or(0);
        self.focus = fields[(current + step) % fields.len()];
    }

    /// Type a character into the focused field.
    pub fn insert_char(&mut self, c: char) {
        let field = self.focus;
        let kind = field.input_kind();
        match kind {
            InputKind::Choice => return,
            InputKind::Integer if !c.is_ascii_digit() => return,
            _ => {}
        }
        let mut text = self.values.get(field).to_string();
        text.push(c);
        self.values.set(field, sanitize_input(kind, &text));
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        let field = self.focus;
        if field.input_kind() == InputKind::Choice {
            return;
        }
        let mut text = self.values.get(field).to_string();
        text.pop();
        self.values.set(field, text);
    }

    /// Flip the installment toggle. Focus leaves the rate field when it hides.
    pub fn toggle_installment(&mut self) {
        let pressed = !self.installment();
        self.values.set_installment(pressed);
        if pressed && self.focus == Field::InterestRate {
            self.focus = Field::PrepaymentAmount;
        }
        tracing::debug!(installment = pressed, "installment toggled");
    }

    /// Switch to the other prepayment strategy.
    pub fn cycle_strategy(&mut self) {
        let next = self.strategy().toggled();
        self.values.set(Field::PrepaymentStrategy, next.as_str());
    }

    /// Copy of the form contents for one action.
    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        self.values.clone()
    }
}

/// Render the form with the focused field highlighted.
pub fn render_form(frame: &mut Frame, area: Rect, form: &FormModel, theme: &ColorTheme) {
    let width = Field::ALL.iter().map(|f| f.label().len()).max().unwrap_or(0);
    let mut lines = Vec::with_capacity(Field::ALL.len() + 2);

    for field in form.visible_fields() {
        let focused = field == form.focus();
        let label_style = if focused {
            theme.focus_style()
        } else {
            theme.muted_style()
        };
        let value = match field.input_kind() {
            InputKind::Choice => format!("< {} >", form.strategy()),
            _ if focused => format!("{}_", form.value(field)),
            _ => form.value(field).to_string(),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<width$} ", field.label()), label_style),
            Span::styled(value, theme.text_style()),
        ]));
    }

    lines.push(Line::raw(""));
    let mark = if form.installment() { "[x]" } else { "[ ]" };
    lines.push(Line::from(vec![
        Span::styled(mark, theme.key_style()),
        Span::raw(" Installment (no interest)"),
    ]));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Loan parameters "),
    );
    frame.render_widget(paragraph, area);
}
