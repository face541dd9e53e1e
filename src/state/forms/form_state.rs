//! Report form state
//!
//! Holds every value the user edits plus focus and cursors. The form is the
//! only mutable report state; `snapshot` produces the immutable `Report`
//! handed to the validator and transforms.

use super::field::FormField;
use crate::report::{ActionType, ImageAttachment, LaborItem, Report, WorkType};
use uuid::Uuid;

/// Focusable sections of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    WorkOrder,
    WorkType,
    Collaborators,
    Images,
    LaborCode(usize),
    LaborQuantity(usize),
    LaborAction(usize),
    AddItem,
    Export,
    Submit,
}

impl Focus {
    /// Index of the labor item this focus belongs to, if any
    pub fn labor_index(&self) -> Option<usize> {
        match self {
            Self::LaborCode(i) | Self::LaborQuantity(i) | Self::LaborAction(i) => Some(*i),
            _ => None,
        }
    }
}

/// Editable labor item row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaborItemForm {
    pub id: Uuid,
    pub code: FormField,
    pub quantity: FormField,
    pub action: ActionType,
}

impl LaborItemForm {
    /// Blank row with a fresh id
    pub fn new() -> Self {
        LaborItem::new().into()
    }

    pub fn to_labor_item(&self) -> LaborItem {
        LaborItem {
            id: self.id,
            code: self.code.as_text().to_string(),
            quantity: self.quantity.as_quantity(),
            action: self.action,
        }
    }
}

impl From<LaborItem> for LaborItemForm {
    fn from(item: LaborItem) -> Self {
        let mut code = FormField::text("code", "Qual o código da mão de obra?");
        code.set_text(item.code);
        let mut quantity = FormField::quantity("quantity", "Qual a quantidade da mão de obra?");
        quantity.set_text(item.quantity.to_string());

        Self {
            id: item.id,
            code,
            quantity,
            action: item.action,
        }
    }
}

impl Default for LaborItemForm {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct ReportForm {
    pub work_order: FormField,
    pub work_type: Option<WorkType>,
    /// Radio cursor over `WorkType::ALL`
    pub work_type_cursor: usize,
    pub roster: Vec<String>,
    pub roster_cursor: usize,
    /// Selected collaborators, in selection order
    pub collaborators: Vec<String>,
    pub images: Vec<ImageAttachment>,
    pub image_cursor: usize,
    pub labor_items: Vec<LaborItemForm>,
    pub focus: Focus,
}

impl ReportForm {
    pub fn new(roster: Vec<String>) -> Self {
        Self {
            work_order: FormField::text("work_order", "Qual o número da Obra ou Ordem de Serviço?")
                .with_placeholder("Ex: OS-12345"),
            work_type: None,
            work_type_cursor: 0,
            roster,
            roster_cursor: 0,
            collaborators: Vec::new(),
            images: Vec::new(),
            image_cursor: 0,
            labor_items: vec![LaborItemForm::new()],
            focus: Focus::WorkOrder,
        }
    }

    /// Sections other than the work order are usable once it is filled
    pub fn is_unlocked(&self) -> bool {
        !self.work_order.as_text().trim().is_empty()
    }

    /// Focus stops in tab order; only the work order while locked
    pub fn focus_order(&self) -> Vec<Focus> {
        if !self.is_unlocked() {
            return vec![Focus::WorkOrder];
        }

        let mut order = vec![
            Focus::WorkOrder,
            Focus::WorkType,
            Focus::Collaborators,
            Focus::Images,
        ];
        for i in 0..self.labor_items.len() {
            order.push(Focus::LaborCode(i));
            order.push(Focus::LaborQuantity(i));
            order.push(Focus::LaborAction(i));
        }
        order.extend([Focus::AddItem, Focus::Export, Focus::Submit]);
        order
    }

    pub fn next_focus(&mut self) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.set_focus(order[(current + 1) % order.len()]);
    }

    pub fn prev_focus(&mut self) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let prev = if current == 0 {
            order.len() - 1
        } else {
            current - 1
        };
        self.set_focus(order[prev]);
    }

    /// Move focus, normalizing a quantity buffer that is being left
    pub fn set_focus(&mut self, focus: Focus) {
        if let Focus::LaborQuantity(i) = self.focus {
            if focus != self.focus {
                if let Some(item) = self.labor_items.get_mut(i) {
                    item.quantity.normalize();
                }
            }
        }
        self.focus = focus;
    }

    /// The text field under focus, if the focus is a text input
    pub fn active_text_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus {
            Focus::WorkOrder => Some(&mut self.work_order),
            Focus::LaborCode(i) => self.labor_items.get_mut(i).map(|item| &mut item.code),
            Focus::LaborQuantity(i) => self.labor_items.get_mut(i).map(|item| &mut item.quantity),
            _ => None,
        }
    }

    pub fn move_work_type_cursor(&mut self) {
        self.work_type_cursor = (self.work_type_cursor + 1) % WorkType::ALL.len();
    }

    /// Select the work type under the radio cursor
    pub fn select_work_type(&mut self) {
        self.work_type = Some(WorkType::ALL[self.work_type_cursor]);
    }

    pub fn next_collaborator(&mut self) {
        if !self.roster.is_empty() {
            self.roster_cursor = (self.roster_cursor + 1) % self.roster.len();
        }
    }

    pub fn prev_collaborator(&mut self) {
        if !self.roster.is_empty() {
            self.roster_cursor = self
                .roster_cursor
                .checked_sub(1)
                .unwrap_or(self.roster.len() - 1);
        }
    }

    /// Toggle the roster member under the cursor
    pub fn toggle_collaborator(&mut self) {
        let Some(name) = self.roster.get(self.roster_cursor).cloned() else {
            return;
        };
        if let Some(pos) = self.collaborators.iter().position(|c| *c == name) {
            self.collaborators.remove(pos);
        } else {
            self.collaborators.push(name);
        }
    }

    pub fn is_collaborator_selected(&self, name: &str) -> bool {
        self.collaborators.iter().any(|c| c == name)
    }

    pub fn attach_image(&mut self, image: ImageAttachment) {
        self.images.push(image);
        self.image_cursor = self.images.len() - 1;
    }

    /// Drop the image under the cursor
    pub fn remove_selected_image(&mut self) -> Option<ImageAttachment> {
        if self.image_cursor >= self.images.len() {
            return None;
        }
        let removed = self.images.remove(self.image_cursor);
        self.image_cursor = self.image_cursor.min(self.images.len().saturating_sub(1));
        Some(removed)
    }

    pub fn next_image(&mut self) {
        if !self.images.is_empty() {
            self.image_cursor = (self.image_cursor + 1) % self.images.len();
        }
    }

    pub fn prev_image(&mut self) {
        if !self.images.is_empty() {
            self.image_cursor = self
                .image_cursor
                .checked_sub(1)
                .unwrap_or(self.images.len() - 1);
        }
    }

    /// Append a blank labor item and focus its code
    pub fn add_labor_item(&mut self) {
        self.labor_items.push(LaborItemForm::new());
        self.set_focus(Focus::LaborCode(self.labor_items.len() - 1));
    }

    /// Remove a labor item; the last remaining item cannot be removed
    pub fn remove_labor_item(&mut self, index: usize) -> bool {
        if self.labor_items.len() <= 1 || index >= self.labor_items.len() {
            return false;
        }
        self.labor_items.remove(index);

        if let Some(i) = self.focus.labor_index().filter(|i| *i >= index) {
            let last = self.labor_items.len() - 1;
            let shifted = if i > index { i - 1 } else { i.min(last) };
            self.focus = Focus::LaborCode(shifted);
        }
        true
    }

    pub fn toggle_action(&mut self, index: usize) {
        if let Some(item) = self.labor_items.get_mut(index) {
            item.action = item.action.toggle();
        }
    }

    /// Immutable view of the current values
    pub fn snapshot(&self) -> Report {
        Report {
            work_order: self.work_order.as_text().to_string(),
            work_type: self.work_type,
            collaborators: self.collaborators.clone(),
            labor_items: self.labor_items.iter().map(LaborItemForm::to_labor_item).collect(),
            images: self.images.clone(),
        }
    }

    /// Back to a blank form with one empty labor item, keeping the roster
    pub fn reset(&mut self) {
        let roster = std::mem::take(&mut self.roster);
        *self = Self::new(roster);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn roster() -> Vec<String> {
        vec!["Ana".to_string(), "Bruno".to_string(), "Carlos".to_string()]
    }

    fn unlocked_form() -> ReportForm {
        let mut form = ReportForm::new(roster());
        form.work_order.set_text("OS-1".to_string());
        form
    }

    fn image(name: &str) -> ImageAttachment {
        ImageAttachment {
            path: PathBuf::from(format!("/tmp/{name}")),
            name: name.to_string(),
        }
    }

    mod focus {
        use super::*;

        #[test]
        fn test_locked_form_keeps_focus_on_work_order() {
            let mut form = ReportForm::new(roster());
            form.next_focus();
            assert_eq!(form.focus, Focus::WorkOrder);
            form.prev_focus();
            assert_eq!(form.focus, Focus::WorkOrder);
            assert_eq!(form.focus_order(), vec![Focus::WorkOrder]);
        }

        #[test]
        fn test_unlocked_order_includes_labor_items() {
            let mut form = unlocked_form();
            form.add_labor_item();
            let order = form.focus_order();
            assert_eq!(order.len(), 4 + 2 * 3 + 3);
            assert_eq!(order[4], Focus::LaborCode(0));
            assert_eq!(order[9], Focus::LaborAction(1));
            assert_eq!(*order.last().unwrap(), Focus::Submit);
        }

        #[test]
        fn test_next_and_prev_wrap() {
            let mut form = unlocked_form();
            form.prev_focus();
            assert_eq!(form.focus, Focus::Submit);
            form.next_focus();
            assert_eq!(form.focus, Focus::WorkOrder);
            form.next_focus();
            assert_eq!(form.focus, Focus::WorkType);
        }

        #[test]
        fn test_leaving_quantity_normalizes_it() {
            let mut form = unlocked_form();
            form.set_focus(Focus::LaborQuantity(0));
            form.labor_items[0].quantity.pop_char();
            assert_eq!(form.labor_items[0].quantity.as_text(), "");
            form.next_focus();
            assert_eq!(form.labor_items[0].quantity.as_text(), "1");
        }

        #[test]
        fn test_active_text_field() {
            let mut form = unlocked_form();
            assert_eq!(form.active_text_field_mut().unwrap().name, "work_order");
            form.set_focus(Focus::LaborQuantity(0));
            assert_eq!(form.active_text_field_mut().unwrap().name, "quantity");
            form.set_focus(Focus::Collaborators);
            assert!(form.active_text_field_mut().is_none());
        }
    }

    mod collaborators {
        use super::*;

        #[test]
        fn test_toggle_adds_and_removes() {
            let mut form = unlocked_form();
            form.toggle_collaborator();
            assert_eq!(form.collaborators, vec!["Ana".to_string()]);
            form.next_collaborator();
            form.next_collaborator();
            form.toggle_collaborator();
            assert_eq!(form.collaborators, vec!["Ana".to_string(), "Carlos".to_string()]);
            form.prev_collaborator();
            form.prev_collaborator();
            form.toggle_collaborator();
            assert_eq!(form.collaborators, vec!["Carlos".to_string()]);
            assert!(form.is_collaborator_selected("Carlos"));
            assert!(!form.is_collaborator_selected("Ana"));
        }

        #[test]
        fn test_cursor_wraps() {
            let mut form = unlocked_form();
            form.prev_collaborator();
            assert_eq!(form.roster_cursor, 2);
            form.next_collaborator();
            assert_eq!(form.roster_cursor, 0);
        }

        #[test]
        fn test_empty_roster_is_noop() {
            let mut form = ReportForm::new(vec![]);
            form.next_collaborator();
            form.toggle_collaborator();
            assert!(form.collaborators.is_empty());
        }
    }

    mod work_type {
        use super::*;

        #[test]
        fn test_select_under_cursor() {
            let mut form = unlocked_form();
            assert!(form.work_type.is_none());
            form.select_work_type();
            assert_eq!(form.work_type, Some(WorkType::Energisa));
            form.move_work_type_cursor();
            form.select_work_type();
            assert_eq!(form.work_type, Some(WorkType::Private));
        }
    }

    mod labor_items {
        use super::*;

        #[test]
        fn test_starts_with_one_blank_item() {
            let form = ReportForm::new(roster());
            assert_eq!(form.labor_items.len(), 1);
            assert_eq!(form.labor_items[0].code.as_text(), "");
            assert_eq!(form.labor_items[0].quantity.as_quantity(), 1);
        }

        #[test]
        fn test_add_focuses_new_item() {
            let mut form = unlocked_form();
            form.add_labor_item();
            assert_eq!(form.labor_items.len(), 2);
            assert_eq!(form.focus, Focus::LaborCode(1));
            assert_ne!(form.labor_items[0].id, form.labor_items[1].id);
        }

        #[test]
        fn test_last_item_cannot_be_removed() {
            let mut form = unlocked_form();
            assert!(!form.remove_labor_item(0));
            assert_eq!(form.labor_items.len(), 1);
        }

        #[test]
        fn test_remove_keeps_focus_in_range() {
            let mut form = unlocked_form();
            form.add_labor_item();
            form.add_labor_item();
            form.set_focus(Focus::LaborAction(2));
            assert!(form.remove_labor_item(2));
            assert_eq!(form.labor_items.len(), 2);
            assert_eq!(form.focus, Focus::LaborCode(1));
            assert!(form.focus_order().contains(&form.focus));
        }

        #[test]
        fn test_remove_earlier_item_shifts_focus() {
            let mut form = unlocked_form();
            form.add_labor_item();
            form.add_labor_item();
            form.set_focus(Focus::LaborQuantity(2));
            assert!(form.remove_labor_item(0));
            assert_eq!(form.focus, Focus::LaborCode(1));
        }

        #[test]
        fn test_toggle_action() {
            let mut form = unlocked_form();
            form.toggle_action(0);
            assert_eq!(form.labor_items[0].action, ActionType::Removal);
            form.toggle_action(5);
        }
    }

    mod images {
        use super::*;

        #[test]
        fn test_attach_and_remove() {
            let mut form = unlocked_form();
            form.attach_image(image("a.png"));
            form.attach_image(image("b.png"));
            assert_eq!(form.image_cursor, 1);

            let removed = form.remove_selected_image().unwrap();
            assert_eq!(removed.name, "b.png");
            assert_eq!(form.image_cursor, 0);

            form.remove_selected_image();
            assert!(form.images.is_empty());
            assert!(form.remove_selected_image().is_none());
        }

        #[test]
        fn test_cursor_wraps() {
            let mut form = unlocked_form();
            form.attach_image(image("a.png"));
            form.attach_image(image("b.png"));
            form.next_image();
            assert_eq!(form.image_cursor, 0);
            form.prev_image();
            assert_eq!(form.image_cursor, 1);
        }
    }

    #[test]
    fn test_snapshot_mirrors_form() {
        let mut form = unlocked_form();
        form.select_work_type();
        form.toggle_collaborator();
        form.labor_items[0].code.set_text("MO-7".to_string());
        form.labor_items[0].quantity.set_text("3".to_string());
        form.attach_image(image("a.png"));

        let report = form.snapshot();
        assert_eq!(report.work_order, "OS-1");
        assert_eq!(report.work_type, Some(WorkType::Energisa));
        assert_eq!(report.collaborators, vec!["Ana".to_string()]);
        assert_eq!(report.labor_items[0].code, "MO-7");
        assert_eq!(report.labor_items[0].quantity, 3);
        assert_eq!(report.labor_items[0].id, form.labor_items[0].id);
        assert_eq!(report.images.len(), 1);
    }

    #[test]
    fn test_reset_clears_everything_but_roster() {
        let mut form = unlocked_form();
        form.select_work_type();
        form.toggle_collaborator();
        form.add_labor_item();
        form.attach_image(image("a.png"));
        let old_id = form.labor_items[0].id;

        form.reset();

        assert_eq!(form.work_order.as_text(), "");
        assert!(form.work_type.is_none());
        assert!(form.collaborators.is_empty());
        assert!(form.images.is_empty());
        assert_eq!(form.labor_items.len(), 1);
        assert_eq!(form.labor_items[0].code.as_text(), "");
        assert_ne!(form.labor_items[0].id, old_id);
        assert_eq!(form.focus, Focus::WorkOrder);
        assert_eq!(form.roster, roster());
    }
}
