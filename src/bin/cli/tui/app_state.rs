use anyhow::Result;
use ratatui::prelude::Rect;
use uuid::Uuid;

use crate::app::App;
use flashdeck_lib::carousel::{Action, Session, SlotPosition, MIN_PLAYABLE_CARDS};
use flashdeck_lib::flashcards::{Card, CardDraft, CardField, DraftError};

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Carousel,
    Table,
    Form,
    ConfirmDelete,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormMode {
    New,
    Edit(Uuid),
    View,
}

pub struct TuiState {
    pub app: App,
    pub mode: Mode,

    // Carousel state, replaced whole on every input
    pub session: Session,

    // Card table state
    pub cards: Vec<Card>,
    pub table_selected: usize,

    // Card form state
    pub form_mode: FormMode,
    pub draft: CardDraft,
    pub form_field: CardField,
    pub form_errors: Vec<CardField>,

    // Slot areas for mouse hit-testing (updated each draw)
    pub slot_areas: Vec<(SlotPosition, Rect)>,

    pub flash_message: Option<String>,
    pub quit: bool,
}

impl TuiState {
    pub fn new(app: App) -> Result<Self> {
        let cards = app.list_cards()?;
        let session = Session::start(&cards);

        let flash_message = (!session.is_playable()).then(|| {
            format!(
                "Add {} more card(s) to start reviewing (press t)",
                MIN_PLAYABLE_CARDS.saturating_sub(session.deck().len())
            )
        });

        Ok(Self {
            app,
            mode: Mode::Carousel,
            session,
            cards,
            table_selected: 0,
            form_mode: FormMode::New,
            draft: CardDraft::default(),
            form_field: CardField::Front,
            form_errors: Vec::new(),
            slot_areas: Vec::new(),
            flash_message,
            quit: false,
        })
    }

    pub fn apply(&mut self, action: Action) {
        self.session = self.session.apply(action);
    }

    /// Flash a notice when the last input made the deck playable
    pub fn announce_if_playable(&mut self, was_playable: bool) {
        if was_playable || !self.session.is_playable() {
            return;
        }

        let in_play = self.session.deck().len();
        log::info!("Deck became playable with {} cards", in_play);
        self.flash_message = Some(format!("{} cards in play, review started", in_play));
    }

    pub fn select_slot(&mut self, position: SlotPosition) {
        self.session = self.session.select(position);
    }

    /// Slot under a screen cell; the middle card is drawn on top
    pub fn slot_at(&self, col: u16, row: u16) -> Option<SlotPosition> {
        let hit = |area: &Rect| {
            col >= area.x && col < area.x + area.width && row >= area.y && row < area.y + area.height
        };

        self.slot_areas
            .iter()
            .find(|(position, area)| *position == SlotPosition::Middle && hit(area))
            .or_else(|| self.slot_areas.iter().find(|(_, area)| hit(area)))
            .map(|(position, _)| *position)
    }

    // ==================== Card Table ====================

    pub fn reload_cards(&mut self) {
        match self.app.list_cards() {
            Ok(cards) => {
                self.cards = cards;
                if self.table_selected >= self.cards.len() {
                    self.table_selected = self.cards.len().saturating_sub(1);
                }
            }
            Err(e) => {
                self.flash_message = Some(format!("Error: {}", e));
            }
        }
    }

    pub fn open_table(&mut self) {
        self.reload_cards();
        self.mode = Mode::Table;
    }

    /// Leaving the table redraws the deck if it is not playable yet
    pub fn close_table(&mut self) {
        self.reload_cards();
        self.session = self.session.redraw(&self.cards);
        self.mode = Mode::Carousel;
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.cards.get(self.table_selected)
    }

    pub fn table_move_down(&mut self) {
        if !self.cards.is_empty() && self.table_selected < self.cards.len() - 1 {
            self.table_selected += 1;
        }
    }

    pub fn table_move_up(&mut self) {
        if self.table_selected > 0 {
            self.table_selected -= 1;
        }
    }

    // ==================== Card Form ====================

    pub fn open_new_form(&mut self) {
        self.open_form(FormMode::New, CardDraft::default());
    }

    pub fn open_edit_form(&mut self) {
        if let Some(card) = self.selected_card() {
            let (id, draft) = (card.id, CardDraft::from_card(card));
            self.open_form(FormMode::Edit(id), draft);
        }
    }

    pub fn open_view_form(&mut self) {
        if let Some(card) = self.selected_card() {
            let draft = CardDraft::from_card(card);
            self.open_form(FormMode::View, draft);
        }
    }

    fn open_form(&mut self, form_mode: FormMode, draft: CardDraft) {
        self.form_mode = form_mode;
        self.draft = draft;
        self.form_field = CardField::Front;
        self.form_errors.clear();
        self.mode = Mode::Form;
    }

    pub fn close_form(&mut self) {
        self.draft = CardDraft::default();
        self.form_errors.clear();
        self.mode = Mode::Table;
    }

    pub fn toggle_form_field(&mut self) {
        self.form_field = match self.form_field {
            CardField::Front => CardField::Back,
            CardField::Back => CardField::Front,
        };
    }

    pub fn form_input(&mut self, c: char) {
        if self.form_mode != FormMode::View {
            self.draft.field_mut(self.form_field).push(c);
        }
    }

    pub fn form_backspace(&mut self) {
        if self.form_mode != FormMode::View {
            self.draft.field_mut(self.form_field).pop();
        }
    }

    /// Validate and save the form; errors keep the form open
    pub fn submit_form(&mut self) {
        if let Err(DraftError::MissingFields(fields)) = self.draft.validate() {
            self.form_errors = fields;
            return;
        }

        let draft = std::mem::take(&mut self.draft);
        let result = match self.form_mode {
            FormMode::New => self.app.create_card(draft).map(|card| format!("Created \"{}\"", card.front)),
            FormMode::Edit(id) => match self.cards.iter().find(|c| c.id == id).cloned() {
                Some(card) => self.app.update_card(&card, draft).map(|_| "Card updated".to_string()),
                None => Ok("Card no longer exists".to_string()),
            },
            FormMode::View => Ok(String::new()),
        };

        match result {
            Ok(message) if !message.is_empty() => self.flash_message = Some(message),
            Ok(_) => {}
            Err(e) => self.flash_message = Some(format!("Error: {}", e)),
        }

        self.reload_cards();
        self.close_form();
    }

    // ==================== Delete ====================

    pub fn ask_delete(&mut self) {
        if self.selected_card().is_some() {
            self.mode = Mode::ConfirmDelete;
        }
    }

    pub fn confirm_delete(&mut self) {
        if let Some(card) = self.selected_card().cloned() {
            match self.app.delete_card(&card) {
                Ok(()) => self.flash_message = Some(format!("Deleted \"{}\"", card.front)),
                Err(e) => self.flash_message = Some(format!("Error: {}", e)),
            }
        }
        self.reload_cards();
        self.mode = Mode::Table;
    }
}
