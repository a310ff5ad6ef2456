use crate::generator::maintenance_note;
use crate::model::{Building, Floor, Hall, Property, PropertyStatus, PropertyType, Room};
use crate::query::{
    apply_property_edit, filter_properties, flatten, LocatedProperty, PropertyEdit, PropertyFilter,
};
use crate::session::User;
use chrono::NaiveDate;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Dashboard,
    Room,
    Inventory,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Floors,
    Halls,
    Rooms,
}

pub struct App {
    pub building: Building,
    pub user: User,
    pub today: NaiveDate,
    pub view: View,
    pub focus_panel: FocusPanel,
    pub selected_floor: usize,
    pub selected_hall: usize,
    pub selected_room: usize,
    pub selected_property: usize,
    pub selected_inventory: usize,
    pub inventory_type: Option<PropertyType>,     // None = "All"
    pub inventory_status: Option<PropertyStatus>, // None = "All"
    pub message: Option<String>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(building: Building, user: User, today: NaiveDate) -> Self {
        Self {
            building,
            user,
            today,
            view: View::Dashboard,
            focus_panel: FocusPanel::Floors,
            selected_floor: 0,
            selected_hall: 0,
            selected_room: 0,
            selected_property: 0,
            selected_inventory: 0,
            inventory_type: None,
            inventory_status: None,
            message: None,
            should_quit: false,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Dashboard => super::dashboard::draw_dashboard(frame, self),
            View::Room => super::dashboard::draw_room(frame, self),
            View::Inventory => super::dashboard::draw_inventory(frame, self),
        }
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                self.handle_key(key.code);
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        self.message = None;
        match self.view {
            View::Dashboard => self.handle_dashboard_keys(code),
            View::Room => self.handle_room_keys(code),
            View::Inventory => self.handle_inventory_keys(code),
        }
    }

    fn handle_dashboard_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.navigate_up(),
            KeyCode::Down | KeyCode::Char('j') => self.navigate_down(),
            KeyCode::Left | KeyCode::Char('h') => self.navigate_left(),
            KeyCode::Right | KeyCode::Char('l') => self.navigate_right(),
            KeyCode::Enter => self.enter_room(),
            KeyCode::Char('i') => {
                self.view = View::Inventory;
                self.selected_inventory = 0;
            }
            _ => {}
        }
    }

    fn handle_room_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => self.view = View::Dashboard,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_property = self.selected_property.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.current_room().map_or(0, |r| r.properties.len());
                if self.selected_property < count.saturating_sub(1) {
                    self.selected_property += 1;
                }
            }
            KeyCode::Char('s') => {
                if let Some(id) = self.selected_room_property().map(|p| p.id.clone()) {
                    self.toggle_status(&id);
                }
            }
            KeyCode::Char('n') => {
                if let Some(id) = self.selected_room_property().map(|p| p.id.clone()) {
                    self.stamp_maintenance(&id);
                }
            }
            _ => {}
        }
    }

    fn handle_inventory_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => self.view = View::Dashboard,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_inventory = self.selected_inventory.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.inventory().len();
                if self.selected_inventory < count.saturating_sub(1) {
                    self.selected_inventory += 1;
                }
            }
            KeyCode::Char('t') => {
                self.inventory_type = cycle(self.inventory_type, &PropertyType::ALL);
                self.selected_inventory = 0;
            }
            KeyCode::Char('f') => {
                self.inventory_status = cycle(self.inventory_status, &PropertyStatus::ALL);
                self.selected_inventory = 0;
            }
            KeyCode::Char('s') => {
                let id = self
                    .inventory()
                    .get(self.selected_inventory)
                    .map(|item| item.property.id.clone());
                if let Some(id) = id {
                    self.toggle_status(&id);
                    // the edited item may have left the filtered list
                    let count = self.inventory().len();
                    self.selected_inventory = self.selected_inventory.min(count.saturating_sub(1));
                }
            }
            _ => {}
        }
    }

    fn navigate_up(&mut self) {
        match self.focus_panel {
            FocusPanel::Floors => {
                if self.selected_floor > 0 {
                    self.selected_floor -= 1;
                    self.selected_hall = 0;
                    self.selected_room = 0;
                }
            }
            FocusPanel::Halls => {
                if self.selected_hall > 0 {
                    self.selected_hall -= 1;
                    self.selected_room = 0;
                }
            }
            FocusPanel::Rooms => self.selected_room = self.selected_room.saturating_sub(1),
        }
    }

    fn navigate_down(&mut self) {
        match self.focus_panel {
            FocusPanel::Floors => {
                if self.selected_floor < self.building.floors.len().saturating_sub(1) {
                    self.selected_floor += 1;
                    self.selected_hall = 0;
                    self.selected_room = 0;
                }
            }
            FocusPanel::Halls => {
                let count = self.current_floor().map_or(0, |f| f.halls.len());
                if self.selected_hall < count.saturating_sub(1) {
                    self.selected_hall += 1;
                    self.selected_room = 0;
                }
            }
            FocusPanel::Rooms => {
                let count = self.current_hall().map_or(0, |h| h.rooms.len());
                if self.selected_room < count.saturating_sub(1) {
                    self.selected_room += 1;
                }
            }
        }
    }

    fn navigate_left(&mut self) {
        match self.focus_panel {
            FocusPanel::Rooms => self.focus_panel = FocusPanel::Halls,
            FocusPanel::Halls => self.focus_panel = FocusPanel::Floors,
            FocusPanel::Floors => {}
        }
    }

    fn navigate_right(&mut self) {
        match self.focus_panel {
            FocusPanel::Floors => self.focus_panel = FocusPanel::Halls,
            FocusPanel::Halls => self.focus_panel = FocusPanel::Rooms,
            FocusPanel::Rooms => {}
        }
    }

    fn enter_room(&mut self) {
        // Enter on Floors or Halls only moves focus inward
        match self.focus_panel {
            FocusPanel::Rooms if self.current_room().is_some() => {
                self.view = View::Room;
                self.selected_property = 0;
            }
            _ => self.navigate_right(),
        }
    }

    fn apply_edit(&mut self, id: &str, edit: &PropertyEdit) {
        match apply_property_edit(&self.building, id, edit) {
            Ok(updated) => {
                self.building = updated;
                self.message = Some(format!("Updated {id}"));
            }
            Err(e) => {
                tracing::error!(error = %e, "edit failed");
                self.message = Some(e.to_string());
            }
        }
    }

    fn toggle_status(&mut self, id: &str) {
        let Some(status) = self.building.property(id).map(|p| p.status) else {
            return;
        };
        self.apply_edit(id, &PropertyEdit::status(status.toggled()));
    }

    fn stamp_maintenance(&mut self, id: &str) {
        let edit = PropertyEdit::default().with_notes(Some(maintenance_note(self.today)));
        self.apply_edit(id, &edit);
    }

    #[must_use]
    pub fn current_floor(&self) -> Option<&Floor> {
        self.building.floors.get(self.selected_floor)
    }

    #[must_use]
    pub fn current_hall(&self) -> Option<&Hall> {
        self.current_floor()
            .and_then(|f| f.halls.get(self.selected_hall))
    }

    #[must_use]
    pub fn current_room(&self) -> Option<&Room> {
        self.current_hall()
            .and_then(|h| h.rooms.get(self.selected_room))
    }

    #[must_use]
    pub fn selected_room_property(&self) -> Option<&Property> {
        self.current_room()
            .and_then(|r| r.properties.get(self.selected_property))
    }

    /// Properties of the location under focus, with a display name for it.
    #[must_use]
    pub fn scope(&self) -> (String, Vec<&Property>) {
        let building_scope = || ("Building".to_string(), self.building.properties().collect());

        match self.focus_panel {
            FocusPanel::Floors => self.current_floor().map_or_else(building_scope, |f| {
                (f.name.clone(), f.properties().collect())
            }),
            FocusPanel::Halls => self.current_hall().map_or_else(building_scope, |h| {
                (h.name.clone(), h.properties().collect())
            }),
            FocusPanel::Rooms => self.current_room().map_or_else(building_scope, |r| {
                (r.name.clone(), r.properties().collect())
            }),
        }
    }

    #[must_use]
    pub fn inventory_filter(&self) -> PropertyFilter {
        PropertyFilter::new()
            .property_type(self.inventory_type)
            .status(self.inventory_status)
    }

    /// Every property passing the inventory type and status filters.
    #[must_use]
    pub fn inventory(&self) -> Vec<LocatedProperty<'_>> {
        filter_properties(&flatten(&self.building), &self.inventory_filter())
    }

    /// "Floor 3 / Left Wing / Bay 2" for a flattened item.
    #[must_use]
    pub fn location_label(&self, item: &LocatedProperty<'_>) -> String {
        let hall = self.building.hall(item.floor_id, item.hall_id);
        let room = hall.and_then(|h| h.room(item.room_id));

        format!(
            "Floor {} / {} / {}",
            item.floor_id,
            hall.map_or("-", |h| h.name.as_str()),
            room.map_or("-", |r| r.name.as_str())
        )
    }
}

/// Steps through `None` ("All") and then each value in order.
fn cycle<T: Copy + PartialEq>(current: Option<T>, all: &[T]) -> Option<T> {
    match current {
        None => all.first().copied(),
        Some(value) => all
            .iter()
            .position(|v| *v == value)
            .and_then(|i| all.get(i + 1))
            .copied(),
    }
}
